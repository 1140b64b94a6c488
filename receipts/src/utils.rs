use crate::error::ReceiptError;
use crate::model::Cents;

/// Парсит денежную сумму из журнала в центы.
///
/// Запятые считаются разделителями тысяч и отбрасываются ("1,234.56"),
/// дробная часть — не больше двух знаков, отрицательные суммы не принимаются.
pub(crate) fn parse_amount(raw: &str) -> Result<Cents, ReceiptError> {
    let cleaned = raw.trim().replace([' ', ','], "");

    if cleaned.is_empty() {
        return Err(ReceiptError::InvalidAmount("empty amount".into()));
    }
    if cleaned.starts_with('-') {
        return Err(ReceiptError::InvalidAmount(format!("negative amount: {cleaned}")));
    }

    let mut split = cleaned.split('.');
    // cleaned точно не пусто, так что ошибки здесь быть не может
    let int_part = split.next().unwrap();
    let dec_part = split.next().unwrap_or("");
    if split.next().is_some() {
        // больше одной точки — странный формат
        return Err(ReceiptError::InvalidAmount(format!("too many dots in amount: {cleaned}")));
    }

    let int_part: u64 = int_part.parse()?;

    let dec_part: u64 = match dec_part.len() {
        0 => 0,
        1 => {
            let d = dec_part
                .chars()
                .next()
                .and_then(|c| c.to_digit(10))
                .ok_or_else(|| ReceiptError::InvalidAmount(format!("invalid fractional part: {cleaned}")))?;
            d as u64 * 10
        },
        2 => {
            dec_part
                .parse()?
        },
        _ => {
            return Err(ReceiptError::InvalidAmount(format!("too many fractional digits in amount: {cleaned}")));
        }
    };

    Ok(int_part * 100 + dec_part)
}

/// Форматирует сумму в центах в человекочитаемый формат с двумя знаками
pub(crate) fn format_minor_units(value: Cents) -> String {
    let units = value / 100;
    let frac = value % 100;

    format!("{units}.{frac:02}")
}
