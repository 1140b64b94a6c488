use crate::model::Cents;

// нижний регистр "zero" (при заглавных остальных) намеренный:
// формат легальной строки суммы завязан на него
const LOW_NAMES: [&str; 20] = [
    "zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS_NAMES: [&str; 8] = [
    "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

// шести имён масштаба хватает на весь диапазон u64
const BIG_NAMES: [&str; 6] = [
    "Thousand", "Million", "Billion", "Trillion", "Quadrillion", "Quintillion",
];

/// Преобразует целое число в английскую словесную запись
/// ("One Hundred Twenty-Three").
///
/// Функция тотальна: определена для любого `i64`, включая `i64::MIN`
/// (модуль берётся в `u64`, переполнения нет). Отрицательные значения
/// получают префикс `negative`.
pub fn convert(num: i64) -> String {
    if num < 0 {
        return format!("negative {}", convert_groups(num.unsigned_abs()));
    }

    convert_groups(num as u64)
}

/// Словесная запись суммы для легальной строки квитанции:
/// `"<доллары> Dollars"`, при ненулевых центах плюс `" and <центы> Cents"`
pub fn amount_phrase(total: Cents) -> String {
    let dollars = (total / 100) as i64;
    let cents = (total % 100) as i64;

    let mut words = format!("{} Dollars", convert(dollars));
    if cents > 0 {
        words.push_str(" and ");
        words.push_str(&convert(cents));
        words.push_str(" Cents");
    }

    words
}

/// Разбирает модуль числа на группы по базе 1000, от младшей к старшей
fn convert_groups(mut num: u64) -> String {
    if num <= 999 {
        return convert999(num);
    }

    let mut s = String::new();
    let mut t = 0;
    while num > 0 {
        let group = num % 1000;

        // нулевая группа не даёт ни слов, ни слова масштаба,
        // но индекс масштаба всё равно продвигается
        if group != 0 {
            let mut s2 = convert999(group);
            if t > 0 {
                s2.push(' ');
                s2.push_str(BIG_NAMES[t - 1]);
            }

            if s.is_empty() {
                s = s2;
            } else {
                s = format!("{s2} {s}");
            }
        }

        num /= 1000;
        t += 1;
    }

    s
}

fn convert999(num: u64) -> String {
    let s2 = convert99(num % 100);
    if num <= 99 {
        return s2;
    }

    let s1 = format!("{} Hundred", LOW_NAMES[(num / 100) as usize]);
    if num % 100 == 0 {
        s1
    } else {
        format!("{s1} {s2}")
    }
}

fn convert99(num: u64) -> String {
    if num < 20 {
        return LOW_NAMES[num as usize].to_string();
    }

    let s = TENS_NAMES[(num / 10 - 2) as usize];
    if num % 10 == 0 {
        s.to_string()
    } else {
        format!("{s}-{}", LOW_NAMES[(num % 10) as usize])
    }
}
