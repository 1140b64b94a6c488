use chrono::NaiveDate;
use std::fmt;

use crate::utils::format_minor_units;

/// Тип для хранения денежной суммы в центах, unsigned
pub type Cents = u64;

/// Один платёж из журнала пожертвований.
///
/// Строки журнала с одинаковым ключом жертвователя собираются
/// в одну квитанцию.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// ключ жертвователя (первая колонка журнала, группировочный)
    pub donor_key: String,
    /// имя жертвователя в человекочитаемом формате
    pub donor_name: String,
    /// дата платежа
    pub date: NaiveDate,
    /// код проекта
    pub project_code: String,
    /// денежная сумма (в центах)
    pub amount: Cents,
    /// учитывается ли платёж как налоговый вычет
    pub deductible: bool,
}

impl Payment {
    /// Go to [`Payment`]
    pub fn new(
        donor_key: String,
        donor_name: String,
        date: NaiveDate,
        project_code: String,
        amount: Cents,
        deductible: bool,
    ) -> Self {
        Payment {
            donor_key,
            donor_name,
            date,
            project_code,
            amount,
            deductible,
        }
    }
}

/// Одна строка таблицы квитанции
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// порядковый номер строки (с единицы)
    pub seq: usize,
    /// дата платежа
    pub date: NaiveDate,
    /// код проекта
    pub project_code: String,
    /// название проекта из справочника (пустое, если код не найден)
    pub project_name: String,
    /// денежная сумма (в центах)
    pub amount: Cents,
}

/// Центральная/корневая структура библиотеки, содержащая одну квитанцию.
///
/// При обычном использовании собирается из сгруппированных платежей
/// (см. [`crate::receipt::build_receipts`]), а уже потом рендерится в PDF.
#[derive(Debug, PartialEq, Eq)]
pub struct Receipt {
    /// номер квитанции
    pub number: u32,
    /// имя жертвователя
    pub donor_name: String,
    /// строки таблицы (только вычитаемые платежи)
    pub items: Vec<LineItem>,
    /// сумма вычитаемых платежей (в центах)
    pub deductible_total: Cents,
    /// общая сумма квитанции (в центах)
    pub total: Cents,
}

impl Receipt {
    /// Go to [`Receipt`]
    pub fn new(
        number: u32,
        donor_name: String,
        items: Vec<LineItem>,
        deductible_total: Cents,
        total: Cents,
    ) -> Self {
        Receipt {
            number,
            donor_name,
            items,
            deductible_total,
            total,
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<4} {:<10} {:<10} {:<30} {:>12}",
            self.seq,
            self.date.format("%m/%d/%Y"),
            self.project_code,
            self.project_name,
            format_minor_units(self.amount),
        )
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Receipt #: {} {}",
            self.number, self.donor_name,
        )?;

        for item in &self.items {
            writeln!(f, "{item}")?;
        }

        write!(f, "Total: {}", format_minor_units(self.total))
    }
}
