use std::collections::{BTreeMap, HashMap};
use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};

use crate::error::ReceiptError;
use crate::model::Payment;
use crate::utils::parse_amount;

impl From<csv::Error> for ReceiptError {
    fn from(e: csv::Error) -> Self {
        ReceiptError::Csv(e)
    }
}

/// Строка журнала платежей до типизации, колонки как есть
#[derive(Debug, Default)]
struct PaymentRecord {
    donor_key: String,
    donor_name: String,
    date: String,
    project_code: String,
    amount: String,
    deductible: String,
}

impl PaymentRecord {
    /// Распаковывает колонки из записи csv-файла в структуру.
    ///
    /// Журнал позиционный и без заголовка; короткая строка — ошибка.
    fn from_string_record(row: &StringRecord) -> Result<Self, ReceiptError> {
        let get = |idx: usize, name: &'static str| -> Result<String, ReceiptError> {
            row.get(idx)
                .map(|s| s.trim().to_string())
                .ok_or(ReceiptError::MissingField(name))
        };

        Ok(PaymentRecord {
            donor_key: get(0, "donor key")?,
            donor_name: get(1, "donor name")?,
            date: get(2, "payment date")?,
            project_code: get(3, "project code")?,
            amount: get(4, "amount")?,
            deductible: get(5, "deductible flag")?,
        })
    }

    fn into_payment(self) -> Result<Payment, ReceiptError> {
        let date = parse_payment_date(&self.date)?;
        let amount = parse_amount(&self.amount)?;
        let deductible = self.deductible.to_uppercase() == "Y";

        Ok(Payment::new(
            self.donor_key,
            self.donor_name,
            date,
            self.project_code,
            amount,
            deductible,
        ))
    }
}

/// Даты журнала: американский формат, запасной вариант - ISO
fn parse_payment_date(raw: &str) -> Result<NaiveDate, ReceiptError> {
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%m/%d/%Y") {
        return Ok(d);
    }

    Ok(NaiveDate::parse_from_str(raw, "%Y-%m-%d")?)
}

/// Журнал платежей целиком
#[derive(Debug)]
pub struct PaymentsData {
    payments: Vec<Payment>,
}

impl PaymentsData {
    pub fn parse<R: Read>(reader: R) -> Result<Self, ReceiptError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut payments = Vec::new();
        for result in rdr.records() {
            let record = result?;

            if record.iter().all(|f| f.trim().is_empty()) {
                continue;
            }

            let rec = PaymentRecord::from_string_record(&record)?;
            payments.push(rec.into_payment()?);
        }

        Ok(PaymentsData { payments })
    }

    /// Группирует платежи по ключу жертвователя.
    ///
    /// BTreeMap даёт обход групп в лексикографическом порядке ключей,
    /// поэтому нумерация квитанций детерминирована.
    pub fn by_donor(self) -> BTreeMap<String, Vec<Payment>> {
        let mut groups: BTreeMap<String, Vec<Payment>> = BTreeMap::new();

        for p in self.payments {
            groups.entry(p.donor_key.clone()).or_default().push(p);
        }

        groups
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

/// Справочник проектов: код → название
#[derive(Debug)]
pub struct ProjectsData {
    names: HashMap<String, String>,
}

impl ProjectsData {
    pub fn parse<R: Read>(reader: R) -> Result<Self, ReceiptError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut names = HashMap::new();
        for result in rdr.records() {
            let record = result?;

            if record.iter().all(|f| f.trim().is_empty()) {
                continue;
            }

            let code = record
                .get(0)
                .ok_or(ReceiptError::MissingField("project code"))?
                .trim();
            let name = record
                .get(1)
                .ok_or(ReceiptError::MissingField("project name"))?
                .trim();

            names.insert(code.to_string(), name.to_string());
        }

        Ok(ProjectsData { names })
    }

    /// Название проекта по коду; пустая строка, если код неизвестен
    pub fn name(&self, code: &str) -> String {
        self.names.get(code).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
