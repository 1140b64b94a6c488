use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::csv_parser::ProjectsData;
use crate::model::{Cents, LineItem, Payment, Receipt};
use crate::num2words;

static FILENAME_RE: Lazy<Regex> = Lazy::new(|| {
    // в имени файла остаются только латинские буквы и цифры
    Regex::new("[^a-zA-Z0-9]+").unwrap()
});

/// Собирает квитанции из сгруппированных платежей.
///
/// Номера квитанций выдаются последовательно от `start_number`
/// в порядке обхода групп (ключи жертвователей по возрастанию).
pub fn build_receipts(
    groups: BTreeMap<String, Vec<Payment>>,
    projects: &ProjectsData,
    start_number: u32,
) -> Vec<Receipt> {
    let mut receipts = Vec::with_capacity(groups.len());

    let mut number = start_number;
    for (_, payments) in groups {
        receipts.push(build_receipt(number, payments, projects));
        number += 1;
    }

    receipts
}

/// Одна квитанция из платежей одного жертвователя.
///
/// Невычитаемые платежи выбрасываются целиком: их нет ни в таблице,
/// ни в одной из итоговых сумм.
fn build_receipt(number: u32, payments: Vec<Payment>, projects: &ProjectsData) -> Receipt {
    let mut items = Vec::new();
    let mut deductible_total: Cents = 0;
    let mut total: Cents = 0;
    let mut donor_name = String::new();

    let mut seq = 0;
    for p in payments {
        donor_name = p.donor_name.clone();

        if !p.deductible {
            continue;
        }

        deductible_total += p.amount;
        total += p.amount;

        seq += 1;
        items.push(LineItem {
            seq,
            date: p.date,
            project_name: projects.name(&p.project_code),
            project_code: p.project_code,
            amount: p.amount,
        });
    }

    Receipt::new(number, donor_name, items, deductible_total, total)
}

impl Receipt {
    /// Легальная строка суммы, печатается над таблицей платежей
    pub fn amount_sentence(&self) -> String {
        format!(
            "Payment received from {} in the amount of {} for Sponsored Projects listed below.",
            self.donor_name,
            num2words::amount_phrase(self.total),
        )
    }

    /// Имя выходного файла: `{номер}-{имя жертвователя без спецсимволов}.pdf`
    pub fn output_path(&self, folder: &Path) -> PathBuf {
        let name = FILENAME_RE.replace_all(&self.donor_name, "");
        folder.join(format!("{}-{}.pdf", self.number, name))
    }
}
