use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use serde::Deserialize;

use crate::error::ReceiptError;

/// Конфигурация генератора (YAML-файл).
///
/// Ключи представления (название организации, казначей, подвалы) необязательны:
/// отсутствующий ключ просто убирает соответствующий элемент с квитанции.
/// Для рабочих ключей действуют значения по умолчанию, см. [`Config::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// год, за который выдаются квитанции
    pub receipt_year: i32,
    /// дата квитанции в готовом для печати виде
    pub receipt_date: String,
    /// номер первой квитанции
    pub receipt_start_number: u32,
    /// путь к журналу платежей
    pub payments_file: PathBuf,
    /// путь к справочнику проектов
    pub projects_file: PathBuf,
    /// каталог для готовых PDF
    pub output_folder: PathBuf,

    pub org_name: Option<String>,
    pub org_address: Option<String>,
    #[serde(rename = "orgEIN")]
    pub org_ein: Option<String>,
    pub org_email: Option<String>,
    pub org_website: Option<String>,
    /// логотип организации: PNG в base64
    pub org_logo: Option<String>,

    pub treasurer_name: Option<String>,
    pub treasurer_phone: Option<String>,
    pub treasurer_email: Option<String>,

    pub receipt_title: Option<String>,
    pub items_table_title: Option<String>,
    pub total_text: Option<String>,
    /// заголовки пяти колонок таблицы платежей
    pub table_columns: Vec<String>,
    pub footer1_text: Option<String>,
    pub footer2_text: Option<String>,
    pub footer3_text: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let today = Local::now();

        Config {
            receipt_year: today.year(),
            receipt_date: today.format("%m/%d/%Y").to_string(),
            receipt_start_number: 100001,
            payments_file: PathBuf::from("payments.csv"),
            projects_file: PathBuf::from("projects.csv"),
            output_folder: PathBuf::from("."),

            org_name: None,
            org_address: None,
            org_ein: None,
            org_email: None,
            org_website: None,
            org_logo: None,

            treasurer_name: None,
            treasurer_phone: None,
            treasurer_email: None,

            receipt_title: None,
            items_table_title: None,
            total_text: None,
            table_columns: vec![
                "No".to_string(),
                "Date".to_string(),
                "Project".to_string(),
                "Project Name".to_string(),
                "Amount".to_string(),
            ],
            footer1_text: None,
            footer2_text: None,
            footer3_text: None,
        }
    }
}

impl Config {
    pub fn parse<R: Read>(reader: R) -> Result<Self, ReceiptError> {
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ReceiptError> {
        let file = File::open(path)?;
        Self::parse(file)
    }
}
