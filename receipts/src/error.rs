use std::{error::Error, io::Error as IoError, fmt};
use chrono::ParseError as ChronoParseError;

/// Ошибки при формировании квитанций
#[derive(Debug)]
pub enum ReceiptError {
    // обёртки

    /// обёртка csv::Error
    Csv(csv::Error),

    /// обёртка serde_yaml::Error
    Yaml(serde_yaml::Error),
    /// обёртка chrono::ParseError
    Date(chrono::ParseError),
    /// обёртка std::num::ParseIntError
    Int(std::num::ParseIntError),
    /// обёртка std::io::Error
    Io(IoError),
    /// обёртка lopdf::Error
    Pdf(lopdf::Error),
    /// обёртка base64::DecodeError (логотип организации)
    Base64(base64::DecodeError),

    // логические ошибки

    /// ошибка при парсинге денежной суммы
    InvalidAmount(String),
    /// ошибка отсутствия обязательного поля
    MissingField(&'static str),
    /// очень общая ошибка плохих входных данных
    BadInput(String),
}

impl fmt::Display for ReceiptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptError::Csv(e) => write!(f, "CSV error: {e}"),
            ReceiptError::Yaml(e) => write!(f, "config parse error: {e}"),
            ReceiptError::Date(e) => write!(f, "date parse error: {e}"),
            ReceiptError::Int(e) => write!(f, "number parse error: {e}"),
            ReceiptError::Io(e) => write!(f, "io error: {e}"),
            ReceiptError::Pdf(e) => write!(f, "pdf error: {e}"),
            ReceiptError::Base64(e) => write!(f, "logo decode error: {e}"),
            ReceiptError::InvalidAmount(s) => write!(f, "invalid amount: {s}"),
            ReceiptError::MissingField(name) => write!(f, "missing field: {name}"),
            ReceiptError::BadInput(msg) => write!(f, "bad input: {msg}"),
        }
    }
}

impl Error for ReceiptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReceiptError::Csv(e) => Some(e),
            ReceiptError::Yaml(e) => Some(e),
            ReceiptError::Date(e) => Some(e),
            ReceiptError::Int(e) => Some(e),
            ReceiptError::Io(e) => Some(e),
            ReceiptError::Pdf(e) => Some(e),
            ReceiptError::Base64(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ChronoParseError> for ReceiptError {
    fn from(e: ChronoParseError) -> Self {
        ReceiptError::Date(e)
    }
}

impl From<std::num::ParseIntError> for ReceiptError {
    fn from(e: std::num::ParseIntError) -> Self {
        ReceiptError::Int(e)
    }
}

impl From<IoError> for ReceiptError {
    fn from(e: IoError) -> Self {
        ReceiptError::Io(e)
    }
}

impl From<serde_yaml::Error> for ReceiptError {
    fn from(e: serde_yaml::Error) -> Self {
        ReceiptError::Yaml(e)
    }
}

impl From<base64::DecodeError> for ReceiptError {
    fn from(e: base64::DecodeError) -> Self {
        ReceiptError::Base64(e)
    }
}
