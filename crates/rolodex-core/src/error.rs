use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("contact name is required")]
    EmptyName,
    #[error("phone number must consist of 10 digits: {0}")]
    InvalidPhone(String),
    #[error("invalid birthday {0}: expected YYYY.MM.DD")]
    InvalidBirthday(String),
    #[error("birthday cannot be a future date: {0}")]
    FutureBirthday(String),
    #[error("no such phone in record: {phone}; the record is: {record}")]
    PhoneNotInRecord { phone: String, record: String },
    #[error("phone not found: {0}")]
    PhoneNotFound(String),
    #[error("invalid upcoming days: {0}")]
    InvalidUpcomingDays(i64),
    #[error("invalid timestamp")]
    InvalidTimestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorKind {
    Validation,
    NotFound,
}

impl CoreError {
    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::PhoneNotFound(_) => CoreErrorKind::NotFound,
            CoreError::EmptyName
            | CoreError::InvalidPhone(_)
            | CoreError::InvalidBirthday(_)
            | CoreError::FutureBirthday(_)
            | CoreError::PhoneNotInRecord { .. }
            | CoreError::InvalidUpcomingDays(_)
            | CoreError::InvalidTimestamp => CoreErrorKind::Validation,
        }
    }
}
