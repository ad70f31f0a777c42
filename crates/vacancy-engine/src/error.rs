//! Error types for vacancy-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VacancyError {
    #[error("Invalid clock time: {0}")]
    InvalidClockTime(String),

    #[error("Invalid day of week: {0}")]
    InvalidDay(String),
}

pub type Result<T> = std::result::Result<T, VacancyError>;
