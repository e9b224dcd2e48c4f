//! Errors raised at the input boundary.
//!
//! The store and the projections cannot fail; everything here comes from
//! turning raw input (form fields, script rows) into records and actions.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExpenseError>;

#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("amount too large: {0:?}")]
    AmountTooLarge(String),
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    #[error("unknown expense type: {0:?}")]
    UnknownType(String),
    #[error("unknown action: {0:?}")]
    UnknownAction(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
