use crate::domain::money::Money;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("Loan product '{name}' not found")]
    ProductNotFound { name: String },
    #[error("Loan with id {id} not found")]
    LoanNotFound { id: u32 },
    #[error("No loan found matching name '{query}'")]
    NoMatch { query: String },
    #[error(
        "Requested amount {} is not within the allowed range ({} - {}) for this loan",
        display_amount(.requested),
        display_amount(.minimum),
        display_amount(.maximum)
    )]
    OutOfRange {
        requested: Decimal,
        minimum: Decimal,
        maximum: Decimal,
    },
    #[error("Loan term must be at least one year, got {years}")]
    InvalidTerm { years: u32 },
    #[error("Annual interest rate must not be negative, got {rate}")]
    InvalidRate { rate: Decimal },
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Arithmetic overflow: {0}")]
    Arithmetic(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoanError>;

fn display_amount(amount: &Decimal) -> String {
    Money::new(*amount).to_string()
}
