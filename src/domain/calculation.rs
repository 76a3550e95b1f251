use super::money::Money;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters of a single calculation. Built per call by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub principal: Decimal,
    pub term_years: u32,
    /// Replaces the product's default rate for this calculation only.
    pub annual_rate_override: Option<Decimal>,
}

impl CalculationRequest {
    pub fn new(principal: Decimal, term_years: u32) -> Self {
        Self {
            principal,
            term_years,
            annual_rate_override: None,
        }
    }

    pub fn with_rate(mut self, annual_rate: Decimal) -> Self {
        self.annual_rate_override = Some(annual_rate);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculationSummary {
    pub principal: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub monthly_payment: Money,
    /// The rate actually applied, as a fraction.
    pub annual_interest_rate: Decimal,
    pub num_payments: u32,
    pub final_payment_date: NaiveDate,
}

/// One row of the amortization schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct AmortizationEntry {
    pub month: u32,
    pub due_date: NaiveDate,
    pub monthly_payment: Money,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub remaining_balance: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub summary: CalculationSummary,
    pub schedule: Vec<AmortizationEntry>,
}
