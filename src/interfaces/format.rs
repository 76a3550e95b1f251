//! Display formatting for calculation results.
//!
//! Everything below the interfaces layer keeps exact decimals. The views here
//! turn results into `$1,234.56` strings through `Money`'s `Display`.

use crate::domain::calculation::{AmortizationEntry, CalculationResult, CalculationSummary};
use crate::domain::money::Money;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Currency string for a raw amount, e.g. `$465,568.87`.
pub fn format_currency(amount: Decimal) -> String {
    Money::new(amount).to_string()
}

/// Fractional rate as a percentage with two decimals, e.g. `16.50%`.
pub fn format_percent(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{percent:.2}%")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub total_payment: String,
    pub principal: String,
    pub total_interest: String,
    pub monthly_payment: String,
    pub annual_interest_rate: String,
    pub latest_date_of_payment_after_loan: String,
}

impl From<&CalculationSummary> for SummaryView {
    fn from(summary: &CalculationSummary) -> Self {
        Self {
            total_payment: format_currency(summary.total_payment.value()),
            principal: format_currency(summary.principal.value()),
            total_interest: format_currency(summary.total_interest.value()),
            monthly_payment: format_currency(summary.monthly_payment.value()),
            annual_interest_rate: format_percent(summary.annual_interest_rate),
            latest_date_of_payment_after_loan: summary
                .final_payment_date
                .format("%Y-%m-%d")
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryView {
    pub month: u32,
    pub due_date: String,
    pub monthly_payment: String,
    pub principal_paid: String,
    pub interest_paid: String,
    pub remaining_balance: String,
}

impl From<&AmortizationEntry> for EntryView {
    fn from(entry: &AmortizationEntry) -> Self {
        Self {
            month: entry.month,
            due_date: entry.due_date.format("%Y-%m-%d").to_string(),
            monthly_payment: format_currency(entry.monthly_payment.value()),
            principal_paid: format_currency(entry.principal_paid.value()),
            interest_paid: format_currency(entry.interest_paid.value()),
            remaining_balance: format_currency(entry.remaining_balance.non_negative().value()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationView {
    pub summary: SummaryView,
    pub amortization_schedule: Vec<EntryView>,
}

impl From<&CalculationResult> for CalculationView {
    fn from(result: &CalculationResult) -> Self {
        Self {
            summary: SummaryView::from(&result.summary),
            amortization_schedule: result.schedule.iter().map(EntryView::from).collect(),
        }
    }
}
