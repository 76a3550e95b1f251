use crate::domain::calculation::{AmortizationEntry, CalculationResult, CalculationSummary};
use crate::domain::money::Money;
use crate::error::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ScheduleRecord {
    month: u32,
    due_date: NaiveDate,
    monthly_payment: Decimal,
    principal_paid: Decimal,
    interest_paid: Decimal,
    remaining_balance: Decimal,
}

impl From<&AmortizationEntry> for ScheduleRecord {
    fn from(entry: &AmortizationEntry) -> Self {
        Self {
            month: entry.month,
            due_date: entry.due_date,
            monthly_payment: cents(entry.monthly_payment),
            principal_paid: cents(entry.principal_paid),
            interest_paid: cents(entry.interest_paid),
            remaining_balance: cents(entry.remaining_balance.non_negative()),
        }
    }
}

#[derive(Serialize)]
struct SummaryRecord {
    principal: Decimal,
    total_payment: Decimal,
    total_interest: Decimal,
    monthly_payment: Decimal,
    annual_interest_rate: Decimal,
    num_payments: u32,
    final_payment_date: NaiveDate,
}

impl From<&CalculationSummary> for SummaryRecord {
    fn from(summary: &CalculationSummary) -> Self {
        Self {
            principal: cents(summary.principal),
            total_payment: cents(summary.total_payment),
            total_interest: cents(summary.total_interest),
            monthly_payment: cents(summary.monthly_payment),
            annual_interest_rate: summary.annual_interest_rate,
            num_payments: summary.num_payments,
            final_payment_date: summary.final_payment_date,
        }
    }
}

/// Rounded to cents and always printed with two decimals.
fn cents(amount: Money) -> Decimal {
    let mut value = amount.to_cents().value();
    value.rescale(2);
    value
}

/// Writes calculation results as CSV, amounts rounded to cents without
/// currency symbols so the output stays machine readable.
///
/// A full result is two tables, each with its own header, separated by an
/// empty line: the one-row summary first, then the schedule.
pub struct ScheduleWriter<W: Write> {
    sink: W,
}

impl<W: Write> ScheduleWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_calculation(&mut self, result: &CalculationResult) -> Result<()> {
        self.write_table([SummaryRecord::from(&result.summary)])?;
        self.sink.write_all(b"\n")?;
        self.write_schedule(&result.schedule)
    }

    pub fn write_schedule(&mut self, schedule: &[AmortizationEntry]) -> Result<()> {
        self.write_table(schedule.iter().map(ScheduleRecord::from))
    }

    fn write_table<T: Serialize>(&mut self, records: impl IntoIterator<Item = T>) -> Result<()> {
        let mut writer = csv::Writer::from_writer(&mut self.sink);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
