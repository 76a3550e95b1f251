use super::format::CalculationView;
use crate::domain::calculation::CalculationResult;
use crate::domain::product::LoanProduct;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Message<'a> {
    message: &'a str,
}

/// Writes the summary and schedule with display-formatted amounts.
pub fn write_calculation<W: Write>(writer: W, result: &CalculationResult) -> Result<()> {
    write_pretty(writer, &CalculationView::from(result))
}

pub fn write_products<W: Write>(writer: W, products: &[LoanProduct]) -> Result<()> {
    write_pretty(writer, products)
}

pub fn write_product<W: Write>(writer: W, product: &LoanProduct) -> Result<()> {
    write_pretty(writer, product)
}

pub fn write_message<W: Write>(writer: W, message: &str) -> Result<()> {
    write_pretty(writer, &Message { message })
}

fn write_pretty<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}
