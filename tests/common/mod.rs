#![allow(dead_code)]

use loancalc::domain::product::LoanProduct;
use rust_decimal::Decimal;
use std::io::Error;
use std::path::{Path, PathBuf};

pub fn consumer_product() -> LoanProduct {
    LoanProduct {
        id: 3,
        name: "Crédito de Consumo".to_string(),
        minimum_amount: Decimal::from(1_000_000),
        maximum_amount: Decimal::from(25_000_000),
        annual_interest_rate: Decimal::new(21, 2),
    }
}

/// Writes a two-product catalog into `dir` and returns its path.
pub fn write_catalog(dir: &Path) -> Result<PathBuf, Error> {
    let path = dir.join("catalog.csv");
    let mut wtr = csv::Writer::from_path(&path)?;
    wtr.write_record([
        "id",
        "name",
        "minimum_amount",
        "maximum_amount",
        "annual_interest_rate",
    ])?;
    wtr.write_record(["1", "Libranza", "5000000", "50000000", "0.165"])?;
    wtr.write_record(["5", "Crédito Educativo", "2000000", "60000000", "0.09"])?;
    wtr.flush()?;
    Ok(path)
}
