use crate::domain::product::LoanProduct;
use crate::error::Result;
use std::io::Read;

/// Reads loan products from a CSV catalog.
///
/// Expected header: `id,name,minimum_amount,maximum_amount,annual_interest_rate`.
/// Whitespace around fields is trimmed.
pub struct ProductReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ProductReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes and validates each row.
    pub fn products(self) -> impl Iterator<Item = Result<LoanProduct>> {
        self.reader
            .into_deserialize::<LoanProduct>()
            .map(|row| -> Result<LoanProduct> {
                let product = row?;
                product.validate()?;
                Ok(product)
            })
    }
}
