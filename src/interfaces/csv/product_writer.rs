use crate::domain::product::LoanProduct;
use crate::error::Result;
use std::io::Write;

/// Writes a loan catalog in the same layout `ProductReader` reads.
pub struct ProductWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ProductWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_products<'a>(&mut self, products: impl IntoIterator<Item = &'a LoanProduct>) -> Result<()> {
        for product in products {
            self.writer.serialize(product)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
