pub mod product_reader;
pub mod product_writer;
pub mod schedule_writer;
