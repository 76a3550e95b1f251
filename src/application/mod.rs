//! Application services orchestrating the catalog port and the amortization
//! engine.
//!
//! `LoanCatalogService` owns product CRUD and search; `LoanCalculatorService`
//! resolves a product by name and hands a snapshot to the pure engine.

pub mod calculator;
pub mod catalog;
