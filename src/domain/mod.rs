//! Domain types and the pure amortization engine.

pub mod amortization;
pub mod calculation;
pub mod calendar;
pub mod money;
pub mod ports;
pub mod product;
