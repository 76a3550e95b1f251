//! Inbound/outbound adapters: CSV catalogs and schedules, JSON rendering and
//! display formatting.

pub mod csv;
pub mod format;
pub mod json;
