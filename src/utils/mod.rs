/// Module containing environment variable helpers
pub mod config;
/// Module containing keyed row lookup in `.xlsx` workbooks
pub mod excel;
/// Module containing utilities for generating unique identifiers
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use excel::*;
pub use id::*;
pub use logger::*;
