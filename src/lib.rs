//! Strength Rescaler - Team attack/defense ratings on a 1-10 scale
//!
//! Reads a `team,attack,defense` table, min-max scales both rating columns
//! against every row but the last, and writes the scaled table.

pub mod config;
pub mod data;
pub mod stats;

pub use config::RescaleConfig;
pub use data::{DataProcessor, Dataset, Header, ProcessorError, Row, ScaledRow, ScaledTable};
pub use stats::{Bounds, ScaleCalculator};
