//! Stats module - rating bounds and scaling

mod calculator;

pub use calculator::{Bounds, CalculatorError, ScaleCalculator};
