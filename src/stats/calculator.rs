//! Scale Calculator Module
//! Computes rating bounds and maps raw ratings onto the 1-10 scale.

use polars::prelude::*;
use thiserror::Error;

use crate::config::{DEGENERATE_SCORE, HOME_ADVANTAGE_ROW, SCALE_FLOOR, SCALE_SPAN};
use crate::data::{Dataset, ATTACK_COL, DEFENSE_COL};

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Need at least 2 rows to compute bounds, found {rows}")]
    EmptyRange { rows: usize },
    #[error("Scaling {value} against [{min_val}, {max_val}] does not give a representable score")]
    OutOfRange {
        value: f64,
        min_val: f64,
        max_val: f64,
    },
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Domain of the linear map for each rating column.
///
/// The defense pair is stored inverted: `min_defense` holds the largest
/// defense rating and `max_defense` the smallest, so a higher raw defense
/// scales to a lower score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_attack: f64,
    pub max_attack: f64,
    pub min_defense: f64,
    pub max_defense: f64,
}

impl Bounds {
    /// Compute bounds over every row except the last one.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, CalculatorError> {
        let rows = dataset.len();
        let (excluded, kept) = match dataset.rows().split_last() {
            Some((excluded, kept)) if !kept.is_empty() => (excluded, kept),
            _ => return Err(CalculatorError::EmptyRange { rows }),
        };

        log::debug!("Excluding last row '{}' from bounds", excluded.team);
        if excluded.team != HOME_ADVANTAGE_ROW {
            log::warn!(
                "Last row is '{}', not '{}'; it is still excluded from bounds",
                excluded.team,
                HOME_ADVANTAGE_ROW
            );
        }

        let reference = dataset.to_frame()?.slice(0, kept.len());
        let (min_attack, max_attack) = Self::extent(&reference, ATTACK_COL)?;
        let (min_defense, max_defense) = Self::extent(&reference, DEFENSE_COL)?;

        Ok(Self {
            min_attack,
            max_attack,
            // Defense pair is stored swapped
            min_defense: max_defense,
            max_defense: min_defense,
        })
    }

    /// True (min, max) of a rating column.
    fn extent(frame: &DataFrame, name: &str) -> Result<(f64, f64), CalculatorError> {
        let values = frame.column(name)?.f64()?;
        match (values.min(), values.max()) {
            (Some(min), Some(max)) => Ok((min, max)),
            // Only for a column with no non-null values
            _ => Err(CalculatorError::EmptyRange { rows: frame.height() }),
        }
    }
}

/// Min-max scaling onto the integer target range.
pub struct ScaleCalculator;

impl ScaleCalculator {
    /// Map `value` from `[min_val, max_val]` onto 1..=10, rounding half away
    /// from zero. Values outside the domain extrapolate past the range.
    ///
    /// Fails when the arithmetic overflows, instead of saturating the cast.
    pub fn scale(value: f64, min_val: f64, max_val: f64) -> Result<i64, CalculatorError> {
        if max_val == min_val {
            return Ok(DEGENERATE_SCORE);
        }

        let scaled = (SCALE_FLOOR + (value - min_val) * SCALE_SPAN / (max_val - min_val)).round();
        if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
            return Err(CalculatorError::OutOfRange {
                value,
                min_val,
                max_val,
            });
        }
        Ok(scaled as i64)
    }

    pub fn scale_attack(value: f64, bounds: &Bounds) -> Result<i64, CalculatorError> {
        Self::scale(value, bounds.min_attack, bounds.max_attack)
    }

    pub fn scale_defense(value: f64, bounds: &Bounds) -> Result<i64, CalculatorError> {
        Self::scale(value, bounds.min_defense, bounds.max_defense)
    }
}
