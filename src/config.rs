//! Configuration Module
//! Fixed paths and scale constants for a rescale run.

use std::path::PathBuf;

/// Source table read by the default run.
pub const DEFAULT_INPUT_PATH: &str = "assets/team_strengths.csv";
/// Destination table written by the default run.
pub const DEFAULT_OUTPUT_PATH: &str = "assets/new_team_strengths.csv";

/// Lowest value of the target scale.
pub const SCALE_FLOOR: f64 = 1.0;
/// Width of the target scale (floor + span = 10).
pub const SCALE_SPAN: f64 = 9.0;
/// Score given when a column has no spread.
pub const DEGENERATE_SCORE: i64 = 10;

/// Name of the pseudo-team conventionally stored in the last row.
pub const HOME_ADVANTAGE_ROW: &str = "home_advantage";

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescaleConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for RescaleConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl RescaleConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}
