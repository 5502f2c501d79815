//! Strength Rescaler
//!
//! Rescales `assets/team_strengths.csv` into `assets/new_team_strengths.csv`.

use anyhow::Context;
use strength_rescaler::{DataProcessor, RescaleConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = RescaleConfig::default();
    let summary = DataProcessor::run(&config).with_context(|| {
        format!(
            "Failed to rescale {} into {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    log::info!("Done: {} rows rescaled", summary.rows_written);
    Ok(())
}
