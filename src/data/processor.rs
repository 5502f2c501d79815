//! Data Processor Module
//! Rescales a strength dataset and drives the read-rescale-write run.

use thiserror::Error;

use super::loader::{Dataset, Header, LoaderError, TableLoader};
use super::writer::{TableWriter, WriterError};
use crate::config::RescaleConfig;
use crate::stats::{Bounds, CalculatorError, ScaleCalculator};

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Calculator(#[from] CalculatorError),
    #[error(transparent)]
    Writer(#[from] WriterError),
}

/// One team's ratings on the 1-10 scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledRow {
    pub team: String,
    pub attack: i64,
    pub defense: i64,
}

impl ScaledRow {
    pub fn new(team: &str, attack: i64, defense: i64) -> Self {
        Self {
            team: team.to_string(),
            attack,
            defense,
        }
    }
}

/// Output table: the input header plus one scaled row per input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledTable {
    pub header: Header,
    pub rows: Vec<ScaledRow>,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub rows_written: usize,
    pub bounds: Bounds,
}

/// Rescaling pipeline.
pub struct DataProcessor;

impl DataProcessor {
    /// Scale every row, the last one included, against bounds taken from
    /// all rows but the last. Row order is preserved.
    pub fn rescale(header: &Header, dataset: &Dataset) -> Result<ScaledTable, CalculatorError> {
        let bounds = Bounds::from_dataset(dataset)?;
        Self::rescale_with(header, dataset, &bounds)
    }

    /// Scale every row against precomputed bounds.
    pub fn rescale_with(
        header: &Header,
        dataset: &Dataset,
        bounds: &Bounds,
    ) -> Result<ScaledTable, CalculatorError> {
        let rows = dataset
            .rows()
            .iter()
            .map(|row| -> Result<ScaledRow, CalculatorError> {
                Ok(ScaledRow::new(
                    &row.team,
                    ScaleCalculator::scale_attack(row.attack, bounds)?,
                    ScaleCalculator::scale_defense(row.defense, bounds)?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ScaledTable {
            header: header.clone(),
            rows,
        })
    }

    /// Load the input table, rescale it and replace the output table.
    ///
    /// Nothing is written unless loading and rescaling both succeed.
    pub fn run(config: &RescaleConfig) -> Result<RunSummary, ProcessorError> {
        let (header, dataset) = TableLoader::load_file(&config.input_path)?;
        log::info!(
            "Loaded {} rows from {} with columns {:?}",
            dataset.len(),
            config.input_path.display(),
            header.columns
        );

        let bounds = Bounds::from_dataset(&dataset)?;
        log::info!(
            "Bounds: attack [{}, {}], defense [{}, {}]",
            bounds.min_attack,
            bounds.max_attack,
            bounds.min_defense,
            bounds.max_defense
        );

        let table = Self::rescale_with(&header, &dataset, &bounds)?;
        TableWriter::write_file(&config.output_path, &table)?;
        log::info!(
            "Wrote {} rescaled rows to {}",
            table.rows.len(),
            config.output_path.display()
        );

        Ok(RunSummary {
            rows_written: table.rows.len(),
            bounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;

    fn dataset(rows: &[(&str, f64, f64)]) -> Dataset {
        Dataset::from(
            rows.iter()
                .map(|(team, attack, defense)| Row::new(team, *attack, *defense))
                .collect::<Vec<_>>(),
        )
    }

    fn header() -> Header {
        Header::new("team", "attack", "defense")
    }

    #[test]
    fn test_rescale_reference_example() {
        let data = dataset(&[("A", 10.0, 5.0), ("B", 20.0, 15.0), ("C", 15.0, 10.0)]);
        let table = DataProcessor::rescale(&header(), &data).unwrap();

        assert_eq!(table.header, header());
        assert_eq!(
            table.rows,
            vec![
                ScaledRow::new("A", 1, 10),
                ScaledRow::new("B", 10, 1),
                ScaledRow::new("C", 6, 6),
            ]
        );
    }

    #[test]
    fn test_rescale_last_row_extreme_does_not_shift_others() {
        let teams = [("A", 1.2, 0.8), ("B", 1.6, 1.1), ("C", 1.4, 0.9)];
        let base = dataset(&[teams[0], teams[1], teams[2], ("X", 1.0, 1.0)]);
        let extreme = dataset(&[teams[0], teams[1], teams[2], ("X", 500.0, -500.0)]);

        let a = DataProcessor::rescale(&header(), &base).unwrap();
        let b = DataProcessor::rescale(&header(), &extreme).unwrap();

        assert_eq!(a.rows[..3], b.rows[..3]);
        assert_ne!(a.rows[3], b.rows[3]);
    }

    #[test]
    fn test_rescale_degenerate_columns_score_ten() {
        let data = dataset(&[("A", 2.0, 3.0), ("B", 2.0, 3.0), ("C", 7.0, -1.0)]);
        let table = DataProcessor::rescale(&header(), &data).unwrap();

        assert!(table.rows.iter().all(|r| r.attack == 10 && r.defense == 10));
    }

    #[test]
    fn test_rescale_single_row_is_empty_range() {
        let data = dataset(&[("A", 1.0, 1.0)]);
        assert!(matches!(
            DataProcessor::rescale(&header(), &data),
            Err(CalculatorError::EmptyRange { rows: 1 })
        ));
    }

    #[test]
    fn test_rescale_overflowing_bounds_is_error_not_zero() {
        let data = dataset(&[("A", -1.7e308, 1.0), ("B", 1.7e308, 2.0), ("C", 1.7e308, 3.0)]);
        assert!(matches!(
            DataProcessor::rescale(&header(), &data),
            Err(CalculatorError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_rescale_keeps_row_count_and_order() {
        let data = dataset(&[("Z", 1.0, 1.0), ("M", 2.0, 2.0), ("A", 3.0, 3.0)]);
        let table = DataProcessor::rescale(&header(), &data).unwrap();

        let teams: Vec<&str> = table.rows.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(teams, vec!["Z", "M", "A"]);
    }
}
