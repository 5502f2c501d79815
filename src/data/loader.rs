//! Strength Table Loader Module
//! Handles reading the team strength CSV into a header and an ordered dataset.

use polars::prelude::*;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Frame column holding the attack rating.
pub const ATTACK_COL: &str = "attack";
/// Frame column holding the defense rating.
pub const DEFENSE_COL: &str = "defense";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read strength table: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl LoaderError {
    fn parse(line: usize, reason: impl Into<String>) -> Self {
        LoaderError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// The three column names of the table, written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub columns: [String; 3],
}

impl Header {
    pub fn new(team: &str, attack: &str, defense: &str) -> Self {
        Self {
            columns: [team.to_string(), attack.to_string(), defense.to_string()],
        }
    }
}

/// One team's raw ratings.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub team: String,
    pub attack: f64,
    pub defense: f64,
}

impl Row {
    pub fn new(team: &str, attack: f64, defense: f64) -> Self {
        Self {
            team: team.to_string(),
            attack,
            defense,
        }
    }
}

/// Rows in input file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl Dataset {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&Row> {
        self.rows.last()
    }

    /// Build a polars frame with the `attack` and `defense` rating columns.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let attacks: Vec<f64> = self.rows.iter().map(|r| r.attack).collect();
        let defenses: Vec<f64> = self.rows.iter().map(|r| r.defense).collect();

        DataFrame::new(vec![
            Column::new(ATTACK_COL.into(), attacks),
            Column::new(DEFENSE_COL.into(), defenses),
        ])
    }
}

/// Reads strength tables from disk or from memory.
pub struct TableLoader;

impl TableLoader {
    /// Read the whole file, then parse it.
    pub fn load_file(path: impl AsRef<Path>) -> Result<(Header, Dataset), LoaderError> {
        let path = path.as_ref();
        log::debug!("Reading strength table from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse_str(&content)
    }

    /// Parse `team,attack,defense` text with a header line.
    ///
    /// Fields are split on bare commas with no quoting, and every record must
    /// have exactly three fields. Trailing empty lines are ignored; an empty
    /// line followed by more records is an error.
    pub fn parse_str(text: &str) -> Result<(Header, Dataset), LoaderError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .quoting(false)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let header = Self::parse_header(reader.headers().map_err(Self::csv_error)?)?;

        let mut rows = Vec::new();
        let mut last_line = 1;
        for result in reader.records() {
            let record = result.map_err(Self::csv_error)?;
            let line_no = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(last_line + 1);

            if line_no > last_line + 1 {
                return Err(LoaderError::parse(last_line + 1, "blank line inside table"));
            }
            rows.push(Self::parse_row(&record, line_no)?);
            last_line = line_no;
        }

        Ok((header, Dataset::from(rows)))
    }

    fn csv_error(err: csv::Error) -> LoaderError {
        let line = err.position().map(|p| p.line() as usize).unwrap_or(1);
        let reason = match err.kind() {
            csv::ErrorKind::UnequalLengths { len, .. } => {
                format!("expected 3 fields, found {}", len)
            }
            _ => err.to_string(),
        };
        LoaderError::parse(line, reason)
    }

    fn parse_header(record: &csv::StringRecord) -> Result<Header, LoaderError> {
        match (record.len(), record.get(0), record.get(1), record.get(2)) {
            (3, Some(team), Some(attack), Some(defense)) => Ok(Header::new(team, attack, defense)),
            (len, ..) => Err(LoaderError::parse(
                1,
                format!("expected 3 header fields, found {}", len),
            )),
        }
    }

    fn parse_row(record: &csv::StringRecord, line_no: usize) -> Result<Row, LoaderError> {
        let (Some(team), Some(attack), Some(defense)) = (record.get(0), record.get(1), record.get(2))
        else {
            return Err(LoaderError::parse(
                line_no,
                format!("expected 3 fields, found {}", record.len()),
            ));
        };

        let attack = Self::parse_rating(attack, line_no)?;
        let defense = Self::parse_rating(defense, line_no)?;

        Ok(Row::new(team, attack, defense))
    }

    fn parse_rating(field: &str, line_no: usize) -> Result<f64, LoaderError> {
        let value: f64 = field
            .parse()
            .map_err(|_| LoaderError::parse(line_no, format!("'{}' is not a number", field)))?;

        if !value.is_finite() {
            return Err(LoaderError::parse(
                line_no,
                format!("'{}' is not a finite number", field),
            ));
        }
        Ok(value)
    }
}
