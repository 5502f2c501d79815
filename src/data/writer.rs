//! Strength Table Writer Module
//! Renders scaled tables and replaces the destination file in one step.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

use super::processor::ScaledTable;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to render strength table: {0}")]
    Csv(#[from] csv::Error),
}

/// Serializes scaled tables to comma-separated text.
pub struct TableWriter;

impl TableWriter {
    /// Header line first, then one line per row, each ending in `\n`.
    /// Fields are written as-is, never quoted.
    pub fn render(table: &ScaledTable) -> Result<Vec<u8>, WriterError> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(&table.header.columns)?;
        for row in &table.rows {
            writer.write_record([
                row.team.clone(),
                row.attack.to_string(),
                row.defense.to_string(),
            ])?;
        }

        writer
            .into_inner()
            .map_err(|e| WriterError::Csv(e.into_error().into()))
    }

    /// Write the rendered table to `path`, overwriting it.
    ///
    /// Content goes to a temporary file next to `path` first and is then
    /// renamed over it, so a failed write never leaves a partial table.
    pub fn write_file(path: impl AsRef<Path>, table: &ScaledTable) -> Result<(), WriterError> {
        let path = path.as_ref();
        let content = Self::render(table)?;
        let io_err = |source: std::io::Error| WriterError::Io {
            path: path.display().to_string(),
            source,
        };

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(&content).map_err(io_err)?;
        tmp.flush().map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;

        log::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::processor::ScaledRow;
    use crate::data::Header;
    use std::fs;

    fn table() -> ScaledTable {
        ScaledTable {
            header: Header::new("Team", "Attack", "Defense"),
            rows: vec![
                ScaledRow::new("Arsenal", 10, 1),
                ScaledRow::new("home_advantage", -3, 12),
            ],
        }
    }

    fn render_text(table: &ScaledTable) -> String {
        String::from_utf8(TableWriter::render(table).unwrap()).unwrap()
    }

    #[test]
    fn test_render_lines() {
        assert_eq!(
            render_text(&table()),
            "Team,Attack,Defense\nArsenal,10,1\nhome_advantage,-3,12\n"
        );
    }

    #[test]
    fn test_render_never_quotes_fields() {
        let odd = ScaledTable {
            header: Header::new("Team \"name\"", "Attack", "Defense"),
            rows: vec![ScaledRow::new("O'Higgins \"B\"", 4, 7)],
        };
        assert_eq!(
            render_text(&odd),
            "Team \"name\",Attack,Defense\nO'Higgins \"B\",4,7\n"
        );
    }

    #[test]
    fn test_render_header_only() {
        let empty = ScaledTable {
            header: Header::new("a", "b", "c"),
            rows: Vec::new(),
        };
        assert_eq!(render_text(&empty), "a,b,c\n");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale content that is longer than the new table\n").unwrap();

        TableWriter::write_file(&path, &table()).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            render_text(&table())
        );
    }

    #[test]
    fn test_write_file_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let result = TableWriter::write_file(&path, &table());
        assert!(matches!(result, Err(WriterError::Io { .. })));
        assert!(!path.exists());
    }
}
