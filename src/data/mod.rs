//! Data module - strength table loading, rescaling and writing

mod loader;
mod processor;
mod writer;

pub use loader::{Dataset, Header, LoaderError, Row, TableLoader, ATTACK_COL, DEFENSE_COL};
pub use processor::{DataProcessor, ProcessorError, RunSummary, ScaledRow, ScaledTable};
pub use writer::{TableWriter, WriterError};
