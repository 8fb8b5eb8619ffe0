use std::path::{Path, PathBuf};

use thiserror::Error;
use wordfreq_logging::wf_debug;

use crate::count::FrequencyTable;
use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Single-line JSON object.
    #[default]
    Compact,
    /// Indented JSON, one entry per line.
    Pretty,
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to serialize frequency table: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: PersistError,
    },
}

pub fn render_table(table: &FrequencyTable, style: OutputStyle) -> Result<Vec<u8>, WriteError> {
    let mut bytes = match style {
        OutputStyle::Compact => serde_json::to_vec(table)?,
        OutputStyle::Pretty => serde_json::to_vec_pretty(table)?,
    };
    bytes.push(b'\n');
    Ok(bytes)
}

/// Serialize `table` as JSON and atomically replace `path` with it.
pub fn write_table(
    table: &FrequencyTable,
    path: &Path,
    style: OutputStyle,
) -> Result<PathBuf, WriteError> {
    let bytes = render_table(table, style)?;
    wf_debug!("Serialized {} entries into {} bytes", table.len(), bytes.len());

    AtomicFileWriter::new(path.to_path_buf())
        .write(&bytes)
        .map_err(|source| WriteError::Persist {
            path: path.to_path_buf(),
            source,
        })
}
