use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use thiserror::Error;
use wordfreq_logging::wf_debug;

use crate::decode::{decode_text, DecodeError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

/// Read the whole file at `path` and decode it as `encoding`.
pub fn load_text(path: &Path, encoding: &'static Encoding) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    wf_debug!("Read {} bytes from {:?}", bytes.len(), path);

    decode_text(&bytes, encoding).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
