//! Crate error type
//!
//! Only the surrounding layer (file loading, parsing) can fail; check
//! findings are data, never errors, and the engine itself is total.

use std::path::PathBuf;

use crate::parser::ParseError;

/// Errors from loading graphs
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
