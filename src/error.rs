use std::{io, path::PathBuf};

/// Errors raised around the miner: reading the database and writing results.
/// Mining itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read database")]
    Read(#[source] io::Error),

    #[error("line {line}: invalid item {token:?}")]
    Parse { line: usize, token: String },

    #[error("failed to write generators")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
