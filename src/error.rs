use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RdtscError {
    /// Writing or flushing the output line failed.
    #[error("failed to write sample: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RdtscError>;
