use std::io;
use thiserror::Error;

/// Sampling itself can't fail; the only error is the line source failing to read.
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("failed to read input line")]
    Read(#[from] io::Error),
}
