//! Error types for chart rendering.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// Creating the output directory failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The plotting backend failed (fonts, encoding, writing the image)
    #[error("Drawing error: {0}")]
    Drawing(String),

    /// The output file name does not end in `.png` or `.svg`
    #[error("Unsupported chart format for {}: expected .png or .svg", .0.display())]
    UnsupportedFormat(PathBuf),
}

impl ChartError {
    pub(crate) fn drawing(err: impl std::fmt::Display) -> Self {
        ChartError::Drawing(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
