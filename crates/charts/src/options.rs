//! Chart options and output format selection.

use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which chart to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartKind {
    /// Runtime on x, average rating on y, one labelled point per film
    #[default]
    Scatter,
    /// One horizontal bar per film, length = average rating
    Bar,
}

/// Image format, chosen from the output file's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => Ok(ChartFormat::Png),
            Some("svg") => Ok(ChartFormat::Svg),
            _ => Err(ChartError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: String,
    pub kind: ChartKind,
    pub width: u32,
    pub height: u32,
    /// Created if missing
    pub output_dir: PathBuf,
    pub file_name: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Common watchlist".to_string(),
            kind: ChartKind::Scatter,
            width: 1280,
            height: 800,
            output_dir: PathBuf::from("."),
            file_name: "common_watchlist.png".to_string(),
        }
    }
}

impl ChartOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Where the chart will be written
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    pub fn format(&self) -> Result<ChartFormat> {
        ChartFormat::from_path(&self.output_path())
    }
}
