//! # Charts
//!
//! Renders a filtered common watchlist as an image.
//!
//! - **options**: `ChartOptions`, `ChartKind`, format by file extension
//! - **data**: films → points and bars, axis ranges
//! - **renderer**: `ChartRenderer` implementations and `render_chart`
//!
//! ```ignore
//! use charts::{render_chart, ChartKind, ChartOptions};
//!
//! let options = ChartOptions::default()
//!     .with_kind(ChartKind::Bar)
//!     .with_output_dir("plots")
//!     .with_file_name("ratings.svg");
//! let path = render_chart(&films, &options)?;
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod renderer;

pub use error::{ChartError, Result};
pub use options::{ChartFormat, ChartKind, ChartOptions};
pub use renderer::{render_chart, BarChartRenderer, ChartRenderer, ScatterChartRenderer};
