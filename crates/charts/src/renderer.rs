//! Chart rendering with plotters.

use crate::data::{bars, label_area_width, runtime_range, scatter_points, RATING_RANGE};
use crate::error::{ChartError, Result};
use crate::options::{ChartFormat, ChartKind, ChartOptions};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use watchlist_core::CommonFilm;

const FONT: &str = "sans-serif";
const POINT_COLOR: RGBColor = RGBColor(31, 119, 180);
const BAR_COLOR: RGBColor = RGBColor(255, 127, 14);

/// Draws one kind of chart onto any plotters backend
pub trait ChartRenderer {
    fn name(&self) -> &'static str;

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        films: &[CommonFilm],
        options: &ChartOptions,
    ) -> Result<()>;
}

/// Runtime vs. average rating, one labelled point per film
pub struct ScatterChartRenderer;

impl ChartRenderer for ScatterChartRenderer {
    fn name(&self) -> &'static str {
        "scatter"
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        films: &[CommonFilm],
        options: &ChartOptions,
    ) -> Result<()> {
        root.fill(&WHITE).map_err(ChartError::drawing)?;

        let points = scatter_points(films);
        debug!("Plotting {} of {} films", points.len(), films.len());

        let mut chart = ChartBuilder::on(root)
            .caption(&options.title, (FONT, 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(runtime_range(&points), RATING_RANGE)
            .map_err(ChartError::drawing)?;

        chart
            .configure_mesh()
            .x_desc("Runtime (minutes)")
            .y_desc("Average rating")
            .draw()
            .map_err(ChartError::drawing)?;

        chart
            .draw_series(points.iter().map(|point| {
                EmptyElement::at((point.runtime, point.rating))
                    + Circle::new((0, 0), 4, POINT_COLOR.filled())
                    + Text::new(point.label.clone(), (6, -14), (FONT, 12).into_font())
            }))
            .map_err(ChartError::drawing)?;

        Ok(())
    }
}

/// Average rating per title as horizontal bars, first film on top
pub struct BarChartRenderer;

impl ChartRenderer for BarChartRenderer {
    fn name(&self) -> &'static str {
        "bar"
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        films: &[CommonFilm],
        options: &ChartOptions,
    ) -> Result<()> {
        root.fill(&WHITE).map_err(ChartError::drawing)?;

        let bars = bars(films);
        debug!("Plotting {} of {} films", bars.len(), films.len());

        let rows = bars.len().max(1);
        // Row 0 is drawn at the bottom
        let row_of = |idx: usize| (bars.len() - 1 - idx) as i32;
        let label_of = |row: i32| {
            usize::try_from(row)
                .ok()
                .and_then(|row| bars.len().checked_sub(row + 1))
                .and_then(|idx| bars.get(idx))
                .map(|bar| bar.label.clone())
                .unwrap_or_default()
        };

        let mut chart = ChartBuilder::on(root)
            .caption(&options.title, (FONT, 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(label_area_width(&bars))
            .build_cartesian_2d(RATING_RANGE, (0..rows as i32).into_segmented())
            .map_err(ChartError::drawing)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(rows)
            .y_label_formatter(&|value| match value {
                SegmentValue::CenterOf(row) => label_of(*row),
                _ => String::new(),
            })
            .x_desc("Average rating")
            .draw()
            .map_err(ChartError::drawing)?;

        chart
            .draw_series(bars.iter().enumerate().map(|(idx, bar)| {
                let row = row_of(idx);
                let mut rect = Rectangle::new(
                    [(0.0, SegmentValue::Exact(row)), (bar.rating, SegmentValue::Exact(row + 1))],
                    BAR_COLOR.filled(),
                );
                rect.set_margin(3, 3, 0, 0);
                rect
            }))
            .map_err(ChartError::drawing)?;

        chart
            .draw_series(bars.iter().enumerate().map(|(idx, bar)| {
                Text::new(
                    format!("{:.2}", bar.rating),
                    (bar.rating, SegmentValue::CenterOf(row_of(idx))),
                    (FONT, 12).into_font(),
                )
            }))
            .map_err(ChartError::drawing)?;

        Ok(())
    }
}

/// Render `films` as configured by `options` and return the written path.
///
/// The format follows the file extension (`.png` or `.svg`). The output
/// directory is created when missing. Films without the plotted values
/// are skipped; with nothing left the chart is drawn with empty axes.
pub fn render_chart(films: &[CommonFilm], options: &ChartOptions) -> Result<PathBuf> {
    let path = options.output_path();
    let format = options.format()?;

    if !options.output_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&options.output_dir)?;
    }

    match options.kind {
        ChartKind::Scatter => render_with(&ScatterChartRenderer, films, options, &path, format)?,
        ChartKind::Bar => render_with(&BarChartRenderer, films, options, &path, format)?,
    }

    Ok(path)
}

fn render_with<R: ChartRenderer>(
    renderer: &R,
    films: &[CommonFilm],
    options: &ChartOptions,
    path: &Path,
    format: ChartFormat,
) -> Result<()> {
    let size = (options.width, options.height);

    match format {
        ChartFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            renderer.draw(&root, films, options)?;
            root.present().map_err(ChartError::drawing)?;
        }
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            renderer.draw(&root, films, options)?;
            root.present().map_err(ChartError::drawing)?;
        }
    }

    info!(
        "Rendered {} chart of {} films to {}",
        renderer.name(),
        films.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_names() {
        assert_eq!(ScatterChartRenderer.name(), "scatter");
        assert_eq!(BarChartRenderer.name(), "bar");
    }
}
