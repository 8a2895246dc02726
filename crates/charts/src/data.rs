//! Turning films into plottable values.
//!
//! Films missing a value the chart needs are left out here, so the
//! renderers only ever see complete points.

use std::ops::Range;
use watchlist_core::CommonFilm;

/// Ratings are on a 0-5 scale
pub const RATING_RANGE: Range<f64> = 0.0..5.0;

/// x axis used when there is nothing to plot
pub const DEFAULT_RUNTIME_RANGE: Range<f64> = 0.0..180.0;

const MIN_RUNTIME_PADDING: f64 = 5.0;

/// One film on the scatter chart
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub label: String,
    pub runtime: f64,
    pub rating: f64,
}

/// One film on the bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub rating: f64,
}

/// Films with both a runtime and an average rating
pub fn scatter_points<'a>(films: impl IntoIterator<Item = &'a CommonFilm>) -> Vec<ScatterPoint> {
    films
        .into_iter()
        .filter_map(|film| {
            let movie = &film.movie;
            Some(ScatterPoint {
                label: movie.display_title(),
                runtime: f64::from(movie.duration_minutes?),
                rating: f64::from(movie.average_rating?),
            })
        })
        .collect()
}

/// Films with an average rating
pub fn bars<'a>(films: impl IntoIterator<Item = &'a CommonFilm>) -> Vec<Bar> {
    films
        .into_iter()
        .filter_map(|film| {
            Some(Bar {
                label: film.movie.display_title(),
                rating: f64::from(film.movie.average_rating?),
            })
        })
        .collect()
}

/// x axis range covering every point, padded on both sides
pub fn runtime_range(points: &[ScatterPoint]) -> Range<f64> {
    if points.is_empty() {
        return DEFAULT_RUNTIME_RANGE;
    }

    let (min, max) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.runtime), hi.max(p.runtime))
    });
    let padding = ((max - min) * 0.05).max(MIN_RUNTIME_PADDING);

    (min - padding).max(0.0)..max + padding
}

/// Pixels reserved for bar labels, from the longest title
pub fn label_area_width(bars: &[Bar]) -> u32 {
    let longest = bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
    (longest as u32 * 7).clamp(60, 360)
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchlist_core::Movie;

    fn film(slug: &str, rating: Option<f32>, minutes: Option<u32>) -> CommonFilm {
        let mut movie = Movie::partial(slug, slug, Some(2000));
        movie.average_rating = rating;
        movie.duration_minutes = minutes;
        CommonFilm {
            movie,
            users: vec![],
        }
    }

    #[test]
    fn test_scatter_points_skip_incomplete_films() {
        let films = vec![
            film("full", Some(4.0), Some(100)),
            film("no-rating", None, Some(90)),
            film("no-runtime", Some(3.0), None),
        ];

        let points = scatter_points(&films);

        assert_eq!(
            points,
            vec![ScatterPoint {
                label: "full (2000)".to_string(),
                runtime: 100.0,
                rating: 4.0,
            }]
        );
    }

    #[test]
    fn test_bars_need_only_rating() {
        let films = vec![film("a", Some(4.0), None), film("b", None, Some(90))];

        let bars = bars(&films);

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].label, "a (2000)");
    }

    #[test]
    fn test_runtime_range() {
        assert_eq!(runtime_range(&[]), DEFAULT_RUNTIME_RANGE);

        let points = scatter_points(&[
            film("short", Some(3.0), Some(80)),
            film("long", Some(4.0), Some(200)),
        ]);
        let range = runtime_range(&points);
        assert!(range.start < 80.0);
        assert!(range.end > 200.0);
    }

    #[test]
    fn test_single_point_gets_padding() {
        let points = scatter_points(&[film("one", Some(3.0), Some(2))]);
        let range = runtime_range(&points);

        assert_eq!(range.start, 0.0);
        assert_eq!(range.end, 7.0);
    }

    #[test]
    fn test_label_area_width() {
        assert_eq!(label_area_width(&[]), 60);
        let long = Bar {
            label: "x".repeat(200),
            rating: 1.0,
        };
        assert_eq!(label_area_width(&[long]), 360);
    }
}
