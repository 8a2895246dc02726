//! Filter on runtime.

use crate::traits::Filter;
use anyhow::Result;
use watchlist_core::CommonFilm;

/// Keeps films no longer than `max_minutes`.
///
/// `None` means no upper bound. Films with an unknown runtime are kept
/// only when the filter is unbounded.
pub struct MaximumDurationFilter {
    max_minutes: Option<u32>,
}

impl MaximumDurationFilter {
    pub fn new(max_minutes: Option<u32>) -> Self {
        Self { max_minutes }
    }

    /// A filter that keeps everything
    pub fn unbounded() -> Self {
        Self::new(None)
    }

    pub fn max_minutes(&self) -> Option<u32> {
        self.max_minutes
    }

    fn keeps(&self, film: &CommonFilm) -> bool {
        match (self.max_minutes, film.movie.duration_minutes) {
            (None, _) => true,
            (Some(max), Some(minutes)) => minutes <= max,
            (Some(_), None) => false,
        }
    }
}

impl Filter for MaximumDurationFilter {
    fn name(&self) -> &str {
        "MaximumDurationFilter"
    }

    fn apply(&self, films: Vec<CommonFilm>) -> Result<Vec<CommonFilm>> {
        Ok(films.into_iter().filter(|film| self.keeps(film)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchlist_core::Movie;

    fn film(slug: &str, minutes: Option<u32>) -> CommonFilm {
        let movie = Movie::partial(slug, slug, None);
        CommonFilm {
            movie: match minutes {
                Some(m) => movie.with_duration(m),
                None => movie,
            },
            users: vec![],
        }
    }

    #[test]
    fn test_maximum_duration_filter() {
        let films = vec![film("short", Some(85)), film("long", Some(201)), film("edge", Some(120))];

        let filtered = MaximumDurationFilter::new(Some(120)).apply(films).unwrap();

        let slugs: Vec<&str> = filtered.iter().map(|f| f.movie.slug.as_str()).collect();
        assert_eq!(slugs, vec!["short", "edge"]);
    }

    #[test]
    fn test_unbounded_keeps_unknown_runtime() {
        let films = vec![film("unknown", None), film("long", Some(600))];

        assert_eq!(MaximumDurationFilter::unbounded().apply(films.clone()).unwrap().len(), 2);
        assert_eq!(MaximumDurationFilter::new(Some(700)).apply(films).unwrap().len(), 1);
    }
}
