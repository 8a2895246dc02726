//! Filter to keep only films in the requested genres.

use crate::traits::Filter;
use anyhow::Result;
use watchlist_core::CommonFilm;

/// Keeps films tagged with at least one of the given genres.
///
/// Matching ignores case. An empty genre list keeps every film.
pub struct GenreFilter {
    genres: Vec<String>,
}

impl GenreFilter {
    pub fn new<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            genres: genres
                .into_iter()
                .map(|g| g.as_ref().trim().to_lowercase())
                .filter(|g| !g.is_empty())
                .collect(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, films: Vec<CommonFilm>) -> Result<Vec<CommonFilm>> {
        if self.genres.is_empty() {
            return Ok(films);
        }

        let filtered = films
            .into_iter()
            .filter(|film| {
                film.movie
                    .genres
                    .iter()
                    .any(|genre| self.genres.contains(&genre.to_lowercase()))
            })
            .collect();
        Ok(filtered)
    }
}
