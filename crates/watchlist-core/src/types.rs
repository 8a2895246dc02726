//! Core domain types for watchlists.
//!
//! A `Movie` is identified by its slug. A `Watchlist` is one user's set of
//! movies (keyed by slug, insertion ordered) and a `CommonWatchlist` is the
//! intersection of several watchlists.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier of a film on the site (e.g. "parasite-2019")
pub type FilmSlug = String;

// =============================================================================
// Movie
// =============================================================================

/// A film as scraped from the site.
///
/// Watchlist pages only carry the slug, title and year. The remaining
/// fields are filled in from the film's own page and stay `None` (or empty)
/// until then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub slug: FilmSlug,
    pub title: String,
    pub year: Option<u16>,
    pub director: Option<String>,
    pub genres: Vec<String>,
    /// Average member rating on a 0.5 - 5.0 scale
    pub average_rating: Option<f32>,
    pub duration_minutes: Option<u32>,
}

impl Movie {
    /// Create a partial movie from what a watchlist page shows
    pub fn partial(slug: impl Into<FilmSlug>, title: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            year,
            director: None,
            genres: Vec::new(),
            average_rating: None,
            duration_minutes: None,
        }
    }

    /// Set the average rating (builder style, mostly for tests and fixtures)
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.average_rating = Some(rating);
        self
    }

    /// Set the runtime in minutes
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Set the genres
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// True once details from the film page have been merged in
    pub fn has_details(&self) -> bool {
        self.average_rating.is_some() || self.duration_minutes.is_some() || self.director.is_some()
    }

    /// "Title (Year)" or just the title when the year is unknown
    pub fn display_title(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({})", self.title, year),
            None => self.title.clone(),
        }
    }
}

// =============================================================================
// Watchlist
// =============================================================================

/// A single (user, movie) pair, borrowed from a `Watchlist`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchlistEntry<'a> {
    pub user: &'a str,
    pub movie: &'a Movie,
}

/// One user's watchlist.
///
/// Behaves as a set keyed by slug: inserting a slug that is already present
/// keeps the first occurrence. Iteration follows insertion order, which is
/// the order films appeared on the site.
#[derive(Debug, Clone, Serialize)]
pub struct Watchlist {
    pub username: String,
    films: Vec<Movie>,
    #[serde(skip)]
    positions: HashMap<FilmSlug, usize>,
}

impl Watchlist {
    /// Creates an empty watchlist for `username`
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            films: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Build a watchlist from films, dropping duplicate slugs
    pub fn with_films(username: impl Into<String>, films: impl IntoIterator<Item = Movie>) -> Self {
        let mut watchlist = Self::new(username);
        watchlist.extend(films);
        watchlist
    }

    /// Insert a film; returns false if its slug was already present
    pub fn insert(&mut self, movie: Movie) -> bool {
        if self.positions.contains_key(&movie.slug) {
            return false;
        }
        self.positions.insert(movie.slug.clone(), self.films.len());
        self.films.push(movie);
        true
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.positions.contains_key(slug)
    }

    pub fn get(&self, slug: &str) -> Option<&Movie> {
        self.positions.get(slug).map(|&idx| &self.films[idx])
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// Films in insertion order
    pub fn films(&self) -> &[Movie] {
        &self.films
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.films.iter().map(|m| m.slug.as_str())
    }

    /// Every film paired with this watchlist's user
    pub fn entries(&self) -> impl Iterator<Item = WatchlistEntry<'_>> {
        self.films.iter().map(move |movie| WatchlistEntry {
            user: &self.username,
            movie,
        })
    }

    pub fn into_films(self) -> Vec<Movie> {
        self.films
    }
}

impl Extend<Movie> for Watchlist {
    fn extend<T: IntoIterator<Item = Movie>>(&mut self, iter: T) {
        for movie in iter {
            self.insert(movie);
        }
    }
}

// =============================================================================
// Common Watchlist
// =============================================================================

/// A film present in every participating watchlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonFilm {
    pub movie: Movie,
    /// Users holding this film, in the order the users were supplied
    pub users: Vec<String>,
}

/// Intersection of several users' watchlists.
///
/// Films keep the insertion order of the first user's list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonWatchlist {
    usernames: Vec<String>,
    films: Vec<CommonFilm>,
}

impl CommonWatchlist {
    pub fn new(usernames: Vec<String>, films: Vec<CommonFilm>) -> Self {
        Self { usernames, films }
    }

    /// Users whose watchlists were intersected
    pub fn usernames(&self) -> &[String] {
        &self.usernames
    }

    pub fn films(&self) -> &[CommonFilm] {
        &self.films
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommonFilm> {
        self.films.iter()
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&CommonFilm> {
        self.films.iter().find(|f| f.movie.slug == slug)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.films.iter().map(|f| f.movie.slug.as_str())
    }

    /// Replace partial movies with detailed ones that share their slug.
    ///
    /// Movies whose slug is not in the common watchlist are ignored.
    /// Returns how many films were updated.
    pub fn apply_details(&mut self, movies: impl IntoIterator<Item = Movie>) -> usize {
        let mut details: HashMap<FilmSlug, Movie> =
            movies.into_iter().map(|m| (m.slug.clone(), m)).collect();

        let mut updated = 0;
        for film in &mut self.films {
            if let Some(movie) = details.remove(&film.movie.slug) {
                film.movie = movie;
                updated += 1;
            }
        }
        updated
    }

    pub fn into_films(self) -> Vec<CommonFilm> {
        self.films
    }
}

impl<'a> IntoIterator for &'a CommonWatchlist {
    type Item = &'a CommonFilm;
    type IntoIter = std::slice::Iter<'a, CommonFilm>;

    fn into_iter(self) -> Self::IntoIter {
        self.films.iter()
    }
}
