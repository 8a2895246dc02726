//! Display ordering for filtered films.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use watchlist_core::CommonFilm;

/// What to order films by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Highest average rating first
    #[default]
    Rating,
    /// Shortest runtime first
    Duration,
    /// Newest first
    Year,
    /// Alphabetical, ignoring case
    Title,
}

/// Sort `films` in place by `key`.
///
/// Films missing the sorted value go last. The sort is stable, so ties
/// keep their watchlist order.
pub fn sort_films(films: &mut [CommonFilm], key: SortKey) {
    match key {
        SortKey::Rating => films.sort_by(|a, b| {
            unknown_last(a.movie.average_rating, b.movie.average_rating, |x, y| {
                y.total_cmp(&x)
            })
        }),
        SortKey::Duration => films.sort_by(|a, b| {
            unknown_last(a.movie.duration_minutes, b.movie.duration_minutes, |x, y| {
                x.cmp(&y)
            })
        }),
        SortKey::Year => films.sort_by(|a, b| {
            unknown_last(a.movie.year, b.movie.year, |x, y| y.cmp(&x))
        }),
        SortKey::Title => {
            films.sort_by_cached_key(|film| film.movie.title.to_lowercase())
        }
    }
}

fn unknown_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchlist_core::Movie;

    fn film(title: &str, year: Option<u16>, rating: Option<f32>, minutes: Option<u32>) -> CommonFilm {
        let mut movie = Movie::partial(title.to_lowercase(), title, year);
        movie.average_rating = rating;
        movie.duration_minutes = minutes;
        CommonFilm {
            movie,
            users: vec![],
        }
    }

    fn titles(films: &[CommonFilm]) -> Vec<&str> {
        films.iter().map(|f| f.movie.title.as_str()).collect()
    }

    fn sample() -> Vec<CommonFilm> {
        vec![
            film("Heat", Some(1995), Some(4.2), Some(170)),
            film("alien", Some(1979), Some(4.3), None),
            film("Obscure", None, None, Some(75)),
            film("Brick", Some(2005), Some(3.6), Some(110)),
        ]
    }

    #[test]
    fn test_sort_by_rating() {
        let mut films = sample();
        sort_films(&mut films, SortKey::Rating);
        assert_eq!(titles(&films), vec!["alien", "Heat", "Brick", "Obscure"]);
    }

    #[test]
    fn test_sort_by_duration() {
        let mut films = sample();
        sort_films(&mut films, SortKey::Duration);
        assert_eq!(titles(&films), vec!["Obscure", "Brick", "Heat", "alien"]);
    }

    #[test]
    fn test_sort_by_year() {
        let mut films = sample();
        sort_films(&mut films, SortKey::Year);
        assert_eq!(titles(&films), vec!["Brick", "Heat", "alien", "Obscure"]);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let mut films = sample();
        sort_films(&mut films, SortKey::Title);
        assert_eq!(titles(&films), vec!["alien", "Brick", "Heat", "Obscure"]);
    }
}
