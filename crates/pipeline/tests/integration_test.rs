//! Integration tests for the pipeline.
//!
//! These tests run the filters over a common watchlist produced by the
//! aggregator, the way the orchestrator does.

use pipeline::filters::*;
use pipeline::{filter_common_watchlist, sort_films, FilterCriteria, FilterPipeline, SortKey};
use watchlist_core::{intersect_watchlists, CommonWatchlist, Movie, Watchlist};

fn detailed(slug: &str, year: u16, rating: f32, minutes: u32, genres: &[&str]) -> Movie {
    Movie::partial(slug, slug, Some(year))
        .with_rating(rating)
        .with_duration(minutes)
        .with_genres(genres.iter().copied())
}

fn create_test_setup() -> CommonWatchlist {
    let films = vec![
        detailed("heat-1995", 1995, 4.5, 170, &["Crime", "Thriller"]),
        detailed("brick", 2005, 3.6, 110, &["Mystery", "Crime"]),
        detailed("alien", 1979, 4.3, 117, &["Horror", "Science Fiction"]),
        detailed("paddington-2", 2017, 4.4, 104, &["Comedy", "Family"]),
        Movie::partial("obscure-short", "Obscure Short", None),
    ];

    let alice = Watchlist::with_films("alice", films.clone());
    let mut bob_films = films;
    bob_films.reverse();
    bob_films.push(Movie::partial("only-bob", "Only Bob", Some(2020)));
    let bob = Watchlist::with_films("bob", bob_films);

    intersect_watchlists(&[alice, bob]).unwrap()
}

fn slugs(films: &[watchlist_core::CommonFilm]) -> Vec<&str> {
    films.iter().map(|f| f.movie.slug.as_str()).collect()
}

#[test]
fn test_rating_and_duration_example() {
    let common = CommonWatchlist::new(
        vec!["a".to_string()],
        vec![
            watchlist_core::CommonFilm {
                movie: Movie::partial("good", "Good", None).with_rating(4.5).with_duration(90),
                users: vec!["a".to_string()],
            },
            watchlist_core::CommonFilm {
                movie: Movie::partial("meh", "Meh", None).with_rating(3.0).with_duration(80),
                users: vec!["a".to_string()],
            },
        ],
    );

    let filtered = filter_common_watchlist(common, 4.0, Some(100)).unwrap();

    assert_eq!(slugs(&filtered), vec!["good"]);
}

#[test]
fn test_zero_and_unbounded_returns_everything() {
    let common = create_test_setup();
    let expected = common.films().to_vec();

    let filtered = filter_common_watchlist(common, 0.0, None).unwrap();

    assert_eq!(filtered, expected);
}

#[test]
fn test_full_criteria() {
    let criteria = FilterCriteria::new(4.0, Some(150))
        .with_years(Some(1975), Some(2010))
        .with_genres(["horror", "crime"]);

    let filtered = criteria.apply(create_test_setup().into_films()).unwrap();

    // heat runs too long, brick is rated too low, paddington is too recent
    assert_eq!(slugs(&filtered), vec!["alien"]);
    assert_eq!(filtered[0].users, vec!["alice", "bob"]);
}

#[test]
fn test_manual_pipeline_then_sort() {
    let pipeline = FilterPipeline::new()
        .add_filter(MinimumRatingFilter::new(3.5))
        .add_filter(MaximumDurationFilter::unbounded())
        .add_filter(ReleaseYearFilter::new(Some(1990), None));

    let mut filtered = pipeline.apply(create_test_setup().into_films()).unwrap();
    sort_films(&mut filtered, SortKey::Duration);

    assert_eq!(slugs(&filtered), vec!["paddington-2", "brick", "heat-1995"]);
}

#[test]
fn test_partial_movies_dropped_by_real_thresholds() {
    let filtered = filter_common_watchlist(create_test_setup(), 1.0, None).unwrap();

    assert!(!slugs(&filtered).contains(&"obscure-short"));
    assert_eq!(filtered.len(), 4);
}
