//! Benchmarks for watchlist intersection
//!
//! Run with: cargo bench --package watchlist-core
//!
//! Uses synthetic watchlists sized like large real ones (a few thousand films).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use watchlist_core::{intersect_watchlists, Movie, Watchlist};

fn synthetic_watchlist(user: &str, size: usize, stride: usize) -> Watchlist {
    Watchlist::with_films(
        user,
        (0..size).map(|i| {
            let n = i * stride;
            Movie::partial(format!("film-{n}"), format!("Film {n}"), Some(1950 + (n % 70) as u16))
        }),
    )
}

fn bench_two_users(c: &mut Criterion) {
    let watchlists = vec![
        synthetic_watchlist("a", 3000, 2),
        synthetic_watchlist("b", 3000, 3),
    ];

    c.bench_function("intersect_two_users", |b| {
        b.iter(|| {
            let common = intersect_watchlists(black_box(&watchlists)).unwrap();
            black_box(common)
        })
    });
}

fn bench_five_users(c: &mut Criterion) {
    let watchlists: Vec<Watchlist> = (1..=5)
        .map(|i| synthetic_watchlist(&format!("user{i}"), 2000, i))
        .collect();

    c.bench_function("intersect_five_users", |b| {
        b.iter(|| {
            let common = intersect_watchlists(black_box(&watchlists)).unwrap();
            black_box(common)
        })
    });
}

criterion_group!(benches, bench_two_users, bench_five_users);
criterion_main!(benches);
