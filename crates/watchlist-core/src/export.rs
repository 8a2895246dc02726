//! CSV export of a common watchlist.

use crate::error::ExportError;
use crate::types::CommonFilm;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One CSV row; list-valued columns are joined with ", "
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    slug: &'a str,
    title: &'a str,
    year: Option<u16>,
    director: Option<&'a str>,
    average_rating: Option<f32>,
    duration_minutes: Option<u32>,
    genres: String,
    users: String,
}

impl<'a> From<&'a CommonFilm> for ExportRow<'a> {
    fn from(film: &'a CommonFilm) -> Self {
        let movie = &film.movie;
        Self {
            slug: &movie.slug,
            title: &movie.title,
            year: movie.year,
            director: movie.director.as_deref(),
            average_rating: movie.average_rating,
            duration_minutes: movie.duration_minutes,
            genres: movie.genres.join(", "),
            users: film.users.join(", "),
        }
    }
}

/// Write films as CSV (with a header row) to any writer
pub fn write_csv<'a, W, I>(films: I, writer: W) -> Result<(), ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a CommonFilm>,
{
    let mut writer = csv::Writer::from_writer(writer);
    let mut rows = 0usize;
    for film in films {
        writer.serialize(ExportRow::from(film))?;
        rows += 1;
    }
    if rows == 0 {
        // serialize() emits the header lazily, so write it for empty exports too
        writer.write_record([
            "slug",
            "title",
            "year",
            "director",
            "average_rating",
            "duration_minutes",
            "genres",
            "users",
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write films as CSV to `path`, creating or truncating the file
pub fn write_csv_file<'a, I>(films: I, path: &Path) -> Result<(), ExportError>
where
    I: IntoIterator<Item = &'a CommonFilm>,
{
    let file = File::create(path)?;
    write_csv(films, file)?;
    tracing::info!("Wrote common watchlist CSV to {}", path.display());
    Ok(())
}
