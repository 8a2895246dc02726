//! HTML parsing for watchlist and film pages.
//!
//! Watchlist pages:
//! - Posters carry `data-item-slug` (older markup: `data-film-slug`)
//! - The display name is in `data-item-full-display-name` / `data-item-name`
//!   ("Parasite (2019)"), or the poster image's alt text
//! - The total count lives in `span.js-watchlist-count` ("1,234 films")
//!
//! Film pages:
//! - `og:title` meta: "Title (Year)"
//! - `twitter:data1` meta: director, `twitter:data2` meta: "3.85 out of 5"
//! - `p.text-link.text-footer`: "133 mins  More at IMDb TMDb"
//! - genres: `div.text-sluglist` following an `h3` reading "Genre" or "Genres"

use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use watchlist_core::Movie;

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

static FILM_POSTERS: LazyLock<Selector> =
    LazyLock::new(|| selector("[data-item-slug], [data-film-slug]"));
static WATCHLIST_MARKERS: LazyLock<Selector> = LazyLock::new(|| {
    selector(".poster-list, .poster-grid, .js-watchlist-content, .js-watchlist-count")
});
static WATCHLIST_COUNT: LazyLock<Selector> = LazyLock::new(|| selector("span.js-watchlist-count"));
static POSTER_IMG: LazyLock<Selector> = LazyLock::new(|| selector("img[alt]"));

static OG_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[property="og:title"]"#));
static DIRECTOR_META: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="twitter:data1"]"#));
static RATING_META: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="twitter:data2"]"#));
static FOOTER: LazyLock<Selector> = LazyLock::new(|| selector("p.text-link.text-footer"));
static HEADINGS: LazyLock<Selector> = LazyLock::new(|| selector("h3"));
static SLUG_LINKS: LazyLock<Selector> = LazyLock::new(|| selector("a.text-slug"));

const NAME_ATTRS: [&str; 3] = ["data-item-full-display-name", "data-item-name", "data-film-name"];

// =============================================================================
// Watchlist pages
// =============================================================================

/// A parsed watchlist page.
///
/// Holds the parsed document; `films()` walks it lazily.
pub struct WatchlistPage {
    url: String,
    document: Html,
}

impl WatchlistPage {
    /// Parse a watchlist page.
    ///
    /// Fails with `ScrapeError::Parse` if the page has neither a poster
    /// container nor any poster, which means the layout changed or this is
    /// not a watchlist page.
    pub fn parse(url: &str, html: &str) -> Result<Self> {
        let document = Html::parse_document(html);

        let has_markup = document.select(&WATCHLIST_MARKERS).next().is_some()
            || document.select(&FILM_POSTERS).next().is_some();
        if !has_markup {
            return Err(ScrapeError::parse(url, "no watchlist markup found"));
        }

        Ok(Self {
            url: url.to_string(),
            document,
        })
    }

    /// Films on this page, in page order.
    ///
    /// Single pass: each call walks the document again. Posters with an
    /// empty slug are skipped.
    pub fn films(&self) -> impl Iterator<Item = Movie> + '_ {
        self.document.select(&FILM_POSTERS).filter_map(parse_poster)
    }

    /// Total watchlist size shown on the page, if the page shows one
    pub fn watchlist_count(&self) -> Result<Option<u32>> {
        let Some(element) = self.document.select(&WATCHLIST_COUNT).next() else {
            return Ok(None);
        };

        let text = element.text().collect::<String>();
        parse_count(&text)
            .map(Some)
            .ok_or_else(|| ScrapeError::parse(&self.url, format!("invalid watchlist count {:?}", text.trim())))
    }
}

/// Build a partial movie from one poster element
fn parse_poster(element: ElementRef<'_>) -> Option<Movie> {
    let attrs = element.value();

    let slug = attrs
        .attr("data-item-slug")
        .or_else(|| attrs.attr("data-film-slug"))
        .map(str::trim)
        .filter(|s| !s.is_empty())?;

    let name = NAME_ATTRS
        .iter()
        .find_map(|attr| attrs.attr(attr))
        .or_else(|| {
            element
                .select(&POSTER_IMG)
                .next()
                .and_then(|img| img.value().attr("alt"))
        })
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (title, name_year) = match name {
        Some(name) => split_title_year(name),
        None => (slug.to_string(), None),
    };

    let year = attrs
        .attr("data-film-release-year")
        .and_then(|y| y.trim().parse::<u16>().ok())
        .or(name_year);

    Some(Movie::partial(slug, title, year))
}

/// Parse "1,234 films" -> 1234
fn parse_count(text: &str) -> Option<u32> {
    let first = text.split_whitespace().next()?;
    first.replace(',', "").parse().ok()
}

// =============================================================================
// Film pages
// =============================================================================

/// Parse a film page into a detailed movie.
///
/// The `og:title` meta is required; everything else is optional and left as
/// `None` (or empty genres) when missing.
pub fn parse_film_page(slug: &str, html: &str) -> Result<Movie> {
    let document = Html::parse_document(html);
    let page = format!("film page {}", slug);

    let og_title = meta_content(&document, &OG_TITLE)
        .ok_or_else(|| ScrapeError::parse(&page, "missing og:title meta"))?;
    let (title, year) = split_title_year(og_title);

    let director = meta_content(&document, &DIRECTOR_META).map(str::to_string);

    let average_rating = meta_content(&document, &RATING_META)
        .and_then(|content| content.split_whitespace().next())
        .and_then(|value| value.parse::<f32>().ok());

    let duration_minutes = document
        .select(&FOOTER)
        .next()
        .map(|p| p.text().collect::<String>())
        .and_then(|text| text.split_whitespace().next().and_then(|n| n.parse::<u32>().ok()));

    let mut movie = Movie::partial(slug, title, year);
    movie.director = director;
    movie.average_rating = average_rating;
    movie.duration_minutes = duration_minutes;
    movie.genres = parse_genres(&document);
    Ok(movie)
}

fn meta_content<'a>(document: &'a Html, selector: &Selector) -> Option<&'a str> {
    document
        .select(selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Genre names from the sluglist that follows the "Genre(s)" heading
fn parse_genres(document: &Html) -> Vec<String> {
    let Some(heading) = document.select(&HEADINGS).find(|h| {
        let text = h.text().collect::<String>();
        matches!(text.trim(), "Genre" | "Genres")
    }) else {
        return Vec::new();
    };

    let Some(list) = heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "div" && e.value().classes().any(|c| c == "text-sluglist"))
    else {
        return Vec::new();
    };

    let mut genres: Vec<String> = Vec::new();
    for link in list.select(&SLUG_LINKS) {
        let name = link.text().collect::<String>().trim().to_string();
        if !name.is_empty() && !genres.contains(&name) {
            genres.push(name);
        }
    }
    genres
}

// =============================================================================
// Helpers
// =============================================================================

/// Split a display name into title and year
///
/// Example: "Parasite (2019)" -> ("Parasite", Some(2019))
///          "Heat" -> ("Heat", None)
///          "Solaris (Director's Cut)" -> ("Solaris (Director's Cut)", None)
pub fn split_title_year(name: &str) -> (String, Option<u16>) {
    let name = name.trim();
    if name.ends_with(')') {
        if let Some(start) = name.rfind('(') {
            let inner = &name[start + 1..name.len() - 1];
            if inner.len() == 4 {
                if let Ok(year) = inner.parse::<u16>() {
                    return (name[..start].trim_end().to_string(), Some(year));
                }
            }
        }
    }
    (name.to_string(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATCHLIST_HTML: &str = r#"
        <html><body>
          <h1 class="title-3">Watchlist <span class="js-watchlist-count">1,234&nbsp;films</span></h1>
          <ul class="poster-list">
            <li class="poster-container">
              <div class="react-component" data-component-class="LazyPoster"
                   data-item-slug="parasite-2019" data-item-full-display-name="Parasite (2019)"
                   data-item-link="/film/parasite-2019/"></div>
            </li>
            <li class="poster-container">
              <div class="film-poster" data-film-slug="heat-1995" data-film-release-year="1995">
                <img alt="Heat" src="x.jpg"/>
              </div>
            </li>
            <li class="poster-container">
              <div class="react-component" data-item-slug="untitled"></div>
            </li>
            <li class="poster-container">
              <div class="react-component" data-item-slug="  "></div>
            </li>
          </ul>
        </body></html>
    "#;

    #[test]
    fn test_watchlist_page_films() {
        let page = WatchlistPage::parse("test", WATCHLIST_HTML).unwrap();
        let films: Vec<Movie> = page.films().collect();

        assert_eq!(films.len(), 3);
        assert_eq!(films[0], Movie::partial("parasite-2019", "Parasite", Some(2019)));
        assert_eq!(films[1], Movie::partial("heat-1995", "Heat", Some(1995)));
        // No name at all: fall back to the slug
        assert_eq!(films[2], Movie::partial("untitled", "untitled", None));
    }

    #[test]
    fn test_watchlist_count() {
        let page = WatchlistPage::parse("test", WATCHLIST_HTML).unwrap();
        assert_eq!(page.watchlist_count().unwrap(), Some(1234));
    }

    #[test]
    fn test_empty_watchlist_page() {
        let html = r#"<html><body><ul class="poster-list"></ul></body></html>"#;
        let page = WatchlistPage::parse("test", html).unwrap();

        assert_eq!(page.films().count(), 0);
        assert_eq!(page.watchlist_count().unwrap(), None);
    }

    #[test]
    fn test_missing_markup_is_parse_error() {
        let html = "<html><body><p>Something else entirely</p></body></html>";
        let result = WatchlistPage::parse("test", html);
        assert!(matches!(result, Err(ScrapeError::Parse { .. })));
    }

    #[test]
    fn test_invalid_count_is_parse_error() {
        let html = r#"<html><body><span class="js-watchlist-count">lots</span></body></html>"#;
        let page = WatchlistPage::parse("test", html).unwrap();
        assert!(matches!(page.watchlist_count(), Err(ScrapeError::Parse { .. })));
    }

    const FILM_HTML: &str = r##"
        <html><head>
          <meta property="og:title" content="Parasite (2019)" />
          <meta name="twitter:data1" content="Bong Joon Ho" />
          <meta name="twitter:data2" content="4.55 out of 5" />
        </head><body>
          <p class="text-link text-footer">132&nbsp;mins &nbsp; More at <a href="#">IMDb</a></p>
          <div id="tab-genres">
            <h3><span>Genres</span></h3>
            <div class="text-sluglist capitalize">
              <p><a class="text-slug" href="/films/genre/comedy/">Comedy</a>
                 <a class="text-slug" href="/films/genre/thriller/">Thriller</a>
                 <a class="text-slug" href="/films/genre/drama/">Drama</a></p>
            </div>
            <h3><span>Themes</span></h3>
            <div class="text-sluglist capitalize">
              <p><a class="text-slug" href="#">Class struggle</a></p>
            </div>
          </div>
        </body></html>
    "##;

    #[test]
    fn test_parse_film_page() {
        let movie = parse_film_page("parasite-2019", FILM_HTML).unwrap();

        assert_eq!(movie.slug, "parasite-2019");
        assert_eq!(movie.title, "Parasite");
        assert_eq!(movie.year, Some(2019));
        assert_eq!(movie.director.as_deref(), Some("Bong Joon Ho"));
        assert_eq!(movie.average_rating, Some(4.55));
        assert_eq!(movie.duration_minutes, Some(132));
        assert_eq!(movie.genres, vec!["Comedy", "Thriller", "Drama"]);
    }

    #[test]
    fn test_parse_film_page_minimal() {
        let html = r#"<html><head><meta property="og:title" content="Obscure Short" /></head></html>"#;
        let movie = parse_film_page("obscure-short", html).unwrap();

        assert_eq!(movie.title, "Obscure Short");
        assert_eq!(movie.year, None);
        assert_eq!(movie.average_rating, None);
        assert_eq!(movie.duration_minutes, None);
        assert!(movie.genres.is_empty());
    }

    #[test]
    fn test_parse_film_page_without_title_fails() {
        let result = parse_film_page("x", "<html><body></body></html>");
        assert!(matches!(result, Err(ScrapeError::Parse { .. })));
    }

    #[test]
    fn test_split_title_year() {
        assert_eq!(split_title_year("Parasite (2019)"), ("Parasite".to_string(), Some(2019)));
        assert_eq!(split_title_year("Heat"), ("Heat".to_string(), None));
        assert_eq!(
            split_title_year("Solaris (Director's Cut)"),
            ("Solaris (Director's Cut)".to_string(), None)
        );
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1,234 films"), Some(1234));
        assert_eq!(parse_count("7"), Some(7));
        assert_eq!(parse_count(""), None);
    }
}
