use anyhow::{Context, Result};
use charts::{render_chart, ChartKind, ChartOptions};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use letterboxd::{ScrapeConfig, WatchlistFetcher};
use orchestrator::WatchlistOrchestrator;
use pipeline::{sort_films, FilterCriteria, SortKey};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use watchlist_core::{write_csv_file, CommonFilm};

/// Common Watchlist - find the films a group of Letterboxd users all want to see
#[derive(Parser)]
#[command(name = "common-watchlist")]
#[command(about = "Intersect Letterboxd watchlists, filter by rating and runtime, and plot the result", long_about = None)]
struct Cli {
    #[command(flatten)]
    scrape: ScrapeArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ScrapeArgs {
    /// Site to scrape
    #[arg(long, global = true, default_value = letterboxd::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Pause between watchlist page requests, in milliseconds
    #[arg(long, global = true, default_value = "1000")]
    delay_ms: u64,

    /// Film pages fetched at the same time
    #[arg(long, global = true, default_value = "5")]
    concurrency: usize,

    /// Stop after this many watchlist pages per user
    #[arg(long, global = true, default_value = "500")]
    max_pages: u32,

    /// Per-request timeout, in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout_secs: u64,

    /// Override the User-Agent header
    #[arg(long, global = true)]
    user_agent: Option<String>,
}

impl ScrapeArgs {
    fn to_config(&self) -> ScrapeConfig {
        let config = ScrapeConfig::default()
            .with_base_url(&self.base_url)
            .with_request_delay(Duration::from_millis(self.delay_ms))
            .with_max_concurrent(self.concurrency)
            .with_max_pages(self.max_pages)
            .with_timeout(Duration::from_secs(self.timeout_secs));

        match &self.user_agent {
            Some(agent) => config.with_user_agent(agent),
            None => config,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show one user's watchlist
    Watchlist {
        /// Letterboxd username
        #[arg(short, long)]
        user: String,

        /// Only print the first N films
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List the films on every given user's watchlist
    Common {
        /// Letterboxd usernames (repeat the flag or list several)
        #[arg(short = 'u', long = "user", required = true, num_args = 1..)]
        users: Vec<String>,

        /// Fetch each film's page for rating, runtime, director and genres
        #[arg(long)]
        details: bool,

        /// Order of the listing
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Also write the list to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print JSON instead of the listing
        #[arg(long)]
        json: bool,
    },

    /// Filter the common watchlist and render it as a chart
    Plot {
        #[arg(short = 'u', long = "user", required = true, num_args = 1..)]
        users: Vec<String>,

        /// Minimum average rating (0-5)
        #[arg(long, default_value = "0")]
        min_rating: f32,

        /// Maximum runtime in minutes; unlimited if omitted
        #[arg(long)]
        max_duration: Option<u32>,

        /// Earliest release year
        #[arg(long)]
        year_from: Option<u16>,

        /// Latest release year
        #[arg(long)]
        year_to: Option<u16>,

        /// Keep films in any of these genres
        #[arg(long = "genre")]
        genres: Vec<String>,

        #[command(flatten)]
        chart: ChartArgs,

        #[arg(long, value_enum, default_value = "rating")]
        sort: SortArg,

        /// Also write the filtered films to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the filtered films as JSON instead of the listing
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ChartArgs {
    #[arg(long = "chart", value_enum, default_value = "scatter")]
    kind: ChartArg,

    /// Directory the chart is written to (created if missing)
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Chart file name; the extension picks PNG or SVG
    #[arg(long, default_value = "common_watchlist.png")]
    file_name: String,

    #[arg(long)]
    title: Option<String>,

    #[arg(long, default_value = "1280")]
    width: u32,

    #[arg(long, default_value = "800")]
    height: u32,
}

#[derive(Clone, Copy, ValueEnum)]
enum ChartArg {
    Scatter,
    Bar,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Rating,
    Duration,
    Year,
    Title,
}

impl From<ChartArg> for ChartKind {
    fn from(arg: ChartArg) -> Self {
        match arg {
            ChartArg::Scatter => ChartKind::Scatter,
            ChartArg::Bar => ChartKind::Bar,
        }
    }
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Rating => SortKey::Rating,
            SortArg::Duration => SortKey::Duration,
            SortArg::Year => SortKey::Year,
            SortArg::Title => SortKey::Title,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.scrape.to_config();
    tracing::debug!("Scrape config: {:?}", config);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Watchlist { user, limit } => handle_watchlist(config, &user, limit).await?,
        Commands::Common {
            users,
            details,
            sort,
            csv,
            json,
        } => handle_common(config, &users, details, sort, csv.as_deref(), json).await?,
        Commands::Plot {
            users,
            min_rating,
            max_duration,
            year_from,
            year_to,
            genres,
            chart,
            sort,
            csv,
            json,
        } => {
            let criteria = FilterCriteria::new(min_rating, max_duration)
                .with_years(year_from, year_to)
                .with_genres(genres);
            handle_plot(config, &users, &criteria, &chart, sort, csv.as_deref(), json).await?
        }
    }

    Ok(())
}

/// Handle the 'watchlist' command
async fn handle_watchlist(config: ScrapeConfig, user: &str, limit: Option<usize>) -> Result<()> {
    let fetcher = WatchlistFetcher::from_config(config).context("Failed to build HTTP client")?;

    let start = Instant::now();
    let watchlist = fetcher
        .fetch_watchlist(user)
        .await
        .with_context(|| format!("Failed to fetch watchlist for {}", user))?;

    println!(
        "{} {} films on {}'s watchlist ({:.2?})",
        "✓".green(),
        watchlist.len(),
        user,
        start.elapsed()
    );
    for (i, entry) in watchlist.entries().take(limit.unwrap_or(usize::MAX)).enumerate() {
        println!(
            "{:>4}. {} {}",
            (i + 1).to_string().green(),
            entry.movie.display_title(),
            format!("[{}]", entry.movie.slug).dimmed()
        );
    }
    Ok(())
}

/// Handle the 'common' command
async fn handle_common(
    config: ScrapeConfig,
    users: &[String],
    details: bool,
    sort: Option<SortArg>,
    csv: Option<&Path>,
    json: bool,
) -> Result<()> {
    let orchestrator = WatchlistOrchestrator::from_config(config)?;

    let outcome = orchestrator.common_watchlist(users).await?;
    let mut common = outcome.common;
    print_skipped(&outcome.skipped_users);

    if details {
        let missing = orchestrator.enrich(&mut common).await?;
        if !missing.is_empty() {
            eprintln!(
                "{} No film page for: {}",
                "!".yellow(),
                missing.join(", ")
            );
        }
    }

    let mut films = common.films().to_vec();
    if let Some(sort) = sort {
        sort_films(&mut films, sort.into());
    }

    if let Some(path) = csv {
        write_csv_file(&films, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&films)?);
    } else {
        let header = format!(
            "{} films in common for {}:",
            films.len(),
            common.usernames().join(", ")
        );
        println!("{}", header.bold().blue());
        print_films(&films, details);
    }
    Ok(())
}

/// Handle the 'plot' command
async fn handle_plot(
    config: ScrapeConfig,
    users: &[String],
    criteria: &FilterCriteria,
    chart: &ChartArgs,
    sort: SortArg,
    csv: Option<&Path>,
    json: bool,
) -> Result<()> {
    let orchestrator = WatchlistOrchestrator::from_config(config)?;

    let mut report = orchestrator.run(users, criteria).await?;
    print_skipped(&report.skipped_users);
    sort_films(&mut report.films, sort.into());

    if let Some(path) = csv {
        write_csv_file(&report.films, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    let title = chart.title.clone().unwrap_or_else(|| {
        format!("Common watchlist: {}", report.common.usernames().join(", "))
    });
    let options = ChartOptions::default()
        .with_title(title)
        .with_kind(chart.kind.into())
        .with_size(chart.width, chart.height)
        .with_output_dir(&chart.output_dir)
        .with_file_name(&chart.file_name);
    let path = render_chart(&report.films, &options).context("Failed to render chart")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.films)?);
    } else {
        let header = format!(
            "{} of {} common films match:",
            report.films.len(),
            report.common.len()
        );
        println!("{}", header.bold().blue());
        print_films(&report.films, true);
    }
    println!("{} Chart written to {}", "✓".green(), path.display());
    Ok(())
}

fn print_skipped(skipped: &[String]) {
    for user in skipped {
        eprintln!("{} User {} not found, skipped", "!".yellow(), user);
    }
}

/// Helper function to format and print a film listing
fn print_films(films: &[CommonFilm], details: bool) {
    for (i, film) in films.iter().enumerate() {
        let movie = &film.movie;
        if !details {
            println!("{:>4}. {}", (i + 1).to_string().green(), movie.display_title());
            continue;
        }

        let rating = movie
            .average_rating
            .map(|r| format!("{:.2}", r))
            .unwrap_or_else(|| "-".to_string());
        let runtime = movie
            .duration_minutes
            .map(|m| format!("{} min", m))
            .unwrap_or_else(|| "? min".to_string());
        println!(
            "{:>4}. {} - {} {}",
            (i + 1).to_string().green(),
            movie.display_title(),
            format!("★ {}", rating).yellow(),
            runtime.cyan()
        );
        if let Some(director) = &movie.director {
            println!("      Directed by {}", director);
        }
        if !movie.genres.is_empty() {
            println!("      {}", movie.genres.join(", ").dimmed());
        }
    }
}
