use anyhow::{Context, Result};
use browser::{BrowseSession, GenreFilter};
use catalog_client::OmdbClient;
use clap::{Parser, Subcommand};
use colored::Colorize;
use movie_data::{CanonicalMovie, CatalogSource, FALLBACK_GLYPH, Poster};
use std::sync::Arc;
use std::time::Instant;

/// ReelDeck - Movie Catalog Browser
#[derive(Parser)]
#[command(name = "reel-deck")]
#[command(about = "Browse the OMDb movie catalog from the terminal", long_about = None)]
struct Cli {
    /// OMDb API key (falls back to the OMDB_API_KEY environment variable)
    #[arg(short, long)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the popular shelf and print movie cards
    Browse {
        /// Genre bucket to keep (all, action, comedy, drama, horror, sci-fi)
        #[arg(long, default_value = "all")]
        genre: GenreFilter,
    },

    /// Search the catalog and print matching movie cards
    Search {
        /// Free-text query; an exact title match wins outright
        query: String,
    },

    /// Show the detail view for a single movie
    Movie {
        /// IMDb identifier, e.g. tt1375666
        #[arg(long)]
        id: String,
    },
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

    // Resolve the API key before any catalog traffic
    let api_key = cli
        .api_key
        .or_else(|| std::env::var("OMDB_API_KEY").ok())
        .context("No OMDb API key: pass --api-key or set OMDB_API_KEY")?;

    let catalog = Arc::new(OmdbClient::new(api_key));

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Browse { genre } => handle_browse(catalog, genre).await,
        Commands::Search { query } => handle_search(catalog, query).await,
        Commands::Movie { id } => handle_movie(catalog, id).await,
    }
}

/// Handle the 'browse' command
async fn handle_browse(catalog: Arc<OmdbClient>, genre: GenreFilter) -> Result<()> {
    let mut session = BrowseSession::new(catalog);

    println!("Loading popular movies from the catalog...");
    let start = Instant::now();
    let loaded = session.load_popular().await.len();
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        loaded,
        start.elapsed()
    );

    let movies = session.filter_by_genre(genre);
    print_movie_cards(movies);
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(catalog: Arc<OmdbClient>, query: String) -> Result<()> {
    let mut session = BrowseSession::new(catalog);

    println!("Searching the catalog for '{}'...", query);
    let start = Instant::now();
    let results = session.search(&query).await;
    println!(
        "{} Search finished in {:?}",
        "✓".green(),
        start.elapsed()
    );

    print_movie_cards(results);
    Ok(())
}

/// Handle the 'movie' command
async fn handle_movie(catalog: Arc<OmdbClient>, id: String) -> Result<()> {
    println!("Fetching movie {}...", id);
    let start = Instant::now();
    let movie = catalog.movie_by_id(&id).await;
    println!(
        "{} Lookup finished in {:?}",
        "✓".green(),
        start.elapsed()
    );

    match movie {
        Some(movie) => print_movie_details(&movie),
        None => print_no_movies_found(),
    }
    Ok(())
}

/// Print a card per movie, or the empty state when nothing made it through
fn print_movie_cards(movies: &[CanonicalMovie]) {
    if movies.is_empty() {
        print_no_movies_found();
        return;
    }

    println!();
    for movie in movies {
        println!("{}", movie.title.bold());
        println!(
            "  {} • {}",
            movie.genre.to_string().to_uppercase().red(),
            movie.year
        );
        println!(
            "  {} {:.1}",
            star_bar(movie.rating).yellow(),
            movie.rating
        );
        println!("  {}", movie.description.dimmed());
        println!();
    }
    println!("{} movies shown", movies.len());
}

/// Print the full detail view for one movie
fn print_movie_details(movie: &CanonicalMovie) {
    // A terminal cannot render an image URL, so URL posters show the
    // generic glyph with the link printed underneath.
    let glyph = match &movie.poster {
        Poster::Url(_) => FALLBACK_GLYPH,
        Poster::Glyph(glyph) => glyph,
    };

    println!();
    println!("  {}", glyph);
    if let Poster::Url(url) = &movie.poster {
        println!("  {}", url.dimmed());
    }
    println!();
    println!("  {}", movie.title.bold().red());
    println!(
        "  {}  {}  {}",
        movie.genre.to_string().to_uppercase().on_red(),
        movie.year,
        movie.duration
    );
    print!(
        "  {} {:.1}/5",
        star_bar(movie.rating).yellow(),
        movie.rating
    );
    if let Some(imdb_rating) = &movie.imdb_rating {
        print!("  {}", format!("IMDb: {}/10", imdb_rating).dimmed());
    }
    println!();
    println!();
    println!("  {}", movie.description);
    println!();
    println!("  {} {}", "Director:".red().bold(), movie.director);
    println!("  {} {}", "Cast:".red().bold(), movie.cast.join(", "));
    if let Some(url) = movie.imdb_url() {
        println!();
        println!("  {} {}", "View on IMDb:".bold(), url.blue().underline());
    }
}

/// Empty state matching the site's "No Movies Found" panel
fn print_no_movies_found() {
    println!();
    println!("{}", "No Movies Found".red().bold());
    println!("{}", "Try searching for a different movie or genre.".dimmed());
}

/// Five-slot star bar filled by the floored rating ("★★★★☆" for 4.4)
fn star_bar(rating: f64) -> String {
    let filled = (rating.floor().max(0.0) as usize).min(5);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
