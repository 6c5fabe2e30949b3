use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dashboard::{
    ActorView, CatalogSummary, Dashboard, GenreView, ReleaseYearView, Topic, TopicView, WorldView,
};
use data_loader::{Catalog, TitleType};
use pipeline::Recommendation;
use revenue::{RevenueFetcher, RevenueTable, DEFAULT_REVENUE_URL};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

const BAR_WIDTH: usize = 40;

/// Netflix Explorer - statistics and recommendations for the Netflix catalog
#[derive(Parser)]
#[command(name = "netflix-explorer")]
#[command(about = "Explore Netflix titles by genre, country and actor, and get recommendations", long_about = None)]
struct Cli {
    /// Path to the netflix_titles.csv file
    #[arg(short, long, default_value = "data/netflix_titles.csv")]
    data_file: PathBuf,

    /// Page holding the per-country revenue table
    #[arg(long, default_value = DEFAULT_REVENUE_URL)]
    revenue_url: String,

    /// Skip the revenue download and show no revenue figures
    #[arg(long)]
    offline: bool,

    /// Print views as JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show row counts and what the cleaning step filled in
    Summary,

    /// Get random recommendations for a title type and genre
    Recommend {
        /// Title type: "Movie" or "TV Show" (any case)
        #[arg(long = "type", default_value = "Movie")]
        kind: TitleType,

        /// Genre text to look for in the genre list (case-insensitive)
        #[arg(long, default_value = "")]
        genre: String,

        /// How many recommendations to return
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=20))]
        count: u8,
    },

    /// Countries producing the most titles, with revenue insights
    WorldView,

    /// Learn about release years, genres or featured actors
    LearnMore {
        /// One of: release-year, genre, featured-actors
        #[arg(long)]
        topic: Topic,
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

    // Load and clean the catalog
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&cli.data_file).context("Failed to load Netflix titles")?,
    );
    info!("Loaded catalog in {:?}", start.elapsed());

    // Revenue data is only shown on the world view and in the summary
    let needs_revenue = matches!(cli.command, Commands::WorldView | Commands::Summary);
    let revenue = if cli.offline || !needs_revenue {
        RevenueTable::empty()
    } else {
        RevenueFetcher::new(cli.revenue_url.as_str())?
            .fetch()
            .await
            .context("Failed to fetch revenue data")?
    };

    let dashboard = Dashboard::new(catalog, revenue);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Summary => emit(&dashboard.summary(), cli.json, print_summary)?,
        Commands::Recommend { kind, genre, count } => {
            let result = dashboard.recommend(kind, &genre, count as usize)?;
            emit(&result, cli.json, |r| print_recommendation(r, kind, &genre))?;
        }
        Commands::WorldView => emit(&dashboard.world_view(), cli.json, print_world_view)?,
        Commands::LearnMore { topic } => {
            emit(&dashboard.learn_more(topic), cli.json, print_topic)?
        }
    }

    Ok(())
}

/// Print `view` as JSON or hand it to the text renderer
fn emit<T: Serialize>(view: &T, json: bool, render: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        render(view);
    }
    Ok(())
}

fn print_summary(summary: &CatalogSummary) {
    println!("{}", "Netflix Explorer".bold().red());
    println!("{}Titles: {}", "• ".green(), summary.titles);
    println!("{}Movies: {}", "• ".green(), summary.movies);
    println!("{}TV Shows: {}", "• ".green(), summary.tv_shows);
    println!("{}", "Cleaning:".bold().blue());
    let c = &summary.cleaning;
    println!("  - director filled with \"Unknown\": {}", c.director_filled);
    println!("  - cast filled with \"Unknown\": {}", c.cast_filled);
    println!("  - country filled with \"Unknown\": {}", c.country_filled);
    println!("  - rating filled with \"Not Rated\": {}", c.rating_filled);
    println!("  - date_added missing or unparseable: {}", c.date_added_dropped);
    println!("{}Revenue rows: {}", "• ".cyan(), summary.revenue_countries);
}

fn print_recommendation(result: &Recommendation, kind: TitleType, genre: &str) {
    match result {
        Recommendation::Found(titles) => {
            let header = format!("Found {} recommendations!", titles.len());
            println!("{}", header.bold().green());
            for (rank, t) in titles.iter().enumerate() {
                println!(
                    "{}. {} ({}) - {}",
                    (rank + 1).to_string().green(),
                    t.title,
                    t.release_year,
                    t.duration.as_deref().unwrap_or("?")
                );
            }
        }
        Recommendation::Empty { message } => {
            println!("{} {}", "⚠".yellow(), message.yellow());
            println!("  (type: {}, genre: \"{}\")", kind, genre);
        }
    }
}

fn print_world_view(view: &WorldView) {
    println!("{}", "Countries Producing the Most Titles".bold().blue());
    print_bars(view.top_countries.entries());

    println!();
    println!("{}", "Map of Top Netflix-Producing Countries".bold().blue());
    for p in &view.map_points {
        println!("  - {} ({:.2}, {:.2})", p.country, p.lat, p.lon);
    }

    println!();
    println!("{}", "Revenue Insights".bold().blue());
    for r in &view.revenue_insights {
        println!("{}{}", "• ".green(), r.country.bold());
        println!("    Number of titles: {}", r.number_of_titles);
        println!(
            "    Average Production Budget: {}",
            r.average_production_budget.as_deref().unwrap_or("n/a")
        );
        println!(
            "    Total Worldwide Box Office: {}",
            r.total_worldwide_box_office.as_deref().unwrap_or("n/a")
        );
    }
}

fn print_topic(view: &TopicView) {
    match view {
        TopicView::ReleaseYear(v) => print_release_years(v),
        TopicView::Genre(v) => print_genres(v),
        TopicView::FeaturedActors(v) => print_actors(v),
    }
}

fn print_release_years(view: &ReleaseYearView) {
    println!("{}", "Movies Released per Year".bold().red());
    let rows: Vec<(String, u64)> = view
        .series
        .iter()
        .map(|(year, n)| (year.to_string(), *n))
        .collect();
    print_bars(&rows);
    let ticks: Vec<String> = view.ticks.iter().map(|t| t.to_string()).collect();
    println!("Ticks: {}", ticks.join(", "));
}

fn print_genres(view: &GenreView) {
    println!("{}", "Top 10 Genres on Netflix".bold().red());
    let table = &view.top_genres;
    print_table(&table.key_label, &table.count_label, &table.rows);

    println!();
    println!("{}", "Top 5 Netflix Genres".bold().blue());
    print_bars(&view.chart);

    if let Some((name, count)) = &view.most_popular {
        println!();
        println!("The most popular genre is: {} ({} titles)", name.bold(), count);
    }
}

fn print_actors(view: &ActorView) {
    println!("{}", "Top 10 Most Featured Actors on Netflix".bold().red());
    let table = &view.top_actors;
    print_table(&table.key_label, &table.count_label, &table.rows);

    println!();
    println!("{}", "Top 5 Featured Actors on Netflix".bold().blue());
    for slice in &view.pie {
        println!("  {:<30} {:>5.1}%", slice.actor, slice.share);
    }
}

fn print_table(key_label: &str, count_label: &str, rows: &[(String, u64)]) {
    println!("  {:<40} {:>8}", key_label.bold(), count_label.bold());
    for (key, count) in rows {
        println!("  {:<40} {:>8}", key, count);
    }
}

fn print_bars(rows: &[(String, u64)]) {
    let max = rows.iter().map(|(_, n)| *n).max().unwrap_or(0);
    for (label, count) in rows {
        println!("  {:<24} {} {}", label, bar(*count, max, BAR_WIDTH).red(), count);
    }
}

/// A text bar scaled so `max` fills `width` cells
fn bar(count: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = (count as f64 / max as f64 * width as f64).round() as usize;
    "█".repeat(cells.max(if count > 0 { 1 } else { 0 }))
}
