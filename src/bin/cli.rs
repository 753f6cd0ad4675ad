//! Lofi Stats CLI
//!
//! Command-line interface over the same catalog documents the API serves:
//! - Browse the label leaderboard
//! - Search artists
//! - Show an artist's statistics
//! - Generate a config file

use clap::{Parser, Subcommand};
use lofi_stats::api::routes::labels::label_to_row;
use lofi_stats::catalog::{
    sort_labels, CatalogClient, CatalogSource, CatalogStore, ClientConfig, LabelSortKey, SortOrder,
};
use lofi_stats::config::Config;
use lofi_stats::format::spotify_artist_url;
use lofi_stats::search::{filter_ranked_labels, search_artists, MIN_ARTIST_QUERY_CHARS};
use lofi_stats::stats::ArtistSummary;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "lofi-stats-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Label and artist statistics for the lofi scene")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding labels.json, artistIndex.json and artists/
    #[arg(long, global = true, conflicts_with = "api_url")]
    pub data_dir: Option<PathBuf>,

    /// URL the catalog documents are served under (e.g. http://localhost:8083/api)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the label leaderboard
    Labels {
        /// Only labels whose name matches
        #[arg(short, long)]
        query: Option<String>,
        /// Sort column (popularity, tracks, streams, name)
        #[arg(short, long)]
        sort: Option<LabelSortKey>,
        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,
    },

    /// Search artists by name
    Artists {
        /// At least three characters
        query: String,
    },

    /// Show statistics for one artist
    Artist {
        /// Spotify artist id
        id: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lofi_stats=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Labels { query, sort, asc } => {
            let catalog = open_catalog(&cli.data_dir, &cli.api_url)?;
            let mut labels = or_exit(catalog.labels().await, &*catalog).labels;

            if sort.is_some() || asc {
                let order = if asc { SortOrder::Asc } else { SortOrder::Desc };
                sort_labels(&mut labels, sort.unwrap_or_default(), order);
            }

            let query = query.unwrap_or_default();
            let rows: Vec<_> = filter_ranked_labels(&labels, &query)
                .into_iter()
                .map(|(rank, label)| label_to_row(rank, label))
                .collect();

            match cli.format.as_str() {
                "json" => print_json(&rows)?,
                "csv" => print_csv(rows.iter().map(|row| LabelCsvRow {
                    rank: row.rank,
                    name: &row.name,
                    popularity: row.popularity,
                    tracks: row.tracks,
                    tracks_in_editorials: row.tracks_in_editorials,
                    streams_min: row.streams.min,
                    streams_max: row.streams.max,
                    playlist_url: &row.playlist_url,
                }))?,
                _ => {
                    if rows.is_empty() {
                        println!("No labels match");
                        return Ok(());
                    }

                    println!(
                        "{:<5} {:<32} {:>10} {:>8} {:>10} {:<20}",
                        "#", "Label", "Popularity", "Tracks", "Editorial", "Streams"
                    );
                    println!("{}", "-".repeat(90));

                    for row in rows {
                        println!(
                            "{:<5} {:<32} {:>10.1} {:>8} {:>10} {:<20}",
                            row.rank,
                            truncate(&row.name, 32),
                            row.popularity,
                            row.tracks,
                            row.editorial_share.as_deref().unwrap_or("-"),
                            row.streams_text
                        );
                    }
                }
            }
        }

        Commands::Artists { query } => {
            if query.chars().count() < MIN_ARTIST_QUERY_CHARS {
                eprintln!(
                    "Search needs at least {} characters: {:?}",
                    MIN_ARTIST_QUERY_CHARS, query
                );
                std::process::exit(1);
            }

            let catalog = open_catalog(&cli.data_dir, &cli.api_url)?;
            let index = or_exit(catalog.artist_index().await, &*catalog);
            let artists = search_artists(&index, &query);

            match cli.format.as_str() {
                "json" => print_json(&artists)?,
                "csv" => print_csv(artists.iter().map(|a| ArtistCsvRow {
                    id: &a.id,
                    name: &a.name,
                }))?,
                _ => {
                    if artists.is_empty() {
                        println!("No artists match {:?}", query);
                    }
                    for artist in artists {
                        println!("{:<40} {}", artist.name, artist.id);
                    }
                }
            }
        }

        Commands::Artist { id } => {
            let catalog = open_catalog(&cli.data_dir, &cli.api_url)?;
            let artist = or_exit(catalog.artist(&id).await, &*catalog);
            let summary = ArtistSummary::build(&artist, chrono::Utc::now().date_naive());

            match cli.format.as_str() {
                "json" => print_json(&summary)?,
                "csv" => print_csv(summary.discography.iter().map(|release| ReleaseCsvRow {
                    release_date: release.album.release_date.to_string(),
                    kind: release.kind(),
                    name: &release.album.name,
                    label: &release.album.label.name,
                    track_count: release.track_count,
                }))?,
                _ => print_summary(&summary),
            }
        }

        Commands::Config { output } => {
            let config = lofi_stats::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Flags win; otherwise the data section of the loaded config decides
fn open_catalog(
    data_dir: &Option<PathBuf>,
    api_url: &Option<String>,
) -> anyhow::Result<Arc<dyn CatalogSource>> {
    if let Some(dir) = data_dir {
        return Ok(Arc::new(CatalogStore::new(dir)));
    }

    let data = Config::load_default().data;
    match api_url.clone().or(data.url) {
        Some(url) => Ok(Arc::new(CatalogClient::new(ClientConfig {
            base_url: url,
            request_timeout_ms: data.request_timeout_ms,
        })?)),
        None => Ok(Arc::new(CatalogStore::new(data.dir))),
    }
}

/// Unwrap a catalog result or print the error and exit
fn or_exit<T>(result: lofi_stats::CatalogResult<T>, catalog: &dyn CatalogSource) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Cannot load catalog from {}", catalog.describe());
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[derive(Serialize)]
struct LabelCsvRow<'a> {
    rank: usize,
    name: &'a str,
    popularity: f64,
    tracks: u32,
    tracks_in_editorials: u32,
    streams_min: u64,
    streams_max: u64,
    playlist_url: &'a str,
}

#[derive(Serialize)]
struct ArtistCsvRow<'a> {
    id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct ReleaseCsvRow<'a> {
    release_date: String,
    kind: String,
    name: &'a str,
    label: &'a str,
    track_count: usize,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_csv<R: Serialize>(rows: impl IntoIterator<Item = R>) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_summary(summary: &ArtistSummary) {
    println!("{}", summary.name);
    println!("{}", spotify_artist_url(&summary.id));
    println!();
    println!("Tracks:              {}", summary.total_tracks);
    println!("Tracks in past year: {}", summary.tracks_in_past_year);
    println!(
        "First tracked:       {}",
        summary
            .first_tracked_release
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    if let Some(top) = &summary.top_collaborator {
        println!(
            "Top collaborator:    {} ({} tracks)",
            top.artist.name, top.count
        );
    }

    if !summary.top_labels.is_empty() {
        println!();
        println!("Labels:");
        for entry in &summary.top_labels {
            println!("  {:<32} {}", truncate(&entry.label.name, 32), entry.count);
        }
    }

    if !summary.top_collaborators.is_empty() {
        println!();
        println!("Collaborators:");
        for entry in &summary.top_collaborators {
            println!("  {:<32} {}", truncate(&entry.artist.name, 32), entry.count);
        }
    }

    if !summary.discography.is_empty() {
        println!();
        println!("{:<12} {:<12} {:<40} {}", "Released", "Type", "Title", "Tracks");
        println!("{}", "-".repeat(72));
        for release in &summary.discography {
            println!(
                "{:<12} {:<12} {:<40} {}",
                release.album.release_date,
                release.kind(),
                truncate(&release.album.name, 40),
                release.track_count
            );
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
