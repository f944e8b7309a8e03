//! Command-line client for the Somnia dream journal.

mod render;

use anyhow::{Context, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use log::{debug, info};
use somnia_config::SomniaConfig;
use somnia_core::{
    DreamDraft, DreamFilter, DreamStore, Emotion, FileJournalSlot, SortDirection, encode_csv,
    export_file_name, filter_dreams, group_by_month, validate_draft,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// Command-line options for the Somnia journal.
#[derive(Parser)]
#[command(name = "somnia", version)]
struct Cli {
    /// Optional path to a somnia.json5 config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the journal directory
    #[arg(long)]
    journal: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

/// Journal operations exposed by the CLI.
#[derive(Subcommand)]
enum Command {
    /// Capture a dream with emotions and a realism rating
    Add {
        /// Free-text dream description (50 to 2000 characters)
        #[arg(long)]
        description: String,
        /// Emotion felt during the dream (repeatable)
        #[arg(long = "emotion")]
        emotions: Vec<Emotion>,
        /// Realism rating from 1 to 5 (defaults from config)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: Option<u8>,
    },
    /// Quickly capture a dream from its description alone
    Quick {
        /// Free-text dream description (50 to 2000 characters)
        description: String,
    },
    /// Browse the archive with filters and month grouping
    List {
        /// Case-insensitive substring to search descriptions for
        #[arg(long, default_value = "")]
        search: String,
        /// Keep only dreams tagged with this emotion
        #[arg(long)]
        emotion: Option<Emotion>,
        /// Keep only dreams rated at or above this value
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        min_rating: Option<u8>,
        /// Timeline order: newest or oldest first
        #[arg(long, default_value = "newest")]
        sort: SortDirection,
    },
    /// Show one dream in full
    Show {
        /// Dream record id
        id: Uuid,
    },
    /// Delete a dream after confirmation
    Delete {
        /// Dream record id
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Export the journal as CSV
    Export {
        /// Output file path (defaults to a dated file in the export dir)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Entry point for the Somnia CLI.
fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();

    let cli = Cli::parse();
    info!(
        "starting somnia (config_set={}, journal_set={})",
        cli.config.is_some(),
        cli.journal.is_some()
    );
    let config = load_config(&cli)?;

    let journal_root = cli.journal.clone().unwrap_or_else(|| config.journal_root());
    debug!("opening journal (root={})", journal_root.display());
    let slot = FileJournalSlot::new(&journal_root).context("failed to open journal")?;
    let store = DreamStore::new(Arc::new(slot));

    match cli.command {
        Command::Add {
            description,
            emotions,
            rating,
        } => add(&store, &config, description, emotions, rating),
        Command::Quick { description } => add(&store, &config, description, Vec::new(), None),
        Command::List {
            search,
            emotion,
            min_rating,
            sort,
        } => list(&store, search, emotion, min_rating, sort),
        Command::Show { id } => show(&store, id),
        Command::Delete { id, yes } => delete(&store, id, yes),
        Command::Export { output } => export(&store, &config, output),
    }
}

/// Load config from an explicit path or the user layer.
fn load_config(cli: &Cli) -> anyhow::Result<SomniaConfig> {
    if let Some(path) = cli.config.as_ref() {
        info!("loading config from path: {}", path.display());
        return SomniaConfig::load_from_path(path).context("failed to load config");
    }
    SomniaConfig::load_user_default().context("failed to load user config")
}

/// Capture a dream through the single validated create path.
///
/// Quick capture lands here too, with no emotions and the configured
/// default rating.
fn add(
    store: &DreamStore,
    config: &SomniaConfig,
    description: String,
    emotions: Vec<Emotion>,
    rating: Option<u8>,
) -> anyhow::Result<()> {
    let rating = rating.unwrap_or(config.capture.default_rating);
    let draft = DreamDraft::new(description, unique_emotions(emotions), rating);
    validate_draft(&draft).context("failed to save your dream")?;
    let record = store.create(draft);
    println!("Dream captured successfully! (id={})", record.id);
    Ok(())
}

/// Render the archive view with filters applied.
fn list(
    store: &DreamStore,
    search: String,
    emotion: Option<Emotion>,
    min_rating: Option<u8>,
    sort: SortDirection,
) -> anyhow::Result<()> {
    let records = store.load();
    let filter = DreamFilter {
        search,
        emotion,
        min_rating: min_rating.unwrap_or(0),
        sort,
    };
    let filtered = filter_dreams(&records, &filter);
    debug!(
        "archive filtered (total={}, shown={})",
        records.len(),
        filtered.len()
    );

    if filtered.is_empty() {
        if records.is_empty() {
            println!("You haven't recorded any dreams yet.");
        } else {
            println!("No dreams match your current filters.");
        }
        return Ok(());
    }

    for group in group_by_month(&filtered) {
        println!("{}", render::month_heading(&group));
        for dream in &group.dreams {
            println!("{}", render::dream_line(dream));
        }
        println!();
    }
    Ok(())
}

/// Show one dream in full detail.
fn show(store: &DreamStore, id: Uuid) -> anyhow::Result<()> {
    let records = store.load();
    let Some(dream) = records.iter().find(|record| record.id == id) else {
        bail!("dream not found: {id}");
    };
    println!("{}", render::dream_detail(dream));
    Ok(())
}

/// Delete a dream after lookup and confirmation.
fn delete(store: &DreamStore, id: Uuid, yes: bool) -> anyhow::Result<()> {
    let records = store.load();
    let Some(dream) = records.iter().find(|record| record.id == id) else {
        bail!("dream not found: {id}");
    };
    println!("{}", render::dream_line(dream));
    if !yes
        && !confirm("Are you sure you want to delete this dream? This action cannot be undone.")?
    {
        println!("Cancelled.");
        return Ok(());
    }
    store.delete(id);
    println!("Dream removed from your journal.");
    Ok(())
}

/// Export the journal to a dated CSV file.
fn export(
    store: &DreamStore,
    config: &SomniaConfig,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let records = store.load();
    let csv = encode_csv(&records);
    if csv.is_empty() {
        println!("No dreams to export.");
        return Ok(());
    }
    let path = match output {
        Some(path) => path,
        None => config.export_dir().join(export_file_name(Utc::now())),
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &csv).context("failed to write export file")?;
    info!(
        "exported journal (records={}, path={})",
        records.len(),
        path.display()
    );
    println!("Exported {} dreams to {}", records.len(), path.display());
    Ok(())
}

/// Prompt for a yes/no confirmation on stdin.
fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Drop duplicate emotion flags, preserving first-seen order.
fn unique_emotions(emotions: Vec<Emotion>) -> Vec<Emotion> {
    let mut unique = Vec::new();
    for emotion in emotions {
        if !unique.contains(&emotion) {
            unique.push(emotion);
        }
    }
    unique
}
