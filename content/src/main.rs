//! Portfolio CLI - preview the project feed the way the site will see it
//!
//! # Commands
//!
//! ```bash
//! portfolio parse                           # Map the feed from PORTFOLIO_CSV_URL
//! portfolio parse projects.csv -o out.json  # Map a local export
//! portfolio parse --category electronics    # Only one gallery tab
//! portfolio categories                      # List category ids
//! portfolio embed https://youtu.be/abc123   # Check a video link
//! ```

use clap::{Parser, Subcommand};
use portfolio::categories::{filter_tabs, CategoryFilter};
use portfolio::{load_from_source, resolve_video_embed, FeedConfig, FeedError, RowOrder};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Inspect the portfolio's spreadsheet-driven project feed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a CSV feed to project records and print them as JSON
    Parse {
        /// CSV file or http(s) URL (default: PORTFOLIO_CSV_URL)
        input: Option<String>,

        /// Display order: sheet or newest-first (default: PORTFOLIO_ROW_ORDER or sheet)
        #[arg(long)]
        order: Option<RowOrder>,

        /// Only keep records in this category id
        #[arg(short, long)]
        category: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List gallery categories
    Categories,

    /// Resolve a project video URL
    Embed {
        /// Video URL as entered in the sheet
        url: String,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            order,
            category,
            output,
        } => cmd_parse(input, order, category, output.as_deref()).await,

        Commands::Categories => cmd_categories(),

        Commands::Embed { url } => cmd_embed(&url),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_parse(
    input: Option<String>,
    order: Option<RowOrder>,
    category: Option<String>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = FeedConfig::from_env()?;
    let order = order.unwrap_or(config.order);
    let source = match input {
        Some(source) => source,
        None => config.csv_url.clone().ok_or(FeedError::MissingUrl)?,
    };

    eprintln!("📄 Loading feed: {}", source);

    let (records, parsed) = load_from_source(&source, order).await?;

    eprintln!("   Encoding: {}", parsed.encoding);
    eprintln!("   Delimiter: '{}'", format_delimiter(parsed.delimiter));
    eprintln!("   Columns: {}", parsed.headers.join(", "));
    eprintln!("   Order: {}", order);

    let generated = records.iter().filter(|r| r.id.is_generated()).count();
    if generated > 0 {
        eprintln!("   ⚠️  {} rows without a usable numeric id", generated);
    }

    let filter = category
        .as_deref()
        .map(CategoryFilter::from_id)
        .unwrap_or_default();
    let visible = filter.apply(&records);

    eprintln!("✅ Mapped {} projects ({} shown for '{}')", records.len(), visible.len(), filter.id());

    let json = serde_json::to_string_pretty(&visible)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_categories() -> Result<(), Box<dyn std::error::Error>> {
    for tab in filter_tabs() {
        println!("  {:<15} {}", tab.filter.id(), tab.label);
    }
    Ok(())
}

fn cmd_embed(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    match resolve_video_embed(url) {
        Some(embed) => println!("{}", embed),
        None => eprintln!("ℹ️  Not a YouTube link; the site plays it as a direct video file."),
    }
    Ok(())
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
