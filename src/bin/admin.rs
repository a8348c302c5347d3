//! CLI administration tool for shortlink-api.
//!
//! Manages URL records directly against the configured store, without
//! going through the HTTP API. Validation and error messages are the same
//! as the API's, since both run through [`UrlService`].
//!
//! # Usage
//!
//! ```bash
//! # Create a record
//! cargo run --bin admin -- create ab12 https://example.com
//!
//! # List all records
//! cargo run --bin admin -- list
//!
//! # Show a record
//! cargo run --bin admin -- get ab12
//!
//! # Point a slug at a new URL
//! cargo run --bin admin -- update ab12 https://example.org
//!
//! # Delete a record (asks for confirmation unless --yes)
//! cargo run --bin admin -- delete ab12
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`shortlink_api::config`]. `TABLE_NAME` is
//! required unless `STORE_BACKEND=memory`.

use shortlink_api::application::services::UrlService;
use shortlink_api::config;
use shortlink_api::domain::entities::UrlRecord;
use shortlink_api::infrastructure::persistence::build_repository;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing shortlink-api records.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new record
    Create {
        /// Slug to register
        slug: String,

        /// Absolute URL the slug redirects to
        full_url: String,
    },

    /// List all records
    List,

    /// Show a single record
    Get {
        slug: String,
    },

    /// Replace the URL of an existing record
    Update {
        slug: String,

        /// New absolute URL
        full_url: String,
    },

    /// Delete a record
    Delete {
        slug: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let service = UrlService::new(build_repository(&config).await);

    match cli.command {
        Commands::Create { slug, full_url } => create_url(&service, &slug, &full_url).await?,
        Commands::List => list_urls(&service).await?,
        Commands::Get { slug } => get_url(&service, &slug).await?,
        Commands::Update { slug, full_url } => update_url(&service, &slug, &full_url).await?,
        Commands::Delete { slug, yes } => delete_url(&service, &slug, yes).await?,
    }

    Ok(())
}

async fn create_url(service: &UrlService, slug: &str, full_url: &str) -> Result<()> {
    println!("{}", "🔗 Create URL".bright_blue().bold());
    println!();

    let record = service.create_url(Some(slug), Some(full_url)).await?;

    print_record(&record);
    println!("{}", "✅ URL created successfully!".green().bold());
    println!();

    Ok(())
}

/// Lists all records.
///
/// # Output Format
///
/// ```text
/// 📋 URLs
///
///   Slug             URL                                      Updated
///   ───────────────────────────────────────────────────────────────────────────
///   ab12             https://example.com                      2024-01-15 10:30
/// ```
async fn list_urls(service: &UrlService) -> Result<()> {
    println!("{}", "📋 URLs".bright_blue().bold());
    println!();

    let mut records = service.list_urls().await?;

    if records.is_empty() {
        println!("{}", "  No URLs found".yellow());
        println!();
        println!(
            "  Create one with: {} admin create <slug> <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    // Store order is unspecified; sort for stable output.
    records.sort_by(|a, b| a.slug.cmp(&b.slug));

    println!(
        "  {:<16} {:<40} {:<20}",
        "Slug".bright_white().bold(),
        "URL".bright_white().bold(),
        "Updated".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<16} {:<40} {}",
            record.slug.cyan(),
            record.full_url,
            record
                .updated_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn get_url(service: &UrlService, slug: &str) -> Result<()> {
    let record = service.get_url(slug).await?;
    print_record(&record);
    Ok(())
}

async fn update_url(service: &UrlService, slug: &str, full_url: &str) -> Result<()> {
    println!("{}", "✏️  Update URL".bright_blue().bold());
    println!();

    let record = service.update_url(slug, Some(full_url)).await?;

    print_record(&record);
    println!("{}", "✅ URL updated successfully!".green().bold());
    println!();

    Ok(())
}

/// Deletes a record after confirmation (default: No).
async fn delete_url(service: &UrlService, slug: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete URL".bright_blue().bold());
    println!();

    let record = service.get_url(slug).await?;
    print_record(&record);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete_url(slug).await?;

    println!();
    println!("{}", "✅ URL deleted successfully!".green().bold());
    println!();

    Ok(())
}

fn print_record(record: &UrlRecord) {
    println!("  Slug:    {}", record.slug.cyan());
    println!("  URL:     {}", record.full_url.bright_white());
    println!(
        "  Created: {}",
        record.created_at.to_rfc3339().bright_black()
    );
    println!(
        "  Updated: {}",
        record.updated_at.to_rfc3339().bright_black()
    );
    println!();
}
