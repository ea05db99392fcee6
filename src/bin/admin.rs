//! CLI administration tool for nurl.
//!
//! Runs store operations directly against PostgreSQL, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Create or reuse an alias
//! cargo run --bin admin -- shorten https://example.com/some/page
//!
//! # Look up an alias
//! cargo run --bin admin -- resolve Ab3dE9x
//! ```
//!
//! # Environment Variables
//!
//! Uses the same variables as the server (see `nurl::config`); `STORE` is
//! ignored and PostgreSQL is always used.

use nurl::application::services::UrlService;
use nurl::config::{Config, StoreKind};
use nurl::infrastructure::persistence::PgUrlRepository;
use nurl::server::{connect_pool, migrate};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing nurl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show statistics
    Stats,

    /// Create (or reuse) a short alias for a URL
    Shorten {
        /// Long URL to shorten
        url: String,
    },

    /// Show the URL an alias points to
    Resolve {
        /// Seven-character alias
        alias: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    config.store = StoreKind::Postgres;
    config.validate()?;

    let pool = connect_pool(&config).await?;

    let result = match cli.command {
        Commands::Db { action } => {
            handle_db_action(action, &pool, service(&pool, &config)).await
        }
        Commands::Stats => handle_stats(service(&pool, &config)).await,
        Commands::Shorten { url } => handle_shorten(service(&pool, &config), &url).await,
        Commands::Resolve { alias } => handle_resolve(service(&pool, &config), &alias).await,
    };

    pool.close().await;
    result
}

fn service(pool: &PgPool, config: &Config) -> UrlService {
    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));
    UrlService::new(repository, config.base_url.clone())
        .with_alias_max_attempts(config.alias_max_attempts)
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, service: UrlService) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            service.ping().await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            migrate(pool).await?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}

/// Displays the number of stored aliases.
async fn handle_stats(service: UrlService) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let count = service.count().await?;

    println!("  Aliases: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

async fn handle_shorten(service: UrlService, url: &str) -> Result<()> {
    let short = service.create_or_reuse_mapping(url).await?;

    println!(
        "Shortened \"{}\" to \"{}\"",
        url.cyan(),
        service.short_url(&short).bright_yellow().bold()
    );

    Ok(())
}

async fn handle_resolve(service: UrlService, alias: &str) -> Result<()> {
    match service.resolve_mapping(alias).await? {
        Some(record) => {
            println!("  Alias:     {}", record.short.cyan());
            println!("  URL:       {}", record.long_url.bright_white());
            println!(
                "  Created:   {}",
                record
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
        }
        None => {
            println!("{}", format!("Alias '{}' not found", alias).yellow());
        }
    }

    Ok(())
}
