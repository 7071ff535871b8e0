//! Administrative CLI
//!
//! Applies migrations, creates users without going through GraphQL, and
//! prints the GraphQL schema as SDL.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hackernews_core::config::Config;
use hackernews_core::db;
use hackernews_core::domains::users::actions::register_user;
use hackernews_core::server::graphql::create_schema;
use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "manage")]
#[command(about = "Hacker News API management commands")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,

    /// Create a user account
    CreateUser {
        #[arg(long)]
        username: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Print the GraphQL schema (SDL) to stdout
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,hackernews_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate => cmd_migrate().await,
        Commands::CreateUser {
            username,
            email,
            password,
        } => cmd_create_user(&username, &email, &password).await,
        Commands::Schema => cmd_schema(),
    }
}

async fn get_pool() -> Result<PgPool> {
    let config = Config::from_env().context("Failed to load configuration")?;
    db::connect(&config).await
}

// ============================================================================
// Commands
// ============================================================================

async fn cmd_migrate() -> Result<()> {
    let pool = get_pool().await?;
    db::migrate(&pool).await?;
    println!("Migrations applied");
    Ok(())
}

async fn cmd_create_user(username: &str, email: &str, password: &str) -> Result<()> {
    let pool = get_pool().await?;
    let user = register_user(username, email, password, &pool).await?;
    println!("Created user {} (id {})", user.username, user.id);
    Ok(())
}

fn cmd_schema() -> Result<()> {
    println!("{}", create_schema().as_sdl());
    Ok(())
}
