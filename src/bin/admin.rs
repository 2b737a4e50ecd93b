//! CLI administration tool for shortlink-service.
//!
//! Provides commands for managing user accounts, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new user (prompts for missing values)
//! cargo run --bin admin -- user create --email ops@example.com
//!
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `JWT_SECRET` (required by `user create`): same signing secret as the server

use shortlink_service::application::services::{AuthService, auth_service::MIN_PASSWORD_LENGTH};
use shortlink_service::domain::repositories::{LinkRepository, UserRepository};
use shortlink_service::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use shortlink_service::infrastructure::security::TokenService;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use sqlx::PgPool;
use std::sync::Arc;
use validator::ValidateEmail;

/// CLI tool for managing shortlink-service.
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
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user account
    Create {
        /// Account email (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// List all users
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create { email } => create_user(repo, email).await?,
        UserAction::List => list_users(repo).await?,
    }

    Ok(())
}

/// Creates a user through the same registration path as `POST /auth/register`.
///
/// The password is read with a hidden, confirmed prompt and never echoed.
async fn create_user(repo: Arc<PgUserRepository>, email: Option<String>) -> Result<()> {
    let service = AuthService::new(repo, Arc::new(token_service_from_env()?));

    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new()
            .with_prompt("Email")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.validate_email() {
                    Ok(())
                } else {
                    Err("E-mail not valid!")
                }
            })
            .interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.chars().count() >= MIN_PASSWORD_LENGTH {
                Ok(())
            } else {
                Err("Password must have at least 6 characters")
            }
        })
        .interact()?;

    let user = service
        .register(&email, &password)
        .await
        .map_err(|e| match e.to_error_info().details.get("fields") {
            Some(fields) => anyhow::anyhow!("Failed to create user: {} {}", e, fields),
            None => anyhow::anyhow!("Failed to create user: {}", e),
        })?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!("  ID:    {}", user.id.to_string().bright_black());
    println!("  Email: {}", user.email.cyan());
    println!();

    Ok(())
}

/// Builds the token service from `JWT_SECRET`, which must be set and non-empty.
fn token_service_from_env() -> Result<TokenService> {
    let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
    anyhow::ensure!(!secret.trim().is_empty(), "JWT_SECRET must not be empty");

    Ok(TokenService::new(&secret))
}

/// Lists all users, oldest first.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID                                    Email                          Created
///   ───────────────────────────────────────────────────────────────────────────────
///   8d0c4c5e-...                          ops@example.com                2025-01-15 10:30
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<37} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(87).bright_black());

    for user in &users {
        println!(
            "  {:<37} {:<30} {}",
            user.id.to_string().bright_black(),
            user.email.cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of users
/// - Total number of links
/// - Total number of clicks
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = Arc::new(pool.clone());
    let users_count = PgUserRepository::new(pool.clone())
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count users: {}", e))?;
    let links_count = PgLinkRepository::new(pool.clone())
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    let clicks_count: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM short_links")
            .fetch_one(pool.as_ref())
            .await?;

    println!(
        "  Users:  {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
