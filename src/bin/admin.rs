//! CLI administration tool for vendor-registry.
//!
//! Manages users and inspects vendors directly against the database,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check that the database is reachable
//! cargo run --bin admin -- db check
//!
//! # Show row counts
//! cargo run --bin admin -- db info
//!
//! # Create a user (prompts for missing values)
//! cargo run --bin admin -- user create --email ops@example.com
//!
//! # List users / vendors
//! cargo run --bin admin -- user list
//! cargo run --bin admin -- vendor list
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use vendor_registry::application::services::{AuthService, VendorService};
use vendor_registry::config::mask_connection_string;
use vendor_registry::infrastructure::persistence::{PgUserRepository, PgVendorRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing vendor-registry.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect vendors
    Vendor {
        #[command(subcommand)]
        action: VendorAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Register a new user
    Create {
        /// Email address (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Password (prompted without echo if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// List all users
    List,
}

/// Vendor subcommands.
#[derive(Subcommand)]
enum VendorAction {
    /// List all vendors
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

    // `db check` reports connection failures itself, so it opens its own pool.
    if let Commands::Db {
        action: DbAction::Check,
    } = cli.command
    {
        return check_connection(&database_url).await;
    }

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let result = match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await,
        Commands::Vendor { action } => handle_vendor_action(action, &pool).await,
        Commands::Db { .. } => show_db_info(&pool).await,
    };

    pool.close().await;

    result
}

/// Connects, reports the outcome, and disconnects.
async fn check_connection(database_url: &str) -> Result<()> {
    println!("{}", "Database connection check".bright_blue().bold());
    println!("  URL: {}", mask_connection_string(database_url).bright_black());
    println!();

    match PgPool::connect(database_url).await {
        Ok(pool) => {
            sqlx::query("SELECT 1")
                .execute(&pool)
                .await
                .context("Connected, but test query failed")?;
            pool.close().await;
            println!("{}", "Database connection successful".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "Database connection error:".red().bold(), e);
            Err(e).context("Database connection check failed")
        }
    }
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let service = AuthService::new(Arc::new(PgUserRepository::new(Arc::new(pool.clone()))));

    match action {
        UserAction::Create { email, password } => create_user(&service, email, password).await,
        UserAction::List => list_users(&service).await,
    }
}

/// Registers a user through the same service the HTTP API uses, so the
/// duplicate check and password hashing are identical.
async fn create_user(
    service: &AuthService<PgUserRepository>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    println!("{}", "Create user".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) if !e.is_empty() => e,
        _ => Input::new()
            .with_prompt("Email")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Email is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()?,
    };

    let password = match password {
        Some(p) if !p.is_empty() => p,
        _ => Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    if password.is_empty() {
        anyhow::bail!("Password is required");
    }

    let user = service
        .register(email, password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "User created successfully!".green().bold());
    println!("  ID:    {}", user.id.to_string().bright_black());
    println!("  Email: {}", user.email.cyan());
    println!();

    Ok(())
}

async fn list_users(service: &AuthService<PgUserRepository>) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let users = service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<36} {:<40} {:<20}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "-".repeat(96).bright_black());

    for user in &users {
        println!(
            "  {:<36} {:<40} {}",
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

async fn handle_vendor_action(action: VendorAction, pool: &PgPool) -> Result<()> {
    let service = VendorService::new(Arc::new(PgVendorRepository::new(Arc::new(pool.clone()))));

    match action {
        VendorAction::List => {
            println!("{}", "Vendors".bright_blue().bold());
            println!();

            let vendors = service
                .list_vendors()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list vendors: {}", e))?;

            if vendors.is_empty() {
                println!("{}", "  No vendors found".yellow());
                return Ok(());
            }

            for vendor in &vendors {
                println!(
                    "  {} {}",
                    vendor.name.cyan().bold(),
                    format!("({})", vendor.id).bright_black()
                );
                println!("    Contact:  {}", vendor.contact);
                println!("    Services: {}", vendor.services);
                println!(
                    "    Created:  {}",
                    vendor
                        .created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black()
                );
            }

            println!();
            println!("  Total: {}", vendors.len().to_string().bright_white().bold());
            println!();
        }
    }

    Ok(())
}

/// Prints the server version and row counts, read through the same services
/// the HTTP API uses.
async fn show_db_info(pool: &PgPool) -> Result<()> {
    let shared = Arc::new(pool.clone());
    let users = AuthService::new(Arc::new(PgUserRepository::new(shared.clone())));
    let vendors = VendorService::new(Arc::new(PgVendorRepository::new(shared)));

    println!("{}", "Database info".bright_blue().bold());
    println!();

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await
        .context("Failed to read server version")?;
    let user_count = users
        .count_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count users: {}", e))?;
    let vendor_count = vendors
        .count_vendors()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count vendors: {}", e))?;

    println!("  Server:  {}", version.bright_black());
    println!("  Users:   {}", user_count.to_string().bright_white().bold());
    println!("  Vendors: {}", vendor_count.to_string().bright_white().bold());
    println!();

    Ok(())
}
