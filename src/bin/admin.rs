//! CLI administration tool for the campus variable registry.
//!
//! Manages users, session tokens and variables directly against the database.
//!
//! # Usage
//!
//! ```bash
//! # Register a user with a role
//! cargo run --bin campus-admin -- user add --username ana --role "Gerencia Campus"
//!
//! # Issue a session token for the login page
//! cargo run --bin campus-admin -- token issue --username ana --name laptop
//!
//! # List and revoke tokens
//! cargo run --bin campus-admin -- token list
//! cargo run --bin campus-admin -- token revoke 3
//!
//! # Register and list variables
//! cargo run --bin campus-admin -- variable add --name aforo --value 120
//! cargo run --bin campus-admin -- variable list
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `campus_variables::config`); `DATABASE_URL` and
//! `TOKEN_SIGNING_SECRET` are required.

use campus_variables::application::services::{AuthService, VariableService};
use campus_variables::config;
use campus_variables::domain::GERENCIA_CAMPUS;
use campus_variables::domain::repositories::UserRepository;
use campus_variables::infrastructure::persistence::{
    PgTokenRepository, PgUserRepository, PgVariableRepository,
};
use campus_variables::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the campus variable registry.
#[derive(Parser)]
#[command(name = "campus-admin")]
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

    /// Manage session tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage variables
    Variable {
        #[command(subcommand)]
        action: VariableAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Register a user
    Add {
        #[arg(short, long)]
        username: String,

        /// Organizational role, matched exactly (e.g. "Gerencia Campus")
        #[arg(short, long)]
        role: String,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Issue a new session token for a user
    Issue {
        #[arg(short, long)]
        username: String,

        /// Token label (e.g. "laptop")
        #[arg(short, long, default_value = "default")]
        name: String,
    },

    /// List all tokens
    List,

    /// Revoke a token by ID
    Revoke {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum VariableAction {
    /// Register a variable
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        value: String,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// List all variables
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Token { action } => {
            let service = auth_service(&pool, config.token_signing_secret.clone());
            handle_token_action(action, &service).await?
        }
        Commands::Variable { action } => handle_variable_action(action, &pool).await?,
    }

    Ok(())
}

fn auth_service(pool: &PgPool, signing_secret: String) -> AuthService {
    let pool = Arc::new(pool.clone());
    AuthService::new(
        Arc::new(PgTokenRepository::new(pool.clone())),
        Arc::new(PgUserRepository::new(pool)),
        signing_secret,
    )
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    match action {
        UserAction::Add { username, role } => {
            let username = username.trim();
            anyhow::ensure!(!username.is_empty(), "Username must not be empty");

            if role != GERENCIA_CAMPUS {
                println!(
                    "{} role {} cannot view variables",
                    "⚠️ ".yellow(),
                    role.cyan()
                );
            }

            let user = repo
                .create(username, &role)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

            println!(
                "{} User {} (id {}) registered as {}",
                "✅".green(),
                user.username.cyan(),
                user.id.to_string().bright_black(),
                user.role.bright_white().bold()
            );
        }
    }

    Ok(())
}

async fn handle_token_action(action: TokenAction, service: &AuthService) -> Result<()> {
    match action {
        TokenAction::Issue { username, name } => {
            let token = service
                .issue_token(&username, &name)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))?;

            println!("{}", "🔑 Session token issued".bright_blue().bold());
            println!();
            println!("  User:  {}", username.cyan());
            println!("  Name:  {}", name.cyan());
            println!("  Token: {}", token.bright_yellow().bold());
            println!();
            println!(
                "{}",
                "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
                    .red()
                    .bold()
            );
            println!("  Paste it on {} to sign in.", "/login".bright_cyan());
        }
        TokenAction::List => list_tokens(service).await?,
        TokenAction::Revoke { id, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Revoke token {id}?"))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            service
                .revoke_token(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

            println!("{}", "✅ Token revoked successfully!".green().bold());
        }
    }

    Ok(())
}

/// Lists all tokens with status indicators.
///
/// ```text
/// 📋 Session Tokens
///
///   ID  User  Name        Last used            Status
///   1   7     laptop      2024-01-15 10:30     ACTIVE
///   2   7     phone       never                REVOKED
/// ```
async fn list_tokens(service: &AuthService) -> Result<()> {
    println!("{}", "📋 Session Tokens".bright_blue().bold());
    println!();

    let tokens = service
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<5} {:<20} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "User".bright_white().bold(),
        "Name".bright_white().bold(),
        "Last used".bright_white().bold(),
        "Status".bright_white().bold()
    );

    for token in &tokens {
        let status = if token.revoked_at.is_some() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };
        let last_used = token
            .last_used_at
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<5} {:<5} {:<20} {:<20} {}",
            token.id.to_string().bright_black(),
            token.user_id.to_string().bright_black(),
            token.name.cyan(),
            last_used.bright_black(),
            status
        );
    }

    println!();
    println!("  Total: {}", tokens.len().to_string().bright_white().bold());

    Ok(())
}

async fn handle_variable_action(action: VariableAction, pool: &PgPool) -> Result<()> {
    let service = VariableService::new(Arc::new(PgVariableRepository::new(Arc::new(
        pool.clone(),
    ))));

    match action {
        VariableAction::Add {
            name,
            value,
            description,
        } => {
            let variable = service
                .create_variable(name, value, description)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create variable: {}", e))?;

            println!(
                "{} Variable {} = {}",
                "✅".green(),
                variable.name.cyan(),
                variable.value.bright_white().bold()
            );
        }
        VariableAction::List => {
            let variables = service
                .list_variables()
                .await
                .context("Failed to list variables")?;

            if variables.is_empty() {
                println!("{}", "  No variables registered".yellow());
                return Ok(());
            }

            for variable in &variables {
                println!(
                    "  {:<30} {:<20} {}",
                    variable.name.cyan(),
                    variable.value.bright_white(),
                    variable.description.as_deref().unwrap_or("").bright_black()
                );
            }
        }
    }

    Ok(())
}
