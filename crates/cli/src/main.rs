//! MindWell CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! mw-cli migrate
//!
//! # Seed the default admin account and counselor catalog
//! mw-cli seed
//!
//! # Create an account
//! mw-cli account create -e admin2@mindwell.com -n "Second Admin" -p 'a-password' -r admin
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed bootstrap data (idempotent)
//! - `account create` - Create accounts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mw-cli")]
#[command(author, version, about = "MindWell CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the default admin account and counselor catalog
    Seed,
    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Create a new account
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Password (argon2-hashed before storage)
        #[arg(short, long)]
        password: String,

        /// Role (`admin`, `employee`)
        #[arg(short, long, default_value = "employee")]
        role: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Account { action } => match action {
            AccountAction::Create {
                email,
                name,
                password,
                role,
            } => {
                commands::account::create(&email, &name, &password, &role).await?;
            }
        },
    }
    Ok(())
}
