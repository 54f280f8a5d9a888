//! Parkside CLI - maintenance tools for operators.
//!
//! # Usage
//!
//! ```bash
//! # Create a back-office admin account
//! parkside-cli admin create -e admin@example.com -n "Site Admin"
//!
//! # Check that an admin account is usable
//! parkside-cli admin verify -e admin@example.com
//!
//! # Smoke-test registration against a running server
//! parkside-cli smoke register --base-url http://localhost:3000
//! ```
//!
//! Database commands read `DATABASE_URL` from the environment (a `.env`
//! file is honored). The admin password comes from `PARKSIDE_ADMIN_PASSWORD`
//! or is generated when unset.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "parkside-cli")]
#[command(author, version, about = "Parkside maintenance tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage back-office admin accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Smoke tests against a running server
    Smoke {
        #[command(subcommand)]
        action: SmokeAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin account
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name
        #[arg(short, long)]
        name: String,

        /// Optional phone number
        #[arg(short, long)]
        phone: Option<String>,
    },
    /// Verify that an account exists, is active, and holds the admin role
    Verify {
        /// Email address to check
        #[arg(short, long)]
        email: String,
    },
}

#[derive(Subcommand)]
enum SmokeAction {
    /// Register a throwaway account over HTTP and read it back
    Register {
        /// Base URL of the running server
        #[arg(long, default_value = "http://localhost:3000")]
        base_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Admin { action } => {
            let database_url = std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
            let pool = parkside_db::create_pool(&database_url).await?;
            parkside_db::run_migrations(&pool).await?;

            match action {
                AdminAction::Create { email, name, phone } => {
                    commands::admin::create(&pool, &email, &name, phone.as_deref()).await
                }
                AdminAction::Verify { email } => commands::admin::verify(&pool, &email).await,
            }
        }
        Commands::Smoke { action } => match action {
            SmokeAction::Register { base_url } => commands::smoke::register(&base_url).await,
        },
    }
}
