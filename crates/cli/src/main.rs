//! Fleet CLI - store administration for Fleet Dashboard.
//!
//! # Usage
//!
//! ```bash
//! # List users
//! fleet users
//!
//! # Make a user an administrator
//! fleet promote <UID>
//!
//! # Take admin rights away again
//! fleet promote <UID> --revoke
//!
//! # Load demo data into a scratch store
//! fleet --store /tmp/fleet.json seed
//!
//! # List one user's vehicles
//! fleet vehicles --user <UID>
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fleet_cli::commands;
use fleet_core::AppConfig;
use fleet_model::{JsonStore, Services};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fleet")]
#[command(author, version, about = "Fleet Dashboard store administration")]
struct Cli {
    /// Store file (defaults to the configured store)
    #[arg(long, global = true, env = "FLEET_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered users
    Users,
    /// Grant admin rights to a user
    Promote {
        /// Provider uid of the user
        uid: String,

        /// Revoke admin rights instead
        #[arg(long)]
        revoke: bool,
    },
    /// Insert demo users and vehicles
    Seed,
    /// List vehicles
    Vehicles {
        /// Only this user's vehicles
        #[arg(short, long)]
        user: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the command output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store_path = match cli.store {
        Some(path) => path,
        None => AppConfig::load()
            .context("Failed to load configuration")?
            .resolved_store_path(),
    };
    let store = JsonStore::open(&store_path)
        .with_context(|| format!("Failed to open store at {}", store_path.display()))?;
    let services = Services::from_store(Arc::new(store));

    match cli.command {
        Commands::Users => commands::list_users(&services).await?,
        Commands::Promote { uid, revoke } => commands::promote(&services, &uid, !revoke).await?,
        Commands::Seed => commands::seed(&services).await?,
        Commands::Vehicles { user } => commands::list_vehicles(&services, user.as_deref()).await?,
    }
    Ok(())
}
