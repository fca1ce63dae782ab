//! Fleet Dashboard
//!
//! Vehicle management for registered drivers and administrators.
//!
//! This is the main entry point for the Dioxus Desktop application.

use std::sync::Arc;

use anyhow::Context;
use fleet_core::AppConfig;
use fleet_model::{JsonStore, Services, UserService};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    let store_path = config.resolved_store_path();
    let store = Arc::new(
        JsonStore::open(&store_path)
            .with_context(|| format!("Failed to open store at {}", store_path.display()))?,
    );
    let services = Services::from_store(store);

    // Register the signed-in identity before the UI asks for it
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let profile = runtime
        .block_on(services.users.ensure_user(&config.identity))
        .context("Failed to register the signed-in user")?;
    drop(runtime);

    tracing::info!(
        "Signed in as {} ({})",
        profile.name,
        if profile.is_admin { "admin" } else { "driver" }
    );

    fleet_ui::launch(&config, services);
    Ok(())
}
