//! # Fleet Core
//!
//! Core types, traits, configuration, and error handling for Fleet Dashboard.
//!
//! This crate provides the foundational building blocks shared by the
//! model, the desktop UI, and the CLI:
//!
//! - **Types**: identifiers, state codes, provider identity, feedback severity
//! - **Traits**: `Validatable`, `Persistable`, `Identifiable`, `Timestamped`
//! - **Config**: TOML-backed `AppConfig`
//! - **Errors**: unified error handling with `FleetError` and `FleetResult`
//!

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::AppConfig;
pub use error::{FleetError, FleetResult, ResultExt};
pub use traits::{FieldErrors, Identifiable, Persistable, Timestamped, Validatable};
pub use types::{ProviderIdentity, Severity, StateCode, UserId, VehicleId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
