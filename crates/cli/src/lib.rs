//! # Fleet CLI
//!
//! Command-line administration for Fleet Dashboard stores.
//!
//! Works directly on the JSON store the desktop app uses, so it can be run
//! while the app is closed to inspect data, grant admin rights, or load demo
//! data.
//!
//! ## Commands
//!
//! - `users` - List registered users
//! - `promote` - Grant or revoke admin rights
//! - `seed` - Insert demo users and vehicles
//! - `vehicles` - List vehicles, optionally for one user
//!

pub mod commands;
pub mod output;

pub use fleet_core;
pub use fleet_model;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "fleet_cli");
    }
}
