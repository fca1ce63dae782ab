//! Error types for Fleet Dashboard
//!
//! This module provides unified error handling across the workspace:
//! validation errors, missing users and vehicles, store IO and
//! serialization failures, configuration problems, and service failures.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Fleet Dashboard
#[derive(Debug, Error)]
pub enum FleetError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A single form field failed validation
    #[error("Invalid value for '{field}': {message}")]
    FieldValidation { field: String, message: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// No user record exists for the given uid
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The vehicle does not exist or is not owned by the given user
    #[error("Vehicle '{vehicle}' not found for user '{user}'")]
    VehicleNotFound { user: String, vehicle: String },

    // ========================================================================
    // Store Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Store file written by a newer version
    #[error("Schema version mismatch: expected at most {expected}, found {found}")]
    SchemaVersionMismatch { expected: u32, found: u32 },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Service Errors
    // ========================================================================
    /// A backend call failed (transport, injected failure, unavailable store)
    #[error("Service error: {0}")]
    Service(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl FleetError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        FleetError::Validation(msg.into())
    }

    /// Create a field validation error
    pub fn field_validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        FleetError::FieldValidation {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a vehicle-not-found error
    pub fn vehicle_not_found(user: impl Into<String>, vehicle: impl ToString) -> Self {
        FleetError::VehicleNotFound {
            user: user.into(),
            vehicle: vehicle.to_string(),
        }
    }

    /// Create a service error
    pub fn service(msg: impl Into<String>) -> Self {
        FleetError::Service(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        FleetError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FleetError::Validation(_) | FleetError::FieldValidation { .. }
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FleetError::UserNotFound(_) | FleetError::VehicleNotFound { .. }
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            FleetError::Io(_) | FleetError::FileRead { .. } | FleetError::FileWrite { .. }
        )
    }
}

/// Result type alias using FleetError
pub type FleetResult<T> = Result<T, FleetError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> FleetResult<T>;
}

impl<T, E: Into<FleetError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> FleetResult<T> {
        self.map_err(|e| {
            let err: FleetError = e.into();
            FleetError::with_context(context, err.to_string())
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
