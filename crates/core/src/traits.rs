//! Core traits for Fleet Dashboard
//!
//! This module defines the traits that model types implement to provide
//! consistent behavior for validation, persistence, and identity.

use crate::error::{FleetError, FleetResult};
use serde::{Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Validation messages keyed by the form field they belong to
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Trait for types that can be validated
///
/// Implementors report every violation at once, keyed by field, so forms
/// can show all inline errors together instead of failing on the first.
///
/// # Example
///
/// ```rust,ignore
/// use fleet_core::{FieldErrors, Validatable};
///
/// struct Signup {
///     email: String,
/// }
///
/// impl Validatable for Signup {
///     fn field_errors(&self) -> FieldErrors {
///         let mut errors = FieldErrors::new();
///         if !self.email.contains('@') {
///             errors.insert("email", "Invalid email".to_string());
///         }
///         errors
///     }
/// }
/// ```
pub trait Validatable {
    /// All validation errors, keyed by field name
    fn field_errors(&self) -> FieldErrors;

    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or the first field error otherwise.
    fn validate(&self) -> FleetResult<()> {
        match self.field_errors().into_iter().next() {
            None => Ok(()),
            Some((field, message)) => Err(FleetError::field_validation(field, message)),
        }
    }

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.field_errors().is_empty()
    }
}

// ============================================================================
// Persistable Trait
// ============================================================================

/// Trait for documents that are saved to and loaded from JSON files
pub trait Persistable: Serialize + DeserializeOwned + Sized {
    /// Schema version written into new files
    fn schema_version() -> u32 {
        1
    }

    /// Save to a JSON string
    fn to_json(&self) -> FleetResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Load from a JSON string
    fn from_json(json: &str) -> FleetResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Save to a file
    ///
    /// The document is written to a sibling temporary file first and then
    /// renamed over the target, so readers never observe a partial file.
    fn save_to_file(&self, path: &std::path::Path) -> FleetResult<()> {
        let json = self.to_json()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| FleetError::FileWrite {
                    path: parent.to_path_buf(),
                    message: e.to_string(),
                })?;
            }
        }

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json).map_err(|e| FleetError::FileWrite {
            path: tmp_path.clone(),
            message: e.to_string(),
        })?;
        std::fs::rename(&tmp_path, path).map_err(|e| FleetError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from a file
    fn load_from_file(path: &std::path::Path) -> FleetResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| FleetError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }
}

// ============================================================================
// Identifiable Trait
// ============================================================================

/// Trait for types that have a unique identifier
pub trait Identifiable {
    /// Identifier type
    type Id: PartialEq;

    /// Get the unique identifier
    fn id(&self) -> Self::Id;

    /// Check if this matches another identifier
    fn matches_id(&self, id: &Self::Id) -> bool {
        &self.id() == id
    }
}

// ============================================================================
// Timestamped Trait
// ============================================================================

/// Trait for types that track creation and modification times
pub trait Timestamped {
    /// Get the creation timestamp
    fn created_at(&self) -> chrono::DateTime<chrono::Utc>;

    /// Get the last modification timestamp
    fn modified_at(&self) -> chrono::DateTime<chrono::Utc>;

    /// Update the modification timestamp to now
    fn touch(&mut self);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    struct TestForm {
        name: String,
        city: String,
    }

    impl Validatable for TestForm {
        fn field_errors(&self) -> FieldErrors {
            let mut errors = FieldErrors::new();
            if self.name.is_empty() {
                errors.insert("name", "Name is required".to_string());
            }
            if self.city.is_empty() {
                errors.insert("city", "City is required".to_string());
            }
            errors
        }
    }

    #[test]
    fn test_validatable_reports_all_errors() {
        let form = TestForm {
            name: String::new(),
            city: String::new(),
        };
        assert!(!form.is_valid());
        assert_eq!(form.field_errors().len(), 2);
        assert!(form.validate().unwrap_err().is_validation());

        let form = TestForm {
            name: "Ana".into(),
            city: "Recife".into(),
        };
        assert!(form.is_valid());
        assert!(form.validate().is_ok());
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        items: Vec<String>,
    }

    impl Persistable for Doc {}

    #[test]
    fn test_persistable_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("doc.json");
        let doc = Doc {
            items: vec!["a".into(), "b".into()],
        };

        doc.save_to_file(&path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = Doc::load_from_file(&path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_persistable_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Doc::load_from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.is_io());
    }
}
