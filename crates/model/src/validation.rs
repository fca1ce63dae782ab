//! Profile validation
//!
//! City and state are required only when the stored profile lacks them: a
//! value already populated upstream is never re-required, but an absent one
//! must be filled before the editor may persist.

use fleet_core::{FieldErrors, FleetError, FleetResult, StateCode};

use crate::profile::UserProfile;

/// Message shown when a required city is missing
pub const CITY_REQUIRED: &str = "City is required";

/// Message shown when a required state is missing
pub const STATE_REQUIRED: &str = "State is required";

/// Local edit buffers of the profile editor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileBuffers {
    /// Digits only
    pub phone: String,
    pub city: String,
    pub state: Option<StateCode>,
}

impl ProfileBuffers {
    /// Buffers initialised from a stored profile
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            phone: profile.phone.clone(),
            city: profile.city.clone(),
            state: profile.state,
        }
    }
}

/// Result of validating the profile buffers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Errors keyed by field (`"city"`, `"state"`)
    pub errors: FieldErrors,
}

impl ValidationResult {
    /// Whether no field failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error for one field, if any
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Convert to a FleetResult, joining every message
    pub fn to_result(self) -> FleetResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let msg = self
                .errors
                .values()
                .cloned()
                .collect::<Vec<_>>()
                .join("; ");
            Err(FleetError::validation(msg))
        }
    }
}

/// Validate edit buffers against the profile they were loaded from
///
/// Every violation is reported; validation never stops at the first one.
pub fn validate_profile(loaded: &UserProfile, buffers: &ProfileBuffers) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !loaded.has_city() && buffers.city.trim().is_empty() {
        result.errors.insert("city", CITY_REQUIRED.to_string());
    }
    if !loaded.has_state() && buffers.state.is_none() {
        result.errors.insert("state", STATE_REQUIRED.to_string());
    }

    result
}

/// Whether any editable field differs from the loaded profile
pub fn has_changes(loaded: &UserProfile, buffers: &ProfileBuffers) -> bool {
    buffers.phone != loaded.phone || buffers.city != loaded.city || buffers.state != loaded.state
}

/// Whether the save action is enabled
///
/// Requires at least one change, and either a profile that already had
/// both city and state, or buffers that now hold both.
pub fn can_save(loaded: &UserProfile, buffers: &ProfileBuffers) -> bool {
    if !has_changes(loaded, buffers) {
        return false;
    }
    if loaded.has_city() && loaded.has_state() {
        return true;
    }
    !buffers.city.trim().is_empty() && buffers.state.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::ProviderIdentity;
    use pretty_assertions::assert_eq;

    fn profile(phone: &str, city: &str, state: Option<StateCode>) -> UserProfile {
        let mut profile = UserProfile::from_identity(&ProviderIdentity::default());
        profile.phone = phone.to_string();
        profile.city = city.to_string();
        profile.state = state;
        profile
    }

    fn buffers(phone: &str, city: &str, state: Option<StateCode>) -> ProfileBuffers {
        ProfileBuffers {
            phone: phone.to_string(),
            city: city.to_string(),
            state,
        }
    }

    #[test]
    fn test_unmodified_buffers_cannot_save() {
        let loaded = profile("11999999999", "SP", Some(StateCode::SP));
        let buffers = ProfileBuffers::from_profile(&loaded);
        assert!(!has_changes(&loaded, &buffers));
        assert!(!can_save(&loaded, &buffers));
    }

    #[test]
    fn test_required_city_blocks_save_until_filled() {
        let loaded = profile("", "", None);

        assert!(!can_save(&loaded, &buffers("", "", Some(StateCode::SP))));
        assert!(can_save(&loaded, &buffers("", "X", Some(StateCode::SP))));
    }

    #[test]
    fn test_populated_profile_allows_clearing_without_blocking() {
        let loaded = profile("", "Recife", Some(StateCode::PE));
        assert!(can_save(&loaded, &buffers("81988887777", "", Some(StateCode::PE))));
        assert!(validate_profile(&loaded, &buffers("", "", None)).is_valid());
    }

    #[test]
    fn test_both_errors_reported_together() {
        let loaded = profile("", "", None);
        let result = validate_profile(&loaded, &buffers("11999999999", "", None));

        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.error("city"), Some(CITY_REQUIRED));
        assert_eq!(result.error("state"), Some(STATE_REQUIRED));
    }

    #[test]
    fn test_only_missing_field_is_required() {
        let loaded = profile("", "Natal", None);
        let result = validate_profile(&loaded, &buffers("", "", None));
        assert_eq!(result.error("city"), None);
        assert_eq!(result.error("state"), Some(STATE_REQUIRED));
    }

    #[test]
    fn test_whitespace_city_counts_as_empty() {
        let loaded = profile("", "", None);
        let result = validate_profile(&loaded, &buffers("", "   ", Some(StateCode::BA)));
        assert_eq!(result.error("city"), Some(CITY_REQUIRED));
    }

    #[test]
    fn test_to_result_joins_messages() {
        let loaded = profile("", "", None);
        let err = validate_profile(&loaded, &ProfileBuffers::default())
            .to_result()
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: City is required; State is required"
        );
    }
}
