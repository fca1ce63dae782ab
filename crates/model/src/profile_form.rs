//! Profile editor state
//!
//! Lifecycle: a new form is created each time the editor opens, the fetched
//! profile is loaded into it, the user edits the buffers, and on save the
//! form validates and yields the update to persist. Closing discards it.

use fleet_core::{FieldErrors, StateCode};

use crate::phone::{digits_only, format_phone};
use crate::profile::{ProfileUpdate, UserProfile};
use crate::validation::{ProfileBuffers, can_save, has_changes, validate_profile};

/// Whether the editor allows changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    View,
    #[default]
    Edit,
}

impl EditorMode {
    pub fn title(&self) -> &'static str {
        match self {
            EditorMode::View => "Profile",
            EditorMode::Edit => "Edit Profile",
        }
    }
}

/// Edit buffers plus the profile they were loaded from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub mode: EditorMode,
    loaded: Option<UserProfile>,
    buffers: ProfileBuffers,
    errors: FieldErrors,
}

impl ProfileForm {
    pub fn new(mode: EditorMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Replace every buffer with the fetched profile and clear errors
    pub fn load(&mut self, profile: UserProfile) {
        self.buffers = ProfileBuffers::from_profile(&profile);
        self.loaded = Some(profile);
        self.errors.clear();
    }

    pub fn loaded(&self) -> Option<&UserProfile> {
        self.loaded.as_ref()
    }

    /// Stored name, empty until a profile is loaded
    pub fn name(&self) -> &str {
        self.loaded.as_ref().map_or("", |p| p.name.as_str())
    }

    /// Stored email, empty until a profile is loaded
    pub fn email(&self) -> &str {
        self.loaded.as_ref().map_or("", |p| p.email.as_str())
    }

    pub fn buffers(&self) -> &ProfileBuffers {
        &self.buffers
    }

    pub fn is_editable(&self) -> bool {
        self.mode == EditorMode::Edit && self.loaded.is_some()
    }

    /// Store the digits of the input
    pub fn set_phone(&mut self, input: &str) {
        self.buffers.phone = digits_only(input);
    }

    /// Phone as shown in the input, derived from the stored digits
    pub fn display_phone(&self) -> String {
        format_phone(&self.buffers.phone)
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.buffers.city = city.into();
        self.errors.remove("city");
    }

    /// Set the state from the selector value; an empty or unknown value clears it
    pub fn set_state(&mut self, value: &str) {
        self.buffers.state = value.parse::<StateCode>().ok();
        self.errors.remove("state");
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// City is marked required only when the loaded profile lacks one
    pub fn city_required(&self) -> bool {
        self.loaded.as_ref().is_some_and(|p| !p.has_city())
    }

    /// State is marked required only when the loaded profile lacks one
    pub fn state_required(&self) -> bool {
        self.loaded.as_ref().is_some_and(|p| !p.has_state())
    }

    pub fn has_changes(&self) -> bool {
        self.loaded
            .as_ref()
            .is_some_and(|loaded| has_changes(loaded, &self.buffers))
    }

    pub fn can_save(&self) -> bool {
        self.mode == EditorMode::Edit
            && self
                .loaded
                .as_ref()
                .is_some_and(|loaded| can_save(loaded, &self.buffers))
    }

    /// Validate and build the update to persist
    ///
    /// On failure the errors are recorded on the form and `None` is returned.
    /// Empty city/state buffers fall back to the loaded values.
    pub fn prepare_save(&mut self) -> Option<ProfileUpdate> {
        let loaded = self.loaded.as_ref()?;

        let result = validate_profile(loaded, &self.buffers);
        if !result.is_valid() {
            self.errors = result.errors;
            return None;
        }
        self.errors.clear();

        let city = if self.buffers.city.trim().is_empty() {
            loaded.city.clone()
        } else {
            self.buffers.city.trim().to_string()
        };

        Some(ProfileUpdate {
            phone: Some(self.buffers.phone.clone()),
            city: Some(city),
            state: self.buffers.state.or(loaded.state),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{CITY_REQUIRED, STATE_REQUIRED};
    use fleet_core::ProviderIdentity;
    use pretty_assertions::assert_eq;

    fn empty_profile() -> UserProfile {
        UserProfile::from_identity(&ProviderIdentity::default())
    }

    fn complete_profile() -> UserProfile {
        let mut profile = empty_profile();
        profile.phone = "11999999999".into();
        profile.city = "São Paulo".into();
        profile.state = Some(StateCode::SP);
        profile
    }

    #[test]
    fn test_load_replaces_buffers_and_clears_errors() {
        let mut form = ProfileForm::new(EditorMode::Edit);
        form.load(empty_profile());
        assert!(form.prepare_save().is_none());
        assert_eq!(form.error("city"), Some(CITY_REQUIRED));

        form.load(complete_profile());
        assert_eq!(form.error("city"), None);
        assert_eq!(form.buffers().city, "São Paulo");
        assert_eq!(form.display_phone(), "(11) 99999-9999");
    }

    #[test]
    fn test_phone_kept_as_digits() {
        let mut form = ProfileForm::new(EditorMode::Edit);
        form.load(empty_profile());
        form.set_phone("(21) 3333-4444");
        assert_eq!(form.buffers().phone, "2133334444");
        assert_eq!(form.display_phone(), "(21) 3333-4444");
    }

    #[test]
    fn test_editing_a_field_clears_its_error_only() {
        let mut form = ProfileForm::new(EditorMode::Edit);
        form.load(empty_profile());
        assert!(form.prepare_save().is_none());
        assert_eq!(form.error("state"), Some(STATE_REQUIRED));

        form.set_city("Curitiba");
        assert_eq!(form.error("city"), None);
        assert_eq!(form.error("state"), Some(STATE_REQUIRED));

        form.set_state("PR");
        assert_eq!(form.error("state"), None);
        assert_eq!(form.buffers().state, Some(StateCode::PR));
    }

    #[test]
    fn test_can_save_gating() {
        let mut form = ProfileForm::new(EditorMode::Edit);
        assert!(!form.can_save());

        form.load(empty_profile());
        assert!(!form.can_save());
        form.set_state("SP");
        assert!(!form.can_save());
        form.set_city("X");
        assert!(form.can_save());
    }

    #[test]
    fn test_view_mode_never_saves() {
        let mut form = ProfileForm::new(EditorMode::View);
        form.load(empty_profile());
        form.set_city("X");
        form.set_state("SP");
        assert!(!form.is_editable());
        assert!(!form.can_save());
    }

    #[test]
    fn test_prepare_save_falls_back_to_loaded_values() {
        let mut form = ProfileForm::new(EditorMode::Edit);
        form.load(complete_profile());
        form.set_city("");
        form.set_state("");
        form.set_phone("11 98888-7777");

        let update = form.prepare_save().unwrap();
        assert_eq!(
            update,
            ProfileUpdate {
                phone: Some("11988887777".into()),
                city: Some("São Paulo".into()),
                state: Some(StateCode::SP),
            }
        );
    }

    #[test]
    fn test_required_markers_follow_loaded_profile() {
        let mut form = ProfileForm::new(EditorMode::Edit);
        assert!(!form.city_required());
        form.load(empty_profile());
        assert!(form.city_required());
        assert!(form.state_required());
        form.load(complete_profile());
        assert!(!form.city_required());
        assert!(!form.state_required());
    }

    #[test]
    fn test_name_and_email_come_from_loaded_profile() {
        let mut form = ProfileForm::new(EditorMode::View);
        assert_eq!(form.name(), "");

        let mut profile = complete_profile();
        profile.name = "Ana Souza".into();
        profile.email = "ana@fleet.example".into();
        form.load(profile);
        assert_eq!(form.name(), "Ana Souza");
        assert_eq!(form.email(), "ana@fleet.example");
    }
}
