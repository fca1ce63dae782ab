//! User profile records
//!
//! A profile is keyed by the identity provider's uid. Name and email are
//! copied from the provider on first sign-in; phone, city, and state are
//! maintained by the user through the profile editor.

use chrono::{DateTime, Utc};
use fleet_core::{Identifiable, ProviderIdentity, StateCode, Timestamped, UserId};
use serde::{Deserialize, Serialize};

/// Stored profile of a dashboard user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Provider uid
    pub uid: UserId,

    /// Display name from the provider
    pub name: String,

    /// Email from the provider (read-only in the UI)
    pub email: String,

    /// Digits only; empty when not registered
    #[serde(default)]
    pub phone: String,

    /// Empty when not registered
    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub state: Option<StateCode>,

    #[serde(default)]
    pub is_admin: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a fresh profile from a provider identity
    pub fn from_identity(identity: &ProviderIdentity) -> Self {
        let now = Utc::now();
        Self {
            uid: identity.uid.clone(),
            name: identity.display_name.clone(),
            email: identity.email.clone(),
            phone: String::new(),
            city: String::new(),
            state: None,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a phone number is registered
    pub fn has_phone(&self) -> bool {
        !self.phone.trim().is_empty()
    }

    /// Whether a city is registered
    pub fn has_city(&self) -> bool {
        !self.city.trim().is_empty()
    }

    /// Whether a state is registered
    pub fn has_state(&self) -> bool {
        self.state.is_some()
    }

    /// Apply a partial update; `None` fields are left untouched
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(phone) = &update.phone {
            self.phone = crate::phone::digits_only(phone);
        }
        if let Some(city) = &update.city {
            self.city = city.trim().to_string();
        }
        if let Some(state) = update.state {
            self.state = Some(state);
        }
        self.touch();
    }
}

impl Identifiable for UserProfile {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.uid.clone()
    }
}

impl Timestamped for UserProfile {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn modified_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial update of the user-editable profile fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub phone: Option<String>,
    pub city: Option<String>,
    pub state: Option<StateCode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn identity() -> ProviderIdentity {
        ProviderIdentity {
            uid: "u-1".into(),
            display_name: "Ana Souza".into(),
            email: "ana@example.com".into(),
            photo_url: String::new(),
        }
    }

    #[test]
    fn test_from_identity_starts_empty() {
        let profile = UserProfile::from_identity(&identity());
        assert_eq!(profile.uid, "u-1");
        assert_eq!(profile.name, "Ana Souza");
        assert!(!profile.has_phone());
        assert!(!profile.has_city());
        assert!(!profile.has_state());
        assert!(!profile.is_admin);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut profile = UserProfile::from_identity(&identity());
        profile.city = "Campinas".into();

        profile.apply(&ProfileUpdate {
            phone: Some("(19) 98888-7777".into()),
            city: None,
            state: Some(StateCode::SP),
        });

        assert_eq!(profile.phone, "19988887777");
        assert_eq!(profile.city, "Campinas");
        assert_eq!(profile.state, Some(StateCode::SP));
        assert!(profile.modified_at() >= profile.created_at());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{
            "uid": "u-2",
            "name": "Bruno",
            "email": "bruno@example.com",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.phone, "");
        assert_eq!(profile.state, None);
        assert!(profile.matches_id(&"u-2".to_string()));
    }
}
