//! The store document shared by every backend
//!
//! Backends wrap a [`StoreDocument`] in a lock and delegate to the
//! synchronous operations here, so in-memory and on-disk stores behave
//! identically.

use std::collections::BTreeMap;

use fleet_core::{
    FleetError, FleetResult, Persistable, ProviderIdentity, Timestamped, UserId, VehicleId,
};
use serde::{Deserialize, Serialize};

use crate::profile::{ProfileUpdate, UserProfile};
use crate::services::sort_newest_first;
use crate::vehicle::{Vehicle, VehicleDraft};

/// Current schema version for store files
pub const SCHEMA_VERSION: u32 = 1;

/// Every user and vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    pub schema_version: u32,
    #[serde(default)]
    pub users: BTreeMap<UserId, UserProfile>,
    #[serde(default)]
    pub vehicles: BTreeMap<VehicleId, Vehicle>,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            users: BTreeMap::new(),
            vehicles: BTreeMap::new(),
        }
    }
}

impl Persistable for StoreDocument {
    fn schema_version() -> u32 {
        SCHEMA_VERSION
    }
}

impl StoreDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject documents written by a newer schema
    pub fn check_version(&self) -> FleetResult<()> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(FleetError::SchemaVersionMismatch {
                expected: SCHEMA_VERSION,
                found: self.schema_version,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub fn get_user(&self, uid: &str) -> FleetResult<UserProfile> {
        self.users
            .get(uid)
            .cloned()
            .ok_or_else(|| FleetError::UserNotFound(uid.to_string()))
    }

    pub fn update_user(&mut self, uid: &str, update: &ProfileUpdate) -> FleetResult<()> {
        let user = self
            .users
            .get_mut(uid)
            .ok_or_else(|| FleetError::UserNotFound(uid.to_string()))?;
        user.apply(update);
        Ok(())
    }

    /// Return the profile for an identity, creating it if absent
    ///
    /// Name and email are owned by the provider and refreshed when they
    /// changed. The flag reports whether the document was modified.
    pub fn ensure_user(&mut self, identity: &ProviderIdentity) -> (UserProfile, bool) {
        match self.users.get_mut(&identity.uid) {
            Some(user) => {
                let stale = user.name != identity.display_name || user.email != identity.email;
                if stale {
                    user.name = identity.display_name.clone();
                    user.email = identity.email.clone();
                    user.touch();
                }
                (user.clone(), stale)
            }
            None => {
                let user = UserProfile::from_identity(identity);
                self.users.insert(user.uid.clone(), user.clone());
                (user, true)
            }
        }
    }

    pub fn list_users(&self) -> Vec<UserProfile> {
        let mut users: Vec<UserProfile> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        users
    }

    pub fn set_admin(&mut self, uid: &str, is_admin: bool) -> FleetResult<()> {
        let user = self
            .users
            .get_mut(uid)
            .ok_or_else(|| FleetError::UserNotFound(uid.to_string()))?;
        user.is_admin = is_admin;
        user.touch();
        Ok(())
    }

    // ========================================================================
    // Vehicles
    // ========================================================================

    pub fn vehicles_by_user(&self, uid: &str) -> Vec<Vehicle> {
        let mut vehicles: Vec<Vehicle> = self
            .vehicles
            .values()
            .filter(|v| v.owner_id == uid)
            .cloned()
            .collect();
        sort_newest_first(&mut vehicles);
        vehicles
    }

    pub fn create_vehicle(&mut self, uid: &str, draft: VehicleDraft) -> FleetResult<Vehicle> {
        if !self.users.contains_key(uid) {
            return Err(FleetError::UserNotFound(uid.to_string()));
        }
        let vehicle = Vehicle::new(uid, draft);
        self.vehicles.insert(vehicle.id, vehicle.clone());
        Ok(vehicle)
    }

    pub fn update_vehicle(
        &mut self,
        uid: &str,
        vehicle_id: VehicleId,
        draft: VehicleDraft,
    ) -> FleetResult<Vehicle> {
        let vehicle = self
            .vehicles
            .get_mut(&vehicle_id)
            .filter(|v| v.owner_id == uid)
            .ok_or_else(|| FleetError::vehicle_not_found(uid, vehicle_id))?;
        vehicle.apply(draft);
        Ok(vehicle.clone())
    }

    pub fn delete_vehicle(&mut self, uid: &str, vehicle_id: VehicleId) -> FleetResult<()> {
        match self.vehicles.get(&vehicle_id) {
            Some(v) if v.owner_id == uid => {
                self.vehicles.remove(&vehicle_id);
                Ok(())
            }
            _ => Err(FleetError::vehicle_not_found(uid, vehicle_id)),
        }
    }

    pub fn all_vehicles(&self) -> Vec<Vehicle> {
        let mut vehicles: Vec<Vehicle> = self.vehicles.values().cloned().collect();
        sort_newest_first(&mut vehicles);
        vehicles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn identity(uid: &str, name: &str) -> ProviderIdentity {
        ProviderIdentity {
            uid: uid.into(),
            display_name: name.into(),
            email: format!("{}@example.com", uid),
            photo_url: String::new(),
        }
    }

    fn draft(model: &str) -> VehicleDraft {
        VehicleDraft {
            brand: "Honda".into(),
            model: model.into(),
            year: 2020,
            plate: "ABC1D23".into(),
            color: "Black".into(),
            mileage_km: None,
            notes: String::new(),
        }
    }

    #[test]
    fn test_ensure_user_creates_once() {
        let mut doc = StoreDocument::new();
        let (_, created) = doc.ensure_user(&identity("u1", "Ana"));
        assert!(created);
        let (_, changed) = doc.ensure_user(&identity("u1", "Ana"));
        assert!(!changed);
        let (user, changed) = doc.ensure_user(&identity("u1", "Ana Lima"));
        assert!(changed);
        assert_eq!(user.name, "Ana Lima");
        assert_eq!(doc.users.len(), 1);
    }

    #[test]
    fn test_vehicle_ownership_is_enforced() {
        let mut doc = StoreDocument::new();
        doc.ensure_user(&identity("u1", "Ana"));
        doc.ensure_user(&identity("u2", "Bia"));

        let vehicle = doc.create_vehicle("u1", draft("Civic")).unwrap();
        assert!(doc.delete_vehicle("u2", vehicle.id).unwrap_err().is_not_found());
        assert!(
            doc.update_vehicle("u2", vehicle.id, draft("Fit"))
                .unwrap_err()
                .is_not_found()
        );
        assert_eq!(doc.vehicles_by_user("u2").len(), 0);
        assert_eq!(doc.vehicles_by_user("u1").len(), 1);

        doc.delete_vehicle("u1", vehicle.id).unwrap();
        assert!(doc.vehicles_by_user("u1").is_empty());
    }

    #[test]
    fn test_create_vehicle_for_unknown_user_fails() {
        let mut doc = StoreDocument::new();
        let err = doc.create_vehicle("ghost", draft("Civic")).unwrap_err();
        assert!(matches!(err, FleetError::UserNotFound(_)));
    }

    #[test]
    fn test_list_users_sorted_by_name() {
        let mut doc = StoreDocument::new();
        doc.ensure_user(&identity("u2", "carla"));
        doc.ensure_user(&identity("u1", "Bruno"));
        let names: Vec<String> = doc.list_users().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Bruno".to_string(), "carla".to_string()]);
    }

    #[test]
    fn test_newer_schema_rejected() {
        let doc = StoreDocument {
            schema_version: SCHEMA_VERSION + 1,
            ..Default::default()
        };
        assert!(matches!(
            doc.check_version(),
            Err(FleetError::SchemaVersionMismatch { .. })
        ));
    }
}
