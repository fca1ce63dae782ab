//! Service interfaces
//!
//! These traits are the boundary between the dashboard and whatever
//! persists users and vehicles. Every call can fail with a distinguishable
//! error: `UserNotFound` / `VehicleNotFound` for missing records, `Service`
//! or IO errors for transport and storage problems.

use std::sync::Arc;

use async_trait::async_trait;
use fleet_core::{FleetResult, ProviderIdentity, VehicleId};

use crate::profile::{ProfileUpdate, UserProfile};
use crate::vehicle::{Vehicle, VehicleDraft};

/// User profile persistence
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get a profile by provider uid
    async fn get_user_by_uid(&self, uid: &str) -> FleetResult<UserProfile>;

    /// Update the editable profile fields; fails if the uid is unknown
    async fn update_user(&self, uid: &str, update: ProfileUpdate) -> FleetResult<()>;

    /// Whether the user has a registered phone number
    async fn has_phone_number(&self, uid: &str) -> FleetResult<bool>;

    /// Return the profile for this identity, creating it on first sign-in
    async fn ensure_user(&self, identity: &ProviderIdentity) -> FleetResult<UserProfile>;

    /// Every stored profile, ordered by name
    async fn list_users(&self) -> FleetResult<Vec<UserProfile>>;

    /// Grant or revoke the admin flag
    async fn set_admin(&self, uid: &str, is_admin: bool) -> FleetResult<()>;
}

/// Vehicle persistence
#[async_trait]
pub trait VehicleService: Send + Sync {
    /// Vehicles owned by a user, newest first
    async fn get_vehicles_by_user(&self, uid: &str) -> FleetResult<Vec<Vehicle>>;

    /// Register a new vehicle for a user
    async fn create_vehicle(&self, uid: &str, draft: VehicleDraft) -> FleetResult<Vehicle>;

    /// Replace the editable fields of a vehicle owned by the user
    async fn update_vehicle(
        &self,
        uid: &str,
        vehicle_id: VehicleId,
        draft: VehicleDraft,
    ) -> FleetResult<Vehicle>;

    /// Delete a vehicle owned by the user
    async fn delete_vehicle(&self, uid: &str, vehicle_id: VehicleId) -> FleetResult<()>;

    /// Every vehicle of every user, newest first
    async fn list_all_vehicles(&self) -> FleetResult<Vec<Vehicle>>;
}

/// Service handles shared by the UI
#[derive(Clone)]
pub struct Services {
    pub users: Arc<dyn UserService>,
    pub vehicles: Arc<dyn VehicleService>,
}

impl Services {
    pub fn new(users: Arc<dyn UserService>, vehicles: Arc<dyn VehicleService>) -> Self {
        Self { users, vehicles }
    }

    /// Use one store for both services
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: UserService + VehicleService + 'static,
    {
        Self {
            users: store.clone(),
            vehicles: store,
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

/// Sort vehicles newest first, ties broken by display name
pub fn sort_newest_first(vehicles: &mut [Vehicle]) {
    vehicles.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.display_name().cmp(&b.display_name()))
    });
}
