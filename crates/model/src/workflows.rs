//! Backend sequences behind dashboard actions
//!
//! Each function performs the requests for one user action, in order, and
//! returns everything the caller needs to commit the result. Mutations are
//! always followed by a full reload of the affected list.

use fleet_core::{FleetResult, VehicleId};
use tracing::{debug, error, info};

use crate::profile::{ProfileUpdate, UserProfile};
use crate::services::Services;
use crate::summary::FleetSummary;
use crate::vehicle::{Vehicle, VehicleDraft};

/// Result of a mutation plus the reload that followed it
///
/// `refetched` is `None` when no reload was issued.
#[derive(Debug)]
pub struct MutationOutcome<T> {
    pub result: FleetResult<T>,
    pub refetched: Option<FleetResult<Vec<Vehicle>>>,
}

/// Session flags fetched independently
#[derive(Debug)]
pub struct SessionFlags {
    pub is_admin: FleetResult<bool>,
    pub has_phone: FleetResult<bool>,
}

pub async fn load_session_flags(services: &Services, uid: &str) -> SessionFlags {
    let (user, has_phone) = tokio::join!(
        services.users.get_user_by_uid(uid),
        services.users.has_phone_number(uid)
    );
    if let Err(e) = &user {
        error!("Failed to load user {}: {}", uid, e);
    }
    if let Err(e) = &has_phone {
        error!("Failed to check phone for {}: {}", uid, e);
    }
    SessionFlags {
        is_admin: user.map(|u| u.is_admin),
        has_phone,
    }
}

pub async fn fetch_vehicles(services: &Services, uid: &str) -> FleetResult<Vec<Vehicle>> {
    debug!("Fetching vehicles for {}", uid);
    let result = services.vehicles.get_vehicles_by_user(uid).await;
    if let Err(e) = &result {
        error!("Failed to load vehicles for {}: {}", uid, e);
    }
    result
}

/// Delete a vehicle, then reload the list exactly once whatever the outcome
pub async fn delete_and_refetch(
    services: &Services,
    uid: &str,
    vehicle_id: VehicleId,
) -> MutationOutcome<()> {
    let result = services.vehicles.delete_vehicle(uid, vehicle_id).await;
    match &result {
        Ok(()) => info!("Deleted vehicle {}", vehicle_id),
        Err(e) => error!("Failed to delete vehicle {}: {}", vehicle_id, e),
    }
    let refetched = fetch_vehicles(services, uid).await;
    MutationOutcome {
        result,
        refetched: Some(refetched),
    }
}

/// Create (`vehicle_id == None`) or update a vehicle, reloading on success
pub async fn save_and_refetch(
    services: &Services,
    uid: &str,
    vehicle_id: Option<VehicleId>,
    draft: VehicleDraft,
) -> MutationOutcome<Vehicle> {
    let result = match vehicle_id {
        None => services.vehicles.create_vehicle(uid, draft).await,
        Some(id) => services.vehicles.update_vehicle(uid, id, draft).await,
    };

    match &result {
        Ok(vehicle) => info!("Saved vehicle {} ({})", vehicle.id, vehicle.display_name()),
        Err(e) => {
            error!("Failed to save vehicle: {}", e);
            return MutationOutcome {
                result,
                refetched: None,
            };
        }
    }

    let refetched = fetch_vehicles(services, uid).await;
    MutationOutcome {
        result,
        refetched: Some(refetched),
    }
}

pub async fn load_profile(services: &Services, uid: &str) -> FleetResult<UserProfile> {
    let result = services.users.get_user_by_uid(uid).await;
    if let Err(e) = &result {
        error!("Failed to load profile {}: {}", uid, e);
    }
    result
}

/// Persist a profile update and re-read the phone flag
///
/// Returns the refreshed phone flag; a failed re-read is logged and
/// reported as `None` since the update itself succeeded.
pub async fn save_profile(
    services: &Services,
    uid: &str,
    update: ProfileUpdate,
) -> FleetResult<Option<bool>> {
    if let Err(e) = services.users.update_user(uid, update).await {
        error!("Failed to save profile {}: {}", uid, e);
        return Err(e);
    }
    info!("Saved profile {}", uid);

    match services.users.has_phone_number(uid).await {
        Ok(has_phone) => Ok(Some(has_phone)),
        Err(e) => {
            error!("Failed to check phone for {}: {}", uid, e);
            Ok(None)
        }
    }
}

pub async fn load_admin_summary(services: &Services) -> FleetResult<FleetSummary> {
    let (users, vehicles) = tokio::join!(
        services.users.list_users(),
        services.vehicles.list_all_vehicles()
    );
    let summary = match (users, vehicles) {
        (Ok(users), Ok(vehicles)) => Ok(FleetSummary::build(&users, &vehicles)),
        (Err(e), _) | (_, Err(e)) => Err(e),
    };
    if let Err(e) = &summary {
        error!("Failed to load fleet summary: {}", e);
    }
    summary
}
