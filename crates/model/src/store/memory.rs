//! In-memory store
//!
//! Used by tests and demos. Individual operations can be made to fail, and
//! every call is counted, so workflows can be checked for exactly how many
//! requests they issue.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use fleet_core::{FleetError, FleetResult, ProviderIdentity, VehicleId};
use tokio::sync::RwLock;

use super::document::StoreDocument;
use crate::profile::{ProfileUpdate, UserProfile};
use crate::services::{UserService, VehicleService};
use crate::vehicle::{Vehicle, VehicleDraft};

/// Service operations, for failure injection and call counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetUser,
    UpdateUser,
    HasPhone,
    EnsureUser,
    ListUsers,
    SetAdmin,
    GetVehicles,
    CreateVehicle,
    UpdateVehicle,
    DeleteVehicle,
    ListAllVehicles,
}

/// Store that keeps everything in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: RwLock<StoreDocument>,
    failing: Mutex<HashSet<Operation>>,
    calls: Mutex<HashMap<Operation, usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document
    pub fn with_document(doc: StoreDocument) -> Self {
        Self {
            doc: RwLock::new(doc),
            ..Default::default()
        }
    }

    /// Make every subsequent call of `op` fail with a service error
    pub fn fail(&self, op: Operation) {
        self.failing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(op);
    }

    /// Stop failing `op`
    pub fn recover(&self, op: Operation) {
        self.failing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&op);
    }

    /// Number of calls of `op` so far, failed ones included
    pub fn calls(&self, op: Operation) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&op)
            .copied()
            .unwrap_or(0)
    }

    /// Snapshot of the current document
    pub async fn snapshot(&self) -> StoreDocument {
        self.doc.read().await.clone()
    }

    fn enter(&self, op: Operation) -> FleetResult<()> {
        *self
            .calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(op)
            .or_default() += 1;

        let failing = self
            .failing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&op);
        if failing {
            Err(FleetError::service(format!("{:?} unavailable", op)))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserService for MemoryStore {
    async fn get_user_by_uid(&self, uid: &str) -> FleetResult<UserProfile> {
        self.enter(Operation::GetUser)?;
        self.doc.read().await.get_user(uid)
    }

    async fn update_user(&self, uid: &str, update: ProfileUpdate) -> FleetResult<()> {
        self.enter(Operation::UpdateUser)?;
        self.doc.write().await.update_user(uid, &update)
    }

    async fn has_phone_number(&self, uid: &str) -> FleetResult<bool> {
        self.enter(Operation::HasPhone)?;
        Ok(self.doc.read().await.get_user(uid)?.has_phone())
    }

    async fn ensure_user(&self, identity: &ProviderIdentity) -> FleetResult<UserProfile> {
        self.enter(Operation::EnsureUser)?;
        Ok(self.doc.write().await.ensure_user(identity).0)
    }

    async fn list_users(&self) -> FleetResult<Vec<UserProfile>> {
        self.enter(Operation::ListUsers)?;
        Ok(self.doc.read().await.list_users())
    }

    async fn set_admin(&self, uid: &str, is_admin: bool) -> FleetResult<()> {
        self.enter(Operation::SetAdmin)?;
        self.doc.write().await.set_admin(uid, is_admin)
    }
}

#[async_trait]
impl VehicleService for MemoryStore {
    async fn get_vehicles_by_user(&self, uid: &str) -> FleetResult<Vec<Vehicle>> {
        self.enter(Operation::GetVehicles)?;
        Ok(self.doc.read().await.vehicles_by_user(uid))
    }

    async fn create_vehicle(&self, uid: &str, draft: VehicleDraft) -> FleetResult<Vehicle> {
        self.enter(Operation::CreateVehicle)?;
        self.doc.write().await.create_vehicle(uid, draft)
    }

    async fn update_vehicle(
        &self,
        uid: &str,
        vehicle_id: VehicleId,
        draft: VehicleDraft,
    ) -> FleetResult<Vehicle> {
        self.enter(Operation::UpdateVehicle)?;
        self.doc.write().await.update_vehicle(uid, vehicle_id, draft)
    }

    async fn delete_vehicle(&self, uid: &str, vehicle_id: VehicleId) -> FleetResult<()> {
        self.enter(Operation::DeleteVehicle)?;
        self.doc.write().await.delete_vehicle(uid, vehicle_id)
    }

    async fn list_all_vehicles(&self) -> FleetResult<Vec<Vehicle>> {
        self.enter(Operation::ListAllVehicles)?;
        Ok(self.doc.read().await.all_vehicles())
    }
}
