//! JSON file store
//!
//! The whole document lives in memory and is rewritten after every
//! mutation. A mutation is applied to a copy first; the copy only replaces
//! the in-memory document once it has been written, so a failed write
//! leaves both disk and memory unchanged.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fleet_core::{FleetResult, Persistable, ProviderIdentity, ResultExt, VehicleId};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::document::StoreDocument;
use crate::profile::{ProfileUpdate, UserProfile};
use crate::services::{UserService, VehicleService};
use crate::vehicle::{Vehicle, VehicleDraft};

/// Store persisted to a single JSON file
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    doc: RwLock<StoreDocument>,
}

impl JsonStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub fn open(path: impl Into<PathBuf>) -> FleetResult<Self> {
        let path = path.into();
        let doc = if path.exists() {
            let doc = StoreDocument::load_from_file(&path).with_context("Loading store")?;
            doc.check_version()?;
            info!(
                "Opened store {} ({} users, {} vehicles)",
                path.display(),
                doc.users.len(),
                doc.vehicles.len()
            );
            doc
        } else {
            info!("Store {} not found, starting empty", path.display());
            StoreDocument::new()
        };

        Ok(Self {
            path,
            doc: RwLock::new(doc),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current document
    pub async fn snapshot(&self) -> StoreDocument {
        self.doc.read().await.clone()
    }

    /// Replace the whole document and persist it
    pub async fn replace(&self, next: StoreDocument) -> FleetResult<()> {
        let mut doc = self.doc.write().await;
        next.save_to_file(&self.path).with_context("Persisting store")?;
        *doc = next;
        Ok(())
    }

    async fn mutate<T>(
        &self,
        f: impl FnOnce(&mut StoreDocument) -> FleetResult<T>,
    ) -> FleetResult<T> {
        let mut doc = self.doc.write().await;
        let mut next = doc.clone();
        let out = f(&mut next)?;
        next.save_to_file(&self.path).with_context("Persisting store")?;
        debug!("Persisted store to {}", self.path.display());
        *doc = next;
        Ok(out)
    }
}

#[async_trait]
impl UserService for JsonStore {
    async fn get_user_by_uid(&self, uid: &str) -> FleetResult<UserProfile> {
        self.doc.read().await.get_user(uid)
    }

    async fn update_user(&self, uid: &str, update: ProfileUpdate) -> FleetResult<()> {
        self.mutate(|doc| doc.update_user(uid, &update)).await
    }

    async fn has_phone_number(&self, uid: &str) -> FleetResult<bool> {
        Ok(self.doc.read().await.get_user(uid)?.has_phone())
    }

    async fn ensure_user(&self, identity: &ProviderIdentity) -> FleetResult<UserProfile> {
        {
            let doc = self.doc.read().await;
            if let Ok(user) = doc.get_user(&identity.uid) {
                if user.name == identity.display_name && user.email == identity.email {
                    return Ok(user);
                }
            }
        }
        self.mutate(|doc| Ok(doc.ensure_user(identity).0)).await
    }

    async fn list_users(&self) -> FleetResult<Vec<UserProfile>> {
        Ok(self.doc.read().await.list_users())
    }

    async fn set_admin(&self, uid: &str, is_admin: bool) -> FleetResult<()> {
        self.mutate(|doc| doc.set_admin(uid, is_admin)).await
    }
}

#[async_trait]
impl VehicleService for JsonStore {
    async fn get_vehicles_by_user(&self, uid: &str) -> FleetResult<Vec<Vehicle>> {
        Ok(self.doc.read().await.vehicles_by_user(uid))
    }

    async fn create_vehicle(&self, uid: &str, draft: VehicleDraft) -> FleetResult<Vehicle> {
        self.mutate(|doc| doc.create_vehicle(uid, draft)).await
    }

    async fn update_vehicle(
        &self,
        uid: &str,
        vehicle_id: VehicleId,
        draft: VehicleDraft,
    ) -> FleetResult<Vehicle> {
        self.mutate(|doc| doc.update_vehicle(uid, vehicle_id, draft))
            .await
    }

    async fn delete_vehicle(&self, uid: &str, vehicle_id: VehicleId) -> FleetResult<()> {
        self.mutate(|doc| doc.delete_vehicle(uid, vehicle_id)).await
    }

    async fn list_all_vehicles(&self) -> FleetResult<Vec<Vehicle>> {
        Ok(self.doc.read().await.all_vehicles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SCHEMA_VERSION;
    use fleet_core::{FleetError, StateCode};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn identity() -> ProviderIdentity {
        ProviderIdentity {
            uid: "u1".into(),
            display_name: "Ana".into(),
            email: "ana@example.com".into(),
            photo_url: String::new(),
        }
    }

    fn draft() -> VehicleDraft {
        VehicleDraft {
            brand: "Fiat".into(),
            model: "Uno".into(),
            year: 2012,
            plate: "ABC1234".into(),
            color: String::new(),
            mileage_km: Some(120_000),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn test_mutations_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = JsonStore::open(&path).unwrap();
        store.ensure_user(&identity()).await.unwrap();
        store
            .update_user(
                "u1",
                ProfileUpdate {
                    phone: Some("84912345678".into()),
                    city: Some("Natal".into()),
                    state: Some(StateCode::RN),
                },
            )
            .await
            .unwrap();
        let vehicle = store.create_vehicle("u1", draft()).await.unwrap();
        drop(store);

        let reopened = JsonStore::open(&path).unwrap();
        let user = reopened.get_user_by_uid("u1").await.unwrap();
        assert_eq!(user.city, "Natal");
        assert!(reopened.has_phone_number("u1").await.unwrap());

        let vehicles = reopened.get_vehicles_by_user("u1").await.unwrap();
        assert_eq!(vehicles, vec![vehicle]);
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_state_untouched() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path().join("store.json")).unwrap();
        store.ensure_user(&identity()).await.unwrap();

        let err = store
            .delete_vehicle("u1", uuid::Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.snapshot().await.users.len(), 1);
    }

    #[tokio::test]
    async fn test_open_rejects_newer_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(
            &path,
            format!(
                r#"{{"schema_version": {}, "users": {{}}, "vehicles": {{}}}}"#,
                SCHEMA_VERSION + 1
            ),
        )
        .unwrap();

        let err = JsonStore::open(&path).unwrap_err();
        assert!(matches!(err, FleetError::SchemaVersionMismatch { .. }));
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        let store = JsonStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_unwritable_path_reports_context() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let store = JsonStore::open(blocker.join("store.json")).unwrap();
        let err = store.ensure_user(&identity()).await.unwrap_err();

        assert!(matches!(err, FleetError::WithContext { .. }));
        assert!(err.to_string().starts_with("Persisting store: Failed to write"));
        assert!(store.snapshot().await.users.is_empty());
    }

    #[test]
    fn test_unreadable_store_reports_context() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonStore::open(&path).unwrap_err();
        assert!(err.to_string().starts_with("Loading store: "));
    }
}
