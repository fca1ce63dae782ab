//! # Fleet Model
//!
//! Domain model for Fleet Dashboard.
//!
//! - **Records**: [`UserProfile`], [`Vehicle`] and their update payloads
//! - **Editors**: [`ProfileForm`] and [`VehicleForm`] with inline validation
//! - **Shell**: [`Dashboard`], [`Layout`] and [`FeedbackSlot`]
//! - **Services**: async [`UserService`] / [`VehicleService`] traits with
//!   in-memory and JSON file stores
//! - **Workflows**: the request sequences behind each dashboard action

pub mod dashboard;
pub mod feedback;
pub mod layout;
pub mod phone;
pub mod profile;
pub mod profile_form;
pub mod services;
pub mod store;
pub mod summary;
pub mod validation;
pub mod vehicle;
pub mod workflows;

pub use dashboard::{Dashboard, Tab, VehicleDialog, menu_items};
pub use feedback::{Feedback, FeedbackSlot};
pub use layout::{Layout, NavKind};
pub use phone::{digits_only, format_phone};
pub use profile::{ProfileUpdate, UserProfile};
pub use profile_form::{EditorMode, ProfileForm};
pub use services::{Services, UserService, VehicleService};
pub use store::{JsonStore, MemoryStore, StoreDocument};
pub use summary::{FleetRow, FleetSummary};
pub use validation::{ProfileBuffers, ValidationResult, validate_profile};
pub use vehicle::{Brand, Vehicle, VehicleDraft, VehicleForm};
pub use workflows::MutationOutcome;
