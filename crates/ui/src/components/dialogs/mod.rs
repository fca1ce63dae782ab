//! # Dialog Components
//!
//! Modal dialogs for the dashboard.
//!
//! ## Dialogs
//!
//! - **VehicleFormDialog**: Create and edit vehicles
//! - **VehicleDetailsDialog**: Read-only vehicle view
//! - **ConfirmDeleteDialog**: Confirmation before deleting a vehicle
//! - **ProfileDialog**: View and edit the signed-in user's profile
//!
//! The vehicle dialogs are driven by [`fleet_model::VehicleDialog`]; at most
//! one of them is mounted at a time.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod confirm_delete;
pub mod profile_dialog;
pub mod vehicle_details;
pub mod vehicle_form;

// ============================================================================
// Re-exports
// ============================================================================

pub use confirm_delete::ConfirmDeleteDialog;
pub use profile_dialog::ProfileDialog;
pub use vehicle_details::VehicleDetailsDialog;
pub use vehicle_form::VehicleFormDialog;
