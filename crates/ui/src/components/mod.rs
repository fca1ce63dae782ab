//! # UI Components
//!
//! Reusable Dioxus components for the fleet dashboard:
//! - **Avatar**: Provider photo or initials
//! - **Vehicle Card**: One vehicle in the "My Vehicles" grid
//! - **Inputs**: Form input components (text, textarea, select)
//! - **Dialogs**: Vehicle form, details, delete confirmation, and profile
//!
//! ## Component Hierarchy
//!
//! ```text
//! MyVehiclesPage
//! └── VehicleCard (multiple)
//!
//! DialogOverlay
//! ├── VehicleFormDialog
//! ├── VehicleDetailsDialog
//! ├── ConfirmDeleteDialog
//! └── ProfileDialog
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod avatar;
pub mod dialogs;
pub mod inputs;
pub mod vehicle_card;

// ============================================================================
// Re-exports
// ============================================================================

pub use avatar::Avatar;
pub use vehicle_card::{VehicleCard, format_mileage};

pub use inputs::{Select, SelectOption, TextArea, TextInput};

pub use dialogs::{ConfirmDeleteDialog, ProfileDialog, VehicleDetailsDialog, VehicleFormDialog};
