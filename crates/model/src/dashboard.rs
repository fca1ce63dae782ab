//! Dashboard shell state
//!
//! Holds the session flags, the active tab, the current vehicle list and the
//! single open vehicle dialog. Backend calls happen elsewhere; this type
//! only decides what a response means for the screen.

use fleet_core::Severity;
use tracing::{debug, warn};

use crate::vehicle::Vehicle;
use crate::workflows::MutationOutcome;

// ============================================================================
// Tabs
// ============================================================================

/// Navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    Admin,
    #[default]
    MyVehicles,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Admin => "Dashboard",
            Tab::MyVehicles => "My Vehicles",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Admin => "📊",
            Tab::MyVehicles => "🚗",
        }
    }
}

/// Tabs available for a role, in menu order
pub fn menu_items(is_admin: bool) -> Vec<Tab> {
    if is_admin {
        vec![Tab::Admin, Tab::MyVehicles]
    } else {
        vec![Tab::MyVehicles]
    }
}

// ============================================================================
// Dialogs
// ============================================================================

/// The vehicle dialog currently open, if any
#[derive(Debug, Clone, PartialEq, Default)]
pub enum VehicleDialog {
    #[default]
    Idle,
    Viewing(Vehicle),
    /// `None` is the create form
    Editing(Option<Vehicle>),
    ConfirmingDelete(Vehicle),
}

impl VehicleDialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, VehicleDialog::Idle)
    }
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    active_tab: Tab,
    is_admin: bool,
    has_phone: bool,
    vehicles: Vec<Vehicle>,
    vehicles_loaded: bool,
    dialog: VehicleDialog,
    fetch_generation: u64,
    /// A save or delete is running for the open dialog
    mutating: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn has_phone(&self) -> bool {
        self.has_phone
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Whether at least one fetch has completed
    pub fn vehicles_loaded(&self) -> bool {
        self.vehicles_loaded
    }

    pub fn dialog(&self) -> &VehicleDialog {
        &self.dialog
    }

    /// Whether a save or delete is still running
    pub fn is_mutating(&self) -> bool {
        self.mutating
    }

    /// The header add button is hidden while the empty state offers its own
    pub fn shows_header_add(&self) -> bool {
        self.vehicles_loaded && !self.vehicles.is_empty()
    }

    pub fn menu_items(&self) -> Vec<Tab> {
        menu_items(self.is_admin)
    }

    /// Update the admin flag, leaving the admin tab if it disappears
    pub fn set_admin(&mut self, is_admin: bool) {
        self.is_admin = is_admin;
        if !is_admin && self.active_tab == Tab::Admin {
            debug!("Admin tab no longer available, switching to vehicles");
            self.active_tab = Tab::MyVehicles;
        }
    }

    pub fn set_has_phone(&mut self, has_phone: bool) {
        self.has_phone = has_phone;
    }

    /// Gate for every add-vehicle button
    pub fn can_add_vehicle(&self) -> bool {
        self.has_phone
    }

    /// Switch tabs; returns true when the vehicle list should be fetched
    ///
    /// Selecting a tab not in the menu is ignored.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if !self.menu_items().contains(&tab) {
            return false;
        }
        self.active_tab = tab;
        tab == Tab::MyVehicles
    }

    // ------------------------------------------------------------------------
    // Dialog transitions
    // ------------------------------------------------------------------------

    pub fn open_add(&mut self) {
        self.replace_dialog(VehicleDialog::Editing(None));
    }

    pub fn open_view(&mut self, vehicle: Vehicle) {
        self.replace_dialog(VehicleDialog::Viewing(vehicle));
    }

    /// Open the edit form, replacing any open dialog
    pub fn open_edit(&mut self, vehicle: Vehicle) {
        self.replace_dialog(VehicleDialog::Editing(Some(vehicle)));
    }

    /// Ask for delete confirmation, replacing any open dialog
    pub fn open_delete(&mut self, vehicle: Vehicle) {
        self.replace_dialog(VehicleDialog::ConfirmingDelete(vehicle));
    }

    /// Close the open dialog; ignored while its save or delete is running
    pub fn close_dialog(&mut self) {
        self.replace_dialog(VehicleDialog::Idle);
    }

    fn replace_dialog(&mut self, dialog: VehicleDialog) {
        if self.mutating {
            debug!("Dialog change ignored while a mutation is running");
            return;
        }
        self.dialog = dialog;
    }

    // ------------------------------------------------------------------------
    // Fetching
    // ------------------------------------------------------------------------

    /// Issue a new fetch generation
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_generation
    }

    /// Apply a fetched list unless a newer fetch has been issued since
    pub fn apply_vehicles(&mut self, generation: u64, vehicles: Vec<Vehicle>) -> bool {
        if generation != self.fetch_generation {
            warn!(
                "Dropping stale vehicle list (generation {}, latest {})",
                generation, self.fetch_generation
            );
            return false;
        }
        debug!("Loaded {} vehicles", vehicles.len());
        self.vehicles = vehicles;
        self.vehicles_loaded = true;
        true
    }

    /// Start a confirmed delete
    ///
    /// Returns the vehicle to delete and the generation of the refetch that
    /// will follow. Outside `ConfirmingDelete`, or while another mutation is
    /// running, nothing happens.
    pub fn begin_delete(&mut self) -> Option<(Vehicle, u64)> {
        if self.mutating {
            return None;
        }
        let VehicleDialog::ConfirmingDelete(vehicle) = &self.dialog else {
            return None;
        };
        let vehicle = vehicle.clone();
        self.mutating = true;
        Some((vehicle, self.begin_fetch()))
    }

    /// Commit a finished delete: close the dialog and take the refetched list
    ///
    /// Returns the feedback to show.
    pub fn finish_delete(
        &mut self,
        generation: u64,
        vehicle: &Vehicle,
        outcome: MutationOutcome<()>,
    ) -> (Severity, String) {
        self.mutating = false;
        self.dialog = VehicleDialog::Idle;
        let reloaded = self.take_refetch(generation, outcome.refetched);

        match (outcome.result, reloaded) {
            (Err(e), _) => (
                Severity::Error,
                format!("Could not delete {}: {}", vehicle.display_name(), e),
            ),
            (Ok(()), false) => (
                Severity::Warning,
                format!(
                    "{} deleted, but the list could not be reloaded",
                    vehicle.display_name()
                ),
            ),
            (Ok(()), true) => (
                Severity::Success,
                format!("{} deleted", vehicle.display_name()),
            ),
        }
    }

    /// Start a save from the open form
    ///
    /// Returns false outside `Editing` or while another mutation is running.
    pub fn begin_save(&mut self) -> bool {
        if self.mutating || !matches!(self.dialog, VehicleDialog::Editing(_)) {
            return false;
        }
        self.mutating = true;
        true
    }

    /// Commit a finished create or update
    ///
    /// On success the form closes and the refetched list is taken under a
    /// fresh generation. On failure the form stays open and in-flight
    /// fetches stay current.
    pub fn finish_save(&mut self, outcome: MutationOutcome<Vehicle>) -> (Severity, String) {
        self.mutating = false;
        let creating = matches!(self.dialog, VehicleDialog::Editing(None));
        let vehicle = match outcome.result {
            Err(e) => return (Severity::Error, format!("Could not save vehicle: {}", e)),
            Ok(vehicle) => vehicle,
        };

        self.dialog = VehicleDialog::Idle;
        let generation = self.begin_fetch();
        if !self.take_refetch(generation, outcome.refetched) {
            return (
                Severity::Warning,
                format!(
                    "{} saved, but the list could not be reloaded",
                    vehicle.display_name()
                ),
            );
        }

        let verb = if creating { "added" } else { "updated" };
        (
            Severity::Success,
            format!("{} {}", vehicle.display_name(), verb),
        )
    }

    fn take_refetch(
        &mut self,
        generation: u64,
        refetched: Option<fleet_core::FleetResult<Vec<Vehicle>>>,
    ) -> bool {
        match refetched {
            Some(Ok(vehicles)) => {
                self.apply_vehicles(generation, vehicles);
                true
            }
            Some(Err(_)) | None => false,
        }
    }
}
