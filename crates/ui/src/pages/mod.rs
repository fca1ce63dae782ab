//! Page Components for Fleet Dashboard
//!
//! One page per navigation tab.
//!
//! ## Available Pages
//!
//! - **MyVehiclesPage**: The signed-in user's vehicles with add/edit/delete
//! - **AdminVehiclesPage**: Fleet-wide totals and every vehicle with its owner
//!

pub mod admin_vehicles;
pub mod my_vehicles;

pub use admin_vehicles::AdminVehiclesPage;
pub use my_vehicles::MyVehiclesPage;
