//! Vehicles and the vehicle form
//!
//! A vehicle always belongs to exactly one user. The form keeps raw text
//! buffers so the dialog can bind inputs directly; [`VehicleForm::to_draft`]
//! validates them and produces the typed payload sent to the service.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use fleet_core::{FieldErrors, Identifiable, Timestamped, UserId, Validatable, VehicleId};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Oldest model year accepted by the form
pub const MIN_YEAR: u16 = 1900;

/// Brands offered in the brand selector; free text is accepted too
pub const BRAND_CATALOG: &[&str] = &[
    "BMW",
    "BYD",
    "Chevrolet",
    "Citroën",
    "Fiat",
    "Ford",
    "Honda",
    "Hyundai",
    "Jeep",
    "Kia",
    "Mercedes-Benz",
    "Mitsubishi",
    "Nissan",
    "Peugeot",
    "Renault",
    "Toyota",
    "Volkswagen",
    "Volvo",
];

/// Legacy `AAA9999` and Mercosur `AAA9A99` plates, after normalization
static PLATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{3}[0-9][A-Z0-9][0-9]{2}$").expect("plate pattern is valid")
});

// ============================================================================
// Vehicle
// ============================================================================

/// Vehicle manufacturer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
}

impl Brand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A registered vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub owner_id: UserId,
    pub brand: Brand,
    pub model: String,
    pub year: u16,
    /// Uppercase, no separators
    pub plate: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub mileage_km: Option<u32>,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Create a new vehicle for an owner from a validated draft
    pub fn new(owner_id: impl Into<UserId>, draft: VehicleDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id: owner_id.into(),
            brand: Brand::new(draft.brand),
            model: draft.model,
            year: draft.year,
            plate: draft.plate,
            color: draft.color,
            mileage_km: draft.mileage_km,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field with the draft's values
    pub fn apply(&mut self, draft: VehicleDraft) {
        self.brand = Brand::new(draft.brand);
        self.model = draft.model;
        self.year = draft.year;
        self.plate = draft.plate;
        self.color = draft.color;
        self.mileage_km = draft.mileage_km;
        self.notes = draft.notes;
        self.touch();
    }

    /// `"{brand} {model} ({year})"`
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.brand.name, self.model, self.year)
    }

    /// Plate formatted for display (`ABC-1234` or `ABC1D23`)
    pub fn display_plate(&self) -> String {
        let legacy = self.plate.len() == 7
            && self.plate.is_ascii()
            && self.plate[3..].bytes().all(|b| b.is_ascii_digit());
        if legacy {
            format!("{}-{}", &self.plate[..3], &self.plate[3..])
        } else {
            self.plate.clone()
        }
    }
}

impl Identifiable for Vehicle {
    type Id = VehicleId;

    fn id(&self) -> VehicleId {
        self.id
    }
}

impl Timestamped for Vehicle {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn modified_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Typed payload for creating or updating a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDraft {
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub plate: String,
    pub color: String,
    pub mileage_km: Option<u32>,
    pub notes: String,
}

// ============================================================================
// Vehicle Form
// ============================================================================

/// Raw text buffers bound to the vehicle form dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleForm {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub plate: String,
    pub color: String,
    pub mileage: String,
    pub notes: String,
}

impl VehicleForm {
    /// Prefill the form from an existing vehicle
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            brand: vehicle.brand.name.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year.to_string(),
            plate: vehicle.display_plate(),
            color: vehicle.color.clone(),
            mileage: vehicle.mileage_km.map(|m| m.to_string()).unwrap_or_default(),
            notes: vehicle.notes.clone(),
        }
    }

    /// Validate against an explicit current year
    pub fn field_errors_for_year(&self, current_year: i32) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.brand.trim().is_empty() {
            errors.insert("brand", "Brand is required".to_string());
        }
        if self.model.trim().is_empty() {
            errors.insert("model", "Model is required".to_string());
        }

        let max_year = current_year + 1;
        match self.year.trim().parse::<i32>() {
            Ok(year) if (i32::from(MIN_YEAR)..=max_year).contains(&year) => {}
            Ok(_) => {
                errors.insert(
                    "year",
                    format!("Year must be between {} and {}", MIN_YEAR, max_year),
                );
            }
            Err(_) => {
                errors.insert("year", "Year is required".to_string());
            }
        }

        let plate = normalize_plate(&self.plate);
        if plate.is_empty() {
            errors.insert("plate", "Plate is required".to_string());
        } else if !PLATE_PATTERN.is_match(&plate) {
            errors.insert(
                "plate",
                "Plate must look like ABC-1234 or ABC1D23".to_string(),
            );
        }

        if !self.mileage.trim().is_empty() && self.mileage.trim().parse::<u32>().is_err() {
            errors.insert("mileage", "Mileage must be a whole number".to_string());
        }

        errors
    }

    /// Validate and convert to a draft, or return every field error
    pub fn to_draft(&self) -> Result<VehicleDraft, FieldErrors> {
        let errors = self.field_errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        // Both parses succeeded during validation.
        let year = self.year.trim().parse::<u16>().unwrap_or(MIN_YEAR);
        let mileage_km = self.mileage.trim().parse::<u32>().ok();

        Ok(VehicleDraft {
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            year,
            plate: normalize_plate(&self.plate),
            color: self.color.trim().to_string(),
            mileage_km,
            notes: self.notes.trim().to_string(),
        })
    }
}

impl Validatable for VehicleForm {
    fn field_errors(&self) -> FieldErrors {
        self.field_errors_for_year(Utc::now().year())
    }
}

/// Uppercase the plate and drop dashes and whitespace
pub fn normalize_plate(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_form() -> VehicleForm {
        VehicleForm {
            brand: "Fiat".into(),
            model: "Uno".into(),
            year: "2012".into(),
            plate: "abc-1234".into(),
            color: "Red".into(),
            mileage: "120000".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("abc-1234"), "ABC1234");
        assert_eq!(normalize_plate(" bra 2e19 "), "BRA2E19");
    }

    #[test]
    fn test_valid_form_converts_to_draft() {
        let draft = valid_form().to_draft().unwrap();
        assert_eq!(draft.plate, "ABC1234");
        assert_eq!(draft.year, 2012);
        assert_eq!(draft.mileage_km, Some(120_000));
    }

    #[test]
    fn test_mercosur_plate_accepted() {
        let mut form = valid_form();
        form.plate = "BRA2E19".into();
        assert!(form.field_errors_for_year(2025).is_empty());
    }

    #[test]
    fn test_all_errors_reported_together() {
        let form = VehicleForm {
            brand: " ".into(),
            model: String::new(),
            year: "1850".into(),
            plate: "12ABC".into(),
            color: String::new(),
            mileage: "-5".into(),
            notes: String::new(),
        };
        let errors = form.field_errors_for_year(2025);
        assert_eq!(errors.len(), 5);
        assert_eq!(errors["year"], "Year must be between 1900 and 2026");
        assert!(errors.contains_key("brand"));
        assert!(errors.contains_key("model"));
        assert!(errors.contains_key("plate"));
        assert!(errors.contains_key("mileage"));
    }

    #[test]
    fn test_next_model_year_allowed() {
        let mut form = valid_form();
        form.year = "2026".into();
        assert!(form.field_errors_for_year(2025).is_empty());
        form.year = "2027".into();
        assert!(form.field_errors_for_year(2025).contains_key("year"));
    }

    #[test]
    fn test_missing_year_and_plate() {
        let mut form = valid_form();
        form.year = String::new();
        form.plate = String::new();
        let errors = form.field_errors_for_year(2025);
        assert_eq!(errors["year"], "Year is required");
        assert_eq!(errors["plate"], "Plate is required");
    }

    #[test]
    fn test_display_helpers_and_prefill() {
        let vehicle = Vehicle::new("u-1", valid_form().to_draft().unwrap());
        assert_eq!(vehicle.display_name(), "Fiat Uno (2012)");
        assert_eq!(vehicle.display_plate(), "ABC-1234");

        let form = VehicleForm::from_vehicle(&vehicle);
        assert_eq!(form.plate, "ABC-1234");
        assert_eq!(form.mileage, "120000");
        assert_eq!(form.to_draft().unwrap().plate, "ABC1234");
    }

    #[test]
    fn test_apply_replaces_fields() {
        let mut vehicle = Vehicle::new("u-1", valid_form().to_draft().unwrap());
        let mut form = valid_form();
        form.model = "Mobi".into();
        form.mileage = String::new();
        vehicle.apply(form.to_draft().unwrap());
        assert_eq!(vehicle.model, "Mobi");
        assert_eq!(vehicle.mileage_km, None);
        assert_eq!(vehicle.owner_id, "u-1");
    }
}
