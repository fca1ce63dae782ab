//! Plain-text tables for command output

use fleet_model::{FleetRow, UserProfile, format_phone};

/// Column used for any missing value
const EMPTY: &str = "-";

/// Header plus one line per user
pub fn user_table(users: &[UserProfile]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<20} {:<24} {:<28} {:<16} {:<12} {}",
        "UID", "NAME", "EMAIL", "PHONE", "CITY", "ROLE"
    )];
    for user in users {
        let phone = if user.has_phone() {
            format_phone(&user.phone)
        } else {
            EMPTY.to_string()
        };
        let city = match (user.has_city(), user.state) {
            (true, Some(state)) => format!("{}/{}", user.city, state.as_str()),
            (true, None) => user.city.clone(),
            (false, Some(state)) => state.as_str().to_string(),
            (false, None) => EMPTY.to_string(),
        };
        let role = if user.is_admin { "admin" } else { "driver" };
        lines.push(format!(
            "{:<20} {:<24} {:<28} {:<16} {:<12} {}",
            user.uid, user.name, user.email, phone, city, role
        ));
    }
    lines
}

/// Header plus one line per vehicle
pub fn vehicle_table(rows: &[FleetRow]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<28} {:<6} {:<10} {:<12} {}",
        "VEHICLE", "YEAR", "PLATE", "COLOR", "OWNER"
    )];
    for row in rows {
        let vehicle = &row.vehicle;
        let name = format!("{} {}", vehicle.brand.name, vehicle.model);
        let color = if vehicle.color.is_empty() {
            EMPTY
        } else {
            vehicle.color.as_str()
        };
        lines.push(format!(
            "{:<28} {:<6} {:<10} {:<12} {}",
            name,
            vehicle.year,
            vehicle.display_plate(),
            color,
            row.owner
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::{ProviderIdentity, StateCode};
    use fleet_model::{FleetSummary, Vehicle, VehicleDraft};
    use pretty_assertions::assert_eq;

    fn user(uid: &str, name: &str) -> UserProfile {
        UserProfile::from_identity(&ProviderIdentity {
            uid: uid.into(),
            display_name: name.into(),
            email: format!("{uid}@example.com"),
            photo_url: String::new(),
        })
    }

    #[test]
    fn test_user_table() {
        let mut admin = user("u-1", "Ana");
        admin.is_admin = true;
        admin.phone = "11987654321".into();
        admin.city = "Santos".into();
        admin.state = Some(StateCode::SP);
        let driver = user("u-2", "Bruno");

        let lines = user_table(&[admin, driver]);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("UID"));
        assert!(lines[1].contains("(11) 98765-4321"));
        assert!(lines[1].contains("Santos/SP"));
        assert!(lines[1].ends_with("admin"));
        assert!(lines[2].ends_with("driver"));
    }

    #[test]
    fn test_vehicle_table_uses_owner_names() {
        let owner = user("u-1", "Ana");
        let vehicle = Vehicle::new(
            "u-1",
            VehicleDraft {
                brand: "Fiat".into(),
                model: "Uno".into(),
                year: 2012,
                plate: "ABC1234".into(),
                color: String::new(),
                mileage_km: None,
                notes: String::new(),
            },
        );

        let summary = FleetSummary::build(&[owner], &[vehicle]);
        let lines = vehicle_table(&summary.rows);

        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Fiat Uno"));
        assert!(lines[1].contains("ABC-1234"));
        assert!(lines[1].ends_with("Ana"));
    }
}
