//! Fleet-wide aggregates for the admin tab

use std::collections::{BTreeMap, HashMap};

use crate::profile::UserProfile;
use crate::vehicle::Vehicle;

/// One row of the admin vehicle table
#[derive(Debug, Clone, PartialEq)]
pub struct FleetRow {
    pub vehicle: Vehicle,
    /// Owner name, or the owner uid when the profile is missing
    pub owner: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FleetSummary {
    pub total_vehicles: usize,
    pub total_users: usize,
    pub users_without_phone: usize,
    /// `(brand, count)`, highest count first, ties by name
    pub per_brand: Vec<(String, usize)>,
    pub rows: Vec<FleetRow>,
}

impl FleetSummary {
    pub fn build(users: &[UserProfile], vehicles: &[Vehicle]) -> Self {
        let names: HashMap<&str, &str> = users
            .iter()
            .map(|u| (u.uid.as_str(), u.name.as_str()))
            .collect();

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for vehicle in vehicles {
            *counts.entry(vehicle.brand.name.as_str()).or_default() += 1;
        }
        let mut per_brand: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(brand, count)| (brand.to_string(), count))
            .collect();
        // stable sort: equal counts keep name order
        per_brand.sort_by(|a, b| b.1.cmp(&a.1));

        let rows = vehicles
            .iter()
            .map(|vehicle| FleetRow {
                owner: names
                    .get(vehicle.owner_id.as_str())
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| vehicle.owner_id.clone()),
                vehicle: vehicle.clone(),
            })
            .collect();

        Self {
            total_vehicles: vehicles.len(),
            total_users: users.len(),
            users_without_phone: users.iter().filter(|u| !u.has_phone()).count(),
            per_brand,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::VehicleDraft;
    use fleet_core::ProviderIdentity;
    use pretty_assertions::assert_eq;

    fn user(uid: &str, name: &str, phone: &str) -> UserProfile {
        let mut user = UserProfile::from_identity(&ProviderIdentity {
            uid: uid.into(),
            display_name: name.into(),
            ..Default::default()
        });
        user.phone = phone.into();
        user
    }

    fn vehicle(owner: &str, brand: &str) -> Vehicle {
        Vehicle::new(
            owner,
            VehicleDraft {
                brand: brand.into(),
                model: "X".into(),
                year: 2020,
                plate: "ABC1234".into(),
                color: String::new(),
                mileage_km: None,
                notes: String::new(),
            },
        )
    }

    #[test]
    fn test_build_summary() {
        let users = vec![user("u1", "Ana", "11999999999"), user("u2", "Bia", "")];
        let vehicles = vec![
            vehicle("u1", "Honda"),
            vehicle("u2", "Fiat"),
            vehicle("u1", "Fiat"),
            vehicle("u2", "Chevrolet"),
            vehicle("gone", "Honda"),
        ];

        let summary = FleetSummary::build(&users, &vehicles);

        assert_eq!(summary.total_vehicles, 5);
        assert_eq!(summary.total_users, 2);
        assert_eq!(summary.users_without_phone, 1);
        assert_eq!(
            summary.per_brand,
            vec![
                ("Fiat".to_string(), 2),
                ("Honda".to_string(), 2),
                ("Chevrolet".to_string(), 1),
            ]
        );
        assert_eq!(summary.rows[0].owner, "Ana");
        assert_eq!(summary.rows[4].owner, "gone");
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(FleetSummary::build(&[], &[]), FleetSummary::default());
    }
}
