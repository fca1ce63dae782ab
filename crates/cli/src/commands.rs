//! Command implementations
//!
//! Each command works through [`Services`], so it behaves exactly like the
//! desktop app against the same store.

use std::collections::HashSet;

use colored::Colorize;
use fleet_core::{FleetResult, ProviderIdentity, StateCode};
use fleet_model::{FleetSummary, ProfileUpdate, Services, VehicleDraft};
use tracing::info;

use crate::output;

// ============================================================================
// Users
// ============================================================================

/// Print every registered user
pub async fn list_users(services: &Services) -> anyhow::Result<()> {
    let users = services.users.list_users().await?;
    if users.is_empty() {
        println!("No users registered.");
        return Ok(());
    }

    let mut lines = output::user_table(&users).into_iter();
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

/// Grant (`is_admin == true`) or revoke admin rights
pub async fn promote(services: &Services, uid: &str, is_admin: bool) -> anyhow::Result<()> {
    services.users.set_admin(uid, is_admin).await?;
    let profile = services.users.get_user_by_uid(uid).await?;

    if is_admin {
        println!("{} {} is now an admin", "✓".green(), profile.name);
    } else {
        println!("{} {} is no longer an admin", "✓".green(), profile.name);
    }
    Ok(())
}

// ============================================================================
// Vehicles
// ============================================================================

/// Print all vehicles, or one user's
pub async fn list_vehicles(services: &Services, uid: Option<&str>) -> anyhow::Result<()> {
    let vehicles = match uid {
        Some(uid) => {
            // unknown uid is an error, not an empty list
            services.users.get_user_by_uid(uid).await?;
            services.vehicles.get_vehicles_by_user(uid).await?
        }
        None => services.vehicles.list_all_vehicles().await?,
    };
    if vehicles.is_empty() {
        println!("No vehicles registered.");
        return Ok(());
    }

    let users = services.users.list_users().await?;
    let summary = FleetSummary::build(&users, &vehicles);

    let mut lines = output::vehicle_table(&summary.rows).into_iter();
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for line in lines {
        println!("{}", line);
    }
    println!();
    println!("{} vehicle(s)", summary.total_vehicles.to_string().bold());
    Ok(())
}

// ============================================================================
// Seed
// ============================================================================

/// What a seed run added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users_created: usize,
    pub vehicles_created: usize,
}

struct DemoUser {
    uid: &'static str,
    name: &'static str,
    email: &'static str,
    phone: Option<&'static str>,
    city: &'static str,
    state: Option<StateCode>,
    is_admin: bool,
    vehicles: &'static [(&'static str, &'static str, u16, &'static str, &'static str, u32)],
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        uid: "demo-admin",
        name: "Marina Costa",
        email: "marina.costa@example.com",
        phone: Some("11987654321"),
        city: "São Paulo",
        state: Some(StateCode::SP),
        is_admin: true,
        vehicles: &[
            ("Toyota", "Corolla", 2021, "BRA2E19", "Silver", 32_000),
            ("Honda", "Civic", 2019, "FRT4521", "Black", 58_400),
        ],
    },
    DemoUser {
        uid: "demo-driver",
        name: "Rafael Lima",
        email: "rafael.lima@example.com",
        phone: Some("2133334444"),
        city: "Rio de Janeiro",
        state: Some(StateCode::RJ),
        is_admin: false,
        vehicles: &[("Volkswagen", "Gol", 2015, "KLM8J90", "White", 121_500)],
    },
    DemoUser {
        uid: "demo-new",
        name: "Juliana Alves",
        email: "juliana.alves@example.com",
        phone: None,
        city: "",
        state: None,
        is_admin: false,
        vehicles: &[],
    },
];

/// Insert the demo users and their vehicles
///
/// Existing users keep their profile; vehicles are only added to demo users
/// that have none, so running the seed twice changes nothing.
pub async fn seed_demo_data(services: &Services) -> FleetResult<SeedReport> {
    let existing: HashSet<String> = services
        .users
        .list_users()
        .await?
        .into_iter()
        .map(|u| u.uid)
        .collect();

    let mut report = SeedReport::default();
    for demo in DEMO_USERS {
        let identity = ProviderIdentity {
            uid: demo.uid.to_string(),
            display_name: demo.name.to_string(),
            email: demo.email.to_string(),
            photo_url: String::new(),
        };
        services.users.ensure_user(&identity).await?;

        if !existing.contains(demo.uid) {
            report.users_created += 1;
            if demo.phone.is_some() || demo.state.is_some() {
                let update = ProfileUpdate {
                    phone: demo.phone.map(str::to_string),
                    city: Some(demo.city.to_string()),
                    state: demo.state,
                };
                services.users.update_user(demo.uid, update).await?;
            }
            if demo.is_admin {
                services.users.set_admin(demo.uid, true).await?;
            }
        }

        if !services
            .vehicles
            .get_vehicles_by_user(demo.uid)
            .await?
            .is_empty()
        {
            continue;
        }
        for (brand, model, year, plate, color, mileage) in demo.vehicles {
            let draft = VehicleDraft {
                brand: brand.to_string(),
                model: model.to_string(),
                year: *year,
                plate: plate.to_string(),
                color: color.to_string(),
                mileage_km: Some(*mileage),
                notes: String::new(),
            };
            services.vehicles.create_vehicle(demo.uid, draft).await?;
            report.vehicles_created += 1;
        }
    }

    info!(
        "Seeded {} users and {} vehicles",
        report.users_created, report.vehicles_created
    );
    Ok(report)
}

/// Seed and print what was added
pub async fn seed(services: &Services) -> anyhow::Result<()> {
    let report = seed_demo_data(services).await?;
    if report == SeedReport::default() {
        println!("Demo data already present, nothing to do.");
    } else {
        println!(
            "{} Added {} user(s) and {} vehicle(s)",
            "✓".green(),
            report.users_created,
            report.vehicles_created
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use fleet_model::MemoryStore;
    use pretty_assertions::assert_eq;

    fn services() -> Services {
        Services::from_store(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_seed_creates_demo_data() {
        let services = services();

        let report = seed_demo_data(&services).await.unwrap();
        assert_eq!(
            report,
            SeedReport {
                users_created: 3,
                vehicles_created: 3,
            }
        );

        let admin = services.users.get_user_by_uid("demo-admin").await.unwrap();
        assert!(admin.is_admin);
        assert!(admin.has_phone());
        assert!(!services.users.has_phone_number("demo-new").await.unwrap());
        assert_eq!(
            services
                .vehicles
                .get_vehicles_by_user("demo-admin")
                .await
                .unwrap()
                .len(),
            2
        );
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let services = services();
        seed_demo_data(&services).await.unwrap();

        let second = seed_demo_data(&services).await.unwrap();

        assert_eq!(second, SeedReport::default());
        assert_eq!(services.users.list_users().await.unwrap().len(), 3);
        assert_eq!(services.vehicles.list_all_vehicles().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_seed_keeps_existing_profiles() {
        let services = services();
        services
            .users
            .ensure_user(&ProviderIdentity {
                uid: "demo-driver".into(),
                display_name: "Rafael Lima".into(),
                email: "rafael.lima@example.com".into(),
                photo_url: String::new(),
            })
            .await
            .unwrap();

        let report = seed_demo_data(&services).await.unwrap();

        assert_eq!(report.users_created, 2);
        assert!(!services.users.has_phone_number("demo-driver").await.unwrap());
    }

    #[tokio::test]
    async fn test_promote_unknown_user_fails() {
        let services = services();
        assert!(promote(&services, "ghost", true).await.is_err());
    }
}
