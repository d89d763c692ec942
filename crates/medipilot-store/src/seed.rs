//! The demo data set: three users (one per role), two hospitals, one
//! insurance provider and one policy.

use chrono::NaiveDate;
use tracing::info;

use medipilot_contracts::{
    error::{PortalError, PortalResult},
    hospital::NewHospital,
    insurance::{NewInsurancePolicy, NewInsuranceProvider},
    user::{NewUser, Role},
};

use crate::memory::InMemoryStore;

fn date(y: i32, m: u32, d: u32) -> PortalResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| PortalError::ConfigError {
        reason: format!("invalid seed date {y}-{m}-{d}"),
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl InMemoryStore {
    /// A store pre-loaded with the demo data.
    pub fn seeded() -> PortalResult<Self> {
        let store = Self::new();
        seed_demo_data(&store)?;
        Ok(store)
    }
}

/// Load the demo data into `store`. Intended for an empty store: ids are
/// assigned by position, so the well-known ids (`1`, `h1`, `ip1`, `pol1`)
/// only hold when nothing was inserted before.
pub fn seed_demo_data(store: &InMemoryStore) -> PortalResult<()> {
    store.create_user(NewUser {
        email: "patient@demo.com".to_string(),
        name: "John Doe".to_string(),
        role: Role::Patient,
        phone: "+1234567890".to_string(),
        date_of_birth: Some(date(1990, 5, 15)?),
        address: Some("123 Main St, City, State".to_string()),
        hospital_id: None,
        provider_id: None,
    })?;
    store.create_user(NewUser {
        email: "hospital@demo.com".to_string(),
        name: "City Hospital".to_string(),
        role: Role::Hospital,
        phone: "+1234567891".to_string(),
        date_of_birth: None,
        address: None,
        hospital_id: Some("h1".to_string()),
        provider_id: None,
    })?;
    store.create_user(NewUser {
        email: "insurance@demo.com".to_string(),
        name: "HealthCare Insurance".to_string(),
        role: Role::Insurance,
        phone: "+1234567892".to_string(),
        date_of_birth: None,
        address: None,
        hospital_id: None,
        provider_id: Some("ip1".to_string()),
    })?;

    store.create_hospital(NewHospital {
        name: "City General Hospital".to_string(),
        address: "456 Hospital Ave, City, State".to_string(),
        phone: "+1234567891".to_string(),
        specialties: strings(&["Cardiology", "Neurology", "Orthopedics"]),
    })?;
    store.create_hospital(NewHospital {
        name: "Metro Medical Center".to_string(),
        address: "789 Medical Blvd, City, State".to_string(),
        phone: "+1234567893".to_string(),
        specialties: strings(&["Pediatrics", "Oncology", "Surgery"]),
    })?;

    store.create_provider(NewInsuranceProvider {
        name: "HealthCare Insurance Co.".to_string(),
        phone: "+1234567892".to_string(),
        email: "contact@healthcare.com".to_string(),
        coverage_types: strings(&["Basic", "Premium", "Family"]),
    })?;
    store.create_policy(NewInsurancePolicy {
        user_id: "1".to_string(),
        provider_id: "ip1".to_string(),
        policy_number: "HC-2024-001".to_string(),
        coverage_type: "Premium".to_string(),
        start_date: date(2024, 1, 1)?,
        end_date: date(2024, 12, 31)?,
        coverage_amount: 500_000,
    })?;

    let counts = store.counts()?;
    info!(
        users = counts.users,
        hospitals = counts.hospitals,
        policies = counts.policies,
        "demo data seeded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use medipilot_core::traits::RecordStore;

    use super::*;

    #[test]
    fn seeded_ids_are_well_known() {
        let store = InMemoryStore::seeded().unwrap();

        let patient = store.find_user("1").unwrap().unwrap();
        assert_eq!(patient.name, "John Doe");
        assert_eq!(patient.preferred_interface, Role::Patient);

        let staff = store.find_user("2").unwrap().unwrap();
        assert_eq!(staff.email, "hospital@demo.com");
        assert_eq!(staff.hospital_id.as_deref(), Some("h1"));

        let h1 = store.find_hospital("h1").unwrap().unwrap();
        assert!(h1.offers("Cardiology"));
        let h2 = store.find_hospital("h2").unwrap().unwrap();
        assert!(h2.offers("Oncology"));

        let policies = store.search_policies("1").unwrap();
        assert_eq!(policies.len(), 1);
        assert_eq!(policies[0].id, "pol1");
        assert_eq!(policies[0].provider_id, "ip1");
    }

    #[test]
    fn hospitals_come_back_in_id_order() {
        let store = InMemoryStore::seeded().unwrap();
        let ids: Vec<String> = store.hospitals().unwrap().into_iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["h1", "h2"]);
    }
}
