//! Hospitals and the specialties they offer.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Draft, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Canonical specialty labels, e.g. "Cardiology". Matched case-sensitively.
    pub specialties: BTreeSet<String>,
}

impl Hospital {
    /// True if `specialty` is one of this hospital's exact labels.
    pub fn offers(&self, specialty: &str) -> bool {
        self.specialties.contains(specialty)
    }
}

impl Record for Hospital {
    const PREFIX: &'static str = "h";
    const COLLECTION: &'static str = "hospital";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewHospital {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub specialties: Vec<String>,
}

impl Draft for NewHospital {
    type Output = Hospital;

    fn into_record(self, id: String, _created_at: DateTime<Utc>) -> Hospital {
        Hospital {
            id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            specialties: self.specialties.into_iter().collect(),
        }
    }
}
