//! Portal users and the three role-based interfaces.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{merge, Draft, Patch, Record};

/// Which dashboard a user belongs to (and which one they prefer to see).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Hospital,
    Insurance,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Hospital => "hospital",
            Role::Insurance => "insurance",
        }
    }

    /// Parse a role name; returns `None` for anything outside the three roles.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "patient" => Some(Role::Patient),
            "hospital" => Some(Role::Hospital),
            "insurance" => Some(Role::Insurance),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Mutated when the user switches dashboards; starts equal to `role`.
    pub preferred_interface: Role,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    /// Set for hospital staff.
    pub hospital_id: Option<String>,
    /// Set for insurance staff.
    pub provider_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for User {
    const PREFIX: &'static str = "";
    const COLLECTION: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub hospital_id: Option<String>,
    pub provider_id: Option<String>,
}

impl Draft for NewUser {
    type Output = User;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> User {
        User {
            id,
            email: self.email,
            name: self.name,
            role: self.role,
            preferred_interface: self.role,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            address: self.address,
            hospital_id: self.hospital_id,
            provider_id: self.provider_id,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub preferred_interface: Option<Role>,
}

impl Patch<User> for UserPatch {
    fn apply(self, user: &mut User) {
        merge(&mut user.preferred_interface, self.preferred_interface);
    }
}
