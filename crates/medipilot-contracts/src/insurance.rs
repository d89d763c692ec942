//! Insurance providers, policies, and claims.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{merge, Draft, Patch, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceProvider {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub coverage_types: Vec<String>,
}

impl Record for InsuranceProvider {
    const PREFIX: &'static str = "ip";
    const COLLECTION: &'static str = "insurance provider";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewInsuranceProvider {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub coverage_types: Vec<String>,
}

impl Draft for NewInsuranceProvider {
    type Output = InsuranceProvider;

    fn into_record(self, id: String, _created_at: DateTime<Utc>) -> InsuranceProvider {
        InsuranceProvider {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            coverage_types: self.coverage_types,
        }
    }
}

/// Whether a policy is in force on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    Active,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    pub id: String,
    pub user_id: String,
    pub provider_id: String,
    pub policy_number: String,
    pub coverage_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub coverage_amount: u64,
    /// Status as recorded by the insurer.
    pub status: CoverageStatus,
}

impl InsurancePolicy {
    /// Coverage as of `today`: active while the end date is still ahead.
    pub fn coverage_on(&self, today: NaiveDate) -> CoverageStatus {
        if self.end_date > today {
            CoverageStatus::Active
        } else {
            CoverageStatus::Expired
        }
    }
}

impl Record for InsurancePolicy {
    const PREFIX: &'static str = "pol";
    const COLLECTION: &'static str = "insurance policy";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewInsurancePolicy {
    pub user_id: String,
    pub provider_id: String,
    pub policy_number: String,
    pub coverage_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub coverage_amount: u64,
}

impl Draft for NewInsurancePolicy {
    type Output = InsurancePolicy;

    fn into_record(self, id: String, _created_at: DateTime<Utc>) -> InsurancePolicy {
        InsurancePolicy {
            id,
            user_id: self.user_id,
            provider_id: self.provider_id,
            policy_number: self.policy_number,
            coverage_type: self.coverage_type,
            start_date: self.start_date,
            end_date: self.end_date,
            coverage_amount: self.coverage_amount,
            status: CoverageStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceClaim {
    pub id: String,
    pub policy_number: String,
    pub patient_name: String,
    pub procedure: String,
    pub amount: f64,
    pub hospital_name: String,
    pub date: NaiveDate,
    pub status: ClaimStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for InsuranceClaim {
    const PREFIX: &'static str = "ic";
    const COLLECTION: &'static str = "insurance claim";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewInsuranceClaim {
    pub policy_number: String,
    pub patient_name: String,
    pub procedure: String,
    pub amount: f64,
    pub hospital_name: String,
    pub date: NaiveDate,
}

impl Draft for NewInsuranceClaim {
    type Output = InsuranceClaim;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> InsuranceClaim {
        InsuranceClaim {
            id,
            policy_number: self.policy_number,
            patient_name: self.patient_name,
            procedure: self.procedure,
            amount: self.amount,
            hospital_name: self.hospital_name,
            date: self.date,
            status: ClaimStatus::Pending,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClaimPatch {
    pub status: Option<ClaimStatus>,
}

impl Patch<InsuranceClaim> for ClaimPatch {
    fn apply(self, claim: &mut InsuranceClaim) {
        merge(&mut claim.status, self.status);
    }
}
