//! Appointment requests and the appointments they turn into.
//!
//! A request starts `Pending`. Hospital staff move it to `Confirmed` (which
//! also creates an `Appointment`) or `Rejected`; both are terminal.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    record::{merge, Draft, Patch, Record},
    report::Urgency,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Confirmed,
    Rejected,
}

/// Who raised the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestSource {
    Manual,
    AiAgent,
}

/// Hospital staff's decision on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Confirmed,
    Rejected,
}

impl From<Decision> for RequestStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Confirmed => RequestStatus::Confirmed,
            Decision::Rejected => RequestStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub id: String,
    pub user_id: String,
    pub hospital_id: String,
    pub specialty: String,
    pub reason: String,
    pub preferred_date: NaiveDate,
    pub status: RequestStatus,
    pub source: RequestSource,
    /// The completed call that produced this request (`AiAgent` source only).
    pub call_id: Option<String>,
    pub urgency: Option<Urgency>,
    pub created_at: DateTime<Utc>,
}

impl Record for AppointmentRequest {
    const PREFIX: &'static str = "ar";
    const COLLECTION: &'static str = "appointment request";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointmentRequest {
    pub user_id: String,
    pub hospital_id: String,
    pub specialty: String,
    pub reason: String,
    pub preferred_date: NaiveDate,
    pub source: RequestSource,
    pub call_id: Option<String>,
    pub urgency: Option<Urgency>,
}

impl Draft for NewAppointmentRequest {
    type Output = AppointmentRequest;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> AppointmentRequest {
        AppointmentRequest {
            id,
            user_id: self.user_id,
            hospital_id: self.hospital_id,
            specialty: self.specialty,
            reason: self.reason,
            preferred_date: self.preferred_date,
            status: RequestStatus::Pending,
            source: self.source,
            call_id: self.call_id,
            urgency: self.urgency,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestPatch {
    pub status: Option<RequestStatus>,
}

impl Patch<AppointmentRequest> for RequestPatch {
    fn apply(self, request: &mut AppointmentRequest) {
        merge(&mut request.status, self.status);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub user_id: String,
    pub hospital_id: String,
    pub hospital_name: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for Appointment {
    const PREFIX: &'static str = "apt";
    const COLLECTION: &'static str = "appointment";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub user_id: String,
    pub hospital_id: String,
    pub hospital_name: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time: String,
}

impl Draft for NewAppointment {
    type Output = Appointment;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> Appointment {
        Appointment {
            id,
            user_id: self.user_id,
            hospital_id: self.hospital_id,
            hospital_name: self.hospital_name,
            specialty: self.specialty,
            date: self.date,
            time: self.time,
            status: AppointmentStatus::Confirmed,
            created_at,
        }
    }
}
