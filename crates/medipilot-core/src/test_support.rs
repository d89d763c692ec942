//! Test doubles shared by the unit tests in this crate.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use medipilot_contracts::{
    appointment::{
        Appointment, AppointmentRequest, NewAppointment, NewAppointmentRequest, RequestPatch,
        RequestStatus,
    },
    call::{AiCall, CallPatch, NewAiCall},
    error::{PortalError, PortalResult},
    hospital::{Hospital, NewHospital},
    record::{Draft, Patch, Record},
    report::{
        AnalysisInput, AnalysisResult, MedicalReport, NewMedicalReport, ReportPatch, Severity,
        Urgency,
    },
    user::{NewUser, Role, User},
};

use crate::traits::{AnalysisProvider, Delay, LatencyPhase, RecordStore};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap()
}

pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

pub fn cardiology_analysis() -> AnalysisResult {
    AnalysisResult {
        findings: vec!["Elevated cholesterol levels".to_string()],
        severity: Severity::Medium,
        recommendations: vec!["Schedule a cardiology consult".to_string()],
        follow_up_needed: true,
        urgency: Urgency::Medium,
        suggested_specialty: Some("Cardiology".to_string()),
        estimated_wait_days: 7,
    }
}

pub fn routine_analysis() -> AnalysisResult {
    AnalysisResult {
        findings: vec!["All values within normal range".to_string()],
        severity: Severity::Low,
        recommendations: vec!["Continue current routine".to_string()],
        follow_up_needed: false,
        urgency: Urgency::Low,
        suggested_specialty: None,
        estimated_wait_days: 0,
    }
}

fn insert<D: Draft>(rows: &mut Vec<D::Output>, draft: D) -> D::Output {
    let id = format!("{}{}", D::Output::PREFIX, rows.len() + 1);
    let record = draft.into_record(id, fixed_now());
    rows.push(record.clone());
    record
}

fn update<T: Record, P: Patch<T>>(rows: &mut [T], id: &str, patch: P) -> PortalResult<T> {
    let row = rows
        .iter_mut()
        .find(|r| r.id() == id)
        .ok_or_else(|| PortalError::not_found(T::COLLECTION, id))?;
    patch.apply(row);
    Ok(row.clone())
}

#[derive(Default)]
pub struct MockState {
    pub users: Vec<User>,
    pub hospitals: Vec<Hospital>,
    pub reports: Vec<MedicalReport>,
    pub calls: Vec<AiCall>,
    pub requests: Vec<AppointmentRequest>,
    pub appointments: Vec<Appointment>,
}

/// A plain vector-backed store. `state` is shared so tests can inspect it
/// after handing the store to a pipeline.
#[derive(Clone, Default)]
pub struct MockStore {
    pub state: Arc<Mutex<MockState>>,
}

impl MockStore {
    /// One patient (id "1") and one hospital per specialty list.
    pub fn with_hospitals(hospitals: Vec<(&str, Vec<&str>)>) -> Self {
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            insert(
                &mut state.users,
                NewUser {
                    email: "patient@example.com".to_string(),
                    name: "John Doe".to_string(),
                    role: Role::Patient,
                    phone: "+1234567890".to_string(),
                    date_of_birth: None,
                    address: None,
                    hospital_id: None,
                    provider_id: None,
                },
            );
            for (name, specialties) in hospitals {
                insert(
                    &mut state.hospitals,
                    NewHospital {
                        name: name.to_string(),
                        address: "1 Main St".to_string(),
                        phone: "+15550000000".to_string(),
                        specialties: specialties.iter().map(|s| s.to_string()).collect(),
                    },
                );
            }
        }
        store
    }

    pub fn calls_snapshot(&self) -> Vec<AiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn requests_snapshot(&self) -> Vec<AppointmentRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn appointments_snapshot(&self) -> Vec<Appointment> {
        self.state.lock().unwrap().appointments.clone()
    }

    pub fn reports_snapshot(&self) -> Vec<MedicalReport> {
        self.state.lock().unwrap().reports.clone()
    }
}

impl RecordStore for MockStore {
    fn find_user(&self, id: &str) -> PortalResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.iter().find(|u| u.id == id).cloned())
    }

    fn create_report(&self, draft: NewMedicalReport) -> PortalResult<MedicalReport> {
        Ok(insert(&mut self.state.lock().unwrap().reports, draft))
    }

    fn update_report(&self, id: &str, patch: ReportPatch) -> PortalResult<MedicalReport> {
        update(&mut self.state.lock().unwrap().reports, id, patch)
    }

    fn hospitals(&self) -> PortalResult<Vec<Hospital>> {
        Ok(self.state.lock().unwrap().hospitals.clone())
    }

    fn find_hospital(&self, id: &str) -> PortalResult<Option<Hospital>> {
        Ok(self.state.lock().unwrap().hospitals.iter().find(|h| h.id == id).cloned())
    }

    fn create_call(&self, draft: NewAiCall) -> PortalResult<AiCall> {
        Ok(insert(&mut self.state.lock().unwrap().calls, draft))
    }

    fn update_call(&self, id: &str, patch: CallPatch) -> PortalResult<AiCall> {
        update(&mut self.state.lock().unwrap().calls, id, patch)
    }

    fn calls(&self) -> PortalResult<Vec<AiCall>> {
        Ok(self.calls_snapshot())
    }

    fn create_request(&self, draft: NewAppointmentRequest) -> PortalResult<AppointmentRequest> {
        Ok(insert(&mut self.state.lock().unwrap().requests, draft))
    }

    fn find_request(&self, id: &str) -> PortalResult<Option<AppointmentRequest>> {
        Ok(self.state.lock().unwrap().requests.iter().find(|r| r.id == id).cloned())
    }

    fn update_request_if(
        &self,
        id: &str,
        expected: RequestStatus,
        patch: RequestPatch,
    ) -> PortalResult<AppointmentRequest> {
        let mut state = self.state.lock().unwrap();
        let current = state
            .requests
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| PortalError::not_found("appointment request", id))?;
        if current.status != expected {
            return Err(PortalError::InvalidTransition {
                reason: format!("request '{id}' is {:?}", current.status),
            });
        }
        update(&mut state.requests, id, patch)
    }

    fn create_appointment(&self, draft: NewAppointment) -> PortalResult<Appointment> {
        Ok(insert(&mut self.state.lock().unwrap().appointments, draft))
    }
}

/// Always returns the same analysis.
pub struct StaticProvider(pub AnalysisResult);

impl AnalysisProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    fn analyze(&self, _input: &AnalysisInput) -> AnalysisResult {
        self.0.clone()
    }
}

/// Records every suspension instead of sleeping.
#[derive(Clone, Default)]
pub struct RecordingDelay {
    pub waits: Arc<Mutex<Vec<(LatencyPhase, Duration)>>>,
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn wait(&self, phase: LatencyPhase, duration: Duration) {
        self.waits.lock().unwrap().push((phase, duration));
    }
}
