//! In-memory implementation of `RecordStore`.
//!
//! `InMemoryStore` keeps every collection in one `StoreState` behind an
//! `Arc<Mutex<_>>`. Each method takes the lock once, so every create or
//! update is a single atomic mutation that later reads observe immediately.
//! Clones share the same state.
//!
//! Beyond the `RecordStore` trait the store exposes the queries the portal
//! services need: per-user listings, request review by hospital, and the
//! insurance collections.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::debug;

use medipilot_contracts::{
    appointment::{
        Appointment, AppointmentRequest, NewAppointment, NewAppointmentRequest, RequestPatch,
        RequestStatus,
    },
    call::{AiCall, CallPatch, NewAiCall},
    care::{
        HealthMetric, MealPlan, Medication, MedicationPatch, NewHealthMetric, NewMealPlan,
        NewMedication,
    },
    error::{PortalError, PortalResult},
    hospital::{Hospital, NewHospital},
    insurance::{
        ClaimPatch, ClaimStatus, InsuranceClaim, InsurancePolicy, InsuranceProvider,
        NewInsuranceClaim, NewInsurancePolicy, NewInsuranceProvider,
    },
    report::{MedicalReport, NewMedicalReport, ReportPatch},
    user::{NewUser, User, UserPatch},
};
use medipilot_core::traits::RecordStore;

use crate::collection::Collection;

// ── Internal mutable state ────────────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct StoreState {
    pub(crate) users: Collection<User>,
    pub(crate) reports: Collection<MedicalReport>,
    pub(crate) requests: Collection<AppointmentRequest>,
    pub(crate) appointments: Collection<Appointment>,
    pub(crate) medications: Collection<Medication>,
    pub(crate) metrics: Collection<HealthMetric>,
    pub(crate) meal_plans: Collection<MealPlan>,
    pub(crate) hospitals: Collection<Hospital>,
    pub(crate) providers: Collection<InsuranceProvider>,
    pub(crate) policies: Collection<InsurancePolicy>,
    pub(crate) claims: Collection<InsuranceClaim>,
    pub(crate) calls: Collection<AiCall>,
}

/// Row counts per collection, for status lines and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub users: usize,
    pub reports: usize,
    pub calls: usize,
    pub requests: usize,
    pub appointments: usize,
    pub hospitals: usize,
    pub policies: usize,
    pub claims: usize,
}

// ── Public store ──────────────────────────────────────────────────────────────

/// The portal's shared record store.
///
/// Starts empty; use `InMemoryStore::seeded()` for the demo data set.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub(crate) state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with the state locked. A poisoned lock surfaces as
    /// `StoreUnavailable` instead of a panic.
    fn with_state<R>(&self, f: impl FnOnce(&mut StoreState) -> PortalResult<R>) -> PortalResult<R> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| PortalError::StoreUnavailable {
                reason: format!("state lock poisoned: {e}"),
            })?;
        f(&mut state)
    }

    pub fn counts(&self) -> PortalResult<StoreCounts> {
        self.with_state(|s| {
            Ok(StoreCounts {
                users: s.users.len(),
                reports: s.reports.len(),
                calls: s.calls.len(),
                requests: s.requests.len(),
                appointments: s.appointments.len(),
                hospitals: s.hospitals.len(),
                policies: s.policies.len(),
                claims: s.claims.len(),
            })
        })
    }

    // ── Users ────────────────────────────────────────────────────────────────

    pub fn create_user(&self, draft: NewUser) -> PortalResult<User> {
        self.with_state(|s| Ok(s.users.insert(draft, Utc::now())))
    }

    pub fn update_user(&self, id: &str, patch: UserPatch) -> PortalResult<User> {
        self.with_state(|s| s.users.update(id, patch))
    }

    // ── Reports ──────────────────────────────────────────────────────────────

    pub fn reports_for_user(&self, user_id: &str) -> PortalResult<Vec<MedicalReport>> {
        self.with_state(|s| Ok(s.reports.filter(|r| r.user_id == user_id)))
    }

    // ── Appointments ─────────────────────────────────────────────────────────

    pub fn requests_for_user(&self, user_id: &str) -> PortalResult<Vec<AppointmentRequest>> {
        self.with_state(|s| Ok(s.requests.filter(|r| r.user_id == user_id)))
    }

    pub fn requests_for_hospital(&self, hospital_id: &str) -> PortalResult<Vec<AppointmentRequest>> {
        self.with_state(|s| Ok(s.requests.filter(|r| r.hospital_id == hospital_id)))
    }

    pub fn appointments_for_user(&self, user_id: &str) -> PortalResult<Vec<Appointment>> {
        self.with_state(|s| Ok(s.appointments.filter(|a| a.user_id == user_id)))
    }

    pub fn create_hospital(&self, draft: NewHospital) -> PortalResult<Hospital> {
        self.with_state(|s| Ok(s.hospitals.insert(draft, Utc::now())))
    }

    // ── Care plans ───────────────────────────────────────────────────────────

    pub fn create_medication(&self, draft: NewMedication) -> PortalResult<Medication> {
        self.with_state(|s| Ok(s.medications.insert(draft, Utc::now())))
    }

    pub fn find_medication(&self, id: &str) -> PortalResult<Option<Medication>> {
        self.with_state(|s| Ok(s.medications.get(id).cloned()))
    }

    pub fn update_medication(&self, id: &str, patch: MedicationPatch) -> PortalResult<Medication> {
        self.with_state(|s| s.medications.update(id, patch))
    }

    pub fn medications_for_user(&self, user_id: &str) -> PortalResult<Vec<Medication>> {
        self.with_state(|s| Ok(s.medications.filter(|m| m.user_id == user_id)))
    }

    pub fn create_metric(&self, draft: NewHealthMetric) -> PortalResult<HealthMetric> {
        self.with_state(|s| Ok(s.metrics.insert(draft, Utc::now())))
    }

    pub fn metrics_for_user(&self, user_id: &str) -> PortalResult<Vec<HealthMetric>> {
        self.with_state(|s| Ok(s.metrics.filter(|m| m.user_id == user_id)))
    }

    pub fn create_meal_plan(&self, draft: NewMealPlan) -> PortalResult<MealPlan> {
        self.with_state(|s| Ok(s.meal_plans.insert(draft, Utc::now())))
    }

    pub fn meal_plans_for_user(&self, user_id: &str) -> PortalResult<Vec<MealPlan>> {
        self.with_state(|s| Ok(s.meal_plans.filter(|p| p.user_id == user_id)))
    }

    // ── Insurance ────────────────────────────────────────────────────────────

    pub fn create_provider(&self, draft: NewInsuranceProvider) -> PortalResult<InsuranceProvider> {
        self.with_state(|s| Ok(s.providers.insert(draft, Utc::now())))
    }

    pub fn find_provider(&self, id: &str) -> PortalResult<Option<InsuranceProvider>> {
        self.with_state(|s| Ok(s.providers.get(id).cloned()))
    }

    pub fn create_policy(&self, draft: NewInsurancePolicy) -> PortalResult<InsurancePolicy> {
        self.with_state(|s| Ok(s.policies.insert(draft, Utc::now())))
    }

    /// Policies whose number contains `term` (case-insensitive) or whose
    /// holder id equals `term`.
    pub fn search_policies(&self, term: &str) -> PortalResult<Vec<InsurancePolicy>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        self.with_state(|s| {
            Ok(s.policies.filter(|p| {
                p.policy_number.to_lowercase().contains(&needle) || p.user_id == term.trim()
            }))
        })
    }

    pub fn create_claim(&self, draft: NewInsuranceClaim) -> PortalResult<InsuranceClaim> {
        self.with_state(|s| Ok(s.claims.insert(draft, Utc::now())))
    }

    pub fn find_claim(&self, id: &str) -> PortalResult<Option<InsuranceClaim>> {
        self.with_state(|s| Ok(s.claims.get(id).cloned()))
    }

    pub fn claims(&self) -> PortalResult<Vec<InsuranceClaim>> {
        self.with_state(|s| Ok(s.claims.all()))
    }

    /// Apply `patch` only while the claim is in `expected` status.
    pub fn update_claim_if(
        &self,
        id: &str,
        expected: ClaimStatus,
        patch: ClaimPatch,
    ) -> PortalResult<InsuranceClaim> {
        self.with_state(|s| {
            s.claims.update_if(
                id,
                |claim| {
                    if claim.status == expected {
                        Ok(())
                    } else {
                        Err(PortalError::InvalidTransition {
                            reason: format!("claim '{id}' is {:?}, expected {expected:?}", claim.status),
                        })
                    }
                },
                patch,
            )
        })
    }
}

impl RecordStore for InMemoryStore {
    fn find_user(&self, id: &str) -> PortalResult<Option<User>> {
        self.with_state(|s| Ok(s.users.get(id).cloned()))
    }

    fn create_report(&self, draft: NewMedicalReport) -> PortalResult<MedicalReport> {
        self.with_state(|s| Ok(s.reports.insert(draft, Utc::now())))
    }

    fn update_report(&self, id: &str, patch: ReportPatch) -> PortalResult<MedicalReport> {
        self.with_state(|s| s.reports.update(id, patch))
    }

    fn hospitals(&self) -> PortalResult<Vec<Hospital>> {
        self.with_state(|s| Ok(s.hospitals.all()))
    }

    fn find_hospital(&self, id: &str) -> PortalResult<Option<Hospital>> {
        self.with_state(|s| Ok(s.hospitals.get(id).cloned()))
    }

    fn create_call(&self, draft: NewAiCall) -> PortalResult<AiCall> {
        let call = self.with_state(|s| Ok(s.calls.insert(draft, Utc::now())))?;
        debug!(call_id = %call.id, "call record created");
        Ok(call)
    }

    fn update_call(&self, id: &str, patch: CallPatch) -> PortalResult<AiCall> {
        self.with_state(|s| s.calls.update(id, patch))
    }

    fn calls(&self) -> PortalResult<Vec<AiCall>> {
        self.with_state(|s| Ok(s.calls.all()))
    }

    fn create_request(&self, draft: NewAppointmentRequest) -> PortalResult<AppointmentRequest> {
        self.with_state(|s| Ok(s.requests.insert(draft, Utc::now())))
    }

    fn find_request(&self, id: &str) -> PortalResult<Option<AppointmentRequest>> {
        self.with_state(|s| Ok(s.requests.get(id).cloned()))
    }

    fn update_request_if(
        &self,
        id: &str,
        expected: RequestStatus,
        patch: RequestPatch,
    ) -> PortalResult<AppointmentRequest> {
        self.with_state(|s| {
            s.requests.update_if(
                id,
                |request| {
                    if request.status == expected {
                        Ok(())
                    } else {
                        Err(PortalError::InvalidTransition {
                            reason: format!(
                                "request '{id}' is {:?}, expected {expected:?}",
                                request.status
                            ),
                        })
                    }
                },
                patch,
            )
        })
    }

    fn create_appointment(&self, draft: NewAppointment) -> PortalResult<Appointment> {
        self.with_state(|s| Ok(s.appointments.insert(draft, Utc::now())))
    }
}
