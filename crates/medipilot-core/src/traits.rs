//! Capability traits the follow-up pipeline is written against.
//!
//! - `AnalysisProvider` — produces an `AnalysisResult` for a report (untrusted;
//!   results are checked against the analysis contract before use)
//! - `RecordStore`      — the shared mutable record collections
//! - `Clock`            — wall-clock time and the local calendar date
//! - `Delay`            — simulated latency at the pipeline's suspension points
//!
//! Every capability is injected, so tests run with a fixed clock, zero delay,
//! and an isolated store.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use medipilot_contracts::{
    appointment::{
        Appointment, AppointmentRequest, NewAppointment, NewAppointmentRequest, RequestPatch,
        RequestStatus,
    },
    call::{AiCall, CallPatch, NewAiCall},
    error::PortalResult,
    hospital::Hospital,
    report::{AnalysisInput, AnalysisResult, MedicalReport, NewMedicalReport, ReportPatch},
    user::User,
};

/// Something that can look at a report and say what should happen next.
///
/// Implementations must be pure from the pipeline's perspective: no store
/// access, no side effects. The pipeline persists whatever comes back.
pub trait AnalysisProvider: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &str;

    fn analyze(&self, input: &AnalysisInput) -> AnalysisResult;
}

/// The record collections the pipeline reads and writes.
///
/// Each call is one independent, immediately-visible mutation; there are no
/// transactions. `update_*` methods apply a shallow patch and return the
/// merged record, or `PortalError::NotFound` for an unknown id.
pub trait RecordStore: Send + Sync {
    fn find_user(&self, id: &str) -> PortalResult<Option<User>>;

    fn create_report(&self, draft: NewMedicalReport) -> PortalResult<MedicalReport>;
    fn update_report(&self, id: &str, patch: ReportPatch) -> PortalResult<MedicalReport>;

    /// All hospitals, in id order.
    fn hospitals(&self) -> PortalResult<Vec<Hospital>>;
    fn find_hospital(&self, id: &str) -> PortalResult<Option<Hospital>>;

    fn create_call(&self, draft: NewAiCall) -> PortalResult<AiCall>;
    fn update_call(&self, id: &str, patch: CallPatch) -> PortalResult<AiCall>;
    /// All calls, oldest first.
    fn calls(&self) -> PortalResult<Vec<AiCall>>;

    fn create_request(&self, draft: NewAppointmentRequest) -> PortalResult<AppointmentRequest>;
    fn find_request(&self, id: &str) -> PortalResult<Option<AppointmentRequest>>;

    /// Apply `patch` only if the request is currently in `expected` status.
    ///
    /// Returns `PortalError::InvalidTransition` when the status has moved on,
    /// so two concurrent decisions cannot both succeed.
    fn update_request_if(
        &self,
        id: &str,
        expected: RequestStatus,
        patch: RequestPatch,
    ) -> PortalResult<AppointmentRequest>;

    fn create_appointment(&self, draft: NewAppointment) -> PortalResult<Appointment>;
}

/// Source of the current time and the local calendar date.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Today's date in local time; used for preferred-date arithmetic.
    fn today(&self) -> NaiveDate;
}

/// Where in a run a simulated suspension happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatencyPhase {
    ReportAnalysis,
    CallConnect,
    MealPlanGeneration,
}

/// Simulated latency standing in for network and model round-trips.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, phase: LatencyPhase, duration: Duration);
}
