//! Patient dashboard operations.

use chrono::NaiveDate;
use tracing::info;

use medipilot_contracts::{
    appointment::{Appointment, AppointmentRequest, NewAppointmentRequest, RequestSource},
    care::{
        HealthMetric, MealPlan, MealPreferences, Medication, MedicationPatch, MedicationStatus,
        MetricType, NewHealthMetric, NewMedication,
    },
    error::{PortalError, PortalResult},
    report::{MedicalReport, ReportType},
    user::{Role, User, UserPatch},
};
use medipilot_core::{traits::RecordStore, ReportRun};

use crate::portal::Portal;

/// A patient-initiated appointment request.
#[derive(Debug, Clone)]
pub struct ManualRequest {
    pub user_id: String,
    pub hospital_id: String,
    pub specialty: String,
    pub reason: String,
    pub preferred_date: NaiveDate,
}

/// A patient's medications split by status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicationList {
    pub active: Vec<Medication>,
    pub completed: Vec<Medication>,
}

pub struct PatientService<'a> {
    portal: &'a Portal,
}

impl<'a> PatientService<'a> {
    pub(crate) fn new(portal: &'a Portal) -> Self {
        Self { portal }
    }

    fn require_user(&self, user_id: &str) -> PortalResult<User> {
        self.portal
            .store()
            .find_user(user_id)?
            .ok_or_else(|| PortalError::invalid(format!("unknown user '{user_id}'")))
    }

    // ── Reports ──────────────────────────────────────────────────────────────

    /// Upload a report and run the automated follow-up for it.
    pub async fn upload_report(
        &self,
        user_id: &str,
        title: &str,
        report_type: ReportType,
    ) -> PortalResult<ReportRun> {
        self.portal
            .pipeline()
            .process_report(user_id, title, report_type)
            .await
    }

    pub fn reports(&self, user_id: &str) -> PortalResult<Vec<MedicalReport>> {
        self.portal.store().reports_for_user(user_id)
    }

    // ── Appointments ─────────────────────────────────────────────────────────

    pub fn request_appointment(&self, request: ManualRequest) -> PortalResult<AppointmentRequest> {
        self.require_user(&request.user_id)?;
        if request.specialty.trim().is_empty() {
            return Err(PortalError::invalid("specialty is required"));
        }
        if request.reason.trim().is_empty() {
            return Err(PortalError::invalid("reason is required"));
        }
        if self.portal.store().find_hospital(&request.hospital_id)?.is_none() {
            return Err(PortalError::invalid(format!(
                "unknown hospital '{}'",
                request.hospital_id
            )));
        }

        let created = self.portal.store().create_request(NewAppointmentRequest {
            user_id: request.user_id,
            hospital_id: request.hospital_id,
            specialty: request.specialty.trim().to_string(),
            reason: request.reason.trim().to_string(),
            preferred_date: request.preferred_date,
            source: RequestSource::Manual,
            call_id: None,
            urgency: None,
        })?;
        info!(request_id = %created.id, hospital_id = %created.hospital_id, "manual appointment request created");
        Ok(created)
    }

    pub fn requests(&self, user_id: &str) -> PortalResult<Vec<AppointmentRequest>> {
        self.portal.store().requests_for_user(user_id)
    }

    pub fn appointments(&self, user_id: &str) -> PortalResult<Vec<Appointment>> {
        self.portal.store().appointments_for_user(user_id)
    }

    /// Change which dashboard the user lands on. The role itself is fixed.
    pub fn switch_interface(&self, user_id: &str, interface: Role) -> PortalResult<User> {
        self.require_user(user_id)?;
        self.portal.store().update_user(
            user_id,
            UserPatch {
                preferred_interface: Some(interface),
            },
        )
    }

    // ── Medications ──────────────────────────────────────────────────────────

    pub fn add_medication(&self, draft: NewMedication) -> PortalResult<Medication> {
        self.require_user(&draft.user_id)?;
        if draft.name.trim().is_empty() {
            return Err(PortalError::invalid("medication name is required"));
        }
        if let (Some(start), Some(end)) = (draft.start_date, draft.end_date) {
            if end < start {
                return Err(PortalError::invalid("medication end date precedes start date"));
            }
        }
        self.portal.store().create_medication(draft)
    }

    /// Flip a medication between active and completed.
    pub fn toggle_medication(&self, medication_id: &str) -> PortalResult<Medication> {
        let current = self
            .portal
            .store()
            .find_medication(medication_id)?
            .ok_or_else(|| PortalError::not_found("medication", medication_id))?;
        self.portal.store().update_medication(
            medication_id,
            MedicationPatch {
                status: Some(current.status.toggled()),
            },
        )
    }

    pub fn medications(&self, user_id: &str) -> PortalResult<MedicationList> {
        let (active, completed) = self
            .portal
            .store()
            .medications_for_user(user_id)?
            .into_iter()
            .partition(|m| m.status == MedicationStatus::Active);
        Ok(MedicationList { active, completed })
    }

    // ── Health metrics ───────────────────────────────────────────────────────

    /// Record a reading. `metric_type` must name one of the catalog types.
    pub fn record_metric(
        &self,
        user_id: &str,
        metric_type: &str,
        value: &str,
        notes: &str,
    ) -> PortalResult<HealthMetric> {
        self.require_user(user_id)?;
        let metric_type = MetricType::parse(metric_type)
            .ok_or_else(|| PortalError::invalid(format!("unknown metric type '{metric_type}'")))?;
        if value.trim().is_empty() {
            return Err(PortalError::invalid("metric value is required"));
        }
        self.portal.store().create_metric(NewHealthMetric {
            user_id: user_id.to_string(),
            metric_type,
            value: value.trim().to_string(),
            notes: notes.to_string(),
        })
    }

    pub fn metrics(&self, user_id: &str) -> PortalResult<Vec<HealthMetric>> {
        self.portal.store().metrics_for_user(user_id)
    }

    // ── Meal plans ───────────────────────────────────────────────────────────

    pub async fn generate_meal_plan(
        &self,
        user_id: &str,
        preferences: MealPreferences,
    ) -> PortalResult<MealPlan> {
        self.require_user(user_id)?;
        let draft = self.portal.meal_plans().generate(user_id, preferences).await;
        let plan = self.portal.store().create_meal_plan(draft)?;
        info!(plan_id = %plan.id, user_id = %user_id, "meal plan saved");
        Ok(plan)
    }

    pub fn meal_plans(&self, user_id: &str) -> PortalResult<Vec<MealPlan>> {
        self.portal.store().meal_plans_for_user(user_id)
    }
}
