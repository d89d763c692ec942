//! The follow-up pipeline: the report-to-appointment run.
//!
//! Phases of one run, strictly in order:
//!
//!   analyze → match hospital → simulate call → emit appointment request
//!
//! A run that finds no hospital stops at the match phase: the call is marked
//! `Failed`, no further suspensions happen, and no request is emitted. An
//! `AppointmentRequest` with source `AiAgent` is therefore only ever created
//! for a call that reached `Completed`.
//!
//! Runs are serialized through an async mutex, so two runs never interleave
//! their read-modify-write of shared records.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use medipilot_contracts::{
    appointment::{AppointmentRequest, Decision},
    call::{AiCall, CallPatch, CallStats, CallStatus, NewAiCall, RunId},
    error::{PortalError, PortalResult},
    report::{AnalysisInput, AnalysisResult, MedicalReport, NewMedicalReport, ReportPatch, ReportStatus, ReportType},
};

use crate::{
    emitter, matcher,
    requests,
    simulator::{CallScript, CallSimulator},
    traits::{AnalysisProvider, Clock, Delay, LatencyPhase, RecordStore},
    verify::check_analysis,
};

/// Message shown to the patient when no hospital offers the specialty.
pub const NO_HOSPITAL_MESSAGE: &str = "No hospital available for required specialty";

/// Timing and booking constants for the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Simulated latency of report analysis.
    pub analysis_latency: Duration,
    /// Simulated time between dialing and the hospital picking up.
    pub call_connect_latency: Duration,
    /// Time slot written on appointments created by a confirmation.
    pub appointment_time: String,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            analysis_latency: Duration::from_millis(2000),
            call_connect_latency: Duration::from_millis(3000),
            appointment_time: "10:00 AM".to_string(),
        }
    }
}

/// How a follow-up run ended.
///
/// Callers pattern-match on this:
/// - `NotNeeded` → the analysis asked for nothing; no records were written
/// - `NoMatchingHospital` → show `NO_HOSPITAL_MESSAGE`; the call is `Failed`
/// - `Requested` → a pending request is waiting for hospital review
#[derive(Debug, Clone, PartialEq)]
pub enum FollowUpOutcome {
    NotNeeded,
    NoMatchingHospital { call: AiCall },
    Requested { call: AiCall, request: AppointmentRequest },
}

impl FollowUpOutcome {
    /// The emitted request, if there is one.
    pub fn request(&self) -> Option<&AppointmentRequest> {
        match self {
            FollowUpOutcome::Requested { request, .. } => Some(request),
            _ => None,
        }
    }

    /// The call record the run created, if it got that far.
    pub fn call(&self) -> Option<&AiCall> {
        match self {
            FollowUpOutcome::NotNeeded => None,
            FollowUpOutcome::NoMatchingHospital { call } | FollowUpOutcome::Requested { call, .. } => {
                Some(call)
            }
        }
    }

    /// View the no-hospital branch as an error, for callers that only want
    /// the request.
    pub fn into_result(self) -> PortalResult<Option<AppointmentRequest>> {
        match self {
            FollowUpOutcome::NotNeeded => Ok(None),
            FollowUpOutcome::NoMatchingHospital { call } => Err(PortalError::NoMatchingHospital {
                specialty: call.specialty,
            }),
            FollowUpOutcome::Requested { request, .. } => Ok(Some(request)),
        }
    }
}

/// A submitted report together with what its follow-up run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRun {
    pub report: MedicalReport,
    pub outcome: FollowUpOutcome,
}

/// Drives report analysis and automated follow-up against one record store.
///
/// Construct once per store. The pipeline owns its capabilities and the run
/// lock; the store handle is shared with the rest of the portal.
pub struct FollowUpPipeline {
    store: Arc<dyn RecordStore>,
    provider: Box<dyn AnalysisProvider>,
    clock: Box<dyn Clock>,
    delay: Box<dyn Delay>,
    simulator: CallSimulator,
    settings: PipelineSettings,
    run_lock: Mutex<()>,
}

impl FollowUpPipeline {
    pub fn new(
        store: Arc<dyn RecordStore>,
        provider: Box<dyn AnalysisProvider>,
        clock: Box<dyn Clock>,
        delay: Box<dyn Delay>,
        simulator: CallSimulator,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            store,
            provider,
            clock,
            delay,
            simulator,
            settings,
            run_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Persist a new report and attach its analysis.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a blank title or type, or an unknown user; nothing
    /// is written in that case. `AnalysisContractViolated` if the provider
    /// returns a malformed result; the report then stays `Uploaded`.
    pub async fn submit_report(
        &self,
        user_id: &str,
        title: &str,
        report_type: ReportType,
    ) -> PortalResult<MedicalReport> {
        if title.trim().is_empty() {
            return Err(PortalError::invalid("report title is required"));
        }
        if report_type.as_str().trim().is_empty() {
            return Err(PortalError::invalid("report type is required"));
        }
        if self.store.find_user(user_id)?.is_none() {
            return Err(PortalError::invalid(format!("unknown user '{user_id}'")));
        }

        let report = self.store.create_report(NewMedicalReport {
            user_id: user_id.to_string(),
            title: title.trim().to_string(),
            report_type: report_type.clone(),
            file_name: "report.pdf".to_string(),
        })?;
        info!(report_id = %report.id, user_id = %user_id, kind = %report_type, "report uploaded");

        self.delay
            .wait(LatencyPhase::ReportAnalysis, self.settings.analysis_latency)
            .await;

        let input = AnalysisInput {
            title: report.title.clone(),
            report_type,
        };
        let analysis = self.provider.analyze(&input);
        check_analysis(&analysis)?;

        let report = self.store.update_report(
            &report.id,
            ReportPatch {
                ai_analysis: Some(analysis),
                status: Some(ReportStatus::Analyzed),
            },
        )?;
        info!(
            report_id = %report.id,
            provider = %self.provider.name(),
            follow_up = report.ai_analysis.as_ref().map(|a| a.follow_up_needed).unwrap_or(false),
            "report analyzed"
        );
        Ok(report)
    }

    /// Run match → call → emit for an analyzed report.
    ///
    /// Returns `NotNeeded` without touching the store when the analysis asks
    /// for no follow-up.
    pub async fn run_followup_pipeline(
        &self,
        report: &MedicalReport,
        analysis: &AnalysisResult,
    ) -> PortalResult<FollowUpOutcome> {
        check_analysis(analysis)?;

        let Some(specialty) = analysis.follow_up_specialty() else {
            debug!(report_id = %report.id, "no follow-up needed, skipping call");
            return Ok(FollowUpOutcome::NotNeeded);
        };

        let _guard = self.run_lock.lock().await;
        let run_id = RunId::new();

        // Computed before any write: a bad wait must leave no call behind.
        let preferred_date =
            emitter::preferred_date(self.clock.today(), analysis.estimated_wait_days)?;

        let user = self
            .store
            .find_user(&report.user_id)?
            .ok_or_else(|| PortalError::not_found("user", &report.user_id))?;

        // ── Phase 1: open the call record ────────────────────────────────────
        let call = self.store.create_call(NewAiCall {
            user_id: user.id.clone(),
            report_id: report.id.clone(),
            patient_name: user.name.clone(),
            patient_phone: user.phone.clone(),
            specialty: specialty.to_string(),
            urgency: analysis.urgency,
            reason: format!("Follow-up for {}", analysis.findings[0]),
            analysis: analysis.clone(),
        })?;
        info!(run_id = %run_id, call_id = %call.id, specialty = %specialty, "automated call initiating");

        // ── Phase 2: match a hospital ────────────────────────────────────────
        //
        // No match is terminal for this report: fail the call and stop.
        let Some(hospital) = matcher::find_hospital_for(self.store.as_ref(), specialty)? else {
            warn!(run_id = %run_id, call_id = %call.id, specialty = %specialty, "no hospital offers specialty");
            let call = self.store.update_call(
                &call.id,
                CallPatch {
                    status: Some(CallStatus::Failed),
                    failure_reason: Some(NO_HOSPITAL_MESSAGE.to_string()),
                    ..CallPatch::default()
                },
            )?;
            return Ok(FollowUpOutcome::NoMatchingHospital { call });
        };

        // ── Phase 3: dial and hold for the connect latency ───────────────────
        let call = self.store.update_call(
            &call.id,
            CallPatch {
                hospital_id: Some(hospital.id.clone()),
                status: Some(CallStatus::Calling),
                call_start_time: Some(self.clock.now()),
                ..CallPatch::default()
            },
        )?;
        debug!(run_id = %run_id, call_id = %call.id, hospital_id = %hospital.id, "calling hospital");

        self.delay
            .wait(LatencyPhase::CallConnect, self.settings.call_connect_latency)
            .await;

        // ── Phase 4: generate the conversation and complete the call ────────
        let simulated = self
            .simulator
            .simulate(&CallScript::for_call(&call, &hospital), self.clock.now());
        let call = self.store.update_call(
            &call.id,
            CallPatch {
                status: Some(CallStatus::Completed),
                call_end_time: Some(self.clock.now()),
                transcript: Some(simulated.transcript),
                call_attempts: Some(call.call_attempts + 1),
                call_duration: Some(simulated.duration),
                ..CallPatch::default()
            },
        )?;

        // ── Phase 5: emit the pending request ────────────────────────────────
        let request = self
            .store
            .create_request(emitter::emit(&call, preferred_date)?)?;
        info!(
            run_id = %run_id,
            call_id = %call.id,
            request_id = %request.id,
            hospital_id = %request.hospital_id,
            preferred_date = %request.preferred_date,
            "call completed, appointment request created"
        );

        Ok(FollowUpOutcome::Requested { call, request })
    }

    /// The full upload flow: submit, analyze, then follow up if needed.
    pub async fn process_report(
        &self,
        user_id: &str,
        title: &str,
        report_type: ReportType,
    ) -> PortalResult<ReportRun> {
        let report = self.submit_report(user_id, title, report_type).await?;
        let outcome = match report.ai_analysis.clone() {
            Some(analysis) => self.run_followup_pipeline(&report, &analysis).await?,
            None => FollowUpOutcome::NotNeeded,
        };
        Ok(ReportRun { report, outcome })
    }

    /// Calls placed to `hospital_id`, newest first.
    pub fn get_call_history(&self, hospital_id: &str) -> PortalResult<Vec<AiCall>> {
        let mut calls: Vec<AiCall> = self
            .store
            .calls()?
            .into_iter()
            .filter(|c| c.hospital_id.as_deref() == Some(hospital_id))
            .collect();
        calls.reverse();
        Ok(calls)
    }

    /// Counts over every call in the store.
    pub fn call_stats(&self) -> PortalResult<CallStats> {
        Ok(CallStats::tally(&self.store.calls()?, self.clock.now().date_naive()))
    }

    /// Counts over the calls placed to `hospital_id` only.
    pub fn call_stats_for(&self, hospital_id: &str) -> PortalResult<CallStats> {
        let calls = self.get_call_history(hospital_id)?;
        Ok(CallStats::tally(&calls, self.clock.now().date_naive()))
    }

    /// Hospital staff confirm or reject a pending request.
    pub fn decide_appointment_request(
        &self,
        request_id: &str,
        decision: Decision,
    ) -> PortalResult<AppointmentRequest> {
        requests::decide_appointment_request(
            self.store.as_ref(),
            request_id,
            decision,
            &self.settings.appointment_time,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use medipilot_contracts::{
        appointment::{Decision, RequestSource, RequestStatus},
        call::{CallStatus, Speaker},
        error::PortalError,
        report::{ReportStatus, ReportType},
    };

    use crate::{
        runtime::FixedClock,
        simulator::CallSimulator,
        test_support::{
            cardiology_analysis, fixed_now, fixed_today, routine_analysis, MockStore,
            RecordingDelay, StaticProvider,
        },
        traits::LatencyPhase,
    };

    use super::*;

    fn pipeline(
        store: &MockStore,
        analysis: AnalysisResult,
        delay: &RecordingDelay,
    ) -> FollowUpPipeline {
        FollowUpPipeline::new(
            Arc::new(store.clone()),
            Box::new(StaticProvider(analysis)),
            Box::new(FixedClock::new(fixed_now(), fixed_today())),
            Box::new(delay.clone()),
            CallSimulator::default(),
            PipelineSettings::default(),
        )
    }

    fn city_general() -> MockStore {
        MockStore::with_hospitals(vec![
            ("City General Hospital", vec!["Cardiology", "Neurology", "Orthopedics"]),
            ("Metro Medical Center", vec!["Pediatrics", "Oncology", "Surgery"]),
        ])
    }

    // ── submit_report ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn submit_report_persists_analysis_after_latency() {
        let store = city_general();
        let delay = RecordingDelay::default();
        let p = pipeline(&store, cardiology_analysis(), &delay);

        let report = p
            .submit_report("1", "Annual Blood Work", ReportType::BloodTest)
            .await
            .unwrap();

        assert_eq!(report.id, "mr1");
        assert_eq!(report.status, ReportStatus::Analyzed);
        assert_eq!(report.ai_analysis, Some(cardiology_analysis()));
        assert_eq!(
            delay.waits.lock().unwrap().as_slice(),
            &[(LatencyPhase::ReportAnalysis, Duration::from_millis(2000))]
        );
    }

    #[tokio::test]
    async fn submit_report_rejects_blank_title_without_writing() {
        let store = city_general();
        let delay = RecordingDelay::default();
        let p = pipeline(&store, cardiology_analysis(), &delay);

        let err = p
            .submit_report("1", "   ", ReportType::BloodTest)
            .await
            .unwrap_err();

        assert!(matches!(err, PortalError::InvalidInput { .. }));
        assert!(store.reports_snapshot().is_empty());
        assert!(delay.waits.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_report_rejects_unknown_user() {
        let store = city_general();
        let p = pipeline(&store, cardiology_analysis(), &RecordingDelay::default());

        let err = p
            .submit_report("99", "Chest X-Ray", ReportType::Xray)
            .await
            .unwrap_err();

        assert!(matches!(err, PortalError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn malformed_analysis_leaves_report_uploaded() {
        let store = city_general();
        let mut broken = cardiology_analysis();
        broken.suggested_specialty = None;
        let p = pipeline(&store, broken, &RecordingDelay::default());

        let err = p
            .submit_report("1", "Annual Blood Work", ReportType::BloodTest)
            .await
            .unwrap_err();

        assert!(matches!(err, PortalError::AnalysisContractViolated { .. }));
        let reports = store.reports_snapshot();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].status, ReportStatus::Uploaded);
        assert!(reports[0].ai_analysis.is_none());
    }

    // ── run_followup_pipeline ────────────────────────────────────────────────

    #[tokio::test]
    async fn follow_up_books_matching_hospital() {
        let store = city_general();
        let delay = RecordingDelay::default();
        let p = pipeline(&store, cardiology_analysis(), &delay);

        let run = p
            .process_report("1", "Annual Blood Work", ReportType::BloodTest)
            .await
            .unwrap();

        let FollowUpOutcome::Requested { call, request } = &run.outcome else {
            panic!("expected a request, got {:?}", run.outcome);
        };

        assert_eq!(call.status, CallStatus::Completed);
        assert_eq!(call.hospital_id.as_deref(), Some("h1"));
        assert_eq!(call.call_attempts, 1);
        assert_eq!(call.call_duration.as_deref(), Some("2:34"));
        assert_eq!(call.reason, "Follow-up for Elevated cholesterol levels");
        assert_eq!(call.transcript.len(), 8);
        assert_eq!(call.transcript[0].speaker, Speaker::AiAgent);
        assert!(call.call_start_time.is_some() && call.call_end_time.is_some());

        assert_eq!(request.hospital_id, "h1");
        assert_eq!(request.specialty, "Cardiology");
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.source, RequestSource::AiAgent);
        assert_eq!(request.call_id.as_deref(), Some(call.id.as_str()));
        assert_eq!(request.preferred_date, fixed_today() + chrono::Days::new(7));

        let phases: Vec<LatencyPhase> =
            delay.waits.lock().unwrap().iter().map(|(p, _)| *p).collect();
        assert_eq!(phases, vec![LatencyPhase::ReportAnalysis, LatencyPhase::CallConnect]);
    }

    #[tokio::test]
    async fn no_follow_up_writes_nothing() {
        let store = city_general();
        let p = pipeline(&store, routine_analysis(), &RecordingDelay::default());

        let run = p
            .process_report("1", "Routine Check", ReportType::General)
            .await
            .unwrap();

        assert_eq!(run.outcome, FollowUpOutcome::NotNeeded);
        assert!(store.calls_snapshot().is_empty());
        assert!(store.requests_snapshot().is_empty());
    }

    #[tokio::test]
    async fn no_matching_hospital_fails_call_and_stops() {
        let store = MockStore::with_hospitals(vec![("Metro Medical Center", vec!["Pediatrics"])]);
        let delay = RecordingDelay::default();
        let p = pipeline(&store, cardiology_analysis(), &delay);

        let run = p
            .process_report("1", "Annual Blood Work", ReportType::BloodTest)
            .await
            .unwrap();

        let FollowUpOutcome::NoMatchingHospital { call } = &run.outcome else {
            panic!("expected no match, got {:?}", run.outcome);
        };
        assert_eq!(call.status, CallStatus::Failed);
        assert!(call.hospital_id.is_none());
        assert_eq!(call.failure_reason.as_deref(), Some(NO_HOSPITAL_MESSAGE));
        assert!(store.requests_snapshot().is_empty());

        // Only the analysis latency; the call never dialed.
        assert_eq!(delay.waits.lock().unwrap().len(), 1);

        assert!(matches!(
            run.outcome.into_result(),
            Err(PortalError::NoMatchingHospital { specialty }) if specialty == "Cardiology"
        ));
    }

    #[tokio::test]
    async fn unrepresentable_preferred_date_writes_no_call() {
        let store = city_general();
        let p = FollowUpPipeline::new(
            Arc::new(store.clone()),
            Box::new(StaticProvider(cardiology_analysis())),
            Box::new(FixedClock::new(fixed_now(), chrono::NaiveDate::MAX)),
            Box::new(RecordingDelay::default()),
            CallSimulator::default(),
            PipelineSettings::default(),
        );

        let err = p
            .process_report("1", "Annual Blood Work", ReportType::BloodTest)
            .await
            .unwrap_err();

        assert!(matches!(err, PortalError::AnalysisContractViolated { .. }));
        assert!(store.calls_snapshot().is_empty());
        assert!(store.requests_snapshot().is_empty());
    }

    #[tokio::test]
    async fn oversized_wait_is_rejected_before_any_call() {
        let store = city_general();
        let mut analysis = cardiology_analysis();
        analysis.estimated_wait_days = u32::MAX;
        let p = pipeline(&store, analysis, &RecordingDelay::default());

        let err = p
            .process_report("1", "Annual Blood Work", ReportType::BloodTest)
            .await
            .unwrap_err();

        assert!(matches!(err, PortalError::AnalysisContractViolated { .. }));
        assert_eq!(store.reports_snapshot()[0].status, ReportStatus::Uploaded);
        assert!(store.calls_snapshot().is_empty());
        assert!(store.requests_snapshot().is_empty());
    }

    #[tokio::test]
    async fn every_ai_request_traces_to_a_completed_call() {
        let store = city_general();
        let p = pipeline(&store, cardiology_analysis(), &RecordingDelay::default());

        for title in ["Panel A", "Panel B", "Panel C"] {
            p.process_report("1", title, ReportType::BloodTest).await.unwrap();
        }

        let calls = store.calls_snapshot();
        for request in store.requests_snapshot() {
            let call_id = request.call_id.as_deref().unwrap();
            let call = calls.iter().find(|c| c.id == call_id).unwrap();
            assert_eq!(call.status, CallStatus::Completed);
            assert_eq!(call.hospital_id.as_deref(), Some(request.hospital_id.as_str()));
        }
    }

    #[tokio::test]
    async fn concurrent_runs_get_distinct_ids() {
        let store = city_general();
        let p = Arc::new(pipeline(&store, cardiology_analysis(), &RecordingDelay::default()));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let p = Arc::clone(&p);
                tokio::spawn(async move {
                    p.process_report("1", &format!("Panel {i}"), ReportType::BloodTest)
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut ids: Vec<String> = store.requests_snapshot().into_iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    // ── history, stats, decisions ────────────────────────────────────────────

    #[tokio::test]
    async fn call_history_is_newest_first_and_scoped_to_hospital() {
        let store = city_general();
        let p = pipeline(&store, cardiology_analysis(), &RecordingDelay::default());
        p.process_report("1", "First", ReportType::BloodTest).await.unwrap();
        p.process_report("1", "Second", ReportType::BloodTest).await.unwrap();

        let history = p.get_call_history("h1").unwrap();
        let ids: Vec<&str> = history.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["ac2", "ac1"]);
        assert!(p.get_call_history("h2").unwrap().is_empty());
    }

    #[tokio::test]
    async fn call_stats_count_by_outcome() {
        let store = MockStore::with_hospitals(vec![("City General Hospital", vec!["Cardiology"])]);
        let p = pipeline(&store, cardiology_analysis(), &RecordingDelay::default());
        p.process_report("1", "Panel", ReportType::BloodTest).await.unwrap();

        let mut neuro = cardiology_analysis();
        neuro.suggested_specialty = Some("Neurology".to_string());
        let report = store.reports_snapshot().remove(0);
        p.run_followup_pipeline(&report, &neuro).await.unwrap();

        let stats = p.call_stats().unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.active, 0);
        assert_eq!(stats.today, 2);
    }

    #[tokio::test]
    async fn hospital_stats_only_count_that_hospitals_calls() {
        let store = MockStore::with_hospitals(vec![
            ("City General Hospital", vec!["Cardiology"]),
            ("Metro Medical Center", vec!["Neurology"]),
        ]);
        let p = pipeline(&store, cardiology_analysis(), &RecordingDelay::default());
        p.process_report("1", "Panel A", ReportType::BloodTest).await.unwrap();
        p.process_report("1", "Panel B", ReportType::BloodTest).await.unwrap();

        let mut neuro = cardiology_analysis();
        neuro.suggested_specialty = Some("Neurology".to_string());
        let report = store.reports_snapshot().remove(0);
        p.run_followup_pipeline(&report, &neuro).await.unwrap();

        let h1 = p.call_stats_for("h1").unwrap();
        assert_eq!((h1.total, h1.completed, h1.today), (2, 2, 2));
        let h2 = p.call_stats_for("h2").unwrap();
        assert_eq!((h2.total, h2.completed, h2.today), (1, 1, 1));
        assert_eq!(p.call_stats_for("h3").unwrap(), CallStats::default());
        assert_eq!(p.call_stats().unwrap().total, 3);
    }

    #[tokio::test]
    async fn confirming_uses_configured_time() {
        let store = city_general();
        let p = pipeline(&store, cardiology_analysis(), &RecordingDelay::default());
        let run = p
            .process_report("1", "Panel", ReportType::BloodTest)
            .await
            .unwrap();
        let request_id = run.outcome.request().unwrap().id.clone();

        let decided = p
            .decide_appointment_request(&request_id, Decision::Confirmed)
            .unwrap();

        assert_eq!(decided.status, RequestStatus::Confirmed);
        let appointments = store.appointments_snapshot();
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].time, "10:00 AM");
        assert_eq!(appointments[0].hospital_name, "City General Hospital");
    }
}
