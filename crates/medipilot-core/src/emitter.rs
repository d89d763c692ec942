//! Turning a completed call into a pending appointment request.

use chrono::{Days, NaiveDate};

use medipilot_contracts::{
    appointment::{NewAppointmentRequest, RequestSource},
    call::{AiCall, CallStatus},
    error::{PortalError, PortalResult},
};

/// `today` plus `wait_days` calendar days. No business-day skipping.
///
/// A wait that runs past the end of the calendar is the analysis' fault, so
/// it surfaces as `AnalysisContractViolated`.
pub fn preferred_date(today: NaiveDate, wait_days: u32) -> PortalResult<NaiveDate> {
    today
        .checked_add_days(Days::new(u64::from(wait_days)))
        .ok_or_else(|| PortalError::AnalysisContractViolated {
            reason: format!("[wait-days-range] {wait_days} days from {today} is out of range"),
        })
}

/// Build the request draft for a completed call.
///
/// Only calls that reached `Completed` against a matched hospital may emit;
/// anything else is an `InvalidTransition`. `preferred_date` is computed by
/// the caller before the call is completed.
pub fn emit(call: &AiCall, preferred_date: NaiveDate) -> PortalResult<NewAppointmentRequest> {
    if call.status != CallStatus::Completed {
        return Err(PortalError::InvalidTransition {
            reason: format!(
                "call '{}' is {:?}; only completed calls emit appointment requests",
                call.id, call.status
            ),
        });
    }
    let hospital_id = call.hospital_id.clone().ok_or_else(|| PortalError::InvalidTransition {
        reason: format!("call '{}' completed without a matched hospital", call.id),
    })?;

    Ok(NewAppointmentRequest {
        user_id: call.user_id.clone(),
        hospital_id,
        specialty: call.specialty.clone(),
        reason: call.reason.clone(),
        preferred_date,
        source: RequestSource::AiAgent,
        call_id: Some(call.id.clone()),
        urgency: Some(call.urgency),
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use medipilot_contracts::{
        call::NewAiCall,
        record::Draft,
        report::{AnalysisResult, Severity, Urgency},
    };

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn completed_call(wait_days: u32) -> AiCall {
        let mut call = NewAiCall {
            user_id: "1".to_string(),
            report_id: "mr1".to_string(),
            patient_name: "John Doe".to_string(),
            patient_phone: "+1234567890".to_string(),
            specialty: "Cardiology".to_string(),
            urgency: Urgency::Medium,
            reason: "Follow-up for Blood pressure elevated at 145/95".to_string(),
            analysis: AnalysisResult {
                findings: vec!["Blood pressure elevated at 145/95".to_string()],
                severity: Severity::Medium,
                recommendations: vec![],
                follow_up_needed: true,
                urgency: Urgency::Medium,
                suggested_specialty: Some("Cardiology".to_string()),
                estimated_wait_days: wait_days,
            },
        }
        .into_record("ac1".to_string(), Utc::now());
        call.status = CallStatus::Completed;
        call.hospital_id = Some("h1".to_string());
        call
    }

    #[test]
    fn preferred_date_is_today_plus_wait_days() {
        for days in [0u32, 5, 7, 14] {
            let date = preferred_date(today(), days).unwrap();
            let draft = emit(&completed_call(days), date).unwrap();
            assert_eq!(
                draft.preferred_date,
                today() + chrono::Duration::days(i64::from(days)),
                "wait of {days} days"
            );
        }
    }

    #[test]
    fn preferred_date_crosses_month_and_year_boundaries() {
        let dec = NaiveDate::from_ymd_opt(2026, 12, 28).unwrap();
        assert_eq!(
            preferred_date(dec, 7).unwrap(),
            NaiveDate::from_ymd_opt(2027, 1, 4).unwrap()
        );
    }

    #[test]
    fn date_past_the_calendar_blames_the_analysis() {
        assert!(matches!(
            preferred_date(NaiveDate::MAX, 1),
            Err(PortalError::AnalysisContractViolated { .. })
        ));
    }

    #[test]
    fn emitted_request_references_the_call() {
        let draft = emit(&completed_call(7), today()).unwrap();
        assert_eq!(draft.source, RequestSource::AiAgent);
        assert_eq!(draft.call_id.as_deref(), Some("ac1"));
        assert_eq!(draft.hospital_id, "h1");
        assert_eq!(draft.specialty, "Cardiology");
        assert_eq!(draft.urgency, Some(Urgency::Medium));
    }

    #[test]
    fn calls_that_did_not_complete_cannot_emit() {
        for status in [CallStatus::Initiating, CallStatus::Calling, CallStatus::Failed] {
            let mut call = completed_call(7);
            call.status = status;
            assert!(matches!(
                emit(&call, today()),
                Err(PortalError::InvalidTransition { .. })
            ));
        }
    }
}
