//! Hospital-side decisions on appointment requests.

use tracing::info;

use medipilot_contracts::{
    appointment::{AppointmentRequest, Decision, NewAppointment, RequestPatch, RequestStatus},
    error::{PortalError, PortalResult},
};

use crate::traits::RecordStore;

/// Confirm or reject a pending request.
///
/// The status change is a compare-and-swap on `Pending`, so a request that
/// has already been decided yields `InvalidTransition`. Confirming also
/// books an `Appointment` on the preferred date at `appointment_time`.
pub fn decide_appointment_request(
    store: &dyn RecordStore,
    request_id: &str,
    decision: Decision,
    appointment_time: &str,
) -> PortalResult<AppointmentRequest> {
    let request = store
        .find_request(request_id)?
        .ok_or_else(|| PortalError::not_found("appointment request", request_id))?;

    // Resolve the hospital before touching the request so a dangling
    // reference leaves it pending.
    let hospital = match decision {
        Decision::Confirmed => Some(
            store
                .find_hospital(&request.hospital_id)?
                .ok_or_else(|| PortalError::not_found("hospital", &request.hospital_id))?,
        ),
        Decision::Rejected => None,
    };

    let updated = store.update_request_if(
        request_id,
        RequestStatus::Pending,
        RequestPatch {
            status: Some(decision.into()),
        },
    )?;

    if let Some(hospital) = hospital {
        let appointment = store.create_appointment(NewAppointment {
            user_id: updated.user_id.clone(),
            hospital_id: hospital.id.clone(),
            hospital_name: hospital.name.clone(),
            specialty: updated.specialty.clone(),
            date: updated.preferred_date,
            time: appointment_time.to_string(),
        })?;
        info!(
            request_id = %updated.id,
            appointment_id = %appointment.id,
            date = %appointment.date,
            "appointment request confirmed"
        );
    } else {
        info!(request_id = %updated.id, "appointment request rejected");
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use medipilot_contracts::{
        appointment::{NewAppointmentRequest, RequestSource},
        report::Urgency,
    };

    use crate::test_support::{fixed_today, MockStore};

    use super::*;

    fn store_with_pending(hospital_id: &str) -> (MockStore, String) {
        let store = MockStore::with_hospitals(vec![("City General Hospital", vec!["Cardiology"])]);
        let request = store
            .create_request(NewAppointmentRequest {
                user_id: "1".to_string(),
                hospital_id: hospital_id.to_string(),
                specialty: "Cardiology".to_string(),
                reason: "Follow-up for Elevated cholesterol levels".to_string(),
                preferred_date: fixed_today(),
                source: RequestSource::AiAgent,
                call_id: Some("ac1".to_string()),
                urgency: Some(Urgency::Medium),
            })
            .unwrap();
        (store, request.id)
    }

    #[test]
    fn confirm_books_appointment_on_preferred_date() {
        let (store, id) = store_with_pending("h1");

        let decided = decide_appointment_request(&store, &id, Decision::Confirmed, "10:00 AM").unwrap();

        assert_eq!(decided.status, RequestStatus::Confirmed);
        let appointments = store.appointments_snapshot();
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].date, fixed_today());
        assert_eq!(appointments[0].specialty, "Cardiology");
        assert_eq!(appointments[0].user_id, "1");
    }

    #[test]
    fn reject_creates_no_appointment() {
        let (store, id) = store_with_pending("h1");

        let decided = decide_appointment_request(&store, &id, Decision::Rejected, "10:00 AM").unwrap();

        assert_eq!(decided.status, RequestStatus::Rejected);
        assert!(store.appointments_snapshot().is_empty());
    }

    #[test]
    fn second_decision_is_an_invalid_transition() {
        let (store, id) = store_with_pending("h1");
        decide_appointment_request(&store, &id, Decision::Rejected, "10:00 AM").unwrap();

        let err = decide_appointment_request(&store, &id, Decision::Confirmed, "10:00 AM").unwrap_err();

        assert!(matches!(err, PortalError::InvalidTransition { .. }));
        assert!(store.appointments_snapshot().is_empty());
    }

    #[test]
    fn unknown_request_is_not_found() {
        let (store, _) = store_with_pending("h1");
        let err = decide_appointment_request(&store, "ar99", Decision::Confirmed, "10:00 AM").unwrap_err();
        assert!(matches!(err, PortalError::NotFound { .. }));
    }

    #[test]
    fn dangling_hospital_leaves_request_pending() {
        let (store, id) = store_with_pending("h9");

        let err = decide_appointment_request(&store, &id, Decision::Confirmed, "10:00 AM").unwrap_err();

        assert!(matches!(err, PortalError::NotFound { .. }));
        assert_eq!(store.requests_snapshot()[0].status, RequestStatus::Pending);
    }
}
