//! Hospital dashboard operations: reviewing requests and monitoring the
//! automated calls placed to the hospital.

use medipilot_contracts::{
    appointment::{AppointmentRequest, Decision, RequestStatus},
    call::{AiCall, CallStats, CallStatus},
    error::PortalResult,
};

use crate::portal::Portal;

/// A hospital's requests split for review.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestQueue {
    pub pending: Vec<AppointmentRequest>,
    /// Confirmed or rejected.
    pub processed: Vec<AppointmentRequest>,
}

pub struct HospitalService<'a> {
    portal: &'a Portal,
}

impl<'a> HospitalService<'a> {
    pub(crate) fn new(portal: &'a Portal) -> Self {
        Self { portal }
    }

    pub fn request_queue(&self, hospital_id: &str) -> PortalResult<RequestQueue> {
        let (pending, processed) = self
            .portal
            .store()
            .requests_for_hospital(hospital_id)?
            .into_iter()
            .partition(|r| r.status == RequestStatus::Pending);
        Ok(RequestQueue { pending, processed })
    }

    /// Confirm or reject a pending request; confirming books the appointment.
    pub fn decide(&self, request_id: &str, decision: Decision) -> PortalResult<AppointmentRequest> {
        self.portal
            .pipeline()
            .decide_appointment_request(request_id, decision)
    }

    /// Calls placed to `hospital_id`, newest first, optionally narrowed to
    /// one status.
    pub fn call_history(
        &self,
        hospital_id: &str,
        status: Option<CallStatus>,
    ) -> PortalResult<Vec<AiCall>> {
        let mut calls = self.portal.pipeline().get_call_history(hospital_id)?;
        if let Some(status) = status {
            calls.retain(|c| c.status == status);
        }
        Ok(calls)
    }

    /// The call monitor counters for one hospital.
    pub fn call_stats(&self, hospital_id: &str) -> PortalResult<CallStats> {
        self.portal.pipeline().call_stats_for(hospital_id)
    }
}
