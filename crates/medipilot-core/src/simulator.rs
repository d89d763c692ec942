//! Call transcript generation.
//!
//! The simulator performs no I/O. Given the same script it produces the same
//! turns in the same order; only the timestamps depend on the start time,
//! which advances by a fixed step per turn.

use chrono::{DateTime, Duration, Utc};

use medipilot_contracts::{
    call::{AiCall, Speaker, TranscriptTurn},
    hospital::Hospital,
    report::Urgency,
};

/// Everything a transcript is interpolated from.
#[derive(Debug, Clone, PartialEq)]
pub struct CallScript {
    pub patient_name: String,
    pub patient_phone: String,
    pub specialty: String,
    pub reason: String,
    pub urgency: Urgency,
    pub estimated_wait_days: u32,
    pub hospital_name: String,
}

impl CallScript {
    pub fn for_call(call: &AiCall, hospital: &Hospital) -> Self {
        Self {
            patient_name: call.patient_name.clone(),
            patient_phone: call.patient_phone.clone(),
            specialty: call.specialty.clone(),
            reason: call.reason.clone(),
            urgency: call.urgency,
            estimated_wait_days: call.analysis.estimated_wait_days,
            hospital_name: hospital.name.clone(),
        }
    }
}

/// The generated conversation plus its reported duration.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedCall {
    pub transcript: Vec<TranscriptTurn>,
    pub duration: String,
}

#[derive(Debug, Clone)]
pub struct CallSimulator {
    agent_name: String,
    turn_step: Duration,
    reported_duration: String,
}

impl CallSimulator {
    pub fn new(
        agent_name: impl Into<String>,
        turn_step: Duration,
        reported_duration: impl Into<String>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            turn_step,
            reported_duration: reported_duration.into(),
        }
    }

    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    pub fn simulate(&self, script: &CallScript, started_at: DateTime<Utc>) -> SimulatedCall {
        let lines = [
            (
                Speaker::AiAgent,
                format!(
                    "Hello, this is {} calling on behalf of {}.",
                    self.agent_name, script.patient_name
                ),
            ),
            (
                Speaker::Hospital,
                format!("Hello, this is {}. How can I help you?", script.hospital_name),
            ),
            (
                Speaker::AiAgent,
                format!(
                    "I'm calling to schedule a {} appointment for patient {}. \
                     Recent medical analysis indicates {}.",
                    script.specialty, script.patient_name, script.reason
                ),
            ),
            (
                Speaker::Hospital,
                "I understand. What is the urgency level?".to_string(),
            ),
            (
                Speaker::AiAgent,
                format!(
                    "The urgency is {}. We recommend scheduling within {} days.",
                    script.urgency, script.estimated_wait_days
                ),
            ),
            (
                Speaker::Hospital,
                "Thank you. I've received the appointment request. \
                 Our team will review and confirm the appointment shortly."
                    .to_string(),
            ),
            (
                Speaker::AiAgent,
                format!(
                    "Perfect. Patient contact: {}. Thank you for your assistance.",
                    script.patient_phone
                ),
            ),
            (Speaker::Hospital, "You're welcome. Have a great day!".to_string()),
        ];

        let transcript = lines
            .into_iter()
            .zip(0i32..)
            .map(|((speaker, message), k)| TranscriptTurn {
                timestamp: started_at + self.turn_step * k,
                speaker,
                message,
            })
            .collect();

        SimulatedCall {
            transcript,
            duration: self.reported_duration.clone(),
        }
    }
}

impl Default for CallSimulator {
    fn default() -> Self {
        Self::new("MediPilot AI Assistant", Duration::seconds(2), "2:34")
    }
}
