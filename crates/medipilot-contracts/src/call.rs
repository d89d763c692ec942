//! Simulated automated calls placed to hospitals on a patient's behalf.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    record::{merge, merge_some, Draft, Patch, Record},
    report::{AnalysisResult, Urgency},
};

/// Identifier for a single pipeline run, attached to every log line it emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub uuid::Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle of a call: `Initiating → Calling → Completed`, or
/// `Initiating → Failed` when no hospital matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    Initiating,
    Calling,
    Completed,
    Failed,
}

impl CallStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, CallStatus::Initiating | CallStatus::Calling)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    #[serde(rename = "AI Agent")]
    AiAgent,
    #[serde(rename = "Hospital")]
    Hospital,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Speaker::AiAgent => "AI Agent",
            Speaker::Hospital => "Hospital",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub timestamp: DateTime<Utc>,
    pub speaker: Speaker,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiCall {
    pub id: String,
    pub user_id: String,
    pub report_id: String,
    /// Unset until a hospital has been matched; stays unset on failed calls.
    pub hospital_id: Option<String>,
    pub patient_name: String,
    pub patient_phone: String,
    pub specialty: String,
    pub urgency: Urgency,
    pub reason: String,
    pub analysis: AnalysisResult,
    pub status: CallStatus,
    pub call_attempts: u32,
    pub transcript: Vec<TranscriptTurn>,
    pub call_start_time: Option<DateTime<Utc>>,
    pub call_end_time: Option<DateTime<Utc>>,
    /// Reported duration, e.g. "2:34".
    pub call_duration: Option<String>,
    /// User-visible message for a failed call.
    pub failure_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for AiCall {
    const PREFIX: &'static str = "ac";
    const COLLECTION: &'static str = "ai call";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewAiCall {
    pub user_id: String,
    pub report_id: String,
    pub patient_name: String,
    pub patient_phone: String,
    pub specialty: String,
    pub urgency: Urgency,
    pub reason: String,
    pub analysis: AnalysisResult,
}

impl Draft for NewAiCall {
    type Output = AiCall;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> AiCall {
        AiCall {
            id,
            user_id: self.user_id,
            report_id: self.report_id,
            hospital_id: None,
            patient_name: self.patient_name,
            patient_phone: self.patient_phone,
            specialty: self.specialty,
            urgency: self.urgency,
            reason: self.reason,
            analysis: self.analysis,
            status: CallStatus::Initiating,
            call_attempts: 0,
            transcript: Vec::new(),
            call_start_time: None,
            call_end_time: None,
            call_duration: None,
            failure_reason: None,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallPatch {
    pub hospital_id: Option<String>,
    pub status: Option<CallStatus>,
    pub call_attempts: Option<u32>,
    pub transcript: Option<Vec<TranscriptTurn>>,
    pub call_start_time: Option<DateTime<Utc>>,
    pub call_end_time: Option<DateTime<Utc>>,
    pub call_duration: Option<String>,
    pub failure_reason: Option<String>,
}

impl Patch<AiCall> for CallPatch {
    fn apply(self, call: &mut AiCall) {
        merge_some(&mut call.hospital_id, self.hospital_id);
        merge(&mut call.status, self.status);
        merge(&mut call.call_attempts, self.call_attempts);
        merge(&mut call.transcript, self.transcript);
        merge_some(&mut call.call_start_time, self.call_start_time);
        merge_some(&mut call.call_end_time, self.call_end_time);
        merge_some(&mut call.call_duration, self.call_duration);
        merge_some(&mut call.failure_reason, self.failure_reason);
    }
}

/// Aggregate counts over a set of calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallStats {
    pub total: usize,
    pub completed: usize,
    /// Calls still `Initiating` or `Calling`.
    pub active: usize,
    pub failed: usize,
    /// Calls created on `today` (UTC calendar date).
    pub today: usize,
}

impl CallStats {
    pub fn tally<'a>(calls: impl IntoIterator<Item = &'a AiCall>, today: NaiveDate) -> Self {
        calls.into_iter().fold(Self::default(), |mut stats, call| {
            stats.total += 1;
            if call.created_at.date_naive() == today {
                stats.today += 1;
            }
            match call.status {
                CallStatus::Completed => stats.completed += 1,
                CallStatus::Failed => stats.failed += 1,
                CallStatus::Initiating | CallStatus::Calling => stats.active += 1,
            }
            stats
        })
    }
}
