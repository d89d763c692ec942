//! Medical reports and the analysis attached to them.
//!
//! `AnalysisResult` is the fixed-shape output of an analysis provider. It is
//! embedded in the report and copied into any call the report triggers; once
//! produced it is never modified.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{merge, merge_some, Draft, Patch, Record};

/// The declared kind of an uploaded report.
///
/// Unknown kinds are kept verbatim in `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportType {
    BloodTest,
    Xray,
    Mri,
    CtScan,
    General,
    Other(String),
}

impl ReportType {
    pub fn as_str(&self) -> &str {
        match self {
            ReportType::BloodTest => "blood_test",
            ReportType::Xray => "xray",
            ReportType::Mri => "mri",
            ReportType::CtScan => "ct_scan",
            ReportType::General => "general",
            ReportType::Other(s) => s,
        }
    }
}

impl From<&str> for ReportType {
    fn from(value: &str) -> Self {
        match value {
            "blood_test" => ReportType::BloodTest,
            "xray" => ReportType::Xray,
            "mri" => ReportType::Mri,
            "ct_scan" => ReportType::CtScan,
            "general" => ReportType::General,
            other => ReportType::Other(other.to_string()),
        }
    }
}

impl From<String> for ReportType {
    fn from(value: String) -> Self {
        ReportType::from(value.as_str())
    }
}

impl From<ReportType> for String {
    fn from(value: ReportType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Uploaded,
    Analyzed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    None,
    Low,
    Medium,
    High,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Urgency::None => "none",
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        })
    }
}

/// What an analysis provider gets to look at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub title: String,
    pub report_type: ReportType,
}

/// The fixed-shape result of analyzing one report.
///
/// Contract: `findings` is non-empty, and `follow_up_needed` implies
/// `suggested_specialty` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub findings: Vec<String>,
    pub severity: Severity,
    pub recommendations: Vec<String>,
    pub follow_up_needed: bool,
    pub urgency: Urgency,
    pub suggested_specialty: Option<String>,
    pub estimated_wait_days: u32,
}

impl AnalysisResult {
    /// The specialty to book, only when a follow-up is actually needed.
    pub fn follow_up_specialty(&self) -> Option<&str> {
        if self.follow_up_needed {
            self.suggested_specialty.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalReport {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub report_type: ReportType,
    pub file_name: String,
    pub ai_analysis: Option<AnalysisResult>,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for MedicalReport {
    const PREFIX: &'static str = "mr";
    const COLLECTION: &'static str = "medical report";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewMedicalReport {
    pub user_id: String,
    pub title: String,
    pub report_type: ReportType,
    pub file_name: String,
}

impl Draft for NewMedicalReport {
    type Output = MedicalReport;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> MedicalReport {
        MedicalReport {
            id,
            user_id: self.user_id,
            title: self.title,
            report_type: self.report_type,
            file_name: self.file_name,
            ai_analysis: None,
            status: ReportStatus::Uploaded,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportPatch {
    pub ai_analysis: Option<AnalysisResult>,
    pub status: Option<ReportStatus>,
}

impl Patch<MedicalReport> for ReportPatch {
    fn apply(self, report: &mut MedicalReport) {
        merge_some(&mut report.ai_analysis, self.ai_analysis);
        merge(&mut report.status, self.status);
    }
}
