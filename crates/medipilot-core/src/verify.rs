//! Contract check for analysis results.
//!
//! Providers are pluggable and untrusted, so every result is checked before
//! the pipeline persists it or acts on it. All failures are collected in one
//! pass, the way operators want to see them.

use tracing::warn;

use medipilot_contracts::{
    error::{PortalError, PortalResult},
    report::AnalysisResult,
};

/// Longest follow-up wait an analysis may ask for, in days.
pub const MAX_WAIT_DAYS: u32 = 365;

/// A single broken rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFailure {
    pub rule_id: &'static str,
    pub message: String,
}

/// Every way `result` breaks the analysis contract. Empty means it passes.
pub fn contract_failures(result: &AnalysisResult) -> Vec<ContractFailure> {
    let mut failures = Vec::new();

    if result.findings.is_empty() {
        failures.push(ContractFailure {
            rule_id: "findings-present",
            message: "analysis must report at least one finding".to_string(),
        });
    }

    if result.findings.iter().any(|f| f.trim().is_empty()) {
        failures.push(ContractFailure {
            rule_id: "findings-non-blank",
            message: "findings must not be blank".to_string(),
        });
    }

    let specialty_set = result
        .suggested_specialty
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());
    if result.follow_up_needed && !specialty_set {
        failures.push(ContractFailure {
            rule_id: "follow-up-specialty",
            message: "follow-up needed but no specialty suggested".to_string(),
        });
    }

    if result.estimated_wait_days > MAX_WAIT_DAYS {
        failures.push(ContractFailure {
            rule_id: "wait-days-range",
            message: format!(
                "estimated wait of {} days exceeds {MAX_WAIT_DAYS}",
                result.estimated_wait_days
            ),
        });
    }

    failures
}

/// Fail with `AnalysisContractViolated` if any rule is broken.
pub fn check_analysis(result: &AnalysisResult) -> PortalResult<()> {
    let failures = contract_failures(result);
    if failures.is_empty() {
        return Ok(());
    }

    let reason = failures
        .iter()
        .map(|f| format!("[{}] {}", f.rule_id, f.message))
        .collect::<Vec<_>>()
        .join("; ");
    warn!(failures = %reason, "analysis result rejected");
    Err(PortalError::AnalysisContractViolated { reason })
}
