//! Demo scenarios.
//!
//! Each scenario builds its own seeded `Portal` from the given configuration,
//! pins the analysis so the outcome is predictable, and prints what each
//! dashboard would show. Latencies are real unless the configuration turns
//! them off.

use std::sync::Arc;

use medipilot_config::PortalConfig;
use medipilot_contracts::{error::PortalResult, report::AnalysisResult};
use medipilot_core::SystemClock;

use crate::{analysis::FixedAnalysisProvider, portal::Portal};

pub mod claims_coverage;
pub mod hospital_review;
pub mod no_match;
pub mod patient_care;
pub mod report_followup;

/// A seeded portal whose every report analyzes to `analysis`.
pub(crate) fn scenario_portal(config: &PortalConfig, analysis: AnalysisResult) -> PortalResult<Portal> {
    Portal::new(
        config,
        Box::new(FixedAnalysisProvider::new(analysis)),
        Arc::new(SystemClock),
        Portal::delay_for(config),
    )
}

/// The patient every scenario acts as.
pub(crate) const DEMO_PATIENT: &str = "1";

/// The hospital the demo hospital-staff user works at.
pub(crate) const DEMO_HOSPITAL: &str = "h1";
