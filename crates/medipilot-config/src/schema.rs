//! Configuration schema.
//!
//! Every section and every field has a default, so an empty document is a
//! valid configuration that reproduces the stock portal behavior.
//!
//! Example:
//! ```toml
//! [latency]
//! analysis_ms = 500
//! call_connect_ms = 750
//!
//! [call]
//! agent_name = "MediPilot AI Assistant"
//!
//! [[analysis.templates]]
//! findings = ["Irregular heartbeat detected"]
//! severity = "high"
//! recommendations = ["See a cardiologist this week"]
//! follow_up_needed = true
//! urgency = "high"
//! suggested_specialty = "Cardiology"
//! estimated_wait_days = 2
//! ```

use serde::{Deserialize, Serialize};

use medipilot_contracts::report::AnalysisResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortalConfig {
    pub latency: LatencyConfig,
    pub call: CallConfig,
    pub appointments: AppointmentConfig,
    pub store: StoreConfig,
    pub analysis: AnalysisConfig,
}

/// Simulated latencies, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatencyConfig {
    /// `false` skips every suspension regardless of the values below.
    pub simulate: bool,
    pub analysis_ms: u64,
    pub call_connect_ms: u64,
    pub meal_plan_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            simulate: true,
            analysis_ms: 2000,
            call_connect_ms: 3000,
            meal_plan_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CallConfig {
    /// How the agent introduces itself on the line.
    pub agent_name: String,
    /// Gap between consecutive transcript timestamps.
    pub turn_step_secs: i64,
    /// Duration string written on completed calls.
    pub reported_duration: String,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            agent_name: "MediPilot AI Assistant".to_string(),
            turn_step_secs: 2,
            reported_duration: "2:34".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppointmentConfig {
    /// Time slot given to appointments created by a confirmation.
    pub confirmed_time: String,
}

impl Default for AppointmentConfig {
    fn default() -> Self {
        Self {
            confirmed_time: "10:00 AM".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub seed_demo_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed_demo_data: true }
    }
}

/// Replacement analysis templates. Empty means the built-in set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub templates: Vec<AnalysisResult>,
}
