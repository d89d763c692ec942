//! Loading and validating `PortalConfig`, and turning it into the settings
//! the pipeline is built from.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use medipilot_contracts::error::{PortalError, PortalResult};
use medipilot_core::{pipeline::PipelineSettings, simulator::CallSimulator, verify::check_analysis};

use crate::schema::PortalConfig;

impl PortalConfig {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Returns `PortalError::ConfigError` if the TOML is malformed, has
    /// unknown keys, or carries values outside their valid range.
    pub fn from_toml_str(s: &str) -> PortalResult<Self> {
        let config: PortalConfig = toml::from_str(s).map_err(|e| PortalError::ConfigError {
            reason: format!("failed to parse portal TOML: {}", e),
        })?;
        config.validate()?;
        debug!(
            analysis_ms = config.latency.analysis_ms,
            call_connect_ms = config.latency.call_connect_ms,
            templates = config.analysis.templates.len(),
            "portal configuration loaded"
        );
        Ok(config)
    }

    /// Read the file at `path` and parse it as portal configuration.
    pub fn from_file(path: &Path) -> PortalResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| PortalError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check every cross-field constraint the type system does not enforce.
    pub fn validate(&self) -> PortalResult<()> {
        if self.call.agent_name.trim().is_empty() {
            return Err(config_error("call.agent_name must not be blank"));
        }
        if !(0..=3600).contains(&self.call.turn_step_secs) {
            return Err(config_error("call.turn_step_secs must be between 0 and 3600"));
        }
        if self.appointments.confirmed_time.trim().is_empty() {
            return Err(config_error("appointments.confirmed_time must not be blank"));
        }
        for (i, template) in self.analysis.templates.iter().enumerate() {
            check_analysis(template).map_err(|e| {
                warn!(template = i, error = %e, "analysis template rejected");
                config_error(format!("analysis.templates[{i}]: {e}"))
            })?;
        }
        Ok(())
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            analysis_latency: Duration::from_millis(self.latency.analysis_ms),
            call_connect_latency: Duration::from_millis(self.latency.call_connect_ms),
            appointment_time: self.appointments.confirmed_time.clone(),
        }
    }

    pub fn meal_plan_latency(&self) -> Duration {
        Duration::from_millis(self.latency.meal_plan_ms)
    }

    pub fn call_simulator(&self) -> CallSimulator {
        CallSimulator::new(
            self.call.agent_name.clone(),
            chrono::Duration::seconds(self.call.turn_step_secs),
            self.call.reported_duration.clone(),
        )
    }
}

fn config_error(reason: impl Into<String>) -> PortalError {
    PortalError::ConfigError {
        reason: reason.into(),
    }
}
