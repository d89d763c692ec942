//! # medipilot-config
//!
//! TOML configuration for the MediPilot portal: simulated latencies, the
//! call agent's identity, booking constants, seed data and optional analysis
//! template overrides.
//!
//! ```rust,ignore
//! use medipilot_config::PortalConfig;
//!
//! let config = PortalConfig::from_file(Path::new("medipilot.toml"))?;
//! let settings = config.pipeline_settings();
//! ```

pub mod loader;
pub mod schema;

pub use schema::{AnalysisConfig, AppointmentConfig, CallConfig, LatencyConfig, PortalConfig, StoreConfig};
