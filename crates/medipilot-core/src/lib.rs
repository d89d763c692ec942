//! # medipilot-core
//!
//! The report-to-appointment follow-up pipeline for the MediPilot portal.
//!
//! This crate provides:
//! - The capability traits (`AnalysisProvider`, `RecordStore`, `Clock`, `Delay`)
//! - Hospital matching, call simulation and appointment-request emission
//! - The `FollowUpPipeline` that runs them in order for each analyzed report
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medipilot_core::{FollowUpPipeline, PipelineSettings, traits::RecordStore};
//! ```

pub mod emitter;
pub mod matcher;
pub mod pipeline;
pub mod requests;
pub mod runtime;
pub mod simulator;
pub mod traits;
pub mod verify;

#[cfg(test)]
mod test_support;

pub use pipeline::{FollowUpOutcome, FollowUpPipeline, PipelineSettings, ReportRun, NO_HOSPITAL_MESSAGE};
pub use runtime::{FixedClock, InstantDelay, SystemClock, TokioDelay};
pub use simulator::CallSimulator;
