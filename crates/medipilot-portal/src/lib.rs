//! # medipilot-portal
//!
//! The MediPilot portal on top of the follow-up pipeline.
//!
//! - `analysis`  — canned analysis templates and the random/fixed providers
//! - `meal_plan` — the stock meal-plan generator
//! - `portal`    — `Portal`, which wires store, pipeline and services
//! - `services`  — patient, hospital and insurance dashboard operations
//! - `scenarios` — end-to-end demo runs printed by the `demo` binary
//!
//! All data is fictional. No external systems are contacted.

pub mod analysis;
pub mod meal_plan;
pub mod portal;
pub mod scenarios;
pub mod services;

pub use portal::Portal;
