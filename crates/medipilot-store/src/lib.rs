//! # medipilot-store
//!
//! The in-memory record store for the MediPilot portal.
//!
//! `InMemoryStore` implements `medipilot_core::traits::RecordStore` for the
//! pipeline and adds the per-user and insurance queries the portal services
//! use. `seed_demo_data` loads the demo users, hospitals and policy.

mod collection;
pub mod memory;
pub mod seed;

pub use memory::{InMemoryStore, StoreCounts};
pub use seed::seed_demo_data;
