//! # medipilot-contracts
//!
//! Shared record types, status enums, and errors for the MediPilot portal.
//!
//! Every crate in the workspace imports from here. No business logic lives in
//! this crate, only data definitions, the storage traits the record store is
//! written against, and the error type.

pub mod appointment;
pub mod call;
pub mod care;
pub mod error;
pub mod hospital;
pub mod insurance;
pub mod record;
pub mod report;
pub mod user;
