//! Role-scoped operations, one service per dashboard.
//!
//! Services are cheap borrowed views over a `Portal`; create one per use.

pub mod hospital;
pub mod insurance;
pub mod patient;

pub use hospital::{HospitalService, RequestQueue};
pub use insurance::{ClaimQueue, CoverageView, InsuranceService};
pub use patient::{ManualRequest, MedicationList, PatientService};
