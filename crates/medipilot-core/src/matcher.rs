//! Hospital matching by exact specialty label.

use tracing::debug;

use medipilot_contracts::{error::PortalResult, hospital::Hospital};

use crate::traits::RecordStore;

/// The first hospital (in the given order) whose specialties contain
/// `specialty` exactly. No fuzzy matching, no ranking.
pub fn match_hospital<'a>(hospitals: &'a [Hospital], specialty: &str) -> Option<&'a Hospital> {
    hospitals.iter().find(|h| h.offers(specialty))
}

/// Look up a hospital for `specialty` in the store. `Ok(None)` means no
/// hospital offers it, which the caller must treat as terminal.
pub fn find_hospital_for(store: &dyn RecordStore, specialty: &str) -> PortalResult<Option<Hospital>> {
    let hospitals = store.hospitals()?;
    let found = match_hospital(&hospitals, specialty).cloned();
    debug!(
        specialty = %specialty,
        candidates = hospitals.len(),
        matched = found.as_ref().map(|h| h.id.as_str()).unwrap_or("none"),
        "hospital match"
    );
    Ok(found)
}
