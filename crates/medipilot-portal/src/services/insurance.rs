//! Insurance dashboard operations: claims review and coverage lookup.

use tracing::info;

use medipilot_contracts::{
    error::{PortalError, PortalResult},
    insurance::{ClaimPatch, ClaimStatus, CoverageStatus, InsuranceClaim, InsurancePolicy, NewInsuranceClaim},
};
use medipilot_core::traits::RecordStore;

use crate::portal::Portal;

/// Claims split for review.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimQueue {
    pub pending: Vec<InsuranceClaim>,
    pub processed: Vec<InsuranceClaim>,
}

/// A policy as seen by the insurer on lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageView {
    pub policy: InsurancePolicy,
    /// `None` when the holder id no longer resolves to a user.
    pub holder_name: Option<String>,
    /// `None` when the provider id does not resolve.
    pub provider_name: Option<String>,
    /// Computed against today's date, not the stored status.
    pub coverage: CoverageStatus,
}

pub struct InsuranceService<'a> {
    portal: &'a Portal,
}

impl<'a> InsuranceService<'a> {
    pub(crate) fn new(portal: &'a Portal) -> Self {
        Self { portal }
    }

    pub fn submit_claim(&self, draft: NewInsuranceClaim) -> PortalResult<InsuranceClaim> {
        if draft.policy_number.trim().is_empty() {
            return Err(PortalError::invalid("policy number is required"));
        }
        if draft.patient_name.trim().is_empty() {
            return Err(PortalError::invalid("patient name is required"));
        }
        if !draft.amount.is_finite() || draft.amount <= 0.0 {
            return Err(PortalError::invalid("claim amount must be positive"));
        }
        let claim = self.portal.store().create_claim(draft)?;
        info!(claim_id = %claim.id, amount = claim.amount, "claim submitted");
        Ok(claim)
    }

    /// Approve or reject a pending claim.
    pub fn decide_claim(&self, claim_id: &str, decision: ClaimStatus) -> PortalResult<InsuranceClaim> {
        if decision == ClaimStatus::Pending {
            return Err(PortalError::invalid("a claim decision must approve or reject"));
        }
        let claim = self.portal.store().update_claim_if(
            claim_id,
            ClaimStatus::Pending,
            ClaimPatch {
                status: Some(decision),
            },
        )?;
        info!(claim_id = %claim.id, status = ?claim.status, "claim decided");
        Ok(claim)
    }

    pub fn claim_queue(&self) -> PortalResult<ClaimQueue> {
        let (pending, processed) = self
            .portal
            .store()
            .claims()?
            .into_iter()
            .partition(|c| c.status == ClaimStatus::Pending);
        Ok(ClaimQueue { pending, processed })
    }

    /// Find policies by number fragment or holder id.
    pub fn lookup_coverage(&self, term: &str) -> PortalResult<Vec<CoverageView>> {
        let today = self.portal.clock().today();
        self.portal
            .store()
            .search_policies(term)?
            .into_iter()
            .map(|policy| {
                let store = self.portal.store();
                let holder_name = store.find_user(&policy.user_id)?.map(|u| u.name);
                let provider_name = store.find_provider(&policy.provider_id)?.map(|p| p.name);
                Ok(CoverageView {
                    coverage: policy.coverage_on(today),
                    holder_name,
                    provider_name,
                    policy,
                })
            })
            .collect()
    }
}
