//! Scenario 4: Claims and Coverage
//!
//! The insurer files a claim, approves it, shows that a zero-amount claim is
//! refused, and looks up the demo policy by number.

use chrono::NaiveDate;

use medipilot_config::PortalConfig;
use medipilot_contracts::{
    error::{PortalError, PortalResult},
    insurance::{ClaimStatus, NewInsuranceClaim},
};

use crate::analysis::all_clear_template;

use super::scenario_portal;

fn claim(amount: f64) -> PortalResult<NewInsuranceClaim> {
    Ok(NewInsuranceClaim {
        policy_number: "HC-2024-001".to_string(),
        patient_name: "John Doe".to_string(),
        procedure: "Cardiology consultation".to_string(),
        amount,
        hospital_name: "City General Hospital".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 14)
            .ok_or_else(|| PortalError::invalid("bad claim date"))?,
    })
}

pub async fn run_scenario(config: &PortalConfig) -> PortalResult<()> {
    println!("=== Scenario 4: Claims and Coverage ===");
    println!();

    let portal = scenario_portal(config, all_clear_template())?;
    let insurance = portal.insurance();

    let filed = insurance.submit_claim(claim(350.0)?)?;
    println!("  Claim {} filed:         ${:.2} ({:?})", filed.id, filed.amount, filed.status);
    let approved = insurance.decide_claim(&filed.id, ClaimStatus::Approved)?;
    println!("  Claim {} decided:       {:?}", approved.id, approved.status);

    match insurance.submit_claim(claim(0.0)?) {
        Ok(c) => println!("  Zero-amount claim {} accepted (unexpected)", c.id),
        Err(e) => println!("  Zero-amount claim:      refused ({})", e),
    }

    let queue = insurance.claim_queue()?;
    println!(
        "  Queue:                  {} pending, {} processed",
        queue.pending.len(),
        queue.processed.len()
    );
    println!();

    println!("  Coverage lookup: \"HC-2024\"");
    for view in insurance.lookup_coverage("HC-2024")? {
        println!(
            "    {}  {}  {} {}  until {}  → {:?}",
            view.policy.policy_number,
            view.holder_name.as_deref().unwrap_or("(unknown holder)"),
            view.provider_name.as_deref().unwrap_or("(unknown provider)"),
            view.policy.coverage_type,
            view.policy.end_date,
            view.coverage
        );
    }

    println!();
    println!("  Scenario 4 complete.");
    println!();
    Ok(())
}
