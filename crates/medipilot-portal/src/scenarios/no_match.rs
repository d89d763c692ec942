//! Scenario 2: No Matching Hospital
//!
//! The analysis asks for General Medicine, which neither seeded hospital
//! offers. The call record is created and immediately fails; no request is
//! emitted and no hospital sees anything.

use medipilot_config::PortalConfig;
use medipilot_contracts::{error::PortalResult, report::ReportType};
use medipilot_core::FollowUpOutcome;

use crate::analysis::general_medicine_template;

use super::{scenario_portal, DEMO_HOSPITAL, DEMO_PATIENT};

pub async fn run_scenario(config: &PortalConfig) -> PortalResult<()> {
    println!("=== Scenario 2: No Matching Hospital ===");
    println!();

    let portal = scenario_portal(config, general_medicine_template())?;

    println!("  Patient uploads: \"Vitamin Panel\" (blood_test)");
    println!("  Suggested specialty:    General Medicine");
    println!();

    let run = portal
        .patients()
        .upload_report(DEMO_PATIENT, "Vitamin Panel", ReportType::BloodTest)
        .await?;

    match &run.outcome {
        FollowUpOutcome::NoMatchingHospital { call } => {
            println!("  Call {}:                {:?}", call.id, call.status);
            println!(
                "  Patient sees:           {}",
                call.failure_reason.as_deref().unwrap_or("-")
            );
        }
        other => println!("  Unexpected outcome: {:?}", other),
    }

    let requests = portal.patients().requests(DEMO_PATIENT)?;
    let queue = portal.hospitals().request_queue(DEMO_HOSPITAL)?;
    println!("  Patient requests:       {}", requests.len());
    println!("  Hospital pending queue: {}", queue.pending.len());

    println!();
    println!("  Scenario 2 complete.");
    println!();
    Ok(())
}
