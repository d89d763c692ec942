//! Scenario 3: Hospital Review
//!
//! Hospital staff work through a queue holding one automated and one manual
//! request: the automated one is confirmed, the manual one rejected, and a
//! second decision on the same request is refused. Ends with the call
//! monitor's history and totals.

use chrono::Days;

use medipilot_config::PortalConfig;
use medipilot_contracts::{
    appointment::Decision,
    error::PortalResult,
    report::ReportType,
};

use crate::{analysis::cardiology_template, services::ManualRequest};

use super::{scenario_portal, DEMO_HOSPITAL, DEMO_PATIENT};

pub async fn run_scenario(config: &PortalConfig) -> PortalResult<()> {
    println!("=== Scenario 3: Hospital Review ===");
    println!();

    let portal = scenario_portal(config, cardiology_template())?;
    let today = portal.clock().today();

    portal
        .patients()
        .upload_report(DEMO_PATIENT, "Lipid Panel", ReportType::BloodTest)
        .await?;
    portal.patients().request_appointment(ManualRequest {
        user_id: DEMO_PATIENT.to_string(),
        hospital_id: DEMO_HOSPITAL.to_string(),
        specialty: "Orthopedics".to_string(),
        reason: "Knee pain after running".to_string(),
        preferred_date: today + Days::new(10),
    })?;

    let hospital = portal.hospitals();
    let queue = hospital.request_queue(DEMO_HOSPITAL)?;
    println!("  Pending requests for {}:", DEMO_HOSPITAL);
    for request in &queue.pending {
        println!(
            "    {}  {:<12} {:?}  {}",
            request.id, request.specialty, request.source, request.reason
        );
    }
    println!();

    for request in &queue.pending {
        let decision = if request.call_id.is_some() {
            Decision::Confirmed
        } else {
            Decision::Rejected
        };
        let decided = hospital.decide(&request.id, decision)?;
        println!("  {} → {:?}", decided.id, decided.status);
    }

    if let Some(first) = queue.pending.first() {
        match hospital.decide(&first.id, Decision::Rejected) {
            Ok(_) => println!("  Second decision on {}: accepted (unexpected)", first.id),
            Err(e) => println!("  Second decision on {}: refused ({})", first.id, e),
        }
    }
    println!();

    let stats = hospital.call_stats(DEMO_HOSPITAL)?;
    println!(
        "  Calls: {} total, {} completed, {} active, {} today",
        stats.total, stats.completed, stats.active, stats.today
    );
    for call in hospital.call_history(DEMO_HOSPITAL, None)? {
        println!(
            "    {}  {}  {:?}  {}",
            call.id, call.patient_name, call.status, call.reason
        );
    }

    println!();
    println!("  Scenario 3 complete.");
    println!();
    Ok(())
}
