//! Scenario 1: Report to Appointment
//!
//! The full automated path for a report that needs a follow-up:
//!   1. Patient uploads a blood test; analysis suggests Cardiology in 7 days
//!   2. The agent finds City General Hospital (h1) and places the call
//!   3. The call completes; a pending request for h1 appears
//!   4. Hospital staff confirm it; the patient sees a booked appointment

use medipilot_config::PortalConfig;
use medipilot_contracts::{
    appointment::Decision,
    error::PortalResult,
    report::ReportType,
};
use medipilot_core::FollowUpOutcome;

use crate::analysis::cardiology_template;

use super::{scenario_portal, DEMO_PATIENT};

pub async fn run_scenario(config: &PortalConfig) -> PortalResult<()> {
    println!("=== Scenario 1: Report to Appointment ===");
    println!();

    let portal = scenario_portal(config, cardiology_template())?;

    println!("  Patient uploads: \"Annual Blood Work\" (blood_test)");
    let run = portal
        .patients()
        .upload_report(DEMO_PATIENT, "Annual Blood Work", ReportType::BloodTest)
        .await?;

    if let Some(analysis) = &run.report.ai_analysis {
        println!("  Report status:          {:?}", run.report.status);
        println!("  Findings:               {}", analysis.findings.join("; "));
        println!(
            "  Suggested specialty:    {} (urgency {}, ~{} days)",
            analysis.suggested_specialty.as_deref().unwrap_or("-"),
            analysis.urgency,
            analysis.estimated_wait_days
        );
    }
    println!();

    let FollowUpOutcome::Requested { call, request } = &run.outcome else {
        println!("  Unexpected outcome: {:?}", run.outcome);
        return Ok(());
    };

    println!(
        "  Call {} to {} — {:?}, duration {}",
        call.id,
        call.hospital_id.as_deref().unwrap_or("-"),
        call.status,
        call.call_duration.as_deref().unwrap_or("-")
    );
    for turn in &call.transcript {
        println!("    [{}] {}: {}", turn.timestamp.format("%H:%M:%S"), turn.speaker, turn.message);
    }
    println!();

    println!(
        "  Request {}: {} at {} on {} ({:?})",
        request.id, request.specialty, request.hospital_id, request.preferred_date, request.status
    );

    let decided = portal.hospitals().decide(&request.id, Decision::Confirmed)?;
    println!("  Hospital decision:      {:?}", decided.status);

    for appointment in portal.patients().appointments(DEMO_PATIENT)? {
        println!(
            "  Appointment {}:        {} with {} on {} at {}",
            appointment.id,
            appointment.specialty,
            appointment.hospital_name,
            appointment.date,
            appointment.time
        );
    }

    println!();
    println!("  Scenario 1 complete.");
    println!();
    Ok(())
}
