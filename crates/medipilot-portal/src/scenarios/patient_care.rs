//! Scenario 5: Patient Self-Care
//!
//! Medications, health metrics, a generated meal plan and a dashboard
//! switch, all for the demo patient.

use medipilot_config::PortalConfig;
use medipilot_contracts::{
    care::{MealPreferences, NewMedication},
    error::PortalResult,
    user::Role,
};

use crate::analysis::all_clear_template;

use super::{scenario_portal, DEMO_PATIENT};

pub async fn run_scenario(config: &PortalConfig) -> PortalResult<()> {
    println!("=== Scenario 5: Patient Self-Care ===");
    println!();

    let portal = scenario_portal(config, all_clear_template())?;
    let patients = portal.patients();
    let today = portal.clock().today();

    let lisinopril = patients.add_medication(NewMedication {
        user_id: DEMO_PATIENT.to_string(),
        name: "Lisinopril".to_string(),
        dosage: "10mg".to_string(),
        frequency: "Once daily".to_string(),
        start_date: Some(today),
        end_date: None,
        instructions: "Take in the morning".to_string(),
    })?;
    patients.add_medication(NewMedication {
        user_id: DEMO_PATIENT.to_string(),
        name: "Amoxicillin".to_string(),
        dosage: "500mg".to_string(),
        frequency: "Three times daily".to_string(),
        start_date: Some(today),
        end_date: None,
        instructions: "Finish the full course".to_string(),
    })?;
    patients.toggle_medication(&lisinopril.id)?;

    let meds = patients.medications(DEMO_PATIENT)?;
    println!(
        "  Medications:            {} active, {} completed",
        meds.active.len(),
        meds.completed.len()
    );

    for (kind, value) in [("blood_pressure", "128/82"), ("heart_rate", "72"), ("weight", "81.5")] {
        let metric = patients.record_metric(DEMO_PATIENT, kind, value, "")?;
        println!("  {:<22}  {} {}", metric.label, metric.value, metric.unit);
    }
    match patients.record_metric(DEMO_PATIENT, "cholesterol", "210", "") {
        Ok(_) => println!("  Unknown metric accepted (unexpected)"),
        Err(e) => println!("  Unknown metric:         refused ({})", e),
    }
    println!();

    let plan = patients
        .generate_meal_plan(
            DEMO_PATIENT,
            MealPreferences {
                goal: "Lower blood pressure".to_string(),
                diet_type: "DASH".to_string(),
                calories: Some(1900),
            },
        )
        .await?;
    println!("  Meal plan {}:           {} ({}, {} kcal)", plan.id, plan.name, plan.duration, plan.calories);
    for day in &plan.meals {
        println!("    {:<9} {} / {} / {}", day.day, day.breakfast, day.lunch, day.dinner);
    }
    println!();

    let user = patients.switch_interface(DEMO_PATIENT, Role::Insurance)?;
    println!(
        "  Interface:              {} (role stays {})",
        user.preferred_interface, user.role
    );

    println!();
    println!("  Scenario 5 complete.");
    println!();
    Ok(())
}
