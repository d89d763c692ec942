//! MediPilot Portal — Demo CLI
//!
//! Runs the portal demo scenarios against a freshly seeded in-memory store,
//! or pushes one report of your own through the automated follow-up.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- report-followup
//!   cargo run -p demo -- --no-latency hospital-review
//!   cargo run -p demo -- --config config/medipilot.toml upload "Chest X-Ray" --kind xray

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use medipilot_config::PortalConfig;
use medipilot_contracts::{error::PortalResult, report::ReportType};
use medipilot_core::FollowUpOutcome;
use medipilot_portal::{
    scenarios::{claims_coverage, hospital_review, no_match, patient_care, report_followup},
    Portal,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// MediPilot — automated report follow-up demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "MediPilot portal demo",
    long_about = "Runs MediPilot demo scenarios: report analysis, automated hospital calls,\n\
                  appointment request review, claims and coverage."
)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip the simulated analysis, call and meal-plan latencies.
    #[arg(long, global = true)]
    no_latency: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all five scenarios in sequence.
    RunAll,
    /// Scenario 1: report → call → request → confirmed appointment.
    ReportFollowup,
    /// Scenario 2: no hospital offers the suggested specialty.
    NoMatch,
    /// Scenario 3: hospital staff review automated and manual requests.
    HospitalReview,
    /// Scenario 4: insurance claims and coverage lookup.
    ClaimsCoverage,
    /// Scenario 5: medications, metrics, meal plan, interface switch.
    PatientCare,
    /// Upload one report as the demo patient, with a randomly chosen analysis.
    Upload {
        /// Report title.
        title: String,
        /// Report type: blood_test, xray, mri, ct_scan, general, or anything else.
        #[arg(long, default_value = "blood_test")]
        kind: String,
        /// Uploading user id.
        #[arg(long, default_value = "1")]
        user: String,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match load_config(&cli) {
        Ok(config) => run(cli.command, &config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> PortalResult<PortalConfig> {
    let mut config = match &cli.config {
        Some(path) => PortalConfig::from_file(path)?,
        None => PortalConfig::default(),
    };
    if cli.no_latency {
        config.latency.simulate = false;
    }
    Ok(config)
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

async fn run(command: Command, config: &PortalConfig) -> PortalResult<()> {
    match command {
        Command::RunAll => run_all(config).await,
        Command::ReportFollowup => report_followup::run_scenario(config).await,
        Command::NoMatch => no_match::run_scenario(config).await,
        Command::HospitalReview => hospital_review::run_scenario(config).await,
        Command::ClaimsCoverage => claims_coverage::run_scenario(config).await,
        Command::PatientCare => patient_care::run_scenario(config).await,
        Command::Upload { title, kind, user } => upload(config, &title, &kind, &user).await,
    }
}

async fn run_all(config: &PortalConfig) -> PortalResult<()> {
    report_followup::run_scenario(config).await?;
    no_match::run_scenario(config).await?;
    hospital_review::run_scenario(config).await?;
    claims_coverage::run_scenario(config).await?;
    patient_care::run_scenario(config).await?;
    Ok(())
}

async fn upload(config: &PortalConfig, title: &str, kind: &str, user: &str) -> PortalResult<()> {
    let portal = Portal::from_config(config)?;
    let run = portal
        .patients()
        .upload_report(user, title, ReportType::from(kind))
        .await?;

    println!("  Report {} ({}): {:?}", run.report.id, run.report.report_type, run.report.status);
    if let Some(analysis) = &run.report.ai_analysis {
        for finding in &analysis.findings {
            println!("    - {}", finding);
        }
    }

    match &run.outcome {
        FollowUpOutcome::NotNeeded => println!("  No follow-up needed."),
        FollowUpOutcome::NoMatchingHospital { call } => println!(
            "  Call {} failed: {}",
            call.id,
            call.failure_reason.as_deref().unwrap_or("-")
        ),
        FollowUpOutcome::Requested { call, request } => println!(
            "  Call {} completed; request {} pending at {} for {}",
            call.id, request.id, request.hospital_id, request.preferred_date
        ),
    }
    println!();
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("MediPilot — Healthcare Portal Core");
    println!("Automated Follow-up Demo");
    println!("==================================");
    println!();
    println!("Follow-up pipeline per uploaded report:");
    println!("  [1] Analyze report → findings, urgency, suggested specialty");
    println!("  [2] Match the first hospital offering that specialty");
    println!("  [3] Simulate the call and record its transcript");
    println!("  [4] Emit a pending appointment request for hospital review");
    println!();
}
