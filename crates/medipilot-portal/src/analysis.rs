//! Analysis providers for uploaded reports.
//!
//! No model is called. `RandomTemplateProvider` picks one of a fixed set of
//! canned results; `FixedAnalysisProvider` always returns the same one, which
//! is what the demo scenarios and integration tests use.

use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use medipilot_contracts::{
    error::{PortalError, PortalResult},
    report::{AnalysisInput, AnalysisResult, Severity, Urgency},
};
use medipilot_core::{traits::AnalysisProvider, verify::check_analysis};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Elevated blood pressure; Cardiology in a week.
pub fn cardiology_template() -> AnalysisResult {
    AnalysisResult {
        findings: strings(&[
            "Blood pressure elevated at 145/95",
            "Cholesterol slightly high at 220 mg/dL",
            "Blood sugar normal",
        ]),
        severity: Severity::Medium,
        recommendations: strings(&[
            "Schedule cardiology consultation",
            "Start blood pressure monitoring",
            "Dietary modifications recommended",
        ]),
        follow_up_needed: true,
        urgency: Urgency::Medium,
        suggested_specialty: Some("Cardiology".to_string()),
        estimated_wait_days: 7,
    }
}

/// Vitamin and iron deficiency; General Medicine in two weeks. No seeded
/// hospital offers General Medicine, so this one exercises the no-match path.
pub fn general_medicine_template() -> AnalysisResult {
    AnalysisResult {
        findings: strings(&[
            "Vitamin D deficiency detected (15 ng/mL)",
            "Iron levels low",
            "Complete blood count normal",
        ]),
        severity: Severity::Low,
        recommendations: strings(&[
            "Vitamin D supplementation 2000 IU daily",
            "Iron-rich diet",
            "Follow-up in 3 months",
        ]),
        follow_up_needed: true,
        urgency: Urgency::Low,
        suggested_specialty: Some("General Medicine".to_string()),
        estimated_wait_days: 14,
    }
}

/// Chest inflammation, routed to Neurology.
pub fn chest_inflammation_template() -> AnalysisResult {
    AnalysisResult {
        findings: strings(&[
            "Chest X-ray shows minor inflammation",
            "Possible early stage bronchitis",
            "No signs of pneumonia",
        ]),
        severity: Severity::Medium,
        recommendations: strings(&[
            "Pulmonology consultation recommended",
            "Avoid smoking and pollutants",
            "Monitor symptoms",
        ]),
        follow_up_needed: true,
        urgency: Urgency::Medium,
        suggested_specialty: Some("Neurology".to_string()),
        estimated_wait_days: 5,
    }
}

/// Nothing abnormal; no follow-up.
pub fn all_clear_template() -> AnalysisResult {
    AnalysisResult {
        findings: strings(&[
            "All parameters within normal range",
            "Good overall health indicators",
            "No abnormalities detected",
        ]),
        severity: Severity::None,
        recommendations: strings(&[
            "Continue healthy lifestyle",
            "Annual checkup recommended",
            "No immediate action needed",
        ]),
        follow_up_needed: false,
        urgency: Urgency::None,
        suggested_specialty: None,
        estimated_wait_days: 0,
    }
}

pub fn builtin_templates() -> Vec<AnalysisResult> {
    vec![
        cardiology_template(),
        general_medicine_template(),
        chest_inflammation_template(),
        all_clear_template(),
    ]
}

// ── Providers ─────────────────────────────────────────────────────────────────

/// Picks a template uniformly at random for every report.
pub struct RandomTemplateProvider {
    templates: Vec<AnalysisResult>,
    rng: Mutex<StdRng>,
}

impl RandomTemplateProvider {
    /// Use `templates`, seeded from OS entropy.
    ///
    /// Returns `InvalidInput` for an empty set and `AnalysisContractViolated`
    /// if any template breaks the analysis contract.
    pub fn new(templates: Vec<AnalysisResult>) -> PortalResult<Self> {
        Self::build(templates, StdRng::from_entropy())
    }

    /// Same as `new` but with a reproducible sequence.
    pub fn with_seed(templates: Vec<AnalysisResult>, seed: u64) -> PortalResult<Self> {
        Self::build(templates, StdRng::seed_from_u64(seed))
    }

    fn build(templates: Vec<AnalysisResult>, rng: StdRng) -> PortalResult<Self> {
        if templates.is_empty() {
            return Err(PortalError::invalid("at least one analysis template is required"));
        }
        for template in &templates {
            check_analysis(template)?;
        }
        Ok(Self {
            templates,
            rng: Mutex::new(rng),
        })
    }

    pub fn templates(&self) -> &[AnalysisResult] {
        &self.templates
    }
}

impl AnalysisProvider for RandomTemplateProvider {
    fn name(&self) -> &str {
        "random-template"
    }

    fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        // A poisoned rng is still a usable rng.
        let index = match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..self.templates.len()),
            Err(poisoned) => poisoned.into_inner().gen_range(0..self.templates.len()),
        };
        debug!(title = %input.title, template = index, "analysis template chosen");
        self.templates[index].clone()
    }
}

/// Returns the same result for every report.
#[derive(Debug, Clone)]
pub struct FixedAnalysisProvider {
    result: AnalysisResult,
}

impl FixedAnalysisProvider {
    pub fn new(result: AnalysisResult) -> Self {
        Self { result }
    }
}

impl AnalysisProvider for FixedAnalysisProvider {
    fn name(&self) -> &str {
        "fixed"
    }

    fn analyze(&self, _input: &AnalysisInput) -> AnalysisResult {
        self.result.clone()
    }
}
