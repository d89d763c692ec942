//! Wiring: one store, one pipeline and the role services on top of them.

use std::sync::Arc;

use tracing::info;

use medipilot_config::PortalConfig;
use medipilot_contracts::error::PortalResult;
use medipilot_core::{
    traits::{AnalysisProvider, Clock, Delay, RecordStore},
    FollowUpPipeline, InstantDelay, SystemClock, TokioDelay,
};
use medipilot_store::{seed_demo_data, InMemoryStore};

use crate::{
    analysis::{builtin_templates, RandomTemplateProvider},
    meal_plan::MealPlanGenerator,
    services::{HospitalService, InsuranceService, PatientService},
};

/// A running portal instance.
///
/// Construct via `from_config` for the stock behavior, or `new` to inject
/// the provider, clock and delay (tests and scenarios do this).
pub struct Portal {
    store: InMemoryStore,
    pipeline: FollowUpPipeline,
    meal_plans: MealPlanGenerator,
    clock: Arc<dyn Clock>,
}

impl Portal {
    pub fn new(
        config: &PortalConfig,
        provider: Box<dyn AnalysisProvider>,
        clock: Arc<dyn Clock>,
        delay: Arc<dyn Delay>,
    ) -> PortalResult<Self> {
        config.validate()?;

        let store = InMemoryStore::new();
        if config.store.seed_demo_data {
            seed_demo_data(&store)?;
        }

        let shared: Arc<dyn RecordStore> = Arc::new(store.clone());
        let pipeline = FollowUpPipeline::new(
            shared,
            provider,
            Box::new(Arc::clone(&clock)),
            Box::new(Arc::clone(&delay)),
            config.call_simulator(),
            config.pipeline_settings(),
        );
        let meal_plans = MealPlanGenerator::new(delay, config.meal_plan_latency());

        Ok(Self {
            store,
            pipeline,
            meal_plans,
            clock,
        })
    }

    /// Real tokio sleeps, or none at all when `latency.simulate` is off.
    pub fn delay_for(config: &PortalConfig) -> Arc<dyn Delay> {
        if config.latency.simulate {
            Arc::new(TokioDelay)
        } else {
            Arc::new(InstantDelay)
        }
    }

    /// Random template analysis (config overrides or the built-in set), the
    /// system clock and the configured delay.
    pub fn from_config(config: &PortalConfig) -> PortalResult<Self> {
        let templates = if config.analysis.templates.is_empty() {
            builtin_templates()
        } else {
            config.analysis.templates.clone()
        };
        let provider = RandomTemplateProvider::new(templates)?;
        info!(
            templates = provider.templates().len(),
            seeded = config.store.seed_demo_data,
            "portal starting"
        );
        Self::new(
            config,
            Box::new(provider),
            Arc::new(SystemClock),
            Self::delay_for(config),
        )
    }

    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    pub fn pipeline(&self) -> &FollowUpPipeline {
        &self.pipeline
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn patients(&self) -> PatientService<'_> {
        PatientService::new(self)
    }

    pub fn hospitals(&self) -> HospitalService<'_> {
        HospitalService::new(self)
    }

    pub fn insurance(&self) -> InsuranceService<'_> {
        InsuranceService::new(self)
    }

    pub(crate) fn meal_plans(&self) -> &MealPlanGenerator {
        &self.meal_plans
    }
}
