//! Stock `Clock` and `Delay` implementations.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::debug;

use crate::traits::{Clock, Delay, LatencyPhase};

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen at one instant. `today` is given separately so tests can
/// pin the local date without reasoning about time zones.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: DateTime<Utc>,
    pub today: NaiveDate,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>, today: NaiveDate) -> Self {
        Self { now, today }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, phase: LatencyPhase, duration: Duration) {
        debug!(?phase, millis = duration.as_millis() as u64, "simulating latency");
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantDelay;

#[async_trait]
impl Delay for InstantDelay {
    async fn wait(&self, _phase: LatencyPhase, _duration: Duration) {}
}

// ── Shared handles ───────────────────────────────────────────────────────────

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[async_trait]
impl<D: Delay + ?Sized> Delay for Arc<D> {
    async fn wait(&self, phase: LatencyPhase, duration: Duration) {
        (**self).wait(phase, duration).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn fixed_clock_returns_pinned_values() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let clock = FixedClock::new(now, today);
        assert_eq!(clock.now(), now);
        assert_eq!(clock.today(), today);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_delay_advances_virtual_time() {
        let started = tokio::time::Instant::now();
        TokioDelay
            .wait(LatencyPhase::CallConnect, Duration::from_millis(3000))
            .await;
        assert!(started.elapsed() >= Duration::from_millis(3000));
    }

    #[test]
    fn shared_clock_delegates() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let shared: Arc<dyn Clock> = Arc::new(FixedClock::new(now, today));
        assert_eq!(Clock::today(&shared), today);
    }

    #[tokio::test]
    async fn instant_delay_does_not_sleep() {
        let started = std::time::Instant::now();
        InstantDelay
            .wait(LatencyPhase::ReportAnalysis, Duration::from_secs(60))
            .await;
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
