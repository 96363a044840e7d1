use std::future::Future;
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior};

/// The host's once-per-display-refresh callback, as a future.
pub trait FrameClock: Send {
    fn tick(&mut self) -> impl Future<Output = ()> + Send;
}

/// Ticks at a fixed refresh rate. Late ticks are skipped rather than bunched up.
#[derive(Debug)]
pub struct IntervalClock {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalClock {
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1))),
            interval: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl FrameClock for IntervalClock {
    async fn tick(&mut self) {
        // Interval needs a running timer, so it is built on first use.
        let period = self.period;
        let interval = self.interval.get_or_insert_with(|| {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });
        interval.tick().await;
    }
}
