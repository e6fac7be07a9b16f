//! Injectable clocks that drive chart rotation.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// Source of rotation firings.
///
/// `tick` is raced against other events, so implementations must be
/// cancel safe: dropping an unfinished `tick` future must not lose a firing.
#[async_trait]
pub trait Ticker: Send + 'static {
    /// Waits for the next firing. Returns `false` once the clock is gone.
    async fn tick(&mut self) -> bool;
}

/// Shortest period an [`IntervalTicker`] runs at.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Fixed-period ticker backed by a tokio interval.
///
/// The first firing happens one full period after construction.
#[derive(Debug)]
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    /// Creates a ticker firing every `period`, raised to [`MIN_PERIOD`] if
    /// shorter.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    /// The firing period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}

/// Ticker that fires only when its [`ManualClock`] says so.
#[derive(Debug)]
pub struct ManualTicker {
    fired: mpsc::UnboundedReceiver<()>,
}

/// Handle firing a [`ManualTicker`].
#[derive(Debug, Clone)]
pub struct ManualClock {
    fire: mpsc::UnboundedSender<()>,
}

/// Creates a connected manual clock and ticker.
#[must_use]
pub fn manual() -> (ManualClock, ManualTicker) {
    let (fire, fired) = mpsc::unbounded_channel();
    (ManualClock { fire }, ManualTicker { fired })
}

impl ManualClock {
    /// Fires the ticker once. Returns `false` if the ticker has been dropped.
    pub fn fire(&self) -> bool {
        self.fire.send(()).is_ok()
    }
}

#[async_trait]
impl Ticker for ManualTicker {
    async fn tick(&mut self) -> bool {
        self.fired.recv().await.is_some()
    }
}
