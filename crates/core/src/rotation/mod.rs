//! Chart rotation: which of a view's chart variants is on display.
//!
//! - `variant` - the pure cyclic state machine
//! - `ticker` - injectable clocks (tokio interval, manual)
//! - `timer` - a mounted rotation running on its own task

pub mod ticker;
pub mod timer;
pub mod variant;

#[cfg(test)]
mod props;

pub use ticker::{IntervalTicker, ManualClock, ManualTicker, Ticker, manual};
pub use timer::RotationTimer;
pub use variant::{ChartRotation, ChartVariant};
