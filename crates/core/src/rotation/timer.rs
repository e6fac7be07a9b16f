//! A chart rotation mounted on its own task.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use super::ticker::Ticker;
use super::variant::{ChartRotation, ChartVariant};

/// Rotation bound to a mounted view.
///
/// A spawned task owns the rotation and its ticker. Every firing advances the
/// rotation; every selection jumps to the chosen variant without resetting the
/// ticker phase. Each change is published on a `watch` channel.
///
/// Dropping the timer (or calling [`RotationTimer::unmount`]) stops the task.
/// Nothing is published afterwards and subscribers see the channel close.
#[derive(Debug)]
pub struct RotationTimer<V: ChartVariant> {
    selections: mpsc::UnboundedSender<V>,
    active: watch::Receiver<V>,
    task: Option<JoinHandle<()>>,
}

impl<V: ChartVariant> RotationTimer<V> {
    /// Mounts a rotation starting at the first variant.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<T: Ticker>(ticker: T) -> Self {
        Self::mount_at(V::ALL[0], ticker)
    }

    /// Mounts a rotation starting at `start`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount_at<T: Ticker>(start: V, mut ticker: T) -> Self {
        let (selections, mut selected) = mpsc::unbounded_channel::<V>();
        let (publish, active) = watch::channel(start);

        let task = tokio::spawn(async move {
            let mut rotation = ChartRotation::starting_at(start);
            loop {
                tokio::select! {
                    fired = ticker.tick() => {
                        if !fired {
                            break;
                        }
                        rotation.advance();
                    }
                    Some(choice) = selected.recv() => {
                        rotation.select(choice);
                    }
                }
                if publish.send(rotation.active()).is_err() {
                    break;
                }
            }
            debug!(chart = rotation.active().key(), "chart rotation stopped");
        });

        debug!(chart = start.key(), "chart rotation mounted");
        Self {
            selections,
            active,
            task: Some(task),
        }
    }

    /// The variant currently on display.
    pub fn active(&self) -> V {
        *self.active.borrow()
    }

    /// Receiver notified on every rotation or selection.
    pub fn subscribe(&self) -> watch::Receiver<V> {
        self.active.clone()
    }

    /// Jumps to `variant` immediately. Returns `false` if the rotation has stopped.
    pub fn select(&self, variant: V) -> bool {
        self.selections.send(variant).is_ok()
    }

    /// Stops the rotation and waits until its task is gone.
    pub async fn unmount(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            // Cancellation is the expected outcome here.
            let _ = task.await;
        }
    }
}

impl<V: ChartVariant> Drop for RotationTimer<V> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
