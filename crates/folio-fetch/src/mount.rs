//! Section lifecycle: mount, observe, select, unmount.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use folio_core::{Record, SectionState};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::loader::ResourceLoader;

/// A section with its single load running or settled.
///
/// State changes are published on a watch channel so renderers can
/// re-evaluate on every change. Unmounting (explicitly or by dropping)
/// aborts the load and guarantees a late completion never touches the
/// state.
pub struct MountedSection<T: Record> {
    state: Arc<watch::Sender<SectionState<T>>>,
    alive: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl<T: Record> MountedSection<T> {
    /// Start the section's one load attempt in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(loader: ResourceLoader<T>) -> Self {
        let (tx, _) = watch::channel(SectionState::loading());
        let state = Arc::new(tx);
        let alive = Arc::new(AtomicBool::new(true));

        debug!(path = %loader.request().path, "mounting {} section", T::NOUN);

        let task = tokio::spawn({
            let state = Arc::clone(&state);
            let alive = Arc::clone(&alive);
            async move {
                let outcome = loader.load().await;
                // The flag is read under the channel's write lock, which
                // teardown also takes, so an unmount cannot interleave.
                let applied = state.send_if_modified(|s| {
                    alive.load(Ordering::Acquire) && s.settle(outcome)
                });
                if !applied {
                    debug!("discarding {} load after unmount", T::NOUN);
                }
            }
        });

        Self {
            state,
            alive,
            task: Some(task),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SectionState<T> {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SectionState<T>> {
        self.state.subscribe()
    }

    /// Wait for the load to settle and return the resulting state.
    ///
    /// If the load task died without settling, the state is returned as-is
    /// (still loading).
    pub async fn settled(&mut self) -> SectionState<T> {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "{} load task did not complete", T::NOUN);
            }
        }
        self.state()
    }

    /// Select the item at `index`. Ignored while loading.
    ///
    /// Returns whether the index addressed an element.
    pub fn select(&self, index: usize) -> bool {
        let mut accepted = false;
        self.state.send_if_modified(|s| {
            if s.is_loading() {
                return false;
            }
            accepted = s.select(index);
            true
        });
        debug!(index, accepted, "{} selection", T::NOUN);
        accepted
    }

    /// Advance the selection, wrapping around. Ignored while loading.
    pub fn select_next(&self) {
        self.state.send_if_modified(|s| {
            if s.is_loading() {
                return false;
            }
            s.select_next();
            true
        });
    }

    /// Whether the section is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Tear the section down, cancelling a load still in flight.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        self.state.send_if_modified(|_| {
            self.alive.store(false, Ordering::Release);
            false
        });
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<T: Record> Drop for MountedSection<T> {
    fn drop(&mut self) {
        if self.is_mounted() {
            self.teardown();
        }
    }
}
