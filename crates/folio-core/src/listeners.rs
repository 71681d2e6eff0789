//! Document click listeners with scoped lifetimes
//!
//! `ClickListeners` stands in for the document's click event target in the
//! headless model. `add` returns a `ListenerHandle`; the listener stays
//! attached exactly as long as the handle lives.

use folio_types::ClickRegion;
use parking_lot::Mutex;
use std::sync::Arc;

type Handler = Arc<dyn Fn(ClickRegion) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Document-level click event target
#[derive(Clone, Default)]
pub struct ClickListeners {
    registry: Arc<Mutex<Registry>>,
}

impl ClickListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler`; it is detached when the returned handle is dropped
    #[must_use = "dropping the handle detaches the listener immediately"]
    pub fn add(&self, handler: impl Fn(ClickRegion) + Send + Sync + 'static) -> ListenerHandle {
        let mut registry = self.registry.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Arc::new(handler)));
        tracing::trace!(id, total = registry.handlers.len(), "Click listener attached");

        ListenerHandle {
            id,
            registry: Arc::clone(&self.registry),
        }
    }

    /// Deliver a click to every attached listener
    pub fn dispatch(&self, region: ClickRegion) {
        // Handlers run without the lock held so they may attach/detach.
        let handlers: Vec<Handler> = self
            .registry
            .lock()
            .handlers
            .iter()
            .map(|(_, h)| Arc::clone(h))
            .collect();

        for handler in handlers {
            handler(region);
        }
    }

    pub fn len(&self) -> usize {
        self.registry.lock().handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard for an attached listener
pub struct ListenerHandle {
    id: u64,
    registry: Arc<Mutex<Registry>>,
}

impl ListenerHandle {
    /// Detach now (same as dropping)
    pub fn remove(self) {}
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let mut registry = self.registry.lock();
        registry.handlers.retain(|(id, _)| *id != self.id);
        tracing::trace!(id = self.id, total = registry.handlers.len(), "Click listener detached");
    }
}
