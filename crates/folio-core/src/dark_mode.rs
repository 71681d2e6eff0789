//! Dark-mode service
//!
//! One `DarkMode` is shared by every header instance on a page. Handles are
//! cheap clones of the same state; the last toggle wins.

use crate::preferences::PreferenceStore;
use folio_types::ColorScheme;
use parking_lot::Mutex;
use std::sync::Arc;

type Observer = Arc<dyn Fn(ColorScheme) + Send + Sync>;

struct Inner {
    scheme: Mutex<ColorScheme>,
    store: Box<dyn PreferenceStore>,
    observers: Mutex<Vec<Observer>>,
}

/// Shared, persisted color scheme preference
#[derive(Clone)]
pub struct DarkMode {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for DarkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DarkMode")
            .field("scheme", &*self.inner.scheme.lock())
            .finish_non_exhaustive()
    }
}

impl DarkMode {
    /// Restore the stored scheme, falling back to `default_scheme`.
    /// Load errors degrade to the default (logged, never returned).
    pub fn new(store: impl PreferenceStore + 'static, default_scheme: ColorScheme) -> Self {
        let scheme = match store.load() {
            Ok(Some(stored)) => stored,
            Ok(None) => default_scheme,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load color scheme preference, using default");
                default_scheme
            }
        };

        Self {
            inner: Arc::new(Inner {
                scheme: Mutex::new(scheme),
                store: Box::new(store),
                observers: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        *self.inner.scheme.lock()
    }

    /// `true` while the dark scheme is active
    pub fn value(&self) -> bool {
        self.scheme().is_dark()
    }

    /// Flip the scheme, returning the new one
    pub fn toggle(&self) -> ColorScheme {
        let next = {
            let mut scheme = self.inner.scheme.lock();
            *scheme = scheme.toggled();
            *scheme
        };
        self.commit(next);
        next
    }

    pub fn set(&self, scheme: ColorScheme) {
        {
            let mut current = self.inner.scheme.lock();
            if *current == scheme {
                return;
            }
            *current = scheme;
        }
        self.commit(scheme);
    }

    /// Register a callback fired after every change
    pub fn subscribe(&self, observer: impl Fn(ColorScheme) + Send + Sync + 'static) {
        self.inner.observers.lock().push(Arc::new(observer));
    }

    fn commit(&self, scheme: ColorScheme) {
        tracing::debug!(%scheme, "Color scheme changed");

        // A failed save keeps the in-memory value; the page still switches.
        if let Err(e) = self.inner.store.save(scheme) {
            tracing::error!(error = %e, "Failed to persist color scheme preference");
        }

        let observers: Vec<Observer> = self.inner.observers.lock().clone();
        for observer in observers {
            observer(scheme);
        }
    }
}
