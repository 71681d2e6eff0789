//! Browser dark-mode provider
//!
//! Wraps the shared `folio_core::DarkMode` service in a Leptos context. The
//! preference lives in `localStorage` and the active scheme is mirrored as a
//! class on `<body>` so page-wide styles can follow it.

use folio_core::{CoreError, DarkMode, HeaderConfig, PreferenceStore};
use folio_types::ColorScheme;
use leptos::prelude::*;

/// `localStorage`-backed preference (JSON boolean under `key`)
#[derive(Debug, Clone)]
pub struct LocalStoragePreferenceStore {
    key: String,
}

impl LocalStoragePreferenceStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage(&self) -> folio_core::Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| CoreError::StorageUnavailable {
            reason: "no window object".to_string(),
        })?;

        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(CoreError::StorageUnavailable {
                reason: "localStorage is disabled".to_string(),
            }),
            Err(e) => Err(CoreError::StorageUnavailable {
                reason: format!("{:?}", e),
            }),
        }
    }
}

impl PreferenceStore for LocalStoragePreferenceStore {
    fn load(&self) -> folio_core::Result<Option<ColorScheme>> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| CoreError::StorageUnavailable {
                reason: format!("{:?}", e),
            })?;

        match raw {
            None => Ok(None),
            Some(value) => folio_core::preferences::decode_scheme(&value)
                .map(Some)
                .ok_or_else(|| CoreError::StorageUnavailable {
                    reason: format!("stored value for '{}' is not a boolean", self.key),
                }),
        }
    }

    fn save(&self, scheme: ColorScheme) -> folio_core::Result<()> {
        self.storage()?
            .set_item(&self.key, &folio_core::preferences::encode_scheme(scheme))
            .map_err(|e| CoreError::StorageUnavailable {
                reason: format!("{:?}", e),
            })
    }
}

/// Swap the scheme class on `<body>`
fn apply_body_class(scheme: ColorScheme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        leptos::logging::warn!("No <body> to apply color scheme class to");
        return;
    };

    let classes = body.class_list();
    if let Err(e) = classes.remove_1(scheme.toggled().body_class()) {
        leptos::logging::error!("Failed to clear previous color scheme class: {:?}", e);
    }
    if let Err(e) = classes.add_1(scheme.body_class()) {
        leptos::logging::error!("Failed to apply color scheme class: {:?}", e);
    }
}

/// Dark-mode context shared by every switch on the page
#[derive(Clone, Copy)]
pub struct DarkModeContext {
    scheme: RwSignal<ColorScheme>,
    service: StoredValue<DarkMode>,
}

impl DarkModeContext {
    pub fn new(service: DarkMode) -> Self {
        let initial = service.scheme();
        apply_body_class(initial);

        let scheme = RwSignal::new(initial);
        service.subscribe(move |next| {
            scheme.set(next);
            apply_body_class(next);
        });

        Self {
            scheme,
            service: StoredValue::new(service),
        }
    }

    /// Context persisted in `localStorage` under the configured key
    pub fn from_config(config: &HeaderConfig) -> Self {
        Self::new(DarkMode::new(
            LocalStoragePreferenceStore::new(&config.storage_key),
            config.default_scheme,
        ))
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.scheme().is_dark()
    }

    /// Handle on the shared service backing this context
    pub fn service(&self) -> DarkMode {
        self.service.with_value(DarkMode::clone)
    }
}

/// Dark-mode provider component (wraps app root)
#[component]
pub fn DarkModeProvider(config: HeaderConfig, children: Children) -> impl IntoView {
    provide_context(DarkModeContext::from_config(&config));

    children()
}

/// Hook to access the dark-mode context
pub fn use_dark_mode() -> DarkModeContext {
    expect_context::<DarkModeContext>()
}
