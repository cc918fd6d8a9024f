//! Persistence port for the review list
//!
//! A single local-storage slot holds the serialized user reviews. The port
//! keeps [`crate::core::ReviewStore`] testable with an in-memory fake and
//! lets server-side rendering fall through to "nothing persisted".

use std::cell::RefCell;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Local-storage key holding the serialized user reviews
pub const REVIEWS_STORAGE_KEY: &str = "user_reviews";

/// Raw load/save access to the persisted review slot.
///
/// Implementations never surface errors: a failed load is `None`, a failed
/// save returns `false`, and callers degrade accordingly.
pub trait ReviewStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str) -> bool;
}

/// Browser local storage backend.
///
/// On the server (or when the browser denies storage access) it behaves as
/// an always-empty slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl ReviewStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(value) = storage.get_item(REVIEWS_STORAGE_KEY) {
                        return value;
                    }
                }
            }
        }
        None
    }

    fn save(&self, raw: &str) -> bool {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    return storage.set_item(REVIEWS_STORAGE_KEY, raw).is_ok();
                }
            }
        }
        #[cfg(feature = "ssr")]
        let _ = raw;
        false
    }
}

/// In-memory backend for tests and anywhere no browser is available.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-populated with `raw`, e.g. a payload from a previous visit.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }
}

impl ReviewStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, raw: &str) -> bool {
        *self.slot.borrow_mut() = Some(raw.to_string());
        true
    }
}
