//! Theme context module for managing the dark/light theme
//!
//! Provides:
//! - ThemeContext for reactive theme state
//! - System theme detection via prefers-color-scheme (first visit only)
//! - LocalStorage persistence under the "theme" key

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Local-storage key holding the persisted theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Whether the dark theme is active
    pub is_dark: RwSignal<bool>,
}

impl ThemeContext {
    /// Set the theme and persist to localStorage
    pub fn set(&self, dark: bool) {
        self.is_dark.set(dark);
        persist_theme(dark);
        self.apply_theme_class();
    }

    /// Flip between dark and light
    pub fn toggle(&self) {
        self.set(!self.is_dark.get_untracked());
    }

    /// Apply the dark class to the document element
    pub fn apply_theme_class(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Some(html) = document.document_element() {
                        let class_list = html.class_list();
                        if self.is_dark.get_untracked() {
                            let _ = class_list.add_1("dark");
                        } else {
                            let _ = class_list.remove_1("dark");
                        }
                    }
                }
            }
        }
    }
}

/// Persist theme to localStorage
fn persist_theme(dark: bool) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let value = if dark { "dark" } else { "light" };
                let _ = storage.set_item(THEME_STORAGE_KEY, value);
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = dark;
    }
}

/// Load theme from localStorage; `None` when nothing was ever persisted
fn load_persisted_theme() -> Option<bool> {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(THEME_STORAGE_KEY) {
                    return match value.as_str() {
                        "dark" => Some(true),
                        "light" => Some(false),
                        _ => None,
                    };
                }
            }
        }
    }
    None
}

/// Detect system color scheme preference
fn detect_system_prefers_dark() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                return media_query.matches();
            }
        }
    }
    false
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let initial_dark = load_persisted_theme().unwrap_or_else(detect_system_prefers_dark);

    let ctx = ThemeContext {
        is_dark: RwSignal::new(initial_dark),
    };

    // Apply theme class initially and on changes
    #[cfg(not(feature = "ssr"))]
    {
        let ctx_clone = ctx;
        Effect::new(move |_| {
            // Subscribe to is_dark changes
            let _ = ctx_clone.is_dark.get();
            ctx_clone.apply_theme_class();
        });
    }

    // Provide context
    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
