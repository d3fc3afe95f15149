//! Dark mode management.
//!
//! A single `ThemeContext` is created at startup and shared with every view
//! through Leptos context. The flag lives in localStorage under `darkMode`
//! and is mirrored as the `dark` class on `<html>`.

use anyhow::{anyhow, Result};
use contracts::shared::preferences::{DarkMode, PreferenceStore};
use leptos::prelude::*;
use web_sys::window;

/// Browser localStorage as a preference store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage> {
        window()
            .ok_or_else(|| anyhow!("no window"))?
            .local_storage()
            .map_err(|e| anyhow!("localStorage access denied: {:?}", e))?
            .ok_or_else(|| anyhow!("localStorage is not available"))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| anyhow!("failed to read {}: {:?}", key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("failed to write {}: {:?}", key, e))
    }
}

/// Toggle the `dark` class on the document element.
fn apply_dark_class(enabled: bool) {
    let root = match window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        Some(root) => root,
        None => return,
    };

    if let Err(e) = root.class_list().toggle_with_force("dark", enabled) {
        log::warn!("failed to apply dark class: {:?}", e);
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current dark-mode flag.
    pub dark_mode: RwSignal<bool>,
}

impl ThemeContext {
    /// Read the stored preference and apply it. Called once in `App`.
    pub fn init() -> Self {
        let mode = DarkMode::load(&LocalStorageStore);
        apply_dark_class(mode.is_enabled());
        log::debug!("dark mode on startup: {}", mode.is_enabled());
        Self {
            dark_mode: RwSignal::new(mode.is_enabled()),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode.get()
    }

    /// Flip dark mode, persist it and restyle the document.
    pub fn toggle_dark_mode(&self) {
        let mut mode = DarkMode::new(self.dark_mode.get_untracked());
        if let Err(e) = mode.toggle(&LocalStorageStore) {
            log::warn!("failed to persist dark mode: {:#}", e);
        }
        self.dark_mode.set(mode.is_enabled());
        apply_dark_class(mode.is_enabled());
    }
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Provide it in App.")
}

/// Sun / moon button switching dark mode.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| ctx.toggle_dark_mode()
            title=move || if ctx.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
        >
            {move || if ctx.is_dark() {
                crate::shared::icons::icon("sun")
            } else {
                crate::shared::icons::icon("moon")
            }}
        </button>
    }
}
