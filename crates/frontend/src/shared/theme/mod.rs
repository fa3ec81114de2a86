//! Theme management module for the page.
//!
//! Provides a context-based light/dark theme. The preference is persisted in
//! localStorage and applied as `data-theme` on the document element.

use contracts::shared::theme::{PreferenceStorage, Theme, ThemeStore};
use leptos::prelude::*;
use web_sys::window;

/// localStorage-backed preference storage.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("could not persist {}: {:?}", key, e);
            }
        }
    }
}

/// Set `data-theme` on the root element for the stylesheet.
fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_str());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    store: StoredValue<ThemeStore<BrowserStorage>>,
}

impl ThemeContext {
    /// Resolve the initial theme and apply it immediately.
    pub fn new() -> Self {
        let store = ThemeStore::init(BrowserStorage, crate::shared::dom::prefers_light_scheme());
        let initial = store.current();
        apply_theme(initial);
        Self {
            theme: RwSignal::new(initial),
            store: StoredValue::new(store),
        }
    }

    /// Set the theme, persist it and apply it to the document.
    pub fn set_theme(&self, theme: Theme) {
        self.store.update_value(|store| store.set(theme));
        apply_theme(theme);
        self.theme.set(theme);
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme(next);
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    provide_context(ThemeContext::new());
    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap the page with ThemeProvider.")
}

/// Light/dark toggle button; shows ☀ in light mode and ☾ in dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            id="themeBtn"
            type="button"
            class="iconBtn"
            aria-label="Toggle colour theme"
            on:click=move |_| ctx.toggle()
        >
            {move || ctx.theme.get().glyph()}
        </button>
    }
}
