//! Light/dark theme preference.
//!
//! The store owns the current theme and keeps the persisted value in sync
//! with it; the frontend supplies the storage backend and applies the theme
//! to the document.

/// Storage key of the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Value used for the `data-theme` attribute and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Strict parse; unknown values are rejected so that a corrupt stored
    /// value falls through to the platform preference.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle button.
    pub fn glyph(&self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        }
    }
}

/// Durable key-value storage scoped to the site.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

pub struct ThemeStore<S: PreferenceStorage> {
    storage: S,
    current: Theme,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    /// Resolve the initial theme: stored value, then the platform's
    /// light-scheme signal, then dark. The resolved value is persisted.
    pub fn init(storage: S, prefers_light: Option<bool>) -> Self {
        let current = storage
            .read(THEME_STORAGE_KEY)
            .and_then(|s| Theme::parse(&s))
            .unwrap_or(match prefers_light {
                Some(true) => Theme::Light,
                _ => Theme::Dark,
            });
        let mut store = Self { storage, current };
        store.set(current);
        store
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.storage.write(THEME_STORAGE_KEY, theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage(HashMap<String, String>);

    impl PreferenceStorage for MemoryStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
        fn write(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    fn with_value(value: &str) -> MemoryStorage {
        let mut storage = MemoryStorage::default();
        storage.write(THEME_STORAGE_KEY, value);
        storage
    }

    #[test]
    fn test_init_prefers_stored_value() {
        let store = ThemeStore::init(with_value("light"), Some(false));
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn test_init_falls_back_to_platform_then_dark() {
        assert_eq!(ThemeStore::init(MemoryStorage::default(), Some(true)).current(), Theme::Light);
        assert_eq!(ThemeStore::init(MemoryStorage::default(), Some(false)).current(), Theme::Dark);
        assert_eq!(ThemeStore::init(MemoryStorage::default(), None).current(), Theme::Dark);
        assert_eq!(ThemeStore::init(with_value("sepia"), Some(true)).current(), Theme::Light);
    }

    #[test]
    fn test_double_toggle_restores_theme() {
        let mut store = ThemeStore::init(MemoryStorage::default(), None);
        let original = store.current();
        store.toggle();
        assert_ne!(store.current(), original);
        store.toggle();
        assert_eq!(store.current(), original);
    }

    #[test]
    fn test_persisted_matches_applied() {
        let mut store = ThemeStore::init(MemoryStorage::default(), Some(true));
        assert_eq!(store.storage().read(THEME_STORAGE_KEY).as_deref(), Some("light"));
        for _ in 0..3 {
            let applied = store.toggle();
            assert_eq!(
                store.storage().read(THEME_STORAGE_KEY).as_deref(),
                Some(applied.as_str())
            );
        }
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Theme::Light.glyph(), "☀");
        assert_eq!(Theme::Dark.glyph(), "☾");
    }
}
