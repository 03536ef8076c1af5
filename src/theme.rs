//! Light/dark theme state and its persistence seam.
//!
//! The browser layer implements [`ThemeStore`] over `localStorage` and
//! [`ThemeSurface`] over the document element's `data-theme` attribute.

use thiserror::Error;

pub const THEME_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible name of the toggle button; names the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("durable storage is unavailable")]
    Unavailable,
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// Durable key-value slot holding the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// Whatever consumes the theme for styling.
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

/// Stored preference, or dark when nothing valid is stored.
pub fn initial_theme(store: &impl ThemeStore) -> Theme {
    store
        .load()
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

/// Flips `current`, persists and applies the result.
///
/// A failed write is logged and otherwise ignored; the theme is still
/// applied for the current page.
pub fn toggle_theme(current: Theme, store: &impl ThemeStore, surface: &impl ThemeSurface) -> Theme {
    let next = current.toggled();
    if let Err(error) = store.save(next.as_str()) {
        report_storage_failure(&error);
    }
    surface.apply(next);
    next
}

#[cfg(target_arch = "wasm32")]
fn report_storage_failure(error: &StorageError) {
    log::warn!("theme preference not persisted: {error}");
}

#[cfg(not(target_arch = "wasm32"))]
fn report_storage_failure(_error: &StorageError) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
        broken: bool,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn save(&self, value: &str) -> Result<(), StorageError> {
            if self.broken {
                return Err(StorageError::Unavailable);
            }
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        applied: RefCell<Vec<Theme>>,
    }

    impl ThemeSurface for RecordingSurface {
        fn apply(&self, theme: Theme) {
            self.applied.borrow_mut().push(theme);
        }
    }

    #[test]
    fn missing_preference_defaults_to_dark() {
        assert_eq!(initial_theme(&MemoryStore::default()), Theme::Dark);
    }

    #[test]
    fn invalid_preference_defaults_to_dark() {
        let store = MemoryStore {
            value: RefCell::new(Some("sepia".to_string())),
            broken: false,
        };
        assert_eq!(initial_theme(&store), Theme::Dark);
    }

    #[test]
    fn stored_light_preference_is_restored() {
        let store = MemoryStore {
            value: RefCell::new(Some("light".to_string())),
            broken: false,
        };
        assert_eq!(initial_theme(&store), Theme::Light);
    }

    #[test]
    fn double_toggle_restores_theme_and_persists_last_applied() {
        let store = MemoryStore::default();
        let surface = RecordingSurface::default();

        let once = toggle_theme(Theme::Dark, &store, &surface);
        let twice = toggle_theme(once, &store, &surface);

        assert_eq!(once, Theme::Light);
        assert_eq!(twice, Theme::Dark);
        let applied = surface.applied.borrow();
        assert_eq!(applied.as_slice(), &[Theme::Light, Theme::Dark]);
        assert_eq!(store.load().as_deref(), applied.last().map(|theme| theme.as_str()));
    }

    #[test]
    fn failed_write_still_applies_theme() {
        let store = MemoryStore {
            value: RefCell::new(None),
            broken: true,
        };
        let applied = Cell::new(None);
        struct CellSurface<'a>(&'a Cell<Option<Theme>>);
        impl ThemeSurface for CellSurface<'_> {
            fn apply(&self, theme: Theme) {
                self.0.set(Some(theme));
            }
        }

        let next = toggle_theme(Theme::Light, &store, &CellSurface(&applied));

        assert_eq!(next, Theme::Dark);
        assert_eq!(applied.get(), Some(Theme::Dark));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
