//! Light/dark theme state.
//!
//! The app root creates one `ThemeContext` and hands clones down to the
//! sections. Persistence goes through an injected `KeyValueStorage`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStorage, StorageError};

/// Storage slot holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Initial theme. The platform hint only applies when nothing is stored;
    /// any stored value other than `dark` means light.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored {
            None | Some("") => Theme::from_dark(prefers_dark),
            Some(value) => Theme::from_dark(value == Theme::Dark.as_str()),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared theme flag with a single setter.
///
/// Clones refer to the same flag. Observers (the view layer) register with
/// `on_change` and are notified after every change.
#[derive(Clone)]
pub struct ThemeContext {
    theme: Rc<Cell<Theme>>,
    storage: Rc<dyn KeyValueStorage>,
    listeners: Rc<RefCell<Vec<Box<dyn Fn(Theme)>>>>,
}

impl ThemeContext {
    /// Reads the persisted preference, falling back to `prefers_dark`.
    pub fn load(storage: Rc<dyn KeyValueStorage>, prefers_dark: bool) -> Self {
        let stored = storage.get(THEME_STORAGE_KEY);
        let theme = Theme::resolve(stored.as_deref(), prefers_dark);
        Self {
            theme: Rc::new(Cell::new(theme)),
            storage,
            listeners: Rc::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    /// Flips the theme and persists it.
    ///
    /// The in-memory theme changes even when the write fails; the error is
    /// returned so the caller can report it.
    pub fn toggle(&self) -> Result<Theme, StorageError> {
        let next = self.theme().toggled();
        self.set(next).map(|()| next)
    }

    pub fn set(&self, theme: Theme) -> Result<(), StorageError> {
        self.theme.set(theme);
        for listener in self.listeners.borrow().iter() {
            listener(theme);
        }
        self.storage.set(THEME_STORAGE_KEY, theme.as_str())
    }

    pub fn on_change(&self, listener: impl Fn(Theme) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn stored_value_beats_platform_hint() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_means_light() {
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("DARK"), true), Theme::Light);
    }

    #[test]
    fn empty_or_missing_value_follows_hint() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(Some(""), true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn first_visit_follows_platform() {
        for prefers_dark in [false, true] {
            let context = ThemeContext::load(Rc::new(MemoryStorage::new()), prefers_dark);
            assert_eq!(context.is_dark(), prefers_dark);
        }
    }

    #[test]
    fn toggle_persists_and_double_toggle_restores() {
        let storage = MemoryStorage::new();
        let context = ThemeContext::load(Rc::new(storage.clone()), false);

        assert_eq!(context.toggle(), Ok(Theme::Dark));
        assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));

        assert_eq!(context.toggle(), Ok(Theme::Light));
        assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
        assert_eq!(context.theme(), Theme::Light);
    }

    #[test]
    fn failed_write_still_flips_in_memory() {
        let context = ThemeContext::load(Rc::new(MemoryStorage::read_only()), false);
        assert!(context.toggle().is_err());
        assert!(context.is_dark());
    }

    #[test]
    fn clones_share_state_and_notify() {
        let context = ThemeContext::load(Rc::new(MemoryStorage::new()), false);
        let seen = Rc::new(Cell::new(None));
        context.on_change({
            let seen = seen.clone();
            move |theme| seen.set(Some(theme))
        });

        let child = context.clone();
        child.toggle().unwrap();
        assert!(context.is_dark());
        assert_eq!(seen.get(), Some(Theme::Dark));
    }
}
