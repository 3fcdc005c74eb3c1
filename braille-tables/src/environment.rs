//! Traits describing the embedding application.
//!
//! The registry itself never reads global state. Everything that depends on
//! the host application (secure mode, the scratchpad, installed add-ons, the
//! active locale) comes in through these traits, so tests and embedders can
//! supply plain data.

use std::path::PathBuf;

/// Host application state that decides where custom tables may live.
pub trait TablesEnvironment {
    /// True when running in a restricted session where user-supplied code
    /// and data must not be loaded.
    fn secure_mode(&self) -> bool;

    /// True when the user has enabled the developer scratchpad directory.
    fn scratchpad_enabled(&self) -> bool;

    /// Root of the scratchpad directory, if the application has one.
    fn scratchpad_dir(&self) -> Option<PathBuf>;

    /// Root directories of running add-ons, in enumeration order.
    fn addon_dirs(&self) -> Vec<PathBuf>;
}

/// Locale and translation lookup of the host application.
pub trait LocaleProvider {
    /// Active locale code, e.g. `"en"`, `"de"` or `"pt_BR"`.
    fn active_locale(&self) -> String;

    /// Localize a display name. The default implementation passes the text
    /// through unchanged.
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// A [`TablesEnvironment`] backed by plain fields.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    /// Whether the session is restricted.
    pub secure_mode: bool,
    /// Whether the scratchpad directory is enabled.
    pub scratchpad_enabled: bool,
    /// Scratchpad root, if any.
    pub scratchpad_dir: Option<PathBuf>,
    /// Add-on roots in enumeration order.
    pub addon_dirs: Vec<PathBuf>,
}

impl TablesEnvironment for StaticEnvironment {
    fn secure_mode(&self) -> bool {
        self.secure_mode
    }

    fn scratchpad_enabled(&self) -> bool {
        self.scratchpad_enabled
    }

    fn scratchpad_dir(&self) -> Option<PathBuf> {
        self.scratchpad_dir.clone()
    }

    fn addon_dirs(&self) -> Vec<PathBuf> {
        self.addon_dirs.clone()
    }
}

/// A [`LocaleProvider`] with a fixed locale and pass-through translation.
#[derive(Debug, Clone)]
pub struct StaticLocale {
    locale: String,
}

impl StaticLocale {
    /// Create a provider for the given locale code.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

impl Default for StaticLocale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl LocaleProvider for StaticLocale {
    fn active_locale(&self) -> String {
        self.locale.clone()
    }
}
