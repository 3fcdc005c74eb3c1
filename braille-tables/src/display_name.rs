//! Display name resolution for custom tables.

use indexmap::IndexMap;

use crate::environment::LocaleProvider;
use crate::error::{BrailleTableError, Result};

/// Raw `displayName` value taken from a manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayName {
    /// No `displayName` given. The table file name doubles as display name.
    #[default]
    Absent,
    /// A single string, passed through the application's translation lookup.
    Literal(String),
    /// Locale code mapped to display name, in manifest order.
    LocaleMap(IndexMap<String, String>),
    /// A structurally wrong value, e.g. a list. Carries a description of
    /// what was found; rejected when the name is resolved.
    Unsupported(String),
}

/// Resolve the display name of a custom table for the active locale.
///
/// For a locale map the lookup walks a fallback chain: the exact locale
/// code, the language part before any `_`, `en_US`, `en`, and finally the
/// table file name. An entry whose value is the empty string counts as
/// missing and falls through to the next step.
///
/// # Errors
///
/// Returns [`BrailleTableError::InvalidDisplayName`] for a
/// [`DisplayName::Unsupported`] value.
pub fn resolve_display_name(
    file_name: &str,
    value: &DisplayName,
    locale: &dyn LocaleProvider,
) -> Result<String> {
    match value {
        DisplayName::Absent => Ok(file_name.to_string()),
        DisplayName::Literal(name) => Ok(locale.translate(name)),
        DisplayName::LocaleMap(names) => {
            Ok(lookup_locale(names, &locale.active_locale())
                .unwrap_or(file_name)
                .to_string())
        }
        DisplayName::Unsupported(found) => Err(BrailleTableError::InvalidDisplayName {
            table: file_name.to_string(),
            found: found.clone(),
        }),
    }
}

fn lookup_locale<'a>(names: &'a IndexMap<String, String>, active: &str) -> Option<&'a str> {
    let language = active.split('_').next().unwrap_or(active);
    non_empty(names, active)
        .or_else(|| non_empty(names, language))
        .or_else(|| non_empty(names, "en_US"))
        .or_else(|| non_empty(names, "en"))
}

fn non_empty<'a>(names: &'a IndexMap<String, String>, key: &str) -> Option<&'a str> {
    names
        .get(key)
        .map(String::as_str)
        .filter(|name| !name.is_empty())
}
