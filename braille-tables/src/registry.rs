//! The braille table registry.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::builtins;
use crate::environment::LocaleProvider;
use crate::error::{BrailleTableError, Result};
use crate::table::TableDescriptor;

/// Directory containing the translation engine's bundled tables, relative
/// to the application root.
pub const TABLES_DIR: &str = "louis/tables";

/// Table used for both input and output when the configured table is
/// missing or invalid.
pub const FALLBACK_TABLE_NAME: &str = "en-ueb-g1.ctb";

/// Old table file names mapped to their current names, for tables renamed
/// in newer translation engine releases. Configuration referring to an old
/// name can be migrated through [`renamed_table`].
pub const RENAMED_TABLES: &[(&str, &str)] = &[
    ("ar-fa.utb", "fa-ir-g1.utb"),
    ("da-dk-g16.utb", "da-dk-g16.ctb"),
    ("da-dk-g18.utb", "da-dk-g18.ctb"),
    ("de-de-g0.utb", "de-g0.utb"),
    ("de-de-g1.ctb", "de-g1.ctb"),
    ("de-de-g2.ctb", "de-g2.ctb"),
    ("en-us-comp8.ctb", "en-us-comp8-ext.utb"),
    ("fr-ca-g1.utb", "fr-bfu-comp6.utb"),
    ("Fr-Ca-g2.ctb", "fr-bfu-g2.ctb"),
    ("gr-bb.ctb", "grc-international-en.utb"),
    ("gr-gr-g1.utb", "el.ctb"),
    ("hr.ctb", "hr-comp8.utb"),
    ("mn-MN.utb", "mn-MN-g1.utb"),
    ("nl-BE-g1.ctb", "nl-BE-g0.utb"),
    ("nl-NL-g1.ctb", "nl-NL-g0.utb"),
    ("no-no.ctb", "no-no-8dot.utb"),
    ("no-no-comp8.ctb", "no-no-8dot.utb"),
    ("ru-compbrl.ctb", "ru.ctb"),
    ("sk-sk-g1.utb", "sk-g1.ctb"),
    ("UEBC-g1.ctb", "en-ueb-g1.ctb"),
    ("UEBC-g2.ctb", "en-ueb-g2.ctb"),
];

/// Current file name for a table renamed in a newer engine release, or
/// `None` if the name was never renamed.
pub fn renamed_table(old_name: &str) -> Option<&'static str> {
    RENAMED_TABLES
        .iter()
        .find(|(old, _)| *old == old_name)
        .map(|(_, new)| *new)
}

/// Registry of braille translation tables, keyed by file name.
///
/// Besides the descriptors themselves the registry tracks the ordered list
/// of directories in which table files are looked up. It starts out with
/// just the bundled tables directory; loading custom tables prepends their
/// directories so they shadow bundled files of the same name.
#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: HashMap<String, TableDescriptor>,
    dirs: Vec<PathBuf>,
    builtin_dir: PathBuf,
}

impl TableRegistry {
    /// Create an empty registry rooted at [`TABLES_DIR`].
    pub fn new() -> Self {
        Self::with_tables_dir(TABLES_DIR)
    }

    /// Create an empty registry with a custom bundled tables directory.
    pub fn with_tables_dir(builtin_dir: impl Into<PathBuf>) -> Self {
        let builtin_dir = builtin_dir.into();
        Self {
            tables: HashMap::new(),
            dirs: vec![builtin_dir.clone()],
            builtin_dir,
        }
    }

    /// Create a registry populated with every bundled table, display names
    /// localized through `locale`.
    pub fn with_builtin_tables(locale: &dyn LocaleProvider) -> Result<Self> {
        let mut registry = Self::new();
        builtins::register_builtin_tables(&mut registry, locale)?;
        Ok(registry)
    }

    /// Register a table, replacing any previous table with the same file
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`BrailleTableError::InvalidDescriptor`] when the descriptor
    /// supports neither output nor input. Descriptor fields are public, so
    /// the capability invariant is checked again here.
    pub fn register(&mut self, table: TableDescriptor) -> Result<()> {
        if !table.output && !table.input {
            return Err(BrailleTableError::InvalidDescriptor {
                file_name: table.file_name,
            });
        }
        self.tables.insert(table.file_name.clone(), table);
        Ok(())
    }

    /// Look up a table by file name.
    ///
    /// # Errors
    ///
    /// Returns [`BrailleTableError::TableNotFound`] when no table is
    /// registered under `file_name`.
    pub fn get(&self, file_name: &str) -> Result<&TableDescriptor> {
        self.tables
            .get(file_name)
            .ok_or_else(|| BrailleTableError::TableNotFound {
                file_name: file_name.to_string(),
            })
    }

    /// The table to fall back to when configuration references a missing
    /// or invalid table.
    ///
    /// # Errors
    ///
    /// Returns [`BrailleTableError::TableNotFound`] when the fallback table
    /// itself is not registered, e.g. on an empty registry.
    pub fn fallback_table(&self) -> Result<&TableDescriptor> {
        self.get(FALLBACK_TABLE_NAME)
    }

    /// True if a table is registered under `file_name`.
    pub fn contains(&self, file_name: &str) -> bool {
        self.tables.contains_key(file_name)
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True if no tables are registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// All registered tables sorted by display name, with the file name as
    /// tie breaker.
    pub fn list(&self) -> Vec<&TableDescriptor> {
        let mut tables: Vec<&TableDescriptor> = self.tables.values().collect();
        tables.sort_by(|a, b| {
            a.display_name
                .cmp(&b.display_name)
                .then_with(|| a.file_name.cmp(&b.file_name))
        });
        tables
    }

    /// Directories in which table files are looked up, highest precedence
    /// first. The bundled tables directory is always last.
    pub fn tables_dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Insert directories in front of the lookup list, keeping their
    /// relative order.
    pub fn prepend_dirs(&mut self, dirs: &[PathBuf]) {
        let mut merged = dirs.to_vec();
        merged.append(&mut self.dirs);
        self.dirs = merged;
    }

    /// Drop all registered tables and restore the lookup list to just the
    /// bundled tables directory.
    pub fn reset(&mut self) {
        self.tables.clear();
        self.dirs = vec![self.builtin_dir.clone()];
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}
