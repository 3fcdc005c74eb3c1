//! Registry of braille translation table metadata.
//!
//! This crate tracks the braille translation tables available to a screen
//! reader: the tables bundled with the translation engine plus custom
//! tables contributed by add-ons or by the user's scratchpad directory,
//! described through small INI manifests.
//!
//! # Overview
//!
//! The crate provides four main components:
//!
//! - [`TableDescriptor`] - Metadata for one table (file name, display name,
//!   capability flags)
//! - [`TableRegistry`] - The file-name-keyed registry plus the ordered list
//!   of directories in which table files are looked up
//! - [`CustomTableLoader`] - Discovers custom table directories and applies
//!   their manifests with scratchpad-over-add-on precedence
//! - [`TablesEnvironment`] / [`LocaleProvider`] - Traits through which the
//!   embedding application supplies directories and localization
//!
//! # Example
//!
//! ```no_run
//! use braille_tables::{
//!     CustomTableLoader, StaticEnvironment, StaticLocale, TableRegistry,
//! };
//!
//! let locale = StaticLocale::new("de");
//! let mut registry = TableRegistry::with_builtin_tables(&locale)?;
//!
//! let env = StaticEnvironment {
//!     addon_dirs: vec!["addons/my-addon".into()],
//!     ..Default::default()
//! };
//! let report = CustomTableLoader::new(&env, &locale).load_all(&mut registry);
//! println!(
//!     "{} tables from {} manifests",
//!     report.tables, report.manifests
//! );
//!
//! for table in registry.list() {
//!     println!("{}: {}", table.file_name, table.display_name);
//! }
//! # Ok::<(), braille_tables::BrailleTableError>(())
//! ```

mod builtins;
mod discovery;
mod display_name;
mod environment;
mod error;
mod loader;
mod manifest;
mod registry;
mod table;

// Re-export main types
pub use builtins::register_builtin_tables;
pub use discovery::{discover_custom_table_dirs, CUSTOM_TABLES_SUBDIR};
pub use display_name::{resolve_display_name, DisplayName};
pub use environment::{LocaleProvider, StaticEnvironment, StaticLocale, TablesEnvironment};
pub use error::{BrailleTableError, Result};
pub use loader::{CustomTableLoader, LoadFailure, LoadReport};
pub use manifest::{parse_manifest, RawTableConfig, TableManifest, MANIFEST_EXTENSION};
pub use registry::{
    renamed_table, TableRegistry, FALLBACK_TABLE_NAME, RENAMED_TABLES, TABLES_DIR,
};
pub use table::TableDescriptor;
