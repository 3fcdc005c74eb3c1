//! Loading of custom table manifests into a registry.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};
use walkdir::WalkDir;

use crate::discovery::discover_custom_table_dirs;
use crate::display_name::resolve_display_name;
use crate::environment::{LocaleProvider, TablesEnvironment};
use crate::error::{BrailleTableError, Result};
use crate::manifest::{parse_manifest, MANIFEST_EXTENSION};
use crate::registry::TableRegistry;
use crate::table::TableDescriptor;

/// A manifest file the loader had to skip, with the reason.
#[derive(Debug)]
pub struct LoadFailure {
    /// Path of the skipped manifest.
    pub path: PathBuf,
    /// What went wrong. Already logged when the failure was recorded.
    pub error: BrailleTableError,
}

/// Outcome of one load pass over the custom table directories.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Custom directories that were found, highest precedence first.
    pub directories: Vec<PathBuf>,
    /// Manifest files applied in full.
    pub manifests: usize,
    /// Tables registered from manifests applied in full.
    pub tables: usize,
    /// Manifest files skipped because of an error.
    pub failures: Vec<LoadFailure>,
}

/// Loads custom braille tables from the scratchpad and add-on directories.
///
/// Directories are discovered in precedence order, scratchpad first.
/// Loading walks them in reverse so that a table defined in a higher
/// precedence directory is registered last and overwrites lower precedence
/// definitions of the same file name.
///
/// One broken manifest never stops the load: the file is logged, recorded
/// in the report, and skipped, and all remaining manifests are still
/// applied.
pub struct CustomTableLoader<'a> {
    env: &'a dyn TablesEnvironment,
    locale: &'a dyn LocaleProvider,
}

impl<'a> CustomTableLoader<'a> {
    /// Create a loader for the given environment and locale.
    pub fn new(env: &'a dyn TablesEnvironment, locale: &'a dyn LocaleProvider) -> Self {
        Self { env, locale }
    }

    /// Discover the custom table directories, prepend them to the
    /// registry's lookup list, and apply every manifest found in them.
    pub fn load_all(&self, registry: &mut TableRegistry) -> LoadReport {
        let directories = discover_custom_table_dirs(self.env);
        registry.prepend_dirs(&directories);
        let mut report = LoadReport::default();
        // Reverse order, so higher precedence directories are applied last
        // and win conflicts.
        for dir in directories.iter().rev() {
            self.load_directory(registry, dir, &mut report);
        }
        report.directories = directories;
        report
    }

    fn load_directory(&self, registry: &mut TableRegistry, dir: &Path, report: &mut LoadReport) {
        // The directory existed at discovery time but may be gone by now.
        if !dir.is_dir() {
            error!("custom table directory not found: {}", dir.display());
            return;
        }
        debug!("loading custom table manifests from: {}", dir.display());
        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok());
        for entry in entries {
            // is_file() on the path follows symlinks, so a linked manifest
            // still loads.
            if !entry.path().is_file() || !is_manifest(entry.path()) {
                continue;
            }
            let path = entry.into_path();
            match self.apply_manifest(registry, &path) {
                Ok(count) => {
                    report.manifests += 1;
                    report.tables += count;
                }
                Err(err) => {
                    error!("skipping custom table manifest {}: {}", path.display(), err);
                    report.failures.push(LoadFailure { path, error: err });
                }
            }
        }
    }

    /// Apply one manifest file. Entries are registered as they are read,
    /// so an entry that fails leaves the entries before it registered.
    fn apply_manifest(&self, registry: &mut TableRegistry, path: &Path) -> Result<usize> {
        let bytes = fs::read(path).map_err(|source| BrailleTableError::manifest_read(path, source))?;
        let manifest = parse_manifest(&bytes)?;
        let mut registered = 0;
        for (file_name, config) in &manifest.entries {
            let display_name = resolve_display_name(file_name, &config.display_name, self.locale)?;
            registry.register(TableDescriptor::new(
                file_name.clone(),
                display_name,
                config.contracted,
                config.output,
                config.input,
            )?)?;
            registered += 1;
        }
        Ok(registered)
    }
}

fn is_manifest(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == MANIFEST_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::CUSTOM_TABLES_SUBDIR;
    use crate::environment::{StaticEnvironment, StaticLocale};
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(addon_root: &Path, name: &str, content: &str) {
        let dir = addon_root.join(CUSTOM_TABLES_SUBDIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    fn addon_root(root: &TempDir, name: &str) -> PathBuf {
        let dir = root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn load(env: &StaticEnvironment, registry: &mut TableRegistry) -> LoadReport {
        let locale = StaticLocale::default();
        CustomTableLoader::new(env, &locale).load_all(registry)
    }

    #[test]
    fn test_loads_tables_from_addon() {
        let root = TempDir::new().unwrap();
        let addon = addon_root(&root, "addon");
        write_manifest(
            &addon,
            "tables.ini",
            "[custom.ctb]\ncontracted = yes\ndisplayName = Custom table\n",
        );
        let env = StaticEnvironment {
            addon_dirs: vec![addon],
            ..Default::default()
        };
        let mut registry = TableRegistry::new();
        let report = load(&env, &mut registry);

        assert_eq!(report.manifests, 1);
        assert_eq!(report.tables, 1);
        assert!(report.failures.is_empty());
        let table = registry.get("custom.ctb").unwrap();
        assert!(table.contracted);
        assert_eq!(table.display_name, "Custom table");
    }

    #[test]
    fn test_scratchpad_overrides_addon() {
        let root = TempDir::new().unwrap();
        let scratchpad = addon_root(&root, "scratchpad");
        let addon = addon_root(&root, "addon");
        write_manifest(
            &scratchpad,
            "tables.ini",
            "[shared.ctb]\ndisplayName = From scratchpad\n",
        );
        write_manifest(
            &addon,
            "tables.ini",
            "[shared.ctb]\ndisplayName = From addon\n",
        );
        let env = StaticEnvironment {
            scratchpad_enabled: true,
            scratchpad_dir: Some(scratchpad),
            addon_dirs: vec![addon],
            ..Default::default()
        };
        let mut registry = TableRegistry::new();
        load(&env, &mut registry);

        assert_eq!(
            registry.get("shared.ctb").unwrap().display_name,
            "From scratchpad"
        );
    }

    #[test]
    fn test_earlier_addon_overrides_later() {
        let root = TempDir::new().unwrap();
        let first = addon_root(&root, "first");
        let second = addon_root(&root, "second");
        write_manifest(
            &first,
            "tables.ini",
            "[shared.ctb]\ndisplayName = From first\n",
        );
        write_manifest(
            &second,
            "tables.ini",
            "[shared.ctb]\ndisplayName = From second\n",
        );
        let env = StaticEnvironment {
            addon_dirs: vec![first, second],
            ..Default::default()
        };
        let mut registry = TableRegistry::new();
        load(&env, &mut registry);

        assert_eq!(
            registry.get("shared.ctb").unwrap().display_name,
            "From first"
        );
    }

    #[test]
    fn test_broken_manifest_does_not_stop_loading() {
        let root = TempDir::new().unwrap();
        let addon = addon_root(&root, "addon");
        write_manifest(&addon, "broken.ini", "[oops.ctb\ncontracted = yes\n");
        write_manifest(&addon, "valid.ini", "[good.ctb]\n");
        let env = StaticEnvironment {
            addon_dirs: vec![addon],
            ..Default::default()
        };
        let mut registry = TableRegistry::new();
        let report = load(&env, &mut registry);

        assert_eq!(report.manifests, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].path.ends_with("broken.ini"));
        assert!(matches!(
            report.failures[0].error,
            BrailleTableError::ManifestParse { .. }
        ));
        assert!(registry.contains("good.ctb"));
        assert!(!registry.contains("oops.ctb"));
    }

    #[test]
    fn test_entry_failure_keeps_earlier_entries() {
        let root = TempDir::new().unwrap();
        let addon = addon_root(&root, "addon");
        write_manifest(
            &addon,
            "tables.ini",
            "[ok.ctb]\ndisplayName = Fine\n\n[bad.ctb]\ndisplayName = one, two\n",
        );
        let env = StaticEnvironment {
            addon_dirs: vec![addon],
            ..Default::default()
        };
        let mut registry = TableRegistry::new();
        let report = load(&env, &mut registry);

        assert_eq!(report.manifests, 0);
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.failures[0].error,
            BrailleTableError::InvalidDisplayName { .. }
        ));
        assert!(registry.contains("ok.ctb"));
        assert!(!registry.contains("bad.ctb"));
    }

    #[test]
    fn test_capability_conflict_is_contained() {
        let root = TempDir::new().unwrap();
        let addon = addon_root(&root, "addon");
        write_manifest(
            &addon,
            "bad.ini",
            "[useless.ctb]\noutput = no\ninput = no\n",
        );
        write_manifest(&addon, "good.ini", "[working.ctb]\n");
        let env = StaticEnvironment {
            addon_dirs: vec![addon],
            ..Default::default()
        };
        let mut registry = TableRegistry::new();
        let report = load(&env, &mut registry);

        assert!(!registry.contains("useless.ctb"));
        assert!(registry.contains("working.ctb"));
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.failures[0].error,
            BrailleTableError::InvalidDescriptor { .. }
        ));
    }

    #[test]
    fn test_non_manifest_files_ignored() {
        let root = TempDir::new().unwrap();
        let addon = addon_root(&root, "addon");
        write_manifest(&addon, "tables.ini", "[custom.ctb]\n");
        write_manifest(&addon, "readme.txt", "not a manifest");
        write_manifest(&addon, "custom.ctb", "braille table data, not ini");
        let env = StaticEnvironment {
            addon_dirs: vec![addon],
            ..Default::default()
        };
        let mut registry = TableRegistry::new();
        let report = load(&env, &mut registry);

        assert_eq!(report.manifests, 1);
        assert!(report.failures.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_uppercase_extension_is_not_a_manifest() {
        let root = TempDir::new().unwrap();
        let addon = addon_root(&root, "addon");
        write_manifest(&addon, "extra.INI", "[upper.ctb]\n");
        write_manifest(&addon, "tables.ini", "[lower.ctb]\n");
        let env = StaticEnvironment {
            addon_dirs: vec![addon],
            ..Default::default()
        };
        let mut registry = TableRegistry::new();
        let report = load(&env, &mut registry);

        assert_eq!(report.manifests, 1);
        assert!(registry.contains("lower.ctb"));
        assert!(!registry.contains("upper.ctb"));
    }

    #[test]
    fn test_nested_directories_not_scanned() {
        let root = TempDir::new().unwrap();
        let addon = addon_root(&root, "addon");
        write_manifest(&addon, "tables.ini", "[top.ctb]\n");
        let nested = addon.join(CUSTOM_TABLES_SUBDIR).join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("deep.ini"), "[deep.ctb]\n").unwrap();
        let env = StaticEnvironment {
            addon_dirs: vec![addon],
            ..Default::default()
        };
        let mut registry = TableRegistry::new();
        let report = load(&env, &mut registry);

        assert_eq!(report.manifests, 1);
        assert!(registry.contains("top.ctb"));
        assert!(!registry.contains("deep.ctb"));
    }

    #[test]
    fn test_manifests_applied_in_file_name_order() {
        let root = TempDir::new().unwrap();
        let addon = addon_root(&root, "addon");
        // Created out of order; the walk sorts by file name, so b.ini is
        // applied after a.ini and wins the conflict.
        write_manifest(&addon, "b.ini", "[shared.ctb]\ndisplayName = From b\n");
        write_manifest(&addon, "a.ini", "[shared.ctb]\ndisplayName = From a\n");
        let env = StaticEnvironment {
            addon_dirs: vec![addon],
            ..Default::default()
        };
        let mut registry = TableRegistry::new();
        let report = load(&env, &mut registry);

        assert_eq!(report.manifests, 2);
        assert_eq!(registry.get("shared.ctb").unwrap().display_name, "From b");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_manifest_is_loaded() {
        let root = TempDir::new().unwrap();
        let addon = addon_root(&root, "addon");
        let target = root.path().join("shared-tables.ini");
        fs::write(&target, "[linked.ctb]\ndisplayName = Linked table\n").unwrap();
        let dir = addon.join(CUSTOM_TABLES_SUBDIR);
        fs::create_dir_all(&dir).unwrap();
        std::os::unix::fs::symlink(&target, dir.join("tables.ini")).unwrap();
        let env = StaticEnvironment {
            addon_dirs: vec![addon],
            ..Default::default()
        };
        let mut registry = TableRegistry::new();
        let report = load(&env, &mut registry);

        assert_eq!(report.manifests, 1);
        assert_eq!(
            registry.get("linked.ctb").unwrap().display_name,
            "Linked table"
        );
    }

    #[test]
    fn test_directories_prepended_to_registry() {
        let root = TempDir::new().unwrap();
        let scratchpad = addon_root(&root, "scratchpad");
        let addon = addon_root(&root, "addon");
        write_manifest(&scratchpad, "tables.ini", "[a.ctb]\n");
        write_manifest(&addon, "tables.ini", "[b.ctb]\n");
        let env = StaticEnvironment {
            scratchpad_enabled: true,
            scratchpad_dir: Some(scratchpad.clone()),
            addon_dirs: vec![addon.clone()],
            ..Default::default()
        };
        let mut registry = TableRegistry::with_tables_dir("builtin");
        let report = load(&env, &mut registry);

        let expected = [
            scratchpad.join(CUSTOM_TABLES_SUBDIR),
            addon.join(CUSTOM_TABLES_SUBDIR),
        ];
        assert_eq!(report.directories, expected);
        assert_eq!(
            registry.tables_dirs(),
            [
                expected[0].clone(),
                expected[1].clone(),
                PathBuf::from("builtin"),
            ]
        );
    }

    #[test]
    fn test_locale_map_resolved_with_active_locale() {
        let root = TempDir::new().unwrap();
        let addon = addon_root(&root, "addon");
        write_manifest(
            &addon,
            "tables.ini",
            "[custom.ctb]\n[[displayName]]\nen = English name\nde = Deutscher Name\n",
        );
        let env = StaticEnvironment {
            addon_dirs: vec![addon],
            ..Default::default()
        };
        let locale = StaticLocale::new("de");
        let mut registry = TableRegistry::new();
        CustomTableLoader::new(&env, &locale).load_all(&mut registry);

        assert_eq!(
            registry.get("custom.ctb").unwrap().display_name,
            "Deutscher Name"
        );
    }

    #[test]
    fn test_reset_then_reload() {
        let root = TempDir::new().unwrap();
        let addon = addon_root(&root, "addon");
        write_manifest(&addon, "tables.ini", "[custom.ctb]\n");
        let env = StaticEnvironment {
            addon_dirs: vec![addon.clone()],
            ..Default::default()
        };
        let mut registry = TableRegistry::new();
        load(&env, &mut registry);
        registry.reset();
        assert!(registry.is_empty());
        assert_eq!(registry.tables_dirs().len(), 1);

        load(&env, &mut registry);
        assert!(registry.contains("custom.ctb"));
        assert_eq!(registry.tables_dirs().len(), 2);
    }

    #[test]
    fn test_no_custom_directories() {
        let env = StaticEnvironment::default();
        let mut registry = TableRegistry::new();
        let report = load(&env, &mut registry);
        assert!(report.directories.is_empty());
        assert_eq!(report.manifests, 0);
        assert!(registry.is_empty());
        assert_eq!(registry.tables_dirs().len(), 1);
    }
}
