//! Discovery of custom table directories.

use std::path::PathBuf;

use tracing::debug;

use crate::environment::TablesEnvironment;

/// Subdirectory searched for custom table manifests under the scratchpad
/// and under each add-on root.
pub const CUSTOM_TABLES_SUBDIR: &str = "brailleTables";

/// Compute the custom table directories for the given environment.
///
/// Candidates come from the scratchpad first (only outside secure mode and
/// only when enabled), then from every add-on root in enumeration order,
/// each with [`CUSTOM_TABLES_SUBDIR`] appended. Directories that do not
/// exist are dropped, so the result holds only directories that can
/// actually be read, highest precedence first.
pub fn discover_custom_table_dirs(env: &dyn TablesEnvironment) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if env.secure_mode() {
        debug!("secure mode, scratchpad tables disabled");
    } else if env.scratchpad_enabled() {
        if let Some(scratchpad) = env.scratchpad_dir() {
            candidates.push(scratchpad.join(CUSTOM_TABLES_SUBDIR));
        }
    }
    for addon_root in env.addon_dirs() {
        candidates.push(addon_root.join(CUSTOM_TABLES_SUBDIR));
    }
    candidates
        .into_iter()
        .filter(|dir| {
            let exists = dir.is_dir();
            if !exists {
                debug!("skipping missing custom table directory: {}", dir.display());
            }
            exists
        })
        .collect()
}
