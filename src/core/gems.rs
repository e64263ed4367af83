//! The set of core gems compiled into the runtime.
//!
//! Only library gems are selected. The `mruby` and `mirb` executables and
//! the rarer parts of the standard collection are left out, since the
//! runtime is embedded rather than run standalone.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Core gems included in every build, in rendering order.
///
/// Seventeen entries, mirroring `mruby_tsc_build_config.rb` one for one.
pub const DEFAULT_GEMS: &[&str] = &[
    "mruby-print",
    "mruby-sprintf",
    "mruby-math",
    "mruby-time",
    "mruby-struct",
    "mruby-sleep",
    "mruby-enum-ext",
    "mruby-string-ext",
    "mruby-numeric-ext",
    "mruby-array-ext",
    "mruby-hash-ext",
    "mruby-range-ext",
    "mruby-proc-ext",
    "mruby-symbol-ext",
    "mruby-random",
    "mruby-object-ext",
    "mruby-kernel-ext",
];

/// Gem name prefixes that produce executables instead of libraries.
const EXECUTABLE_GEM_PREFIXES: &[&str] = &["mruby-bin-", "mirb"];

/// An ordered, immutable selection of core gems.
///
/// Equality ignores order: two selections are equal when they name the
/// same gems.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleSelection {
    gems: Vec<String>,
}

impl ModuleSelection {
    /// The fixed default selection.
    pub fn standard() -> Self {
        ModuleSelection {
            gems: DEFAULT_GEMS.iter().map(|g| g.to_string()).collect(),
        }
    }

    /// Iterate over gem names in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.gems.iter().map(String::as_str)
    }

    /// Check that no selected gem builds a standalone executable.
    pub fn is_library_only(&self) -> bool {
        self.gems.iter().all(|g| !is_executable_gem(g))
    }

    fn as_set(&self) -> BTreeSet<&str> {
        self.iter().collect()
    }
}

impl PartialEq for ModuleSelection {
    fn eq(&self, other: &Self) -> bool {
        self.as_set() == other.as_set()
    }
}

impl Eq for ModuleSelection {}

impl Default for ModuleSelection {
    fn default() -> Self {
        ModuleSelection::standard()
    }
}

/// Whether a gem name denotes an executable (`mruby-bin-*`, `mirb`).
pub fn is_executable_gem(name: &str) -> bool {
    EXECUTABLE_GEM_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}
