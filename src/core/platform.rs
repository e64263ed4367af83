//! Host platform identification.
//!
//! A platform is identified by a free-form string in the style of a Ruby
//! platform descriptor (`x86_64-linux`, `amd64-freebsd13`, `x64-mingw32`).
//! Nothing about the string is validated: any value, including an empty
//! one, is a usable platform that simply falls into the default family.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static BSD_FAMILY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)freebsd|openbsd").expect("valid BSD pattern"));

/// A host platform identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Platform {
    id: String,
}

impl Platform {
    /// Wrap a platform identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Platform { id: id.into() }
    }

    /// Detect the host platform.
    ///
    /// Produces `<arch>-<os>`, with the OS spelled the way Ruby spells it
    /// (`darwin` rather than `macos`, `mingw32` for Windows).
    pub fn host() -> Self {
        let arch = std::env::consts::ARCH;
        let os = match std::env::consts::OS {
            "macos" => "darwin",
            "windows" => "mingw32",
            other => other,
        };

        Platform::new(format!("{}-{}", arch, os))
    }

    /// Get the identifier string.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Whether this platform belongs to the BSD family (FreeBSD or OpenBSD).
    ///
    /// Case-insensitive substring match, so `FreeBSD`, `amd64-freebsd13`
    /// and `OPENBSD7` all qualify.
    pub fn is_bsd(&self) -> bool {
        BSD_FAMILY.is_match(&self.id)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
