//! Toolchain family selection.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::platform::Platform;

/// The compiler family used to build the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolchainChoice {
    /// GCC (GNU Compiler Collection) or a compatible driver
    Gcc,
    /// Clang/LLVM
    Clang,
}

impl ToolchainChoice {
    /// Pick the toolchain for a platform.
    ///
    /// The BSD family builds with Clang; everything else, including
    /// platforms we don't recognize, builds with GCC.
    pub fn for_platform(platform: &Platform) -> Self {
        if platform.is_bsd() {
            ToolchainChoice::Clang
        } else {
            ToolchainChoice::Gcc
        }
    }

    /// Get the toolchain name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolchainChoice::Gcc => "gcc",
            ToolchainChoice::Clang => "clang",
        }
    }

    /// Executable names to look for, most specific first.
    pub fn compiler_candidates(&self) -> &'static [&'static str] {
        match self {
            ToolchainChoice::Gcc => &["gcc", "cc"],
            ToolchainChoice::Clang => &["clang", "cc"],
        }
    }

    /// Find a compiler for this family on `PATH`.
    pub fn locate(&self) -> Option<PathBuf> {
        self.compiler_candidates()
            .iter()
            .find_map(|name| which::which(name).ok())
    }
}

impl fmt::Display for ToolchainChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bsd_uses_clang() {
        assert_eq!(
            ToolchainChoice::for_platform(&Platform::new("freebsd13")),
            ToolchainChoice::Clang
        );
        assert_eq!(
            ToolchainChoice::for_platform(&Platform::new("OpenBSD")),
            ToolchainChoice::Clang
        );
    }

    #[test]
    fn test_everything_else_uses_gcc() {
        assert_eq!(
            ToolchainChoice::for_platform(&Platform::new("linux-gnu")),
            ToolchainChoice::Gcc
        );
        assert_eq!(
            ToolchainChoice::for_platform(&Platform::new("")),
            ToolchainChoice::Gcc
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ToolchainChoice::Gcc.to_string(), "gcc");
        assert_eq!(ToolchainChoice::Clang.to_string(), "clang");
    }

    #[test]
    fn test_candidates_start_with_family_name() {
        assert_eq!(ToolchainChoice::Gcc.compiler_candidates()[0], "gcc");
        assert_eq!(ToolchainChoice::Clang.compiler_candidates()[0], "clang");
    }
}
