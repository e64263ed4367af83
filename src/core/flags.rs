//! Preprocessor defines and build flags.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Makes mruby's `String` class encoding-aware so non-ASCII text is handled
/// per character rather than per byte.
pub const UTF8_STRING: &str = "MRB_UTF8_STRING";

static DEBUG_BUILD_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)debug").expect("valid build type pattern"));

/// A preprocessor flag define, passed as `-DNAME`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Define(String);

impl Define {
    /// Create a flag define.
    pub fn flag(name: impl Into<String>) -> Self {
        Define(name.into())
    }

    /// Convert to compiler flag format.
    pub fn to_flag(&self) -> String {
        format!("-D{}", self.0)
    }
}

impl fmt::Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compiler flags for the runtime build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFlags {
    /// Preprocessor defines passed to every compile
    pub defines: Vec<Define>,
    /// Whether the runtime is built in debug mode
    pub debug: bool,
}

impl BuildFlags {
    /// The fixed define set, with the given debug mode.
    pub fn new(debug: bool) -> Self {
        BuildFlags {
            defines: vec![Define::flag(UTF8_STRING)],
            debug,
        }
    }

    /// All defines as `-D` compiler flags.
    pub fn cflags(&self) -> Vec<String> {
        self.defines.iter().map(Define::to_flag).collect()
    }
}

/// Whether a build-type value asks for a debug build.
///
/// Any value containing `debug` in any case qualifies: `Debug` and
/// `debugging-extra` do, and so does `nodebug`. `RelWithDebInfo` does not.
pub fn is_debug_build_type(value: &str) -> bool {
    DEBUG_BUILD_TYPE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_to_flag() {
        let define = Define::flag(UTF8_STRING);
        assert_eq!(define.to_flag(), "-DMRB_UTF8_STRING");
        assert_eq!(define.to_string(), "MRB_UTF8_STRING");
    }

    #[test]
    fn test_build_flags_always_utf8() {
        for debug in [false, true] {
            let flags = BuildFlags::new(debug);
            assert_eq!(flags.defines, vec![Define::flag(UTF8_STRING)]);
            assert_eq!(flags.cflags(), vec!["-DMRB_UTF8_STRING".to_string()]);
            assert_eq!(flags.debug, debug);
        }
    }

    #[test]
    fn test_debug_build_types() {
        for value in ["Debug", "DEBUG", "debug", "xdebugging", "nodebug", "debugging-extra"] {
            assert!(is_debug_build_type(value), "{} should be debug", value);
        }
    }

    #[test]
    fn test_non_debug_build_types() {
        for value in ["Release", "RelWithDebInfo", "MinSizeRel", "", "deb ug"] {
            assert!(!is_debug_build_type(value), "{} should not be debug", value);
        }
    }
}
