//! Environment variables consulted by the configurator.

use std::collections::BTreeMap;

/// Build-type variable set by the surrounding CMake build.
pub const BUILD_TYPE_VAR: &str = "TSC_BUILD_TYPE";

/// A snapshot of environment variables.
///
/// The configurator never reads the process environment directly; callers
/// capture it (or build one by hand) and pass it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// An empty environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn capture() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Set a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Environment {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let env = Environment::new().with(BUILD_TYPE_VAR, "Debug");
        assert_eq!(env.get(BUILD_TYPE_VAR), Some("Debug"));
        assert_eq!(env.get("CC"), None);
    }

    #[test]
    fn test_from_iter() {
        let env: Environment = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.get("A"), Some("1"));
        assert_eq!(env.get("B"), Some("2"));
    }

    #[test]
    fn test_capture_sees_process_env() {
        // PATH is present in any sane test environment.
        if std::env::var("PATH").is_ok() {
            assert!(Environment::capture().get("PATH").is_some());
        }
    }
}
