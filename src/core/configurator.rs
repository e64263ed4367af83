//! Build directive computation.
//!
//! [`compute_directive`] turns a platform identifier and an environment
//! snapshot into a [`BuildDirective`]: the toolchain, debug mode, compiler
//! defines and gem selection the orchestrator should build the runtime
//! with. Every input maps to some directive; malformed or missing values
//! fall back to a release build with GCC.

use serde::Serialize;

use crate::core::env::{Environment, BUILD_TYPE_VAR};
use crate::core::flags::{is_debug_build_type, BuildFlags};
use crate::core::gems::ModuleSelection;
use crate::core::platform::Platform;
use crate::core::toolchain::ToolchainChoice;
use crate::emit::BuildOrchestrator;
use crate::util::hash::Fingerprint;

/// Everything the orchestrator needs to build the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDirective {
    /// Compiler family
    pub toolchain: ToolchainChoice,
    /// Defines and debug mode
    pub flags: BuildFlags,
    /// Core gems to compile in
    pub modules: ModuleSelection,
}

impl BuildDirective {
    /// Whether the runtime is built in debug mode.
    pub fn is_debug(&self) -> bool {
        self.flags.debug
    }

    /// Drive an orchestrator with this directive.
    ///
    /// Calls `select_toolchain` once, `enable_debug` only for debug builds,
    /// then one `append_compiler_define` per define and one
    /// `include_module` per gem, in that order.
    pub fn apply(&self, orchestrator: &mut dyn BuildOrchestrator) {
        orchestrator.select_toolchain(self.toolchain);

        if self.flags.debug {
            orchestrator.enable_debug();
        }

        for define in &self.flags.defines {
            orchestrator.append_compiler_define(define);
        }

        for gem in self.modules.iter() {
            orchestrator.include_module(gem);
        }
    }

    /// Compute a short, stable cache key for this directive.
    ///
    /// Gem order does not affect the result.
    pub fn fingerprint(&self) -> String {
        let mut fp = Fingerprint::new();

        fp.update_str(self.toolchain.as_str())
            .update_bool(self.flags.debug);

        let defines: Vec<String> = self.flags.defines.iter().map(|d| d.to_string()).collect();
        fp.update_unordered(defines.iter().map(String::as_str))
            .update_unordered(self.modules.iter());

        fp.finish_short()
    }
}

/// Computes build directives.
///
/// The only setting is the name of the environment variable holding the
/// build type, which defaults to [`BUILD_TYPE_VAR`].
#[derive(Debug, Clone)]
pub struct BuildConfigurator {
    build_type_var: String,
}

impl BuildConfigurator {
    /// A configurator reading [`BUILD_TYPE_VAR`].
    pub fn new() -> Self {
        BuildConfigurator {
            build_type_var: BUILD_TYPE_VAR.to_string(),
        }
    }

    /// Read the build type from a different variable.
    pub fn with_build_type_var(mut self, name: impl Into<String>) -> Self {
        self.build_type_var = name.into();
        self
    }

    /// Name of the build-type variable this configurator reads.
    pub fn build_type_var(&self) -> &str {
        &self.build_type_var
    }

    /// Compute the directive for a platform and environment.
    pub fn compute(&self, platform: &Platform, env: &Environment) -> BuildDirective {
        let toolchain = ToolchainChoice::for_platform(platform);
        tracing::debug!("platform `{}` selects toolchain {}", platform, toolchain);

        let build_type = env.get(&self.build_type_var);
        let is_debug = build_type.is_some_and(is_debug_build_type);
        let mode = if is_debug { "debug" } else { "release" };
        match build_type {
            Some(value) => tracing::debug!(
                "{}={} selects {} mode",
                self.build_type_var,
                value,
                mode
            ),
            None => tracing::debug!("{} not set, using release mode", self.build_type_var),
        }

        BuildDirective {
            toolchain,
            flags: BuildFlags::new(is_debug),
            modules: ModuleSelection::standard(),
        }
    }
}

impl Default for BuildConfigurator {
    fn default() -> Self {
        BuildConfigurator::new()
    }
}

/// Compute the directive for a platform string and environment, reading
/// the build type from [`BUILD_TYPE_VAR`].
pub fn compute_directive(platform: &str, env: &Environment) -> BuildDirective {
    BuildConfigurator::new().compute(&Platform::new(platform), env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flags::{Define, UTF8_STRING};

    fn release_env() -> Environment {
        Environment::new().with(BUILD_TYPE_VAR, "Release")
    }

    #[test]
    fn test_linux_defaults() {
        let d = compute_directive("linux-gnu", &Environment::new());
        assert_eq!(d.toolchain, ToolchainChoice::Gcc);
        assert!(!d.is_debug());
        assert_eq!(d.flags.defines, vec![Define::flag(UTF8_STRING)]);
        assert_eq!(d.modules, ModuleSelection::standard());
    }

    #[test]
    fn test_freebsd_release() {
        let d = compute_directive("freebsd13", &release_env());
        assert_eq!(d.toolchain, ToolchainChoice::Clang);
        assert!(!d.is_debug());
    }

    #[test]
    fn test_openbsd_debug() {
        let env = Environment::new().with(BUILD_TYPE_VAR, "Debug");
        let d = compute_directive("openbsd7", &env);
        assert_eq!(d.toolchain, ToolchainChoice::Clang);
        assert!(d.is_debug());
    }

    #[test]
    fn test_windows_loose_debug_match() {
        let env = Environment::new().with(BUILD_TYPE_VAR, "debugging-extra");
        let d = compute_directive("windows", &env);
        assert_eq!(d.toolchain, ToolchainChoice::Gcc);
        assert!(d.is_debug());
    }

    #[test]
    fn test_unrelated_vars_ignored() {
        let env = Environment::new()
            .with("CMAKE_BUILD_TYPE", "Debug")
            .with("DEBUG", "1");
        assert!(!compute_directive("linux", &env).is_debug());
    }

    #[test]
    fn test_defines_and_modules_invariant() {
        let platforms = ["linux-gnu", "freebsd13", "OPENBSD", "", "\u{1F980}"];
        let envs = [
            Environment::new(),
            release_env(),
            Environment::new().with(BUILD_TYPE_VAR, "DEBUG"),
        ];

        for platform in platforms {
            for env in &envs {
                let d = compute_directive(platform, env);
                assert_eq!(d.flags.defines, vec![Define::flag(UTF8_STRING)]);
                assert_eq!(d.modules, ModuleSelection::standard());
                assert!(d.modules.is_library_only());
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let env = Environment::new().with(BUILD_TYPE_VAR, "Debug");
        let a = compute_directive("amd64-freebsd", &env);
        let b = compute_directive("amd64-freebsd", &env);
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_custom_build_type_var() {
        let configurator = BuildConfigurator::new().with_build_type_var("MRB_BUILD");
        let env = Environment::new()
            .with("MRB_BUILD", "debug")
            .with(BUILD_TYPE_VAR, "Release");
        let d = configurator.compute(&Platform::new("linux"), &env);
        assert!(d.is_debug());
        assert_eq!(configurator.build_type_var(), "MRB_BUILD");
    }

    #[test]
    fn test_fingerprint_tracks_debug_and_toolchain() {
        let debug_env = Environment::new().with(BUILD_TYPE_VAR, "Debug");
        let base = compute_directive("linux", &Environment::new()).fingerprint();
        assert_ne!(base, compute_directive("linux", &debug_env).fingerprint());
        assert_ne!(base, compute_directive("freebsd", &Environment::new()).fingerprint());
    }

    #[test]
    fn test_compute_with_debug_logging_enabled() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let env = Environment::new().with(BUILD_TYPE_VAR, "Debug");
            let d = compute_directive("openbsd7", &env);
            assert!(d.is_debug());
            assert_eq!(d.toolchain, ToolchainChoice::Clang);

            let d = compute_directive("linux", &release_env());
            assert!(!d.is_debug());

            assert!(!compute_directive("linux", &Environment::new()).is_debug());
        });
    }
}
