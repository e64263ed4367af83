//! Handing a build directive to the external build orchestrator.
//!
//! The orchestrator is anything implementing [`BuildOrchestrator`]. Two
//! implementations ship here:
//! - [`RubyBuildConfig`] renders an mruby `build_config.rb` script
//! - [`PlanRecorder`] records the calls as a JSON build plan

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::configurator::BuildDirective;
use crate::core::errors::ParseError;
use crate::core::flags::Define;
use crate::core::platform::Platform;
use crate::core::toolchain::ToolchainChoice;

mod plan;
mod ruby;

pub use plan::{BuildPlan, PlanRecorder, PlanStep};
pub use ruby::{RubyBuildConfig, DEFAULT_MRUBY_DIR};

/// Operations a build orchestrator must support.
pub trait BuildOrchestrator {
    /// Use the given compiler family.
    fn select_toolchain(&mut self, choice: ToolchainChoice);

    /// Build the runtime in debug mode.
    fn enable_debug(&mut self);

    /// Pass a preprocessor define to every compile.
    fn append_compiler_define(&mut self, define: &Define);

    /// Compile a core gem into the runtime.
    fn include_module(&mut self, gem: &str);
}

/// Output format for a rendered directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitFormat {
    /// mruby build configuration script
    #[default]
    Ruby,
    /// JSON build plan
    Json,
}

impl EmitFormat {
    /// Get the format name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmitFormat::Ruby => "ruby",
            EmitFormat::Json => "json",
        }
    }
}

impl fmt::Display for EmitFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmitFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ruby" | "rb" => Ok(EmitFormat::Ruby),
            "json" => Ok(EmitFormat::Json),
            _ => Err(ParseError::UnknownFormat(s.to_string())),
        }
    }
}

/// Options for rendering a directive.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Output format
    pub format: EmitFormat,
    /// mruby checkout, relative to the rendered script
    pub mruby_dir: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            format: EmitFormat::default(),
            mruby_dir: DEFAULT_MRUBY_DIR.to_string(),
        }
    }
}

/// Render a directive in the requested format.
pub fn render(
    directive: &BuildDirective,
    platform: &Platform,
    opts: &EmitOptions,
) -> anyhow::Result<String> {
    tracing::debug!(
        "rendering {} directive {} for {}",
        opts.format,
        directive.fingerprint(),
        platform
    );

    match opts.format {
        EmitFormat::Ruby => {
            let mut script = RubyBuildConfig::new(&opts.mruby_dir);
            directive.apply(&mut script);
            Ok(script.finish(&directive.fingerprint()))
        }
        EmitFormat::Json => {
            let mut recorder = PlanRecorder::new();
            directive.apply(&mut recorder);
            recorder
                .into_plan(directive.fingerprint(), platform.clone())
                .to_json()
                .map(|json| json + "\n")
        }
    }
}
