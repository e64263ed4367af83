//! JSON build plans.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::flags::Define;
use crate::core::platform::Platform;
use crate::core::toolchain::ToolchainChoice;

use super::BuildOrchestrator;

/// A single orchestrator call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PlanStep {
    SelectToolchain { toolchain: ToolchainChoice },
    EnableDebug,
    AppendCompilerDefine { define: Define, flag: String },
    IncludeModule { gem: String },
}

/// A recorded directive, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub fingerprint: String,
    pub platform: Platform,
    pub steps: Vec<PlanStep>,
}

impl BuildPlan {
    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize build plan")
    }
}

/// Orchestrator that records every call as a [`PlanStep`].
#[derive(Debug, Clone, Default)]
pub struct PlanRecorder {
    steps: Vec<PlanStep>,
}

impl PlanRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        PlanRecorder::default()
    }

    /// Wrap the recorded steps into a plan.
    pub fn into_plan(self, fingerprint: String, platform: Platform) -> BuildPlan {
        BuildPlan {
            fingerprint,
            platform,
            steps: self.steps,
        }
    }
}

impl BuildOrchestrator for PlanRecorder {
    fn select_toolchain(&mut self, choice: ToolchainChoice) {
        self.steps.push(PlanStep::SelectToolchain { toolchain: choice });
    }

    fn enable_debug(&mut self) {
        self.steps.push(PlanStep::EnableDebug);
    }

    fn append_compiler_define(&mut self, define: &Define) {
        self.steps.push(PlanStep::AppendCompilerDefine {
            define: define.clone(),
            flag: define.to_flag(),
        });
    }

    fn include_module(&mut self, gem: &str) {
        self.steps.push(PlanStep::IncludeModule {
            gem: gem.to_string(),
        });
    }
}
