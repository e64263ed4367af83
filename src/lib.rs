//! mrbconf - build configuration for an embedded mruby runtime
//!
//! This crate computes which toolchain, compiler defines, debug mode and
//! core gems the runtime is built with, and hands the result to an
//! external build orchestrator, either through the [`emit::BuildOrchestrator`]
//! trait or as a rendered `build_config.rb` / JSON plan.

pub mod core;
pub mod emit;
pub mod util;

pub use core::{
    compute_directive, BuildConfigurator, BuildDirective, BuildFlags, Define, Environment,
    ModuleSelection, Platform, ToolchainChoice,
};
pub use emit::{BuildOrchestrator, EmitFormat};
