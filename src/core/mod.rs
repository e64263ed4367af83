//! Core data structures for mrbconf.
//!
//! This module contains the types that make up a build directive:
//! - Platform identification and toolchain selection
//! - Compiler defines and debug mode
//! - The core gem selection
//! - The configurator tying them together

pub mod configurator;
pub mod env;
pub mod errors;
pub mod flags;
pub mod gems;
pub mod platform;
pub mod toolchain;

pub use configurator::{compute_directive, BuildConfigurator, BuildDirective};
pub use env::{Environment, BUILD_TYPE_VAR};
pub use errors::ParseError;
pub use flags::{BuildFlags, Define, UTF8_STRING};
pub use gems::{ModuleSelection, DEFAULT_GEMS};
pub use platform::Platform;
pub use toolchain::ToolchainChoice;
