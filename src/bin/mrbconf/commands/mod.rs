//! Command implementations

pub mod completions;
pub mod emit;
pub mod gems;
pub mod show;

use anyhow::Result;

use crate::cli::DirectiveArgs;
use mrbconf::util::config::load_project_config;
use mrbconf::util::Config;
use mrbconf::{BuildDirective, Environment, Platform};

/// A computed directive together with the inputs that produced it.
pub struct Resolved {
    pub config: Config,
    pub platform: Platform,
    pub build_type_var: String,
    /// Build type the directive was computed from, after overrides
    pub build_type: Option<String>,
    pub directive: BuildDirective,
}

/// Load config and compute the directive, applying command-line overrides.
pub fn resolve_directive(args: &DirectiveArgs) -> Result<Resolved> {
    let cwd = std::env::current_dir()?;
    let config = load_project_config(&cwd);

    let platform = match &args.platform {
        Some(p) => Platform::new(p.as_str()),
        None => config.platform(),
    };

    let configurator = config.configurator();
    let build_type_var = configurator.build_type_var().to_string();

    let mut env = Environment::capture();
    if let Some(build_type) = &args.build_type {
        env = env.with(build_type_var.as_str(), build_type.as_str());
    }

    let directive = configurator.compute(&platform, &env);
    let build_type = env.get(&build_type_var).map(str::to_string);

    Ok(Resolved {
        config,
        platform,
        build_type_var,
        build_type,
        directive,
    })
}
