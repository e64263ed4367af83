//! `mrbconf emit` command

use anyhow::Result;

use super::resolve_directive;
use crate::cli::EmitArgs;
use mrbconf::emit::{render, EmitOptions, DEFAULT_MRUBY_DIR};
use mrbconf::util::fs::write_string;

pub fn execute(args: EmitArgs) -> Result<()> {
    let resolved = resolve_directive(&args.directive)?;
    let config = &resolved.config;

    // Command line wins over config
    let format = match args.format {
        Some(format) => format,
        None => config.format()?.unwrap_or_default(),
    };
    let mruby_dir = args
        .mruby_dir
        .or_else(|| config.emit.mruby_dir.clone())
        .unwrap_or_else(|| DEFAULT_MRUBY_DIR.to_string());
    let output = args.output.or_else(|| config.emit.output.clone());

    let opts = EmitOptions { format, mruby_dir };
    let rendered = render(&resolved.directive, &resolved.platform, &opts)?;

    match output {
        Some(path) => {
            write_string(&path, &rendered)?;
            tracing::info!(
                "Wrote {} directive {} to {}",
                format,
                resolved.directive.fingerprint(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
