//! `mrbconf show` command

use anyhow::Result;

use super::resolve_directive;
use crate::cli::ShowArgs;

pub fn execute(args: ShowArgs) -> Result<()> {
    let resolved = resolve_directive(&args.directive)?;
    let directive = &resolved.directive;

    println!("Directive: {}", directive.fingerprint());
    println!();
    println!("  Platform:  {}", resolved.platform);

    // Toolchain
    println!("  Toolchain: {}", directive.toolchain);
    match directive.toolchain.locate() {
        Some(cc) => println!("             {}", cc.display()),
        None => println!(
            "             not found (looked for {})",
            directive.toolchain.compiler_candidates().join(", ")
        ),
    }

    println!(
        "  Mode:      {}",
        if directive.is_debug() { "debug" } else { "release" }
    );
    println!("  Defines:   {}", directive.flags.cflags().join(" "));

    println!();
    println!("Gems ({}):", directive.modules.iter().count());
    for gem in directive.modules.iter() {
        println!("  {}", gem);
    }

    println!();

    // Environment variables
    println!("Environment:");
    match &resolved.build_type {
        Some(value) => println!("  {}={}", resolved.build_type_var, value),
        None => println!("  {} not set", resolved.build_type_var),
    }

    Ok(())
}
