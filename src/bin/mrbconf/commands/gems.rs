//! `mrbconf gems` command

use anyhow::Result;

use mrbconf::ModuleSelection;

pub fn execute() -> Result<()> {
    for gem in ModuleSelection::standard().iter() {
        println!("{}", gem);
    }
    Ok(())
}
