//! Rendering an mruby `build_config.rb`.
//!
//! The script is what mruby's rake build expects in `MRUBY_CONFIG`. It
//! locates the mruby checkout relative to its own directory, so it can be
//! invoked from any working directory.

use std::fmt::Write as _;

use crate::core::flags::Define;
use crate::core::toolchain::ToolchainChoice;

use super::BuildOrchestrator;

/// Default location of the mruby checkout, relative to the script.
pub const DEFAULT_MRUBY_DIR: &str = "../mruby/mruby";

/// Builds an mruby build configuration script from orchestrator calls.
#[derive(Debug, Clone)]
pub struct RubyBuildConfig {
    mruby_dir: String,
    toolchain: ToolchainChoice,
    debug: bool,
    cflags: Vec<String>,
    gems: Vec<String>,
}

impl RubyBuildConfig {
    /// Start a script whose mruby checkout lives at `mruby_dir`.
    pub fn new(mruby_dir: impl Into<String>) -> Self {
        RubyBuildConfig {
            mruby_dir: mruby_dir.into(),
            toolchain: ToolchainChoice::Gcc,
            debug: false,
            cflags: Vec::new(),
            gems: Vec::new(),
        }
    }

    /// Render the script.
    pub fn finish(&self, fingerprint: &str) -> String {
        let mut out = String::new();
        self.write_script(&mut out, fingerprint)
            .expect("writing to a String cannot fail");
        out
    }

    fn write_script(&self, out: &mut String, fingerprint: &str) -> std::fmt::Result {
        writeln!(out, "# -*- coding: utf-8 -*-")?;
        writeln!(out, "# mruby build configuration generated by mrbconf.")?;
        writeln!(out, "# directive: {}", fingerprint)?;
        writeln!(out)?;
        writeln!(out, "THIS_DIR = File.expand_path(File.dirname(__FILE__))")?;

        let segments: Vec<String> = self
            .mruby_dir
            .split('/')
            .filter(|s| !s.is_empty())
            .map(ruby_string)
            .collect();
        if segments.is_empty() {
            writeln!(out, "MRUBY_DIR = THIS_DIR")?;
        } else {
            writeln!(out, "MRUBY_DIR = File.join(THIS_DIR, {})", segments.join(", "))?;
        }
        writeln!(out)?;

        writeln!(out, "MRuby::Build.new do |conf|")?;
        writeln!(out, "  toolchain :{}", self.toolchain.as_str())?;

        if self.debug {
            writeln!(out)?;
            writeln!(out, "  enable_debug")?;
        }

        if !self.cflags.is_empty() {
            let flags: Vec<String> = self.cflags.iter().map(|f| ruby_string(f)).collect();
            writeln!(out)?;
            writeln!(out, "  conf.cc do |cc|")?;
            writeln!(out, "    cc.flags += [{}]", flags.join(", "))?;
            writeln!(out, "  end")?;
        }

        if !self.gems.is_empty() {
            writeln!(out)?;
            for gem in &self.gems {
                writeln!(out, "  conf.gem :core => {}", ruby_string(gem))?;
            }
        }

        writeln!(out, "end")
    }
}

impl BuildOrchestrator for RubyBuildConfig {
    fn select_toolchain(&mut self, choice: ToolchainChoice) {
        self.toolchain = choice;
    }

    fn enable_debug(&mut self) {
        self.debug = true;
    }

    fn append_compiler_define(&mut self, define: &Define) {
        self.cflags.push(define.to_flag());
    }

    fn include_module(&mut self, gem: &str) {
        self.gems.push(gem.to_string());
    }
}

/// Quote a string as a double-quoted Ruby literal.
fn ruby_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' | '\\' | '#' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
