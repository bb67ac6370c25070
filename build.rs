//! Resolves `extdemo.val` from the build configuration and writes it to
//! `$OUT_DIR/extdemo_config.rs` for the library to include.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

#[path = "src/build_config.rs"]
mod build_config;

use build_config::{ExportConfig, GENERATED_FILE, VALUE_ENV};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/build_config.rs");
    println!("cargo:rerun-if-env-changed={VALUE_ENV}");

    let config = ExportConfig::from_env();
    let source = config
        .render()
        .context("Failed to determine the value of `extdemo.val`")?;

    let out_dir = PathBuf::from(env::var("OUT_DIR").context("cargo didn't set OUT_DIR")?);
    let target = out_dir.join(GENERATED_FILE);
    fs::write(&target, source)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    Ok(())
}
