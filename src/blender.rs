//! Scene assembly via headless Blender.
//!
//! The Rust side only hands file paths to the embedded Python script, which
//! does the actual scene work inside Blender's interpreter: VRML import,
//! texture-to-material-slot assignment by node label, UV map setup, save.

use crate::error::PipelineError;
use crate::tools::{self, Toolchain};
use std::fs;
use std::path::Path;
use std::process::Command;

const ASSEMBLE_SCRIPT: &str = include_str!("../scripts/assemble.py");

/// Populate the template scene with the board geometry and textures.
///
/// The script is materialized into `tmp_dir` on every run so a stale copy
/// from an earlier version never gets picked up.
pub fn assemble_scene(
    tools: &Toolchain,
    template: &Path,
    wrl: &Path,
    textures_dir: &Path,
    output: &Path,
    tmp_dir: &Path,
) -> Result<(), PipelineError> {
    let script = tmp_dir.join("assemble.py");
    fs::write(&script, ASSEMBLE_SCRIPT)?;

    log::info!(
        "assembling scene from {} into {}",
        template.display(),
        output.display()
    );

    let mut cmd = Command::new(&tools.blender);
    cmd.arg("--background")
        .arg("--python")
        .arg(&script)
        .arg("--")
        .arg(template)
        .arg(wrl)
        .arg(textures_dir)
        .arg(output);
    tools::run("blender", &mut cmd)?;
    tools::expect_output("scene assembly", output)
}
