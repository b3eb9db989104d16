//! KiCad stage wrappers: per-layer SVG plotting via `kicad-cli` and 3D
//! geometry export via the external `kicad2vrml` binary.

use crate::error::PipelineError;
use crate::layers::LayerType;
use crate::tools::{self, Toolchain};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Plot one SVG per layer into `out_dir`.
///
/// Files are named `<board>-<token>.svg` (e.g. `MyPcb-F_Cu.svg`); the token
/// is what the Blender template later matches textures against.
pub fn export_layer_svgs(
    tools: &Toolchain,
    board: &Path,
    board_name: &str,
    out_dir: &Path,
) -> Result<Vec<(LayerType, PathBuf)>, PipelineError> {
    fs::create_dir_all(out_dir)?;

    let mut svgs = Vec::new();
    for layer in LayerType::all() {
        let svg = out_dir.join(format!("{board_name}-{}.svg", layer.file_token()));
        log::info!(
            "plotting layer {} to {}",
            layer.kicad_name(),
            svg.display()
        );

        let mut cmd = Command::new(&tools.kicad_cli);
        cmd.args(["pcb", "export", "svg"])
            .args(["--layers", layer.kicad_name()])
            .arg("--exclude-drawing-sheet")
            .arg("--output")
            .arg(&svg)
            .arg(board);
        tools::run("kicad-cli", &mut cmd)?;
        tools::expect_output("layer export", &svg)?;

        svgs.push((layer, svg));
    }
    Ok(svgs)
}

/// Export the board's 3D geometry to VRML.
///
/// `kicad2vrml` must be installed into the KiCad `bin` directory (or pointed
/// at via `KICAD2VRML`). The user origin lines the mesh up with the grid
/// origin used by the SVG plots.
pub fn export_vrml(
    tools: &Toolchain,
    board: &Path,
    wrl: &Path,
    origin: (f64, f64),
) -> Result<(), PipelineError> {
    log::info!("exporting VRML to {}", wrl.display());

    let mut cmd = Command::new(&tools.kicad2vrml);
    cmd.arg(board)
        .arg("-f")
        .arg("-o")
        .arg(wrl)
        .arg("--user-origin")
        .arg(format!("{}x{}", origin.0, origin.1));
    tools::run("kicad2vrml", &mut cmd)?;
    tools::expect_output("VRML export", wrl)
}
