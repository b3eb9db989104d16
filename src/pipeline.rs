//! Pipeline orchestration.
//!
//! The four stages run in fixed order, handing files to each other through
//! the output directory:
//! 1. Read the board outline and thickness from the `.kicad_pcb`
//! 2. Plot one SVG per layer with `kicad-cli` into `tmp/`
//! 3. Export the 3D geometry to VRML with `kicad2vrml`
//! 4. Rasterize each SVG into `textures/` with Inkscape, cropped to the
//!    board outline
//! 5. Drive headless Blender to populate the template scene and save it
//!
//! Any stage failure aborts the run. Re-running on the same inputs
//! overwrites every artifact, so the pipeline is idempotent.

use crate::board::{Board, BoardInfo};
use crate::error::PipelineError;
use crate::tools::Toolchain;
use crate::{blender, inkscape, kicad};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Input `.kicad_pcb` document
    pub input: PathBuf,
    /// Directory receiving intermediates and the final scene
    pub output_dir: PathBuf,
    /// Template `.blend` with named material slots
    pub template: PathBuf,
    /// Texture density in pixels per millimeter
    pub quality: f64,
}

/// Run the full pipeline and return the path of the output scene
pub fn run(opts: &PipelineOptions, tools: &Toolchain) -> Result<PathBuf, PipelineError> {
    if !opts.input.is_file() {
        return Err(PipelineError::MissingInput(opts.input.clone()));
    }
    if !opts.template.is_file() {
        return Err(PipelineError::MissingInput(opts.template.clone()));
    }
    let board_name = board_name(&opts.input)?;

    let tmp_dir = opts.output_dir.join("tmp");
    let textures_dir = opts.output_dir.join("textures");
    fs::create_dir_all(&tmp_dir)?;
    fs::create_dir_all(&textures_dir)?;

    let wrl = opts.output_dir.join(format!("{board_name}.wrl"));
    let scene = opts.output_dir.join(format!("{board_name}.blend"));

    log::info!("reading board {}", opts.input.display());
    let board = Board::read(&opts.input)?;
    log::debug!(
        "board bounds {:?}, thickness {} mm",
        board.bounds,
        board.thickness
    );

    log::info!("exporting layer SVGs");
    let svgs = kicad::export_layer_svgs(tools, &opts.input, board_name, &tmp_dir)?;

    kicad::export_vrml(tools, &opts.input, &wrl, board.grid_origin)?;

    let info = BoardInfo {
        bounds: board.bounds,
        thickness: board.thickness,
        units: "mm".to_string(),
        vrml: wrl.clone(),
    };
    info.write(&tmp_dir.join("data.json"))?;

    log::info!("rasterizing {} textures", svgs.len());
    for (layer, svg) in &svgs {
        let png = texture_path(&textures_dir, svg)?;
        log::debug!("layer {} texture: {}", layer.kicad_name(), png.display());
        inkscape::rasterize(tools, svg, &png, &info.bounds, opts.quality)?;
    }

    blender::assemble_scene(tools, &opts.template, &wrl, &textures_dir, &scene, &tmp_dir)?;

    log::info!("wrote scene {}", scene.display());
    Ok(scene)
}

fn board_name(input: &Path) -> Result<&str, PipelineError> {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| PipelineError::InvalidBoard {
            path: input.to_path_buf(),
            reason: "file name is not valid UTF-8".to_string(),
        })
}

fn texture_path(textures_dir: &Path, svg: &Path) -> Result<PathBuf, PipelineError> {
    let name = svg
        .with_extension("png")
        .file_name()
        .map(|n| n.to_os_string())
        .ok_or_else(|| PipelineError::MissingOutput {
            stage: "rasterization",
            path: svg.to_path_buf(),
        })?;
    Ok(textures_dir.join(name))
}
