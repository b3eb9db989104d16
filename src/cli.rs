use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Converts a KiCad PCB design into a textured 3D model inside a Blender
/// scene template, driving KiCad, Inkscape and Blender headlessly.
pub struct Args {
    /// Increases log verbosity for each occurrence
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Texture quality in pixels per millimeter
    #[arg(short, long, default_value_t = 100.0)]
    pub quality: f64,

    /// Template scene with named material slots
    #[arg(short, long, default_value = "Template.blend")]
    pub template: PathBuf,

    /// Input KiCad PCB file
    pub input: PathBuf,

    /// Output directory
    pub output: PathBuf,
}

/// Map repeated `-v` flags onto a log level: warnings by default, then
/// info, debug and trace
pub fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
