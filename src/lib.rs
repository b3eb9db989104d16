//! # kicad2blender
//!
//! A pipeline that converts a KiCad PCB design into a textured 3D model
//! inside a Blender scene template.
//!
//! ## Stages
//!
//! - **Layer export**: `kicad-cli` plots one SVG per PCB layer
//! - **VRML export**: the external `kicad2vrml` binary produces the board
//!   geometry as a `.wrl` file
//! - **Rasterization**: headless Inkscape converts each SVG into a PNG
//!   texture cropped to the board outline
//! - **Scene assembly**: headless Blender imports the VRML mesh into the
//!   template scene and assigns each texture to its material slot by name
//!
//! All hand-off between stages goes through the filesystem, so any stage can
//! be re-run independently given its inputs exist.
//!
//! ## Example
//!
//! ```rust,ignore
//! use kicad2blender::{pipeline, PipelineOptions, Toolchain};
//!
//! let opts = PipelineOptions {
//!     input: "MyPcb.kicad_pcb".into(),
//!     output_dir: "out".into(),
//!     template: "Template.blend".into(),
//!     quality: 100.0,
//! };
//! let scene = pipeline::run(&opts, &Toolchain::from_env())?;
//! # Ok::<(), kicad2blender::PipelineError>(())
//! ```

pub mod blender;
pub mod board;
pub mod cli;
pub mod error;
pub mod inkscape;
pub mod kicad;
pub mod layers;
pub mod pipeline;
pub mod tools;

// Re-export commonly used items
pub use board::{Board, BoardInfo, Bounds};
pub use error::PipelineError;
pub use layers::LayerType;
pub use pipeline::PipelineOptions;
pub use tools::Toolchain;
