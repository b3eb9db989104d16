//! External tool resolution and subprocess execution.
//!
//! Tool locations are injected rather than assumed, so tests can point the
//! pipeline at stub executables. Each path defaults to the bare program name
//! (resolved through `PATH`) and can be overridden with an environment
//! variable.

use crate::error::PipelineError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Paths to the four external applications the pipeline drives
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub kicad_cli: PathBuf,
    pub kicad2vrml: PathBuf,
    pub inkscape: PathBuf,
    pub blender: PathBuf,
}

impl Toolchain {
    /// Resolve tool paths from `KICAD_CLI`, `KICAD2VRML`, `INKSCAPE` and
    /// `BLENDER`, falling back to the plain program names.
    pub fn from_env() -> Self {
        fn resolve(var: &str, default: &str) -> PathBuf {
            std::env::var_os(var)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        }
        Self {
            kicad_cli: resolve("KICAD_CLI", "kicad-cli"),
            kicad2vrml: resolve("KICAD2VRML", "kicad2vrml"),
            inkscape: resolve("INKSCAPE", "inkscape"),
            blender: resolve("BLENDER", "blender"),
        }
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Run an external tool to completion and check its exit status.
///
/// A spawn failure with `NotFound` is reported as [`PipelineError::ToolNotFound`]
/// so the user learns which application is missing. Child output is surfaced
/// through the logger: stdout at debug, stderr at debug on success and error
/// on failure.
pub fn run(tool: &str, cmd: &mut Command) -> Result<(), PipelineError> {
    log::debug!("call {:?}", cmd);
    let output = cmd.output().map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            PipelineError::ToolNotFound {
                tool: tool.to_string(),
            }
        } else {
            PipelineError::Io(e)
        }
    })?;

    if !output.stdout.is_empty() {
        log::debug!("{tool} stdout: {}", String::from_utf8_lossy(&output.stdout).trim_end());
    }
    if !output.stderr.is_empty() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if output.status.success() {
            log::debug!("{tool} stderr: {}", stderr.trim_end());
        } else {
            log::error!("{tool} stderr: {}", stderr.trim_end());
        }
    }

    if !output.status.success() {
        return Err(PipelineError::ToolFailed {
            tool: tool.to_string(),
            code: output.status.code(),
        });
    }
    Ok(())
}

/// Check that a stage actually produced the file it was asked for
pub fn expect_output(stage: &'static str, path: &Path) -> Result<(), PipelineError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(PipelineError::MissingOutput {
            stage,
            path: path.to_path_buf(),
        })
    }
}
