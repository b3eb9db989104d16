//! Texture rasterization via headless Inkscape.
//!
//! KiCad plots every layer onto a full page, so each SVG is cropped down to
//! the board outline before rasterizing. Inkscape's `--export-area` works in
//! 96-dpi document units with the Y axis pointing up from the bottom of the
//! page, which is where the unit conversion and Y flip below come from.

use crate::board::Bounds;
use crate::error::PipelineError;
use crate::tools::{self, Toolchain};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Length units accepted in the SVG root `height` attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthUnit {
    Mm,
    Cm,
}

impl LengthUnit {
    /// Document (96-dpi pixel) units per one of this unit
    pub fn px_per_unit(&self) -> f64 {
        match self {
            LengthUnit::Mm => 3.779528,
            LengthUnit::Cm => 37.79528,
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "mm" => Some(LengthUnit::Mm),
            "cm" => Some(LengthUnit::Cm),
            _ => None,
        }
    }
}

/// Crop area and resolution for one `inkscape` invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ExportGeometry {
    pub dpi: f64,
    /// x1:y1:x2:y2, bottom-left origin, document units
    pub area: [f64; 4],
}

/// Compute the Inkscape crop area for a board bounding box.
///
/// `bounds` is in millimeters with a top-left origin (KiCad's convention);
/// `svg_height` is the page height from the SVG root element, used to flip
/// the Y axis. `quality` is the requested texture density in pixels per mm.
pub fn export_geometry(
    svg_height: f64,
    svg_unit: LengthUnit,
    bounds: &Bounds,
    quality: f64,
) -> ExportGeometry {
    let r = LengthUnit::Mm.px_per_unit();
    let page_height = svg_height * svg_unit.px_per_unit();

    let x1 = bounds.x * r;
    let y1 = page_height - (bounds.y + bounds.height) * r;
    let x2 = x1 + bounds.width * r;
    let y2 = y1 + bounds.height * r;

    ExportGeometry {
        dpi: quality / r * 96.0,
        area: [x1, y1, x2, y2],
    }
}

/// Read the `height` attribute of the root `<svg>` element
pub fn svg_height(path: &Path) -> Result<(f64, LengthUnit), PipelineError> {
    let text = fs::read_to_string(path)?;
    parse_svg_height(&text).map_err(|reason| PipelineError::InvalidSvg {
        path: path.to_path_buf(),
        reason,
    })
}

fn parse_svg_height(xml: &str) -> Result<(f64, LengthUnit), String> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name();
                let name = std::str::from_utf8(name_bytes.as_ref()).unwrap_or("");
                if name != "svg" {
                    continue;
                }
                for attr in e.attributes().flatten() {
                    let key = std::str::from_utf8(attr.key.as_ref()).unwrap_or("");
                    if key == "height" {
                        let value = std::str::from_utf8(&attr.value).unwrap_or("");
                        return parse_length(value);
                    }
                }
                return Err("svg element has no height attribute".to_string());
            }
            Ok(Event::Eof) => return Err("no svg element found".to_string()),
            Err(e) => return Err(format!("malformed XML: {e}")),
            _ => {}
        }
    }
}

fn parse_length(value: &str) -> Result<(f64, LengthUnit), String> {
    let value = value.trim();
    // The unit is the trailing alphabetic run, so exponent notation like
    // "2.1e2mm" keeps its "e2" with the number.
    let number = value.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix = &value[number.len()..];
    let number: f64 = number
        .trim()
        .parse()
        .map_err(|_| format!("invalid length: {value:?}"))?;
    let unit = LengthUnit::from_suffix(suffix)
        .ok_or_else(|| format!("unsupported length unit: {value:?}"))?;
    Ok((number, unit))
}

/// Rasterize one layer SVG to a PNG cropped to the board outline
pub fn rasterize(
    tools: &Toolchain,
    svg: &Path,
    png: &Path,
    bounds: &Bounds,
    quality: f64,
) -> Result<(), PipelineError> {
    let (height, unit) = svg_height(svg)?;
    let geometry = export_geometry(height, unit, bounds, quality);
    log::debug!("rasterize {} -> {} ({:?})", svg.display(), png.display(), geometry);

    let [x1, y1, x2, y2] = geometry.area;
    let mut cmd = Command::new(&tools.inkscape);
    cmd.arg(format!("--export-dpi={}", geometry.dpi))
        .arg(format!("--export-area={x1}:{y1}:{x2}:{y2}"))
        .arg("--export-background=white")
        .arg("-o")
        .arg(png)
        .arg(svg);
    tools::run("inkscape", &mut cmd)?;
    tools::expect_output("rasterization", png)
}
