//! Minimal `.kicad_pcb` reader.
//!
//! Only the pieces the pipeline needs are extracted: the bounding box of the
//! board outline (graphic items on `Edge.Cuts`), the board thickness, and the
//! grid origin used for VRML export. Everything else in the document is
//! skipped. Arc and circle extents are approximated by their endpoint and
//! center coordinates.

use crate::error::PipelineError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Board outline bounding box in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for &(x, y) in rest {
            min.0 = min.0.min(x);
            min.1 = min.1.min(y);
            max.0 = max.0.max(x);
            max.1 = max.1.max(y);
        }
        Some(Self {
            x: min.0,
            y: min.1,
            width: max.0 - min.0,
            height: max.1 - min.1,
        })
    }
}

/// Geometry summary of a board document
#[derive(Debug, Clone)]
pub struct Board {
    pub bounds: Bounds,
    pub thickness: f64,
    pub grid_origin: (f64, f64),
}

const DEFAULT_THICKNESS_MM: f64 = 1.6;

impl Board {
    pub fn read(path: &Path) -> Result<Self, PipelineError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text).map_err(|reason| PipelineError::InvalidBoard {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn parse(text: &str) -> Result<Self, String> {
        let root = Sexpr::parse(text)?;
        if root.head() != Some("kicad_pcb") {
            return Err("not a kicad_pcb document".to_string());
        }

        let thickness = root
            .child("general")
            .and_then(|g| g.child("thickness"))
            .and_then(|t| t.number_at(1))
            .unwrap_or(DEFAULT_THICKNESS_MM);

        let grid_origin = root
            .child("setup")
            .and_then(|s| s.child("grid_origin"))
            .and_then(|o| Some((o.number_at(1)?, o.number_at(2)?)))
            .unwrap_or((0.0, 0.0));

        let mut points = Vec::new();
        for item in root.items() {
            let is_graphic = item.head().is_some_and(|h| h.starts_with("gr_"));
            if is_graphic && on_edge_cuts(item) {
                collect_points(item, &mut points);
            }
        }

        let bounds = Bounds::from_points(&points)
            .ok_or_else(|| "no Edge.Cuts outline graphics found".to_string())?;

        Ok(Self {
            bounds,
            thickness,
            grid_origin,
        })
    }
}

fn on_edge_cuts(item: &Sexpr) -> bool {
    item.child("layer")
        .and_then(|l| l.items().get(1))
        .and_then(Sexpr::atom)
        == Some("Edge.Cuts")
}

fn collect_points(item: &Sexpr, points: &mut Vec<(f64, f64)>) {
    for sub in item.items() {
        match sub.head() {
            Some("start" | "end" | "center" | "mid") => {
                if let (Some(x), Some(y)) = (sub.number_at(1), sub.number_at(2)) {
                    points.push((x, y));
                }
            }
            Some("pts") => {
                for xy in sub.items() {
                    if xy.head() == Some("xy") {
                        if let (Some(x), Some(y)) = (xy.number_at(1), xy.number_at(2)) {
                            points.push((x, y));
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

/// Board geometry as written to `tmp/data.json`.
///
/// The rasterizer crops every texture to this area so all layers line up; the
/// file is kept on disk so a stage can be re-run by hand against the same
/// crop.
#[derive(Debug, Clone, Serialize)]
pub struct BoardInfo {
    #[serde(flatten)]
    pub bounds: Bounds,
    pub thickness: f64,
    pub units: String,
    pub vrml: PathBuf,
}

impl BoardInfo {
    pub fn write(&self, path: &Path) -> Result<(), PipelineError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// S-expression node: a bare/quoted atom or a parenthesized list
#[derive(Debug, Clone, PartialEq)]
enum Sexpr {
    Atom(String),
    List(Vec<Sexpr>),
}

impl Sexpr {
    /// Parse a single top-level s-expression, ignoring trailing input
    fn parse(input: &str) -> Result<Self, String> {
        let mut stack: Vec<Vec<Sexpr>> = Vec::new();
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '(' => stack.push(Vec::new()),
                ')' => {
                    let list = stack.pop().ok_or("unbalanced ')'")?;
                    let node = Sexpr::List(list);
                    match stack.last_mut() {
                        Some(parent) => parent.push(node),
                        None => return Ok(node),
                    }
                }
                '"' => {
                    let mut s = String::new();
                    loop {
                        match chars.next() {
                            Some('\\') => {
                                if let Some(escaped) = chars.next() {
                                    s.push(escaped);
                                }
                            }
                            Some('"') => break,
                            Some(other) => s.push(other),
                            None => return Err("unterminated string literal".to_string()),
                        }
                    }
                    stack
                        .last_mut()
                        .ok_or("string literal outside any list")?
                        .push(Sexpr::Atom(s));
                }
                c if c.is_whitespace() => {}
                c => {
                    let mut s = String::from(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_whitespace() || next == '(' || next == ')' {
                            break;
                        }
                        s.push(next);
                        chars.next();
                    }
                    stack
                        .last_mut()
                        .ok_or("atom outside any list")?
                        .push(Sexpr::Atom(s));
                }
            }
        }
        Err("unbalanced '('".to_string())
    }

    fn atom(&self) -> Option<&str> {
        match self {
            Sexpr::Atom(s) => Some(s),
            Sexpr::List(_) => None,
        }
    }

    fn items(&self) -> &[Sexpr] {
        match self {
            Sexpr::Atom(_) => &[],
            Sexpr::List(items) => items,
        }
    }

    /// First atom of a list, e.g. `gr_line` in `(gr_line …)`
    fn head(&self) -> Option<&str> {
        self.items().first().and_then(Sexpr::atom)
    }

    /// First child list whose head matches `name`
    fn child(&self, name: &str) -> Option<&Sexpr> {
        self.items().iter().find(|i| i.head() == Some(name))
    }

    fn number_at(&self, index: usize) -> Option<f64> {
        self.items().get(index)?.atom()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_lists_and_strings() {
        let root = Sexpr::parse(r#"(a (b 1 2) (layer "Edge.Cuts") atom)"#).unwrap();
        assert_eq!(root.head(), Some("a"));
        assert_eq!(root.child("b").unwrap().number_at(2), Some(2.0));
        assert_eq!(
            root.child("layer").unwrap().items()[1].atom(),
            Some("Edge.Cuts")
        );
    }

    #[test]
    fn rejects_unbalanced_input() {
        assert!(Sexpr::parse("(a (b)").is_err());
        assert!(Sexpr::parse("").is_err());
    }

    #[test]
    fn bounds_merge_points() {
        let b = Bounds::from_points(&[(20.0, 30.0), (120.0, 110.0), (50.0, 40.0)]).unwrap();
        assert_eq!(b.x, 20.0);
        assert_eq!(b.y, 30.0);
        assert_eq!(b.width, 100.0);
        assert_eq!(b.height, 80.0);
    }

    #[test]
    fn polygon_outline_contributes_points() {
        let text = r#"(kicad_pcb
            (general (thickness 0.8))
            (gr_poly (pts (xy 0 0) (xy 10 0) (xy 10 5) (xy 0 5)) (layer "Edge.Cuts"))
        )"#;
        let board = Board::parse(text).unwrap();
        assert_eq!(board.thickness, 0.8);
        assert_eq!(board.bounds.width, 10.0);
        assert_eq!(board.bounds.height, 5.0);
    }

    #[test]
    fn graphics_on_other_layers_are_ignored() {
        let text = r#"(kicad_pcb
            (gr_line (start 0 0) (end 500 500) (layer "F.SilkS"))
            (gr_rect (start 1 1) (end 9 9) (layer "Edge.Cuts"))
        )"#;
        let board = Board::parse(text).unwrap();
        assert_eq!(board.bounds.width, 8.0);
    }
}
