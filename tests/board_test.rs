use kicad2blender::Board;

const RECT_OUTLINE_BOARD: &str = r#"(kicad_pcb (version 20221018) (generator pcbnew)
  (general
    (thickness 1.6)
  )
  (paper "A4")
  (setup
    (grid_origin 15 25)
    (pad_to_mask_clearance 0)
  )
  (net 0 "")
  (gr_line (start 20 30) (end 120 30) (stroke (width 0.1) (type solid)) (layer "Edge.Cuts") (tstamp a))
  (gr_line (start 120 30) (end 120 110) (stroke (width 0.1) (type solid)) (layer "Edge.Cuts") (tstamp b))
  (gr_line (start 120 110) (end 20 110) (stroke (width 0.1) (type solid)) (layer "Edge.Cuts") (tstamp c))
  (gr_line (start 20 110) (end 20 30) (stroke (width 0.1) (type solid)) (layer "Edge.Cuts") (tstamp d))
  (gr_text "label" (at 60 50) (layer "F.SilkS"))
)"#;

#[test]
fn rectangular_outline_bounds() {
    let board = Board::parse(RECT_OUTLINE_BOARD).unwrap();
    assert_eq!(board.bounds.x, 20.0);
    assert_eq!(board.bounds.y, 30.0);
    assert_eq!(board.bounds.width, 100.0);
    assert_eq!(board.bounds.height, 80.0);
}

#[test]
fn thickness_and_grid_origin() {
    let board = Board::parse(RECT_OUTLINE_BOARD).unwrap();
    assert_eq!(board.thickness, 1.6);
    assert_eq!(board.grid_origin, (15.0, 25.0));
}

#[test]
fn defaults_when_setup_is_missing() {
    let text = r#"(kicad_pcb
      (gr_line (start 0 0) (end 10 0) (layer "Edge.Cuts"))
      (gr_line (start 10 0) (end 10 10) (layer "Edge.Cuts"))
    )"#;
    let board = Board::parse(text).unwrap();
    assert_eq!(board.thickness, 1.6);
    assert_eq!(board.grid_origin, (0.0, 0.0));
}

#[test]
fn circle_outline_uses_center_and_end() {
    let text = r#"(kicad_pcb
      (gr_circle (center 50 50) (end 70 50) (layer "Edge.Cuts"))
    )"#;
    let board = Board::parse(text).unwrap();
    // Endpoint-only extents, matching the SVG plot crop behavior
    assert_eq!(board.bounds.x, 50.0);
    assert_eq!(board.bounds.width, 20.0);
}

#[test]
fn board_without_outline_is_rejected() {
    let text = r#"(kicad_pcb (general (thickness 1.2)))"#;
    let err = Board::parse(text).unwrap_err();
    assert!(err.contains("Edge.Cuts"), "unexpected error: {err}");
}

#[test]
fn non_board_document_is_rejected() {
    assert!(Board::parse("(kicad_sch (version 1))").is_err());
    assert!(Board::parse("not an s-expression").is_err());
}
