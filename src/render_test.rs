use super::*;
use crate::grid::build_grid;
use crate::model::Viewport;
use crate::surface::{DrawCommand, RecordingSurface};

const EPS: f64 = 1e-9;

fn cfg() -> HexFieldConfig {
    HexFieldConfig::default()
}

fn pointer(x: f64, y: f64) -> PointerState {
    PointerState { x, y }
}

/// One stroked hexagon pulled back out of a command stream.
#[derive(Debug)]
struct Stroked {
    center: (f64, f64),
    vertices: Vec<(f64, f64)>,
    color: Rgba,
}

fn stroked(commands: &[DrawCommand]) -> Vec<Stroked> {
    let mut out = Vec::new();
    let mut verts = Vec::new();
    let mut color = None;
    for c in commands {
        match c {
            DrawCommand::BeginPath => {
                verts.clear();
                color = None;
            }
            DrawCommand::MoveTo(x, y) | DrawCommand::LineTo(x, y) => verts.push((*x, *y)),
            DrawCommand::StrokeColor(c) => color = Some(*c),
            DrawCommand::Stroke => {
                let n = verts.len() as f64;
                let cx = verts.iter().map(|v| v.0).sum::<f64>() / n;
                let cy = verts.iter().map(|v| v.1).sum::<f64>() / n;
                out.push(Stroked {
                    center: (cx, cy),
                    vertices: verts.clone(),
                    color: color.expect("stroke color set before stroke"),
                });
            }
            _ => {}
        }
    }
    out
}

#[test]
fn point_on_radius_boundary_is_skipped() {
    let c = cfg();
    let p = GridPoint { x: c.visibility_radius, y: 0.0 };
    assert_eq!(proximity(p, pointer(0.0, 0.0), &c), None);
    let inside = GridPoint { x: c.visibility_radius - 0.001, y: 0.0 };
    assert!(proximity(inside, pointer(0.0, 0.0), &c).is_some());
}

#[test]
fn coincident_point_has_full_opacity_and_no_displacement() {
    let p = GridPoint { x: 120.0, y: 80.0 };
    let h = proximity(p, pointer(120.0, 80.0), &cfg()).expect("drawn");
    assert_eq!(h.opacity, 1.0);
    assert_eq!((h.center_x, h.center_y), (120.0, 80.0));
}

#[test]
fn half_radius_point_has_half_opacity_and_full_offset() {
    let c = cfg();
    let p = GridPoint { x: 30.0, y: 40.0 };
    let h = proximity(p, pointer(0.0, 0.0), &c).expect("drawn");
    assert!((h.opacity - 0.5).abs() < EPS);
    let (ox, oy) = (h.center_x - p.x, h.center_y - p.y);
    assert!((ox.hypot(oy) - c.offset).abs() < EPS);
    // pushed along the pointer-to-cell direction
    assert!((ox - 6.0).abs() < EPS && (oy - 8.0).abs() < EPS);
}

#[test]
fn hexagon_outline_is_closed_with_six_vertices() {
    let mut s = RecordingSurface::default();
    let color = Rgba { r: 255, g: 255, b: 255, a: 0.25 };
    draw_hexagon(&mut s, 10.0, 20.0, 15.0, color, 1.0);
    assert_eq!(s.commands[0], DrawCommand::BeginPath);
    assert_eq!(s.commands[1], DrawCommand::MoveTo(25.0, 20.0));
    assert_eq!(s.commands[7], DrawCommand::ClosePath);
    assert_eq!(s.commands[8], DrawCommand::StrokeColor(color));
    assert_eq!(s.commands[9], DrawCommand::LineWidth(1.0));
    assert_eq!(s.commands[10], DrawCommand::Stroke);
    assert_eq!(s.commands.len(), 11);
    let hex = &stroked(&s.commands)[0];
    assert_eq!(hex.vertices.len(), 6);
    for (vx, vy) in &hex.vertices {
        assert!(((vx - 10.0).hypot(vy - 20.0) - 15.0).abs() < EPS);
    }
}

#[test]
fn render_starts_by_clearing_the_viewport() {
    let grid = build_grid(Viewport::new(800.0, 600.0), &cfg());
    let mut s = RecordingSurface::default();
    render(&grid, pointer(-1000.0, -1000.0), &cfg(), &mut s);
    assert_eq!(s.commands, vec![DrawCommand::ClearRect(0.0, 0.0, 800.0, 600.0)]);
}

#[test]
fn rendering_twice_issues_identical_commands() {
    let grid = build_grid(Viewport::new(640.0, 480.0), &cfg());
    let mut a = RecordingSurface::default();
    let mut b = RecordingSurface::default();
    render(&grid, pointer(200.0, 150.0), &cfg(), &mut a);
    render(&grid, pointer(200.0, 150.0), &cfg(), &mut b);
    assert!(a.commands.len() > 1);
    assert_eq!(a.commands, b.commands);
}

#[test]
fn centered_pointer_scenario() {
    let c = cfg();
    let grid = build_grid(Viewport::new(800.0, 600.0), &c);
    let ptr = pointer(400.0, 300.0);
    let mut s = RecordingSurface::default();
    let drawn = render(&grid, ptr, &c, &mut s);

    let within = grid
        .points()
        .iter()
        .filter(|p| (p.x - ptr.x).hypot(p.y - ptr.y) < c.visibility_radius)
        .count();
    assert_eq!(drawn, within);
    let hexes = stroked(&s.commands);
    assert_eq!(hexes.len(), drawn);
    for h in &hexes {
        let d = (h.center.0 - ptr.x).hypot(h.center.1 - ptr.y);
        assert!(d < c.visibility_radius + c.offset + EPS);
    }

    let nearest = grid
        .points()
        .iter()
        .min_by(|a, b| {
            let da = (a.x - ptr.x).hypot(a.y - ptr.y);
            let db = (b.x - ptr.x).hypot(b.y - ptr.y);
            da.total_cmp(&db)
        })
        .copied()
        .expect("non-empty grid");
    let h = proximity(nearest, ptr, &c).expect("nearest cell is drawn");
    assert!(h.opacity > 0.75, "opacity {}", h.opacity);
    let brightest = hexes.iter().map(|h| h.color.a).fold(0.0, f64::max);
    assert!((brightest - h.opacity).abs() < EPS);
}

#[test]
fn pointer_on_grid_point_draws_it_undisplaced() {
    let c = cfg();
    let grid = build_grid(Viewport::new(800.0, 600.0), &c);
    let target = grid.points()[grid.len() / 2];
    let mut s = RecordingSurface::default();
    render(&grid, pointer(target.x, target.y), &c, &mut s);
    let hexes = stroked(&s.commands);
    let hit = hexes
        .iter()
        .find(|h| h.color.a == 1.0)
        .expect("coincident cell drawn at full opacity");
    assert!((hit.center.0 - target.x).abs() < 1e-6);
    assert!((hit.center.1 - target.y).abs() < 1e-6);
}

#[test]
fn moving_pointer_leaves_no_stale_highlight() {
    let c = cfg();
    let grid = build_grid(Viewport::new(800.0, 600.0), &c);
    let mut s = RecordingSurface::default();
    render(&grid, pointer(0.0, 0.0), &c, &mut s);
    s.take();
    render(&grid, pointer(800.0, 600.0), &c, &mut s);

    let mut fresh = RecordingSurface::default();
    render(&grid, pointer(800.0, 600.0), &c, &mut fresh);
    assert_eq!(s.commands, fresh.commands);

    let hexes = stroked(&s.commands);
    assert!(!hexes.is_empty());
    for h in &hexes {
        let d = (h.center.0 - 800.0).hypot(h.center.1 - 600.0);
        assert!(d < c.visibility_radius + c.offset + EPS);
    }
}
