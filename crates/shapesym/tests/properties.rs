//! Property tests over generated integer squares and crosses.
//!
//! Integer coordinates keep every distance exact, so the default exact
//! comparison applies; fractional translations run under a tolerance.

use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use shapesym::prelude::*;

fn square(cx: i32, cy: i32, h: i32) -> Square {
    let (cx, cy, h) = (f64::from(cx), f64::from(cy), f64::from(h));
    Square::new(
        Point::new("a", cx + h, cy + h),
        Point::new("b", cx - h, cy + h),
        Point::new("c", cx - h, cy - h),
        Point::new("d", cx + h, cy - h),
    )
    .unwrap()
}

fn cross(cx: i32, cy: i32, r: i32, cfg: GeomCfg) -> RadialGraph {
    let (cx, cy, r) = (f64::from(cx), f64::from(cy), f64::from(r));
    RadialGraph::with_cfg(
        Point::new("center", cx, cy),
        vec![
            Point::new("north", cx, cy + r),
            Point::new("south", cx, cy - r),
            Point::new("east", cx + r, cy),
            Point::new("west", cx - r, cy),
        ],
        cfg,
    )
    .unwrap()
}

/// First-edge vectors in hundredths.
const EDGES: [(i32, i32); 6] = [(1, 0), (2, 1), (1, 2), (3, 1), (5, 3), (7, 2)];

/// Square on the 0.01 grid: origin `o`, first edge `e`, counter-clockwise.
/// Its center generally falls halfway between grid points.
fn grid_square(ox: i32, oy: i32, (ex, ey): (i32, i32), scale: i32) -> Option<Square> {
    let (ex, ey) = (ex * scale, ey * scale);
    let at = |x: i32, y: i32| (f64::from(x) / 100.0, f64::from(y) / 100.0);
    let corners = [
        at(ox, oy),
        at(ox + ex, oy + ey),
        at(ox + ex - ey, oy + ey + ex),
        at(ox - ey, oy + ex),
    ];
    Square::new(
        Point::new("a", corners[0].0, corners[0].1),
        Point::new("b", corners[1].0, corners[1].1),
        Point::new("c", corners[2].0, corners[2].1),
        Point::new("d", corners[3].0, corners[3].1),
    )
    .ok()
}

fn close(a: &[Point], b: &[Point], eps: f64) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(p, q)| {
            p.name() == q.name() && (p.x() - q.x()).abs() <= eps && (p.y() - q.y()).abs() <= eps
        })
}

proptest! {
    #[test]
    fn full_turn_is_identity(cx in -50i32..50, cy in -50i32..50, h in 1i32..20) {
        let s = square(cx, cy, h);
        prop_assert_eq!(s.rotate_by(360).unwrap().to_string(), s.to_string());
        let g = cross(cx, cy, h, GeomCfg::default());
        prop_assert_eq!(g.rotate_by(360).unwrap().to_string(), g.to_string());
    }

    #[test]
    fn integer_translation_round_trips(
        cx in -50i32..50, cy in -50i32..50, h in 1i32..20,
        dx in -30i32..30, dy in -30i32..30,
    ) {
        let (dx, dy) = (f64::from(dx), f64::from(dy));
        let s = square(cx, cy, h);
        let back = s.translate_by(dx, dy).unwrap().translate_by(-dx, -dy).unwrap();
        prop_assert_eq!(back, s);
    }

    #[test]
    fn fractional_translation_round_trips_under_tolerance(
        cx in -50i32..50, cy in -50i32..50, r in 1i32..20,
        dx in -3000i32..3000, dy in -3000i32..3000,
    ) {
        let (dx, dy) = (f64::from(dx) / 100.0, f64::from(dy) / 100.0);
        let g = cross(cx, cy, r, GeomCfg::with_tolerance(1e-9));
        let back = g.translate_by(dx, dy).unwrap().translate_by(-dx, -dy).unwrap();
        prop_assert!(close(back.neighbors(), g.neighbors(), 0.011));
        prop_assert!(close(&[back.center()], &[g.center()], 0.011));
    }

    #[test]
    fn symmetry_is_reflexive(cx in -50i32..50, cy in -50i32..50, h in 1i32..20) {
        let s = square(cx, cy, h);
        prop_assert!(SquareSymmetries::default().are_symmetric(&s, &s));
        let g = cross(cx, cy, h, GeomCfg::default());
        prop_assert!(RadialGraphSymmetries::default().are_symmetric(&g, &g));
    }

    #[test]
    fn grid_squares_match_themselves_and_their_reflections(
        ox in -30i32..30, oy in -30i32..30, edge in 0usize..EDGES.len(), scale in 1i32..4,
    ) {
        let Some(s) = grid_square(ox, oy, EDGES[edge], scale) else {
            return Ok(());
        };
        let det = SquareSymmetries::default();
        prop_assert!(det.are_symmetric(&s, &s), "{}", s);

        let p = s.points();
        let reversed = Square::new(p[3].clone(), p[2].clone(), p[1].clone(), p[0].clone()).unwrap();
        prop_assert!(det.are_symmetric(&s, &reversed), "{} vs {}", s, reversed);

        // Relabeled reflections keep every coordinate in place.
        if let Ok(all) = det.symmetries_of(&s) {
            for img in &all[4..] {
                prop_assert!(det.are_symmetric(&s, img), "{} vs {}", s, img);
            }
        }
    }

    #[test]
    fn square_images_are_symmetric(cx in -50i32..50, cy in -50i32..50, h in 1i32..20) {
        let s = square(cx, cy, h);
        let det = SquareSymmetries::default();
        let all = det.symmetries_of(&s).unwrap();
        prop_assert_eq!(all.len(), 8);
        for img in &all {
            prop_assert!(det.are_symmetric(&s, img));
        }
    }
}

#[test]
fn seeded_quarter_turns_stay_symmetric() {
    let mut rng = StdRng::seed_from_u64(42);
    let det = SquareSymmetries::default();
    for _ in 0..32 {
        let s = square(
            rng.gen_range(-20..20),
            rng.gen_range(-20..20),
            rng.gen_range(1..10),
        );
        let turns = rng.gen_range(0..8) * 90;
        let turned = s.rotate_by(turns).unwrap();
        assert!(det.are_symmetric(&s, &turned), "{s} vs {turned}");
        assert!(det.are_symmetric(&turned, &s), "{turned} vs {s}");
    }
}
