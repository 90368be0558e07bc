//! Compact text form for shapes on the command line.
//!
//! - Point: `name@x,y`
//! - Square: `square:a@1,1;b@-1,1;c@-1,-1;d@1,-1`
//! - Radial graph: `radial:center@0,0|north@0,1;south@0,-1`, or
//!   `radial:center@0,0` for the single-point graph.

use anyhow::{bail, Context, Result};
use shapesym::prelude::*;

pub fn parse_point(s: &str) -> Result<Point> {
    let (name, coords) = s
        .trim()
        .split_once('@')
        .with_context(|| format!("point {s:?}: expected name@x,y"))?;
    let (x, y) = coords
        .split_once(',')
        .with_context(|| format!("point {s:?}: expected x,y after '@'"))?;
    let x: f64 = x.trim().parse().with_context(|| format!("point {s:?}: bad x"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("point {s:?}: bad y"))?;
    Ok(Point::new(name.trim(), x, y))
}

fn parse_points(s: &str) -> Result<Vec<Point>> {
    s.split(';')
        .filter(|p| !p.trim().is_empty())
        .map(parse_point)
        .collect()
}

pub fn parse_shape(s: &str, cfg: GeomCfg) -> Result<AnyShape> {
    let (kind, body) = s
        .split_once(':')
        .with_context(|| format!("shape {s:?}: expected square:... or radial:..."))?;
    match kind.trim() {
        "square" => {
            let pts: [Point; 4] = parse_points(body)?
                .try_into()
                .map_err(|v: Vec<Point>| anyhow::anyhow!("square needs 4 points, got {}", v.len()))?;
            Ok(Square::with_cfg(pts, cfg)?.into())
        }
        "radial" => {
            let (center, neighbors) = match body.split_once('|') {
                Some((c, n)) => (parse_point(c)?, Some(parse_points(n)?)),
                None => (parse_point(body)?, None),
            };
            Ok(match neighbors {
                Some(n) => RadialGraph::with_cfg(center, n, cfg)?.into(),
                None => RadialGraph::single_with_cfg(center, cfg).into(),
            })
        }
        other => bail!("unknown shape kind {other:?} (expected square or radial)"),
    }
}

/// `dx,dy`
pub fn parse_offset(s: &str) -> Result<(f64, f64)> {
    let (dx, dy) = s
        .split_once(',')
        .with_context(|| format!("offset {s:?}: expected dx,dy"))?;
    Ok((
        dx.trim().parse().with_context(|| format!("offset {s:?}: bad dx"))?,
        dy.trim().parse().with_context(|| format!("offset {s:?}: bad dy"))?,
    ))
}
