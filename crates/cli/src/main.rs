use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use shapesym::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod parse;
mod provenance;

use parse::{parse_offset, parse_shape};

#[derive(Parser)]
#[command(name = "shapesym")]
#[command(about = "Rigid transforms and symmetries of squares and radial graphs")]
struct Cmd {
    /// Compare coordinates with this absolute tolerance instead of exactly
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Validate squares with the legacy fixed-pair distance check
    #[arg(long, global = true)]
    legacy_square_check: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Walk through the reference scenario
    Demo,
    /// Print a shape's canonical form, optionally rotated then translated
    Show {
        shape: String,
        #[arg(long, allow_hyphen_values = true)]
        rotate: Option<i32>,
        /// Offset as dx,dy
        #[arg(long, allow_hyphen_values = true)]
        translate: Option<String>,
    },
    /// List every symmetric image of a shape
    Symmetries {
        shape: String,
        /// Also write the list here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Check whether two shapes of the same kind are symmetric
    Compare { a: String, b: String },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = geom_cfg(cmd.tolerance, cmd.legacy_square_check);
    let text = match cmd.action {
        Action::Demo => demo(cfg)?,
        Action::Show {
            shape,
            rotate,
            translate,
        } => show(&shape, rotate, translate.as_deref(), cfg)?,
        Action::Symmetries { shape, out } => symmetries(&shape, out.as_deref(), cfg)?,
        Action::Compare { a, b } => compare(&a, &b, cfg)?,
        Action::Report => report(cfg)?,
    };
    print!("{text}");
    Ok(())
}

fn geom_cfg(tolerance: Option<f64>, legacy_square_check: bool) -> GeomCfg {
    let mut cfg = tolerance.map_or_else(GeomCfg::default, GeomCfg::with_tolerance);
    if legacy_square_check {
        cfg.square_check = SquareCheck::LegacyFixedPair;
    }
    cfg
}

fn demo(cfg: GeomCfg) -> Result<String> {
    tracing::info!("demo");
    let center = Point::new("center", 0.0, 0.0);
    let north = Point::new("north", 0.0, 1.0);
    let south = Point::new("south", 0.0, -1.0);
    let east = Point::new("east", 1.0, 0.0);
    let west = Point::new("west", -1.0, 0.0);
    let too_far_south = Point::new("south", 0.0, -2.0);
    let mut out = String::new();

    let lonely = RadialGraph::single_with_cfg(center.clone(), cfg);
    out += &format!("single point: {lonely}\n");

    match RadialGraph::with_cfg(
        center.clone(),
        vec![north.clone(), too_far_south, east.clone(), west.clone()],
        cfg,
    ) {
        Ok(g) => out += &format!("unexpectedly accepted: {g}\n"),
        Err(e) => out += &format!("rejected: {e}\n"),
    }

    let g = RadialGraph::with_cfg(center, vec![north, south, east, west], cfg)?;
    out += &format!("cross: {g}\n");
    let turned = g.rotate_by(90)?;
    out += &format!("cross rotated 90: {turned}\n");
    out += &format!("cross translated (2, -1): {}\n", g.translate_by(2.0, -1.0)?);
    let radial = RadialGraphSymmetries::new(cfg);
    out += &format!(
        "cross symmetric to its rotation: {}\n",
        radial.are_symmetric(&g, &turned)
    );

    let sq = Square::with_cfg(
        [
            Point::new("a", 1.0, 1.0),
            Point::new("b", -1.0, 1.0),
            Point::new("c", -1.0, -1.0),
            Point::new("d", 1.0, -1.0),
        ],
        cfg,
    )?;
    let sq_turned = sq.rotate_by(90)?;
    out += &format!("square: {sq}\n");
    out += &format!("square rotated 90: {sq_turned}\n");
    let squares = SquareSymmetries::new(cfg);
    out += &format!(
        "square symmetric to its rotation: {}\n",
        squares.are_symmetric(&sq, &sq_turned)
    );
    out += &format!(
        "square symmetries: {}\n",
        squares.symmetries_of(&sq)?.len()
    );
    Ok(out)
}

fn show(shape: &str, rotate: Option<i32>, translate: Option<&str>, cfg: GeomCfg) -> Result<String> {
    tracing::info!(shape, rotate = ?rotate, translate = ?translate, "show");
    let mut s = parse_shape(shape, cfg)?;
    if let Some(degrees) = rotate {
        s = s
            .rotate_by(degrees)
            .with_context(|| format!("rotating by {degrees}"))?;
    }
    if let Some(offset) = translate {
        let (dx, dy) = parse_offset(offset)?;
        s = s
            .translate_by(dx, dy)
            .with_context(|| format!("translating by ({dx}, {dy})"))?;
    }
    Ok(format!("{s}\n"))
}

fn symmetries(shape: &str, out: Option<&Path>, cfg: GeomCfg) -> Result<String> {
    tracing::info!(shape, out = ?out, "symmetries");
    let s = parse_shape(shape, cfg)?;
    let images = s.symmetries(cfg).context("enumerating symmetries")?;
    tracing::info!(kind = s.kind(), count = images.len(), "symmetries_enumerated");
    let text: String = images.iter().map(|img| format!("{img}\n")).collect();

    if let Some(path) = out {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &text).with_context(|| format!("writing {}", path.display()))?;
        let sidecar = provenance::write_sidecar(
            path,
            json!({
                "command": "symmetries",
                "shape": shape,
                "kind": s.kind(),
                "count": images.len(),
                "cfg": cfg_json(cfg),
            }),
        )?;
        tracing::info!(sidecar = %sidecar.display(), "provenance_written");
    }
    Ok(text)
}

fn compare(a: &str, b: &str, cfg: GeomCfg) -> Result<String> {
    tracing::info!(a, b, "compare");
    let sa = parse_shape(a, cfg)?;
    let sb = parse_shape(b, cfg)?;
    let same = sa.is_symmetric_to(&sb, cfg).with_context(|| {
        format!("cannot compare a {} with a {}", sa.kind(), sb.kind())
    })?;
    Ok(format!("{same}\n"))
}

fn report(cfg: GeomCfg) -> Result<String> {
    let obj = provenance::block(json!({ "cfg": cfg_json(cfg) }), &[]);
    Ok(format!("{}\n", serde_json::to_string_pretty(&obj)?))
}

fn cfg_json(cfg: GeomCfg) -> serde_json::Value {
    let tolerance = match cfg.tol {
        Tolerance::Exact => None,
        Tolerance::Abs(eps) => Some(eps),
    };
    json!({
        "tolerance": tolerance,
        "legacy_square_check": cfg.square_check == SquareCheck::LegacyFixedPair,
    })
}
