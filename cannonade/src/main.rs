use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use cannonade_core::{Footprint, TileMap, Vec2};
use cannonade_lib::{Search, render, run_search};
use cannonade_paths::EdgeWeights;
use clap::Parser;

#[derive(Parser)]
#[command(name = "cannonade-path")]
#[command(about = "Run a Square Cannonade path search on a text tile map")]
struct Cli {
    /// Map file: one row per line, '0' or '.' floor, 'w' or '#' wall
    map: PathBuf,

    /// Side of one tile in world units
    #[arg(long, default_value_t = 10)]
    tile_length: i32,

    /// Center of the starting entity, as X,Y
    #[arg(long, value_parser = parse_vec2)]
    start: Vec2,

    /// Center of the target entity, as X,Y
    #[arg(long, value_parser = parse_vec2)]
    end: Vec2,

    /// Side of both entities' square footprint (defaults to half a tile)
    #[arg(long, conflicts_with_all = ["width", "height"])]
    size: Option<u32>,

    /// Footprint width, for non-square entities
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Footprint height, for non-square entities
    #[arg(long, requires = "width")]
    height: Option<u32>,

    #[arg(long, default_value_t = EdgeWeights::NONDIAGONAL)]
    straight_weight: i32,

    #[arg(long, default_value_t = EdgeWeights::DIAGONAL)]
    diagonal_weight: i32,

    /// Also print the A* state of every vertex
    #[arg(long)]
    table: bool,
}

fn parse_vec2(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad X in {s:?}: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad Y in {s:?}: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.map)
        .with_context(|| format!("failed to read {}", cli.map.display()))?;
    let map = TileMap::parse(&text, cli.tile_length)
        .with_context(|| format!("failed to parse {}", cli.map.display()))?;
    log::debug!(
        "loaded {}x{} map with tile length {}",
        map.columns(),
        map.rows(),
        map.tile_length()
    );

    let (width, height) = match (cli.size, cli.width, cli.height) {
        (_, Some(w), Some(h)) => (w, h),
        (Some(s), _, _) => (s, s),
        _ => {
            let half = u32::try_from(cli.tile_length / 2).unwrap_or(0);
            (half, half)
        }
    };
    let weights = EdgeWeights::new(cli.straight_weight, cli.diagonal_weight);
    if !weights.is_valid() {
        bail!(
            "weights must satisfy 0 < straight < diagonal, got {} and {}",
            weights.nondiagonal,
            weights.diagonal
        );
    }

    let search = Search {
        start: Footprint::new(cli.start, width, height),
        end: Footprint::new(cli.end, width, height),
        weights,
    };
    let outcome = run_search(&map, &search, cli.table)?;

    print!("{}", render(&map, &outcome));
    println!();
    println!("path: {:?}", outcome.path);
    println!("tiles: {}", outcome.path.len());
    println!("cost: {}", outcome.cost);
    if let Some(table) = outcome.table {
        println!();
        print!("{table}");
    }
    Ok(())
}
