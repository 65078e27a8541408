use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Sweep limits of the tilt motor, degrees.
const MIN_ANGLE: i32 = -30;
const MAX_ANGLE: i32 = 30;

const DIR_UP: u8 = 0;
const DIR_DOWN: u8 = 1;

/// Column names, first line of every capture.
const FIELD_NAMES: [&str; 4] = ["index", "depth_value", "angle", "direction"];

/// Largest value of an 11-bit depth sample.
const MAX_DEPTH: f64 = 2047.0;

/// Depth of a wall facing the scanner at zero tilt, raw units.
const WALL_DEPTH: f64 = 780.0;

/// Gaussian noise from two uniform draws (Box-Muller).
fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

/// One output row, same layout as the scanner firmware writes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct Row {
    index: u32,
    depth_value: u16,
    angle: i32,
    direction: u8,
}

/// Tilt motor state machine: bounces between the sweep limits.
struct Sweep {
    angle: i32,
    direction: u8,
    semi_cycles: u32,
}

impl Sweep {
    fn new() -> Self {
        Sweep {
            angle: MIN_ANGLE,
            direction: DIR_UP,
            semi_cycles: 0,
        }
    }

    /// Move one degree, reversing at the limits.
    fn step(&mut self) {
        if self.direction == DIR_UP {
            if self.angle >= MAX_ANGLE {
                self.direction = DIR_DOWN;
                self.angle -= 1;
                self.semi_cycles += 1;
            } else {
                self.angle += 1;
            }
        } else if self.angle <= MIN_ANGLE {
            self.direction = DIR_UP;
            self.angle += 1;
            self.semi_cycles += 1;
        } else {
            self.angle -= 1;
        }
    }
}

/// Flat wall seen through a tilting beam: depth grows with 1/cos(angle).
fn wall_depth(angle: i32, rng: &mut StdRng) -> u16 {
    let theta = (angle as f64).to_radians();
    let depth = WALL_DEPTH / theta.cos() + gauss(rng, 0.0, 3.0);
    depth.round().clamp(0.0, MAX_DEPTH) as u16
}

fn generate(semi_cycles: u32, seed: u64) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sweep = Sweep::new();
    let mut rows = Vec::new();

    while sweep.semi_cycles < semi_cycles {
        sweep.step();
        rows.push(Row {
            index: rows.len() as u32,
            depth_value: wall_depth(sweep.angle, &mut rng),
            angle: sweep.angle,
            direction: sweep.direction,
        });
    }
    rows
}

fn write_rows<W: std::io::Write>(wtr: W, rows: &[Row]) -> Result<()> {
    // Header is written up front so an empty capture still has one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(wtr);
    writer.write_record(FIELD_NAMES)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let output_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("linear_scanner.csv"));
    let semi_cycles: u32 = match args.next() {
        Some(arg) => arg
            .to_string_lossy()
            .parse()
            .context("SEMI_CYCLES must be a positive integer")?,
        None => 1,
    };
    if semi_cycles == 0 {
        bail!("SEMI_CYCLES must be a positive integer");
    }

    let rows = generate(semi_cycles, 42);
    log::debug!("generated {} rows over {semi_cycles} semi-cycles", rows.len());

    let file = std::fs::File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    write_rows(file, &rows)?;

    println!(
        "Wrote {} readings ({semi_cycles} semi-cycles) to {}",
        rows.len(),
        output_path.display()
    );
    Ok(())
}
