//! Headless runner: seeds a grid from a config file, steps it on a fixed
//! clock and logs what happened.
//!
//! ```text
//! automata --config automata.toml --ticks 600 --paint 128,250,water,3 --paint-every 2
//! ```

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::{info, warn};
use pixel_automata::render::to_image;
use pixel_automata::{AutomataConfig, Grid, Material, TimeSeries};

#[derive(Parser, Debug)]
#[command(name = "automata", version, about = "Run a pixel automaton without a window")]
struct Args {
  /// TOML config file; built-in defaults when omitted
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Number of steps to run
  #[arg(short, long, default_value_t = 300)]
  ticks: u64,

  /// Override grid width
  #[arg(long)]
  width: Option<u32>,

  /// Override grid height
  #[arg(long)]
  height: Option<u32>,

  /// Override the seed shared by scatter seeding and jitter
  #[arg(long)]
  seed: Option<u64>,

  /// Write PNG frames into this directory
  #[arg(long)]
  frames_dir: Option<PathBuf>,

  /// Frame interval in ticks; 0 writes only the final frame
  #[arg(long)]
  frame_every: Option<u64>,

  /// Paint stroke `x,y,material[,radius]`, repeatable
  #[arg(long = "paint", value_parser = parse_stroke)]
  strokes: Vec<Stroke>,

  /// Re-apply the paint strokes every N ticks; 0 applies them once
  #[arg(long, default_value_t = 0)]
  paint_every: u64,
}

#[derive(Clone, Debug)]
struct Stroke {
  x: i64,
  y: i64,
  material: Material,
  radius: u32,
}

fn parse_stroke(s: &str) -> Result<Stroke, String> {
  let parts: Vec<&str> = s.split(',').map(str::trim).collect();
  if !(3..=4).contains(&parts.len()) {
    return Err(format!("expected x,y,material[,radius], got `{s}`"));
  }
  let x = parts[0]
    .parse::<i64>()
    .map_err(|e| format!("bad x `{}`: {e}", parts[0]))?;
  let y = parts[1]
    .parse::<i64>()
    .map_err(|e| format!("bad y `{}`: {e}", parts[1]))?;
  let material = parts[2].parse::<Material>()?;
  let radius = match parts.get(3) {
    Some(r) => r.parse::<u32>().map_err(|e| format!("bad radius `{r}`: {e}"))?,
    None => 1,
  };
  Ok(Stroke {
    x,
    y,
    material,
    radius,
  })
}

fn load_config(args: &Args) -> Result<AutomataConfig, Box<dyn Error>> {
  let mut config = match &args.config {
    Some(path) => AutomataConfig::load(path)?,
    None => AutomataConfig::default(),
  };
  if let Some(width) = args.width {
    config.grid.width = width;
  }
  if let Some(height) = args.height {
    config.grid.height = height;
  }
  if let Some(seed) = args.seed {
    config.simulation.seed = seed;
  }
  if let Some(dir) = &args.frames_dir {
    config.render.frames_dir = Some(dir.clone());
  }
  if let Some(every) = args.frame_every {
    config.render.frame_every = every;
  }
  config.validate()?;
  Ok(config)
}

fn write_frame(dir: &Path, tick: u64, grid: &Grid) -> Result<(), Box<dyn Error>> {
  let path = dir.join(format!("frame_{tick:06}.png"));
  to_image(grid).save(&path)?;
  info!("wrote {}", path.display());
  Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let args = Args::parse();
  let config = load_config(&args)?;
  let mut automaton = config.build()?;
  let (width, height) = automaton.dimensions();
  info!("initial {}", automaton.readable().census());

  let frames_dir = config.render.frames_dir.as_deref();
  if let Some(dir) = frames_dir {
    std::fs::create_dir_all(dir)?;
  }

  for stroke in &args.strokes {
    if stroke.x < 0 || stroke.y < 0 || stroke.x >= width as i64 || stroke.y >= height as i64 {
      warn!(
        "paint stroke center ({}, {}) lies outside the {}x{} grid",
        stroke.x, stroke.y, width, height
      );
    }
  }

  let dt = config.simulation.tick_seconds;
  let report_every = (args.ticks / 10).max(1);
  let mut timings = TimeSeries::new(report_every as usize);

  for i in 0..args.ticks {
    let due = if args.paint_every == 0 {
      i == 0
    } else {
      i % args.paint_every == 0
    };
    if due {
      for s in &args.strokes {
        automaton.paint(s.x, s.y, s.material, s.radius);
      }
    }

    let started = Instant::now();
    automaton.step(i as f64 * dt);
    timings.push(started.elapsed());

    let tick = automaton.tick();
    if tick % report_every == 0 {
      let (mean, min, max) = (timings.mean(), timings.min(), timings.max());
      info!(
        "tick {}: step mean {:.2?} min {:.2?} max {:.2?}, {}",
        tick,
        mean,
        min,
        max,
        automaton.readable().census()
      );
    }
    if let Some(dir) = frames_dir {
      let every = config.render.frame_every;
      if every > 0 && tick % every == 0 {
        write_frame(dir, tick, automaton.readable())?;
      }
    }
  }

  if let Some(dir) = frames_dir {
    let every = config.render.frame_every;
    let tick = automaton.tick();
    if every == 0 || tick % every != 0 {
      write_frame(dir, tick, automaton.readable())?;
    }
  }

  info!("final {}", automaton.readable().census());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_strokes() {
    let s = parse_stroke("10, 20, water").unwrap();
    assert_eq!((s.x, s.y, s.material, s.radius), (10, 20, Material::Water, 1));
    let s = parse_stroke("-3,4,wall,0").unwrap();
    assert_eq!((s.x, s.y, s.material, s.radius), (-3, 4, Material::Wall, 0));
  }

  #[test]
  fn rejects_bad_strokes() {
    assert!(parse_stroke("1,2").is_err());
    assert!(parse_stroke("1,2,lava").is_err());
    assert!(parse_stroke("a,2,sand").is_err());
    assert!(parse_stroke("1,2,sand,-1").is_err());
  }

  #[test]
  fn cli_overrides_config() {
    let args = Args::parse_from([
      "automata",
      "--width",
      "32",
      "--height",
      "16",
      "--seed",
      "9",
      "--paint",
      "1,1,sand",
      "--paint",
      "2,2,water,2",
    ]);
    let config = load_config(&args).unwrap();
    assert_eq!((config.grid.width, config.grid.height), (32, 16));
    assert_eq!(config.simulation.seed, 9);
    assert_eq!(args.strokes.len(), 2);
    assert!(load_config(&Args::parse_from(["automata", "--width", "0"])).is_err());
  }
}
