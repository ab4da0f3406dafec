#![deny(unsafe_code)]
//! CLI binary for gl-sketches.
//!
//! Subcommands:
//! - `list` — print available sketches
//! - `describe <sketch>` — print the scene's passes and draw calls
//! - `render <sketch>` — rasterize a sketch on the CPU, write PNG
//! - `point` — replay clicks and key presses through the point exercise

mod error;
mod logging;

use clap::{Parser, Subcommand};
use error::CliError;
use gl_sketches_core::{PointExercise, Scene};
use gl_sketches_gallery::raster::render_scene;
use gl_sketches_gallery::SketchKind;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "gl-sketches", about = "WebGL sketch gallery CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log filter (e.g. "debug"); falls back to RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available sketches.
    List,
    /// Print a sketch's passes and draw calls.
    Describe {
        /// Sketch name (e.g. "flower").
        sketch: String,

        /// Sketch parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Include every vertex and color (JSON output only).
        #[arg(long)]
        vertices: bool,
    },
    /// Rasterize a sketch on the CPU and write a PNG snapshot.
    Render {
        /// Sketch name (e.g. "car").
        sketch: String,

        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 400)]
        width: u32,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 400)]
        height: u32,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Sketch parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Replay input through the point exercise.
    Point {
        /// Mouse-down at canvas pixel offset "X,Y". Repeatable.
        #[arg(long = "click")]
        clicks: Vec<String>,

        /// Key name as reported by the browser ("c", "ArrowUp", "ArrowDown"). Repeatable.
        #[arg(long = "key")]
        keys: Vec<String>,

        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 400)]
        width: u32,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 400)]
        height: u32,

        /// PRNG seed for the recolor sequence.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Write the final frame to this PNG.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parses "X,Y" into a pixel offset.
fn parse_click(s: &str) -> Result<(f32, f32), CliError> {
    let bad = |reason: String| CliError::Click {
        value: s.to_string(),
        reason,
    };
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| bad("expected X,Y".into()))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f32>()
            .map_err(|e| bad(format!("'{}': {e}", v.trim())))
    };
    Ok((coord(x)?, coord(y)?))
}

fn parse_params(params: &str) -> Result<Value, CliError> {
    serde_json::from_str(params).map_err(CliError::Params)
}

/// Pass and draw outline of a scene.
fn scene_summary(scene: &Scene) -> Value {
    let passes: Vec<Value> = scene
        .passes
        .iter()
        .map(|pass| {
            json!({
                "label": pass.label,
                "vertices": pass.shape.vertex_count(),
                "per_vertex_color": pass.shape.colors.is_some(),
                "draws": pass.draws,
            })
        })
        .collect();
    json!({
        "name": scene.name,
        "program": scene.program,
        "clear_color": scene.clear_color,
        "draw_count": scene.draw_count(),
        "passes": passes,
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let sketches = SketchKind::list_sketches();
            if cli.json {
                let info = json!({
                    "sketches": sketches,
                    "interactive": ["point"],
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Sketches:");
                for name in sketches {
                    println!("  {name}");
                }
                println!("Interactive:");
                println!("  point");
            }
        }
        Command::Describe {
            sketch,
            params,
            vertices,
        } => {
            let params = parse_params(&params)?;
            let kind = SketchKind::from_name(&sketch, &params)?;
            let scene = kind.scene();
            scene.validate()?;

            if cli.json {
                let info = if vertices {
                    serde_json::to_value(&scene)?
                } else {
                    let mut summary = scene_summary(&scene);
                    summary["canvas_id"] = json!(kind.canvas_id());
                    summary["params"] = kind.params();
                    summary
                };
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{} ({:?}, canvas #{})",
                    scene.name,
                    scene.program,
                    kind.canvas_id()
                );
                for pass in &scene.passes {
                    println!("  {} [{} vertices]", pass.label, pass.shape.vertex_count());
                    for draw in &pass.draws {
                        println!(
                            "    {:?} {}..{}",
                            draw.primitive,
                            draw.first,
                            draw.end()
                        );
                    }
                }
            }
        }
        Command::Render {
            sketch,
            width,
            height,
            output,
            params,
        } => {
            let params = parse_params(&params)?;
            let kind = SketchKind::from_name(&sketch, &params)?;
            let raster = render_scene(&kind.scene(), width, height)?;
            gl_sketches_gallery::snapshot::write_png(&raster, &output)
                .map_err(|e| CliError::snapshot(&output, e))?;

            if cli.json {
                let info = json!({
                    "sketch": sketch,
                    "width": width,
                    "height": height,
                    "params": kind.params(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!("rendered {sketch} ({width}x{height}) -> {}", output.display());
            }
        }
        Command::Point {
            clicks,
            keys,
            width,
            height,
            seed,
            output,
        } => {
            let mut exercise = PointExercise::new(seed);
            for click in &clicks {
                let (x, y) = parse_click(click)?;
                exercise.click(x, y, width, height)?;
            }
            for name in &keys {
                if exercise.press_named(name).is_none() {
                    return Err(CliError::Key(name.clone()));
                }
            }

            if let Some(path) = &output {
                let raster = render_scene(&exercise.scene(), width, height)?;
                gl_sketches_gallery::snapshot::write_png(&raster, path)
                    .map_err(|e| CliError::snapshot(path, e))?;
            }

            let position = exercise.position();
            let color = exercise.color();
            if cli.json {
                let info = json!({
                    "position": position,
                    "point_size": exercise.point_size(),
                    "color": color,
                    "output": output.as_ref().map(|p| p.display().to_string()),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "point at ({:.3}, {:.3}), size {}, color ({:.3}, {:.3}, {:.3})",
                    position.x,
                    position.y,
                    exercise.point_size(),
                    color.r,
                    color.g,
                    color.b
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref());
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
