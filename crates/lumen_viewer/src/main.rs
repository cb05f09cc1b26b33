use std::f32::consts::TAU;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::{render, LightingMode, RenderConfig};

mod demo;

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    ObservedArea,
    Radiance,
    Brdf,
    Combined,
}

impl From<Mode> for LightingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::ObservedArea => LightingMode::ObservedArea,
            Mode::Radiance => LightingMode::Radiance,
            Mode::Brdf => LightingMode::Brdf,
            Mode::Combined => LightingMode::Combined,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SceneChoice {
    /// Cook-Torrance sphere grid with cull-mode triangles
    Reference,
    /// An OBJ model loaded via --obj
    Obj,
}

#[derive(Parser)]
#[command(name = "lumen_viewer")]
#[command(about = "CPU ray tracer")]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "640")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480")]
    height: u32,

    /// Which demo scene to render
    #[arg(long, value_enum, default_value = "reference")]
    scene: SceneChoice,

    /// Path to an OBJ model (required for the obj scene)
    #[arg(long)]
    obj: Option<PathBuf>,

    /// Which factor of the lighting equation to visualize
    #[arg(long, value_enum, default_value = "combined")]
    mode: Mode,

    /// Disable shadow rays
    #[arg(long)]
    no_shadows: bool,

    /// JSON render config file; overrides the resolution and mode flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output PNG path; frame numbers are appended when --frames > 1
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Number of animation frames to render at a fixed 30 Hz timestep
    #[arg(long, default_value = "1")]
    frames: u32,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    debug_level: LogLevel,
}

const FRAME_DT: f32 = 1.0 / 30.0;

fn load_config(args: &Args) -> anyhow::Result<RenderConfig> {
    if let Some(path) = &args.config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        return serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()));
    }
    Ok(RenderConfig {
        width: args.width,
        height: args.height,
        lighting_mode: args.mode.into(),
        shadows_enabled: !args.no_shadows,
    })
}

fn frame_path(output: &Path, frame: u32, frames: u32) -> PathBuf {
    if frames <= 1 {
        return output.to_path_buf();
    }
    let stem = output.file_stem().unwrap_or_default().to_string_lossy();
    let ext = output.extension().unwrap_or_default().to_string_lossy();
    output.with_file_name(format!("{stem}_{frame:04}.{ext}"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.debug_level.clone().into())
        .init();

    let config = load_config(&args)?;
    let mut scene = match args.scene {
        SceneChoice::Reference => demo::reference_scene(),
        SceneChoice::Obj => {
            let path = args
                .obj
                .as_deref()
                .context("--obj <path> is required for the obj scene")?;
            demo::obj_scene(path)?
        }
    };

    log::info!(
        "rendering {} frame(s) at {}x{}, {} spheres, {} triangles",
        args.frames,
        config.width,
        config.height,
        scene.spheres.len(),
        scene.triangle_count()
    );

    for frame in 0..args.frames {
        let t = frame as f32 * FRAME_DT;
        let yaw = (t.cos() + 1.0) / 2.0 * TAU;
        for mesh in &mut scene.meshes {
            mesh.rotate_y(yaw);
        }

        let framebuffer = render(&scene, &config);
        let path = frame_path(&args.output, frame, args.frames);
        framebuffer
            .save_png(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}
