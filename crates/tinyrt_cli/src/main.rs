//! tinyrt: render a scene with the Whitted ray tracer and write it to disk.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tinyrt_core::{demo_scene, load_scene_json, Scene};
use tinyrt_renderer::{render_parallel, save_image, Camera, RenderConfig, RenderMode};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Full Whitted shading
    Shaded,
    /// Normalized distance to the nearest surface
    Depth,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Shaded => RenderMode::Shaded,
            Mode::Depth => RenderMode::Depth,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tinyrt")]
#[command(version)]
#[command(about = "Whitted-style ray tracer: spheres, point lights and a checkerboard")]
struct Cli {
    /// Output image path (.ppm, or .png)
    #[arg(short, long, default_value = "out.ppm")]
    output: PathBuf,

    /// JSON scene file; the built-in demo scene is used if omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 1024, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 768, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f32,

    /// Deepest reflection/refraction level that is still shaded
    #[arg(long, default_value_t = 4)]
    max_depth: u32,

    /// What to render
    #[arg(long, value_enum, default_value_t = Mode::Shaded)]
    mode: Mode,

    /// Far plane for depth mode
    #[arg(long, default_value_t = 23.0)]
    far: f32,

    /// Tile size for parallel rendering
    #[arg(long, default_value_t = tinyrt_renderer::DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,

    /// Worker threads (0 = one per core)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Set logging level (overrides RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

impl Cli {
    fn camera(&self) -> Camera {
        Camera::new()
            .with_resolution(self.width, self.height)
            .with_fov(self.fov)
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            max_depth: self.max_depth,
            mode: self.mode.into(),
            far: self.far,
            bucket_size: self.bucket_size,
            ..Default::default()
        }
    }

    fn load_scene(&self) -> Result<Scene> {
        match &self.scene {
            Some(path) => load_scene_json(path)
                .with_context(|| format!("Failed to load scene {}", path.display())),
            None => Ok(demo_scene()),
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !(cli.fov > 0.0 && cli.fov < 180.0) {
        anyhow::bail!("Field of view must be between 0 and 180 degrees, got {}", cli.fov);
    }

    let scene = cli.load_scene()?;
    let camera = cli.camera();
    let config = cli.render_config();

    log::info!(
        "Rendering {}x{} ({:?}), {} spheres, {} lights",
        camera.image_width,
        camera.image_height,
        config.mode,
        scene.sphere_count(),
        scene.light_count()
    );

    let start = Instant::now();
    let (image, stats) = render_parallel(&camera, &scene, &config);
    log::info!("Rendered in {:?}", start.elapsed());
    log::debug!(
        "Cast {} rays, shaded {} hits, deepest shaded level {}",
        stats.rays,
        stats.shaded,
        stats.max_shaded_depth
    );

    save_image(&image, &cli.output)
        .with_context(|| format!("Failed to write image to {}", cli.output.display()))?;
    log::info!("Saved to {}", cli.output.display());

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(level) = cli.log_level {
        logger.filter_level(level.into());
    } else if std::env::var_os("RUST_LOG").is_none() {
        logger.filter_level(log::LevelFilter::Info);
    }
    logger.init();

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    run(&cli)
}
