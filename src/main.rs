use std::{path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Result;
use structopt::StructOpt;

mod camera;
mod canvas;
mod config;
mod intersection;
mod light;
mod logging;
mod material;
mod render;
mod scene;
mod shading;
mod shape;
mod window;


use canvas::Canvas;
use config::{CliOverrides, Config};
use logging::{init_logging, LoggingConfig};
use scene::SceneKind;
use window::{window_loop, MinifbSurface};

/// Renders a single Phong-shaded sphere and shows it in a window
#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// Scene preset, "pinhole" or "look-at"
    #[structopt(long)]
    pub scene: Option<SceneKind>,
    /// TOML file overriding scene parameters
    #[structopt(long, parse(from_os_str))]
    pub config: Option<PathBuf>,
    #[structopt(long)]
    pub width: Option<usize>,
    #[structopt(long)]
    pub height: Option<usize>,
    /// Also save the frame to this image file
    #[structopt(short, long, parse(from_os_str))]
    pub output: Option<PathBuf>,
    /// Don't open a window
    #[structopt(long)]
    pub headless: bool,
    /// env_logger filter, defaults to RUST_LOG or "info"
    #[structopt(long)]
    pub log_level: Option<String>,
}

fn run(opts: Opt) -> Result<()> {
    let config = match &opts.config {
        Some(path) => Config::load(path)?,
        None => Config::default()
    };

    let config = config.merge_cli(CliOverrides {
        scene: opts.scene,
        width: opts.width,
        height: opts.height,
        output: opts.output,
        headless: opts.headless
    })?;

    let scene = config.scene(SceneKind::Pinhole);

    log::info!("Rendering {} scene at {}x{}", scene.kind, scene.width, scene.height);

    let mut canvas = Canvas::new(scene.width, scene.height, scene.format);

    let now = Instant::now();
    let stats = render::render(&scene, &mut canvas);

    log::info!(
        "Rendered {} pixels ({} on the sphere) in {:.2?}",
        stats.pixels, stats.hits, now.elapsed()
    );

    if let Some(path) = &config.output {
        canvas.save(path)?;
        log::info!("Saved → {}", path.display());
    }

    if !opts.headless {
        let mut surface = MinifbSurface::open(&scene.title, scene.width, scene.height)?;

        window_loop(&mut surface, &canvas, scene.present)?;
    }

    Ok(())
}

/// Logs a failed run once and turns it into the process exit status
fn report(result: Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{:#}", e);
            1
        }
    }
}

fn main() -> ExitCode {
    let opts = Opt::from_args();

    init_logging(LoggingConfig { filter: opts.log_level.clone() });

    ExitCode::from(report(run(opts)))
}
