//! Command-line entry point: replay an event script and export a surface.

use clap::{Parser, ValueEnum};
use inkstamp_app::{AppConfig, AppError, AppResult, Script, Session, SurfaceKind};
use inkstamp_render::surface_to_png;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Target {
    Drawing,
    Stamp,
    Circle,
    Preview,
}

impl From<Target> for SurfaceKind {
    fn from(target: Target) -> Self {
        match target {
            Target::Drawing => SurfaceKind::Drawing,
            Target::Stamp => SurfaceKind::Stamp,
            Target::Circle => SurfaceKind::CircleStamp,
            Target::Preview => SurfaceKind::FontPreview,
        }
    }
}

/// Replay UI events against a drawing and stamp session.
#[derive(Debug, Parser)]
#[command(name = "inkstamp", version, about)]
struct Args {
    /// JSON event script
    script: PathBuf,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the target surface as a PNG here. Without it, the saved stamp
    /// data URI is printed instead.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Surface to write with --out
    #[arg(short, long, value_enum, default_value = "stamp")]
    target: Target,
}

fn run(args: &Args) -> AppResult<()> {
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let script = Script::load(&args.script)?;

    let mut session = Session::new(&config);
    session.run(&script);

    match &args.out {
        Some(path) => {
            let kind = SurfaceKind::from(args.target);
            let surface = session.surface(kind).ok_or(AppError::MissingSurface(kind.name()))?;
            let png = surface_to_png(surface)?;
            std::fs::write(path, png).map_err(|source| AppError::Write {
                path: path.clone(),
                source,
            })?;
            log::info!("Wrote {} surface to: {:?}", kind.name(), path);
        }
        None => match session.stamp_data_url() {
            Some(uri) => println!("{uri}"),
            None => log::warn!("No stamp was saved"),
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Starting InkStamp");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("inkstamp: {e}");
            ExitCode::FAILURE
        }
    }
}
