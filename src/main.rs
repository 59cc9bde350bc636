//! Epic Shooter entry point
//!
//! Headless runner: loads settings, optionally checks the asset bundle, then
//! lets the autopilot play at the fixed frame rate until the ship is destroyed.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use epic_shooter::assets::{self, AssetManifest};
use epic_shooter::audio::AudioManager;
use epic_shooter::platform::{Autopilot, FixedRatePacer};
use epic_shooter::renderer::LogRenderer;
use epic_shooter::{GameError, RunSummary, Settings, SimulationLoop};

/// Directory to verify assets in before starting, relative to the bundle
/// directory when packaged
const ASSETS_ENV: &str = "EPIC_SHOOTER_ASSETS";

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Epic Shooter (headless) starting...");

    match run() {
        Ok(summary) => {
            println!(
                "Final score: {} ({} frames, health {})",
                summary.score, summary.frames, summary.health
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<RunSummary, GameError> {
    let settings = Settings::load()?;

    let manifest = match std::env::var_os(ASSETS_ENV) {
        Some(dir) => Some(AssetManifest::new(assets::resource_path(dir))),
        None if std::env::var_os(assets::BUNDLE_DIR_ENV).is_some() => {
            Some(AssetManifest::bundled())
        }
        None => None,
    };
    match manifest {
        Some(manifest) => manifest.verify()?,
        None => log::info!("{} not set - skipping asset check", ASSETS_ENV),
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let pacer = FixedRatePacer::new(settings.frame_rate);
    log::info!("Pacing at {:?} per frame", pacer.frame_duration());
    let summary_every = settings.frame_rate as u64;
    let mut game = SimulationLoop::new(
        settings,
        seed,
        Autopilot::new(None),
        LogRenderer::new(summary_every),
        AudioManager::default(),
        pacer,
    )?;
    Ok(game.run())
}
