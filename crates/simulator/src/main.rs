//! Headless dungeon simulator.
//!
//! Plays seeded runs with the AI controlling both the player and the
//! enemies, records meta progress, and saves it after every run.
//!
//! # Environment
//!
//! Everything is read from the environment (a `.env` file is honoured):
//!
//! - `DUNGEON_SEED`, `DUNGEON_DATA_DIR`, `DUNGEON_SAVE_DIR`, `DUNGEON_FLOORS`
//! - `COMBAT_FRAME_DT`, `COMBAT_MAX_FRAMES`, `COMBAT_HOLD_WHEN_READY`
//! - `DUNGEON_LOG_FILE` adds a file log next to stderr
//! - `SIM_RUNS` number of runs (default 1), `SIM_JSON` prints summaries as JSON
//!
//! ```bash
//! DUNGEON_SEED=42 SIM_RUNS=10 cargo run -p dungeon-sim
//! ```
mod logging;

use std::env;

use anyhow::{Context, Result};
use game_content::{ContentFactory, GameSettings};
use game_core::PcgRng;
use runtime::{
    AiActionProvider, AutoPlayer, FileMetaRepository, GamePhase, MetaRepository, OracleManager,
    RunDriver, RuntimeConfig,
};

struct SimulatorConfig {
    runs: u32,
    json: bool,
}

impl SimulatorConfig {
    fn from_env() -> Self {
        Self {
            runs: read_env::<u32>("SIM_RUNS").unwrap_or(1).max(1),
            json: read_env::<bool>("SIM_JSON").unwrap_or(false),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let config = RuntimeConfig::from_env();
    let sim = SimulatorConfig::from_env();
    let _guard = logging::setup_logging(config.log_file.as_deref())?;

    tracing::info!("Starting dungeon simulator: seed={}, runs={}", config.seed, sim.runs);

    let factory = ContentFactory::new(&config.data_dir);
    let settings = factory.load_settings().unwrap_or_else(|e| {
        tracing::warn!("{:#}; using default settings", e);
        GameSettings::default()
    });
    let settings = config.apply_to(settings);
    let oracles = OracleManager::load_or_builtin(&factory);

    let repo = FileMetaRepository::new(&config.save_dir).with_context(|| {
        format!("failed to open save directory {}", config.save_dir.display())
    })?;
    let mut meta = repo.load()?;

    let ai = AiActionProvider::from_config(&settings.combat);
    let player = AutoPlayer::new(&ai, &ai, settings.combat.clone())
        .with_frame_dt(config.frame_dt)
        .with_max_frames(config.max_frames);

    let mut victories = 0;
    for run in 0..sim.runs {
        let seed = config.seed.wrapping_add(u64::from(run));
        let mut rng = PcgRng::seeded(seed);

        let mut driver = RunDriver::start(oracles.clone(), settings.dungeon.clone(), meta, &mut rng);
        let summary = player.play(&mut driver, &mut rng).await?;
        meta = driver.into_meta();
        repo.save(&meta)?;

        if summary.outcome == GamePhase::Victory {
            victories += 1;
        }
        if sim.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!(
                "run {:>3} seed {:<20} {:<8} floor {} rooms {:>2} hp {:>3} treasures {}",
                run + 1,
                seed,
                summary.outcome.to_string(),
                summary.floor_reached,
                summary.rooms_cleared,
                summary.player_hp,
                summary.treasures.len()
            );
        }
    }

    tracing::info!(
        "Finished {} runs: {} victories. Lifetime: {} runs, {} clears, {} trophies",
        sim.runs,
        victories,
        meta.stats.total_runs,
        meta.stats.total_clears,
        meta.unlocked_trophies.len()
    );
    tracing::info!("Progress saved to {}", repo.save_path().display());
    Ok(())
}
