//! Runtime configuration read from the environment.

use std::env;
use std::path::PathBuf;

use game_content::GameSettings;

use crate::session::{DEFAULT_FRAME_DT, DEFAULT_MAX_FRAMES};

pub const DEFAULT_DATA_DIR: &str = "data";
const FALLBACK_SAVE_DIR: &str = "./saves";

#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Seed for the whole run. Fresh from `rand` when unset.
    pub seed: u64,
    pub data_dir: PathBuf,
    pub save_dir: PathBuf,
    /// Overrides `[dungeon] floors_count` from the content config.
    pub floors: Option<u32>,
    pub frame_dt: f64,
    pub max_frames: u32,
    /// Overrides `[combat] hold_when_ready` from the content config.
    pub hold_when_ready: Option<bool>,
    pub log_file: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("DUNGEON_SEED") {
            config.seed = seed;
        }
        if let Ok(dir) = env::var("DUNGEON_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var("DUNGEON_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }

        config.floors = read_env::<u32>("DUNGEON_FLOORS").map(|n| n.max(1));

        if let Some(dt) = read_env::<f64>("COMBAT_FRAME_DT").filter(|dt| dt.is_finite() && *dt > 0.0) {
            config.frame_dt = dt;
        }
        if let Some(frames) = read_env::<u32>("COMBAT_MAX_FRAMES") {
            config.max_frames = frames.max(1);
        }
        config.hold_when_ready = read_env::<bool>("COMBAT_HOLD_WHEN_READY");
        config.log_file = env::var("DUNGEON_LOG_FILE").ok().map(PathBuf::from);

        config
    }

    /// Applies the environment overrides on top of file settings.
    pub fn apply_to(&self, mut settings: GameSettings) -> GameSettings {
        if let Some(floors) = self.floors {
            settings.dungeon.floors_count = floors;
        }
        if let Some(hold) = self.hold_when_ready {
            settings.combat.hold_when_ready = hold;
        }
        settings
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            save_dir: default_save_dir(),
            floors: None,
            frame_dt: DEFAULT_FRAME_DT,
            max_frames: DEFAULT_MAX_FRAMES,
            hold_when_ready: None,
            log_file: None,
        }
    }
}

/// Platform data directory, or `./saves` when it cannot be determined.
pub fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "dungeon")
        .map(|dirs| dirs.data_dir().join("saves"))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_SAVE_DIR))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_on_top_of_settings() {
        let config = RuntimeConfig {
            floors: Some(5),
            hold_when_ready: Some(true),
            ..RuntimeConfig::default()
        };
        let settings = config.apply_to(GameSettings::default());

        assert_eq!(settings.dungeon.floors_count, 5);
        assert!(settings.combat.hold_when_ready);
    }

    #[test]
    fn test_no_overrides_keep_settings() {
        let config = RuntimeConfig::default();
        let settings = config.apply_to(GameSettings::default());
        assert_eq!(settings, GameSettings::default());
    }
}
