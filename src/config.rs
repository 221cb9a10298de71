//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::enemy::EnemyPoolMix;
use crate::error::{validate_capacity, validate_positive, SimError, SimResult};
use crate::geometry::FieldBounds;
use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

/// Default location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Play Field ───────────────────────────────────────────────────────────
    pub field_width: f32,
    pub field_height: f32,

    // ── Bodies ───────────────────────────────────────────────────────────────
    pub planet_radius: f32,
    pub player_radius: f32,
    pub projectile_radius: f32,

    // ── Projectiles ──────────────────────────────────────────────────────────
    pub projectile_speed: f32,
    pub projectile_pool_size: usize,

    // ── Enemies ──────────────────────────────────────────────────────────────
    pub enemy_pool_size: usize,
    pub enemy_pool_mix: EnemyPoolMix,

    // ── Session ──────────────────────────────────────────────────────────────
    pub enemy_spawn_interval_ms: f32,
    pub animation_interval_ms: f32,
    pub winning_score: u32,
    /// Fixed RNG seed for reproducible spawns; `None` seeds from entropy.
    pub seed: Option<u64>,

    // ── Rendering ────────────────────────────────────────────────────────────
    pub debug_mode: bool,
    pub hud_font_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            planet_radius: PLANET_RADIUS,
            player_radius: PLAYER_RADIUS,
            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_pool_size: PROJECTILE_POOL_SIZE,
            enemy_pool_size: ENEMY_POOL_SIZE,
            enemy_pool_mix: EnemyPoolMix::default(),
            enemy_spawn_interval_ms: ENEMY_SPAWN_INTERVAL_MS,
            animation_interval_ms: ANIMATION_INTERVAL_MS,
            winning_score: WINNING_SCORE,
            seed: None,
            debug_mode: DEBUG_MODE_ON_START,
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

impl GameConfig {
    #[inline]
    pub fn field_bounds(&self) -> FieldBounds {
        FieldBounds {
            width: self.field_width,
            height: self.field_height,
        }
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> SimResult<()> {
        validate_positive("field_width", self.field_width)?;
        validate_positive("field_height", self.field_height)?;
        validate_positive("planet_radius", self.planet_radius)?;
        validate_positive("player_radius", self.player_radius)?;
        validate_positive("projectile_radius", self.projectile_radius)?;
        validate_positive("projectile_speed", self.projectile_speed)?;
        validate_positive("enemy_spawn_interval_ms", self.enemy_spawn_interval_ms)?;
        validate_positive("animation_interval_ms", self.animation_interval_ms)?;
        validate_positive("hud_font_size", self.hud_font_size)?;
        validate_capacity("projectile_pool_size", self.projectile_pool_size)?;
        validate_capacity("enemy_pool_size", self.enemy_pool_size)?;

        let half_short_side = self.field_width.min(self.field_height) * 0.5;
        if self.planet_radius >= half_short_side {
            return Err(SimError::InvalidConfig {
                name: "planet_radius",
                value: self.planet_radius,
                expected: "smaller than half the shorter field side",
            });
        }

        if let EnemyPoolMix::Random {
            lobstermorph_chance,
        } = self.enemy_pool_mix
        {
            if !(0.0..=1.0).contains(&lobstermorph_chance) {
                return Err(SimError::InvalidConfig {
                    name: "enemy_pool_mix.random.lobstermorph_chance",
                    value: lobstermorph_chance,
                    expected: "[0.0, 1.0]",
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML document.  `origin` is only used in error messages.
    pub fn from_toml_str(contents: &str, origin: &str) -> SimResult<Self> {
        let config: GameConfig =
            toml::from_str(contents).map_err(|e| SimError::ConfigParse {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the config at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Option<Self>> {
        let path = path.as_ref();
        let display = path.display().to_string();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents, &display).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SimError::ConfigRead {
                path: display,
                message: e.to_string(),
            }),
        }
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with it.
///
/// A missing file keeps the defaults already in place.  Read, parse and
/// validation errors are logged and also keep the defaults.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    match GameConfig::load(CONFIG_PATH) {
        Ok(Some(loaded)) => {
            *config = loaded;
            info!("Loaded game config from {CONFIG_PATH}");
        }
        Ok(None) => {
            warn!("No {CONFIG_PATH} found; using compiled defaults");
        }
        Err(e) => {
            error!("{e}; using compiled defaults");
        }
    }
}
