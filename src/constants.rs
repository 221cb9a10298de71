//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place.  [`crate::config::GameConfig`] mirrors every value
//! and lets `assets/game.toml` override any subset at startup.
//!
//! Distances are in play-field pixels (origin top-left, +Y down).  Times are
//! in milliseconds because the driver hands the simulation a millisecond delta.

// ── Play Field ────────────────────────────────────────────────────────────────

/// Width of the play field.  The window is created at the same size so one
/// play-field unit maps to one logical pixel.
pub const FIELD_WIDTH: f32 = 800.0;

/// Height of the play field.
pub const FIELD_HEIGHT: f32 = 800.0;

// ── Planet ────────────────────────────────────────────────────────────────────

/// Collision radius of the central planet.  The planet sits at the field centre.
pub const PLANET_RADIUS: f32 = 80.0;

// ── Player ────────────────────────────────────────────────────────────────────

/// Collision radius of the player ship.
///
/// The ship orbits at `PLANET_RADIUS + PLAYER_RADIUS` from the planet centre,
/// so it always sits flush against the planet surface.
pub const PLAYER_RADIUS: f32 = 40.0;

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Collision radius of a projectile.
pub const PROJECTILE_RADIUS: f32 = 5.0;

/// Distance a projectile travels per tick.  Applied to the unit aim vector.
pub const PROJECTILE_SPEED: f32 = 5.0;

/// Number of projectile slots allocated at startup.
///
/// Firing with every slot in flight silently drops the shot.
pub const PROJECTILE_POOL_SIZE: usize = 30;

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Number of enemy slots allocated at startup.
pub const ENEMY_POOL_SIZE: usize = 20;

/// Sprite frame edge length shared by both enemy variants.
pub const ENEMY_SPRITE_SIZE: f32 = 100.0;

/// Collision radius shared by both enemy variants.
pub const ENEMY_RADIUS: f32 = 40.0;

/// Number of sprite rows on the enemy sheets.  Picked at random per spawn.
pub const ENEMY_ANIMATION_ROWS: u32 = 4;

/// Last animation frame of the asteroid sheet.
pub const ASTEROID_MAX_FRAME: u32 = 7;

/// Hit points (and kill reward) of an asteroid.
pub const ASTEROID_MAX_HIT_POINTS: u32 = 1;

/// Last animation frame of the lobstermorph sheet.
pub const LOBSTERMORPH_MAX_FRAME: u32 = 14;

/// Hit points (and kill reward) of a lobstermorph.
pub const LOBSTERMORPH_MAX_HIT_POINTS: u32 = 8;

// ── Session Timers ────────────────────────────────────────────────────────────

/// Milliseconds between enemy spawn attempts.
pub const ENEMY_SPAWN_INTERVAL_MS: f32 = 1000.0;

/// Milliseconds between global sprite-frame advances.
///
/// Gates the death animation: a dying enemy advances one frame each time this
/// interval elapses, independent of the render frame rate.
pub const ANIMATION_INTERVAL_MS: f32 = 150.0;

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Score at which the session is won.
pub const WINNING_SCORE: u32 = 10;

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Font size of the score HUD.
pub const HUD_FONT_SIZE: f32 = 22.0;

/// Whether collision circles and hit-point overlays start visible.
pub const DEBUG_MODE_ON_START: bool = true;
