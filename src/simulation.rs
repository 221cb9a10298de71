//! Session simulation: owns every body and pool and advances them once per tick.
//!
//! ## Tick order
//!
//! 1. Apply the [`InputSample`] (restart, pointer, debug toggle, fire)
//! 2. Player re-aims and moves along its orbit
//! 3. Active projectiles move and expire at the field edge
//! 4. Active enemies move, collide, take hits and pay out kill rewards
//! 5. Enemy spawn timer (paused once the session is won)
//! 6. Sprite animation gate, consumed by the *next* enemy pass
//! 7. Win check
//!
//! [`Simulation`] is plain data with no ECS dependency so it can be driven
//! headlessly; [`SimulationPlugin`] wraps it in a Bevy resource for the game.

use crate::config::{load_game_config, GameConfig};
use crate::enemy::{Enemy, EnemyKind, EnemyTickContext};
use crate::error::SimResult;
use crate::geometry::FieldBounds;
use crate::input::InputSample;
use crate::planet::Planet;
use crate::player::Player;
use crate::pool::Pool;
use crate::projectile::Projectile;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// What happened during one [`Simulation::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub shot_fired: bool,
    pub enemy_spawned: bool,
    pub points_awarded: u32,
    /// `true` only on the tick the session was won.
    pub won: bool,
}

pub struct Simulation {
    bounds: FieldBounds,
    planet: Planet,
    player: Player,
    projectiles: Pool<Projectile>,
    enemies: Pool<Enemy>,
    projectile_speed: f32,
    pointer: Vec2,
    score: u32,
    winning_score: u32,
    game_over: bool,
    enemy_spawn_timer: f32,
    enemy_spawn_interval: f32,
    animation_timer: f32,
    animation_interval: f32,
    sprite_update: bool,
    debug_mode: bool,
    rng: StdRng,
}

impl Simulation {
    /// Build a session from a validated copy of `config`.
    ///
    /// Every pool slot is allocated here; nothing allocates after this returns.
    pub fn new(config: &GameConfig) -> SimResult<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let bounds = config.field_bounds();
        let planet = Planet::new(bounds.center(), config.planet_radius);
        let player = Player::new(&planet, config.player_radius);
        let projectiles = Pool::new(config.projectile_pool_size, |_| {
            Projectile::new(config.projectile_radius)
        });
        let mix = config.enemy_pool_mix;
        let enemies = Pool::new(config.enemy_pool_size, |index| {
            Enemy::new(mix.kind_for_slot(index, &mut rng))
        });

        Ok(Self {
            bounds,
            planet,
            player,
            projectiles,
            enemies,
            projectile_speed: config.projectile_speed,
            pointer: Vec2::ZERO,
            score: 0,
            winning_score: config.winning_score,
            game_over: false,
            enemy_spawn_timer: 0.0,
            enemy_spawn_interval: config.enemy_spawn_interval_ms,
            animation_timer: 0.0,
            animation_interval: config.animation_interval_ms,
            sprite_update: false,
            debug_mode: config.debug_mode,
            rng,
        })
    }

    /// Advance the session by `delta_ms` milliseconds.
    pub fn tick(&mut self, delta_ms: f32, input: InputSample) -> TickReport {
        let mut report = TickReport::default();

        // 1. Input
        // Restart is only honoured once the session has been won.
        if input.restart && self.game_over {
            self.restart();
        }
        if let Some(pointer) = input.pointer {
            self.pointer = pointer;
        }
        if input.toggle_debug {
            self.debug_mode = !self.debug_mode;
        }
        if input.fire {
            report.shot_fired = self.player.fire(&mut self.projectiles, self.projectile_speed);
        }

        // 2. Player
        self.player.tick(&self.planet, self.pointer);

        // 3. Projectiles
        let bounds = self.bounds;
        self.projectiles.for_each_active(|p| p.tick(bounds));

        // 4. Enemies
        let mut ctx = EnemyTickContext {
            planet: self.planet.circle(),
            player: self.player.circle(),
            projectiles: &mut self.projectiles,
            sprite_update: self.sprite_update,
        };
        for enemy in self.enemies.iter_active_mut() {
            if let Some(reward) = enemy.tick(&mut ctx) {
                report.points_awarded += reward;
            }
        }
        self.score += report.points_awarded;

        // 5. Spawning
        if !self.game_over {
            self.enemy_spawn_timer += delta_ms;
            if self.enemy_spawn_timer >= self.enemy_spawn_interval {
                self.enemy_spawn_timer = 0.0;
                report.enemy_spawned = self.spawn_enemy();
            }
        }

        // 6. Animation gate
        self.animation_timer += delta_ms;
        if self.animation_timer >= self.animation_interval {
            self.animation_timer = 0.0;
            self.sprite_update = true;
        } else {
            self.sprite_update = false;
        }

        // 7. Win check
        if !self.game_over && self.score >= self.winning_score {
            self.game_over = true;
            report.won = true;
            info!("Session won with score {}", self.score);
        }

        report
    }

    /// Activate the first free enemy slot.  Returns `false` when the pool is full.
    fn spawn_enemy(&mut self) -> bool {
        match self.enemies.acquire_free() {
            Some(enemy) => {
                enemy.spawn(&mut self.rng, self.bounds, self.planet.position);
                debug!(
                    "{} spawned at ({:.0}, {:.0})",
                    enemy.kind.label(),
                    enemy.position.x,
                    enemy.position.y
                );
                true
            }
            None => false,
        }
    }

    /// Start a fresh session in place: clears both pools, the score and the
    /// timers.  Pool slots and their variants are kept.
    pub fn restart(&mut self) {
        for projectile in self.projectiles.iter_mut() {
            projectile.deactivate();
        }
        for enemy in self.enemies.iter_mut() {
            *enemy = Enemy::new(enemy.kind);
        }
        self.score = 0;
        self.game_over = false;
        self.enemy_spawn_timer = 0.0;
        self.animation_timer = 0.0;
        self.sprite_update = false;
        info!("Session restarted");
    }

    // ── Read-only access ──────────────────────────────────────────────────────

    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn projectiles(&self) -> &Pool<Projectile> {
        &self.projectiles
    }

    pub fn enemies(&self) -> &Pool<Enemy> {
        &self.enemies
    }

    pub fn bounds(&self) -> FieldBounds {
        self.bounds
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Whether the sprite gate is open for the next enemy pass.
    pub fn sprite_update(&self) -> bool {
        self.sprite_update
    }

    /// Banner text once the session is over.
    pub fn status_message(&self) -> Option<String> {
        self.game_over
            .then(|| format!("You win, your score is {}!", self.score))
    }

    // ── Scripted scenarios ────────────────────────────────────────────────────

    /// Mutable pool access for scripted scenarios and tests.
    pub fn projectiles_mut(&mut self) -> &mut Pool<Projectile> {
        &mut self.projectiles
    }

    /// Mutable pool access for scripted scenarios and tests.
    pub fn enemies_mut(&mut self) -> &mut Pool<Enemy> {
        &mut self.enemies
    }

    /// Frame-consistent copy of everything a renderer needs.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            planet: BodySnapshot {
                pos: self.planet.position.to_array(),
                radius: self.planet.radius,
            },
            player: PlayerSnapshot {
                pos: self.player.position.to_array(),
                radius: self.player.radius,
                angle: self.player.orientation_angle,
            },
            projectiles: self
                .projectiles
                .iter_active()
                .map(|p| BodySnapshot {
                    pos: p.position.to_array(),
                    radius: p.radius,
                })
                .collect(),
            enemies: self
                .enemies
                .iter_active()
                .map(|e| EnemySnapshot {
                    pos: e.position.to_array(),
                    radius: e.radius,
                    size: e.kind.sprite_size().to_array(),
                    kind: e.kind,
                    frame: e.animation_frame,
                    row: e.animation_row,
                    hit_points: self.debug_mode.then_some(e.hit_points),
                })
                .collect(),
            score: self.score,
            game_over: self.game_over,
            debug_mode: self.debug_mode,
            message: self.status_message(),
        }
    }
}

// ── Snapshots ─────────────────────────────────────────────────────────────────

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub pos: [f32; 2],
    pub radius: f32,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub pos: [f32; 2],
    pub radius: f32,
    pub angle: f32,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct EnemySnapshot {
    pub pos: [f32; 2],
    pub radius: f32,
    /// Sprite frame `[width, height]`.
    pub size: [f32; 2],
    pub kind: EnemyKind,
    pub frame: u32,
    pub row: u32,
    /// Only populated in debug mode.
    pub hit_points: Option<u32>,
}

/// Read-only view of one frame.  Only active entities are included.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub planet: BodySnapshot,
    pub player: PlayerSnapshot,
    pub projectiles: Vec<BodySnapshot>,
    pub enemies: Vec<EnemySnapshot>,
    pub score: u32,
    pub game_over: bool,
    pub debug_mode: bool,
    pub message: Option<String>,
}

// ── Bevy integration ──────────────────────────────────────────────────────────

/// The running session, stored as a Bevy resource.
#[derive(Resource)]
pub struct ActiveSimulation(pub Simulation);

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSample>()
            .add_systems(Startup, setup_simulation.after(load_game_config))
            .add_systems(Update, simulation_tick_system);
    }
}

/// Startup system: build the session from the loaded [`GameConfig`].
pub fn setup_simulation(mut commands: Commands, config: Res<GameConfig>) {
    let simulation = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(e) => {
            error!("{e}; starting with compiled defaults");
            let defaults = GameConfig {
                seed: config.seed,
                ..GameConfig::default()
            };
            match Simulation::new(&defaults) {
                Ok(sim) => sim,
                Err(e) => {
                    error!("Default config rejected: {e}");
                    return;
                }
            }
        }
    };
    info!(
        "Session ready: {} projectile slots, {} enemy slots",
        simulation.projectiles().capacity(),
        simulation.enemies().capacity()
    );
    commands.insert_resource(ActiveSimulation(simulation));
}

/// Advance the session once per frame and consume the edge-triggered input.
pub fn simulation_tick_system(
    time: Res<Time>,
    mut input: ResMut<InputSample>,
    simulation: Option<ResMut<ActiveSimulation>>,
) {
    let Some(mut simulation) = simulation else {
        return;
    };
    let sample = std::mem::take(&mut *input);
    simulation.0.tick(time.delta_secs() * 1000.0, sample);
}
