//! Pooled enemies: edge spawning, homing toward the planet, projectile hits,
//! and the death animation that gates removal and scoring.
//!
//! ## Lifecycle
//!
//! | Phase      | Condition                      | Behaviour                                  |
//! |------------|--------------------------------|--------------------------------------------|
//! | `Inactive` | `active == false`              | Ignored by collision, scoring, rendering   |
//! | `Active`   | `active`, `hit_points >= 1`    | Homes in, takes projectile hits            |
//! | `Dying`    | `active`, `hit_points == 0`    | Animation advances on the sprite gate      |
//!
//! A dying enemy leaves the pool once `animation_frame` passes its variant's
//! last frame.  It pays out `max_hit_points` unless it died by ramming the
//! planet or the player.

use crate::constants::{
    ASTEROID_MAX_FRAME, ASTEROID_MAX_HIT_POINTS, ENEMY_ANIMATION_ROWS, ENEMY_RADIUS,
    ENEMY_SPRITE_SIZE, LOBSTERMORPH_MAX_FRAME, LOBSTERMORPH_MAX_HIT_POINTS,
};
use crate::geometry::{aim, circles_overlap, Circle, FieldBounds};
use crate::pool::{Pool, Poolable};
use crate::projectile::Projectile;
use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Closed set of enemy variants.  Behaviour is shared; only the constants differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    /// Fast to kill, one point.
    Asteroid,
    /// Takes eight hits, eight points.
    Lobstermorph,
}

impl EnemyKind {
    #[inline]
    pub const fn max_frame(self) -> u32 {
        match self {
            EnemyKind::Asteroid => ASTEROID_MAX_FRAME,
            EnemyKind::Lobstermorph => LOBSTERMORPH_MAX_FRAME,
        }
    }

    /// Starting hit points, which is also the kill reward.
    #[inline]
    pub const fn max_hit_points(self) -> u32 {
        match self {
            EnemyKind::Asteroid => ASTEROID_MAX_HIT_POINTS,
            EnemyKind::Lobstermorph => LOBSTERMORPH_MAX_HIT_POINTS,
        }
    }

    /// Sprite frame `(width, height)`.
    #[inline]
    pub const fn sprite_size(self) -> Vec2 {
        match self {
            EnemyKind::Asteroid | EnemyKind::Lobstermorph => {
                Vec2::new(ENEMY_SPRITE_SIZE, ENEMY_SPRITE_SIZE)
            }
        }
    }

    #[inline]
    pub const fn radius(self) -> f32 {
        match self {
            EnemyKind::Asteroid | EnemyKind::Lobstermorph => ENEMY_RADIUS,
        }
    }

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            EnemyKind::Asteroid => "asteroid",
            EnemyKind::Lobstermorph => "lobstermorph",
        }
    }
}

/// How variants are assigned to enemy pool slots at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyPoolMix {
    /// Every slot holds the same variant.
    Uniform(EnemyKind),
    /// Even slots are asteroids, odd slots lobstermorphs.
    Alternating,
    /// Each slot independently becomes a lobstermorph with this probability.
    Random { lobstermorph_chance: f32 },
}

impl Default for EnemyPoolMix {
    fn default() -> Self {
        EnemyPoolMix::Uniform(EnemyKind::Asteroid)
    }
}

impl EnemyPoolMix {
    /// Variant for slot `index`.
    pub fn kind_for_slot(self, index: usize, rng: &mut impl Rng) -> EnemyKind {
        match self {
            EnemyPoolMix::Uniform(kind) => kind,
            EnemyPoolMix::Alternating => {
                if index % 2 == 0 {
                    EnemyKind::Asteroid
                } else {
                    EnemyKind::Lobstermorph
                }
            }
            EnemyPoolMix::Random {
                lobstermorph_chance,
            } => {
                if rng.gen_bool(f64::from(lobstermorph_chance.clamp(0.0, 1.0))) {
                    EnemyKind::Lobstermorph
                } else {
                    EnemyKind::Asteroid
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyPhase {
    Inactive,
    Active,
    Dying,
}

/// Everything an enemy reads or mutates during its tick, passed in by the
/// owning simulation.
pub struct EnemyTickContext<'a> {
    pub planet: Circle,
    pub player: Circle,
    pub projectiles: &'a mut Pool<Projectile>,
    /// Open for exactly one tick each animation interval.
    pub sprite_update: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub position: Vec2,
    /// Unit vector toward the planet, fixed at spawn.
    pub velocity: Vec2,
    pub radius: f32,
    pub hit_points: u32,
    pub active: bool,
    /// Set when the enemy reached the planet or player instead of being shot down.
    pub collided: bool,
    pub animation_frame: u32,
    /// Cosmetic sprite-sheet row, `0..ENEMY_ANIMATION_ROWS`.
    pub animation_row: u32,
}

impl Poolable for Enemy {
    #[inline]
    fn is_active(&self) -> bool {
        self.active
    }
}

impl Enemy {
    /// An inactive slot of the given variant.
    pub fn new(kind: EnemyKind) -> Self {
        Self {
            kind,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius: kind.radius(),
            hit_points: kind.max_hit_points(),
            active: false,
            collided: false,
            animation_frame: 0,
            animation_row: 0,
        }
    }

    #[inline]
    pub fn max_hit_points(&self) -> u32 {
        self.kind.max_hit_points()
    }

    #[inline]
    pub fn max_frame(&self) -> u32 {
        self.kind.max_frame()
    }

    pub fn phase(&self) -> EnemyPhase {
        if !self.active {
            EnemyPhase::Inactive
        } else if self.hit_points == 0 {
            EnemyPhase::Dying
        } else {
            EnemyPhase::Active
        }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }

    /// Activate at a random point just outside one edge of `bounds`, homing on `target`.
    pub fn spawn(&mut self, rng: &mut impl Rng, bounds: FieldBounds, target: Vec2) {
        self.active = true;
        self.position = edge_spawn_position(rng, bounds, self.radius);
        self.velocity = aim(self.position, target).direction;
        self.hit_points = self.max_hit_points();
        self.collided = false;
        self.animation_frame = 0;
        self.animation_row = rng.gen_range(0..ENEMY_ANIMATION_ROWS);
    }

    /// Register `damage` projectile hits.  Every hit advances the animation by one frame.
    pub fn hit(&mut self, damage: u32) {
        self.hit_points = self.hit_points.saturating_sub(damage);
        self.animation_frame += 1;
    }

    /// Advance one tick.  Returns the kill reward when the enemy leaves the
    /// pool after being shot down.
    pub fn tick(&mut self, ctx: &mut EnemyTickContext<'_>) -> Option<u32> {
        if !self.active {
            return None;
        }

        self.position += self.velocity;

        if circles_overlap(self.circle(), ctx.planet) {
            self.hit_points = 0;
            self.velocity = Vec2::ZERO;
            self.collided = true;
        }
        // Ramming the player kills the enemy but leaves it drifting.
        if circles_overlap(self.circle(), ctx.player) {
            self.hit_points = 0;
            self.collided = true;
        }

        let body = self.circle();
        for projectile in ctx.projectiles.iter_active_mut() {
            if self.hit_points >= 1 && circles_overlap(body, projectile.circle()) {
                projectile.deactivate();
                self.hit(1);
            }
        }

        if self.hit_points < 1 && ctx.sprite_update {
            self.animation_frame += 1;
        }

        if self.animation_frame > self.max_frame() {
            self.active = false;
            if !self.collided {
                let reward = self.max_hit_points();
                debug!("{} destroyed, +{} points", self.kind.label(), reward);
                return Some(reward);
            }
        }
        None
    }
}

/// Random point just outside one edge of `bounds`, offset by `radius` so the
/// body starts fully off-field.
fn edge_spawn_position(rng: &mut impl Rng, bounds: FieldBounds, radius: f32) -> Vec2 {
    if rng.gen_bool(0.5) {
        let x = rng.gen_range(0.0..=bounds.width);
        let y = if rng.gen_bool(0.5) {
            -radius
        } else {
            bounds.height + radius
        };
        Vec2::new(x, y)
    } else {
        let x = if rng.gen_bool(0.5) {
            -radius
        } else {
            bounds.width + radius
        };
        let y = rng.gen_range(0.0..=bounds.height);
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FIELD: FieldBounds = FieldBounds {
        width: 800.0,
        height: 800.0,
    };

    fn planet() -> Circle {
        Circle::new(Vec2::new(400.0, 400.0), 80.0)
    }

    /// Player parked far away so it never interferes.
    fn far_player() -> Circle {
        Circle::new(Vec2::new(-5000.0, -5000.0), 40.0)
    }

    fn projectiles() -> Pool<Projectile> {
        Pool::new(30, |_| Projectile::default())
    }

    fn active_enemy(kind: EnemyKind, position: Vec2) -> Enemy {
        let mut e = Enemy::new(kind);
        e.active = true;
        e.position = position;
        e.velocity = Vec2::ZERO;
        e
    }

    #[test]
    fn spawn_starts_off_field_and_homes_on_planet() {
        let mut rng = StdRng::seed_from_u64(7);
        let target = planet().center;
        for _ in 0..200 {
            let mut e = Enemy::new(EnemyKind::Asteroid);
            e.spawn(&mut rng, FIELD, target);

            let p = e.position;
            let on_edge = p.x == -e.radius
                || p.x == FIELD.width + e.radius
                || p.y == -e.radius
                || p.y == FIELD.height + e.radius;
            assert!(on_edge, "spawn {p:?} not on an edge");
            assert!((e.velocity.length() - 1.0).abs() < 1e-5);
            assert!(e.velocity.dot(target - p) > 0.0);
            assert!(e.animation_row < ENEMY_ANIMATION_ROWS);
            assert_eq!(e.phase(), EnemyPhase::Active);
        }
    }

    #[test]
    fn spawn_resets_previous_life() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut e = Enemy::new(EnemyKind::Lobstermorph);
        e.hit_points = 0;
        e.collided = true;
        e.animation_frame = 9;
        e.spawn(&mut rng, FIELD, planet().center);
        assert_eq!(e.hit_points, 8);
        assert!(!e.collided);
        assert_eq!(e.animation_frame, 0);
    }

    #[test]
    fn single_hit_kills_one_hit_point_enemy() {
        let pos = Vec2::new(100.0, 100.0);
        let mut e = active_enemy(EnemyKind::Asteroid, pos);
        let mut pool = projectiles();
        pool.acquire_free().unwrap().fire(pos, Vec2::X, 5.0);

        let mut ctx = EnemyTickContext {
            planet: planet(),
            player: far_player(),
            projectiles: &mut pool,
            sprite_update: false,
        };
        assert_eq!(e.tick(&mut ctx), None);

        assert_eq!(e.hit_points, 0);
        assert_eq!(e.animation_frame, 1);
        assert_eq!(e.phase(), EnemyPhase::Dying);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn simultaneous_hits_all_resolve_in_one_tick() {
        let pos = Vec2::new(100.0, 100.0);
        let mut e = active_enemy(EnemyKind::Lobstermorph, pos);
        let mut pool = projectiles();
        for _ in 0..3 {
            pool.acquire_free().unwrap().fire(pos, Vec2::Y, 5.0);
        }

        let mut ctx = EnemyTickContext {
            planet: planet(),
            player: far_player(),
            projectiles: &mut pool,
            sprite_update: false,
        };
        e.tick(&mut ctx);

        assert_eq!(e.hit_points, 5);
        assert_eq!(e.animation_frame, 3);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn hits_stop_consuming_projectiles_at_zero() {
        let pos = Vec2::new(100.0, 100.0);
        let mut e = active_enemy(EnemyKind::Asteroid, pos);
        let mut pool = projectiles();
        for _ in 0..3 {
            pool.acquire_free().unwrap().fire(pos, Vec2::Y, 5.0);
        }

        let mut ctx = EnemyTickContext {
            planet: planet(),
            player: far_player(),
            projectiles: &mut pool,
            sprite_update: false,
        };
        e.tick(&mut ctx);

        assert_eq!(e.hit_points, 0);
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn planet_collision_stops_enemy_without_reward() {
        let mut e = active_enemy(EnemyKind::Lobstermorph, Vec2::new(400.0, 300.0));
        e.velocity = Vec2::new(0.0, 1.0);
        let mut pool = projectiles();

        let mut ctx = EnemyTickContext {
            planet: planet(),
            player: far_player(),
            projectiles: &mut pool,
            sprite_update: true,
        };
        e.tick(&mut ctx);
        assert_eq!(e.hit_points, 0);
        assert_eq!(e.velocity, Vec2::ZERO);
        assert!(e.collided);

        let mut rewards = Vec::new();
        while e.active {
            rewards.extend(e.tick(&mut ctx));
        }
        assert!(rewards.is_empty());
    }

    #[test]
    fn player_collision_keeps_velocity() {
        let mut e = active_enemy(EnemyKind::Asteroid, Vec2::new(100.0, 100.0));
        e.velocity = Vec2::new(0.6, 0.8);
        let mut pool = projectiles();

        let mut ctx = EnemyTickContext {
            planet: planet(),
            player: Circle::new(Vec2::new(110.0, 100.0), 40.0),
            projectiles: &mut pool,
            sprite_update: false,
        };
        e.tick(&mut ctx);
        assert_eq!(e.hit_points, 0);
        assert!(e.collided);
        assert_eq!(e.velocity, Vec2::new(0.6, 0.8));
    }

    #[test]
    fn death_animation_pays_max_hit_points() {
        for kind in [EnemyKind::Asteroid, EnemyKind::Lobstermorph] {
            let mut e = active_enemy(kind, Vec2::new(100.0, 100.0));
            e.hit_points = 0;
            let mut pool = projectiles();
            let mut ctx = EnemyTickContext {
                planet: planet(),
                player: far_player(),
                projectiles: &mut pool,
                sprite_update: true,
            };

            let mut ticks = 0;
            let mut reward = None;
            while e.active {
                reward = e.tick(&mut ctx);
                ticks += 1;
            }
            assert_eq!(ticks, kind.max_frame() + 1);
            assert_eq!(reward, Some(kind.max_hit_points()));
        }
    }

    #[test]
    fn death_animation_waits_for_sprite_gate() {
        let mut e = active_enemy(EnemyKind::Asteroid, Vec2::new(100.0, 100.0));
        e.hit_points = 0;
        let mut pool = projectiles();
        let mut ctx = EnemyTickContext {
            planet: planet(),
            player: far_player(),
            projectiles: &mut pool,
            sprite_update: false,
        };
        for _ in 0..50 {
            e.tick(&mut ctx);
        }
        assert_eq!(e.animation_frame, 0);
        assert!(e.active);
    }

    #[test]
    fn inactive_enemy_ignores_everything() {
        let pos = Vec2::new(400.0, 400.0);
        let mut e = Enemy::new(EnemyKind::Asteroid);
        e.position = pos;
        let mut pool = projectiles();
        pool.acquire_free().unwrap().fire(pos, Vec2::X, 5.0);

        let mut ctx = EnemyTickContext {
            planet: planet(),
            player: far_player(),
            projectiles: &mut pool,
            sprite_update: true,
        };
        assert_eq!(e.tick(&mut ctx), None);
        assert_eq!(e.hit_points, 1);
        assert!(!e.collided);
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn pool_mix_assigns_variants_by_slot() {
        let mut rng = StdRng::seed_from_u64(3);
        let alt = EnemyPoolMix::Alternating;
        assert_eq!(alt.kind_for_slot(0, &mut rng), EnemyKind::Asteroid);
        assert_eq!(alt.kind_for_slot(1, &mut rng), EnemyKind::Lobstermorph);

        let all_tough = EnemyPoolMix::Random {
            lobstermorph_chance: 1.0,
        };
        assert_eq!(all_tough.kind_for_slot(5, &mut rng), EnemyKind::Lobstermorph);
        assert_eq!(
            EnemyPoolMix::default().kind_for_slot(9, &mut rng),
            EnemyKind::Asteroid
        );
    }
}
