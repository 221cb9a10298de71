//! Player body and aim tracking.
//!
//! The ship has no free movement: every tick it is re-placed on the planet's
//! surface on the side facing the pointer.

use crate::geometry::{try_aim, Aim, Circle};
use crate::planet::Planet;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub radius: f32,
    /// Unit vector from the planet centre toward the pointer.
    pub aim_direction: Vec2,
    /// Sprite rotation in radians, `atan2(dy, dx)` of the raw aim delta.
    pub orientation_angle: f32,
    /// Set while the pointer sits exactly on the planet centre.
    aim_degenerate: bool,
}

impl Player {
    /// A ship parked on the planet surface facing the fallback direction.
    pub fn new(planet: &Planet, radius: f32) -> Self {
        let mut player = Self {
            position: planet.position,
            radius,
            aim_direction: Aim::FALLBACK.direction,
            orientation_angle: Aim::FALLBACK.angle(),
            aim_degenerate: false,
        };
        player.apply_aim(planet, Aim::FALLBACK);
        player
    }

    /// Re-aim at `pointer` and move to the matching orbit position.
    pub fn tick(&mut self, planet: &Planet, pointer: Vec2) {
        let aim = match try_aim(planet.position, pointer) {
            Ok(aim) => {
                self.aim_degenerate = false;
                aim
            }
            Err(err) => {
                if !self.aim_degenerate {
                    warn!("{err}; aiming straight up");
                }
                self.aim_degenerate = true;
                Aim::FALLBACK
            }
        };
        self.apply_aim(planet, aim);
    }

    fn apply_aim(&mut self, planet: &Planet, aim: Aim) {
        self.aim_direction = aim.direction;
        self.position = planet.position + (planet.radius + self.radius) * aim.direction;
        self.orientation_angle = aim.angle();
    }

    /// Point on the hull where shots leave the ship.
    #[inline]
    pub fn muzzle(&self) -> Vec2 {
        self.position + self.radius * self.aim_direction
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }
}
