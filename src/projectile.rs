//! Pooled player projectile: straight-line motion, expires at the field edge.

use crate::constants::PROJECTILE_RADIUS;
use crate::geometry::{Circle, FieldBounds};
use crate::pool::Poolable;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new(PROJECTILE_RADIUS)
    }
}

impl Poolable for Projectile {
    #[inline]
    fn is_active(&self) -> bool {
        self.active
    }
}

impl Projectile {
    /// An inactive slot.  Position and velocity are meaningless until [`Self::fire`].
    pub fn new(radius: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius,
            active: false,
        }
    }

    /// Launch from `origin` along the unit vector `direction` at `speed` units per tick.
    pub fn fire(&mut self, origin: Vec2, direction: Vec2, speed: f32) {
        self.active = true;
        self.position = origin;
        self.velocity = direction * speed;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Advance one tick and expire when the new position leaves `bounds`.
    pub fn tick(&mut self, bounds: FieldBounds) {
        if !self.active {
            return;
        }
        self.position += self.velocity;
        if !bounds.contains(self.position) {
            self.active = false;
        }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }
}
