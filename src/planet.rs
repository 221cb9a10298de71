use crate::geometry::Circle;
use bevy::prelude::*;

/// The body the player defends.  Fixed at the field centre for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    pub position: Vec2,
    pub radius: f32,
}

impl Planet {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }
}
