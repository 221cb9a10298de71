//! Aim and collision math shared by every entity.
//!
//! All positions are play-field coordinates (origin top-left, +Y down).

use crate::error::{SimError, SimResult};
use bevy::prelude::*;

/// Direction used when aim source and target coincide: straight up the field.
pub const FALLBACK_AIM_DIRECTION: Vec2 = Vec2::new(0.0, -1.0);

/// Result of aiming from one point toward another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    /// Unit vector pointing from the source toward the target.
    pub direction: Vec2,
    /// Raw `source - target` delta.  Sprite orientation is derived from this.
    pub delta: Vec2,
}

impl Aim {
    /// Aim used in place of a degenerate one.  `delta` is the negated
    /// direction so [`Aim::angle`] stays consistent with it.
    pub const FALLBACK: Aim = Aim {
        direction: FALLBACK_AIM_DIRECTION,
        delta: Vec2::new(0.0, 1.0),
    };

    /// Facing angle in radians, `atan2(dy, dx)` of the raw delta.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.delta.y.atan2(self.delta.x)
    }
}

/// Aim from `from` toward `to`, failing when the points coincide.
pub fn try_aim(from: Vec2, to: Vec2) -> SimResult<Aim> {
    let delta = from - to;
    let distance = delta.x.hypot(delta.y);
    if distance == 0.0 || !distance.is_finite() {
        return Err(SimError::DegenerateAim {
            from: from.to_array(),
            to: to.to_array(),
        });
    }
    Ok(Aim {
        direction: -delta / distance,
        delta,
    })
}

/// Aim from `from` toward `to`, substituting [`Aim::FALLBACK`] when degenerate.
pub fn aim(from: Vec2, to: Vec2) -> Aim {
    try_aim(from, to).unwrap_or(Aim::FALLBACK)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance_between(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// A collision circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// `true` when the circles strictly overlap.  Tangent circles do not collide.
#[inline]
pub fn circles_overlap(a: Circle, b: Circle) -> bool {
    distance_between(a.center, b.center) < a.radius + b.radius
}

/// Axis-aligned play-field bounds `[0, width] × [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub width: f32,
    pub height: f32,
}

impl FieldBounds {
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}
