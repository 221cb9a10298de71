//! Simulation-specific error types.
//!
//! Nothing inside [`crate::simulation::Simulation::tick`] returns an error:
//! every failure there has a defined local fallback.  These types surface
//! from the fallible entry points only: [`crate::geometry::try_aim`] and the
//! config loader.
//!
//! ## Usage
//!
//! ```rust
//! use planet_defense::error::SimError;
//! use planet_defense::geometry::try_aim;
//! use bevy::math::Vec2;
//!
//! let err = try_aim(Vec2::ONE, Vec2::ONE).unwrap_err();
//! assert!(matches!(err, SimError::DegenerateAim { .. }));
//! ```

use std::fmt;

/// Top-level error enum for the planet-defense simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Aim source and target coincide (or are not finite), so no direction
    /// can be derived.
    DegenerateAim {
        /// Aim source, `[x, y]`.
        from: [f32; 2],
        /// Aim target, `[x, y]`.
        to: [f32; 2],
    },

    /// A config value is outside its accepted range.
    InvalidConfig {
        /// Name of the config key (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// The config file exists but could not be read.
    ConfigRead { path: String, message: String },

    /// The config file was read but is not valid TOML for [`crate::config::GameConfig`].
    ConfigParse { path: String, message: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::DegenerateAim { from, to } => write!(
                f,
                "cannot aim from ({}, {}) to ({}, {}): points coincide",
                from[0], from[1], to[0], to[1]
            ),
            SimError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(
                f,
                "config value '{}' = {} is outside accepted range {}",
                name, value, expected
            ),
            SimError::ConfigRead { path, message } => {
                write!(f, "failed to read {}: {}", path, message)
            }
            SimError::ConfigParse { path, message } => {
                write!(f, "failed to parse {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if `value` is not a finite, strictly positive number.
pub fn validate_positive(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig {
            name,
            value,
            expected: "(0.0, ∞)",
        })
    }
}

/// Returns an error if a pool capacity is zero.
pub fn validate_capacity(name: &'static str, value: usize) -> SimResult<()> {
    if value == 0 {
        Err(SimError::InvalidConfig {
            name,
            value: 0.0,
            expected: "[1, ∞)",
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_validation_rejects_zero_negative_and_nan() {
        assert!(validate_positive("x", 1.0).is_ok());
        assert!(validate_positive("x", 0.0).is_err());
        assert!(validate_positive("x", -3.0).is_err());
        assert!(validate_positive("x", f32::NAN).is_err());
    }

    #[test]
    fn capacity_validation_rejects_zero() {
        assert!(validate_capacity("pool", 1).is_ok());
        let err = validate_capacity("pool", 0).unwrap_err();
        assert!(err.to_string().contains("pool"));
    }
}
