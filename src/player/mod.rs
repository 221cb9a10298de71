//! Player module: the ship that orbits the planet and the shots it fires.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | [`Player`] body, aim tracking, orbit placement |
//! | [`combat`] | Firing into the projectile pool |
//!
//! All public items are re-exported at this level.

pub mod combat;
pub mod state;

pub use state::Player;
