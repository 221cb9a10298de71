//! Planet Defense simulation library
//!
//! A player ship orbits a central planet, aims at the pointer, and shoots down
//! enemies homing in from the field edges.  Projectiles and enemies live in
//! fixed-capacity pools allocated once per session; [`simulation::Simulation`]
//! advances everything once per frame from an explicit [`input::InputSample`].

pub mod config;
pub mod constants;
pub mod enemy;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod input;
pub mod planet;
pub mod player;
pub mod pool;
pub mod projectile;
pub mod rendering;
pub mod simulation;
