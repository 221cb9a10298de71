//! Projectile firing.

use super::state::Player;
use crate::pool::Pool;
use crate::projectile::Projectile;

impl Player {
    /// Fire one shot from the muzzle along the current aim.
    ///
    /// Returns `false` (and does nothing) when every projectile slot is in flight.
    pub fn fire(&self, projectiles: &mut Pool<Projectile>, speed: f32) -> bool {
        match projectiles.acquire_free() {
            Some(projectile) => {
                projectile.fire(self.muzzle(), self.aim_direction, speed);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::Planet;
    use bevy::prelude::*;

    fn setup() -> (Player, Pool<Projectile>) {
        let planet = Planet::new(Vec2::new(400.0, 400.0), 80.0);
        let mut player = Player::new(&planet, 40.0);
        player.tick(&planet, Vec2::new(100.0, 700.0));
        (player, Pool::new(30, |_| Projectile::default()))
    }

    #[test]
    fn fire_activates_exactly_one_projectile() {
        let (player, mut pool) = setup();
        assert!(player.fire(&mut pool, 5.0));
        assert_eq!(pool.active_count(), 1);

        let shot = pool.iter_active().next().unwrap();
        assert!((shot.velocity.length() - 5.0).abs() < 1e-5);
        assert!((shot.position - player.muzzle()).length() < 1e-5);
        assert!(shot.velocity.dot(player.aim_direction) > 0.0);
    }

    #[test]
    fn fire_on_exhausted_pool_is_a_no_op() {
        let (player, mut pool) = setup();
        for _ in 0..30 {
            assert!(player.fire(&mut pool, 5.0));
        }
        assert!(!player.fire(&mut pool, 5.0));
        assert_eq!(pool.active_count(), 30);
    }
}
