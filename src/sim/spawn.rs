//! Random placement of collectibles and the enemy

use glam::Vec2;
use rand::Rng;

use super::state::Collectible;
use crate::consts::COLLECTIBLE_SIZE;

/// Uniform top-left position for a square of `size` inside `bounds`
///
/// Each axis draws from `[0, bounds - size)`. If `size` does not fit, that
/// axis collapses to 0 instead of going negative.
pub fn random_position<R: Rng>(rng: &mut R, bounds: Vec2, size: Vec2) -> Vec2 {
    let span = (bounds - size).max(Vec2::ZERO);
    Vec2::new(rng.random::<f32>() * span.x, rng.random::<f32>() * span.y)
}

/// Create a collectible at a random position inside `bounds`
pub fn spawn_collectible<R: Rng>(rng: &mut R, bounds: Vec2) -> Collectible {
    let pos = random_position(rng, bounds, Vec2::splat(COLLECTIBLE_SIZE));
    Collectible::new(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_within_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let bounds = Vec2::new(1280.0, 720.0);
        for _ in 0..1000 {
            let c = spawn_collectible(&mut rng, bounds);
            assert!(c.pos.x >= 0.0 && c.pos.x + c.size <= bounds.x);
            assert!(c.pos.y >= 0.0 && c.pos.y + c.size <= bounds.y);
            assert_eq!(c.size, COLLECTIBLE_SIZE);
        }
    }

    #[test]
    fn test_oversized_item_clamps_to_origin() {
        let mut rng = Pcg32::seed_from_u64(7);
        let bounds = Vec2::new(40.0, 500.0);
        for _ in 0..100 {
            let c = spawn_collectible(&mut rng, bounds);
            assert_eq!(c.pos.x, 0.0);
            assert!(c.pos.y >= 0.0 && c.pos.y <= 430.0);
        }
    }

    #[test]
    fn test_same_seed_same_positions() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        let bounds = Vec2::new(1280.0, 720.0);
        for _ in 0..10 {
            assert_eq!(spawn_collectible(&mut a, bounds).pos, spawn_collectible(&mut b, bounds).pos);
        }
    }
}
