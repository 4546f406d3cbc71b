//! Procedural obstacle generation
//!
//! The spawn pool, sizes and speed all grow with the level. Everything
//! random comes from the caller's RNG so a run seed reproduces its obstacles.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::obstacle::{Obstacle, ObstacleKind, Wave};
use crate::consts::*;

/// Number of obstacle kinds unlocked at a level
///
/// Kinds unlock in a fixed order: rectangle, spikes, oscillating, zigzag.
pub fn unlocked_kinds(level: u32) -> usize {
    let mut count = 1;
    if level >= SPIKES_UNLOCK_LEVEL {
        count += 1;
    }
    if level >= OSCILLATING_UNLOCK_LEVEL {
        count += 1;
    }
    if level >= ZIGZAG_UNLOCK_LEVEL {
        count += 1;
    }
    count
}

/// Tallest obstacle that can spawn at a level
pub fn max_height_for_level(level: u32) -> u32 {
    OBSTACLE_BASE_MAX_HEIGHT + level.saturating_mul(3).min(150)
}

/// Widest obstacle that can spawn at a level
pub fn max_width_for_level(level: u32) -> u32 {
    OBSTACLE_BASE_MAX_WIDTH + level.min(30)
}

/// Obstacle's own scroll speed at a level
pub fn obstacle_speed_for_level(level: u32) -> f32 {
    OBSTACLE_BASE_SPEED + level as f32 * OBSTACLE_SPEED_PER_LEVEL
}

/// Create a new obstacle at the right edge of the screen
pub fn spawn_obstacle<R: Rng>(id: u32, level: u32, rng: &mut R) -> Obstacle {
    let pick = rng.random_range(0..unlocked_kinds(level));

    let height = rng.random_range(OBSTACLE_MIN_HEIGHT..=max_height_for_level(level)) as f32;
    let width = rng.random_range(OBSTACLE_MIN_WIDTH..=max_width_for_level(level)) as f32;

    // Floor-mounted or hanging from the ceiling
    let y = if rng.random_bool(0.5) {
        SCREEN_HEIGHT - height
    } else {
        0.0
    };

    let kind = match pick {
        0 => ObstacleKind::Rectangle,
        1 => ObstacleKind::Spikes,
        2 => ObstacleKind::Oscillating(random_wave(y, rng)),
        _ => ObstacleKind::ZigZag(random_wave(y, rng)),
    };

    let speed = obstacle_speed_for_level(level);
    log::debug!(
        "Spawned {} #{} ({}x{}) at y={} speed={:.1}",
        kind.name(),
        id,
        width,
        height,
        y,
        speed
    );

    Obstacle::new(
        id,
        Vec2::new(SCREEN_WIDTH, y),
        Vec2::new(width, height),
        speed,
        kind,
    )
}

fn random_wave<R: Rng>(base_y: f32, rng: &mut R) -> Wave {
    Wave {
        base_y,
        phase: rng.random_range(0.0..TAU),
        amplitude: rng.random_range(20..=80) as f32,
        frequency: rng.random_range(0.02..0.05),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pool_grows_with_level() {
        assert_eq!(unlocked_kinds(1), 1);
        assert_eq!(unlocked_kinds(4), 1);
        assert_eq!(unlocked_kinds(5), 2);
        assert_eq!(unlocked_kinds(10), 3);
        assert_eq!(unlocked_kinds(19), 3);
        assert_eq!(unlocked_kinds(20), 4);
        assert_eq!(unlocked_kinds(45), 4);
    }

    #[test]
    fn test_early_levels_only_rectangles() {
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..200 {
            let obstacle = spawn_obstacle(id, 4, &mut rng);
            assert_eq!(obstacle.kind, ObstacleKind::Rectangle);
        }
    }

    #[test]
    fn test_all_kinds_appear_late() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut seen = [false; 4];
        for id in 0..400 {
            let index = match spawn_obstacle(id, 30, &mut rng).kind {
                ObstacleKind::Rectangle => 0,
                ObstacleKind::Spikes => 1,
                ObstacleKind::Oscillating(_) => 2,
                ObstacleKind::ZigZag(_) => 3,
            };
            seen[index] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_speed_curve() {
        assert!((obstacle_speed_for_level(1) - 5.2).abs() < 1e-5);
        assert!((obstacle_speed_for_level(45) - 14.0).abs() < 1e-4);
    }

    #[test]
    fn test_size_caps() {
        assert_eq!(max_height_for_level(1), 153);
        assert_eq!(max_height_for_level(50), 300);
        assert_eq!(max_height_for_level(u32::MAX), 300);
        assert_eq!(max_width_for_level(u32::MAX), 80);
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for id in 0..20 {
            let oa = spawn_obstacle(id, 25, &mut a);
            let ob = spawn_obstacle(id, 25, &mut b);
            assert_eq!(oa.pos, ob.pos);
            assert_eq!(oa.size, ob.size);
            assert_eq!(oa.kind, ob.kind);
        }
    }

    proptest! {
        #[test]
        fn prop_spawn_ranges(level in 1u32..=MAX_LEVEL, seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let obstacle = spawn_obstacle(1, level, &mut rng);

            prop_assert_eq!(obstacle.pos.x, SCREEN_WIDTH);
            prop_assert!(obstacle.size.y >= 50.0);
            prop_assert!(obstacle.size.y <= max_height_for_level(level) as f32);
            prop_assert!(obstacle.size.x >= 30.0);
            prop_assert!(obstacle.size.x <= max_width_for_level(level) as f32);
            prop_assert!(obstacle.pos.y == 0.0 || obstacle.pos.y == SCREEN_HEIGHT - obstacle.size.y);
            prop_assert_eq!(obstacle.speed, obstacle_speed_for_level(level));
            prop_assert!(!obstacle.passed);

            if let ObstacleKind::Oscillating(wave) | ObstacleKind::ZigZag(wave) = obstacle.kind {
                prop_assert!(level >= OSCILLATING_UNLOCK_LEVEL);
                prop_assert!((20.0..=80.0).contains(&wave.amplitude));
                prop_assert!((0.02..0.05).contains(&wave.frequency));
                prop_assert_eq!(wave.base_y, obstacle.pos.y);
            }
        }
    }
}
