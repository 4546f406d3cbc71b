//! Collision detection between the rabbit and obstacles
//!
//! The rabbit is a circle, every obstacle is an axis-aligned box. Spikes use
//! their full box as well.

use glam::Vec2;

use super::obstacle::Obstacle;
use super::rabbit::Rabbit;

/// Exact circle vs axis-aligned rectangle overlap
///
/// Clamps the circle center onto the rectangle and compares the squared
/// distance to the closest point with the squared radius. Touching edges
/// (distance == radius) is not an overlap.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_min: Vec2, rect_max: Vec2) -> bool {
    let closest = center.clamp(rect_min, rect_max);
    center.distance_squared(closest) < radius * radius
}

/// Check whether the rabbit overlaps an obstacle's bounding box
pub fn rabbit_hits_obstacle(rabbit: &Rabbit, obstacle: &Obstacle) -> bool {
    circle_rect_overlap(rabbit.pos, rabbit.radius, obstacle.pos, obstacle.max())
}

/// First obstacle the rabbit overlaps, if any
pub fn first_hit<'a>(rabbit: &Rabbit, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    obstacles.iter().find(|o| rabbit_hits_obstacle(rabbit, o))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::ObstacleKind;
    use proptest::prelude::*;

    fn block(x: f32, y: f32, w: f32, h: f32) -> Obstacle {
        Obstacle::new(1, Vec2::new(x, y), Vec2::new(w, h), 5.0, ObstacleKind::Rectangle)
    }

    fn rabbit_at(x: f32, y: f32) -> Rabbit {
        Rabbit {
            pos: Vec2::new(x, y),
            ..Default::default()
        }
    }

    #[test]
    fn test_center_inside_box() {
        let obstacle = block(90.0, 290.0, 40.0, 40.0);
        assert!(rabbit_hits_obstacle(&rabbit_at(100.0, 300.0), &obstacle));
    }

    #[test]
    fn test_side_contact() {
        let obstacle = block(130.0, 250.0, 40.0, 100.0);

        // Left edge at 130, rabbit radius 20: tangent at x = 110
        assert!(!rabbit_hits_obstacle(&rabbit_at(110.0, 300.0), &obstacle));
        assert!(rabbit_hits_obstacle(&rabbit_at(110.5, 300.0), &obstacle));
        assert!(!rabbit_hits_obstacle(&rabbit_at(109.5, 300.0), &obstacle));
    }

    #[test]
    fn test_corner_contact() {
        let obstacle = block(200.0, 200.0, 50.0, 50.0);

        // Diagonal from the top-left corner: 12^2 + 16^2 = 20^2 exactly
        assert!(!rabbit_hits_obstacle(&rabbit_at(188.0, 184.0), &obstacle));
        // Closer along the same diagonal
        assert!(rabbit_hits_obstacle(&rabbit_at(189.0, 185.0), &obstacle));
        // Would overlap as a box test, but the circle misses the corner
        assert!(!rabbit_hits_obstacle(&rabbit_at(185.0, 185.0), &obstacle));
    }

    #[test]
    fn test_spikes_collide_as_box() {
        let spikes = Obstacle::new(
            1,
            Vec2::new(120.0, 500.0),
            Vec2::new(50.0, 100.0),
            5.0,
            ObstacleKind::Spikes,
        );
        // Touches the gap between spike tips, still a hit
        assert!(rabbit_hits_obstacle(&rabbit_at(110.0, 510.0), &spikes));
    }

    #[test]
    fn test_first_hit() {
        let obstacles = vec![block(600.0, 0.0, 40.0, 100.0), block(100.0, 500.0, 40.0, 100.0)];
        assert!(first_hit(&rabbit_at(100.0, 300.0), &obstacles).is_none());
        assert!(first_hit(&rabbit_at(100.0, 490.0), &obstacles).is_some());
    }

    proptest! {
        #[test]
        fn prop_gap_around_edge(
            gap in 0.01f32..5.0,
            top in 0.0f32..400.0,
            height in 50.0f32..150.0,
        ) {
            let obstacle = block(300.0, top, 40.0, height);
            let y = top + height / 2.0;
            let radius = crate::consts::RABBIT_RADIUS;

            // Approach the left face from outside
            let clear = rabbit_at(300.0 - radius - gap, y);
            let touching = rabbit_at(300.0 - radius + gap, y);
            prop_assert!(!rabbit_hits_obstacle(&clear, &obstacle));
            prop_assert!(rabbit_hits_obstacle(&touching, &obstacle));
        }
    }
}
