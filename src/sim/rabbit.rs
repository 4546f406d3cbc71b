//! The player's rabbit: a circle that falls, jumps and tilts

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The player-controlled body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rabbit {
    /// Center position (x is a fixed lane)
    pub pos: Vec2,
    /// Vertical velocity (units/frame, positive is down)
    pub velocity: f32,
    pub radius: f32,
    /// Tilt in degrees, derived from velocity
    pub rotation: f32,
    /// Airborne since the last jump; cleared only by landing on the floor
    pub jumping: bool,
}

impl Default for Rabbit {
    fn default() -> Self {
        Self {
            pos: Vec2::new(RABBIT_X, SCREEN_HEIGHT / 2.0),
            velocity: 0.0,
            radius: RABBIT_RADIUS,
            rotation: 0.0,
            jumping: false,
        }
    }
}

impl Rabbit {
    /// Lowest allowed center y (resting on the floor)
    pub fn floor_y(&self) -> f32 {
        SCREEN_HEIGHT - self.radius
    }

    /// Highest allowed center y (pressed against the ceiling)
    pub fn ceiling_y(&self) -> f32 {
        self.radius
    }

    /// Start a jump. Returns false (and changes nothing) while airborne.
    pub fn jump(&mut self) -> bool {
        if self.jumping {
            return false;
        }
        self.velocity = JUMP_STRENGTH;
        self.jumping = true;
        true
    }

    /// Advance one frame of gravity and clamp to the screen
    pub fn update(&mut self) {
        self.velocity += GRAVITY;
        self.pos.y += self.velocity;

        self.rotation = (self.velocity * TILT_PER_VELOCITY).clamp(-MAX_TILT, MAX_TILT);

        let floor = self.floor_y();
        if self.pos.y >= floor {
            self.pos.y = floor;
            self.velocity = 0.0;
            self.jumping = false;
        }

        // Touching the ceiling stops the climb but is not a landing
        let ceiling = self.ceiling_y();
        if self.pos.y <= ceiling {
            self.pos.y = ceiling;
            self.velocity = 0.0;
        }
    }

    /// Whether the rabbit is resting on the floor
    pub fn on_floor(&self) -> bool {
        self.pos.y >= self.floor_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lands_on_floor() {
        let mut rabbit = Rabbit {
            pos: Vec2::new(RABBIT_X, 580.0),
            velocity: 10.0,
            jumping: true,
            ..Default::default()
        };

        rabbit.update();

        assert_eq!(rabbit.pos.y, 580.0);
        assert_eq!(rabbit.velocity, 0.0);
        assert!(!rabbit.jumping);
        assert!(rabbit.on_floor());
    }

    #[test]
    fn test_no_double_jump() {
        let mut rabbit = Rabbit::default();
        assert!(rabbit.jump());
        assert_eq!(rabbit.velocity, JUMP_STRENGTH);
        assert!(rabbit.jumping);

        rabbit.update();
        let velocity = rabbit.velocity;

        // Second press mid-air is ignored
        assert!(!rabbit.jump());
        assert_eq!(rabbit.velocity, velocity);
        assert!(rabbit.jumping);
    }

    #[test]
    fn test_ceiling_is_not_a_landing() {
        let mut rabbit = Rabbit {
            pos: Vec2::new(RABBIT_X, 25.0),
            velocity: -12.0,
            jumping: true,
            ..Default::default()
        };

        rabbit.update();

        assert_eq!(rabbit.pos.y, RABBIT_RADIUS);
        assert_eq!(rabbit.velocity, 0.0);
        assert!(rabbit.jumping);
        assert!(!rabbit.jump());
    }

    #[test]
    fn test_rotation_follows_velocity() {
        let mut rabbit = Rabbit::default();
        rabbit.jump();
        rabbit.update();
        // -12 + 0.6 = -11.4, inside the clamp
        assert!((rabbit.rotation + 34.2).abs() < 1e-4);

        let mut rabbit = Rabbit::default();
        rabbit.update();
        assert!((rabbit.rotation - GRAVITY * TILT_PER_VELOCITY).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_clamped() {
        let mut rabbit = Rabbit {
            velocity: -20.0,
            ..Default::default()
        };
        rabbit.update();
        assert_eq!(rabbit.rotation, -MAX_TILT);

        // Fast fall, still well above the floor
        let mut rabbit = Rabbit {
            velocity: 20.0,
            ..Default::default()
        };
        rabbit.update();
        assert!(!rabbit.on_floor());
        assert_eq!(rabbit.rotation, MAX_TILT);
    }

    proptest! {
        #[test]
        fn prop_stays_on_screen(
            start_y in RABBIT_RADIUS..(SCREEN_HEIGHT - RABBIT_RADIUS),
            velocity in -40.0f32..40.0,
            presses in proptest::collection::vec(any::<bool>(), 1..300),
        ) {
            let mut rabbit = Rabbit {
                pos: Vec2::new(RABBIT_X, start_y),
                velocity,
                ..Default::default()
            };
            for press in presses {
                if press {
                    rabbit.jump();
                }
                rabbit.update();
                prop_assert!(rabbit.pos.y >= rabbit.radius);
                prop_assert!(rabbit.pos.y <= SCREEN_HEIGHT - rabbit.radius);
                prop_assert!(rabbit.rotation.abs() <= MAX_TILT);
            }
        }
    }
}
