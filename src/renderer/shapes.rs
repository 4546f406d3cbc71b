//! Shape generation for 2D primitives
//!
//! Screen coordinates: origin top-left, y grows downward.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::{RABBIT_EAR_LENGTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Frame, GamePhase, ObstacleKind, ObstacleView, RabbitView};

/// Number of spike teeth drawn across a spikes obstacle
pub const SPIKE_COUNT: u32 = 5;

const CIRCLE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a thick line segment
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Row of upward teeth filling the obstacle box
pub fn spikes(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let spike_width = size.x / SPIKE_COUNT as f32;
    let base = min.y + size.y;

    let mut vertices = Vec::with_capacity((SPIKE_COUNT * 3) as usize);
    for i in 0..SPIKE_COUNT {
        let x = min.x + i as f32 * spike_width;
        vertices.push(Vertex::new(x, base, color));
        vertices.push(Vertex::new(x + spike_width / 2.0, min.y, color));
        vertices.push(Vertex::new(x + spike_width, base, color));
    }
    vertices
}

/// Ear tip for an ear rooted at `root`, leaning back as the body tilts
pub fn ear_tip(root: Vec2, rotation_deg: f32) -> Vec2 {
    let angle = rotation_deg.to_radians();
    root - Vec2::new(angle.sin(), angle.cos()) * RABBIT_EAR_LENGTH
}

/// Rabbit body, eye and two ears
pub fn rabbit(view: &RabbitView) -> Vec<Vertex> {
    let center = view.pos;
    let mut vertices = circle(center, view.radius, colors::RABBIT, CIRCLE_SEGMENTS);
    vertices.extend(circle(
        center + Vec2::new(5.0, -5.0),
        4.0,
        colors::RABBIT_EYE,
        12,
    ));

    for root in [center + Vec2::new(-5.0, -15.0), center + Vec2::new(5.0, -15.0)] {
        vertices.extend(line(root, ear_tip(root, view.rotation), 3.0, colors::RABBIT));
    }
    vertices
}

/// Obstacle geometry; spikes draw as teeth, everything else as a box
pub fn obstacle(view: &ObstacleView) -> Vec<Vertex> {
    match view.kind {
        ObstacleKind::Spikes => spikes(view.pos, view.size, colors::OBSTACLE),
        ObstacleKind::Rectangle | ObstacleKind::Oscillating(_) | ObstacleKind::ZigZag(_) => {
            rect(view.pos, view.size, colors::OBSTACLE)
        }
    }
}

/// Rabbit icon shown on the title screen
pub fn menu_icon() -> Vec<Vertex> {
    let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - 20.0);
    let mut vertices = circle(center, 30.0, colors::RABBIT, CIRCLE_SEGMENTS);
    vertices.extend(circle(
        center + Vec2::new(10.0, -10.0),
        5.0,
        colors::RABBIT_EYE,
        12,
    ));
    vertices.extend(line(
        center + Vec2::new(-10.0, -20.0),
        center + Vec2::new(-20.0, -50.0),
        4.0,
        colors::RABBIT,
    ));
    vertices.extend(line(
        center + Vec2::new(10.0, -20.0),
        center + Vec2::new(20.0, -50.0),
        4.0,
        colors::RABBIT,
    ));
    vertices
}

/// Triangle list for a whole frame (text screens only get their icon)
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    match frame.phase {
        GamePhase::Menu => menu_icon(),
        GamePhase::LevelComplete | GamePhase::GameOver => Vec::new(),
        GamePhase::Playing => {
            let mut vertices = line(
                Vec2::new(0.0, SCREEN_HEIGHT - 1.0),
                Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT - 1.0),
                2.0,
                colors::GROUND,
            );
            for view in &frame.obstacles {
                vertices.extend(obstacle(view));
            }
            vertices.extend(rabbit(&frame.rabbit));
            vertices
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, update};

    #[test]
    fn test_spikes_are_five_teeth() {
        let verts = spikes(Vec2::new(100.0, 500.0), Vec2::new(50.0, 100.0), colors::OBSTACLE);
        assert_eq!(verts.len(), 15);
        // First tooth peaks at the top of the box, centred in its slot
        assert_eq!(verts[1].position, [105.0, 500.0]);
        assert_eq!(verts[14].position, [150.0, 600.0]);
    }

    #[test]
    fn test_ear_tip_follows_rotation() {
        let root = Vec2::new(100.0, 100.0);
        let upright = ear_tip(root, 0.0);
        assert!((upright - Vec2::new(100.0, 85.0)).length() < 1e-4);

        // Falling tilts the body forward and the ears lean back
        let tilted = ear_tip(root, 45.0);
        assert!(tilted.x < root.x);
        assert!(tilted.y < root.y);
    }

    #[test]
    fn test_frame_vertices_per_phase() {
        let mut state = GameState::new(21);
        assert_eq!(frame_vertices(&state.frame()).len(), menu_icon().len());

        state.phase = GamePhase::Playing;
        for _ in 0..121 {
            update(&mut state);
        }
        let frame = state.frame();
        assert_eq!(frame.obstacles.len(), 1);
        let expected = 6 + obstacle(&frame.obstacles[0]).len() + rabbit(&frame.rabbit).len();
        assert_eq!(frame_vertices(&frame).len(), expected);

        state.phase = GamePhase::GameOver;
        assert!(frame_vertices(&state.frame()).is_empty());
    }
}
