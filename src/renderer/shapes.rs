//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::state::{Actor, GameState, Shape};

/// Segments used for circles
pub const CIRCLE_SEGMENTS: u32 = 24;

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
pub fn rect(center: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let min = center - size / 2.0;
    let max = center + size / 2.0;

    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Vertices for one actor, chosen by its shape descriptor
pub fn actor_vertices(actor: &Actor) -> Vec<Vertex> {
    let color = actor.color.to_rgba();
    match actor.shape {
        Shape::Rect => rect(actor.pos, actor.size, color),
        Shape::Circle { radius } => circle(actor.pos, radius, color, CIRCLE_SEGMENTS),
    }
}

/// Triangle list for every live entity: paddle, bricks, then the ball on top
pub fn draw_list(state: &GameState) -> Vec<Vertex> {
    std::iter::once(&state.paddle)
        .chain(state.bricks.iter())
        .chain(std::iter::once(&state.ball))
        .flat_map(actor_vertices)
        .collect()
}
