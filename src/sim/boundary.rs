//! Screen-edge reflection and viewport exit
//!
//! Edges are measured with half the ball's box, not its draw radius.

use serde::{Deserialize, Serialize};

use super::state::{Actor, ScreenMetrics};

/// Screen edge the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wall {
    Left,
    Right,
    Top,
}

/// Invert velocity components for every edge the ball's box crosses
///
/// Rules are independent, so a corner can fire two of them in one frame.
/// The bottom edge never reflects. Returns the walls that fired, in
/// left, right, top order.
pub fn reflect_off_walls(ball: &mut Actor, screen: &ScreenMetrics) -> Vec<Wall> {
    let half = ball.half_size();
    let mut hits = Vec::new();

    if ball.pos.x - half.x < 0.0 {
        ball.vel.x *= -1.0;
        hits.push(Wall::Left);
    }

    if ball.pos.x + half.x > screen.width {
        ball.vel.x *= -1.0;
        hits.push(Wall::Right);
    }

    if ball.pos.y - half.y < 0.0 {
        ball.vel.y *= -1.0;
        hits.push(Wall::Top);
    }

    hits
}

/// True once no part of the actor's box is inside the viewport
pub fn has_left_viewport(actor: &Actor, screen: &ScreenMetrics) -> bool {
    !actor.aabb().overlaps(&screen.viewport())
}
