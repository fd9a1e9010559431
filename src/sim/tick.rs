//! Fixed timestep simulation tick
//!
//! Stands in for the game engine: integrates motion, detects contacts,
//! dispatches the reactions and checks the viewport, always in that order.

use glam::Vec2;

use super::collision::{detect_ball_contacts, separate_active_bodies};
use super::state::GameState;
use crate::error::SimError;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer position in world space, if it moved
    pub pointer: Option<Vec2>,
}

/// Advance the game state by one fixed timestep
///
/// Pointer input is applied first. Once the session is over nothing else
/// happens. Errors only surface if contact detection hands the resolver
/// something it rejects, which the built-in detection never does.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Result<(), SimError> {
    if let Some(pointer) = input.pointer {
        state.pointer_moved(pointer.x);
    }

    if state.is_over() {
        return Ok(());
    }

    state.time_ticks += 1;

    state.paddle.integrate(dt);
    state.ball.integrate(dt);
    for brick in &mut state.bricks {
        brick.integrate(dt);
    }

    for (other, penetration) in detect_ball_contacts(state) {
        state.ball_contact(other, penetration)?;
    }
    separate_active_bodies(state);

    state.post_update();
    state.check_viewport();

    Ok(())
}
