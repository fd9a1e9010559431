//! Collision detection and response
//!
//! The ball is Passive: nothing repositions it on contact, so every bounce is
//! derived here from the dominant axis of the penetration vector. That
//! approximates a reflection off the contacted face without a physics solve.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Actor, ActorKind, CollisionType, GameEvent, GameState};
use crate::error::SimError;

/// Velocity axis a contact inverts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Invert the component of `vel` on this axis
    #[inline]
    pub fn flip(self, vel: &mut Vec2) {
        match self {
            Axis::X => vel.x *= -1.0,
            Axis::Y => vel.y *= -1.0,
        }
    }
}

/// Axis with the larger magnitude in the normalized penetration vector
///
/// Ties (corner hits) pick Y since `|x| > |y|` is false when equal.
pub fn dominant_axis(penetration: Vec2) -> Result<Axis, SimError> {
    let dir = penetration
        .try_normalize()
        .ok_or(SimError::DegeneratePenetration {
            x: penetration.x,
            y: penetration.y,
        })?;

    if dir.x.abs() > dir.y.abs() {
        Ok(Axis::X)
    } else {
        Ok(Axis::Y)
    }
}

/// React to the ball touching entity `other`
///
/// Bricks are removed first, then the ball's velocity is inverted on the
/// dominant axis. This applies to every contact, paddle included.
/// Preconditions are checked before anything is mutated.
pub fn resolve_ball_contact(
    state: &mut GameState,
    other: u32,
    penetration: Vec2,
) -> Result<Axis, SimError> {
    if other == state.ball.id {
        return Err(SimError::SelfContact(other));
    }
    let actor = state.actor(other).ok_or(SimError::UnknownActor(other))?;
    if !actor.collision.participates() {
        return Err(SimError::InertContact(other));
    }
    let kind = actor.kind;
    let axis = dominant_axis(penetration)?;

    if kind == ActorKind::Brick {
        if let Some(idx) = state.bricks.iter().position(|b| b.id == other) {
            state.bricks.remove(idx);
        }
        let remaining = state.bricks.len();
        log::debug!("Brick {} destroyed, {} left", other, remaining);
        state.emit(GameEvent::BrickDestroyed {
            id: other,
            remaining,
        });
    }

    axis.flip(&mut state.ball.vel);
    log::trace!(
        "Ball bounced off {:?} {} on {:?}, vel now ({}, {})",
        kind,
        other,
        axis,
        state.ball.vel.x,
        state.ball.vel.y
    );
    state.emit(GameEvent::Bounce { other, kind, axis });

    Ok(axis)
}

/// Every entity the ball currently overlaps, with the ball's penetration
///
/// Order is paddle first, then bricks in layout order. Inert entities are
/// never reported.
pub fn detect_ball_contacts(state: &GameState) -> Vec<(u32, Vec2)> {
    if !state.ball.collision.participates() {
        return Vec::new();
    }

    let ball_box = state.ball.aabb();
    std::iter::once(&state.paddle)
        .chain(state.bricks.iter())
        .filter(|actor| actor.collision.participates())
        .filter_map(|actor| ball_box.penetration(&actor.aabb()).map(|pen| (actor.id, pen)))
        .collect()
}

/// Push overlapping Active bodies apart
///
/// Only pairs of Fixed/Active bodies with at least one Active member are
/// resolved. Passive and Inert bodies (the ball) are never moved here.
pub fn separate_active_bodies(state: &mut GameState) {
    let mut bodies: Vec<&mut Actor> = std::iter::once(&mut state.paddle)
        .chain(state.bricks.iter_mut())
        .collect();

    for j in 1..bodies.len() {
        let (head, tail) = bodies.split_at_mut(j);
        let b = &mut *tail[0];
        for a in head.iter_mut() {
            separate_pair(&mut **a, b);
        }
    }
}

fn separate_pair(a: &mut Actor, b: &mut Actor) {
    use CollisionType::{Active, Fixed};

    let resolvable = |c: CollisionType| matches!(c, Fixed | Active);
    if !resolvable(a.collision) || !resolvable(b.collision) {
        return;
    }

    // Push that moves `a` out of `b`
    let Some(push) = a.aabb().penetration(&b.aabb()) else {
        return;
    };

    match (a.collision, b.collision) {
        (Active, Active) => {
            a.pos += push / 2.0;
            b.pos -= push / 2.0;
        }
        (Active, _) => a.pos += push,
        (_, Active) => b.pos -= push,
        _ => return,
    }
    log::trace!("Separated {} and {} by ({}, {})", a.id, b.id, push.x, push.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::Color;

    fn session() -> GameState {
        GameState::new(&Settings::default())
    }

    #[test]
    fn test_dominant_axis() {
        assert_eq!(dominant_axis(Vec2::new(5.0, -1.0)), Ok(Axis::X));
        assert_eq!(dominant_axis(Vec2::new(0.1, -4.0)), Ok(Axis::Y));
        assert_eq!(dominant_axis(Vec2::new(-2.0, 0.0)), Ok(Axis::X));
    }

    #[test]
    fn test_tie_flips_y() {
        // (3, 3) normalizes to (0.707, 0.707)
        assert_eq!(dominant_axis(Vec2::new(3.0, 3.0)), Ok(Axis::Y));
        assert_eq!(dominant_axis(Vec2::new(-3.0, 3.0)), Ok(Axis::Y));
    }

    #[test]
    fn test_degenerate_penetration_is_rejected() {
        assert!(matches!(
            dominant_axis(Vec2::ZERO),
            Err(SimError::DegeneratePenetration { .. })
        ));
        assert!(dominant_axis(Vec2::new(f32::NAN, 1.0)).is_err());
    }

    #[test]
    fn test_brick_contact_removes_brick_and_flips() {
        let mut state = session();
        let brick_id = state.bricks[7].id;
        let before = state.brick_count();

        let axis = resolve_ball_contact(&mut state, brick_id, Vec2::new(0.0, -1.5)).unwrap();
        assert_eq!(axis, Axis::Y);
        assert_eq!(state.brick_count(), before - 1);
        assert!(state.actor(brick_id).is_none());
        assert_eq!(state.ball.vel, Vec2::new(100.0, -100.0));

        let events = state.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::BrickDestroyed {
                    id: brick_id,
                    remaining: before - 1
                },
                GameEvent::Bounce {
                    other: brick_id,
                    kind: ActorKind::Brick,
                    axis: Axis::Y
                },
            ]
        );
    }

    #[test]
    fn test_repeated_contact_with_removed_brick_is_rejected() {
        let mut state = session();
        let brick_id = state.bricks[0].id;
        let before = state.brick_count();

        resolve_ball_contact(&mut state, brick_id, Vec2::new(2.0, 0.0)).unwrap();
        let vel = state.ball.vel;
        let second = resolve_ball_contact(&mut state, brick_id, Vec2::new(2.0, 0.0));

        assert_eq!(second, Err(SimError::UnknownActor(brick_id)));
        assert_eq!(state.brick_count(), before - 1);
        assert_eq!(state.ball.vel, vel);
    }

    #[test]
    fn test_paddle_contact_flips_without_removal() {
        let mut state = session();
        let paddle_id = state.paddle.id;
        let before = state.brick_count();

        let axis = resolve_ball_contact(&mut state, paddle_id, Vec2::new(0.0, -0.5)).unwrap();
        assert_eq!(axis, Axis::Y);
        assert_eq!(state.brick_count(), before);
        assert_eq!(state.ball.vel, Vec2::new(100.0, -100.0));
        assert_eq!(state.actor(paddle_id).map(|a| a.kind), Some(ActorKind::Paddle));
    }

    #[test]
    fn test_side_contact_flips_x() {
        let mut state = session();
        let paddle_id = state.paddle.id;
        resolve_ball_contact(&mut state, paddle_id, Vec2::new(-1.0, 0.2)).unwrap();
        assert_eq!(state.ball.vel, Vec2::new(-100.0, 100.0));
    }

    #[test]
    fn test_precondition_violations_leave_state_untouched() {
        let mut state = session();
        let ball_id = state.ball.id;
        let brick_id = state.bricks[2].id;
        let before = state.brick_count();

        assert_eq!(
            resolve_ball_contact(&mut state, ball_id, Vec2::new(1.0, 0.0)),
            Err(SimError::SelfContact(ball_id))
        );
        assert_eq!(
            resolve_ball_contact(&mut state, 4242, Vec2::new(1.0, 0.0)),
            Err(SimError::UnknownActor(4242))
        );
        assert!(resolve_ball_contact(&mut state, brick_id, Vec2::ZERO).is_err());

        assert_eq!(state.brick_count(), before);
        assert_eq!(state.ball.vel, Vec2::new(100.0, 100.0));
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_inert_entities_are_not_contacted() {
        let mut state = session();
        state.bricks[0].collision = CollisionType::Inert;
        let inert_id = state.bricks[0].id;
        state.ball.pos = state.bricks[0].pos;

        assert!(detect_ball_contacts(&state).iter().all(|(id, _)| *id != inert_id));
        assert_eq!(
            resolve_ball_contact(&mut state, inert_id, Vec2::new(0.0, 1.0)),
            Err(SimError::InertContact(inert_id))
        );
    }

    #[test]
    fn test_detect_reports_overlapping_brick() {
        let mut state = session();
        let target = state.bricks[0].clone();
        // Ball box bottom 1px into the brick's top face
        state.ball.pos = Vec2::new(target.pos.x, target.pos.y - 15.0 - 10.0 + 1.0);

        let contacts = detect_ball_contacts(&state);
        assert_eq!(contacts.len(), 1);
        let (id, pen) = contacts[0];
        assert_eq!(id, target.id);
        assert_eq!(dominant_axis(pen), Ok(Axis::Y));
        assert!(pen.y < 0.0, "ball pushed upward, got {pen}");
    }

    #[test]
    fn test_active_brick_pushed_off_fixed_paddle() {
        let mut state = session();
        state.bricks.clear();
        let paddle_pos = state.paddle.pos;
        // Brick sunk 5px into the paddle's top face
        let id = state.spawn_brick(
            Vec2::new(paddle_pos.x, paddle_pos.y - 10.0 - 15.0 + 5.0),
            Vec2::new(136.0, 30.0),
            Color::YELLOW,
        );

        separate_active_bodies(&mut state);

        assert_eq!(state.paddle.pos, paddle_pos);
        let brick = state.actor(id).unwrap();
        assert!((brick.pos.y - (paddle_pos.y - 25.0)).abs() < 1e-3);
    }

    #[test]
    fn test_overlapping_active_bricks_split_the_push() {
        let mut state = session();
        state.bricks.clear();
        let a = state.spawn_brick(Vec2::new(100.0, 100.0), Vec2::new(40.0, 30.0), Color::VIOLET);
        let b = state.spawn_brick(Vec2::new(136.0, 100.0), Vec2::new(40.0, 30.0), Color::VIOLET);

        separate_active_bodies(&mut state);

        let left = state.actor(a).unwrap().pos.x;
        let right = state.actor(b).unwrap().pos.x;
        assert!((left - 98.0).abs() < 1e-3);
        assert!((right - 138.0).abs() < 1e-3);
    }

    #[test]
    fn test_layout_bricks_need_no_separation() {
        let mut state = session();
        let before: Vec<Vec2> = state.bricks.iter().map(|b| b.pos).collect();
        separate_active_bodies(&mut state);
        let after: Vec<Vec2> = state.bricks.iter().map(|b| b.pos).collect();
        assert_eq!(before, after);
    }
}
