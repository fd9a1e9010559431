//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness (the brick field is a pure function of the layout)
//! - Stable iteration order (paddle, then bricks in layout order)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod boundary;
pub mod bricks;
pub mod collision;
pub mod paddle;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use boundary::{Wall, has_left_viewport, reflect_off_walls};
pub use bricks::{BrickLayout, BrickPlacement};
pub use collision::{Axis, detect_ball_contacts, dominant_axis, resolve_ball_contact};
pub use paddle::track_pointer;
pub use state::{
    Actor, ActorKind, CollisionType, Color, GameEvent, GamePhase, GameState, ScreenMetrics, Shape,
};
pub use tick::{TickInput, tick};
