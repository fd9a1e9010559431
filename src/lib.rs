//! Brick Bounce - a single-screen breakout game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state)
//! - `renderer`: Data-driven draw list built from entity shape descriptors
//! - `settings`: Screen, paddle, ball and brick layout configuration
//! - `error`: Precondition violations reported by the simulation

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    /// Paddle defaults - centre sits 40px above the bottom edge
    pub const PADDLE_START_X: f32 = 150.0;
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;
    pub const PADDLE_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;

    /// Ball defaults
    pub const BALL_START_X: f32 = 100.0;
    pub const BALL_START_Y: f32 = 200.0;
    /// Initial velocity, pixels per second on each axis
    pub const BALL_START_VX: f32 = 100.0;
    pub const BALL_START_VY: f32 = 100.0;
    /// Collision box edge (the hit box stays square)
    pub const BALL_SIZE: f32 = 20.0;
    /// Radius the ball is drawn with
    pub const BALL_DRAW_RADIUS: f32 = 10.0;

    /// Brick field defaults
    pub const BRICK_PADDING: f32 = 20.0;
    pub const BRICK_X_OFFSET: f32 = 65.0;
    pub const BRICK_Y_OFFSET: f32 = 20.0;
    pub const BRICK_COLUMNS: u32 = 5;
    pub const BRICK_ROWS: u32 = 3;
    pub const BRICK_HEIGHT: f32 = 30.0;
    /// Largest brick grid a config may ask for
    pub const MAX_BRICKS: u32 = 10_000;
}
