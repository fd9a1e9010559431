//! Game state and core simulation types
//!
//! The session owns every entity. Components borrow actors or refer to them
//! by id, never take ownership.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::boundary::Wall;
use super::bricks::BrickLayout;
use super::collision::Axis;
use crate::error::SimError;
use crate::settings::{BallSettings, PaddleSettings, Settings, SettingsError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in motion
    Playing,
    /// Ball left the screen, session is over
    GameOver,
}

/// How an entity takes part in collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// Never reported
    Inert,
    /// Reported, never moved by separation (paddle)
    Fixed,
    /// Reported, never moved by separation; reacts in its own handler (ball)
    Passive,
    /// Reported and pushed apart from what it overlaps (bricks)
    Active,
}

impl CollisionType {
    /// Whether contacts with this entity are reported at all
    pub fn participates(&self) -> bool {
        *self != CollisionType::Inert
    }
}

/// What an entity is drawn as
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Fill the bounding box
    Rect,
    /// Circle of fixed radius at the centre, independent of the box
    Circle { radius: f32 },
}

/// Entity role within the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Paddle,
    Ball,
    Brick,
}

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const CHARTREUSE: Color = Color::rgb(0x7f, 0xff, 0x00);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const VIOLET: Color = Color::rgb(0xee, 0x82, 0xee);
    pub const ORANGE: Color = Color::rgb(0xff, 0xa5, 0x00);
    pub const YELLOW: Color = Color::rgb(0xff, 0xff, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA for vertex colours
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Screen metrics the layout and boundaries are measured against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenMetrics {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self {
            width: crate::consts::SCREEN_WIDTH,
            height: crate::consts::SCREEN_HEIGHT,
        }
    }
}

impl ScreenMetrics {
    /// The visible area as a box
    pub fn viewport(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }
}

/// A game entity: paddle, ball or brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    pub kind: ActorKind,
    /// Centre of the bounding box
    pub pos: Vec2,
    /// Pixels per second
    pub vel: Vec2,
    pub size: Vec2,
    pub collision: CollisionType,
    pub shape: Shape,
    pub color: Color,
}

impl Actor {
    /// Paddle resting `bottom_offset` above the bottom edge
    pub fn paddle(id: u32, settings: &PaddleSettings, screen: &ScreenMetrics) -> Self {
        Self {
            id,
            kind: ActorKind::Paddle,
            pos: Vec2::new(settings.start_x, screen.height - settings.bottom_offset),
            vel: Vec2::ZERO,
            size: Vec2::new(settings.width, settings.height),
            collision: CollisionType::Fixed,
            shape: Shape::Rect,
            color: settings.color,
        }
    }

    pub fn ball(id: u32, settings: &BallSettings) -> Self {
        Self {
            id,
            kind: ActorKind::Ball,
            pos: settings.start,
            vel: settings.velocity,
            size: Vec2::splat(settings.size),
            collision: CollisionType::Passive,
            shape: Shape::Circle {
                radius: settings.draw_radius,
            },
            color: settings.color,
        }
    }

    pub fn brick(id: u32, pos: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            id,
            kind: ActorKind::Brick,
            pos,
            vel: Vec2::ZERO,
            size,
            collision: CollisionType::Active,
            shape: Shape::Rect,
            color,
        }
    }

    /// Apply the motion law: pos += vel * dt
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Collision box
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }
}

/// Discrete things that happened during a tick, drained by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Ball crossed a screen edge and was reflected
    WallBounce { wall: Wall },
    /// Ball touched another entity and flipped one velocity axis
    Bounce { other: u32, kind: ActorKind, axis: Axis },
    /// A brick was removed from play
    BrickDestroyed { id: u32, remaining: usize },
    /// Ball left the viewport; terminal
    SessionLost,
}

/// One playthrough: paddle, ball and brick field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub screen: ScreenMetrics,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub paddle: Actor,
    pub ball: Actor,
    /// Live bricks in layout order
    pub bricks: Vec<Actor>,
    /// Whether the ball box intersected the viewport after the last tick
    ball_visible: bool,
    /// Pending events (not part of the snapshot)
    #[serde(skip)]
    events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Validate settings, then build the session
    pub fn try_new(settings: &Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::new(settings))
    }

    /// Build a session from settings: paddle, ball, then the brick field
    ///
    /// `settings` must pass [`Settings::validate`]. Unchecked settings can
    /// produce a session with no bricks or one that never ends; use
    /// [`GameState::try_new`] when they come from outside.
    pub fn new(settings: &Settings) -> Self {
        let screen = settings.screen;
        let paddle = Actor::paddle(1, &settings.paddle, &screen);
        let ball = Actor::ball(2, &settings.ball);
        let ball_visible = ball.aabb().overlaps(&screen.viewport());

        let mut state = Self {
            screen,
            time_ticks: 0,
            phase: GamePhase::Playing,
            paddle,
            ball,
            bricks: Vec::new(),
            ball_visible,
            events: Vec::new(),
            next_id: 3,
        };
        state.spawn_brick_field(&settings.bricks);

        log::info!(
            "Session started: {}x{} screen, {} bricks",
            screen.width,
            screen.height,
            state.bricks.len()
        );
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Register a single brick, returning its id
    pub fn spawn_brick(&mut self, pos: Vec2, size: Vec2, color: Color) -> u32 {
        let id = self.next_entity_id();
        self.bricks.push(Actor::brick(id, pos, size, color));
        id
    }

    /// Lay out and register the full brick grid
    pub fn spawn_brick_field(&mut self, layout: &BrickLayout) {
        for placement in layout.generate(self.screen.width) {
            self.spawn_brick(placement.pos, placement.size, placement.color);
        }
    }

    pub fn brick_count(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Look up any live entity by id
    pub fn actor(&self, id: u32) -> Option<&Actor> {
        if self.paddle.id == id {
            Some(&self.paddle)
        } else if self.ball.id == id {
            Some(&self.ball)
        } else {
            self.bricks.iter().find(|b| b.id == id)
        }
    }

    /// Pointer moved to world-space `x`: the paddle follows exactly
    pub fn pointer_moved(&mut self, x: f32) {
        if self.is_over() {
            return;
        }
        super::paddle::track_pointer(&mut self.paddle, x);
    }

    /// React to the ball touching entity `other`
    pub fn ball_contact(&mut self, other: u32, penetration: Vec2) -> Result<Axis, SimError> {
        super::collision::resolve_ball_contact(self, other, penetration)
    }

    /// Per-frame wall reflection for the ball
    pub fn post_update(&mut self) {
        let walls = super::boundary::reflect_off_walls(&mut self.ball, &self.screen);
        for wall in walls {
            self.emit(GameEvent::WallBounce { wall });
        }
    }

    /// Check the viewport after motion, ending the session on the exit edge
    pub fn check_viewport(&mut self) {
        let visible = !super::boundary::has_left_viewport(&self.ball, &self.screen);
        if self.ball_visible && !visible {
            self.ball_exited_viewport();
        }
        self.ball_visible = visible;
    }

    /// Ball fully left the screen: end the session (fires once)
    pub fn ball_exited_viewport(&mut self) {
        if self.is_over() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.emit(GameEvent::SessionLost);
        log::info!(
            "Ball left the screen at ({:.1}, {:.1}) after {} ticks, {} bricks left",
            self.ball.pos.x,
            self.ball.pos.y,
            self.time_ticks,
            self.bricks.len()
        );
    }

    /// Take every event queued since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
