//! Game settings
//!
//! Defaults reproduce the classic layout: 800x400 screen, 200x20 paddle,
//! 20px ball at 100 px/s per axis and a 5x3 brick grid. Every field is
//! optional in JSON, so a config only needs to name what it changes.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::aabb::Aabb;
use crate::sim::bricks::BrickLayout;
use crate::sim::state::{Color, ScreenMetrics};

/// Error type for loading and validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error while reading the file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parse failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Values that cannot produce a playable session.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Paddle placement and look
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub start_x: f32,
    /// Distance from the bottom edge to the paddle centre
    pub bottom_offset: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            start_x: PADDLE_START_X,
            bottom_offset: PADDLE_BOTTOM_OFFSET,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            color: Color::CHARTREUSE,
        }
    }
}

/// Ball spawn and look
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub start: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
    /// Edge of the square collision box
    pub size: f32,
    pub draw_radius: f32,
    pub color: Color,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            start: Vec2::new(BALL_START_X, BALL_START_Y),
            velocity: Vec2::new(BALL_START_VX, BALL_START_VY),
            size: BALL_SIZE,
            draw_radius: BALL_DRAW_RADIUS,
            color: Color::RED,
        }
    }
}

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen: ScreenMetrics,
    pub paddle: PaddleSettings,
    pub ball: BallSettings,
    pub bricks: BrickLayout,
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json_pretty(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that cannot produce a playable session
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| Err(SettingsError::Invalid(msg));

        if self.screen.width <= 0.0 || self.screen.height <= 0.0 {
            return invalid(format!(
                "screen must be non-empty, got {}x{}",
                self.screen.width, self.screen.height
            ));
        }
        if self.paddle.width <= 0.0 || self.paddle.height <= 0.0 {
            return invalid("paddle size must be positive".to_string());
        }
        if self.ball.size <= 0.0 || self.ball.draw_radius <= 0.0 {
            return invalid("ball size and draw radius must be positive".to_string());
        }
        if self.ball.velocity.x == 0.0 || self.ball.velocity.y == 0.0 {
            return invalid(format!(
                "ball velocity components must be nonzero, got ({}, {})",
                self.ball.velocity.x, self.ball.velocity.y
            ));
        }
        let ball_box = Aabb::from_center_size(self.ball.start, Vec2::splat(self.ball.size));
        if !ball_box.overlaps(&self.screen.viewport()) {
            return invalid(format!(
                "ball must start on screen, got ({}, {})",
                self.ball.start.x, self.ball.start.y
            ));
        }

        let layout = &self.bricks;
        if layout.columns == 0 || layout.rows == 0 {
            return invalid(format!(
                "brick grid must have rows and columns, got {}x{}",
                layout.rows, layout.columns
            ));
        }
        match layout.rows.checked_mul(layout.columns) {
            Some(count) if count <= MAX_BRICKS => {}
            _ => {
                return invalid(format!(
                    "brick grid {}x{} exceeds {} bricks",
                    layout.rows, layout.columns, MAX_BRICKS
                ));
            }
        }
        if layout.palette.is_empty() {
            return invalid("brick palette is empty".to_string());
        }
        if layout.brick_height <= 0.0 {
            return invalid("brick height must be positive".to_string());
        }
        let width = layout.brick_width(self.screen.width);
        if width <= 0.0 {
            return invalid(format!(
                "{} columns leave no room for bricks on a {}px screen (width {})",
                layout.columns, self.screen.width, width
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.screen.width, 800.0);
        assert_eq!(settings.screen.height, 400.0);
        assert_eq!(settings.bricks.palette.len(), 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "bricks": { "rows": 4 } }"#).unwrap();
        assert_eq!(settings.bricks.rows, 4);
        assert_eq!(settings.bricks.columns, BRICK_COLUMNS);
        assert_eq!(settings.ball, BallSettings::default());
    }

    #[test]
    fn test_json_colors_and_vectors() {
        let json = r#"{
            "ball": { "velocity": [150.0, -90.0], "color": { "r": 1, "g": 2, "b": 3 } }
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.ball.velocity, Vec2::new(150.0, -90.0));
        assert_eq!(settings.ball.color, Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_rejects_zero_columns() {
        let err = Settings::from_json(r#"{ "bricks": { "columns": 0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_overpadded_grid() {
        let err = Settings::from_json(r#"{ "bricks": { "columns": 40 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_velocity_component() {
        let err = Settings::from_json(r#"{ "ball": { "velocity": [100.0, 0.0] } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let err = Settings::from_json(r#"{ "bricks": { "rows": 1000000000 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err = Settings::from_json(r#"{ "bricks": { "rows": 4294967295, "columns": 2 } }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_ball_starting_off_screen() {
        let err = Settings::from_json(r#"{ "ball": { "start": [400.0, 500.0] } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        // Partly visible is still playable
        let settings = Settings::from_json(r#"{ "ball": { "start": [400.0, 405.0] } }"#).unwrap();
        assert_eq!(settings.ball.start, Vec2::new(400.0, 405.0));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Serde(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Settings::load("/definitely/not/here.json"),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_pretty_json_reloads() {
        let json = Settings::default().to_json_pretty().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), Settings::default());
    }
}
