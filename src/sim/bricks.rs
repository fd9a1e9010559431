//! Brick field layout
//!
//! Fully deterministic: the grid depends only on screen width and the layout
//! constants. Any change to the formula changes brick spacing and therefore
//! gameplay.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Color;
use crate::consts::*;

/// Grid parameters for the brick field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    /// Gap between bricks and around the grid
    pub padding: f32,
    pub x_offset: f32,
    pub y_offset: f32,
    pub columns: u32,
    pub rows: u32,
    pub brick_height: f32,
    /// Row colours, cycled by row index
    pub palette: Vec<Color>,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            padding: BRICK_PADDING,
            x_offset: BRICK_X_OFFSET,
            y_offset: BRICK_Y_OFFSET,
            columns: BRICK_COLUMNS,
            rows: BRICK_ROWS,
            brick_height: BRICK_HEIGHT,
            palette: vec![Color::VIOLET, Color::ORANGE, Color::YELLOW],
        }
    }
}

/// Where one brick goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickPlacement {
    pub row: u32,
    pub column: u32,
    /// Centre of the brick
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl BrickLayout {
    /// Width of a single brick with padding factored in
    pub fn brick_width(&self, screen_width: f32) -> f32 {
        let columns = self.columns as f32;
        screen_width / columns - self.padding - self.padding / columns
    }

    /// Centre of the brick at `column`, `row`
    pub fn position(&self, column: u32, row: u32, screen_width: f32) -> Vec2 {
        let width = self.brick_width(screen_width);
        Vec2::new(
            self.x_offset + column as f32 * (width + self.padding) + self.padding,
            self.y_offset + row as f32 * (self.brick_height + self.padding) + self.padding,
        )
    }

    /// Palette entry for `row`, `None` when the palette is empty
    pub fn color_for_row(&self, row: u32) -> Option<Color> {
        self.palette
            .get(row as usize % self.palette.len().max(1))
            .copied()
    }

    pub fn brick_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Every brick, row by row, left to right
    ///
    /// Expects a layout that passed `Settings::validate`. An empty palette
    /// yields no bricks at all.
    pub fn generate(&self, screen_width: f32) -> Vec<BrickPlacement> {
        let size = Vec2::new(self.brick_width(screen_width), self.brick_height);
        let mut placements = Vec::with_capacity(self.brick_count());
        for row in 0..self.rows {
            let Some(color) = self.color_for_row(row) else {
                log::warn!("Brick palette is empty, no bricks generated");
                return Vec::new();
            };
            for column in 0..self.columns {
                placements.push(BrickPlacement {
                    row,
                    column,
                    pos: self.position(column, row, screen_width),
                    size,
                    color,
                });
            }
        }

        log::debug!(
            "Generated {}x{} brick field, brick width {:.2}",
            self.rows,
            self.columns,
            size.x
        );
        placements
    }
}
