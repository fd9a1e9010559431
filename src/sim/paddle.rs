//! Pointer-driven paddle tracking

use super::state::Actor;

/// Move the paddle so its centre sits exactly at pointer `x`
///
/// No smoothing and no clamping: the paddle may be dragged partly or fully
/// off-screen. The vertical position never changes.
pub fn track_pointer(paddle: &mut Actor, x: f32) {
    paddle.pos.x = x;
}
