//! Simulation errors
//!
//! Gameplay itself has no recoverable failures. These variants describe a
//! host handing the session a contact it could never have produced.

use thiserror::Error;

/// Precondition violations raised by the collision resolver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Penetration vector has no direction (zero length or non-finite).
    #[error("degenerate penetration vector ({x}, {y})")]
    DegeneratePenetration { x: f32, y: f32 },
    /// No live entity carries this id (never spawned or already removed).
    #[error("no live entity with id {0}")]
    UnknownActor(u32),
    /// The ball was reported as touching itself.
    #[error("ball {0} reported a contact with itself")]
    SelfContact(u32),
    /// Inert entities never take part in collisions.
    #[error("entity {0} is inert and cannot be contacted")]
    InertContact(u32),
}
