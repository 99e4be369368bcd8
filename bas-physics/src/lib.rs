//! # bas-physics
//!
//! Axis-aligned boxes that fall, bump into each other, and stop. This is the physics core of a small 2d engine: a mutable vector type, an entity with kinematic state and contact flags, and a per-frame update that integrates motion and then resolves overlaps.
//!
//! The caller owns the entities and the frame loop. Every frame, call [update_all] (or [update_entity] for each index) and then read positions back out for drawing.
//!
//! ```
//! use bas_physics::{update_all, IdAllocator, PhysicsEntity, Vector2f};
//!
//! let mut ids = IdAllocator::new();
//! let mut entities = vec![
//!     PhysicsEntity::new(&mut ids, Vector2f::new(0.0, 100.0), Vector2f::new(640.0, 32.0), false, true),
//!     PhysicsEntity::new(&mut ids, Vector2f::new(300.0, 0.0), Vector2f::new(32.0, 32.0), true, true),
//! ];
//! for _ in 0..120 {
//!     update_all(&mut entities, 1.0 / 60.0);
//! }
//! // resting on the floor, whose top edge is at y = 100
//! assert!((entities[1].position().y - 68.0).abs() < 0.5);
//! ```

mod clock;
mod collision;
mod config;
mod entity;
mod error;
mod physics;
pub mod tables;
mod update;
mod vector;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use collision::{penetration_depth, ResolutionAxis, Sides};
pub use config::{PhysicsConfig, GRAVITY, PIXELS_PER_METER};
pub use entity::{EntityId, IdAllocator, PhysicsEntity};
pub use error::PhysicsError;
pub use update::{update_all, update_all_with_clock, update_entity};
pub use vector::Vector2f;
