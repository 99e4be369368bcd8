//! # Entities
//!
//! A physics entity is an axis-aligned box with kinematic state, a collision switch, and an id. The caller owns the collection of entities; this module never allocates or frees storage for them.

use std::fmt;
use std::time::Duration;

use crate::collision::Sides;
use crate::config::{PhysicsConfig, GRAVITY, PIXELS_PER_METER};
use crate::error::PhysicsError;
use crate::vector::Vector2f;

/// Identity of an entity. Two entities with the same id never collide with each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u32);

impl EntityId {
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out entity ids, counting up from zero. Ids are never reused.
///
/// Uniqueness only holds within one allocator, so a simulation should build all its entities from the same one.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Clone, Debug)]
pub struct PhysicsEntity {
    pub(crate) position: Vector2f,
    pub(crate) velocity: Vector2f,
    /// meters/second²
    pub(crate) acceleration: Vector2f,
    /// pixels; the box spans `position..position + size`
    pub(crate) size: Vector2f,
    pub(crate) do_kinematics: bool,
    pub(crate) collidable: bool,
    id: EntityId,
    pub(crate) contacts: Sides,
    pub(crate) last_timestamp: Option<Duration>,
    pub(crate) delta_time: f32,
    pub(crate) pixels_per_meter: f32,
}

impl PhysicsEntity {
    /// Makes an entity at rest with default gravity.
    ///
    /// Nothing is validated here: negative sizes or NaNs go straight into the simulation. Use [PhysicsEntity::try_new] to reject them.
    pub fn new(
        ids: &mut IdAllocator,
        position: Vector2f,
        size: Vector2f,
        do_kinematics: bool,
        collidable: bool,
    ) -> Self {
        let id = ids.next_id();
        tracing::debug!(%id, %position, %size, do_kinematics, collidable, "new physics entity");
        Self {
            position,
            velocity: Vector2f::ZERO,
            acceleration: GRAVITY,
            size,
            do_kinematics,
            collidable,
            id,
            contacts: Sides::new(),
            last_timestamp: None,
            delta_time: 0.0,
            pixels_per_meter: PIXELS_PER_METER,
        }
    }

    /// Like [PhysicsEntity::new], but takes gravity and scale from `config`.
    pub fn with_config(
        ids: &mut IdAllocator,
        config: &PhysicsConfig,
        position: Vector2f,
        size: Vector2f,
        do_kinematics: bool,
        collidable: bool,
    ) -> Self {
        let mut entity = Self::new(ids, position, size, do_kinematics, collidable);
        entity.acceleration = config.gravity;
        entity.pixels_per_meter = config.pixels_per_meter;
        entity
    }

    /// Checked construction. Fails on negative sizes and non-finite positions or sizes, and doesn't consume an id when it does.
    pub fn try_new(
        ids: &mut IdAllocator,
        position: Vector2f,
        size: Vector2f,
        do_kinematics: bool,
        collidable: bool,
    ) -> Result<Self, PhysicsError> {
        let reason = if !position.is_finite() {
            Some("position must be finite")
        } else if !size.is_finite() {
            Some("size must be finite")
        } else if size.x < 0.0 || size.y < 0.0 {
            Some("size must not be negative")
        } else {
            None
        };
        if let Some(reason) = reason {
            tracing::warn!(%position, %size, reason, "rejected physics entity");
            return Err(PhysicsError::InvalidEntityConfiguration { reason });
        }
        Ok(Self::new(ids, position, size, do_kinematics, collidable))
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn position(&self) -> Vector2f {
        self.position
    }

    pub fn velocity(&self) -> Vector2f {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector2f {
        self.acceleration
    }

    pub fn size(&self) -> Vector2f {
        self.size
    }

    pub fn does_kinematics(&self) -> bool {
        self.do_kinematics
    }

    pub fn is_collidable(&self) -> bool {
        self.collidable
    }

    /// Whether the last resolution pass pushed this entity up off something, i.e. it's standing on it.
    pub fn is_colliding_bottom(&self) -> bool {
        self.contacts.bottom
    }

    /// Contact flags from the most recent resolution pass.
    pub fn contacts(&self) -> Sides {
        self.contacts
    }

    /// Seconds the most recent kinematic step covered.
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    pub fn pixels_per_meter(&self) -> f32 {
        self.pixels_per_meter
    }

    /// Turning this off makes the entity pass-through, both as a mover and as an obstacle, without taking it out of the collection.
    pub fn set_collidable(&mut self, collidable: bool) {
        self.collidable = collidable;
    }

    pub fn set_do_kinematics(&mut self, do_kinematics: bool) {
        self.do_kinematics = do_kinematics;
    }

    pub fn set_position(&mut self, position: Vector2f) {
        self.position = position;
    }

    pub fn set_velocity(&mut self, velocity: Vector2f) {
        self.velocity = velocity;
    }

    pub fn set_acceleration(&mut self, acceleration: Vector2f) {
        self.acceleration = acceleration;
    }

    pub fn center(&self) -> Vector2f {
        Vector2f::new(
            self.position.x + self.size.x / 2.0,
            self.position.y + self.size.y / 2.0,
        )
    }

    /// Box intersection with inclusive edges: boxes that only touch count as overlapping.
    pub fn overlaps(&self, other: &PhysicsEntity) -> bool {
        self.position.x <= other.position.x + other.size.x
            && self.position.x + self.size.x >= other.position.x
            && self.position.y <= other.position.y + other.size.y
            && self.position.y + self.size.y >= other.position.y
    }
}
