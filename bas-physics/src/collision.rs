//! # Collision
//!
//! Detects overlaps between an entity and the rest of the collection and pushes the entity out along whichever axis it's least stuck in.
//!
//! Resolution is sequential: each push lands immediately and the next overlap test sees it. With three or more bodies piled on each other the outcome depends on collection order, and one pass can leave an entity still overlapping something. Boxes that merely touch count as overlapping, so resting contacts get re-resolved every frame and can jitter.
//!
//! Entities that don't do kinematics are immovable. They still get their contact flags set, but are never pushed.

use crate::entity::PhysicsEntity;
use crate::vector::Vector2f;

/// Which sides of an entity were pushed on in the last resolution pass.
///
/// `bottom` means the entity was pushed up, i.e. it's resting on something.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sides {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Sides {
    pub fn new() -> Self {
        Self {
            top: false,
            right: false,
            bottom: false,
            left: false,
        }
    }

    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

/// The axis a pair's overlap gets resolved on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionAxis {
    X,
    Y,
    /// Same depth on both axes; the pair is left alone.
    Tie,
}

impl ResolutionAxis {
    pub fn from_depth(depth: Vector2f) -> Self {
        if depth.x < depth.y {
            ResolutionAxis::X
        } else if depth.x > depth.y {
            ResolutionAxis::Y
        } else {
            ResolutionAxis::Tie
        }
    }
}

/// How far `a` and `b` overlap on each axis, measured from their centers.
///
/// Only meaningful when the boxes actually overlap; otherwise at least one component is negative.
pub fn penetration_depth(a: &PhysicsEntity, b: &PhysicsEntity) -> Vector2f {
    let center = a.center();
    let other_center = b.center();
    Vector2f::new(
        a.size.x / 2.0 + b.size.x / 2.0 - (center.x - other_center.x).abs(),
        a.size.y / 2.0 + b.size.y / 2.0 - (center.y - other_center.y).abs(),
    )
}

impl PhysicsEntity {
    /// Clears the contact flags and pushes this entity out of every collidable entity in `others`.
    ///
    /// Entries sharing this entity's id are skipped, so `others` may include a copy of this entity. Does nothing when this entity isn't collidable.
    pub fn resolve_collisions<'a, I>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'a PhysicsEntity>,
    {
        if !self.collidable {
            return;
        }
        self.contacts = Sides::new();
        for other in others {
            if !other.collidable || other.id() == self.id() {
                continue;
            }
            if self.overlaps(other) {
                self.resolve_against(other);
            }
        }
    }

    fn resolve_against(&mut self, other: &PhysicsEntity) {
        let depth = penetration_depth(self, other);
        let push = match ResolutionAxis::from_depth(depth) {
            ResolutionAxis::X => {
                if self.position.x < other.position.x {
                    self.contacts.right = true;
                    Vector2f::new(-depth.x, 0.0)
                } else {
                    self.contacts.left = true;
                    Vector2f::new(depth.x, 0.0)
                }
            }
            ResolutionAxis::Y => {
                if self.position.y < other.position.y {
                    self.contacts.bottom = true;
                    Vector2f::new(0.0, -depth.y)
                } else {
                    self.contacts.top = true;
                    Vector2f::new(0.0, depth.y)
                }
            }
            ResolutionAxis::Tie => return,
        };
        // entities without kinematics are immovable: they record the contact and stay put
        if self.do_kinematics {
            self.position.add(&push);
        }
        tracing::trace!(
            id = %self.id(),
            other = %other.id(),
            %depth,
            position = %self.position,
            "resolved overlap"
        );
    }
}
