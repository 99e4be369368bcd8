//! # Frame updates
//!
//! The per-frame entry points. Each entity is integrated and then resolved against the live collection, one entity at a time, in collection order. An entity resolved later in the pass sees where earlier entities were pushed to.
//!
//! `dt` is normally passed in by the caller. The `_with_clock` variants derive it per entity from a [Clock] instead, which makes the simulation frame-rate dependent.

use crate::clock::{seconds_between, Clock};
use crate::entity::PhysicsEntity;

impl PhysicsEntity {
    /// Integrates by `dt` seconds, then resolves against `entities`.
    ///
    /// `entities` may contain this entity (or a stale copy of it); anything with the same id is skipped.
    pub fn update(&mut self, entities: &[PhysicsEntity], dt: f32) {
        self.integrate(dt);
        self.resolve_collisions(entities);
    }

    /// Like [PhysicsEntity::update], with `dt` measured since this entity's last clocked update. The first clocked update only records the time and steps by zero.
    pub fn update_with_clock<C: Clock>(&mut self, entities: &[PhysicsEntity], clock: &C) {
        let dt = self.tick(clock);
        self.update(entities, dt);
    }

    fn tick<C: Clock>(&mut self, clock: &C) -> f32 {
        // the timestamp only advances for entities that move
        if !self.do_kinematics {
            return 0.0;
        }
        let now = clock.now();
        let dt = match self.last_timestamp {
            Some(last) => seconds_between(last, now),
            None => 0.0,
        };
        self.last_timestamp = Some(now);
        dt
    }
}

/// Updates the entity at `index` against the rest of `entities`, in place.
///
/// # Panics
///
/// If `index` is out of bounds.
pub fn update_entity(entities: &mut [PhysicsEntity], index: usize, dt: f32) {
    let (before, rest) = entities.split_at_mut(index);
    let (entity, after) = rest
        .split_first_mut()
        .unwrap_or_else(|| panic!("no entity at index {}", index));
    entity.integrate(dt);
    entity.resolve_collisions(before.iter().chain(after.iter()));
}

/// Runs one frame: every entity, in order, integrated by `dt` and resolved against the others.
pub fn update_all(entities: &mut [PhysicsEntity], dt: f32) {
    for index in 0..entities.len() {
        update_entity(entities, index, dt);
    }
}

/// Runs one frame with each entity's `dt` taken from `clock`.
pub fn update_all_with_clock<C: Clock>(entities: &mut [PhysicsEntity], clock: &C) {
    for index in 0..entities.len() {
        let dt = entities[index].tick(clock);
        update_entity(entities, index, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::entity::IdAllocator;
    use crate::vector::Vector2f;
    use approx::assert_relative_eq;
    use std::time::Duration;

    #[test]
    fn first_clocked_update_does_not_move() {
        let mut ids = IdAllocator::new();
        let clock = ManualClock::new();
        clock.set(Duration::from_secs(100));
        let mut e = PhysicsEntity::new(&mut ids, Vector2f::ZERO, Vector2f::new(1.0, 1.0), true, true);
        e.update_with_clock(&[], &clock);
        assert_eq!(e.position(), Vector2f::ZERO);
        assert_eq!(e.delta_time(), 0.0);

        clock.advance(Duration::from_millis(500));
        e.update_with_clock(&[], &clock);
        assert_relative_eq!(e.delta_time(), 0.5);
        assert_relative_eq!(e.velocity().y, 4.905, epsilon = 1e-5);
    }

    #[test]
    fn clocked_frames_track_each_entity() {
        let mut ids = IdAllocator::new();
        let clock = ManualClock::new();
        let mut entities = vec![
            PhysicsEntity::new(&mut ids, Vector2f::ZERO, Vector2f::new(1.0, 1.0), true, false),
            PhysicsEntity::new(&mut ids, Vector2f::new(50.0, 0.0), Vector2f::new(1.0, 1.0), true, false),
        ];
        update_all_with_clock(&mut entities, &clock);
        clock.advance(Duration::from_millis(250));
        update_all_with_clock(&mut entities, &clock);
        for e in &entities {
            assert_relative_eq!(e.delta_time(), 0.25);
            assert_relative_eq!(e.velocity().y, 9.81 * 0.25, epsilon = 1e-5);
        }
    }

    #[test]
    fn update_entity_sees_earlier_pushes() {
        let mut ids = IdAllocator::new();
        let size = Vector2f::new(10.0, 10.0);
        // a misses c, then is pushed left out of b and into c; c only collides with a's new spot
        let mut entities = vec![
            PhysicsEntity::new(&mut ids, Vector2f::new(0.0, 0.0), size, true, true),
            PhysicsEntity::new(&mut ids, Vector2f::new(-12.0, 0.0), size, true, true),
            PhysicsEntity::new(&mut ids, Vector2f::new(5.0, 0.0), size, true, true),
        ];
        update_entity(&mut entities, 0, 0.0);
        assert_eq!(entities[0].position(), Vector2f::new(-5.0, 0.0));
        update_entity(&mut entities, 1, 0.0);
        assert_eq!(entities[1].position(), Vector2f::new(-15.0, 0.0));
        assert!(entities[1].contacts().right);
    }

    #[test]
    #[should_panic]
    fn update_entity_out_of_bounds() {
        update_entity(&mut [], 0, 0.0);
    }
}
