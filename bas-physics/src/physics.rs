//! # Physics
//!
//! Kinematic integration: acceleration changes velocity, velocity changes position, both scaled by the elapsed time. Explicit Euler, no mass, no forces.

use crate::entity::PhysicsEntity;

impl PhysicsEntity {
    /// Advances this entity by `dt` seconds. Does nothing unless the entity does kinematics.
    ///
    /// Velocity is clamped against the contact flags from the *previous* resolution pass, before the next pass clears them, so contact takes a frame to stop motion.
    pub fn integrate(&mut self, dt: f32) {
        if !self.do_kinematics {
            return;
        }
        self.delta_time = dt;

        let acceleration = self.acceleration;
        self.velocity.add_xy(acceleration.x * dt, acceleration.y * dt);

        if self.contacts.top && self.velocity.y < 0.0 {
            self.velocity.set_y(0.0);
        }
        if self.contacts.right && self.velocity.x > 0.0 {
            self.velocity.set_x(0.0);
        }
        if self.contacts.bottom && self.velocity.y > 0.0 {
            self.velocity.set_y(0.0);
        }
        if self.contacts.left && self.velocity.x < 0.0 {
            self.velocity.set_x(0.0);
        }

        let scale = dt * self.pixels_per_meter;
        let velocity = self.velocity;
        self.position.add_xy(velocity.x * scale, velocity.y * scale);
    }
}

#[cfg(test)]
mod tests {
    use crate::collision::Sides;
    use crate::entity::{IdAllocator, PhysicsEntity};
    use crate::vector::Vector2f;
    use approx::assert_relative_eq;

    fn falling(ids: &mut IdAllocator) -> PhysicsEntity {
        PhysicsEntity::new(ids, Vector2f::ZERO, Vector2f::new(1.0, 1.0), true, true)
    }

    #[test]
    fn half_second_of_gravity() {
        let mut ids = IdAllocator::new();
        let mut e = falling(&mut ids);
        e.integrate(0.5);
        assert_relative_eq!(e.velocity().y, 4.905, epsilon = 1e-5);
        assert_relative_eq!(e.position().y, 4.905 * 0.5 * 64.0, epsilon = 1e-3);
        assert_eq!(e.position().x, 0.0);
        assert_eq!(e.delta_time(), 0.5);
    }

    #[test]
    fn static_entities_stay_put() {
        let mut ids = IdAllocator::new();
        let mut e = PhysicsEntity::new(&mut ids, Vector2f::new(3.0, 3.0), Vector2f::new(1.0, 1.0), false, true);
        e.set_velocity(Vector2f::new(1.0, 1.0));
        e.integrate(10.0);
        assert_eq!(e.position(), Vector2f::new(3.0, 3.0));
        assert_eq!(e.velocity(), Vector2f::new(1.0, 1.0));
        assert_eq!(e.delta_time(), 0.0);
    }

    #[test]
    fn grounded_entity_stops_falling() {
        let mut ids = IdAllocator::new();
        let mut e = falling(&mut ids);
        e.contacts = Sides {
            bottom: true,
            ..Sides::new()
        };
        e.integrate(0.1);
        assert_eq!(e.velocity().y, 0.0);
        assert_eq!(e.position(), Vector2f::ZERO);
    }

    #[test]
    fn grounded_entity_can_still_jump() {
        let mut ids = IdAllocator::new();
        let mut e = falling(&mut ids);
        e.contacts.bottom = true;
        e.set_velocity(Vector2f::new(0.0, -5.0));
        e.integrate(0.1);
        assert!(e.velocity().y < 0.0);
        assert!(e.position().y < 0.0);
    }

    #[test]
    fn clamps_each_side_only_toward_the_contact() {
        let mut ids = IdAllocator::new();
        let mut e = falling(&mut ids);
        e.set_acceleration(Vector2f::ZERO);

        e.contacts = Sides { top: true, ..Sides::new() };
        e.set_velocity(Vector2f::new(0.0, -1.0));
        e.integrate(1.0);
        assert_eq!(e.velocity(), Vector2f::ZERO);

        e.contacts = Sides { right: true, ..Sides::new() };
        e.set_velocity(Vector2f::new(1.0, 0.0));
        e.integrate(1.0);
        assert_eq!(e.velocity(), Vector2f::ZERO);

        e.contacts = Sides { left: true, ..Sides::new() };
        e.set_velocity(Vector2f::new(-1.0, 0.0));
        e.integrate(1.0);
        assert_eq!(e.velocity(), Vector2f::ZERO);

        // moving away from a contact is fine
        e.contacts = Sides { left: true, ..Sides::new() };
        e.set_velocity(Vector2f::new(1.0, 0.0));
        e.integrate(1.0);
        assert_eq!(e.velocity(), Vector2f::new(1.0, 0.0));
    }

    #[test]
    fn uses_configured_scale() {
        let mut ids = IdAllocator::new();
        let config = crate::PhysicsConfig {
            pixels_per_meter: 10.0,
            gravity: Vector2f::new(2.0, 0.0),
        };
        let mut e = PhysicsEntity::with_config(&mut ids, &config, Vector2f::ZERO, Vector2f::ZERO, true, false);
        e.integrate(1.0);
        assert_eq!(e.velocity(), Vector2f::new(2.0, 0.0));
        assert_eq!(e.position(), Vector2f::new(20.0, 0.0));
    }
}
