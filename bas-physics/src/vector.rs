//! # Vectors
//!
//! A small mutable 2d vector. Positions, velocities, accelerations, and all the scratch math in the collision pass go through it.

use std::fmt;
use std::ops;

use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};

/// A 2d vector of `f32`s that is mutated in place.
///
/// The in-place operations return `&mut Self`, so they chain: `v.add_xy(1.0, 0.0).multiply(2.0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

impl Vector2f {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn add(&mut self, other: &Vector2f) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn add_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x += x;
        self.y += y;
        self
    }

    pub fn subtract(&mut self, other: &Vector2f) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    pub fn subtract_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x -= x;
        self.y -= y;
        self
    }

    pub fn multiply(&mut self, scalar: f32) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Overwrites both components.
    pub fn set(&mut self, other: &Vector2f) {
        *self = *other;
    }

    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Vector2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl ops::AddAssign for Vector2f {
    fn add_assign(&mut self, rhs: Self) {
        Vector2f::add(self, &rhs);
    }
}

impl ops::SubAssign for Vector2f {
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract(&rhs);
    }
}

impl ops::MulAssign<f32> for Vector2f {
    fn mul_assign(&mut self, rhs: f32) {
        self.multiply(rhs);
    }
}

impl ops::Add for Vector2f {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl ops::Sub for Vector2f {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl ops::Mul<f32> for Vector2f {
    type Output = Self;
    fn mul(mut self, rhs: f32) -> Self {
        self *= rhs;
        self
    }
}

// macroquad is what ends up drawing these
impl From<Vector2f> for Vec2 {
    fn from(v: Vector2f) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vector2f {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f32, f32)> for Vector2f {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
