use core::ops::{Add, AddAssign, Mul, MulAssign};

/// A two dimensional vector of single-precision floats.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// The horizontal component.
    pub x: f32,
    /// The vertical component.
    pub y: f32,
}

impl Vec2 {
    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

/// The position, scale and rotation of a single entity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// World space position.
    pub position: Vec2,
    /// Per-axis scale.
    pub scale: Vec2,
    /// Rotation angle. Never normalized.
    pub angle: f32,
}

/// The bulk operations shared by every transform layout.
///
/// Implemented by [`TransformAos`], [`TransformSoa`], [`TransformVec2Soa`] and
/// [`TransformTiles`] so benchmark drivers can run the same workload over each layout.
///
/// [`TransformAos`]: crate::TransformAos
/// [`TransformSoa`]: crate::TransformSoa
/// [`TransformVec2Soa`]: crate::TransformVec2Soa
/// [`TransformTiles`]: crate::TransformTiles
pub trait TransformSystem {
    /// Returns the number of entities stored.
    fn len(&self) -> usize;

    /// Returns `true` if no entities are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the transform of the entity at `index`, or [`None`] if it is out of bounds.
    ///
    /// [`None`]: Option::None
    fn get(&self, index: usize) -> Option<Transform>;

    /// Adds `delta` to every position.
    fn translate(&mut self, delta: Vec2);

    /// Multiplies every scale by `factor`.
    fn scale(&mut self, factor: f32);

    /// Adds `delta` to every angle.
    fn rotate(&mut self, delta: f32);
}
