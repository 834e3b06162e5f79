use crate::{Transform, Vec2};
use rand::{
    distributions::{uniform::SampleUniform, Distribution, Uniform},
    Rng,
};

/// Upper bound of the randomly initialized transform fields, matching the smallest
/// range C's `rand()` guarantees.
pub const RANDOM_FIELD_MAX: f32 = 32767.0;

/// Draws one value uniformly from `low..=high`.
///
/// # Panics
/// Panics if `low > high`.
pub fn random_range<T, R>(rng: &mut R, low: T, high: T) -> T
where
    T: SampleUniform,
    R: Rng + ?Sized,
{
    Uniform::new_inclusive(low, high).sample(rng)
}

/// Overwrites every element of `values` with a value drawn uniformly from `low..=high`.
///
/// # Panics
/// Panics if `low > high`.
pub fn random_fill<T, R>(rng: &mut R, values: &mut [T], low: T, high: T)
where
    T: SampleUniform,
    R: Rng + ?Sized,
{
    let distribution = Uniform::new_inclusive(low, high);
    for value in values {
        *value = distribution.sample(rng);
    }
}

/// Samples [`Transform`]s whose five fields are each drawn independently from the same
/// uniform range.
///
/// Fields are drawn in the order position x, position y, scale x, scale y, angle.
#[derive(Clone, Debug)]
pub struct TransformFields {
    field: Uniform<f32>,
}

impl TransformFields {
    /// Creates a sampler drawing every field from `low..=high`.
    ///
    /// # Panics
    /// Panics if `low > high` or either bound is not finite.
    pub fn new(low: f32, high: f32) -> Self {
        Self {
            field: Uniform::new_inclusive(low, high),
        }
    }
}

impl Default for TransformFields {
    fn default() -> Self {
        Self::new(0.0, RANDOM_FIELD_MAX)
    }
}

impl Distribution<Transform> for TransformFields {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Transform {
        let position = Vec2::new(self.field.sample(rng), self.field.sample(rng));
        let scale = Vec2::new(self.field.sample(rng), self.field.sample(rng));
        Transform {
            position,
            scale,
            angle: self.field.sample(rng),
        }
    }
}
