use crate::{
    random::TransformFields, try_with_capacity, LayoutError, Transform, TransformSystem, Vec2,
};
use alloc::vec::Vec;
use core::slice;
use rand::{distributions::Distribution, Rng};

/// A flat [array of structures] of transforms.
///
/// Each entity's position, scale and angle sit next to each other in memory. A reference
/// point for [`TransformTiles`]; updating one field still streams every other field
/// through the cache.
///
/// [array of structures]: https://en.wikipedia.org/wiki/AoS_and_SoA#Array_of_structures
/// [`TransformTiles`]: crate::TransformTiles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformAos {
    transforms: Vec<Transform>,
}

impl TransformAos {
    /// Creates `entity_count` transforms with every field set to zero.
    ///
    /// # Errors
    /// Returns [`LayoutError::AllocationFailed`] if the storage cannot be allocated.
    pub fn zeroed(entity_count: usize) -> Result<Self, LayoutError> {
        let mut transforms = try_with_capacity(entity_count, entity_count)?;
        transforms.resize(entity_count, Transform::default());
        tracing::debug!(entity_count, "allocated array of structures transforms");
        Ok(Self { transforms })
    }

    /// Creates `entity_count` transforms with every field drawn independently and
    /// uniformly from `0.0..=RANDOM_FIELD_MAX`.
    ///
    /// # Errors
    /// Returns [`LayoutError::AllocationFailed`] if the storage cannot be allocated.
    pub fn random<R: Rng + ?Sized>(entity_count: usize, rng: &mut R) -> Result<Self, LayoutError> {
        let fields = TransformFields::default();
        let mut transforms = try_with_capacity(entity_count, entity_count)?;
        transforms.extend((0..entity_count).map(|_| fields.sample(&mut *rng)));
        tracing::debug!(entity_count, "allocated array of structures transforms");
        Ok(Self { transforms })
    }

    /// Creates `entity_count` randomly initialized transforms using the thread local
    /// random number generator.
    ///
    /// # Errors
    /// Returns [`LayoutError::AllocationFailed`] if the storage cannot be allocated.
    #[cfg(feature = "std")]
    pub fn new_random(entity_count: usize) -> Result<Self, LayoutError> {
        Self::random(entity_count, &mut rand::thread_rng())
    }

    /// Creates a layout holding a copy of `transforms`, in order.
    ///
    /// # Errors
    /// Returns [`LayoutError::AllocationFailed`] if the storage cannot be allocated.
    pub fn from_transforms(transforms: &[Transform]) -> Result<Self, LayoutError> {
        let mut copy = try_with_capacity(transforms.len(), transforms.len())?;
        copy.extend_from_slice(transforms);
        Ok(Self { transforms: copy })
    }

    /// Returns the number of entities stored.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns `true` if no entities are stored.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Reads the transform of the entity at `index`, or [`None`] if it is out of bounds.
    ///
    /// [`None`]: Option::None
    pub fn get(&self, index: usize) -> Option<Transform> {
        self.transforms.get(index).copied()
    }

    /// Returns the transforms as a slice.
    pub fn as_slice(&self) -> &[Transform] {
        &self.transforms
    }

    /// Returns an iterator over the transforms.
    pub fn iter(&self) -> slice::Iter<'_, Transform> {
        self.transforms.iter()
    }

    /// Adds `delta` to every position.
    pub fn translate(&mut self, delta: Vec2) {
        for transform in &mut self.transforms {
            transform.position += delta;
        }
    }

    /// Multiplies every scale by `factor`.
    pub fn scale(&mut self, factor: f32) {
        for transform in &mut self.transforms {
            transform.scale *= factor;
        }
    }

    /// Adds `delta` to every angle.
    pub fn rotate(&mut self, delta: f32) {
        for transform in &mut self.transforms {
            transform.angle += delta;
        }
    }
}

impl TransformSystem for TransformAos {
    fn len(&self) -> usize {
        self.transforms.len()
    }

    fn get(&self, index: usize) -> Option<Transform> {
        TransformAos::get(self, index)
    }

    fn translate(&mut self, delta: Vec2) {
        TransformAos::translate(self, delta)
    }

    fn scale(&mut self, factor: f32) {
        TransformAos::scale(self, factor)
    }

    fn rotate(&mut self, delta: f32) {
        TransformAos::rotate(self, delta)
    }
}

impl From<Vec<Transform>> for TransformAos {
    fn from(transforms: Vec<Transform>) -> Self {
        Self { transforms }
    }
}

impl From<TransformAos> for Vec<Transform> {
    fn from(aos: TransformAos) -> Self {
        aos.transforms
    }
}

impl<'a> IntoIterator for &'a TransformAos {
    type Item = &'a Transform;
    type IntoIter = slice::Iter<'a, Transform>;
    fn into_iter(self) -> Self::IntoIter {
        self.transforms.iter()
    }
}
