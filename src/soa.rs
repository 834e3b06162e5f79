use crate::{
    random::TransformFields, try_with_capacity, LayoutError, Transform, TransformSystem, Vec2,
};
use alloc::vec::Vec;
use rand::{distributions::Distribution, Rng};

/// A flat [structure of arrays] of transforms with one column per scalar field.
///
/// Updating positions only touches the two position columns, but each axis is walked in
/// its own pass.
///
/// [structure of arrays]: https://en.wikipedia.org/wiki/AoS_and_SoA#Structure_of_arrays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformSoa {
    position_x: Vec<f32>,
    position_y: Vec<f32>,
    scale_x: Vec<f32>,
    scale_y: Vec<f32>,
    angle: Vec<f32>,
}

impl TransformSoa {
    /// Creates `entity_count` transforms with every field set to zero.
    ///
    /// # Errors
    /// Returns [`LayoutError::AllocationFailed`] if the storage cannot be allocated.
    pub fn zeroed(entity_count: usize) -> Result<Self, LayoutError> {
        Self::from_fn(entity_count, |_| Transform::default())
    }

    /// Creates `entity_count` transforms with every field drawn independently and
    /// uniformly from `0.0..=RANDOM_FIELD_MAX`.
    ///
    /// # Errors
    /// Returns [`LayoutError::AllocationFailed`] if the storage cannot be allocated.
    pub fn random<R: Rng + ?Sized>(entity_count: usize, rng: &mut R) -> Result<Self, LayoutError> {
        let fields = TransformFields::default();
        Self::from_fn(entity_count, |_| fields.sample(&mut *rng))
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
        Self::from_fn(transforms.len(), |index| transforms[index])
    }

    fn from_fn(
        entity_count: usize,
        mut f: impl FnMut(usize) -> Transform,
    ) -> Result<Self, LayoutError> {
        let mut soa = Self {
            position_x: try_with_capacity(entity_count, entity_count)?,
            position_y: try_with_capacity(entity_count, entity_count)?,
            scale_x: try_with_capacity(entity_count, entity_count)?,
            scale_y: try_with_capacity(entity_count, entity_count)?,
            angle: try_with_capacity(entity_count, entity_count)?,
        };
        for index in 0..entity_count {
            let transform = f(index);
            soa.position_x.push(transform.position.x);
            soa.position_y.push(transform.position.y);
            soa.scale_x.push(transform.scale.x);
            soa.scale_y.push(transform.scale.y);
            soa.angle.push(transform.angle);
        }
        tracing::debug!(entity_count, "allocated structure of arrays transforms");
        Ok(soa)
    }

    /// Returns the number of entities stored.
    pub fn len(&self) -> usize {
        self.angle.len()
    }

    /// Returns `true` if no entities are stored.
    pub fn is_empty(&self) -> bool {
        self.angle.is_empty()
    }

    /// Returns the horizontal and vertical position columns.
    pub fn positions(&self) -> (&[f32], &[f32]) {
        (&self.position_x, &self.position_y)
    }

    /// Returns the horizontal and vertical scale columns.
    pub fn scales(&self) -> (&[f32], &[f32]) {
        (&self.scale_x, &self.scale_y)
    }

    /// Returns the angle column.
    pub fn angles(&self) -> &[f32] {
        &self.angle
    }

    /// Reads the transform of the entity at `index`, or [`None`] if it is out of bounds.
    ///
    /// [`None`]: Option::None
    pub fn get(&self, index: usize) -> Option<Transform> {
        Some(Transform {
            position: Vec2::new(*self.position_x.get(index)?, self.position_y[index]),
            scale: Vec2::new(self.scale_x[index], self.scale_y[index]),
            angle: self.angle[index],
        })
    }

    /// Returns an iterator over copies of the stored transforms.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Transform> + '_ {
        (0..self.len()).map(move |index| Transform {
            position: Vec2::new(self.position_x[index], self.position_y[index]),
            scale: Vec2::new(self.scale_x[index], self.scale_y[index]),
            angle: self.angle[index],
        })
    }

    /// Adds `delta` to every position.
    pub fn translate(&mut self, delta: Vec2) {
        for x in &mut self.position_x {
            *x += delta.x;
        }
        for y in &mut self.position_y {
            *y += delta.y;
        }
    }

    /// Multiplies every scale by `factor`.
    pub fn scale(&mut self, factor: f32) {
        for x in &mut self.scale_x {
            *x *= factor;
        }
        for y in &mut self.scale_y {
            *y *= factor;
        }
    }

    /// Adds `delta` to every angle.
    pub fn rotate(&mut self, delta: f32) {
        for angle in &mut self.angle {
            *angle += delta;
        }
    }
}

/// A flat [structure of arrays] of transforms that keeps each vector field paired.
///
/// Positions and scales are stored as [`Vec2`] columns, angles as a scalar column.
///
/// [structure of arrays]: https://en.wikipedia.org/wiki/AoS_and_SoA#Structure_of_arrays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformVec2Soa {
    positions: Vec<Vec2>,
    scales: Vec<Vec2>,
    angles: Vec<f32>,
}

impl TransformVec2Soa {
    /// Creates `entity_count` transforms with every field set to zero.
    ///
    /// # Errors
    /// Returns [`LayoutError::AllocationFailed`] if the storage cannot be allocated.
    pub fn zeroed(entity_count: usize) -> Result<Self, LayoutError> {
        Self::from_fn(entity_count, |_| Transform::default())
    }

    /// Creates `entity_count` transforms with every field drawn independently and
    /// uniformly from `0.0..=RANDOM_FIELD_MAX`.
    ///
    /// # Errors
    /// Returns [`LayoutError::AllocationFailed`] if the storage cannot be allocated.
    pub fn random<R: Rng + ?Sized>(entity_count: usize, rng: &mut R) -> Result<Self, LayoutError> {
        let fields = TransformFields::default();
        Self::from_fn(entity_count, |_| fields.sample(&mut *rng))
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
        Self::from_fn(transforms.len(), |index| transforms[index])
    }

    fn from_fn(
        entity_count: usize,
        mut f: impl FnMut(usize) -> Transform,
    ) -> Result<Self, LayoutError> {
        let mut soa = Self {
            positions: try_with_capacity(entity_count, entity_count)?,
            scales: try_with_capacity(entity_count, entity_count)?,
            angles: try_with_capacity(entity_count, entity_count)?,
        };
        for index in 0..entity_count {
            let transform = f(index);
            soa.positions.push(transform.position);
            soa.scales.push(transform.scale);
            soa.angles.push(transform.angle);
        }
        tracing::debug!(entity_count, "allocated paired structure of arrays transforms");
        Ok(soa)
    }

    /// Returns the number of entities stored.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Returns `true` if no entities are stored.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Returns the position column.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Returns the scale column.
    pub fn scales(&self) -> &[Vec2] {
        &self.scales
    }

    /// Returns the angle column.
    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    /// Reads the transform of the entity at `index`, or [`None`] if it is out of bounds.
    ///
    /// [`None`]: Option::None
    pub fn get(&self, index: usize) -> Option<Transform> {
        Some(Transform {
            position: *self.positions.get(index)?,
            scale: self.scales[index],
            angle: self.angles[index],
        })
    }

    /// Returns an iterator over copies of the stored transforms.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Transform> + '_ {
        self.positions
            .iter()
            .zip(self.scales.iter())
            .zip(self.angles.iter())
            .map(|((position, scale), angle)| Transform {
                position: *position,
                scale: *scale,
                angle: *angle,
            })
    }

    /// Adds `delta` to every position.
    pub fn translate(&mut self, delta: Vec2) {
        for position in &mut self.positions {
            *position += delta;
        }
    }

    /// Multiplies every scale by `factor`.
    pub fn scale(&mut self, factor: f32) {
        for scale in &mut self.scales {
            *scale *= factor;
        }
    }

    /// Adds `delta` to every angle.
    pub fn rotate(&mut self, delta: f32) {
        for angle in &mut self.angles {
            *angle += delta;
        }
    }
}

macro_rules! impl_flat_layout {
    ($($layout:ident),*) => {
        $(
            impl TransformSystem for $layout {
                fn len(&self) -> usize {
                    $layout::len(self)
                }

                fn get(&self, index: usize) -> Option<Transform> {
                    $layout::get(self, index)
                }

                fn translate(&mut self, delta: Vec2) {
                    $layout::translate(self, delta)
                }

                fn scale(&mut self, factor: f32) {
                    $layout::scale(self, factor)
                }

                fn rotate(&mut self, delta: f32) {
                    $layout::rotate(self, delta)
                }
            }

            impl TryFrom<&[Transform]> for $layout {
                type Error = LayoutError;
                fn try_from(transforms: &[Transform]) -> Result<Self, LayoutError> {
                    Self::from_transforms(transforms)
                }
            }

            impl TryFrom<Vec<Transform>> for $layout {
                type Error = LayoutError;
                fn try_from(transforms: Vec<Transform>) -> Result<Self, LayoutError> {
                    Self::from_transforms(&transforms)
                }
            }

            impl From<$layout> for Vec<Transform> {
                fn from(layout: $layout) -> Self {
                    layout.iter().collect()
                }
            }
        )*
    };
}

impl_flat_layout!(TransformSoa, TransformVec2Soa);
