use crate::{
    iter::TilesIter,
    random::TransformFields,
    try_with_capacity, AlignedLanes, Lanes, LayoutError, TileWidth, Transform, TransformSystem,
    Vec2, VectorOps,
};
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use rand::{distributions::Distribution, Rng};

/// The positions of `N` consecutive entities.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct PositionTile<const N: usize>
where
    Lanes<N>: TileWidth,
{
    /// Horizontal positions.
    pub x: AlignedLanes<N>,
    /// Vertical positions.
    pub y: AlignedLanes<N>,
}

impl<const N: usize> PositionTile<N>
where
    Lanes<N>: TileWidth,
{
    /// Adds `delta` to every position in the tile, lane by lane.
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        for j in 0..N {
            self.x[j] += delta.x;
            self.y[j] += delta.y;
        }
    }

    /// Adds `delta` to every position in the tile, one vector operation per axis.
    #[inline]
    pub fn translate_vectorized(&mut self, delta: Vec2)
    where
        AlignedLanes<N>: VectorOps,
    {
        self.x.add_splat(delta.x);
        self.y.add_splat(delta.y);
    }
}

/// The scales of `N` consecutive entities.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct ScaleTile<const N: usize>
where
    Lanes<N>: TileWidth,
{
    /// Horizontal scales.
    pub x: AlignedLanes<N>,
    /// Vertical scales.
    pub y: AlignedLanes<N>,
}

impl<const N: usize> ScaleTile<N>
where
    Lanes<N>: TileWidth,
{
    /// Multiplies every scale in the tile by `factor`, lane by lane.
    #[inline]
    pub fn scale(&mut self, factor: f32) {
        for j in 0..N {
            self.x[j] *= factor;
            self.y[j] *= factor;
        }
    }

    /// Multiplies every scale in the tile by `factor`, one vector operation per axis.
    #[inline]
    pub fn scale_vectorized(&mut self, factor: f32)
    where
        AlignedLanes<N>: VectorOps,
    {
        self.x.mul_splat(factor);
        self.y.mul_splat(factor);
    }
}

/// The rotation angles of `N` consecutive entities.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct AngleTile<const N: usize>
where
    Lanes<N>: TileWidth,
{
    /// Rotation angles.
    pub angle: AlignedLanes<N>,
}

impl<const N: usize> AngleTile<N>
where
    Lanes<N>: TileWidth,
{
    /// Adds `delta` to every angle in the tile, lane by lane.
    #[inline]
    pub fn rotate(&mut self, delta: f32) {
        for j in 0..N {
            self.angle[j] += delta;
        }
    }

    /// Adds `delta` to every angle in the tile in one vector operation.
    #[inline]
    pub fn rotate_vectorized(&mut self, delta: f32)
    where
        AlignedLanes<N>: VectorOps,
    {
        self.angle.add_splat(delta);
    }
}

/// A fixed-size collection of transforms stored in an [array of structures of arrays]
/// layout.
///
/// Entities are grouped into tiles of `N`. Each tile kind keeps one field group for its
/// `N` entities in aligned lanes, and the three tile kinds live in separate sequences, so
/// entity `i` is lane `i % N` of tile `i / N` in each of them. The entity count is fixed
/// at construction and always a multiple of `N`.
///
/// Updates have a scalar path available for every width and, for widths backed by
/// [`VectorOps`], a vectorized path with bit-identical results. NaN results may differ in
/// sign and payload between the two paths.
///
/// [array of structures of arrays]: https://en.wikipedia.org/wiki/AoS_and_SoA#Array_of_Structures_of_Arrays
#[derive(Clone, PartialEq)]
pub struct TransformTiles<const N: usize>
where
    Lanes<N>: TileWidth,
{
    positions: Vec<PositionTile<N>>,
    scales: Vec<ScaleTile<N>>,
    angles: Vec<AngleTile<N>>,
}

impl<const N: usize> TransformTiles<N>
where
    Lanes<N>: TileWidth,
{
    /// The number of entities per tile.
    pub const TILE_WIDTH: usize = N;

    /// Creates a store of `entity_count` transforms with every field set to zero.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidEntityCount`] if `entity_count` is not a multiple of
    /// `N`, or [`LayoutError::AllocationFailed`] if the tiles cannot be allocated.
    pub fn zeroed(entity_count: usize) -> Result<Self, LayoutError> {
        Self::from_fn(entity_count, |_| Transform::default())
    }

    /// Creates a store of `entity_count` transforms with every field drawn independently
    /// and uniformly from `0.0..=RANDOM_FIELD_MAX`.
    ///
    /// Fields are drawn entity by entity in the same order as the flat layouts, so the
    /// same seed produces the same logical contents in every layout.
    ///
    /// # Errors
    /// See [`zeroed`].
    ///
    /// [`zeroed`]: Self::zeroed
    pub fn random<R: Rng + ?Sized>(entity_count: usize, rng: &mut R) -> Result<Self, LayoutError> {
        let fields = TransformFields::default();
        Self::from_fn(entity_count, |_| fields.sample(&mut *rng))
    }

    /// Creates a store of `entity_count` randomly initialized transforms using the thread
    /// local random number generator.
    ///
    /// # Errors
    /// See [`zeroed`].
    ///
    /// [`zeroed`]: Self::zeroed
    #[cfg(feature = "std")]
    pub fn new_random(entity_count: usize) -> Result<Self, LayoutError> {
        Self::random(entity_count, &mut rand::thread_rng())
    }

    /// Creates a store holding a copy of `transforms`, in order.
    ///
    /// # Errors
    /// See [`zeroed`].
    ///
    /// [`zeroed`]: Self::zeroed
    pub fn from_transforms(transforms: &[Transform]) -> Result<Self, LayoutError> {
        Self::from_fn(transforms.len(), |index| transforms[index])
    }

    fn from_fn(
        entity_count: usize,
        mut f: impl FnMut(usize) -> Transform,
    ) -> Result<Self, LayoutError> {
        if entity_count % N != 0 {
            tracing::warn!(
                entity_count,
                tile_width = N,
                "entity count does not fill a whole number of tiles"
            );
            return Err(LayoutError::InvalidEntityCount {
                entity_count,
                tile_width: N,
            });
        }

        let tile_count = entity_count / N;
        let mut positions = try_with_capacity(tile_count, entity_count)?;
        let mut scales = try_with_capacity(tile_count, entity_count)?;
        let mut angles = try_with_capacity(tile_count, entity_count)?;

        for tile in 0..tile_count {
            let mut position = PositionTile::<N>::default();
            let mut scale = ScaleTile::<N>::default();
            let mut angle = AngleTile::<N>::default();
            for j in 0..N {
                let transform = f(tile * N + j);
                position.x[j] = transform.position.x;
                position.y[j] = transform.position.y;
                scale.x[j] = transform.scale.x;
                scale.y[j] = transform.scale.y;
                angle.angle[j] = transform.angle;
            }
            positions.push(position);
            scales.push(scale);
            angles.push(angle);
        }

        tracing::debug!(entity_count, tile_width = N, tile_count, "allocated transform tiles");
        Ok(Self {
            positions,
            scales,
            angles,
        })
    }

    /// Returns the number of entities stored.
    pub fn len(&self) -> usize {
        self.positions.len() * N
    }

    /// Returns `true` if the store holds no entities.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the number of tiles of each kind.
    pub fn tile_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the position tiles.
    pub fn positions(&self) -> &[PositionTile<N>] {
        &self.positions
    }

    /// Returns the scale tiles.
    pub fn scales(&self) -> &[ScaleTile<N>] {
        &self.scales
    }

    /// Returns the angle tiles.
    pub fn angles(&self) -> &[AngleTile<N>] {
        &self.angles
    }

    /// Returns `true` if every lane buffer of every tile satisfies the
    /// `N * size_of::<f32>()` byte alignment the vectorized path relies on.
    pub fn is_aligned(&self) -> bool {
        self.positions
            .iter()
            .all(|tile| tile.x.is_aligned() && tile.y.is_aligned())
            && self
                .scales
                .iter()
                .all(|tile| tile.x.is_aligned() && tile.y.is_aligned())
            && self.angles.iter().all(|tile| tile.angle.is_aligned())
    }

    /// Reads the transform of the entity at `index`, or [`None`] if it is out of bounds.
    ///
    /// [`None`]: Option::None
    pub fn get(&self, index: usize) -> Option<Transform> {
        let (tile, j) = (index / N, index % N);
        let position = self.positions.get(tile)?;
        let scale = &self.scales[tile];
        Some(Transform {
            position: Vec2::new(position.x[j], position.y[j]),
            scale: Vec2::new(scale.x[j], scale.y[j]),
            angle: self.angles[tile].angle[j],
        })
    }

    /// Returns an iterator over copies of the stored transforms in entity order.
    pub fn iter(&self) -> TilesIter<'_, N> {
        TilesIter::new(self)
    }

    /// Copies the stored transforms into a `Vec`, in entity order.
    pub fn to_transforms(&self) -> Vec<Transform> {
        self.iter().collect()
    }

    /// Adds `delta` to every position, lane by lane.
    pub fn translate(&mut self, delta: Vec2) {
        for tile in &mut self.positions {
            tile.translate(delta);
        }
    }

    /// Multiplies every scale by `factor`, lane by lane.
    pub fn scale(&mut self, factor: f32) {
        for tile in &mut self.scales {
            tile.scale(factor);
        }
    }

    /// Adds `delta` to every angle, lane by lane.
    pub fn rotate(&mut self, delta: f32) {
        for tile in &mut self.angles {
            tile.rotate(delta);
        }
    }
}

impl<const N: usize> TransformTiles<N>
where
    Lanes<N>: TileWidth,
    AlignedLanes<N>: VectorOps,
{
    /// Adds `delta` to every position, one tile per vector operation.
    ///
    /// Produces the same bits as [`translate`] for every non-NaN result.
    ///
    /// [`translate`]: Self::translate
    pub fn translate_vectorized(&mut self, delta: Vec2) {
        for tile in &mut self.positions {
            tile.translate_vectorized(delta);
        }
    }

    /// Multiplies every scale by `factor`, one tile per vector operation.
    ///
    /// Produces the same bits as [`scale`] for every non-NaN result.
    ///
    /// [`scale`]: Self::scale
    pub fn scale_vectorized(&mut self, factor: f32) {
        for tile in &mut self.scales {
            tile.scale_vectorized(factor);
        }
    }

    /// Adds `delta` to every angle, one tile per vector operation.
    ///
    /// Produces the same bits as [`rotate`] for every non-NaN result.
    ///
    /// [`rotate`]: Self::rotate
    pub fn rotate_vectorized(&mut self, delta: f32) {
        for tile in &mut self.angles {
            tile.rotate_vectorized(delta);
        }
    }
}

impl<const N: usize> Debug for TransformTiles<N>
where
    Lanes<N>: TileWidth,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransformTiles")
            .field("tile_width", &N)
            .field("len", &self.len())
            .finish()
    }
}

impl<const N: usize> TransformSystem for TransformTiles<N>
where
    Lanes<N>: TileWidth,
{
    fn len(&self) -> usize {
        TransformTiles::len(self)
    }

    fn get(&self, index: usize) -> Option<Transform> {
        TransformTiles::get(self, index)
    }

    fn translate(&mut self, delta: Vec2) {
        TransformTiles::translate(self, delta)
    }

    fn scale(&mut self, factor: f32) {
        TransformTiles::scale(self, factor)
    }

    fn rotate(&mut self, delta: f32) {
        TransformTiles::rotate(self, delta)
    }
}

impl<const N: usize> TryFrom<Vec<Transform>> for TransformTiles<N>
where
    Lanes<N>: TileWidth,
{
    type Error = LayoutError;
    fn try_from(transforms: Vec<Transform>) -> Result<Self, LayoutError> {
        Self::from_transforms(&transforms)
    }
}

impl<'a, const N: usize> IntoIterator for &'a TransformTiles<N>
where
    Lanes<N>: TileWidth,
{
    type Item = Transform;
    type IntoIter = TilesIter<'a, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
