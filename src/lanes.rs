use core::{
    fmt::{Debug, Formatter},
    mem::size_of,
    ops::{Index, IndexMut},
    slice,
};

/// Type level marker for a tile width of `N` lanes.
///
/// Only widths implementing [`TileWidth`] can be used to build tiles.
#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq)]
pub struct Lanes<const N: usize>;

/// A supported tile width.
///
/// This trait is sealed and cannot be implemented outside of
/// `tiled_transforms`. It is implemented for [`Lanes`] of 1, 2, 4, 8 and 16.
pub trait TileWidth: private::Sealed {
    /// A zero sized type whose alignment is `N * size_of::<f32>()` bytes.
    type Align: Copy + Default + Debug + PartialEq + 'static;
}

mod private {
    pub trait Sealed {}
}

macro_rules! impl_tile_width {
    ($($lanes:literal => $align:ident, $bytes:literal);* $(;)?) => {
        $(
            #[doc = concat!("Zero sized marker aligned to ", stringify!($bytes), " bytes.")]
            #[derive(Debug, Clone, Copy, Default, PartialEq)]
            #[repr(align($bytes))]
            pub struct $align;

            impl private::Sealed for Lanes<$lanes> {}

            impl TileWidth for Lanes<$lanes> {
                type Align = $align;
            }
        )*
    };
}

impl_tile_width! {
    1 => Align4, 4;
    2 => Align8, 8;
    4 => Align16, 16;
    8 => Align32, 32;
    16 => Align64, 64;
}

/// Vectorized splat arithmetic over one [`AlignedLanes`] buffer.
///
/// Implemented only for the lane counts that map onto a vector register enabled for the
/// build target. Widths without an implementation do not get vectorized entry points.
///
/// Every implementation must produce results bit-identical to the lane-by-lane
/// [`AlignedLanes::add_scalar`] and [`AlignedLanes::mul_scalar`] for every non-NaN result.
/// A NaN result is still NaN, but its sign and payload are unspecified.
pub trait VectorOps {
    /// Adds `value` to every lane.
    fn add_splat(&mut self, value: f32);

    /// Multiplies every lane by `value`.
    fn mul_splat(&mut self, value: f32);
}

/// A fixed-size run of `N` single-precision lanes aligned to `N * size_of::<f32>()`
/// bytes, so the whole buffer can be moved through one aligned vector load and store.
///
/// Access goes through bounds-checked indexing and slices; the backing address is never
/// exposed.
#[repr(C)]
pub struct AlignedLanes<const N: usize>
where
    Lanes<N>: TileWidth,
{
    _align: [<Lanes<N> as TileWidth>::Align; 0],
    lanes: [f32; N],
}

impl<const N: usize> AlignedLanes<N>
where
    Lanes<N>: TileWidth,
{
    /// The alignment, in bytes, of every buffer of this width.
    pub const ALIGNMENT: usize = N * size_of::<f32>();

    /// Creates a buffer from an array of lanes.
    pub fn new(lanes: [f32; N]) -> Self {
        Self { _align: [], lanes }
    }

    /// Creates a buffer with `value` in every lane.
    pub fn splat(value: f32) -> Self {
        Self::new([value; N])
    }

    /// Returns the number of lanes.
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`; widths are never zero.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the lanes as an array.
    pub fn as_array(&self) -> &[f32; N] {
        &self.lanes
    }

    /// Returns the lanes as a slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.lanes
    }

    /// Returns an iterator over the lanes.
    pub fn iter(&self) -> slice::Iter<'_, f32> {
        self.lanes.iter()
    }

    /// Returns `true` if the buffer starts on an [`ALIGNMENT`] byte boundary.
    ///
    /// [`ALIGNMENT`]: Self::ALIGNMENT
    pub fn is_aligned(&self) -> bool {
        self.lanes.as_ptr() as usize % Self::ALIGNMENT == 0
    }

    /// Adds `value` to every lane, one lane at a time.
    #[inline]
    pub fn add_scalar(&mut self, value: f32) {
        for lane in &mut self.lanes {
            *lane += value;
        }
    }

    /// Multiplies every lane by `value`, one lane at a time.
    #[inline]
    pub fn mul_scalar(&mut self, value: f32) {
        for lane in &mut self.lanes {
            *lane *= value;
        }
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut f32 {
        self.lanes.as_mut_ptr()
    }
}

impl<const N: usize> Clone for AlignedLanes<N>
where
    Lanes<N>: TileWidth,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<const N: usize> Copy for AlignedLanes<N> where Lanes<N>: TileWidth {}

impl<const N: usize> Default for AlignedLanes<N>
where
    Lanes<N>: TileWidth,
{
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl<const N: usize> Debug for AlignedLanes<N>
where
    Lanes<N>: TileWidth,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.lanes.iter()).finish()
    }
}

impl<const N: usize> PartialEq for AlignedLanes<N>
where
    Lanes<N>: TileWidth,
{
    fn eq(&self, other: &Self) -> bool {
        self.lanes == other.lanes
    }
}

impl<const N: usize> From<[f32; N]> for AlignedLanes<N>
where
    Lanes<N>: TileWidth,
{
    fn from(lanes: [f32; N]) -> Self {
        Self::new(lanes)
    }
}

impl<const N: usize> Index<usize> for AlignedLanes<N>
where
    Lanes<N>: TileWidth,
{
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.lanes[index]
    }
}

impl<const N: usize> IndexMut<usize> for AlignedLanes<N>
where
    Lanes<N>: TileWidth,
{
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.lanes[index]
    }
}

impl<'a, const N: usize> IntoIterator for &'a AlignedLanes<N>
where
    Lanes<N>: TileWidth,
{
    type Item = &'a f32;
    type IntoIter = slice::Iter<'a, f32>;
    fn into_iter(self) -> Self::IntoIter {
        self.lanes.iter()
    }
}
