#![deny(missing_docs)]
#![no_std]

//! Storage layouts for large batches of 2D transforms, built to measure how memory
//! layout and vector width affect bulk update throughput.
//!
//! The centrepiece is [`TransformTiles`], an [array of structures of arrays] layout:
//! entities are grouped into fixed-width tiles, and every tile keeps each field in its
//! own aligned run of `N` lanes. Updates come in two flavours:
//!
//! * a portable scalar path ([`TransformTiles::translate`], [`TransformTiles::scale`],
//!   [`TransformTiles::rotate`]), available for every supported tile width.
//! * a vectorized path ([`TransformTiles::translate_vectorized`] and friends) that
//!   processes one tile per instruction. It only exists for tile widths that map onto a
//!   vector register enabled for the build target, see [`VectorOps`].
//!
//! Both paths produce bit-identical results for every non-NaN value. When a result is
//! NaN, its sign and payload may differ between the paths.
//!
//! [`TransformAos`], [`TransformSoa`] and [`TransformVec2Soa`] provide flat reference
//! layouts with the same operations through the [`TransformSystem`] trait, so they can
//! be benchmarked side by side.
//!
//! ## Example
//! ```rust
//! use tiled_transforms::{Transform, TransformTiles, Vec2};
//!
//! let mut tiles = TransformTiles::<4>::zeroed(8).unwrap();
//! tiles.translate(Vec2::new(1.0, 1.0));
//! tiles.scale(2.0);
//! tiles.rotate(90.0);
//!
//! assert_eq!(
//!     tiles.get(5),
//!     Some(Transform {
//!         position: Vec2::new(1.0, 1.0),
//!         scale: Vec2::new(0.0, 0.0),
//!         angle: 90.0,
//!     })
//! );
//!
//! // Entity counts must fill every tile.
//! assert!(TransformTiles::<4>::zeroed(10).is_err());
//! ```
//!
//! ## Vector widths
//! Vectorized entry points are chosen at build time from the enabled target features:
//! 4 lanes with `sse` on x86 or `neon` on aarch64, 8 lanes with `avx` on x86. There is
//! no runtime detection and no silent scalar fallback; build with
//! `RUSTFLAGS="-C target-cpu=native"` to enable the wider paths on capable hosts.
//!
//! ## `no_std` Support
//! By default, this crate requires the standard library. Disabling the default features
//! enables this crate to compile in `#![no_std]` environments. There must be a set global
//! allocator and heap support for this crate to work.
//!
//! [array of structures of arrays]: https://en.wikipedia.org/wiki/AoS_and_SoA#Array_of_Structures_of_Arrays

extern crate alloc;

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

mod aos;
/// Iterator types for the transform layouts.
pub mod iter;
/// Fixed-width aligned lane buffers and tile width markers.
pub mod lanes;
/// Uniform random data generation.
pub mod random;
#[cfg(feature = "serde")]
mod serde;
/// Shape types used to compare dynamic and static dispatch.
pub mod shape;
mod simd;
mod soa;
mod tiles;
mod transform;

pub use aos::TransformAos;
pub use lanes::{AlignedLanes, Lanes, TileWidth, VectorOps};
pub use simd::is_vectorized;
pub use soa::{TransformSoa, TransformVec2Soa};
pub use tiles::{AngleTile, PositionTile, ScaleTile, TransformTiles};
pub use transform::{Transform, TransformSystem, Vec2};

use alloc::vec::Vec;

/// Error when constructing one of the transform layouts.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The entity count does not fill a whole number of tiles.
    #[error("entity count {entity_count} is not a multiple of the tile width {tile_width}")]
    InvalidEntityCount {
        /// The requested number of entities.
        entity_count: usize,
        /// The width of one tile.
        tile_width: usize,
    },
    /// The storage for the requested entities could not be allocated.
    #[error("failed to allocate storage for {entity_count} entities")]
    AllocationFailed {
        /// The requested number of entities.
        entity_count: usize,
    },
}

/// Creates an empty `Vec` able to hold `capacity` elements without reallocating,
/// reporting allocation failure instead of aborting.
pub(crate) fn try_with_capacity<T>(
    capacity: usize,
    entity_count: usize,
) -> Result<Vec<T>, LayoutError> {
    let mut vec = Vec::new();
    if vec.try_reserve_exact(capacity).is_err() {
        tracing::warn!(entity_count, capacity, "transform storage allocation failed");
        return Err(LayoutError::AllocationFailed { entity_count });
    }
    Ok(vec)
}
