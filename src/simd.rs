//! [`VectorOps`] implementations, one per lane count and instruction set.
//!
//! Selection happens at build time through `target_feature`, so a width is either
//! backed by real vector instructions or has no vectorized entry point at all.

#[allow(unused_imports)]
use crate::{AlignedLanes, VectorOps};

/// Returns `true` if tiles of `width` lanes have vectorized operations in this build.
pub const fn is_vectorized(width: usize) -> bool {
    match width {
        4 => cfg!(any(
            all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse"),
            all(target_arch = "aarch64", target_feature = "neon"),
        )),
        8 => cfg!(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "avx"
        )),
        _ => false,
    }
}

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse"))]
mod sse {
    use super::*;
    #[cfg(target_arch = "x86")]
    use core::arch::x86::{_mm_add_ps, _mm_load_ps, _mm_mul_ps, _mm_set1_ps, _mm_store_ps};
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::{_mm_add_ps, _mm_load_ps, _mm_mul_ps, _mm_set1_ps, _mm_store_ps};

    impl VectorOps for AlignedLanes<4> {
        #[inline]
        fn add_splat(&mut self, value: f32) {
            let ptr = self.as_mut_ptr();
            // SAFETY: `sse` is enabled for this build and `AlignedLanes<4>` is 16 byte
            // aligned, as `_mm_load_ps` and `_mm_store_ps` require.
            unsafe {
                let lanes = _mm_add_ps(_mm_load_ps(ptr), _mm_set1_ps(value));
                _mm_store_ps(ptr, lanes);
            }
        }

        #[inline]
        fn mul_splat(&mut self, value: f32) {
            let ptr = self.as_mut_ptr();
            // SAFETY: See `add_splat`.
            unsafe {
                let lanes = _mm_mul_ps(_mm_load_ps(ptr), _mm_set1_ps(value));
                _mm_store_ps(ptr, lanes);
            }
        }
    }
}

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "avx"))]
mod avx {
    use super::*;
    #[cfg(target_arch = "x86")]
    use core::arch::x86::{
        _mm256_add_ps, _mm256_load_ps, _mm256_mul_ps, _mm256_set1_ps, _mm256_store_ps,
    };
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::{
        _mm256_add_ps, _mm256_load_ps, _mm256_mul_ps, _mm256_set1_ps, _mm256_store_ps,
    };

    impl VectorOps for AlignedLanes<8> {
        #[inline]
        fn add_splat(&mut self, value: f32) {
            let ptr = self.as_mut_ptr();
            // SAFETY: `avx` is enabled for this build and `AlignedLanes<8>` is 32 byte
            // aligned, as `_mm256_load_ps` and `_mm256_store_ps` require.
            unsafe {
                let lanes = _mm256_add_ps(_mm256_load_ps(ptr), _mm256_set1_ps(value));
                _mm256_store_ps(ptr, lanes);
            }
        }

        #[inline]
        fn mul_splat(&mut self, value: f32) {
            let ptr = self.as_mut_ptr();
            // SAFETY: See `add_splat`.
            unsafe {
                let lanes = _mm256_mul_ps(_mm256_load_ps(ptr), _mm256_set1_ps(value));
                _mm256_store_ps(ptr, lanes);
            }
        }
    }
}

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod neon {
    use super::*;
    use core::arch::aarch64::{vaddq_f32, vdupq_n_f32, vld1q_f32, vmulq_f32, vst1q_f32};

    impl VectorOps for AlignedLanes<4> {
        #[inline]
        fn add_splat(&mut self, value: f32) {
            let ptr = self.as_mut_ptr();
            // SAFETY: `neon` is enabled for this build and the buffer holds exactly the
            // four lanes read and written here.
            unsafe {
                let lanes = vaddq_f32(vld1q_f32(ptr), vdupq_n_f32(value));
                vst1q_f32(ptr, lanes);
            }
        }

        #[inline]
        fn mul_splat(&mut self, value: f32) {
            let ptr = self.as_mut_ptr();
            // SAFETY: See `add_splat`.
            unsafe {
                let lanes = vmulq_f32(vld1q_f32(ptr), vdupq_n_f32(value));
                vst1q_f32(ptr, lanes);
            }
        }
    }
}
