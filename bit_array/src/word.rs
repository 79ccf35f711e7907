//! Storage granules for packed bits.
//!
//! A [`Word`] is one of the primitive unsigned integers. Word width is a
//! compile-time choice: `BitArray<u8>` packs eight bits per word,
//! `BitArray` (`BitArray<u64>`) packs sixty-four.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr, Sub,
};

use bytemuck::Pod;

mod private {
    pub trait Sealed {}
}

/// An unsigned integer used as the storage unit of a [`BitArray`](crate::BitArray).
///
/// Sealed: implemented for `u8`, `u16`, `u32` and `u64` only.
pub trait Word:
    private::Sealed
    + Pod
    + Eq
    + Hash
    + Debug
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Sub<Output = Self>
{
    /// Number of bits in one word.
    const BITS: usize;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn trailing_zeros(self) -> u32;
    fn leading_zeros(self) -> u32;
    fn count_ones(self) -> u32;
}

macro_rules! implement_word {
    ($word_type:ty) => {
        impl private::Sealed for $word_type {}

        impl Word for $word_type {
            const BITS: usize = <$word_type>::BITS as usize;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$word_type>::MAX;

            #[inline(always)]
            fn trailing_zeros(self) -> u32 {
                <$word_type>::trailing_zeros(self)
            }

            #[inline(always)]
            fn leading_zeros(self) -> u32 {
                <$word_type>::leading_zeros(self)
            }

            #[inline(always)]
            fn count_ones(self) -> u32 {
                <$word_type>::count_ones(self)
            }
        }
    };
}

implement_word!(u8);
implement_word!(u16);
implement_word!(u32);
implement_word!(u64);
