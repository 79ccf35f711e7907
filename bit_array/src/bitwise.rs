//! Element-wise boolean algebra between equal-length sequences.
//!
//! The named methods carry the contract and report
//! [`BitArrayError::LengthMismatch`]. The operators (`|`, `&`, `^`, `!` and
//! their assigning forms) call the named methods and panic on mismatch.
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let a = BitArray::<u8>::from_bools(&[true, true, false]);
//! let b = BitArray::<u8>::from_bools(&[false, true, false]);
//!
//! assert_eq!(a.bitwise_and(&b).unwrap(), b);
//! assert_eq!(&a ^ &b, BitArray::from_bools(&[true, false, false]));
//! assert!(a.bitwise_or(&BitArray::new()).is_err());
//! ```

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::array::BitArray;
use crate::error::{BitArrayError, Result};
use crate::word::Word;

impl<W: Word> BitArray<W> {
    fn check_same_len(&self, other: &Self) -> Result<()> {
        let (left, right) = (self.len(), other.len());
        if left == right {
            Ok(())
        } else {
            Err(BitArrayError::LengthMismatch { left, right })
        }
    }

    /// Combines word `i` of `self` with word `i` of `other` for every `i`.
    fn zip_words_with(&mut self, other: &Self, op: impl Fn(W, W) -> W) -> Result<()> {
        self.check_same_len(other)?;
        for (dst, &src) in self.words_mut().iter_mut().zip(other.words()) {
            *dst = op(*dst, src);
        }
        self.clear_unused_bits();
        Ok(())
    }

    pub fn form_bitwise_or(&mut self, other: &Self) -> Result<()> {
        self.zip_words_with(other, |a, b| a | b)
    }

    pub fn form_bitwise_and(&mut self, other: &Self) -> Result<()> {
        self.zip_words_with(other, |a, b| a & b)
    }

    pub fn form_bitwise_xor(&mut self, other: &Self) -> Result<()> {
        self.zip_words_with(other, |a, b| a ^ b)
    }

    /// Flips every bit in place.
    pub fn form_bitwise_not(&mut self) {
        for word in self.words_mut() {
            *word = !*word;
        }
        self.clear_unused_bits();
    }

    pub fn bitwise_or(&self, other: &Self) -> Result<Self> {
        self.check_same_len(other)?;
        let mut result = self.clone();
        result.form_bitwise_or(other)?;
        Ok(result)
    }

    pub fn bitwise_and(&self, other: &Self) -> Result<Self> {
        self.check_same_len(other)?;
        let mut result = self.clone();
        result.form_bitwise_and(other)?;
        Ok(result)
    }

    pub fn bitwise_xor(&self, other: &Self) -> Result<Self> {
        self.check_same_len(other)?;
        let mut result = self.clone();
        result.form_bitwise_xor(other)?;
        Ok(result)
    }

    /// Returns a copy with every bit flipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let zeros = BitArray::<u64>::repeating(false, 8);
    /// assert_eq!(zeros.bitwise_not().words(), &[255]);
    /// ```
    pub fn bitwise_not(&self) -> Self {
        let mut result = self.clone();
        result.form_bitwise_not();
        result
    }
}

#[track_caller]
fn expect_same_len<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

macro_rules! implement_binary_operator {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $form:ident) => {
        impl<W: Word> $assign_trait<&BitArray<W>> for BitArray<W> {
            /// # Panics
            ///
            /// Panics if the lengths differ.
            #[track_caller]
            fn $assign_fn(&mut self, rhs: &BitArray<W>) {
                expect_same_len(self.$form(rhs))
            }
        }

        impl<W: Word> $assign_trait<BitArray<W>> for BitArray<W> {
            #[track_caller]
            fn $assign_fn(&mut self, rhs: BitArray<W>) {
                expect_same_len(self.$form(&rhs))
            }
        }

        impl<W: Word> $op_trait<&BitArray<W>> for &BitArray<W> {
            type Output = BitArray<W>;

            #[track_caller]
            fn $op_fn(self, rhs: &BitArray<W>) -> BitArray<W> {
                let mut result = self.clone();
                expect_same_len(result.$form(rhs));
                result
            }
        }

        impl<W: Word> $op_trait<&BitArray<W>> for BitArray<W> {
            type Output = BitArray<W>;

            #[track_caller]
            fn $op_fn(mut self, rhs: &BitArray<W>) -> BitArray<W> {
                expect_same_len(self.$form(rhs));
                self
            }
        }

        impl<W: Word> $op_trait<BitArray<W>> for BitArray<W> {
            type Output = BitArray<W>;

            #[track_caller]
            fn $op_fn(mut self, rhs: BitArray<W>) -> BitArray<W> {
                expect_same_len(self.$form(&rhs));
                self
            }
        }
    };
}

implement_binary_operator!(BitOr, bitor, BitOrAssign, bitor_assign, form_bitwise_or);
implement_binary_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, form_bitwise_and);
implement_binary_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign, form_bitwise_xor);

impl<W: Word> Not for BitArray<W> {
    type Output = BitArray<W>;

    fn not(mut self) -> BitArray<W> {
        self.form_bitwise_not();
        self
    }
}

impl<W: Word> Not for &BitArray<W> {
    type Output = BitArray<W>;

    fn not(self) -> BitArray<W> {
        self.bitwise_not()
    }
}
