//! The packed boolean sequence.
//!
//! # Layout
//!
//! Word `i` holds logical bits `[i * W::BITS, (i + 1) * W::BITS)`, least
//! significant bit first. `excess` counts the live low bits of the last
//! word (0 when the last word is full or storage is empty); the remaining
//! high bits of the last word are always zero, so whole words can be
//! compared, hashed and combined directly.
//!
//! # Examples
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut bits = BitArray::<u8>::from_bools(&[true, false, true, false, false, false, true]);
//! assert_eq!(bits.words(), &[69]);
//! assert_eq!(bits.excess(), 7);
//!
//! assert_eq!(bits.remove_first().unwrap(), true);
//! assert_eq!(bits.len(), 6);
//! ```

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
use core::fmt::{self, Write};
use core::ops::Index;

use crate::bit_ops;
use crate::error::{BitArrayError, Result};
use crate::index::{BitPos, words_for};
use crate::iter::{Iter, TrueIndices};
use crate::word::Word;

/// A growable sequence of booleans packed into words of type `W`.
///
/// Cloning copies the word storage, so clones never observe each other's
/// mutations.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitArray<W: Word = u64> {
    storage: Vec<W>,
    excess: usize,
}

impl<W: Word> BitArray<W> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::<u32>::new();
    /// assert!(bits.is_empty());
    /// assert!(bits.words().is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
            excess: 0,
        }
    }

    /// Creates an empty sequence with room for at least `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            storage: Vec::with_capacity(words_for::<W>(bits)),
            excess: 0,
        }
    }

    /// Packs a slice of booleans, position `i` of the slice becoming logical bit `i`.
    pub fn from_bools(bits: &[bool]) -> Self {
        let storage = bits
            .chunks(W::BITS)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .filter(|(_, bit)| **bit)
                    .fold(W::ZERO, |word, (b, _)| word | (W::ONE << b as u32))
            })
            .collect();
        Self {
            storage,
            excess: bits.len() % W::BITS,
        }
    }

    /// Creates `count` copies of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::<u8>::repeating(true, 9);
    /// assert_eq!(bits.words(), &[255, 1]);
    /// assert_eq!(bits.excess(), 1);
    /// ```
    pub fn repeating(value: bool, count: usize) -> Self {
        let fill = if value { W::MAX } else { W::ZERO };
        let mut storage = vec![fill; words_for::<W>(count)];
        let excess = count % W::BITS;
        if value && excess != 0 {
            if let Some(last) = storage.last_mut() {
                *last = bit_ops::low_mask(excess);
            }
        }
        Self { storage, excess }
    }

    /// Builds a `len`-bit sequence whose true bits are exactly `indices`.
    ///
    /// `indices` must be strictly increasing and below `len`; this is the
    /// shape a sparse set representation hands over.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::<u8>::from_true_indices([0, 2, 6], 7).unwrap();
    /// assert_eq!(bits.words(), &[69]);
    /// assert!(BitArray::<u8>::from_true_indices([2, 1], 7).is_err());
    /// ```
    pub fn from_true_indices<I>(indices: I, len: usize) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut storage = vec![W::ZERO; words_for::<W>(len)];
        let mut previous: Option<usize> = None;
        for index in indices {
            if index >= len {
                return Err(BitArrayError::IndexOutOfBounds(index, len));
            }
            if previous.is_some_and(|p| index <= p) {
                return Err(BitArrayError::UnsortedIndices(index));
            }
            bit_ops::set_bit(&mut storage, index, true);
            previous = Some(index);
        }
        Ok(Self {
            storage,
            excess: len % W::BITS,
        })
    }

    /// Adopts already packed words as a `len`-bit sequence.
    ///
    /// Bits of the last word at positions `>= len` are cleared.
    pub fn from_words(words: Vec<W>, len: usize) -> Result<Self> {
        let expected = words_for::<W>(len);
        if words.len() != expected {
            return Err(BitArrayError::WordCountMismatch {
                expected,
                found: words.len(),
            });
        }
        let mut bits = Self {
            storage: words,
            excess: len % W::BITS,
        };
        bits.clear_unused_bits();
        Ok(bits)
    }

    /// The packed words, lowest logical positions first.
    pub fn words(&self) -> &[W] {
        &self.storage
    }

    /// Number of live bits in the last word, or 0 if it is full or absent.
    pub fn excess(&self) -> usize {
        self.excess
    }

    /// The packed words viewed as native-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.storage)
    }

    pub fn len(&self) -> usize {
        match self.storage.len() {
            0 => 0,
            n if self.excess == 0 => n * W::BITS,
            n => (n - 1) * W::BITS + self.excess,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Always 0.
    pub fn start_index(&self) -> usize {
        0
    }

    /// One past the last valid index; equal to [`len`](Self::len).
    pub fn end_index(&self) -> usize {
        self.len()
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            Err(BitArrayError::IndexOutOfBounds(index, len))
        }
    }

    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(bit_ops::get_bit(&self.storage, index))
    }

    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        bit_ops::set_bit(&mut self.storage, index, value);
        Ok(())
    }

    /// Flips the bit at `index` and returns its new value.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        let value = !bit_ops::get_bit(&self.storage, index);
        bit_ops::set_bit(&mut self.storage, index, value);
        Ok(value)
    }

    /// Appends `value` after the last bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::<u8>::repeating(false, 8);
    /// bits.push(true);
    /// assert_eq!(bits.words(), &[0, 1]);
    /// assert_eq!(bits.excess(), 1);
    /// ```
    pub fn push(&mut self, value: bool) {
        if self.excess == 0 {
            self.storage.push(if value { W::ONE } else { W::ZERO });
            self.excess = 1;
        } else {
            if value {
                let index = self.len();
                bit_ops::set_bit(&mut self.storage, index, true);
            }
            self.excess = (self.excess + 1) % W::BITS;
        }
    }

    /// Removes and returns the last bit, or `None` if empty.
    pub fn pop(&mut self) -> Option<bool> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let value = bit_ops::get_bit(&self.storage, len - 1);
        self.truncate_bits(len - 1);
        Some(value)
    }

    /// Inserts `value` at `index`, moving every later bit up by one.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: bool) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(BitArrayError::IndexOutOfBounds(index, len));
        }
        if index == len {
            self.push(value);
            return Ok(());
        }
        if self.excess == 0 {
            self.storage.push(W::ZERO);
        }
        bit_ops::shift_up_one(&mut self.storage, index);
        self.excess = (len + 1) % W::BITS;
        bit_ops::set_bit(&mut self.storage, index, value);
        self.clear_unused_bits();
        Ok(())
    }

    /// Removes and returns the first bit.
    pub fn remove_first(&mut self) -> Result<bool> {
        let first = self.get(0).map_err(|_| BitArrayError::RemoveTooMany(1, 0))?;
        self.remove_first_n(1)?;
        Ok(first)
    }

    /// Removes the first `k` bits, moving the rest down to start at 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::<u8>::from_bools(&[true, true, false]);
    /// assert!(bits.remove_first_n(5).is_err());
    /// assert_eq!(bits.len(), 3);
    ///
    /// bits.remove_first_n(2).unwrap();
    /// assert_eq!(bits, BitArray::from_bools(&[false]));
    /// ```
    pub fn remove_first_n(&mut self, k: usize) -> Result<()> {
        let len = self.len();
        if k > len {
            return Err(BitArrayError::RemoveTooMany(k, len));
        }
        if k == 0 {
            return Ok(());
        }
        if k % W::BITS == 0 {
            self.storage.drain(..k / W::BITS);
        } else {
            bit_ops::shift_down(&mut self.storage, 0, k);
        }
        self.truncate_bits(len - k);
        Ok(())
    }

    /// Removes and returns the last bit.
    pub fn remove_last(&mut self) -> Result<bool> {
        let len = self.len();
        self.pop().ok_or(BitArrayError::RemoveTooMany(1, len))
    }

    /// Removes the last `k` bits.
    pub fn remove_last_n(&mut self, k: usize) -> Result<()> {
        let len = self.len();
        if k > len {
            return Err(BitArrayError::RemoveTooMany(k, len));
        }
        self.truncate_bits(len - k);
        Ok(())
    }

    /// Removes and returns the bit at `index`, moving every later bit down by one.
    pub fn remove(&mut self, index: usize) -> Result<bool> {
        let value = self.get(index)?;
        let len = self.len();
        bit_ops::shift_down(&mut self.storage, index, 1);
        self.truncate_bits(len - 1);
        Ok(value)
    }

    /// Resets to the empty sequence, releasing the word storage.
    pub fn remove_all(&mut self) {
        self.storage = Vec::new();
        self.excess = 0;
    }

    /// Lowest index holding `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::<u8>::from_true_indices([11, 13], 20).unwrap();
    /// assert_eq!(bits.first_true(), Some(11));
    /// assert_eq!(bits.last_true(), Some(13));
    /// assert_eq!(BitArray::<u8>::repeating(false, 20).first_true(), None);
    /// ```
    pub fn first_true(&self) -> Option<usize> {
        self.storage
            .iter()
            .enumerate()
            .find(|(_, word)| **word != W::ZERO)
            .map(|(wi, word)| {
                BitPos {
                    word: wi,
                    bit: word.trailing_zeros(),
                }
                .index::<W>()
            })
    }

    /// Highest index holding `true`.
    pub fn last_true(&self) -> Option<usize> {
        self.storage
            .iter()
            .enumerate()
            .rev()
            .find(|(_, word)| **word != W::ZERO)
            .map(|(wi, word)| {
                BitPos {
                    word: wi,
                    bit: W::BITS as u32 - 1 - word.leading_zeros(),
                }
                .index::<W>()
            })
    }

    /// Number of `true` bits.
    pub fn count_true(&self) -> usize {
        self.storage.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates the bits in order; `.rev()` walks them from the last index.
    pub fn iter(&self) -> Iter<'_, W> {
        Iter::new(self)
    }

    /// Iterates the positions of `true` bits in ascending order.
    pub fn true_indices(&self) -> TrueIndices<'_, W> {
        TrueIndices::new(&self.storage)
    }

    /// Shrinks to `new_len` bits, dropping unused words and zeroing the
    /// freed bits of the new last word.
    pub(crate) fn truncate_bits(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.len());
        self.storage.truncate(words_for::<W>(new_len));
        self.excess = new_len % W::BITS;
        self.clear_unused_bits();
    }

    /// Zeroes the bits of the last word at positions `>= excess`.
    pub(crate) fn clear_unused_bits(&mut self) {
        if self.excess == 0 {
            return;
        }
        if let Some(last) = self.storage.last_mut() {
            *last &= bit_ops::low_mask(self.excess);
        }
    }

    pub(crate) fn words_mut(&mut self) -> &mut [W] {
        &mut self.storage
    }
}

impl<W: Word> Default for BitArray<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word> Index<usize> for BitArray<W> {
    type Output = bool;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<W: Word> From<&[bool]> for BitArray<W> {
    fn from(bits: &[bool]) -> Self {
        Self::from_bools(bits)
    }
}

impl<W: Word> From<Vec<bool>> for BitArray<W> {
    fn from(bits: Vec<bool>) -> Self {
        Self::from_bools(&bits)
    }
}

impl<W: Word, const N: usize> From<[bool; N]> for BitArray<W> {
    fn from(bits: [bool; N]) -> Self {
        Self::from_bools(&bits)
    }
}

impl<W: Word> fmt::Display for BitArray<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl<W: Word> fmt::Debug for BitArray<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitArray")
            .field("len", &self.len())
            .field("bits", &format_args!("{}", self))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEVEN: [bool; 7] = [true, false, true, false, false, false, true];

    fn assert_packed<W: Word>(bits: &BitArray<W>) {
        let len = bits.len();
        assert_eq!(bits.excess(), len % W::BITS);
        assert_eq!(bits.words().len(), len.div_ceil(W::BITS));
        if let (Some(last), e) = (bits.words().last(), bits.excess()) {
            if e != 0 {
                assert_eq!(*last >> e as u32, W::ZERO, "stray bits above excess");
            }
        }
    }

    fn to_vec<W: Word>(bits: &BitArray<W>) -> Vec<bool> {
        bits.iter().collect()
    }

    #[test]
    fn empty_state() {
        let bits = BitArray::<u64>::new();
        assert_eq!(bits.words(), &[] as &[u64]);
        assert_eq!(bits.excess(), 0);
        assert_eq!(bits.len(), 0);
        assert_eq!(bits.start_index(), 0);
        assert_eq!(bits.end_index(), 0);
        assert_eq!(bits, BitArray::default());
    }

    #[test]
    fn seven_bits_pack_into_69() {
        let bits = BitArray::<u8>::from_bools(&SEVEN);
        assert_eq!(bits.words(), &[69]);
        assert_eq!(bits.excess(), 7);
        assert_eq!(bits.len(), 7);
        assert_eq!(to_vec(&bits), SEVEN);
    }

    #[test]
    fn literal_shapes() {
        assert_eq!(BitArray::<u8>::from([true]).words(), &[1]);
        assert_eq!(BitArray::<u8>::from([false]).words(), &[0]);
        let full = BitArray::<u8>::from([true; 8]);
        assert_eq!(full.words(), &[255]);
        assert_eq!(full.excess(), 0);
        let spill = BitArray::<u8>::from([false; 9]);
        assert_eq!(spill.words(), &[0, 0]);
        assert_eq!(spill.excess(), 1);
    }

    #[test]
    fn repeating_masks_last_word() {
        for count in 0..=3 * 8 {
            let ones = BitArray::<u8>::repeating(true, count);
            let zeros = BitArray::<u8>::repeating(false, count);
            assert_packed(&ones);
            assert_packed(&zeros);
            assert_eq!(to_vec(&ones), vec![true; count]);
            assert_eq!(to_vec(&zeros), vec![false; count]);
            assert!(zeros.words().iter().all(|w| *w == 0));
        }
        let nine = BitArray::<u8>::repeating(true, 9);
        assert_eq!(nine.words(), &[255, 1]);
        assert_eq!(nine.excess(), 1);
    }

    #[test]
    fn remove_first_shifts_down() {
        let mut bits = BitArray::<u8>::from_bools(&SEVEN);
        assert_eq!(bits.remove_first(), Ok(true));
        assert_eq!(to_vec(&bits), [false, true, false, false, false, true]);
        assert_packed(&bits);
    }

    #[test]
    fn remove_at_two() {
        let mut bits = BitArray::<u8>::from_bools(&SEVEN);
        assert_eq!(bits.remove(2), Ok(true));
        assert_eq!(to_vec(&bits), [true, false, false, false, false, true]);
        assert_packed(&bits);
    }

    #[test]
    fn over_removal_is_rejected_without_mutation() {
        let mut bits = BitArray::<u8>::from_bools(&[true, false, true]);
        let before = bits.clone();
        assert_eq!(
            bits.remove_first_n(5),
            Err(BitArrayError::RemoveTooMany(5, 3))
        );
        assert_eq!(bits.remove_last_n(4), Err(BitArrayError::RemoveTooMany(4, 3)));
        assert_eq!(bits.remove(3), Err(BitArrayError::IndexOutOfBounds(3, 3)));
        assert_eq!(bits, before);

        let mut empty = BitArray::<u8>::new();
        assert!(empty.remove_first().unwrap_err().is_bounds_error());
        assert!(empty.remove_last().unwrap_err().is_bounds_error());
        assert_eq!(empty.pop(), None);
    }

    #[test]
    fn remove_first_every_bit() {
        let layout: Vec<bool> = (0..37).map(|i| i % 3 == 0 || i % 7 == 2).collect();
        let mut bits = BitArray::<u8>::from_bools(&layout);
        for (i, &expected) in layout.iter().enumerate() {
            assert_eq!(bits.remove_first(), Ok(expected));
            assert_eq!(to_vec(&bits), layout[i + 1..]);
            assert_packed(&bits);
        }
        assert!(bits.is_empty());
    }

    #[test]
    fn remove_first_n_word_aligned_and_not() {
        let layout: Vec<bool> = (0..70).map(|i| i % 5 < 2).collect();
        for k in 0..=layout.len() {
            let mut bits = BitArray::<u16>::from_bools(&layout);
            bits.remove_first_n(k).unwrap();
            assert_eq!(to_vec(&bits), layout[k..]);
            assert_packed(&bits);
        }
    }

    #[test]
    fn remove_last_every_bit() {
        let layout: Vec<bool> = (0..19).map(|i| i % 2 == 1).collect();
        let mut bits = BitArray::<u8>::from_bools(&layout);
        for i in (0..layout.len()).rev() {
            assert_eq!(bits.remove_last(), Ok(layout[i]));
            assert_eq!(to_vec(&bits), layout[..i]);
            assert_packed(&bits);
        }
    }

    #[test]
    fn insert_at_every_position() {
        let layout: Vec<bool> = (0..24).map(|i| i % 4 == 1).collect();
        for index in 0..=layout.len() {
            let mut bits = BitArray::<u8>::from_bools(&layout);
            let mut model = layout.clone();
            bits.insert(index, true).unwrap();
            model.insert(index, true);
            assert_eq!(to_vec(&bits), model);
            assert_packed(&bits);
        }
        let mut bits = BitArray::<u8>::from_bools(&layout);
        assert_eq!(
            bits.insert(25, true),
            Err(BitArrayError::IndexOutOfBounds(25, 24))
        );
    }

    #[test]
    fn push_crosses_word_boundary() {
        let mut bits = BitArray::<u8>::new();
        for i in 0..17 {
            bits.push(i % 2 == 0);
            assert_packed(&bits);
        }
        assert_eq!(bits.words(), &[0b0101_0101, 0b0101_0101, 1]);
    }

    #[test]
    fn append_then_remove_last_restores() {
        let original = BitArray::<u8>::from_bools(&[true, false, true]);
        let mut bits = original.clone();
        bits.remove_last().unwrap();
        bits.push(true);
        assert_eq!(bits, original);
        bits.push(true);
        let end = bits.end_index();
        bits.remove(end - 1).unwrap();
        assert_eq!(bits, original);
    }

    #[test]
    fn clones_are_independent() {
        let original = BitArray::<u8>::from_bools(&SEVEN);
        let mut copy = original.clone();
        copy.set(1, true).unwrap();
        copy.push(true);
        assert_eq!(to_vec(&original), SEVEN);
        assert_ne!(copy, original);
    }

    #[test]
    fn get_set_toggle() {
        let mut bits = BitArray::<u8>::repeating(false, 10);
        bits.set(9, true).unwrap();
        assert_eq!(bits.get(9), Ok(true));
        assert_eq!(bits.toggle(9), Ok(false));
        assert_eq!(bits.toggle(0), Ok(true));
        assert!(bits[0]);
        assert!(!bits[9]);
        assert_eq!(bits.get(10), Err(BitArrayError::IndexOutOfBounds(10, 10)));
        assert!(bits.set(10, true).is_err());
        assert_packed(&bits);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_past_end_panics() {
        let bits = BitArray::<u8>::repeating(true, 3);
        assert!(bits[3]);
    }

    #[test]
    fn sparse_construction_matches_dense() {
        let dense = BitArray::<u8>::from_bools(&SEVEN);
        let sparse = BitArray::<u8>::from_true_indices(dense.true_indices(), 7).unwrap();
        assert_eq!(sparse, dense);
        assert_eq!(
            BitArray::<u8>::from_true_indices([3, 3], 7),
            Err(BitArrayError::UnsortedIndices(3))
        );
        assert_eq!(
            BitArray::<u8>::from_true_indices([7], 7),
            Err(BitArrayError::IndexOutOfBounds(7, 7))
        );
    }

    #[test]
    fn from_words_clears_stray_bits() {
        let bits = BitArray::<u8>::from_words(vec![0xFF, 0xFF], 10).unwrap();
        assert_eq!(bits.words(), &[0xFF, 0b11]);
        assert_packed(&bits);
        assert_eq!(
            BitArray::<u8>::from_words(vec![0], 10),
            Err(BitArrayError::WordCountMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn first_and_last_true() {
        let bits = BitArray::<u8>::from_bools(&SEVEN);
        assert_eq!(bits.first_true(), Some(0));
        assert_eq!(bits.last_true(), Some(6));
        assert_eq!(bits.count_true(), 3);
        assert_eq!(BitArray::<u8>::new().last_true(), None);
    }

    #[test]
    fn byte_view_matches_words() {
        let bits = BitArray::<u16>::from_true_indices([0, 9], 16).unwrap();
        assert_eq!(bits.as_bytes(), 0x0201u16.to_ne_bytes());
    }

    #[test]
    fn renders_as_binary_string() {
        let bits = BitArray::<u8>::from_bools(&SEVEN);
        assert_eq!(format!("{}", bits), "1010001");
        assert_eq!(format!("{:?}", bits), "BitArray { len: 7, bits: 1010001 }");
    }

    #[test]
    fn remove_all_resets() {
        let mut bits = BitArray::<u64>::repeating(true, 130);
        bits.remove_all();
        assert_eq!(bits.words().len(), 0);
        assert_eq!(bits.excess(), 0);
        assert_eq!(bits.len(), 0);
    }
}
