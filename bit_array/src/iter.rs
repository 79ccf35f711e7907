//! Iterators over a [`BitArray`].

use core::iter::FusedIterator;

use crate::array::BitArray;
use crate::bit_ops;
use crate::index::BitPos;
use crate::word::Word;

/// Borrowing iterator over the bits of a [`BitArray`], from either end.
///
/// Created by [`BitArray::iter`]. The shared borrow keeps the array
/// unchanged for as long as the iterator lives.
///
/// ```rust
/// use bit_array::BitArray;
///
/// let bits = BitArray::<u8>::from_bools(&[true, false, false]);
/// let reversed: Vec<bool> = bits.iter().rev().collect();
/// assert_eq!(reversed, [false, false, true]);
/// ```
#[derive(Clone, Debug)]
pub struct Iter<'a, W: Word> {
    words: &'a [W],
    front: usize,
    back: usize,
}

impl<'a, W: Word> Iter<'a, W> {
    pub(crate) fn new(array: &'a BitArray<W>) -> Self {
        Self {
            words: array.words(),
            front: 0,
            back: array.len(),
        }
    }
}

impl<W: Word> Iterator for Iter<'_, W> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        let bit = bit_ops::get_bit(self.words, self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<W: Word> DoubleEndedIterator for Iter<'_, W> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(bit_ops::get_bit(self.words, self.back))
    }
}

impl<W: Word> ExactSizeIterator for Iter<'_, W> {}

impl<W: Word> FusedIterator for Iter<'_, W> {}

/// Owning iterator over the bits of a [`BitArray`].
///
/// Consumes the array, so it iterates a snapshot no other handle can change.
#[derive(Clone, Debug)]
pub struct IntoIter<W: Word> {
    array: BitArray<W>,
    front: usize,
    back: usize,
}

impl<W: Word> Iterator for IntoIter<W> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        let bit = bit_ops::get_bit(self.array.words(), self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<W: Word> DoubleEndedIterator for IntoIter<W> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(bit_ops::get_bit(self.array.words(), self.back))
    }
}

impl<W: Word> ExactSizeIterator for IntoIter<W> {}

impl<W: Word> FusedIterator for IntoIter<W> {}

/// Ascending positions of the `true` bits, found by scanning one word at a time.
#[derive(Clone, Debug)]
pub struct TrueIndices<'a, W: Word> {
    words: &'a [W],
    word: usize,
    remaining: W,
}

impl<'a, W: Word> TrueIndices<'a, W> {
    pub(crate) fn new(words: &'a [W]) -> Self {
        Self {
            words,
            word: 0,
            remaining: words.first().copied().unwrap_or(W::ZERO),
        }
    }
}

impl<W: Word> Iterator for TrueIndices<'_, W> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.remaining == W::ZERO {
            self.word += 1;
            self.remaining = *self.words.get(self.word)?;
        }
        let bit = self.remaining.trailing_zeros();
        // clear lowest set bit
        self.remaining = self.remaining & (self.remaining - W::ONE);
        Some(BitPos { word: self.word, bit }.index::<W>())
    }
}

impl<W: Word> FusedIterator for TrueIndices<'_, W> {}

impl<'a, W: Word> IntoIterator for &'a BitArray<W> {
    type Item = bool;
    type IntoIter = Iter<'a, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<W: Word> IntoIterator for BitArray<W> {
    type Item = bool;
    type IntoIter = IntoIter<W>;

    fn into_iter(self) -> Self::IntoIter {
        let back = self.len();
        IntoIter {
            array: self,
            front: 0,
            back,
        }
    }
}

impl<W: Word> Extend<bool> for BitArray<W> {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl<W: Word> FromIterator<bool> for BitArray<W> {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut bits = Self::with_capacity(iter.size_hint().0);
        bits.extend(iter);
        bits
    }
}
