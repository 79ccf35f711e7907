use crate::word::Word;

/// Location of a logical bit inside word storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct BitPos {
    pub word: usize,
    pub bit: u32,
}

impl BitPos {
    #[inline]
    pub fn of<W: Word>(index: usize) -> Self {
        BitPos {
            word: index / W::BITS,
            bit: (index % W::BITS) as u32,
        }
    }

    #[inline]
    pub fn index<W: Word>(self) -> usize {
        self.word * W::BITS + self.bit as usize
    }
}

/// Number of words needed to hold `bits` logical bits.
#[inline]
pub(crate) fn words_for<W: Word>(bits: usize) -> usize {
    bits.div_ceil(W::BITS)
}
