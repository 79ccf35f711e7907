use crate::index::BitPos;
use crate::word::Word;

/// Word with only the low `n` bits set. `n >= W::BITS` yields all ones.
#[inline(always)]
pub(crate) fn low_mask<W: Word>(n: usize) -> W {
    if n >= W::BITS {
        W::MAX
    } else {
        (W::ONE << n as u32) - W::ONE
    }
}

#[inline(always)]
pub(crate) fn get_bit<W: Word>(words: &[W], index: usize) -> bool {
    let pos = BitPos::of::<W>(index);
    (words[pos.word] >> pos.bit) & W::ONE == W::ONE
}

#[inline(always)]
pub(crate) fn set_bit<W: Word>(words: &mut [W], index: usize, value: bool) {
    let pos = BitPos::of::<W>(index);
    let mask = W::ONE << pos.bit;
    if value {
        words[pos.word] |= mask;
    } else {
        words[pos.word] &= !mask;
    }
}

/// Reads `W::BITS` bits starting at an arbitrary bit offset. Bits past the
/// end of `words` read as zero.
#[inline]
fn read_unaligned<W: Word>(words: &[W], bit_offset: usize) -> W {
    let pos = BitPos::of::<W>(bit_offset);
    let lo = words.get(pos.word).copied().unwrap_or(W::ZERO);
    if pos.bit == 0 {
        return lo;
    }
    let hi = words.get(pos.word + 1).copied().unwrap_or(W::ZERO);
    (lo >> pos.bit) | (hi << (W::BITS as u32 - pos.bit))
}

/// Moves every bit at position `p >= start + k` down to `p - k`.
///
/// Bits below `start` are preserved. Each destination word takes its low
/// part from the source word and its high part as a carry from the next
/// higher word. The top `k` positions are refilled from beyond the end of
/// storage, i.e. with whatever the caller left there.
pub(crate) fn shift_down<W: Word>(words: &mut [W], start: usize, k: usize) {
    if k == 0 {
        return;
    }
    let first = BitPos::of::<W>(start);
    for d in first.word..words.len() {
        let shifted = read_unaligned(words, d * W::BITS + k);
        words[d] = if d == first.word {
            let keep = low_mask::<W>(first.bit as usize);
            (words[d] & keep) | (shifted & !keep)
        } else {
            shifted
        };
    }
}

/// Moves every bit at position `p >= start` up to `p + 1`.
///
/// The top bit of the last word is shifted out, so the caller must leave it
/// free. Position `start` keeps a stale value for the caller to overwrite.
pub(crate) fn shift_up_one<W: Word>(words: &mut [W], start: usize) {
    let top = W::BITS as u32 - 1;
    let first = BitPos::of::<W>(start);
    for d in (first.word..words.len()).rev() {
        let carry = if d == 0 { W::ZERO } else { words[d - 1] >> top };
        let shifted = (words[d] << 1) | carry;
        words[d] = if d == first.word {
            let keep = low_mask::<W>(first.bit as usize);
            (words[d] & keep) | (shifted & !keep)
        } else {
            shifted
        };
    }
}
