use bit_array::{BitArray, BitArrayError, Word, bit_array};

#[test]
fn test_empty_literal() {
    let bits = bit_array![];
    assert_eq!(bits.len(), 0);
    assert!(bits.is_empty());
    assert_eq!(bits.excess(), 0);
    assert!(bits.words().is_empty());
}

#[test]
fn test_single_bits() {
    let one = bit_array![u8; true];
    assert_eq!(one.words(), &[1]);
    assert_eq!(one.excess(), 1);

    let zero = bit_array![u8; false];
    assert_eq!(zero.words(), &[0]);
    assert_eq!(zero.len(), 1);
}

#[test]
fn test_full_and_spilled_words() {
    let full = bit_array![u8; true, true, true, true, true, true, true, true];
    assert_eq!(full.words(), &[255]);
    assert_eq!(full.excess(), 0);
    assert_eq!(full.len(), 8);

    let spilled = bit_array![u8; true, true, true, true, true, true, true, true, true];
    assert_eq!(spilled.words(), &[255, 1]);
    assert_eq!(spilled.excess(), 1);
    assert_eq!(spilled.len(), 9);
}

#[test]
fn test_default_word_is_u64() {
    let bits = bit_array![true, false, true, false, false, false, true,];
    let expected: BitArray<u64> =
        BitArray::from_bools(&[true, false, true, false, false, false, true]);
    assert_eq!(bits, expected);
    assert_eq!(bits.words(), &[69]);
    assert_eq!(bits.excess(), 7);
}

#[test]
fn test_literal_with_expressions() {
    let flag = 3 > 2;
    let bits = bit_array![u16; flag, !flag, flag && false];
    assert_eq!(bits.iter().collect::<Vec<_>>(), [true, false, false]);
}

#[test]
fn test_macro_imports_alongside_root_items() {
    let mut bits = bit_array![u8; true, false];
    assert_eq!(bits.remove_first_n(3), Err(BitArrayError::RemoveTooMany(3, 2)));
    assert_eq!(<u8 as Word>::BITS, 8);
    let fallible: Result<BitArray<u8>, BitArrayError> = BitArray::from_true_indices([1], 2);
    assert_eq!(fallible.map(|b| b.count_true()), Ok(1));
}
