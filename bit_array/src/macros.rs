/// Builds a [`BitArray`](crate::BitArray) from a list of booleans.
///
/// Without a word type the result is `BitArray<u64>`; prefix the list with
/// a word type and `;` to choose another width.
///
/// ```rust
/// use bit_array::{BitArray, bit_array};
///
/// let bits = bit_array![true, false, true];
/// assert_eq!(bits, BitArray::<u64>::from_bools(&[true, false, true]));
///
/// let bytes = bit_array![u8; true, false, true, false, false, false, true];
/// assert_eq!(bytes.words(), &[69]);
///
/// let empty = bit_array![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! bit_array {
    () => {
        <$crate::BitArray>::new()
    };
    ($($bit:expr),+ $(,)?) => {
        <$crate::BitArray>::from_bools(&[$($bit),+])
    };
    ($word:ty; $($bit:expr),* $(,)?) => {
        $crate::BitArray::<$word>::from_bools(&[$($bit),*])
    };
}
