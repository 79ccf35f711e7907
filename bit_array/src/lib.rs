//! # bit_array
//!
//! A `no_std` compatible sequence of booleans packed into machine words.
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! // Seven bits fit in a single byte-sized word
//! let mut bits = BitArray::<u8>::from_bools(&[true, false, true, false, false, false, true]);
//! assert_eq!(bits.words(), &[69]);
//! assert_eq!(bits.excess(), 7);
//!
//! bits.push(true);
//! bits.push(false);
//! assert_eq!(bits.words(), &[197, 0]);
//!
//! assert_eq!(bits.remove(2).unwrap(), true);
//! assert_eq!(bits.first_true(), Some(0));
//! assert_eq!(bits.last_true(), Some(6));
//! ```
//!
//! ## Bitwise combination
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let a = BitArray::<u64>::repeating(true, 100);
//! let b = BitArray::<u64>::from_true_indices([3, 50, 99], 100).unwrap();
//!
//! let only_b = a.bitwise_and(&b).unwrap();
//! assert_eq!(only_b, b);
//!
//! // `!` clears the unused high bits of the last word
//! assert_eq!((!&a).count_true(), 0);
//!
//! // Combining different lengths is an error
//! assert!(a.bitwise_xor(&BitArray::repeating(true, 99)).is_err());
//! ```
//!

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BitArrayError;

mod bit_ops;
mod index;
mod macros;

pub mod array;
pub mod bitwise;
pub mod iter;
pub mod word;

pub use array::BitArray;
pub use iter::{IntoIter, Iter, TrueIndices};
pub use word::Word;
