#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Utilities for parsing and emitting the `intlist` notation, a compact text format that
//! describes an ordered list of integers as comma-separated literals and ellipsis-delimited
//! ranges.
//!
//! Example intlist string: `4,12...8,-3`
//!
//! The notation exists for data-driven text files maintained by humans, where a mix of
//! individual integers and runs of consecutive integers must be easy to enter and easy to
//! recognize when reading back.
//!
//! # Format
//!
//! The value is a comma-separated list of zero or more items, where each item is either:
//!
//! * a single integer (e.g. `21`)
//! * a range of consecutive integers, written as the two endpoints separated by an ellipsis
//!   (e.g. `50...54`, which is equivalent to `50,51,52,53,54`)
//!
//! A range runs in the direction of its endpoints and includes both of them, so increasing
//! (`6...9`) and decreasing (`12...8`) ranges are equally valid. The empty string is a valid
//! intlist and describes the empty list. Whitespace or extra characters are not allowed
//! anywhere in the string.
//!
//! The values in the list are of size `i64`. Integer literals may carry a leading `-` or `+`
//! sign.
//!
//! # Example
//!
//! Converting a specification into a fully expanded list in one call:
//!
//! ```
//! let values = intlist::parse("4,6,10...15").unwrap();
//! assert_eq!(values, vec![4, 6, 10, 11, 12, 13, 14, 15]);
//!
//! println!("Values: {values:?}");
//! println!("As intlist: {}", intlist::emit(values));
//! ```
//!
//! Iterating lazily, one value at a time. Ranges are never expanded up front, which matters
//! when the expanded list would be huge or when iteration may stop early:
//!
//! ```
//! use intlist::{Iter, Status};
//!
//! let mut iter = Iter::new("1...1000,1030...1014,2000");
//! assert_eq!(iter.status(), &Status::Ready);
//!
//! let mut total: i64 = 0;
//! while let Some(value) = iter.next() {
//!     total += value;
//! }
//!
//! assert_eq!(total, 519_874);
//! assert_eq!(iter.status(), &Status::Done);
//! ```

mod emit;
mod error;
mod iter;
mod parse;

pub use emit::*;
pub use error::*;
pub use iter::*;
pub use parse::*;

pub(crate) type Item = i64;
