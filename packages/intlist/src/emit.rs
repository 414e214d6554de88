use std::collections::VecDeque;

use itertools::{FoldWhile, Itertools};

use crate::Item;

/// Generates an intlist in a format that can be parsed by [`parse()`][crate::parse].
///
/// Values appear in the emitted notation in the order given, with no deduplication, so
/// parsing the result yields exactly the input sequence. Consecutive values are coalesced
/// into ranges to generate shorter output strings. Beyond that the emitted representation is
/// unspecified and may change across versions of this crate.
///
/// # Example
///
/// ```
/// let notation = intlist::emit([4, 12, 11, 10, 9, 8, -3]);
///
/// assert_eq!(notation, "4,12...8,-3");
/// assert_eq!(intlist::parse(&notation).unwrap(), vec![4, 12, 11, 10, 9, 8, -3]);
/// ```
pub fn emit(values: impl IntoIterator<Item = Item>) -> String {
    let mut remaining = values.into_iter().collect::<VecDeque<_>>();

    // We coalesce runs of consecutive values, in either direction.
    // Each finished run is (first, last, len).
    let mut runs: Vec<(Item, Item, usize)> = Vec::new();

    while !remaining.is_empty() {
        // The accumulator is (first, step, prev, len); step stays 0 until the second value
        // establishes a direction.
        let run = remaining.iter().fold_while(
            None,
            |acc: Option<(Item, Item, Item, usize)>, value| match acc {
                None => FoldWhile::Continue(Some((*value, 0, *value, 1))),
                Some((first, 0, _, 1)) if first.checked_add(1) == Some(*value) => {
                    FoldWhile::Continue(Some((first, 1, *value, 2)))
                }
                Some((first, 0, _, 1)) if first.checked_sub(1) == Some(*value) => {
                    FoldWhile::Continue(Some((first, -1, *value, 2)))
                }
                Some((first, step, prev, len))
                    if step != 0 && prev.checked_add(step) == Some(*value) =>
                {
                    FoldWhile::Continue(Some((first, step, *value, len + 1)))
                }
                Some(run) => FoldWhile::Done(Some(run)),
            },
        );

        let (first, _, last, len) = run
            .into_inner()
            .expect("this must be Some if we still have remaining values");

        runs.push((first, last, len));

        for _ in 0..len {
            remaining.pop_front();
        }
    }

    let mut result = String::new();

    for (first, last, len) in runs {
        if !result.is_empty() {
            result.push(',');
        }

        if len == 1 {
            result.push_str(&first.to_string());
        } else if len == 2 {
            // Two singles are shorter than the ellipsis form.
            result.push_str(&format!("{first},{last}"));
        } else {
            result.push_str(&format!("{first}...{last}"));
        }
    }

    result
}
