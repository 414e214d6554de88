use std::collections::VecDeque;

use crate::parse::parse_spec;
use crate::{Error, Item};

/// One pending item from a specification: either a single integer or an inclusive run of
/// consecutive integers. A single integer is a run whose two endpoints coincide.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Run {
    /// Next value this run will emit.
    next: Item,

    /// Final value of the run, inclusive.
    last: Item,

    /// Direction of traversal: `+1` or `-1` for a spanning run, `0` for a single value.
    /// Never read once `next` reaches `last`.
    step: Item,
}

impl Run {
    /// A run that emits exactly one value. Its direction is never read because the run is
    /// exhausted by its first emission.
    pub(crate) fn single(value: Item) -> Self {
        Self {
            next: value,
            last: value,
            step: 0,
        }
    }

    /// A run covering every integer between the two endpoints, inclusive, traversed from
    /// `first` toward `last`. Equal endpoints degenerate to a single emission.
    pub(crate) fn spanning(first: Item, last: Item) -> Self {
        let step = if first < last { 1 } else { -1 };

        Self {
            next: first,
            last,
            step,
        }
    }
}

/// Observable state of an [`Iter`], as reported by [`Iter::status()`].
///
/// The state machine is one-way: an iterator starts out [`Ready`][Self::Ready] or
/// [`Invalid`][Self::Invalid]; a ready iterator moves to [`Done`][Self::Done] when iteration
/// completes; invalid and done are permanent.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// The specification parsed successfully and iteration has not yet completed.
    Ready,

    /// The specification failed to parse and iteration must not be attempted. The contained
    /// error is the same one [`parse()`][crate::parse] returns for this specification.
    Invalid(Error),

    /// A previous [`Iter::next()`] call reported completion.
    Done,
}

/// Produces the integers described by an [intlist][crate] one value at a time, without
/// expanding ranges up front.
///
/// This is the alternative to [`parse()`][crate::parse] for cases where the expanded list
/// would be huge or where iteration may stop before the end of the list.
///
/// The specification is validated eagerly during construction; inspect
/// [`status()`][Self::status] before iterating. [`next()`][Self::next] panics when invoked in
/// violation of its calling contract, so an iterator holding an invalid specification must
/// not be advanced.
///
/// # Example
///
/// ```
/// use intlist::{Iter, Status};
///
/// let mut iter = Iter::new("1,2,21,50...54,57...61");
/// assert_eq!(iter.status(), &Status::Ready);
///
/// let mut values = Vec::new();
/// while let Some(value) = iter.next() {
///     values.push(value);
/// }
///
/// assert_eq!(values, vec![1, 2, 21, 50, 51, 52, 53, 54, 57, 58, 59, 60, 61]);
/// assert_eq!(iter.status(), &Status::Done);
/// ```
#[derive(Clone, Debug)]
pub struct Iter {
    /// Pending runs in specification order. The front run may be partially consumed.
    runs: VecDeque<Run>,

    status: Status,
}

impl Iter {
    /// Validates a specification and prepares iteration over the integers it describes.
    ///
    /// Construction itself never fails: an invalid specification is recorded inside the
    /// returned iterator and reported by [`status()`][Self::status].
    ///
    /// See [package-level documentation][crate] for the notation.
    #[must_use]
    pub fn new(spec: &str) -> Self {
        match parse_spec(spec) {
            Ok(runs) => Self {
                runs: runs.into(),
                status: Status::Ready,
            },
            Err(error) => Self {
                runs: VecDeque::new(),
                status: Status::Invalid(error),
            },
        }
    }

    /// Returns the next integer of the list, or `None` once every pending run is exhausted.
    ///
    /// Values come out in specification order; within a range they move from the first
    /// endpoint toward the second, one integer at a time. After `None` is returned the
    /// iterator is permanently done.
    ///
    /// # Panics
    ///
    /// Panics when called on an iterator whose specification failed to parse (the caller is
    /// expected to check [`status()`][Self::status] after construction) and when called again
    /// after a previous call already returned `None`.
    #[expect(
        clippy::should_implement_trait,
        reason = "repeat calls after completion are a caller defect here, which the lenient std trait contract cannot express"
    )]
    pub fn next(&mut self) -> Option<Item> {
        match self.status {
            Status::Ready => {}
            Status::Invalid(_) => panic!("next() called on an invalid iterator"),
            Status::Done => panic!("next() called again after iteration completed"),
        }

        let Some(run) = self.runs.front_mut() else {
            self.status = Status::Done;
            return None;
        };

        let value = run.next;

        if value == run.last {
            // This run is exhausted; the next call continues with the following one.
            self.runs.pop_front();
        } else {
            run.next += run.step;
        }

        Some(value)
    }

    /// Returns the current state of the iterator without advancing it.
    ///
    /// Reading the status is idempotent and never panics.
    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }
}
