//! Monotonic deque of extremum candidates

use core::fmt::Debug;
use core::marker::PhantomData;

#[cfg(feature = "std")]
use std::collections::VecDeque;

#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;

mod sealed {
    pub trait Sealed {}
}

/// Which end of the ordering a window tracks
pub trait Extremum: sealed::Sealed + Clone + Copy + Debug + Default {
    /// Name used when serializing the window
    const NAME: &'static str;

    /// Whether `newer` makes `older` useless as a future extremum
    fn dominates<T: PartialOrd>(newer: &T, older: &T) -> bool;
}

/// Track the largest sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greatest;

/// Track the smallest sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Least;

impl sealed::Sealed for Greatest {}
impl sealed::Sealed for Least {}

impl Extremum for Greatest {
    const NAME: &'static str = "MovingMax";

    #[inline]
    fn dominates<T: PartialOrd>(newer: &T, older: &T) -> bool {
        older <= newer
    }
}

impl Extremum for Least {
    const NAME: &'static str = "MovingMin";

    #[inline]
    fn dominates<T: PartialOrd>(newer: &T, older: &T) -> bool {
        older >= newer
    }
}

/// Candidates for the window extremum, ordered by value and by age
///
/// Entries are `(value, insertion index)`. Values are monotonic from the
/// front (current extremum) to the back (newest sample), and indices
/// increase toward the back. Each sample is pushed and popped at most once,
/// so pushes cost O(1) amortized.
#[derive(Clone, Debug)]
pub(crate) struct MonotonicDeque<T, O> {
    entries: VecDeque<(T, u64)>,
    /// Index given to the next sample; survives `clear`
    next_index: u64,
    _order: PhantomData<O>,
}

impl<T: Copy + PartialOrd, O: Extremum> MonotonicDeque<T, O> {
    pub(crate) fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            next_index: 0,
            _order: PhantomData,
        }
    }

    /// Record a sample for a window of `capacity` samples
    pub(crate) fn push(&mut self, value: T, capacity: usize) {
        let index = self.next_index;
        self.next_index += 1;

        // Dominated candidates can never become the extremum again
        while let Some(&(back, _)) = self.entries.back() {
            if O::dominates(&value, &back) {
                self.entries.pop_back();
            } else {
                break;
            }
        }
        self.entries.push_back((value, index));

        // Expire candidates that have slid out of the window
        while let Some(&(_, front_index)) = self.entries.front() {
            if front_index + capacity as u64 <= index {
                self.entries.pop_front();
            } else {
                break;
            }
        }
    }

    /// Current extremum
    pub(crate) fn front(&self) -> Option<T> {
        self.entries.front().map(|&(value, _)| value)
    }

    /// Drop all candidates; insertion indices keep counting
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn allocated_bytes(&self) -> usize {
        self.entries.capacity() * core::mem::size_of::<(T, u64)>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_deque_is_non_increasing() {
        let mut deque = MonotonicDeque::<i32, Greatest>::new();
        for v in [5, 3, 4, 1, 2] {
            deque.push(v, 10);
        }
        let values: Vec<i32> = deque.entries.iter().map(|&(v, _)| v).collect();
        assert_eq!(values, vec![5, 4, 2]);
        assert_eq!(deque.front(), Some(5));
    }

    #[test]
    fn test_min_deque_is_non_decreasing() {
        let mut deque = MonotonicDeque::<i32, Least>::new();
        for v in [5, 3, 4, 1, 2] {
            deque.push(v, 10);
        }
        let values: Vec<i32> = deque.entries.iter().map(|&(v, _)| v).collect();
        assert_eq!(values, vec![1, 2]);
        assert_eq!(deque.front(), Some(1));
    }

    #[test]
    fn test_equal_values_keep_newest() {
        let mut deque = MonotonicDeque::<i32, Greatest>::new();
        deque.push(7, 3);
        deque.push(7, 3);
        deque.push(7, 3);
        assert_eq!(deque.entries.len(), 1);
        assert_eq!(deque.entries.front(), Some(&(7, 2)));
    }

    #[test]
    fn test_front_expires_out_of_window() {
        let mut deque = MonotonicDeque::<i32, Greatest>::new();
        deque.push(9, 2);
        deque.push(1, 2);
        assert_eq!(deque.front(), Some(9));
        deque.push(0, 2);
        assert_eq!(deque.front(), Some(1));
    }

    #[test]
    fn test_capacity_one_keeps_single_entry() {
        let mut deque = MonotonicDeque::<i32, Least>::new();
        for v in [3, 8, -2, 4] {
            deque.push(v, 1);
            assert_eq!(deque.entries.len(), 1);
            assert_eq!(deque.front(), Some(v));
        }
    }

    #[test]
    fn test_clear_keeps_counting() {
        let mut deque = MonotonicDeque::<i32, Greatest>::new();
        deque.push(1, 2);
        deque.push(2, 2);
        deque.clear();
        assert_eq!(deque.front(), None);
        assert_eq!(deque.next_index, 2);

        deque.push(3, 2);
        assert_eq!(deque.entries.front(), Some(&(3, 2)));
    }
}
