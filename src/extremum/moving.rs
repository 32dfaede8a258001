//! Sliding-window maximum and minimum

use core::fmt::Debug;
use core::marker::PhantomData;

use super::deque::{Extremum, Greatest, Least, MonotonicDeque};
use crate::buffer::{Iter, RingBuffer};
use crate::iteration::{IterationMode, Iterable, NoIteration};
use crate::traits::{Window, WindowError};

/// Sliding-window extremum tracker
///
/// Use it through the [`MovingMax`] and [`MovingMin`] aliases. Each
/// [`add_sample`](Window::add_sample) costs O(1) amortized and the
/// extremum query is O(1), using a monotonic deque of candidates next to
/// the sample ring.
#[derive(Clone, Debug)]
pub struct MovingExtremum<T, O, I = NoIteration> {
    buffer: RingBuffer<T>,
    candidates: MonotonicDeque<T, O>,
    _mode: PhantomData<I>,
}

/// Maximum of the last `capacity` samples
///
/// # Example
///
/// ```
/// use movingstats::extremum::MovingMax;
/// use movingstats::traits::Window;
///
/// let mut max = MovingMax::new(3);
/// let mut seen = Vec::new();
/// for v in [100, 1000, 1, 3, 4] {
///     max.add_sample(v);
///     seen.push(max.max().unwrap());
/// }
/// assert_eq!(seen, [100, 1000, 1000, 1000, 4]);
/// ```
pub type MovingMax<T, I = NoIteration> = MovingExtremum<T, Greatest, I>;

/// Minimum of the last `capacity` samples
///
/// # Example
///
/// ```
/// use movingstats::extremum::MovingMin;
/// use movingstats::traits::Window;
///
/// let mut min = MovingMin::new(2);
/// min.extend([4.5, 2.0, 3.0]);
/// assert_eq!(min.min(), Some(2.0));
///
/// min.add_sample(6.0);
/// assert_eq!(min.min(), Some(3.0));
/// ```
pub type MovingMin<T, I = NoIteration> = MovingExtremum<T, Least, I>;

impl<T: Copy + PartialOrd, O: Extremum, I: IterationMode> MovingExtremum<T, O, I> {
    fn from_buffer(buffer: RingBuffer<T>) -> Self {
        Self {
            buffer,
            candidates: MonotonicDeque::new(),
            _mode: PhantomData,
        }
    }

    /// The tracked extremum of the current window, `None` if empty
    pub fn extremum(&self) -> Option<T> {
        self.candidates.front()
    }

    /// Most recently added sample
    pub fn last(&self) -> Option<T> {
        self.buffer.newest().copied()
    }
}

impl<T: Copy + PartialOrd, O: Extremum> MovingExtremum<T, O, NoIteration> {
    /// Create an empty window over the last `capacity` samples
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero
    pub fn new(capacity: usize) -> Self {
        Self::from_buffer(RingBuffer::new(capacity))
    }

    /// Create an empty window, rejecting a zero capacity
    pub fn try_new(capacity: usize) -> Result<Self, WindowError> {
        Ok(Self::from_buffer(RingBuffer::try_new(capacity)?))
    }
}

impl<T: Copy + PartialOrd, O: Extremum> MovingExtremum<T, O, Iterable> {
    /// Create an empty window whose samples can be iterated
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero
    pub fn new_iterable(capacity: usize) -> Self {
        Self::from_buffer(RingBuffer::new(capacity))
    }

    /// Create an empty iterable window, rejecting a zero capacity
    pub fn try_new_iterable(capacity: usize) -> Result<Self, WindowError> {
        Ok(Self::from_buffer(RingBuffer::try_new(capacity)?))
    }

    /// Iterate the samples in the window, oldest first
    pub fn iter(&self) -> Iter<'_, T> {
        self.buffer.iter()
    }
}

impl<T: Copy + PartialOrd, I: IterationMode> MovingExtremum<T, Greatest, I> {
    /// Largest sample in the current window, `None` if empty
    pub fn max(&self) -> Option<T> {
        self.extremum()
    }
}

impl<T: Copy + PartialOrd, I: IterationMode> MovingExtremum<T, Least, I> {
    /// Smallest sample in the current window, `None` if empty
    pub fn min(&self) -> Option<T> {
        self.extremum()
    }
}

impl<T, O, I> Window for MovingExtremum<T, O, I>
where
    T: Copy + PartialOrd + Debug,
    O: Extremum,
    I: IterationMode,
{
    type Sample = T;

    fn add_sample(&mut self, sample: T) {
        self.buffer.push(sample);
        self.candidates.push(sample, self.buffer.capacity());
    }

    fn count(&self) -> usize {
        self.buffer.len()
    }

    fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.candidates.clear();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + self.buffer.capacity() * core::mem::size_of::<T>()
            + self.candidates.allocated_bytes()
    }
}

impl<T, O, I> Extend<T> for MovingExtremum<T, O, I>
where
    T: Copy + PartialOrd + Debug,
    O: Extremum,
    I: IterationMode,
{
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for sample in iter {
            self.add_sample(sample);
        }
    }
}

impl<'a, T: Copy + PartialOrd, O: Extremum> IntoIterator for &'a MovingExtremum<T, O, Iterable> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, O: Extremum, I> serde::Serialize for MovingExtremum<T, O, I> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::buffer::serialize_window(O::NAME, &self.buffer, serializer)
    }
}
