//! Sliding-window arithmetic mean

use core::fmt::Debug;
use core::marker::PhantomData;

use crate::buffer::{Iter, RingBuffer};
use crate::iteration::{IterationMode, Iterable, NoIteration};
use crate::numeric::{Accumulator, MeanOutput};
use crate::traits::{Window, WindowError};

/// Mean of the last `capacity` samples
///
/// Keeps a running sum in the accumulator type `S`, subtracting each
/// evicted sample, so adds and queries are O(1). `S` has no default: pick
/// one wide enough to hold `capacity` samples, such as `i64` for `i32`
/// samples.
///
/// # Example
///
/// ```
/// use movingstats::average::MovingAverage;
/// use movingstats::traits::Window;
///
/// let mut avg = MovingAverage::<i32, i64>::new(4);
/// let mut means = Vec::new();
/// for v in [1, 2, 3, 4, 101] {
///     avg.add_sample(v);
///     means.push(avg.mean::<f64>().unwrap());
/// }
/// assert_eq!(means, [1.0, 1.5, 2.0, 2.5, 27.5]);
///
/// // Integer results truncate toward zero
/// assert_eq!(avg.mean::<i32>(), Ok(27));
/// ```
///
/// The accumulator must be named:
///
/// ```compile_fail
/// use movingstats::average::MovingAverage;
///
/// let avg = MovingAverage::<i32>::new(2);
/// ```
#[derive(Clone, Debug)]
pub struct MovingAverage<T, S, I = NoIteration> {
    buffer: RingBuffer<T>,
    /// Sum of the samples currently in the window
    sum: S,
    _mode: PhantomData<I>,
}

impl<T, S, I> MovingAverage<T, S, I>
where
    T: Copy + Into<S>,
    S: Accumulator,
    I: IterationMode,
{
    fn from_buffer(buffer: RingBuffer<T>) -> Self {
        Self {
            buffer,
            sum: S::default(),
            _mode: PhantomData,
        }
    }

    /// Mean of the current window as `R`
    ///
    /// Integer `R` truncates toward zero; floating-point `R` divides
    /// exactly.
    ///
    /// # Errors
    ///
    /// [`WindowError::EmptyWindow`] if no samples are held,
    /// [`WindowError::OutOfRange`] if the mean does not fit in `R`.
    pub fn mean<R: MeanOutput<S>>(&self) -> Result<R, WindowError> {
        let count = self.buffer.len();
        if count == 0 {
            return Err(WindowError::EmptyWindow);
        }
        R::from_mean(self.sum, count).ok_or(WindowError::OutOfRange)
    }

    /// Running sum of the current window
    pub fn sum(&self) -> S {
        self.sum
    }
}

impl<T, S> MovingAverage<T, S, NoIteration>
where
    T: Copy + Into<S>,
    S: Accumulator,
{
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

impl<T, S> MovingAverage<T, S, Iterable>
where
    T: Copy + Into<S>,
    S: Accumulator,
{
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

impl<T, S, I> Window for MovingAverage<T, S, I>
where
    T: Copy + Into<S> + Debug,
    S: Accumulator,
    I: IterationMode,
{
    type Sample = T;

    fn add_sample(&mut self, sample: T) {
        if let Some(evicted) = self.buffer.push(sample) {
            self.sum = self.sum - evicted.into();
        }
        self.sum = self.sum + sample.into();
    }

    fn count(&self) -> usize {
        self.buffer.len()
    }

    fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.sum = S::default();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.buffer.capacity() * core::mem::size_of::<T>()
    }
}

impl<T, S, I> Extend<T> for MovingAverage<T, S, I>
where
    T: Copy + Into<S> + Debug,
    S: Accumulator,
    I: IterationMode,
{
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for sample in iter {
            self.add_sample(sample);
        }
    }
}

impl<'a, T, S> IntoIterator for &'a MovingAverage<T, S, Iterable>
where
    T: Copy + Into<S>,
    S: Accumulator,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S, I> serde::Serialize for MovingAverage<T, S, I> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        crate::buffer::serialize_window("MovingAverage", &self.buffer, serializer)
    }
}
