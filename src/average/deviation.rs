//! Sliding-window mean and population standard deviation

use core::fmt::Debug;
use core::marker::PhantomData;

use super::moments::RunningMoments;
use crate::buffer::{Iter, RingBuffer};
use crate::iteration::{IterationMode, Iterable, NoIteration};
use crate::numeric::{Accumulator, DeviationOutput, MeanOutput};
use crate::traits::{Window, WindowError};

/// Mean and population standard deviation of the last `capacity` samples
///
/// Maintains a running sum and a running sum of squares, both decremented
/// when a sample is evicted. Squares of integer and `Duration` samples are
/// summed exactly in 128 bits. The deviation is
/// `sqrt(Σx² / n - (Σx / n)²)`, which is O(1) per query but loses
/// precision when the variance is tiny compared to the squared mean.
///
/// Works over any [`Accumulator`], including [`Duration`](core::time::Duration):
///
/// ```
/// use core::time::Duration;
/// use movingstats::average::MovingAverageDeviation;
/// use movingstats::traits::Window;
///
/// let mut frame_times = MovingAverageDeviation::<Duration, Duration>::new(2);
/// frame_times.add_sample(Duration::from_millis(400));
/// frame_times.add_sample(Duration::from_millis(200));
///
/// assert_eq!(frame_times.mean::<Duration>(), Ok(Duration::from_millis(300)));
/// assert_eq!(frame_times.deviation::<Duration>(), Ok(Duration::from_millis(100)));
/// ```
#[derive(Clone, Debug)]
pub struct MovingAverageDeviation<T, S: Accumulator, I = NoIteration> {
    buffer: RingBuffer<T>,
    moments: RunningMoments<S>,
    _mode: PhantomData<I>,
}

impl<T, S, I> MovingAverageDeviation<T, S, I>
where
    T: Copy + Into<S>,
    S: Accumulator,
    I: IterationMode,
{
    fn from_buffer(buffer: RingBuffer<T>) -> Self {
        Self {
            buffer,
            moments: RunningMoments::new(),
            _mode: PhantomData,
        }
    }

    /// Mean of the current window as `R`
    ///
    /// Same semantics as [`MovingAverage::mean`](super::MovingAverage::mean).
    pub fn mean<R: MeanOutput<S>>(&self) -> Result<R, WindowError> {
        self.moments.mean(self.buffer.len())
    }

    /// Population standard deviation of the current window as `R`
    ///
    /// # Errors
    ///
    /// [`WindowError::EmptyWindow`] if no samples are held,
    /// [`WindowError::OutOfRange`] if the deviation does not fit in `R`.
    pub fn deviation<R: DeviationOutput<S>>(&self) -> Result<R, WindowError> {
        self.moments.deviation(self.buffer.len())
    }

    /// Population variance of the current window, in squared
    /// [`Accumulator::to_f64`] units
    pub fn variance(&self) -> Result<f64, WindowError> {
        self.moments.variance(self.buffer.len())
    }

    /// Running sum of the current window
    pub fn sum(&self) -> S {
        self.moments.sum()
    }
}

impl<T, S> MovingAverageDeviation<T, S, NoIteration>
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

impl<T, S> MovingAverageDeviation<T, S, Iterable>
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

impl<T, S, I> Window for MovingAverageDeviation<T, S, I>
where
    T: Copy + Into<S> + Debug,
    S: Accumulator,
    I: IterationMode,
{
    type Sample = T;

    fn add_sample(&mut self, sample: T) {
        if let Some(evicted) = self.buffer.push(sample) {
            self.moments.remove(evicted.into());
        }
        self.moments.add(sample.into());
    }

    fn count(&self) -> usize {
        self.buffer.len()
    }

    fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.moments.clear();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.buffer.capacity() * core::mem::size_of::<T>()
    }
}

impl<T, S, I> Extend<T> for MovingAverageDeviation<T, S, I>
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

impl<'a, T, S> IntoIterator for &'a MovingAverageDeviation<T, S, Iterable>
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
impl<T: serde::Serialize, S: Accumulator, I> serde::Serialize for MovingAverageDeviation<T, S, I> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        crate::buffer::serialize_window("MovingAverageDeviation", &self.buffer, serializer)
    }
}
