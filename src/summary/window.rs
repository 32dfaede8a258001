//! Max, min, mean and deviation over a single ring

use core::fmt::Debug;
use core::marker::PhantomData;

use crate::average::RunningMoments;
use crate::buffer::{Iter, RingBuffer};
use crate::extremum::{Greatest, Least, MonotonicDeque};
use crate::iteration::{IterationMode, Iterable, NoIteration};
use crate::numeric::{Accumulator, DeviationOutput, MeanOutput};
use crate::traits::{Window, WindowError};

/// All window statistics over the last `capacity` samples
///
/// Every query returns exactly what the dedicated window
/// ([`MovingMax`](crate::extremum::MovingMax),
/// [`MovingMin`](crate::extremum::MovingMin),
/// [`MovingAverageDeviation`](crate::average::MovingAverageDeviation)) would
/// return for the same samples.
#[derive(Clone, Debug)]
pub struct MovingSummary<T, S: Accumulator, I = NoIteration> {
    buffer: RingBuffer<T>,
    maxima: MonotonicDeque<T, Greatest>,
    minima: MonotonicDeque<T, Least>,
    moments: RunningMoments<S>,
    _mode: PhantomData<I>,
}

impl<T, S, I> MovingSummary<T, S, I>
where
    T: Copy + PartialOrd + Into<S>,
    S: Accumulator,
    I: IterationMode,
{
    fn from_buffer(buffer: RingBuffer<T>) -> Self {
        Self {
            buffer,
            maxima: MonotonicDeque::new(),
            minima: MonotonicDeque::new(),
            moments: RunningMoments::new(),
            _mode: PhantomData,
        }
    }

    /// Largest sample in the current window, `None` if empty
    pub fn max(&self) -> Option<T> {
        self.maxima.front()
    }

    /// Smallest sample in the current window, `None` if empty
    pub fn min(&self) -> Option<T> {
        self.minima.front()
    }

    /// Mean of the current window as `R`
    pub fn mean<R: MeanOutput<S>>(&self) -> Result<R, WindowError> {
        self.moments.mean(self.buffer.len())
    }

    /// Population standard deviation of the current window as `R`
    pub fn deviation<R: DeviationOutput<S>>(&self) -> Result<R, WindowError> {
        self.moments.deviation(self.buffer.len())
    }

    /// Population variance of the current window
    pub fn variance(&self) -> Result<f64, WindowError> {
        self.moments.variance(self.buffer.len())
    }

    /// Running sum of the current window
    pub fn sum(&self) -> S {
        self.moments.sum()
    }
}

impl<T, S> MovingSummary<T, S, NoIteration>
where
    T: Copy + PartialOrd + Into<S>,
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

impl<T, S> MovingSummary<T, S, Iterable>
where
    T: Copy + PartialOrd + Into<S>,
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

impl<T, S, I> Window for MovingSummary<T, S, I>
where
    T: Copy + PartialOrd + Into<S> + Debug,
    S: Accumulator,
    I: IterationMode,
{
    type Sample = T;

    fn add_sample(&mut self, sample: T) {
        let capacity = self.buffer.capacity();

        if let Some(evicted) = self.buffer.push(sample) {
            self.moments.remove(evicted.into());
        }
        self.moments.add(sample.into());

        self.maxima.push(sample, capacity);
        self.minima.push(sample, capacity);
    }

    fn count(&self) -> usize {
        self.buffer.len()
    }

    fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.maxima.clear();
        self.minima.clear();
        self.moments.clear();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + self.buffer.capacity() * core::mem::size_of::<T>()
            + self.maxima.allocated_bytes()
            + self.minima.allocated_bytes()
    }
}

impl<T, S, I> Extend<T> for MovingSummary<T, S, I>
where
    T: Copy + PartialOrd + Into<S> + Debug,
    S: Accumulator,
    I: IterationMode,
{
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for sample in iter {
            self.add_sample(sample);
        }
    }
}

impl<'a, T, S> IntoIterator for &'a MovingSummary<T, S, Iterable>
where
    T: Copy + PartialOrd + Into<S>,
    S: Accumulator,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S: Accumulator, I> serde::Serialize for MovingSummary<T, S, I> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        crate::buffer::serialize_window("MovingSummary", &self.buffer, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::average::MovingAverageDeviation;
    use crate::extremum::{MovingMax, MovingMin};

    #[test]
    fn test_agrees_with_dedicated_windows() {
        let samples: Vec<i32> = (0..400).map(|i| (i * 131 + 7) % 97 - 48).collect();
        for capacity in [1, 3, 10, 50] {
            let mut summary = MovingSummary::<i32, i64>::new(capacity);
            let mut max = MovingMax::new(capacity);
            let mut min = MovingMin::new(capacity);
            let mut dev = MovingAverageDeviation::<i32, i64>::new(capacity);

            for &v in &samples {
                summary.add_sample(v);
                max.add_sample(v);
                min.add_sample(v);
                dev.add_sample(v);

                assert_eq!(summary.max(), max.max());
                assert_eq!(summary.min(), min.min());
                assert_eq!(summary.mean::<i32>(), dev.mean::<i32>());
                assert_eq!(summary.mean::<f64>(), dev.mean::<f64>());
                assert_eq!(summary.deviation::<f64>(), dev.deviation::<f64>());
                assert_eq!(summary.count(), dev.count());
            }
        }
    }

    #[test]
    fn test_large_sample_leaves_no_residue() {
        let mut summary = MovingSummary::<u64, u64>::new(4);
        summary.extend([4_000_000_000_000, 2, 4, 6, 8]);

        assert_eq!(summary.max(), Some(8));
        assert_eq!(summary.min(), Some(2));
        assert_eq!(summary.sum(), 20);
        assert_eq!(summary.mean::<u64>(), Ok(5));
        assert_eq!(summary.variance(), Ok(5.0));
    }

    #[test]
    fn test_empty() {
        let summary = MovingSummary::<f64, f64>::new(2);
        assert_eq!(summary.max(), None);
        assert_eq!(summary.min(), None);
        assert_eq!(summary.mean::<f64>(), Err(WindowError::EmptyWindow));
        assert_eq!(summary.deviation::<f64>(), Err(WindowError::EmptyWindow));
        assert_eq!(summary.variance(), Err(WindowError::EmptyWindow));
    }

    #[test]
    fn test_reset_matches_fresh() {
        let mut summary = MovingSummary::<f64, f64>::new(3);
        summary.extend([5.0, 1.0, 9.0, 2.0]);
        summary.reset();

        assert_eq!(summary.count(), 0);
        assert_eq!(summary.max(), None);

        summary.extend([4.0, 2.0]);
        assert_eq!(summary.max(), Some(4.0));
        assert_eq!(summary.min(), Some(2.0));
        assert_eq!(summary.mean::<f64>(), Ok(3.0));
        assert_eq!(summary.variance(), Ok(1.0));
    }

    #[test]
    fn test_iteration() {
        let mut summary = MovingSummary::<u16, u64, Iterable>::new_iterable(2);
        summary.extend([7, 8, 9]);
        let samples: Vec<u16> = (&summary).into_iter().copied().collect();
        assert_eq!(samples, vec![8, 9]);
    }
}
