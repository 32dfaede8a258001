//! Running sum and sum of squares of a window

use crate::math;
use crate::numeric::{Accumulator, DeviationOutput, MeanOutput, SquareSum};
use crate::traits::WindowError;

/// First and second power sums over the samples currently in a window
///
/// The owning window calls [`add`](Self::add) for every new sample and
/// [`remove`](Self::remove) for every evicted one. Integer and `Duration`
/// squares are summed exactly, so evicting a large sample leaves no residue.
#[derive(Clone, Debug)]
pub(crate) struct RunningMoments<S: Accumulator> {
    sum: S,
    sum_of_squares: S::Square,
}

impl<S: Accumulator> RunningMoments<S> {
    pub(crate) fn new() -> Self {
        Self {
            sum: S::default(),
            sum_of_squares: S::Square::default(),
        }
    }

    #[inline]
    pub(crate) fn add(&mut self, sample: S) {
        self.sum = self.sum + sample;
        self.sum_of_squares = self.sum_of_squares.accumulate(sample.square());
    }

    #[inline]
    pub(crate) fn remove(&mut self, sample: S) {
        self.sum = self.sum - sample;
        self.sum_of_squares = self.sum_of_squares.remove(sample.square());
    }

    pub(crate) fn clear(&mut self) {
        self.sum = S::default();
        self.sum_of_squares = S::Square::default();
    }

    pub(crate) fn sum(&self) -> S {
        self.sum
    }

    pub(crate) fn mean<R: MeanOutput<S>>(&self, count: usize) -> Result<R, WindowError> {
        let count = non_empty(count)?;
        R::from_mean(self.sum, count).ok_or(WindowError::OutOfRange)
    }

    pub(crate) fn variance(&self, count: usize) -> Result<f64, WindowError> {
        let count = non_empty(count)?;
        Ok(math::population_variance(
            self.sum.to_f64(),
            self.sum_of_squares.as_f64(),
            count,
        ))
    }

    pub(crate) fn deviation<R: DeviationOutput<S>>(&self, count: usize) -> Result<R, WindowError> {
        let stddev = math::sqrt(self.variance(count)?);
        R::from_deviation(stddev).ok_or(WindowError::OutOfRange)
    }
}

fn non_empty(count: usize) -> Result<usize, WindowError> {
    match count {
        0 => Err(WindowError::EmptyWindow),
        n => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    #[test]
    fn test_eviction_of_large_integer_is_exact() {
        let mut moments = RunningMoments::<i64>::new();
        moments.add(100_000_001);
        moments.add(1);
        moments.remove(100_000_001);
        moments.add(2);

        assert_eq!(moments.sum(), 3);
        assert_eq!(moments.variance(2), Ok(0.25));
        assert_eq!(moments.deviation::<f64>(2), Ok(0.5));
    }

    #[test]
    fn test_clear() {
        let mut moments = RunningMoments::<Duration>::new();
        moments.add(Duration::from_secs(5));
        moments.clear();

        assert_eq!(moments.sum(), Duration::ZERO);
        assert_eq!(moments.mean::<Duration>(0), Err(WindowError::EmptyWindow));
        assert_eq!(moments.variance(0), Err(WindowError::EmptyWindow));
    }
}
