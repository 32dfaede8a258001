//! Numeric capabilities required by the running aggregates
//!
//! Averages and deviations are generic over the sample type `T` and a
//! running-sum type `S`. Samples widen into the accumulator through
//! `T: Into<S>`, so a window over `i32` samples can keep an `i64` sum and
//! never overflow on realistic window sizes.
//!
//! Queries are generic over their return type: a mean can be read back as a
//! truncated integer, as a floating-point value, or (for `Duration`
//! accumulators) as a `Duration`.

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

use num_traits::{NumCast, ToPrimitive};

use crate::math;

/// Running-sum type for averages and deviations
///
/// Implemented for every primitive integer, `f32`, `f64` and [`Duration`].
pub trait Accumulator:
    Copy + Default + Debug + PartialEq + Add<Output = Self> + Sub<Output = Self>
{
    /// Type of the running sum of squares
    ///
    /// Integers up to 64 bits square exactly into `i128`/`u128`, `Duration`
    /// squares its nanoseconds into `u128`, floats stay in `f64`.
    type Square: SquareSum;

    /// Magnitude of the value as `f64`, used for float results
    ///
    /// `Duration` reports nanoseconds.
    fn to_f64(self) -> f64;

    /// Square of the value's magnitude
    fn square(self) -> Self::Square;

    /// Divide by a sample count
    ///
    /// Integer accumulators truncate toward zero, including for negative
    /// sums.
    fn div_count(self, count: usize) -> Self;
}

/// Running sum of squared samples
///
/// Integer sums use wrapping arithmetic: a square that overflows on the
/// way in is cancelled exactly by the matching subtraction on eviction, so
/// the total is exact whenever the window's true sum of squares fits.
pub trait SquareSum: Copy + Default + Debug + PartialEq {
    /// Add a squared sample
    fn accumulate(self, square: Self) -> Self;

    /// Remove a previously added squared sample
    fn remove(self, square: Self) -> Self;

    /// Value as `f64`
    fn as_f64(self) -> f64;
}

macro_rules! impl_integer_square_sum {
    ($($t:ty),*) => {$(
        impl SquareSum for $t {
            #[inline]
            fn accumulate(self, square: Self) -> Self {
                self.wrapping_add(square)
            }

            #[inline]
            fn remove(self, square: Self) -> Self {
                self.wrapping_sub(square)
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_integer_square_sum!(i128, u128);

impl SquareSum for f64 {
    #[inline]
    fn accumulate(self, square: Self) -> Self {
        self + square
    }

    #[inline]
    fn remove(self, square: Self) -> Self {
        self - square
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

macro_rules! impl_signed_accumulator {
    ($($t:ty => $sq:ty),*) => {$(
        impl Accumulator for $t {
            type Square = $sq;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn square(self) -> $sq {
                (self as $sq) * (self as $sq)
            }

            #[inline]
            fn div_count(self, count: usize) -> Self {
                // i128 division truncates toward zero and the quotient's
                // magnitude never exceeds self's
                (self as i128 / count as i128) as $t
            }
        }
    )*};
}

macro_rules! impl_unsigned_accumulator {
    ($($t:ty => $sq:ty),*) => {$(
        impl Accumulator for $t {
            type Square = $sq;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn square(self) -> $sq {
                (self as $sq) * (self as $sq)
            }

            #[inline]
            fn div_count(self, count: usize) -> Self {
                (self as u128 / count as u128) as $t
            }
        }
    )*};
}

macro_rules! impl_float_accumulator {
    ($($t:ty),*) => {$(
        impl Accumulator for $t {
            type Square = f64;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn square(self) -> f64 {
                (self as f64) * (self as f64)
            }

            #[inline]
            fn div_count(self, count: usize) -> Self {
                self / count as $t
            }
        }
    )*};
}

// 128-bit squares would not fit any wider integer
impl_signed_accumulator!(i8 => i128, i16 => i128, i32 => i128, i64 => i128, isize => i128, i128 => f64);
impl_unsigned_accumulator!(u8 => u128, u16 => u128, u32 => u128, u64 => u128, usize => u128, u128 => f64);
impl_float_accumulator!(f32, f64);

const NANOS_PER_SEC: u128 = 1_000_000_000;

impl Accumulator for Duration {
    type Square = u128;

    #[inline]
    fn to_f64(self) -> f64 {
        self.as_nanos() as f64
    }

    #[inline]
    fn square(self) -> u128 {
        let nanos = self.as_nanos();
        nanos.wrapping_mul(nanos)
    }

    fn div_count(self, count: usize) -> Self {
        let nanos = self.as_nanos() / count as u128;
        Duration::new((nanos / NANOS_PER_SEC) as u64, (nanos % NANOS_PER_SEC) as u32)
    }
}

/// Return type of a mean query over accumulator `S`
///
/// Floating-point outputs divide exactly. Integer outputs use the
/// accumulator's truncating division, then convert; `None` means the mean
/// does not fit in `Self`.
pub trait MeanOutput<S: Accumulator>: Sized {
    /// Build the mean of `count` samples summing to `sum`
    fn from_mean(sum: S, count: usize) -> Option<Self>;
}

/// Return type of a standard-deviation query over accumulator `S`
///
/// The deviation arrives as `f64` in the units of [`Accumulator::to_f64`].
pub trait DeviationOutput<S: Accumulator>: Sized {
    /// Convert a standard deviation into `Self`
    fn from_deviation(stddev: f64) -> Option<Self>;
}

impl<S: Accumulator> MeanOutput<S> for f64 {
    #[inline]
    fn from_mean(sum: S, count: usize) -> Option<Self> {
        Some(sum.to_f64() / count as f64)
    }
}

impl<S: Accumulator> MeanOutput<S> for f32 {
    #[inline]
    fn from_mean(sum: S, count: usize) -> Option<Self> {
        Some((sum.to_f64() / count as f64) as f32)
    }
}

impl<S: Accumulator> DeviationOutput<S> for f64 {
    #[inline]
    fn from_deviation(stddev: f64) -> Option<Self> {
        Some(stddev)
    }
}

impl<S: Accumulator> DeviationOutput<S> for f32 {
    #[inline]
    fn from_deviation(stddev: f64) -> Option<Self> {
        Some(stddev as f32)
    }
}

macro_rules! impl_integer_outputs {
    ($($t:ty),*) => {$(
        impl<S: Accumulator + ToPrimitive> MeanOutput<S> for $t {
            #[inline]
            fn from_mean(sum: S, count: usize) -> Option<Self> {
                <$t as NumCast>::from(sum.div_count(count))
            }
        }

        impl<S: Accumulator> DeviationOutput<S> for $t {
            #[inline]
            fn from_deviation(stddev: f64) -> Option<Self> {
                <$t as NumCast>::from(stddev)
            }
        }
    )*};
}

impl_integer_outputs!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl MeanOutput<Duration> for Duration {
    #[inline]
    fn from_mean(sum: Duration, count: usize) -> Option<Self> {
        Some(sum.div_count(count))
    }
}

impl DeviationOutput<Duration> for Duration {
    fn from_deviation(stddev: f64) -> Option<Self> {
        let nanos = <u64 as NumCast>::from(math::round(stddev))?;
        Some(Duration::from_nanos(nanos))
    }
}
