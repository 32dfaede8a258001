//! Opt-in iteration over a window's samples
//!
//! Windows carry an [`IterationMode`] type parameter that defaults to
//! [`NoIteration`]. Only windows built with [`Iterable`] expose `iter()`,
//! so code that just needs a running max or mean never depends on the
//! stored sample order.
//!
//! ```
//! # #[cfg(feature = "extremum")] {
//! use movingstats::extremum::MovingMax;
//! use movingstats::iteration::Iterable;
//! use movingstats::traits::Window;
//!
//! let mut max = MovingMax::<u32, Iterable>::new_iterable(3);
//! max.extend([5, 1, 4, 2]);
//!
//! let samples: Vec<u32> = max.iter().copied().collect();
//! assert_eq!(samples, [1, 4, 2]);
//! # }
//! ```

mod sealed {
    pub trait Sealed {}
}

/// Compile-time switch selecting whether a window can be iterated
pub trait IterationMode: sealed::Sealed + Clone + Copy + core::fmt::Debug + Default {}

/// Window samples can be iterated oldest-first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iterable;

/// Window samples are not exposed (the default)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoIteration;

impl sealed::Sealed for Iterable {}
impl sealed::Sealed for NoIteration {}

impl IterationMode for Iterable {}
impl IterationMode for NoIteration {}
