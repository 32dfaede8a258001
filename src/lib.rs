//! # Movingstats
//!
//! Fixed-capacity sliding-window statistics for Rust.
//!
//! Every window keeps the most recent `capacity` samples of a stream and
//! maintains its statistic incrementally, so adding a sample and querying
//! the result are both O(1) (amortized for max/min).
//!
//! ## Features
//!
//! - **Moving extrema**: [`MovingMax`](extremum::MovingMax) and
//!   [`MovingMin`](extremum::MovingMin) over a monotonic deque
//! - **Moving average**: [`MovingAverage`](average::MovingAverage) with a
//!   caller-chosen accumulator type
//! - **Moving deviation**: [`MovingAverageDeviation`](average::MovingAverageDeviation),
//!   mean plus population standard deviation
//! - **Generic samples**: integers, floats and `Duration`
//! - **Opt-in iteration**: windows built with [`Iterable`](iteration::Iterable)
//!   expose their samples oldest-first
//!
//! ## Quick Start
//!
//! ```rust
//! use movingstats::prelude::*;
//!
//! let mut peak = MovingMax::new(3);
//! for v in [100, 1000, 1, 3, 4] {
//!     peak.add_sample(v);
//! }
//! assert_eq!(peak.max(), Some(4));
//!
//! let mut avg = MovingAverage::<i32, i64>::new(4);
//! avg.extend([1, 2, 3, 4, 101]);
//! assert_eq!(avg.mean::<f64>(), Ok(27.5));
//! ```
//!
//! ## Empty windows
//!
//! Queries never invent a value for an empty window: `max()`/`min()` return
//! `None` and `mean()`/`deviation()` return
//! [`WindowError::EmptyWindow`](traits::WindowError::EmptyWindow).
//!
//! ## Feature Flags
//!
//! Window families (pick what you need):
//! - `extremum` (default): moving max and min
//! - `average` (default): moving average and deviation
//! - `summary`: all statistics over one shared ring
//! - `full`: Enable all window families
//!
//! Platform features:
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core building blocks always available
pub mod buffer;
pub mod iteration;
pub mod numeric;
pub mod traits;

mod math;

#[cfg(feature = "extremum")]
#[cfg_attr(docsrs, doc(cfg(feature = "extremum")))]
pub mod extremum;

#[cfg(feature = "average")]
#[cfg_attr(docsrs, doc(cfg(feature = "average")))]
pub mod average;

#[cfg(feature = "summary")]
#[cfg_attr(docsrs, doc(cfg(feature = "summary")))]
pub mod summary;

pub mod prelude {
    pub use crate::buffer::RingBuffer;
    pub use crate::iteration::{Iterable, NoIteration};
    pub use crate::traits::*;

    #[cfg(feature = "extremum")]
    pub use crate::extremum::{MovingMax, MovingMin};

    #[cfg(feature = "average")]
    pub use crate::average::{MovingAverage, MovingAverageDeviation};

    #[cfg(feature = "summary")]
    pub use crate::summary::MovingSummary;
}

pub use buffer::RingBuffer;
pub use traits::{Window, WindowError};

#[cfg(feature = "extremum")]
pub use extremum::{MovingMax, MovingMin};

#[cfg(feature = "average")]
pub use average::{MovingAverage, MovingAverageDeviation};

#[cfg(feature = "summary")]
pub use summary::MovingSummary;
