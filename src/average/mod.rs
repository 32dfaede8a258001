//! Sliding-window mean and standard deviation
//!
//! Both windows keep running sums that are adjusted on every add and every
//! eviction, so queries never rescan the window.
//!
//! # Example
//!
//! ```
//! use movingstats::average::{MovingAverage, MovingAverageDeviation};
//! use movingstats::traits::Window;
//!
//! let mut throughput = MovingAverage::<u32, u64>::new(3);
//! let mut jitter = MovingAverageDeviation::<f64, f64>::new(3);
//!
//! for (bytes, delay) in [(1500, 1.0), (900, 3.0), (1200, 2.0), (300, 4.0)] {
//!     throughput.add_sample(bytes);
//!     jitter.add_sample(delay);
//! }
//!
//! assert_eq!(throughput.mean::<u32>(), Ok(800));
//! assert_eq!(jitter.mean::<f64>(), Ok(3.0));
//! ```

mod deviation;
mod mean;
mod moments;

#[cfg(feature = "summary")]
pub(crate) use moments::RunningMoments;

pub use deviation::MovingAverageDeviation;
pub use mean::MovingAverage;
