//! Sliding-window maximum and minimum
//!
//! Both windows keep a monotonic deque of candidate extrema alongside the
//! sample ring, so every add is O(1) amortized and every query O(1).
//!
//! # Example
//!
//! ```
//! use movingstats::extremum::{MovingMax, MovingMin};
//! use movingstats::traits::Window;
//!
//! let mut peak = MovingMax::new(4);
//! let mut floor = MovingMin::new(4);
//!
//! for latency_ms in [12, 48, 9, 15, 11, 10] {
//!     peak.add_sample(latency_ms);
//!     floor.add_sample(latency_ms);
//! }
//!
//! // Window holds [9, 15, 11, 10]
//! assert_eq!(peak.max(), Some(15));
//! assert_eq!(floor.min(), Some(9));
//! ```

mod deque;
mod moving;

pub use deque::{Extremum, Greatest, Least};
pub use moving::{MovingExtremum, MovingMax, MovingMin};

#[cfg(feature = "summary")]
pub(crate) use deque::MonotonicDeque;
