//! Combined sliding-window summary
//!
//! [`MovingSummary`] answers max, min, mean and deviation queries over one
//! shared sample ring, for callers that need several statistics of the same
//! stream without storing it once per window.
//!
//! # Example
//!
//! ```
//! use movingstats::summary::MovingSummary;
//! use movingstats::traits::Window;
//!
//! let mut rtt = MovingSummary::<u32, u64>::new(4);
//! rtt.extend([30, 32, 90, 31, 29]);
//!
//! // Window holds [32, 90, 31, 29]
//! assert_eq!(rtt.max(), Some(90));
//! assert_eq!(rtt.min(), Some(29));
//! assert_eq!(rtt.mean::<f64>(), Ok(45.5));
//! ```

mod window;

pub use window::MovingSummary;
