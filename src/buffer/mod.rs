//! Fixed-capacity sample storage
//!
//! Every window keeps its samples in a [`RingBuffer`], which retains the
//! most recent `capacity` samples and hands back the evicted one on
//! overflow so running sums can be decremented.
//!
//! # Example
//!
//! ```
//! use movingstats::buffer::RingBuffer;
//!
//! let mut ring = RingBuffer::new(2);
//! assert_eq!(ring.push(1), None);
//! assert_eq!(ring.push(2), None);
//! assert_eq!(ring.push(3), Some(1));
//!
//! assert_eq!(ring.len(), 2);
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [2, 3]);
//! ```

mod ring;

pub use ring::{Iter, RingBuffer};

#[cfg(feature = "serde")]
pub(crate) use ring::serialize_window;
