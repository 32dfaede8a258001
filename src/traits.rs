//! Core traits for sliding-window aggregators
//!
//! Every window implements the base [`Window`] trait. Queries specific to a
//! window family (max, min, mean, deviation) are inherent methods on the
//! window types themselves.

use core::fmt::Debug;

/// Error returned by fallible window construction and queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// A window was constructed with a capacity of zero
    ZeroCapacity,
    /// A statistic was requested from a window holding no samples
    EmptyWindow,
    /// The statistic cannot be represented in the requested return type
    OutOfRange,
}

impl core::fmt::Display for WindowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WindowError::ZeroCapacity => write!(f, "window capacity must be positive"),
            WindowError::EmptyWindow => write!(f, "window holds no samples"),
            WindowError::OutOfRange => {
                write!(f, "statistic is out of range for the requested type")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WindowError {}

/// Core trait for all fixed-capacity sliding windows
pub trait Window: Clone + Debug {
    /// The type of sample this window aggregates
    type Sample: Copy;

    /// Push a sample, evicting the oldest one once the window is full
    fn add_sample(&mut self, sample: Self::Sample);

    /// Number of samples currently held, never more than [`capacity`](Window::capacity)
    fn count(&self) -> usize;

    /// Maximum number of samples held, fixed at construction
    fn capacity(&self) -> usize;

    /// Return to the state of a freshly constructed window of the same capacity
    fn reset(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Check if the window holds no samples
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Check if the next sample will evict the oldest one
    fn is_full(&self) -> bool {
        self.count() == self.capacity()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            WindowError::ZeroCapacity.to_string(),
            "window capacity must be positive"
        );
        assert_eq!(WindowError::EmptyWindow.to_string(), "window holds no samples");
        assert_eq!(
            WindowError::OutOfRange.to_string(),
            "statistic is out of range for the requested type"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&WindowError::EmptyWindow);
    }
}
