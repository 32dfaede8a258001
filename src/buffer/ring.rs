//! Circular buffer of the most recent samples

use core::iter::FusedIterator;

use crate::traits::{Window, WindowError};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Circular buffer holding the last `capacity` samples
///
/// Storage is allocated once. Until the buffer fills, samples are appended;
/// afterwards each push overwrites the oldest slot and returns the value it
/// held.
///
/// # Example
///
/// ```
/// use movingstats::buffer::RingBuffer;
///
/// let mut ring = RingBuffer::new(3);
/// for v in [10, 20, 30, 40] {
///     ring.push(v);
/// }
///
/// assert_eq!(ring.len(), 3);
/// assert_eq!(ring.oldest(), Some(&20));
/// assert_eq!(ring.newest(), Some(&40));
/// assert_eq!(ring.total_pushed(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    /// Maximum number of samples held
    capacity: usize,
    /// Sample storage, at most `capacity` long
    samples: Vec<T>,
    /// Slot holding the oldest sample (and the next one overwritten)
    head: usize,
    /// Samples pushed since construction or the last clear
    total_pushed: u64,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer holding up to `capacity` samples
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            capacity,
            samples: Vec::with_capacity(capacity),
            head: 0,
            total_pushed: 0,
        }
    }

    /// Create an empty buffer, rejecting a zero capacity
    pub fn try_new(capacity: usize) -> Result<Self, WindowError> {
        if capacity == 0 {
            return Err(WindowError::ZeroCapacity);
        }
        Ok(Self::new(capacity))
    }

    /// Append a sample
    ///
    /// Returns the evicted oldest sample if the buffer was already full.
    pub fn push(&mut self, value: T) -> Option<T> {
        self.total_pushed += 1;

        if self.samples.len() < self.capacity {
            self.samples.push(value);
            return None;
        }

        let evicted = core::mem::replace(&mut self.samples[self.head], value);
        self.head = (self.head + 1) % self.capacity;
        Some(evicted)
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Check if the next push will evict a sample
    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    /// Maximum number of samples held
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples pushed since construction or the last [`clear`](Self::clear)
    pub fn total_pushed(&self) -> u64 {
        self.total_pushed
    }

    /// Drop all samples, keeping the capacity and the allocation
    pub fn clear(&mut self) {
        self.samples.clear();
        self.head = 0;
        self.total_pushed = 0;
    }

    /// Sample at position `index`, where 0 is the oldest
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.samples.len() {
            return None;
        }
        Some(&self.samples[(self.head + index) % self.samples.len()])
    }

    /// Oldest sample still held
    pub fn oldest(&self) -> Option<&T> {
        self.get(0)
    }

    /// Most recently pushed sample
    pub fn newest(&self) -> Option<&T> {
        self.samples.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate oldest-first
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            front: 0,
            back: self.samples.len(),
        }
    }
}

impl<T: Copy + core::fmt::Debug> Window for RingBuffer<T> {
    type Sample = T;

    fn add_sample(&mut self, sample: T) {
        self.push(sample);
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn reset(&mut self) {
        self.clear();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.capacity * core::mem::size_of::<T>()
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Oldest-first iterator over a [`RingBuffer`]
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    buffer: &'a RingBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.buffer.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Serialize a window as its capacity and its samples, oldest first
#[cfg(feature = "serde")]
pub(crate) fn serialize_window<T, S>(
    name: &'static str,
    buffer: &RingBuffer<T>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: serde::Serialize,
    S: serde::Serializer,
{
    use serde::ser::SerializeStruct;

    struct Samples<'a, U>(&'a RingBuffer<U>);

    impl<U: serde::Serialize> serde::Serialize for Samples<'_, U> {
        fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
        where
            Ser: serde::Serializer,
        {
            serializer.collect_seq(self.0.iter())
        }
    }

    let mut state = serializer.serialize_struct(name, 2)?;
    state.serialize_field("capacity", &buffer.capacity)?;
    state.serialize_field("samples", &Samples(buffer))?;
    state.end()
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for RingBuffer<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_window("RingBuffer", self, serializer)
    }
}
