//! Integration with `rand` (v0.8) crate.

use std::sync::{Mutex, PoisonError};

use super::{RandSource, TimeBasedGenerator};
use crate::{Layout, Node, SystemClock};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types by serializing access
/// through a mutex.
#[derive(Debug, Default)]
pub struct Adapter<T>(Mutex<T>);

impl<T> Adapter<T> {
    /// Wraps a random number generator.
    pub const fn new(rng: T) -> Self {
        Self(Mutex::new(rng))
    }
}

impl<T: RngCore> RandSource for Adapter<T> {
    fn next_u64(&self) -> u64 {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_u64()
    }
}

impl<T: RngCore> TimeBasedGenerator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use uuid6::{Layout, Node, TimeBasedGenerator};
    ///
    /// let g = TimeBasedGenerator::with_rand08(Layout::V1, Node::Random, StdRng::from_entropy());
    /// println!("{}", g.generate());
    /// ```
    pub fn with_rand08(layout: Layout, node: Node, rng: T) -> Self {
        Self::with_rand_and_time_sources(layout, node, Adapter::new(rng), SystemClock)
    }
}

#[cfg(test)]
mod tests {
    use super::Adapter;
    use crate::{Layout, Node, RandSource, TimeBasedGenerator};
    use rand::{rngs::StdRng, SeedableRng};

    /// Draws the same sequence as the wrapped generator
    #[test]
    fn draws_the_same_sequence_as_the_wrapped_generator() {
        use rand::RngCore;
        let adapter = Adapter::new(StdRng::seed_from_u64(42));
        let mut reference = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(adapter.next_u64(), reference.next_u64());
        }
    }

    /// Builds generator that produces requested version
    #[test]
    fn builds_generator_that_produces_requested_version() {
        for layout in [Layout::V1, Layout::V6] {
            let g = TimeBasedGenerator::with_rand08(layout, Node::Random, StdRng::from_entropy());
            assert_eq!(g.generate().version(), Some(layout.version()));
        }
    }
}
