//! Time-based generator and related types.

use std::sync::atomic::{AtomicU16, AtomicU64, Ordering};

use rand::RngCore;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::layout::{Layout, MAX_TICKS};
use crate::{Node, SystemClock, TimeSource, Uuid};

pub mod with_rand08;


/// The largest value of the 14-bit clock sequence.
const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

/// The variant bits `10` in the top of the least significant 64 bits.
const VARIANT_BITS: u64 = 0b10 << 62;

/// A trait for random sources that feed the clock sequence seed and random nodes.
///
/// Takes `&self` so that one source can serve a generator shared across threads. Use
/// [`with_rand08::Adapter`] to plug in an arbitrary [`RngCore`].
pub trait RandSource {
    /// Returns the next random `u64`.
    fn next_u64(&self) -> u64;
}

/// A [`RandSource`] that reads the operating system's cryptographically secure generator.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn next_u64(&self) -> u64 {
        rand::rngs::OsRng.next_u64()
    }
}

/// When a generator draws a new clock sequence.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum SequencePolicy {
    /// Draw only when the clock has not advanced past the previous call, keeping the clock
    /// sequence and node of the previous draw while the timestamp alone keeps UUIDs apart.
    #[default]
    OnClockStall,
    /// Draw on every call.
    EveryCall,
}

/// Represents a version 1 or version 6 UUID generator that encapsulates a clock sequence and
/// guarantees distinct UUIDs from one instance even when the clock stalls or moves back.
///
/// A generator takes `&self` and keeps its state in atomics, so a single instance can be shared
/// across threads. Separate instances share nothing.
///
/// # Examples
///
/// ```rust
/// use std::{sync, thread};
/// use uuid6::{Layout, Node, TimeBasedGenerator};
///
/// let g = sync::Arc::new(TimeBasedGenerator::new(Layout::V6, Node::Random));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// # Uniqueness
///
/// `last_time`, the clock sequence and the cached least significant bits are updated by
/// separate atomic operations. Two threads racing through the same tick may both reuse the
/// cached bits before either redraws them, so uniqueness across threads holds with high
/// probability rather than absolutely. [`SequencePolicy::EveryCall`] narrows the window. The
/// clock sequence wraps to zero after `0x3fff` without signaling exhaustion.
#[derive(Debug)]
pub struct TimeBasedGenerator<R = OsRandom, T = SystemClock> {
    layout: Layout,
    node: Node,
    policy: SequencePolicy,
    last_time: AtomicU64,
    clock_seq: AtomicU16,
    lsb: AtomicU64,

    /// The random number generator used by the generator.
    rng: R,

    /// The clock used by the generator.
    time: T,
}

impl TimeBasedGenerator {
    /// Creates a generator that reads the system clock and the operating system's random
    /// number generator.
    pub fn new(layout: Layout, node: Node) -> Self {
        Self::with_rand_and_time_sources(layout, node, OsRandom, SystemClock)
    }
}

impl<R: RandSource, T: TimeSource> TimeBasedGenerator<R, T> {
    /// Creates a generator with the specified random number generator and clock.
    ///
    /// The clock sequence starts at a random value below `0x2000`.
    pub fn with_rand_and_time_sources(layout: Layout, node: Node, rng: R, time: T) -> Self {
        let clock_seq = rng.next_u64() as u16 & (MAX_CLOCK_SEQ >> 1);
        Self {
            layout,
            node,
            policy: SequencePolicy::default(),
            last_time: AtomicU64::new(0),
            clock_seq: AtomicU16::new(clock_seq),
            lsb: AtomicU64::new(0),
            rng,
            time,
        }
    }

    /// Replaces the policy that decides when a new clock sequence is drawn.
    pub fn with_policy(mut self, policy: SequencePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the layout of the UUIDs this generator produces.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the node source of this generator.
    pub fn node(&self) -> Node {
        self.node
    }

    /// Generates a new UUID from the current time.
    pub fn generate(&self) -> Uuid {
        self.generate_core(self.time.gregorian_ticks())
    }

    /// Generates a new UUID from `ticks`, the count of 100-nanosecond intervals since the
    /// Gregorian epoch. Bits above the 60th are discarded.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_core(&self, ticks: u64) -> Uuid {
        let ticks = ticks & MAX_TICKS;
        let last_time = self.last_time.swap(ticks, Ordering::AcqRel);
        let reseed = self.policy == SequencePolicy::EveryCall || last_time >= ticks;

        #[cfg(feature = "tracing")]
        if last_time > ticks {
            tracing::debug!(last_time, ticks, "clock moved backwards");
        }

        let mut current = self.lsb.load(Ordering::Acquire);
        let lsb = loop {
            if current != 0 && !reseed {
                break current;
            }
            let next = self.least_sig_bits();
            match self
                .lsb
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => break next,
                Err(actual) => current = actual,
            }
        };

        Uuid::from_u64_pair(self.layout.encode(ticks), lsb)
    }

    /// Draws a new clock sequence and assembles the variant, clock sequence and node fields.
    fn least_sig_bits(&self) -> u64 {
        let clock_seq = self.next_clock_seq() as u64;
        VARIANT_BITS | (clock_seq << 48) | self.node.value(&self.rng)
    }

    fn next_clock_seq(&self) -> u16 {
        match self
            .clock_seq
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |v| Some(successor(v)))
        {
            Ok(prev) | Err(prev) => successor(prev),
        }
    }
}

const fn successor(clock_seq: u16) -> u16 {
    if clock_seq >= MAX_CLOCK_SEQ {
        0
    } else {
        clock_seq + 1
    }
}

/// Supports operations as an infinite iterator that produces a new UUID for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid6::{Layout, Node, TimeBasedGenerator};
///
/// TimeBasedGenerator::new(Layout::V6, Node::Random)
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{i}] {e}"));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for TimeBasedGenerator<R, T> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> std::iter::FusedIterator for TimeBasedGenerator<R, T> {}
