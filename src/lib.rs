//! Time-based UUID generators for version 1 and the sortable version 6, with a version 1 to
//! version 6 converter
//!
//! ```rust
//! let g = uuid6::type6(true)?;
//! let uuid = g.generate();
//! println!("{}", uuid); // e.g. "1ec9414c-232a-6b00-b3c8-9f6bdeced846"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! # Ok::<(), uuid6::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122) and
//! [draft-peabody-dispatch-new-uuid-format](https://datatracker.ietf.org/doc/html/draft-peabody-dispatch-new-uuid-format).
//!
//! # Field and bit layout
//!
//! Version 6 UUIDs produced by this crate have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_high                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_low        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - `time_high`, `time_mid` and `time_low` hold, from the most significant bit down, the
//!   60-bit count of 100-nanosecond intervals since 1582-10-15T00:00:00Z.
//! - The 4-bit `ver` field is set at `0110`.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq` field starts at a random value and is incremented, wrapping to
//!   zero, whenever the clock has not advanced since the previous UUID.
//! - The 48-bit `node` field is the hardware address of the host or a cryptographically strong
//!   random number with the multicast bit set.
//!
//! Version 1 UUIDs carry the same fields with the timestamp split low-to-high (`time_low`,
//! `time_mid`, `ver` = `0001`, `time_high`), so only version 6 strings sort by creation time.
//! [`to_type6`] rearranges a version 1 UUID into version 6 without losing information.
//!
//! A generator keeps its clock sequence in atomics and can be shared across threads. Distinct
//! generators share nothing, so the guarantees hold per instance, not per process.
//!
//! # Other features
//!
//! This library also supports the generation of UUID version 4:
//!
//! ```rust
//! let uuid = uuid6::uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! ```
//!
//! # Crate features
//!
//! - `global_gen` (default): process-wide [`uuid1()`] and [`uuid6()`] functions.
//! - `serde`: `Serialize` and `Deserialize` for [`Uuid`].
//! - `tracing`: trace spans around generation and events on clock regression and hardware
//!   node lookup failure.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid, Variant};

mod error;
pub use error::Error;

pub mod clock;
pub use clock::{SystemClock, TimeSource};

mod layout;
pub use layout::Layout;

mod node;
pub use node::{hardware_node, Node};

pub mod generator;
pub use generator::{OsRandom, RandSource, SequencePolicy, TimeBasedGenerator};

mod factory;
pub use factory::{to_type1, to_type6, type1, type4, type6, Generator};

mod v4;
pub use v4::uuid4;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid1, uuid6};
