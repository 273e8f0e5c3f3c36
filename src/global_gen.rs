//! Default generators and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Layout, Node, TimeBasedGenerator, Uuid};
use inner::GlobalGenRng;

type GlobalGen = TimeBasedGenerator<GlobalGenRng>;

/// Returns the process-wide generator for `layout`, creating one with a random node if none
/// exists.
fn global_gen(layout: Layout) -> &'static GlobalGen {
    static V1: sync::OnceLock<GlobalGen> = sync::OnceLock::new();
    static V6: sync::OnceLock<GlobalGen> = sync::OnceLock::new();
    let cell = match layout {
        Layout::V1 => &V1,
        Layout::V6 => &V6,
    };
    cell.get_or_init(|| {
        TimeBasedGenerator::with_rand08(layout, Node::Random, inner::new_global_gen_rng())
    })
}

/// Generates a UUIDv1 object with a random node.
///
/// This function employs a process-wide generator, so UUIDs generated from any thread share
/// one clock sequence.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid6::uuid1();
/// println!("{uuid}"); // e.g., "c232ab00-9414-11ec-b3c8-9f6bdeced846"
/// ```
pub fn uuid1() -> Uuid {
    global_gen(Layout::V1).generate()
}

/// Generates a UUIDv6 object with a random node.
///
/// This function employs a process-wide generator, so UUIDs generated from any thread share
/// one clock sequence.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid6::uuid6();
/// println!("{uuid}"); // e.g., "1ec9414c-232a-6b00-b3c8-9f6bdeced846"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuid6::uuid6().to_string();
/// ```
pub fn uuid6() -> Uuid {
    global_gen(Layout::V6).generate()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::with_rand08::Adapter;

    /// The type alias for the random number generator of the global generators.
    ///
    /// The global generators currently employ [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    pub type GlobalGenRng = Adapter<ReseedingRng<ChaCha12Core, OsRng>>;

    pub fn new_global_gen_rng() -> ReseedingRng<ChaCha12Core, OsRng> {
        ReseedingRng::new(ChaCha12Core::from_entropy(), 1024 * 64, OsRng)
    }
}
