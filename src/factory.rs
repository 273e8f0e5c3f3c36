//! Stateless entry points that build generators, and conversions between time-based layouts.

use crate::{uuid4, Error, Layout, Node, TimeBasedGenerator, Uuid};

/// A generator returned by the factory functions.
///
/// Every call to [`type1`] or [`type6`] returns a generator with its own clock sequence state;
/// the state is shared only by the calls made on one returned value.
#[derive(Debug)]
pub enum Generator {
    /// A version 1 or version 6 generator.
    TimeBased(TimeBasedGenerator),
    /// The stateless version 4 generator.
    Random,
}

impl Generator {
    /// Generates a new UUID.
    pub fn generate(&self) -> Uuid {
        match self {
            Self::TimeBased(g) => g.generate(),
            Self::Random => uuid4(),
        }
    }

    /// Returns the version of the UUIDs this generator produces.
    pub fn version(&self) -> u8 {
        match self {
            Self::TimeBased(g) => g.layout().version(),
            Self::Random => 4,
        }
    }
}

impl Iterator for Generator {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for Generator {}

/// Creates a generator of version 1 UUIDs.
///
/// If `random_node` is `true`, a cryptographically strong random value is used for the node;
/// otherwise the hardware address of the host is looked up once, here.
///
/// # Errors
///
/// Returns [`Error::NodeUnavailable`] if `random_node` is `false` and the hardware address
/// cannot be resolved. There is no fallback to a random node.
///
/// # Examples
///
/// ```rust
/// let g = uuid6::type1(true)?;
/// assert_eq!(g.generate().version(), Some(1));
/// # Ok::<(), uuid6::Error>(())
/// ```
pub fn type1(random_node: bool) -> Result<Generator, Error> {
    time_based(Layout::V1, random_node)
}

/// Creates a generator of version 4 UUIDs. It holds no state.
pub fn type4() -> Generator {
    Generator::Random
}

/// Creates a generator of version 6 UUIDs, whose canonical strings sort in creation order.
///
/// See [`type1`] for the meaning of `random_node` and the errors.
///
/// # Examples
///
/// ```rust
/// let g = uuid6::type6(true)?;
/// let (a, b) = (g.generate(), g.generate());
/// assert!(a.to_string() < b.to_string());
/// # Ok::<(), uuid6::Error>(())
/// ```
pub fn type6(random_node: bool) -> Result<Generator, Error> {
    time_based(Layout::V6, random_node)
}

fn time_based(layout: Layout, random_node: bool) -> Result<Generator, Error> {
    let node = if random_node {
        Node::Random
    } else {
        Node::hardware()?
    };
    Ok(Generator::TimeBased(TimeBasedGenerator::new(layout, node)))
}

/// Converts a version 1 UUID to version 6, keeping the timestamp, clock sequence and node.
///
/// # Errors
///
/// Returns [`Error::UnsupportedVersion`] if `uuid` is not a version 1 UUID.
///
/// # Examples
///
/// ```rust
/// let v1: uuid6::Uuid = "c232ab00-9414-11ec-b3c8-9f6bdeced846".parse()?;
/// let v6 = uuid6::to_type6(v1)?;
/// assert_eq!(v6.to_string(), "1ec9414c-232a-6b00-b3c8-9f6bdeced846");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn to_type6(uuid: Uuid) -> Result<Uuid, Error> {
    relayout(uuid, Layout::V1, Layout::V6)
}

/// Converts a version 6 UUID back to version 1, keeping the timestamp, clock sequence and
/// node.
///
/// # Errors
///
/// Returns [`Error::UnsupportedVersion`] if `uuid` is not a version 6 UUID.
pub fn to_type1(uuid: Uuid) -> Result<Uuid, Error> {
    relayout(uuid, Layout::V6, Layout::V1)
}

fn relayout(uuid: Uuid, from: Layout, to: Layout) -> Result<Uuid, Error> {
    match uuid.version() {
        Some(version) if version == from.version() => {
            let (msb, lsb) = uuid.as_u64_pair();
            Ok(Uuid::from_u64_pair(to.encode(from.decode(msb)), lsb))
        }
        found => Err(Error::UnsupportedVersion {
            expected: from.version(),
            found,
        }),
    }
}
