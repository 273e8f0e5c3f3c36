use std::fmt;

/// All error variants that this crate can emit.
///
/// Neither variant is transient: retrying the same call yields the same error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A conversion was given a UUID of a version it does not accept.
    UnsupportedVersion {
        /// The version the conversion accepts.
        expected: u8,
        /// The version of the input, or `None` if its variant is not `10`.
        found: Option<u8>,
    },

    /// The hardware address of the host could not be resolved for a node-derived generator.
    NodeUnavailable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion {
                expected,
                found: Some(found),
            } => write!(f, "only version {expected} is supported, got version {found}"),
            Self::UnsupportedVersion {
                expected,
                found: None,
            } => write!(f, "only version {expected} is supported, got a non-RFC 4122 UUID"),
            Self::NodeUnavailable(reason) => write!(f, "hardware node unavailable: {reason}"),
        }
    }
}

impl std::error::Error for Error {}
