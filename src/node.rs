//! Sources of the 48-bit node field.

use crate::{Error, RandSource};

const NODE_MASK: u64 = 0xffff_ffff_ffff;

/// The multicast bit of the first octet, set on random nodes so that they never collide with a
/// real IEEE 802 address.
const MULTICAST_BIT: u64 = 1 << 40;

/// Where a time-based generator takes its node field from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Node {
    /// A fresh random value, drawn every time the generator draws a new clock sequence.
    Random,
    /// A fixed value, usually the hardware address of the host. Only the low 48 bits are used.
    Fixed(u64),
}

impl Node {
    /// Looks up the hardware address of the host once and returns it as a fixed node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeUnavailable`] if no network interface reports a hardware address.
    pub fn hardware() -> Result<Self, Error> {
        hardware_node().map(Self::Fixed)
    }

    /// Returns the 48-bit node value to place in the next UUID.
    pub(crate) fn value(&self, rng: &impl RandSource) -> u64 {
        match *self {
            Self::Random => (rng.next_u64() & NODE_MASK) | MULTICAST_BIT,
            Self::Fixed(value) => value & NODE_MASK,
        }
    }
}

/// Returns the hardware (MAC) address of the host as a 48-bit integer.
///
/// # Errors
///
/// Returns [`Error::NodeUnavailable`] if the lookup fails or finds no address. The lookup is
/// not retried.
pub fn hardware_node() -> Result<u64, Error> {
    let result = match mac_address::get_mac_address() {
        Ok(Some(address)) => Ok(from_octets(address.bytes())),
        Ok(None) => Err(Error::NodeUnavailable(
            "no network interface reports a hardware address".to_owned(),
        )),
        Err(err) => Err(Error::NodeUnavailable(err.to_string())),
    };

    #[cfg(feature = "tracing")]
    if let Err(err) = &result {
        tracing::warn!(error = %err, "hardware node lookup failed");
    }

    result
}

fn from_octets(octets: [u8; 6]) -> u64 {
    octets.iter().fold(0, |acc, &b| (acc << 8) | b as u64)
}
