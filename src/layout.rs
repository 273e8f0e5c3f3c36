//! Placement of the 60-bit timestamp and the version nibble in the most significant 64 bits.
//!
//! ```text
//! Version 1                                 Version 6
//!
//! |          time_low (32)          |       |          time_high (32)         |
//! |  time_mid (16)  | 0001 | hi (12) |       |  time_mid (16)  | 0110 | lo (12) |
//! ```
//!
//! Version 1 stores the low 32 bits of the timestamp first, so comparing two version 1 UUIDs as
//! integers does not order them by time. Version 6 stores the timestamp from its most
//! significant bit down, so the integer (and the canonical string) order follows the clock.

use crate::Uuid;

/// The largest timestamp representable in the 60-bit time fields.
pub(crate) const MAX_TICKS: u64 = (1 << 60) - 1;

/// Bit layout of a time-based UUID, selected once when a generator is built.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Layout {
    /// RFC 4122 version 1: `time_low`, `time_mid`, `time_hi_and_version`.
    V1,
    /// Version 6: `time_high`, `time_mid`, `time_low_and_version`.
    V6,
}

impl Layout {
    /// Returns the version number written by this layout.
    pub const fn version(self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V6 => 6,
        }
    }

    /// Returns the layout a UUID was built with, if it is a version 1 or version 6 UUID.
    pub(crate) fn of(uuid: &Uuid) -> Option<Self> {
        match uuid.version() {
            Some(1) => Some(Self::V1),
            Some(6) => Some(Self::V6),
            _ => None,
        }
    }

    /// Builds the most significant 64 bits from a count of 100-nanosecond ticks since the
    /// Gregorian epoch. Bits above the 60th are discarded.
    pub const fn encode(self, ticks: u64) -> u64 {
        let ticks = ticks & MAX_TICKS;
        match self {
            Self::V1 => {
                ((ticks & 0xffff_ffff) << 32)
                    | (((ticks >> 32) & 0xffff) << 16)
                    | 0x1000
                    | (ticks >> 48)
            }
            Self::V6 => {
                ((ticks >> 28) << 32) | (((ticks >> 12) & 0xffff) << 16) | 0x6000 | (ticks & 0xfff)
            }
        }
    }

    /// Extracts the 60-bit tick count from the most significant 64 bits, ignoring the version
    /// nibble.
    pub const fn decode(self, msb: u64) -> u64 {
        match self {
            Self::V1 => (msb >> 32) | (((msb >> 16) & 0xffff) << 32) | ((msb & 0xfff) << 48),
            Self::V6 => ((msb >> 32) << 28) | (((msb >> 16) & 0xffff) << 12) | (msb & 0xfff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Layout, MAX_TICKS};

    /// Places fields of the RFC 9562 test vector
    #[test]
    fn places_fields_of_rfc_9562_test_vector() {
        let ticks = 0x1ec_9414_c232_ab00;
        assert_eq!(Layout::V1.encode(ticks), 0xc232_ab00_9414_11ec);
        assert_eq!(Layout::V6.encode(ticks), 0x1ec9_414c_232a_6b00);
        assert_eq!(Layout::V1.decode(0xc232_ab00_9414_11ec), ticks);
        assert_eq!(Layout::V6.decode(0x1ec9_414c_232a_6b00), ticks);
    }

    /// Writes version nibble at bits 12 to 15
    #[test]
    fn writes_version_nibble_at_bits_12_to_15() {
        for ticks in [0, 1, 0xfff, 0x1000, MAX_TICKS] {
            for layout in [Layout::V1, Layout::V6] {
                let msb = layout.encode(ticks);
                assert_eq!((msb >> 12) & 0xf, layout.version() as u64);
                assert_eq!(layout.decode(msb), ticks);
            }
        }
    }

    /// Discards timestamp bits beyond 60
    #[test]
    fn discards_timestamp_bits_beyond_60() {
        for layout in [Layout::V1, Layout::V6] {
            assert_eq!(layout.encode(u64::MAX), layout.encode(MAX_TICKS));
            assert_eq!(layout.decode(layout.encode(u64::MAX)), MAX_TICKS);
        }
    }

    /// Keeps version 6 integer order in line with timestamp order
    #[test]
    fn keeps_version_6_integer_order_in_line_with_timestamp_order() {
        let mut samples: Vec<u64> = (0..60)
            .flat_map(|k| [(1u64 << k) - 1, 1 << k, (1 << k) + 1])
            .chain([MAX_TICKS])
            .collect();
        samples.sort_unstable();
        samples.dedup();
        for pair in samples.windows(2) {
            assert!(
                Layout::V6.encode(pair[0]) < Layout::V6.encode(pair[1]),
                "ticks {:#x}",
                pair[1]
            );
        }

        // version 1 places the low bits first and breaks the order
        assert!(Layout::V1.encode(0x1_0000_0000) < Layout::V1.encode(0xffff_ffff));
    }
}
