use std::{fmt, str};

use crate::layout::Layout;

/// Represents a Universally Unique IDentifier.
///
/// The value is stored as 16 big-endian bytes, so the derived ordering matches the ordering of
/// the canonical string representation.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// The variant field of a [`Uuid`], determined by the top bits of octet 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xxx`: reserved for NCS backward compatibility (includes the Nil UUID).
    Var0,
    /// `10xx`: the RFC 4122 family used by every generator in this crate.
    Var10,
    /// `110x`: reserved for Microsoft backward compatibility.
    Var110,
    /// `111x`: reserved for future definition (includes the Max UUID).
    Var111,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates an object from the most significant and least significant 64-bit halves.
    pub const fn from_u64_pair(msb: u64, lsb: u64) -> Self {
        Self((((msb as u128) << 64) | lsb as u128).to_be_bytes())
    }

    /// Returns the most significant and least significant 64-bit halves.
    pub const fn as_u64_pair(&self) -> (u64, u64) {
        let value = u128::from_be_bytes(self.0);
        ((value >> 64) as u64, value as u64)
    }

    /// Returns the most significant 64 bits (time and version fields).
    pub const fn most_significant_bits(&self) -> u64 {
        self.as_u64_pair().0
    }

    /// Returns the least significant 64 bits (variant, clock sequence and node fields).
    pub const fn least_significant_bits(&self) -> u64 {
        self.as_u64_pair().1
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000..=0b011 => Variant::Var0,
            0b100..=0b101 => Variant::Var10,
            0b110 => Variant::Var110,
            _ => Variant::Var111,
        }
    }

    /// Returns the version field value of the UUID, or `None` if the UUID does not have the
    /// variant field value of `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 60-bit count of 100-nanosecond intervals since the Gregorian epoch encoded
    /// in a version 1 or version 6 UUID.
    pub fn gregorian_ticks(&self) -> Option<u64> {
        Layout::of(self).map(|layout| layout.decode(self.most_significant_bits()))
    }

    /// Returns the 14-bit clock sequence of a version 1 or version 6 UUID.
    pub fn clock_sequence(&self) -> Option<u16> {
        Layout::of(self).map(|_| ((self.least_significant_bits() >> 48) & 0x3fff) as u16)
    }

    /// Returns the 48-bit node of a version 1 or version 6 UUID.
    pub fn node(&self) -> Option<u64> {
        Layout::of(self).map(|_| self.least_significant_bits() & 0xffff_ffff_ffff)
    }

    /// Returns the 8-4-4-4-12 lowercase hexadecimal representation, formatted by the `uuid`
    /// crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::Uuid;
    ///
    /// let x = "1ec9414c-232a-6b00-b3c8-9f6bdeced846".parse::<Uuid>()?;
    /// assert_eq!(x.encode().to_string(), "1ec9414c-232a-6b00-b3c8-9f6bdeced846");
    /// # Ok::<(), uuid6::ParseError>(())
    /// ```
    pub fn encode(&self) -> uuid::fmt::Hyphenated {
        uuid::Uuid::from_bytes(self.0).hyphenated()
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.encode(), f)
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from any textual form accepted by [`uuid::Uuid::parse_str`].
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(src)
            .map(Self::from)
            .map_err(|_| ParseError {})
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl From<Uuid> for uuid::Uuid {
    fn from(src: Uuid) -> Self {
        uuid::Uuid::from_bytes(src.0)
    }
}

impl From<uuid::Uuid> for Uuid {
    fn from(src: uuid::Uuid) -> Self {
        Self(src.into_bytes())
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid string representation")
    }
}

impl std::error::Error for ParseError {}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                let mut buffer = uuid::Uuid::encode_buffer();
                serializer.serialize_str(self.encode().encode_lower(&mut buffer))
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "1ec9414c-232a-6b00-b3c8-9f6bdeced846",
                    &[
                        0x1e, 0xc9, 0x41, 0x4c, 0x23, 0x2a, 0x6b, 0x00, 0xb3, 0xc8, 0x9f, 0x6b,
                        0xde, 0xce, 0xd8, 0x46,
                    ],
                ),
                (
                    "c232ab00-9414-11ec-b3c8-9f6bdeced846",
                    &[
                        0xc2, 0x32, 0xab, 0x00, 0x94, 0x14, 0x11, 0xec, 0xb3, 0xc8, 0x9f, 0x6b,
                        0xde, 0xce, 0xd8, 0x46,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::Str(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}
