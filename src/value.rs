use core::fmt;
use core::str::FromStr;

use alloc::string::String;
use alloc::vec::Vec;

use crate::{Error, ErrorCode};

/// A semantic value produced by a type handler for a primitive element.
///
/// The registry's built-in handlers produce these for the standard universal
/// types; custom handlers may reuse any variant that fits their content model
/// (a vendor-specific counter type would decode to [`Value::Integer`], say).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Value {
    /// BOOLEAN.
    Boolean(bool),
    /// INTEGER, as a signed two's-complement value.
    Integer(i128),
    /// BIT STRING.
    BitString(BitString),
    /// OCTET STRING.
    OctetString(Vec<u8>),
    /// NULL.
    Null,
    /// OBJECT IDENTIFIER.
    Oid(Oid),
    /// A character string (UTF8String, PrintableString, IA5String).
    Text(String),
}

/// A BIT STRING value: a byte buffer plus the count of unused trailing bits
/// in the final byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    unused_bits: u8,
    data: Vec<u8>,
}

impl BitString {
    /// Construct a bit string from its bytes and unused-bit count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if `unused_bits > 7`, or if `data` is empty
    /// with a nonzero unused-bit count.
    pub fn new(unused_bits: u8, data: Vec<u8>) -> Result<Self, Error> {
        if unused_bits > 7 || (data.is_empty() && unused_bits != 0) {
            return Err(Error::new(ErrorCode::InvalidValue, 0));
        }
        Ok(Self { unused_bits, data })
    }

    /// Count of unused trailing bits in the final byte (0–7).
    #[inline]
    #[must_use]
    pub const fn unused_bits(&self) -> u8 {
        self.unused_bits
    }

    /// The bit string bytes.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of bits in the string.
    #[inline]
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.data.len() * 8 - self.unused_bits as usize
    }
}

/// An OBJECT IDENTIFIER: a sequence of at least two arcs.
///
/// The wire format packs the first two arcs into a single subidentifier
/// (`40 * first + second`); the wrapper enforces the arc constraints that
/// packing implies (first arc 0–2, second arc below 40 when the first is 0
/// or 1).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: Vec<u64>,
}

impl Oid {
    /// Construct an OID from its arcs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if fewer than two arcs are given, the first arc
    /// exceeds 2, or the second arc is 40 or more while the first is 0 or 1.
    pub fn new(arcs: Vec<u64>) -> Result<Self, Error> {
        let valid = match arcs.as_slice() {
            [first, second, ..] => *first <= 2 && (*first == 2 || *second < 40),
            _ => false,
        };
        if valid {
            Ok(Self { arcs })
        } else {
            Err(Error::new(ErrorCode::InvalidValue, 0))
        }
    }

    /// The arcs of the identifier.
    #[inline]
    #[must_use]
    pub fn arcs(&self) -> &[u64] {
        &self.arcs
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{arc}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Oid {
    type Err = Error;

    /// Parse a dotted-decimal string such as `"1.2.840.113549"`.
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut arcs = Vec::new();
        for part in s.split('.') {
            let arc = part
                .parse::<u64>()
                .map_err(|_| Error::new(ErrorCode::InvalidValue, 0))?;
            arcs.push(arc);
        }
        Self::new(arcs)
    }
}
