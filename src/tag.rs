use core::fmt;

use crate::profile::EncodingRules;
use crate::wire;
use crate::{Error, ErrorCode};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Class of an X.690 tag (bits 8-7 of the identifier octet).
///
/// Classes namespace tag numbers: Universal tag 2 is INTEGER everywhere,
/// while Application or Context-specific tag 2 means whatever the enclosing
/// protocol says it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Class {
    /// Standard ASN.1 types (`00`).
    Universal,
    /// Application-wide types (`01`).
    Application,
    /// Context-dependent types, e.g. within a SEQUENCE (`10`).
    ContextSpecific,
    /// Private-use types (`11`).
    Private,
}

impl Class {
    #[inline]
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Universal,
            1 => Self::Application,
            2 => Self::ContextSpecific,
            _ => Self::Private,
        }
    }

    #[inline]
    pub(crate) const fn to_bits(self) -> u8 {
        (self as u8) << 6
    }
}

/// Sentinel value of the low five identifier bits signaling the
/// high-tag-number form.
const HIGH_TAG_FORM: u8 = 0x1f;
/// Indicator bit for constructed form encoding (vs. primitive form).
const CONSTRUCTED_FLAG: u8 = 0x20;
/// Continuation bit of high-tag-number and OID varint octets.
const CONTINUATION_FLAG: u8 = 0x80;

/// An X.690 tag: class, constructed flag, and tag number.
///
/// Tag numbers 0–30 encode in a single identifier octet; larger numbers use
/// the high-tag-number form, a base-128 big-endian varint. Numbers are
/// bounded to `u64`; a varint encoding a larger value is rejected as
/// malformed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Tag class.
    pub class: Class,
    /// Whether the value is constructed (contains nested elements) rather
    /// than primitive (raw content octets).
    pub constructed: bool,
    /// Tag number.
    pub number: u64,
}

impl Tag {
    /// The end-of-contents marker tag terminating indefinite-length values.
    pub const END_OF_CONTENTS: Self = Self::universal(0);
    /// Universal BOOLEAN.
    pub const BOOLEAN: Self = Self::universal(1);
    /// Universal INTEGER.
    pub const INTEGER: Self = Self::universal(2);
    /// Universal BIT STRING.
    pub const BIT_STRING: Self = Self::universal(3);
    /// Universal OCTET STRING.
    pub const OCTET_STRING: Self = Self::universal(4);
    /// Universal NULL.
    pub const NULL: Self = Self::universal(5);
    /// Universal OBJECT IDENTIFIER.
    pub const OBJECT_IDENTIFIER: Self = Self::universal(6);
    /// Universal UTF8String.
    pub const UTF8_STRING: Self = Self::universal(12);
    /// Universal SEQUENCE (always constructed).
    pub const SEQUENCE: Self = Self::universal(16).constructed();
    /// Universal SET (always constructed).
    pub const SET: Self = Self::universal(17).constructed();
    /// Universal PrintableString.
    pub const PRINTABLE_STRING: Self = Self::universal(19);
    /// Universal IA5String.
    pub const IA5_STRING: Self = Self::universal(22);
    /// Universal UTCTime.
    pub const UTC_TIME: Self = Self::universal(23);

    /// Construct a tag from its three fields.
    #[inline]
    #[must_use]
    pub const fn new(class: Class, constructed: bool, number: u64) -> Self {
        Self {
            class,
            constructed,
            number,
        }
    }

    /// A primitive Universal-class tag.
    #[inline]
    #[must_use]
    pub const fn universal(number: u64) -> Self {
        Self::new(Class::Universal, false, number)
    }

    /// A primitive Application-class tag.
    #[inline]
    #[must_use]
    pub const fn application(number: u64) -> Self {
        Self::new(Class::Application, false, number)
    }

    /// A primitive Context-specific tag.
    #[inline]
    #[must_use]
    pub const fn context(number: u64) -> Self {
        Self::new(Class::ContextSpecific, false, number)
    }

    /// A primitive Private-class tag.
    #[inline]
    #[must_use]
    pub const fn private(number: u64) -> Self {
        Self::new(Class::Private, false, number)
    }

    /// The same tag with the constructed flag set.
    #[inline]
    #[must_use]
    pub const fn constructed(self) -> Self {
        Self {
            constructed: true,
            ..self
        }
    }

    /// The same tag with the constructed flag cleared.
    #[inline]
    #[must_use]
    pub const fn primitive(self) -> Self {
        Self {
            constructed: false,
            ..self
        }
    }

    /// Parse tag octets at `*pos`, advancing past them.
    ///
    /// Under DER/CER a high-tag-number form that could have used the short
    /// form, or that carries a leading padding octet, is rejected as
    /// non-minimal.
    pub(crate) fn parse(
        data: &[u8],
        pos: &mut usize,
        end: usize,
        rules: EncodingRules,
    ) -> Result<Self, Error> {
        let off = *pos;
        let first = wire::read_u8(data, pos, end)?;
        let class = Class::from_bits(first >> 6);
        let constructed = first & CONSTRUCTED_FLAG != 0;

        let low = first & HIGH_TAG_FORM;
        if low < HIGH_TAG_FORM {
            return Ok(Self::new(class, constructed, u64::from(low)));
        }

        let mut number: u64 = 0;
        let mut leading = true;
        loop {
            let octet = wire::read_u8(data, pos, end)
                .map_err(|e| Error::new(ErrorCode::MalformedTag, e.offset))?;
            if leading && octet == CONTINUATION_FLAG && rules.requires_minimal() {
                // A padding octet means the number was encodable in fewer octets.
                return Err(Error::new(ErrorCode::MalformedTag, off));
            }
            leading = false;
            if number > u64::MAX >> 7 {
                return Err(Error::new(ErrorCode::MalformedTag, off));
            }
            number = (number << 7) | u64::from(octet & 0x7f);
            if octet & CONTINUATION_FLAG == 0 {
                break;
            }
        }
        if rules.requires_minimal() && number < u64::from(HIGH_TAG_FORM) {
            return Err(Error::new(ErrorCode::MalformedTag, off));
        }
        Ok(Self::new(class, constructed, number))
    }

    /// Number of octets [`Self::encode_into`] emits.
    #[must_use]
    pub const fn encoded_len(self) -> usize {
        if self.number < HIGH_TAG_FORM as u64 {
            1
        } else {
            1 + wire::base128_len(self.number)
        }
    }

    /// Emit the tag octets, choosing the short or high-tag-number form by the
    /// tag number.
    #[cfg(feature = "alloc")]
    pub(crate) fn encode_into(self, out: &mut Vec<u8>) {
        let head = self.class.to_bits() | if self.constructed { CONSTRUCTED_FLAG } else { 0 };
        if self.number < u64::from(HIGH_TAG_FORM) {
            out.push(head | self.number as u8);
        } else {
            out.push(head | HIGH_TAG_FORM);
            wire::write_base128(out, self.number);
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tag({:?}, {}, {})",
            self.class,
            if self.constructed {
                "constructed"
            } else {
                "primitive"
            },
            self.number
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
