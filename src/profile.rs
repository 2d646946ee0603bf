//! Encoding-rule profiles for X.690.
//!
//! The three rule sets share the TLV wire format but differ in which forms
//! they accept and produce:
//!
//! - **BER** accepts everything: non-minimal length octets, redundant
//!   high-tag-number forms, and indefinite-length constructed values.
//! - **DER** is fully canonical: definite lengths only, every tag and length
//!   in its minimal form.
//! - **CER** shares DER's minimality rules but mandates the indefinite form
//!   for universal constructed string types whose content exceeds
//!   [`CER_SEGMENT_LIMIT`] octets.
//!
//! On decode this crate treats CER like DER (definite, minimal); the CER
//! segmenting rule only affects encoding.

use crate::tag::{Class, Tag};

/// Content-size threshold above which CER mandates the indefinite length form
/// for universal constructed string types (X.690 §9.2: 1000 octets).
pub const CER_SEGMENT_LIMIT: usize = 1000;

/// One of the X.690 encoding rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingRules {
    /// Basic Encoding Rules: the most permissive set, allowing alternative
    /// encodings and indefinite-length constructed values.
    Ber,
    /// Canonical Encoding Rules: minimal forms, with indefinite length
    /// mandated for large constructed string values.
    Cer,
    /// Distinguished Encoding Rules: minimal forms, definite lengths only.
    Der,
}

impl EncodingRules {
    /// Returns `true` iff non-minimal tag and length encodings must be
    /// rejected as malformed.
    #[inline]
    #[must_use]
    pub const fn requires_minimal(self) -> bool {
        matches!(self, Self::Cer | Self::Der)
    }

    /// Returns `true` iff the indefinite length form is accepted on decode.
    #[inline]
    #[must_use]
    pub const fn accepts_indefinite(self) -> bool {
        matches!(self, Self::Ber)
    }

    /// Returns `true` iff the indefinite length form may be produced on
    /// encode at all.
    #[inline]
    #[must_use]
    pub const fn permits_indefinite_encode(self) -> bool {
        matches!(self, Self::Ber | Self::Cer)
    }

    /// Returns `true` iff this rule set mandates the indefinite length form
    /// for an element with the given tag and content size.
    ///
    /// Only CER mandates a form: universal constructed string types whose
    /// content exceeds [`CER_SEGMENT_LIMIT`] octets.
    #[inline]
    #[must_use]
    pub const fn forces_indefinite(self, tag: Tag, content_len: usize) -> bool {
        matches!(self, Self::Cer)
            && tag.constructed
            && matches!(tag.class, Class::Universal)
            && is_string_type(tag.number)
            && content_len > CER_SEGMENT_LIMIT
    }

    /// Returns `true` iff an element carrying the indefinite length form may
    /// be encoded under this rule set.
    ///
    /// BER always permits it; CER permits it exactly where it mandates it;
    /// DER never does.
    #[inline]
    #[must_use]
    pub const fn permits_indefinite_for(self, tag: Tag, content_len: usize) -> bool {
        match self {
            Self::Ber => true,
            Self::Cer => self.forces_indefinite(tag, content_len),
            Self::Der => false,
        }
    }
}

/// Universal tag numbers of the X.690 string types subject to the CER
/// segmenting rule: BIT STRING, OCTET STRING, and the character string types.
pub(crate) const fn is_string_type(number: u64) -> bool {
    matches!(number, 3 | 4 | 12 | 18..=22 | 25..=30)
}
