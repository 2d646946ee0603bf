use crate::profile::EncodingRules;
use crate::wire;
use crate::{Error, ErrorCode};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Length octet signaling the indefinite form.
pub(crate) const INDEFINITE_OCTET: u8 = 0x80;
/// Reserved length-of-length value (X.690 §8.1.3.5 c).
const RESERVED_COUNT: u8 = 0x7f;

/// The length field of a TLV element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Length {
    /// A definite content length in octets.
    Definite(usize),
    /// The indefinite form: content runs until an end-of-contents marker.
    /// Only valid for constructed elements under BER (and, on encode, for
    /// CER's large-string rule).
    Indefinite,
}

impl Length {
    /// The definite length value, if this is the definite form.
    #[inline]
    #[must_use]
    pub const fn definite(self) -> Option<usize> {
        match self {
            Self::Definite(n) => Some(n),
            Self::Indefinite => None,
        }
    }

    /// Returns `true` iff this is the indefinite form.
    #[inline]
    #[must_use]
    pub const fn is_indefinite(self) -> bool {
        matches!(self, Self::Indefinite)
    }

    /// Parse length octets at `*pos`, advancing past them.
    ///
    /// `constructed` is the constructed flag of the enclosing tag: the
    /// indefinite form is only valid for constructed elements, and only when
    /// the rules accept it on decode. Missing length octets are
    /// `MalformedLength`; under DER/CER a long form that fits the short form
    /// or carries leading zero octets is `MalformedLength`.
    pub(crate) fn parse(
        data: &[u8],
        pos: &mut usize,
        end: usize,
        rules: EncodingRules,
        constructed: bool,
    ) -> Result<Self, Error> {
        let off = *pos;
        let first = wire::read_u8(data, pos, end)
            .map_err(|e| Error::new(ErrorCode::MalformedLength, e.offset))?;

        if first & 0x80 == 0 {
            return Ok(Self::Definite(first as usize));
        }

        let count = first & 0x7f;
        if count == 0 {
            if !constructed || !rules.accepts_indefinite() {
                return Err(Error::new(ErrorCode::MalformedLength, off));
            }
            return Ok(Self::Indefinite);
        }
        if count == RESERVED_COUNT {
            return Err(Error::new(ErrorCode::MalformedLength, off));
        }

        let octets = wire::read_exact(data, pos, end, count as usize)
            .map_err(|e| Error::new(ErrorCode::MalformedLength, e.offset))?;

        if rules.requires_minimal() {
            if octets[0] == 0 {
                return Err(Error::new(ErrorCode::MalformedLength, off));
            }
            if count == 1 && octets[0] < 0x80 {
                return Err(Error::new(ErrorCode::MalformedLength, off));
            }
        }

        let mut significant = octets;
        while let Some((&0, rest)) = significant.split_first() {
            significant = rest;
        }
        if significant.len() > core::mem::size_of::<u64>() {
            return Err(Error::new(ErrorCode::LengthOverflow, off));
        }
        let mut value: u64 = 0;
        for &b in significant {
            value = (value << 8) | u64::from(b);
        }
        Ok(Self::Definite(wire::len_to_usize(value, off)?))
    }

    /// Number of octets [`Self::encode_definite`] emits for a content length
    /// of `n`.
    #[must_use]
    pub const fn encoded_len_definite(n: usize) -> usize {
        if n < 0x80 {
            1
        } else {
            let mut octets = 0;
            let mut v = n;
            while v != 0 {
                octets += 1;
                v >>= 8;
            }
            1 + octets
        }
    }

    /// Emit the minimal definite-form length octets for a content length of
    /// `n`.
    ///
    /// BER tolerates redundant long forms on decode, but this implementation
    /// always emits the minimal form for determinism.
    #[cfg(feature = "alloc")]
    pub(crate) fn encode_definite(out: &mut Vec<u8>, n: usize) {
        if n < 0x80 {
            out.push(n as u8);
            return;
        }
        let be = n.to_be_bytes();
        let skip = be.iter().take_while(|&&b| b == 0).count();
        let significant = &be[skip..];
        out.push(0x80 | significant.len() as u8);
        out.extend_from_slice(significant);
    }
}
