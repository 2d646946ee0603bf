use crate::canonical::DerBytesRef;
use crate::length::Length;
use crate::profile::EncodingRules;
use crate::tag::Tag;
use crate::wire;
use crate::{DecodeLimits, Error, ErrorCode};

/// Validate that the input is exactly one well-formed element under the
/// given rules, without building a tree.
///
/// This walk enforces the same structural and profile rules as
/// [`crate::decode_with`] (same error codes, same offsets) but performs no
/// allocation and consults no registry, so it is available without the
/// `alloc` feature and suits hot-path acceptance checks.
///
/// # Errors
///
/// Returns a decode error with the absolute byte offset at which the input
/// was rejected.
pub fn validate(bytes: &[u8], rules: EncodingRules, limits: DecodeLimits) -> Result<(), Error> {
    if bytes.len() > limits.max_input_bytes {
        return Err(Error::new(ErrorCode::InputLenLimitExceeded, 0));
    }
    let mut walker = Walker {
        data: bytes,
        rules,
        limits,
        elements_seen: 0,
    };
    let mut pos = 0;
    walker.walk_element(&mut pos, bytes.len(), 0)?;
    if pos != bytes.len() {
        return Err(Error::new(ErrorCode::TrailingGarbage, pos));
    }
    Ok(())
}

/// Validate that the input is exactly one element in canonical DER form and
/// return the witness type attesting it.
///
/// # Errors
///
/// Returns a decode error with the absolute byte offset at which the input
/// was rejected.
pub fn validate_der(bytes: &[u8], limits: DecodeLimits) -> Result<DerBytesRef<'_>, Error> {
    validate(bytes, EncodingRules::Der, limits)?;
    Ok(DerBytesRef::new(bytes))
}

struct Walker<'a> {
    data: &'a [u8],
    rules: EncodingRules,
    limits: DecodeLimits,
    elements_seen: usize,
}

impl Walker<'_> {
    fn walk_element(&mut self, pos: &mut usize, end: usize, depth: usize) -> Result<(), Error> {
        let off = *pos;
        let tag = Tag::parse(self.data, pos, end, self.rules)?;
        let length = Length::parse(self.data, pos, end, self.rules, tag.constructed)?;

        self.elements_seen += 1;
        if self.elements_seen > self.limits.max_total_elements {
            return Err(Error::new(ErrorCode::TotalElementsLimitExceeded, off));
        }

        if !tag.constructed {
            let Length::Definite(n) = length else {
                return Err(Error::new(ErrorCode::MalformedLength, off));
            };
            wire::read_exact(self.data, pos, end, n)?;
            return Ok(());
        }

        let next_depth = depth + 1;
        if next_depth > self.limits.max_depth {
            return Err(Error::new(ErrorCode::NestingTooDeep, off));
        }

        match length {
            Length::Definite(n) => {
                let region_end = wire::bounded_end(self.data, *pos, end, n)?;
                while *pos < region_end {
                    self.walk_element(pos, region_end, next_depth)?;
                }
            }
            Length::Indefinite => loop {
                if *pos >= end {
                    return Err(Error::new(ErrorCode::UnterminatedIndefiniteLength, off));
                }
                if self.data[*pos] == 0x00 {
                    let len_off = *pos + 1;
                    *pos += 1;
                    let octet = wire::read_u8(self.data, pos, end)
                        .map_err(|_| Error::new(ErrorCode::UnterminatedIndefiniteLength, off))?;
                    if octet != 0x00 {
                        return Err(Error::new(ErrorCode::MalformedLength, len_off));
                    }
                    break;
                }
                self.walk_element(pos, end, next_depth)?;
            },
        }
        Ok(())
    }
}
