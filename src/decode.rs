use alloc::vec::Vec;

use crate::element::{Content, Element};
use crate::length::Length;
use crate::profile::EncodingRules;
use crate::registry::{Registry, TagKey};
use crate::tag::Tag;
use crate::wire;
use crate::{DecodeLimits, Error, ErrorCode};

/// Decode a single top-level element using the process-wide default
/// registry, with limits derived from the input size.
///
/// The entire input must be consumed by exactly one element; trailing bytes
/// are [`ErrorCode::TrailingGarbage`].
///
/// # Errors
///
/// Returns a decode error with the absolute byte offset at which the input
/// was rejected.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn decode(bytes: &[u8], rules: EncodingRules) -> Result<Element, Error> {
    let registry = crate::registry::global_registry()
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    decode_with(
        bytes,
        rules,
        &registry,
        DecodeLimits::for_bytes(bytes.len()),
    )
}

/// Decode a single top-level element with an explicit registry and limits.
///
/// # Errors
///
/// Returns a decode error with the absolute byte offset at which the input
/// was rejected.
pub fn decode_with(
    bytes: &[u8],
    rules: EncodingRules,
    registry: &Registry,
    limits: DecodeLimits,
) -> Result<Element, Error> {
    if bytes.len() > limits.max_input_bytes {
        return Err(Error::new(ErrorCode::InputLenLimitExceeded, 0));
    }
    let mut builder = TreeBuilder {
        data: bytes,
        rules,
        registry,
        limits,
        elements_seen: 0,
    };
    let mut pos = 0;
    let element = builder.parse_element(&mut pos, bytes.len(), 0)?;
    if pos != bytes.len() {
        return Err(Error::new(ErrorCode::TrailingGarbage, pos));
    }
    Ok(element)
}

/// Recursive-descent builder over a single input buffer.
///
/// The builder never sub-slices: every step carries `(position, region_end)`
/// so that error offsets are always absolute into the original input. The
/// value region of a definite-length constructed element bounds its
/// children, which must tile it exactly.
struct TreeBuilder<'a, 'r> {
    data: &'a [u8],
    rules: EncodingRules,
    registry: &'r Registry,
    limits: DecodeLimits,
    elements_seen: usize,
}

impl TreeBuilder<'_, '_> {
    fn parse_element(&mut self, pos: &mut usize, end: usize, depth: usize) -> Result<Element, Error> {
        let off = *pos;
        let tag = Tag::parse(self.data, pos, end, self.rules)?;
        let length = Length::parse(self.data, pos, end, self.rules, tag.constructed)?;
        self.bump_elements(off)?;

        if !tag.constructed {
            let Length::Definite(n) = length else {
                return Err(Error::new(ErrorCode::MalformedLength, off));
            };
            let value_off = *pos;
            let raw = wire::read_exact(self.data, pos, end, n)?.to_vec();
            let value = match self.registry.lookup(TagKey::new(tag.class, tag.number, false)) {
                Some(codec) => Some(
                    codec
                        .decode(&raw)
                        .map_err(|code| Error::new(code, value_off))?,
                ),
                None => None,
            };
            return Ok(Element::from_parts(
                tag,
                length,
                Content::Primitive { raw, value },
            ));
        }

        let next_depth = depth + 1;
        if next_depth > self.limits.max_depth {
            return Err(Error::new(ErrorCode::NestingTooDeep, off));
        }

        let children = match length {
            Length::Definite(n) => {
                let region_end = wire::bounded_end(self.data, *pos, end, n)?;
                let mut children = Vec::new();
                while *pos < region_end {
                    children.push(self.parse_element(pos, region_end, next_depth)?);
                }
                children
            }
            Length::Indefinite => {
                let mut children = Vec::new();
                loop {
                    if *pos >= end {
                        return Err(Error::new(ErrorCode::UnterminatedIndefiniteLength, off));
                    }
                    if self.data[*pos] == 0x00 {
                        // End-of-contents: the marker's two octets are
                        // consumed and not represented as a child.
                        let len_off = *pos + 1;
                        *pos += 1;
                        let octet = wire::read_u8(self.data, pos, end)
                            .map_err(|_| Error::new(ErrorCode::UnterminatedIndefiniteLength, off))?;
                        if octet != 0x00 {
                            return Err(Error::new(ErrorCode::MalformedLength, len_off));
                        }
                        break;
                    }
                    children.push(self.parse_element(pos, end, next_depth)?);
                }
                children
            }
        };
        Ok(Element::from_parts(tag, length, Content::Constructed(children)))
    }

    fn bump_elements(&mut self, off: usize) -> Result<(), Error> {
        self.elements_seen += 1;
        if self.elements_seen > self.limits.max_total_elements {
            return Err(Error::new(ErrorCode::TotalElementsLimitExceeded, off));
        }
        Ok(())
    }
}
