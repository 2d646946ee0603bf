use alloc::vec::Vec;

use crate::element::{Content, Element};
use crate::length::Length;
use crate::profile::EncodingRules;
use crate::registry::{Registry, TagKey};
use crate::{Error, ErrorCode};

/// End-of-contents marker terminating an indefinite-length value.
const END_OF_CONTENTS: [u8; 2] = [0x00, 0x00];

/// Encode an element using the process-wide default registry.
///
/// # Errors
///
/// Returns [`ErrorCode::EncodingNotPermitted`] if the element carries a
/// length form the rules forbid, or a handler error if a semantic value
/// cannot be encoded. Encode errors carry offset 0.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn encode(element: &Element, rules: EncodingRules) -> Result<Vec<u8>, Error> {
    let registry = crate::registry::global_registry()
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    encode_with(element, rules, &registry)
}

/// Encode an element with an explicit registry.
///
/// Encoding is bottom-up: children are serialized first, then the length and
/// tag octets are prepended. Definite lengths are always emitted in minimal
/// form. An element decoded with the indefinite form re-encodes with it
/// under BER; under DER that is [`ErrorCode::EncodingNotPermitted`]. The
/// caller must rebuild the element (re-flattening its content) to produce a
/// definite-length encoding; that is an explicit transformation this crate
/// never performs silently.
///
/// # Errors
///
/// See [`encode`].
pub fn encode_with(
    element: &Element,
    rules: EncodingRules,
    registry: &Registry,
) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    encode_element(&mut out, element, rules, registry)?;
    Ok(out)
}

fn encode_element(
    out: &mut Vec<u8>,
    element: &Element,
    rules: EncodingRules,
    registry: &Registry,
) -> Result<(), Error> {
    let tag = element.tag();
    let content = content_octets(element, rules, registry)?;

    let indefinite = match element.length() {
        Length::Indefinite => {
            if !tag.constructed || !rules.permits_indefinite_for(tag, content.len()) {
                return Err(Error::new(ErrorCode::EncodingNotPermitted, 0));
            }
            true
        }
        Length::Definite(_) => rules.forces_indefinite(tag, content.len()),
    };

    tag.encode_into(out);
    if indefinite {
        out.push(crate::length::INDEFINITE_OCTET);
        out.extend_from_slice(&content);
        out.extend_from_slice(&END_OF_CONTENTS);
    } else {
        Length::encode_definite(out, content.len());
        out.extend_from_slice(&content);
    }
    Ok(())
}

fn content_octets(
    element: &Element,
    rules: EncodingRules,
    registry: &Registry,
) -> Result<Vec<u8>, Error> {
    match element.content() {
        Content::Constructed(children) => {
            let mut buf = Vec::new();
            for child in children {
                encode_element(&mut buf, child, rules, registry)?;
            }
            Ok(buf)
        }
        Content::Primitive { raw, value } => {
            let tag = element.tag();
            if let Some(value) = value {
                if let Some(codec) = registry.lookup(TagKey::new(tag.class, tag.number, false)) {
                    return codec.encode(value).map_err(|code| Error::new(code, 0));
                }
            }
            Ok(raw.clone())
        }
    }
}
