use alloc::vec::Vec;

use crate::length::Length;
use crate::tag::Tag;
use crate::value::Value;

/// A node of a decoded TLV tree.
///
/// An element is either primitive (carrying its raw content octets plus,
/// when a type handler matched, the decoded semantic value) or constructed
/// (carrying its ordered child elements). Never both. Elements are immutable
/// once built; re-encoding with changes means rebuilding.
///
/// # Equality
///
/// Equality is structural: tags must match, the length *form* (definite vs.
/// indefinite) must match, and content compares by semantic value when both
/// sides carry one, by raw octets otherwise. The magnitude of a definite
/// length is derived state and does not participate; it is recomputed on
/// encode.
#[derive(Debug, Clone)]
pub struct Element {
    tag: Tag,
    length: Length,
    content: Content,
}

#[derive(Debug, Clone)]
pub(crate) enum Content {
    Primitive {
        raw: Vec<u8>,
        value: Option<Value>,
    },
    Constructed(Vec<Element>),
}

impl Element {
    /// Construct a primitive element from raw content octets.
    ///
    /// The tag's constructed flag is cleared to uphold the
    /// primitive-content invariant.
    #[must_use]
    pub fn primitive(tag: Tag, raw: Vec<u8>) -> Self {
        Self {
            tag: tag.primitive(),
            length: Length::Definite(raw.len()),
            content: Content::Primitive { raw, value: None },
        }
    }

    /// Construct a primitive element from a semantic value.
    ///
    /// The content octets are produced at encode time by the type handler
    /// registered for the tag; encoding fails with `TypeEncode` if the
    /// handler rejects the value, and falls back to empty content if no
    /// handler is registered.
    #[must_use]
    pub fn primitive_value(tag: Tag, value: Value) -> Self {
        Self {
            tag: tag.primitive(),
            length: Length::Definite(0),
            content: Content::Primitive {
                raw: Vec::new(),
                value: Some(value),
            },
        }
    }

    /// Construct a constructed element from its ordered children.
    ///
    /// The tag's constructed flag is set to uphold the constructed-content
    /// invariant.
    #[must_use]
    pub fn constructed(tag: Tag, children: Vec<Element>) -> Self {
        Self {
            tag: tag.constructed(),
            length: Length::Definite(0),
            content: Content::Constructed(children),
        }
    }

    /// Mark this element for the indefinite length form on encode.
    ///
    /// Only meaningful for constructed elements under rules that permit the
    /// form; encoding fails with `EncodingNotPermitted` otherwise.
    #[must_use]
    pub fn with_indefinite_length(mut self) -> Self {
        self.length = Length::Indefinite;
        self
    }

    pub(crate) fn from_parts(tag: Tag, length: Length, content: Content) -> Self {
        Self {
            tag,
            length,
            content,
        }
    }

    /// The element's tag.
    #[inline]
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// The length field as decoded (or as chosen at construction). Definite
    /// values are recomputed from content on encode.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> Length {
        self.length
    }

    /// Returns `true` iff this is a constructed element.
    #[inline]
    #[must_use]
    pub const fn is_constructed(&self) -> bool {
        self.tag.constructed
    }

    /// Raw content octets of a primitive element.
    #[must_use]
    pub fn raw(&self) -> Option<&[u8]> {
        match &self.content {
            Content::Primitive { raw, .. } => Some(raw),
            Content::Constructed(_) => None,
        }
    }

    /// The decoded semantic value, if a type handler matched this element's
    /// tag.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match &self.content {
            Content::Primitive { value, .. } => value.as_ref(),
            Content::Constructed(_) => None,
        }
    }

    /// Ordered children of a constructed element.
    #[must_use]
    pub fn children(&self) -> Option<&[Element]> {
        match &self.content {
            Content::Constructed(children) => Some(children),
            Content::Primitive { .. } => None,
        }
    }

    pub(crate) const fn content(&self) -> &Content {
        &self.content
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.length.is_indefinite() == other.length.is_indefinite()
            && self.content == other.content
    }
}

impl Eq for Element {}

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Primitive { raw: a, value: va },
                Self::Primitive { raw: b, value: vb },
            ) => match (va, vb) {
                (Some(x), Some(y)) => x == y,
                (None, None) => a == b,
                _ => false,
            },
            (Self::Constructed(a), Self::Constructed(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Content {}
