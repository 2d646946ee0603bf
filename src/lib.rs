//! # x690-tlv
//!
//! Tag-length-value decoding and canonical encoding for ASN.1 under the
//! **Basic, Canonical, and Distinguished Encoding Rules** (BER/CER/DER,
//! ITU-T X.690).
//!
//! ## Design principles
//!
//! - **The TLV engine is the product.** The crate decodes a byte buffer into
//!   a tree of [`Element`]s and re-encodes a tree into conformant bytes;
//!   everything type-specific sits behind the registry.
//! - **Types plug in, the core never changes.** A [`Registry`] maps a
//!   `(class, tag number, constructed)` key to a [`TypeCodec`], a decode
//!   function paired with an encode function. The built-in universal types (BOOLEAN,
//!   INTEGER, OCTET STRING, OBJECT IDENTIFIER, …) are registered through the
//!   same interface user-defined types use. An *unregistered* tag is not an
//!   error: the element simply carries its raw content, so unknown types pass
//!   through decode/encode untouched.
//! - **Hot-path validation is allocation-free.** [`validate`] walks the TLV
//!   structure and enforces profile rules without building a tree;
//!   [`validate_der`] additionally returns [`DerBytesRef`], the witness that
//!   a buffer is canonical DER (under DER, byte equality is value equality).
//!
//! ## Encoding rules (explicit)
//!
//! [`EncodingRules`] selects the profile:
//!
//! - **BER** accepts non-minimal tag and length forms and the
//!   indefinite-length form for constructed values (terminated by the
//!   `00 00` end-of-contents marker).
//! - **DER** rejects every non-minimal form and the indefinite form, on both
//!   decode and encode.
//! - **CER** applies DER's minimality rules on decode; on encode it mandates
//!   the indefinite form for universal constructed string types whose content
//!   exceeds 1000 octets.
//!
//! Decoding is hardened against adversarial input: declared lengths are
//! checked against the input and against the enclosing value region
//! (children must tile their parent exactly), recursion depth and total
//! element count are bounded by [`DecodeLimits`], and every error carries the
//! absolute byte offset where it was detected.
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`Error`] and
//!   provides the process-wide default registry used by [`decode`] and
//!   [`encode`].
//! - `alloc` *(default)*: enables the element tree, the registry, and the
//!   encoder.
//! - `sha2` *(default)*: enables SHA-256 fingerprinting of validated DER
//!   bytes.
//! - `simdutf8`: enables SIMD-accelerated UTF-8 validation for UTF8String
//!   contents.
//!
//! ## `no_std`
//!
//! The crate is `no_std` compatible. Validation-only usage works without
//! `alloc`; the tree and registry APIs require `alloc` and therefore an
//! allocator provided by your environment.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod canonical;
mod error;
mod length;
mod limits;
mod parse;
mod profile;
mod tag;
mod wire;

#[cfg(feature = "alloc")]
mod decode;
#[cfg(feature = "alloc")]
mod element;
#[cfg(feature = "alloc")]
mod encode;
#[cfg(feature = "alloc")]
mod registry;
#[cfg(feature = "alloc")]
mod universal;
#[cfg(feature = "alloc")]
mod utf8;
#[cfg(feature = "alloc")]
mod value;

pub use crate::canonical::DerBytesRef;
pub use crate::error::{Error, ErrorCode};
pub use crate::length::Length;
pub use crate::limits::{DecodeLimits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_TOTAL_ELEMENTS};
pub use crate::parse::{validate, validate_der};
pub use crate::profile::{EncodingRules, CER_SEGMENT_LIMIT};
pub use crate::tag::{Class, Tag};

#[cfg(feature = "alloc")]
pub use crate::canonical::DerBytes;
#[cfg(feature = "alloc")]
pub use crate::decode::decode_with;
#[cfg(feature = "alloc")]
pub use crate::element::Element;
#[cfg(feature = "alloc")]
pub use crate::encode::encode_with;
#[cfg(feature = "alloc")]
pub use crate::registry::{Registry, TagKey, TypeCodec};
#[cfg(feature = "alloc")]
pub use crate::value::{BitString, Oid, Value};

#[cfg(all(feature = "std", feature = "alloc"))]
pub use crate::decode::decode;
#[cfg(all(feature = "std", feature = "alloc"))]
pub use crate::encode::encode;
#[cfg(all(feature = "std", feature = "alloc"))]
pub use crate::registry::{global_registry, register_global};
