#[cfg(feature = "alloc")]
use crate::{DecodeLimits, Error};

/// A validated canonical DER data item borrowed from an input buffer.
///
/// This is the product of [`crate::validate_der`]. The bytes are guaranteed
/// to represent exactly one element in canonical DER form; since DER admits
/// a single encoding per value, equality of these bytes is equality of the
/// encoded values, and their digest is a stable fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerBytesRef<'a> {
    bytes: &'a [u8],
}

impl<'a> DerBytesRef<'a> {
    #[inline]
    pub(crate) const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Return the canonical bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(self) -> &'a [u8] {
        self.bytes
    }

    /// Length in bytes of the canonical encoding.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` iff the encoding is empty (this never happens for a
    /// valid element).
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bytes.is_empty()
    }

    /// Compute the SHA-256 digest of the canonical bytes.
    #[cfg(feature = "sha2")]
    #[cfg_attr(docsrs, doc(cfg(feature = "sha2")))]
    #[must_use]
    pub fn sha256(self) -> [u8; 32] {
        use sha2::{Digest, Sha256};
        let mut h = Sha256::new();
        h.update(self.bytes);
        let out = h.finalize();
        let mut digest = [0u8; 32];
        digest.copy_from_slice(out.as_slice());
        digest
    }

    /// Copy into an owned [`DerBytes`].
    ///
    /// This method is available with the `alloc` feature.
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    #[must_use]
    pub fn to_owned(self) -> DerBytes {
        DerBytes {
            bytes: self.bytes.to_vec(),
        }
    }
}

impl AsRef<[u8]> for DerBytesRef<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// An owned validated canonical DER data item.
///
/// Useful for durable storage of canonical encodings (e.g. certificates keyed
/// by fingerprint).
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerBytes {
    bytes: Vec<u8>,
}

#[cfg(feature = "alloc")]
impl DerBytes {
    /// Validate and copy `bytes` into an owned canonical representation.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` are not a canonical DER data item.
    pub fn from_slice(bytes: &[u8], limits: DecodeLimits) -> Result<Self, Error> {
        let canon = crate::validate_der(bytes, limits)?;
        Ok(canon.to_owned())
    }

    /// Borrow the canonical bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume and return the canonical bytes.
    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Compute the SHA-256 digest of the canonical bytes.
    #[cfg(feature = "sha2")]
    #[cfg_attr(docsrs, doc(cfg(feature = "sha2")))]
    #[must_use]
    pub fn sha256(&self) -> [u8; 32] {
        DerBytesRef::new(&self.bytes).sha256()
    }
}

#[cfg(feature = "alloc")]
impl AsRef<[u8]> for DerBytes {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
