//! The extensibility registry mapping tag keys to type handlers.
//!
//! The registry is how new ASN.1 types plug into the codec without touching
//! its core: a handler registered for a `(class, number, constructed)` key is
//! consulted for every primitive element carrying that tag. Registration
//! overwrites: *last registration wins*, which is the documented
//! extensibility contract, not an error.

use core::fmt;

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::tag::{Class, Tag};
use crate::universal;
use crate::value::Value;
use crate::ErrorCode;

/// Key identifying a type handler: class, tag number, and constructed flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagKey {
    /// Tag class.
    pub class: Class,
    /// Tag number.
    pub number: u64,
    /// Constructed flag.
    pub constructed: bool,
}

impl TagKey {
    /// Construct a key from its fields.
    #[inline]
    #[must_use]
    pub const fn new(class: Class, number: u64, constructed: bool) -> Self {
        Self {
            class,
            number,
            constructed,
        }
    }

    /// The key under which a handler for `tag` is looked up.
    #[inline]
    #[must_use]
    pub const fn of(tag: Tag) -> Self {
        Self::new(tag.class, tag.number, tag.constructed)
    }
}

/// A decode/encode strategy for one tag key.
///
/// `decode` turns primitive content octets into a semantic [`Value`];
/// `encode` is its inverse. Handlers return an [`ErrorCode`] without an
/// offset; the codec stamps the element's content offset when it surfaces
/// the failure. The codec performs no validation of handler behavior;
/// correctness of custom types is the implementor's responsibility.
pub trait TypeCodec: Send + Sync {
    /// Decode primitive content octets into a semantic value.
    ///
    /// # Errors
    ///
    /// Returns an error code (conventionally [`ErrorCode::TypeDecode`]) if
    /// the content is not valid for the type.
    fn decode(&self, raw: &[u8]) -> Result<Value, ErrorCode>;

    /// Encode a semantic value into content octets.
    ///
    /// # Errors
    ///
    /// Returns an error code (conventionally [`ErrorCode::TypeEncode`]) if
    /// the value cannot be represented by the type.
    fn encode(&self, value: &Value) -> Result<Vec<u8>, ErrorCode>;
}

struct FnCodec<D, E> {
    decode: D,
    encode: E,
}

impl<D, E> TypeCodec for FnCodec<D, E>
where
    D: Fn(&[u8]) -> Result<Value, ErrorCode> + Send + Sync,
    E: Fn(&Value) -> Result<Vec<u8>, ErrorCode> + Send + Sync,
{
    fn decode(&self, raw: &[u8]) -> Result<Value, ErrorCode> {
        (self.decode)(raw)
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, ErrorCode> {
        (self.encode)(value)
    }
}

/// A mapping from tag keys to type handlers.
///
/// Mutable only through registration; lookups are read-only and
/// side-effect-free, so a registry shared behind a read lock is safe to use
/// from concurrent decode/encode calls.
pub struct Registry {
    codecs: BTreeMap<TagKey, Box<dyn TypeCodec>>,
}

impl Registry {
    /// An empty registry with no handlers at all.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            codecs: BTreeMap::new(),
        }
    }

    /// A registry pre-populated with the built-in universal type handlers
    /// (BOOLEAN, INTEGER, BIT STRING, OCTET STRING, NULL, OBJECT IDENTIFIER,
    /// UTF8String, PrintableString, IA5String).
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        universal::register_builtins(&mut registry);
        registry
    }

    /// Insert or overwrite the handler for `key`. Last registration wins.
    pub fn register(&mut self, key: TagKey, codec: Box<dyn TypeCodec>) {
        self.codecs.insert(key, codec);
    }

    /// Insert or overwrite the handler for `key` from a pair of closures.
    pub fn register_fns<D, E>(&mut self, key: TagKey, decode: D, encode: E)
    where
        D: Fn(&[u8]) -> Result<Value, ErrorCode> + Send + Sync + 'static,
        E: Fn(&Value) -> Result<Vec<u8>, ErrorCode> + Send + Sync + 'static,
    {
        self.register(key, Box::new(FnCodec { decode, encode }));
    }

    /// Remove the handler for `key`, returning `true` if one was registered.
    pub fn unregister(&mut self, key: TagKey) -> bool {
        self.codecs.remove(&key).is_some()
    }

    /// Look up the handler for `key`.
    #[must_use]
    pub fn lookup(&self, key: TagKey) -> Option<&dyn TypeCodec> {
        self.codecs.get(&key).map(AsRef::as_ref)
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Returns `true` iff no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl Default for Registry {
    /// Equivalent to [`Registry::with_builtins`].
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.codecs.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(feature = "std")]
use std::sync::{OnceLock, PoisonError, RwLock};

#[cfg(feature = "std")]
static GLOBAL: OnceLock<RwLock<Registry>> = OnceLock::new();

/// The process-wide default registry, initialized with the built-in
/// universal handlers on first use.
///
/// [`crate::decode`] and [`crate::encode`] read it for the duration of a
/// call. Registration takes the write lock and is expected to happen during
/// initialization, before concurrent decode/encode traffic begins; lookups
/// during decode/encode take the read lock and never mutate.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn global_registry() -> &'static RwLock<Registry> {
    GLOBAL.get_or_init(|| RwLock::new(Registry::with_builtins()))
}

/// Insert or overwrite a handler in the process-wide default registry.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn register_global(key: TagKey, codec: Box<dyn TypeCodec>) {
    let mut registry = global_registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    registry.register(key, codec);
}
