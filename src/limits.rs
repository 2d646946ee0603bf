/// Default maximum nesting depth limit.
///
/// ASN.1 structures found in the wild (certificates, CMS, LDAP) rarely nest
/// beyond a few dozen levels; the limit exists to bound stack usage against
/// adversarial input.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default maximum total element count.
///
/// This is a safety limit; adjust explicitly for your deployment.
pub const DEFAULT_MAX_TOTAL_ELEMENTS: usize = 1 << 20;

/// Decode-time resource limits for validation and decoding.
///
/// Limits are enforced deterministically and must not depend on background
/// timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum total input length in bytes.
    pub max_input_bytes: usize,
    /// Maximum nesting depth of constructed elements.
    pub max_depth: usize,
    /// Maximum total count of elements across the entire decoded tree,
    /// including the top-level element.
    pub max_total_elements: usize,
}

impl DecodeLimits {
    /// Construct conservative limits derived from a maximum message size.
    ///
    /// The defaults are:
    /// - `max_input_bytes = max_message_bytes`
    /// - `max_depth = DEFAULT_MAX_DEPTH`
    /// - `max_total_elements` is the message size capped by
    ///   [`DEFAULT_MAX_TOTAL_ELEMENTS`] (every element occupies at least two
    ///   input bytes, so the count can never reach the input size).
    ///
    /// This is a pragmatic baseline. Production deployments should tune these
    /// explicitly.
    #[must_use]
    pub fn for_bytes(max_message_bytes: usize) -> Self {
        Self {
            max_input_bytes: max_message_bytes,
            max_depth: DEFAULT_MAX_DEPTH,
            max_total_elements: max_message_bytes.clamp(1, DEFAULT_MAX_TOTAL_ELEMENTS),
        }
    }
}
