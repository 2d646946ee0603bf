use core::fmt;

/// A structured error code identifying the reason an encoding was rejected.
///
/// The enum is intentionally stable and string-free to support `no_std` and to
/// remain hot-path friendly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The input ends before a declared length is satisfied.
    TruncatedInput,
    /// Arithmetic overflow while computing a length or offset.
    LengthOverflow,
    /// Input exceeds the configured maximum input size.
    InputLenLimitExceeded,

    /// Structurally invalid tag octets, or a non-minimal high-tag-number form
    /// rejected by the active encoding rules.
    MalformedTag,
    /// Structurally invalid length octets, a reserved length form, an
    /// indefinite length where it is not permitted, or a non-minimal long
    /// form rejected by the active encoding rules.
    MalformedLength,
    /// Bytes remain after the expected end of a value region or after the
    /// top-level element.
    TrailingGarbage,
    /// The input ends before the end-of-contents marker of an
    /// indefinite-length element.
    UnterminatedIndefiniteLength,

    /// Nesting depth limit exceeded.
    NestingTooDeep,
    /// Total element count limit exceeded.
    TotalElementsLimitExceeded,

    /// Attempted use of a length form the active encoding rules forbid on
    /// encode (e.g. indefinite length under DER).
    EncodingNotPermitted,

    /// A registered type handler rejected primitive content.
    TypeDecode,
    /// A registered type handler could not encode a semantic value.
    TypeEncode,
    /// A semantic value failed construction-time validation.
    InvalidValue,
}

/// An error with a stable code and the byte offset where it was detected.
///
/// Offsets are absolute positions into the decoded input. For encode errors,
/// `offset` is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// The error code.
    pub code: ErrorCode,
    /// Byte offset at which the error was detected.
    pub offset: usize,
}

impl Error {
    /// Construct an error at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(code: ErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.code {
            ErrorCode::TruncatedInput => "input truncated before declared length",
            ErrorCode::LengthOverflow => "length overflow",
            ErrorCode::InputLenLimitExceeded => "input length exceeds limits",

            ErrorCode::MalformedTag => "malformed tag octets",
            ErrorCode::MalformedLength => "malformed length octets",
            ErrorCode::TrailingGarbage => "bytes remain past the end of a value region",
            ErrorCode::UnterminatedIndefiniteLength => {
                "no end-of-contents marker before end of input"
            }

            ErrorCode::NestingTooDeep => "nesting depth limit exceeded",
            ErrorCode::TotalElementsLimitExceeded => "total element limit exceeded",

            ErrorCode::EncodingNotPermitted => "length form not permitted by encoding rules",

            ErrorCode::TypeDecode => "type handler rejected primitive content",
            ErrorCode::TypeEncode => "type handler could not encode value",
            ErrorCode::InvalidValue => "invalid semantic value",
        };
        write!(f, "asn1 error at offset {}: {msg}", self.offset)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
