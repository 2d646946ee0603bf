//! Built-in handlers for the standard universal types.
//!
//! These are ordinary [`TypeCodec`] implementations registered through the
//! same interface custom types use; nothing here is special-cased by the
//! codec core.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::registry::{Registry, TagKey, TypeCodec};
use crate::tag::Tag;
use crate::utf8;
use crate::value::{BitString, Oid, Value};
use crate::wire;
use crate::ErrorCode;

pub(crate) fn register_builtins(registry: &mut Registry) {
    registry.register(TagKey::of(Tag::BOOLEAN), Box::new(BooleanCodec));
    registry.register(TagKey::of(Tag::INTEGER), Box::new(IntegerCodec));
    registry.register(TagKey::of(Tag::BIT_STRING), Box::new(BitStringCodec));
    registry.register(TagKey::of(Tag::OCTET_STRING), Box::new(OctetStringCodec));
    registry.register(TagKey::of(Tag::NULL), Box::new(NullCodec));
    registry.register(TagKey::of(Tag::OBJECT_IDENTIFIER), Box::new(OidCodec));
    registry.register(TagKey::of(Tag::UTF8_STRING), Box::new(TextCodec(Charset::Utf8)));
    registry.register(
        TagKey::of(Tag::PRINTABLE_STRING),
        Box::new(TextCodec(Charset::Printable)),
    );
    registry.register(TagKey::of(Tag::IA5_STRING), Box::new(TextCodec(Charset::Ia5)));
}

struct BooleanCodec;

impl TypeCodec for BooleanCodec {
    fn decode(&self, raw: &[u8]) -> Result<Value, ErrorCode> {
        match raw {
            [b] => Ok(Value::Boolean(*b != 0)),
            _ => Err(ErrorCode::TypeDecode),
        }
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, ErrorCode> {
        match value {
            // TRUE encodes as FF (X.690 §11.1).
            Value::Boolean(true) => Ok(alloc::vec![0xff]),
            Value::Boolean(false) => Ok(alloc::vec![0x00]),
            _ => Err(ErrorCode::TypeEncode),
        }
    }
}

struct IntegerCodec;

impl TypeCodec for IntegerCodec {
    fn decode(&self, raw: &[u8]) -> Result<Value, ErrorCode> {
        if raw.is_empty() || raw.len() > 16 {
            return Err(ErrorCode::TypeDecode);
        }
        let mut v: i128 = if raw[0] & 0x80 != 0 { -1 } else { 0 };
        for &b in raw {
            v = (v << 8) | i128::from(b);
        }
        Ok(Value::Integer(v))
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, ErrorCode> {
        let Value::Integer(v) = value else {
            return Err(ErrorCode::TypeEncode);
        };
        let be = v.to_be_bytes();
        // Minimal two's complement: drop redundant sign-extension octets.
        let mut start = 0;
        while start < be.len() - 1 {
            let sign_only = be[start] == 0x00 && be[start + 1] & 0x80 == 0
                || be[start] == 0xff && be[start + 1] & 0x80 != 0;
            if !sign_only {
                break;
            }
            start += 1;
        }
        Ok(be[start..].to_vec())
    }
}

struct BitStringCodec;

impl TypeCodec for BitStringCodec {
    fn decode(&self, raw: &[u8]) -> Result<Value, ErrorCode> {
        let Some((&unused, data)) = raw.split_first() else {
            return Err(ErrorCode::TypeDecode);
        };
        BitString::new(unused, data.to_vec())
            .map(Value::BitString)
            .map_err(|_| ErrorCode::TypeDecode)
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, ErrorCode> {
        let Value::BitString(bits) = value else {
            return Err(ErrorCode::TypeEncode);
        };
        let mut out = Vec::with_capacity(1 + bits.data().len());
        out.push(bits.unused_bits());
        out.extend_from_slice(bits.data());
        Ok(out)
    }
}

struct OctetStringCodec;

impl TypeCodec for OctetStringCodec {
    fn decode(&self, raw: &[u8]) -> Result<Value, ErrorCode> {
        Ok(Value::OctetString(raw.to_vec()))
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, ErrorCode> {
        match value {
            Value::OctetString(bytes) => Ok(bytes.clone()),
            _ => Err(ErrorCode::TypeEncode),
        }
    }
}

struct NullCodec;

impl TypeCodec for NullCodec {
    fn decode(&self, raw: &[u8]) -> Result<Value, ErrorCode> {
        if raw.is_empty() {
            Ok(Value::Null)
        } else {
            Err(ErrorCode::TypeDecode)
        }
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, ErrorCode> {
        match value {
            Value::Null => Ok(Vec::new()),
            _ => Err(ErrorCode::TypeEncode),
        }
    }
}

struct OidCodec;

impl TypeCodec for OidCodec {
    fn decode(&self, raw: &[u8]) -> Result<Value, ErrorCode> {
        if raw.is_empty() {
            return Err(ErrorCode::TypeDecode);
        }
        let mut arcs = Vec::new();
        let mut pos = 0;
        while pos < raw.len() {
            let mut sub: u64 = 0;
            loop {
                let Some(&b) = raw.get(pos) else {
                    // varint runs off the end of the content
                    return Err(ErrorCode::TypeDecode);
                };
                pos += 1;
                if sub > u64::MAX >> 7 {
                    return Err(ErrorCode::TypeDecode);
                }
                sub = (sub << 7) | u64::from(b & 0x7f);
                if b & 0x80 == 0 {
                    break;
                }
            }
            if arcs.is_empty() {
                // The first subidentifier packs the first two arcs.
                let first = match sub {
                    0..=39 => 0,
                    40..=79 => 1,
                    _ => 2,
                };
                arcs.push(first);
                arcs.push(sub - 40 * first);
            } else {
                arcs.push(sub);
            }
        }
        Oid::new(arcs).map(Value::Oid).map_err(|_| ErrorCode::TypeDecode)
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, ErrorCode> {
        let Value::Oid(oid) = value else {
            return Err(ErrorCode::TypeEncode);
        };
        let arcs = oid.arcs();
        let (first, second, rest) = match arcs {
            [first, second, rest @ ..] => (*first, *second, rest),
            _ => return Err(ErrorCode::TypeEncode),
        };
        let packed = first
            .checked_mul(40)
            .and_then(|n| n.checked_add(second))
            .ok_or(ErrorCode::TypeEncode)?;
        let mut out = Vec::new();
        wire::write_base128(&mut out, packed);
        for &arc in rest {
            wire::write_base128(&mut out, arc);
        }
        Ok(out)
    }
}

#[derive(Clone, Copy)]
enum Charset {
    Utf8,
    Printable,
    Ia5,
}

impl Charset {
    fn check(self, bytes: &[u8]) -> bool {
        match self {
            Self::Utf8 => utf8::validate(bytes).is_ok(),
            Self::Printable => bytes.iter().copied().all(is_printable),
            Self::Ia5 => bytes.iter().all(u8::is_ascii),
        }
    }
}

/// The PrintableString alphabet (X.680 §41.4).
const fn is_printable(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b' ' | b'\'' | b'(' | b')' | b'+' | b',' | b'-' | b'.' | b'/' | b':' | b'=' | b'?'
        )
}

struct TextCodec(Charset);

impl TypeCodec for TextCodec {
    fn decode(&self, raw: &[u8]) -> Result<Value, ErrorCode> {
        if !self.0.check(raw) {
            return Err(ErrorCode::TypeDecode);
        }
        let s = core::str::from_utf8(raw).map_err(|_| ErrorCode::TypeDecode)?;
        Ok(Value::Text(String::from(s)))
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, ErrorCode> {
        let Value::Text(s) = value else {
            return Err(ErrorCode::TypeEncode);
        };
        if !self.0.check(s.as_bytes()) {
            return Err(ErrorCode::TypeEncode);
        }
        Ok(s.clone().into_bytes())
    }
}
