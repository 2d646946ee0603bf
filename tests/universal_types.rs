//! Vectors for the built-in universal type handlers.

use std::str::FromStr;

use hex_literal::hex;

use x690_tlv::{
    decode_with, encode_with, BitString, DecodeLimits, Element, EncodingRules, ErrorCode, Oid,
    Registry, Tag, Value,
};

fn decode_value(bytes: &[u8]) -> Value {
    let registry = Registry::with_builtins();
    let element = decode_with(
        bytes,
        EncodingRules::Der,
        &registry,
        DecodeLimits::for_bytes(bytes.len()),
    )
    .unwrap();
    element.value().cloned().unwrap()
}

fn decode_err(bytes: &[u8]) -> ErrorCode {
    let registry = Registry::with_builtins();
    decode_with(
        bytes,
        EncodingRules::Der,
        &registry,
        DecodeLimits::for_bytes(bytes.len()),
    )
    .unwrap_err()
    .code
}

fn encode_value(tag: Tag, value: Value) -> Vec<u8> {
    let registry = Registry::with_builtins();
    encode_with(
        &Element::primitive_value(tag, value),
        EncodingRules::Der,
        &registry,
    )
    .unwrap()
}

#[test]
fn integer_decodes_twos_complement() {
    assert_eq!(decode_value(&hex!("02 01 00")), Value::Integer(0));
    assert_eq!(decode_value(&hex!("02 01 7F")), Value::Integer(127));
    assert_eq!(decode_value(&hex!("02 02 00 80")), Value::Integer(128));
    assert_eq!(decode_value(&hex!("02 01 80")), Value::Integer(-128));
    assert_eq!(decode_value(&hex!("02 01 FF")), Value::Integer(-1));
    assert_eq!(decode_value(&hex!("02 02 01 00")), Value::Integer(256));
}

#[test]
fn integer_encodes_minimally() {
    assert_eq!(encode_value(Tag::INTEGER, Value::Integer(0)), hex!("02 01 00"));
    assert_eq!(encode_value(Tag::INTEGER, Value::Integer(127)), hex!("02 01 7F"));
    assert_eq!(
        encode_value(Tag::INTEGER, Value::Integer(128)),
        hex!("02 02 00 80")
    );
    assert_eq!(encode_value(Tag::INTEGER, Value::Integer(-128)), hex!("02 01 80"));
    assert_eq!(encode_value(Tag::INTEGER, Value::Integer(-1)), hex!("02 01 FF"));
    assert_eq!(
        encode_value(Tag::INTEGER, Value::Integer(-129)),
        hex!("02 02 FF 7F")
    );
}

#[test]
fn integer_rejects_empty_and_oversized_content() {
    assert_eq!(decode_err(&hex!("02 00")), ErrorCode::TypeDecode);
    // 17 content octets cannot fit an i128.
    let mut bytes = hex!("02 11").to_vec();
    bytes.extend_from_slice(&[1u8; 17]);
    assert_eq!(decode_err(&bytes), ErrorCode::TypeDecode);
}

#[test]
fn boolean_decodes_any_nonzero_as_true() {
    assert_eq!(decode_value(&hex!("01 01 FF")), Value::Boolean(true));
    assert_eq!(decode_value(&hex!("01 01 01")), Value::Boolean(true));
    assert_eq!(decode_value(&hex!("01 01 00")), Value::Boolean(false));
    assert_eq!(decode_err(&hex!("01 02 00 00")), ErrorCode::TypeDecode);
}

#[test]
fn boolean_true_encodes_as_ff() {
    assert_eq!(encode_value(Tag::BOOLEAN, Value::Boolean(true)), hex!("01 01 FF"));
    assert_eq!(
        encode_value(Tag::BOOLEAN, Value::Boolean(false)),
        hex!("01 01 00")
    );
}

#[test]
fn null_must_be_empty() {
    assert_eq!(decode_value(&hex!("05 00")), Value::Null);
    assert_eq!(decode_err(&hex!("05 01 00")), ErrorCode::TypeDecode);
    assert_eq!(encode_value(Tag::NULL, Value::Null), hex!("05 00"));
}

#[test]
fn octet_string_roundtrips_verbatim() {
    assert_eq!(
        decode_value(&hex!("04 03 01 AB CD")),
        Value::OctetString(vec![0x01, 0xAB, 0xCD])
    );
    assert_eq!(
        encode_value(Tag::OCTET_STRING, Value::OctetString(vec![0x01, 0xAB, 0xCD])),
        hex!("04 03 01 AB CD")
    );
}

#[test]
fn oid_decodes_packed_first_arcs() {
    let value = decode_value(&hex!("06 06 2A 86 48 86 F7 0D"));
    let Value::Oid(oid) = &value else {
        panic!("expected OID, got {value:?}");
    };
    assert_eq!(oid.arcs(), &[1, 2, 840, 113549]);
    assert_eq!(oid.to_string(), "1.2.840.113549");
}

#[test]
fn oid_encodes_packed_first_arcs() {
    let oid = Oid::from_str("1.2.840.113549").unwrap();
    assert_eq!(
        encode_value(Tag::OBJECT_IDENTIFIER, Value::Oid(oid)),
        hex!("06 06 2A 86 48 86 F7 0D")
    );
}

#[test]
fn oid_arc_two_admits_large_second_arc() {
    // 2.999: first subidentifier 1079 needs a two-octet varint.
    let oid = Oid::from_str("2.999").unwrap();
    let bytes = encode_value(Tag::OBJECT_IDENTIFIER, Value::Oid(oid.clone()));
    assert_eq!(bytes, hex!("06 02 88 37"));
    assert_eq!(decode_value(&bytes), Value::Oid(oid));
}

#[test]
fn oid_rejects_empty_and_unterminated_content() {
    assert_eq!(decode_err(&hex!("06 00")), ErrorCode::TypeDecode);
    assert_eq!(decode_err(&hex!("06 01 80")), ErrorCode::TypeDecode);
}

#[test]
fn oid_constructor_enforces_arc_constraints() {
    assert!(Oid::new(vec![1]).is_err());
    assert!(Oid::new(vec![3, 1]).is_err());
    assert!(Oid::new(vec![1, 40]).is_err());
    assert!(Oid::new(vec![2, 999]).is_ok());
}

#[test]
fn bit_string_accounts_unused_bits() {
    let value = decode_value(&hex!("03 04 06 6E 5D C0"));
    let Value::BitString(bits) = &value else {
        panic!("expected BIT STRING, got {value:?}");
    };
    assert_eq!(bits.unused_bits(), 6);
    assert_eq!(bits.data(), &hex!("6E 5D C0"));
    assert_eq!(bits.bit_len(), 18);

    let reencoded = encode_value(
        Tag::BIT_STRING,
        Value::BitString(BitString::new(6, hex!("6E 5D C0").to_vec()).unwrap()),
    );
    assert_eq!(reencoded, hex!("03 04 06 6E 5D C0"));
}

#[test]
fn bit_string_rejects_bad_unused_count() {
    assert_eq!(decode_err(&hex!("03 00")), ErrorCode::TypeDecode);
    assert_eq!(decode_err(&hex!("03 02 08 00")), ErrorCode::TypeDecode);
    assert!(BitString::new(8, vec![0]).is_err());
    assert!(BitString::new(1, vec![]).is_err());
}

#[test]
fn utf8_string_validates_utf8() {
    assert_eq!(
        decode_value(&hex!("0C 02 C3 A9")),
        Value::Text(String::from("é"))
    );
    assert_eq!(decode_err(&hex!("0C 02 C3 28")), ErrorCode::TypeDecode);
}

#[test]
fn printable_string_enforces_its_alphabet() {
    assert_eq!(
        decode_value(&hex!("13 04 41 62 20 3F")),
        Value::Text(String::from("Ab ?"))
    );
    // '@' is not in the PrintableString alphabet.
    assert_eq!(decode_err(&hex!("13 03 41 40 42")), ErrorCode::TypeDecode);
    let err = encode_with(
        &Element::primitive_value(Tag::PRINTABLE_STRING, Value::Text(String::from("a@b"))),
        EncodingRules::Der,
        &Registry::with_builtins(),
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::TypeEncode);
}

#[test]
fn ia5_string_is_ascii_only() {
    assert_eq!(
        decode_value(&hex!("16 03 61 40 62")),
        Value::Text(String::from("a@b"))
    );
    assert_eq!(decode_err(&hex!("16 02 61 80")), ErrorCode::TypeDecode);
}
