use hex_literal::hex;

use x690_tlv::{
    decode, decode_with, encode_with, register_global, Class, DecodeLimits, Element,
    EncodingRules, ErrorCode, Registry, Tag, TagKey, TypeCodec, Value,
};

/// A toy vendor type: a big-endian u16 counter in a Private-class tag.
struct CounterCodec;

impl TypeCodec for CounterCodec {
    fn decode(&self, raw: &[u8]) -> Result<Value, ErrorCode> {
        match raw {
            [hi, lo] => Ok(Value::Integer(i128::from(u16::from_be_bytes([*hi, *lo])))),
            _ => Err(ErrorCode::TypeDecode),
        }
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, ErrorCode> {
        let Value::Integer(v) = value else {
            return Err(ErrorCode::TypeEncode);
        };
        let v = u16::try_from(*v).map_err(|_| ErrorCode::TypeEncode)?;
        Ok(v.to_be_bytes().to_vec())
    }
}

fn limits_for(bytes: &[u8]) -> DecodeLimits {
    DecodeLimits::for_bytes(bytes.len())
}

#[test]
fn custom_handler_decodes_and_reencodes() {
    let mut registry = Registry::with_builtins();
    registry.register(TagKey::new(Class::Private, 7, false), Box::new(CounterCodec));

    // Private primitive tag 7, counter value 258.
    let bytes = hex!("C7 02 01 02");
    let element = decode_with(&bytes, EncodingRules::Der, &registry, limits_for(&bytes)).unwrap();
    assert_eq!(element.value(), Some(&Value::Integer(258)));

    let out = encode_with(&element, EncodingRules::Der, &registry).unwrap();
    assert_eq!(out, bytes);
}

#[test]
fn last_registration_wins() {
    let key = TagKey::new(Class::Private, 7, false);
    let mut registry = Registry::new();
    registry.register(key, Box::new(CounterCodec));
    registry.register_fns(
        key,
        |_raw| Ok(Value::Null),
        |_value| Err(ErrorCode::TypeEncode),
    );

    let bytes = hex!("C7 02 01 02");
    let element = decode_with(&bytes, EncodingRules::Der, &registry, limits_for(&bytes)).unwrap();
    assert_eq!(element.value(), Some(&Value::Null));
}

#[test]
fn unregister_restores_raw_decoding() {
    let key = TagKey::new(Class::Private, 7, false);
    let mut registry = Registry::new();
    registry.register(key, Box::new(CounterCodec));
    assert!(registry.unregister(key));
    assert!(!registry.unregister(key));

    let bytes = hex!("C7 02 01 02");
    let element = decode_with(&bytes, EncodingRules::Der, &registry, limits_for(&bytes)).unwrap();
    assert_eq!(element.value(), None);
    assert_eq!(element.raw(), Some(&hex!("01 02")[..]));
}

#[test]
fn handler_failure_aborts_the_whole_decode() {
    let mut registry = Registry::new();
    registry.register(TagKey::new(Class::Private, 7, false), Box::new(CounterCodec));

    // SEQUENCE { Private#7 with a three-octet body the handler rejects }
    let bytes = hex!("30 05 C7 03 01 02 03");
    let err = decode_with(&bytes, EncodingRules::Der, &registry, limits_for(&bytes)).unwrap_err();
    assert_eq!(err.code, ErrorCode::TypeDecode);
    assert_eq!(err.offset, 4);
}

#[test]
fn lookup_distinguishes_constructed_from_primitive() {
    let mut registry = Registry::new();
    registry.register(TagKey::new(Class::Private, 7, false), Box::new(CounterCodec));
    assert!(registry.lookup(TagKey::new(Class::Private, 7, false)).is_some());
    assert!(registry.lookup(TagKey::new(Class::Private, 7, true)).is_none());
    assert!(registry.lookup(TagKey::new(Class::Application, 7, false)).is_none());
}

#[test]
fn builtin_registry_reports_its_size() {
    assert!(Registry::new().is_empty());
    assert!(!Registry::with_builtins().is_empty());
    assert_eq!(Registry::with_builtins().len(), 9);
}

#[test]
fn global_registry_serves_decode_and_encode() {
    let bytes = hex!("02 01 2A");
    let element = decode(&bytes, EncodingRules::Der).unwrap();
    assert_eq!(element.value(), Some(&Value::Integer(42)));

    let out = x690_tlv::encode(&element, EncodingRules::Der).unwrap();
    assert_eq!(out, bytes);
}

#[test]
fn global_registration_is_visible_to_decode() {
    // Use a tag number no other test touches; the global registry is
    // process-wide state shared across the test harness's threads.
    register_global(TagKey::new(Class::Private, 901, false), Box::new(CounterCodec));

    let bytes = hex!("DF 87 05 02 01 02");
    let element = decode(&bytes, EncodingRules::Der).unwrap();
    assert_eq!(element.value(), Some(&Value::Integer(258)));
}

#[test]
fn programmatic_tree_with_custom_value_encodes() {
    let mut registry = Registry::new();
    registry.register(TagKey::new(Class::Private, 7, false), Box::new(CounterCodec));

    let element = Element::constructed(
        Tag::SEQUENCE,
        vec![Element::primitive_value(Tag::private(7), Value::Integer(7))],
    );
    let out = encode_with(&element, EncodingRules::Der, &registry).unwrap();
    assert_eq!(out, hex!("30 04 C7 02 00 07"));
}
