use hex_literal::hex;

use x690_tlv::{
    decode_with, validate_der, DecodeLimits, DerBytes, EncodingRules, ErrorCode, Registry,
};

#[test]
fn validated_der_bytes_are_exposed_verbatim() {
    let bytes = hex!("30 03 02 01 05");
    let canon = validate_der(&bytes, DecodeLimits::for_bytes(bytes.len())).unwrap();
    assert_eq!(canon.as_bytes(), bytes);
    assert_eq!(canon.len(), bytes.len());
    assert!(!canon.is_empty());
}

#[test]
fn ber_only_forms_do_not_validate_as_der() {
    let indefinite = hex!("30 80 02 01 05 00 00");
    let err = validate_der(&indefinite, DecodeLimits::for_bytes(indefinite.len())).unwrap_err();
    assert_eq!(err.code, ErrorCode::MalformedLength);
    assert_eq!(err.offset, 1);

    let redundant = hex!("30 81 03 02 01 05");
    let err = validate_der(&redundant, DecodeLimits::for_bytes(redundant.len())).unwrap_err();
    assert_eq!(err.code, ErrorCode::MalformedLength);
}

#[cfg(feature = "sha2")]
#[test]
fn fingerprint_is_stable_between_borrowed_and_owned() {
    let bytes = hex!("30 06 02 01 05 04 01 41");
    let limits = DecodeLimits::for_bytes(bytes.len());

    let borrowed = validate_der(&bytes, limits).unwrap();
    let owned = DerBytes::from_slice(&bytes, limits).unwrap();

    assert_eq!(borrowed.sha256(), owned.sha256());
    assert_eq!(borrowed.to_owned(), owned);
    assert_eq!(owned.as_bytes(), bytes);
}

#[cfg(feature = "sha2")]
#[test]
fn fingerprint_distinguishes_different_values() {
    let limits = DecodeLimits::for_bytes(8);
    let a = validate_der(&hex!("02 01 05"), limits).unwrap().sha256();
    let b = validate_der(&hex!("02 01 06"), limits).unwrap().sha256();
    assert_ne!(a, b);
}

#[test]
fn owned_der_bytes_reject_malformed_input() {
    let bytes = hex!("30 05 02 01 05");
    let err = DerBytes::from_slice(&bytes, DecodeLimits::for_bytes(bytes.len())).unwrap_err();
    assert_eq!(err.code, ErrorCode::TruncatedInput);
    assert_eq!(err.offset, 2);
}

#[test]
fn validate_agrees_with_decode_on_error_position() {
    let vectors: &[(&[u8], EncodingRules)] = &[
        (&hex!("30 05 02 01 05"), EncodingRules::Der),
        (&hex!("30 80 02 01 05"), EncodingRules::Ber),
        (&hex!("30 03 02 03 AA BB CC"), EncodingRules::Ber),
        (&hex!("1F 1E 00"), EncodingRules::Der),
        (&hex!("05 00 00"), EncodingRules::Ber),
    ];
    let registry = Registry::with_builtins();
    for (bytes, rules) in vectors {
        let limits = DecodeLimits::for_bytes(bytes.len());
        let d = decode_with(bytes, *rules, &registry, limits).unwrap_err();
        let v = x690_tlv::validate(bytes, *rules, limits).unwrap_err();
        assert_eq!(d, v, "mismatch for {bytes:02X?}");
    }
}
