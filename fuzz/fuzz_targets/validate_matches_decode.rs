#![no_main]

use libfuzzer_sys::fuzz_target;

use x690_tlv::{decode_with, validate, DecodeLimits, EncodingRules, Registry};

fuzz_target!(|data: &[u8]| {
    let registry = Registry::new();
    let mut limits = DecodeLimits::for_bytes(data.len());
    limits.max_depth = 64;

    // The allocation-free validator and the tree builder must agree exactly:
    // same accept/reject decision, same error code, same offset.
    for rules in [EncodingRules::Ber, EncodingRules::Cer, EncodingRules::Der] {
        let decoded = decode_with(data, rules, &registry, limits).map(|_| ());
        let validated = validate(data, rules, limits);
        assert_eq!(decoded, validated);
    }
});
