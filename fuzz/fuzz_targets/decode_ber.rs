#![no_main]

use libfuzzer_sys::fuzz_target;

use x690_tlv::{decode_with, encode_with, DecodeLimits, EncodingRules, Registry};

fn fuzz_limits(input_len: usize) -> DecodeLimits {
    // Keep limits tight enough to avoid pathological allocations while still
    // exploring structure.
    let mut limits = DecodeLimits::for_bytes(input_len.min(1 << 20));
    limits.max_depth = 64;
    limits.max_total_elements = 1 << 16;
    limits
}

fuzz_target!(|data: &[u8]| {
    let registry = Registry::new();
    let limits = fuzz_limits(data.len());
    if let Ok(element) = decode_with(data, EncodingRules::Ber, &registry, limits) {
        // Whatever decoded must re-encode under BER, and re-decoding the
        // result must reproduce the same tree.
        let out = encode_with(&element, EncodingRules::Ber, &registry).expect("re-encode");
        let again = decode_with(&out, EncodingRules::Ber, &registry, fuzz_limits(out.len()))
            .expect("re-decode");
        assert_eq!(again, element);
    }
});
