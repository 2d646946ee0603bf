#![allow(clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use x690_tlv::{
    decode_with, encode_with, validate, DecodeLimits, Element, EncodingRules, Registry, Tag,
    Value,
};

/// A certificate-shaped sample: a SEQUENCE of 64 records, each holding an
/// INTEGER serial and an OCTET STRING payload.
fn sample_medium(registry: &Registry) -> Vec<u8> {
    let mut records = Vec::new();
    for i in 0..64_i128 {
        records.push(Element::constructed(
            Tag::SEQUENCE,
            vec![
                Element::primitive_value(Tag::INTEGER, Value::Integer(i)),
                Element::primitive(Tag::OCTET_STRING, vec![i as u8; 32]),
            ],
        ));
    }
    let tree = Element::constructed(Tag::SEQUENCE, records);
    encode_with(&tree, EncodingRules::Der, registry).unwrap()
}

fn bench_codec(c: &mut Criterion) {
    let registry = Registry::with_builtins();
    let small = vec![0x30, 0x03, 0x02, 0x01, 0x05];
    let small_limits = DecodeLimits::for_bytes(small.len());

    c.bench_function("validate_der_small", |b| {
        b.iter(|| {
            validate(black_box(&small), EncodingRules::Der, small_limits).unwrap();
        })
    });

    let medium = sample_medium(&registry);
    let medium_limits = DecodeLimits::for_bytes(medium.len());

    c.bench_function("validate_der_medium", |b| {
        b.iter(|| {
            validate(black_box(&medium), EncodingRules::Der, medium_limits).unwrap();
        })
    });

    c.bench_function("decode_medium", |b| {
        b.iter(|| {
            let tree =
                decode_with(black_box(&medium), EncodingRules::Der, &registry, medium_limits)
                    .unwrap();
            black_box(tree);
        })
    });

    let decoded = decode_with(&medium, EncodingRules::Der, &registry, medium_limits).unwrap();
    c.bench_function("encode_medium", |b| {
        b.iter(|| {
            let bytes = encode_with(&decoded, EncodingRules::Der, &registry).unwrap();
            black_box(bytes);
        })
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
