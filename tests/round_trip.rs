//! Property tests: whatever goes in comes back out of the generated table

use proptest::prelude::*;
use respack::{
    BinaryStyle, Classification, DuplicatePolicy, RecordLayout, Resource, ResourcePacker,
    classify, decode,
};
use std::collections::HashSet;

/// Byte strings biased toward the characters escaping has to care about
fn payload() -> impl Strategy<Value = Vec<u8>> {
    let special = prop::sample::select(vec![
        b'\n', b'\t', b'\0', b'\\', b'"', b'?', b'0', b'7', b'a', b'f', 0x01, 0x1f, 0x7f, 0x80,
        0xff,
    ]);
    prop::collection::vec(prop_oneof![any::<u8>(), special], 0..256)
}

fn resources() -> impl Strategy<Value = Vec<Resource>> {
    prop::collection::vec(payload(), 0..6).prop_map(|payloads| {
        payloads
            .into_iter()
            .enumerate()
            .map(|(i, bytes)| Resource::new(format!("res/{}.dat", i), bytes))
            .collect()
    })
}

/// Names repeat across entries, and most payloads carry a NUL so they go binary
fn duplicated_resources() -> impl Strategy<Value = Vec<Resource>> {
    prop::collection::vec(payload(), 2..8).prop_map(|payloads| {
        payloads
            .into_iter()
            .enumerate()
            .map(|(i, mut bytes)| {
                if i % 3 != 2 {
                    bytes.insert(0, 0);
                }
                Resource::new(format!("dup/{}.dat", i % 2), bytes)
            })
            .collect()
    })
}

fn round_trip(packer: &ResourcePacker, resources: &[Resource]) -> Result<(), TestCaseError> {
    let doc = packer.pack_resources(resources).unwrap();
    let table = decode(&doc.to_string(), &RecordLayout::default()).unwrap();

    prop_assert_eq!(table.len(), resources.len());
    for (entry, resource) in table.iter().zip(resources) {
        prop_assert_eq!(&entry.name, &resource.name);
        prop_assert_eq!(&entry.data, &resource.bytes);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_round_trip_auxiliary_array(resources in resources()) {
        round_trip(&ResourcePacker::new(), &resources)?;
    }

    #[test]
    fn prop_round_trip_inline_literal(resources in resources()) {
        let packer = ResourcePacker::new().binary_style(BinaryStyle::InlineLiteral);
        round_trip(&packer, &resources)?;
    }

    #[test]
    fn prop_round_trip_allowed_duplicates(resources in duplicated_resources()) {
        let packer = ResourcePacker::new().duplicates(DuplicatePolicy::Allow);
        round_trip(&packer, &resources)?;

        let doc = packer.pack_resources(&resources).unwrap();
        let declarations: Vec<_> = doc
            .lines()
            .iter()
            .filter(|l| l.starts_with("static const unsigned char"))
            .collect();
        let unique: HashSet<_> = declarations.iter().collect();
        prop_assert_eq!(unique.len(), declarations.len());
    }

    #[test]
    fn prop_round_trip_allowed_duplicates_inline(resources in duplicated_resources()) {
        let packer = ResourcePacker::new()
            .duplicates(DuplicatePolicy::Allow)
            .binary_style(BinaryStyle::InlineLiteral);
        round_trip(&packer, &resources)?;
    }

    #[test]
    fn prop_text_path_round_trips_without_nul(bytes in payload()) {
        let bytes: Vec<u8> = bytes.into_iter().filter(|&b| b != 0).collect();
        prop_assert_eq!(classify(&bytes), Classification::Text);
        round_trip(&ResourcePacker::new(), &[Resource::new("t", bytes)])?;
    }

    #[test]
    fn prop_any_nul_is_binary(mut bytes in payload(), at in any::<prop::sample::Index>()) {
        let i = at.index(bytes.len() + 1);
        bytes.insert(i, 0);
        prop_assert_eq!(classify(&bytes), Classification::Binary);
    }

    #[test]
    fn prop_generated_source_is_ascii(resources in resources()) {
        let doc = ResourcePacker::new().pack_resources(&resources).unwrap();
        prop_assert!(doc.to_string().is_ascii());
    }
}
