//! Property-based tests for the version discipline and validation decoding.

use contentful_model::validation;
use contentful_model::{ContentType, Entry, Sys, Validation, Versioned};
use proptest::prelude::*;
use serde_json::{Value, json};

fn bounds_strategy() -> impl Strategy<Value = Value> {
    (proptest::option::of(0u64..100_000), proptest::option::of(0u64..100_000)).prop_map(
        |(min, max)| {
            let mut bounds = serde_json::Map::new();
            if let Some(min) = min {
                bounds.insert("min".into(), json!(min));
            }
            if let Some(max) = max {
                bounds.insert("max".into(), json!(max));
            }
            Value::Object(bounds)
        },
    )
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9]{0,15}").unwrap()
}

/// One validation object of each shape, paired with the key it must decode by.
fn validation_strategy() -> impl Strategy<Value = (&'static str, Value)> {
    prop_oneof![
        prop::collection::vec(word_strategy(), 0..4)
            .prop_map(|ids| ("linkContentType", json!({"linkContentType": ids}))),
        prop::collection::vec(word_strategy(), 0..4)
            .prop_map(|groups| ("linkMimetypeGroup", json!({"linkMimetypeGroup": groups}))),
        (bounds_strategy(), bounds_strategy()).prop_map(|(w, h)| (
            "assetImageDimensions",
            json!({"assetImageDimensions": {"width": w, "height": h}})
        )),
        bounds_strategy().prop_map(|b| ("assetFileSize", json!({"assetFileSize": b}))),
        any::<bool>().prop_map(|u| ("unique", json!({"unique": u}))),
        prop::collection::vec(word_strategy(), 0..5).prop_map(|v| ("in", json!({"in": v}))),
        (-1000i64..1000, -1000i64..1000)
            .prop_map(|(min, max)| ("range", json!({"range": {"min": min, "max": max}}))),
        word_strategy().prop_map(|d| ("dateRange", json!({"dateRange": {"min": d}}))),
        bounds_strategy().prop_map(|b| ("size", json!({"size": b}))),
        (word_strategy(), proptest::option::of("[gimsuy]{1,3}")).prop_map(|(p, flags)| {
            let mut regexp = json!({"pattern": p});
            if let Some(flags) = flags {
                regexp["flags"] = json!(flags);
            }
            ("regexp", json!({"regexp": regexp}))
        }),
    ]
}

proptest! {
    #[test]
    fn content_type_version_is_stored_value(version in any::<u64>()) {
        let ct = ContentType {
            sys: Some(Sys::with_id("ct", version)),
            ..Default::default()
        };
        prop_assert_eq!(ct.version(), version);
    }

    #[test]
    fn entry_version_is_stored_value(version in any::<u64>()) {
        let entry = Entry {
            sys: Some(Sys::with_id("e", version)),
            ..Default::default()
        };
        prop_assert_eq!(entry.version(), version);
    }

    #[test]
    fn single_key_validation_decodes_to_its_variant_and_reencodes(
        (key, input) in validation_strategy()
    ) {
        let decoded = validation::decode(&input).unwrap();
        prop_assert_eq!(decoded.len(), 1);
        prop_assert_eq!(decoded[0].key(), key);
        prop_assert_eq!(serde_json::to_value(&decoded[0]).unwrap(), input);
    }

    #[test]
    fn string_encoded_validation_matches_object_form((_, input) in validation_strategy()) {
        let as_string = Value::String(input.to_string());
        let from_string: Vec<Validation> = validation::decode_many(&[as_string]).unwrap();
        let from_object: Vec<Validation> = validation::decode_many(&[input]).unwrap();
        prop_assert_eq!(from_string, from_object);
    }
}
