//! Property-based tests for query string encoding

use proptest::prelude::*;
use url::form_urlencoded;
use yadwy_http::{ParamValue, QueryParams};

fn value_strategy() -> impl Strategy<Value = ParamValue> {
    prop_oneof![
        any::<String>().prop_map(ParamValue::Str),
        any::<i64>().prop_map(ParamValue::Int),
        any::<bool>().prop_map(ParamValue::Bool),
        Just(ParamValue::Null),
    ]
}

/// Property: decoding the encoded query yields exactly the non-null
/// entries, in insertion order, with their string forms.
#[test]
fn prop_encoding_keeps_non_null_entries_in_order() {
    proptest!(|(entries in prop::collection::vec(("[a-z]{1,8}", value_strategy()), 0..20))| {
        let mut params = QueryParams::new();
        let mut expected: Vec<(String, ParamValue)> = Vec::new();
        for (key, value) in entries {
            params.insert(key.clone(), value.clone());
            match expected.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => expected.push((key, value)),
            }
        }

        let decoded: Vec<(String, String)> = form_urlencoded::parse(params.encode().as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let expected: Vec<(String, String)> = expected
            .into_iter()
            .filter(|(_, v)| *v != ParamValue::Null)
            .map(|(k, v)| (k, v.to_string()))
            .collect();

        prop_assert_eq!(decoded, expected);
    });
}

/// Property: an endpoint without parameters is never altered.
#[test]
fn prop_null_only_params_leave_endpoint_untouched() {
    proptest!(|(keys in prop::collection::vec("[a-z]{1,8}", 0..10), endpoint in "/v1/[a-z]{1,10}")| {
        let params: QueryParams = keys.into_iter().map(|k| (k, ParamValue::Null)).collect();
        prop_assert_eq!(params.apply(&endpoint), endpoint);
    });
}
