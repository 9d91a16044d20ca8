//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Identifier acceptance by the document walker
//! - Enumerated values (category, color)
//! - Findings ordering determinism and truncation
//! - Agreement between the document walker and the typed model

use crate::engine::evaluate;
use crate::schema::{SchemaViolation, parse_catalog, validate_document};
use crate::test_support::{discord_catalog, doc, full_config};
use proptest::prelude::*;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use userstyles_types::{Category, Color, Severity, UserstylesCatalog, VerdictStatus, ids};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_valid_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_-]{1,24}").unwrap()
}

/// Identifiers with at least one character outside the allowed set.
fn arb_invalid_id() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[a-z]{0,8}").unwrap(),
        prop::sample::select(vec![' ', '.', '/', '~', '!', 'é', '+']),
        prop::string::string_regex("[a-z]{0,8}").unwrap(),
    )
        .prop_map(|(a, c, b)| format!("{a}{c}{b}"))
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
    ]
}

// ----------------------------------------------------------------------------
// Structured catalog documents: mostly well-formed, with wrong types, short
// lists, missing keys and extra keys mixed in.
// ----------------------------------------------------------------------------

fn arb_wrong_type() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!(7)),
        Just(json!(true)),
        Just(json!({})),
    ]
}

fn arb_string() -> impl Strategy<Value = Value> {
    prop_oneof![
        8 => "[a-z ]{0,8}".prop_map(Value::from),
        1 => arb_wrong_type(),
    ]
}

fn arb_string_or_list() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => "[a-z]{1,8}".prop_map(Value::from),
        4 => prop::collection::vec(arb_string(), 0..=3).prop_map(Value::Array),
        1 => arb_wrong_type(),
    ]
}

fn arb_enum_value(known: Vec<String>) -> impl Strategy<Value = Value> {
    prop_oneof![
        6 => prop::sample::select(known).prop_map(Value::from),
        2 => "[a-z]{3,6}".prop_map(Value::from),
        1 => arb_wrong_type(),
    ]
}

fn arb_extra() -> impl Strategy<Value = BTreeMap<String, Value>> {
    prop::collection::btree_map(
        "x-[a-z]{1,4}",
        prop_oneof!["[a-z]{0,4}".prop_map(Value::from), arb_wrong_type()],
        0..=2,
    )
}

fn object(fields: Vec<(&str, Option<Value>)>, extra: BTreeMap<String, Value>) -> Value {
    let mut map: Map<String, Value> = extra.into_iter().collect();
    for (key, value) in fields {
        if let Some(value) = value {
            map.insert(key.to_string(), value);
        }
    }
    Value::Object(map)
}

fn arb_list<S>(item: S) -> impl Strategy<Value = Value>
where
    S: Strategy<Value = Value>,
{
    prop_oneof![
        8 => prop::collection::vec(item, 0..=3).prop_map(Value::Array),
        1 => arb_wrong_type(),
    ]
}

fn arb_maintainer() -> impl Strategy<Value = Value> {
    let url = prop_oneof![
        4 => "https://github\\.com/[a-z]{1,6}".prop_map(Value::from),
        1 => arb_wrong_type(),
    ];
    let entry = (
        prop::option::of(arb_string()),
        prop::option::weighted(0.9, url),
        arb_extra(),
    )
        .prop_map(|(name, url, extra)| object(vec![("name", name), ("url", url)], extra));
    prop_oneof![9 => entry, 1 => arb_wrong_type()]
}

fn arb_faq_entry() -> impl Strategy<Value = Value> {
    (
        prop::option::weighted(0.9, arb_string()),
        prop::option::weighted(0.9, arb_string()),
        arb_extra(),
    )
        .prop_map(|(question, answer, extra)| {
            object(vec![("question", question), ("answer", answer)], extra)
        })
}

fn arb_readme() -> impl Strategy<Value = Value> {
    (
        prop::option::weighted(0.9, arb_string_or_list()),
        prop::option::of(arb_string()),
        prop::option::of(arb_list(arb_faq_entry())),
        prop::option::weighted(0.9, arb_list(arb_maintainer())),
        prop::option::of(arb_list(arb_maintainer())),
        arb_extra(),
    )
        .prop_map(|(app_link, usage, faq, current, past, extra)| {
            object(
                vec![
                    ("app-link", app_link),
                    ("usage", usage),
                    ("faq", faq),
                    ("current-maintainers", current),
                    ("past-maintainers", past),
                ],
                extra,
            )
        })
}

fn arb_userstyle() -> impl Strategy<Value = Value> {
    let categories = Category::ALL.iter().map(|c| c.as_str().to_string()).collect();
    let colors = Color::ALL.iter().map(|c| c.as_str().to_string()).collect();
    (
        prop::option::weighted(0.9, arb_string_or_list()),
        prop::option::weighted(0.9, arb_enum_value(categories)),
        prop::option::of(arb_enum_value(colors)),
        prop::option::of(arb_string()),
        prop::option::weighted(0.9, arb_readme()),
        prop::option::weighted(0.1, arb_string()),
    )
        .prop_map(|(name, category, color, icon, readme, unknown)| {
            object(
                vec![
                    ("name", name),
                    ("category", category),
                    ("color", color),
                    ("icon", icon),
                    ("readme", readme),
                    ("homepage", unknown),
                ],
                BTreeMap::new(),
            )
        })
}

fn arb_document() -> impl Strategy<Value = Value> {
    let id = prop_oneof![9 => arb_valid_id(), 1 => arb_invalid_id()];
    let userstyles = prop_oneof![
        9 => prop::collection::btree_map(id, arb_userstyle(), 0..=3)
            .prop_map(|m| Value::Object(m.into_iter().collect())),
        1 => arb_wrong_type(),
    ];
    (
        prop::option::weighted(0.9, userstyles),
        prop::option::of(arb_list(arb_maintainer())),
        prop::option::weighted(0.2, arb_string()),
    )
        .prop_map(|(userstyles, collaborators, schema)| {
            object(
                vec![
                    ("userstyles", userstyles),
                    ("collaborators", collaborators),
                    ("$schema", schema),
                ],
                BTreeMap::new(),
            )
        })
}

fn with_userstyle(id: &str) -> Value {
    let mut value = discord_catalog();
    let style = value["userstyles"]["discord"].clone();
    let mut styles = serde_json::Map::new();
    styles.insert(id.to_string(), style);
    value["userstyles"] = Value::Object(styles);
    value
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn valid_identifiers_pass(id in arb_valid_id()) {
        prop_assert!(validate_document(&with_userstyle(&id)).is_empty());
    }

    #[test]
    fn invalid_identifiers_are_reported(id in arb_invalid_id()) {
        let violations = validate_document(&with_userstyle(&id));
        prop_assert_eq!(violations.len(), 1);
        prop_assert_eq!(violations[0].code(), ids::CODE_INVALID_IDENTIFIER);
    }

    #[test]
    fn category_membership_matches_enum(value in "[a-z_]{1,20}") {
        let mut doc_value = discord_catalog();
        doc_value["userstyles"]["discord"]["category"] = json!(value);
        let known = Category::ALL.iter().any(|c| c.as_str() == value);
        prop_assert_eq!(validate_document(&doc_value).is_empty(), known);
    }

    #[test]
    fn color_membership_matches_enum(value in "[a-z]{1,12}") {
        let mut doc_value = discord_catalog();
        doc_value["userstyles"]["discord"]["color"] = json!(value);
        let known = Color::ALL.iter().any(|c| c.as_str() == value);
        prop_assert_eq!(validate_document(&doc_value).is_empty(), known);
    }

    #[test]
    fn evaluation_is_deterministic(
        categories in prop::collection::vec("[a-z]{3,8}", 1..6),
        severity in arb_severity(),
    ) {
        let mut value = discord_catalog();
        let template = value["userstyles"]["discord"].clone();
        for (i, category) in categories.iter().enumerate() {
            let mut style = template.clone();
            style["category"] = json!(category);
            value["userstyles"][format!("style-{i}")] = style;
        }

        let cfg = full_config(severity);
        let first = evaluate(&doc(value.clone()), &cfg);
        let second = evaluate(&doc(value), &cfg);
        prop_assert_eq!(&first.findings, &second.findings);
        prop_assert_eq!(&first.verdict, &second.verdict);
    }

    #[test]
    fn truncation_never_exceeds_max(
        max in 0usize..5,
        extra in prop::collection::vec("[a-z]{3,6}", 0..8),
    ) {
        let mut value = discord_catalog();
        for key in &extra {
            value["userstyles"]["discord"][format!("x-{key}")] = json!(1);
        }
        let mut cfg = full_config(Severity::Error);
        cfg.max_findings = max;

        let report = evaluate(&doc(value), &cfg);
        prop_assert!(report.findings.len() <= max);
        prop_assert_eq!(report.data.findings_emitted as usize, report.findings.len());
        prop_assert!(report.data.findings_total >= report.data.findings_emitted);
        if report.data.schema_violations > 0 {
            prop_assert_eq!(report.verdict.status, VerdictStatus::Fail);
        }
    }

    #[test]
    fn clean_documents_always_deserialize(value in arb_document()) {
        let violations = validate_document(&value);
        if violations.is_empty() {
            prop_assert!(parse_catalog(&value).is_ok(), "walker accepted {value}");
        } else if serde_json::from_value::<UserstylesCatalog>(value.clone()).is_ok() {
            // serde reads `null` as an absent optional key; the contract does not.
            prop_assert!(
                violations
                    .iter()
                    .all(|v| matches!(v, SchemaViolation::TypeMismatch { found: "null", .. })),
                "serde accepted {value} despite {violations:?}"
            );
        }
    }
}
