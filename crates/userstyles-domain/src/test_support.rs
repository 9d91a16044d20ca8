use crate::model::CatalogDocument;
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use userstyles_types::{Severity, ids};

pub const ALL_CHECKS: &[&str] = &[
    ids::CHECK_SCHEMA_STRUCTURE,
    ids::CHECK_SCHEMA_IDENTIFIER,
    ids::CHECK_SCHEMA_ENUM,
    ids::CHECK_SCHEMA_MIN_ITEMS,
    ids::CHECK_MAINTAINERS_COLLABORATOR_LISTED,
    ids::CHECK_MAINTAINERS_DUPLICATES,
    ids::CHECK_MAINTAINERS_PROFILE_URL,
    ids::CHECK_README_APP_LINK,
    ids::CHECK_USERSTYLES_ICON,
    ids::CHECK_USERSTYLES_UNMAINTAINED,
];

pub fn doc(value: Value) -> CatalogDocument {
    CatalogDocument::new("userstyles.json", value)
}

/// One conforming userstyle with one maintainer who is also a collaborator.
pub fn discord_catalog() -> Value {
    json!({
        "userstyles": {
            "discord": {
                "name": "Discord",
                "category": "messaging",
                "color": "blue",
                "icon": "discord",
                "readme": {
                    "app-link": "https://discord.com",
                    "current-maintainers": [
                        { "name": "Octo Cat", "url": "https://github.com/octocat" }
                    ]
                }
            }
        },
        "collaborators": [
            { "name": "Octo Cat", "url": "https://github.com/octocat" }
        ]
    })
}

pub fn config_with_check(check_id: &str, severity: Severity) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled(severity));
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
    }
}

pub fn config_with_check_allow(
    check_id: &str,
    severity: Severity,
    allow: Vec<&str>,
) -> EffectiveConfig {
    let mut cfg = config_with_check(check_id, severity);
    if let Some(policy) = cfg.checks.get_mut(check_id) {
        policy.allow = allow.into_iter().map(str::to_string).collect();
    }
    cfg
}

/// Every check enabled at `severity`.
pub fn full_config(severity: Severity) -> EffectiveConfig {
    let checks = ALL_CHECKS
        .iter()
        .map(|id| (id.to_string(), CheckPolicy::enabled(severity)))
        .collect();
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
    }
}
