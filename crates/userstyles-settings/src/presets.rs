use std::collections::BTreeMap;
use userstyles_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use userstyles_types::Severity;

/// Names accepted by [`preset`].
pub const PROFILES: &[&str] = &["strict", "warn", "compat"];

/// Preset profiles are opinionated defaults.
///
/// Schema checks are errors in every profile; the profiles only differ in how
/// hard the hygiene checks bite.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        "compat" => compat_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Error),
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Warning,
        max_findings: 200,
        checks: default_checks(Severity::Warning),
    }
}

fn compat_profile() -> EffectiveConfig {
    // Compatibility mode keeps hygiene findings visible without failing the run.
    EffectiveConfig {
        profile: "compat".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Warning),
    }
}

fn default_checks(hygiene_severity: Severity) -> BTreeMap<String, CheckPolicy> {
    use userstyles_types::ids::*;
    let mut m = BTreeMap::new();

    for check_id in [
        CHECK_SCHEMA_STRUCTURE,
        CHECK_SCHEMA_IDENTIFIER,
        CHECK_SCHEMA_ENUM,
        CHECK_SCHEMA_MIN_ITEMS,
    ] {
        m.insert(check_id.to_string(), CheckPolicy::enabled(Severity::Error));
    }

    for check_id in [
        CHECK_MAINTAINERS_COLLABORATOR_LISTED,
        CHECK_MAINTAINERS_DUPLICATES,
        CHECK_MAINTAINERS_PROFILE_URL,
        CHECK_README_APP_LINK,
        CHECK_USERSTYLES_ICON,
    ] {
        m.insert(check_id.to_string(), CheckPolicy::enabled(hygiene_severity));
    }

    m.insert(
        CHECK_USERSTYLES_UNMAINTAINED.to_string(),
        CheckPolicy::enabled(Severity::Info),
    );

    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use userstyles_types::{explain, ids};

    #[test]
    fn every_known_check_has_a_default_policy() {
        for profile in PROFILES {
            let cfg = preset(profile);
            for check_id in explain::all_check_ids() {
                assert!(
                    cfg.check_policy(check_id).is_some(),
                    "{profile} lacks {check_id}"
                );
            }
        }
    }

    #[test]
    fn schema_checks_are_errors_everywhere() {
        for profile in PROFILES {
            let cfg = preset(profile);
            let policy = cfg
                .check_policy(ids::CHECK_SCHEMA_ENUM)
                .expect("schema.enum policy");
            assert_eq!(policy.severity, Severity::Error);
        }
    }

    #[test]
    fn unknown_profile_falls_back_to_strict() {
        assert_eq!(preset("nope").profile, "strict");
        assert_eq!(preset("warn").fail_on, FailOn::Warning);
    }
}
