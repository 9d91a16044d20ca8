use crate::{
    model::{CheckConfig, UserstylesConfigV1},
    presets,
};
use anyhow::Context;
use globset::Glob;
use userstyles_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use userstyles_types::{Severity, ids};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: UserstylesConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    if !presets::PROFILES.contains(&profile.as_str()) {
        anyhow::bail!(
            "unknown profile: {profile} (expected {})",
            presets::PROFILES.join("|")
        );
    }

    let mut effective = presets::preset(&profile);

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        if is_schema_check(check_id) && cc != &CheckConfig::default() {
            anyhow::bail!(
                "{check_id} cannot be configured; schema violations always fail"
            );
        }

        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
        if !cc.allow.is_empty() {
            validate_allowlist(check_id, &cc.allow)?;
            entry.allow = cc.allow.clone();
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(ResolvedConfig { effective })
}

fn is_schema_check(check_id: &str) -> bool {
    [
        ids::CHECK_SCHEMA_STRUCTURE,
        ids::CHECK_SCHEMA_IDENTIFIER,
        ids::CHECK_SCHEMA_ENUM,
        ids::CHECK_SCHEMA_MIN_ITEMS,
    ]
    .contains(&check_id)
}

fn validate_allowlist(check_id: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern)
            .with_context(|| format!("invalid allow glob for {check_id}: {pattern}"))?;
    }
    Ok(())
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_check(check_id: &str, cc: CheckConfig) -> UserstylesConfigV1 {
        let mut cfg = UserstylesConfigV1::default();
        cfg.checks.insert(check_id.to_string(), cc);
        cfg
    }

    #[test]
    fn cli_profile_beats_config_profile() {
        let cfg = UserstylesConfigV1 {
            profile: Some("compat".to_string()),
            ..UserstylesConfigV1::default()
        };
        let resolved = resolve_config(
            cfg,
            Overrides {
                profile: Some("warn".to_string()),
                max_findings: Some(3),
            },
        )
        .expect("resolve");
        assert_eq!(resolved.effective.profile, "warn");
        assert_eq!(resolved.effective.max_findings, 3);
    }

    #[test]
    fn per_check_overrides_apply() {
        let cfg = with_check(
            ids::CHECK_USERSTYLES_ICON,
            CheckConfig {
                enabled: Some(true),
                severity: Some("info".to_string()),
                allow: vec!["legacy-*".to_string()],
            },
        );
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        let policy = resolved
            .effective
            .check_policy(ids::CHECK_USERSTYLES_ICON)
            .expect("icon policy");
        assert_eq!(policy.severity, Severity::Info);
        assert_eq!(policy.allow, vec!["legacy-*".to_string()]);
    }

    #[test]
    fn disabling_a_check_hides_its_policy() {
        let cfg = with_check(
            ids::CHECK_USERSTYLES_UNMAINTAINED,
            CheckConfig {
                enabled: Some(false),
                ..CheckConfig::default()
            },
        );
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert!(
            resolved
                .effective
                .check_policy(ids::CHECK_USERSTYLES_UNMAINTAINED)
                .is_none()
        );
    }

    #[test]
    fn rejects_bad_values() {
        let bad_severity = with_check(
            ids::CHECK_USERSTYLES_ICON,
            CheckConfig {
                severity: Some("fatal".to_string()),
                ..CheckConfig::default()
            },
        );
        assert!(resolve_config(bad_severity, Overrides::default()).is_err());

        let bad_glob = with_check(
            ids::CHECK_USERSTYLES_ICON,
            CheckConfig {
                allow: vec!["[".to_string()],
                ..CheckConfig::default()
            },
        );
        assert!(resolve_config(bad_glob, Overrides::default()).is_err());

        let bad_fail_on = UserstylesConfigV1 {
            fail_on: Some("never".to_string()),
            ..UserstylesConfigV1::default()
        };
        assert!(resolve_config(bad_fail_on, Overrides::default()).is_err());

        let bad_profile = Overrides {
            profile: Some("lenient".to_string()),
            max_findings: None,
        };
        let err = resolve_config(UserstylesConfigV1::default(), bad_profile);
        assert!(err.is_err());
    }

    #[test]
    fn schema_checks_reject_every_override() {
        let overrides = [
            CheckConfig {
                enabled: Some(false),
                ..CheckConfig::default()
            },
            CheckConfig {
                severity: Some("info".to_string()),
                ..CheckConfig::default()
            },
            CheckConfig {
                allow: vec!["*".to_string()],
                ..CheckConfig::default()
            },
        ];
        for check_id in [
            ids::CHECK_SCHEMA_STRUCTURE,
            ids::CHECK_SCHEMA_IDENTIFIER,
            ids::CHECK_SCHEMA_ENUM,
            ids::CHECK_SCHEMA_MIN_ITEMS,
        ] {
            for cc in &overrides {
                let err = resolve_config(with_check(check_id, cc.clone()), Overrides::default())
                    .expect_err("schema override");
                assert!(err.to_string().contains("cannot be configured"), "{err}");
            }
        }
    }

    #[test]
    fn empty_schema_check_table_is_accepted() {
        let cfg = with_check(ids::CHECK_SCHEMA_ENUM, CheckConfig::default());
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        let policy = resolved
            .effective
            .check_policy(ids::CHECK_SCHEMA_ENUM)
            .expect("schema.enum policy");
        assert_eq!(policy.severity, Severity::Error);
    }
}
