use super::utils::{build_allowlist, collaborator_entries, is_allowed, maintainer_entries};
use crate::model::CatalogDocument;
use crate::policy::EffectiveConfig;
use serde_json::json;
use url::Url;
use userstyles_types::{DocPointer, Finding, Maintainer, UserstylesCatalog, ids};

pub fn run(
    doc: &CatalogDocument,
    catalog: &UserstylesCatalog,
    cfg: &EffectiveConfig,
    out: &mut Vec<Finding>,
) {
    let Some(policy) = cfg.check_policy(ids::CHECK_MAINTAINERS_PROFILE_URL) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    let mut entries: Vec<(DocPointer, &Maintainer)> = Vec::new();
    for (id, style) in catalog.iter_userstyles() {
        entries.extend(maintainer_entries(id, style));
    }
    entries.extend(collaborator_entries(catalog));

    for (pointer, maintainer) in entries {
        if github_login(&maintainer.url).is_some() {
            continue;
        }
        if is_allowed(allow.as_ref(), &pointer) {
            continue;
        }
        let url_ptr = pointer.key("url");
        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_MAINTAINERS_PROFILE_URL.to_string(),
            code: ids::CODE_NON_GITHUB_PROFILE.to_string(),
            message: format!("'{}' is not a GitHub profile URL", maintainer.url),
            location: Some(doc.location(url_ptr)),
            help: Some("Use the form https://github.com/<login>.".to_string()),
            url: None,
            fingerprint: None,
            data: json!({ "url": maintainer.url }),
        });
    }
}

/// The login of a `https://github.com/<login>` profile URL.
pub(crate) fn github_login(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    if parsed.scheme() != "https" {
        return None;
    }
    if !parsed
        .host_str()
        .is_some_and(|h| h.eq_ignore_ascii_case("github.com"))
    {
        return None;
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return None;
    }
    if !parsed.username().is_empty() || parsed.port().is_some() {
        return None;
    }

    let mut segments: Vec<&str> = parsed.path_segments()?.collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }
    match segments.as_slice() {
        [login] if !login.is_empty() => Some((*login).to_string()),
        _ => None,
    }
}
