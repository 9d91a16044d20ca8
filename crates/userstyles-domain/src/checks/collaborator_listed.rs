use super::utils::{
    build_allowlist, is_allowed, maintainer_entries, normalize_profile_url,
};
use crate::model::CatalogDocument;
use crate::policy::EffectiveConfig;
use serde_json::json;
use std::collections::BTreeSet;
use userstyles_types::{Finding, UserstylesCatalog, ids};

pub fn run(
    doc: &CatalogDocument,
    catalog: &UserstylesCatalog,
    cfg: &EffectiveConfig,
    out: &mut Vec<Finding>,
) {
    let Some(policy) = cfg.check_policy(ids::CHECK_MAINTAINERS_COLLABORATOR_LISTED) else {
        return;
    };
    // Without a collaborators list there is nothing to cross-reference.
    let Some(collaborators) = catalog.collaborators.as_ref() else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    let known: BTreeSet<String> = collaborators
        .iter()
        .map(|c| normalize_profile_url(&c.url))
        .collect();

    for (id, style) in catalog.iter_userstyles() {
        for (pointer, maintainer) in maintainer_entries(id, style) {
            if known.contains(&normalize_profile_url(&maintainer.url)) {
                continue;
            }
            if is_allowed(allow.as_ref(), &pointer) {
                continue;
            }
            out.push(Finding {
                severity: policy.severity,
                check_id: ids::CHECK_MAINTAINERS_COLLABORATOR_LISTED.to_string(),
                code: ids::CODE_MAINTAINER_NOT_COLLABORATOR.to_string(),
                message: format!(
                    "maintainer '{}' of '{}' is not listed in collaborators",
                    maintainer.display_name(),
                    id
                ),
                location: Some(doc.location(pointer)),
                help: Some(
                    "Add the maintainer to the top-level collaborators list.".to_string(),
                ),
                url: None,
                fingerprint: None,
                data: json!({
                    "userstyle": id.as_str(),
                    "url": maintainer.url,
                }),
            });
        }
    }
}
