use super::utils::{
    build_allowlist, collaborator_entries, is_allowed, maintainer_entries, normalize_profile_url,
};
use crate::model::CatalogDocument;
use crate::policy::{CheckPolicy, EffectiveConfig};
use serde_json::json;
use std::collections::BTreeMap;
use userstyles_types::{DocPointer, Finding, Maintainer, UserstylesCatalog, ids};

pub fn run(
    doc: &CatalogDocument,
    catalog: &UserstylesCatalog,
    cfg: &EffectiveConfig,
    out: &mut Vec<Finding>,
) {
    let Some(policy) = cfg.check_policy(ids::CHECK_MAINTAINERS_DUPLICATES) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    for (id, style) in catalog.iter_userstyles() {
        for (pointer, first, maintainer) in duplicates(maintainer_entries(id, style)) {
            if is_allowed(allow.as_ref(), &pointer) {
                continue;
            }
            out.push(duplicate_finding(
                doc,
                policy,
                ids::CODE_DUPLICATE_MAINTAINER,
                format!(
                    "maintainer '{}' is listed more than once for '{}'",
                    maintainer.display_name(),
                    id
                ),
                pointer,
                first,
                maintainer,
            ));
        }
    }

    for (pointer, first, collaborator) in duplicates(collaborator_entries(catalog)) {
        out.push(duplicate_finding(
            doc,
            policy,
            ids::CODE_DUPLICATE_COLLABORATOR,
            format!(
                "collaborator '{}' is listed more than once",
                collaborator.display_name()
            ),
            pointer,
            first,
            collaborator,
        ));
    }
}

/// Entries whose URL was already seen, paired with the pointer of the first occurrence.
fn duplicates(
    entries: Vec<(DocPointer, &Maintainer)>,
) -> Vec<(DocPointer, DocPointer, &Maintainer)> {
    let mut seen: BTreeMap<String, DocPointer> = BTreeMap::new();
    let mut dups = Vec::new();
    for (pointer, maintainer) in entries {
        let key = normalize_profile_url(&maintainer.url);
        match seen.get(&key) {
            Some(first) => dups.push((pointer, first.clone(), maintainer)),
            None => {
                seen.insert(key, pointer);
            }
        }
    }
    dups
}

fn duplicate_finding(
    doc: &CatalogDocument,
    policy: &CheckPolicy,
    code: &str,
    message: String,
    pointer: DocPointer,
    first: DocPointer,
    maintainer: &Maintainer,
) -> Finding {
    Finding {
        severity: policy.severity,
        check_id: ids::CHECK_MAINTAINERS_DUPLICATES.to_string(),
        code: code.to_string(),
        message,
        location: Some(doc.location(pointer)),
        help: Some("Remove the duplicate entry.".to_string()),
        url: None,
        fingerprint: None,
        data: json!({
            "url": maintainer.url,
            "first": first.as_str(),
        }),
    }
}
