use super::utils::{build_allowlist, is_allowed, userstyle_pointer};
use crate::model::CatalogDocument;
use crate::policy::EffectiveConfig;
use serde_json::json;
use userstyles_types::{Finding, UserstylesCatalog, ids};

pub fn run(
    doc: &CatalogDocument,
    catalog: &UserstylesCatalog,
    cfg: &EffectiveConfig,
    out: &mut Vec<Finding>,
) {
    let Some(policy) = cfg.check_policy(ids::CHECK_USERSTYLES_UNMAINTAINED) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    for (id, style) in catalog.iter_userstyles() {
        if style.is_maintained() {
            continue;
        }
        let pointer = userstyle_pointer(id)
            .key("readme")
            .key("current-maintainers");
        if is_allowed(allow.as_ref(), &pointer) {
            continue;
        }
        let past = style
            .readme
            .past_maintainers
            .as_ref()
            .map(|p| p.len())
            .unwrap_or(0);
        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_USERSTYLES_UNMAINTAINED.to_string(),
            code: ids::CODE_NO_CURRENT_MAINTAINERS.to_string(),
            message: format!("'{id}' has no current maintainers"),
            location: Some(doc.location(pointer)),
            help: Some(
                "Find a new maintainer, or keep the userstyle listed as unmaintained.".to_string(),
            ),
            url: None,
            fingerprint: None,
            data: json!({ "userstyle": id.as_str(), "past_maintainers": past }),
        });
    }
}
