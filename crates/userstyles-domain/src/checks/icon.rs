use super::utils::{build_allowlist, is_allowed, userstyle_pointer};
use crate::model::CatalogDocument;
use crate::policy::EffectiveConfig;
use serde_json::json;
use userstyles_types::{Finding, IconSource, UserstylesCatalog, ids};

pub fn run(
    doc: &CatalogDocument,
    catalog: &UserstylesCatalog,
    cfg: &EffectiveConfig,
    out: &mut Vec<Finding>,
) {
    let Some(policy) = cfg.check_policy(ids::CHECK_USERSTYLES_ICON) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    for (id, style) in catalog.iter_userstyles() {
        let Some(source) = style.icon_source() else {
            continue;
        };
        let Some(problem) = icon_problem(source) else {
            continue;
        };
        let pointer = userstyle_pointer(id).key("icon");
        if is_allowed(allow.as_ref(), &pointer) {
            continue;
        }

        let (kind, value) = match source {
            IconSource::SimpleIcons(slug) => ("simple-icons", slug),
            IconSource::LocalSvg(file) => ("local-svg", file),
        };
        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_USERSTYLES_ICON.to_string(),
            code: ids::CODE_INVALID_ICON.to_string(),
            message: format!("icon '{value}' of '{id}' {problem}"),
            location: Some(doc.location(pointer)),
            help: Some(
                "Use a Simple Icons slug (lowercase letters and digits) or a bare `<name>.svg` file name."
                    .to_string(),
            ),
            url: Some("https://simpleicons.org".to_string()),
            fingerprint: None,
            data: json!({ "userstyle": id.as_str(), "icon": value, "kind": kind }),
        });
    }
}

fn icon_problem(source: IconSource<'_>) -> Option<&'static str> {
    match source {
        IconSource::SimpleIcons(slug) => {
            if slug.is_empty() {
                Some("is empty")
            } else if !slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            {
                Some("is not a Simple Icons slug")
            } else {
                None
            }
        }
        IconSource::LocalSvg(file) => {
            let stem = file.trim_end_matches(".svg");
            if stem.is_empty() {
                Some("has no file name before .svg")
            } else if file.contains(['/', '\\']) {
                Some("must be a file name, not a path")
            } else {
                None
            }
        }
    }
}
