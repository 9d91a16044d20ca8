use super::utils::{build_allowlist, is_allowed, userstyle_pointer};
use crate::model::CatalogDocument;
use crate::policy::EffectiveConfig;
use serde_json::json;
use url::Url;
use userstyles_types::{Finding, StringOrList, UserstylesCatalog, ids};

pub fn run(
    doc: &CatalogDocument,
    catalog: &UserstylesCatalog,
    cfg: &EffectiveConfig,
    out: &mut Vec<Finding>,
) {
    let Some(policy) = cfg.check_policy(ids::CHECK_README_APP_LINK) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    for (id, style) in catalog.iter_userstyles() {
        let base = userstyle_pointer(id).key("readme").key("app-link");
        if is_allowed(allow.as_ref(), &base) {
            continue;
        }

        let links = &style.readme.app_link;
        for (i, link) in links.iter().enumerate() {
            if is_web_link(link) {
                continue;
            }
            let pointer = match links {
                StringOrList::Single(_) => base.clone(),
                StringOrList::List(_) => base.index(i),
            };
            out.push(Finding {
                severity: policy.severity,
                check_id: ids::CHECK_README_APP_LINK.to_string(),
                code: ids::CODE_INVALID_APP_LINK.to_string(),
                message: format!("app link '{link}' of '{id}' is not an absolute http(s) URL"),
                location: Some(doc.location(pointer)),
                help: Some(
                    "Link to the application's website, e.g. https://discord.com.".to_string(),
                ),
                url: None,
                fingerprint: None,
                data: json!({ "userstyle": id.as_str(), "link": link }),
            });
        }
    }
}

fn is_web_link(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}
