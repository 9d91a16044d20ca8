use globset::{Glob, GlobSet, GlobSetBuilder};
use userstyles_types::{DocPointer, Maintainer, Userstyle, UserstyleId, UserstylesCatalog};

pub fn build_allowlist(allow: &[String]) -> Option<GlobSet> {
    if allow.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in allow {
        // Patterns are validated in userstyles-settings; skip anything that slipped through.
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().ok()
}

/// Whether findings at `pointer` are suppressed by the allowlist.
///
/// Only findings inside a userstyle entry can be allowed; catalog-wide findings never are.
pub fn is_allowed(allow: Option<&GlobSet>, pointer: &DocPointer) -> bool {
    let Some(set) = allow else { return false };
    pointer
        .userstyle_id()
        .map(|id| set.is_match(id.as_str()))
        .unwrap_or(false)
}

pub fn userstyle_pointer(id: &UserstyleId) -> DocPointer {
    DocPointer::root().key("userstyles").key(id.as_str())
}

/// Every maintainer entry of a userstyle with its pointer, current first.
pub fn maintainer_entries<'a>(
    id: &UserstyleId,
    style: &'a Userstyle,
) -> Vec<(DocPointer, &'a Maintainer)> {
    let readme = userstyle_pointer(id).key("readme");
    let current = readme.key("current-maintainers");
    let past = readme.key("past-maintainers");

    let mut entries: Vec<_> = style
        .readme
        .current_maintainers
        .iter()
        .enumerate()
        .map(|(i, m)| (current.index(i), m))
        .collect();
    if let Some(list) = &style.readme.past_maintainers {
        entries.extend(list.iter().enumerate().map(|(i, m)| (past.index(i), m)));
    }
    entries
}

/// Top-level collaborators with their pointers.
pub fn collaborator_entries(catalog: &UserstylesCatalog) -> Vec<(DocPointer, &Maintainer)> {
    let base = DocPointer::root().key("collaborators");
    catalog
        .collaborators()
        .iter()
        .enumerate()
        .map(|(i, m)| (base.index(i), m))
        .collect()
}

/// Profile URLs compare case-insensitively and ignore a trailing `/`.
pub fn normalize_profile_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_ascii_lowercase()
}
