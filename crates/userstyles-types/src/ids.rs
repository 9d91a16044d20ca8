//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks: document shape
pub const CHECK_SCHEMA_STRUCTURE: &str = "schema.structure";
pub const CHECK_SCHEMA_IDENTIFIER: &str = "schema.identifier";
pub const CHECK_SCHEMA_ENUM: &str = "schema.enum";
pub const CHECK_SCHEMA_MIN_ITEMS: &str = "schema.min_items";

// Checks: catalog hygiene
pub const CHECK_MAINTAINERS_COLLABORATOR_LISTED: &str = "maintainers.collaborator_listed";
pub const CHECK_MAINTAINERS_DUPLICATES: &str = "maintainers.duplicates";
pub const CHECK_MAINTAINERS_PROFILE_URL: &str = "maintainers.profile_url";
pub const CHECK_README_APP_LINK: &str = "readme.app_link";
pub const CHECK_USERSTYLES_ICON: &str = "userstyles.icon";
pub const CHECK_USERSTYLES_UNMAINTAINED: &str = "userstyles.unmaintained";

// Codes: schema.structure
pub const CODE_TYPE_MISMATCH: &str = "type_mismatch";
pub const CODE_MISSING_FIELD: &str = "missing_field";
pub const CODE_UNKNOWN_FIELD: &str = "unknown_field";
pub const CODE_INVALID_DOCUMENT: &str = "invalid_document";

// Codes: schema.identifier
pub const CODE_INVALID_IDENTIFIER: &str = "invalid_identifier";

// Codes: schema.enum
pub const CODE_UNKNOWN_CATEGORY: &str = "unknown_category";
pub const CODE_UNKNOWN_COLOR: &str = "unknown_color";

// Codes: schema.min_items
pub const CODE_TOO_FEW_ITEMS: &str = "too_few_items";

// Codes: maintainers.*
pub const CODE_MAINTAINER_NOT_COLLABORATOR: &str = "maintainer_not_collaborator";
pub const CODE_DUPLICATE_MAINTAINER: &str = "duplicate_maintainer";
pub const CODE_DUPLICATE_COLLABORATOR: &str = "duplicate_collaborator";
pub const CODE_NON_GITHUB_PROFILE: &str = "non_github_profile";

// Codes: readme.app_link
pub const CODE_INVALID_APP_LINK: &str = "invalid_app_link";

// Codes: userstyles.*
pub const CODE_INVALID_ICON: &str = "invalid_icon";
pub const CODE_NO_CURRENT_MAINTAINERS: &str = "no_current_maintainers";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

// Verdict reasons
pub const REASON_SCHEMA_VIOLATIONS: &str = "schema_violations";
pub const REASON_LINTS_SKIPPED: &str = "lints_skipped";
pub const REASON_TRUNCATED: &str = "truncated";
pub const REASON_TOOL_ERROR: &str = "tool_error";
