//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after catalog snippets.
    pub examples: ExamplePair,
}

/// Before and after catalog snippets.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// JSON that would trigger a finding.
    pub before: &'static str,
    /// JSON that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_SCHEMA_STRUCTURE => Some(explain_schema_structure()),
        ids::CHECK_SCHEMA_IDENTIFIER => Some(explain_schema_identifier()),
        ids::CHECK_SCHEMA_ENUM => Some(explain_schema_enum()),
        ids::CHECK_SCHEMA_MIN_ITEMS => Some(explain_schema_min_items()),
        ids::CHECK_MAINTAINERS_COLLABORATOR_LISTED => Some(explain_collaborator_listed()),
        ids::CHECK_MAINTAINERS_DUPLICATES => Some(explain_duplicates()),
        ids::CHECK_MAINTAINERS_PROFILE_URL => Some(explain_profile_url()),
        ids::CHECK_README_APP_LINK => Some(explain_app_link()),
        ids::CHECK_USERSTYLES_ICON => Some(explain_icon()),
        ids::CHECK_USERSTYLES_UNMAINTAINED => Some(explain_unmaintained()),

        // Codes
        ids::CODE_TYPE_MISMATCH => Some(explain_type_mismatch()),
        ids::CODE_MISSING_FIELD => Some(explain_missing_field()),
        ids::CODE_UNKNOWN_FIELD => Some(explain_unknown_field()),
        ids::CODE_INVALID_DOCUMENT => Some(explain_schema_structure()),
        ids::CODE_INVALID_IDENTIFIER => Some(explain_schema_identifier()),
        ids::CODE_UNKNOWN_CATEGORY => Some(explain_unknown_category()),
        ids::CODE_UNKNOWN_COLOR => Some(explain_unknown_color()),
        ids::CODE_TOO_FEW_ITEMS => Some(explain_schema_min_items()),
        ids::CODE_MAINTAINER_NOT_COLLABORATOR => Some(explain_collaborator_listed()),
        ids::CODE_DUPLICATE_MAINTAINER => Some(explain_duplicate_maintainer()),
        ids::CODE_DUPLICATE_COLLABORATOR => Some(explain_duplicate_collaborator()),
        ids::CODE_NON_GITHUB_PROFILE => Some(explain_profile_url()),
        ids::CODE_INVALID_APP_LINK => Some(explain_app_link()),
        ids::CODE_INVALID_ICON => Some(explain_icon()),
        ids::CODE_NO_CURRENT_MAINTAINERS => Some(explain_unmaintained()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_SCHEMA_STRUCTURE,
        ids::CHECK_SCHEMA_IDENTIFIER,
        ids::CHECK_SCHEMA_ENUM,
        ids::CHECK_SCHEMA_MIN_ITEMS,
        ids::CHECK_MAINTAINERS_COLLABORATOR_LISTED,
        ids::CHECK_MAINTAINERS_DUPLICATES,
        ids::CHECK_MAINTAINERS_PROFILE_URL,
        ids::CHECK_README_APP_LINK,
        ids::CHECK_USERSTYLES_ICON,
        ids::CHECK_USERSTYLES_UNMAINTAINED,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_TYPE_MISMATCH,
        ids::CODE_MISSING_FIELD,
        ids::CODE_UNKNOWN_FIELD,
        ids::CODE_INVALID_DOCUMENT,
        ids::CODE_INVALID_IDENTIFIER,
        ids::CODE_UNKNOWN_CATEGORY,
        ids::CODE_UNKNOWN_COLOR,
        ids::CODE_TOO_FEW_ITEMS,
        ids::CODE_MAINTAINER_NOT_COLLABORATOR,
        ids::CODE_DUPLICATE_MAINTAINER,
        ids::CODE_DUPLICATE_COLLABORATOR,
        ids::CODE_NON_GITHUB_PROFILE,
        ids::CODE_INVALID_APP_LINK,
        ids::CODE_INVALID_ICON,
        ids::CODE_NO_CURRENT_MAINTAINERS,
    ]
}

// --- Schema checks ---

fn explain_schema_structure() -> Explanation {
    Explanation {
        title: "Catalog Structure",
        description: "\
Checks that every value in the catalog has the JSON type the contract expects, that
required keys are present, and that closed records (the document root and each
userstyle entry) contain no unknown keys.

Tools that generate READMEs and the website read the catalog without further checks,
so a malformed entry breaks them for every userstyle, not just the broken one.",
        remediation: "\
Follow the finding's pointer to the offending value and fix its type, add the missing
key, or remove the unknown key. `readme`, FAQ entries and maintainer entries accept
extra keys; userstyle entries do not.",
        examples: ExamplePair {
            before: r#"{ "userstyles": { "discord": { "name": "Discord", "category": "messaging" } } }"#,
            after: r#"{ "userstyles": { "discord": {
  "name": "Discord",
  "category": "messaging",
  "readme": { "app-link": "https://discord.com", "current-maintainers": [] }
} } }"#,
        },
    }
}

fn explain_schema_identifier() -> Explanation {
    Explanation {
        title: "Userstyle Identifiers",
        description: "\
Userstyle keys double as directory names, so they may only contain ASCII letters,
digits, `-` and `_`.",
        remediation: "\
Rename the key (and the userstyle directory) using only the allowed characters.
Spaces and dots are usually replaced with `-`.",
        examples: ExamplePair {
            before: r#"{ "userstyles": { "youtube music": { ... } } }"#,
            after: r#"{ "userstyles": { "youtube-music": { ... } } }"#,
        },
    }
}

fn explain_schema_enum() -> Explanation {
    Explanation {
        title: "Enumerated Values",
        description: "\
`category` must be one of the fixed categories and `color`, when present, must be one
of the fixed palette color names. Any other string is rejected.",
        remediation: "\
Pick the closest existing value. Run `userstyles explain unknown_category` or
`userstyles explain unknown_color` to list the allowed values.",
        examples: ExamplePair {
            before: r#"{ "category": "chat", "color": "purple" }"#,
            after: r#"{ "category": "messaging", "color": "mauve" }"#,
        },
    }
}

fn explain_schema_min_items() -> Explanation {
    Explanation {
        title: "Minimum List Lengths",
        description: "\
Some fields are lists with a minimum length:

- `name` and `readme.app-link`: a plain string, or a list of at least two strings
- `readme.faq`, `readme.past-maintainers` and `collaborators`: at least one entry

`readme.current-maintainers` is the exception and may be empty.",
        remediation: "\
Replace a one-element `name` or `app-link` list with a plain string, and remove empty
optional lists instead of leaving `[]` behind.",
        examples: ExamplePair {
            before: r#"{ "name": ["Discord"], "readme": { "faq": [], ... } }"#,
            after: r#"{ "name": "Discord", "readme": { ... } }"#,
        },
    }
}

fn explain_type_mismatch() -> Explanation {
    Explanation {
        title: "Type Mismatch",
        description: "A value has a different JSON type than the contract declares, e.g. a number where a string is expected.",
        remediation: "Change the value to the expected type named in the finding message.",
        examples: ExamplePair {
            before: r#"{ "name": 42 }"#,
            after: r#"{ "name": "Lichess" }"#,
        },
    }
}

fn explain_missing_field() -> Explanation {
    Explanation {
        title: "Missing Required Field",
        description: "\
A required key is absent. Userstyles require `name`, `category` and `readme`; `readme`
requires `app-link` and `current-maintainers`; FAQ entries require `question` and
`answer`; maintainer entries require `url`.",
        remediation: "Add the key named in the finding message.",
        examples: ExamplePair {
            before: r#"{ "readme": { "app-link": "https://example.com" } }"#,
            after: r#"{ "readme": { "app-link": "https://example.com", "current-maintainers": [] } }"#,
        },
    }
}

fn explain_unknown_field() -> Explanation {
    Explanation {
        title: "Unknown Field",
        description: "\
The document root and userstyle entries are closed records: keys other than the
declared ones are rejected so typos such as `colour` do not go unnoticed.",
        remediation: "Fix the spelling or move free-form data into `readme`, which accepts extra keys.",
        examples: ExamplePair {
            before: r#"{ "name": "Discord", "colour": "blue", ... }"#,
            after: r#"{ "name": "Discord", "color": "blue", ... }"#,
        },
    }
}

fn explain_unknown_category() -> Explanation {
    Explanation {
        title: "Unknown Category",
        description: "\
`category` must be one of: browser, browser_extension, cli, code_editor, development,
game, leisure, library, messaging, note_taking, productivity, search_engine, social,
system, terminal.",
        remediation: "Pick the category that fits the themed application the most.",
        examples: ExamplePair {
            before: r#"{ "category": "chat" }"#,
            after: r#"{ "category": "messaging" }"#,
        },
    }
}

fn explain_unknown_color() -> Explanation {
    Explanation {
        title: "Unknown Color",
        description: "\
`color` must be one of: rosewater, flamingo, pink, mauve, red, maroon, peach, yellow,
green, teal, sky, sapphire, blue, lavender, text.",
        remediation: "Pick the palette color closest to the application's brand color, or drop the key.",
        examples: ExamplePair {
            before: r#"{ "color": "purple" }"#,
            after: r#"{ "color": "mauve" }"#,
        },
    }
}

// --- Hygiene checks ---

fn explain_collaborator_listed() -> Explanation {
    Explanation {
        title: "Maintainers Are Collaborators",
        description: "\
When the catalog has a top-level `collaborators` list, every current and past
maintainer of every userstyle must appear in it (compared by profile URL).",
        remediation: "Add the maintainer to `collaborators`, or fix the URL so both entries match.",
        examples: ExamplePair {
            before: r#"{ "collaborators": [{ "url": "https://github.com/a" }],
  "userstyles": { "x": { "readme": { "current-maintainers": [{ "url": "https://github.com/b" }], ... } } } }"#,
            after: r#"{ "collaborators": [{ "url": "https://github.com/a" }, { "url": "https://github.com/b" }],
  "userstyles": { "x": { "readme": { "current-maintainers": [{ "url": "https://github.com/b" }], ... } } } }"#,
        },
    }
}

fn explain_duplicates() -> Explanation {
    Explanation {
        title: "Duplicate Maintainers",
        description: "\
Detects a profile URL listed twice within one userstyle's maintainers (current and past
combined) or twice in `collaborators`. URLs compare case-insensitively and ignore a
trailing `/`.",
        remediation: "Remove the duplicate entry. Someone who stepped down belongs only in `past-maintainers`.",
        examples: ExamplePair {
            before: r#"{ "current-maintainers": [{ "url": "https://github.com/a" }],
  "past-maintainers": [{ "url": "https://github.com/a" }] }"#,
            after: r#"{ "current-maintainers": [{ "url": "https://github.com/a" }] }"#,
        },
    }
}

fn explain_duplicate_maintainer() -> Explanation {
    Explanation {
        title: "Duplicate Maintainer",
        description: "A userstyle lists the same maintainer URL more than once across current and past maintainers.",
        remediation: "Keep a single entry for the maintainer.",
        examples: explain_duplicates().examples,
    }
}

fn explain_duplicate_collaborator() -> Explanation {
    Explanation {
        title: "Duplicate Collaborator",
        description: "The top-level `collaborators` list contains the same profile URL more than once.",
        remediation: "Keep a single entry for the collaborator.",
        examples: ExamplePair {
            before: r#"{ "collaborators": [{ "url": "https://github.com/a" }, { "url": "https://github.com/A/" }] }"#,
            after: r#"{ "collaborators": [{ "url": "https://github.com/a" }] }"#,
        },
    }
}

fn explain_profile_url() -> Explanation {
    Explanation {
        title: "GitHub Profile URLs",
        description: "\
Maintainer and collaborator URLs are rendered as GitHub profile links, so they must
have the form `https://github.com/<login>`.",
        remediation: "Use the https GitHub profile URL without extra path segments, query or fragment.",
        examples: ExamplePair {
            before: r#"{ "url": "http://github.com/someone/dotfiles" }"#,
            after: r#"{ "url": "https://github.com/someone" }"#,
        },
    }
}

fn explain_app_link() -> Explanation {
    Explanation {
        title: "Application Links",
        description: "Every `readme.app-link` entry must be an absolute `http` or `https` URL.",
        remediation: "Use the full URL of the themed application, including the scheme.",
        examples: ExamplePair {
            before: r#"{ "app-link": "discord.com" }"#,
            after: r#"{ "app-link": "https://discord.com" }"#,
        },
    }
}

fn explain_icon() -> Explanation {
    Explanation {
        title: "Icon Names",
        description: "\
`icon` is either a Simple Icons slug (lowercase letters and digits, as on
simpleicons.org) or, with a `.svg` suffix, a file name from the website's local icon
resources. Local names are bare file names without directories.",
        remediation: "Use the slug exactly as Simple Icons spells it, or a bare `name.svg` file name.",
        examples: ExamplePair {
            before: r#"{ "icon": "Google Chrome" }"#,
            after: r#"{ "icon": "googlechrome" }"#,
        },
    }
}

fn explain_unmaintained() -> Explanation {
    Explanation {
        title: "Unmaintained Userstyles",
        description: "\
Reports userstyles whose `current-maintainers` list is empty. This is valid, but such
userstyles are advertised as looking for a maintainer.",
        remediation: "Add a current maintainer, or leave as is to keep the userstyle up for adoption.",
        examples: ExamplePair {
            before: r#"{ "current-maintainers": [] }"#,
            after: r#"{ "current-maintainers": [{ "url": "https://github.com/someone" }] }"#,
        },
    }
}
