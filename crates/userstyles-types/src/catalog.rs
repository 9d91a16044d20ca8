//! The userstyle catalog contract.
//!
//! These types describe `userstyles.json`: which userstyles exist, how they are
//! categorized and colored, and the options that drive README generation.
//! Closed records reject unknown keys; open records keep them in `extra` so
//! tools that do not understand a key still round-trip it.

use crate::ident::{USERSTYLE_ID_PATTERN, UserstyleId};
use crate::list::{AtLeastTwo, NonEmpty};
use schemars::generate::SchemaSettings;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Root of the catalog document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UserstylesCatalog {
    /// Optional reference to the JSON Schema, for editors.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userstyles: Option<Userstyles>,

    /// Represents all maintainers and contributors to all userstyles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaborators: Option<NonEmpty<Maintainer>>,
}

impl UserstylesCatalog {
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Iterate userstyles in identifier order. Empty when the mapping is absent.
    pub fn iter_userstyles(&self) -> impl Iterator<Item = (&UserstyleId, &Userstyle)> {
        self.userstyles.iter().flat_map(|u| u.iter())
    }

    pub fn userstyle(&self, id: &str) -> Option<&Userstyle> {
        self.userstyles.as_ref().and_then(|u| u.get(id))
    }

    pub fn collaborators(&self) -> &[Maintainer] {
        self.collaborators
            .as_ref()
            .map(|c| c.as_slice())
            .unwrap_or_default()
    }
}

/// JSON Schema for `userstyles.json`.
///
/// Optional keys may be omitted but are never `null`, so `Option` fields do not
/// get a `null` type.
pub fn catalog_schema() -> Schema {
    SchemaSettings::default()
        .with(|s| s.option_add_null_type = false)
        .into_generator()
        .into_root_schema_for::<UserstylesCatalog>()
}

/// All userstyles, keyed by the userstyle directory name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Userstyles(BTreeMap<UserstyleId, Userstyle>);

impl Userstyles {
    pub fn new(entries: BTreeMap<UserstyleId, Userstyle>) -> Self {
        Self(entries)
    }

    pub fn get(&self, id: &str) -> Option<&Userstyle> {
        self.0.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UserstyleId, &Userstyle)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, id: UserstyleId, userstyle: Userstyle) -> Option<Userstyle> {
        self.0.insert(id, userstyle)
    }
}

impl JsonSchema for Userstyles {
    fn schema_name() -> Cow<'static, str> {
        "Userstyles".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "All userstyles in the catalog, keyed by directory name.",
            "type": "object",
            "patternProperties": {
                USERSTYLE_ID_PATTERN: generator.subschema_for::<Userstyle>(),
            },
            "additionalProperties": false,
        })
    }
}

/// One themed application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Userstyle {
    /// The name of the userstyle, optionally followed by aliases.
    pub name: Name,
    /// The category that fits the userstyle the most.
    pub category: Category,
    /// The fill color for the icon on the website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// A Simple Icons slug, or a local `.svg` file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub readme: ReadmeOptions,
}

impl Userstyle {
    pub fn icon_source(&self) -> Option<IconSource<'_>> {
        self.icon.as_deref().map(IconSource::parse)
    }

    /// Current maintainers followed by past maintainers.
    pub fn maintainers(&self) -> impl Iterator<Item = &Maintainer> {
        self.readme.current_maintainers.iter().chain(
            self.readme
                .past_maintainers
                .iter()
                .flat_map(|p| p.as_slice().iter()),
        )
    }

    pub fn is_maintained(&self) -> bool {
        !self.readme.current_maintainers.is_empty()
    }
}

/// Where an icon comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconSource<'a> {
    /// Slug of an icon on simpleicons.org.
    SimpleIcons(&'a str),
    /// File name in the website's local icon resources.
    LocalSvg(&'a str),
}

impl<'a> IconSource<'a> {
    pub fn parse(icon: &'a str) -> Self {
        if icon.ends_with(".svg") {
            IconSource::LocalSvg(icon)
        } else {
            IconSource::SimpleIcons(icon)
        }
    }
}

/// Options to help in the auto-generation of the userstyle README.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadmeOptions {
    /// Hyperlink(s) of the app being themed.
    #[serde(rename = "app-link")]
    pub app_link: ApplicationLink,

    /// The Usage section of the README.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// The FAQ section of the README.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq: Option<NonEmpty<FaqEntry>>,

    /// Active maintainers. May be empty.
    #[serde(rename = "current-maintainers")]
    pub current_maintainers: Vec<Maintainer>,

    /// Everyone that maintained this userstyle in the past.
    #[serde(
        rename = "past-maintainers",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub past_maintainers: Option<NonEmpty<Maintainer>>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

/// A maintainer or collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Maintainer {
    /// Display name shown in the README.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// GitHub profile link.
    pub url: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

impl Maintainer {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            name: None,
            url: url.into(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// `name` if set, otherwise the last path segment of `url` (the GitHub login).
    pub fn display_name(&self) -> &str {
        if let Some(name) = self.name.as_deref() {
            return name;
        }
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.url)
    }
}

/// `[string, string, ...string[]] | string`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum StringOrList {
    Single(String),
    List(AtLeastTwo<String>),
}

/// The name of the userstyle(s).
pub type Name = StringOrList;

/// The hyperlink(s) of the app being themed.
pub type ApplicationLink = StringOrList;

impl StringOrList {
    pub fn primary(&self) -> &str {
        match self {
            StringOrList::Single(s) => s,
            StringOrList::List(list) => list.first(),
        }
    }

    /// Aliases (for names) or secondary links. Empty for a single string.
    pub fn rest(&self) -> &[String] {
        match self {
            StringOrList::Single(_) => &[],
            StringOrList::List(list) => list.rest(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary()).chain(self.rest().iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        1 + self.rest().len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<&str> for StringOrList {
    fn from(value: &str) -> Self {
        StringOrList::Single(value.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            JsonSchema,
        )]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(ParseEnumError {
                        kind: $kind,
                        value: other.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// The category that fits the userstyle the most.
    pub enum Category as "category" {
        Browser => "browser",
        BrowserExtension => "browser_extension",
        Cli => "cli",
        CodeEditor => "code_editor",
        Development => "development",
        Game => "game",
        Leisure => "leisure",
        Library => "library",
        Messaging => "messaging",
        NoteTaking => "note_taking",
        Productivity => "productivity",
        SearchEngine => "search_engine",
        Social => "social",
        System => "system",
        Terminal => "terminal",
    }
}

impl Category {
    /// Human readable label, as used in generated tables.
    pub fn title(self) -> &'static str {
        match self {
            Category::Browser => "Browser",
            Category::BrowserExtension => "Browser Extension",
            Category::Cli => "CLI",
            Category::CodeEditor => "Code Editor",
            Category::Development => "Development",
            Category::Game => "Game",
            Category::Leisure => "Leisure",
            Category::Library => "Library",
            Category::Messaging => "Messaging",
            Category::NoteTaking => "Note Taking",
            Category::Productivity => "Productivity",
            Category::SearchEngine => "Search Engine",
            Category::Social => "Social",
            Category::System => "System",
            Category::Terminal => "Terminal",
        }
    }
}

string_enum! {
    /// The fill color for the icon on the website.
    pub enum Color as "color" {
        Rosewater => "rosewater",
        Flamingo => "flamingo",
        Pink => "pink",
        Mauve => "mauve",
        Red => "red",
        Maroon => "maroon",
        Peach => "peach",
        Yellow => "yellow",
        Green => "green",
        Teal => "teal",
        Sky => "sky",
        Sapphire => "sapphire",
        Blue => "blue",
        Lavender => "lavender",
        Text => "text",
    }
}
