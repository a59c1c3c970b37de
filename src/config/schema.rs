//! Policy schema definitions
//!
//! The declarative half of the hint policy, as it appears in a plugin
//! options table. Unknown keys are ignored.

use serde::{Deserialize, Serialize};

/// Which resource hint to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rel {
    /// Needed soon, fetched with a declared resource type
    Preload,
    /// May be needed later, fetched opportunistically
    Prefetch,
}

impl Rel {
    /// The attribute value emitted into markup
    pub fn as_str(&self) -> &'static str {
        match self {
            Rel::Preload => "preload",
            Rel::Prefetch => "prefetch",
        }
    }
}

/// Raw `include` value: either a mode keyword or an explicit chunk name list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IncludeSpec {
    Keyword(String),
    Names(Vec<String>),
}

impl Default for IncludeSpec {
    fn default() -> Self {
        IncludeSpec::Keyword(default_include_keyword())
    }
}

/// Declarative hint policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintConfig {
    /// Hint kind to emit
    #[serde(default = "default_rel")]
    pub rel: Rel,

    /// Which chunks are candidates for hinting
    #[serde(default)]
    pub include: IncludeSpec,

    /// Static `as` attribute value; when absent the resource type is
    /// inferred from the file suffix
    #[serde(rename = "as", default, skip_serializing_if = "Option::is_none")]
    pub as_value: Option<String>,

    /// Patterns a file must match at least one of to be hinted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_whitelist: Option<Vec<String>>,

    /// Patterns that drop a file; defaults to excluding source maps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_blacklist: Option<Vec<String>>,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            rel: default_rel(),
            include: IncludeSpec::default(),
            as_value: None,
            file_whitelist: None,
            file_blacklist: None,
        }
    }
}

fn default_rel() -> Rel {
    Rel::Preload
}

fn default_include_keyword() -> String {
    "asyncChunks".to_string()
}
