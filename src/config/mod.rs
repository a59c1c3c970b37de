//! Hint policy configuration
//!
//! Parses the declarative policy table and compiles it into the runtime
//! options the pipeline consumes.

mod schema;

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub use schema::{HintConfig, IncludeSpec, Rel};

/// Default blacklist pattern: never hint source maps
static SOURCE_MAP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.map").unwrap());

/// Errors produced while compiling a policy table into runtime options
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid file pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to parse hint options")]
    Parse(#[from] toml::de::Error),
}

/// A compiled file pattern matcher
#[derive(Debug, Clone)]
pub struct FilePattern(Regex);

impl FilePattern {
    /// Compile a pattern from its textual form
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        Regex::new(pattern)
            .map(FilePattern)
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// The default blacklist entry, matching source-map files
    pub fn source_maps() -> Self {
        FilePattern(SOURCE_MAP_PATTERN.clone())
    }

    /// Check whether a file path matches
    pub fn is_match(&self, file: &str) -> bool {
        self.0.is_match(file)
    }
}

/// Which chunks are candidates for hinting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Include {
    /// Chunks outside the initial page load (default)
    AsyncChunks,
    /// Chunks inside the initial page load
    Initial,
    /// Every chunk
    All,
    /// Every build output asset, bypassing the chunk graph
    AllAssets,
    /// Chunks whose name appears in the list; unnamed chunks never match
    Named(Vec<String>),
    /// An include keyword this version does not know. Selects nothing.
    Unrecognized(String),
}

impl From<IncludeSpec> for Include {
    fn from(spec: IncludeSpec) -> Self {
        match spec {
            IncludeSpec::Names(names) => Include::Named(names),
            IncludeSpec::Keyword(word) => match word.as_str() {
                "asyncChunks" => Include::AsyncChunks,
                "initial" => Include::Initial,
                "all" => Include::All,
                "allAssets" | "all-assets" => Include::AllAssets,
                _ => Include::Unrecognized(word),
            },
        }
    }
}

/// How the `as` attribute is resolved for preload hints
#[derive(Clone)]
pub enum AsPolicy {
    /// Infer the resource type from the file suffix
    Auto,
    /// Use a fixed value verbatim
    Static(String),
    /// Ask a caller-supplied classifier, invoked once per href
    Computed(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl fmt::Debug for AsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsPolicy::Auto => f.write_str("Auto"),
            AsPolicy::Static(value) => f.debug_tuple("Static").field(value).finish(),
            AsPolicy::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Runtime hint policy with compiled patterns
#[derive(Debug, Clone)]
pub struct HintOptions {
    /// Hint kind to emit
    pub rel: Rel,

    /// Candidate chunk selection mode
    pub include: Include,

    /// Resource-type resolution, used only when `rel` is preload
    pub as_policy: AsPolicy,

    /// A file must match at least one of these to survive, when set
    pub file_whitelist: Option<Vec<FilePattern>>,

    /// A file matching any of these is dropped
    pub file_blacklist: Vec<FilePattern>,
}

impl Default for HintOptions {
    fn default() -> Self {
        Self {
            rel: Rel::Preload,
            include: Include::AsyncChunks,
            as_policy: AsPolicy::Auto,
            file_whitelist: None,
            file_blacklist: vec![FilePattern::source_maps()],
        }
    }
}

impl HintOptions {
    /// Compile a declarative policy into runtime options
    pub fn from_config(config: HintConfig) -> Result<Self, ConfigError> {
        let file_whitelist = config
            .file_whitelist
            .map(|patterns| compile_patterns(&patterns))
            .transpose()?;

        let file_blacklist = match config.file_blacklist {
            Some(patterns) => compile_patterns(&patterns)?,
            None => vec![FilePattern::source_maps()],
        };

        let as_policy = match config.as_value {
            Some(value) => AsPolicy::Static(value),
            None => AsPolicy::Auto,
        };

        Ok(Self {
            rel: config.rel,
            include: config.include.into(),
            as_policy,
            file_whitelist,
            file_blacklist,
        })
    }

    /// Compile options from a plugin options table. Unknown keys are ignored.
    pub fn from_toml(table: toml::Table) -> Result<Self, ConfigError> {
        let config: HintConfig = table.try_into()?;
        Self::from_config(config)
    }

    /// Replace the `as` resolution policy
    pub fn with_as_policy(mut self, as_policy: AsPolicy) -> Self {
        self.as_policy = as_policy;
        self
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<FilePattern>, ConfigError> {
    patterns.iter().map(|p| FilePattern::new(p)).collect()
}
