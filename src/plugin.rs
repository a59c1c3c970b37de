//! Build integration
//!
//! The HTML-generation step hands each finished document through the
//! registered plugins once per build. The resource hint plugin is one such
//! plugin; the trait exists so other document mutations can ride the same
//! hook.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::config::{ConfigError, HintOptions};
use crate::hints::{self, BuildArtifacts};

/// A plugin that may rewrite a generated HTML document
pub trait HtmlPlugin: Send + Sync {
    /// Plugin name for logging and debugging
    fn name(&self) -> &str;

    /// Process the document, returning the (possibly rewritten) HTML
    fn process_html(&self, html: String, artifacts: &BuildArtifacts<'_>) -> Result<String>;
}

/// Injects preload/prefetch resource hints into the document
pub struct ResourceHintPlugin {
    options: HintOptions,
}

impl ResourceHintPlugin {
    /// Create the plugin with the given policy
    pub fn new(options: HintOptions) -> Self {
        Self { options }
    }

    /// Create the plugin from a declarative options table
    pub fn from_toml(table: toml::Table) -> Result<Self, ConfigError> {
        Ok(Self::new(HintOptions::from_toml(table)?))
    }

    /// The active policy
    pub fn options(&self) -> &HintOptions {
        &self.options
    }
}

impl Default for ResourceHintPlugin {
    fn default() -> Self {
        Self::new(HintOptions::default())
    }
}

impl HtmlPlugin for ResourceHintPlugin {
    fn name(&self) -> &str {
        "resource-hints"
    }

    fn process_html(&self, html: String, artifacts: &BuildArtifacts<'_>) -> Result<String> {
        Ok(hints::inject(&html, artifacts, &self.options))
    }
}

/// Runs registered HTML plugins in order over a document
#[derive(Default)]
pub struct HtmlPluginManager {
    plugins: Vec<Arc<dyn HtmlPlugin>>,
}

impl HtmlPluginManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin; plugins run in registration order
    pub fn register(&mut self, plugin: Arc<dyn HtmlPlugin>) {
        self.plugins.push(plugin);
    }

    /// Run every plugin over the document
    pub fn process_html(&self, html: String, artifacts: &BuildArtifacts<'_>) -> Result<String> {
        let mut current = html;
        for plugin in &self.plugins {
            debug!(plugin = plugin.name(), "running html plugin");
            current = plugin.process_html(current, artifacts)?;
        }
        Ok(current)
    }
}
