//! Hint markup rendering and document splicing
//!
//! Turns the surviving chunks' file lists into `<link>` fragments and
//! splices them into the HTML text. Works on the document as a string; there
//! is no HTML parser involved and none is needed for the two-case insertion
//! heuristic.

use std::borrow::Cow;

use tracing::warn;

use crate::config::{AsPolicy, HintOptions, Rel};
use crate::graph::{ChunkGraph, ChunkId};

/// Where the hints ended up in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// Inserted immediately before the existing `</head>`
    AtHeadClose,
    /// No `<head>` present; a head element was synthesized before `<body>`
    SynthesizedHead,
    /// Neither anchor found; the document was left unchanged
    NoInsertionPoint,
}

/// Flatten the surviving chunks' file lists, preserving chunk order and file
/// order within each chunk. Duplicates are kept.
pub fn collect_files(graph: &ChunkGraph, ids: &[ChunkId]) -> Vec<String> {
    ids.iter()
        .filter_map(|&id| graph.chunk(id))
        .flat_map(|chunk| chunk.files.iter().cloned())
        .collect()
}

/// Apply the whitelist (keep only matches, when set) and then the blacklist
/// (drop matches) to the flattened file list.
pub fn apply_file_filters(files: Vec<String>, options: &HintOptions) -> Vec<String> {
    files
        .into_iter()
        .filter(|file| match &options.file_whitelist {
            Some(patterns) => patterns.iter().any(|p| p.is_match(file)),
            None => true,
        })
        .filter(|file| !options.file_blacklist.iter().any(|p| p.is_match(file)))
        .collect()
}

/// Build one `<link>` fragment per file, in order.
pub fn build_fragments(files: &[String], options: &HintOptions, public_path: &str) -> Vec<String> {
    files
        .iter()
        .map(|file| {
            let href = format!("{public_path}{file}");
            match options.rel {
                Rel::Prefetch => {
                    format!("<link rel=\"{}\" href=\"{}\">\n", options.rel.as_str(), href)
                }
                Rel::Preload => {
                    let as_value = resolve_as(&options.as_policy, &href);
                    // Fonts must be fetched in anonymous mode to be reusable.
                    let crossorigin = if as_value == "font" {
                        "crossorigin=\"crossorigin\" "
                    } else {
                        ""
                    };
                    format!(
                        "<link rel=\"{}\" as=\"{}\" {}href=\"{}\">\n",
                        options.rel.as_str(),
                        as_value,
                        crossorigin,
                        href
                    )
                }
            }
        })
        .collect()
}

/// Resolve the `as` attribute for a preload href
fn resolve_as<'a>(policy: &'a AsPolicy, href: &str) -> Cow<'a, str> {
    match policy {
        AsPolicy::Auto => Cow::Borrowed(resource_kind(href)),
        AsPolicy::Static(value) => Cow::Borrowed(value.as_str()),
        AsPolicy::Computed(classify) => Cow::Owned(classify(href)),
    }
}

/// Suffix-based resource type inference
fn resource_kind(href: &str) -> &'static str {
    if href.ends_with(".css") {
        "style"
    } else if href.ends_with(".woff2") {
        "font"
    } else {
        "script"
    }
}

/// Splice the concatenated fragments into the document.
///
/// Insertion goes before `</head>` when present, otherwise a `<head>` wrapper
/// is synthesized before `<body>`. With neither anchor the document comes
/// back unchanged.
pub fn splice(html: &str, fragments: &[String]) -> (String, SpliceOutcome) {
    let hints = fragments.concat();

    if html.contains("</head>") {
        let out = html.replacen("</head>", &format!("{hints}</head>"), 1);
        (out, SpliceOutcome::AtHeadClose)
    } else if html.contains("<body>") {
        let out = html.replacen("<body>", &format!("<head>{hints}</head><body>"), 1);
        (out, SpliceOutcome::SynthesizedHead)
    } else {
        warn!("document has neither </head> nor <body>; resource hints not inserted");
        (html.to_string(), SpliceOutcome::NoInsertionPoint)
    }
}
