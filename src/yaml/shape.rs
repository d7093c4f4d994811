//! Classification of parsed documents for the parsing report

use super::Document;

/// Limits applied when summarising a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeLimits {
    /// Nested keys listed per mapping entry
    pub max_sub_keys: usize,
    /// Characters kept in a non-mapping preview
    pub preview_chars: usize,
}

impl Default for ShapeLimits {
    fn default() -> Self {
        Self {
            max_sub_keys: 3,
            preview_chars: 100,
        }
    }
}

/// What a parsed document looks like at the top level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Null document: empty file or comments only
    Empty,
    Mapping {
        keys: Vec<String>,
        entries: Vec<EntrySummary>,
    },
    /// Any other top-level node
    Other {
        type_name: &'static str,
        preview: String,
    },
}

/// Summary of one top-level mapping entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub key: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Nested mapping: the first few sub-keys, and whether more exist
    Mapping { sub_keys: Vec<String>, more: bool },
    /// Any other value, by type name
    Value(&'static str),
}

/// Classify a document for display
pub fn classify(document: &Document, limits: &ShapeLimits) -> Shape {
    match document {
        Document::Null => Shape::Empty,
        Document::Mapping(entries) => Shape::Mapping {
            keys: entries.iter().map(|(k, _)| k.clone()).collect(),
            entries: entries
                .iter()
                .map(|(key, value)| EntrySummary {
                    key: key.clone(),
                    kind: summarize_entry(value, limits.max_sub_keys),
                })
                .collect(),
        },
        other => Shape::Other {
            type_name: other.type_name(),
            preview: truncate_preview(&other.to_string(), limits.preview_chars),
        },
    }
}

fn summarize_entry(value: &Document, max_sub_keys: usize) -> EntryKind {
    match value {
        Document::Mapping(entries) => EntryKind::Mapping {
            sub_keys: entries
                .iter()
                .take(max_sub_keys)
                .map(|(k, _)| k.clone())
                .collect(),
            more: entries.len() > max_sub_keys,
        },
        other => EntryKind::Value(other.type_name()),
    }
}

/// Keep the first `max_chars` characters, appending `...` when cut
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
