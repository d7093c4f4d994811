//! Check 3: parse each existing file and describe its structure

use super::{load_document, Doctor};
use crate::report::Reporter;
use crate::yaml::{classify, tip_for, Backend, EntryKind, Shape, Tip};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of parsing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub path: PathBuf,
    pub result: ParseResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    Parsed(Shape),
    /// Malformed YAML, with the raw message and a matching tip if any
    Invalid { message: String, tip: Option<Tip> },
    /// Anything else, e.g. the file became unreadable
    Failed(String),
}

impl Doctor {
    /// Parse the files the existence check found
    ///
    /// Returns one outcome per file; an empty list when there was nothing
    /// to test.
    pub fn check_parsing<W: Write>(
        &self,
        backend: &Backend,
        files: &[PathBuf],
        reporter: &mut Reporter<W>,
    ) -> Vec<ParseOutcome> {
        reporter.section("YAML PARSING TEST");

        if files.is_empty() {
            reporter.line("No YAML files found to test");
            return Vec::new();
        }

        files
            .iter()
            .map(|path| self.parse_file(backend, path, reporter))
            .collect()
    }

    fn parse_file<W: Write>(
        &self,
        backend: &Backend,
        path: &Path,
        reporter: &mut Reporter<W>,
    ) -> ParseOutcome {
        reporter.blank();
        reporter.line(format!("Testing YAML parsing: {}", path.display()));

        let result = match load_document(backend, &self.resolve(path)) {
            Ok(document) => {
                let shape = classify(&document, &self.config.shape_limits());
                report_shape(&shape, reporter);
                ParseResult::Parsed(shape)
            }
            Err(e) if e.is_structural() => {
                let message = e.to_string();
                let tip = tip_for(&message);
                tracing::debug!(path = %path.display(), ?tip, "structural parse error");
                reporter.fail(format!("YAML parsing error: {}", message));
                if let Some(tip) = tip {
                    reporter.tip(tip.message());
                }
                ParseResult::Invalid { message, tip }
            }
            Err(e) => {
                reporter.fail(format!("General error: {}", e));
                ParseResult::Failed(e.to_string())
            }
        };

        ParseOutcome {
            path: path.to_path_buf(),
            result,
        }
    }
}

fn report_shape<W: Write>(shape: &Shape, reporter: &mut Reporter<W>) {
    match shape {
        Shape::Empty => {
            reporter.fail("YAML file is empty or contains only comments");
        }
        Shape::Mapping { keys, entries } => {
            reporter.pass("YAML parsed successfully as mapping");
            reporter.pass(format!("Found {} top-level keys: {:?}", keys.len(), keys));
            for entry in entries {
                match &entry.kind {
                    EntryKind::Mapping { sub_keys, more } => reporter.detail(format!(
                        "{}: mapping with keys {:?}{}",
                        entry.key,
                        sub_keys,
                        if *more { "..." } else { "" }
                    )),
                    EntryKind::Value(type_name) => {
                        reporter.detail(format!("{}: {}", entry.key, type_name))
                    }
                }
            }
        }
        Shape::Other { type_name, preview } => {
            reporter.pass(format!("YAML parsed as {}", type_name));
            reporter.pass(format!("Content: {}", preview));
        }
    }
}
