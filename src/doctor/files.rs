//! Check 2: do the config files exist, and what do they start with

use super::{read_text, Doctor};
use crate::report::Reporter;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// What the existence check learned about one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path as configured, relative to the root
    pub path: PathBuf,
    pub absolute: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Missing,
    /// The lookup failed for a reason other than absence, e.g. a parent
    /// component is not a directory or permission was denied
    Inaccessible(String),
    Present { size: u64, preview: Preview },
}

/// Leading lines of a present file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Lines(Vec<String>),
    /// Read or UTF-8 decode failure
    Unreadable(String),
}

impl FileRecord {
    /// Counted as existing for the parsing check
    pub fn exists(&self) -> bool {
        matches!(self.status, FileStatus::Present { .. })
    }
}

/// Paths of the records that exist, in check order
pub fn existing_paths(records: &[FileRecord]) -> Vec<PathBuf> {
    records
        .iter()
        .filter(|record| record.exists())
        .map(|record| record.path.clone())
        .collect()
}

impl Doctor {
    /// Check every configured file and print a short preview of each
    pub fn check_files<W: Write>(&self, reporter: &mut Reporter<W>) -> Vec<FileRecord> {
        reporter.section("YAML FILES CHECK");

        self.config
            .targets()
            .into_iter()
            .map(|(_, path)| self.check_file(path, reporter))
            .collect()
    }

    fn check_file<W: Write>(&self, path: &Path, reporter: &mut Reporter<W>) -> FileRecord {
        reporter.blank();
        reporter.line(format!("Checking: {}", path.display()));

        let absolute = self.resolve(path);
        tracing::debug!(path = %absolute.display(), "probing file");

        let size = match std::fs::metadata(&absolute) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                reporter.fail("File does not exist");
                reporter.detail(format!("Looking for: {}", absolute.display()));
                return FileRecord {
                    path: path.to_path_buf(),
                    absolute,
                    status: FileStatus::Missing,
                };
            }
            Err(e) => {
                tracing::debug!(error = %e, "metadata lookup failed");
                reporter.fail(format!("Error reading file: {}", e));
                return FileRecord {
                    path: path.to_path_buf(),
                    absolute,
                    status: FileStatus::Inaccessible(e.to_string()),
                };
            }
        };

        reporter.pass("File exists");
        reporter.detail(format!("Size: {} bytes", size));
        reporter.detail(format!("Full path: {}", absolute.display()));

        let limit = self.config.report.preview_lines;
        let preview = match read_text(&absolute) {
            Ok(content) => {
                let lines: Vec<String> = content.lines().take(limit).map(str::to_string).collect();
                reporter.detail(format!("Content preview (first {} lines):", limit));
                for (i, line) in lines.iter().enumerate() {
                    reporter.subdetail(format!("{}: {}", i + 1, line));
                }
                Preview::Lines(lines)
            }
            Err(e) => {
                tracing::debug!(error = %e, "preview read failed");
                reporter.fail(format!("Error reading file: {}", e));
                Preview::Unreadable(e.to_string())
            }
        };

        FileRecord {
            path: path.to_path_buf(),
            absolute,
            status: FileStatus::Present { size, preview },
        }
    }
}
