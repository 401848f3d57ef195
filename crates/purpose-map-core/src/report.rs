//! Scan report: scanner output joined with classifier output.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::purpose::{Locale, Purpose, PurposeClassifier};
use crate::scanner::{ScanOptions, ScanOutcome, Scanner, SkipStats};

/// One listed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// 1-based position in scan order
    pub index: usize,
    /// Path relative to the parent of the scan root, for display
    pub path: PathBuf,
    pub purpose: Purpose,
}

/// Enumerated listing of classified candidate files
#[derive(Debug, Clone)]
pub struct Report {
    pub root: PathBuf,
    pub entries: Vec<ReportEntry>,
    pub skipped: SkipStats,
}

impl Report {
    /// Scan `root` once and classify every candidate.
    pub fn generate(root: &Path, options: ScanOptions) -> Result<Self> {
        let outcome = Scanner::new(options)?.scan(root)?;
        Ok(Self::from_outcome(outcome, &PurposeClassifier::builtin()))
    }

    /// Classify an existing scan. The classifier sees the same absolute
    /// path the scanner produced; only the listed path is shortened to be
    /// relative to the root's parent, e.g. `src/...`.
    pub fn from_outcome(outcome: ScanOutcome, classifier: &PurposeClassifier) -> Self {
        let base = outcome
            .root
            .parent()
            .unwrap_or(outcome.root.as_path())
            .to_path_buf();

        let entries = classifier
            .classify_all(&outcome.files)
            .into_iter()
            .enumerate()
            .map(|(i, classified)| ReportEntry {
                index: i + 1,
                path: classified
                    .path
                    .strip_prefix(&base)
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| classified.path.clone()),
                purpose: classified.purpose,
            })
            .collect();

        Self {
            root: outcome.root,
            entries,
            skipped: outcome.skipped,
        }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Per-purpose file counts in rule precedence order, zero counts omitted
    pub fn purpose_counts(&self) -> Vec<(Purpose, usize)> {
        Purpose::ALL
            .iter()
            .map(|p| (*p, self.entries.iter().filter(|e| e.purpose == *p).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Plain-text listing: a count line, then `<index>. <path> - <label>`.
    pub fn render_text(&self, locale: Locale, summary: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} files found", self.count());

        for entry in &self.entries {
            let _ = writeln!(
                out,
                "{}. {} - {}",
                entry.index,
                entry.path.display(),
                entry.purpose.label(locale)
            );
        }

        if summary && !self.entries.is_empty() {
            out.push('\n');
            for (purpose, count) in self.purpose_counts() {
                let _ = writeln!(out, "{:>5}  {}", count, purpose.label(locale));
            }
        }

        out
    }

    pub fn to_json(&self, locale: Locale, summary: bool) -> Result<String> {
        let files = self
            .entries
            .iter()
            .map(|e| JsonEntry {
                index: e.index,
                path: e.path.to_string_lossy().into_owned(),
                purpose: e.purpose,
                label: e.purpose.label(locale),
            })
            .collect();

        let summary = summary.then(|| {
            self.purpose_counts()
                .into_iter()
                .map(|(purpose, count)| JsonSummary {
                    purpose,
                    label: purpose.label(locale),
                    count,
                })
                .collect()
        });

        let doc = JsonReport {
            root: self.root.to_string_lossy().into_owned(),
            count: self.count(),
            files,
            summary,
            skipped: self.skipped,
        };

        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

#[derive(Serialize)]
struct JsonReport {
    root: String,
    count: usize,
    files: Vec<JsonEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Vec<JsonSummary>>,
    skipped: SkipStats,
}

#[derive(Serialize)]
struct JsonEntry {
    index: usize,
    path: String,
    purpose: Purpose,
    label: &'static str,
}

#[derive(Serialize)]
struct JsonSummary {
    purpose: Purpose,
    label: &'static str,
    count: usize,
}
