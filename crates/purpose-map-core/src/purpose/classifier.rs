//! Purpose Classifier
//!
//! Assigns a [`Purpose`] to a path by evaluating the rule table against the
//! path's directory segments. Purely lexical: the path need not exist.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::builtin::Purpose;
use super::rules::{PurposeRule, BUILTIN_RULES};

/// Classification result for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileClassification {
    pub path: PathBuf,
    pub purpose: Purpose,
}

/// Rule-table classifier
#[derive(Debug, Clone, Copy)]
pub struct PurposeClassifier {
    rules: &'static [PurposeRule],
}

impl PurposeClassifier {
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN_RULES,
        }
    }

    pub fn rules(&self) -> &'static [PurposeRule] {
        self.rules
    }

    /// First rule whose matcher accepts the path, with its table index.
    pub fn matching_rule(&self, path: impl AsRef<Path>) -> Option<(usize, &'static PurposeRule)> {
        let text = path.as_ref().to_string_lossy();
        let segments = directory_segments(&text);

        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matcher.matches(&segments))
    }

    /// Classify a single path. Never fails; unmatched paths are `Module`.
    pub fn classify(&self, path: impl AsRef<Path>) -> Purpose {
        self.matching_rule(path)
            .map(|(_, rule)| rule.purpose)
            .unwrap_or(Purpose::Module)
    }

    pub fn classify_all(&self, files: &[PathBuf]) -> Vec<FileClassification> {
        files
            .iter()
            .map(|file| FileClassification {
                path: file.clone(),
                purpose: self.classify(file),
            })
            .collect()
    }
}

impl Default for PurposeClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Classify with the builtin rule table.
pub fn classify(path: impl AsRef<Path>) -> Purpose {
    PurposeClassifier::builtin().classify(path)
}

/// Directory components of a path, excluding the final file name.
///
/// Both `/` and `\` separate segments; empty and `.` segments are dropped.
pub fn directory_segments(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();
    segments.pop();
    segments
}
