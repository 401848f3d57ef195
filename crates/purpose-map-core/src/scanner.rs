//! Source tree scanner.
//!
//! Walks a root directory and collects the candidate files: names ending in a
//! recognized extension, outside any excluded directory, and not declaration
//! files. Only metadata is read; file contents are never opened.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{PurposeMapError, Result};

/// Extensions scanned by default (without the leading dot)
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Directory names whose contents are never candidates
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["__tests__"];

/// Suffix of type declaration files
pub const DEFAULT_DECLARATION_SUFFIX: &str = ".d.ts";

/// File selection policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Recognized extensions, matched case-sensitively against the file name
    pub extensions: Vec<String>,
    /// Directory names excluded wherever they appear in the path
    pub excluded_dirs: Vec<String>,
    /// File-name suffix marking declaration files
    pub declaration_suffix: String,
    /// Extra glob patterns, matched against root-relative paths
    pub exclude_patterns: Vec<String>,
}

impl ScanOptions {
    pub fn with_defaults() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            declaration_suffix: DEFAULT_DECLARATION_SUFFIX.to_string(),
            exclude_patterns: Vec::new(),
        }
    }

    /// Add a recognized extension
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extensions.push(ext.into());
        self
    }

    /// Add an excluded directory name
    pub fn exclude_dir(mut self, dir: impl Into<String>) -> Self {
        self.excluded_dirs.push(dir.into());
        self
    }

    /// Add a glob exclude pattern
    pub fn exclude_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    fn has_recognized_extension(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| {
            file_name
                .strip_suffix(ext.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }

    fn in_excluded_dir(&self, path: &Path) -> bool {
        path.parent().is_some_and(|dir| {
            dir.components().any(|c| {
                let name = c.as_os_str().to_string_lossy();
                self.excluded_dirs.iter().any(|d| *d == name)
            })
        })
    }

    fn is_declaration(&self, file_name: &str) -> bool {
        !self.declaration_suffix.is_empty() && file_name.ends_with(&self.declaration_suffix)
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Why non-candidate files were dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipStats {
    pub foreign_extension: usize,
    pub excluded_dir: usize,
    pub declaration: usize,
    pub pattern: usize,
}

impl SkipStats {
    pub fn total(&self) -> usize {
        self.foreign_extension + self.excluded_dir + self.declaration + self.pattern
    }
}

/// Result of one scan
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Canonical root directory
    pub root: PathBuf,
    /// Candidate files, absolute, in ordinal path order
    pub files: Vec<PathBuf>,
    pub skipped: SkipStats,
}

/// Candidate file collector
pub struct Scanner {
    options: ScanOptions,
    patterns: Vec<Pattern>,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Result<Self> {
        if let Some(ext) = options
            .extensions
            .iter()
            .find(|ext| ext.trim_start_matches('.').trim().is_empty())
        {
            return Err(PurposeMapError::InvalidConfigValue {
                key: "scan.extensions".to_string(),
                value: ext.clone(),
                reason: "extension must not be empty".to_string(),
            });
        }

        let patterns = options
            .exclude_patterns
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { options, patterns })
    }

    /// Scan `root` and return the sorted candidate files.
    ///
    /// Any traversal failure aborts the scan; there are no partial results.
    pub fn scan(&self, root: &Path) -> Result<ScanOutcome> {
        let root = resolve_root(root)?;
        let mut files = Vec::new();
        let mut skipped = SkipStats::default();

        for entry in WalkDir::new(&root) {
            let entry = entry.map_err(|e| PurposeMapError::from_walk(&root, e))?;
            if !is_file_entry(&entry) {
                continue;
            }

            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy();

            if !self.options.has_recognized_extension(&file_name) {
                skipped.foreign_extension += 1;
                continue;
            }
            if self.options.in_excluded_dir(path) {
                skipped.excluded_dir += 1;
                continue;
            }
            if self.options.is_declaration(&file_name) {
                skipped.declaration += 1;
                continue;
            }
            if self.matches_exclude_pattern(&root, path) {
                skipped.pattern += 1;
                continue;
            }

            files.push(path.to_path_buf());
        }

        // Ordinal string order, not component order: "a.b/x" sorts before "a/x".
        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

        Ok(ScanOutcome {
            root,
            files,
            skipped,
        })
    }

    fn matches_exclude_pattern(&self, root: &Path, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let relative = match path.strip_prefix(root) {
            Ok(r) => r,
            Err(_) => return false,
        };
        self.patterns.iter().any(|p| p.matches_path(relative))
    }
}

/// Scan with the default selection policy.
pub fn scan(root: &Path) -> Result<Vec<PathBuf>> {
    Ok(Scanner::new(ScanOptions::with_defaults())?.scan(root)?.files)
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    let canonical = fs::canonicalize(root).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => PurposeMapError::PermissionDenied {
            path: root.to_path_buf(),
        },
        _ => PurposeMapError::RootNotFound {
            path: root.to_path_buf(),
        },
    })?;

    if !canonical.is_dir() {
        return Err(PurposeMapError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    Ok(canonical)
}

/// Regular files, plus symlinks that resolve to one. Directory links are not
/// followed.
fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
