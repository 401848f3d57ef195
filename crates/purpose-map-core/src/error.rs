use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PurposeMapError {
    #[error("No root directory given - pass ROOT or set PURPOSE_MAP_ROOT")]
    RootNotSpecified,

    #[error("Root directory does not exist or is not a directory: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Permission denied while scanning: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Config key not found: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidConfigValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Invalid exclude pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PurposeMapError>;

impl PurposeMapError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RootNotSpecified => 2,
            Self::RootNotFound { .. } => 3,
            Self::PermissionDenied { .. } => 4,
            Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. }
            | Self::InvalidPattern(_) => 5,
            _ => 1,
        }
    }

    /// Map a walkdir failure onto the scan error taxonomy.
    pub(crate) fn from_walk(root: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());
        let kind = err.io_error().map(|e| e.kind());

        Self::from_walk_parts(root, path, kind, err.to_string())
    }

    fn from_walk_parts(
        root: &std::path::Path,
        path: PathBuf,
        kind: Option<std::io::ErrorKind>,
        message: String,
    ) -> Self {
        match kind {
            Some(std::io::ErrorKind::PermissionDenied) => Self::PermissionDenied { path },
            Some(std::io::ErrorKind::NotFound) if path == root => Self::RootNotFound { path },
            _ => Self::Walk { path, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_for_fatal_scan_errors() {
        let not_specified = PurposeMapError::RootNotSpecified;
        let not_found = PurposeMapError::RootNotFound {
            path: PathBuf::from("/missing"),
        };
        let denied = PurposeMapError::PermissionDenied {
            path: PathBuf::from("/locked"),
        };

        assert_eq!(not_specified.exit_code(), 2);
        assert_eq!(not_found.exit_code(), 3);
        assert_eq!(denied.exit_code(), 4);
    }

    #[test]
    fn test_config_errors_share_exit_code() {
        let err = PurposeMapError::ConfigKeyNotFound {
            key: "scan.nope".to_string(),
        };
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_walk_permission_error_is_permission_denied() {
        let root = PathBuf::from("/work/src");
        let err = PurposeMapError::from_walk_parts(
            &root,
            root.join("locked"),
            Some(std::io::ErrorKind::PermissionDenied),
            "Permission denied (os error 13)".to_string(),
        );

        assert!(matches!(
            err,
            PurposeMapError::PermissionDenied { ref path } if *path == root.join("locked")
        ));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_walk_missing_root_is_root_not_found() {
        let root = PathBuf::from("/work/src");
        let err = PurposeMapError::from_walk_parts(
            &root,
            root.clone(),
            Some(std::io::ErrorKind::NotFound),
            "No such file or directory".to_string(),
        );
        assert!(matches!(err, PurposeMapError::RootNotFound { .. }));
    }

    #[test]
    fn test_walk_other_failures_keep_message() {
        let root = PathBuf::from("/work/src");
        let err = PurposeMapError::from_walk_parts(
            &root,
            root.join("gone"),
            Some(std::io::ErrorKind::NotFound),
            "vanished mid-walk".to_string(),
        );

        match err {
            PurposeMapError::Walk { path, message } => {
                assert_eq!(path, root.join("gone"));
                assert_eq!(message, "vanished mid-walk");
            }
            other => panic!("expected Walk, got {:?}", other),
        }
    }

    #[test]
    fn test_error_message_names_path() {
        let err = PurposeMapError::RootNotFound {
            path: PathBuf::from("/missing/src"),
        };
        assert!(err.to_string().contains("/missing/src"));
    }
}
