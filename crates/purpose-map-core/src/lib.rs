pub mod config;
pub mod error;
pub mod purpose;
pub mod report;
pub mod scanner;

pub use config::Config;
pub use error::{PurposeMapError, Result};
pub use report::{Report, ReportEntry};
pub use scanner::{scan, ScanOptions, ScanOutcome, Scanner, SkipStats};

// Purpose classification
pub use purpose::{
    classify, directory_segments, FileClassification, Locale, Matcher, Purpose, PurposeClassifier,
    PurposeRule, BUILTIN_RULES,
};
