//! # Purpose Module
//!
//! Infers what a source file is for from the directory names in its path.
//!
//! ## Module layout
//!
//! - `builtin`: the fixed purpose vocabulary and its localized labels
//! - `rules`: the ordered rule table
//! - `classifier`: first-match-wins evaluation of the table
//!
//! ## Example
//!
//! ```rust
//! use purpose_map_core::purpose::{classify, Locale, Purpose};
//!
//! let purpose = classify("src/components/common/Button.tsx");
//! assert_eq!(purpose, Purpose::CommonComponent);
//! assert_eq!(purpose.label(Locale::En), "common component");
//!
//! // Anything without a known directory falls through to the catch-all.
//! assert_eq!(classify("src/App.tsx"), Purpose::Module);
//! ```

mod builtin;
mod classifier;
mod rules;

// Re-exports
pub use builtin::{Locale, Purpose};
pub use classifier::{classify, directory_segments, FileClassification, PurposeClassifier};
pub use rules::{Matcher, PurposeRule, BUILTIN_RULES};
