//! Purpose Rule Table
//!
//! Ordered `(matcher, purpose)` pairs. Rules are evaluated top to bottom and
//! the first match wins, so refinements such as `components` + `common` must
//! sit above the plain `components` rule.

use super::builtin::Purpose;

/// Segment test for a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// One segment equals the keyword
    Segment(&'static str),
    /// Every keyword appears as a segment
    AllOf(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, segments: &[&str]) -> bool {
        match self {
            Self::Segment(keyword) => segments.contains(keyword),
            Self::AllOf(keywords) => keywords.iter().all(|k| segments.contains(k)),
        }
    }

    /// Keywords involved in this matcher
    pub fn keywords(&self) -> &[&'static str] {
        match self {
            Self::Segment(keyword) => std::slice::from_ref(keyword),
            Self::AllOf(keywords) => *keywords,
        }
    }
}

/// A single classification rule
#[derive(Debug, Clone, Copy)]
pub struct PurposeRule {
    pub matcher: Matcher,
    pub purpose: Purpose,
}

const fn rule(matcher: Matcher, purpose: Purpose) -> PurposeRule {
    PurposeRule { matcher, purpose }
}

/// Builtin rules in precedence order. `Purpose::Module` has no rule; it is
/// the fallback when nothing here matches.
pub const BUILTIN_RULES: &[PurposeRule] = &[
    rule(
        Matcher::AllOf(&["components", "common"]),
        Purpose::CommonComponent,
    ),
    rule(
        Matcher::AllOf(&["components", "shared"]),
        Purpose::SharedComponent,
    ),
    rule(Matcher::AllOf(&["components", "ui"]), Purpose::UiComponent),
    rule(
        Matcher::AllOf(&["components", "charts"]),
        Purpose::ChartComponent,
    ),
    rule(Matcher::Segment("components"), Purpose::Component),
    rule(Matcher::Segment("screens"), Purpose::Screen),
    rule(Matcher::Segment("hooks"), Purpose::Hook),
    rule(Matcher::Segment("utils"), Purpose::Utility),
    rule(Matcher::Segment("services"), Purpose::Service),
    rule(Matcher::AllOf(&["store", "slices"]), Purpose::StateSlice),
    rule(Matcher::AllOf(&["store", "thunks"]), Purpose::AsyncAction),
    rule(Matcher::AllOf(&["store", "actions"]), Purpose::Action),
    rule(Matcher::Segment("store"), Purpose::StoreRoot),
    rule(Matcher::Segment("repositories"), Purpose::DataAccess),
    rule(Matcher::Segment("database"), Purpose::Database),
    rule(Matcher::Segment("types"), Purpose::TypeDefinitions),
    rule(Matcher::Segment("theme"), Purpose::Theme),
    rule(Matcher::Segment("navigation"), Purpose::Navigation),
    rule(Matcher::Segment("localization"), Purpose::Localization),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_non_fallback_purpose_has_exactly_one_rule() {
        for purpose in Purpose::ALL.iter().filter(|p| **p != Purpose::Module) {
            let count = BUILTIN_RULES
                .iter()
                .filter(|r| r.purpose == *purpose)
                .count();
            assert_eq!(count, 1, "{:?} should have one rule", purpose);
        }
        assert!(BUILTIN_RULES.iter().all(|r| r.purpose != Purpose::Module));
    }

    #[test]
    fn test_rule_order_follows_purpose_order() {
        let ordered: Vec<Purpose> = BUILTIN_RULES.iter().map(|r| r.purpose).collect();
        assert_eq!(ordered, Purpose::ALL[..Purpose::ALL.len() - 1].to_vec());
    }

    #[test]
    fn test_refinements_precede_their_generic_rule() {
        let position = |p: Purpose| BUILTIN_RULES.iter().position(|r| r.purpose == p);

        for refined in [
            Purpose::CommonComponent,
            Purpose::SharedComponent,
            Purpose::UiComponent,
            Purpose::ChartComponent,
        ] {
            assert!(position(refined) < position(Purpose::Component));
        }
        for refined in [Purpose::StateSlice, Purpose::AsyncAction, Purpose::Action] {
            assert!(position(refined) < position(Purpose::StoreRoot));
        }
    }

    #[test]
    fn test_segment_matcher_is_exact() {
        let matcher = Matcher::Segment("hooks");
        assert!(matcher.matches(&["src", "hooks"]));
        assert!(!matcher.matches(&["src", "hooks-legacy"]));
        assert!(!matcher.matches(&["src", "Hooks"]));
    }

    #[test]
    fn test_all_of_requires_every_keyword() {
        let matcher = Matcher::AllOf(&["store", "slices"]);
        assert!(matcher.matches(&["slices", "x", "store"]));
        assert!(!matcher.matches(&["store"]));
        assert!(!matcher.matches(&["slices"]));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(Matcher::Segment("utils").keywords(), &["utils"]);
        assert_eq!(
            Matcher::AllOf(&["components", "ui"]).keywords(),
            &["components", "ui"]
        );
    }
}
