use serde::Serialize;

/// Lowest score that counts as passing for the passing-only filter.
pub const PASSING_SCORE: i64 = 80;

/// Scores at or above this get the "Excellent Performance" highlight.
pub const EXCELLENT_SCORE: i64 = 90;

const NEEDS_IMPROVEMENT_SCORE: i64 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Excellent,
    Good,
    NeedsImprovement,
    Failed,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Excellent => "Excellent",
            Category::Good => "Good",
            Category::NeedsImprovement => "Needs Improvement",
            Category::Failed => "Failed",
        }
    }

    /// Badge key used by the UI stylesheet.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Excellent => "excellent",
            Category::Good => "good",
            Category::NeedsImprovement => "needs-improvement",
            Category::Failed => "failed",
        }
    }
}

/// Thresholds are checked top-down, first match wins. Out-of-range input
/// falls through the same thresholds (e.g. 150 is Excellent, -3 is Failed).
pub fn classify(score: i64) -> Category {
    if score >= EXCELLENT_SCORE {
        Category::Excellent
    } else if score >= PASSING_SCORE {
        Category::Good
    } else if score >= NEEDS_IMPROVEMENT_SCORE {
        Category::NeedsImprovement
    } else {
        Category::Failed
    }
}

pub fn is_passing(score: i64) -> bool {
    score >= PASSING_SCORE
}

pub fn is_excellent(score: i64) -> bool {
    score >= EXCELLENT_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries_are_exact() {
        assert_eq!(classify(100), Category::Excellent);
        assert_eq!(classify(90), Category::Excellent);
        assert_eq!(classify(89), Category::Good);
        assert_eq!(classify(80), Category::Good);
        assert_eq!(classify(79), Category::NeedsImprovement);
        assert_eq!(classify(65), Category::NeedsImprovement);
        assert_eq!(classify(64), Category::Failed);
        assert_eq!(classify(0), Category::Failed);
    }

    #[test]
    fn classify_degrades_on_out_of_range_input() {
        assert_eq!(classify(250), Category::Excellent);
        assert_eq!(classify(-1), Category::Failed);
        assert_eq!(classify(i64::MIN), Category::Failed);
        assert_eq!(classify(i64::MAX), Category::Excellent);
    }

    #[test]
    fn labels_and_slugs_match_ui_badges() {
        assert_eq!(Category::NeedsImprovement.label(), "Needs Improvement");
        assert_eq!(Category::NeedsImprovement.slug(), "needs-improvement");
        assert_eq!(Category::Excellent.slug(), "excellent");
    }

    #[test]
    fn passing_and_excellent_predicates() {
        assert!(is_passing(80));
        assert!(!is_passing(79));
        assert!(is_excellent(90));
        assert!(!is_excellent(89));
    }

    #[test]
    fn category_serializes_camel_case() {
        let v = serde_json::to_value(Category::NeedsImprovement).expect("serialize");
        assert_eq!(v, serde_json::json!("needsImprovement"));
    }
}
