use crate::domain::table::HighlightCategory;

/// Threshold rule for row highlighting. Boundary values are neutral; an
/// absent percentage is always neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightRule {
    high_above: f64,
    low_below: f64,
}

impl HighlightRule {
    pub fn from_config(high_above: f64, low_below: f64) -> Self {
        Self {
            high_above,
            low_below,
        }
    }

    pub fn classify(&self, percentage: Option<f64>) -> HighlightCategory {
        match percentage {
            Some(pct) if pct > self.high_above => HighlightCategory::High,
            Some(pct) if pct < self.low_below => HighlightCategory::Low,
            _ => HighlightCategory::Neutral,
        }
    }
}

impl Default for HighlightRule {
    fn default() -> Self {
        Self::from_config(45.0, 25.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_above_high_threshold() {
        let rule = HighlightRule::default();
        assert_eq!(rule.classify(Some(45.0001)), HighlightCategory::High);
        assert_eq!(rule.classify(Some(80.0)), HighlightCategory::High);
    }

    #[test]
    fn test_below_low_threshold() {
        let rule = HighlightRule::default();
        assert_eq!(rule.classify(Some(24.9999)), HighlightCategory::Low);
        assert_eq!(rule.classify(Some(0.0)), HighlightCategory::Low);
    }

    #[test]
    fn test_boundaries_are_neutral() {
        let rule = HighlightRule::default();
        assert_eq!(rule.classify(Some(45.0)), HighlightCategory::Neutral);
        assert_eq!(rule.classify(Some(25.0)), HighlightCategory::Neutral);
    }

    #[test]
    fn test_absent_is_neutral() {
        let rule = HighlightRule::default();
        assert_eq!(rule.classify(None), HighlightCategory::Neutral);
    }

    #[test]
    fn test_custom_thresholds() {
        let rule = HighlightRule::from_config(60.0, 10.0);
        assert_eq!(rule.classify(Some(50.0)), HighlightCategory::Neutral);
        assert_eq!(rule.classify(Some(60.5)), HighlightCategory::High);
        assert_eq!(rule.classify(Some(9.0)), HighlightCategory::Low);
    }
}
