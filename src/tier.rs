use std::fmt;
use std::fmt::Formatter;
use crate::scoring::MAX_SCORE;

/// Afterglow intensity tiers, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Negligible,
    Faint,
    FaintToModerate,
    Moderate,
    ModerateToStrong,
    ImperfectStrong,
    TypicalStrong,
    HighQualityStrong,
    Exceptional,
}

/// Lower bounds (inclusive) of each tier, in ascending order
const LOWER_BOUNDS: [(f64, Tier); 9] = [
    (0.0, Tier::Negligible),
    (0.05, Tier::Faint),
    (0.2, Tier::FaintToModerate),
    (0.4, Tier::Moderate),
    (0.6, Tier::ModerateToStrong),
    (0.8, Tier::ImperfectStrong),
    (1.0, Tier::TypicalStrong),
    (1.5, Tier::HighQualityStrong),
    (2.0, Tier::Exceptional),
];

impl Tier {
    /// Classifies a vividness score. Scores outside [0, 2.5] are clamped to the nearest
    /// bound and NaN is treated as 0.
    ///
    /// # Arguments
    ///
    /// * 'score' - the vividness score
    pub fn from_score(score: f64) -> Tier {
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, MAX_SCORE) };

        LOWER_BOUNDS
            .iter()
            .rev()
            .find(|(lower, _)| score >= *lower)
            .map_or(Tier::Negligible, |(_, tier)| *tier)
    }

    /// Descriptive label for the tier
    pub fn label(self) -> &'static str {
        match self {
            Tier::Negligible => "negligible burn, or an atypical sky the forecast can't pick up",
            Tier::Faint => "faint burn, only worth it when the air is very clear",
            Tier::FaintToModerate => "faint to moderate burn",
            Tier::Moderate => "moderate burn, worth watching",
            Tier::ModerateToStrong => "moderate to strong burn",
            Tier::ImperfectStrong => "strong burn, though not a perfect one",
            Tier::TypicalStrong => "typical strong burn",
            Tier::HighQualityStrong => "high quality strong burn: wide coverage, lots of cloud, bright colors",
            Tier::Exceptional => "exceptional burn: wide coverage, near full cloud, vivid colors, long lasting",
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Tier {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive_lower_exclusive_upper() {
        assert_eq!(Tier::from_score(0.0), Tier::Negligible);
        assert_eq!(Tier::from_score(0.0499), Tier::Negligible);
        assert_eq!(Tier::from_score(0.05), Tier::Faint);
        assert_eq!(Tier::from_score(0.2), Tier::FaintToModerate);
        assert_eq!(Tier::from_score(0.3999), Tier::FaintToModerate);
        assert_eq!(Tier::from_score(0.4), Tier::Moderate);
        assert_eq!(Tier::from_score(0.6), Tier::ModerateToStrong);
        assert_eq!(Tier::from_score(0.8), Tier::ImperfectStrong);
        assert_eq!(Tier::from_score(0.9999), Tier::ImperfectStrong);
        assert_eq!(Tier::from_score(1.0), Tier::TypicalStrong);
        assert_eq!(Tier::from_score(1.5), Tier::HighQualityStrong);
        assert_eq!(Tier::from_score(1.9999), Tier::HighQualityStrong);
        assert_eq!(Tier::from_score(2.0), Tier::Exceptional);
        assert_eq!(Tier::from_score(2.5), Tier::Exceptional);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(Tier::from_score(-1.0), Tier::Negligible);
        assert_eq!(Tier::from_score(7.0), Tier::Exceptional);
        assert_eq!(Tier::from_score(f64::NAN), Tier::Negligible);
    }

    #[test]
    fn tiers_are_monotonic_over_range() {
        let mut previous = Tier::Negligible;
        for i in 0..=2500 {
            let tier = Tier::from_score(i as f64 / 1000.0);
            assert!(tier >= previous);
            previous = tier;
        }
        assert_eq!(previous, Tier::Exceptional);
    }

    #[test]
    fn labels_are_distinct() {
        let labels = LOWER_BOUNDS.iter().map(|(_, t)| t.label()).collect::<Vec<&str>>();
        for (i, l) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(l));
        }
    }
}
