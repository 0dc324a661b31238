use crate::models::forecast::CloudSample;

/// Upper bound of the vividness scale
pub const MAX_SCORE: f64 = 2.5;

/// Total cloud cover range (inclusive) that counts as a favourable hour
const FAVOURABLE_COVER: (f64, f64) = (30.0, 80.0);

/// Number of favourable hours needed for a full duration score
const FULL_DURATION_HOURS: f64 = 3.0;

/// Average cover from where the area score is scaled against 70% instead of 30%
const AREA_BREAK: f64 = 30.0;
const AREA_FULL_COVER: f64 = 70.0;

const DURATION_WEIGHT: f64 = 0.2;
const STRUCTURE_WEIGHT: f64 = 0.3;
const AREA_WEIGHT: f64 = 0.2;
const CLARITY_WEIGHT: f64 = 0.3;

/// The four independent sub-scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub duration: f64,
    pub structure: f64,
    pub area: f64,
    pub clarity: f64,
}

impl SubScores {
    /// Calculates all sub-scores for a non-empty set of samples.
    /// Returns None if there are no samples to score.
    ///
    /// # Arguments
    ///
    /// * 'samples' - cloud samples from the sunset window
    /// * 'pm25' - PM2.5 concentration in μg/m³
    pub fn new(samples: &[CloudSample], pm25: f64) -> Option<SubScores> {
        if samples.is_empty() {
            return None;
        }

        Some(SubScores {
            duration: duration_score(samples),
            structure: structure_score(samples),
            area: area_score(samples),
            clarity: clarity_score(pm25),
        })
    }

    /// Weighted sum of the sub-scores rescaled onto the vividness scale
    pub fn composite(&self) -> f64 {
        let weighted = self.duration * DURATION_WEIGHT
            + self.structure * STRUCTURE_WEIGHT
            + self.area * AREA_WEIGHT
            + self.clarity * CLARITY_WEIGHT;

        (weighted * MAX_SCORE).clamp(0.0, MAX_SCORE)
    }
}

/// Calculates the vividness score (0 - 2.5) for the given sunset window samples.
/// An empty sample set scores exactly 0 regardless of the pollutant level.
///
/// # Arguments
///
/// * 'samples' - cloud samples from the sunset window
/// * 'pm25' - PM2.5 concentration in μg/m³
pub fn vividness_score(samples: &[CloudSample], pm25: f64) -> f64 {
    SubScores::new(samples, pm25).map_or(0.0, |s| s.composite())
}

/// Share of favourable hours, where three such hours give a full score.
///
/// # Arguments
///
/// * 'samples' - cloud samples, must not be empty
fn duration_score(samples: &[CloudSample]) -> f64 {
    let favourable = samples
        .iter()
        .filter(|s| s.total >= FAVOURABLE_COVER.0 && s.total <= FAVOURABLE_COVER.1)
        .count();

    unit(favourable as f64 / FULL_DURATION_HOURS)
}

/// Rewards mid and high clouds that catch the low sun, and penalises low clouds
/// blocking the view.
///
/// # Arguments
///
/// * 'samples' - cloud samples, must not be empty
fn structure_score(samples: &[CloudSample]) -> f64 {
    let n = samples.len() as f64;
    let mid_high_ratio = samples
        .iter()
        .map(|s| (s.mid + s.high) / s.total.max(1.0))
        .sum::<f64>() / n;
    let low_share = samples.iter().map(|s| s.low / 100.0).sum::<f64>() / n;

    unit(mid_high_ratio * 0.8 + (1.0 - low_share) * 0.2)
}

/// Sky coverage score. Note the step at 30%: just below it the score is close to 1.0
/// while at 30% it drops to 30/70.
///
/// # Arguments
///
/// * 'samples' - cloud samples, must not be empty
fn area_score(samples: &[CloudSample]) -> f64 {
    let avg = samples.iter().map(|s| s.total).sum::<f64>() / samples.len() as f64;

    if avg >= AREA_BREAK {
        unit((avg / AREA_FULL_COVER).min(1.0))
    } else {
        unit(avg / AREA_BREAK)
    }
}

/// Atmospheric transparency from PM2.5 using common AQI breakpoints
///
/// # Arguments
///
/// * 'pm25' - PM2.5 concentration in μg/m³
fn clarity_score(pm25: f64) -> f64 {
    if pm25 <= 35.0 {
        0.9
    } else if pm25 <= 75.0 {
        0.5
    } else {
        0.2
    }
}

fn unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(total: f64, low: f64, mid: f64, high: f64) -> CloudSample {
        CloudSample { hour: 18, total, low, mid, high }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_samples_score_zero() {
        for pm25 in [0.0, 20.0, 50.0, 500.0] {
            assert_eq!(vividness_score(&[], pm25), 0.0);
        }
        assert!(SubScores::new(&[], 10.0).is_none());
    }

    #[test]
    fn moderate_mid_high_cover_with_clear_air() {
        let samples = [sample(60.0, 10.0, 30.0, 20.0); 4];
        let sub = SubScores::new(&samples, 20.0).unwrap();

        assert_eq!(sub.duration, 1.0);
        assert!(close(sub.structure, 0.8 * 50.0 / 60.0 + 0.9 * 0.2));
        assert!(close(sub.area, 60.0 / 70.0));
        assert_eq!(sub.clarity, 0.9);

        let score = vividness_score(&samples, 20.0);
        assert!(close(score, 2.5 * (0.2 + 0.3 * sub.structure + 0.2 * sub.area + 0.27)));
        assert!(score > 2.2 && score < 2.25);
    }

    #[test]
    fn thin_cover_with_polluted_air() {
        let samples = [sample(10.0, 10.0, 0.0, 0.0); 4];
        let sub = SubScores::new(&samples, 100.0).unwrap();

        assert_eq!(sub.duration, 0.0);
        assert!(close(sub.area, 10.0 / 30.0));
        assert_eq!(sub.clarity, 0.2);
        assert!(close(vividness_score(&samples, 100.0), 2.5 * (0.3 * 0.18 + 0.2 / 3.0 + 0.06)));
    }

    #[test]
    fn duration_counts_inclusive_range_and_caps() {
        let samples = [
            sample(30.0, 0.0, 0.0, 0.0),
            sample(80.0, 0.0, 0.0, 0.0),
            sample(29.9, 0.0, 0.0, 0.0),
            sample(80.1, 0.0, 0.0, 0.0),
        ];
        assert!(close(duration_score(&samples), 2.0 / 3.0));
        assert_eq!(duration_score(&[sample(50.0, 0.0, 0.0, 0.0); 4]), 1.0);
        assert!(close(duration_score(&[sample(50.0, 0.0, 0.0, 0.0)]), 1.0 / 3.0));
    }

    #[test]
    fn structure_guards_zero_total() {
        let s = structure_score(&[sample(0.0, 0.0, 0.0, 0.0)]);
        assert!(close(s, 0.2));
    }

    #[test]
    fn structure_is_bounded_when_bands_exceed_total() {
        let s = structure_score(&[sample(20.0, 0.0, 100.0, 100.0)]);
        assert_eq!(s, 1.0);
    }

    #[test]
    fn area_keeps_step_at_thirty() {
        let at_break = area_score(&[sample(30.0, 0.0, 0.0, 0.0)]);
        let below_break = area_score(&[sample(29.999, 0.0, 0.0, 0.0)]);

        assert!(close(at_break, 30.0 / 70.0));
        assert!(close(below_break, 29.999 / 30.0));
        assert!(below_break > 0.99);
        assert_eq!(area_score(&[sample(95.0, 0.0, 0.0, 0.0)]), 1.0);
    }

    #[test]
    fn clarity_breakpoints() {
        assert_eq!(clarity_score(0.0), 0.9);
        assert_eq!(clarity_score(35.0), 0.9);
        assert_eq!(clarity_score(35.1), 0.5);
        assert_eq!(clarity_score(75.0), 0.5);
        assert_eq!(clarity_score(75.1), 0.2);
    }

    #[test]
    fn score_stays_in_range_over_cover_grid() {
        let steps = [0.0, 25.0, 50.0, 75.0, 100.0];
        for total in steps {
            for low in steps {
                for mid in steps {
                    for high in steps {
                        for pm25 in [0.0, 50.0, 300.0] {
                            let samples = [sample(total, low, mid, high); 4];
                            let score = vividness_score(&samples, pm25);
                            assert!((0.0..=MAX_SCORE).contains(&score), "{} out of range", score);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn cleaner_air_never_lowers_score() {
        let samples = [sample(45.0, 20.0, 25.0, 10.0), sample(70.0, 5.0, 40.0, 30.0)];
        let mut previous = vividness_score(&samples, 400.0);
        for pm25 in (0..400).rev().map(|p| p as f64) {
            let score = vividness_score(&samples, pm25);
            assert!(score >= previous);
            previous = score;
        }
    }
}
