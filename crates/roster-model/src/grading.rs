//! Grading systems: ordered, non-overlapping partitions of the score axis.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::records::GradeRange;

/// A named set of grade bands.
///
/// Construction sorts the bands by `min_score` and guarantees that
/// `ranges[i].max_score <= ranges[i + 1].min_score` for every adjacent pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingSystem {
    name: String,
    ranges: Vec<GradeRange>,
}

impl GradingSystem {
    pub fn new(name: impl Into<String>, mut ranges: Vec<GradeRange>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyGradingSystemName);
        }

        for range in &ranges {
            check_bounds(range)?;
        }

        ranges.sort_by(|a, b| a.min_score.total_cmp(&b.min_score));
        for pair in ranges.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if lower.max_score > upper.min_score {
                return Err(ModelError::OverlappingRanges {
                    lower_min: lower.min_score,
                    lower_max: lower.max_score,
                    lower_letter: lower.letter_grade.clone(),
                    upper_min: upper.min_score,
                    upper_max: upper.max_score,
                    upper_letter: upper.letter_grade.clone(),
                });
            }
        }

        Ok(Self {
            name: name.trim().to_string(),
            ranges,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bands in ascending score order.
    pub fn ranges(&self) -> &[GradeRange] {
        &self.ranges
    }

    /// Band containing `score`, if any.
    ///
    /// Where two bands touch (`max == next.min`) the higher band wins.
    pub fn grade_for(&self, score: f64) -> Option<&GradeRange> {
        self.ranges.iter().rev().find(|range| range.contains(score))
    }
}

fn check_bounds(range: &GradeRange) -> Result<()> {
    let invalid = |reason: &str| ModelError::InvalidRange {
        min: range.min_score,
        max: range.max_score,
        reason: reason.to_string(),
    };
    if !(0.0..=100.0).contains(&range.min_score) || !(0.0..=100.0).contains(&range.max_score) {
        return Err(invalid("scores must be between 0 and 100"));
    }
    if range.min_score >= range.max_score {
        return Err(invalid("min score must be less than max score"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::PassFail;

    fn band(min: f64, max: f64, letter: &str) -> GradeRange {
        GradeRange {
            min_score: min,
            max_score: max,
            letter_grade: letter.to_string(),
            grade_point: None,
            description: String::new(),
            pass_fail: if letter == "F" {
                PassFail::Fail
            } else {
                PassFail::Pass
            },
        }
    }

    #[test]
    fn test_sorts_ranges() {
        let system = GradingSystem::new(
            "Default",
            vec![band(50.0, 100.0, "P"), band(0.0, 49.0, "F")],
        )
        .unwrap();
        let letters: Vec<_> = system
            .ranges()
            .iter()
            .map(|r| r.letter_grade.as_str())
            .collect();
        assert_eq!(letters, vec!["F", "P"]);
    }

    #[test]
    fn test_rejects_overlap() {
        let err = GradingSystem::new(
            "Broken",
            vec![
                band(0.0, 49.0, "F"),
                band(50.0, 59.0, "D"),
                band(55.0, 100.0, "C"),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::OverlappingRanges { .. }));
    }

    #[test]
    fn test_touching_ranges_allowed() {
        let system = GradingSystem::new(
            "Touching",
            vec![band(0.0, 50.0, "F"), band(50.0, 100.0, "P")],
        )
        .unwrap();
        assert_eq!(system.grade_for(50.0).map(|r| r.letter_grade.as_str()), Some("P"));
        assert_eq!(system.grade_for(10.0).map(|r| r.letter_grade.as_str()), Some("F"));
    }

    #[test]
    fn test_rejects_inverted_and_empty_name() {
        assert!(matches!(
            GradingSystem::new("X", vec![band(60.0, 60.0, "B")]),
            Err(ModelError::InvalidRange { .. })
        ));
        assert!(matches!(
            GradingSystem::new("  ", vec![]),
            Err(ModelError::EmptyGradingSystemName)
        ));
    }
}
