use crate::rating::{CourseScores, TeacherScores};

/// Number of decimal places displayed for an averaged rating
pub const AVERAGE_DECIMALS: u32 = 1;

/// Rounds half-up (away from zero) at the given number of decimal places.
/// Ratings are non-negative, so "away from zero" and "half-up" coincide.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn mean(sum: i64, count: usize) -> f64 {
    round_half_up(sum as f64 / count as f64, AVERAGE_DECIMALS)
}

/// Per-dimension averages over a set of course reviews.
///
/// A pure function of the review list: the server recomputes it on demand and
/// any client holding the same reviews derives the identical result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseAverages {
    pub overall: f64,
    pub leniency: f64,
    pub usefulness: f64,
    pub interest: f64,
    pub count: u64,
}

impl CourseAverages {
    /// Returns `None` for an empty slice: "no data", never a numeric zero.
    pub fn from_scores(scores: &[CourseScores]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let mut overall = 0i64;
        let mut leniency = 0i64;
        let mut usefulness = 0i64;
        let mut interest = 0i64;
        for s in scores {
            overall += i64::from(s.overall);
            leniency += i64::from(s.leniency);
            usefulness += i64::from(s.usefulness);
            interest += i64::from(s.interest);
        }

        let n = scores.len();
        Some(Self {
            overall: mean(overall, n),
            leniency: mean(leniency, n),
            usefulness: mean(usefulness, n),
            interest: mean(interest, n),
            count: n as u64,
        })
    }
}

/// Per-dimension averages over a set of teacher reviews
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeacherAverages {
    pub overall: f64,
    pub leniency: f64,
    pub knowledge: f64,
    pub communication: f64,
    pub count: u64,
}

impl TeacherAverages {
    /// Returns `None` for an empty slice: "no data", never a numeric zero.
    pub fn from_scores(scores: &[TeacherScores]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let mut overall = 0i64;
        let mut leniency = 0i64;
        let mut knowledge = 0i64;
        let mut communication = 0i64;
        for s in scores {
            overall += i64::from(s.overall);
            leniency += i64::from(s.leniency);
            knowledge += i64::from(s.knowledge);
            communication += i64::from(s.communication);
        }

        let n = scores.len();
        Some(Self {
            overall: mean(overall, n),
            leniency: mean(leniency, n),
            knowledge: mean(knowledge, n),
            communication: mean(communication, n),
            count: n as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(overall: i32, leniency: i32, usefulness: i32, interest: i32) -> CourseScores {
        CourseScores {
            overall,
            leniency,
            usefulness,
            interest,
        }
    }

    #[test]
    fn test_empty_input_has_no_averages() {
        assert_eq!(CourseAverages::from_scores(&[]), None);
        assert_eq!(TeacherAverages::from_scores(&[]), None);
    }

    #[test]
    fn test_single_review_is_its_own_average() {
        let avg = CourseAverages::from_scores(&[course(8, 6, 9, 7)]).unwrap();
        assert_eq!(avg.overall, 8.0);
        assert_eq!(avg.leniency, 6.0);
        assert_eq!(avg.usefulness, 9.0);
        assert_eq!(avg.interest, 7.0);
        assert_eq!(avg.count, 1);
    }

    #[test]
    fn test_means_round_to_one_decimal() {
        // overall: (7 + 8 + 8) / 3 = 7.666… -> 7.7
        let avg =
            CourseAverages::from_scores(&[course(7, 5, 6, 4), course(8, 5, 7, 4), course(8, 5, 8, 5)])
                .unwrap();
        assert_eq!(avg.overall, 7.7);
        assert_eq!(avg.leniency, 5.0);
        assert_eq!(avg.usefulness, 7.0);
        // interest: 13 / 3 = 4.333… -> 4.3
        assert_eq!(avg.interest, 4.3);
        assert_eq!(avg.count, 3);
    }

    #[test]
    fn test_halfway_values_round_up() {
        // 9 / 2 = 4.5 stays 4.5; 5 / 4 = 1.25 -> 1.3; 7 / 4 = 1.75 -> 1.8
        assert_eq!(round_half_up(4.5, 1), 4.5);
        assert_eq!(round_half_up(1.25, 1), 1.3);
        assert_eq!(round_half_up(1.75, 1), 1.8);

        let avg = CourseAverages::from_scores(&[
            course(1, 1, 1, 1),
            course(2, 1, 2, 1),
            course(1, 2, 2, 1),
            course(1, 1, 2, 2),
        ])
        .unwrap();
        // overall: 5 / 4 = 1.25 rounds up to 1.3
        assert_eq!(avg.overall, 1.3);
        // usefulness: 7 / 4 = 1.75 rounds up to 1.8
        assert_eq!(avg.usefulness, 1.8);
    }

    #[test]
    fn test_means_stay_close_to_exact_value() {
        let scores: Vec<CourseScores> = (1..=10).map(|v| course(v, v, v, v)).collect();
        let avg = CourseAverages::from_scores(&scores).unwrap();
        // exact mean of 1..=10 is 5.5
        assert!((avg.overall - 5.5).abs() < 0.05);
        assert_eq!(avg.count, 10);
    }

    #[test]
    fn test_teacher_dimensions_are_independent() {
        let avg = TeacherAverages::from_scores(&[
            TeacherScores {
                overall: 10,
                leniency: 2,
                knowledge: 9,
                communication: 4,
            },
            TeacherScores {
                overall: 8,
                leniency: 4,
                knowledge: 10,
                communication: 5,
            },
        ])
        .unwrap();
        assert_eq!(avg.overall, 9.0);
        assert_eq!(avg.leniency, 3.0);
        assert_eq!(avg.knowledge, 9.5);
        assert_eq!(avg.communication, 4.5);
        assert_eq!(avg.count, 2);
    }

    #[test]
    fn test_round_half_up_precision_is_adjustable() {
        assert_eq!(round_half_up(2.375, 2), 2.38);
        assert_eq!(round_half_up(2.375, 0), 2.0);
    }
}
