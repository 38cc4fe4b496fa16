use crate::domain::forecast::CurvePoint;

/// Confidence lookups over a cumulative forecast curve.
///
/// The curve is already sorted in its mode's reading order, so the first
/// point whose cumulative probability reaches the requested level is the
/// answer: "at least this many items" in how-many mode, "done by this
/// date" in when mode.
pub fn outcome_at_confidence<T: Copy>(curve: &[CurvePoint<T>], level: f64) -> Option<T> {
    curve
        .iter()
        .find(|point| point.probability >= level)
        .map(|point| point.outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve_point(outcome: usize, probability: f64) -> CurvePoint<usize> {
        CurvePoint {
            outcome,
            frequency: 0,
            probability,
        }
    }

    #[test]
    fn outcome_at_confidence_returns_none_for_empty_curve() {
        let curve: Vec<CurvePoint<usize>> = Vec::new();
        assert_eq!(outcome_at_confidence(&curve, 85.0), None);
    }

    #[test]
    fn outcome_at_confidence_picks_first_point_reaching_the_level() {
        let curve = vec![
            curve_point(20, 12.5),
            curve_point(18, 55.0),
            curve_point(15, 85.0),
            curve_point(12, 100.0),
        ];

        assert_eq!(outcome_at_confidence(&curve, 50.0), Some(18));
        assert_eq!(outcome_at_confidence(&curve, 85.0), Some(15));
        assert_eq!(outcome_at_confidence(&curve, 95.0), Some(12));
    }

    #[test]
    fn outcome_at_confidence_clamps_low_levels_to_the_first_point() {
        let curve = vec![curve_point(9, 40.0), curve_point(7, 100.0)];

        assert_eq!(outcome_at_confidence(&curve, 0.0), Some(9));
    }
}
