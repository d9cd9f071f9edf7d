use crate::models::domain::{FairDimension, ScoreRow, ValidationResult};

pub fn is_in_range(dimension: FairDimension, score: Option<u32>) -> bool {
    score.is_some_and(|value| value <= dimension.max_score())
}

/// Range-checks each parsed score. Total; never fails.
pub fn validate(row: &ScoreRow) -> ValidationResult {
    if !row.parse_succeeded {
        return ValidationResult::invalid();
    }

    let f_valid = is_in_range(FairDimension::Findable, row.f_score);
    let a_valid = is_in_range(FairDimension::Accessible, row.a_score);
    let i_valid = is_in_range(FairDimension::Interoperable, row.i_score);
    let r_valid = is_in_range(FairDimension::Reusable, row.r_score);

    ValidationResult {
        f_valid,
        a_valid,
        i_valid,
        r_valid,
        all_valid: f_valid && a_valid && i_valid && r_valid,
    }
}

/// Mean of the four per-dimension percentages, to two decimals.
///
/// `None` unless every score is present and in range.
pub fn fair_percentage(row: &ScoreRow) -> Option<f64> {
    if !validate(row).all_valid {
        return None;
    }

    let mut total = 0.0;
    for dimension in FairDimension::ALL {
        let score = row.score(dimension)?;
        total += f64::from(score) / f64::from(dimension.max_score()) * 100.0;
    }
    Some((total / 4.0 * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_at_maximum_are_valid() {
        let result = validate(&ScoreRow::parsed("Max", [17, 10, 8, 7]));
        assert!(result.f_valid && result.a_valid && result.i_valid && result.r_valid);
        assert!(result.all_valid);
    }

    #[test]
    fn zero_scores_are_valid() {
        assert!(validate(&ScoreRow::parsed("Zero", [0, 0, 0, 0])).all_valid);
    }

    #[test]
    fn one_above_maximum_invalidates_only_that_dimension() {
        let cases = [
            ([18, 10, 8, 7], FairDimension::Findable),
            ([17, 11, 8, 7], FairDimension::Accessible),
            ([17, 10, 9, 7], FairDimension::Interoperable),
            ([17, 10, 8, 8], FairDimension::Reusable),
        ];

        for (scores, bad) in cases {
            let result = validate(&ScoreRow::parsed("Edge", scores));
            for dimension in FairDimension::ALL {
                assert_eq!(
                    result.is_valid(dimension),
                    dimension != bad,
                    "{} validity wrong for {:?}",
                    dimension,
                    scores
                );
            }
            assert!(!result.all_valid);
        }
    }

    #[test]
    fn unparsed_row_is_invalid_everywhere() {
        assert_eq!(validate(&ScoreRow::unparsed()), ValidationResult::invalid());
    }

    #[test]
    fn absent_score_is_invalid() {
        let mut row = ScoreRow::parsed("Partial", [9, 8, 7, 4]);
        row.i_score = None;

        let result = validate(&row);
        assert!(result.f_valid);
        assert!(!result.i_valid);
        assert!(!result.all_valid);
    }

    #[test]
    fn fair_percentage_averages_dimensions() {
        assert_eq!(fair_percentage(&ScoreRow::parsed("Max", [17, 10, 8, 7])), Some(100.0));
        assert_eq!(fair_percentage(&ScoreRow::parsed("Zero", [0, 0, 0, 0])), Some(0.0));
        // (9/17 + 8/10 + 7/8 + 4/7) / 4
        assert_eq!(fair_percentage(&ScoreRow::parsed("Foo", [9, 8, 7, 4])), Some(69.4));
    }

    #[test]
    fn fair_percentage_requires_valid_scores() {
        assert_eq!(fair_percentage(&ScoreRow::unparsed()), None);
        assert_eq!(fair_percentage(&ScoreRow::parsed("Over", [18, 10, 8, 7])), None);
    }
}
