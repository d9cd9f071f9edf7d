use crate::models::domain::fair::FairDimension;

/// Scores extracted from one completion.
///
/// `parse_succeeded == true` means the table row was found, not that the
/// scores are in range; range checks live in the score validator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreRow {
    pub dataset_name_echo: Option<String>,
    pub f_score: Option<u32>,
    pub a_score: Option<u32>,
    pub i_score: Option<u32>,
    pub r_score: Option<u32>,
    pub parse_succeeded: bool,
}

impl ScoreRow {
    /// All fields absent, `parse_succeeded == false`.
    pub fn unparsed() -> Self {
        ScoreRow::default()
    }

    pub fn parsed(name: &str, scores: [u32; 4]) -> Self {
        let [f, a, i, r] = scores;
        ScoreRow {
            dataset_name_echo: Some(name.to_string()),
            f_score: Some(f),
            a_score: Some(a),
            i_score: Some(i),
            r_score: Some(r),
            parse_succeeded: true,
        }
    }

    pub fn score(&self, dimension: FairDimension) -> Option<u32> {
        match dimension {
            FairDimension::Findable => self.f_score,
            FairDimension::Accessible => self.a_score,
            FairDimension::Interoperable => self.i_score,
            FairDimension::Reusable => self.r_score,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub f_valid: bool,
    pub a_valid: bool,
    pub i_valid: bool,
    pub r_valid: bool,
    pub all_valid: bool,
}

impl ValidationResult {
    pub fn invalid() -> Self {
        ValidationResult::default()
    }

    pub fn is_valid(&self, dimension: FairDimension) -> bool {
        match dimension {
            FairDimension::Findable => self.f_valid,
            FairDimension::Accessible => self.a_valid,
            FairDimension::Interoperable => self.i_valid,
            FairDimension::Reusable => self.r_valid,
        }
    }
}
