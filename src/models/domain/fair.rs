use std::fmt;

/// One of the four FAIR rubric dimensions, each scored on a fixed point scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FairDimension {
    Findable,
    Accessible,
    Interoperable,
    Reusable,
}

impl FairDimension {
    /// Column order used in every table row the model is asked to emit.
    pub const ALL: [FairDimension; 4] = [
        FairDimension::Findable,
        FairDimension::Accessible,
        FairDimension::Interoperable,
        FairDimension::Reusable,
    ];

    pub fn max_score(self) -> u32 {
        match self {
            FairDimension::Findable => 17,
            FairDimension::Accessible => 10,
            FairDimension::Interoperable => 8,
            FairDimension::Reusable => 7,
        }
    }

    /// Single-letter label, as in `F-Score`.
    pub fn label(self) -> &'static str {
        match self {
            FairDimension::Findable => "F",
            FairDimension::Accessible => "A",
            FairDimension::Interoperable => "I",
            FairDimension::Reusable => "R",
        }
    }

    /// `F-Score (9/17)`, or `F-Score (X/17)` for a template placeholder.
    pub fn score_cell(self, value: impl fmt::Display) -> String {
        format!("{}-Score ({}/{})", self.label(), value, self.max_score())
    }
}

impl fmt::Display for FairDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FairDimension::Findable => write!(f, "Findable"),
            FairDimension::Accessible => write!(f, "Accessible"),
            FairDimension::Interoperable => write!(f, "Interoperable"),
            FairDimension::Reusable => write!(f, "Reusable"),
        }
    }
}

/// Renders `| <name> | F-Score (..) | A-Score (..) | I-Score (..) | R-Score (..) |`.
pub fn table_row<V: fmt::Display>(name: &str, values: [V; 4]) -> String {
    let mut row = format!("| {} |", name);
    for (dimension, value) in FairDimension::ALL.into_iter().zip(values) {
        row.push(' ');
        row.push_str(&dimension.score_cell(value));
        row.push_str(" |");
    }
    row
}
