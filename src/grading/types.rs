use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Ordinal grading bucket.
pub enum Category {
    /// Score at or above the correct threshold.
    Correct,
    /// Score between the partial and correct thresholds.
    #[serde(rename = "Partially Correct")]
    PartiallyCorrect,
    /// Score below the partial threshold.
    Incorrect,
}

impl Category {
    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Correct => "Correct",
            Category::PartiallyCorrect => "Partially Correct",
            Category::Incorrect => "Incorrect",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Clamped score and the category it falls into.
pub struct Grade {
    /// Similarity clamped to `[0, 1]`.
    pub score: f32,
    /// Bucket for `score`.
    pub category: Category,
}

impl Grade {
    /// Returns `true` for [`Category::Correct`].
    pub fn is_correct(&self) -> bool {
        self.category == Category::Correct
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (score: {:.4})", self.category, self.score)
    }
}
