use serde::{Deserialize, Serialize};

use crate::grading::{Category, Grade};

/// Body of `POST /grade`.
///
/// `question` is part of the contract but does not influence the grade.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GradeRequest {
    pub question: String,
    pub reference_answer: String,
    pub student_answer: String,
}

/// Response of `POST /grade`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GradeResponse {
    /// Similarity clamped to `[0, 1]`.
    pub score: f32,
    pub category: Category,
    /// Raw, unclamped similarity. NaN is reported as `0.0`.
    pub similarity: f32,
}

impl GradeResponse {
    pub fn new(similarity: f32, grade: Grade) -> Self {
        Self {
            score: grade.score,
            category: grade.category,
            similarity: if similarity.is_nan() { 0.0 } else { similarity },
        }
    }
}
