use crate::constants::{CORRECT_THRESHOLD, PARTIAL_THRESHOLD};

use super::types::{Category, Grade};

/// Clamps a raw similarity into a score in `[0, 1]`. NaN maps to `0.0`.
#[inline]
pub fn clamp_score(similarity: f32) -> f32 {
    if similarity.is_nan() {
        return 0.0;
    }
    similarity.clamp(0.0, 1.0)
}

/// Buckets an already-clamped score. Lower bounds are inclusive.
pub fn categorize(score: f32) -> Category {
    if score >= CORRECT_THRESHOLD {
        Category::Correct
    } else if score >= PARTIAL_THRESHOLD {
        Category::PartiallyCorrect
    } else {
        Category::Incorrect
    }
}

/// Maps a raw similarity to a [`Grade`]. Total over every `f32`.
pub fn grade(similarity: f32) -> Grade {
    let score = clamp_score(similarity);
    Grade {
        score,
        category: categorize(score),
    }
}
