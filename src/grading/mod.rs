//! Grading policy: similarity → score → category.
//!
//! | score            | category            |
//! |------------------|---------------------|
//! | `>= 0.75`        | `Correct`           |
//! | `[0.45, 0.75)`   | `Partially Correct` |
//! | `< 0.45`         | `Incorrect`         |

pub mod policy;
pub mod types;


pub use policy::{categorize, clamp_score, grade};
pub use types::{Category, Grade};
