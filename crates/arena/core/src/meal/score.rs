//! Combat score of a meal.

use super::{Difficulty, Meal};

/// Compute the combat score of a meal.
///
/// # Formula
///
/// ```text
/// score = price * chars(cuisine) - difficulty_penalty
/// ```
///
/// Pure and total for any validated record.
pub fn score(meal: &Meal) -> f64 {
    score_parts(meal.price(), meal.cuisine(), meal.difficulty())
}

/// Same as [`score`], from the raw fields.
pub fn score_parts(price: f64, cuisine: &str, difficulty: Difficulty) -> f64 {
    let length = cuisine.chars().count() as f64;
    price * length - difficulty.penalty()
}
