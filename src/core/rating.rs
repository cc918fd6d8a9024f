//! Half-step star rating math
//!
//! Shared by the interactive rating control and the read-only star rows on
//! review cards, so both always agree on what a value looks like.

/// Number of stars in a rating row
pub const STAR_COUNT: u8 = 5;

/// Granularity of a rating value
pub const RATING_STEP: f32 = 0.5;

/// Smallest value the rating control can produce
pub const MIN_RATING: f32 = 0.5;

/// Largest value the rating control can produce
pub const MAX_RATING: f32 = 5.0;

/// Value the rating control starts at and resets to after submission
pub const DEFAULT_RATING: f32 = 5.0;

/// Fill state of a single star
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarFill {
    Empty,
    Half,
    Full,
}

impl StarFill {
    /// CSS modifier class for the star wrapper ("" for an empty star)
    pub fn class(&self) -> &'static str {
        match self {
            StarFill::Empty => "",
            StarFill::Half => "half",
            StarFill::Full => "full",
        }
    }
}

/// Fill state of star `star_index` (1-based) when displaying `rating`.
///
/// Full iff `rating >= index`, half iff `rating >= index - 0.5`, empty
/// otherwise. Total over any input, so malformed persisted ratings still
/// render.
pub fn star_fill(star_index: u8, rating: f32) -> StarFill {
    let index = star_index as f32;
    if rating >= index {
        StarFill::Full
    } else if rating >= index - RATING_STEP {
        StarFill::Half
    } else {
        StarFill::Empty
    }
}

/// Rating selected by a pointer at horizontal `fraction_x` (0.0..=1.0)
/// within star `star_index` (1-based).
///
/// The left half selects `index - 0.5`, the right half `index`; the exact
/// midline belongs to the right half.
pub fn value_from_pointer(star_index: u8, fraction_x: f64) -> f32 {
    let index = star_index as f32;
    if fraction_x < 0.5 {
        index - RATING_STEP
    } else {
        index
    }
}

/// Snap `value` to the 0.5 grid and clamp it into [`MIN_RATING`, `MAX_RATING`].
///
/// Non-finite input falls back to [`DEFAULT_RATING`].
pub fn clamp_rating(value: f32) -> f32 {
    if !value.is_finite() {
        return DEFAULT_RATING;
    }
    let stepped = (value / RATING_STEP).round() * RATING_STEP;
    stepped.clamp(MIN_RATING, MAX_RATING)
}
