//! Scoring policy helpers.
//!
//! Every variant maps its terminal or partial state to a score through one of
//! these pure functions, so the bounds hold in one place: a score is never
//! negative and never exceeds the definition's point value.

/// Proportional credit: `round(done / total × points)`.
///
/// Used for every time-up partial score and for the quiz's single formula.
/// A zero total scores zero (such content never reaches a live session).
pub fn ratio_score(done: u32, total: u32, points: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = f64::from(done) / f64::from(total);
    let score = (ratio * f64::from(points)).round() as u32;
    score.min(points)
}

/// Penalty-based credit: `max(floor, points − rate × count)`.
///
/// `count` is the number of penalized units (excess moves, mistakes, retries);
/// the result never drops below `floor` and never exceeds `points`.
pub fn penalized(points: u32, rate: u32, count: u32, floor: u32) -> u32 {
    points
        .saturating_sub(rate.saturating_mul(count))
        .max(floor)
        .min(points)
}

/// The half-credit floor guaranteed on natural completion by the variants
/// that penalize mistakes. Rounds half up for odd point values.
pub fn half(points: u32) -> u32 {
    (points + 1) / 2
}
