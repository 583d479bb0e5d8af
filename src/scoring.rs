//! Ranking constants for search results.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## FIELD_WEIGHT_DOMINANCE
//! A record matching only in its title must outrank a record matching in
//! both excerpt and content, however good those matches are. With the
//! threshold at 0.4 the worst accepted title score is
//! `100 × (1 − 0.4) = 60`, while the best combined excerpt + content
//! score is `10 × 1 + 1 × 1 = 11`:
//!
//! ```text
//! TITLE_WEIGHT × (1 − MATCH_THRESHOLD) > EXCERPT_WEIGHT + CONTENT_WEIGHT
//! EXCERPT_WEIGHT × (1 − MATCH_THRESHOLD) > CONTENT_WEIGHT
//! ```
//!
//! With current values: `60 > 11` ✓ and `6 > 1` ✓. Changing any constant
//! requires re-checking both inequalities (there is a unit test for it).

use crate::types::FieldKind;

/// Weight of a title-field match.
pub const TITLE_WEIGHT: f64 = 100.0;

/// Weight of an excerpt-field match.
pub const EXCERPT_WEIGHT: f64 = 10.0;

/// Weight of a content-field match.
pub const CONTENT_WEIGHT: f64 = 1.0;

/// Largest field distance still counted as a match.
///
/// Distance scale: 0 requires an exact match, 1 would match anything.
pub const MATCH_THRESHOLD: f64 = 0.4;

/// Most results a query surfaces to the results panel.
pub const RESULT_LIMIT: usize = 6;

/// Weight multiplier for a field kind.
pub fn field_weight(kind: FieldKind) -> f64 {
    match kind {
        FieldKind::Title => TITLE_WEIGHT,
        FieldKind::Excerpt => EXCERPT_WEIGHT,
        FieldKind::Content => CONTENT_WEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_weight_dominance_holds() {
        let worst_title = TITLE_WEIGHT * (1.0 - MATCH_THRESHOLD);
        assert!(worst_title > EXCERPT_WEIGHT + CONTENT_WEIGHT);

        let worst_excerpt = EXCERPT_WEIGHT * (1.0 - MATCH_THRESHOLD);
        assert!(worst_excerpt > CONTENT_WEIGHT);
    }

    #[test]
    fn weights_follow_field_order() {
        let weights: Vec<f64> = FieldKind::ALL.iter().map(|k| field_weight(*k)).collect();
        assert!(weights.windows(2).all(|w| w[0] > w[1]));
    }
}
