use crate::constants::{BASE_RADIUS, EARLY_BOOST, EARLY_BOOST_CAP, SQRT_COEFF};

/// Display radius for a vote count.
///
/// Grows with `sqrt(votes)` plus a linear boost that saturates after
/// [`EARLY_BOOST_CAP`] votes, so the first clicks are clearly visible and the
/// curve flattens afterwards.
#[inline]
pub fn radius_for_votes(votes: u32) -> f32 {
    let n = votes as f32;
    BASE_RADIUS + SQRT_COEFF * n.sqrt() + EARLY_BOOST * votes.min(EARLY_BOOST_CAP) as f32
}
