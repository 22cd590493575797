use crate::Chips;
use crate::GAP_BUCKET_MAX;
use crate::POT_BUCKET_MAX;
use crate::POT_BUCKETS_PER_DECADE;
use crate::round::Bounds;

/// Geometric pot bucketing: six buckets per decade, saturating at 10.
///
/// Small pots get fine resolution (1 → 0, 2 → 1, 10 → 6) and anything
/// past ~46 chips shares the top bucket.
///
/// # Panics
///
/// On a negative pot. The engine never lets the pot go below 1 after
/// settlement, so a negative pot here means that invariant was broken.
pub fn pot_bucket(pot: Chips) -> i8 {
    assert!(pot >= 0, "pot bucket of negative pot {}", pot);
    if pot == 0 {
        0
    } else {
        let scaled = ((pot as f64).log10() * POT_BUCKETS_PER_DECADE).floor();
        (scaled as i8).min(POT_BUCKET_MAX)
    }
}

/// Window width between the bounding cards.
pub fn gap_bucket(bounds: &Bounds) -> i8 {
    let gap = bounds.gap();
    debug_assert!((0..=GAP_BUCKET_MAX).contains(&gap));
    gap
}
