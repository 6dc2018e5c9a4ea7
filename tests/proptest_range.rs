//! Property-based tests for the range algebra.
//!
//! Uses proptest to verify invariants that must hold across all valid
//! inputs.

use proptest::prelude::*;
use textcore::{Intersection, TextRange};

// ============================================================================
// Strategies
// ============================================================================

/// Generate an arbitrary valid (start <= end) range.
fn range() -> impl Strategy<Value = TextRange> {
    (0usize..200, 0usize..200).prop_map(|(a, b)| TextRange::new(a.min(b), a.max(b)).unwrap())
}

// ============================================================================
// Construction Properties
// ============================================================================

proptest! {
    /// Length is end - start and emptiness is length == 0.
    #[test]
    fn length_and_emptiness(start in 0usize..500, extra in 0usize..500) {
        let r = TextRange::new(start, start + extra).unwrap();
        prop_assert_eq!(r.len(), extra);
        prop_assert_eq!(r.is_empty(), extra == 0);
    }

    /// Construction with start > end always fails.
    #[test]
    fn inverted_bounds_rejected(start in 1usize..500, shrink in 1usize..500) {
        let end = start.saturating_sub(shrink.min(start));
        prop_assume!(end < start);
        prop_assert!(TextRange::new(start, end).is_err());
    }

    /// Shifting without saturation preserves length.
    #[test]
    fn shift_preserves_length(r in range(), delta in -100isize..100) {
        prop_assume!(delta >= 0 || r.start() >= delta.unsigned_abs());
        prop_assert_eq!(r.shifted(delta).len(), r.len());
    }

    /// Coercion always lands inside the limits.
    #[test]
    fn coerce_lands_in_limits(r in range(), limits in range()) {
        let coerced = r.coerced(limits);
        prop_assert!(limits.contains_range(&coerced));
    }
}

// ============================================================================
// Intersection Properties
// ============================================================================

proptest! {
    /// The classification agrees with independently computed predicates,
    /// and exactly one case holds.
    #[test]
    fn classification_is_exhaustive(a in range(), b in range()) {
        let inside = b.contains_range(&a);
        let outside = !inside && a.contains_range(&b);
        let overlap = !inside && !outside && a.intersects_strict(&b);
        let before = overlap && a.start() < b.start();
        let after = overlap && !before;
        let disjoint = !inside && !outside && !overlap;

        let cases = [inside, outside, before, after, disjoint];
        prop_assert_eq!(cases.iter().filter(|&&c| c).count(), 1);

        match a.intersect(&b) {
            Intersection::Inside(r) => {
                prop_assert!(inside);
                prop_assert_eq!(r, a);
            }
            Intersection::Outside(r) => {
                prop_assert!(outside);
                prop_assert_eq!(r, b);
            }
            Intersection::Before(r) => {
                prop_assert!(before);
                prop_assert!(a.contains_range(&r) && b.contains_range(&r));
            }
            Intersection::After(r) => {
                prop_assert!(after);
                prop_assert!(a.contains_range(&r) && b.contains_range(&r));
            }
            Intersection::None => prop_assert!(disjoint),
        }
    }

    /// Inverting a classification yields the other side's classification.
    #[test]
    fn invert_matches_swapped_sides(a in range(), b in range()) {
        prop_assume!(a != b);
        prop_assert_eq!(a.intersect(&b).invert(), b.intersect(&a));
    }

    /// invert is an involution.
    #[test]
    fn invert_is_involution(a in range(), b in range()) {
        let classified = a.intersect(&b);
        prop_assert_eq!(classified.invert().invert(), classified);
    }

    /// Strict intersection implies non-strict intersection.
    #[test]
    fn strict_implies_non_strict(a in range(), b in range()) {
        if a.intersects_strict(&b) {
            prop_assert!(a.intersects_non_strict(&b));
        }
    }
}

#[test]
fn equal_ranges_classify_as_inside() {
    let a = TextRange::new(3, 8).unwrap();
    assert_eq!(a.intersect(&a), Intersection::Inside(a));
}
