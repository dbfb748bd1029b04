//! Property-based tests for argwrap.

use argwrap::prelude::*;
use proptest::prelude::*;

// ============================================================================
// IDENTITY: a passing chain hands back the exact original value
// ============================================================================

proptest! {
    #[test]
    fn passing_chain_preserves_strings(s in ".*") {
        let out = wrap(s.clone())
            .named("s")
            .satisfies(|_| true)
            .does_not_satisfy(|_| false)
            .into_inner();
        prop_assert_eq!(out.unwrap(), s);
    }

    #[test]
    fn passing_chain_preserves_integers(n in any::<i64>()) {
        let out = wrap(n).satisfies(|_| true).into_inner();
        prop_assert_eq!(out.unwrap(), n);
    }

    #[test]
    fn passing_chain_preserves_sequences(v in prop::collection::vec(any::<u8>(), 0..16)) {
        let expected = v.clone();
        let out = wrap(v).named("v").has_count(expected.len()).into_inner();
        prop_assert_eq!(out.unwrap(), expected);
    }
}

// ============================================================================
// DETERMINISM: re-running a check observes the same verdict
// ============================================================================

proptest! {
    #[test]
    fn not_default_is_deterministic(n in any::<i32>()) {
        let first = wrap(n).is_not_default().is_ok();
        let second = wrap(n).is_not_default().is_ok();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn not_whitespace_is_deterministic(s in ".*") {
        let first = wrap(s.as_str()).is_not_whitespace().is_ok();
        let second = wrap(s.as_str()).is_not_whitespace().is_ok();
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// CHECK LAWS
// ============================================================================

proptest! {
    #[test]
    fn not_default_agrees_with_equality(n in any::<i32>()) {
        let ok = wrap(n).is_not_default().is_ok();
        prop_assert_eq!(ok, n != 0);
    }

    #[test]
    fn not_empty_agrees_with_length(s in ".*") {
        let ok = wrap(s.as_str()).is_not_empty().is_ok();
        prop_assert_eq!(ok, !s.is_empty());
    }

    #[test]
    fn has_count_accepts_exactly_the_length(
        v in prop::collection::vec(any::<u8>(), 0..16),
        expected in 0_usize..16
    ) {
        let len = v.len();
        let ok = wrap(v).has_count(expected).is_ok();
        prop_assert_eq!(ok, len == expected);
    }

    #[test]
    fn satisfies_mirrors_the_predicate(n in any::<i64>()) {
        let ok = wrap(n).satisfies(|n| n % 2 == 0).is_ok();
        prop_assert_eq!(ok, n % 2 == 0);
    }

    #[test]
    fn does_not_satisfy_is_the_exact_complement(n in any::<i64>()) {
        let positive = wrap(n).satisfies(|n| *n > 0).is_ok();
        let not_positive = wrap(n).does_not_satisfy(|n| *n > 0).is_ok();
        prop_assert_ne!(positive, not_positive);
    }
}

// ============================================================================
// FALLBACK LAWS
// ============================================================================

proptest! {
    #[test]
    fn get_or_substitutes_exactly_the_default(n in any::<i32>(), fallback in any::<i32>()) {
        let out = wrap(n).get_or(fallback);
        if n == 0 {
            prop_assert_eq!(out, fallback);
        } else {
            prop_assert_eq!(out, n);
        }
    }

    #[test]
    fn unwrap_or_substitutes_exactly_absence(v in any::<Option<i32>>(), fallback in any::<i32>()) {
        let out = wrap(v).unwrap_or(fallback);
        prop_assert_eq!(out, v.unwrap_or(fallback));
    }

    #[test]
    fn require_agrees_with_presence(v in any::<Option<i32>>()) {
        let out = wrap(v).named("v").require();
        match v {
            Some(inner) => prop_assert_eq!(out.unwrap(), inner),
            None => prop_assert_eq!(out.unwrap_err().kind(), ErrorKind::MissingValue),
        }
    }
}

// ============================================================================
// ERROR SHAPE: failures carry the wrap-time name
// ============================================================================

proptest! {
    #[test]
    fn failures_carry_the_name(n in any::<i32>()) {
        if let Err(error) = wrap(n).named("n").satisfies(|_| false) {
            prop_assert_eq!(error.name(), Some("n"));
        } else {
            prop_assert!(false, "satisfies(|_| false) must fail");
        }
    }
}
