//! Sequence checks
//!
//! Cardinality checks for wrapped collections. Bound on
//! `for<'a> &'a T: IntoIterator`, so they resolve for `Vec`, arrays,
//! maps and sets — anything iterable by reference — without consuming or
//! cloning the collection. The emptiness checks stop at the first
//! element; only [`has_count`](SeqArgExt::has_count) walks the whole
//! sequence.

use crate::foundation::{ArgResult, ArgumentError, IntoArg};

// ============================================================================
// SEQUENCE CHECKS
// ============================================================================

/// Checks available on chains over iterable values.
pub trait SeqArgExt<T>: IntoArg<T> + Sized
where
    for<'a> &'a T: IntoIterator,
{
    /// Checks that the sequence has no elements.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::CountViolation`](crate::foundation::ErrorKind::CountViolation)
    /// when any element exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argwrap::prelude::*;
    ///
    /// assert!(wrap(Vec::<i32>::new()).is_empty().is_ok());
    /// assert!(wrap(vec![1]).is_empty().is_err());
    /// ```
    fn is_empty(self) -> ArgResult<T> {
        let arg = self.into_arg()?;
        if arg.value().into_iter().next().is_some() {
            Err(arg.attach(ArgumentError::non_empty_sequence()))
        } else {
            Ok(arg)
        }
    }

    /// Checks that the sequence has at least one element.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::CountViolation`](crate::foundation::ErrorKind::CountViolation)
    /// when the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argwrap::prelude::*;
    ///
    /// assert!(wrap(vec![1]).is_not_empty().is_ok());
    /// assert!(wrap(Vec::<i32>::new()).is_not_empty().is_err());
    /// ```
    fn is_not_empty(self) -> ArgResult<T> {
        let arg = self.into_arg()?;
        if arg.value().into_iter().next().is_none() {
            Err(arg.attach(ArgumentError::empty_sequence()))
        } else {
            Ok(arg)
        }
    }

    /// Checks that the sequence has exactly `count` elements.
    ///
    /// Walks the whole sequence to count it; the failure message carries
    /// both the expected and the actual count.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::CountViolation`](crate::foundation::ErrorKind::CountViolation)
    /// when the counts differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argwrap::prelude::*;
    ///
    /// assert!(wrap(vec![1, 2, 3]).has_count(3).is_ok());
    ///
    /// let error = wrap(vec![1, 2]).named("points").has_count(3).unwrap_err();
    /// assert_eq!(
    ///     error.to_string(),
    ///     "argument `points`: sequence must have exactly 3 elements, found 2",
    /// );
    /// ```
    fn has_count(self, count: usize) -> ArgResult<T> {
        let arg = self.into_arg()?;
        let actual = arg.value().into_iter().count();
        if actual == count {
            Ok(arg)
        } else {
            Err(arg.attach(ArgumentError::count_mismatch(count, actual)))
        }
    }
}

// Sequence checks resolve wherever the wrapped type iterates by reference
impl<T, A: IntoArg<T>> SeqArgExt<T> for A where for<'a> &'a T: IntoIterator {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::general::ArgExt;
    use crate::foundation::{ErrorKind, wrap};
    use std::collections::BTreeMap;

    #[test]
    fn empty_passes_on_no_elements() {
        assert!(wrap(Vec::<i32>::new()).is_empty().is_ok());
    }

    #[test]
    fn empty_fails_on_any_element() {
        // a single element already violates emptiness
        assert_eq!(
            wrap(vec![1]).is_empty().unwrap_err().kind(),
            ErrorKind::CountViolation
        );
        assert_eq!(
            wrap(vec![1, 2]).is_empty().unwrap_err().kind(),
            ErrorKind::CountViolation
        );
    }

    #[test]
    fn not_empty_passes_on_single_element() {
        assert!(wrap(vec![1]).is_not_empty().is_ok());
    }

    #[test]
    fn not_empty_fails_on_no_elements() {
        let error = wrap(Vec::<i32>::new())
            .named("items")
            .is_not_empty()
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CountViolation);
        assert_eq!(error.name(), Some("items"));
    }

    #[test]
    fn has_count_matches_exactly() {
        assert!(wrap(vec![1, 2, 3]).has_count(3).is_ok());
        assert!(wrap(Vec::<i32>::new()).has_count(0).is_ok());
    }

    #[test]
    fn has_count_fails_with_both_counts_in_the_message() {
        let error = wrap(vec![1, 2]).has_count(3).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CountViolation);
        assert_eq!(
            error.message(),
            "sequence must have exactly 3 elements, found 2"
        );
    }

    #[test]
    fn arrays_and_maps_are_accepted() {
        assert!(wrap([1, 2, 3]).has_count(3).is_ok());

        let mut map = BTreeMap::new();
        map.insert("a", 1);
        assert!(wrap(map).is_not_empty().is_ok());
    }

    #[test]
    fn checks_do_not_consume_the_sequence() {
        let values = wrap(vec![1, 2, 3])
            .is_not_empty()
            .has_count(3)
            .into_inner()
            .unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
