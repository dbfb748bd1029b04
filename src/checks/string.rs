//! String checks
//!
//! Shape checks for wrapped string arguments. Bound on `AsRef<str>`, so
//! they resolve for `&str`, `String`, `Cow<str>` and any other string-ish
//! wrapper type without conversion at the call site.

use crate::foundation::{ArgResult, ArgumentError, IntoArg};

// ============================================================================
// STRING CHECKS
// ============================================================================

/// Checks available on chains over string-like values.
pub trait StrArgExt<T>: IntoArg<T> + Sized
where
    T: AsRef<str>,
{
    /// Checks that the string has at least one character.
    ///
    /// Length only; a string of blanks passes. Use
    /// [`is_not_whitespace`](StrArgExt::is_not_whitespace) to reject
    /// those too.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::FormatViolation`](crate::foundation::ErrorKind::FormatViolation)
    /// when the string is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argwrap::prelude::*;
    ///
    /// assert!(wrap("Test").is_not_empty().is_ok());
    /// assert!(wrap(" ").is_not_empty().is_ok());
    /// assert!(wrap("").is_not_empty().is_err());
    /// ```
    fn is_not_empty(self) -> ArgResult<T> {
        let arg = self.into_arg()?;
        if arg.value().as_ref().is_empty() {
            Err(arg.attach(ArgumentError::empty_string()))
        } else {
            Ok(arg)
        }
    }

    /// Checks that the string contains at least one non-whitespace
    /// character.
    ///
    /// Covers both the empty string and all-whitespace strings. The
    /// wrapped value itself is never trimmed; the trim is only part of
    /// the observation.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::FormatViolation`](crate::foundation::ErrorKind::FormatViolation)
    /// when the trimmed string is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argwrap::prelude::*;
    ///
    /// assert!(wrap("Test").is_not_whitespace().is_ok());
    /// assert!(wrap("   ").is_not_whitespace().is_err());
    /// assert!(wrap("").is_not_whitespace().is_err());
    /// ```
    fn is_not_whitespace(self) -> ArgResult<T> {
        let arg = self.into_arg()?;
        if arg.value().as_ref().trim().is_empty() {
            Err(arg.attach(ArgumentError::whitespace_string()))
        } else {
            Ok(arg)
        }
    }
}

// String checks resolve wherever the wrapped type can be viewed as a str
impl<T: AsRef<str>, A: IntoArg<T>> StrArgExt<T> for A {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::general::ArgExt;
    use crate::foundation::{ErrorKind, wrap};

    #[test]
    fn not_empty_passes_on_content() {
        let arg = wrap("Test").named("label").is_not_empty().unwrap();
        assert_eq!(*arg.value(), "Test");
    }

    #[test]
    fn not_empty_fails_on_empty() {
        let error = wrap("").named("label").is_not_empty().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::FormatViolation);
        assert_eq!(error.to_string(), "argument `label`: string must not be empty");
    }

    #[test]
    fn not_empty_accepts_whitespace_only() {
        // length is the only observation; no trimming
        assert!(wrap("   ").is_not_empty().is_ok());
    }

    #[test]
    fn not_whitespace_fails_on_blanks_and_empty() {
        assert_eq!(
            wrap("   ").is_not_whitespace().unwrap_err().kind(),
            ErrorKind::FormatViolation
        );
        assert_eq!(
            wrap("").is_not_whitespace().unwrap_err().kind(),
            ErrorKind::FormatViolation
        );
        assert_eq!(
            wrap("\t\n ").is_not_whitespace().unwrap_err().kind(),
            ErrorKind::FormatViolation
        );
    }

    #[test]
    fn not_whitespace_passes_on_content() {
        assert!(wrap("Test").is_not_whitespace().is_ok());
        assert!(wrap("  x  ").is_not_whitespace().is_ok());
    }

    #[test]
    fn owned_strings_are_accepted() {
        assert!(wrap("Test".to_string()).is_not_empty().is_ok());
        assert!(wrap(String::new()).is_not_empty().is_err());
    }

    #[test]
    fn checks_chain_left_to_right() {
        let value = wrap("Test")
            .named("label")
            .is_not_empty()
            .is_not_whitespace()
            .into_inner()
            .unwrap();
        assert_eq!(value, "Test");
    }
}
