//! General-purpose checks and chain terminals
//!
//! [`ArgExt`] carries the checks that apply to any wrapped type —
//! presence, non-default, predicates — together with the operations that
//! end a chain: [`into_inner`](ArgExt::into_inner),
//! [`require`](ArgExt::require), [`get_or`](ArgExt::get_or) and the
//! `unwrap_or` family.
//!
//! # Examples
//!
//! ```rust
//! use argwrap::prelude::*;
//!
//! let port = wrap(8080_u16)
//!     .named("port")
//!     .is_not_default()
//!     .satisfies(|p| *p >= 1024)
//!     .into_inner()?;
//! assert_eq!(port, 8080);
//! # Ok::<(), argwrap::foundation::ArgumentError>(())
//! ```

use std::borrow::Cow;

use crate::foundation::{ArgResult, ArgumentError, IntoArg, Nullable};

// ============================================================================
// GENERAL CHECKS
// ============================================================================

/// Checks and terminals available on every chain.
///
/// Blanket-implemented for everything that implements
/// [`IntoArg`]: the wrapper itself, a continuing chain, and
/// `Option<Arg<T>>`. An earlier failure short-circuits past every
/// remaining check unchanged.
pub trait ArgExt<T>: IntoArg<T> + Sized {
    /// Checks that the wrapped value is present.
    ///
    /// The wrapper passes through unchanged; pair with
    /// [`require`](ArgExt::require) to extract the inner value.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::MissingValue`](crate::foundation::ErrorKind::MissingValue)
    /// when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argwrap::prelude::*;
    ///
    /// assert!(wrap(Some(5)).is_not_null().is_ok());
    /// assert!(wrap(None::<i32>).is_not_null().is_err());
    /// ```
    fn is_not_null(self) -> ArgResult<T>
    where
        T: Nullable,
    {
        let arg = self.into_arg()?;
        if arg.value().is_absent() {
            Err(arg.attach(ArgumentError::missing_value()))
        } else {
            Ok(arg)
        }
    }

    /// Checks that the wrapped value is not its type's default.
    ///
    /// A legitimately supplied value that happens to equal the default
    /// (the integer `0`, an empty `String`) is indistinguishable from an
    /// unset one and fails this check. That conflation is the documented
    /// contract, not an accident; see also [`get_or`](ArgExt::get_or).
    ///
    /// # Errors
    ///
    /// [`ErrorKind::DefaultValue`](crate::foundation::ErrorKind::DefaultValue)
    /// when `value == T::default()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argwrap::prelude::*;
    ///
    /// assert!(wrap(5).is_not_default().is_ok());
    /// assert!(wrap(0).is_not_default().is_err());
    /// ```
    fn is_not_default(self) -> ArgResult<T>
    where
        T: Default + PartialEq,
    {
        let arg = self.into_arg()?;
        if *arg.value() == T::default() {
            Err(arg.attach(ArgumentError::default_value()))
        } else {
            Ok(arg)
        }
    }

    /// Checks that `predicate` holds for the wrapped value.
    ///
    /// A predicate that panics propagates the panic; the chain makes no
    /// attempt to catch it.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::PredicateViolation`](crate::foundation::ErrorKind::PredicateViolation)
    /// when the predicate returns `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argwrap::prelude::*;
    ///
    /// assert!(wrap(10).satisfies(|n| *n > 0).is_ok());
    /// assert!(wrap(-3).satisfies(|n| *n > 0).is_err());
    /// ```
    fn satisfies<F>(self, predicate: F) -> ArgResult<T>
    where
        F: FnOnce(&T) -> bool,
    {
        let arg = self.into_arg()?;
        if predicate(arg.value()) {
            Ok(arg)
        } else {
            Err(arg.attach(ArgumentError::predicate_failed()))
        }
    }

    /// Checks that `predicate` does **not** hold for the wrapped value.
    ///
    /// The complement of [`satisfies`](ArgExt::satisfies).
    ///
    /// # Errors
    ///
    /// [`ErrorKind::PredicateViolation`](crate::foundation::ErrorKind::PredicateViolation)
    /// when the predicate returns `true`.
    fn does_not_satisfy<F>(self, predicate: F) -> ArgResult<T>
    where
        F: FnOnce(&T) -> bool,
    {
        let arg = self.into_arg()?;
        if predicate(arg.value()) {
            Err(arg.attach(ArgumentError::predicate_matched()))
        } else {
            Ok(arg)
        }
    }

    /// Overrides the default message of the chain's failure, if any.
    ///
    /// Applies to the failure raised by the checks before it; the first
    /// override wins, so an override placed after a later check never
    /// clobbers a message already attached to an earlier failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argwrap::prelude::*;
    ///
    /// let error = wrap(0_u16)
    ///     .named("port")
    ///     .is_not_default()
    ///     .or_message("a listen port must be configured")
    ///     .unwrap_err();
    /// assert_eq!(
    ///     error.to_string(),
    ///     "argument `port`: a listen port must be configured",
    /// );
    /// ```
    fn or_message(self, message: impl Into<Cow<'static, str>>) -> ArgResult<T> {
        self.into_arg().map_err(|error| error.with_override(message))
    }

    // ------------------------------------------------------------------------
    // Chain terminals
    // ------------------------------------------------------------------------

    /// Ends the chain, yielding the validated value.
    ///
    /// # Errors
    ///
    /// The first failure of the chain, unchanged.
    fn into_inner(self) -> Result<T, ArgumentError> {
        Ok(self.into_arg()?.into_inner())
    }

    /// Ends the chain, extracting the inner value of a nullable wrapper.
    ///
    /// The explicit form of "give me the value or fail": succeeds with the
    /// present value, fails on absence.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::MissingValue`](crate::foundation::ErrorKind::MissingValue)
    /// when the value is absent, or the chain's earlier failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argwrap::prelude::*;
    ///
    /// let value = wrap(Some("x")).named("flag").require()?;
    /// assert_eq!(value, "x");
    ///
    /// let error = wrap(None::<&str>).named("flag").require().unwrap_err();
    /// assert_eq!(error.kind(), ErrorKind::MissingValue);
    /// # Ok::<(), argwrap::foundation::ArgumentError>(())
    /// ```
    fn require(self) -> Result<T::Value, ArgumentError>
    where
        T: Nullable,
    {
        let (name, value) = self.into_arg()?.into_parts();
        match value.into_value() {
            Some(inner) => Ok(inner),
            None => Err(ArgumentError::missing_value().with_opt_name(name)),
        }
    }

    /// Ends the chain, substituting `default` for an unset value.
    ///
    /// Returns `default` when the chain has already failed or when the
    /// value equals `T::default()`. A legitimately supplied zero is
    /// therefore substituted too — the same documented conflation as
    /// [`is_not_default`](ArgExt::is_not_default).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argwrap::prelude::*;
    ///
    /// assert_eq!(wrap(7).get_or(5), 7);
    /// assert_eq!(wrap(0).get_or(5), 5); // 0 == i32::default(): substituted
    /// ```
    fn get_or(self, default: T) -> T
    where
        T: Default + PartialEq,
    {
        match self.into_arg() {
            Ok(arg) => {
                let value = arg.into_inner();
                // "equals the default" is the unset sentinel here, so a real
                // zero is swallowed. Kept bug-for-bug with the contract.
                if value == T::default() { default } else { value }
            }
            Err(_) => default,
        }
    }

    /// Ends the chain, substituting `default` for an absent value.
    ///
    /// Unlike [`get_or`](ArgExt::get_or), a present inner value is
    /// returned even when it equals its own default — only absence (or an
    /// already-failed chain) substitutes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argwrap::prelude::*;
    ///
    /// assert_eq!(wrap(None::<&str>).unwrap_or("fallback"), "fallback");
    /// assert_eq!(wrap(Some(0)).unwrap_or(5), 0);
    /// ```
    fn unwrap_or(self, default: T::Value) -> T::Value
    where
        T: Nullable,
    {
        match self.into_arg() {
            Ok(arg) => arg.into_inner().into_value().unwrap_or(default),
            Err(_) => default,
        }
    }

    /// Ends the chain, substituting the inner type's default for an
    /// absent value.
    fn unwrap_or_default(self) -> T::Value
    where
        T: Nullable,
        T::Value: Default,
    {
        match self.into_arg() {
            Ok(arg) => arg.into_inner().into_value().unwrap_or_default(),
            Err(_) => <T::Value>::default(),
        }
    }
}

// Every chain shape gets the general checks
impl<T, A: IntoArg<T>> ArgExt<T> for A {}

// ============================================================================
// TESTS
// ============================================================================
