//! Error types for failed argument checks
//!
//! A failed check produces a single [`ArgumentError`]: the kind of rule
//! that was violated, the name of the argument (when one was supplied at
//! wrap time), and a human-readable message.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static default messages.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The category of rule an argument check violated.
///
/// Kinds are deliberately coarse: they identify *which family* of check
/// failed, for programmatic handling, while the message carries the
/// specifics.
///
/// # Examples
///
/// ```rust
/// use argwrap::prelude::*;
///
/// let error = wrap(0_u32).named("retries").is_not_default().unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::DefaultValue);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// The wrapper itself was absent before any check could run.
    ///
    /// Raised when a chain is entered from `None::<Arg<T>>` — a misuse
    /// guard, independent of the wrapped value.
    #[error("missing argument")]
    MissingArgument,

    /// The wrapped value was absent where presence was required.
    #[error("missing value")]
    MissingValue,

    /// The wrapped value equals its type's default where a non-default
    /// value was required.
    #[error("default value")]
    DefaultValue,

    /// A caller-supplied predicate returned the disallowed boolean.
    #[error("predicate violation")]
    PredicateViolation,

    /// A string had the wrong shape (empty, whitespace-only).
    #[error("format violation")]
    FormatViolation,

    /// A sequence had the wrong number of elements.
    #[error("count violation")]
    CountViolation,
}

// ============================================================================
// ARGUMENT ERROR
// ============================================================================

/// The error raised by a failing argument check.
///
/// Carries the violated rule as an [`ErrorKind`], the argument's name when
/// one was attached at wrap time, and a message. The message is the
/// deterministic default for the rule unless the caller overrode it with
/// [`or_message`](crate::checks::ArgExt::or_message).
///
/// # Examples
///
/// ```rust
/// use argwrap::prelude::*;
///
/// let error = wrap("").named("nickname").is_not_empty().unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::FormatViolation);
/// assert_eq!(error.name(), Some("nickname"));
/// assert_eq!(error.to_string(), "argument `nickname`: string must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArgumentError {
    kind: ErrorKind,
    name: Option<Cow<'static, str>>,
    message: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(skip))]
    overridden: bool,
}

impl ArgumentError {
    /// Creates an error of the given kind with an explicit message.
    ///
    /// The rule-specific constructors below are preferred inside the crate;
    /// `new` is the escape hatch for callers building their own failures.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            name: None,
            message: message.into(),
            overridden: false,
        }
    }

    /// Attaches the name of the failing argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the message unconditionally.
    ///
    /// A message set this way counts as a caller override: a later
    /// `or_message` further down the chain will not replace it again.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self.overridden = true;
        self
    }

    /// Replaces the message only while it is still the rule default.
    ///
    /// The first override wins: once a custom message is attached, later
    /// overrides along a short-circuited chain leave it alone.
    pub(crate) fn with_override(self, message: impl Into<Cow<'static, str>>) -> Self {
        if self.overridden {
            self
        } else {
            self.with_message(message)
        }
    }

    pub(crate) fn with_opt_name(mut self, name: Option<Cow<'static, str>>) -> Self {
        self.name = name;
        self
    }

    /// The violated rule.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The failing argument's name, when one was supplied at wrap time.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The error message (default or caller-supplied).
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// RULE CONSTRUCTORS
// ============================================================================
//
// One constructor per check, each baking in that rule's deterministic
// default message. Keeping them here keeps every default message in a
// single, testable place.

impl ArgumentError {
    /// The chain was entered from an absent wrapper.
    #[must_use]
    pub fn missing_argument() -> Self {
        Self::new(ErrorKind::MissingArgument, "no argument was supplied")
    }

    /// The wrapped value was absent where presence was required.
    #[must_use]
    pub fn missing_value() -> Self {
        Self::new(ErrorKind::MissingValue, "value must be present")
    }

    /// The wrapped value equals its type's default.
    #[must_use]
    pub fn default_value() -> Self {
        Self::new(ErrorKind::DefaultValue, "value must not be the default")
    }

    /// A predicate that had to hold returned `false`.
    #[must_use]
    pub fn predicate_failed() -> Self {
        Self::new(
            ErrorKind::PredicateViolation,
            "value must satisfy the predicate",
        )
    }

    /// A predicate that had to fail returned `true`.
    #[must_use]
    pub fn predicate_matched() -> Self {
        Self::new(
            ErrorKind::PredicateViolation,
            "value must not satisfy the predicate",
        )
    }

    /// A string was empty where content was required.
    #[must_use]
    pub fn empty_string() -> Self {
        Self::new(ErrorKind::FormatViolation, "string must not be empty")
    }

    /// A string contained nothing but whitespace.
    #[must_use]
    pub fn whitespace_string() -> Self {
        Self::new(
            ErrorKind::FormatViolation,
            "string must not consist only of whitespace",
        )
    }

    /// A sequence contained elements where none were allowed.
    #[must_use]
    pub fn non_empty_sequence() -> Self {
        Self::new(ErrorKind::CountViolation, "sequence must be empty")
    }

    /// A sequence was empty where elements were required.
    #[must_use]
    pub fn empty_sequence() -> Self {
        Self::new(ErrorKind::CountViolation, "sequence must not be empty")
    }

    /// A sequence had `actual` elements where exactly `expected` were
    /// required.
    #[must_use]
    pub fn count_mismatch(expected: usize, actual: usize) -> Self {
        Self::new(
            ErrorKind::CountViolation,
            format!("sequence must have exactly {expected} elements, found {actual}"),
        )
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "argument `{}`: {}", name, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ArgumentError {}

// ============================================================================
// TESTS
// ============================================================================
