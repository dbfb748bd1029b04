//! The argument wrapper and the chain seam
//!
//! [`Arg`] pairs a value with the name it was declared under at the call
//! site. Wrapping is pure and never validates; every rule lives in the
//! [`checks`](crate::checks) extension traits, which thread the wrapper
//! through a left-to-right chain and stop at the first failure.
//!
//! # Examples
//!
//! ```rust
//! use argwrap::prelude::*;
//!
//! fn connect(host: &str, port: u16) -> Result<(), ArgumentError> {
//!     let host = wrap(host).named("host").is_not_whitespace()?.into_inner();
//!     let port = wrap(port).named("port").is_not_default()?.into_inner();
//!     let _ = (host, port);
//!     Ok(())
//! }
//!
//! assert!(connect("db.local", 5432).is_ok());
//! assert_eq!(
//!     connect("db.local", 0).unwrap_err().kind(),
//!     ErrorKind::DefaultValue,
//! );
//! ```

use std::borrow::Cow;

use crate::foundation::error::ArgumentError;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// The result of a single link in a validation chain.
pub type ArgResult<T> = Result<Arg<T>, ArgumentError>;

// ============================================================================
// ARG
// ============================================================================

/// A value paired with the name of the argument it came from.
///
/// Immutable after construction: checks consume the wrapper and hand back
/// either the same wrapper or an [`ArgumentError`] naming the argument.
/// After any number of passing checks, [`into_inner`](Arg::into_inner)
/// yields the exact original value.
///
/// The name is used only for error reporting and may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg<T> {
    name: Option<Cow<'static, str>>,
    value: T,
}

impl<T> Arg<T> {
    /// Wraps a value with no name attached.
    pub fn new(value: T) -> Self {
        Self { name: None, value }
    }

    /// Attaches the argument's declared name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argwrap::foundation::Arg;
    ///
    /// let arg = Arg::new(8080_u16).named("port");
    /// assert_eq!(arg.name(), Some("port"));
    /// ```
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The attached name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Borrows the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps back to the raw value.
    pub fn into_inner(self) -> T {
        self.value
    }

    pub(crate) fn into_parts(self) -> (Option<Cow<'static, str>>, T) {
        (self.name, self.value)
    }

    /// Tags an error with this wrapper's name, when one is attached.
    pub(crate) fn attach(&self, error: ArgumentError) -> ArgumentError {
        error.with_opt_name(self.name.clone())
    }
}

/// Wraps a value for validation. Entry point of every chain.
///
/// Names default to absent; attach one with [`Arg::named`], or use the
/// [`arg!`](crate::arg) macro to capture the identifier automatically.
///
/// # Examples
///
/// ```rust
/// use argwrap::prelude::*;
///
/// let timeout = wrap(30_u64).named("timeout").is_not_default()?.into_inner();
/// assert_eq!(timeout, 30);
/// # Ok::<(), argwrap::foundation::ArgumentError>(())
/// ```
#[must_use]
pub fn wrap<T>(value: T) -> Arg<T> {
    Arg::new(value)
}

// ============================================================================
// CHAIN SEAM
// ============================================================================

/// Anything a validation chain can resume from.
///
/// Implemented for the three shapes a chain link receives:
///
/// - [`Arg<T>`] — the chain entry; always resumes.
/// - [`ArgResult<T>`] — a continuing chain; an earlier failure
///   short-circuits past every remaining check.
/// - `Option<Arg<T>>` — a defensive entry; `None` fails with
///   [`ErrorKind::MissingArgument`](crate::foundation::ErrorKind::MissingArgument)
///   before any check runs.
///
/// The check traits in [`checks`](crate::checks) are blanket-implemented
/// over this seam, so every check is callable at any position in a chain.
pub trait IntoArg<T> {
    /// Resumes the chain: the wrapper, or the first failure so far.
    fn into_arg(self) -> ArgResult<T>;
}

impl<T> IntoArg<T> for Arg<T> {
    fn into_arg(self) -> ArgResult<T> {
        Ok(self)
    }
}

impl<T> IntoArg<T> for ArgResult<T> {
    fn into_arg(self) -> ArgResult<T> {
        self
    }
}

impl<T> IntoArg<T> for Option<Arg<T>> {
    fn into_arg(self) -> ArgResult<T> {
        self.ok_or_else(ArgumentError::missing_argument)
    }
}

// ============================================================================
// TESTS
// ============================================================================
