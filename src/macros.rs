//! Macros for wrapping arguments with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`arg!`](crate::arg) — wrap a value and name it after its identifier

/// Wraps an argument and names it after the expression it was built from.
///
/// `arg!(port)` is shorthand for `wrap(port).named("port")` — the name is
/// captured with `stringify!`, so the error message always matches the
/// call site. A second form takes an explicit name for the cases where
/// the expression is not the name you want to report.
///
/// # Examples
///
/// ```rust
/// use argwrap::prelude::*;
///
/// fn listen(port: u16) -> Result<u16, ArgumentError> {
///     arg!(port).is_not_default().into_inner()
/// }
///
/// assert_eq!(listen(8080).unwrap(), 8080);
/// assert_eq!(
///     listen(0).unwrap_err().to_string(),
///     "argument `port`: value must not be the default",
/// );
/// ```
///
/// With an explicit name:
///
/// ```rust
/// use argwrap::prelude::*;
///
/// let config_port = 0_u16;
/// let error = arg!(config_port, "port").is_not_default().unwrap_err();
/// assert_eq!(error.name(), Some("port"));
/// ```
#[macro_export]
macro_rules! arg {
    ($value:expr, $name:expr) => {
        $crate::foundation::Arg::new($value).named($name)
    };
    ($value:expr) => {
        $crate::foundation::Arg::new($value).named(stringify!($value))
    };
}

#[cfg(test)]
mod tests {
    use crate::checks::ArgExt;

    #[test]
    fn captures_the_identifier_as_the_name() {
        let retries = 3_u8;
        let arg = arg!(retries);
        assert_eq!(arg.name(), Some("retries"));
        assert_eq!(*arg.value(), 3);
    }

    #[test]
    fn explicit_name_takes_precedence() {
        let inner = 3_u8;
        let arg = arg!(inner, "retries");
        assert_eq!(arg.name(), Some("retries"));
    }

    #[test]
    fn wrapped_argument_chains_like_any_other() {
        let retries = 0_u8;
        let error = arg!(retries).is_not_default().unwrap_err();
        assert_eq!(error.name(), Some("retries"));
    }
}
