//! # argwrap
//!
//! Fluent argument validation: wrap a value together with its declared
//! name, chain checks left-to-right, and get the validated value back —
//! or a typed error naming the parameter that failed.
//!
//! ## Quick Start
//!
//! ```rust
//! use argwrap::prelude::*;
//!
//! fn register(nickname: &str, age: u8, tags: Vec<String>) -> Result<(), ArgumentError> {
//!     let nickname = arg!(nickname).is_not_whitespace()?.into_inner();
//!     let age = arg!(age).is_not_default().satisfies(|a| *a >= 13).into_inner()?;
//!     let tags = arg!(tags).is_not_empty()?.into_inner();
//!     let _ = (nickname, age, tags);
//!     Ok(())
//! }
//!
//! assert!(register("ada", 30, vec!["admin".into()]).is_ok());
//!
//! let error = register("  ", 30, vec!["admin".into()]).unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::FormatViolation);
//! assert_eq!(error.name(), Some("nickname"));
//! ```
//!
//! ## How it works
//!
//! [`wrap`](foundation::wrap) (or the [`arg!`] macro) builds an
//! [`Arg`](foundation::Arg) — an immutable pairing of value and name.
//! Wrapping never validates; every rule is an explicit call. Checks
//! consume the wrapper and return it unchanged on success, so they
//! compose into chains that stop at the first failure. A chain ends by
//! unwrapping: [`into_inner`](checks::ArgExt::into_inner) for the plain
//! value, [`require`](checks::ArgExt::require) to insist a nullable
//! value is present, or [`get_or`](checks::ArgExt::get_or) /
//! [`unwrap_or`](checks::ArgExt::unwrap_or) to substitute a fallback.
//!
//! ## Built-in Checks
//!
//! - **General**: [`is_not_null`](checks::ArgExt::is_not_null),
//!   [`is_not_default`](checks::ArgExt::is_not_default),
//!   [`satisfies`](checks::ArgExt::satisfies),
//!   [`does_not_satisfy`](checks::ArgExt::does_not_satisfy)
//! - **String**: [`is_not_empty`](checks::StrArgExt::is_not_empty),
//!   [`is_not_whitespace`](checks::StrArgExt::is_not_whitespace)
//! - **Sequence**: [`is_empty`](checks::SeqArgExt::is_empty),
//!   [`is_not_empty`](checks::SeqArgExt::is_not_empty),
//!   [`has_count`](checks::SeqArgExt::has_count)
//!
//! Every check's failure message can be replaced with
//! [`or_message`](checks::ArgExt::or_message).

pub mod checks;
pub mod foundation;
mod macros;
pub mod prelude;
