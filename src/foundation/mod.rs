//! Core wrapper and error types
//!
//! This module contains the building blocks every chain is made of:
//!
//! - **Wrapper**: [`Arg`], [`wrap`], the [`IntoArg`] chain seam
//! - **Errors**: [`ArgumentError`], [`ErrorKind`]
//! - **Seams**: [`Nullable`] for absence-sensitive checks
//!
//! # Architecture
//!
//! A chain is a sequence of moves of one `Arg<T>` through `Result`:
//!
//! ```text
//! wrap(value).named("value")      Arg<T>
//!     .is_not_default()           ArgResult<T>   first failure stops here
//!     .satisfies(|v| ...)         ArgResult<T>   skipped after a failure
//!     .into_inner()               Result<T, ArgumentError>
//! ```
//!
//! Wrapping never validates and never copies the value; each check either
//! hands the wrapper through unchanged or raises an [`ArgumentError`]
//! carrying the argument's name. The checks themselves live in
//! [`checks`](crate::checks).

// Module declarations
pub mod arg;
pub mod error;
pub mod nullable;

// Re-export everything at the foundation level for convenience
pub use arg::{Arg, ArgResult, IntoArg, wrap};
pub use error::{ArgumentError, ErrorKind};
pub use nullable::Nullable;
