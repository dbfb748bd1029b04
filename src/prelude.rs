//! Prelude module for convenient imports.
//!
//! Provides a single `use argwrap::prelude::*;` import that brings in the
//! wrapper, the check traits, and the error types.
//!
//! # Examples
//!
//! ```rust
//! use argwrap::prelude::*;
//!
//! let label = wrap("Test").named("label").is_not_empty()?.into_inner();
//! assert_eq!(label, "Test");
//! # Ok::<(), ArgumentError>(())
//! ```

// ============================================================================
// FOUNDATION: wrapper, chain seam, errors
// ============================================================================

pub use crate::foundation::{Arg, ArgResult, ArgumentError, ErrorKind, IntoArg, Nullable, wrap};

// ============================================================================
// CHECKS: the chainable operations
// ============================================================================

pub use crate::checks::{ArgExt, SeqArgExt, StrArgExt};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::arg;
