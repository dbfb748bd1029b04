//! Validation checks
//!
//! The chainable operations, split by the shape of the wrapped value:
//!
//! - [`general`] — any type: presence, non-default, predicates, message
//!   override, and the chain terminals
//! - [`string`] — string-like values: emptiness, whitespace
//! - [`sequence`] — iterable values: emptiness, exact count
//!
//! Each category is an extension trait blanket-implemented over
//! [`IntoArg`](crate::foundation::IntoArg), with its shape bound at the
//! impl level: string checks simply do not resolve on a wrapped `Vec`,
//! and vice versa. Checks compose left-to-right and stop at the first
//! failure.

// Module declarations
pub mod general;
pub mod sequence;
pub mod string;

// Re-export the check traits at the checks level
pub use general::ArgExt;
pub use sequence::SeqArgExt;
pub use string::StrArgExt;
