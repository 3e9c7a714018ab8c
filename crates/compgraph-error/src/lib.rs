//! # compgraph-error
//!
//! Unified error handling for compgraph.
//!
//! - **ErrorKind**: what went wrong (e.g. StructuralViolation, InvalidFormat)
//! - **Operation**: where it went wrong, chained as errors bubble up
//! - **Context**: key/value pairs that locate the cause
//! - **Source**: the wrapped underlying error, if any
//!
//! ## Usage
//!
//! ```rust
//! use compgraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::StructuralViolation, "unexpected depth")
//!         .with_operation("walker::resolve_node")
//!         .with_context("depth", "2")
//!         .with_context("label", "base:1.0"))
//! }
//! ```
//!
//! All functions return `Result<T, compgraph_error::Error>`. External errors are
//! wrapped with `set_source(err)` rather than leaked through `From` impls.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using compgraph Error
pub type Result<T> = std::result::Result<T, Error>;
