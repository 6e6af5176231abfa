//! HTTP error context with redaction.
//!
//! This crate attaches the request (and, when there is one, the response) of a
//! failed HTTP exchange to the underlying error, and scrubs sensitive
//! substrings before any of it is rendered as text.
//!
//! It separates:
//! - **Redactors**: how sensitive text is scrubbed ([`Redactor`]).
//! - **Composites**: what context travels with the error ([`WrappedError`],
//!   [`RedactedError`]).
//!
//! Key rules:
//! - The redactor runs at render time, independently over the request target
//!   and over the underlying error message.
//! - `Debug` output is redacted the same way as `Display`.
//! - `Error::source()` is `None`: the raw cause is reachable only through
//!   [`ErrorWrapper::actual`].
//!
//! ```rust
//! use httperr::{wrap, Literal, RequestDescriptor, ResponseDescriptor};
//! use http::{Method, StatusCode};
//!
//! let err = std::io::Error::other("token abc123 rejected");
//! let request = RequestDescriptor::new(Method::GET, "https://example.com/?token=abc123");
//! let response = ResponseDescriptor::new(StatusCode::BAD_GATEWAY);
//!
//! let wrapped = wrap(err, Literal::new("abc123", "xxx"), request, Some(response.into()));
//! assert_eq!(
//!     wrapped.to_string(),
//!     "GET https://example.com/?token=xxx got 502 Bad Gateway failed with token xxx rejected",
//! );
//! ```
//!
//! What this crate does not do:
//! - perform I/O or emit log records
//! - decide which values are sensitive; that is the redactor's configuration

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod error;
mod redactor;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use error::{
    redact, wrap, ErrorWrapper, HttpError, RedactedError, RequestDescriptor,
    ResponseDescriptor, WrappedError,
};
pub use redactor::{
    from_fn, Chain, FromFn, Literal, NoOp, Pattern, Redactor, NO_OP, REDACTED_PLACEHOLDER,
};
