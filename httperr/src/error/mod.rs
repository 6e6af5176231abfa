//! Error composites and their accessor contracts.
//!
//! - **`descriptor`**: the request/response data needed for rendering
//! - **`wrapped`**: [`WrappedError`], the error plus HTTP context
//! - **`redacted`**: [`RedactedError`], the error plus a redactor only
//!
//! Both composites own the actual error and never hand it to `Error::source`.

mod descriptor;
mod redacted;
mod wrapped;

use std::{error::Error, sync::Arc};

pub use descriptor::{RequestDescriptor, ResponseDescriptor};
pub use redacted::RedactedError;
pub use wrapped::WrappedError;

use crate::redactor::Redactor;

/// An error that wraps another error.
pub trait ErrorWrapper: Error {
    /// The type of the wrapped error.
    type Actual: ?Sized;

    /// Returns the error being wrapped.
    fn actual(&self) -> &Self::Actual;
}

/// An error raised while performing an HTTP exchange.
pub trait HttpError: ErrorWrapper {
    /// The associated request. This is always available.
    fn request(&self) -> &RequestDescriptor;

    /// The associated response, if the exchange produced one.
    fn response(&self) -> Option<&ResponseDescriptor>;
}

/// Wraps `actual` along with the request and response it came from.
///
/// The redactor is applied to the request target and to the message of
/// `actual` whenever the result is rendered.
pub fn wrap<E, R, Q>(
    actual: E,
    redactor: R,
    request: Q,
    response: Option<Arc<ResponseDescriptor>>,
) -> WrappedError<E, R>
where
    R: Redactor,
    Q: Into<Arc<RequestDescriptor>>,
{
    WrappedError::new(actual, redactor, request, response)
}

/// Applies `redactor` to the message of `actual`.
pub fn redact<E, R>(actual: E, redactor: R) -> RedactedError<E, R>
where
    R: Redactor,
{
    RedactedError::new(actual, redactor)
}
