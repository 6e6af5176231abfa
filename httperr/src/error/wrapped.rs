use std::{error::Error, fmt, sync::Arc};

use super::{ErrorWrapper, HttpError, RequestDescriptor, ResponseDescriptor};
use crate::redactor::Redactor;

/// An error together with the HTTP request and response it came from.
///
/// Renders as a single line:
///
/// ```text
/// <METHOD> <redacted target>[ got <code> <reason>] failed with <redacted message>
/// ```
///
/// The request and response are shared with the caller through [`Arc`], so
/// the accessors hand back the very instances passed in.
pub struct WrappedError<E, R> {
    actual: E,
    request: Arc<RequestDescriptor>,
    response: Option<Arc<ResponseDescriptor>>,
    redactor: R,
}

impl<E, R> WrappedError<E, R>
where
    R: Redactor,
{
    /// See [`crate::wrap`].
    pub fn new<Q>(
        actual: E,
        redactor: R,
        request: Q,
        response: Option<Arc<ResponseDescriptor>>,
    ) -> Self
    where
        Q: Into<Arc<RequestDescriptor>>,
    {
        Self {
            actual,
            request: request.into(),
            response,
            redactor,
        }
    }

    /// Wraps an error from an exchange that never produced a response.
    pub fn without_response<Q>(actual: E, redactor: R, request: Q) -> Self
    where
        Q: Into<Arc<RequestDescriptor>>,
    {
        Self::new(actual, redactor, request, None)
    }

    pub fn actual(&self) -> &E {
        &self.actual
    }

    /// Consumes the wrapper and returns the unredacted error.
    pub fn into_actual(self) -> E {
        self.actual
    }

    pub fn request(&self) -> &Arc<RequestDescriptor> {
        &self.request
    }

    pub fn response(&self) -> Option<&Arc<ResponseDescriptor>> {
        self.response.as_ref()
    }

    pub fn redactor(&self) -> &R {
        &self.redactor
    }
}

impl<E, R> WrappedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    /// Returns the rendered, redacted message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub(crate) fn redacted_target(&self) -> String {
        self.redactor.redact(self.request.target()).into_owned()
    }

    pub(crate) fn redacted_cause(&self) -> String {
        let message = self.actual.to_string();
        self.redactor.redact(&message).into_owned()
    }
}

impl<E, R> fmt::Display for WrappedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.request.method(),
            self.redactor.redact(self.request.target())
        )?;
        if let Some(response) = &self.response {
            write!(f, " got {}", response.render(&self.redactor))?;
        }
        let message = self.actual.to_string();
        write!(f, " failed with {}", self.redactor.redact(&message))
    }
}

/// Prints the same redacted fields as `Display`, never the raw error.
impl<E, R> fmt::Debug for WrappedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedError")
            .field("method", self.request.method())
            .field("target", &self.redacted_target())
            .field("status", &self.response.as_ref().map(|r| r.status()))
            .field("error", &self.redacted_cause())
            .finish()
    }
}

impl<E, R> Error for WrappedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
}

impl<E, R> ErrorWrapper for WrappedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    type Actual = E;

    fn actual(&self) -> &E {
        &self.actual
    }
}

impl<E, R> HttpError for WrappedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    fn request(&self) -> &RequestDescriptor {
        &self.request
    }

    fn response(&self) -> Option<&ResponseDescriptor> {
        self.response.as_deref()
    }
}

#[cfg(feature = "serde")]
impl<E, R> serde::Serialize for WrappedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("WrappedError", 5)?;
        state.serialize_field("method", self.request.method().as_str())?;
        state.serialize_field("target", &self.redacted_target())?;
        state.serialize_field(
            "status",
            &self.response.as_ref().map(|r| r.status().as_u16()),
        )?;
        state.serialize_field(
            "reason",
            &self
                .response
                .as_ref()
                .and_then(|r| r.redacted_reason(&self.redactor)),
        )?;
        state.serialize_field("error", &self.redacted_cause())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error, io, sync::Arc};

    use http::{Method, StatusCode};

    use super::WrappedError;
    use crate::{
        ErrorWrapper, HttpError, Literal, RequestDescriptor, ResponseDescriptor, NO_OP,
    };

    fn request() -> RequestDescriptor {
        RequestDescriptor::new(Method::GET, "https://daaku.org/bar/?token=world")
    }

    #[test]
    fn renders_without_response() {
        let err = WrappedError::without_response(
            io::Error::other("hello world"),
            Literal::new("world", "42"),
            request(),
        );
        assert_eq!(
            err.to_string(),
            "GET https://daaku.org/bar/?token=42 failed with hello 42"
        );
        assert!(err.response().is_none());
    }

    #[test]
    fn renders_with_response() {
        let err = WrappedError::new(
            io::Error::other("hello world"),
            Literal::new("world", "42"),
            request(),
            Some(Arc::new(ResponseDescriptor::new(StatusCode::BAD_GATEWAY))),
        );
        assert_eq!(
            err.message(),
            "GET https://daaku.org/bar/?token=42 got 502 Bad Gateway failed with hello 42"
        );
    }

    #[test]
    fn debug_is_redacted() {
        let err = WrappedError::new(
            io::Error::other("hello world"),
            Literal::new("world", "42"),
            request(),
            Some(Arc::new(ResponseDescriptor::new(StatusCode::BAD_GATEWAY))),
        );
        let debug = format!("{err:?}");
        assert!(!debug.contains("world"), "{debug}");
        assert!(debug.contains("hello 42"), "{debug}");
        assert!(debug.contains("502"), "{debug}");
    }

    #[test]
    fn reason_phrase_is_redacted() {
        let err = WrappedError::new(
            io::Error::other("boom"),
            Literal::placeholder("s3cr3t"),
            RequestDescriptor::new(Method::GET, "/x"),
            Some(Arc::new(
                ResponseDescriptor::new(StatusCode::UNAUTHORIZED)
                    .with_reason("token s3cr3t revoked"),
            )),
        );
        assert_eq!(
            err.to_string(),
            "GET /x got 401 token [REDACTED] revoked failed with boom"
        );
    }

    #[test]
    fn source_is_hidden() {
        let err = WrappedError::without_response(io::Error::other("boom"), NO_OP, request());
        assert!(err.source().is_none());
    }

    #[test]
    fn trait_accessors_match_inherent_ones() {
        let err = WrappedError::without_response(io::Error::other("boom"), NO_OP, request());
        let http_err: &dyn HttpError<Actual = io::Error> = &err;
        assert_eq!(http_err.request().target(), "https://daaku.org/bar/?token=world");
        assert!(http_err.response().is_none());
        assert_eq!(ErrorWrapper::actual(&err).to_string(), "boom");
    }

    #[test]
    fn into_actual_returns_the_error() {
        let err = WrappedError::without_response(
            io::Error::new(io::ErrorKind::TimedOut, "slow"),
            NO_OP,
            request(),
        );
        assert_eq!(err.into_actual().kind(), io::ErrorKind::TimedOut);
    }
}
