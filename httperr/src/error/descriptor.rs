//! Request and response descriptors.
//!
//! These hold only what rendering needs. The `From` conversions take the
//! `http` crate's types by reference so callers keep the exchange itself.

use std::{borrow::Cow, fmt};

use http::{request, response, Method, StatusCode};

use crate::redactor::{Redactor, NO_OP};

/// The method and target of an HTTP request.
///
/// `target` is usually the full request URI. It is stored unredacted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: Method,
    target: String,
}

impl RequestDescriptor {
    #[must_use]
    pub fn new<T>(method: Method, target: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            method,
            target: target.into(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl<B> From<&http::Request<B>> for RequestDescriptor {
    fn from(request: &http::Request<B>) -> Self {
        Self::new(request.method().clone(), request.uri().to_string())
    }
}

impl From<&request::Parts> for RequestDescriptor {
    fn from(parts: &request::Parts) -> Self {
        Self::new(parts.method.clone(), parts.uri.to_string())
    }
}

/// The status of an HTTP response.
///
/// The textual status is the custom reason when one was given, otherwise the
/// canonical reason phrase for the code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseDescriptor {
    status: StatusCode,
    reason: Option<Cow<'static, str>>,
}

impl ResponseDescriptor {
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            reason: None,
        }
    }

    /// Overrides the reason phrase, e.g. with the one the server sent.
    #[must_use]
    pub fn with_reason<P>(mut self, reason: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        self.reason = Some(reason.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the textual status, if one is known.
    pub fn reason(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .or_else(|| self.status.canonical_reason())
    }
}

impl From<StatusCode> for ResponseDescriptor {
    fn from(status: StatusCode) -> Self {
        Self::new(status)
    }
}

impl<B> From<&http::Response<B>> for ResponseDescriptor {
    fn from(response: &http::Response<B>) -> Self {
        Self::new(response.status())
    }
}

impl From<&response::Parts> for ResponseDescriptor {
    fn from(parts: &response::Parts) -> Self {
        Self::new(parts.status)
    }
}

impl ResponseDescriptor {
    /// Returns the reason phrase passed through `redactor`.
    pub(crate) fn redacted_reason<R>(&self, redactor: &R) -> Option<String>
    where
        R: Redactor + ?Sized,
    {
        self.reason()
            .map(|reason| redactor.redact(reason).into_owned())
    }

    /// Formats as `<code> <reason>` with the reason passed through `redactor`.
    pub(crate) fn render<R>(&self, redactor: &R) -> String
    where
        R: Redactor + ?Sized,
    {
        match self.redacted_reason(redactor) {
            Some(reason) if !reason.is_empty() => format!("{} {reason}", self.status.as_u16()),
            _ => self.status.as_u16().to_string(),
        }
    }
}

/// Formats as `<code> <reason>`, or just `<code>` when no reason is known.
///
/// The reason is printed as given; composites render it through their redactor.
impl fmt::Display for ResponseDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&NO_OP))
    }
}
