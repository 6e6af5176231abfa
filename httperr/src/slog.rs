//! Adapters for emitting redacted errors through `slog`.
//!
//! This module connects [`WrappedError`] and [`RedactedError`] with `slog` by
//! providing `slog::Value` implementations that serialize the redacted fields
//! as structured JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation goes through the error's redactor,
//!   never through the raw error.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or emit records on its own.

use std::fmt;

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{error::RedactedError, error::WrappedError, redactor::Redactor};

/// A `slog::Value` that emits a redacted error as structured JSON.
///
/// Wrapped errors produce `{"method", "target", "status", "reason", "error"}`;
/// redacted errors produce `{"error"}`.
#[derive(Clone, Debug)]
pub struct RedactedJson {
    value: JsonValue,
}

impl RedactedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// Returns the JSON payload that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts redacted errors into a `slog::Value` holding their JSON form.
///
/// ## Example
/// ```ignore
/// use httperr::slog::ToRedactedJson;
///
/// error!(logger, "upstream call failed"; "error" => err.to_redacted_json());
/// ```
pub trait ToRedactedJson {
    /// Serializes the redacted fields of `self`.
    ///
    /// If conversion into `serde_json::Value` fails, the returned value holds
    /// the JSON string `"Failed to serialize redacted value"`.
    fn to_redacted_json(&self) -> RedactedJson;
}

fn to_json<T: Serialize>(value: &T) -> RedactedJson {
    let json_value = serde_json::to_value(value)
        .unwrap_or_else(|_| JsonValue::String("Failed to serialize redacted value".to_string()));
    RedactedJson::new(json_value)
}

impl<E, R> ToRedactedJson for WrappedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    fn to_redacted_json(&self) -> RedactedJson {
        to_json(self)
    }
}

impl<E, R> ToRedactedJson for RedactedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    fn to_redacted_json(&self) -> RedactedJson {
        to_json(self)
    }
}

impl<E, R> SlogValue for WrappedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        SlogValue::serialize(&self.to_redacted_json(), record, key, serializer)
    }
}

impl<E, R> SlogValue for RedactedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        SlogValue::serialize(&self.to_redacted_json(), record, key, serializer)
    }
}
