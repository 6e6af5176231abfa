use std::{error::Error, fmt};

use super::ErrorWrapper;
use crate::redactor::Redactor;

/// An error whose message is passed through a redactor, with no other decoration.
pub struct RedactedError<E, R> {
    actual: E,
    redactor: R,
}

impl<E, R> RedactedError<E, R>
where
    R: Redactor,
{
    /// See [`crate::redact`].
    pub fn new(actual: E, redactor: R) -> Self {
        Self { actual, redactor }
    }

    pub fn actual(&self) -> &E {
        &self.actual
    }

    /// Consumes the wrapper and returns the unredacted error.
    pub fn into_actual(self) -> E {
        self.actual
    }

    pub fn redactor(&self) -> &R {
        &self.redactor
    }
}

impl<E, R> RedactedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    /// Returns the redacted message.
    pub fn message(&self) -> String {
        let message = self.actual.to_string();
        self.redactor.redact(&message).into_owned()
    }
}

impl<E, R> fmt::Display for RedactedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl<E, R> fmt::Debug for RedactedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactedError")
            .field("error", &self.message())
            .finish()
    }
}

impl<E, R> Error for RedactedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
}

impl<E, R> ErrorWrapper for RedactedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    type Actual = E;

    fn actual(&self) -> &E {
        &self.actual
    }
}

#[cfg(feature = "serde")]
impl<E, R> serde::Serialize for RedactedError<E, R>
where
    E: fmt::Display,
    R: Redactor,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("RedactedError", 1)?;
        state.serialize_field("error", &self.message())?;
        state.end()
    }
}
