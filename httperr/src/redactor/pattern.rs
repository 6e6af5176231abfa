//! Regex replacement.
//!
//! Replacement templates use the `regex` crate syntax: `$1`, `${1}`, `$name`,
//! `${name}` refer to capture groups and `$$` is a literal `$`.

use std::borrow::Cow;

use regex::Regex;

use super::{Redactor, REDACTED_PLACEHOLDER};

/// Replaces every match of a regular expression with a replacement template.
///
/// ```rust
/// use httperr::{Pattern, Redactor};
///
/// let redactor = Pattern::new("(access_token|client_secret)=([^&]*)", "$1=xxx")?;
/// assert_eq!(redactor.redact("a=1&access_token=s3cr3t"), "a=1&access_token=xxx");
/// # Ok::<(), regex::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
    replacement: String,
}

impl Pattern {
    /// Compiles `pattern` and pairs it with `replacement`.
    ///
    /// A malformed pattern is reported here, before the redactor is ever used.
    pub fn new<R>(pattern: &str, replacement: R) -> Result<Self, regex::Error>
    where
        R: Into<String>,
    {
        Ok(Self::from_regex(Regex::new(pattern)?, replacement))
    }

    /// Pairs an already compiled regex with `replacement`.
    #[must_use]
    pub fn from_regex<R>(regex: Regex, replacement: R) -> Self
    where
        R: Into<String>,
    {
        Self {
            regex,
            replacement: replacement.into(),
        }
    }

    /// Redacts the values of `name=value` pairs for the given parameter names.
    ///
    /// The key is kept and the value (up to the next `&`, `#`, `;`, `,`, `"`
    /// or whitespace) becomes [`REDACTED_PLACEHOLDER`]. Names are matched
    /// literally and must follow the start of input, `?`, `&`, `;` or
    /// whitespace. With no names the redactor changes nothing.
    ///
    /// ```rust
    /// use httperr::{Pattern, Redactor};
    ///
    /// let redactor = Pattern::query_params(["access_token", "client_secret"])?;
    /// assert_eq!(
    ///     redactor.redact("/me?access_token=abc&fields=id"),
    ///     "/me?access_token=[REDACTED]&fields=id",
    /// );
    /// # Ok::<(), regex::Error>(())
    /// ```
    pub fn query_params<I, S>(names: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| regex::escape(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            // \b and \B at the same position never hold.
            return Self::new(r"\b\B", "");
        }
        let pattern = format!(r#"(^|[?&;\s])({})=[^&#;,"\s]*"#, names.join("|"));
        Self::new(&pattern, format!("${{1}}${{2}}={REDACTED_PLACEHOLDER}"))
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Redactor for Pattern {
    fn redact<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(input, self.replacement.as_str())
    }
}
