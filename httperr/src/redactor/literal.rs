//! Fixed substring replacement.

use std::borrow::Cow;

use super::{Redactor, REDACTED_PLACEHOLDER};

/// Replaces every occurrence of a fixed substring with a fixed replacement.
///
/// Occurrences are found left to right and never overlap, so `"aa"` in
/// `"aaa"` is replaced once. An empty needle matches nothing.
///
/// ```rust
/// use httperr::{Literal, Redactor};
///
/// let redactor = Literal::new("world", "42");
/// assert_eq!(redactor.redact("hello world, world"), "hello 42, 42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    needle: Cow<'static, str>,
    replacement: Cow<'static, str>,
}

impl Literal {
    /// Constructs a redactor that replaces `needle` with `replacement`.
    #[must_use]
    pub fn new<N, R>(needle: N, replacement: R) -> Self
    where
        N: Into<Cow<'static, str>>,
        R: Into<Cow<'static, str>>,
    {
        Self {
            needle: needle.into(),
            replacement: replacement.into(),
        }
    }

    /// Constructs a redactor that replaces `needle` with [`REDACTED_PLACEHOLDER`].
    #[must_use]
    pub fn placeholder<N>(needle: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self::new(needle, REDACTED_PLACEHOLDER)
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Redactor for Literal {
    fn redact<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let needle: &str = &self.needle;
        if needle.is_empty() || !input.contains(needle) {
            return Cow::Borrowed(input);
        }
        Cow::Owned(input.replace(needle, &self.replacement))
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::Literal;
    use crate::{Redactor, REDACTED_PLACEHOLDER};

    #[test]
    fn replaces_every_occurrence() {
        let redactor = Literal::new("world", "42");
        assert_eq!(redactor.redact("hello world"), "hello 42");
        assert_eq!(redactor.redact("world world world"), "42 42 42");
    }

    #[test]
    fn occurrences_do_not_overlap() {
        let redactor = Literal::new("aa", "b");
        assert_eq!(redactor.redact("aaa"), "ba");
        assert_eq!(redactor.redact("aaaa"), "bb");
    }

    #[test]
    fn no_match_borrows_input() {
        let redactor = Literal::new("secret", "***");
        assert!(matches!(redactor.redact("nothing here"), Cow::Borrowed(_)));
    }

    #[test]
    fn empty_needle_is_a_no_op() {
        let redactor = Literal::new("", "x");
        assert_eq!(redactor.redact("abc"), "abc");
    }

    #[test]
    fn replacement_may_contain_needle() {
        // Output is not rescanned.
        let redactor = Literal::new("a", "aa");
        assert_eq!(redactor.redact("aba"), "aabaa");
    }

    #[test]
    fn placeholder_uses_default_marker() {
        let redactor = Literal::placeholder("hunter2");
        assert_eq!(redactor.replacement(), REDACTED_PLACEHOLDER);
        assert_eq!(redactor.redact("password=hunter2"), "password=[REDACTED]");
    }

    #[test]
    fn accepts_owned_strings() {
        let secret = String::from("tok_123");
        let redactor = Literal::new(secret.clone(), String::from("tok_***"));
        assert_eq!(redactor.needle(), secret);
        assert_eq!(redactor.redact("bearer tok_123"), "bearer tok_***");
    }
}
