//! Text redactors.
//!
//! A [`Redactor`] is a pure string transformation. It does not decide what is
//! sensitive at runtime; it only applies the configuration it was built with.
//!
//! - **`literal`**: fixed substring replacement ([`Literal`])
//! - **`pattern`**: regex replacement with capture templates ([`Pattern`])
//!
//! The no-op redactor and composition ([`Chain`], tuples, smart pointers,
//! closures via [`from_fn`]) live here.

mod literal;
mod pattern;

use std::{borrow::Cow, fmt, sync::Arc};

pub use literal::Literal;
pub use pattern::Pattern;

/// Default placeholder written in place of redacted values.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Scrubs sensitive substrings from text before it is surfaced.
///
/// Implementations must be total: when nothing matches, the input comes back
/// unchanged, ideally as [`Cow::Borrowed`].
///
/// Closures become redactors through [`from_fn`]:
///
/// ```rust
/// use httperr::{from_fn, Redactor};
///
/// let upper = from_fn(|s: &str| s.to_uppercase());
/// assert_eq!(upper.redact("abc"), "ABC");
/// ```
pub trait Redactor {
    /// Returns `input` with every sensitive substring replaced.
    fn redact<'a>(&self, input: &'a str) -> Cow<'a, str>;
}

/// A redactor that returns its input unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoOp;

/// Shared no-op redactor.
pub const NO_OP: NoOp = NoOp;

impl Redactor for NoOp {
    fn redact<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(input)
    }
}

/// A redactor backed by a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Turns a `Fn(&str) -> String` closure into a [`Redactor`].
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&str) -> String,
{
    FromFn(f)
}

impl<F> Redactor for FromFn<F>
where
    F: Fn(&str) -> String,
{
    fn redact<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Owned((self.0)(input))
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn")
    }
}

impl<R: Redactor + ?Sized> Redactor for Box<R> {
    fn redact<'a>(&self, input: &'a str) -> Cow<'a, str> {
        (**self).redact(input)
    }
}

impl<R: Redactor + ?Sized> Redactor for Arc<R> {
    fn redact<'a>(&self, input: &'a str) -> Cow<'a, str> {
        (**self).redact(input)
    }
}

impl<R: Redactor + ?Sized> Redactor for &R {
    fn redact<'a>(&self, input: &'a str) -> Cow<'a, str> {
        (**self).redact(input)
    }
}

/// Feeds the output of one redactor into the next.
fn then<'a, R: Redactor + ?Sized>(current: Cow<'a, str>, next: &R) -> Cow<'a, str> {
    match current {
        Cow::Borrowed(s) => next.redact(s),
        Cow::Owned(s) => Cow::Owned(next.redact(&s).into_owned()),
    }
}

impl<A: Redactor, B: Redactor> Redactor for (A, B) {
    fn redact<'a>(&self, input: &'a str) -> Cow<'a, str> {
        then(self.0.redact(input), &self.1)
    }
}

impl<A: Redactor, B: Redactor, C: Redactor> Redactor for (A, B, C) {
    fn redact<'a>(&self, input: &'a str) -> Cow<'a, str> {
        then(then(self.0.redact(input), &self.1), &self.2)
    }
}

/// An ordered list of redactors applied one after another.
///
/// Each redactor sees the output of the previous one.
#[derive(Default)]
pub struct Chain {
    redactors: Vec<Box<dyn Redactor + Send + Sync>>,
}

impl Chain {
    /// Constructs an empty chain, which behaves like [`NoOp`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a redactor to the end of the chain.
    #[must_use]
    pub fn with<R>(mut self, redactor: R) -> Self
    where
        R: Redactor + Send + Sync + 'static,
    {
        self.push(redactor);
        self
    }

    /// Appends a redactor in place.
    pub fn push<R>(&mut self, redactor: R)
    where
        R: Redactor + Send + Sync + 'static,
    {
        self.redactors.push(Box::new(redactor));
    }

    pub fn len(&self) -> usize {
        self.redactors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.redactors.is_empty()
    }
}

impl Redactor for Chain {
    fn redact<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.redactors
            .iter()
            .fold(Cow::Borrowed(input), |current, next| then(current, next))
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("len", &self.redactors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{from_fn, Chain, Literal, NoOp, Redactor, NO_OP};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn no_op_is_identity_and_borrows() {
        assert_eq!(NO_OP.redact("42"), "42");
        assert!(matches!(NoOp.redact("hello world"), Cow::Borrowed("hello world")));
    }

    #[test]
    fn closure_redactor() {
        let redactor = from_fn(|s: &str| s.replace("secret", "***"));
        assert_eq!(redactor.redact("my secret"), "my ***");
    }

    #[test]
    fn tuple_applies_in_order() {
        let redactor = (Literal::new("a", "b"), Literal::new("b", "c"));
        assert_eq!(redactor.redact("ab"), "cc");
    }

    #[test]
    fn triple_applies_in_order() {
        let redactor = (NoOp, Literal::new("x", "y"), Literal::new("y", "z"));
        assert_eq!(redactor.redact("xy"), "zz");
    }

    #[test]
    fn empty_chain_borrows_input() {
        let chain = Chain::new();
        assert!(chain.is_empty());
        assert!(matches!(chain.redact("abc"), Cow::Borrowed("abc")));
    }

    #[test]
    fn chain_applies_in_order() {
        let chain = Chain::new()
            .with(Literal::new("foo", "bar"))
            .with(Literal::new("bar", "baz"));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.redact("foo bar"), "baz baz");
    }

    #[test]
    fn provided_redactors_are_send_and_sync() {
        assert_send_sync::<NoOp>();
        assert_send_sync::<Literal>();
        assert_send_sync::<super::Pattern>();
        assert_send_sync::<Chain>();
    }
}
