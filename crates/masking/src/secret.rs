//!
//! Structure describing secret.
//!

use std::{fmt, hash, marker::PhantomData};

use crate::{strategy::Strategy, PeekInterface};

///
/// Secret thing.
///
/// To get access to value use method `expose()` of trait [`crate::ExposeInterface`] or
/// `peek()` of trait [`crate::PeekInterface`].
///
/// ## Masking
/// The second generic parameter is a [`crate::Strategy`] deciding how the inner value is
/// rendered by `Debug`. The default strategy prints the type name only.
///
/// ```
/// use masking::{PeekInterface, Secret, Strategy};
/// use std::fmt;
///
/// enum LastDigits {}
///
/// impl<T: AsRef<str>> Strategy<T> for LastDigits {
///     fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         let val = val.as_ref();
///         let tail = val.get(val.len().saturating_sub(2)..).unwrap_or_default();
///         write!(f, "**{tail}")
///     }
/// }
///
/// let cvv: Secret<String, LastDigits> = Secret::new("1234".to_string());
///
/// assert_eq!("**34", format!("{cvv:?}"));
/// assert_eq!("1234", cvv.peek());
/// ```
///
pub struct Secret<S, I = crate::WithType>
where
    I: Strategy<S>,
{
    /// Inner secret value
    pub(crate) inner_secret: S,
    pub(crate) marker: PhantomData<I>,
}

impl<S, I> Secret<S, I>
where
    I: Strategy<S>,
{
    /// Take ownership of a secret value
    pub fn new(secret: S) -> Self {
        Self {
            inner_secret: secret,
            marker: PhantomData,
        }
    }
}

impl<S, I> PeekInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn peek(&self) -> &S {
        &self.inner_secret
    }
}

impl<S, I> From<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn from(secret: S) -> Self {
        Self::new(secret)
    }
}

impl<S, I> Clone for Secret<S, I>
where
    S: Clone,
    I: Strategy<S>,
{
    fn clone(&self) -> Self {
        Self::new(self.inner_secret.clone())
    }
}

impl<S, I> PartialEq for Secret<S, I>
where
    S: PartialEq,
    I: Strategy<S>,
{
    fn eq(&self, other: &Self) -> bool {
        self.peek().eq(other.peek())
    }
}

impl<S, I> Eq for Secret<S, I>
where
    S: Eq,
    I: Strategy<S>,
{
}

impl<S, I> hash::Hash for Secret<S, I>
where
    S: hash::Hash,
    I: Strategy<S>,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.peek().hash(state);
    }
}

impl<S, I> fmt::Debug for Secret<S, I>
where
    I: Strategy<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.inner_secret, f)
    }
}

impl<S, I> Default for Secret<S, I>
where
    S: Default,
    I: Strategy<S>,
{
    fn default() -> Self {
        S::default().into()
    }
}
