//! Built-in pre-validators.
//!
//! A pre-validator is a pure transform applied to a proposal before the
//! owner sees it. It has no access to the owner, so anything that depends
//! on other fields belongs in [`Validate`](crate::owner::Validate) instead.

pub mod num;
pub mod text;

pub use num::{AtLeast, AtMost, Clamp};
pub use text::{Lowercase, Trim, Truncate, Uppercase};

///
/// PreValidate
///
/// Any `Fn(T) -> T` is a pre-validator, so `pre = my_fn` and
/// `pre = |v: u8| v.min(9)` both work in `#[property(...)]`.
///

pub trait PreValidate<T> {
    fn pre_validate(&self, value: T) -> T;

    /// Run `self`, then `next`.
    fn then<P>(self, next: P) -> Then<Self, P>
    where
        Self: Sized,
        P: PreValidate<T>,
    {
        Then {
            first: self,
            second: next,
        }
    }
}

impl<T, F> PreValidate<T> for F
where
    F: Fn(T) -> T,
{
    fn pre_validate(&self, value: T) -> T {
        self(value)
    }
}

///
/// Identity
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<T> PreValidate<T> for Identity {
    fn pre_validate(&self, value: T) -> T {
        value
    }
}

///
/// Then
///

#[derive(Clone, Copy, Debug)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> PreValidate<T> for Then<A, B>
where
    A: PreValidate<T>,
    B: PreValidate<T>,
{
    fn pre_validate(&self, value: T) -> T {
        self.second.pre_validate(self.first.pre_validate(value))
    }
}

///
/// TESTS
///
