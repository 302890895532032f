use derive_more::Deref;
use std::fmt::{self, Debug, Display};

///
/// Property
///
/// Value cell embedded in an observed owner.
///
/// Reads are unconditional: `Deref`, `AsRef` and [`Property::get`] all return
/// the same reference and never run a hook. There is no public write path;
/// stores go through the dispatch functions so that pre-validation,
/// owner validation and notification always run in order. `new` is for
/// building an owner; owners keep their property fields private so a
/// built cell cannot replace a live one.
///

#[derive(Clone, Copy, Deref, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Property<T> {
    value: T,
}

impl<T> Property<T> {
    /// Wrap an initial value.
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Call-style read.
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Consume the cell, returning the stored value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }

    // Only the dispatch layer writes.
    pub(crate) fn store(&mut self, value: T) {
        self.value = value;
    }
}

impl<T: Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Property<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> AsRef<T> for Property<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

// Debug and Display are transparent so owners print like plain structs.
impl<T: Debug> Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.value, f)
    }
}

impl<T: Display> Display for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

///
/// TESTS
///
