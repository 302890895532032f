use crate::{
    dispatch::{self, Assignment},
    field::{Field, Unchecked},
    owner::{Check, Observed},
};
use std::{fmt, marker::PhantomData, ops::Deref};

///
/// Prop
///
/// Borrowed descriptor for one field of one owner instance.
///
/// Holds the owner, not the cell, so every write through it takes the full
/// validated path. Reads deref to the stored value.
///

pub struct Prop<'a, F: Field> {
    owner: &'a mut F::Owner,
    _field: PhantomData<fn() -> F>,
}

impl<'a, F: Field> Prop<'a, F> {
    pub const fn new(owner: &'a mut F::Owner) -> Self {
        Self {
            owner,
            _field: PhantomData,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        F::NAME
    }

    #[must_use]
    pub const fn id(&self) -> <F::Owner as Observed>::Id {
        F::ID
    }

    #[must_use]
    pub fn get(&self) -> &F::Value {
        dispatch::read::<F>(self.owner)
    }

    pub fn set(&mut self, proposal: impl Into<F::Value>) -> &F::Value
    where
        F: Unchecked,
    {
        dispatch::assign::<F>(self.owner, proposal.into())
    }

    pub fn set_tracked(&mut self, proposal: impl Into<F::Value>) -> Assignment
    where
        F: Unchecked,
        F::Value: Clone + PartialEq,
    {
        dispatch::assign_tracked::<F>(self.owner, proposal.into())
    }

    pub fn try_set(
        &mut self,
        proposal: impl Into<F::Value>,
    ) -> Result<&F::Value, <F::Owner as Check<F>>::Error>
    where
        F::Owner: Check<F>,
    {
        dispatch::try_assign::<F>(self.owner, proposal.into())
    }

    /// Read-only view of the owner, e.g. to inspect derived fields.
    #[must_use]
    pub fn owner(&self) -> &F::Owner {
        self.owner
    }
}

impl<F: Field> Deref for Prop<'_, F> {
    type Target = F::Value;

    fn deref(&self) -> &F::Value {
        self.get()
    }
}

impl<F> fmt::Debug for Prop<'_, F>
where
    F: Field,
    F::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prop")
            .field("owner", &<F::Owner as Observed>::NAME)
            .field("name", &F::NAME)
            .field("value", self.get())
            .finish()
    }
}

///
/// ObservedExt
///
/// Generic, marker-addressed access for every observed owner.
/// `owner.assign::<slider::Level>(5)` is what `owner.set_level(5)` expands to.
///

pub trait ObservedExt: Observed {
    fn read<F: Field<Owner = Self>>(&self) -> &F::Value {
        dispatch::read::<F>(self)
    }

    fn assign<F>(&mut self, proposal: impl Into<F::Value>) -> &F::Value
    where
        F: Unchecked<Owner = Self>,
    {
        dispatch::assign::<F>(self, proposal.into())
    }

    fn try_assign<F>(
        &mut self,
        proposal: impl Into<F::Value>,
    ) -> Result<&F::Value, <Self as Check<F>>::Error>
    where
        F: Field<Owner = Self>,
        Self: Check<F>,
    {
        dispatch::try_assign::<F>(self, proposal.into())
    }

    #[must_use]
    fn with<F: Field<Owner = Self>>(self, value: impl Into<F::Value>) -> Self {
        dispatch::fluent::<F>(self, value.into())
    }

    fn prop<F: Field<Owner = Self>>(&mut self) -> Prop<'_, F> {
        Prop::new(self)
    }
}

impl<O: Observed> ObservedExt for O {}

///
/// TESTS
///
