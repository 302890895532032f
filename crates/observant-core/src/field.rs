use crate::{error::FieldError, owner::Observed, property::Property};
use std::{fmt::Debug, hash::Hash};

// ============================================================================
// FIELD DESCRIPTORS
// ============================================================================
//
// One zero-sized marker type per declared property. The marker carries the
// compile-time facts (name, identity, pre-validator) and the
// routing from a store to the owner's hooks. `#[derive(Observed)]` writes
// these impls; nothing here is registered at run time.
//

///
/// Field
///
/// Compile-time descriptor of one property on one owner type.
///
/// `cell` / `cell_mut` thread the owner reference to the property instead of
/// recovering the owner from the field's address, so a `Property<T>` stays
/// exactly the size of `T`.
///
/// `validate` and `observe` default to the identity transform and a no-op.
/// The derive overrides them to call the owner's [`Validate`] / [`Observe`]
/// impl for this marker only, which leaves every other field on defaults.
///
/// [`Validate`]: crate::owner::Validate
/// [`Observe`]: crate::owner::Observe
///

pub trait Field: Sized + 'static {
    type Owner: Observed;
    type Value;

    /// Declared field name, for diagnostics.
    const NAME: &'static str;

    /// Dispatch key within the owner's identity enum.
    const ID: <Self::Owner as Observed>::Id;

    /// Owner-independent transform applied before owner validation.
    fn pre_validate(proposal: Self::Value) -> Self::Value {
        proposal
    }

    /// Owner validation hook for this field.
    fn validate(_owner: &Self::Owner, proposal: Self::Value) -> Self::Value {
        proposal
    }

    /// Per-field observer, run after the catch-all notification.
    fn observe(_owner: &mut Self::Owner) {}

    fn cell(owner: &Self::Owner) -> &Property<Self::Value>;

    fn cell_mut(owner: &mut Self::Owner) -> &mut Property<Self::Value>;
}

///
/// DefaultValue
///
/// Value the cell holds right after the owner is constructed. The derive
/// implements it for every property unless the owner opts out of the
/// generated `Default` and declares no `default = ..`, so value types
/// without a default stay usable under `no_default`.
///

pub trait DefaultValue: Field {
    fn default_value() -> Self::Value;
}

///
/// Unchecked
///
/// A field with no hard check. Only these accept plain validated
/// assignment; a field with a `Check` impl is written through
/// `try_assign` alone, so the check cannot be skipped.
///

pub trait Unchecked: Field {}

///
/// FieldId
///
/// Closed set of field identities for one owner type, generated as a
/// fieldless enum. Owners pattern-match on it in [`Notify`].
///
/// [`Notify`]: crate::owner::Notify
///

pub trait FieldId: Copy + Debug + Eq + Hash + 'static {
    /// Owner type name, used in lookup errors.
    const OWNER: &'static str;

    /// Every identity, in declaration order.
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    /// Declaration position.
    fn index(self) -> usize;

    fn from_name(name: &str) -> Result<Self, FieldError> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name() == name)
            .ok_or_else(|| FieldError::unknown(Self::OWNER, name))
    }

    fn from_index(index: usize) -> Result<Self, FieldError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(FieldError::OutOfRange {
                owner: Self::OWNER,
                index,
            })
    }
}

///
/// TESTS
///
