//! Core runtime for Observant: the `Property<T>` value cell, the field and
//! owner traits that `#[derive(Observed)]` implements, and the assignment
//! protocol that routes every write through the owner's hooks.

// public exports are one module level down
pub mod base;
pub mod dispatch;
pub mod error;
pub mod field;
pub mod owner;
pub mod prop;
pub mod property;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use dispatch::{Assignment, assign, assign_tracked, fluent, read, try_assign};
pub use error::FieldError;
pub use field::{DefaultValue, Field, FieldId, Unchecked};
pub use owner::{Check, Notify, Observe, Observed, Validate};
pub use prop::{ObservedExt, Prop};
pub use property::Property;

///
/// Prelude
///
/// Traits and types an owner module needs to declare and override hooks.
/// Dispatch functions stay at the crate root.
///

pub mod prelude {
    pub use crate::{
        base::PreValidate,
        field::{DefaultValue as _, Field as _, FieldId as _},
        owner::{Check, Notify, Observe, Observed, Validate},
        prop::ObservedExt as _,
        property::Property,
    };
}
