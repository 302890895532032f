//! ## Crate layout
//! - `core`: the `Property<T>` cell, field and owner traits, and the
//!   assignment protocol.
//! - `derive`: `#[derive(Observed)]`, which generates field identities,
//!   hook routing and accessors for an owner struct.
//! - `base`: built-in pre-validators (`Trim`, `Clamp`, ...).
//!
//! Generated code refers to items through this crate's root (`::observant`),
//! so downstream crates only need this one dependency.

pub use observant_core as core;
pub use observant_derive as derive;

pub use observant_core::{
    Assignment, Check, DefaultValue, Field, FieldError, FieldId, Notify, Observe, Observed,
    ObservedExt, Prop, Property, Unchecked, Validate, assign, assign_tracked, base, fluent, read,
    try_assign,
};
pub use observant_derive::Observed;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        Check, FieldError, Notify, Observe, Observed, Property, Validate,
        base::PreValidate,
        core::{DefaultValue as _, Field as _, FieldId as _, ObservedExt as _},
    };
}
