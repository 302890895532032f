use crate::field::{Field, FieldId};

// ============================================================================
// OWNER PROTOCOL
// ============================================================================
//
// `Observed` is the "make observed" opt-in: implementing it gives every field
// identity validation and no-op notification. The remaining traits are the
// per-field and catch-all override points; the derive only routes to them
// when the matching attribute is present.
//

///
/// Observed
///
/// An owner aggregate whose fields are `Property<T>` cells.
///
/// `changed` runs after every validated store with the identity of the
/// field that was written, before the field's own observer.
///

pub trait Observed: Sized + 'static {
    type Id: FieldId;

    /// Owner type name, for diagnostics.
    const NAME: &'static str;

    fn changed(&mut self, _field: Self::Id) {}
}

///
/// Notify
///
/// Catch-all notification, routed from [`Observed::changed`] by
/// `#[observed(notify)]`.
///

pub trait Notify: Observed {
    fn notify(&mut self, field: Self::Id);
}

///
/// Validate
///
/// Owner validation for a single field. May return the proposal unchanged or
/// any coerced value; soft rejection is expressed by returning something
/// acceptable. Opted into per field with `#[property(validate)]`.
///

pub trait Validate<F: Field<Owner = Self>>: Observed {
    fn validate(&self, proposal: F::Value) -> F::Value;
}

///
/// Observe
///
/// Observer for a single field. Runs after every validated assignment, with
/// no equality short-circuit. Opted into with `#[property(observe)]`.
///

pub trait Observe<F: Field<Owner = Self>>: Observed {
    fn observe(&mut self);
}

///
/// Check
///
/// Hard rejection for a single field. Runs after the pre-validator and
/// before [`Validate`]; on error nothing is stored and no hook fires.
/// Opted into with `#[property(check)]`, which generates `try_set_<field>`.
///

pub trait Check<F: Field<Owner = Self>>: Observed {
    type Error;

    fn check(&self, proposal: &F::Value) -> Result<(), Self::Error>;
}
