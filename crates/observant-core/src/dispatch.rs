use crate::{
    field::{Field, Unchecked},
    owner::{Check, Observed},
};

// ============================================================================
// ASSIGNMENT PROTOCOL
// ============================================================================
//
// validated:  pre_validate -> validate -> store -> changed -> observe
// checked:    pre_validate -> check (may stop here) -> validate -> store -> ...
// fluent:     store
//
// Validated assignment is only open to `Unchecked` fields; a checked field
// has no write path that skips its check, apart from fluent construction.
//
// Every step runs in-line; the caller's assignment returns only after the
// hooks have completed.
//

///
/// Assignment
/// Whether a tracked assignment stored the caller's proposal as given.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Assignment {
    Accepted,
    Coerced,
}

impl Assignment {
    #[must_use]
    pub const fn is_coerced(self) -> bool {
        matches!(self, Self::Coerced)
    }
}

/// Read a field. No hooks.
#[must_use]
pub fn read<F: Field>(owner: &F::Owner) -> &F::Value {
    F::cell(owner).get()
}

/// Validated assignment. Returns the value that was actually stored.
pub fn assign<F: Unchecked>(owner: &mut F::Owner, proposal: F::Value) -> &F::Value {
    let proposal = F::pre_validate(proposal);
    let accepted = F::validate(owner, proposal);

    commit::<F>(owner, accepted)
}

/// Validated assignment behind the owner's hard check for `F`.
///
/// A rejected proposal leaves the stored value untouched and fires no hook;
/// the owner's error is returned as-is.
pub fn try_assign<F>(
    owner: &mut F::Owner,
    proposal: F::Value,
) -> Result<&F::Value, <F::Owner as Check<F>>::Error>
where
    F: Field,
    F::Owner: Check<F>,
{
    let proposal = F::pre_validate(proposal);

    if let Err(err) = <F::Owner as Check<F>>::check(owner, &proposal) {
        tracing::debug!(
            owner = <F::Owner as Observed>::NAME,
            field = F::NAME,
            "proposal rejected"
        );

        return Err(err);
    }

    let accepted = F::validate(owner, proposal);

    Ok(commit::<F>(owner, accepted))
}

/// Validated assignment that reports whether the stored value differs from
/// the caller's proposal, whether the pre-validator or the owner changed it.
pub fn assign_tracked<F>(owner: &mut F::Owner, proposal: F::Value) -> Assignment
where
    F: Unchecked,
    F::Value: Clone + PartialEq,
{
    let proposed = proposal.clone();
    let stored = assign::<F>(owner, proposal);

    if *stored == proposed {
        Assignment::Accepted
    } else {
        Assignment::Coerced
    }
}

/// Direct assignment for builder chains. Skips every hook.
#[must_use]
pub fn fluent<F: Field>(mut owner: F::Owner, value: F::Value) -> F::Owner {
    F::cell_mut(&mut owner).store(value);

    tracing::trace!(
        owner = <F::Owner as Observed>::NAME,
        field = F::NAME,
        "property initialised"
    );

    owner
}

// Store, then notify unconditionally; equal values still notify.
fn commit<F: Field>(owner: &mut F::Owner, value: F::Value) -> &F::Value {
    F::cell_mut(owner).store(value);

    tracing::trace!(
        owner = <F::Owner as Observed>::NAME,
        field = F::NAME,
        "property assigned"
    );

    owner.changed(F::ID);
    F::observe(owner);

    F::cell(owner).get()
}

///
/// TESTS
///
