//! `#[derive(Observed)]`: declares every `Property<T>` field of a struct as
//! an observed property and wires it to the owner's hooks at compile time.
//!
//! ```ignore
//! #[derive(Observed)]
//! #[observed(notify)]
//! pub struct Slider {
//!     #[property(default = 50, validate, observe)]
//!     level: Property<i32>,
//!     #[property(default = "untitled", pre = Trim)]
//!     label: Property<String>,
//!     #[property(skip)]
//!     history: Vec<i32>,
//! }
//! ```
//!
//! For each property the derive emits a marker type in a module named after
//! the owner (`slider::Level`), a variant of the identity enum
//! (`SliderField::Level`), the `Field` impl that routes stores to
//! `Validate` / `Observe` when `validate` / `observe` are set, and the
//! `level()`, `set_level()`, `with_level()` accessors. A field with `check`
//! gets `try_set_<field>()` in place of `set_<field>()`. `Observed` and
//! `Default` are implemented for the owner.
//!
//! Property fields must be private; a visible cell could be replaced
//! without running any hook.

use proc_macro::TokenStream;

mod input;
mod observed;
mod util;

#[proc_macro_derive(Observed, attributes(observed, property))]
pub fn derive_observed(input: TokenStream) -> TokenStream {
    observed::derive_observed(input.into()).into()
}
