use darling::{FromDeriveInput, FromField, FromMeta, ast::Data, util::Ignored};
use syn::{Expr, Generics, Ident, Path, Type, Visibility};

///
/// ObservedInput
/// Container-level `#[observed(...)]` options.
///

#[derive(FromDeriveInput)]
#[darling(attributes(observed), supports(struct_named))]
pub struct ObservedInput {
    pub ident: Ident,
    pub vis: Visibility,
    pub generics: Generics,
    pub data: Data<Ignored, PropertyInput>,

    /// Module holding the per-field marker types.
    #[darling(default)]
    pub module: Option<Ident>,

    /// Name of the generated identity enum.
    #[darling(default)]
    pub id: Option<Ident>,

    /// Route `Observed::changed` to the owner's `Notify` impl.
    #[darling(default)]
    pub notify: bool,

    /// Skip the generated `Default` impl.
    #[darling(default)]
    pub no_default: bool,

    #[darling(default, rename = "crate")]
    pub krate: Option<Path>,
}

///
/// PropertyInput
/// Field-level `#[property(...)]` options.
///

#[derive(FromField)]
#[darling(attributes(property))]
pub struct PropertyInput {
    pub ident: Option<Ident>,
    pub vis: Visibility,
    pub ty: Type,

    #[darling(default)]
    pub default: Option<ExprArg>,

    #[darling(default)]
    pub pre: Option<ExprArg>,

    #[darling(default)]
    pub validate: bool,

    #[darling(default)]
    pub observe: bool,

    #[darling(default)]
    pub check: bool,

    /// Diagnostic name; defaults to the field ident.
    #[darling(default)]
    pub name: Option<String>,

    /// Plain field, not a property.
    #[darling(default)]
    pub skip: bool,
}

///
/// ExprArg
///
/// An attribute value taken verbatim as an expression, so `default = "x"`
/// stays a string literal rather than being re-parsed as a path.
///

pub struct ExprArg(pub Expr);

impl FromMeta for ExprArg {
    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        Ok(Self(expr.clone()))
    }
}
