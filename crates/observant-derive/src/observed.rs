use crate::{
    input::{ObservedInput, PropertyInput},
    util::{nested_vis, property_value_type},
};
use convert_case::{Case, Casing};
use darling::{Error as DarlingError, FromDeriveInput};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::collections::HashSet;
use syn::{
    DeriveInput, Expr, ExprLit, ExprParen, ExprUnary, Ident, Lit, Path, Type, UnOp, Visibility,
    ext::IdentExt, parse_quote,
};

// derive_observed
pub fn derive_observed(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let owner = match ObservedInput::from_derive_input(&input) {
        Ok(owner) => owner,
        Err(err) => return err.write_errors(),
    };

    match Owner::plan(owner) {
        Ok(owner) => owner.expand(),
        Err(err) => err.write_errors(),
    }
}

///
/// Owner
/// Resolved names and per-field plans for one `#[derive(Observed)]`.
///

struct Owner {
    ident: Ident,
    name: String,
    vis: Visibility,
    module: Ident,
    id: Ident,
    krate: Path,
    notify: bool,
    no_default: bool,
    properties: Vec<PropertyPlan>,
    plain: Vec<Ident>,
}

///
/// PropertyPlan
///

struct PropertyPlan {
    ident: Ident,
    marker: Ident,
    name: String,
    value_ty: Type,
    default: Option<Expr>,
    pre: Option<Expr>,
    validate: bool,
    observe: bool,
    check: bool,
}

impl Owner {
    fn plan(input: ObservedInput) -> Result<Self, DarlingError> {
        let mut errors = DarlingError::accumulator();

        if !input.generics.params.is_empty() {
            errors.push(
                DarlingError::custom("Observed cannot be derived for generic structs")
                    .with_span(&input.generics),
            );
        }

        let owner_name = input.ident.unraw().to_string();
        let module = input
            .module
            .unwrap_or_else(|| format_ident!("{}", owner_name.to_case(Case::Snake)));
        let id = input
            .id
            .unwrap_or_else(|| format_ident!("{}Field", owner_name));
        let krate = input.krate.unwrap_or_else(|| parse_quote!(::observant));

        let fields = input
            .data
            .take_struct()
            .map(|fields| fields.fields)
            .unwrap_or_default();

        let mut properties = Vec::new();
        let mut plain = Vec::new();
        let mut markers = HashSet::new();
        let mut names = HashSet::new();

        for field in fields {
            let Some(ident) = field.ident.clone() else {
                continue;
            };

            if field.skip {
                plain.push(ident);
                continue;
            }

            let Some(plan) = errors.handle(PropertyPlan::from_field(ident, field)) else {
                continue;
            };

            if !markers.insert(plan.marker.to_string()) {
                errors.push(
                    DarlingError::custom(format!(
                        "field '{}' maps to marker type '{}', which is already taken",
                        plan.ident, plan.marker
                    ))
                    .with_span(&plan.ident),
                );
            }

            if !names.insert(plan.name.clone()) {
                errors.push(
                    DarlingError::custom(format!("duplicate property name '{}'", plan.name))
                        .with_span(&plan.ident),
                );
            }

            properties.push(plan);
        }

        errors.finish_with(Self {
            ident: input.ident,
            name: owner_name,
            vis: input.vis,
            module,
            id,
            krate,
            notify: input.notify,
            no_default: input.no_default,
            properties,
            plain,
        })
    }

    fn expand(&self) -> TokenStream {
        let markers = self.markers();
        let id = self.id_enum();
        let fields = self.properties.iter().map(|p| self.field_impl(p));
        let observed = self.observed_impl();
        let default = self.default_impl();
        let accessors = self.accessors();

        quote! {
            #markers
            #id
            #(#fields)*
            #observed
            #default
            #accessors
        }
    }

    // marker module: one zero-sized type per property
    fn markers(&self) -> TokenStream {
        let Self {
            ident, vis, module, ..
        } = self;
        let inner_vis = nested_vis(vis);
        let module_doc = format!("Field identities of `{ident}`.");

        let markers = self.properties.iter().map(|p| {
            let marker = &p.marker;
            let doc = format!("Identity of the `{}` property.", p.name);

            quote! {
                #[doc = #doc]
                #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
                #inner_vis struct #marker;
            }
        });

        quote! {
            #[doc = #module_doc]
            #[allow(dead_code)]
            #vis mod #module {
                #(#markers)*
            }
        }
    }

    fn id_enum(&self) -> TokenStream {
        let Self {
            ident,
            name,
            vis,
            id,
            krate,
            ..
        } = self;
        let doc = format!("Closed set of field identities of [`{ident}`].");

        let variants = self.properties.iter().map(|p| {
            let marker = &p.marker;
            let doc = format!("The `{}` property.", p.name);

            quote! {
                #[doc = #doc]
                #marker
            }
        });
        let all = self.properties.iter().map(|p| &p.marker);
        let name_arms = self.properties.iter().map(|p| {
            let marker = &p.marker;
            let field_name = &p.name;

            quote!(Self::#marker => #field_name,)
        });
        let index_arms = self.properties.iter().enumerate().map(|(index, p)| {
            let marker = &p.marker;

            quote!(Self::#marker => #index,)
        });

        quote! {
            #[doc = #doc]
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
            #vis enum #id {
                #(#variants,)*
            }

            impl #krate::FieldId for #id {
                const OWNER: &'static str = #name;
                const ALL: &'static [Self] = &[#(Self::#all),*];

                fn name(self) -> &'static str {
                    match self {
                        #(#name_arms)*
                    }
                }

                fn index(self) -> usize {
                    match self {
                        #(#index_arms)*
                    }
                }
            }

            impl ::core::fmt::Display for #id {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(#krate::FieldId::name(*self))
                }
            }

            impl ::core::str::FromStr for #id {
                type Err = #krate::FieldError;

                fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                    <Self as #krate::FieldId>::from_name(s)
                }
            }
        }
    }

    fn field_impl(&self, p: &PropertyPlan) -> TokenStream {
        let Self {
            ident: owner,
            module,
            id,
            krate,
            ..
        } = self;
        let PropertyPlan {
            ident,
            marker,
            name,
            value_ty,
            ..
        } = p;

        let pre = p.pre.as_ref().map(|expr| {
            quote! {
                fn pre_validate(proposal: #value_ty) -> #value_ty {
                    #krate::base::PreValidate::pre_validate(&(#expr), proposal)
                }
            }
        });

        let validate = p.validate.then(|| {
            quote! {
                fn validate(owner: &#owner, proposal: #value_ty) -> #value_ty {
                    <#owner as #krate::Validate<Self>>::validate(owner, proposal)
                }
            }
        });

        let observe = p.observe.then(|| {
            quote! {
                fn observe(owner: &mut #owner) {
                    <#owner as #krate::Observe<Self>>::observe(owner);
                }
            }
        });

        let default_value = self.default_value_impl(p);
        let unchecked = (!p.check).then(|| {
            quote!(impl #krate::Unchecked for #module::#marker {})
        });

        quote! {
            impl #krate::Field for #module::#marker {
                type Owner = #owner;
                type Value = #value_ty;

                const NAME: &'static str = #name;
                const ID: #id = #id::#marker;

                #pre
                #validate
                #observe

                fn cell(owner: &#owner) -> &#krate::Property<#value_ty> {
                    &owner.#ident
                }

                fn cell_mut(owner: &mut #owner) -> &mut #krate::Property<#value_ty> {
                    &mut owner.#ident
                }
            }

            #default_value
            #unchecked
        }
    }

    // Without a generated `Default` and without a declared default there is
    // nothing to emit, and the value type need not implement `Default`.
    fn default_value_impl(&self, p: &PropertyPlan) -> Option<TokenStream> {
        let Self { module, krate, .. } = self;
        let PropertyPlan {
            marker, value_ty, ..
        } = p;

        let body = match &p.default {
            None if self.no_default => return None,
            None => quote!(::core::default::Default::default()),
            Some(expr) if is_numeric_literal(expr) => quote!(#expr),
            Some(expr) => quote!(::core::convert::Into::into(#expr)),
        };

        Some(quote! {
            impl #krate::DefaultValue for #module::#marker {
                #[allow(clippy::useless_conversion)]
                fn default_value() -> #value_ty {
                    #body
                }
            }
        })
    }

    fn observed_impl(&self) -> TokenStream {
        let Self {
            ident,
            name,
            id,
            krate,
            ..
        } = self;

        let changed = self.notify.then(|| {
            quote! {
                fn changed(&mut self, field: #id) {
                    <Self as #krate::Notify>::notify(self, field);
                }
            }
        });

        quote! {
            impl #krate::Observed for #ident {
                type Id = #id;

                const NAME: &'static str = #name;

                #changed
            }
        }
    }

    fn default_impl(&self) -> TokenStream {
        if self.no_default {
            return quote!();
        }

        let Self {
            ident,
            module,
            krate,
            plain,
            ..
        } = self;

        let properties = self.properties.iter().map(|p| {
            let field = &p.ident;
            let marker = &p.marker;

            quote! {
                #field: #krate::Property::new(
                    <#module::#marker as #krate::DefaultValue>::default_value()
                ),
            }
        });

        quote! {
            impl ::core::default::Default for #ident {
                fn default() -> Self {
                    Self {
                        #(#properties)*
                        #(#plain: ::core::default::Default::default(),)*
                    }
                }
            }
        }
    }

    fn accessors(&self) -> TokenStream {
        let Self {
            ident,
            vis,
            module,
            krate,
            ..
        } = self;

        let methods = self.properties.iter().map(|p| {
            let PropertyPlan {
                ident: getter,
                marker,
                name,
                value_ty,
                ..
            } = p;
            let base = getter.unraw();
            let builder = format_ident!("with_{}", base);
            let path = quote!(#module::#marker);

            let read_doc = format!("Reads `{name}`.");
            let with_doc = format!("Sets `{name}` directly, skipping validation and notification.");

            // a checked field gets `try_set_` only, so its check cannot be skipped
            let write = if p.check {
                let try_setter = format_ident!("try_set_{}", base);
                let doc = format!("Checked assignment of `{name}`; stores nothing on error.");

                quote! {
                    #[doc = #doc]
                    #vis fn #try_setter(
                        &mut self,
                        proposal: impl ::core::convert::Into<#value_ty>,
                    ) -> ::core::result::Result<&#value_ty, <Self as #krate::Check<#path>>::Error> {
                        #krate::try_assign::<#path>(self, ::core::convert::Into::into(proposal))
                    }
                }
            } else {
                let setter = format_ident!("set_{}", base);
                let doc = format!("Validated assignment of `{name}`; returns the stored value.");

                quote! {
                    #[doc = #doc]
                    #vis fn #setter(&mut self, proposal: impl ::core::convert::Into<#value_ty>) -> &#value_ty {
                        #krate::assign::<#path>(self, ::core::convert::Into::into(proposal))
                    }
                }
            };

            quote! {
                #[doc = #read_doc]
                #[must_use]
                #vis fn #getter(&self) -> &#value_ty {
                    #krate::read::<#path>(self)
                }

                #write

                #[doc = #with_doc]
                #[must_use]
                #vis fn #builder(self, value: impl ::core::convert::Into<#value_ty>) -> Self {
                    #krate::fluent::<#path>(self, ::core::convert::Into::into(value))
                }
            }
        });

        quote! {
            #[allow(dead_code)]
            impl #ident {
                #(#methods)*
            }
        }
    }
}

// Unsuffixed numeric literals are emitted as-is so they take the field's
// type instead of falling back to i32/f64 through `Into`.
fn is_numeric_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(_) | Lit::Float(_),
            ..
        }) => true,
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => is_numeric_literal(expr),
        Expr::Paren(ExprParen { expr, .. }) => is_numeric_literal(expr),
        _ => false,
    }
}

impl PropertyPlan {
    fn from_field(ident: Ident, field: PropertyInput) -> Result<Self, DarlingError> {
        let Some(value_ty) = property_value_type(&field.ty).cloned() else {
            return Err(DarlingError::custom(
                "observed fields must be `Property<T>`; mark plain fields with #[property(skip)]",
            )
            .with_span(&field.ty));
        };

        // a visible cell could be replaced wholesale, skipping every hook
        if !matches!(field.vis, Visibility::Inherited) {
            return Err(DarlingError::custom(
                "property fields must be private; read them through the generated getter",
            )
            .with_span(&field.vis));
        }

        let base = ident.unraw().to_string();
        let marker = format_ident!("{}", base.to_case(Case::UpperCamel));
        let name = field.name.unwrap_or(base);

        Ok(Self {
            ident,
            marker,
            name,
            value_ty,
            default: field.default.map(|arg| arg.0),
            pre: field.pre.map(|arg| arg.0),
            validate: field.validate,
            observe: field.observe,
            check: field.check,
        })
    }
}

///
/// TESTS
///
