use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type, Visibility};

/// Inner `T` of a `Property<T>` field type, matched on the last path
/// segment so both `Property<T>` and `observant::Property<T>` work.
pub fn property_value_type(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;
    if segment.ident != "Property" {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    match (args.args.len(), args.args.first()) {
        (1, Some(GenericArgument::Type(inner))) => Some(inner),
        _ => None,
    }
}

/// Visibility for items inside the generated marker module, widened by one
/// level so they stay reachable wherever the owner is.
pub fn nested_vis(vis: &Visibility) -> TokenStream {
    match vis {
        Visibility::Public(_) => quote!(pub),
        Visibility::Inherited => quote!(pub(super)),
        Visibility::Restricted(_) => quote!(pub(crate)),
    }
}

///
/// TESTS
///
