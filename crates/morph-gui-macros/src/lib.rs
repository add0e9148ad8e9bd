//! Proc-macros for morph-gui.
//!
//! - `#[derive(WithBuilders)]`: generates `with_<field>(...)` builder-style methods
//!   for each named field in a struct.
//!
//! ## Field control
//!
//! - `#[with_builders(skip)]`: no builder method for this field.
//! - `#[with_builders(some)]`: for an `Option<T>` field, the builder takes `T` and
//!   stores `Some(value)`.
//! - `#[with_builders(into)]`: the builder takes `impl Into<T>` (combines with
//!   `some`, in which case it takes `impl Into<Inner>`).
//!
//! ### Example
//! ```ignore
//! use morph_gui_macros::WithBuilders;
//!
//! #[derive(Clone, Debug, Default, WithBuilders)]
//! pub struct Config {
//!     pub height: f32,
//!     #[with_builders(some, into)]
//!     pub label: Option<String>,
//!     #[with_builders(skip)]
//!     pub debug_only: bool,
//! }
//!
//! let c = Config::default().with_height(80.0).with_label("Adult");
//! // .with_debug_only(...) is NOT generated.
//! ```

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields, GenericArgument,
    PathArguments, Type,
};

/// Derive that generates `with_<field>` builder methods for structs with named fields.
///
/// Generated methods take `self` by value (builder style) and return `Self`.
#[proc_macro_derive(WithBuilders, attributes(with_builders))]
pub fn derive_with_builders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = &input.ident;
    let generics = &input.generics;

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new(
            input.span(),
            "#[derive(WithBuilders)] only supports structs",
        )
        .to_compile_error()
        .into();
    };

    let Fields::Named(fields_named) = &data_struct.fields else {
        return syn::Error::new(
            data_struct.fields.span(),
            "#[derive(WithBuilders)] only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut methods = Vec::with_capacity(fields_named.named.len());
    for field in fields_named.named.iter() {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };

        let options = match FieldOptions::parse(field) {
            Ok(options) => options,
            Err(err) => return err.to_compile_error().into(),
        };
        if options.skip {
            continue;
        }

        let method_ident = format_ident!("with_{}", field_ident);

        let (param_ty, value_ty) = if options.some {
            let Some(inner) = option_inner(&field.ty) else {
                return syn::Error::new(
                    field.ty.span(),
                    "#[with_builders(some)] requires an Option<T> field",
                )
                .to_compile_error()
                .into();
            };
            (inner.clone(), inner)
        } else {
            (field.ty.clone(), &field.ty)
        };

        let (param, converted) = if options.into {
            (quote! { impl ::core::convert::Into<#param_ty> }, quote! { value.into() })
        } else {
            (quote! { #value_ty }, quote! { value })
        };

        let assigned = if options.some {
            quote! { ::core::option::Option::Some(#converted) }
        } else {
            converted
        };

        methods.push(quote! {
            #[inline]
            pub fn #method_ident(mut self, value: #param) -> Self {
                self.#field_ident = #assigned;
                self
            }
        });
    }

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    }
    .into()
}

#[derive(Default)]
struct FieldOptions {
    skip: bool,
    some: bool,
    into: bool,
}

impl FieldOptions {
    fn parse(field: &syn::Field) -> syn::Result<Self> {
        let mut options = FieldOptions::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("with_builders") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    options.skip = true;
                    Ok(())
                } else if meta.path.is_ident("some") {
                    options.some = true;
                    Ok(())
                } else if meta.path.is_ident("into") {
                    options.into = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `skip`, `some` or `into`"))
                }
            })?;
        }
        Ok(options)
    }
}

/// `T` for a field typed `Option<T>`
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
