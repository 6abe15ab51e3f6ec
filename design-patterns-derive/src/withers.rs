//! Implementation of the `#[derive(Withers)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the Withers derive macro.
pub fn derive_withers_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_withers(name, generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Withers can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Withers cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_struct_withers(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let methods: Vec<TokenStream2> = named_fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref().map(|ident| (ident, &field.ty)))
                .map(|(field_name, field_type)| {
                    let method_name = format_ident!("with_{}", field_name);
                    let doc = format!(
                        " Returns a copy of this value with `{field_name}` replaced by `value`."
                    );

                    quote! {
                        #[doc = #doc]
                        #[inline]
                        #[must_use]
                        pub fn #method_name(&self, value: #field_type) -> Self
                        where
                            Self: ::core::clone::Clone,
                        {
                            let mut derived = ::core::clone::Clone::clone(self);
                            derived.#field_name = value;
                            derived
                        }
                    }
                })
                .collect();

            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Withers can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Withers cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}
