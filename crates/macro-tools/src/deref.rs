use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput};

pub fn macro_deref(input: DeriveInput) -> TokenStream {
    let ident = input.ident;
    let generics = input.generics;

    let Data::Struct(data) = input.data else {
        return syn::Error::new(ident.span(), "Deref can only be applied to structs")
            .into_compile_error()
            .into();
    };

    let fields: Vec<syn::Field> = data.fields.into_iter().collect();

    // the annotated field wins; a single-field struct needs no annotation
    let target = fields
        .iter()
        .find(|field| field.attrs.iter().any(|attr| attr.path().is_ident("deref")))
        .or_else(|| if fields.len() == 1 { fields.first() } else { None });

    let Some(target) = target else {
        return syn::Error::new(ident.span(), "mark one field with #[deref] when use Deref macro")
            .into_compile_error()
            .into();
    };

    let target_ty = target.ty.clone();
    let target_accessor = match target.ident.clone() {
        Some(field_ident) => quote!(#field_ident),
        None => quote!(0),
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote!(
        impl #impl_generics core::ops::Deref for #ident #ty_generics #where_clause {
            type Target = #target_ty;
            fn deref(&self) -> &Self::Target {
                &self.#target_accessor
            }
        }

        impl #impl_generics core::ops::DerefMut for #ident #ty_generics #where_clause {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.#target_accessor
            }
        }
    )
    .into()
}
