use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{Attribute, Data, DeriveInput, Ident};

// field types read back by value instead of by reference
const COPY_READ_TYPES: [&str; 16] = [
    "bool", "u8", "u16", "u32", "u64", "u128", "i8", "i16", "i32", "i64", "i128", "usize", "f32",
    "f64", "FloatNum", "AxisDirection",
];

#[derive(Clone, Copy)]
enum WriteStyle {
    FieldMut,
    Set,
    Reducer,
}

fn find_attr<'a>(attrs: &'a [Attribute], ident: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(ident))
}

fn should_skip(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| ["r", "w"].iter().any(|k| attr.path().is_ident(k)))
        .any(|attr| {
            let mut is_skip = false;
            let _ = attr.parse_nested_meta(|meta| {
                is_skip = meta.path.is_ident("skip");
                Ok(())
            });
            is_skip
        })
}

fn parse_attr_read(attrs: &[Attribute]) -> Option<()> {
    find_attr(attrs, "r").map(|_| ())
}

fn parse_attr_write(attrs: &[Attribute]) -> Option<WriteStyle> {
    find_attr(attrs, "w").map(|attr| {
        let mut style = WriteStyle::FieldMut;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("set") {
                style = WriteStyle::Set;
            }
            if meta.path.is_ident("reducer") {
                style = WriteStyle::Reducer;
            }
            Ok(())
        });
        style
    })
}

pub fn macro_fields(input: DeriveInput) -> TokenStream {
    let ident = input.ident;
    let generics = input.generics;

    let Data::Struct(data) = input.data else {
        return syn::Error::new(ident.span(), "Fields can only be applied to structs")
            .into_compile_error()
            .into();
    };

    let global_read = parse_attr_read(&input.attrs);
    let global_write = parse_attr_write(&input.attrs);

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let property_method = data
        .fields
        .iter()
        .filter(|field| !should_skip(&field.attrs))
        .map(|field| {
            let field_ident = field.ident.clone().unwrap();
            let ty = field.ty.clone();

            let read_as_copy = match &field.ty {
                syn::Type::Path(path) => {
                    let t = path.into_token_stream().to_string();
                    COPY_READ_TYPES.iter().any(|copy_ty| copy_ty == &t)
                }
                _ => false,
            };

            let read_method = parse_attr_read(&field.attrs).or(global_read).map(|_| {
                if read_as_copy {
                    quote!(
                        pub fn #field_ident(&self) -> #ty {
                            self.#field_ident
                        }
                    )
                } else {
                    quote!(
                        pub fn #field_ident(&self) -> &#ty {
                            &self.#field_ident
                        }
                    )
                }
            });

            let write_method = parse_attr_write(&field.attrs)
                .or(global_write)
                .map(|style| match style {
                    WriteStyle::FieldMut => {
                        let field_ident_mut =
                            Ident::new(&format!("{}_mut", field_ident), field_ident.span());
                        quote!(
                            pub fn #field_ident_mut(&mut self) -> &mut #ty {
                                &mut self.#field_ident
                            }
                        )
                    }
                    WriteStyle::Set => {
                        let set_field_ident =
                            Ident::new(&format!("set_{}", field_ident), field_ident.span());
                        quote!(
                            pub fn #set_field_ident(&mut self, value: impl Into<#ty>) -> &mut Self {
                                self.#field_ident = value.into();
                                self
                            }
                        )
                    }
                    WriteStyle::Reducer => {
                        let set_field_ident =
                            Ident::new(&format!("set_{}", field_ident), field_ident.span());
                        quote!(
                            pub fn #set_field_ident(&mut self, reducer: impl FnOnce(#ty) -> #ty) -> &mut Self {
                                self.#field_ident = reducer(core::mem::take(&mut self.#field_ident));
                                self
                            }
                        )
                    }
                });

            quote!(
                #read_method

                #write_method
            )
        });

    quote!(
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#property_method)*
        }
    )
    .into()
}
