use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct with exactly three component fields.
///
/// The generated code adds a `new` constructor, `to_components`, a
/// `From<Components>` conversion and an implementation of
/// `crate::models::Model` that round-trips through the generic `Color`. The
/// struct must implement `crate::color::HasSpace` for the `Model`
/// implementation to apply.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let has_derive = input.attrs.iter().any(|a| a.path().is_ident("derive"));
    if !has_derive {
        let attr = match syn::Attribute::parse_outer.parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        }) {
            Ok(attr) => attr,
            Err(err) => return err.to_compile_error().into(),
        };
        input.attrs.extend(attr);
    }

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color having this color space.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl crate::models::Model for #struct_name
        where
            Self: crate::color::HasSpace
        {
            fn to_color(&self, alpha: Option<crate::color::Component>) -> crate::color::Color {
                crate::color::Color::new(
                    <Self as crate::color::HasSpace>::SPACE,
                    if self.#field1.is_nan() { None } else { Some(self.#field1) },
                    if self.#field2.is_nan() { None } else { Some(self.#field2) },
                    if self.#field3.is_nan() { None } else { Some(self.#field3) },
                    alpha
                )
            }

            fn from_color(color: &crate::color::Color) -> Self {
                debug_assert_eq!(color.space, <Self as crate::color::HasSpace>::SPACE);
                Self::new(
                    color.c0().unwrap_or(0.0),
                    color.c1().unwrap_or(0.0),
                    color.c2().unwrap_or(0.0),
                )
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
