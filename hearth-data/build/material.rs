use heck::ToPascalCase;
use proc_macro2::TokenStream;
use quote::quote;
use serde::Deserialize;

use crate::{array_to_tokenstream, ident};

#[derive(Deserialize, Clone, Debug)]
pub struct MaterialEntry {
    pub name: String,
    pub id: u16,
    pub legacy_id: u16,
    pub max_stack_size: u32,
}

pub(crate) fn build() -> TokenStream {
    println!("cargo:rerun-if-changed=../assets/materials.json");

    let materials: Vec<MaterialEntry> =
        serde_json::from_str(include_str!("../../assets/materials.json"))
            .expect("Failed to parse materials.json");

    let names: Vec<String> = materials.iter().map(|entry| entry.name.clone()).collect();
    let variants = array_to_tokenstream(&names);
    let count = materials.len();

    let mut from_name = TokenStream::new();
    let mut to_name = TokenStream::new();
    let mut to_id = TokenStream::new();
    let mut from_id = TokenStream::new();
    let mut to_legacy_id = TokenStream::new();
    let mut from_legacy_id = TokenStream::new();
    let mut max_stack_size = TokenStream::new();
    let mut all = TokenStream::new();

    for entry in &materials {
        let name = ident(entry.name.to_pascal_case());
        let key = &entry.name;
        let id = entry.id;
        let legacy_id = entry.legacy_id;
        let stack = entry.max_stack_size;

        from_name.extend(quote! { #key => Some(Self::#name), });
        to_name.extend(quote! { Self::#name => #key, });
        to_id.extend(quote! { Self::#name => #id, });
        from_id.extend(quote! { #id => Some(Self::#name), });
        to_legacy_id.extend(quote! { Self::#name => #legacy_id, });
        from_legacy_id.extend(quote! { #legacy_id => Some(Self::#name), });
        max_stack_size.extend(quote! { Self::#name => #stack, });
        all.extend(quote! { Self::#name, });
    }

    quote! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Material {
            #variants
        }

        impl Material {
            pub const COUNT: usize = #count;

            pub const ALL: [Self; #count] = [#all];

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    #from_name
                    _ => None
                }
            }

            pub const fn to_name(&self) -> &'static str {
                match self {
                    #to_name
                }
            }

            pub const fn id(&self) -> u16 {
                match self {
                    #to_id
                }
            }

            pub const fn from_id(id: u16) -> Option<Self> {
                match id {
                    #from_id
                    _ => None
                }
            }

            /// The numeric id used by deprecated API overloads.
            pub const fn legacy_id(&self) -> u16 {
                match self {
                    #to_legacy_id
                }
            }

            pub const fn from_legacy_id(id: u16) -> Option<Self> {
                match id {
                    #from_legacy_id
                    _ => None
                }
            }

            /// Default maximum stack size for this material.
            pub const fn max_stack_size(&self) -> u32 {
                match self {
                    #max_stack_size
                }
            }
        }
    }
}
