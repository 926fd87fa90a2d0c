use heck::ToPascalCase;
use proc_macro2::TokenStream;
use quote::quote;
use serde::Deserialize;

use crate::ident;

#[derive(Deserialize, Clone, Debug)]
pub struct InventoryTypeEntry {
    pub name: String,
    pub default_size: usize,
    pub default_title: String,
}

pub(crate) fn build() -> TokenStream {
    println!("cargo:rerun-if-changed=../assets/inventory_types.json");

    let types: Vec<InventoryTypeEntry> =
        serde_json::from_str(include_str!("../../assets/inventory_types.json"))
            .expect("Failed to parse inventory_types.json");

    let mut variants = TokenStream::new();
    let mut from_name = TokenStream::new();
    let mut to_name = TokenStream::new();
    let mut default_size = TokenStream::new();
    let mut default_title = TokenStream::new();

    for entry in &types {
        let name = ident(entry.name.to_pascal_case());
        let key = &entry.name;
        let size = entry.default_size;
        let title = &entry.default_title;

        variants.extend(quote! { #name, });
        from_name.extend(quote! { #key => Some(Self::#name), });
        to_name.extend(quote! { Self::#name => #key, });
        default_size.extend(quote! { Self::#name => #size, });
        default_title.extend(quote! { Self::#name => #title, });
    }

    quote! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum InventoryType {
            #variants
        }

        impl InventoryType {
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

            pub const fn default_size(&self) -> usize {
                match self {
                    #default_size
                }
            }

            pub const fn default_title(&self) -> &'static str {
                match self {
                    #default_title
                }
            }
        }
    }
}
