//! Handle method bodies: lazy accessors and copy-on-write updaters.

use proc_macro2::TokenStream;
use quote::quote;

use super::{category_handle, NodeEmitter};

pub(crate) fn emit_handle_impl(node: &NodeEmitter<'_>) -> TokenStream {
    let rt = node.rt;
    let handle = &node.names.handle;
    let data = &node.names.data;
    let cursor = &node.names.cursor;

    // A node without slots has nothing to replace.
    let replace_child = if node.slots().is_empty() {
        TokenStream::new()
    } else {
        quote! {
            fn replace_child(
                &self,
                new_child: ::std::sync::Arc<#rt::RawSyntax>,
                cursor: #cursor,
            ) -> Self {
                let (root, data) = self.data.data.replace_child(new_child, cursor.index());
                Self {
                    root,
                    data: #data::from_data(data),
                }
            }
        }
    };

    quote! {
        impl #handle {
            pub fn make_blank() -> Self {
                let data = #data::make_blank();
                Self {
                    root: ::std::sync::Arc::clone(data.data()),
                    data,
                }
            }

            pub fn cast(syntax: #rt::Syntax) -> ::std::option::Option<Self> {
                if !Self::classof(&syntax) {
                    return ::std::option::Option::None;
                }
                let (root, data) = syntax.into_parts();
                ::std::option::Option::Some(Self {
                    root,
                    data: #data::from_data(data),
                })
            }

            pub fn into_syntax(self) -> #rt::Syntax {
                #rt::Syntax::new(self.root, self.data.data)
            }

            pub fn raw(&self) -> &::std::sync::Arc<#rt::RawSyntax> {
                self.data.raw()
            }

            pub fn data(&self) -> &#data {
                &self.data
            }

            pub fn root(&self) -> &::std::sync::Arc<#rt::SyntaxData> {
                &self.root
            }

            #replace_child
        }
    }
}

pub(crate) fn emit_api_impl(node: &NodeEmitter<'_>) -> TokenStream {
    let handle = &node.names.handle;
    let api = &node.names.api;
    let cursor = &node.names.cursor;

    let methods = node.slots().iter().map(|slot| {
        let names = node.slot_names(slot);
        let variant = &names.variant;
        let getter = &names.getter;
        let setter = &names.setter;
        let param = &names.param;
        let ty = node.slot_handle(slot);
        // Node-typed replacements are already category-checked by their handle type.
        let check = match slot.token() {
            Some(_) => node.slot_check(slot, quote! { #param.raw() }),
            None => TokenStream::new(),
        };

        quote! {
            fn #getter(&self) -> ::std::option::Option<#ty> {
                let index = #cursor::#variant.index();
                if self.data.raw().child(index).is_missing() {
                    return ::std::option::Option::None;
                }
                ::std::option::Option::Some(#ty::from_parts(
                    ::std::sync::Arc::clone(&self.root),
                    self.data.data.realize_child(index),
                ))
            }

            fn #setter(&self, #param: #ty) -> #handle {
                #check
                self.replace_child(::std::sync::Arc::clone(#param.raw()), #cursor::#variant)
            }
        }
    });

    quote! {
        impl #api for #handle {
            #(#methods)*
        }
    }
}

/// `From<Node>` for the node's category handle.
pub(crate) fn emit_upcast(node: &NodeEmitter<'_>) -> TokenStream {
    let handle = &node.names.handle;
    let category = category_handle(node.rt, node.layout.category);

    quote! {
        impl ::std::convert::From<#handle> for #category {
            fn from(node: #handle) -> Self {
                #category::from_parts(node.root, node.data.data)
            }
        }
    }
}
