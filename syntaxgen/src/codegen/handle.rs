//! Handle declarations: cursor enum, handle struct, accessor/updater trait.

use proc_macro2::TokenStream;
use quote::quote;

use super::NodeEmitter;

pub(crate) fn emit_cursor(node: &NodeEmitter<'_>) -> TokenStream {
    let rt = node.rt;
    let cursor = &node.names.cursor;
    let count = node.slots().len();
    let variants: Vec<_> = node
        .slots()
        .iter()
        .map(|slot| node.slot_names(slot).variant)
        .collect();
    // Ordinals are written out so the layout is visible in the generated text.
    let arms = node.slots().iter().map(|slot| {
        let variant = node.slot_names(slot).variant;
        let ordinal = slot.ordinal;
        quote! { Self::#variant => #ordinal, }
    });
    let doc = node.doc(format!("Child slots of `{}`, in layout order.", node.layout.name));

    quote! {
        #doc
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum #cursor {
            #(#variants,)*
        }

        impl #cursor {
            pub const COUNT: usize = #count;

            pub const fn index(self) -> #rt::CursorIndex {
                match self {
                    #(#arms)*
                }
            }
        }
    }
}

pub(crate) fn emit_handle(node: &NodeEmitter<'_>) -> TokenStream {
    let rt = node.rt;
    let handle = &node.names.handle;
    let data = &node.names.data;
    let kind = node.kind_expr();
    let doc = node.doc(format!("Handle to a `{}` node.", node.layout.name));
    let classof_doc = node.doc(format!("Whether `syntax` is a `{}` node.", node.layout.name));

    quote! {
        #doc
        #[derive(Debug, Clone)]
        pub struct #handle {
            root: ::std::sync::Arc<#rt::SyntaxData>,
            data: #data,
        }

        impl #handle {
            pub const KIND: #rt::SyntaxKind = #kind;

            #classof_doc
            pub fn classof(syntax: &#rt::Syntax) -> bool {
                syntax.kind() == Self::KIND
            }
        }
    }
}

pub(crate) fn emit_api(node: &NodeEmitter<'_>) -> TokenStream {
    let handle = &node.names.handle;
    let api = &node.names.api;
    let methods = node.slots().iter().map(|slot| {
        let names = node.slot_names(slot);
        let getter = &names.getter;
        let setter = &names.setter;
        let param = &names.param;
        let ty = node.slot_handle(slot);
        let getter_doc = node.doc(format!(
            "The `{}` child, or `None` while the slot holds a missing placeholder.",
            slot.name
        ));
        let setter_doc = node.doc(format!(
            "A new tree with `{}` replaced. `self` is left unchanged.",
            slot.name
        ));
        quote! {
            #getter_doc
            fn #getter(&self) -> ::std::option::Option<#ty>;

            #setter_doc
            fn #setter(&self, #param: #ty) -> #handle;
        }
    });
    let doc = node.doc(format!("Slot accessors and updaters for `{}`.", handle));

    quote! {
        #doc
        pub trait #api {
            #(#methods)*
        }
    }
}
