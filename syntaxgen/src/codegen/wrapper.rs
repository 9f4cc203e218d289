//! Wrapper declarations and definitions: constructor checks, `make`,
//! `make_blank`.

use proc_macro2::TokenStream;
use quote::quote;

use super::NodeEmitter;
use crate::error::GenError;

pub(crate) fn emit_wrapper_decl(node: &NodeEmitter<'_>) -> TokenStream {
    let rt = node.rt;
    let data = &node.names.data;
    let doc = node.doc(format!("Cached wrapper over a raw `{}` node.", node.layout.name));

    quote! {
        #doc
        #[derive(Debug, Clone)]
        pub struct #data {
            data: ::std::sync::Arc<#rt::SyntaxData>,
        }
    }
}

pub(crate) fn emit_wrapper_impl(node: &NodeEmitter<'_>) -> Result<TokenStream, GenError> {
    let rt = node.rt;
    let data = &node.names.data;
    let handle = &node.names.handle;
    let cursor = &node.names.cursor;

    let slot_checks = node.slots().iter().map(|slot| {
        let variant = node.slot_names(slot).variant;
        node.slot_check(slot, quote! { raw.child(#cursor::#variant.index()) })
    });
    let placeholders = node
        .slots()
        .iter()
        .map(|slot| node.placeholder_expr(slot))
        .collect::<Result<Vec<_>, _>>()?;

    let make_doc = node.doc(format!(
        "Wrap `raw` as a `{}` linked to `parent` at `index_in_parent`.",
        node.layout.name
    ));
    let blank_doc = node.doc("A fresh root whose every slot holds its missing placeholder.");

    Ok(quote! {
        impl #data {
            #[track_caller]
            fn validate(raw: &#rt::RawSyntax) {
                #rt::invariant::assert_kind(raw, #handle::KIND);
                #rt::invariant::assert_layout_len(raw, #cursor::COUNT);
                #(#slot_checks)*
            }

            #[track_caller]
            fn new(data: ::std::sync::Arc<#rt::SyntaxData>) -> Self {
                Self::validate(data.raw());
                Self { data }
            }

            #make_doc
            #[track_caller]
            pub fn make(
                raw: ::std::sync::Arc<#rt::RawSyntax>,
                parent: ::std::option::Option<&::std::sync::Arc<#rt::SyntaxData>>,
                index_in_parent: #rt::CursorIndex,
            ) -> Self {
                Self::new(#rt::SyntaxData::make(raw, parent, index_in_parent))
            }

            #[track_caller]
            pub fn from_data(data: ::std::sync::Arc<#rt::SyntaxData>) -> Self {
                Self::new(data)
            }

            #blank_doc
            pub fn make_blank() -> Self {
                let raw = #rt::RawSyntax::make(
                    #handle::KIND,
                    ::std::vec![#(#placeholders),*],
                    #rt::SourcePresence::Present,
                );
                Self::make(raw, ::std::option::Option::None, 0)
            }

            pub fn raw(&self) -> &::std::sync::Arc<#rt::RawSyntax> {
                self.data.raw()
            }

            pub fn data(&self) -> &::std::sync::Arc<#rt::SyntaxData> {
                &self.data
            }

            pub fn parent(&self) -> ::std::option::Option<::std::sync::Arc<#rt::SyntaxData>> {
                self.data.parent()
            }

            pub fn index_in_parent(&self) -> #rt::CursorIndex {
                self.data.index_in_parent()
            }
        }
    })
}
