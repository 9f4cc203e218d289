//! Rust token emitters for generated node families.
//!
//! Every emitter is a pure function of one [`NodeLayout`] and returns a
//! `TokenStream`; the backend concatenates them into a document. Runtime items
//! are always reached through the configured runtime path, never through
//! `use` items, so several generated documents can share one module.

mod handle;
mod value_impl;
mod wrapper;

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syntaxgen_schema::Category;

use crate::error::GenError;
use crate::slots::{ChildSlot, NodeLayout, SlotTarget};
use crate::utils::{to_screaming_snake_case, to_snake_case};

/// Shared state for emitting one node.
pub(crate) struct NodeEmitter<'a> {
    pub layout: &'a NodeLayout,
    pub rt: &'a syn::Path,
    pub docs: bool,
    pub names: NodeNames,
}

/// Generated item names for one node, e.g. `IfStmtSyntax`, `IfStmtCursor`.
pub(crate) struct NodeNames {
    pub handle: Ident,
    pub data: Ident,
    pub cursor: Ident,
    pub api: Ident,
}

/// Generated member names for one slot.
pub(crate) struct SlotNames {
    pub variant: Ident,
    pub getter: Ident,
    pub setter: Ident,
    pub param: Ident,
}

impl<'a> NodeEmitter<'a> {
    pub fn new(layout: &'a NodeLayout, rt: &'a syn::Path, docs: bool) -> Self {
        let name = &layout.name;
        Self {
            layout,
            rt,
            docs,
            names: NodeNames {
                handle: format_ident!("{}Syntax", name),
                data: format_ident!("{}SyntaxData", name),
                cursor: format_ident!("{}Cursor", name),
                api: format_ident!("{}SyntaxApi", name),
            },
        }
    }

    pub fn declaration(&self) -> Result<TokenStream, GenError> {
        tracing::debug!(node = %self.layout.name, slots = self.layout.arity(), "emitting declarations");
        let cursor = handle::emit_cursor(self);
        let handle = handle::emit_handle(self);
        let api = handle::emit_api(self);
        let wrapper = wrapper::emit_wrapper_decl(self);
        Ok(quote! {
            #cursor
            #handle
            #api
            #wrapper
        })
    }

    pub fn definition(&self) -> Result<TokenStream, GenError> {
        tracing::debug!(node = %self.layout.name, slots = self.layout.arity(), "emitting definitions");
        let wrapper = wrapper::emit_wrapper_impl(self)?;
        let handle = value_impl::emit_handle_impl(self);
        let api = value_impl::emit_api_impl(self);
        let upcast = value_impl::emit_upcast(self);
        Ok(quote! {
            #wrapper
            #handle
            #api
            #upcast
        })
    }

    pub fn slots(&self) -> &[ChildSlot] {
        &self.layout.slots
    }

    /// `#[doc = ...]` attribute, or nothing when docs are disabled.
    pub fn doc(&self, text: impl AsRef<str>) -> TokenStream {
        if !self.docs {
            return TokenStream::new();
        }
        let text = format!(" {}", text.as_ref());
        quote! { #[doc = #text] }
    }

    pub fn slot_names(&self, slot: &ChildSlot) -> SlotNames {
        let snake = to_snake_case(&slot.name);
        SlotNames {
            variant: format_ident!("{}", slot.name),
            getter: format_ident!("get_{}", snake),
            setter: format_ident!("with_{}", snake),
            param: format_ident!("new_{}", snake),
        }
    }

    /// Handle type a slot's accessor returns and its updater accepts.
    pub fn slot_handle(&self, slot: &ChildSlot) -> TokenStream {
        category_handle(self.rt, slot.category())
    }

    /// Runtime `SyntaxKind` constant expression for this node.
    pub fn kind_expr(&self) -> TokenStream {
        let rt = self.rt;
        let name = &self.layout.name;
        let category = runtime_category(rt, self.layout.category);
        quote! { #rt::SyntaxKind::new(#name, #category) }
    }

    /// Raw placeholder standing in for an absent child of `slot`.
    pub fn placeholder_expr(&self, slot: &ChildSlot) -> Result<TokenStream, GenError> {
        let rt = self.rt;
        match &slot.target {
            SlotTarget::Token(constraint) => {
                let kind = &constraint.kind;
                let text = &constraint.placeholder_text;
                Ok(quote! {
                    #rt::RawSyntax::missing_token(#rt::TokenKind::new(#kind), #text)
                })
            }
            SlotTarget::Node { .. } => {
                let missing = slot.missing_kind()?;
                let constant = format_ident!("{}", to_screaming_snake_case(missing.name()));
                Ok(quote! { #rt::RawSyntax::missing(#rt::SyntaxKind::#constant) })
            }
        }
    }

    /// Fatal check that `raw` may occupy `slot`.
    pub fn slot_check(&self, slot: &ChildSlot, raw: TokenStream) -> TokenStream {
        let rt = self.rt;
        match &slot.target {
            SlotTarget::Token(constraint) => {
                let kind = &constraint.kind;
                match &constraint.spelling {
                    Some(spelling) => quote! {
                        #rt::invariant::assert_token_is(#raw, #rt::TokenKind::new(#kind), #spelling);
                    },
                    None => quote! {
                        #rt::invariant::assert_token_kind(#raw, #rt::TokenKind::new(#kind));
                    },
                }
            }
            SlotTarget::Node { category, .. } => {
                let category = runtime_category(rt, *category);
                quote! { #rt::invariant::assert_category(#raw, #category); }
            }
        }
    }
}

/// Runtime handle type for a category, e.g. `ExprSyntax` or `TokenSyntax`.
pub(crate) fn category_handle(rt: &syn::Path, category: Category) -> TokenStream {
    let ident = format_ident!("{}Syntax", category.name());
    quote! { #rt::#ident }
}

pub(crate) fn runtime_category(rt: &syn::Path, category: Category) -> TokenStream {
    let ident = format_ident!("{}", category.name());
    quote! { #rt::SyntaxCategory::#ident }
}
