//! Cached, parent-linked wrappers over raw nodes.

use std::fmt;
use std::sync::{Arc, Weak};

use once_cell::race::OnceBox;

use crate::kind::SyntaxKind;
use crate::raw::RawSyntax;

/// Positional index of a child slot within its parent's layout.
pub type CursorIndex = usize;

/// A raw node decorated with its position in a tree and a lazily filled
/// cache of child wrappers, one cell per slot.
///
/// Linkage is fixed at construction. Child cells are published with a single
/// atomic first-writer-wins store: racing threads may each build a candidate,
/// but every caller gets back the one that was published.
pub struct SyntaxData {
    raw: Arc<RawSyntax>,
    parent: Option<Weak<SyntaxData>>,
    index_in_parent: CursorIndex,
    children: Box<[OnceBox<Arc<SyntaxData>>]>,
}

impl SyntaxData {
    pub fn make(
        raw: Arc<RawSyntax>,
        parent: Option<&Arc<SyntaxData>>,
        index_in_parent: CursorIndex,
    ) -> Arc<SyntaxData> {
        let children = (0..raw.num_children()).map(|_| OnceBox::new()).collect();
        Arc::new(SyntaxData {
            raw,
            parent: parent.map(Arc::downgrade),
            index_in_parent,
            children,
        })
    }

    pub fn raw(&self) -> &Arc<RawSyntax> {
        &self.raw
    }

    pub fn kind(&self) -> SyntaxKind {
        self.raw.kind()
    }

    /// The parent wrapper, if this node is not a root and its tree is still
    /// held by someone.
    pub fn parent(&self) -> Option<Arc<SyntaxData>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub fn index_in_parent(&self) -> CursorIndex {
        self.index_in_parent
    }

    /// The already published child wrapper at `index`, without realizing it.
    pub fn cached_child(&self, index: CursorIndex) -> Option<&Arc<SyntaxData>> {
        self.children.get(index).and_then(OnceBox::get)
    }

    /// Child wrapper at `index`, constructed on first access and cached for
    /// the life of `self`.
    #[track_caller]
    pub fn realize_child(self: &Arc<Self>, index: CursorIndex) -> Arc<SyntaxData> {
        let Some(cell) = self.children.get(index) else {
            panic!(
                "cursor {} out of range for {} with {} slots",
                index,
                self.kind(),
                self.children.len()
            );
        };
        let child = cell.get_or_init(|| {
            tracing::trace!(parent = %self.kind(), index, "realizing child");
            Box::new(SyntaxData::make(
                Arc::clone(self.raw.child(index)),
                Some(self),
                index,
            ))
        });
        Arc::clone(child)
    }

    /// Replace the raw child at `index`, rebuilding the path up to the root.
    ///
    /// Returns the new root and the wrapper standing in for `self` in the new
    /// tree. `self` and its tree are unchanged; untouched subtrees are shared.
    ///
    /// Panics if `self` was realized under a parent that has since been
    /// dropped, since the path to the root can no longer be rebuilt.
    #[track_caller]
    pub fn replace_child(
        self: &Arc<Self>,
        new_child: Arc<RawSyntax>,
        index: CursorIndex,
    ) -> (Arc<SyntaxData>, Arc<SyntaxData>) {
        let new_raw = self.raw.replace_child(index, new_child);
        match &self.parent {
            Some(weak) => {
                let Some(parent) = weak.upgrade() else {
                    panic!(
                        "cannot replace child {} of {}: its parent tree was dropped",
                        index,
                        self.kind()
                    );
                };
                let (root, new_parent) = parent.replace_child(new_raw, self.index_in_parent);
                let replacement = new_parent.realize_child(self.index_in_parent);
                (root, replacement)
            }
            None => {
                let root = SyntaxData::make(new_raw, None, 0);
                (Arc::clone(&root), root)
            }
        }
    }
}

impl fmt::Debug for SyntaxData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxData")
            .field("kind", &self.kind())
            .field("index_in_parent", &self.index_in_parent)
            .field("has_parent", &self.parent.is_some())
            .field("raw", &self.raw)
            .finish()
    }
}
