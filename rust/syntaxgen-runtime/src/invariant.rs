//! Fatal shape checks used by generated constructors and updaters.
//!
//! These certify invariants that hold for every tree built through the
//! generated factories; a failure means a corrupted or hand-built tree.

use crate::kind::{SyntaxCategory, SyntaxKind, TokenKind};
use crate::raw::RawSyntax;

#[track_caller]
pub fn assert_kind(raw: &RawSyntax, expected: SyntaxKind) {
    assert!(
        raw.kind() == expected,
        "expected syntax kind {}, found {}",
        expected,
        raw.kind()
    );
}

#[track_caller]
pub fn assert_layout_len(raw: &RawSyntax, expected: usize) {
    assert!(
        raw.num_children() == expected,
        "{} expects {} children, found {}",
        raw.kind(),
        expected,
        raw.num_children()
    );
}

#[track_caller]
pub fn assert_category(raw: &RawSyntax, expected: SyntaxCategory) {
    assert!(
        raw.category() == expected,
        "expected category {}, found {}",
        expected,
        raw.kind()
    );
}

/// Kind-only check for open token sets such as identifiers and literals.
#[track_caller]
pub fn assert_token_kind(raw: &RawSyntax, expected: TokenKind) {
    match raw.token_kind() {
        Some(kind) => assert!(
            kind == expected,
            "expected token kind {}, found {}",
            expected,
            kind
        ),
        None => panic!("expected token kind {}, found {}", expected, raw.kind()),
    }
}

/// Kind and exact spelling check for closed token sets such as keywords.
#[track_caller]
pub fn assert_token_is(raw: &RawSyntax, expected: TokenKind, spelling: &str) {
    assert_token_kind(raw, expected);
    let text = raw.token_text().unwrap_or_default();
    assert!(
        text == spelling,
        "expected token {} spelled {:?}, found {:?}",
        expected,
        spelling,
        text
    );
}
