use std::sync::Arc;

use syntaxgen_nodes::runtime::{
    ExprSyntax, RawSyntax, SourcePresence, StmtSyntax, Syntax, SyntaxKind, TokenKind, TokenSyntax,
};
use syntaxgen_nodes::*;

fn keyword(kind: &'static str, text: &str) -> TokenSyntax {
    TokenSyntax::make(TokenKind::new(kind), text)
}

fn ident_expr(name: &str) -> IdentifierExprSyntax {
    IdentifierExprSyntax::make_blank().with_identifier(keyword("identifier", name))
}

#[test]
fn test_if_stmt_blank_layout() {
    let stmt = IfStmtSyntax::make_blank();
    assert!(stmt.get_if_keyword().is_none());
    assert!(stmt.get_condition().is_none());
    assert!(stmt.get_body().is_none());

    let raw = stmt.raw();
    assert_eq!(raw.kind(), IfStmtSyntax::KIND);
    assert_eq!(raw.num_children(), IfStmtCursor::COUNT);
    assert_eq!(
        **raw.child(0),
        *RawSyntax::missing_token(TokenKind::new("kw_if"), "if")
    );
    assert_eq!(**raw.child(1), *RawSyntax::missing(SyntaxKind::MISSING_EXPR));
    assert_eq!(**raw.child(2), *RawSyntax::missing(SyntaxKind::MISSING_STMT));
}

#[test]
fn test_blank_placeholders_for_every_slot_kind() {
    let decl = VariableDeclSyntax::make_blank();
    let expected = [
        RawSyntax::missing_token(TokenKind::new("kw_var"), "var"),
        RawSyntax::missing(SyntaxKind::MISSING_PATTERN),
        RawSyntax::missing_token(TokenKind::new("colon"), ":"),
        RawSyntax::missing(SyntaxKind::MISSING_TYPE),
        RawSyntax::missing_token(TokenKind::new("equal"), "="),
        RawSyntax::missing(SyntaxKind::MISSING_EXPR),
    ];
    assert_eq!(decl.raw().layout(), &expected[..]);
    assert_eq!(VariableDeclCursor::COUNT, expected.len());

    let block = CodeBlockStmtSyntax::make_blank();
    assert_eq!(
        **block.raw().child(CodeBlockStmtCursor::Statements.index()),
        *RawSyntax::missing(SyntaxKind::MISSING_SYNTAX_COLLECTION)
    );

    // Open token sets have no fixed spelling to record.
    let name = SimpleTypeIdentifierSyntax::make_blank();
    assert_eq!(
        **name.raw().child(0),
        *RawSyntax::missing_token(TokenKind::new("identifier"), "")
    );
}

#[test]
fn test_cursor_ordinals_follow_layout_fields() {
    assert_eq!(IfStmtCursor::IfKeyword.index(), 0);
    assert_eq!(IfStmtCursor::Condition.index(), 1);
    assert_eq!(IfStmtCursor::Body.index(), 2);
    assert_eq!(BinaryExprCursor::Rhs.index(), 2);
    assert_eq!(WildcardPatternCursor::COUNT, 1);
}

#[test]
fn test_update_is_local_and_leaves_receiver_unchanged() {
    let original = IfStmtSyntax::make_blank().with_if_keyword(keyword("kw_if", "if"));
    let condition = ident_expr("ready");

    let updated = original.with_condition(condition.clone().into());

    assert!(original.get_condition().is_none());
    assert!(original.raw().child(1).is_missing());

    let got = updated.get_condition().expect("condition should be present");
    assert_eq!(**got.raw(), **condition.raw());

    assert!(Arc::ptr_eq(updated.raw().child(0), original.raw().child(0)));
    assert!(Arc::ptr_eq(updated.raw().child(2), original.raw().child(2)));
    assert_eq!(updated.get_if_keyword().unwrap().text(), "if");
    assert!(updated.get_body().is_none());
}

#[test]
fn test_updating_a_child_rebuilds_the_root() {
    let loop_stmt = WhileStmtSyntax::make_blank().with_body(CodeBlockStmtSyntax::make_blank().into());
    let body = loop_stmt.get_body().expect("body should be present");
    let block = CodeBlockStmtSyntax::cast(body.into_syntax()).expect("body is a code block");
    assert_eq!(block.data().index_in_parent(), WhileStmtCursor::Body.index());

    let braced = block.with_left_brace(keyword("l_brace", "{"));

    let root = braced.root();
    assert_eq!(root.kind(), WhileStmtSyntax::KIND);
    assert!(!root.raw().child(2).child(0).is_missing());
    assert!(loop_stmt.raw().child(2).child(0).is_missing());
    assert!(Arc::ptr_eq(&braced.data().parent().unwrap(), root));
}

#[test]
fn test_accessor_realizes_child_once() {
    let stmt = ReturnStmtSyntax::make_blank().with_expression(ident_expr("x").into());
    let first = stmt.get_expression().unwrap();
    let second = stmt.get_expression().unwrap();
    assert!(Arc::ptr_eq(first.syntax().data(), second.syntax().data()));
    assert!(Arc::ptr_eq(first.syntax().root(), stmt.root()));
}

#[test]
fn test_classof_and_cast() {
    let stmt: Syntax = IfStmtSyntax::make_blank().into_syntax();
    assert!(IfStmtSyntax::classof(&stmt));
    assert!(!WhileStmtSyntax::classof(&stmt));
    assert!(WhileStmtSyntax::cast(stmt.clone()).is_none());
    assert!(IfStmtSyntax::cast(stmt).is_some());

    let upcast: StmtSyntax = ReturnStmtSyntax::make_blank().into();
    assert_eq!(upcast.kind(), ReturnStmtSyntax::KIND);
    let expr: ExprSyntax = BinaryExprSyntax::make_blank().into();
    assert!(!expr.is_missing());
}

#[test]
fn test_identifier_slot_accepts_any_spelling() {
    let op = BinaryExprSyntax::make_blank().with_operator(keyword("oper_binary", "+"));
    assert_eq!(op.get_operator().unwrap().text(), "+");
    let other = op.with_operator(keyword("oper_binary", "<<"));
    assert_eq!(other.get_operator().unwrap().text(), "<<");
}

#[test]
#[should_panic(expected = "spelled \"if\"")]
fn test_wrong_spelling_is_fatal() {
    IfStmtSyntax::make_blank().with_if_keyword(keyword("kw_if", "iff"));
}

#[test]
#[should_panic(expected = "expected token kind kw_while")]
fn test_wrong_token_kind_is_fatal() {
    WhileStmtSyntax::make_blank().with_while_keyword(keyword("kw_if", "while"));
}

#[test]
#[should_panic(expected = "expected token kind identifier")]
fn test_wrong_identifier_kind_is_fatal() {
    IdentifierExprSyntax::make_blank().with_identifier(keyword("integer_literal", "42"));
}

#[test]
#[should_panic(expected = "expects 3 children, found 2")]
fn test_constructor_checks_arity() {
    let raw = RawSyntax::make(
        IfStmtSyntax::KIND,
        vec![
            RawSyntax::missing_token(TokenKind::new("kw_if"), "if"),
            RawSyntax::missing(SyntaxKind::MISSING_EXPR),
        ],
        SourcePresence::Present,
    );
    IfStmtSyntaxData::make(raw, None, 0);
}

#[test]
#[should_panic(expected = "expected category Expr")]
fn test_constructor_checks_child_category() {
    let raw = RawSyntax::make(
        IfStmtSyntax::KIND,
        vec![
            RawSyntax::missing_token(TokenKind::new("kw_if"), "if"),
            RawSyntax::missing(SyntaxKind::MISSING_STMT),
            RawSyntax::missing(SyntaxKind::MISSING_STMT),
        ],
        SourcePresence::Present,
    );
    IfStmtSyntaxData::make(raw, None, 0);
}

#[test]
#[should_panic(expected = "expected syntax kind WhileStmt")]
fn test_constructor_checks_kind() {
    let raw = IfStmtSyntax::make_blank().raw().clone();
    WhileStmtSyntaxData::make(raw, None, 0);
}
