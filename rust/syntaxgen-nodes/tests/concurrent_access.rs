use std::sync::{Arc, Barrier};
use std::thread;

use syntaxgen_nodes::runtime::{ExprSyntax, TokenKind, TokenSyntax};
use syntaxgen_nodes::{
    IdentifierExprSyntax, IdentifierExprSyntaxApi, IfStmtCursor, IfStmtSyntax, IfStmtSyntaxApi,
};

fn if_with_condition() -> IfStmtSyntax {
    let condition = IdentifierExprSyntax::make_blank()
        .with_identifier(TokenSyntax::make(TokenKind::new("identifier"), "ready"));
    IfStmtSyntax::make_blank().with_condition(condition.into())
}

#[test]
fn test_racing_accessors_agree() {
    for _ in 0..64 {
        let stmt = if_with_condition();
        let barrier = Barrier::new(2);

        let (a, b): (ExprSyntax, ExprSyntax) = thread::scope(|s| {
            let left = s.spawn(|| {
                barrier.wait();
                stmt.get_condition().unwrap()
            });
            let right = s.spawn(|| {
                barrier.wait();
                stmt.get_condition().unwrap()
            });
            (left.join().unwrap(), right.join().unwrap())
        });

        assert_eq!(**a.raw(), **b.raw());
        assert!(Arc::ptr_eq(a.syntax().data(), b.syntax().data()));
        let cached = stmt
            .data()
            .data()
            .cached_child(IfStmtCursor::Condition.index())
            .expect("condition should be cached");
        assert!(Arc::ptr_eq(cached, a.syntax().data()));
    }
}

#[test]
fn test_polling_reader_sees_complete_child() {
    let stmt = if_with_condition();
    let index = IfStmtCursor::Condition.index();
    let barrier = Barrier::new(3);

    thread::scope(|s| {
        let poller = s.spawn(|| {
            barrier.wait();
            for _ in 0..100_000 {
                if let Some(child) = stmt.data().data().cached_child(index) {
                    assert_eq!(child.index_in_parent(), index);
                    assert_eq!(child.raw().child(0).token_text(), Some("ready"));
                    return Some(Arc::clone(child));
                }
                std::hint::spin_loop();
            }
            None
        });
        let readers: Vec<_> = (0..2)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    stmt.get_condition().unwrap()
                })
            })
            .collect();

        let results: Vec<ExprSyntax> = readers.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(Arc::ptr_eq(results[0].syntax().data(), results[1].syntax().data()));
        if let Some(seen) = poller.join().unwrap() {
            assert!(Arc::ptr_eq(&seen, results[0].syntax().data()));
        }
    });
}
