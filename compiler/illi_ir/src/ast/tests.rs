use pretty_assertions::assert_eq;

use super::*;
use crate::{Token, TokenKind};

fn number(n: f64) -> Expr {
    Expr::Literal(Literal::Number(n))
}

fn ident(name: &str) -> Token {
    Token::simple(TokenKind::Identifier, name, 1)
}

#[test]
fn binary_renders_prefix_with_nesting() {
    let mul = Expr::binary(
        number(2.0),
        BinaryOp::Mul,
        Token::simple(TokenKind::Star, "*", 1),
        number(3.0),
    );
    let add = Expr::binary(
        number(1.0),
        BinaryOp::Add,
        Token::simple(TokenKind::Plus, "+", 1),
        mul,
    );
    assert_eq!(add.to_string(), "(+ 1.0 (* 2.0 3.0))");
}

#[test]
fn conditional_comma_and_assign_render() {
    let cond = Expr::conditional(
        Expr::Literal(Literal::Bool(false)),
        Expr::Literal(Literal::Str("a".into())),
        Expr::Literal(Literal::Nil),
    );
    assert_eq!(cond.to_string(), "(?: false \"a\" nil)");

    let comma = Expr::comma(number(1.0), Expr::assign(ident("x"), number(2.0)));
    assert_eq!(comma.to_string(), "(, 1.0 (= x 2.0))");
}

#[test]
fn statements_render() {
    let vars = Stmt::Vars(vec![
        VarDecl {
            name: ident("a"),
            initializer: Some(number(1.0)),
        },
        VarDecl {
            name: ident("b"),
            initializer: None,
        },
    ]);
    let block = Stmt::Block(vec![
        vars,
        Stmt::Print(Expr::Variable { name: ident("a") }),
    ]);
    assert_eq!(block.to_string(), "(block (vars (var a 1.0) (var b)) (print a))");
}

#[test]
fn operator_tags_map_from_tokens() {
    assert_eq!(BinaryOp::from_token_kind(TokenKind::Slash), Some(BinaryOp::Div));
    assert_eq!(BinaryOp::from_token_kind(TokenKind::BangEqual), Some(BinaryOp::NotEq));
    assert_eq!(BinaryOp::from_token_kind(TokenKind::Bang), None);
    assert_eq!(UnaryOp::from_token_kind(TokenKind::Bang), Some(UnaryOp::Not));
    assert_eq!(UnaryOp::from_token_kind(TokenKind::Plus), None);
}

const DEEP: usize = 100_000;

#[test]
fn deep_grouping_drops() {
    let mut expr = number(1.0);
    for _ in 0..DEEP {
        expr = Expr::grouping(expr);
    }
    drop(expr);
}

#[test]
fn long_unary_chain_drops() {
    let minus = Token::simple(TokenKind::Minus, "-", 1);
    let mut expr = number(1.0);
    for _ in 0..2 * DEEP {
        expr = Expr::unary(UnaryOp::Neg, minus.clone(), expr);
    }
    drop(expr);
}

#[test]
fn deep_mixed_expression_drops() {
    let plus = Token::simple(TokenKind::Plus, "+", 1);
    let mut expr = number(0.0);
    for i in 0..DEEP {
        expr = match i % 3 {
            0 => Expr::binary(expr, BinaryOp::Add, plus.clone(), number(1.0)),
            1 => Expr::conditional(Expr::Literal(Literal::Bool(true)), expr, number(2.0)),
            _ => Expr::comma(number(3.0), Expr::assign(ident("x"), expr)),
        };
    }
    drop(expr);
}

#[test]
fn deep_blocks_drop() {
    let mut stmt = Stmt::Print(number(1.0));
    for _ in 0..DEEP {
        stmt = Stmt::Block(vec![Stmt::Expression(Expr::Variable { name: ident("a") }), stmt]);
    }
    drop(stmt);
}

#[test]
fn dropping_leaves_clones_intact() {
    let inner = Expr::grouping(Expr::unary(
        UnaryOp::Not,
        Token::simple(TokenKind::Bang, "!", 1),
        Expr::Literal(Literal::Bool(false)),
    ));
    let kept = inner.clone();
    drop(Stmt::Block(vec![Stmt::Print(inner)]));
    assert_eq!(kept.to_string(), "(group (! false))");
}
