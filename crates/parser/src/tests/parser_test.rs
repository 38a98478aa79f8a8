/*
 * Copyright (c) 2026. Mikhail Kulik.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use ast::expr::Expr;
use ast::op::*;
use ast::stmt::*;
use ast::Program;

use crate::lexer::tokenize;
use crate::parser::{parse, ParseError, Parser, MAX_NESTING};

fn parse_src(source: &str) -> Program {
    let tokens = tokenize(source).expect("tokenize failed");
    parse(tokens).expect("parse failed")
}

fn parse_err(source: &str) -> ParseError {
    let tokens = tokenize(source).expect("tokenize failed");
    parse(tokens).expect_err("parse should fail")
}

fn wrap(body: &str) -> String {
    format!("program-start\n{body}\nprogram-end")
}

/// Parse the value of `x = <expr>;` inside a program.
fn parse_value(expr: &str) -> Expr {
    let m = parse_src(&wrap(&format!("x = {expr};")));
    match &m.body[0].node {
        Stmt::Assign { value, .. } => value.node.clone(),
        other => panic!("expected Assign, got {:?}", other),
    }
}

#[test]
fn test_empty_program() {
    let m = parse_src("program-start program-end");
    assert!(m.body.is_empty());
}

#[test]
fn test_declaration_and_assignment() {
    let m = parse_src(&wrap("var integer x, y;\nx = 5;"));
    assert_eq!(m.body.len(), 2);
    match &m.body[0].node {
        Stmt::VarDecl { type_name, names } => {
            assert_eq!(type_name.node, "integer");
            assert_eq!(names, &vec!["x".to_string(), "y".to_string()]);
        }
        other => panic!("expected VarDecl, got {:?}", other),
    }
    match &m.body[1].node {
        Stmt::Assign { target, value } => {
            assert_eq!(target, "x");
            assert_eq!(value.node, Expr::Number("5".into()));
        }
        other => panic!("expected Assign, got {:?}", other),
    }
    assert_eq!(m.body[1].line, 3);
}

#[test]
fn test_declaration_accepts_any_keyword_as_type_word() {
    let m = parse_src(&wrap("var forward x;"));
    match &m.body[0].node {
        Stmt::VarDecl { type_name, .. } => assert_eq!(type_name.node, "forward"),
        other => panic!("expected VarDecl, got {:?}", other),
    }
}

#[test]
fn test_declaration_rejects_identifier_type() {
    let err = parse_err(&wrap("var int x;"));
    assert!(err.message.contains("type keyword"), "message was {}", err.message);
}

#[test]
fn test_commands() {
    let m = parse_src(&wrap(
        "forward 10; turn-right 90; goto(1, 2); pen-up; set-color \"red\"; \
         clear-screen; set-background 'white'; set-speed 5; draw-circle 3.5;",
    ));
    assert_eq!(m.body.len(), 9);
    match &m.body[2].node {
        Stmt::Move { command, args } => {
            assert_eq!(*command, MoveCommand::Goto);
            assert_eq!(args.len(), 2);
        }
        other => panic!("expected Move, got {:?}", other),
    }
    match &m.body[3].node {
        Stmt::Pen { command, arg } => {
            assert_eq!(*command, PenCommand::PenUp);
            assert!(arg.is_none());
        }
        other => panic!("expected Pen, got {:?}", other),
    }
    match &m.body[6].node {
        Stmt::Screen { command, arg: Some(arg) } => {
            assert_eq!(*command, ScreenCommand::SetBackground);
            assert_eq!(arg.node, Expr::StringLit("'white'".into()));
        }
        other => panic!("expected Screen with arg, got {:?}", other),
    }
    match &m.body[8].node {
        Stmt::Turtle { command, arg } => {
            assert_eq!(*command, TurtleCommand::DrawCircle);
            assert_eq!(arg.node, Expr::Number("3.5".into()));
        }
        other => panic!("expected Turtle, got {:?}", other),
    }
}

#[test]
fn test_if_else() {
    let src = wrap(
        "if x > 0 then
            forward 1;
        else
            backward 1;
            pen-down;
        end-if",
    );
    let m = parse_src(&src);
    match &m.body[0].node {
        Stmt::If {
            test,
            body,
            else_body,
        } => {
            assert!(matches!(test.node, Expr::Compare { op: CmpOp::Gt, .. }));
            assert_eq!(body.len(), 1);
            assert_eq!(else_body.as_ref().map(Vec::len), Some(2));
        }
        other => panic!("expected If, got {:?}", other),
    }
}

#[test]
fn test_nested_if_inside_then_block() {
    let src = wrap(
        "if a then
            if b then forward 1; else forward 2; end-if
        else
            forward 3;
        end-if",
    );
    let m = parse_src(&src);
    match &m.body[0].node {
        Stmt::If { body, else_body, .. } => {
            assert!(matches!(body[0].node, Stmt::If { else_body: Some(_), .. }));
            assert_eq!(else_body.as_ref().map(Vec::len), Some(1));
        }
        other => panic!("expected If, got {:?}", other),
    }
}

#[test]
fn test_repeat_and_while() {
    let m = parse_src(&wrap(
        "repeat 4 times forward 10; turn-right 90; end-repeat
         while n < 3 do n = n + 1; end-while",
    ));
    match &m.body[0].node {
        Stmt::Repeat { count, body } => {
            assert_eq!(count.node, Expr::Number("4".into()));
            assert_eq!(body.len(), 2);
        }
        other => panic!("expected Repeat, got {:?}", other),
    }
    match &m.body[1].node {
        Stmt::While { test, body } => {
            assert!(matches!(test.node, Expr::Compare { op: CmpOp::Lt, .. }));
            assert_eq!(body.len(), 1);
        }
        other => panic!("expected While, got {:?}", other),
    }
}

#[test]
fn test_arithmetic_precedence() {
    // 1 + 2 * 3 => 1 + (2 * 3)
    match parse_value("1 + 2 * 3") {
        Expr::BinOp { op, right, .. } => {
            assert_eq!(op, BinOp::Add);
            assert!(matches!(right.node, Expr::BinOp { op: BinOp::Mul, .. }));
        }
        other => panic!("expected BinOp, got {:?}", other),
    }
}

#[test]
fn test_arithmetic_left_associative() {
    // 10 - 4 - 3 => (10 - 4) - 3
    match parse_value("10 - 4 - 3") {
        Expr::BinOp { op, left, right } => {
            assert_eq!(op, BinOp::Sub);
            assert!(matches!(left.node, Expr::BinOp { op: BinOp::Sub, .. }));
            assert_eq!(right.node, Expr::Number("3".into()));
        }
        other => panic!("expected BinOp, got {:?}", other),
    }
}

#[test]
fn test_parentheses_group() {
    match parse_value("(2 + 3) * 4") {
        Expr::BinOp { op, left, .. } => {
            assert_eq!(op, BinOp::Mul);
            assert!(matches!(left.node, Expr::BinOp { op: BinOp::Add, .. }));
        }
        other => panic!("expected BinOp, got {:?}", other),
    }
}

#[test]
fn test_modulo() {
    assert!(matches!(parse_value("n % 2"), Expr::BinOp { op: BinOp::Mod, .. }));
}

#[test]
fn test_logical_operators_share_one_level() {
    // a || b && c => (a || b) && c
    match parse_value("a || b && c") {
        Expr::Logical { op, left, .. } => {
            assert_eq!(op, LogicOp::And);
            assert!(matches!(left.node, Expr::Logical { op: LogicOp::Or, .. }));
        }
        other => panic!("expected Logical, got {:?}", other),
    }
}

#[test]
fn test_comparison_binds_tighter_than_logical() {
    match parse_value("x + 1 > 2 && !done") {
        Expr::Logical { left, right, .. } => {
            match &left.node {
                Expr::Compare { left, op, .. } => {
                    assert_eq!(*op, CmpOp::Gt);
                    assert!(matches!(left.node, Expr::BinOp { op: BinOp::Add, .. }));
                }
                other => panic!("expected Compare, got {:?}", other),
            }
            assert!(matches!(right.node, Expr::UnaryOp { op: UnaryOp::Not, .. }));
        }
        other => panic!("expected Logical, got {:?}", other),
    }
}

#[test]
fn test_comparison_does_not_chain() {
    let err = parse_err(&wrap("x = 1 < y < 3;"));
    assert!(err.message.contains("';'"), "message was {}", err.message);
}

#[test]
fn test_negative_literal_folds() {
    assert_eq!(parse_value("-5"), Expr::Number("-5".into()));
    assert_eq!(parse_value("--5"), Expr::Number("5".into()));
    assert_eq!(parse_value("+2.5"), Expr::Number("2.5".into()));
}

#[test]
fn test_unary_plus_on_name_is_kept() {
    match parse_value("+a") {
        Expr::UnaryOp { op, operand } => {
            assert_eq!(op, UnaryOp::Pos);
            assert_eq!(operand.node, Expr::Name("a".into()));
        }
        other => panic!("expected UnaryOp, got {:?}", other),
    }
    assert!(matches!(
        parse_value("+true"),
        Expr::UnaryOp { op: UnaryOp::Pos, .. }
    ));
}

#[test]
fn test_negated_group_is_unary_node() {
    match parse_value("-(a + 1)") {
        Expr::UnaryOp { op, operand } => {
            assert_eq!(op, UnaryOp::Neg);
            assert!(matches!(operand.node, Expr::BinOp { op: BinOp::Add, .. }));
        }
        other => panic!("expected UnaryOp, got {:?}", other),
    }
}

#[test]
fn test_binary_minus_before_negative_literal() {
    match parse_value("x - -5") {
        Expr::BinOp { op, right, .. } => {
            assert_eq!(op, BinOp::Sub);
            assert_eq!(right.node, Expr::Number("-5".into()));
        }
        other => panic!("expected BinOp, got {:?}", other),
    }
}

#[test]
fn test_logical_lookahead_stops_at_boundary() {
    let tokens = tokenize("x + 1; y == 2;").unwrap();
    let parser = Parser::new(tokens);
    assert!(!parser.is_logical_expr());

    let tokens = tokenize("a && b then forward 1;").unwrap();
    let parser = Parser::new(tokens);
    assert!(parser.is_logical_expr());
}

#[test]
fn test_lookahead_does_not_consume() {
    let tokens = tokenize("1 + 2;").unwrap();
    let mut parser = Parser::new(tokens);
    assert!(!parser.is_logical_expr());
    let expr = parser.parse_expr().unwrap();
    assert!(matches!(expr.node, Expr::BinOp { op: BinOp::Add, .. }));
}

#[test]
fn test_missing_semicolon_reports_line() {
    let err = parse_err("program-start\nforward 10\nprogram-end");
    assert_eq!(err.line, 3);
    assert!(err.message.contains("expected ';'"), "message was {}", err.message);
}

#[test]
fn test_unexpected_end_of_input() {
    let err = parse_err("program-start repeat 3 times forward 1;");
    assert!(err.message.contains("unexpected end of input"), "message was {}", err.message);
}

#[test]
fn test_invalid_command() {
    let err = parse_err(&wrap("times;"));
    assert!(err.message.contains("invalid command 'times'"), "message was {}", err.message);
}

#[test]
fn test_tokens_after_program_end() {
    let err = parse_err("program-start program-end forward 1;");
    assert!(err.message.contains("after 'program-end'"), "message was {}", err.message);
}

#[test]
fn test_missing_program_start() {
    let err = parse_err("forward 1; program-end");
    assert!(err.message.contains("'program-start'"), "message was {}", err.message);
}

#[test]
fn test_moderate_nesting_parses() {
    let expr = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert_eq!(parse_value(&expr), Expr::Number("1".into()));
}

#[test]
fn test_deep_parentheses_rejected() {
    let src = wrap(&format!("forward {}1{};", "(".repeat(10_000), ")".repeat(10_000)));
    let err = parse_err(&src);
    assert!(err.message.contains("nested too deeply"), "message was {}", err.message);
}

#[test]
fn test_deep_unary_chain_rejected() {
    let err = parse_err(&wrap(&format!("b = {}true;", "!".repeat(10_000))));
    assert!(err.message.contains("nested too deeply"), "message was {}", err.message);
}

#[test]
fn test_long_binary_chain_rejected() {
    let expr = vec!["1"; MAX_NESTING + 10].join(" + ");
    let err = parse_err(&wrap(&format!("x = {expr};")));
    assert!(err.message.contains("nested too deeply"), "message was {}", err.message);
}

#[test]
fn test_deep_blocks_rejected() {
    let levels = MAX_NESTING + 10;
    let body = format!(
        "{}forward 1;{}",
        "if a then ".repeat(levels),
        " end-if".repeat(levels)
    );
    let err = parse_err(&wrap(&body));
    assert_eq!(err.message, "block nested too deeply");
}
