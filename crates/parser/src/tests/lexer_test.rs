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

use crate::lexer::{tokenize, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .expect("tokenize failed")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_keywords_beat_identifiers() {
    assert_eq!(
        kinds("program-start var integer x; program-end"),
        vec![
            TokenKind::ProgramStart,
            TokenKind::Var,
            TokenKind::Integer,
            TokenKind::Name,
            TokenKind::Semicolon,
            TokenKind::ProgramEnd,
        ]
    );
}

#[test]
fn test_identifier_with_keyword_prefix() {
    let tokens = tokenize("forwardness iffy").unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Name));
    assert_eq!(tokens[0].lexeme, "forwardness");
}

#[test]
fn test_hyphenated_commands() {
    assert_eq!(
        kinds("turn-left pen-up set-background draw-circle end-repeat"),
        vec![
            TokenKind::TurnLeft,
            TokenKind::PenUp,
            TokenKind::SetBackground,
            TokenKind::DrawCircle,
            TokenKind::EndRepeat,
        ]
    );
}

#[test]
fn test_hyphen_between_names_is_minus() {
    assert_eq!(
        kinds("a-b"),
        vec![TokenKind::Name, TokenKind::Minus, TokenKind::Name]
    );
}

#[test]
fn test_real_is_not_split() {
    let tokens = tokenize("3.14 42").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::RealLit);
    assert_eq!(tokens[0].lexeme, "3.14");
    assert_eq!(tokens[1].kind, TokenKind::IntegerLit);
}

#[test]
fn test_multi_char_operators() {
    assert_eq!(
        kinds("<= >= == != && || ! < > ="),
        vec![
            TokenKind::Le,
            TokenKind::Ge,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::AndAnd,
            TokenKind::OrOr,
            TokenKind::Bang,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Assign,
        ]
    );
}

#[test]
fn test_string_literals_keep_quotes() {
    let tokens = tokenize(r#""red" 'blue'"#).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::StringLit);
    assert_eq!(tokens[0].lexeme, "\"red\"");
    assert_eq!(tokens[1].lexeme, "'blue'");
}

#[test]
fn test_comments_and_whitespace_dropped() {
    assert_eq!(
        kinds("// header comment\nforward 10; // trailing\n"),
        vec![TokenKind::Forward, TokenKind::IntegerLit, TokenKind::Semicolon]
    );
}

#[test]
fn test_line_numbers() {
    let tokens = tokenize("program-start\n\n  // note\n  forward 10;\nprogram-end").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 4, 4, 4, 5]);
}

#[test]
fn test_unexpected_character() {
    let err = tokenize("forward 10;\n  x = 3 @ 4;").unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 9);
    assert!(err.message.contains('@'), "message was {}", err.message);
}

#[test]
fn test_unterminated_string_is_lexical_error() {
    let err = tokenize("set-color \"red;\nforward 1;").unwrap_err();
    assert_eq!(err.line, 1);
    assert!(err.message.contains("unterminated string"), "message was {}", err.message);
}

#[test]
fn test_logical_operator_class() {
    assert!(TokenKind::Bang.is_logical_operator());
    assert!(TokenKind::Le.is_logical_operator());
    assert!(!TokenKind::Plus.is_logical_operator());
    assert!(TokenKind::Times.is_statement_boundary());
    assert!(!TokenKind::Comma.is_statement_boundary());
}
