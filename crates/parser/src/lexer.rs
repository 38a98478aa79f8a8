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

//! Lexical analysis for turtle programs.
//!
//! Token rules are declared on [`TokenKind`] through the `logos` derive.
//! Reserved words are `#[token]`s, so on an equal-length match they beat the
//! identifier regex; `3.14` is one `Real` because the longer match wins over
//! `Integer`; `<=` wins over `<` for the same reason.

use logos::{Logos, Span};
use std::fmt;
use tracing::debug;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Program structure
    #[token("program-start")] ProgramStart,
    #[token("program-end")] ProgramEnd,
    #[token("var")] Var,

    // Type keywords
    #[token("integer")] Integer,
    #[token("real")] Real,
    #[token("text")] Text,
    #[token("boolean")] Boolean,

    // Boolean literals
    #[token("true")] True,
    #[token("false")] False,

    // Control flow
    #[token("if")] If,
    #[token("then")] Then,
    #[token("else")] Else,
    #[token("end-if")] EndIf,
    #[token("repeat")] Repeat,
    #[token("times")] Times,
    #[token("end-repeat")] EndRepeat,
    #[token("while")] While,
    #[token("do")] Do,
    #[token("end-while")] EndWhile,

    // Movement
    #[token("forward")] Forward,
    #[token("backward")] Backward,
    #[token("turn-left")] TurnLeft,
    #[token("turn-right")] TurnRight,
    #[token("goto")] Goto,

    // Pen
    #[token("pen-up")] PenUp,
    #[token("pen-down")] PenDown,
    #[token("set-color")] SetColor,
    #[token("set-thickness")] SetThickness,

    // Screen
    #[token("clear-screen")] ClearScreen,
    #[token("set-background")] SetBackground,

    // Turtle
    #[token("set-speed")] SetSpeed,
    #[token("draw-circle")] DrawCircle,

    // Comments run to end of line and are dropped before parsing
    #[regex(r"//[^\n]*")]
    Comment,

    #[regex(r#""[^"]*""#)]
    #[regex(r#"'[^']*'"#)]
    StringLit,

    #[regex(r"[0-9]+\.[0-9]+")]
    RealLit,

    #[regex(r"[0-9]+")]
    IntegerLit,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Name,

    // Comparison / logical operators
    #[token("==")] Eq,
    #[token("!=")] NotEq,
    #[token("<=")] Le,
    #[token(">=")] Ge,
    #[token("<")] Lt,
    #[token(">")] Gt,
    #[token("&&")] AndAnd,
    #[token("||")] OrOr,
    #[token("!")] Bang,

    // Arithmetic
    #[token("+")] Plus,
    #[token("-")] Minus,
    #[token("*")] Star,
    #[token("/")] Slash,
    #[token("%")] Percent,

    #[token("=")] Assign,

    // Punctuation
    #[token("(")] LParen,
    #[token(")")] RParen,
    #[token(",")] Comma,
    #[token(";")] Semicolon,
}

impl TokenKind {
    /// Comparison and logical operators. Their presence before the next
    /// statement boundary is what makes the parser pick the logical grammar.
    pub fn is_logical_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Le
                | TokenKind::Ge
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::AndAnd
                | TokenKind::OrOr
                | TokenKind::Bang
        )
    }

    /// Tokens that close the expression of a statement header or a simple statement.
    pub fn is_statement_boundary(self) -> bool {
        matches!(
            self,
            TokenKind::Semicolon | TokenKind::Then | TokenKind::Do | TokenKind::Times
        )
    }

    pub fn is_keyword(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            ProgramStart | ProgramEnd | Var | Integer | Real | Text | Boolean | True | False
                | If | Then | Else | EndIf | Repeat | Times | EndRepeat | While | Do
                | EndWhile | Forward | Backward | TurnLeft | TurnRight | Goto | PenUp
                | PenDown | SetColor | SetThickness | ClearScreen | SetBackground
                | SetSpeed | DrawCircle
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenKind::*;
        let text = match self {
            ProgramStart => "'program-start'",
            ProgramEnd => "'program-end'",
            Var => "'var'",
            Integer => "'integer'",
            Real => "'real'",
            Text => "'text'",
            Boolean => "'boolean'",
            True => "'true'",
            False => "'false'",
            If => "'if'",
            Then => "'then'",
            Else => "'else'",
            EndIf => "'end-if'",
            Repeat => "'repeat'",
            Times => "'times'",
            EndRepeat => "'end-repeat'",
            While => "'while'",
            Do => "'do'",
            EndWhile => "'end-while'",
            Forward => "'forward'",
            Backward => "'backward'",
            TurnLeft => "'turn-left'",
            TurnRight => "'turn-right'",
            Goto => "'goto'",
            PenUp => "'pen-up'",
            PenDown => "'pen-down'",
            SetColor => "'set-color'",
            SetThickness => "'set-thickness'",
            ClearScreen => "'clear-screen'",
            SetBackground => "'set-background'",
            SetSpeed => "'set-speed'",
            DrawCircle => "'draw-circle'",
            Comment => "comment",
            StringLit => "text literal",
            RealLit => "real literal",
            IntegerLit => "integer literal",
            Name => "identifier",
            Eq => "'=='",
            NotEq => "'!='",
            Le => "'<='",
            Ge => "'>='",
            Lt => "'<'",
            Gt => "'>'",
            AndAnd => "'&&'",
            OrOr => "'||'",
            Bang => "'!'",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
            Percent => "'%'",
            Assign => "'='",
            LParen => "'('",
            RParen => "')'",
            Comma => "','",
            Semicolon => "';'",
        };
        f.write_str(text)
    }
}

/// A classified lexeme tagged with the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

/// The first character no token rule accepts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}, column {column}: {message}")]
pub struct LexError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Byte offsets of every `\n` in the source, for offset → (line, column) lookups.
struct LineIndex<'src> {
    source: &'src str,
    newlines: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    fn new(source: &'src str) -> Self {
        let newlines = source
            .char_indices()
            .filter(|&(_, ch)| ch == '\n')
            .map(|(idx, _)| idx)
            .collect();
        Self { source, newlines }
    }

    /// 1-based line of the byte at `offset`.
    fn line(&self, offset: usize) -> usize {
        self.newlines.partition_point(|&nl| nl < offset) + 1
    }

    /// 1-based column (in characters) of the byte at `offset`.
    fn column(&self, offset: usize) -> usize {
        let line_start = self.source[..offset]
            .rfind('\n')
            .map(|idx| idx + 1)
            .unwrap_or(0);
        self.source[line_start..offset].chars().count() + 1
    }
}

/// Tokenize `source`, dropping whitespace and comments.
///
/// Fails on the first character that matches no rule. An opening quote
/// without its closing partner is reported as an unterminated string.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let index = LineIndex::new(source);
    let mut tokens = Vec::new();

    for (result, span) in TokenKind::lexer(source).spanned() {
        match result {
            Ok(TokenKind::Comment) => {}
            Ok(kind) => {
                tokens.push(Token::new(kind, &source[span.clone()], index.line(span.start)));
            }
            Err(()) => return Err(lex_error(source, &index, span)),
        }
    }

    debug!(tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}

fn lex_error(source: &str, index: &LineIndex<'_>, span: Span) -> LexError {
    let offending = source[span.start..].chars().next().unwrap_or('\0');
    let message = match offending {
        '"' | '\'' => format!("unterminated string literal starting with {offending}"),
        _ => format!("unexpected character '{offending}'"),
    };
    LexError {
        message,
        line: index.line(span.start),
        column: index.column(span.start),
    }
}
