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

mod expr;
mod binop;
mod statement;

use ast::expr::Expr;
use ast::op::*;
use ast::stmt::*;
use ast::{Program, Spanned};
use tracing::debug;

use crate::lexer::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Combined nesting of blocks, groups, unary operators and binary operator
/// chains. The checker and emitter recurse over the same tree, so this also
/// bounds their stack use.
pub const MAX_NESTING: usize = 128;

/// Parse a full token stream into a [`Program`].
pub fn parse(tokens: Vec<Token>) -> ParseResult<Program> {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program()?;
    debug!(statements = program.body.len(), "parsed program");
    Ok(program)
}

/// Recursive-descent parser over an in-memory token vector.
///
/// `pos` is the committed read position. Lookahead helpers only index past
/// it and never move it. `depth` counts the nesting levels currently open.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Opens one nesting level. Callers restore `depth` once the nested
    /// part is parsed.
    fn descend(&mut self, what: &str) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::new(
                format!("{} nested too deeply", what),
                self.current_line(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// The token at the read position, if any remain.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// Line of the next token, or of the last token once input is exhausted.
    fn current_line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|t| t.line)
            .unwrap_or(1)
    }

    /// Advances to the next token and returns it.
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Checks if the next token matches, consuming it if so.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the next token if it is `expected`, else returns an error.
    fn expect(&mut self, expected: TokenKind) -> ParseResult<Token> {
        match self.peek() {
            Some(token) if token.kind == expected => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(&expected.to_string())),
        }
    }

    /// Consume an identifier and return its text.
    fn expect_name(&mut self) -> ParseResult<String> {
        if self.check(TokenKind::Name) {
            Ok(self.advance().map(|t| t.lexeme).unwrap_or_default())
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// Error describing what was wanted against what is at the read position.
    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::new(
                format!("expected {}, found '{}'", expected, token.lexeme),
                token.line,
            ),
            None => ParseError::new(
                format!("unexpected end of input, expected {}", expected),
                self.current_line(),
            ),
        }
    }

    // --- Top-level ---

    /// `program-start stmt* program-end`, with nothing after it.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        self.expect(TokenKind::ProgramStart)?;
        let body = self.parse_block(&[TokenKind::ProgramEnd])?;
        self.expect(TokenKind::ProgramEnd)?;

        if let Some(token) = self.peek() {
            return Err(ParseError::new(
                format!("expected end of input after 'program-end', found '{}'", token.lexeme),
                token.line,
            ));
        }
        Ok(Program { body })
    }

    // --- Block ---

    /// Statements up to (not including) any of `terminators`. Running out of
    /// input is left for the caller's closing `expect` to report.
    fn parse_block(&mut self, terminators: &[TokenKind]) -> ParseResult<Vec<Spanned<Stmt>>> {
        let depth = self.depth;
        self.descend("block")?;

        let mut stmts = Vec::new();
        while let Some(kind) = self.peek_kind() {
            if terminators.contains(&kind) {
                break;
            }
            stmts.push(self.parse_stmt()?);
        }

        self.depth = depth;
        Ok(stmts)
    }
}
