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

//! Compiler for turtle-graphics programs.
//!
//! A program goes through four stages:
//!
//! 1. [`tokenize`]: source text to tokens (stops at the first bad character)
//! 2. [`parse`]: tokens to an [`ast::Program`] (stops at the first syntax error)
//! 3. [`analyze`]: declaration and type checks (reports every error)
//! 4. [`generate`]: Python `turtle` source for a program that passed analysis
//!
//! [`compile`] runs all four and folds every failure into a [`Diagnostic`].

use std::fmt;

use thiserror::Error;
use tracing::{debug, debug_span};

pub use parser::{parse, tokenize, LexError, ParseError, Token, TokenKind};
pub use pyturtle::type_checker::{SemanticError, SymbolTable};
pub use pyturtle::{analyze, generate};

/// Pipeline stage a diagnostic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lexical,
    Syntactic,
    Semantic,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Lexical => "Lexical",
            Stage::Syntactic => "Syntax",
            Stage::Semantic => "Semantic",
        };
        f.write_str(name)
    }
}

/// A user-facing compile error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{stage} error at line {line}{}: {message}", column_suffix(.column))]
pub struct Diagnostic {
    pub stage: Stage,
    pub message: String,
    pub line: usize,
    /// Only lexical errors know their column.
    pub column: Option<usize>,
}

fn column_suffix(column: &Option<usize>) -> String {
    column.map(|c| format!(", column {}", c)).unwrap_or_default()
}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        Self {
            stage: Stage::Lexical,
            message: err.message,
            line: err.line,
            column: Some(err.column),
        }
    }
}

impl From<ParseError> for Diagnostic {
    fn from(err: ParseError) -> Self {
        Self {
            stage: Stage::Syntactic,
            message: err.message,
            line: err.line,
            column: None,
        }
    }
}

impl From<SemanticError> for Diagnostic {
    fn from(err: SemanticError) -> Self {
        Self {
            stage: Stage::Semantic,
            message: err.message,
            line: err.line,
            column: None,
        }
    }
}

/// Compile `source` to Python.
///
/// Returns the generated code and an empty list on success. On failure the
/// code is empty and the list holds the diagnostics: exactly one for a
/// lexical or syntax error, one or more for semantic errors.
pub fn compile(source: &str) -> (String, Vec<Diagnostic>) {
    let span = debug_span!("compile", source_bytes = source.len());
    let _enter = span.enter();

    match front_end(source) {
        Ok(program) => (generate(&program), Vec::new()),
        Err(diagnostics) => {
            debug!(count = diagnostics.len(), "compilation failed");
            (String::new(), diagnostics)
        }
    }
}

/// Run every stage except code generation. An empty list means the program
/// would compile.
pub fn check(source: &str) -> Vec<Diagnostic> {
    let span = debug_span!("check", source_bytes = source.len());
    let _enter = span.enter();

    front_end(source).err().unwrap_or_default()
}

fn front_end(source: &str) -> Result<ast::Program, Vec<Diagnostic>> {
    let tokens = tokenize(source).map_err(|err| vec![Diagnostic::from(err)])?;
    let program = parse(tokens).map_err(|err| vec![Diagnostic::from(err)])?;
    analyze(&program).map_err(|errs| errs.into_iter().map(Diagnostic::from).collect::<Vec<_>>())?;
    Ok(program)
}
