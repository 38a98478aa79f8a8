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

//! Python `turtle` code generator.
//!
//! Lowers a semantically valid AST into a Python script driving the standard
//! `turtle` module. The AST is assumed to have passed the type checker, so
//! nothing here reports errors.

mod commands;
mod control_flow;
mod helpers;
mod literal;
mod op;

use ast::expr::Expr;
use ast::op::*;
use ast::stmt::*;
use ast::types::TypeHint;
use ast::{Program, Spanned};
use tracing::debug;

use crate::types::DslType;

/// Sets up the drawing surface and the turtle every emitted statement drives.
pub const PREAMBLE: &str = "import turtle\n\nscreen = turtle.Screen()\nt = turtle.Turtle()\n\n";

/// Keeps the window open until the user clicks it.
pub const TRAILER: &str = "\nscreen.exitonclick()\n";

/// Spaces per nesting level.
const INDENT_WIDTH: usize = 4;

/// The code generator. Accumulates output lines while walking the AST.
///
/// ## Lowering strategy
///
/// - Every DSL variable becomes a module-level Python binding prefixed with
///   `v_`, so user names never shadow `turtle`, `screen`, `t` or Python
///   keywords.
/// - Declarations initialize to the type's zero value in place.
/// - `repeat` loops get a fresh `_i<N>` counter, numbered per compilation.
/// - Every binary expression is parenthesized.
pub struct Compiler {
    lines: Vec<String>,
    indent_level: usize,
    loop_counter: usize,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            indent_level: 0,
            loop_counter: 0,
        }
    }

    /// Compile an entire program. This is the main entry point.
    pub fn compile_program(&mut self, program: &Program) {
        for stmt in &program.body {
            self.compile_stmt(stmt);
        }
    }

    /// Finalize and produce the Python source.
    pub fn finish(self) -> String {
        let body_len: usize = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = String::with_capacity(PREAMBLE.len() + body_len + TRAILER.len());
        out.push_str(PREAMBLE);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(TRAILER);
        debug!(lines = self.lines.len(), bytes = out.len(), "generated python");
        out
    }

    fn compile_stmt(&mut self, stmt: &Spanned<Stmt>) {
        match &stmt.node {
            Stmt::VarDecl { type_name, names } => {
                // A bad type word never gets this far; skip rather than guess.
                let Some(hint) = TypeHint::from_keyword(&type_name.node) else {
                    return;
                };
                let zero = DslType::from_type_hint(hint).zero_value();
                for name in names {
                    let line = format!("{} = {}", Self::var_name(name), zero);
                    self.emit(line);
                }
            }

            Stmt::Assign { target, value } => {
                let value = self.compile_expr(&value.node);
                let line = format!("{} = {}", Self::var_name(target), value);
                self.emit(line);
            }

            Stmt::Move { command, args } => self.compile_move(*command, args),

            Stmt::Pen { command, arg } => self.compile_pen(*command, arg.as_ref()),

            Stmt::Screen { command, arg } => self.compile_screen(*command, arg.as_ref()),

            Stmt::Turtle { command, arg } => self.compile_turtle(*command, arg),

            Stmt::If {
                test,
                body,
                else_body,
            } => self.compile_if(test, body, else_body.as_deref()),

            Stmt::Repeat { count, body } => self.compile_repeat(count, body),

            Stmt::While { test, body } => self.compile_while(test, body),
        }
    }
}
