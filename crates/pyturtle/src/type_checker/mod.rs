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

//! Semantic analysis for turtle programs.
//!
//! Walks the AST once, in source order, and enforces:
//! - every variable is declared exactly once, before it is used
//! - assignments and command arguments have compatible types
//! - `if`/`while` conditions are boolean, `repeat` counts are positive integers
//!
//! Errors are collected rather than returned on first failure, so a single
//! run reports every problem in the program.

use ast::expr::Expr;
use ast::op::*;
use ast::stmt::*;
use ast::types::TypeHint;
use ast::{Program, Spanned};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::types::DslType;

/// Inclusive bounds accepted by `set-speed` when its argument is a literal.
const SPEED_RANGE: std::ops::RangeInclusive<i64> = 0..=10;

// ─── Error types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct SemanticError {
    pub message: String,
    pub line: usize,
}

impl SemanticError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

// ─── Symbol table ────────────────────────────────────────────────────────────

/// Flat, program-wide map from variable name to declared type.
///
/// Blocks do not open scopes: a declaration inside an `if` body is visible to
/// everything after it.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    variables: HashMap<String, DslType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name`. Returns `false` and leaves the table untouched if the
    /// name was already declared.
    pub fn declare(&mut self, name: &str, ty: DslType) -> bool {
        if self.variables.contains_key(name) {
            return false;
        }
        self.variables.insert(name.to_string(), ty);
        true
    }

    pub fn lookup(&self, name: &str) -> Option<DslType> {
        self.variables.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

// ─── Type checker ────────────────────────────────────────────────────────────

pub struct TypeChecker {
    symbols: SymbolTable,
    errors: Vec<SemanticError>,
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeChecker {
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
            errors: Vec::new(),
        }
    }

    /// Checks a whole program. Returns the populated symbol table, or every
    /// error found, in source order.
    pub fn check_program(mut self, program: &Program) -> Result<SymbolTable, Vec<SemanticError>> {
        self.check_block(&program.body);

        if self.errors.is_empty() {
            Ok(self.symbols)
        } else {
            Err(self.errors)
        }
    }

    fn error(&mut self, message: impl Into<String>, line: usize) {
        let err = SemanticError::new(message, line);
        debug!(line = err.line, message = %err.message, "semantic error");
        self.errors.push(err);
    }

    fn check_block(&mut self, stmts: &[Spanned<Stmt>]) {
        for stmt in stmts {
            self.check_stmt(stmt);
        }
    }

    // ─── Statement checking ──────────────────────────────────────────────

    fn check_stmt(&mut self, stmt: &Spanned<Stmt>) {
        let line = stmt.line;
        match &stmt.node {
            Stmt::VarDecl { type_name, names } => self.check_var_decl(type_name, names),

            Stmt::Assign { target, value } => self.check_assign(target, value, line),

            Stmt::Move { command, args } => self.check_move(*command, args),

            Stmt::Pen { command, arg } => match (command, arg) {
                (PenCommand::SetColor, Some(arg)) => {
                    self.expect_type(arg, DslType::Text, "argument of 'set-color'")
                }
                (PenCommand::SetThickness, Some(arg)) => {
                    self.expect_numeric(arg, "argument of 'set-thickness'")
                }
                _ => {}
            },

            Stmt::Screen { command, arg } => {
                if let (ScreenCommand::SetBackground, Some(arg)) = (command, arg) {
                    self.expect_type(arg, DslType::Text, "argument of 'set-background'");
                }
            }

            Stmt::Turtle { command, arg } => match command {
                TurtleCommand::SetSpeed => self.check_speed(arg),
                TurtleCommand::DrawCircle => self.expect_numeric(arg, "radius of 'draw-circle'"),
            },

            Stmt::If {
                test,
                body,
                else_body,
            } => {
                self.check_condition(test, "if");
                self.check_block(body);
                if let Some(else_body) = else_body {
                    self.check_block(else_body);
                }
            }

            Stmt::Repeat { count, body } => {
                self.check_repeat_count(count);
                self.check_block(body);
            }

            Stmt::While { test, body } => {
                self.check_condition(test, "while");
                self.check_block(body);
            }
        }
    }

    fn check_var_decl(&mut self, type_name: &Spanned<String>, names: &[String]) {
        let ty = match TypeHint::from_keyword(&type_name.node) {
            Some(hint) => DslType::from_type_hint(hint),
            None => {
                let expected: Vec<&str> = TypeHint::ALL.iter().map(|h| h.keyword()).collect();
                self.error(
                    format!(
                        "invalid type '{}', expected one of {}",
                        type_name.node,
                        expected.join(", ")
                    ),
                    type_name.line,
                );
                return;
            }
        };

        for name in names {
            if !self.symbols.declare(name, ty) {
                self.error(
                    format!("variable '{}' is already declared", name),
                    type_name.line,
                );
            }
        }
    }

    fn check_assign(&mut self, target: &str, value: &Spanned<Expr>, line: usize) {
        let declared = self.symbols.lookup(target);
        if declared.is_none() {
            self.error(
                format!("cannot assign to undeclared variable '{}'", target),
                line,
            );
        }

        let inferred = self.infer_expr(value);
        if let (Some(declared), Some(inferred)) = (declared, inferred) {
            if !declared.compatible_with(inferred) {
                self.error(
                    format!(
                        "cannot assign {} value to variable '{}' declared as {}",
                        inferred, target, declared
                    ),
                    line,
                );
            }
        }
    }

    fn check_move(&mut self, command: MoveCommand, args: &[Spanned<Expr>]) {
        match command {
            MoveCommand::Goto => {
                for (arg, axis) in args.iter().zip(["x", "y"]) {
                    self.expect_numeric(arg, &format!("{} coordinate of 'goto'", axis));
                }
            }
            _ => {
                for arg in args {
                    self.expect_numeric(arg, &format!("argument of '{}'", command));
                }
            }
        }
    }

    fn check_speed(&mut self, arg: &Spanned<Expr>) {
        let Some(ty) = self.infer_expr(arg) else {
            return;
        };
        if !ty.is_numeric() {
            self.error(
                format!("argument of 'set-speed' must be numeric, found {}", ty),
                arg.line,
            );
            return;
        }

        // Only integer literals are range-checked; a literal too large for
        // i64 is out of range by definition.
        if let Expr::Number(text) = &arg.node {
            if !text.contains('.') {
                let in_range = arg
                    .node
                    .as_integer_literal()
                    .is_some_and(|v| SPEED_RANGE.contains(&v));
                if !in_range {
                    self.error(
                        format!(
                            "speed must be between {} and {}, found {}",
                            SPEED_RANGE.start(),
                            SPEED_RANGE.end(),
                            text
                        ),
                        arg.line,
                    );
                }
            }
        }
    }

    fn check_repeat_count(&mut self, count: &Spanned<Expr>) {
        let Some(ty) = self.infer_expr(count) else {
            return;
        };
        if ty != DslType::Integer {
            let message = match &count.node {
                Expr::Name(name) => format!(
                    "variable '{}' used as repetition count must be integer, found {}",
                    name, ty
                ),
                _ => format!("repetition count must be integer, found {}", ty),
            };
            self.error(message, count.line);
            return;
        }

        if let Expr::Number(text) = &count.node {
            let digits = text.trim_start_matches('-');
            if text.starts_with('-') || digits.chars().all(|c| c == '0') {
                self.error(
                    format!("repetition count must be a positive integer, found {}", text),
                    count.line,
                );
            }
        }
    }

    fn check_condition(&mut self, test: &Spanned<Expr>, keyword: &str) {
        if let Some(ty) = self.infer_expr(test) {
            if ty != DslType::Boolean {
                self.error(
                    format!("condition of '{}' must be boolean, found {}", keyword, ty),
                    test.line,
                );
            }
        }
    }

    fn expect_numeric(&mut self, expr: &Spanned<Expr>, what: &str) {
        if let Some(ty) = self.infer_expr(expr) {
            if !ty.is_numeric() {
                self.error(format!("{} must be numeric, found {}", what, ty), expr.line);
            }
        }
    }

    fn expect_type(&mut self, expr: &Spanned<Expr>, expected: DslType, what: &str) {
        if let Some(ty) = self.infer_expr(expr) {
            if ty != expected {
                self.error(
                    format!("{} must be {}, found {}", what, expected, ty),
                    expr.line,
                );
            }
        }
    }

    // ─── Expression type inference ───────────────────────────────────────

    /// Infers the type of `expr`. `None` means an error has already been
    /// recorded for it and callers should not report another.
    pub(crate) fn infer_expr(&mut self, expr: &Spanned<Expr>) -> Option<DslType> {
        match &expr.node {
            Expr::Number(text) => {
                if text.contains('.') {
                    Some(DslType::Real)
                } else {
                    Some(DslType::Integer)
                }
            }

            Expr::StringLit(_) => Some(DslType::Text),

            Expr::Bool(_) => Some(DslType::Boolean),

            Expr::Name(name) => {
                let ty = self.symbols.lookup(name);
                if ty.is_none() {
                    self.error(format!("variable '{}' is not declared", name), expr.line);
                }
                ty
            }

            Expr::BinOp { left, op, right } => self.infer_binop(left, *op, right, expr.line),

            Expr::Logical { left, op, right } => {
                self.expect_boolean_operand(left, "left", &op.to_string());
                self.expect_boolean_operand(right, "right", &op.to_string());
                Some(DslType::Boolean)
            }

            Expr::UnaryOp { op, operand } => self.infer_unaryop(*op, operand),

            Expr::Compare { left, op, right } => {
                let lt = self.infer_expr(left);
                let rt = self.infer_expr(right);
                if let (Some(lt), Some(rt)) = (lt, rt) {
                    if !lt.compatible_with(rt) {
                        self.error(
                            format!("cannot compare {} with {} using '{}'", lt, rt, op),
                            expr.line,
                        );
                    }
                }
                Some(DslType::Boolean)
            }
        }
    }

    fn infer_binop(
        &mut self,
        left: &Spanned<Expr>,
        op: BinOp,
        right: &Spanned<Expr>,
        line: usize,
    ) -> Option<DslType> {
        // Infer both sides before bailing; each reports its own errors.
        let lt = self.infer_expr(left);
        let rt = self.infer_expr(right);
        let (lt, rt) = (lt?, rt?);

        match lt.numeric_promote(rt) {
            Some(_) if op == BinOp::Div => Some(DslType::Real),
            Some(result) => Some(result),
            None => {
                self.error(
                    format!("operator '{}' cannot be applied to {} and {}", op, lt, rt),
                    line,
                );
                None
            }
        }
    }

    fn infer_unaryop(&mut self, op: UnaryOp, operand: &Spanned<Expr>) -> Option<DslType> {
        let ot = self.infer_expr(operand)?;
        match op {
            UnaryOp::Neg | UnaryOp::Pos if ot.is_numeric() => Some(ot),
            UnaryOp::Neg | UnaryOp::Pos => {
                self.error(
                    format!("unary '{}' requires a numeric operand, found {}", op, ot),
                    operand.line,
                );
                None
            }
            UnaryOp::Not => {
                if ot != DslType::Boolean {
                    self.error(
                        format!("operator '!' requires a boolean operand, found {}", ot),
                        operand.line,
                    );
                }
                Some(DslType::Boolean)
            }
        }
    }

    fn expect_boolean_operand(&mut self, operand: &Spanned<Expr>, side: &str, op: &str) {
        if let Some(ty) = self.infer_expr(operand) {
            if ty != DslType::Boolean {
                self.error(
                    format!("{} operand of '{}' must be boolean, found {}", side, op, ty),
                    operand.line,
                );
            }
        }
    }
}
