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

use crate::Spanned;
use crate::op::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A variable reference: `size`
    Name(String),

    /// Integer or real literal, sign folded in: `42`, `-7`, `3.14`
    Number(String),

    /// Text literal, raw lexeme including its quotes: `"red"`, `'blue'`
    StringLit(String),

    /// `true` / `false`
    Bool(bool),

    /// Unary operation: `-(a + b)`, `!done`
    UnaryOp {
        op: UnaryOp,
        operand: Box<Spanned<Expr>>,
    },

    /// Arithmetic: `a + b`, `n % 2`
    BinOp {
        left: Box<Spanned<Expr>>,
        op: BinOp,
        right: Box<Spanned<Expr>>,
    },

    /// Logical connective: `a && b`, `a || b`
    Logical {
        left: Box<Spanned<Expr>>,
        op: LogicOp,
        right: Box<Spanned<Expr>>,
    },

    /// A single, non-chaining comparison: `x < 10`
    Compare {
        left: Box<Spanned<Expr>>,
        op: CmpOp,
        right: Box<Spanned<Expr>>,
    },
}

impl Expr {
    /// Integer value of a literal written without a decimal point, e.g. `3` or `-1`.
    pub fn as_integer_literal(&self) -> Option<i64> {
        match self {
            Expr::Number(text) if !text.contains('.') => text.parse().ok(),
            _ => None,
        }
    }
}
