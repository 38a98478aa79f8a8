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

pub mod stmt;
pub mod expr;
pub mod op;
pub mod types;

use stmt::Stmt;

/// Every AST node carries the 1-based source line it started on.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub line: usize,
}

impl<T> Spanned<T> {
    pub fn new(node: T, line: usize) -> Self {
        Self { node, line }
    }
}

/// Root of a parsed turtle program: everything between `program-start` and `program-end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Spanned<Stmt>>,
}
