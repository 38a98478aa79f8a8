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

//! Back half of the turtle-program pipeline: semantic analysis and Python
//! `turtle` code generation over a parsed [`ast::Program`].

pub mod compiler;
pub mod type_checker;
pub mod types;

#[cfg(test)]
mod tests;

use ast::Program;
use type_checker::{SemanticError, SymbolTable, TypeChecker};

/// Run the semantic checks over a parsed program.
///
/// Returns the symbol table on success, or every semantic error found in
/// source order.
pub fn analyze(program: &Program) -> Result<SymbolTable, Vec<SemanticError>> {
    TypeChecker::new().check_program(program)
}

/// Lower a program that already passed [`analyze`] to Python source text.
pub fn generate(program: &Program) -> String {
    let mut compiler = compiler::Compiler::new();
    compiler.compile_program(program);
    compiler.finish()
}
