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

//! Front end of the turtle compiler: source text to tokens, tokens to AST.
//! Both stages stop at the first error.

pub mod lexer;
pub mod parser;

#[cfg(test)]
mod tests;

pub use lexer::{tokenize, LexError, Token, TokenKind};
pub use parser::{parse, ParseError, Parser};
