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

/// Type keywords accepted after `var`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeHint {
    Integer,
    Real,
    Text,
    Boolean,
}

impl TypeHint {
    pub const ALL: [TypeHint; 4] = [
        TypeHint::Integer,
        TypeHint::Real,
        TypeHint::Text,
        TypeHint::Boolean,
    ];

    /// Resolve a declaration's type word. Returns `None` for anything that
    /// is not one of the four type keywords.
    pub fn from_keyword(word: &str) -> Option<TypeHint> {
        match word {
            "integer" => Some(TypeHint::Integer),
            "real" => Some(TypeHint::Real),
            "text" => Some(TypeHint::Text),
            "boolean" => Some(TypeHint::Boolean),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            TypeHint::Integer => "integer",
            TypeHint::Real => "real",
            TypeHint::Text => "text",
            TypeHint::Boolean => "boolean",
        }
    }
}
