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

use ast::types::TypeHint;
use std::fmt;

/// Static type of a turtle-program value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DslType {
    Integer,
    Real,
    Text,
    Boolean,
}

impl DslType {
    pub fn from_type_hint(hint: TypeHint) -> DslType {
        match hint {
            TypeHint::Integer => DslType::Integer,
            TypeHint::Real => DslType::Real,
            TypeHint::Text => DslType::Text,
            TypeHint::Boolean => DslType::Boolean,
        }
    }

    /// Returns `true` for `integer` and `real`.
    pub fn is_numeric(self) -> bool {
        matches!(self, DslType::Integer | DslType::Real)
    }

    /// Numeric promotion: integer op integer → integer, any real operand → real.
    /// `None` if either side is not numeric.
    pub fn numeric_promote(self, other: DslType) -> Option<DslType> {
        match (self, other) {
            (DslType::Integer, DslType::Integer) => Some(DslType::Integer),
            (DslType::Real, DslType::Real)
            | (DslType::Integer, DslType::Real)
            | (DslType::Real, DslType::Integer) => Some(DslType::Real),
            _ => None,
        }
    }

    /// Equal types, or integer and real in either direction.
    pub fn compatible_with(self, other: DslType) -> bool {
        self == other || (self.is_numeric() && other.is_numeric())
    }

    /// Canonical zero value a declaration initializes to, in target syntax.
    pub fn zero_value(self) -> &'static str {
        match self {
            DslType::Integer => "0",
            DslType::Real => "0.0",
            DslType::Text => "\"\"",
            DslType::Boolean => "False",
        }
    }
}

impl fmt::Display for DslType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DslType::Integer => "integer",
            DslType::Real => "real",
            DslType::Text => "text",
            DslType::Boolean => "boolean",
        };
        f.write_str(name)
    }
}
