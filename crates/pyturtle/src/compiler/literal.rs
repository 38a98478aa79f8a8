use super::*;

impl Compiler {
    /// Python rejects decimal integers with leading zeros, so integer
    /// literals lose them (`007` → `7`, `-00` → `0`). Reals pass through.
    pub(super) fn compile_number(text: &str) -> String {
        if text.contains('.') {
            return text.to_string();
        }
        let (sign, digits) = match text.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", text),
        };
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            format!("{}{}", sign, trimmed)
        }
    }

    /// Re-emits a DSL string literal (raw lexeme, quotes included) as a
    /// double-quoted Python string. The DSL has no escapes, so every
    /// backslash is literal.
    pub(super) fn compile_string_literal(raw: &str) -> String {
        let inner = raw.get(1..raw.len().saturating_sub(1)).unwrap_or("");
        let mut out = String::with_capacity(inner.len() + 2);
        out.push('"');
        for c in inner.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                _ => out.push(c),
            }
        }
        out.push('"');
        out
    }

    pub(super) fn compile_bool(value: bool) -> &'static str {
        if value {
            "True"
        } else {
            "False"
        }
    }
}
