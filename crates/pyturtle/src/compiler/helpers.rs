use super::*;

impl Compiler {
    /// Append one line at the current indentation level.
    pub(super) fn emit(&mut self, line: impl AsRef<str>) {
        let indent = " ".repeat(self.indent_level * INDENT_WIDTH);
        self.lines.push(format!("{}{}", indent, line.as_ref()));
    }

    /// Emit `stmts` one level deeper. An empty block gets `pass` so the
    /// enclosing Python statement stays well-formed.
    pub(super) fn compile_block(&mut self, stmts: &[Spanned<Stmt>]) {
        self.indent_level += 1;
        if stmts.is_empty() {
            self.emit("pass");
        }
        for stmt in stmts {
            self.compile_stmt(stmt);
        }
        self.indent_level -= 1;
    }

    /// Python name for a DSL variable.
    pub(super) fn var_name(name: &str) -> String {
        format!("v_{}", name)
    }

    pub(super) fn next_loop_var(&mut self) -> String {
        let var = format!("_i{}", self.loop_counter);
        self.loop_counter += 1;
        var
    }
}
