use super::*;

impl Compiler {
    pub(super) fn compile_if(
        &mut self,
        test: &Spanned<Expr>,
        body: &[Spanned<Stmt>],
        else_body: Option<&[Spanned<Stmt>]>,
    ) {
        let line = format!("if {}:", self.compile_expr(&test.node));
        self.emit(line);
        self.compile_block(body);

        if let Some(else_body) = else_body {
            self.emit("else:");
            self.compile_block(else_body);
        }
    }

    pub(super) fn compile_repeat(&mut self, count: &Spanned<Expr>, body: &[Spanned<Stmt>]) {
        let var = self.next_loop_var();
        let line = format!("for {} in range(int({})):", var, self.compile_expr(&count.node));
        self.emit(line);
        self.compile_block(body);
    }

    pub(super) fn compile_while(&mut self, test: &Spanned<Expr>, body: &[Spanned<Stmt>]) {
        let line = format!("while {}:", self.compile_expr(&test.node));
        self.emit(line);
        self.compile_block(body);
    }
}
