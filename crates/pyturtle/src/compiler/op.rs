use super::*;

impl Compiler {
    /// Lower an expression to Python source text.
    pub(super) fn compile_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Name(name) => Self::var_name(name),

            Expr::Number(text) => Self::compile_number(text),

            Expr::StringLit(raw) => Self::compile_string_literal(raw),

            Expr::Bool(value) => Self::compile_bool(*value).to_string(),

            Expr::UnaryOp { op, operand } => {
                format!("({}{})", unary_op_str(*op), self.compile_expr(&operand.node))
            }

            Expr::BinOp { left, op, right } => {
                self.compile_binary(&left.node, bin_op_str(*op), &right.node)
            }

            Expr::Logical { left, op, right } => {
                self.compile_binary(&left.node, logic_op_str(*op), &right.node)
            }

            Expr::Compare { left, op, right } => {
                self.compile_binary(&left.node, cmp_op_str(*op), &right.node)
            }
        }
    }

    fn compile_binary(&self, left: &Expr, op: &str, right: &Expr) -> String {
        format!("({} {} {})", self.compile_expr(left), op, self.compile_expr(right))
    }
}

fn bin_op_str(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::Mod => "%",
    }
}

fn logic_op_str(op: LogicOp) -> &'static str {
    match op {
        LogicOp::And => "and",
        LogicOp::Or => "or",
    }
}

fn cmp_op_str(op: CmpOp) -> &'static str {
    match op {
        CmpOp::Eq => "==",
        CmpOp::NotEq => "!=",
        CmpOp::Lt => "<",
        CmpOp::LtE => "<=",
        CmpOp::Gt => ">",
        CmpOp::GtE => ">=",
    }
}

/// Includes the trailing space `not` needs; `-` and `+` bind directly.
fn unary_op_str(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Neg => "-",
        UnaryOp::Pos => "+",
        UnaryOp::Not => "not ",
    }
}
