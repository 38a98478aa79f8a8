use super::*;

impl Parser {
    /// Entry point for expression parsing.
    ///
    /// Before consuming anything, scans ahead to the next statement boundary
    /// (`;`, `then`, `do`, `times`). A comparison or logical operator in that
    /// span selects the logical grammar, otherwise the arithmetic one.
    pub fn parse_expr(&mut self) -> ParseResult<Spanned<Expr>> {
        if self.is_logical_expr() {
            self.parse_logical()
        } else {
            self.parse_arith()
        }
    }

    /// Non-consuming lookahead over `tokens[pos..]`.
    pub(crate) fn is_logical_expr(&self) -> bool {
        self.tokens[self.pos..]
            .iter()
            .take_while(|t| !t.kind.is_statement_boundary())
            .any(|t| t.kind.is_logical_operator())
    }

    // ! - +
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Spanned<Expr>> {
        let line = self.current_line();
        let op = match self.peek_kind() {
            Some(TokenKind::Bang) => UnaryOp::Not,
            Some(TokenKind::Minus) => UnaryOp::Neg,
            Some(TokenKind::Plus) => UnaryOp::Pos,
            _ => return self.parse_primary(),
        };
        self.advance();

        let depth = self.depth;
        self.descend("expression")?;
        let operand = self.parse_unary()?;
        self.depth = depth;

        Ok(match op {
            UnaryOp::Neg => negate(operand, line),
            UnaryOp::Pos => affirm(operand, line),
            UnaryOp::Not => Spanned::new(
                Expr::UnaryOp {
                    op,
                    operand: Box::new(operand),
                },
                line,
            ),
        })
    }

    fn parse_primary(&mut self) -> ParseResult<Spanned<Expr>> {
        let line = self.current_line();
        let node = match self.peek_kind() {
            Some(TokenKind::Name) => Expr::Name(self.take_lexeme()),
            Some(TokenKind::IntegerLit | TokenKind::RealLit) => Expr::Number(self.take_lexeme()),
            Some(TokenKind::StringLit) => Expr::StringLit(self.take_lexeme()),
            Some(TokenKind::True) => {
                self.advance();
                Expr::Bool(true)
            }
            Some(TokenKind::False) => {
                self.advance();
                Expr::Bool(false)
            }
            Some(TokenKind::LParen) => {
                self.advance(); // consume `(`
                let depth = self.depth;
                self.descend("expression")?;
                // The group may hold either kind of expression; in an arithmetic
                // context the lookahead already guarantees no logical tokens.
                let inner = self.parse_logical()?;
                self.expect(TokenKind::RParen)?;
                self.depth = depth;
                return Ok(inner);
            }
            _ => return Err(self.unexpected("an expression")),
        };
        Ok(Spanned::new(node, line))
    }

    fn take_lexeme(&mut self) -> String {
        self.advance().map(|t| t.lexeme).unwrap_or_default()
    }
}

/// Unary minus. On a numeric literal the sign becomes part of the literal
/// text, so `-5` stays an atomic value; anything else gets a `Neg` node.
fn negate(operand: Spanned<Expr>, line: usize) -> Spanned<Expr> {
    match operand.node {
        Expr::Number(text) => {
            let signed = match text.strip_prefix('-') {
                Some(positive) => positive.to_string(),
                None => format!("-{text}"),
            };
            Spanned::new(Expr::Number(signed), line)
        }
        node => Spanned::new(
            Expr::UnaryOp {
                op: UnaryOp::Neg,
                operand: Box::new(Spanned::new(node, operand.line)),
            },
            line,
        ),
    }
}

/// Unary plus. A no-op on a numeric literal; anything else keeps a `Pos`
/// node so the type checker still sees the operator.
fn affirm(operand: Spanned<Expr>, line: usize) -> Spanned<Expr> {
    match operand.node {
        Expr::Number(text) => Spanned::new(Expr::Number(text), operand.line),
        node => Spanned::new(
            Expr::UnaryOp {
                op: UnaryOp::Pos,
                operand: Box::new(Spanned::new(node, operand.line)),
            },
            line,
        ),
    }
}
