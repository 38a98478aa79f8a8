use super::*;

impl Parser {
    // && || (one level, left-associative)
    pub fn parse_logical(&mut self) -> ParseResult<Spanned<Expr>> {
        let line = self.current_line();
        let mut left = self.parse_comparison()?;
        // Every chained operator deepens the left spine of the tree.
        let depth = self.depth;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::AndAnd) => LogicOp::And,
                Some(TokenKind::OrOr) => LogicOp::Or,
                _ => break,
            };
            self.advance();
            self.descend("expression")?;
            let right = self.parse_comparison()?;
            left = Spanned::new(
                Expr::Logical {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                line,
            );
        }
        self.depth = depth;
        Ok(left)
    }

    // == != < <= > >= (at most one)
    fn parse_comparison(&mut self) -> ParseResult<Spanned<Expr>> {
        let line = self.current_line();
        let left = self.parse_arith()?;
        let op = match self.peek_kind() {
            Some(TokenKind::Eq) => CmpOp::Eq,
            Some(TokenKind::NotEq) => CmpOp::NotEq,
            Some(TokenKind::Lt) => CmpOp::Lt,
            Some(TokenKind::Le) => CmpOp::LtE,
            Some(TokenKind::Gt) => CmpOp::Gt,
            Some(TokenKind::Ge) => CmpOp::GtE,
            _ => return Ok(left),
        };
        self.advance();
        let right = self.parse_arith()?;
        Ok(Spanned::new(
            Expr::Compare {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            line,
        ))
    }

    // + -
    pub fn parse_arith(&mut self) -> ParseResult<Spanned<Expr>> {
        let line = self.current_line();
        let mut left = self.parse_term()?;
        let depth = self.depth;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinOp::Add,
                Some(TokenKind::Minus) => BinOp::Sub,
                _ => break,
            };
            self.advance();
            self.descend("expression")?;
            let right = self.parse_term()?;
            left = Spanned::new(
                Expr::BinOp {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                line,
            );
        }
        self.depth = depth;
        Ok(left)
    }

    // * / %
    fn parse_term(&mut self) -> ParseResult<Spanned<Expr>> {
        let line = self.current_line();
        let mut left = self.parse_unary()?;
        let depth = self.depth;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => BinOp::Mul,
                Some(TokenKind::Slash) => BinOp::Div,
                Some(TokenKind::Percent) => BinOp::Mod,
                _ => break,
            };
            self.advance();
            self.descend("expression")?;
            let right = self.parse_unary()?;
            left = Spanned::new(
                Expr::BinOp {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                line,
            );
        }
        self.depth = depth;
        Ok(left)
    }
}
