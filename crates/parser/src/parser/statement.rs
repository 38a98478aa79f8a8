use super::*;

impl Parser {
    pub(crate) fn parse_stmt(&mut self) -> ParseResult<Spanned<Stmt>> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected("a command"));
        };
        let (kind, line) = (token.kind, token.line);

        let stmt = match kind {
            TokenKind::Var => self.parse_var_decl()?,
            TokenKind::Name => self.parse_assign()?,
            TokenKind::Forward
            | TokenKind::Backward
            | TokenKind::TurnLeft
            | TokenKind::TurnRight
            | TokenKind::Goto => self.parse_move()?,
            TokenKind::PenUp
            | TokenKind::PenDown
            | TokenKind::SetColor
            | TokenKind::SetThickness => self.parse_pen()?,
            TokenKind::ClearScreen | TokenKind::SetBackground => self.parse_screen()?,
            TokenKind::SetSpeed | TokenKind::DrawCircle => self.parse_turtle()?,
            TokenKind::If => self.parse_if()?,
            TokenKind::Repeat => self.parse_repeat()?,
            TokenKind::While => self.parse_while()?,
            _ => {
                let lexeme = self.peek().map(|t| t.lexeme.as_str()).unwrap_or_default();
                return Err(ParseError::new(format!("invalid command '{}'", lexeme), line));
            }
        };
        Ok(Spanned::new(stmt, line))
    }

    // --- Simple statements ---

    /// `var <type> a, b, c;`
    fn parse_var_decl(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `var`
        let type_name = match self.peek() {
            Some(token) if token.kind.is_keyword() => {
                Spanned::new(token.lexeme.clone(), token.line)
            }
            _ => return Err(self.unexpected("a type keyword")),
        };
        self.advance();

        let mut names = vec![self.expect_name()?];
        while self.eat(TokenKind::Comma) {
            names.push(self.expect_name()?);
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::VarDecl { type_name, names })
    }

    fn parse_assign(&mut self) -> ParseResult<Stmt> {
        let target = self.expect_name()?;
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Assign { target, value })
    }

    fn parse_move(&mut self) -> ParseResult<Stmt> {
        let command = match self.advance().map(|t| t.kind) {
            Some(TokenKind::Forward) => MoveCommand::Forward,
            Some(TokenKind::Backward) => MoveCommand::Backward,
            Some(TokenKind::TurnLeft) => MoveCommand::TurnLeft,
            Some(TokenKind::TurnRight) => MoveCommand::TurnRight,
            _ => MoveCommand::Goto,
        };

        let args = if command == MoveCommand::Goto {
            self.expect(TokenKind::LParen)?;
            let x = self.parse_expr()?;
            self.expect(TokenKind::Comma)?;
            let y = self.parse_expr()?;
            self.expect(TokenKind::RParen)?;
            vec![x, y]
        } else {
            vec![self.parse_expr()?]
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Move { command, args })
    }

    fn parse_pen(&mut self) -> ParseResult<Stmt> {
        let command = match self.advance().map(|t| t.kind) {
            Some(TokenKind::PenUp) => PenCommand::PenUp,
            Some(TokenKind::PenDown) => PenCommand::PenDown,
            Some(TokenKind::SetColor) => PenCommand::SetColor,
            _ => PenCommand::SetThickness,
        };
        let arg = if command.takes_arg() {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Pen { command, arg })
    }

    fn parse_screen(&mut self) -> ParseResult<Stmt> {
        let command = match self.advance().map(|t| t.kind) {
            Some(TokenKind::ClearScreen) => ScreenCommand::ClearScreen,
            _ => ScreenCommand::SetBackground,
        };
        let arg = if command.takes_arg() {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Screen { command, arg })
    }

    fn parse_turtle(&mut self) -> ParseResult<Stmt> {
        let command = match self.advance().map(|t| t.kind) {
            Some(TokenKind::SetSpeed) => TurtleCommand::SetSpeed,
            _ => TurtleCommand::DrawCircle,
        };
        let arg = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Turtle { command, arg })
    }

    // --- Compound statements ---

    fn parse_if(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `if`
        let test = self.parse_expr()?;
        self.expect(TokenKind::Then)?;
        let body = self.parse_block(&[TokenKind::Else, TokenKind::EndIf])?;

        let else_body = if self.eat(TokenKind::Else) {
            Some(self.parse_block(&[TokenKind::EndIf])?)
        } else {
            None
        };
        self.expect(TokenKind::EndIf)?;

        Ok(Stmt::If {
            test,
            body,
            else_body,
        })
    }

    fn parse_repeat(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `repeat`
        let count = self.parse_expr()?;
        self.expect(TokenKind::Times)?;
        let body = self.parse_block(&[TokenKind::EndRepeat])?;
        self.expect(TokenKind::EndRepeat)?;
        Ok(Stmt::Repeat { count, body })
    }

    fn parse_while(&mut self) -> ParseResult<Stmt> {
        self.advance(); // consume `while`
        let test = self.parse_expr()?;
        self.expect(TokenKind::Do)?;
        let body = self.parse_block(&[TokenKind::EndWhile])?;
        self.expect(TokenKind::EndWhile)?;
        Ok(Stmt::While { test, body })
    }
}
