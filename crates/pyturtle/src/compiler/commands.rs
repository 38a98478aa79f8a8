use super::*;

impl Compiler {
    pub(super) fn compile_move(&mut self, command: MoveCommand, args: &[Spanned<Expr>]) {
        let method = match command {
            MoveCommand::Forward => "forward",
            MoveCommand::Backward => "backward",
            MoveCommand::TurnLeft => "left",
            MoveCommand::TurnRight => "right",
            MoveCommand::Goto => "goto",
        };
        self.emit_call("t", method, args.iter().collect());
    }

    pub(super) fn compile_pen(&mut self, command: PenCommand, arg: Option<&Spanned<Expr>>) {
        let method = match command {
            PenCommand::PenUp => "penup",
            PenCommand::PenDown => "pendown",
            PenCommand::SetColor => "pencolor",
            PenCommand::SetThickness => "pensize",
        };
        self.emit_call("t", method, arg.into_iter().collect());
    }

    pub(super) fn compile_screen(&mut self, command: ScreenCommand, arg: Option<&Spanned<Expr>>) {
        let (receiver, method) = match command {
            ScreenCommand::ClearScreen => ("t", "clear"),
            ScreenCommand::SetBackground => ("screen", "bgcolor"),
        };
        self.emit_call(receiver, method, arg.into_iter().collect());
    }

    pub(super) fn compile_turtle(&mut self, command: TurtleCommand, arg: &Spanned<Expr>) {
        let method = match command {
            TurtleCommand::SetSpeed => "speed",
            TurtleCommand::DrawCircle => "circle",
        };
        self.emit_call("t", method, vec![arg]);
    }

    /// `receiver.method(arg, ...)` with positional arguments.
    fn emit_call(&mut self, receiver: &str, method: &str, args: Vec<&Spanned<Expr>>) {
        let rendered: Vec<String> = args.iter().map(|a| self.compile_expr(&a.node)).collect();
        let line = format!("{}.{}({})", receiver, method, rendered.join(", "));
        self.emit(line);
    }
}
