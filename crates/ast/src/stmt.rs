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

use std::fmt;

use crate::Spanned;
use crate::expr::Expr;

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `var integer a, b;`
    ///
    /// The type word is kept as written; whether it names a real type is
    /// decided by the type checker.
    VarDecl {
        type_name: Spanned<String>,
        names: Vec<String>,
    },

    /// `x = expr;`
    Assign {
        target: String,
        value: Spanned<Expr>,
    },

    /// `forward e;`, `turn-left e;`, `goto(x, y);`
    Move {
        command: MoveCommand,
        args: Vec<Spanned<Expr>>,
    },

    /// `pen-up;`, `pen-down;`, `set-color e;`, `set-thickness e;`
    Pen {
        command: PenCommand,
        arg: Option<Spanned<Expr>>,
    },

    /// `clear-screen;`, `set-background e;`
    Screen {
        command: ScreenCommand,
        arg: Option<Spanned<Expr>>,
    },

    /// `set-speed e;`, `draw-circle e;`
    Turtle {
        command: TurtleCommand,
        arg: Spanned<Expr>,
    },

    /// ```text
    /// if test then
    ///     body
    /// else
    ///     else_body
    /// end-if
    /// ```
    If {
        test: Spanned<Expr>,
        body: Vec<Spanned<Stmt>>,
        else_body: Option<Vec<Spanned<Stmt>>>,
    },

    /// `repeat count times body end-repeat`
    Repeat {
        count: Spanned<Expr>,
        body: Vec<Spanned<Stmt>>,
    },

    /// `while test do body end-while`
    While {
        test: Spanned<Expr>,
        body: Vec<Spanned<Stmt>>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Goto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenCommand {
    PenUp,
    PenDown,
    SetColor,
    SetThickness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenCommand {
    ClearScreen,
    SetBackground,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurtleCommand {
    SetSpeed,
    DrawCircle,
}

impl MoveCommand {
    pub fn keyword(self) -> &'static str {
        match self {
            MoveCommand::Forward => "forward",
            MoveCommand::Backward => "backward",
            MoveCommand::TurnLeft => "turn-left",
            MoveCommand::TurnRight => "turn-right",
            MoveCommand::Goto => "goto",
        }
    }
}

impl PenCommand {
    pub fn keyword(self) -> &'static str {
        match self {
            PenCommand::PenUp => "pen-up",
            PenCommand::PenDown => "pen-down",
            PenCommand::SetColor => "set-color",
            PenCommand::SetThickness => "set-thickness",
        }
    }

    /// Whether the command is followed by an operand.
    pub fn takes_arg(self) -> bool {
        matches!(self, PenCommand::SetColor | PenCommand::SetThickness)
    }
}

impl ScreenCommand {
    pub fn keyword(self) -> &'static str {
        match self {
            ScreenCommand::ClearScreen => "clear-screen",
            ScreenCommand::SetBackground => "set-background",
        }
    }

    pub fn takes_arg(self) -> bool {
        matches!(self, ScreenCommand::SetBackground)
    }
}

impl TurtleCommand {
    pub fn keyword(self) -> &'static str {
        match self {
            TurtleCommand::SetSpeed => "set-speed",
            TurtleCommand::DrawCircle => "draw-circle",
        }
    }
}

macro_rules! display_keyword {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.keyword())
            }
        })*
    };
}

display_keyword!(MoveCommand, PenCommand, ScreenCommand, TurtleCommand);
