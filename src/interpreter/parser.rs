use std::collections::VecDeque;

use crate::matrix::Rotation;
use super::{
    KEYWORDS,
    error::ScriptError,
    lexer::tokenize_arguments,
    tokens::{Function, Token, TokenType},
};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Line { x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32 },
    Ident,
    Scale { a: f32, b: f32, c: f32 },
    Move { a: f32, b: f32, c: f32 },
    Rotate { axis: Rotation, degrees: f32 },
    Apply,
    Display,
    Save { file_path: String },
}

/// The argument line of one command, consumed front to back.
struct Arguments {
    function: Function,
    line: usize,
    content: String,
    stack: VecDeque<Token>,
}

impl Arguments {
    fn malformed(&self, reason: String) -> ScriptError {
        ScriptError::MalformedArguments {
            line: self.line,
            command: self.function,
            content: self.content.clone(),
            reason,
        }
    }

    fn expect_count(&self, count: usize) -> Result<(), ScriptError> {
        if self.stack.len() != count {
            return Err(self.malformed(format!("expected {} fields but found {}", count, self.stack.len())));
        }

        Ok(())
    }

    fn pop(&mut self) -> Result<Token, ScriptError> {
        match self.stack.pop_front() {
            Some(token) => Ok(token),
            None => Err(self.malformed("ran out of fields".to_string())),
        }
    }

    fn pop_f32(&mut self) -> Result<f32, ScriptError> {
        let value = self.pop_type(TokenType::Number)?;

        value.parse::<f32>().map_err(|_| self.malformed(format!("error parsing f32: {}", value)))
    }

    fn pop_type(&mut self, token_type: TokenType) -> Result<String, ScriptError> {
        let token = self.pop()?;

        if token.token_type != token_type {
            return Err(self.malformed(format!("expected a {} but found {} '{}'", token_type, token.token_type, token.value)));
        }

        Ok(token.value)
    }

    fn pop_axis(&mut self) -> Result<Rotation, ScriptError> {
        let axis = self.pop_type(TokenType::AxisOfRotation)?;

        match axis.to_lowercase().as_str() {
            "x" => Ok(Rotation::X),
            "y" => Ok(Rotation::Y),
            _ => Ok(Rotation::Z),
        }
    }
}

/// Walks a script one command at a time.
///
/// `cursor` always points at the next unread command line. A command without
/// arguments moves it by one line, a command with an argument line by two.
pub struct Parser {
    lines: Vec<String>,
    cursor: usize,
}

impl Parser {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Reads the command at the cursor, or `None` once the script is exhausted.
    pub fn next_command(&mut self) -> Result<Option<Command>, ScriptError> {
        let Some(line) = self.lines.get(self.cursor) else {
            return Ok(None);
        };

        let line = line.trim();
        let function = match KEYWORDS.get(line) {
            Some(function) => *function,
            None => {
                return Err(ScriptError::InvalidCommand {
                    line: self.cursor + 1,
                    content: line.to_string(),
                })
            }
        };

        self.cursor += 1;

        let command = match function {
            Function::Ident => Command::Ident,
            Function::Apply => Command::Apply,
            Function::Display => Command::Display,
            Function::Line => self.handle_line()?,
            Function::Scale => self.handle_scale()?,
            Function::Move => self.handle_move()?,
            Function::Rotate => self.handle_rotate()?,
            Function::Save => self.handle_save()?,
        };

        Ok(Some(command))
    }

    fn read_arguments(&mut self, function: Function) -> Result<Arguments, ScriptError> {
        let Some(content) = self.lines.get(self.cursor) else {
            // the cursor already moved past the keyword, which is on line `cursor`
            return Err(ScriptError::TruncatedScript { line: self.cursor, command: function });
        };

        let content = content.trim().to_string();
        let arguments = Arguments {
            function,
            line: self.cursor + 1,
            stack: tokenize_arguments(&content),
            content,
        };

        self.cursor += 1;

        Ok(arguments)
    }

    fn handle_line(&mut self) -> Result<Command, ScriptError> {
        let mut arguments = self.read_arguments(Function::Line)?;
        arguments.expect_count(6)?;

        let x0 = arguments.pop_f32()?;
        let y0 = arguments.pop_f32()?;
        let z0 = arguments.pop_f32()?;
        let x1 = arguments.pop_f32()?;
        let y1 = arguments.pop_f32()?;
        let z1 = arguments.pop_f32()?;

        Ok(Command::Line { x0, y0, z0, x1, y1, z1 })
    }

    fn handle_scale(&mut self) -> Result<Command, ScriptError> {
        let mut arguments = self.read_arguments(Function::Scale)?;
        arguments.expect_count(3)?;

        let a = arguments.pop_f32()?;
        let b = arguments.pop_f32()?;
        let c = arguments.pop_f32()?;

        Ok(Command::Scale { a, b, c })
    }

    fn handle_move(&mut self) -> Result<Command, ScriptError> {
        let mut arguments = self.read_arguments(Function::Move)?;
        arguments.expect_count(3)?;

        let a = arguments.pop_f32()?;
        let b = arguments.pop_f32()?;
        let c = arguments.pop_f32()?;

        Ok(Command::Move { a, b, c })
    }

    fn handle_rotate(&mut self) -> Result<Command, ScriptError> {
        let mut arguments = self.read_arguments(Function::Rotate)?;
        arguments.expect_count(2)?;

        let axis = arguments.pop_axis()?;
        let degrees = arguments.pop_f32()?;

        Ok(Command::Rotate { axis, degrees })
    }

    fn handle_save(&mut self) -> Result<Command, ScriptError> {
        let mut arguments = self.read_arguments(Function::Save)?;
        arguments.expect_count(1)?;

        let file_path = arguments.pop_type(TokenType::FilePath)?;

        Ok(Command::Save { file_path })
    }
}
