use std::fmt;

#[derive(Clone, Debug)]
pub struct Token {
    pub value: String,
    pub token_type: TokenType,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenType {
    Number,
    AxisOfRotation,
    FilePath,
    Identifier,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Function {
    // EDGES
    Line,

    // TRANSFORMATIONS
    Ident,
    Scale,
    Move,
    Rotate,
    Apply,

    // OUTPUT
    Display,
    Save,
}

impl Function {
    pub fn keyword(&self) -> &'static str {
        match self {
            Function::Line => "line",
            Function::Ident => "ident",
            Function::Scale => "scale",
            Function::Move => "move",
            Function::Rotate => "rotate",
            Function::Apply => "apply",
            Function::Display => "display",
            Function::Save => "save",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenType::Number => "number",
            TokenType::AxisOfRotation => "axis",
            TokenType::FilePath => "file path",
            TokenType::Identifier => "identifier",
        })
    }
}
