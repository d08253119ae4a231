use std::{collections::VecDeque, sync::LazyLock};

use regex::Regex;
use super::tokens::{Token, TokenType};

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?x)^(?:
        (?P<Number> [+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?) |
        (?P<AxisOfRotation> [xyzXYZ]) |
        (?P<FilePath> /?(?:\./|\.\./|[A-Za-z0-9_\-.]+/)*[A-Za-z0-9_\-]+\.[A-Za-z0-9]+) |
        (?P<Identifier> \S+)
    )$").unwrap()
});

// arguments are whitespace separated so every field becomes exactly one token
pub fn tokenize_arguments(line: &str) -> VecDeque<Token> {
    line.split_whitespace()
        .map(|field| Token {
            value: field.to_string(),
            token_type: classify(field),
        })
        .collect()
}

fn classify(field: &str) -> TokenType {
    let Some(captures) = TOKEN_REGEX.captures(field) else {
        return TokenType::Identifier;
    };

    if captures.name("Number").is_some() {
        TokenType::Number
    } else if captures.name("AxisOfRotation").is_some() {
        TokenType::AxisOfRotation
    } else if captures.name("FilePath").is_some() {
        TokenType::FilePath
    } else {
        TokenType::Identifier
    }
}
