mod error;
mod lexer;
mod parser;
mod run_script;
mod tokens;

use std::{
    collections::HashMap,
    fs,
    sync::LazyLock,
};

use run_script::evaluate_script;
use tokens::Function;

pub use error::ScriptError;

static KEYWORDS: LazyLock<HashMap<&str, Function>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    for function in [
        Function::Line,
        Function::Ident,
        Function::Scale,
        Function::Move,
        Function::Rotate,
        Function::Apply,
        Function::Display,
        Function::Save,
    ] {
        map.insert(function.keyword(), function);
    }

    map
});

pub fn run_script(path: &str) -> Result<(), ScriptError> {
    let source = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_string(),
        source,
    })?;

    run(source.lines().map(String::from).collect())
}

/// Runs an already loaded script from the top with a fresh edge list and transformation.
pub fn run(lines: Vec<String>) -> Result<(), ScriptError> {
    evaluate_script(lines)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_is_registered() {
        assert_eq!(KEYWORDS.len(), 8);
        for keyword in ["line", "ident", "scale", "move", "rotate", "apply", "display", "save"] {
            assert_eq!(KEYWORDS[keyword].keyword(), keyword);
        }
    }

    #[test]
    fn missing_script_is_an_io_error() {
        assert!(matches!(
            run_script("scripts/does_not_exist.txt"),
            Err(ScriptError::Io { .. })
        ));
    }

    #[test]
    fn empty_script_runs() {
        assert!(run(vec![]).is_ok());
    }
}
