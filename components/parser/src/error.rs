//! Parser error types and helpers

use core_types::{ErrorKind, SourcePosition, TrioError};

/// Create a lex error for a character the lexer does not recognize
pub fn lex_error(character: char, position: SourcePosition) -> TrioError {
    TrioError::new(
        ErrorKind::LexError,
        format!("unknown character {:?}", character),
    )
    .with_position(position)
}

/// Create a syntax error at a given position
pub fn syntax_error(message: impl Into<String>, position: Option<SourcePosition>) -> TrioError {
    let error = TrioError::new(ErrorKind::ParseError, message);
    match position {
        Some(position) => error.with_position(position),
        None => error,
    }
}

/// Create an unexpected token error
pub fn unexpected_token(expected: &str, got: &str, position: Option<SourcePosition>) -> TrioError {
    syntax_error(format!("expected {}, got {}", expected, got), position)
}

/// Create an unterminated string literal error
pub fn unterminated_string(position: Option<SourcePosition>) -> TrioError {
    syntax_error("unterminated string literal", position)
}
