//! Unit tests for TrioError and ErrorKind

use core_types::{ErrorKind, SourcePosition, TrioError};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kinds_are_distinct() {
        assert_ne!(ErrorKind::LexError, ErrorKind::ParseError);
        assert_ne!(ErrorKind::ParseError, ErrorKind::RuntimeError);
        assert_ne!(ErrorKind::LexError, ErrorKind::RuntimeError);
    }

    #[test]
    fn test_error_kind_is_copy() {
        let kind = ErrorKind::ParseError;
        let copied = kind;
        assert_eq!(kind, copied);
    }
}

#[cfg(test)]
mod trio_error_tests {
    use super::*;

    #[test]
    fn test_display_without_position() {
        let error = TrioError::new(ErrorKind::RuntimeError, "cannot resolve variable \"x\"");
        assert_eq!(
            error.to_string(),
            "RuntimeError: cannot resolve variable \"x\""
        );
    }

    #[test]
    fn test_display_with_position() {
        let error = TrioError::new(ErrorKind::ParseError, "expected CloseParen, got EOF")
            .with_position(SourcePosition {
                line: 3,
                column: 12,
                offset: 40,
            });
        assert_eq!(
            error.to_string(),
            "ParseError: expected CloseParen, got EOF (line 3, column 12)"
        );
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TrioError::new(ErrorKind::LexError, "x").is_lex_error());
        assert!(TrioError::new(ErrorKind::ParseError, "x").is_parse_error());
        assert!(TrioError::new(ErrorKind::RuntimeError, "x").is_runtime_error());
        assert!(!TrioError::new(ErrorKind::RuntimeError, "x").is_parse_error());
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&TrioError::new(ErrorKind::LexError, "x"));
    }

    #[test]
    fn test_stack_records_functions() {
        let mut error = TrioError::new(ErrorKind::RuntimeError, "division by zero");
        error.push_frame("divide");
        assert_eq!(error.stack.len(), 1);
        assert_eq!(error.stack[0].function_name, "divide");
    }
}
