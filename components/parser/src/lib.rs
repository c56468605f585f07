//! Trio Parser Component
//!
//! Provides the lexer, AST definitions, recursive descent parser and a
//! source printer for the Trio scripting language.
//!
//! # Overview
//!
//! - [`Lexer`] / [`tokenize`] - Turns source text into a token stream
//! - [`Token`] / [`TokenKind`] - Tokens with their lexeme and position
//! - [`Parser`] / [`parse`] - Recursive descent parser producing a [`Program`]
//! - [`ASTNode`] - Any node the evaluator accepts
//!
//! # Example
//!
//! ```
//! use parser::{Parser, Statement};
//!
//! let mut parser = Parser::new("let x = 2 + 3 * 4;");
//! let program = parser.parse().unwrap();
//!
//! assert_eq!(program.body.len(), 1);
//! assert!(matches!(program.body[0], Statement::VariableDeclaration { .. }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;

pub use ast::{ASTNode, BinaryOperator, Expression, Program, Property, Statement};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::{parse, Parser};
