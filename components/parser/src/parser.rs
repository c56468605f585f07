//! Recursive descent parser for Trio
//!
//! One method per grammar level, from lowest to highest binding:
//! assignment, object literal or comparison, comparison, additive,
//! multiplicative, call, member, primary. Alternatives are chosen by
//! looking at the next token only; once a production starts consuming
//! tokens it either completes or fails the whole parse.

use crate::ast::*;
use crate::error::*;
use crate::lexer::{tokenize, Token, TokenKind};
use core_types::{ensure_sufficient_stack, TrioError};

/// Trio parser
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    cursor: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            cursor: 0,
        }
    }

    /// Parse the source into a program
    pub fn parse(&mut self) -> Result<Program, TrioError> {
        self.tokens = tokenize(self.source)?;
        self.cursor = 0;

        let mut body = Vec::new();
        while !self.check(TokenKind::EOF) {
            body.push(self.parse_statement()?);
        }
        Ok(Program::new(body))
    }

    fn parse_statement(&mut self) -> Result<Statement, TrioError> {
        let kind = self.at().kind;
        ensure_sufficient_stack(|| match kind {
            TokenKind::Let | TokenKind::Const => self.parse_variable_declaration(),
            TokenKind::Fn => self.parse_function_declaration(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::For => self.parse_for_statement(),
            _ => self.parse_expression_statement(),
        })
    }

    fn parse_variable_declaration(&mut self) -> Result<Statement, TrioError> {
        let keyword = self.eat();
        let constant = keyword.kind == TokenKind::Const;
        let name = self.expect(TokenKind::Identifier)?.lexeme;

        if self.check(TokenKind::SemiColon) {
            self.eat();
            if constant {
                return Err(syntax_error(
                    format!("constant \"{}\" must be initialized", name),
                    Some(keyword.position),
                ));
            }
            return Ok(Statement::VariableDeclaration {
                name,
                constant,
                value: None,
            });
        }

        self.expect(TokenKind::Equals)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::SemiColon)?;

        Ok(Statement::VariableDeclaration {
            name,
            constant,
            value: Some(value),
        })
    }

    fn parse_function_declaration(&mut self) -> Result<Statement, TrioError> {
        self.expect(TokenKind::Fn)?;
        let name = self.expect(TokenKind::Identifier)?.lexeme;

        let position = self.at().position;
        let mut parameters = Vec::new();
        for arg in self.parse_arguments()? {
            match arg {
                Expression::Identifier(symbol) => parameters.push(symbol),
                other => {
                    return Err(syntax_error(
                        format!("parameters of \"{}\" must be identifiers, got {}", name, other),
                        Some(position),
                    ))
                }
            }
        }

        self.expect(TokenKind::OpenBrace)?;
        let body = Program::new(self.parse_block_body()?);
        self.skip_semicolon();

        Ok(Statement::FunctionDeclaration {
            name,
            parameters,
            body,
        })
    }

    fn parse_if_statement(&mut self) -> Result<Statement, TrioError> {
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::OpenParen)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::CloseParen)?;

        let then_body = self.parse_body()?;
        let else_body = if self.check(TokenKind::Else) {
            self.eat();
            Some(self.parse_body()?)
        } else {
            None
        };
        self.skip_semicolon();

        Ok(Statement::IfStatement {
            condition,
            then_body,
            else_body,
        })
    }

    fn parse_for_statement(&mut self) -> Result<Statement, TrioError> {
        self.expect(TokenKind::For)?;
        self.expect(TokenKind::OpenParen)?;

        // A declaration or expression statement consumes its own ';'
        let init = if self.check(TokenKind::SemiColon) {
            self.eat();
            None
        } else {
            Some(Box::new(self.parse_statement()?))
        };

        let condition = if self.check(TokenKind::SemiColon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::SemiColon)?;

        let increment = if self.check(TokenKind::CloseParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::CloseParen)?;

        let body = self.parse_body()?;
        self.skip_semicolon();

        Ok(Statement::ForStatement {
            init,
            condition,
            increment,
            body,
        })
    }

    /// Brace-delimited block or exactly one statement
    fn parse_body(&mut self) -> Result<Vec<Statement>, TrioError> {
        if self.check(TokenKind::OpenBrace) {
            self.eat();
            self.parse_block_body()
        } else {
            Ok(vec![self.parse_statement()?])
        }
    }

    /// Statements up to and including the closing brace
    fn parse_block_body(&mut self) -> Result<Vec<Statement>, TrioError> {
        let mut body = Vec::new();
        while !self.check(TokenKind::CloseBrace) && !self.check(TokenKind::EOF) {
            body.push(self.parse_statement()?);
        }
        self.expect(TokenKind::CloseBrace)?;
        Ok(body)
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, TrioError> {
        let expression = self.parse_expression()?;
        self.skip_semicolon();
        Ok(Statement::Expression(expression))
    }

    fn parse_expression(&mut self) -> Result<Expression, TrioError> {
        ensure_sufficient_stack(|| self.parse_assignment_expression())
    }

    /// Right-associative. The target is validated by the evaluator.
    fn parse_assignment_expression(&mut self) -> Result<Expression, TrioError> {
        let left = self.parse_object_expression()?;

        if self.check(TokenKind::Equals) {
            self.eat();
            let value = self.parse_expression()?;
            return Ok(Expression::AssignmentExpr {
                assignee: Box::new(left),
                value: Box::new(value),
            });
        }

        Ok(left)
    }

    fn parse_object_expression(&mut self) -> Result<Expression, TrioError> {
        if !self.check(TokenKind::OpenBrace) {
            return self.parse_comparison_expression();
        }

        let object = self.parse_object_literal()?;
        let object = self.parse_member_suffix(object)?;
        self.parse_call_suffix(object)
    }

    fn parse_object_literal(&mut self) -> Result<Expression, TrioError> {
        self.expect(TokenKind::OpenBrace)?;

        let mut properties = Vec::new();
        while !self.check(TokenKind::CloseBrace) {
            let key = self.expect(TokenKind::Identifier)?.lexeme;
            let value = if self.check(TokenKind::Colon) {
                self.eat();
                Some(self.parse_expression()?)
            } else {
                None
            };
            properties.push(Property { key, value });

            if !self.check(TokenKind::CloseBrace) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(TokenKind::CloseBrace)?;

        Ok(Expression::ObjectLiteral(properties))
    }

    fn parse_comparison_expression(&mut self) -> Result<Expression, TrioError> {
        let mut left = self.parse_additive_expression()?;

        while self.check(TokenKind::ComparisonOperator) {
            let operator = self.eat_operator()?;
            let right = self.parse_additive_expression()?;
            left = binary(left, operator, right);
        }

        Ok(left)
    }

    fn parse_additive_expression(&mut self) -> Result<Expression, TrioError> {
        let mut left = self.parse_multiplicative_expression()?;

        while self.check_operator(&["+", "-"]) {
            let operator = self.eat_operator()?;
            let right = self.parse_multiplicative_expression()?;
            left = binary(left, operator, right);
        }

        Ok(left)
    }

    fn parse_multiplicative_expression(&mut self) -> Result<Expression, TrioError> {
        let mut left = self.parse_call_member_expression()?;

        while self.check_operator(&["*", "/", "%"]) {
            let operator = self.eat_operator()?;
            let right = self.parse_call_member_expression()?;
            left = binary(left, operator, right);
        }

        Ok(left)
    }

    fn parse_call_member_expression(&mut self) -> Result<Expression, TrioError> {
        let member = self.parse_member_expression()?;
        self.parse_call_suffix(member)
    }

    /// Chained calls: `f()()`
    fn parse_call_suffix(&mut self, mut callee: Expression) -> Result<Expression, TrioError> {
        while self.check(TokenKind::OpenParen) {
            let args = self.parse_arguments()?;
            callee = Expression::CallExpr {
                callee: Box::new(callee),
                args,
            };
        }
        Ok(callee)
    }

    fn parse_member_expression(&mut self) -> Result<Expression, TrioError> {
        let object = self.parse_primary_expression()?;
        self.parse_member_suffix(object)
    }

    fn parse_member_suffix(&mut self, mut object: Expression) -> Result<Expression, TrioError> {
        loop {
            let (property, computed) = if self.check(TokenKind::Dot) {
                self.eat();
                // Must be an identifier; the evaluator rejects anything else
                (self.parse_primary_expression()?, false)
            } else if self.check(TokenKind::OpenBracket) {
                self.eat();
                let property = self.parse_expression()?;
                self.expect(TokenKind::CloseBracket)?;
                (property, true)
            } else {
                break;
            };

            object = Expression::MemberExpr {
                object: Box::new(object),
                property: Box::new(property),
                computed,
            };
        }
        Ok(object)
    }

    fn parse_arguments(&mut self) -> Result<Vec<Expression>, TrioError> {
        self.expect(TokenKind::OpenParen)?;

        let mut args = Vec::new();
        if !self.check(TokenKind::CloseParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.check(TokenKind::Comma) {
                    break;
                }
                self.eat();
            }
        }
        self.expect(TokenKind::CloseParen)?;

        Ok(args)
    }

    fn parse_primary_expression(&mut self) -> Result<Expression, TrioError> {
        let kind = self.at().kind;
        match kind {
            TokenKind::Identifier => Ok(Expression::Identifier(self.eat().lexeme)),
            TokenKind::Number => {
                let token = self.eat();
                let value = token.lexeme.parse::<f64>().map_err(|_| {
                    syntax_error(
                        format!("invalid number literal {:?}", token.lexeme),
                        Some(token.position),
                    )
                })?;
                Ok(Expression::NumericLiteral(value))
            }
            TokenKind::Quote => self.parse_string_literal(),
            TokenKind::New => self.parse_new_expression(),
            TokenKind::OpenParen => {
                self.eat();
                let expression = self.parse_expression()?;
                self.expect(TokenKind::CloseParen)?;
                Ok(expression)
            }
            _ => {
                let token = self.at();
                Err(unexpected_token(
                    "expression",
                    &token.to_string(),
                    Some(token.position),
                ))
            }
        }
    }

    fn parse_new_expression(&mut self) -> Result<Expression, TrioError> {
        self.expect(TokenKind::New)?;
        let callee = self.parse_member_expression()?;
        let args = if self.check(TokenKind::OpenParen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };

        Ok(Expression::NewExpr {
            callee: Box::new(callee),
            args,
        })
    }

    /// Re-stitch the tokens between two quotes into the string value
    fn parse_string_literal(&mut self) -> Result<Expression, TrioError> {
        let open = self.expect(TokenKind::Quote)?;

        let mut text = String::new();
        let mut previous_was_word = false;
        loop {
            let token = self.eat();
            match token.kind {
                TokenKind::EOF => return Err(unterminated_string(Some(open.position))),
                TokenKind::Quote => break,
                TokenKind::Backslash => {
                    let escaped = self.eat();
                    match escaped.kind {
                        TokenKind::EOF => return Err(unterminated_string(Some(open.position))),
                        TokenKind::Quote | TokenKind::Backslash => {
                            text.push_str(&escaped.lexeme);
                            previous_was_word = false;
                        }
                        kind => {
                            let mut chars = escaped.lexeme.chars();
                            if let Some(first) = chars.next() {
                                text.push(unescape(first));
                            }
                            let rest = chars.as_str();
                            text.push_str(rest);
                            previous_was_word = kind.is_word() && !rest.is_empty();
                        }
                    }
                }
                kind => {
                    if kind.is_word() && previous_was_word {
                        text.push(' ');
                    }
                    text.push_str(&token.lexeme);
                    previous_was_word = kind.is_word();
                }
            }
        }

        Ok(Expression::StringLiteral(text))
    }

    // Helper methods

    fn at(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    /// Consume the current token. The cursor never moves past EOF.
    fn eat(&mut self) -> Token {
        let token = self.tokens[self.cursor].clone();
        if token.kind != TokenKind::EOF {
            self.cursor += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.at().kind == kind
    }

    fn check_operator(&self, lexemes: &[&str]) -> bool {
        let token = self.at();
        token.kind == TokenKind::BinaryOperator && lexemes.contains(&token.lexeme.as_str())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, TrioError> {
        let token = self.eat();
        if token.kind == kind {
            return Ok(token);
        }
        Err(unexpected_token(
            &kind.to_string(),
            &token.to_string(),
            Some(token.position),
        ))
    }

    fn eat_operator(&mut self) -> Result<BinaryOperator, TrioError> {
        let token = self.eat();
        BinaryOperator::from_lexeme(&token.lexeme).ok_or_else(|| {
            unexpected_token("operator", &token.to_string(), Some(token.position))
        })
    }

    fn skip_semicolon(&mut self) {
        if self.check(TokenKind::SemiColon) {
            self.eat();
        }
    }
}

fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    Expression::BinaryExpr {
        left: Box::new(left),
        right: Box::new(right),
        operator,
    }
}

fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        other => other,
    }
}

/// Parse a source string into a program.
///
/// ```
/// use parser::{parse, Expression, Statement};
///
/// let program = parse("x = 1;").unwrap();
/// assert!(matches!(
///     &program.body[0],
///     Statement::Expression(Expression::AssignmentExpr { .. })
/// ));
/// ```
pub fn parse(source: &str) -> Result<Program, TrioError> {
    Parser::new(source).parse()
}
