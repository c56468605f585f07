//! Source printer for the AST
//!
//! The `Display` implementations render source text that parses back into
//! the same tree. Binary expressions, assignments and object literals are
//! always parenthesized so the printed form never depends on precedence.

use crate::ast::*;
use core_types::format_number;
use std::fmt::{self, Write};

const INDENT: &str = "    ";

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.body, 0)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(symbol) => f.write_str(symbol),
            // Literals are digit runs; keep large ones out of exponent form
            Expression::NumericLiteral(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{:.0}", value)
            }
            Expression::NumericLiteral(value) => f.write_str(&format_number(*value)),
            Expression::StringLiteral(value) => write_string(f, value),
            Expression::ObjectLiteral(properties) => {
                f.write_str("({")?;
                for (i, property) in properties.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&property.key)?;
                    if let Some(value) = &property.value {
                        write!(f, ": {}", value)?;
                    }
                }
                f.write_str("})")
            }
            Expression::BinaryExpr {
                left,
                right,
                operator,
            } => write!(f, "({} {} {})", left, operator.as_str(), right),
            Expression::AssignmentExpr { assignee, value } => {
                write!(f, "({} = {})", assignee, value)
            }
            Expression::MemberExpr {
                object,
                property,
                computed,
            } => {
                write_receiver(f, object)?;
                if *computed {
                    write!(f, "[{}]", property)
                } else {
                    write!(f, ".{}", property)
                }
            }
            Expression::CallExpr { callee, args } => {
                write!(f, "{}", callee)?;
                write_arguments(f, args)
            }
            Expression::NewExpr { callee, args } => {
                f.write_str("new ")?;
                match callee.as_ref() {
                    Expression::Identifier(_) | Expression::MemberExpr { .. } => {
                        write!(f, "{}", callee)?
                    }
                    other => write!(f, "({})", other)?,
                }
                write_arguments(f, args)
            }
        }
    }
}

/// Member access binds tighter than calls, so a call receiver needs parens
fn write_receiver(f: &mut fmt::Formatter<'_>, object: &Expression) -> fmt::Result {
    match object {
        Expression::CallExpr { .. } | Expression::NewExpr { .. } => write!(f, "({})", object),
        _ => write!(f, "{}", object),
    }
}

fn write_arguments(f: &mut fmt::Formatter<'_>, args: &[Expression]) -> fmt::Result {
    f.write_char('(')?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", arg)?;
    }
    f.write_char(')')
}

fn write_string(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\'' => f.write_str("\\'")?,
            other => f.write_char(other)?,
        }
    }
    f.write_char('"')
}

fn write_statements(f: &mut fmt::Formatter<'_>, body: &[Statement], depth: usize) -> fmt::Result {
    for statement in body {
        write_indent(f, depth)?;
        write_statement(f, statement, depth)?;
        f.write_char('\n')?;
    }
    Ok(())
}

fn write_block(f: &mut fmt::Formatter<'_>, body: &[Statement], depth: usize) -> fmt::Result {
    f.write_str("{\n")?;
    write_statements(f, body, depth + 1)?;
    write_indent(f, depth)?;
    f.write_char('}')
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn write_statement(f: &mut fmt::Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    match statement {
        Statement::VariableDeclaration {
            name,
            constant,
            value,
        } => {
            let keyword = if *constant { "const" } else { "let" };
            match value {
                Some(value) => write!(f, "{} {} = {};", keyword, name, value),
                None => write!(f, "{} {};", keyword, name),
            }
        }
        Statement::FunctionDeclaration {
            name,
            parameters,
            body,
        } => {
            write!(f, "fn {}({}) ", name, parameters.join(", "))?;
            write_block(f, &body.body, depth)
        }
        Statement::IfStatement {
            condition,
            then_body,
            else_body,
        } => {
            write!(f, "if ({}) ", condition)?;
            write_block(f, then_body, depth)?;
            if let Some(else_body) = else_body {
                f.write_str(" else ")?;
                write_block(f, else_body, depth)?;
            }
            Ok(())
        }
        Statement::ForStatement {
            init,
            condition,
            increment,
            body,
        } => {
            f.write_str("for (")?;
            match init {
                Some(init) => write_statement(f, init, depth)?,
                None => f.write_char(';')?,
            }
            if let Some(condition) = condition {
                write!(f, " {}", condition)?;
            }
            f.write_str(";")?;
            if let Some(increment) = increment {
                write!(f, " {}", increment)?;
            }
            f.write_str(") ")?;
            write_block(f, body, depth)
        }
        Statement::Expression(expression) => write!(f, "{};", expression),
    }
}
