//! Abstract Syntax Tree node definitions

/// Any node the evaluator accepts
#[derive(Debug, Clone, PartialEq)]
pub enum ASTNode {
    /// Complete program
    Program(Program),
    /// Single statement
    Statement(Statement),
    /// Single expression
    Expression(Expression),
}

impl From<Program> for ASTNode {
    fn from(program: Program) -> Self {
        ASTNode::Program(program)
    }
}

impl From<Statement> for ASTNode {
    fn from(statement: Statement) -> Self {
        ASTNode::Statement(statement)
    }
}

impl From<Expression> for ASTNode {
    fn from(expression: Expression) -> Self {
        ASTNode::Expression(expression)
    }
}

/// A sequence of statements: a whole script or a function body
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order
    pub body: Vec<Statement>,
}

impl Program {
    /// Create a program from its statements
    pub fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }
}

/// Trio statements
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let name = value;` or `const name = value;`
    VariableDeclaration {
        /// Declared name
        name: String,
        /// Declared with `const`
        constant: bool,
        /// Initializer, Null when absent
        value: Option<Expression>,
    },

    /// `fn name(parameters) { body }`
    FunctionDeclaration {
        /// Function name
        name: String,
        /// Parameter names
        parameters: Vec<String>,
        /// Function body
        body: Program,
    },

    /// `if (condition) then_body else else_body`
    IfStatement {
        /// Condition
        condition: Expression,
        /// Statements run when the condition is truthy
        then_body: Vec<Statement>,
        /// Statements run otherwise
        else_body: Option<Vec<Statement>>,
    },

    /// `for (init; condition; increment) body`
    ForStatement {
        /// Runs once in the loop scope
        init: Option<Box<Statement>>,
        /// Checked before every iteration
        condition: Option<Expression>,
        /// Runs after every iteration
        increment: Option<Expression>,
        /// Loop body
        body: Vec<Statement>,
    },

    /// Expression statement
    Expression(Expression),
}

/// Trio expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Variable reference
    Identifier(String),
    /// Number literal
    NumericLiteral(f64),
    /// String literal
    StringLiteral(String),
    /// `{ key: value, shorthand }`
    ObjectLiteral(Vec<Property>),
    /// Arithmetic or comparison
    BinaryExpr {
        /// Left operand
        left: Box<Expression>,
        /// Right operand
        right: Box<Expression>,
        /// Operator
        operator: BinaryOperator,
    },
    /// `assignee = value`
    AssignmentExpr {
        /// Assignment target
        assignee: Box<Expression>,
        /// Assigned value
        value: Box<Expression>,
    },
    /// `object.property` or `object[property]`
    MemberExpr {
        /// Receiver
        object: Box<Expression>,
        /// Property expression
        property: Box<Expression>,
        /// Bracket access
        computed: bool,
    },
    /// `callee(args)`
    CallExpr {
        /// Called expression
        callee: Box<Expression>,
        /// Arguments
        args: Vec<Expression>,
    },
    /// `new callee(args)`
    NewExpr {
        /// Constructor expression
        callee: Box<Expression>,
        /// Arguments
        args: Vec<Expression>,
    },
}

/// Object literal property
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name
    pub key: String,
    /// Value; `None` for shorthand properties, resolved by name at runtime
    pub value: Option<Expression>,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `==`
    Eq,
    /// `===`
    StrictEq,
    /// `!=`
    NotEq,
}

impl BinaryOperator {
    /// Operator for a lexeme
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        let op = match lexeme {
            "+" => BinaryOperator::Add,
            "-" => BinaryOperator::Sub,
            "*" => BinaryOperator::Mul,
            "/" => BinaryOperator::Div,
            "%" => BinaryOperator::Mod,
            "<" => BinaryOperator::Lt,
            "<=" => BinaryOperator::LtEq,
            ">" => BinaryOperator::Gt,
            ">=" => BinaryOperator::GtEq,
            "==" => BinaryOperator::Eq,
            "===" => BinaryOperator::StrictEq,
            "!=" => BinaryOperator::NotEq,
            _ => return None,
        };
        Some(op)
    }

    /// Source text of the operator
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::Eq => "==",
            BinaryOperator::StrictEq => "===",
            BinaryOperator::NotEq => "!=",
        }
    }

    /// Whether the operator produces a Boolean
    pub fn is_comparison(self) -> bool {
        !matches!(
            self,
            BinaryOperator::Add
                | BinaryOperator::Sub
                | BinaryOperator::Mul
                | BinaryOperator::Div
                | BinaryOperator::Mod
        )
    }
}
