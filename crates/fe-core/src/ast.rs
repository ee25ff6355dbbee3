// Copyright 2026 the fe-lang authors
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for FE.
//!
//! The AST is the sole contract between this front end and its downstream
//! consumers (visitors, the semantic analyzer, the benchmark harness).
//! Both node taxonomies are closed tagged unions so that consumers can rely
//! on exhaustive matching; adding a variant is a breaking change.
//!
//! # Design
//!
//! - **Structurally immutable**: nodes own their children (`Box`/`Vec`),
//!   there is no sharing and no cycle is constructible.
//! - **Structural equality**: two trees are equal iff shapes and leaf
//!   values match exactly; consumers must not assume any node identity
//!   beyond that.
//! - **No source positions**: positions live on tokens and errors, not on
//!   tree nodes, so equality stays purely structural.

use ecow::EcoString;

/// An FE expression.
///
/// Expressions are finite, acyclic trees built by the expression parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A literal value: `42`, `3.14`, `"こんにちは"`, `'a'`, `true`.
    Literal(Literal),

    /// A variable or function name: `x`, `合計`.
    Identifier(EcoString),

    /// A binary operation: `a + b`, `x ≠ y`.
    Binary {
        /// The operator.
        operator: BinaryOperator,
        /// The left operand.
        left: Box<Expression>,
        /// The right operand.
        right: Box<Expression>,
    },

    /// A unary prefix operation: `not done`, `-x`.
    Unary {
        /// The operator.
        operator: UnaryOperator,
        /// The operand.
        operand: Box<Expression>,
    },

    /// An array element access: `values[i]`.
    ArrayAccess {
        /// The array expression.
        array: Box<Expression>,
        /// The index expression.
        index: Box<Expression>,
    },

    /// A record field access: `point.x`.
    FieldAccess {
        /// The object expression.
        object: Box<Expression>,
        /// The field name.
        field: EcoString,
    },

    /// A function call: `writeLine(x)`. Calls require a name on the left,
    /// never an arbitrary expression.
    FunctionCall {
        /// The function name.
        name: EcoString,
        /// The arguments, in source order.
        arguments: Vec<Expression>,
    },
}

impl Expression {
    /// Creates a binary expression.
    #[must_use]
    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Self::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates a unary expression.
    #[must_use]
    pub fn unary(operator: UnaryOperator, operand: Expression) -> Self {
        Self::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    /// Creates an array access expression.
    #[must_use]
    pub fn array_access(array: Expression, index: Expression) -> Self {
        Self::ArrayAccess {
            array: Box::new(array),
            index: Box::new(index),
        }
    }

    /// Creates a field access expression.
    #[must_use]
    pub fn field_access(object: Expression, field: impl Into<EcoString>) -> Self {
        Self::FieldAccess {
            object: Box::new(object),
            field: field.into(),
        }
    }

    /// Creates a function call expression.
    #[must_use]
    pub fn call(name: impl Into<EcoString>, arguments: Vec<Expression>) -> Self {
        Self::FunctionCall {
            name: name.into(),
            arguments,
        }
    }

    /// Creates an identifier expression.
    #[must_use]
    pub fn identifier(name: impl Into<EcoString>) -> Self {
        Self::Identifier(name.into())
    }

    /// Creates an integer literal expression.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// An integer literal: `42`, `-17`.
    Integer(i64),

    /// A real (floating-point) literal: `3.14`, `.5`.
    Real(f64),

    /// A string literal, escape sequences already resolved.
    String(EcoString),

    /// A character literal: `'a'`.
    Character(char),

    /// A boolean literal: `true`, `false`.
    Boolean(bool),
}

/// A binary operator, ordered here from lowest to highest precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Logical or: `or`.
    Or,
    /// Logical and: `and`.
    And,
    /// Equality: `=`.
    Equal,
    /// Inequality: `≠`.
    NotEqual,
    /// Greater than: `>`.
    Greater,
    /// Greater than or equal: `≧`.
    GreaterEqual,
    /// Less than: `<`.
    Less,
    /// Less than or equal: `≦`.
    LessEqual,
    /// Addition: `+`.
    Add,
    /// Subtraction: `-`.
    Subtract,
    /// Multiplication: `*`.
    Multiply,
    /// Division: `/`.
    Divide,
    /// Remainder: `%`.
    Modulo,
}

/// A unary prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Logical negation: `not`.
    Not,
    /// Unary plus: `+`.
    Plus,
    /// Unary minus: `-`.
    Minus,
}

/// A declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// `整数型`: integer.
    Integer,
    /// `実数型`: real.
    Real,
    /// `文字列型`: string.
    String,
    /// `文字型`: character.
    Character,
    /// `論理型`: boolean.
    Boolean,
    /// `レコード`: record.
    Record,
    /// `整数型の配列` and friends: array of an element type.
    Array(Box<TypeName>),
}

impl TypeName {
    /// Creates an array type over the given element type.
    #[must_use]
    pub fn array_of(element: TypeName) -> Self {
        Self::Array(Box::new(element))
    }
}

/// A typed parameter of a function or procedure declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// The parameter name.
    pub name: EcoString,
    /// The declared type.
    pub type_name: TypeName,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<EcoString>, type_name: TypeName) -> Self {
        Self {
            name: name.into(),
            type_name,
        }
    }
}

/// An FE statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `if … then … (elif … then …)* (else …)? endif`.
    If(IfStatement),

    /// `while … do … endwhile`.
    While(WhileStatement),

    /// `for … endfor`, in either the range or the for-each form.
    For(ForStatement),

    /// `x ← expr` or `a[i] ← expr`.
    Assignment(Assignment),

    /// `整数型: x` or `整数型: x ← 0`.
    VariableDeclaration {
        /// The variable name.
        name: EcoString,
        /// The declared type.
        type_name: TypeName,
        /// The optional initial value.
        initial_value: Option<Expression>,
    },

    /// `定数 整数型: MAX ← 100`. The initializer is required.
    ConstantDeclaration {
        /// The constant name.
        name: EcoString,
        /// The declared type.
        type_name: TypeName,
        /// The initial value.
        initial_value: Expression,
    },

    /// `function name(型: param, …): 戻り型 … endfunction`.
    FunctionDeclaration {
        /// The function name.
        name: EcoString,
        /// The parameters, in source order.
        parameters: Vec<Parameter>,
        /// The optional return type.
        return_type: Option<TypeName>,
        /// The body statements.
        body: Vec<Statement>,
    },

    /// `procedure name(型: param, …) … endprocedure`.
    ProcedureDeclaration {
        /// The procedure name.
        name: EcoString,
        /// The parameters, in source order.
        parameters: Vec<Parameter>,
        /// The body statements.
        body: Vec<Statement>,
    },

    /// `return` with an optional value.
    Return(Option<Expression>),

    /// A bare expression used as a statement, e.g. a call for side effect.
    Expression(Expression),

    /// `break`.
    Break,

    /// An explicit statement sequence. The parser produces flat bodies;
    /// this variant exists so tree-building consumers can group statements
    /// without inventing their own container.
    Block(Vec<Statement>),
}

/// An `if` statement with its chained alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// The condition of the leading `if`.
    pub condition: Expression,
    /// The statements of the `then` branch.
    pub then_body: Vec<Statement>,
    /// The `elif` branches, in source order.
    pub else_ifs: Vec<ElseIf>,
    /// The statements of the `else` branch, if present.
    pub else_body: Option<Vec<Statement>>,
}

/// One `elif` branch of an [`IfStatement`].
#[derive(Debug, Clone, PartialEq)]
pub struct ElseIf {
    /// The branch condition.
    pub condition: Expression,
    /// The branch body.
    pub body: Vec<Statement>,
}

/// A `while` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    /// The loop condition.
    pub condition: Expression,
    /// The loop body.
    pub body: Vec<Statement>,
}

/// A `for` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum ForStatement {
    /// `for i ← start to end (step s)? do … endfor`.
    Range {
        /// The loop variable.
        variable: EcoString,
        /// The first value.
        start: Expression,
        /// The last value (inclusive).
        end: Expression,
        /// The optional step.
        step: Option<Expression>,
        /// The loop body.
        body: Vec<Statement>,
    },

    /// `for x in iterable do … endfor`.
    ForEach {
        /// The loop variable.
        variable: EcoString,
        /// The iterated expression.
        iterable: Expression,
        /// The loop body.
        body: Vec<Statement>,
    },
}

/// An assignment statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    /// `x ← expr`.
    Variable {
        /// The target variable name.
        name: EcoString,
        /// The assigned value.
        value: Expression,
    },

    /// `a[i] ← expr`. The target is always an
    /// [`Expression::ArrayAccess`] node (possibly chained, as in
    /// `a[i][j] ← expr`).
    ArrayElement {
        /// The array-access target.
        target: Expression,
        /// The assigned value.
        value: Expression,
    },
}
