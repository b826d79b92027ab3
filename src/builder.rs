//! Fluent construction helpers.
//!
//! Every helper takes its receiver by value and returns a new node, so a
//! chain of calls never shares structure with an earlier result.
//!
//! # Examples
//!
//! ```
//! use jsemit::ast::{Conditional, Expression, Statement};
//! use jsemit::render::RenderConfig;
//!
//! let a = Expression::identifier("a").unwrap();
//! let statement: Statement = Conditional::new(a.clone())
//!     .then(Statement::Return(Some(a)))
//!     .otherwise(Statement::Return(None))
//!     .into();
//!
//! assert_eq!(
//!     statement.render(&RenderConfig::default()).unwrap(),
//!     "if(a)return a; else return;"
//! );
//! ```

use crate::ast::{
    BinaryOperator, Block, BuildError, Case, Comment, CommentSpacing, CommentStyle, Conditional,
    ExceptionHandling, Expression, ForIn, Function, Identifier, Loop, ObjectLiteral, Statement,
    Switch, UnaryOperator,
};
use crate::convert::object_key;

impl Expression {
    pub fn identifier(name: &str) -> Result<Expression, BuildError> {
        Identifier::new(name).map(Expression::Identifier)
    }

    pub fn string(text: impl Into<String>) -> Expression {
        Expression::String(text.into())
    }

    pub fn snippet(text: impl Into<String>) -> Expression {
        Expression::Snippet(text.into())
    }

    pub fn regex(text: impl Into<String>) -> Expression {
        Expression::Regex(text.into())
    }

    pub fn array<I>(elements: I) -> Expression
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        Expression::Array(elements.into_iter().map(|e| Some(e.into())).collect())
    }

    /// `var` declaration of the given identifiers or assignments.
    pub fn declare<I>(declarators: I) -> Expression
    where
        I: IntoIterator<Item = Expression>,
    {
        Expression::Declaration(declarators.into_iter().collect())
    }

    /// `new callee(arguments)`
    pub fn construct<I>(callee: Expression, arguments: I) -> Expression
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        callee.call(arguments).unary(UnaryOperator::New)
    }

    pub fn binary(self, operator: BinaryOperator, right: impl Into<Expression>) -> Expression {
        Expression::Binary {
            operator,
            left: Some(Box::new(self)),
            right: Some(Box::new(right.into())),
        }
    }

    /// Applies `operator` with `self` as the operand.
    pub fn unary(self, operator: UnaryOperator) -> Expression {
        Expression::Unary {
            operator,
            operand: Some(Box::new(self)),
        }
    }

    pub fn call<I>(self, arguments: I) -> Expression
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        Expression::Call {
            callee: Some(Box::new(self)),
            arguments: arguments.into_iter().map(|a| Some(a.into())).collect(),
        }
    }

    pub fn index(self, key: impl Into<Expression>) -> Expression {
        Expression::Index {
            target: Some(Box::new(self)),
            key: Some(Box::new(key.into())),
        }
    }

    /// `self.member`; reserved words are accepted as member names.
    pub fn dot(self, member: &str) -> Result<Expression, BuildError> {
        Ok(Expression::PropertyAccess {
            target: Some(Box::new(self)),
            member: Identifier::key(member)?,
        })
    }

    /// `self?then:otherwise`
    pub fn choose(
        self,
        then: impl Into<Expression>,
        otherwise: impl Into<Expression>,
    ) -> Expression {
        Expression::Conditional {
            condition: Some(Box::new(self)),
            then: Some(Box::new(then.into())),
            otherwise: Some(Box::new(otherwise.into())),
        }
    }

    pub fn assign(self, value: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Assign, value)
    }

    pub fn add(self, right: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Add, right)
    }

    pub fn subtract(self, right: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Subtract, right)
    }

    pub fn multiply(self, right: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Multiply, right)
    }

    pub fn divide(self, right: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::Divide, right)
    }

    pub fn strict_equals(self, right: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::StrictEqual, right)
    }

    pub fn and(self, right: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::LogicalAnd, right)
    }

    pub fn or(self, right: impl Into<Expression>) -> Expression {
        self.binary(BinaryOperator::LogicalOr, right)
    }

    pub fn not(self) -> Expression {
        self.unary(UnaryOperator::LogicalNot)
    }

    pub fn group(self) -> Expression {
        self.unary(UnaryOperator::Group)
    }
}

impl ObjectLiteral {
    pub fn with(mut self, key: Expression, value: impl Into<Expression>) -> Self {
        self.insert(key, Some(value.into()));
        self
    }

    /// Adds a property keyed by an identifier when `name` is one, by a
    /// string otherwise.
    pub fn with_property(self, name: &str, value: impl Into<Expression>) -> Self {
        self.with(object_key(name), value)
    }
}

impl Function {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: Identifier) -> Self {
        Function {
            name: Some(name),
            ..Self::default()
        }
    }

    pub fn parameter(mut self, parameter: Identifier) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn body(mut self, body: impl Into<Block>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, statement: impl Into<Statement>) -> Self {
        self.statements.push(Some(statement.into()));
        self
    }
}

impl Conditional {
    pub fn new(condition: impl Into<Expression>) -> Self {
        Conditional {
            condition: Some(condition.into()),
            ..Self::default()
        }
    }

    pub fn then(mut self, then: impl Into<Statement>) -> Self {
        self.then = Some(Box::new(then.into()));
        self
    }

    pub fn otherwise(mut self, otherwise: impl Into<Statement>) -> Self {
        self.otherwise = Some(Box::new(otherwise.into()));
        self
    }

    /// Starts the next `else if` link. Any `else` already set on `self` is
    /// dropped, since the new link takes its place.
    pub fn else_if(mut self, condition: impl Into<Expression>) -> Self {
        self.otherwise = None;
        Conditional {
            condition: Some(condition.into()),
            parent: Some(Box::new(self)),
            ..Self::default()
        }
    }
}

impl Loop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(mut self, init: impl Into<Expression>) -> Self {
        self.init = Some(init.into());
        self
    }

    pub fn condition(mut self, condition: impl Into<Expression>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn iteration(mut self, iteration: impl Into<Expression>) -> Self {
        self.iteration = Some(iteration.into());
        self
    }

    pub fn body(mut self, body: impl Into<Statement>) -> Self {
        self.body = Some(Box::new(body.into()));
        self
    }
}

impl ForIn {
    pub fn new(variable: impl Into<Expression>, collection: impl Into<Expression>) -> Self {
        ForIn {
            variable: Some(variable.into()),
            collection: Some(collection.into()),
            body: None,
        }
    }

    pub fn body(mut self, body: impl Into<Statement>) -> Self {
        self.body = Some(Box::new(body.into()));
        self
    }
}

impl Switch {
    pub fn new(discriminant: impl Into<Expression>) -> Self {
        Switch {
            discriminant: Some(discriminant.into()),
            cases: Vec::new(),
        }
    }

    pub fn case<I>(mut self, value: impl Into<Expression>, statements: I) -> Self
    where
        I: IntoIterator<Item = Statement>,
    {
        self.cases.push(Case {
            value: Some(value.into()),
            statements: statements.into_iter().map(Some).collect(),
        });
        self
    }

    pub fn default_case<I>(mut self, statements: I) -> Self
    where
        I: IntoIterator<Item = Statement>,
    {
        self.cases.push(Case {
            value: None,
            statements: statements.into_iter().map(Some).collect(),
        });
        self
    }
}

impl ExceptionHandling {
    pub fn new(body: impl Into<Block>) -> Self {
        ExceptionHandling {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    pub fn catch(mut self, variable: Identifier, body: impl Into<Block>) -> Self {
        self.catch_variable = Some(variable);
        self.catch_body = Some(body.into());
        self
    }

    pub fn finally(mut self, body: impl Into<Block>) -> Self {
        self.finally = Some(body.into());
        self
    }
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Comment {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: CommentStyle) -> Self {
        self.style = style;
        self
    }

    pub fn spacing(mut self, spacing: CommentSpacing) -> Self {
        self.spacing = spacing;
        self
    }
}

impl Statement {
    pub fn while_loop(condition: impl Into<Expression>, body: impl Into<Statement>) -> Statement {
        Statement::While {
            condition: Some(condition.into()),
            body: Some(Box::new(body.into())),
        }
    }

    pub fn do_while(body: impl Into<Statement>, condition: impl Into<Expression>) -> Statement {
        Statement::DoWhile {
            body: Some(Box::new(body.into())),
            condition: Some(condition.into()),
        }
    }

    pub fn labeled(name: Identifier, body: impl Into<Statement>) -> Statement {
        Statement::Label {
            name,
            body: Box::new(body.into()),
        }
    }

    pub fn with(object: impl Into<Expression>, body: impl Into<Statement>) -> Statement {
        Statement::With {
            object: Some(object.into()),
            body: Some(Box::new(body.into())),
        }
    }
}
