//! # JavaScript Syntax Tree
//!
//! Node types for building JavaScript source programmatically. A tree is
//! assembled from [`Expression`] and [`Statement`] values and turned into
//! text by the [`render`](crate::render) module.
//!
//! ## Architecture Overview
//!
//! - **[precedence]** - Binding strength and associativity, and the rule
//!   deciding when a child needs parentheses
//! - **[operators]** - Binary and unary operators with their symbols and
//!   precedences
//! - **[identifier]** - Validated identifiers and the reserved-word list
//! - **[expressions]** - Value-producing nodes (literals, operations, access,
//!   array/object/function literals, `var` declarations)
//! - **[statements]** - Control flow, blocks, `try`, `switch`, comments
//!
//! ## Quick Start
//!
//! ```
//! use jsemit::ast::{BinaryOperator, Expression, Identifier};
//! use jsemit::render::RenderConfig;
//!
//! let a = Expression::Identifier(Identifier::new("a").unwrap());
//! let sum = Expression::Binary {
//!     operator: BinaryOperator::Add,
//!     left: Some(Box::new(a)),
//!     right: Some(Box::new(Expression::Number(1.0))),
//! };
//!
//! assert_eq!(sum.render(&RenderConfig::default()).unwrap(), "a+1");
//! ```
//!
//! ## Null Children
//!
//! Optional children left as `None` are not omitted from the output: an
//! expression renders as `null` and a statement inside a block renders as
//! the empty statement. Required children (conditions, loop bodies, the
//! `try` block) left unset make rendering fail.
pub mod expressions;
pub mod identifier;
pub mod operators;
pub mod precedence;
pub mod statements;

pub use expressions::{Expression, Function, ObjectLiteral};
pub use identifier::{BuildError, Identifier};
pub use operators::{BinaryOperator, UnaryOperator};
pub use precedence::{Associativity, Precedence};
pub use statements::{
    Block, Case, Comment, CommentSpacing, CommentStyle, Conditional, ExceptionHandling, ForIn,
    Loop, Statement, Switch,
};
