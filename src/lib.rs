pub mod ast;
pub mod builder;
pub mod cli;
pub mod convert;
pub mod quote;
pub mod render;

pub use ast::{
    BinaryOperator, BuildError, Expression, Identifier, Precedence, Statement, UnaryOperator,
};
pub use convert::{ConvertError, to_expression};
pub use quote::{QuoteChar, quote, quote_string};
pub use render::{RenderConfig, RenderError, render, render_into};
