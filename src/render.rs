//! Rendering of syntax trees to JavaScript source text.
//!
//! The renderer walks a tree once, appending text to a caller-owned buffer.
//! Parentheses are inserted only where operator precedence requires them,
//! and string literals use whichever quote character needs fewer escapes.
//!
//! # Features
//!
//! - **Minimal grouping** - `a*3+b*2` stays as is, `(a+3)*(b+2)` keeps both groups
//! - **Safe literals** - strings are escaped for embedding in HTML
//! - **JSON mode** - [`RenderConfig::always_quote_object_keys`] quotes every
//!   object key and string with double quotes
//! - **Fail fast** - a missing condition, body, or handler is an error, never
//!   partial output
//!
//! # Examples
//!
//! ```
//! use jsemit::ast::{Expression, Statement};
//! use jsemit::render::{render, RenderConfig};
//!
//! let array = Expression::Array(vec![
//!     Some(Expression::Number(1.0)),
//!     Some(Expression::Number(2.0)),
//!     None,
//! ]);
//!
//! let text = render(&Statement::Expression(array), &RenderConfig::default()).unwrap();
//! assert_eq!(text, "[1,2,null]");
//! ```

use std::fmt;

use log::trace;

use crate::ast::{
    Associativity, BinaryOperator, Block, Comment, CommentSpacing, CommentStyle, Conditional,
    ExceptionHandling, Expression, ForIn, Function, Identifier, Loop, ObjectLiteral, Precedence,
    Statement, Switch, UnaryOperator,
};
use crate::quote::{best_quote_char, format_number, quote_into, QuoteChar};

pub const SCRIPT_BLOCK_OPEN: &str = "<script type=\"text/javascript\">";
pub const SCRIPT_BLOCK_CLOSE: &str = "</script>";

const NULL_EXPRESSION: &Expression = &Expression::Null;
const EMPTY_STATEMENT: &Statement = &Statement::Empty;

/// Options controlling the rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Quote character used for strings containing equally many of both
    pub quote_char: QuoteChar,
    /// Quote every object-literal key, and use double quotes for every
    /// string, producing JSON for JSON-shaped trees
    pub always_quote_object_keys: bool,
    /// Surround the output with a `<script>` element
    pub script_block: bool,
    /// Append `;` after a top-level statement that needs one
    pub trailing_terminator: bool,
    /// Name rendered for [`Expression::Library`]
    pub library_identifier: Identifier,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            quote_char: QuoteChar::Double,
            always_quote_object_keys: false,
            script_block: false,
            trailing_terminator: false,
            library_identifier: Identifier::trusted("jQuery"),
        }
    }
}

/// Errors that can occur while rendering a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A required child node is unset
    MissingChild {
        node: &'static str,
        child: &'static str,
    },

    /// A reserved word used outside a property-name position
    ReservedWord(String),

    /// A `default` case followed by another case
    DefaultCaseNotLast,

    /// A `var` entry that is neither an identifier nor an assignment to one
    InvalidDeclarator,

    /// An object key that is not an identifier, string, or number
    InvalidObjectKey,

    /// A `try` with neither `catch` nor `finally`
    MissingHandler,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingChild { node, child } => {
                write!(f, "Missing child: {} requires a {}", node, child)
            }
            RenderError::ReservedWord(name) => {
                write!(f, "Reserved word: '{}' is only allowed as a property name", name)
            }
            RenderError::DefaultCaseNotLast => {
                write!(f, "Invalid switch: the default case must be the last case")
            }
            RenderError::InvalidDeclarator => write!(
                f,
                "Invalid declaration: entries must be identifiers or assignments to identifiers"
            ),
            RenderError::InvalidObjectKey => write!(
                f,
                "Invalid object key: keys must be identifiers, strings, or numbers"
            ),
            RenderError::MissingHandler => {
                write!(f, "Invalid try: a catch or finally block is required")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Renders `statement` to a new string.
pub fn render(statement: &Statement, config: &RenderConfig) -> Result<String, RenderError> {
    let mut out = String::new();
    render_into(statement, &mut out, config)?;
    Ok(out)
}

/// Appends the rendering of `statement` to `out`.
///
/// On error `out` holds whatever was written before the failure.
pub fn render_into(
    statement: &Statement,
    out: &mut String,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    trace!(
        "rendering statement (script_block={}, trailing_terminator={})",
        config.script_block, config.trailing_terminator
    );

    if config.script_block {
        out.push_str(SCRIPT_BLOCK_OPEN);
    }

    let mut renderer = Renderer::new(config, out);
    renderer.render_statement(statement)?;
    if config.trailing_terminator && statement.requires_terminator() {
        renderer.out.push(';');
    }

    if config.script_block {
        out.push_str(SCRIPT_BLOCK_CLOSE);
    }
    Ok(())
}

impl Statement {
    pub fn render(&self, config: &RenderConfig) -> Result<String, RenderError> {
        render(self, config)
    }
}

impl Expression {
    /// Renders the expression on its own, without statement-level handling
    /// such as terminators or script wrapping.
    pub fn render(&self, config: &RenderConfig) -> Result<String, RenderError> {
        let mut out = String::new();
        Renderer::new(config, &mut out).render_expression(self)?;
        Ok(out)
    }
}

fn required<'t, T: ?Sized>(
    child: Option<&'t T>,
    node: &'static str,
    name: &'static str,
) -> Result<&'t T, RenderError> {
    child.ok_or(RenderError::MissingChild { node, child: name })
}

fn or_null(child: &Option<Box<Expression>>) -> &Expression {
    child.as_deref().unwrap_or(NULL_EXPRESSION)
}

/// Characters ending a `//` comment.
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Splits comment text on every line terminator, treating `\r\n` as one.
fn comment_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split("\r\n").flat_map(|chunk| chunk.split(LINE_TERMINATORS))
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Writes nodes into a borrowed buffer.
pub struct Renderer<'a> {
    config: &'a RenderConfig,
    out: &'a mut String,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a RenderConfig, out: &'a mut String) -> Self {
        Renderer { config, out }
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    pub fn render_statement(&mut self, statement: &Statement) -> Result<(), RenderError> {
        match statement {
            Statement::Expression(expression) => self.render_expression(expression),
            Statement::Block(block) => self.render_block(block),
            Statement::Empty => Ok(()),
            Statement::If(conditional) => self.render_conditional(conditional),
            Statement::For(l) => self.render_loop(l),
            Statement::ForIn(f) => self.render_for_in(f),
            Statement::While { condition, body } => {
                let condition = required(condition.as_ref(), "while", "condition")?;
                let body = required(body.as_deref(), "while", "body")?;
                self.out.push_str("while(");
                self.render_expression(condition)?;
                self.out.push(')');
                self.render_nested(body)
            }
            Statement::DoWhile { body, condition } => {
                let body = required(body.as_deref(), "do-while", "body")?;
                let condition = required(condition.as_ref(), "do-while", "condition")?;
                self.out.push_str("do");
                if !matches!(body, Statement::Block(_)) {
                    self.out.push(' ');
                }
                self.render_nested(body)?;
                self.out.push_str("while(");
                self.render_expression(condition)?;
                self.out.push(')');
                Ok(())
            }
            Statement::Switch(switch) => self.render_switch(switch),
            Statement::Break(label) => {
                self.out.push_str("break");
                self.render_label_reference(label.as_ref())
            }
            Statement::Continue(label) => {
                self.out.push_str("continue");
                self.render_label_reference(label.as_ref())
            }
            Statement::Return(value) => {
                self.out.push_str("return");
                if let Some(value) = value {
                    self.out.push(' ');
                    self.render_expression(value)?;
                }
                Ok(())
            }
            Statement::Throw(value) => {
                self.out.push_str("throw ");
                self.render_expression(value)
            }
            Statement::Label { name, body } => {
                self.render_identifier(name, false)?;
                self.out.push(':');
                self.render_guarded(body)
            }
            Statement::With { object, body } => {
                let object = required(object.as_ref(), "with", "object")?;
                let body = required(body.as_deref(), "with", "body")?;
                self.out.push_str("with(");
                self.render_expression(object)?;
                self.out.push(')');
                self.render_nested(body)
            }
            Statement::Try(handling) => self.render_try(handling),
            Statement::Comment(comment) => {
                self.render_comment(comment);
                Ok(())
            }
        }
    }

    /// Renders a statement inside another statement, followed by its
    /// terminator.
    fn render_nested(&mut self, statement: &Statement) -> Result<(), RenderError> {
        self.render_guarded(statement)?;
        if statement.requires_terminator() {
            self.out.push(';');
        }
        Ok(())
    }

    /// Renders a statement, parenthesizing an expression statement whose
    /// text would otherwise be read as a block or a function declaration.
    fn render_guarded(&mut self, statement: &Statement) -> Result<(), RenderError> {
        let Statement::Expression(expression) = statement else {
            return self.render_statement(statement);
        };
        if let Expression::Function(Function { name: Some(_), .. }) = expression {
            // a named function in statement position is a declaration
            return self.render_expression(expression);
        }

        let mark = self.out.len();
        self.render_expression(expression)?;
        let text = &self.out[mark..];
        let ambiguous = text.starts_with('{')
            || text
                .strip_prefix("function")
                .is_some_and(|rest| !rest.starts_with(is_identifier_char));
        if ambiguous {
            self.out.insert(mark, '(');
            self.out.push(')');
        }
        Ok(())
    }

    fn render_block(&mut self, block: &Block) -> Result<(), RenderError> {
        self.out.push('{');
        for statement in &block.statements {
            self.render_nested(statement.as_ref().unwrap_or(EMPTY_STATEMENT))?;
        }
        self.out.push('}');
        Ok(())
    }

    fn render_conditional(&mut self, conditional: &Conditional) -> Result<(), RenderError> {
        let otherwise = conditional.otherwise.as_deref();
        self.render_if_chain(conditional, otherwise.is_some())?;
        if let Some(otherwise) = otherwise {
            self.out.push_str(" else ");
            self.render_nested(otherwise)?;
        }
        Ok(())
    }

    /// Renders the `if` links of an `else if` chain, oldest first, leaving
    /// the final `else` to the caller.
    fn render_if_chain(
        &mut self,
        conditional: &Conditional,
        followed_by_else: bool,
    ) -> Result<(), RenderError> {
        if let Some(parent) = &conditional.parent {
            self.render_if_chain(parent, true)?;
            self.out.push_str(" else ");
        }

        let condition = required(conditional.condition.as_ref(), "if", "condition")?;
        let then = required(conditional.then.as_deref(), "if", "then branch")?;
        self.out.push_str("if(");
        self.render_expression(condition)?;
        self.out.push(')');

        if followed_by_else && ends_with_open_if(then) {
            // keep the else from binding to the inner if
            self.out.push('{');
            self.render_nested(then)?;
            self.out.push('}');
            Ok(())
        } else {
            self.render_nested(then)
        }
    }

    fn render_loop(&mut self, l: &Loop) -> Result<(), RenderError> {
        let body = required(l.body.as_deref(), "for", "body")?;
        self.out.push_str("for(");
        if let Some(init) = &l.init {
            self.render_expression(init)?;
        }
        self.out.push(';');
        if let Some(condition) = &l.condition {
            self.render_expression(condition)?;
        }
        self.out.push(';');
        if let Some(iteration) = &l.iteration {
            self.render_expression(iteration)?;
        }
        self.out.push(')');
        self.render_nested(body)
    }

    fn render_for_in(&mut self, f: &ForIn) -> Result<(), RenderError> {
        let variable = required(f.variable.as_ref(), "for-in", "variable")?;
        let collection = required(f.collection.as_ref(), "for-in", "collection")?;
        let body = required(f.body.as_deref(), "for-in", "body")?;
        self.out.push_str("for(");
        self.render_expression(variable)?;
        self.out.push_str(" in ");
        self.render_expression(collection)?;
        self.out.push(')');
        self.render_nested(body)
    }

    fn render_switch(&mut self, switch: &Switch) -> Result<(), RenderError> {
        let discriminant = required(switch.discriminant.as_ref(), "switch", "discriminant")?;
        self.out.push_str("switch(");
        self.render_expression(discriminant)?;
        self.out.push_str("){");

        let mut seen_default = false;
        for case in &switch.cases {
            if seen_default {
                return Err(RenderError::DefaultCaseNotLast);
            }
            match &case.value {
                Some(value) => {
                    self.out.push_str("case ");
                    self.render_expression(value)?;
                    self.out.push(':');
                }
                None => {
                    seen_default = true;
                    self.out.push_str("default:");
                }
            }
            for statement in &case.statements {
                self.render_nested(statement.as_ref().unwrap_or(EMPTY_STATEMENT))?;
            }
        }

        self.out.push('}');
        Ok(())
    }

    fn render_label_reference(&mut self, label: Option<&Identifier>) -> Result<(), RenderError> {
        if let Some(label) = label {
            self.out.push(' ');
            self.render_identifier(label, false)?;
        }
        Ok(())
    }

    fn render_try(&mut self, handling: &ExceptionHandling) -> Result<(), RenderError> {
        let body = required(handling.body.as_ref(), "try", "body")?;
        if handling.catch_body.is_some() && handling.catch_variable.is_none() {
            return Err(RenderError::MissingChild {
                node: "catch",
                child: "variable",
            });
        }
        if handling.catch_variable.is_none() && handling.finally.is_none() {
            return Err(RenderError::MissingHandler);
        }

        self.out.push_str("try");
        self.render_block(body)?;
        if let Some(variable) = &handling.catch_variable {
            self.out.push_str("catch(");
            self.render_identifier(variable, false)?;
            self.out.push(')');
            match &handling.catch_body {
                Some(catch_body) => self.render_block(catch_body)?,
                None => self.out.push_str("{}"),
            }
        }
        if let Some(finally) = &handling.finally {
            self.out.push_str("finally");
            self.render_block(finally)?;
        }
        Ok(())
    }

    fn render_comment(&mut self, comment: &Comment) {
        let text = comment.text.as_str();
        let pad = match comment.spacing {
            CommentSpacing::Compact => "",
            CommentSpacing::Padded => " ",
        };
        let style = match comment.style {
            CommentStyle::Auto
                if text.contains(LINE_TERMINATORS) || text.contains("/*") || text.contains("*/") =>
            {
                CommentStyle::SingleLine
            }
            CommentStyle::Auto => CommentStyle::Block,
            explicit => explicit,
        };

        match style {
            CommentStyle::SingleLine => {
                for line in comment_lines(text) {
                    self.out.push_str("//");
                    self.out.push_str(pad);
                    self.out.push_str(line);
                    self.out.push('\n');
                }
            }
            _ => {
                self.out.push_str("/*");
                self.out.push_str(pad);
                self.out.push_str(&text.replace("*/", "* /"));
                self.out.push_str(pad);
                self.out.push_str("*/");
            }
        }
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    pub fn render_expression(&mut self, expression: &Expression) -> Result<(), RenderError> {
        match expression {
            Expression::Identifier(identifier) => self.render_identifier(identifier, false),
            Expression::Number(n) => {
                self.out.push_str(&format_number(*n));
                Ok(())
            }
            Expression::String(text) => {
                self.render_string(text);
                Ok(())
            }
            Expression::Boolean(b) => {
                self.out.push_str(if *b { "true" } else { "false" });
                Ok(())
            }
            Expression::Null => {
                self.out.push_str("null");
                Ok(())
            }
            Expression::Regex(text) | Expression::Snippet(text) => {
                self.out.push_str(text);
                Ok(())
            }
            Expression::This => {
                self.out.push_str("this");
                Ok(())
            }
            Expression::Library => {
                self.out.push_str(self.config.library_identifier.name());
                Ok(())
            }
            Expression::Binary {
                operator,
                left,
                right,
            } => self.render_binary(*operator, left.as_deref(), right.as_deref()),
            Expression::Unary { operator, operand } => {
                self.render_unary(*operator, operand.as_deref().unwrap_or(NULL_EXPRESSION))
            }
            Expression::Conditional {
                condition,
                then,
                otherwise,
            } => {
                self.render_operand(
                    or_null(condition),
                    Precedence::CONDITIONAL,
                    Associativity::LeftToRight,
                )?;
                self.out.push('?');
                self.render_operand(
                    or_null(then),
                    Precedence::ASSIGNMENT,
                    Associativity::RightToLeft,
                )?;
                self.out.push(':');
                self.render_operand(
                    or_null(otherwise),
                    Precedence::CONDITIONAL,
                    Associativity::RightToLeft,
                )
            }
            Expression::Call { callee, arguments } => {
                self.render_member_target(or_null(callee), false)?;
                self.out.push('(');
                self.render_list(arguments)?;
                self.out.push(')');
                Ok(())
            }
            Expression::Index { target, key } => {
                let target = required(target.as_deref(), "index", "target")?;
                let key = required(key.as_deref(), "index", "key")?;
                self.render_member_target(target, false)?;
                self.out.push('[');
                self.render_expression(key)?;
                self.out.push(']');
                Ok(())
            }
            Expression::PropertyAccess { target, member } => {
                let target = required(target.as_deref(), "property access", "target")?;
                self.render_member_target(target, true)?;
                self.out.push('.');
                self.render_identifier(member, true)
            }
            Expression::Array(elements) => {
                self.out.push('[');
                self.render_list(elements)?;
                self.out.push(']');
                Ok(())
            }
            Expression::Object(object) => self.render_object(object),
            Expression::Function(function) => self.render_function(function),
            Expression::Declaration(declarators) => self.render_declaration(declarators),
        }
    }

    /// Renders `child` as an operand of an operator with precedence
    /// `parent`, on the `slot` side, grouping it when required.
    fn render_operand(
        &mut self,
        child: &Expression,
        parent: Precedence,
        slot: Associativity,
    ) -> Result<(), RenderError> {
        if child.precedence().requires_grouping(parent, slot) {
            self.render_group(child)
        } else {
            self.render_expression(child)
        }
    }

    fn render_group(&mut self, child: &Expression) -> Result<(), RenderError> {
        self.out.push('(');
        self.render_expression(child)?;
        self.out.push(')');
        Ok(())
    }

    fn render_binary(
        &mut self,
        operator: BinaryOperator,
        left: Option<&Expression>,
        right: Option<&Expression>,
    ) -> Result<(), RenderError> {
        let precedence = operator.precedence();
        self.render_operand(
            left.unwrap_or(NULL_EXPRESSION),
            precedence,
            Associativity::LeftToRight,
        )?;

        let symbol = operator.symbol();
        self.out.push_str(symbol);
        let mark = self.out.len();
        self.render_operand(
            right.unwrap_or(NULL_EXPRESSION),
            precedence,
            Associativity::RightToLeft,
        )?;
        self.separate_tokens(symbol, mark);
        Ok(())
    }

    fn render_unary(
        &mut self,
        operator: UnaryOperator,
        operand: &Expression,
    ) -> Result<(), RenderError> {
        if operator == UnaryOperator::Group {
            return self.render_group(operand);
        }

        let mark = match operator.prefix() {
            Some(prefix) => {
                self.out.push_str(prefix);
                Some((prefix, self.out.len()))
            }
            None => None,
        };
        self.render_operand(operand, operator.precedence(), operator.operand_slot())?;
        if let Some((prefix, mark)) = mark {
            self.separate_tokens(prefix, mark);
        }
        if let Some(suffix) = operator.suffix() {
            self.out.push_str(suffix);
        }
        Ok(())
    }

    /// Inserts a space at `mark` when the text there would merge with the
    /// preceding operator into a different token (`a- -b`, `a+ ++b`, `a/ /x/`).
    fn separate_tokens(&mut self, symbol: &str, mark: usize) {
        let Some(last) = symbol.chars().last() else {
            return;
        };
        if matches!(last, '+' | '-' | '/') && self.out[mark..].starts_with(last) {
            self.out.insert(mark, ' ');
        }
    }

    /// Renders the object of a call, index, or `.member` access.
    fn render_member_target(
        &mut self,
        target: &Expression,
        dotted: bool,
    ) -> Result<(), RenderError> {
        let group = match target {
            // `1.x` reads as a malformed number, `-1[0]` as `-(1[0])`
            Expression::Number(n) => dotted || n.is_sign_negative(),
            other => other
                .precedence()
                .requires_grouping(Precedence::MEMBER, Associativity::LeftToRight),
        };
        if group {
            self.render_group(target)
        } else {
            self.render_expression(target)
        }
    }

    /// Comma-separated list of call arguments or array elements.
    fn render_list(&mut self, items: &[Option<Expression>]) -> Result<(), RenderError> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.render_operand(
                item.as_ref().unwrap_or(NULL_EXPRESSION),
                Precedence::ASSIGNMENT,
                Associativity::RightToLeft,
            )?;
        }
        Ok(())
    }

    fn render_identifier(
        &mut self,
        identifier: &Identifier,
        allow_reserved_word_as_key: bool,
    ) -> Result<(), RenderError> {
        if identifier.is_reserved() && !allow_reserved_word_as_key {
            return Err(RenderError::ReservedWord(identifier.name().to_string()));
        }
        self.out.push_str(identifier.name());
        Ok(())
    }

    fn render_string(&mut self, text: &str) {
        let quote_char = if self.config.always_quote_object_keys {
            QuoteChar::Double
        } else {
            best_quote_char(text, self.config.quote_char)
        };
        quote_into(&mut *self.out, text, quote_char);
    }

    fn render_object(&mut self, object: &ObjectLiteral) -> Result<(), RenderError> {
        let quote_keys = self.config.always_quote_object_keys;
        self.out.push('{');
        for (i, (key, value)) in object.entries().iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            match key {
                Expression::Identifier(identifier) if quote_keys => {
                    quote_into(&mut *self.out, identifier.name(), QuoteChar::Double)
                }
                Expression::Identifier(identifier) => self.render_identifier(identifier, true)?,
                Expression::String(text) => self.render_string(text),
                // `{-1:x}` is a syntax error
                Expression::Number(n) if quote_keys || n.is_sign_negative() || !n.is_finite() => {
                    self.render_string(&format_number(*n))
                }
                Expression::Number(n) => self.out.push_str(&format_number(*n)),
                _ => return Err(RenderError::InvalidObjectKey),
            }
            self.out.push(':');
            self.render_operand(
                value.as_ref().unwrap_or(NULL_EXPRESSION),
                Precedence::ASSIGNMENT,
                Associativity::RightToLeft,
            )?;
        }
        self.out.push('}');
        Ok(())
    }

    fn render_function(&mut self, function: &Function) -> Result<(), RenderError> {
        self.out.push_str("function");
        if let Some(name) = &function.name {
            self.out.push(' ');
            self.render_identifier(name, false)?;
        }
        self.out.push('(');
        for (i, parameter) in function.parameters.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.render_identifier(parameter, false)?;
        }
        self.out.push(')');
        match &function.body {
            Some(body) => self.render_block(body),
            None => {
                self.out.push_str("{}");
                Ok(())
            }
        }
    }

    fn render_declaration(&mut self, declarators: &[Expression]) -> Result<(), RenderError> {
        if declarators.is_empty() {
            return Err(RenderError::MissingChild {
                node: "declaration",
                child: "declarator",
            });
        }

        self.out.push_str("var ");
        for (i, declarator) in declarators.iter().enumerate() {
            if !is_declarator(declarator) {
                return Err(RenderError::InvalidDeclarator);
            }
            if i > 0 {
                self.out.push(',');
            }
            self.render_operand(
                declarator,
                Precedence::ASSIGNMENT,
                Associativity::RightToLeft,
            )?;
        }
        Ok(())
    }
}

fn is_declarator(expression: &Expression) -> bool {
    match expression {
        Expression::Identifier(_) => true,
        Expression::Binary {
            operator: BinaryOperator::Assign,
            left: Some(left),
            ..
        } => matches!(left.as_ref(), Expression::Identifier(_)),
        _ => false,
    }
}

/// Whether `statement` ends in an `if` without `else`, so that a following
/// `else` would attach to it.
fn ends_with_open_if(statement: &Statement) -> bool {
    match statement {
        Statement::If(conditional) => match &conditional.otherwise {
            None => true,
            Some(otherwise) => ends_with_open_if(otherwise),
        },
        Statement::For(Loop { body: Some(body), .. })
        | Statement::ForIn(ForIn { body: Some(body), .. })
        | Statement::While { body: Some(body), .. }
        | Statement::With { body: Some(body), .. } => ends_with_open_if(body),
        Statement::Label { body, .. } => ends_with_open_if(body),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> Expression {
        Expression::Identifier(Identifier::new(name).unwrap())
    }

    fn to_text(expression: &Expression) -> String {
        expression.render(&RenderConfig::default()).unwrap()
    }

    #[test]
    fn test_separate_tokens_after_minus() {
        let expr = Expression::Binary {
            operator: BinaryOperator::Subtract,
            left: Some(Box::new(id("a"))),
            right: Some(Box::new(Expression::Number(-1.0))),
        };
        assert_eq!(to_text(&expr), "a- -1");
    }

    #[test]
    fn test_separate_tokens_after_prefix() {
        let expr = Expression::Unary {
            operator: UnaryOperator::Negate,
            operand: Some(Box::new(Expression::Unary {
                operator: UnaryOperator::PreDecrement,
                operand: Some(Box::new(id("a"))),
            })),
        };
        assert_eq!(to_text(&expr), "- --a");
    }

    #[test]
    fn test_declarator_shapes() {
        let assign = Expression::Binary {
            operator: BinaryOperator::Assign,
            left: Some(Box::new(id("a"))),
            right: Some(Box::new(Expression::Number(1.0))),
        };
        assert!(is_declarator(&id("a")));
        assert!(is_declarator(&assign));
        assert!(!is_declarator(&Expression::Number(1.0)));
    }

    #[test]
    fn test_comment_lines_split_on_every_terminator() {
        let lines: Vec<&str> = comment_lines("a\r\nb\rc\nd\u{2028}e\u{2029}f").collect();
        assert_eq!(lines, ["a", "b", "c", "d", "e", "f"]);
        assert_eq!(comment_lines("").collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn test_open_if_through_loop_body() {
        let inner = Statement::If(Conditional {
            condition: Some(id("b")),
            then: Some(Box::new(Statement::Empty)),
            ..Default::default()
        });
        let body = Statement::While {
            condition: Some(id("c")),
            body: Some(Box::new(inner)),
        };
        assert!(ends_with_open_if(&body));
        assert!(!ends_with_open_if(&Statement::Empty));
    }
}
