use crate::ast::{BinaryOperator, Block, Identifier, Precedence, UnaryOperator};

/// A node that always yields a value.
///
/// Children that may be left unset are `Option`s. An unset expression child
/// renders as `null`; the tree itself is never modified to reflect that.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    // Literals
    /// Bare identifier
    ///
    /// # Example
    /// ```text
    /// total
    /// ```
    Identifier(Identifier),

    /// Number literal, rendered with locale-invariant formatting
    Number(f64),

    /// String literal, quoted and escaped at render time
    String(String),

    /// `true` or `false`
    Boolean(bool),

    /// `null`
    Null,

    /// Regular expression literal, emitted verbatim
    ///
    /// # Example
    /// ```text
    /// /^\d+$/g
    /// ```
    Regex(String),

    /// Raw source text, emitted verbatim
    Snippet(String),

    /// `this`
    This,

    /// The library entry point named by the render configuration
    ///
    /// # Example
    /// ```text
    /// jQuery
    /// ```
    Library,

    // Operations
    /// Binary operation
    ///
    /// # Examples
    /// ```text
    /// a*3+b*2
    /// x=y=0
    /// ```
    Binary {
        operator: BinaryOperator,
        left: Option<Box<Expression>>,
        right: Option<Box<Expression>>,
    },

    /// Prefix or postfix operation
    Unary {
        operator: UnaryOperator,
        operand: Option<Box<Expression>>,
    },

    /// Ternary conditional
    ///
    /// # Example
    /// ```text
    /// a?b:c
    /// ```
    Conditional {
        condition: Option<Box<Expression>>,
        then: Option<Box<Expression>>,
        otherwise: Option<Box<Expression>>,
    },

    // Access
    /// Function call
    ///
    /// # Example
    /// ```text
    /// alert("done!")
    /// ```
    Call {
        callee: Option<Box<Expression>>,
        arguments: Vec<Option<Expression>>,
    },

    /// Computed member access
    ///
    /// # Example
    /// ```text
    /// items[0]
    /// ```
    Index {
        target: Option<Box<Expression>>,
        key: Option<Box<Expression>>,
    },

    /// Dotted member access; the member is always a bare name
    ///
    /// # Example
    /// ```text
    /// document.body
    /// ```
    PropertyAccess {
        target: Option<Box<Expression>>,
        member: Identifier,
    },

    // Composite literals
    /// Array literal
    Array(Vec<Option<Expression>>),

    /// Object literal
    Object(ObjectLiteral),

    /// Function expression
    Function(Function),

    /// `var` declaration of identifiers or assignments
    ///
    /// # Example
    /// ```text
    /// var i=0,n
    /// ```
    Declaration(Vec<Expression>),
}

impl Expression {
    /// Binding strength of this node's operator. Depends only on the kind of
    /// node, never on its children.
    pub fn precedence(&self) -> Precedence {
        match self {
            Expression::Binary { operator, .. } => operator.precedence(),
            Expression::Unary { operator, .. } => operator.precedence(),
            Expression::Conditional { .. } => Precedence::CONDITIONAL,
            Expression::Call { .. }
            | Expression::Index { .. }
            | Expression::PropertyAccess { .. } => Precedence::MEMBER,
            Expression::Declaration(_) => Precedence::DECLARATION,
            _ => Precedence::ATOMIC,
        }
    }
}

/// Key/value pairs of an object literal, in insertion order.
///
/// Keys are unique by structural equality; inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectLiteral {
    entries: Vec<(Expression, Option<Expression>)>,
}

impl ObjectLiteral {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: Expression, value: Option<Expression>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &Expression) -> Option<&Option<Expression>> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn entries(&self) -> &[(Expression, Option<Expression>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Function expression.
///
/// # Example
/// ```text
/// function add(a,b){return a+b;}
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Function {
    pub name: Option<Identifier>,
    pub parameters: Vec<Identifier>,
    pub body: Option<Block>,
}
