use crate::ast::{Expression, Identifier};

/// A node of the statement grammar. Expressions are statements too, via
/// [`Statement::Expression`].
///
/// Unset statement children inside blocks and cases render as the empty
/// statement. Unset conditions and bodies of control statements are render
/// errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Expression used as a statement
    Expression(Expression),

    /// `{ ... }`
    Block(Block),

    /// `;`
    Empty,

    /// `if(...)...else ...`, possibly chained through `else if`
    If(Conditional),

    /// `for(init;condition;iteration)body`
    For(Loop),

    /// `for(variable in collection)body`
    ForIn(ForIn),

    /// `while(condition)body`
    While {
        condition: Option<Expression>,
        body: Option<Box<Statement>>,
    },

    /// `do body while(condition)`
    DoWhile {
        body: Option<Box<Statement>>,
        condition: Option<Expression>,
    },

    /// `switch(discriminant){case ...}`
    Switch(Switch),

    /// `break` with optional label
    Break(Option<Identifier>),

    /// `continue` with optional label
    Continue(Option<Identifier>),

    /// `return` with optional value
    Return(Option<Expression>),

    /// `throw value`
    Throw(Expression),

    /// `name:body`
    Label {
        name: Identifier,
        body: Box<Statement>,
    },

    /// `with(object)body`
    With {
        object: Option<Expression>,
        body: Option<Box<Statement>>,
    },

    /// `try{...}catch(e){...}finally{...}`
    Try(ExceptionHandling),

    /// `//...` or `/*...*/`
    Comment(Comment),
}

impl Statement {
    /// Whether a `;` must follow this statement when it appears in a
    /// statement list.
    pub fn requires_terminator(&self) -> bool {
        match self {
            Statement::Expression(Expression::Function(function)) => function.name.is_none(),
            Statement::Expression(_)
            | Statement::Empty
            | Statement::DoWhile { .. }
            | Statement::Break(_)
            | Statement::Continue(_)
            | Statement::Return(_)
            | Statement::Throw(_) => true,
            Statement::Label { body, .. } => body.requires_terminator(),
            Statement::Block(_)
            | Statement::If(_)
            | Statement::For(_)
            | Statement::ForIn(_)
            | Statement::While { .. }
            | Statement::Switch(_)
            | Statement::With { .. }
            | Statement::Try(_)
            | Statement::Comment(_) => false,
        }
    }
}

impl From<Expression> for Statement {
    fn from(expression: Expression) -> Self {
        Statement::Expression(expression)
    }
}

impl From<Block> for Statement {
    fn from(block: Block) -> Self {
        Statement::Block(block)
    }
}

impl From<Conditional> for Statement {
    fn from(conditional: Conditional) -> Self {
        Statement::If(conditional)
    }
}

impl From<Loop> for Statement {
    fn from(l: Loop) -> Self {
        Statement::For(l)
    }
}

impl From<ForIn> for Statement {
    fn from(f: ForIn) -> Self {
        Statement::ForIn(f)
    }
}

impl From<Switch> for Statement {
    fn from(switch: Switch) -> Self {
        Statement::Switch(switch)
    }
}

impl From<ExceptionHandling> for Statement {
    fn from(handling: ExceptionHandling) -> Self {
        Statement::Try(handling)
    }
}

impl From<Comment> for Statement {
    fn from(comment: Comment) -> Self {
        Statement::Comment(comment)
    }
}

/// Ordered statement list rendered inside braces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Option<Statement>>,
}

/// A single statement becomes a one-statement block; a block stays as is.
impl From<Statement> for Block {
    fn from(statement: Statement) -> Self {
        match statement {
            Statement::Block(block) => block,
            other => Block {
                statements: vec![Some(other)],
            },
        }
    }
}

impl From<Expression> for Block {
    fn from(expression: Expression) -> Self {
        Block::from(Statement::Expression(expression))
    }
}

impl FromIterator<Statement> for Block {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Block {
            statements: iter.into_iter().map(Some).collect(),
        }
    }
}

/// `if` statement.
///
/// `parent` links to the preceding `if` of an `else if` chain; its own
/// `otherwise` branch is never rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conditional {
    pub condition: Option<Expression>,
    pub then: Option<Box<Statement>>,
    pub otherwise: Option<Box<Statement>>,
    pub parent: Option<Box<Conditional>>,
}

/// General `for` loop.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Loop {
    pub init: Option<Expression>,
    pub condition: Option<Expression>,
    pub iteration: Option<Expression>,
    pub body: Option<Box<Statement>>,
}

/// `for...in` loop. The variable is an identifier or a declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForIn {
    pub variable: Option<Expression>,
    pub collection: Option<Expression>,
    pub body: Option<Box<Statement>>,
}

/// `switch` statement. A case without a value is `default` and must be the
/// last one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Switch {
    pub discriminant: Option<Expression>,
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Case {
    pub value: Option<Expression>,
    pub statements: Vec<Option<Statement>>,
}

impl Case {
    pub fn is_default(&self) -> bool {
        self.value.is_none()
    }
}

/// `try`/`catch`/`finally`.
///
/// A catch block needs a catch variable, and at least one of the catch and
/// finally blocks must be present.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExceptionHandling {
    pub body: Option<Block>,
    pub catch_variable: Option<Identifier>,
    pub catch_body: Option<Block>,
    pub finally: Option<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentStyle {
    /// Line comments for multi-line text or text containing `/*` or `*/`,
    /// a block comment otherwise
    #[default]
    Auto,
    /// One `//` comment per line
    SingleLine,
    /// A single `/* */` comment
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentSpacing {
    /// `//text`, `/*text*/`
    #[default]
    Compact,
    /// `// text`, `/* text */`
    Padded,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comment {
    pub text: String,
    pub style: CommentStyle,
    pub spacing: CommentSpacing,
}
