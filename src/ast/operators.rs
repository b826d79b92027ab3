use crate::ast::{Associativity, Precedence};

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    // Assignment
    /// Assignment (`=`)
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubtractAssign,
    /// `*=`
    MultiplyAssign,
    /// `/=`
    DivideAssign,
    /// `%=`
    ModuloAssign,
    /// `<<=`
    LeftShiftAssign,
    /// `>>=`
    RightShiftAssign,
    /// `>>>=`
    UnsignedRightShiftAssign,
    /// `&=`
    BitwiseAndAssign,
    /// `|=`
    BitwiseOrAssign,
    /// `^=`
    BitwiseXorAssign,

    /// Sequence (`,`)
    Comma,

    // Logical
    /// `||`
    LogicalOr,
    /// `&&`
    LogicalAnd,

    // Bitwise
    /// `|`
    BitwiseOr,
    /// `^`
    BitwiseXor,
    /// `&`
    BitwiseAnd,

    // Equality
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `===`
    StrictEqual,
    /// `!==`
    StrictNotEqual,

    // Relational
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `<=`
    LessThanOrEqual,
    /// `>=`
    GreaterThanOrEqual,
    /// `instanceof`
    InstanceOf,
    /// `in`
    In,

    // Shift
    /// `<<`
    LeftShift,
    /// `>>`
    RightShift,
    /// `>>>`
    UnsignedRightShift,

    // Arithmetic
    /// Addition or string concatenation (`+`)
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
}

impl BinaryOperator {
    /// Source text emitted between the operands. Keyword operators carry
    /// their own surrounding spaces.
    pub fn symbol(self) -> &'static str {
        use BinaryOperator::*;
        match self {
            Assign => "=",
            AddAssign => "+=",
            SubtractAssign => "-=",
            MultiplyAssign => "*=",
            DivideAssign => "/=",
            ModuloAssign => "%=",
            LeftShiftAssign => "<<=",
            RightShiftAssign => ">>=",
            UnsignedRightShiftAssign => ">>>=",
            BitwiseAndAssign => "&=",
            BitwiseOrAssign => "|=",
            BitwiseXorAssign => "^=",
            Comma => ",",
            LogicalOr => "||",
            LogicalAnd => "&&",
            BitwiseOr => "|",
            BitwiseXor => "^",
            BitwiseAnd => "&",
            Equal => "==",
            NotEqual => "!=",
            StrictEqual => "===",
            StrictNotEqual => "!==",
            LessThan => "<",
            GreaterThan => ">",
            LessThanOrEqual => "<=",
            GreaterThanOrEqual => ">=",
            InstanceOf => " instanceof ",
            In => " in ",
            LeftShift => "<<",
            RightShift => ">>",
            UnsignedRightShift => ">>>",
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
            Modulo => "%",
        }
    }

    pub fn precedence(self) -> Precedence {
        use BinaryOperator::*;
        match self {
            Assign | AddAssign | SubtractAssign | MultiplyAssign | DivideAssign | ModuloAssign
            | LeftShiftAssign | RightShiftAssign | UnsignedRightShiftAssign | BitwiseAndAssign
            | BitwiseOrAssign | BitwiseXorAssign => Precedence::ASSIGNMENT,
            Comma => Precedence::SEQUENCE,
            LogicalOr => Precedence::LOGICAL_OR,
            LogicalAnd => Precedence::LOGICAL_AND,
            BitwiseOr => Precedence::BITWISE_OR,
            BitwiseXor => Precedence::BITWISE_XOR,
            BitwiseAnd => Precedence::BITWISE_AND,
            Equal | NotEqual | StrictEqual | StrictNotEqual => Precedence::EQUALITY,
            LessThan | GreaterThan | LessThanOrEqual | GreaterThanOrEqual | InstanceOf | In => {
                Precedence::RELATIONAL
            }
            LeftShift | RightShift | UnsignedRightShift => Precedence::SHIFT,
            Add | Subtract => Precedence::ADDITIVE,
            Multiply | Divide | Modulo => Precedence::MULTIPLICATIVE,
        }
    }

    pub fn is_assignment(self) -> bool {
        self.precedence() == Precedence::ASSIGNMENT
    }
}

/// Prefix and postfix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+a`
    Positive,
    /// `-a`
    Negate,
    /// `~a`
    BitwiseNot,
    /// `!a`
    LogicalNot,
    /// `++a`
    PreIncrement,
    /// `--a`
    PreDecrement,
    /// `a++`
    PostIncrement,
    /// `a--`
    PostDecrement,
    /// `typeof a`
    TypeOf,
    /// `void a`
    Void,
    /// `delete a`
    Delete,
    /// `new a`
    New,
    /// `(a)`
    Group,
}

impl UnaryOperator {
    pub fn prefix(self) -> Option<&'static str> {
        use UnaryOperator::*;
        match self {
            Positive => Some("+"),
            Negate => Some("-"),
            BitwiseNot => Some("~"),
            LogicalNot => Some("!"),
            PreIncrement => Some("++"),
            PreDecrement => Some("--"),
            TypeOf => Some("typeof "),
            Void => Some("void "),
            Delete => Some("delete "),
            New => Some("new "),
            Group => Some("("),
            PostIncrement | PostDecrement => None,
        }
    }

    pub fn suffix(self) -> Option<&'static str> {
        use UnaryOperator::*;
        match self {
            PostIncrement => Some("++"),
            PostDecrement => Some("--"),
            Group => Some(")"),
            _ => None,
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            UnaryOperator::New => Precedence::NEW,
            UnaryOperator::Group => Precedence::ATOMIC,
            _ => Precedence::UNARY,
        }
    }

    /// The side of the operator its operand occupies, for grouping decisions.
    ///
    /// `new` takes its operand on the left slot so that `new Foo(1)` keeps
    /// the call unwrapped.
    pub fn operand_slot(self) -> Associativity {
        match self {
            UnaryOperator::PostIncrement | UnaryOperator::PostDecrement | UnaryOperator::New => {
                Associativity::LeftToRight
            }
            _ => Associativity::RightToLeft,
        }
    }
}
