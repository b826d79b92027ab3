/// Evaluation direction used to break ties between operators of equal level.
///
/// When deciding whether a child needs parentheses, the same type names the
/// side of the parent the child sits on: `LeftToRight` for a left operand,
/// `RightToLeft` for a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    LeftToRight,
    RightToLeft,
}

/// Binding strength of an operator. Higher levels bind tighter.
///
/// # Examples
///
/// ```
/// use jsemit::ast::{Associativity, Precedence};
///
/// let multiplicative = Precedence::new(13, Associativity::LeftToRight);
/// let additive = Precedence::new(12, Associativity::LeftToRight);
///
/// // `a+b` under `*` must be grouped
/// assert!(additive.requires_grouping(multiplicative, Associativity::LeftToRight));
/// // `a*b` under `+` never is
/// assert!(!multiplicative.requires_grouping(additive, Associativity::RightToLeft));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precedence {
    pub level: u32,
    pub associativity: Associativity,
}

impl Precedence {
    /// Sentinel for operators outside the built-in table. Used as a parent
    /// precedence it forces every operand into parentheses.
    pub const QUARANTINE: Precedence = Precedence::new(u32::MAX, Associativity::LeftToRight);

    /// Literals, identifiers, and explicit groups.
    pub const ATOMIC: Precedence = Precedence::new(16, Associativity::LeftToRight);

    /// Member access, calls, indexing.
    pub const MEMBER: Precedence = Precedence::new(15, Associativity::LeftToRight);

    /// `new`
    pub const NEW: Precedence = Precedence::new(15, Associativity::RightToLeft);

    /// Prefix and postfix operators other than `new`.
    pub const UNARY: Precedence = Precedence::new(14, Associativity::RightToLeft);

    pub const MULTIPLICATIVE: Precedence = Precedence::new(13, Associativity::LeftToRight);
    pub const ADDITIVE: Precedence = Precedence::new(12, Associativity::LeftToRight);
    pub const SHIFT: Precedence = Precedence::new(11, Associativity::LeftToRight);
    pub const RELATIONAL: Precedence = Precedence::new(10, Associativity::LeftToRight);
    pub const EQUALITY: Precedence = Precedence::new(9, Associativity::LeftToRight);
    pub const BITWISE_AND: Precedence = Precedence::new(8, Associativity::LeftToRight);
    pub const BITWISE_XOR: Precedence = Precedence::new(7, Associativity::LeftToRight);
    pub const BITWISE_OR: Precedence = Precedence::new(6, Associativity::LeftToRight);
    pub const LOGICAL_AND: Precedence = Precedence::new(5, Associativity::LeftToRight);
    pub const LOGICAL_OR: Precedence = Precedence::new(4, Associativity::LeftToRight);

    /// `cond ? a : b`
    pub const CONDITIONAL: Precedence = Precedence::new(3, Associativity::RightToLeft);

    /// `=` and the compound assignments.
    pub const ASSIGNMENT: Precedence = Precedence::new(2, Associativity::RightToLeft);

    /// The comma operator.
    pub const SEQUENCE: Precedence = Precedence::new(1, Associativity::LeftToRight);

    /// `var` declarations; never valid as an operand.
    pub const DECLARATION: Precedence = Precedence::new(0, Associativity::LeftToRight);

    pub const fn new(level: u32, associativity: Associativity) -> Self {
        Precedence {
            level,
            associativity,
        }
    }

    /// Whether a child with this precedence must be parenthesized when it
    /// occupies the `slot` side of an operator with precedence `parent`.
    pub fn requires_grouping(self, parent: Precedence, slot: Associativity) -> bool {
        (self.level == parent.level && self.associativity != slot) || self.level < parent.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_associative_chain() {
        let add = Precedence::ADDITIVE;
        assert!(!add.requires_grouping(add, Associativity::LeftToRight));
        assert!(add.requires_grouping(add, Associativity::RightToLeft));
    }

    #[test]
    fn test_right_associative_chain() {
        let assign = Precedence::ASSIGNMENT;
        assert!(!assign.requires_grouping(assign, Associativity::RightToLeft));
        assert!(assign.requires_grouping(assign, Associativity::LeftToRight));
    }

    #[test]
    fn test_quarantine_groups_everything() {
        for child in [Precedence::ATOMIC, Precedence::MEMBER, Precedence::SEQUENCE] {
            assert!(child.requires_grouping(Precedence::QUARANTINE, Associativity::LeftToRight));
            assert!(child.requires_grouping(Precedence::QUARANTINE, Associativity::RightToLeft));
        }
    }

    #[test]
    fn test_atomic_never_grouped_by_table_operators() {
        for parent in [Precedence::MEMBER, Precedence::UNARY, Precedence::MULTIPLICATIVE] {
            assert!(!Precedence::ATOMIC.requires_grouping(parent, Associativity::RightToLeft));
        }
    }
}
