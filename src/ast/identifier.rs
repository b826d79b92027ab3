use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{Nl}$_][\p{L}\p{Nl}\p{Mn}\p{Mc}\p{Nd}\p{Pc}$_]*$")
        .expect("identifier pattern is valid")
});

/// Keywords, future reserved words, and literal names that cannot be used
/// as bare identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "double",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "function",
    "goto",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "int",
    "interface",
    "let",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "volatile",
    "while",
    "with",
    "yield",
];

pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.binary_search(&name).is_ok()
}

/// Whether `name` matches the identifier grammar, ignoring reserved words.
pub fn is_identifier_name(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Errors raised while constructing tree nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Text that does not match the identifier grammar
    InvalidIdentifier(String),

    /// A reserved word used where a bare identifier is required
    ReservedWord(String),

    /// A quote character other than `'` or `"`
    InvalidQuoteChar(char),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidIdentifier(name) => write!(f, "Invalid identifier: '{}'", name),
            BuildError::ReservedWord(name) => {
                write!(f, "Reserved word: '{}' cannot be used as an identifier", name)
            }
            BuildError::InvalidQuoteChar(c) => {
                write!(f, "Invalid quote character: {:?} (expected ' or \")", c)
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// A validated identifier.
///
/// Identifiers built with [`Identifier::new`] are never reserved words.
/// [`Identifier::key`] admits reserved words for property-name positions
/// (`{function: 1}`, `a.default`); the renderer rejects such an identifier
/// anywhere else.
///
/// # Examples
///
/// ```
/// use jsemit::ast::Identifier;
///
/// assert!(Identifier::new("$el").is_ok());
/// assert!(Identifier::new("2fast").is_err());
/// assert!(Identifier::new("class").is_err());
/// assert!(Identifier::key("class").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Result<Self, BuildError> {
        let name = name.into();
        validate(&name, false)?;
        Ok(Identifier { name })
    }

    /// Identifier for a property-name position; reserved words are allowed.
    pub fn key(name: impl Into<String>) -> Result<Self, BuildError> {
        let name = name.into();
        validate(&name, true)?;
        Ok(Identifier { name })
    }

    /// Caller guarantees `name` is a valid, non-reserved identifier.
    pub(crate) fn trusted(name: &str) -> Self {
        Identifier {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the name, keeping the old one if `name` is not a valid,
    /// non-reserved identifier.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), BuildError> {
        let name = name.into();
        validate(&name, false)?;
        self.name = name;
        Ok(())
    }

    pub fn is_reserved(&self) -> bool {
        is_reserved_word(&self.name)
    }
}

fn validate(name: &str, allow_reserved: bool) -> Result<(), BuildError> {
    if !is_identifier_name(name) {
        return Err(BuildError::InvalidIdentifier(name.to_string()));
    }
    if !allow_reserved && is_reserved_word(name) {
        return Err(BuildError::ReservedWord(name.to_string()));
    }
    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = BuildError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Identifier::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words_sorted() {
        // binary_search depends on it
        let mut sorted = RESERVED_WORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, RESERVED_WORDS);
    }

    #[test]
    fn test_unicode_identifiers() {
        assert!(is_identifier_name("café"));
        assert!(is_identifier_name("_private"));
        assert!(is_identifier_name("ünïcødé9"));
        assert!(!is_identifier_name("a-b"));
        assert!(!is_identifier_name(""));
        assert!(!is_identifier_name("a b"));
    }

    #[test]
    fn test_set_name_keeps_old_on_error() {
        let mut id = Identifier::new("a").unwrap();
        assert_eq!(id.set_name("for"), Err(BuildError::ReservedWord("for".into())));
        assert_eq!(id.name(), "a");
        id.set_name("b").unwrap();
        assert_eq!(id.name(), "b");
    }
}
