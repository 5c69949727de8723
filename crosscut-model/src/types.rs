//! Type references with generic parameters.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A fully qualified type reference, optionally carrying generic parameters.
///
/// References are immutable and compare by fully qualified name (then by
/// parameters), so collections of them sort deterministically — import lists
/// rely on this ordering.
///
/// # Example
///
/// ```
/// use crosscut_model::TypeReference;
///
/// let ty: TypeReference = "java.util.Map<java.lang.String, com.acme.Widget>"
///     .parse()
///     .unwrap();
/// assert_eq!(ty.simple_name(), "Map");
/// assert_eq!(ty.package(), "java.util");
/// assert_eq!(ty.parameters().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeReference {
    fully_qualified: String,
    parameters: Vec<TypeReference>,
}

impl TypeReference {
    /// Create a reference from a fully qualified name with no parameters.
    pub fn new(fully_qualified: impl Into<String>) -> Self {
        Self {
            fully_qualified: fully_qualified.into(),
            parameters: Vec::new(),
        }
    }

    /// Create a reference with generic parameters.
    pub fn parameterized(
        fully_qualified: impl Into<String>,
        parameters: impl IntoIterator<Item = TypeReference>,
    ) -> Self {
        Self {
            fully_qualified: fully_qualified.into(),
            parameters: parameters.into_iter().collect(),
        }
    }

    /// The fully qualified name, without generic parameters.
    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified
    }

    /// The text after the last `.` of the fully qualified name.
    pub fn simple_name(&self) -> &str {
        match self.fully_qualified.rfind('.') {
            Some(dot) => &self.fully_qualified[dot + 1..],
            None => &self.fully_qualified,
        }
    }

    /// The package portion of the name, empty for the default package.
    pub fn package(&self) -> &str {
        match self.fully_qualified.rfind('.') {
            Some(dot) => &self.fully_qualified[..dot],
            None => "",
        }
    }

    /// The generic parameters, in declaration order.
    pub fn parameters(&self) -> &[TypeReference] {
        &self.parameters
    }

    /// Render the reference and all of its parameters fully qualified.
    ///
    /// Used where short forms are not allowed, e.g. when a simple name would
    /// collide with an existing import.
    pub fn fully_qualified_with_parameters(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified)?;
        if let Some((first, rest)) = self.parameters.split_first() {
            write!(f, "<{}", first)?;
            for parameter in rest {
                write!(f, ", {}", parameter)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// Error produced when parsing a [`TypeReference`] from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeParseError {
    #[error("empty type name")]
    Empty,

    #[error("invalid identifier at byte {0}")]
    InvalidIdentifier(usize),

    #[error("unbalanced angle brackets")]
    UnbalancedAngleBrackets,

    #[error("unexpected trailing input at byte {0}")]
    TrailingInput(usize),
}

impl FromStr for TypeReference {
    type Err = TypeParseError;

    /// Parse `pkg.Name` syntax with optional `<...>` parameters, e.g.
    /// `java.util.Map<java.lang.String, com.acme.Widget>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser {
            input: s.trim(),
            pos: 0,
        };
        if parser.input.is_empty() {
            return Err(TypeParseError::Empty);
        }
        let reference = parser.parse_type()?;
        parser.skip_spaces();
        if parser.pos < parser.input.len() {
            return Err(TypeParseError::TrailingInput(parser.pos));
        }
        Ok(reference)
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(b' ') | Some(b'\t')) {
            self.bump();
        }
    }

    fn parse_type(&mut self) -> Result<TypeReference, TypeParseError> {
        let fully_qualified = self.parse_qualified_name()?;
        let mut parameters = Vec::new();
        if self.peek() == Some(b'<') {
            self.bump();
            loop {
                self.skip_spaces();
                parameters.push(self.parse_type()?);
                self.skip_spaces();
                match self.peek() {
                    Some(b',') => self.bump(),
                    Some(b'>') => {
                        self.bump();
                        break;
                    }
                    _ => return Err(TypeParseError::UnbalancedAngleBrackets),
                }
            }
        }
        Ok(TypeReference {
            fully_qualified,
            parameters,
        })
    }

    fn parse_qualified_name(&mut self) -> Result<String, TypeParseError> {
        let start = self.pos;
        loop {
            self.parse_identifier()?;
            if self.peek() == Some(b'.') {
                self.bump();
            } else {
                break;
            }
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn parse_identifier(&mut self) -> Result<(), TypeParseError> {
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == b'_' || c == b'$' => self.bump(),
            _ => return Err(TypeParseError::InvalidIdentifier(self.pos)),
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == b'_' || c == b'$' {
                self.bump();
            } else {
                break;
            }
        }
        Ok(())
    }
}
