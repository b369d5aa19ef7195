use std::fmt;

/// Whitespace that separates tokens: space, tab and newline.
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Identifiers are single uppercase ASCII letters.
pub const fn is_identifier(c: char) -> bool {
    c.is_ascii_uppercase()
}

pub const fn is_operator(c: char) -> bool {
    Operator::from_glyph(c).is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Logical connective, written as a single Unicode glyph.
///
/// | glyph | operator      | precedence |
/// |-------|---------------|------------|
/// | `~`   | negation      | 6          |
/// | `∧`   | conjunction   | 5          |
/// | `v`   | disjunction   | 4          |
/// | `⊻`   | exclusive or  | 3          |
/// | `→`   | implication   | 2          |
/// | `↔`   | biconditional | 1          |
///
/// Note that disjunction is the lowercase letter `v`, which is why identifiers are
/// restricted to uppercase letters.
pub enum Operator {
    Not,
    And,
    Or,
    Xor,
    Implies,
    Iff,
}

impl Operator {
    pub const fn variants<'a>() -> &'a [Self] {
        &[
            Self::Not,
            Self::And,
            Self::Or,
            Self::Xor,
            Self::Implies,
            Self::Iff,
        ]
    }

    pub const fn from_glyph(c: char) -> Option<Self> {
        match c {
            '~' => Some(Self::Not),
            '∧' => Some(Self::And),
            'v' => Some(Self::Or),
            '⊻' => Some(Self::Xor),
            '→' => Some(Self::Implies),
            '↔' => Some(Self::Iff),
            _ => None,
        }
    }

    pub fn from_literal(literal: &str) -> Option<Self> {
        let mut chars = literal.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_glyph(c),
            _ => None,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Not => '~',
            Self::And => '∧',
            Self::Or => 'v',
            Self::Xor => '⊻',
            Self::Implies => '→',
            Self::Iff => '↔',
        }
    }

    /// Binding strength; higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Not => 6,
            Self::And => 5,
            Self::Or => 4,
            Self::Xor => 3,
            Self::Implies => 2,
            Self::Iff => 1,
        }
    }

    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not)
    }

    /// Applies a binary connective. Negation ignores `left` and negates `right`.
    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Self::Not => !right,
            Self::And => left && right,
            Self::Or => left || right,
            Self::Xor => left != right,
            Self::Implies => !(left && !right),
            Self::Iff => left == right,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = anyhow::Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_glyph(c).ok_or_else(|| anyhow::anyhow!("{c:?} is not an operator glyph"))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
