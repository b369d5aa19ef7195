use crate::error::FormulaError;
use crate::eval::{evaluate, substitute};
use crate::lexer::{Token, TokenKind};
use itertools::Itertools;
use log::debug;
use rustc_hash::FxHashSet;
use std::{
    fmt::{self, Display},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Single cell in a truth table.
///
/// Cells are displayed with the symbols `V` and `F`.
pub enum TruthTableEntry {
    True,
    False,
}

impl TruthTableEntry {
    const fn variants<'a>() -> &'a [Self] {
        &[Self::True, Self::False]
    }

    fn matches(&self, s: &str) -> bool {
        match self {
            Self::True => matches!(s, "V" | "v" | "true" | "True" | "t" | "T" | "1"),
            Self::False => matches!(s, "F" | "f" | "false" | "False" | "0"),
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::True => "V",
            Self::False => "F",
        }
    }

    pub fn is_true(self) -> bool {
        self == Self::True
    }

    pub fn is_false(self) -> bool {
        self == Self::False
    }
}

impl From<bool> for TruthTableEntry {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<TruthTableEntry> for bool {
    fn from(entry: TruthTableEntry) -> Self {
        entry.is_true()
    }
}

impl Display for TruthTableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for TruthTableEntry {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::variants()
            .iter()
            .find(|variant| variant.matches(s))
            .ok_or_else(|| anyhow::anyhow!("cannot parse {s} as truth-table entry"))
            .copied()
    }
}

/// Collects the distinct identifier names of `tokens` in order of first appearance.
pub fn extract_variables<'a, I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Token>,
{
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut vars = Vec::new();

    for token in tokens {
        if token.kind() == TokenKind::Identifier && seen.insert(token.literal()) {
            vars.push(token.literal().to_string());
        }
    }

    vars
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableRow {
    /// One entry per variable, in the order of [`TruthTable::variables`].
    pub assignment: Vec<TruthTableEntry>,
    pub result: TruthTableEntry,
}

impl TruthTableRow {
    pub fn values(&self) -> Vec<bool> {
        self.assignment.iter().map(|&e| e.into()).collect()
    }
}

/// Exhaustive evaluation of a formula over all assignments of its variables.
///
/// Rows follow a descending binary counter with the first variable as the most
/// significant bit: for variables `A, B` the assignments are `VV`, `VF`, `FV`, `FF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<String>,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Generates the table for a postfix token sequence.
    pub fn generate(postfix: &[Token]) -> Result<Self, FormulaError> {
        let variables = extract_variables(postfix);
        let n = variables.len();

        debug!("generating {} rows over [{}]", 1u64 << n, variables.iter().join(", "));

        let mut rows = Vec::with_capacity(1 << n);

        for i in (0..1u64 << n).rev() {
            let values: Vec<bool> = (0..n).rev().map(|j| (i >> j) & 1 == 1).collect();
            let result = evaluate(substitute(postfix, &variables, &values))?;

            rows.push(TruthTableRow {
                assignment: values.into_iter().map(TruthTableEntry::from).collect(),
                result: result.into(),
            });
        }

        Ok(Self { variables, rows })
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// The table as rows of display symbols. Row 0 is the header of variable names.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        let header = self.variables.clone();

        std::iter::once(header)
            .chain(self.rows.iter().map(|row| {
                row.assignment
                    .iter()
                    .chain(std::iter::once(&row.result))
                    .map(|e| e.symbol().to_string())
                    .collect()
            }))
            .collect()
    }

    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result.is_true())
    }

    pub fn is_tautology(&self) -> bool {
        self.results().all(|r| r)
    }

    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    pub fn is_satisfiable(&self) -> bool {
        self.results().any(|r| r)
    }

    /// Rows whose result is true.
    pub fn models(&self) -> impl Iterator<Item = &TruthTableRow> + '_ {
        self.rows.iter().filter(|row| row.result.is_true())
    }
}
