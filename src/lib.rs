#![warn(clippy::disallowed_types)]

pub use error::FormulaError;
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::ParsedFormula;
pub use symbols::*;
pub use truth_table::{TruthTable, TruthTableEntry, TruthTableRow};

pub mod eval;
pub mod lexer;
pub mod parser;
pub mod truth_table;

mod error;
mod table_io;

mod symbols;
