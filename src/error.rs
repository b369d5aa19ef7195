use thiserror::Error;

/// Errors that can occur while parsing a formula or evaluating it.
///
/// Positions are 1-based character offsets into the source formula.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// The lexer produced an illegal token (unknown character or bad `[...]` literal).
    #[error("illegal token {literal:?} at position {position}")]
    IllegalToken { literal: String, position: usize },

    /// An operator did not find enough operands on the evaluation stack.
    #[error("operator {operator:?} at position {position} is missing an operand")]
    StackUnderflow { operator: String, position: usize },

    /// An identifier reached the evaluator without being assigned a value.
    #[error("variable {name:?} at position {position} has no assigned value")]
    UnboundVariable { name: String, position: usize },

    /// A token the evaluator cannot interpret.
    #[error("unexpected token {literal:?} at position {position}")]
    UnexpectedToken { literal: String, position: usize },

    #[error("expression is empty")]
    EmptyExpression,

    /// The expression left more than one value on the stack.
    #[error("expression leaves {count} values on the stack, expected 1")]
    DanglingOperands { count: usize },

    #[error("formula has {count} variables, the limit is {limit}")]
    TooManyVariables { count: usize, limit: usize },
}
