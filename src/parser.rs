use crate::error::FormulaError;
use crate::eval::{evaluate, substitute};
use crate::lexer::{tokenize, Token, TokenKind};
use crate::symbols::Operator;
use crate::truth_table::{extract_variables, TruthTable};
use itertools::Itertools;
use log::debug;
use std::cmp::Ordering;
use std::io::{BufRead, Read};
use std::str::FromStr;

/// Binding strength of an operator token. Unknown glyphs (and non-operator tokens such
/// as a stacked `(`) bind weakest, with precedence 0.
pub fn precedence(token: &Token) -> u8 {
    Operator::from_literal(token.literal()).map_or(0, Operator::precedence)
}

// Whether the stacked operator `top` must be emitted before `incoming` is pushed.
// Binary operators of equal precedence associate to the left; a prefix negation
// never pops another negation.
fn binds_before(top: &Token, incoming: &Token) -> bool {
    let unary = incoming.as_operator().is_some_and(Operator::is_unary);

    match precedence(top).cmp(&precedence(incoming)) {
        Ordering::Greater => true,
        Ordering::Equal => !unary,
        Ordering::Less => false,
    }
}

/// Reorders an infix token sequence into postfix (reverse Polish) order using the
/// shunting-yard algorithm.
///
/// Binary operators of equal precedence associate to the left, negation to the
/// right. Parentheses are not validated: an unmatched `)` drains the operator stack,
/// and an unmatched `(` ends up in the output. `EndOfInput` and illegal tokens are
/// dropped.
pub fn to_postfix<I>(tokens: I) -> Vec<Token>
where
    I: IntoIterator<Item = Token>,
{
    let mut output: Vec<Token> = Vec::new();
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token.kind() {
            TokenKind::Identifier | TokenKind::BooleanLiteral => output.push(token),
            TokenKind::OpenParen => operators.push(token),
            TokenKind::Operator => {
                while let Some(top) = operators.last() {
                    if !binds_before(top, &token) {
                        break;
                    }
                    output.extend(operators.pop());
                }
                operators.push(token);
            }
            TokenKind::CloseParen => {
                while let Some(top) = operators.last() {
                    if top.kind() == TokenKind::OpenParen {
                        break;
                    }
                    output.extend(operators.pop());
                }
                // discard the matching open paren, if any
                operators.pop();
            }
            TokenKind::EndOfInput | TokenKind::Illegal => {}
        }
    }

    output.extend(operators.into_iter().rev());

    output
}

/// A formula that has been lexed, checked for illegal tokens and converted to postfix
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFormula {
    pub source: String,
    pub tokens: Vec<Token>,
    pub postfix: Vec<Token>,
    pub vars: Vec<String>,
}

impl ParsedFormula {
    pub fn new(contents: &mut dyn BufRead) -> anyhow::Result<Self> {
        let mut src = String::new();
        contents.read_to_string(&mut src)?;

        Ok(Self::parse(&src)?)
    }

    /// Parses `src`, rejecting it if it contains any illegal token.
    pub fn parse(src: &str) -> Result<Self, FormulaError> {
        let tokens = tokenize(src);

        if let Some(illegal) = tokens.iter().find(|t| t.is_illegal()) {
            return Err(FormulaError::IllegalToken {
                literal: illegal.literal().to_string(),
                position: illegal.position(),
            });
        }

        let postfix = to_postfix(tokens.iter().cloned());
        let vars = extract_variables(&postfix);

        debug!(
            "parsed {} tokens, postfix: {}",
            tokens.len(),
            postfix.iter().join(" ")
        );

        Ok(Self {
            source: src.to_string(),
            tokens,
            postfix,
            vars,
        })
    }

    /// Evaluates the formula under `assignment`, aligned with [`ParsedFormula::vars`].
    pub fn eval(&self, assignment: &[bool]) -> Result<bool, FormulaError> {
        evaluate(substitute(&self.postfix, &self.vars, assignment))
    }

    pub fn truth_table(&self) -> Result<TruthTable, FormulaError> {
        TruthTable::generate(&self.postfix)
    }

    /// Like [`ParsedFormula::truth_table`], but refuses formulas with more than `limit`
    /// variables.
    pub fn truth_table_bounded(&self, limit: usize) -> Result<TruthTable, FormulaError> {
        if self.vars.len() > limit {
            return Err(FormulaError::TooManyVariables {
                count: self.vars.len(),
                limit,
            });
        }

        self.truth_table()
    }

    pub fn var2usize(&self, var: &str) -> Option<usize> {
        self.vars.iter().position(|v| v == var)
    }
}

impl FromStr for ParsedFormula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
