use crate::error::FormulaError;
use crate::lexer::{Token, TokenKind};
use log::trace;

/// Replaces every identifier in `tokens` by a boolean literal holding its value in
/// `assignment`, which is aligned with `variables`.
///
/// Identifiers missing from `variables` (or without a corresponding value) are passed
/// through unchanged, so that [`evaluate`] reports them as unbound.
pub fn substitute<'a, I>(
    tokens: I,
    variables: &'a [String],
    assignment: &'a [bool],
) -> impl Iterator<Item = Token> + 'a
where
    I: IntoIterator<Item = &'a Token>,
    I::IntoIter: 'a,
{
    tokens.into_iter().map(move |token| {
        if token.kind() != TokenKind::Identifier {
            return token.clone();
        }

        variables
            .iter()
            .position(|v| v == token.literal())
            .and_then(|i| assignment.get(i))
            .map_or_else(
                || token.clone(),
                |&value| Token::boolean(value, token.position()),
            )
    })
}

fn pop_operand(stack: &mut Vec<bool>, operator: &Token) -> Result<bool, FormulaError> {
    stack.pop().ok_or_else(|| FormulaError::StackUnderflow {
        operator: operator.literal().to_string(),
        position: operator.position(),
    })
}

/// Reduces a fully substituted postfix token sequence to a single value.
///
/// Parentheses left over from unbalanced input are skipped. Any other token that is
/// neither a boolean literal nor a known operator is an error, as is an operator
/// without enough operands or an expression that does not reduce to exactly one
/// value.
pub fn evaluate<I>(tokens: I) -> Result<bool, FormulaError>
where
    I: IntoIterator<Item = Token>,
{
    let mut stack: Vec<bool> = Vec::new();

    for token in tokens {
        match token.kind() {
            TokenKind::BooleanLiteral => match token.as_bool() {
                Some(value) => stack.push(value),
                None => {
                    return Err(FormulaError::UnexpectedToken {
                        literal: token.literal().to_string(),
                        position: token.position(),
                    })
                }
            },
            TokenKind::Operator => {
                let Some(op) = token.as_operator() else {
                    return Err(FormulaError::UnexpectedToken {
                        literal: token.literal().to_string(),
                        position: token.position(),
                    });
                };

                let right = pop_operand(&mut stack, &token)?;
                let left = if op.is_unary() {
                    false
                } else {
                    pop_operand(&mut stack, &token)?
                };

                let result = op.apply(left, right);
                trace!("{op} at {}: {left} {right} -> {result}", token.position());
                stack.push(result);
            }
            TokenKind::Identifier => {
                return Err(FormulaError::UnboundVariable {
                    name: token.literal().to_string(),
                    position: token.position(),
                })
            }
            TokenKind::Illegal => {
                return Err(FormulaError::UnexpectedToken {
                    literal: token.literal().to_string(),
                    position: token.position(),
                })
            }
            TokenKind::OpenParen | TokenKind::CloseParen | TokenKind::EndOfInput => {}
        }
    }

    match stack.as_slice() {
        [] => Err(FormulaError::EmptyExpression),
        [result] => Ok(*result),
        _ => Err(FormulaError::DanglingOperands { count: stack.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::to_postfix;
    use pretty_assertions::assert_eq;

    fn vars(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn eval_with(src: &str, names: &[&str], values: &[bool]) -> Result<bool, FormulaError> {
        let postfix = to_postfix(tokenize(src));
        let names = vars(names);

        evaluate(substitute(&postfix, &names, values))
    }

    #[test]
    fn substitution_replaces_identifiers() {
        let postfix = to_postfix(tokenize("A ∧ ~B"));
        let names = vars(&["A", "B"]);
        let substituted: Vec<Token> = substitute(&postfix, &names, &[true, false]).collect();

        assert_eq!(
            substituted,
            vec![
                Token::new("true", 1, TokenKind::BooleanLiteral),
                Token::new("false", 6, TokenKind::BooleanLiteral),
                Token::new("~", 5, TokenKind::Operator),
                Token::new("∧", 3, TokenKind::Operator),
            ]
        );
    }

    #[test]
    fn substitution_leaves_unknown_identifiers() {
        let postfix = to_postfix(tokenize("A v Q"));
        let names = vars(&["A"]);
        let substituted: Vec<Token> = substitute(&postfix, &names, &[true]).collect();

        assert_eq!(substituted[1], Token::new("Q", 5, TokenKind::Identifier));
        assert_eq!(
            evaluate(substituted),
            Err(FormulaError::UnboundVariable {
                name: "Q".to_string(),
                position: 5,
            })
        );
    }

    #[test]
    fn operator_semantics() -> Result<(), FormulaError> {
        let ab = ["A", "B"];
        let values = [true, false];

        assert!(!eval_with("A ∧ B", &ab, &values)?);
        assert!(eval_with("A v B", &ab, &values)?);
        assert!(eval_with("A ⊻ B", &ab, &values)?);
        assert!(!eval_with("A → B", &ab, &values)?);
        assert!(eval_with("B → A", &ab, &values)?);
        assert!(!eval_with("A ↔ B", &ab, &values)?);
        assert!(!eval_with("~A", &ab, &values)?);
        assert!(eval_with("~~A", &ab, &values)?);

        Ok(())
    }

    #[test]
    fn precedence_and_grouping() -> Result<(), FormulaError> {
        let abc = ["A", "B", "C"];

        assert!(!eval_with("A ∧ B v C", &abc, &[false, true, false])?);
        assert!(eval_with("A ∧ (B v C)", &abc, &[true, false, true])?);
        assert!(eval_with("A v (B v ~C)", &abc, &[false, false, false])?);

        Ok(())
    }

    #[test]
    fn literals_without_variables() -> Result<(), FormulaError> {
        assert!(eval_with("[true]", &[], &[])?);
        assert!(!eval_with("[true] ∧ [false]", &[], &[])?);
        assert!(eval_with("[false] → [false]", &[], &[])?);

        Ok(())
    }

    #[test]
    fn unclosed_paren_is_tolerated() -> Result<(), FormulaError> {
        assert!(eval_with("(A ∧ B", &["A", "B"], &[true, true])?);

        Ok(())
    }

    #[test]
    fn underflow_is_an_error() {
        assert_eq!(
            eval_with("A ∧", &["A"], &[true]),
            Err(FormulaError::StackUnderflow {
                operator: "∧".to_string(),
                position: 3,
            })
        );
        assert_eq!(
            eval_with("~", &[], &[]),
            Err(FormulaError::StackUnderflow {
                operator: "~".to_string(),
                position: 1,
            })
        );
    }

    #[test]
    fn stack_must_reduce_to_one_value() {
        assert_eq!(eval_with("", &[], &[]), Err(FormulaError::EmptyExpression));
        assert_eq!(eval_with("()", &[], &[]), Err(FormulaError::EmptyExpression));
        assert_eq!(
            eval_with("A B", &["A", "B"], &[true, true]),
            Err(FormulaError::DanglingOperands { count: 2 })
        );
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let tokens = vec![
            Token::boolean(true, 1),
            Token::new("#", 2, TokenKind::Operator),
        ];

        assert_eq!(
            evaluate(tokens),
            Err(FormulaError::UnexpectedToken {
                literal: "#".to_string(),
                position: 2,
            })
        );
        assert_eq!(
            evaluate(vec![Token::new("&", 1, TokenKind::Illegal)]),
            Err(FormulaError::UnexpectedToken {
                literal: "&".to_string(),
                position: 1,
            })
        );
    }
}
