use crate::error::{EvalError, Result};
use crate::evaluator::stack::Stack;
use crate::evaluator::token::Token;
use log::debug;

/// Evaluates a tokenized infix expression on two stacks, reducing as soon
/// as precedence allows. Same-precedence operators reduce left to right,
/// which makes `^` left-associative: `2^3^2` is `(2^3)^2`.
pub fn evaluate(tokens: Vec<Token>) -> Result<i64> {
    let mut operands: Stack<i64> = Stack::new("operand stack");
    let mut operators: Stack<Token> = Stack::new("operator stack");

    for token in tokens {
        match token {
            Token::LiteralInteger(value) => operands.push(value)?,
            Token::LeftParentheses => operators.push(token)?,
            Token::RightParentheses => {
                reduce_parenthesized(&mut operands, &mut operators)?;
            }
            operator_token => {
                reduce_lower_precedence(&mut operands, &mut operators, &operator_token)?;
                operators.push(operator_token)?;
            }
        }
    }

    reduce_leftovers(&mut operands, &mut operators)?;

    let result = operands.pop()?;
    if !operands.is_empty() {
        debug!("operands left after evaluation: {:?}", operands);
        return Err(EvalError::invalid_input("expression has operands left over"));
    }
    Ok(result)
}

/// Applies stacked operators that rank at least as high as the incoming
/// one, stopping at a `(` marker.
fn reduce_lower_precedence(
    operands: &mut Stack<i64>,
    operators: &mut Stack<Token>,
    incoming_token: &Token,
) -> Result<()> {
    let incoming = incoming_token
        .as_operator()
        .ok_or_else(|| EvalError::invalid_input("expected an operator"))?;
    loop {
        match operators.last() {
            None => break,
            Some(Token::LeftParentheses) => break,
            Some(top_token) => {
                let top = top_token
                    .as_operator()
                    .ok_or_else(|| EvalError::invalid_input("found a non-operator on the operator stack"))?;
                if !top.precedence_ge(&incoming) {
                    break;
                }
                apply_top_operator(operands, operators)?;
            }
        }
    }
    Ok(())
}

/// Unwinds the operator stack down to the matching `(`, then discards it.
fn reduce_parenthesized(operands: &mut Stack<i64>, operators: &mut Stack<Token>) -> Result<()> {
    loop {
        match operators.last() {
            None => {
                return Err(EvalError::invalid_input("mismatched parenthesis"));
            }
            Some(Token::LeftParentheses) => {
                break;
            }
            Some(_) => apply_top_operator(operands, operators)?,
        }
    }
    // Discard the open parenthesis.
    operators.pop()?;
    Ok(())
}

/// Applies everything still stacked once the input is exhausted.
fn reduce_leftovers(operands: &mut Stack<i64>, operators: &mut Stack<Token>) -> Result<()> {
    loop {
        match operators.last() {
            None => break,
            Some(Token::LeftParentheses) => {
                return Err(EvalError::invalid_input("mismatched parenthesis"));
            }
            Some(_) => apply_top_operator(operands, operators)?,
        }
    }
    Ok(())
}

fn apply_top_operator(operands: &mut Stack<i64>, operators: &mut Stack<Token>) -> Result<()> {
    let operator_token = operators.pop()?;
    let operator = operator_token
        .as_operator()
        .ok_or_else(|| EvalError::invalid_input("found a non-operator on the operator stack"))?;
    let (a, b) = operands.pop_2()?;
    let result = operator.apply(a, b)?;
    debug!("reduced {a} {operator} {b} to {result}");
    operands.push(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn literal(value: i64) -> Token {
        Token::LiteralInteger(value)
    }

    #[test]
    fn evaluates_a_single_literal() {
        let tokens = vec![literal(42)];

        assert_eq!(evaluate(tokens), Ok(42));
    }

    #[test]
    fn evaluates_left_to_right_at_equal_precedence() {
        // 10 - 4 + 2
        let tokens = vec![
            literal(10),
            Token::Dash,
            literal(4),
            Token::Plus,
            literal(2),
        ];

        assert_eq!(evaluate(tokens), Ok(8));
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        // 3 + 4 * 2
        let tokens = vec![
            literal(3),
            Token::Plus,
            literal(4),
            Token::Asterisk,
            literal(2),
        ];

        assert_eq!(evaluate(tokens), Ok(11));
    }

    #[test]
    fn parentheses_override_precedence() {
        // (3 + 4) * 2
        let tokens = vec![
            Token::LeftParentheses,
            literal(3),
            Token::Plus,
            literal(4),
            Token::RightParentheses,
            Token::Asterisk,
            literal(2),
        ];

        assert_eq!(evaluate(tokens), Ok(14));
    }

    #[test]
    fn exponentiation_associates_left() {
        // 2 ^ 3 ^ 2
        let tokens = vec![
            literal(2),
            Token::Caret,
            literal(3),
            Token::Caret,
            literal(2),
        ];

        assert_eq!(evaluate(tokens), Ok(64));
    }

    #[test]
    fn nested_parentheses_reduce_inside_out() {
        // ((1 + 2) * (3 + 4)) - 5
        let tokens = vec![
            Token::LeftParentheses,
            Token::LeftParentheses,
            literal(1),
            Token::Plus,
            literal(2),
            Token::RightParentheses,
            Token::Asterisk,
            Token::LeftParentheses,
            literal(3),
            Token::Plus,
            literal(4),
            Token::RightParentheses,
            Token::RightParentheses,
            Token::Dash,
            literal(5),
        ];

        assert_eq!(evaluate(tokens), Ok(16));
    }

    #[test]
    fn division_by_a_zero_operand_is_reported() {
        // 8 / 0
        let tokens = vec![literal(8), Token::ForwardSlash, literal(0)];

        assert_eq!(evaluate(tokens), Err(EvalError::DivideByZero));
    }

    #[test]
    fn unclosed_parenthesis_is_invalid() {
        // (3 + 4
        let tokens = vec![
            Token::LeftParentheses,
            literal(3),
            Token::Plus,
            literal(4),
        ];

        assert_eq!(
            evaluate(tokens),
            Err(EvalError::invalid_input("mismatched parenthesis"))
        );
    }

    #[test]
    fn unopened_parenthesis_is_invalid() {
        // 3 + 4)
        let tokens = vec![
            literal(3),
            Token::Plus,
            literal(4),
            Token::RightParentheses,
        ];

        assert_eq!(
            evaluate(tokens),
            Err(EvalError::invalid_input("mismatched parenthesis"))
        );
    }

    #[test]
    fn stray_operator_underflows_the_operand_stack() {
        // 3 + * 4
        let tokens = vec![
            literal(3),
            Token::Plus,
            Token::Asterisk,
            literal(4),
        ];

        assert_eq!(
            evaluate(tokens),
            Err(EvalError::invalid_input("operand stack underflow"))
        );
    }

    #[test]
    fn leftover_operands_are_invalid() {
        // (1)(2)
        let tokens = vec![
            Token::LeftParentheses,
            literal(1),
            Token::RightParentheses,
            Token::LeftParentheses,
            literal(2),
            Token::RightParentheses,
        ];

        assert_eq!(
            evaluate(tokens),
            Err(EvalError::invalid_input("expression has operands left over"))
        );
    }

    #[test]
    fn empty_input_underflows_the_operand_stack() {
        assert_eq!(
            evaluate(vec![]),
            Err(EvalError::invalid_input("operand stack underflow"))
        );
    }

    #[test]
    fn operand_flood_exhausts_the_stack() {
        let tokens = vec![literal(1); 10_001];

        assert_eq!(
            evaluate(tokens),
            Err(EvalError::ResourceExhausted("operand stack overflow".into()))
        );
    }
}
