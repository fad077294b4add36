use crate::error::{EvalError, Result};
use crate::evaluator::operator::BinaryOperator;
use crate::evaluator::token::Token;

/// Splits a base-10 expression into tokens.
///
/// A `-` at the start of the input, after an operator, or after `(` is
/// unary: it folds into the literal that must follow it. Whitespace is
/// skipped; any other unrecognized character is an error.
///
/// # Arguments
///
/// * `expression`: A base-10 infix expression.
///
/// returns: The tokens of the expression, in input order.
///
/// # Examples
///
/// ```
/// use radix_calculator::evaluator::lexer::tokenize;
/// use radix_calculator::evaluator::token::Token;
/// # use radix_calculator::error::EvalError;
///
/// # fn main() -> Result<(), EvalError> {
/// let tokens = tokenize("5--3")?;
/// assert_eq!(
///     tokens,
///     vec![
///         Token::LiteralInteger(5),
///         Token::Dash,
///         Token::LiteralInteger(-3),
///     ]
/// );
/// # Ok(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let characters: Vec<char> = expression.chars().collect();
    let mut tokens = Vec::new();
    let mut index = 0;
    while index < characters.len() {
        let character = characters[index];
        if character.is_ascii_whitespace() {
            index += 1;
        } else if character.is_ascii_digit() || (character == '-' && in_unary_position(&tokens)) {
            let (literal, end) = scan_literal(&characters, index)?;
            tokens.push(Token::LiteralInteger(literal));
            index = end;
        } else {
            tokens.push(symbol_token(character)?);
            index += 1;
        }
    }
    Ok(tokens)
}

/// A `-` is unary when nothing, an operator, or `(` precedes it.
fn in_unary_position(tokens: &[Token]) -> bool {
    match tokens.last() {
        None => true,
        Some(Token::LeftParentheses) => true,
        Some(token) => token.as_operator().is_some(),
    }
}

/// Scans the maximal digit run starting at `start` (behind an optional
/// unary `-`) into one literal, reporting Overflow the moment the value
/// leaves the signed 64-bit range. Accumulating negatively keeps the
/// minimum value representable.
fn scan_literal(characters: &[char], start: usize) -> Result<(i64, usize)> {
    let negative = characters[start] == '-';
    let mut index = if negative { start + 1 } else { start };
    let first_digit = index;
    let mut value: i64 = 0;
    while index < characters.len() && characters[index].is_ascii_digit() {
        let digit = characters[index] as i64 - '0' as i64;
        value = value
            .checked_mul(10)
            .and_then(|shifted| {
                if negative {
                    shifted.checked_sub(digit)
                } else {
                    shifted.checked_add(digit)
                }
            })
            .ok_or(EvalError::Overflow)?;
        index += 1;
    }
    if index == first_digit {
        return Err(EvalError::invalid_input("expected a digit after unary '-'"));
    }
    Ok((value, index))
}

fn symbol_token(character: char) -> Result<Token> {
    if let Some(operator) = BinaryOperator::from_char(character) {
        return Ok(operator.token());
    }
    match character {
        '(' => Ok(Token::LeftParentheses),
        ')' => Ok(Token::RightParentheses),
        unexpected => Err(EvalError::invalid_input(format!(
            "unexpected character '{unexpected}'"
        ))),
    }
}
