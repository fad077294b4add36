use crate::error::{EvalError, Result};
use crate::evaluator::operator;

/// Checks a stripped, unconverted expression for constructs that are
/// malformed in every base.
///
/// Accepted characters are digits, uppercase letters, the five operators
/// and parentheses; whether a letter fits the active base is decided later
/// by conversion. A doubled `-` is deliberately not rejected since it can
/// be a binary `-` followed by a unary one, as in `5--3`.
///
/// # Arguments
///
/// * `expression`: A whitespace-free expression, before base conversion.
///
/// returns: `Ok(())` when the expression may be evaluated.
pub fn validate(expression: &str) -> Result<()> {
    let characters: Vec<char> = expression.chars().collect();
    for (index, &character) in characters.iter().enumerate() {
        let next = characters.get(index + 1).copied();
        if character == '/' && next == Some('0') {
            return Err(EvalError::DivideByZero);
        }
        if matches!(character, '+' | '*' | '/' | '^') && next == Some(character) {
            return Err(EvalError::invalid_input(format!(
                "doubled operator '{character}{character}'"
            )));
        }
        if !character.is_ascii_digit()
            && !character.is_ascii_uppercase()
            && !operator::is_operator_char(character)
            && character != '('
            && character != ')'
        {
            return Err(EvalError::invalid_input(format!(
                "unexpected character '{character}'"
            )));
        }
        if character == '^' && next == Some('-') {
            return Err(EvalError::NegativeExponent);
        }
    }
    Ok(())
}
