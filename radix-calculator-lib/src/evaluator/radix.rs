use crate::error::{EvalError, Result};
use crate::evaluator::operator;
use itertools::Itertools;

/// Smallest supported numeral base.
pub const MIN_BASE: u32 = 2;
/// Largest supported numeral base.
pub const MAX_BASE: u32 = 32;

/// Removes every ASCII whitespace character from the expression.
pub fn strip_whitespace(expression: &str) -> String {
    expression
        .chars()
        .filter(|character| !character.is_ascii_whitespace())
        .collect()
}

/// Counts the operator characters in the expression. A unary `-` counts
/// like any other operator; conversion must not change this number.
pub fn count_operators(expression: &str) -> usize {
    expression
        .chars()
        .filter(|&character| operator::is_operator_char(character))
        .count()
}

/// The value of a single numeral digit: `0-9` then `A-Z`.
///
/// Fails when the character is no digit at all, or when its value does not
/// fit the base (like `7` in base 7).
pub fn digit_value(digit: char, base: u32) -> Result<u32> {
    let value = match digit {
        '0'..='9' => digit as u32 - '0' as u32,
        'A'..='Z' => digit as u32 - 'A' as u32 + 10,
        _ => {
            return Err(EvalError::invalid_input(format!("invalid digit '{digit}'")));
        }
    };
    if value >= base {
        return Err(EvalError::invalid_input(format!(
            "digit '{digit}' out of range for base {base}"
        )));
    }
    Ok(value)
}

/// Rewrites every numeral run of the expression from the given base into
/// base-10 text; operators and parentheses pass through unchanged.
///
/// # Examples
///
/// ```
/// use radix_calculator::evaluator::radix::to_base_10;
/// # use radix_calculator::error::EvalError;
///
/// # fn main() -> Result<(), EvalError> {
/// assert_eq!(to_base_10("FF+1", 16)?, "255+1");
/// # Ok(()) }
/// ```
pub fn to_base_10(expression: &str, base: u32) -> Result<String> {
    let mut converted = String::with_capacity(expression.len());
    let mut characters = expression.chars().peekable();
    while let Some(&character) = characters.peek() {
        if character.is_ascii_alphanumeric() {
            let numeral: String = characters
                .peeking_take_while(|character| character.is_ascii_alphanumeric())
                .collect();
            let value = numeral_value(&numeral, base)?;
            converted.push_str(&value.to_string());
        } else {
            converted.push(character);
            characters.next();
        }
    }
    Ok(converted)
}

/// Positional weighted sum of one numeral run, most-significant digit
/// first. The magnitude itself must fit the signed 64-bit range.
fn numeral_value(numeral: &str, base: u32) -> Result<i64> {
    let mut value: i64 = 0;
    for character in numeral.chars() {
        let digit = digit_value(character, base)? as i64;
        value = value
            .checked_mul(base as i64)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or(EvalError::Overflow)?;
    }
    Ok(value)
}

/// Formats a base-10 value as a numeral in the given base, sign first,
/// most-significant digit first. Zero prints as `"0"`.
///
/// # Examples
///
/// ```
/// use radix_calculator::evaluator::radix::from_base_10;
/// # use radix_calculator::error::EvalError;
///
/// # fn main() -> Result<(), EvalError> {
/// assert_eq!(from_base_10(256, 16)?, "100");
/// assert_eq!(from_base_10(-7, 2)?, "-111");
/// # Ok(()) }
/// ```
pub fn from_base_10(value: i64, base: u32) -> Result<String> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(EvalError::invalid_input(format!("base {base} is out of range")));
    }
    if value == 0 {
        return Ok("0".to_string());
    }
    // The unsigned magnitude keeps i64::MIN formattable without negating it.
    let mut magnitude = value.unsigned_abs();
    let radix = u64::from(base);
    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(digit_character((magnitude % radix) as u32));
        magnitude /= radix;
    }
    let mut numeral = String::with_capacity(digits.len() + 1);
    if value < 0 {
        numeral.push('-');
    }
    numeral.extend(digits.iter().rev());
    Ok(numeral)
}

fn digit_character(value: u32) -> char {
    match value {
        0..=9 => (b'0' + value as u8) as char,
        _ => (b'A' + (value - 10) as u8) as char,
    }
}

/// Splits a declared-base line into its base and expression.
///
/// The first whitespace-delimited token must have the form `b<integer>`,
/// like `b7`; the rest of the line, trimmed, is the expression. Whether
/// the declared base is in the supported range is checked by evaluation,
/// not here.
///
/// # Arguments
///
/// * `line`: One input line, like `"b16 FF+1"`.
///
/// returns: The declared base and the expression following it.
pub fn extract_base_and_expression(line: &str) -> Result<(u32, String)> {
    let trimmed = line.trim_start();
    let (marker, rest) = trimmed
        .split_once(char::is_whitespace)
        .ok_or_else(|| EvalError::invalid_input("missing expression after the base marker"))?;
    let declared = marker
        .strip_prefix('b')
        .ok_or_else(|| EvalError::invalid_input(format!("malformed base marker '{marker}'")))?;
    let base: u32 = declared
        .parse()
        .map_err(|_| EvalError::invalid_input(format!("malformed base marker '{marker}'")))?;
    let expression = rest.trim();
    if expression.is_empty() {
        return Err(EvalError::invalid_input("missing expression after the base marker"));
    }
    Ok((base, expression.to_string()))
}
