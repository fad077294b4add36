pub mod arithmetic;
pub mod lexer;
pub mod operator;
pub mod radix;
mod shunting_yard;
mod stack;
pub mod token;
pub mod validator;

use crate::error::{EvalError, Result};
use itertools::Itertools;
use log::debug;

/// Evaluates one infix expression whose numerals are written in the given
/// base, producing the base-10 value.
///
/// The expression is stripped of whitespace, validated, converted to
/// base-10 text and then evaluated on two stacks. Conversion must leave
/// the operator count untouched; a changed count means a numeral absorbed
/// a neighbor and the expression is corrupt.
///
/// # Arguments
///
/// * `expression`: An infix expression with numerals in `base`.
/// * `base`: The numeral base, 2 through 32.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use radix_calculator::evaluator::evaluate_expression;
/// # use radix_calculator::error::EvalError;
///
/// # fn main() -> Result<(), EvalError> {
/// assert_eq!(evaluate_expression("3+4*2", 10)?, 11);
/// assert_eq!(evaluate_expression("FF+1", 16)?, 256);
/// # Ok(()) }
/// ```
pub fn evaluate_expression(expression: &str, base: u32) -> Result<i64> {
    if !(radix::MIN_BASE..=radix::MAX_BASE).contains(&base) {
        return Err(EvalError::invalid_input(format!("base {base} is out of range")));
    }
    let stripped = radix::strip_whitespace(expression);
    validator::validate(&stripped)?;
    let operators_before = radix::count_operators(&stripped);
    let converted = radix::to_base_10(&stripped, base)?;
    if radix::count_operators(&converted) != operators_before {
        return Err(EvalError::Overflow);
    }
    debug!("converted \"{stripped}\" (base {base}) to \"{converted}\"");
    let tokens = lexer::tokenize(&converted)?;
    debug!("tokens: {}", tokens.iter().join(" "));
    shunting_yard::evaluate(tokens)
}

/// Evaluates one infix expression and formats the result in the same
/// base the numerals were written in.
///
/// # Arguments
///
/// * `expression`: An infix expression with numerals in `base`.
/// * `base`: The numeral base, 2 through 32.
///
/// returns: The value of the expression, as a numeral in `base`.
///
/// # Examples
///
/// ```
/// use radix_calculator::evaluator::evaluate_in_base;
/// # use radix_calculator::error::EvalError;
///
/// # fn main() -> Result<(), EvalError> {
/// assert_eq!(evaluate_in_base("FF+1", 16)?, "100");
/// # Ok(()) }
/// ```
pub fn evaluate_in_base(expression: &str, base: u32) -> Result<String> {
    let value = evaluate_expression(expression, base)?;
    radix::from_base_10(value, base)
}

/// Evaluates a line that declares its own numeral base, like `"b16 FF+1"`,
/// and formats the result in the declared base.
///
/// # Arguments
///
/// * `line`: A base marker `b<N>` followed by an infix expression.
///
/// returns: The value of the expression, as a numeral in the declared base.
///
/// # Examples
///
/// ```
/// use radix_calculator::evaluator::evaluate_with_base_prefix;
/// # use radix_calculator::error::EvalError;
///
/// # fn main() -> Result<(), EvalError> {
/// assert_eq!(evaluate_with_base_prefix("b16 FF+1")?, "100");
/// # Ok(()) }
/// ```
pub fn evaluate_with_base_prefix(line: &str) -> Result<String> {
    let (base, expression) = radix::extract_base_and_expression(line)?;
    debug!("declared base {base}, expression \"{expression}\"");
    evaluate_in_base(&expression, base)
}
