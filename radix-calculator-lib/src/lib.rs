//! Infix arithmetic over selectable numeral bases.
//!
//! One line of text holds an expression whose numerals are written in a
//! base between 2 and 32 (digits `0-9` then `A-Z`). The numerals are
//! rewritten in base 10, the expression is evaluated on two stacks with
//! checked 64-bit arithmetic, and the result is formatted back in the
//! original base.
//!
//! ```
//! use radix_calculator::evaluator::evaluate_with_base_prefix;
//! # use radix_calculator::error::EvalError;
//!
//! # fn main() -> Result<(), EvalError> {
//! assert_eq!(evaluate_with_base_prefix("b16 FF+1")?, "100");
//! # Ok(()) }
//! ```

pub mod error;
pub mod evaluator;

pub use error::EvalError;
