use crate::error::Result;
use crate::evaluator::arithmetic;
use crate::evaluator::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

/// Whether the character is one of the five operator symbols `+ - * / ^`.
pub fn is_operator_char(character: char) -> bool {
    BinaryOperator::from_char(character).is_some()
}

impl BinaryOperator {
    pub fn from_char(character: char) -> Option<BinaryOperator> {
        match character {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            '^' => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }

    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::Plus,
            BinaryOperator::Subtract => Token::Dash,
            BinaryOperator::Multiply => Token::Asterisk,
            BinaryOperator::Divide => Token::ForwardSlash,
            BinaryOperator::Exponentiate => Token::Caret,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
            BinaryOperator::Exponentiate => 3,
        }
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Applies the operator to the two operands, left operand first.
    pub fn apply(&self, a: i64, b: i64) -> Result<i64> {
        match self {
            BinaryOperator::Add => arithmetic::add(a, b),
            BinaryOperator::Subtract => arithmetic::subtract(a, b),
            BinaryOperator::Multiply => arithmetic::multiply(a, b),
            BinaryOperator::Divide => arithmetic::divide(a, b),
            BinaryOperator::Exponentiate => arithmetic::power(a, b),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
