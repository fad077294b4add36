use crate::evaluator::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    LiteralInteger(i64),
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    Caret,
    LeftParentheses,
    RightParentheses,
}

impl Token {
    /// The operator this token stands for, or `None` for literals and parentheses.
    pub fn as_operator(&self) -> Option<BinaryOperator> {
        match self {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Dash => Some(BinaryOperator::Subtract),
            Token::Asterisk => Some(BinaryOperator::Multiply),
            Token::ForwardSlash => Some(BinaryOperator::Divide),
            Token::Caret => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::LiteralInteger(value) => write!(f, "{}", value),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
        }
    }
}
