use crate::error::{EvalError, Result};

/// Capacity limit shared by the operand and operator stacks.
const MAX_ENTRIES: usize = 10_000;

/// A LIFO stack over a growable vector, capped at [`MAX_ENTRIES`].
pub struct Stack<T> {
    name: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(name: &'static str) -> Stack<T> {
        Stack { name, vec: vec![] }
    }

    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() >= MAX_ENTRIES {
            Err(EvalError::ResourceExhausted(format!("{} overflow", self.name)))
        } else {
            Ok(())
        }
    }

    fn underflow_error(&self) -> EvalError {
        EvalError::invalid_input(format!("{} underflow", self.name))
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }

    pub fn push(&mut self, value: T) -> Result<()> {
        self.overflow_check()?;
        self.vec.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(value) => Ok(value),
            None => Err(self.underflow_error()),
        }
    }

    /// Pops the two topmost values, returned in the order they were pushed.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
}
