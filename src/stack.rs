use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::errors::*;

/// Number of registers: T, Z, Y, X
pub const STACK_DEPTH: usize = 4;

/// Binary arithmetic on the two bottom registers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    /// Symbol shown on the key and recorded in the history
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Subtract => "-",
            Op::Multiply => "×",
            Op::Divide => "÷",
        }
    }

    /// `a` is Y (the older operand), `b` is X. Dividing by zero gives zero
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Add => a + b,
            Op::Subtract => a - b,
            Op::Multiply => a * b,
            Op::Divide => {
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Op {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Op::Add),
            "-" | "−" => Ok(Op::Subtract),
            "×" | "*" | "x" => Ok(Op::Multiply),
            "÷" | "/" => Ok(Op::Divide),
            _ => Err(CalcError::InvalidOp(s.to_string())),
        }
    }
}

/// Four-register stack. The last element is X, the first one is the oldest
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stack {
    values: Vec<f64>,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            values: Vec::with_capacity(STACK_DEPTH),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Registers from the oldest to X
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Top of the stack
    pub fn x(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Stack lift: a full stack loses its oldest register before the push
    pub fn lift(&mut self, v: f64) {
        if self.values.len() == STACK_DEPTH {
            let lost = self.values.remove(0);
            trace!("stack full, {} falls off", lost);
        }
        self.values.push(v);
        trace!("push {} -> {:?}", v, self.values);
    }

    pub fn pop(&mut self) -> Option<f64> {
        let v = self.values.pop();
        trace!("pop {:?} -> {:?}", v, self.values);
        v
    }

    /// Y and X, if both are there
    pub fn operands(&self) -> Option<(f64, f64)> {
        match self.values.len() {
            n if n >= 2 => Some((self.values[n - 2], self.values[n - 1])),
            _ => None,
        }
    }

    /// Exchanges X and Y. Returns false if there are fewer than two registers
    pub fn swap(&mut self) -> bool {
        let len = self.values.len();
        if len < 2 {
            return false;
        }
        self.values.swap(len - 1, len - 2);
        true
    }

    /// Replaces Y and X with `op(Y, X)`. Returns false if there are fewer than two registers
    pub fn apply(&mut self, op: Op) -> bool {
        if self.values.len() < 2 {
            return false;
        }

        // the length is checked above, so both pops succeed
        let (b, a) = match (self.values.pop(), self.values.pop()) {
            (Some(b), Some(a)) => (b, a),
            _ => return false,
        };
        let v = op.apply(a, b);
        trace!("{} {} {} = {}", a, op, b, v);
        self.values.push(v);
        true
    }

    /// Puts back a snapshot taken earlier
    pub fn restore(&mut self, values: &[f64]) {
        let skip = values.len().saturating_sub(STACK_DEPTH);
        self.values = values[skip..].to_vec();
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(values: &[f64]) -> Stack {
        let mut stack = Stack::new();
        for v in values {
            stack.lift(*v);
        }
        stack
    }

    #[test]
    fn test_lift_bounded() {
        let mut stack = stack_of(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stack.len(), STACK_DEPTH);
        stack.lift(5.0);
        assert_eq!(stack.values(), &[2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stack.x(), Some(5.0));
    }

    #[test]
    fn test_operand_order() {
        let mut stack = stack_of(&[10.0, 3.0]);
        assert!(stack.apply(Op::Subtract));
        assert_eq!(stack.values(), &[7.0]);

        let mut stack = stack_of(&[12.0, 4.0]);
        assert!(stack.apply(Op::Divide));
        assert_eq!(stack.values(), &[3.0]);
    }

    #[test]
    fn test_divide_by_zero() {
        let mut stack = stack_of(&[5.0, 0.0]);
        assert!(stack.apply(Op::Divide));
        assert_eq!(stack.values(), &[0.0]);
        assert_eq!(Op::Divide.apply(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_not_enough_operands() {
        let mut stack = stack_of(&[5.0]);
        assert!(!stack.apply(Op::Add));
        assert!(!stack.swap());
        assert_eq!(stack.values(), &[5.0]);
    }

    #[test]
    fn test_operands() {
        assert_eq!(stack_of(&[1.0, 2.0, 3.0]).operands(), Some((2.0, 3.0)));
        assert_eq!(stack_of(&[1.0]).operands(), None);
    }

    #[test]
    fn test_swap_keeps_upper_registers() {
        let mut stack = stack_of(&[1.0, 2.0, 3.0, 4.0]);
        assert!(stack.swap());
        assert_eq!(stack.values(), &[1.0, 2.0, 4.0, 3.0]);
    }

    #[test]
    fn test_restore() {
        let mut stack = stack_of(&[1.0]);
        stack.restore(&[7.0, 8.0]);
        assert_eq!(stack.values(), &[7.0, 8.0]);
        stack.restore(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stack.values(), &[2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_op_parse() {
        assert_eq!("÷".parse::<Op>(), Ok(Op::Divide));
        assert_eq!("/".parse::<Op>(), Ok(Op::Divide));
        assert_eq!("*".parse::<Op>(), Ok(Op::Multiply));
        assert_eq!("−".parse::<Op>(), Ok(Op::Subtract));
        assert_eq!("%".parse::<Op>(), Err(CalcError::InvalidOp("%".to_string())));
        assert_eq!(Op::Multiply.to_string(), "×");
    }
}
