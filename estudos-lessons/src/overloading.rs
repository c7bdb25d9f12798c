//! Overloading by argument shape.
//!
//! Rust has no same-name overloads. Two idioms cover the same ground:
//!
//! - a trait implemented once per argument tuple, so the compiler picks the
//!   implementation from the types and arity at the call site (static
//!   dispatch, resolved at compile time);
//! - an enum of operand shapes, matched at run time.
//!
//! As with overloads, the return type alone cannot select an implementation.
//! Integer additions wrap on overflow.

use std::fmt;
use std::io::Write;

use estudos_common::Samples;

use crate::error::Result;

/// Argument tuples that [`Calculator::sum`] accepts.
pub trait Summable {
    type Output;

    fn total(self) -> Self::Output;
}

impl Summable for (i32, i32) {
    type Output = i32;

    fn total(self) -> i32 {
        self.0.wrapping_add(self.1)
    }
}

impl Summable for (f64, f64) {
    type Output = f64;

    fn total(self) -> f64 {
        self.0 + self.1
    }
}

impl Summable for (i32, i32, i32) {
    type Output = i32;

    fn total(self) -> i32 {
        self.0.wrapping_add(self.1).wrapping_add(self.2)
    }
}

/// Adds numbers; see [`Summable`] for the shapes it accepts.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Adds the arguments; which addition runs depends on their shape.
    ///
    /// # Examples
    /// ```
    /// use estudos_lessons::overloading::Calculator;
    /// let calc = Calculator;
    /// assert_eq!(calc.sum((2_i32, 3_i32)), 5);
    /// assert_eq!(calc.sum((1.5_f64, 2.25_f64)), 3.75);
    /// assert_eq!(calc.sum((1_i32, 2_i32, 3_i32)), 6);
    /// ```
    pub fn sum<A: Summable>(&self, args: A) -> A::Output {
        args.total()
    }
}

/// Run-time alternative: one function taking a tagged operand set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    Ints(i32, i32),
    Floats(f64, f64),
    ThreeInts(i32, i32, i32),
}

/// Result of [`sum_operands`]: integer or floating point, by operand shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Total {
    Int(i32),
    Float(f64),
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Total::Int(n) => write!(f, "{n}"),
            Total::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Adds a tagged operand set, choosing the addition by matching its shape.
pub fn sum_operands(operands: Operands) -> Total {
    match operands {
        Operands::Ints(a, b) => Total::Int(a.wrapping_add(b)),
        Operands::Floats(a, b) => Total::Float(a + b),
        Operands::ThreeInts(a, b, c) => Total::Int(a.wrapping_add(b).wrapping_add(c)),
    }
}

/// Prints each shape added both through the trait and through the enum.
pub fn overloading_lesson(_samples: &Samples, out: &mut dyn Write) -> Result<()> {
    let calc = Calculator;
    let ints: (i32, i32) = (2, 3);
    let floats: (f64, f64) = (1.5, 2.25);
    let triple: (i32, i32, i32) = (1, 2, 3);

    writeln!(out, "{}", calc.sum(ints))?;
    writeln!(out, "{}", calc.sum(floats))?;
    writeln!(out, "{}", calc.sum(triple))?;

    for operands in [
        Operands::Ints(2, 3),
        Operands::Floats(1.5, 2.25),
        Operands::ThreeInts(1, 2, 3),
    ] {
        writeln!(out, "{operands:?} = {}", sum_operands(operands))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_dispatch_by_shape() {
        let calc = Calculator;
        assert_eq!(calc.sum((2_i32, 3_i32)), 5);
        assert!((calc.sum((1.5_f64, 2.25_f64)) - 3.75).abs() < f64::EPSILON);
        assert_eq!(calc.sum((1_i32, 2_i32, 3_i32)), 6);
    }

    #[test]
    fn test_int_sums_wrap_near_max() {
        let calc = Calculator;
        assert_eq!(calc.sum((i32::MAX, 1_i32)), i32::MIN);
        assert_eq!(calc.sum((i32::MAX, 1_i32, 1_i32)), i32::MIN + 1);
        assert_eq!(sum_operands(Operands::Ints(i32::MAX, 1)), Total::Int(i32::MIN));
        assert_eq!(
            sum_operands(Operands::ThreeInts(i32::MIN, -1, 0)),
            Total::Int(i32::MAX)
        );
    }

    #[test]
    fn test_tagged_operands() {
        assert_eq!(sum_operands(Operands::Ints(2, 3)), Total::Int(5));
        assert_eq!(sum_operands(Operands::Floats(1.5, 2.25)), Total::Float(3.75));
        assert_eq!(sum_operands(Operands::ThreeInts(1, 2, 3)), Total::Int(6));
    }

    #[test]
    fn test_overloading_lesson_output() {
        let mut out = Vec::new();
        overloading_lesson(&Samples::new(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "5\n3.75\n6\n\
             Ints(2, 3) = 5\n\
             Floats(1.5, 2.25) = 3.75\n\
             ThreeInts(1, 2, 3) = 6\n"
        );
    }
}
