//! Lazily evaluated scalar expressions of one real variable.
//!
//! An [`Expr`] is a cheap-to-clone handle over an immutable expression tree.
//! Trees are built bottom-up from the identity [`Expr::x`], constants, unary
//! math functions, and the standard arithmetic operators, then sampled with
//! [`Expr::eval`]. Evaluation is a pure function of the input; domain issues
//! (log of a negative, a sample query outside its domain) propagate as NaN
//! rather than errors, and the renderer treats NaN as a line break.

use std::ops::{Add, Div, Mul, Sub};
use std::sync::Arc;

use crate::samples::Samples;

/// Binary numeric operator combining two sub-expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Exponentiation (`lhs.powf(rhs)`).
    Pow,
}

impl BinOp {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

#[derive(Debug)]
enum Node {
    X,
    Const(f64),
    Unary { func: fn(f64) -> f64, inner: Expr },
    Binary { op: BinOp, lhs: Expr, rhs: Expr },
    Samples(Samples),
}

/// A composable scalar function of one real variable.
///
/// Sub-expressions are shared and immutable; composing `a + b` keeps both
/// operands alive for the lifetime of the combined expression. Construction
/// never fails.
#[derive(Debug, Clone)]
pub struct Expr(Arc<Node>);

impl Expr {
    /// The identity expression: `eval(t) == t`.
    pub fn x() -> Self {
        Self(Arc::new(Node::X))
    }

    /// A constant expression: `eval(t) == value` for all `t`.
    pub fn constant(value: f64) -> Self {
        Self(Arc::new(Node::Const(value)))
    }

    /// Wrap a unary numeric function around an inner expression.
    pub fn unary(func: fn(f64) -> f64, inner: Expr) -> Self {
        Self(Arc::new(Node::Unary { func, inner }))
    }

    /// Combine two expressions with a binary operator.
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Self(Arc::new(Node::Binary { op, lhs, rhs }))
    }

    /// Evaluate the expression at `t`.
    pub fn eval(&self, t: f64) -> f64 {
        match &*self.0 {
            Node::X => t,
            Node::Const(value) => *value,
            Node::Unary { func, inner } => func(inner.eval(t)),
            Node::Binary { op, lhs, rhs } => op.apply(lhs.eval(t), rhs.eval(t)),
            Node::Samples(samples) => samples.eval(t),
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl From<Samples> for Expr {
    fn from(samples: Samples) -> Self {
        Self(Arc::new(Node::Samples(samples)))
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait for Expr {
            type Output = Expr;
            fn $method(self, rhs: Expr) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl $trait<f64> for Expr {
            type Output = Expr;
            fn $method(self, rhs: f64) -> Expr {
                Expr::binary($op, self, Expr::constant(rhs))
            }
        }

        impl $trait<Expr> for f64 {
            type Output = Expr;
            fn $method(self, rhs: Expr) -> Expr {
                Expr::binary($op, Expr::constant(self), rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, BinOp::Add);
impl_binary_op!(Sub, sub, BinOp::Sub);
impl_binary_op!(Mul, mul, BinOp::Mul);
impl_binary_op!(Div, div, BinOp::Div);

/// Sine of an expression.
pub fn sin(expr: Expr) -> Expr {
    Expr::unary(f64::sin, expr)
}

/// Cosine of an expression.
pub fn cos(expr: Expr) -> Expr {
    Expr::unary(f64::cos, expr)
}

/// Tangent of an expression.
pub fn tan(expr: Expr) -> Expr {
    Expr::unary(f64::tan, expr)
}

/// Arcsine of an expression.
pub fn asin(expr: Expr) -> Expr {
    Expr::unary(f64::asin, expr)
}

/// Arccosine of an expression.
pub fn acos(expr: Expr) -> Expr {
    Expr::unary(f64::acos, expr)
}

/// Arctangent of an expression.
pub fn atan(expr: Expr) -> Expr {
    Expr::unary(f64::atan, expr)
}

/// Hyperbolic sine of an expression.
pub fn sinh(expr: Expr) -> Expr {
    Expr::unary(f64::sinh, expr)
}

/// Hyperbolic cosine of an expression.
pub fn cosh(expr: Expr) -> Expr {
    Expr::unary(f64::cosh, expr)
}

/// Hyperbolic tangent of an expression.
pub fn tanh(expr: Expr) -> Expr {
    Expr::unary(f64::tanh, expr)
}

/// Square root of an expression. Negative inputs evaluate to NaN.
pub fn sqrt(expr: Expr) -> Expr {
    Expr::unary(f64::sqrt, expr)
}

/// Absolute value of an expression.
pub fn abs(expr: Expr) -> Expr {
    Expr::unary(f64::abs, expr)
}

/// Natural logarithm of an expression. Non-positive inputs evaluate to NaN
/// or negative infinity per IEEE semantics.
pub fn ln(expr: Expr) -> Expr {
    Expr::unary(f64::ln, expr)
}

/// Base-10 logarithm of an expression.
pub fn log10(expr: Expr) -> Expr {
    Expr::unary(f64::log10, expr)
}

/// Exponential of an expression.
pub fn exp(expr: Expr) -> Expr {
    Expr::unary(f64::exp, expr)
}

/// Raise an expression to a constant power.
pub fn pow(expr: Expr, exponent: f64) -> Expr {
    Expr::binary(BinOp::Pow, expr, Expr::constant(exponent))
}
