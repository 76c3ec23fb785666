use crate::ops::activation::{relu, tanh};
use crate::ops::arithmetic::{add, div, floordiv, invert, mul, neg, pow, sub};
use crate::ops::math_elem::{exp, identity};
use crate::scalar::Scalar;
use crate::types::Operation;

/// The local-derivative rule attached to a derived node.
///
/// Each variant stores handles to the operands exactly as they were passed to the
/// operator (so `x + x` keeps `x` twice here, while the node's deduplicated operand
/// list holds it once). Variants that reuse the forward result keep it by value,
/// which avoids a reference from a node back to itself.
///
/// [`BackwardOp::backward`] dispatches to the formula that lives next to the
/// operator's forward computation in [`crate::ops`].
#[derive(Debug, Clone)]
pub enum BackwardOp {
    Identity { input: Scalar },
    Add { lhs: Scalar, rhs: Scalar },
    Sub { lhs: Scalar, rhs: Scalar },
    Neg { input: Scalar },
    Mul { lhs: Scalar, rhs: Scalar },
    Div { lhs: Scalar, rhs: Scalar },
    FloorDiv { lhs: Scalar, rhs: Scalar },
    Invert { input: Scalar },
    Pow { base: Scalar, exponent: Scalar },
    Exp { input: Scalar, output: f64 },
    Tanh { input: Scalar, output: f64 },
    Relu { input: Scalar },
}

impl BackwardOp {
    /// Adds the local-derivative contribution of every operand into its gradient.
    ///
    /// `grad_output` is the accumulated gradient of the node owning this rule. Only
    /// operand gradients are written; no value is ever modified.
    pub fn backward(&self, grad_output: f64) {
        match self {
            BackwardOp::Identity { input } => identity::identity_backward(input, grad_output),
            BackwardOp::Add { lhs, rhs } => add::add_backward(lhs, rhs, grad_output),
            BackwardOp::Sub { lhs, rhs } => sub::sub_backward(lhs, rhs, grad_output),
            BackwardOp::Neg { input } => neg::neg_backward(input, grad_output),
            BackwardOp::Mul { lhs, rhs } => mul::mul_backward(lhs, rhs, grad_output),
            BackwardOp::Div { lhs, rhs } => div::div_backward(lhs, rhs, grad_output),
            BackwardOp::FloorDiv { lhs, rhs } => floordiv::floordiv_backward(lhs, rhs, grad_output),
            BackwardOp::Invert { input } => invert::invert_backward(input, grad_output),
            BackwardOp::Pow { base, exponent } => pow::pow_backward(base, exponent, grad_output),
            BackwardOp::Exp { input, output } => exp::exp_backward(input, *output, grad_output),
            BackwardOp::Tanh { input, output } => tanh::tanh_backward(input, *output, grad_output),
            BackwardOp::Relu { input } => relu::relu_backward(input, grad_output),
        }
    }

    /// Returns the operands in the order they were passed to the operator.
    pub fn inputs(&self) -> Vec<Scalar> {
        match self {
            BackwardOp::Identity { input }
            | BackwardOp::Neg { input }
            | BackwardOp::Invert { input }
            | BackwardOp::Exp { input, .. }
            | BackwardOp::Tanh { input, .. }
            | BackwardOp::Relu { input } => vec![input.clone()],
            BackwardOp::Add { lhs, rhs }
            | BackwardOp::Sub { lhs, rhs }
            | BackwardOp::Mul { lhs, rhs }
            | BackwardOp::Div { lhs, rhs }
            | BackwardOp::FloorDiv { lhs, rhs } => vec![lhs.clone(), rhs.clone()],
            BackwardOp::Pow { base, exponent } => vec![base.clone(), exponent.clone()],
        }
    }

    /// The operation tag matching this rule.
    pub fn operation(&self) -> Operation {
        match self {
            BackwardOp::Identity { .. } => Operation::Identity,
            BackwardOp::Add { .. } => Operation::Addition,
            BackwardOp::Sub { .. } => Operation::Subtraction,
            BackwardOp::Neg { .. } => Operation::Negation,
            BackwardOp::Mul { .. } => Operation::Multiplication,
            BackwardOp::Div { .. } => Operation::Division,
            BackwardOp::FloorDiv { .. } => Operation::FloorDivision,
            BackwardOp::Invert { .. } => Operation::Inversion,
            BackwardOp::Pow { .. } => Operation::Exponentiation,
            BackwardOp::Exp { .. } => Operation::Exponential,
            BackwardOp::Tanh { .. } => Operation::HyperbolicTangent,
            BackwardOp::Relu { .. } => Operation::Relu,
        }
    }
}
