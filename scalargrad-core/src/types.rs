use std::fmt;

/// Identifies the operator that produced a node in the computation graph.
///
/// Leaf nodes created directly by the user carry [`Operation::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operation {
    /// Leaf node, no producing operator.
    #[default]
    None,
    Identity,
    Addition,
    Negation,
    Subtraction,
    Multiplication,
    /// True division.
    Division,
    FloorDivision,
    /// Multiplicative inverse, `a⁻¹`.
    Inversion,
    /// `a^b`.
    Exponentiation,
    /// `e^a`.
    Exponential,
    HyperbolicTangent,
    Relu,
}

impl Operation {
    /// Short tag used when rendering nodes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::None => "none",
            Operation::Identity => "identity",
            Operation::Addition => "add",
            Operation::Negation => "neg",
            Operation::Subtraction => "sub",
            Operation::Multiplication => "mul",
            Operation::Division => "div",
            Operation::FloorDivision => "floordiv",
            Operation::Inversion => "inv",
            Operation::Exponentiation => "pow",
            Operation::Exponential => "exp",
            Operation::HyperbolicTangent => "tanh",
            Operation::Relu => "relu",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
