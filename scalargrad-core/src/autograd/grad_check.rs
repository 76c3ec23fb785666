use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Step size and tolerances for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation used for the central difference.
    pub epsilon: f64,
    /// Absolute tolerance, dominant when both gradients are close to zero.
    pub abs_tolerance: f64,
    /// Relative tolerance.
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-6,
            rel_tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central finite
/// differences.
///
/// `func` is evaluated once on gradient-enabled leaves built from `inputs` and
/// differentiated with `backward`. Each input is then perturbed by `±epsilon` on
/// fresh leaves and the result compared with the analytical gradient.
///
/// Returns the analytical gradients, in input order, when every one of them matches.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    config: &GradCheckConfig,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Scalar]) -> Result<Scalar, ScalarGradError>,
{
    // --- 1. Analytical gradients ---
    let leaves = make_leaves(inputs);
    let output = func(&leaves)?;
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(Scalar::grad).collect();

    // --- 2. Numerical gradient per input ---
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = evaluate_perturbed(&func, inputs, i, config.epsilon)?;
        let loss_minus = evaluate_perturbed(&func, inputs, i, -config.epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

        if !numerical_grad.is_finite() {
            log::warn!(
                "check_grad: numerical gradient for input {} is {} (loss+={}, loss-={})",
                i,
                numerical_grad,
                loss_plus,
                loss_minus
            );
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            log::warn!(
                "check_grad: analytical gradient for input {} is {}",
                i,
                analytical_grad
            );
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.abs_tolerance,
            max_relative = config.rel_tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(analytical)
}

fn make_leaves(values: &[f64]) -> Vec<Scalar> {
    values
        .iter()
        .map(|&v| Scalar::with_requires_grad(v, true))
        .collect()
}

/// Evaluates `func` with input `index` shifted by `delta`.
fn evaluate_perturbed<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Scalar]) -> Result<Scalar, ScalarGradError>,
{
    let mut shifted = inputs.to_vec();
    shifted[index] += delta;
    Ok(func(&make_leaves(&shifted))?.value())
}
