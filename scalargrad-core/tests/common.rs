use scalargrad_core::Scalar;
use std::sync::Once;

static INIT: Once = Once::new();

// Used from several test crates, each of which only sees its own call sites.
#[allow(dead_code)]
pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// The leaves of the single-neuron scenario: `x1, w1, x2, w2, b`.
#[allow(dead_code)]
pub fn neuron_leaves(requires_grad: bool) -> [Scalar; 5] {
    [
        Scalar::leaf(-3.0, Some("x1"), requires_grad),
        Scalar::leaf(1.0, Some("w1"), requires_grad),
        Scalar::leaf(1.0, Some("x2"), requires_grad),
        Scalar::leaf(0.5, Some("w2"), requires_grad),
        Scalar::leaf(3.0, Some("b"), requires_grad),
    ]
}

/// `tanh(x1*w1 + x2*w2 + b)`.
#[allow(dead_code)]
pub fn neuron(leaves: &[Scalar; 5]) -> Scalar {
    let [x1, w1, x2, w2, b] = leaves;
    let x1w1 = x1.mul(w1, Some("x1w1")).unwrap_or_else(|e| panic!("{}", e));
    let x2w2 = x2.mul(w2, Some("x2w2")).unwrap_or_else(|e| panic!("{}", e));
    let sum = &(&x1w1 + &x2w2) + b;
    sum.tanh(Some("out"))
}
