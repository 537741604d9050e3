use crate::optim::Stepper;

/// Asserts that two slices have the same length and agree element-wise within `tolerance`.
pub(crate) fn assert_vec_near(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Runs `stepper` over `grads` from a fresh `init`, returning every step produced.
pub(crate) fn collect_steps<S: Stepper>(stepper: &mut S, grads: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let dim = grads.first().map_or(0, Vec::len);
    stepper.init(dim).expect("init failed");
    grads
        .iter()
        .map(|g| {
            let mut step = vec![0.0; dim];
            stepper.step(&mut step, g).expect("step failed");
            step
        })
        .collect()
}
