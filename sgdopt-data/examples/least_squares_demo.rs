// Fits a noisy two-parameter linear model with every stepper and prints how
// close each one gets to the exact least-squares solution.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sgdopt_core::optim::{Adadelta, Adagrad, Adam, Anneal, Momentum, Nesterov, RmsProp};
use sgdopt_core::{minimize, SgdError, Settings, Stepper};
use sgdopt_data::{LeastSquares, RandomBatch};

fn main() -> Result<(), SgdError> {
    let mut rng = StdRng::seed_from_u64(42);
    let problem = LeastSquares::synthetic(&[0.7, 0.8], 1e-2, true, 50, &mut rng)?;
    let optimal = problem.optimal()?;
    println!("exact solution: {:?}", optimal);

    let mut steppers: Vec<Box<dyn Stepper>> = vec![
        Box::new(Anneal::default()),
        Box::new(Momentum::default()),
        Box::new(Nesterov::default()),
        Box::new(Adagrad::new(0.1, 0.0)),
        Box::new(Adadelta::default()),
        Box::new(Adam::default()),
        Box::new(RmsProp::default()),
    ];
    let settings = Settings::new(100_000, 1e-6);

    for stepper in steppers.iter_mut() {
        let mut batcher = RandomBatch::without_replacement(5, StdRng::seed_from_u64(7));
        let outcome = minimize(&problem, &mut batcher, stepper.as_mut(), &settings)?;
        let err = outcome
            .parameters
            .iter()
            .zip(&optimal)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        println!(
            "{:>9}: {:?} after {} iterations ({}), max error {:.2e}",
            stepper.name(),
            outcome.parameters,
            outcome.iterations,
            outcome.status,
            err
        );
    }
    Ok(())
}
