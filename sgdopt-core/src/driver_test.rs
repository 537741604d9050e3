use super::*;
use crate::optim::{Adam, Anneal};
use crate::problem::FnProblem;
use crate::utils::testing::assert_vec_near;
use approx::assert_abs_diff_eq;
use ndarray::ArrayViewMut2;

/// Returns every index of the dataset, in order.
#[derive(Debug, Default)]
struct FullBatch {
    indices: Vec<usize>,
    inits: usize,
}

impl Batcher for FullBatch {
    fn init(&mut self, dataset_size: usize) -> Result<(), SgdError> {
        self.inits += 1;
        self.indices = (0..dataset_size).collect();
        Ok(())
    }

    fn batch(&mut self) -> Result<&[usize], SgdError> {
        Ok(&self.indices)
    }
}

/// Plays back a fixed list of steps (repeating the last one) and records
/// the gradients it was given.
#[derive(Debug, Default)]
struct ScriptedStepper {
    script: Vec<Vec<f64>>,
    seen: Vec<Vec<f64>>,
    inits: usize,
}

impl ScriptedStepper {
    fn new(script: Vec<Vec<f64>>) -> Self {
        ScriptedStepper {
            script,
            ..Default::default()
        }
    }
}

impl Stepper for ScriptedStepper {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn init(&mut self, _dimension: usize) -> Result<(), SgdError> {
        self.inits += 1;
        self.seen.clear();
        Ok(())
    }

    fn step(&mut self, step: &mut [f64], grad: &[f64]) -> Result<(), SgdError> {
        let k = self.seen.len().min(self.script.len() - 1);
        step.copy_from_slice(&self.script[k]);
        self.seen.push(grad.to_vec());
        Ok(())
    }
}

/// f_i(x) = sum_j (x_j - c_i)^2 for the given centers.
fn centers_problem(
    dim: usize,
    centers: Vec<f64>,
) -> FnProblem<
    impl Fn(&mut [f64], &[f64], &[usize]),
    impl Fn(ArrayViewMut2<'_, f64>, &[f64], &[usize]),
> {
    let size = centers.len();
    let func_centers = centers.clone();
    FnProblem::new(
        dim,
        size,
        move |dst: &mut [f64], x: &[f64], idx: &[usize]| {
            for (d, &i) in dst.iter_mut().zip(idx) {
                *d = x.iter().map(|xj| (xj - func_centers[i]).powi(2)).sum();
            }
        },
        move |mut dst: ArrayViewMut2<'_, f64>, x: &[f64], idx: &[usize]| {
            for (mut row, &i) in dst.rows_mut().into_iter().zip(idx) {
                for (g, xj) in row.iter_mut().zip(x) {
                    *g = 2.0 * (xj - centers[i]);
                }
            }
        },
    )
}

#[test]
fn test_anneal_full_batch_reaches_mean_exactly() {
    let problem = centers_problem(1, vec![1.0, 2.0, 6.0]);
    let mut batcher = FullBatch::default();
    let mut stepper = Anneal::default();
    let outcome = minimize(&problem, &mut batcher, &mut stepper, &Settings::default()).unwrap();
    // η_0 = 1 overshoots to 2m, η_1 = 1/2 lands on m, then the gradient vanishes.
    assert_eq!(outcome.status, Status::StepConvergence);
    assert_eq!(outcome.iterations, 2);
    assert_abs_diff_eq!(outcome.parameters[0], 3.0, epsilon = 1e-12);
}

#[test]
fn test_gradient_is_averaged_over_batch() {
    let problem = centers_problem(2, vec![1.0, 2.0, 3.0, 6.0]);
    let mut batcher = FullBatch::default();
    let mut stepper = ScriptedStepper::new(vec![vec![0.0, 0.0]]);
    minimize(&problem, &mut batcher, &mut stepper, &Settings::default()).unwrap();
    // At x = 0 each sample contributes -2 c_i; the mean is -2 * 3.
    assert_eq!(stepper.seen.len(), 1);
    assert_vec_near(&stepper.seen[0], &[-6.0, -6.0], 1e-12);
}

#[test]
fn test_nan_step_fails_without_being_applied() {
    let problem = centers_problem(2, vec![0.0, 1.0]);
    let mut batcher = FullBatch::default();
    let mut stepper = ScriptedStepper::new(vec![
        vec![1.0, 1.0],
        vec![0.5, -1.0],
        vec![f64::NAN, 0.0],
    ]);
    let outcome = minimize(&problem, &mut batcher, &mut stepper, &Settings::default()).unwrap();
    assert_eq!(outcome.status, Status::Failure);
    assert!(!outcome.status.is_success());
    assert_eq!(outcome.iterations, 2);
    assert_eq!(outcome.parameters, vec![1.5, 0.0]);
}

#[test]
fn test_infinite_step_fails() {
    let problem = centers_problem(1, vec![0.0]);
    let mut batcher = FullBatch::default();
    let mut stepper = ScriptedStepper::new(vec![vec![f64::INFINITY]]);
    let outcome = minimize(&problem, &mut batcher, &mut stepper, &Settings::default()).unwrap();
    assert_eq!(outcome.status, Status::Failure);
    assert_eq!(outcome.parameters, vec![0.0]);
    assert_eq!(outcome.iterations, 0);
}

#[test]
fn test_iteration_limit_is_exact() {
    let problem = centers_problem(1, vec![0.0, 1.0]);
    let mut batcher = FullBatch::default();
    let mut stepper = ScriptedStepper::new(vec![vec![1.0]]);
    let settings = Settings::new(5, 0.0);
    let outcome = minimize(&problem, &mut batcher, &mut stepper, &settings).unwrap();
    assert_eq!(outcome.status, Status::IterationLimit);
    assert!(outcome.status.is_success());
    assert_eq!(stepper.seen.len(), 5);
    assert_eq!(outcome.iterations, 5);
    assert_eq!(outcome.parameters, vec![5.0]);
}

#[test]
fn test_default_tolerance_stops_tiny_step() {
    let problem = centers_problem(1, vec![0.0]);
    let mut batcher = FullBatch::default();
    let mut stepper = ScriptedStepper::new(vec![vec![1e-9]]);
    let outcome = minimize(&problem, &mut batcher, &mut stepper, &Settings::default()).unwrap();
    assert_eq!(outcome.status, Status::StepConvergence);
    assert_eq!(outcome.parameters, vec![0.0]);
    assert_eq!(outcome.iterations, 0);
}

#[test]
fn test_negative_tolerance_disables_convergence() {
    let problem = centers_problem(1, vec![0.0]);
    let mut batcher = FullBatch::default();
    let mut stepper = ScriptedStepper::new(vec![vec![0.0]]);
    let settings = Settings::new(3, -1.0);
    let outcome = minimize(&problem, &mut batcher, &mut stepper, &settings).unwrap();
    assert_eq!(outcome.status, Status::IterationLimit);
    assert_eq!(stepper.seen.len(), 3);
}

#[test]
fn test_custom_tolerance() {
    let problem = centers_problem(1, vec![0.0]);
    let mut batcher = FullBatch::default();
    let mut stepper = ScriptedStepper::new(vec![vec![1e-3], vec![1e-3], vec![1e-7]]);
    let settings = Settings::new(0, 1e-6);
    let outcome = minimize(&problem, &mut batcher, &mut stepper, &settings).unwrap();
    assert_eq!(outcome.status, Status::StepConvergence);
    assert_eq!(outcome.iterations, 2);
    assert_abs_diff_eq!(outcome.parameters[0], 2e-3, epsilon = 1e-15);
}

#[test]
fn test_zero_dimension_is_rejected_before_init() {
    let problem = centers_problem(0, vec![1.0]);
    let mut batcher = FullBatch::default();
    let mut stepper = ScriptedStepper::new(vec![vec![]]);
    let err = minimize(&problem, &mut batcher, &mut stepper, &Settings::default()).unwrap_err();
    assert_eq!(err, SgdError::EmptyDimension);
    assert_eq!(batcher.inits, 0);
    assert_eq!(stepper.inits, 0);
}

#[test]
fn test_empty_dataset_is_rejected_before_init() {
    let problem = centers_problem(2, vec![]);
    let mut batcher = FullBatch::default();
    let mut stepper = ScriptedStepper::new(vec![vec![0.0, 0.0]]);
    let err = minimize(&problem, &mut batcher, &mut stepper, &Settings::default()).unwrap_err();
    assert_eq!(err, SgdError::EmptyDataset);
    assert_eq!(batcher.inits, 0);
    assert_eq!(stepper.inits, 0);
}

#[test]
fn test_batcher_init_error_propagates() {
    struct Refusing;
    impl Batcher for Refusing {
        fn init(&mut self, dataset_size: usize) -> Result<(), SgdError> {
            Err(SgdError::BatchTooLarge {
                batch_size: dataset_size + 1,
                dataset_size,
            })
        }
        fn batch(&mut self) -> Result<&[usize], SgdError> {
            Err(SgdError::Uninitialized("refusing"))
        }
    }

    let problem = centers_problem(1, vec![1.0, 2.0]);
    let mut stepper = ScriptedStepper::new(vec![vec![0.0]]);
    let err = minimize(&problem, &mut Refusing, &mut stepper, &Settings::default()).unwrap_err();
    assert_eq!(
        err,
        SgdError::BatchTooLarge {
            batch_size: 3,
            dataset_size: 2
        }
    );
}

#[test]
fn test_stepper_is_reinitialized_between_runs() {
    let problem = centers_problem(2, vec![0.5, 1.5]);
    let mut stepper = Adam::new(0.05, 0.0, 0.0, 0.0);
    let settings = Settings::new(50, 0.0);
    let first = minimize(&problem, &mut FullBatch::default(), &mut stepper, &settings).unwrap();
    let second = minimize(&problem, &mut FullBatch::default(), &mut stepper, &settings).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_trait_objects_are_accepted() {
    let problem = centers_problem(1, vec![2.0, 4.0]);
    let mut batcher: Box<dyn Batcher> = Box::new(FullBatch::default());
    let mut stepper: Box<dyn Stepper> = Box::new(Anneal::default());
    let outcome = minimize(&problem, &mut batcher, &mut stepper, &Settings::default()).unwrap();
    assert_abs_diff_eq!(outcome.parameters[0], 3.0, epsilon = 1e-12);
}
