//! Steppers: the update policies that turn an averaged gradient into a step.
//!
//! This module provides the [`Stepper`] trait, the [`InverseTimeDecay`]
//! schedule shared by the annealed steppers, and the seven implementations.
//! Every hyperparameter left at zero resolves to its documented default when
//! the stepper is initialized.

pub mod schedule;
pub mod stepper_trait;

pub mod adadelta;
pub mod adagrad;
pub mod adam;
pub mod anneal;
pub mod momentum;
pub mod nesterov;
pub mod rmsprop;

pub use schedule::InverseTimeDecay;
pub use stepper_trait::Stepper;

pub use adadelta::Adadelta;
pub use adagrad::Adagrad;
pub use adam::Adam;
pub use anneal::Anneal;
pub use momentum::Momentum;
pub use nesterov::Nesterov;
pub use rmsprop::RmsProp;
