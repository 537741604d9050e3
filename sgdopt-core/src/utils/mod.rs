//! Numeric helpers shared by the steppers and the driver loop.

pub mod buffers;
#[cfg(test)]
pub(crate) mod testing;

pub use buffers::{add_assign, l2_norm, mean_rows_into, or_default, resize_rows, resize_zero, scale};
