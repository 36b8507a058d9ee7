//! This module implements some domain-specific 4-momentum handling logic.

use crate::numeric::Float;
use nalgebra::{SVector, Vector3};
use prefix_num_ops::real::*;

/// 4-momentum dimension
pub const MOMENTUM_DIM: usize = 4;

/// Relativistic 4-momentum
pub type Momentum = SVector<Float, MOMENTUM_DIM>;

/// Convenience const for accessing the X coordinate of a 4-vector
pub const X: usize = 0;

/// Convenience const for accessing the Y coordinate of a 4-vector
pub const Y: usize = 1;

/// Convenience const for accessing the Z coordinate of a 4-vector
pub const Z: usize = 2;

/// Convenience const for accessing the E coordinate of a 4-vector
pub const E: usize = 3;

/// Extract the spatial part of a 4-momentum
pub fn xyz(p: &Momentum) -> Vector3<Float> {
    p.fixed_rows::<3>(X).into_owned()
}

/// Build the 4-momentum of a massless particle from its 3-momentum
///
/// The energy is the norm of the 3-momentum.
///
pub fn massless(p_xyz: Vector3<Float>) -> Momentum {
    let e = p_xyz.norm();
    Momentum::new(p_xyz[X], p_xyz[Y], p_xyz[Z], e)
}

/// Invariant mass of a system described by its total 4-momentum
///
/// Negative Minkowski squares are not special-cased and produce NaN.
///
pub fn invariant_mass_of(total: &Momentum) -> Float {
    sqrt(total[E] * total[E] - xyz(total).norm_squared())
}
