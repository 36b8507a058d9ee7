//! Invariant mass of a pair of particles

use crate::{momentum, numeric::Float, particle::ParticleKinematics};

/// Invariant mass of a two-particle system
///
/// Each particle is rebuilt as a massless 4-vector from (pt, eta, phi), the
/// two are summed, and the mass is the square root of the Minkowski norm of
/// the sum. `mass1` and `mass2` are accepted so that callers can forward the
/// full per-particle record, but they do not enter the computation.
///
/// No input validation is performed: configurations whose total 4-momentum
/// is space-like yield NaN.
///
#[allow(clippy::too_many_arguments)]
pub fn invariant_mass(
    pt1: Float,
    eta1: Float,
    phi1: Float,
    mass1: Float,
    pt2: Float,
    eta2: Float,
    phi2: Float,
    mass2: Float,
) -> Float {
    pair_invariant_mass(
        &ParticleKinematics::new(pt1, eta1, phi1, mass1),
        &ParticleKinematics::new(pt2, eta2, phi2, mass2),
    )
}

/// Same as `invariant_mass()`, for already bundled particle kinematics
pub fn pair_invariant_mass(p1: &ParticleKinematics, p2: &ParticleKinematics) -> Float {
    let total = p1.massless_momentum() + p2.massless_momentum();
    momentum::invariant_mass_of(&total)
}
