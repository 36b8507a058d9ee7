//! Separations between two particles in (pt, eta, phi) space

use crate::numeric::Float;
use prefix_num_ops::real::*;

/// Pseudorapidity gap |Δη|
pub fn delta_eta(eta1: Float, eta2: Float) -> Float {
    abs(eta1 - eta2)
}

/// Azimuthal separation |Δφ|, folded into [0, π]
///
/// Going through the cosine makes the result insensitive to the 2π
/// periodicity of the input angles.
///
pub fn delta_phi(phi1: Float, phi2: Float) -> Float {
    abs(acos(cos(phi1 - phi2)))
}

/// Angular distance ΔR = √(Δη² + Δφ²)
pub fn delta_r(eta1: Float, phi1: Float, eta2: Float, phi2: Float) -> Float {
    let d_eta = delta_eta(eta1, eta2);
    let d_phi = delta_phi(phi1, phi2);
    sqrt(d_eta * d_eta + d_phi * d_phi)
}

/// Transverse momentum difference |Δpt|
pub fn delta_pt(pt1: Float, pt2: Float) -> Float {
    abs(pt1 - pt2)
}
