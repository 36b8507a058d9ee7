//! Kinematics of a single reconstructed particle, as stored by the analysis

use crate::{
    momentum::{self, Momentum},
    numeric::Float,
};
use nalgebra::Vector3;
use prefix_num_ops::real::*;

/// Cylindrical kinematics of one particle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleKinematics {
    /// Transverse momentum (GeV)
    pub pt: Float,

    /// Pseudorapidity
    pub eta: Float,

    /// Azimuthal angle (radians)
    pub phi: Float,

    /// Rest mass (GeV), carried along but unused by the massless formulas
    pub mass: Float,
}
//
impl ParticleKinematics {
    /// Bundle the kinematic quantities of a particle
    pub fn new(pt: Float, eta: Float, phi: Float, mass: Float) -> Self {
        Self { pt, eta, phi, mass }
    }

    /// Cartesian 3-momentum (px, py, pz)
    pub fn p_xyz(&self) -> Vector3<Float> {
        Vector3::new(
            self.pt * cos(self.phi),
            self.pt * sin(self.phi),
            self.pt * sinh(self.eta),
        )
    }

    /// 4-momentum of the particle, treating it as massless (E = |p|)
    pub fn massless_momentum(&self) -> Momentum {
        momentum::massless(self.p_xyz())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        momentum::{E, X, Y, Z},
        numeric::floats::consts::FRAC_PI_2,
    };

    const TOLERANCE: Float = 1e-9;

    fn approx_equal(a: Float, b: Float) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn central_particle_along_x_has_no_longitudinal_momentum() {
        let p = ParticleKinematics::new(25., 0., 0., 4.8).massless_momentum();
        assert_eq!(p[X], 25.);
        assert_eq!(p[Y], 0.);
        assert_eq!(p[Z], 0.);
        assert_eq!(p[E], 25.);
    }

    #[test]
    fn azimuth_rotates_the_transverse_momentum() {
        let p = ParticleKinematics::new(10., 0., FRAC_PI_2, 0.).massless_momentum();
        assert!(approx_equal(p[X], 0.));
        assert!(approx_equal(p[Y], 10.));
    }

    #[test]
    fn forward_particle_energy_is_pt_times_cosh_eta() {
        let (pt, eta) = (40., 1.7);
        let p = ParticleKinematics::new(pt, eta, 0.3, 0.).massless_momentum();
        assert!(approx_equal(p[Z], pt * eta.sinh()));
        assert!(approx_equal(p[E], pt * eta.cosh()));
    }

    #[test]
    fn mass_does_not_enter_the_momentum() {
        let light = ParticleKinematics::new(30., -0.8, 1.1, 0.);
        let heavy = ParticleKinematics { mass: 12., ..light };
        assert_eq!(light.massless_momentum(), heavy.massless_momentum());
    }
}
