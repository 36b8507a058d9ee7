//! Pairs of particles and the observables that the dijet analysis derives
//! from them

use crate::{
    angular::{delta_eta, delta_phi, delta_pt, delta_r},
    diagnostics::{Diagnostics, TracingDiagnostics},
    mass::pair_invariant_mass,
    numeric::Float,
    particle::ParticleKinematics,
    ratio::ratio_pt_with,
};

/// Two particles, typically the leading and subleading jet of an event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticlePair {
    /// Particle which the caller considers first (e.g. leading jet)
    pub first: ParticleKinematics,

    /// The other particle
    pub second: ParticleKinematics,
}
//
impl ParticlePair {
    /// Pair up two particles
    pub fn new(first: ParticleKinematics, second: ParticleKinematics) -> Self {
        Self { first, second }
    }

    /// The same pair, with the particles listed in the opposite order
    pub fn swapped(&self) -> Self {
        Self::new(self.second, self.first)
    }

    /// Invariant mass of the pair, both particles being treated as massless
    pub fn invariant_mass(&self) -> Float {
        pair_invariant_mass(&self.first, &self.second)
    }

    /// Ratio of the smaller to the larger transverse momentum
    pub fn pt_ratio(&self) -> Float {
        self.pt_ratio_with(&TracingDiagnostics)
    }

    /// Same as `pt_ratio()`, reporting degenerate inputs to a custom sink
    pub fn pt_ratio_with(&self, diagnostics: &impl Diagnostics) -> Float {
        ratio_pt_with(self.first.pt, self.second.pt, diagnostics)
    }

    /// Angular distance between the two particles
    pub fn delta_r(&self) -> Float {
        delta_r(
            self.first.eta,
            self.first.phi,
            self.second.eta,
            self.second.phi,
        )
    }

    /// Compute every per-pair observable at once
    pub fn observables(&self, diagnostics: &impl Diagnostics) -> PairObservables {
        PairObservables {
            invariant_mass: self.invariant_mass(),
            pt_ratio: self.pt_ratio_with(diagnostics),
            delta_eta: delta_eta(self.first.eta, self.second.eta),
            delta_phi: delta_phi(self.first.phi, self.second.phi),
            delta_r: self.delta_r(),
            delta_pt: delta_pt(self.first.pt, self.second.pt),
        }
    }
}

/// Kinematic variables of a particle pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairObservables {
    /// Invariant mass of the pair (GeV)
    pub invariant_mass: Float,

    /// Smaller over larger transverse momentum
    pub pt_ratio: Float,

    /// Pseudorapidity gap
    pub delta_eta: Float,

    /// Azimuthal separation, in [0, π]
    pub delta_phi: Float,

    /// Angular distance
    pub delta_r: Float,

    /// Transverse momentum difference (GeV)
    pub delta_pt: Float,
}
