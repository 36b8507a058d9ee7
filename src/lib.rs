//! Dijet kinematics: numeric helpers for a γ + Z → bb̄ analysis
//!
//!
//! # Introduction (for the physicist)
//!
//! The analysis selects events with one photon and exactly two central jets,
//! and studies the dijet system. For every selected pair of jets, it needs a
//! handful of kinematic variables: the dijet invariant mass, the ratio of the
//! subleading to the leading transverse momentum, and the separations of the
//! two jets in pseudorapidity, azimuth and (pt, η, φ) space.
//!
//! The invariant mass treats both jets as massless: each is rebuilt as a
//! 4-vector with E = |p| from (pt, η, φ). The jet masses are accepted so that
//! the full jet record can be forwarded, but they are not used.
//!
//!
//! # Introduction (for the computer guy)
//!
//! Everything here is a pure function of a few floating-point numbers. The
//! only side effect is a warning when a transverse momentum ratio is computed
//! with a zero input, which goes through the `Diagnostics` trait so that the
//! caller decides where it ends up (by default, a `tracing` warning).
//!
//! Data loading, event selection and histogramming belong to the analysis
//! driver, not to this crate.

#![warn(missing_docs)]

pub mod angular;
pub mod diagnostics;
pub mod mass;
pub mod momentum;
pub mod numeric;
pub mod pair;
pub mod particle;
pub mod ratio;

pub use crate::{
    angular::{delta_eta, delta_phi, delta_pt, delta_r},
    diagnostics::{Diagnostics, TracingDiagnostics},
    mass::{invariant_mass, pair_invariant_mass},
    numeric::Float,
    pair::{PairObservables, ParticlePair},
    particle::ParticleKinematics,
    ratio::{ratio_pt, ratio_pt_with},
};
