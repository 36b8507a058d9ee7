//! Reporting channel for degenerate inputs
//!
//! Kinematic helpers never fail. When they notice something suspicious about
//! their inputs, they tell a `Diagnostics` implementation about it and carry
//! on with the computation.

use crate::numeric::Float;
use tracing::warn;

/// Receiver of non-fatal diagnostics emitted by the kinematic helpers
///
/// Methods take `&self` so that one sink can be shared by every thread of an
/// analysis. Implementations that record reports need interior mutability.
///
pub trait Diagnostics {
    /// A transverse momentum ratio was requested with a zero input
    fn zero_pt_in_ratio(&self, pt1: Float, pt2: Float);
}

/// Default sink, which forwards diagnostics to the `tracing` subscriber
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;
//
impl Diagnostics for TracingDiagnostics {
    fn zero_pt_in_ratio(&self, pt1: Float, pt2: Float) {
        warn!(pt1, pt2, "Transverse momentum ratio computed with a zero pT");
    }
}
