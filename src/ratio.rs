//! Symmetric transverse momentum ratio

use crate::{
    diagnostics::{Diagnostics, TracingDiagnostics},
    numeric::Float,
};

/// Ratio of the smaller to the larger of two transverse momenta
///
/// Zero inputs are reported as a warning through `tracing`, but the division
/// still happens and its result (possibly NaN) is returned.
///
pub fn ratio_pt(pt1: Float, pt2: Float) -> Float {
    ratio_pt_with(pt1, pt2, &TracingDiagnostics)
}

/// Same as `ratio_pt()`, reporting degenerate inputs to a custom sink
pub fn ratio_pt_with(pt1: Float, pt2: Float, diagnostics: &impl Diagnostics) -> Float {
    if pt1 == 0. || pt2 == 0. {
        diagnostics.zero_pt_in_ratio(pt1, pt2);
    }
    if pt1 < pt2 {
        pt1 / pt2
    } else {
        pt2 / pt1
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Diagnostics sink which remembers everything it was told
    #[derive(Default)]
    pub(crate) struct RecordingDiagnostics {
        pub(crate) zero_pt_reports: Mutex<Vec<(Float, Float)>>,
    }
    //
    impl RecordingDiagnostics {
        pub(crate) fn reports(&self) -> Vec<(Float, Float)> {
            self.zero_pt_reports.lock().unwrap().clone()
        }
    }
    //
    impl Diagnostics for RecordingDiagnostics {
        fn zero_pt_in_ratio(&self, pt1: Float, pt2: Float) {
            self.zero_pt_reports.lock().unwrap().push((pt1, pt2));
        }
    }

    #[test]
    fn ratio_is_smaller_over_larger() {
        assert_eq!(ratio_pt(5., 10.), 0.5);
        assert_eq!(ratio_pt(10., 5.), 0.5);
    }

    #[test]
    fn equal_momenta_give_unit_ratio() {
        assert_eq!(ratio_pt(42., 42.), 1.);
    }

    #[test]
    fn regular_inputs_emit_no_diagnostic() {
        let sink = RecordingDiagnostics::default();
        ratio_pt_with(31., 87., &sink);
        assert!(sink.reports().is_empty());
    }

    #[test]
    fn zero_input_is_reported_once_and_still_computed() {
        let sink = RecordingDiagnostics::default();
        let ratio = ratio_pt_with(0., 5., &sink);
        assert_eq!(ratio, 0.);
        assert_eq!(sink.reports(), vec![(0., 5.)]);
    }

    #[test]
    fn zero_second_input_divides_by_zero() {
        let sink = RecordingDiagnostics::default();
        // 5 < 0 is false, so the ratio is 0 / 5
        assert_eq!(ratio_pt_with(5., 0., &sink), 0.);
        assert_eq!(sink.reports(), vec![(5., 0.)]);
    }

    #[test]
    fn both_zero_yields_nan_after_reporting() {
        let sink = RecordingDiagnostics::default();
        assert!(ratio_pt_with(0., 0., &sink).is_nan());
        assert_eq!(sink.reports().len(), 1);
    }

    #[test]
    fn negative_zero_counts_as_zero() {
        let sink = RecordingDiagnostics::default();
        ratio_pt_with(-0., 3., &sink);
        assert_eq!(sink.reports().len(), 1);
    }
}
