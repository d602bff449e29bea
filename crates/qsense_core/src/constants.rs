//! Constants for QSense
//!
//! Gantree: L0_Foundation → Constants
//!
//! Phase conventions of the Ramsey protocols and numeric tolerances.

// ============================================================================
// Phase Constants
// Gantree: phase // 위상 상수
// ============================================================================

pub mod phase {
    //! Fixed phases used by sequence construction and the Ramsey protocols

    use std::f64::consts::{FRAC_PI_2, PI};

    /// Gate area of a refocusing (echo) pulse
    pub const ECHO_AREA: f64 = PI;

    /// Gate area of the Ramsey opening and closing pulses
    pub const RAMSEY_AREA: f64 = FRAC_PI_2;

    /// Axis azimuth of the Ramsey opening pulse
    pub const RAMSEY_OPEN_PHASE: f64 = 0.0;

    /// Starting value of the null-phase fold for echo trains
    /// Gantree: NULL_PHASE_INIT: f64 = -π/2
    pub const NULL_PHASE_INIT: f64 = -FRAC_PI_2;

    /// Desired analysis phase for the plain two-point readout
    pub const SIMPLE_ANALYSIS_PHASE: f64 = -FRAC_PI_2;

    /// Closing phases of the four-point readout, in measurement order:
    /// +x, -x, +y, -y quadratures
    /// Gantree: FOUR_POINT_PHASES = [π/2, -π/2, π, 0]
    pub const FOUR_POINT_PHASES: [f64; 4] = [FRAC_PI_2, -FRAC_PI_2, PI, 0.0];

    /// Analysis phase for a given flip setting of the two-point readout
    #[inline]
    pub fn simple_analysis_phase(flip_analysis: bool) -> f64 {
        if flip_analysis {
            -SIMPLE_ANALYSIS_PHASE
        } else {
            SIMPLE_ANALYSIS_PHASE
        }
    }
}

// ============================================================================
// Tolerance Constants
// Gantree: tolerance // 허용 오차
// ============================================================================

pub mod tolerance {
    //! Numeric tolerances

    /// Slack when snapping axis ranges onto tick multiples
    pub const AXIS_SNAP: f64 = 1e-9;

    /// Default tolerance when comparing reconstructed phases in sweeps
    pub const PHASE: f64 = 1e-9;

    /// Largest entry deviation of `U† U` from the identity accepted for a
    /// pulse unitary
    pub const UNITARITY: f64 = 1e-9;

    /// Upper bound on the number of ticks of one axis
    pub const MAX_AXIS_TICKS: usize = 10_000;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_four_point_phases_pairs() {
        // each quadrature is a symmetric pair separated by π
        let p = phase::FOUR_POINT_PHASES;
        assert!(((p[0] - p[1]) - std::f64::consts::PI).abs() < 1e-12);
        assert!(((p[2] - p[3]) - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_simple_analysis_phase() {
        assert_eq!(phase::simple_analysis_phase(false), -FRAC_PI_2);
        assert_eq!(phase::simple_analysis_phase(true), FRAC_PI_2);
    }
}
