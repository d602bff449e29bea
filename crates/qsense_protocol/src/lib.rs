//! # QSense Protocol
//!
//! Ramsey-type phase readout of wait sequences, experiment configuration,
//! and parameter sweeps.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qsense_protocol // L3: Protocol (완료)
//!     Ramsey // 2점 / 4점 램지 (완료)
//!     ExperimentConfig // 직렬화 가능한 실험 설정 (완료)
//!     Sweep // 파라미터 스윕 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qsense_protocol::prelude::*;
//! use qsense_core::builder;
//! use qsense_system::BasicSystem;
//!
//! // Perturbation of 0.4 rad/time, large static detuning
//! let system = BasicSystem::new(0.4, 3.0);
//!
//! // The echo removes the detuning; four-point readout recovers 0.4 · 1.0
//! let wait = builder::spin_echo(1.0, 0.0, true);
//! let phase = measure_four_point_ramsey(&system, &wait);
//! assert!((phase - 0.4).abs() < 1e-9);
//! ```
//!
//! ## From JSON
//!
//! ```rust
//! use qsense_protocol::prelude::*;
//!
//! let json = r#"{
//!     "system": {"perturbation_strength": 0.25, "detuning_strength": 1.0},
//!     "sequence": {"kind": "multi_spin_echo", "total_duration": 2.0,
//!                  "echo_phases": [0.0, 1.5707963267948966], "on_in_first": true},
//!     "protocol": {"kind": "four_point"}
//! }"#;
//! let outcome = ExperimentConfig::from_json(json).unwrap().run().unwrap();
//! assert!((outcome.estimate - 0.5).abs() < 1e-9);
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Ramsey protocols (Gantree: L3_Protocol → Ramsey)
pub mod ramsey;

/// Experiment configuration (Gantree: L3_Protocol → ExperimentConfig)
pub mod config;

/// Parameter sweeps (Gantree: L3_Protocol → Sweep)
pub mod sweep;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{ExperimentConfig, ExperimentOutcome, SequenceSpec};
pub use ramsey::{
    four_point_readout, measure_four_point_ramsey, measure_simple_ramsey, ramsey_pulses,
    FourPointReadout, Protocol,
};
pub use sweep::{ideal_phase, linspace, max_error, sweep, SweepPoint};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qsense_protocol::prelude::*;
    //! ```

    pub use crate::config::{ExperimentConfig, ExperimentOutcome, SequenceSpec};
    pub use crate::ramsey::{
        four_point_readout, measure_four_point_ramsey, measure_simple_ramsey, FourPointReadout,
        Protocol,
    };
    pub use crate::sweep::{ideal_phase, linspace, sweep, SweepPoint};
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use approx::assert_abs_diff_eq;
    use qsense_core::{angle_distance, builder};
    use qsense_system::{BasicSystem, System};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_perfect_fringe_at_zero_duration() {
        let system = BasicSystem::ideal();
        let wait = builder::trivial(0.0);
        assert_abs_diff_eq!(measure_simple_ramsey(&system, &wait, false), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_multi_echo_single_phase_matches_spin_echo() {
        let system = BasicSystem::new(0.35, 1.7).with_rabi_frequency_scale(0.97);
        for &echo in &[0.0, 0.7, FRAC_PI_2, -2.0] {
            for &on in &[true, false] {
                let single = builder::spin_echo(1.2, echo, on);
                let multi = builder::multi_spin_echo(1.2, &[echo], on).unwrap();

                for &flip in &[false, true] {
                    assert_abs_diff_eq!(
                        measure_simple_ramsey(&system, &single, flip),
                        measure_simple_ramsey(&system, &multi, flip),
                        epsilon = 1e-10
                    );
                }
                let a = measure_four_point_ramsey(&system, &single);
                let b = measure_four_point_ramsey(&system, &multi);
                assert!(angle_distance(a, b) < 1e-12);
            }
        }
    }

    #[test]
    fn test_multi_echo_refocuses_detuning() {
        let system = BasicSystem::new(0.0, 2.3);
        let trains: Vec<Vec<f64>> = vec![
            vec![0.0, 0.0],
            vec![0.0, FRAC_PI_2],
            vec![0.3, 1.1, -0.4],
            builder::xy4_phases(1),
            builder::xy4_phases(2),
            builder::cpmg_phases(5),
        ];
        for phases in &trains {
            for &on in &[true, false] {
                let wait = builder::multi_spin_echo(1.9, phases, on).unwrap();
                let est = measure_four_point_ramsey(&system, &wait);
                assert_abs_diff_eq!(est, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_multi_echo_reports_total_perturbation_phase() {
        // even and odd trains both integrate p over the total on-time
        let p = 0.6;
        let system = BasicSystem::new(p, -0.9);
        for n in 1..=6 {
            for &on in &[true, false] {
                let phases: Vec<f64> = (0..n).map(|k| 0.4 * k as f64).collect();
                let wait = builder::multi_spin_echo(2.5, &phases, on).unwrap();
                let est = measure_four_point_ramsey(&system, &wait);
                assert_abs_diff_eq!(est, p * 2.5, epsilon = 1e-9);
                assert_abs_diff_eq!(ideal_phase(&system, &wait), p * 2.5, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_zero_echo_transform_matches_trivial() {
        // the 0-echo reduction of the multi-echo transform is the trivial one
        let system = BasicSystem::new(0.8, 0.1);
        let trivial = builder::trivial(1.0);
        let reduced = builder::multi_echo_transform(&[], true);
        for &analysis in &[FRAC_PI_2, -FRAC_PI_2, PI, 0.0] {
            let a = system.measure(&super::ramsey_pulses(&trivial, reduced.apply(analysis)));
            let b = system.measure(&super::ramsey_pulses(&trivial, analysis));
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_four_point_beats_simple_near_pi() {
        let phi = PI - 0.05;
        let system = BasicSystem::new(phi, 0.0);
        let wait = builder::trivial(1.0);
        assert_abs_diff_eq!(measure_four_point_ramsey(&system, &wait), phi, epsilon = 1e-9);
        let simple = measure_simple_ramsey(&system, &wait, false);
        assert!((simple - phi).abs() > 1.0);
    }

    #[test]
    fn test_pulse_area_error_biases_echo_readout() {
        let system = BasicSystem::new(0.3, 0.0).with_rabi_frequency_scale(0.9);
        let wait = builder::spin_echo(1.0, 0.0, true);
        let est = measure_four_point_ramsey(&system, &wait);
        assert!(est.is_finite());
        assert!((est - 0.3).abs() > 1e-6);
    }

    #[test]
    fn test_sweep_over_echo_durations() {
        let system = BasicSystem::new(0.2, 4.0);
        let durations = linspace(0.1, 5.0, 12);
        let points = sweep(&system, &durations, Protocol::FourPoint, |t| {
            builder::multi_spin_echo(t, &builder::xy4_phases(1), true)
        })
        .unwrap();
        for point in &points {
            assert_abs_diff_eq!(point.estimate, 0.2 * point.parameter, epsilon = 1e-9);
        }
    }
}
