//! Ramsey measurement protocols
//!
//! Gantree: L3_Protocol → Ramsey
//!
//! Both protocols bracket a wait sequence between π/2 pulses and invert the
//! measured probabilities back into the phase the wait accumulated.
//!
//! | Protocol | Measurements | Unambiguous range |
//! |---|---|---|
//! | Simple (two-point) | 1 | [-π/2, π/2] |
//! | Four-point | 4 | (-π, π] |
//!
//! Outside its range the simple readout silently returns a folded value;
//! callers pick the protocol that fits their expected phase.

use qsense_core::constants::phase::{
    simple_analysis_phase, FOUR_POINT_PHASES, RAMSEY_AREA, RAMSEY_OPEN_PHASE,
};
use qsense_core::{Angle, Pulse, WaitSequence};
use qsense_system::System;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

// ============================================================================
// Pulse Assembly
// ============================================================================

/// Opening π/2 pulse, the wait, and a closing π/2 pulse whose phase is the
/// wait's transform applied to `analysis_phase`
/// Gantree: ramsey_pulses(wait, analysis_phase) -> Vec<Pulse> // 램지 펄스열
pub fn ramsey_pulses(wait: &WaitSequence, analysis_phase: Angle) -> Vec<Pulse> {
    let mut pulses = Vec::with_capacity(wait.len() + 2);
    pulses.push(Pulse::rotation(RAMSEY_AREA, RAMSEY_OPEN_PHASE));
    pulses.extend_from_slice(wait.pulses());
    pulses.push(Pulse::rotation(RAMSEY_AREA, wait.final_phase(analysis_phase)));
    pulses
}

// ============================================================================
// Simple Ramsey
// ============================================================================

/// Two-point Ramsey estimate of the accumulated phase.
///
/// Analyses at -π/2 (or +π/2 when `flip_analysis`), so the excited-state
/// probability is `(1 ∓ sin φ) / 2` and `φ = ±asin(1 - 2p)`. Only valid for
/// accumulated phases in [-π/2, π/2].
/// Gantree: measure_simple_ramsey(system, wait, flip) -> Angle // 2점 램지
pub fn measure_simple_ramsey<S: System + ?Sized>(
    system: &S,
    wait: &WaitSequence,
    flip_analysis: bool,
) -> Angle {
    let pulses = ramsey_pulses(wait, simple_analysis_phase(flip_analysis));
    let probability = system.measure(&pulses);
    let x_expected = 1.0 - 2.0 * probability;

    let estimate = if flip_analysis {
        -x_expected.asin()
    } else {
        x_expected.asin()
    };
    log::debug!(
        "simple ramsey on {}: p = {:.9}, phase = {:.9}",
        system.name(),
        probability,
        estimate
    );
    estimate
}

// ============================================================================
// Four-Point Ramsey
// ============================================================================

/// Raw data of a four-point readout
/// Gantree: FourPointReadout // 4점 측정 결과
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourPointReadout {
    /// Probabilities at analysis phases π/2, -π/2, π, 0
    pub probabilities: [f64; 4],

    /// `p(π/2) - p(-π/2)`, proportional to sin φ
    pub x: f64,

    /// `p(π) - p(0)`, proportional to -cos φ
    pub y: f64,
}

impl FourPointReadout {
    /// Build from probabilities ordered as [`FOUR_POINT_PHASES`]
    pub fn from_probabilities(probabilities: [f64; 4]) -> Self {
        Self {
            probabilities,
            x: probabilities[0] - probabilities[1],
            y: probabilities[2] - probabilities[3],
        }
    }

    /// Accumulated phase in (-π, π]
    pub fn phase(&self) -> Angle {
        self.x.atan2(-self.y)
    }

    /// Fringe contrast `sqrt(x² + y²)`; 1 for an ideal system
    pub fn contrast(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl fmt::Display for FourPointReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FourPoint(x={:.6}, y={:.6}, phase={:.6})",
            self.x,
            self.y,
            self.phase()
        )
    }
}

/// Run the four measurements of the four-point protocol
/// Gantree: four_point_readout(system, wait) -> FourPointReadout
pub fn four_point_readout<S: System + ?Sized>(system: &S, wait: &WaitSequence) -> FourPointReadout {
    let mut probabilities = [0.0; 4];
    for (p, &analysis) in probabilities.iter_mut().zip(FOUR_POINT_PHASES.iter()) {
        *p = system.measure(&ramsey_pulses(wait, analysis));
    }
    let readout = FourPointReadout::from_probabilities(probabilities);
    log::debug!("four-point ramsey on {}: {}", system.name(), readout);
    readout
}

/// Four-point Ramsey estimate of the accumulated phase, valid on the full
/// circle. Each quadrature is a difference of a ±π pair, which cancels any
/// constant offset common to both measurements.
/// Gantree: measure_four_point_ramsey(system, wait) -> Angle // 4점 램지
pub fn measure_four_point_ramsey<S: System + ?Sized>(system: &S, wait: &WaitSequence) -> Angle {
    four_point_readout(system, wait).phase()
}

// ============================================================================
// Protocol Selection
// ============================================================================

/// Phase readout protocol
/// Gantree: Protocol // 측정 프로토콜
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Protocol {
    /// Two-point readout
    Simple {
        /// Analyse at +π/2 instead of -π/2
        #[serde(default)]
        flip_analysis: bool,
    },

    /// Four-point readout
    #[default]
    FourPoint,
}

impl Protocol {
    /// Estimate the accumulated phase of `wait` on `system`
    pub fn estimate<S: System + ?Sized>(&self, system: &S, wait: &WaitSequence) -> Angle {
        match *self {
            Protocol::Simple { flip_analysis } => measure_simple_ramsey(system, wait, flip_analysis),
            Protocol::FourPoint => measure_four_point_ramsey(system, wait),
        }
    }

    /// Number of `measure` calls per estimate
    pub fn measurement_count(&self) -> usize {
        match self {
            Protocol::Simple { .. } => 1,
            Protocol::FourPoint => FOUR_POINT_PHASES.len(),
        }
    }

    /// Range of accumulated phases the protocol reconstructs unambiguously
    pub fn valid_range(&self) -> (Angle, Angle) {
        match self {
            Protocol::Simple { .. } => (-FRAC_PI_2, FRAC_PI_2),
            Protocol::FourPoint => (-PI, PI),
        }
    }

    /// Whether `phase` lies in [`Protocol::valid_range`]
    pub fn covers(&self, phase: Angle) -> bool {
        let (lo, hi) = self.valid_range();
        (lo..=hi).contains(&phase)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Simple {
                flip_analysis: false,
            } => write!(f, "simple"),
            Protocol::Simple {
                flip_analysis: true,
            } => write!(f, "simple(flipped)"),
            Protocol::FourPoint => write!(f, "four-point"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
