//! Ideal unitary simulator
//!
//! Gantree: L2_System → BasicSystem
//!
//! Pure-state evolution of one qubit: waits are diagonal phase gates driven
//! by detuning (always) and the perturbation (when switched on); rotations
//! are equatorial rotations whose area is scaled by the Rabi frequency
//! calibration factor. No decoherence, no readout error.

use crate::system::System;
use crate::unitary::{self, Matrix2, State, GROUND};
use qsense_core::{tolerance, Frequency, Pulse, QsenseError, QsenseResult};
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_rabi_scale() -> f64 {
    1.0
}

/// Ideal single-qubit simulator
/// Gantree: BasicSystem // 이상적 시뮬레이터
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicSystem {
    /// Perturbation frequency during flagged waits (rad/time)
    /// Gantree: perturbation_strength: f64 // 섭동 세기
    perturbation_strength: Frequency,

    /// Constant frequency offset during every wait (rad/time)
    /// Gantree: detuning_strength: f64 // 디튜닝
    detuning_strength: Frequency,

    /// Multiplier on every rotation's gate area
    /// Gantree: rabi_frequency_scale: f64 = 1.0 // 펄스 면적 오차
    #[serde(default = "default_rabi_scale")]
    rabi_frequency_scale: f64,
}

impl BasicSystem {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create system with a perfectly calibrated Rabi frequency
    pub fn new(perturbation_strength: Frequency, detuning_strength: Frequency) -> Self {
        Self {
            perturbation_strength,
            detuning_strength,
            rabi_frequency_scale: default_rabi_scale(),
        }
    }

    /// Create system with all parameters validated
    /// Gantree: try_new(p, d, s) -> Result<Self> // 생성+검증
    pub fn try_new(
        perturbation_strength: Frequency,
        detuning_strength: Frequency,
        rabi_frequency_scale: f64,
    ) -> QsenseResult<Self> {
        let system = Self {
            perturbation_strength,
            detuning_strength,
            rabi_frequency_scale,
        };
        system.validate()?;
        Ok(system)
    }

    /// No perturbation, no detuning, perfect pulses
    pub fn ideal() -> Self {
        Self::new(0.0, 0.0)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set perturbation strength
    pub fn with_perturbation_strength(mut self, strength: Frequency) -> Self {
        self.perturbation_strength = strength;
        self
    }

    /// Set detuning strength
    pub fn with_detuning_strength(mut self, strength: Frequency) -> Self {
        self.detuning_strength = strength;
        self
    }

    /// Set Rabi frequency scale
    pub fn with_rabi_frequency_scale(mut self, scale: f64) -> Self {
        self.rabi_frequency_scale = scale;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Perturbation strength (rad/time)
    pub fn perturbation_strength(&self) -> Frequency {
        self.perturbation_strength
    }

    /// Detuning strength (rad/time)
    pub fn detuning_strength(&self) -> Frequency {
        self.detuning_strength
    }

    /// Rabi frequency scale
    pub fn rabi_frequency_scale(&self) -> f64 {
        self.rabi_frequency_scale
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// All parameters must be finite
    pub fn validate(&self) -> QsenseResult<()> {
        QsenseError::check_finite("perturbation_strength", self.perturbation_strength)?;
        QsenseError::check_finite("detuning_strength", self.detuning_strength)?;
        QsenseError::check_finite("rabi_frequency_scale", self.rabi_frequency_scale)?;
        Ok(())
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Frequency acting during a wait
    fn wait_frequency(&self, perturbation_on: bool) -> Frequency {
        if perturbation_on {
            self.detuning_strength + self.perturbation_strength
        } else {
            self.detuning_strength
        }
    }

    /// Unitary of a single pulse
    /// Gantree: unitary(pulse) -> Matrix2 // 펄스 유니터리
    pub fn unitary(&self, pulse: &Pulse) -> Matrix2 {
        match *pulse {
            Pulse::Delay {
                duration,
                perturbation_on,
            } => unitary::phase_gate(self.wait_frequency(perturbation_on) * duration),
            Pulse::Rotation { theta, phi } => {
                unitary::equatorial_rotation(theta * self.rabi_frequency_scale, phi)
            }
        }
    }

    /// Final state after applying `pulses` to the ground state
    /// Gantree: state(pulses) -> State // 최종 상태
    pub fn state(&self, pulses: &[Pulse]) -> State {
        pulses.iter().fold(GROUND, |state, pulse| {
            let u = self.unitary(pulse);
            let drift = unitary::unitarity_error(&u);
            if drift > tolerance::UNITARITY {
                log::warn!("{}: unitary of {} off by {:.3e}", self.name(), pulse, drift);
            }
            let next = unitary::apply(&u, state);
            log::trace!("{} -> [{:.6}, {:.6}]", pulse, next[0], next[1]);
            next
        })
    }
}

impl Default for BasicSystem {
    fn default() -> Self {
        Self::ideal()
    }
}

impl System for BasicSystem {
    fn name(&self) -> &str {
        "basic"
    }

    fn measure(&self, pulses: &[Pulse]) -> f64 {
        let [ground, excited] = self.state(pulses);
        let p_ground = ground.norm_sqr();
        let p_excited = excited.norm_sqr();

        // renormalize against accumulated rounding; no clipping
        let probability = p_excited / (p_ground + p_excited);
        log::debug!(
            "{}: measured p1 = {:.12} over {} pulses",
            self.name(),
            probability,
            pulses.len()
        );
        probability
    }
}

impl fmt::Display for BasicSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BasicSystem(perturbation={:.6}, detuning={:.6}, rabi_scale={:.4})",
            self.perturbation_strength, self.detuning_strength, self.rabi_frequency_scale
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
