//! Pulse definitions for QSense
//!
//! Gantree: L1_Sequence → Pulse
//!
//! The atomic operations a sequence is made of. The enum is closed, so every
//! simulator matching on it stays exhaustive when a variant is added.

use crate::constants::phase;
use crate::types::{Angle, Duration};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Atomic control operation
/// Gantree: Pulse // 펄스 enum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Pulse {
    /// Free evolution. Detuning always accumulates phase; the perturbation
    /// only when `perturbation_on`.
    /// Gantree: Delay{duration, perturbation_on} // 대기
    Delay {
        /// Elapsed time (>= 0)
        duration: Duration,
        /// Whether the perturbation acts during this wait
        perturbation_on: bool,
    },

    /// Instantaneous rotation by `theta` about the equatorial axis at
    /// azimuth `phi`
    /// Gantree: Rotation{theta, phi} // 회전
    Rotation {
        /// Gate area in radians
        theta: Angle,
        /// Axis azimuth in the xy plane
        phi: Angle,
    },
}

impl Pulse {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Wait of `duration`
    pub fn delay(duration: Duration, perturbation_on: bool) -> Self {
        Pulse::Delay {
            duration,
            perturbation_on,
        }
    }

    /// Wait with the perturbation on
    pub fn perturbed(duration: Duration) -> Self {
        Self::delay(duration, true)
    }

    /// Wait with the perturbation off (detuning only)
    pub fn idle(duration: Duration) -> Self {
        Self::delay(duration, false)
    }

    /// Rotation by `theta` about axis `phi`
    pub fn rotation(theta: Angle, phi: Angle) -> Self {
        Pulse::Rotation { theta, phi }
    }

    /// π rotation (echo pulse) about axis `phi`
    pub fn pi(phi: Angle) -> Self {
        Self::rotation(phase::ECHO_AREA, phi)
    }

    /// π/2 rotation about axis `phi`
    pub fn pi_half(phi: Angle) -> Self {
        Self::rotation(phase::RAMSEY_AREA, phi)
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Elapsed time of the pulse (rotations are instantaneous)
    pub fn duration(&self) -> Duration {
        match self {
            Pulse::Delay { duration, .. } => *duration,
            Pulse::Rotation { .. } => 0.0,
        }
    }

    /// Time during which the perturbation acts
    pub fn perturbation_time(&self) -> Duration {
        match self {
            Pulse::Delay {
                duration,
                perturbation_on: true,
            } => *duration,
            _ => 0.0,
        }
    }

    /// Whether this is a wait with the perturbation on
    pub fn is_perturbed(&self) -> bool {
        matches!(
            self,
            Pulse::Delay {
                perturbation_on: true,
                ..
            }
        )
    }

    /// Whether this is a rotation
    pub fn is_rotation(&self) -> bool {
        matches!(self, Pulse::Rotation { .. })
    }

    /// Whether this is a wait
    pub fn is_delay(&self) -> bool {
        matches!(self, Pulse::Delay { .. })
    }
}

impl fmt::Display for Pulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pulse::Delay {
                duration,
                perturbation_on,
            } => {
                let tag = if *perturbation_on { "on" } else { "off" };
                write!(f, "delay({:.6}, {})", duration, tag)
            }
            Pulse::Rotation { theta, phi } => write!(f, "rot({:.6}, {:.6})", theta, phi),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
