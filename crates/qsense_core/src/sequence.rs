//! Wait sequences
//!
//! Gantree: L1_Sequence → WaitSequence
//!
//! A pulse list paired with the final-phase transform derived from the same
//! construction parameters. Fields are private; values are produced by the
//! functions in [`crate::builder`] so the pairing cannot drift apart.

use crate::pulse::Pulse;
use crate::transform::PhaseTransform;
use crate::types::{Angle, Duration};
use serde::Serialize;
use std::fmt;

/// Perturbation-exposed wait with its phase bookkeeping
/// Gantree: WaitSequence // 대기 시퀀스
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaitSequence {
    /// Ordered pulses
    /// Gantree: pulses: Vec<Pulse> // 펄스 목록
    pulses: Vec<Pulse>,

    /// Desired-to-actual closing phase map
    /// Gantree: transform: PhaseTransform // 최종 위상 변환
    transform: PhaseTransform,
}

impl WaitSequence {
    pub(crate) fn from_parts(pulses: Vec<Pulse>, transform: PhaseTransform) -> Self {
        Self { pulses, transform }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Pulses in temporal order
    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    /// Consume and return the pulse list
    pub fn into_pulses(self) -> Vec<Pulse> {
        self.pulses
    }

    /// Final-phase transform
    pub fn transform(&self) -> PhaseTransform {
        self.transform
    }

    /// Closing-pulse phase giving the contrast a bare Ramsey experiment would
    /// have at analysis phase `desired`
    /// Gantree: final_phase(desired) -> Angle // 최종 위상
    pub fn final_phase(&self, desired: Angle) -> Angle {
        self.transform.apply(desired)
    }

    // ========================================================================
    // Analysis
    // ========================================================================

    /// Number of pulses
    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    /// Whether the sequence has no pulses
    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    /// Total elapsed time
    pub fn total_duration(&self) -> Duration {
        self.pulses.iter().map(Pulse::duration).sum()
    }

    /// Time during which the perturbation acts
    pub fn perturbation_time(&self) -> Duration {
        self.pulses.iter().map(Pulse::perturbation_time).sum()
    }

    /// Number of rotation (echo) pulses
    pub fn echo_count(&self) -> usize {
        self.pulses.iter().filter(|p| p.is_rotation()).count()
    }
}

impl fmt::Display for WaitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WaitSequence(pulses={}, echoes={}, t={:.6}, t_on={:.6}, {})",
            self.len(),
            self.echo_count(),
            self.total_duration(),
            self.perturbation_time(),
            self.transform
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WaitSequence {
        WaitSequence::from_parts(
            vec![Pulse::perturbed(1.0), Pulse::pi(0.0), Pulse::idle(1.0)],
            PhaseTransform::identity(),
        )
    }

    #[test]
    fn test_analysis() {
        let seq = sample();
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
        assert_eq!(seq.total_duration(), 2.0);
        assert_eq!(seq.perturbation_time(), 1.0);
        assert_eq!(seq.echo_count(), 1);
    }

    #[test]
    fn test_final_phase_uses_transform() {
        let seq = sample();
        assert_eq!(seq.final_phase(0.7), 0.7);
    }

    #[test]
    fn test_into_pulses() {
        let pulses = sample().into_pulses();
        assert_eq!(pulses.len(), 3);
        assert!(pulses[1].is_rotation());
    }

    #[test]
    fn test_display() {
        let s = sample().to_string();
        assert!(s.contains("pulses=3"));
        assert!(s.contains("echoes=1"));
    }
}
