//! Measurement capability
//!
//! Gantree: L2_System → SystemTrait
//!
//! The single seam between sequence construction and physics. Noise models
//! (decoherence, readout bias) plug in as new implementors.

use qsense_core::Pulse;

/// Anything that turns a pulse list into a measured probability
/// Gantree: SystemTrait // 시스템 인터페이스
pub trait System: Send + Sync {
    /// Short identifier used in logs and reports
    fn name(&self) -> &str;

    /// Probability of reading the excited state after applying `pulses`
    /// to the ground state. Deterministic for a given configuration.
    /// Gantree: measure(pulses) -> f64
    fn measure(&self, pulses: &[Pulse]) -> f64;

    /// Measure several pulse lists in order
    fn measure_batch(&self, sequences: &[Vec<Pulse>]) -> Vec<f64> {
        sequences.iter().map(|p| self.measure(p)).collect()
    }
}

impl<S: System + ?Sized> System for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn measure(&self, pulses: &[Pulse]) -> f64 {
        (**self).measure(pulses)
    }
}

impl<S: System + ?Sized> System for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn measure(&self, pulses: &[Pulse]) -> f64 {
        (**self).measure(pulses)
    }
}

// ============================================================================
// Tests
// ============================================================================
