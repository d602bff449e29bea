//! Parameter sweeps
//!
//! Gantree: L3_Protocol → Sweep
//!
//! Sequential scans of one construction parameter, each point compared with
//! the phase an ideal readout would report.

use crate::ramsey::Protocol;
use qsense_core::{
    angle_distance, tolerance, wrap_to_pi, Angle, Pulse, QsenseResult, WaitSequence,
};
use qsense_system::{BasicSystem, System};
use serde::{Deserialize, Serialize};

/// Phase an ideal readout of `wait` reports on `system`, wrapped to (-π, π].
///
/// Every π pulse reverses the phase collected before it, so each wait
/// contributes `±f·t` depending on how many echoes follow it; the transform
/// sign then orients the total. Exact only for `rabi_frequency_scale = 1`.
/// Gantree: ideal_phase(system, wait) -> Angle // 이상 위상
pub fn ideal_phase(system: &BasicSystem, wait: &WaitSequence) -> Angle {
    let mut flipped = false;
    let mut total = 0.0;
    for pulse in wait.pulses().iter().rev() {
        match *pulse {
            Pulse::Delay {
                duration,
                perturbation_on,
            } => {
                let mut f = system.detuning_strength();
                if perturbation_on {
                    f += system.perturbation_strength();
                }
                total += if flipped { -f * duration } else { f * duration };
            }
            Pulse::Rotation { .. } => flipped = !flipped,
        }
    }
    wrap_to_pi(wait.transform().sign().value() * total)
}

/// `n` evenly spaced values from `start` to `stop` inclusive
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// One point of a sweep
/// Gantree: SweepPoint // 스윕 지점
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Swept parameter value
    pub parameter: f64,

    /// Reconstructed phase
    pub estimate: Angle,

    /// Ideal phase of the same sequence
    pub expected: Angle,
}

impl SweepPoint {
    /// Circular distance between estimate and expectation
    pub fn error(&self) -> Angle {
        angle_distance(self.estimate, self.expected)
    }

    /// Whether the estimate matches the expectation to within
    /// [`tolerance::PHASE`]
    pub fn is_accurate(&self) -> bool {
        self.error() < tolerance::PHASE
    }
}

/// Run `protocol` on the sequence `make(parameter)` for every parameter
/// Gantree: sweep(system, params, protocol, make) -> Result<Vec<SweepPoint>> // 스윕
pub fn sweep<F>(
    system: &BasicSystem,
    parameters: &[f64],
    protocol: Protocol,
    make: F,
) -> QsenseResult<Vec<SweepPoint>>
where
    F: Fn(f64) -> QsenseResult<WaitSequence>,
{
    let mut points = Vec::with_capacity(parameters.len());
    for &parameter in parameters {
        let wait = make(parameter)?;
        points.push(SweepPoint {
            parameter,
            estimate: protocol.estimate(system, &wait),
            expected: ideal_phase(system, &wait),
        });
    }
    log::debug!(
        "swept {} points with {} on {}",
        points.len(),
        protocol,
        system.name()
    );
    Ok(points)
}

/// Largest circular error over a sweep (0 for an empty sweep)
pub fn max_error(points: &[SweepPoint]) -> Angle {
    points.iter().map(SweepPoint::error).fold(0.0, f64::max)
}

// ============================================================================
// Tests
// ============================================================================
