//! Wait sequence construction
//!
//! Gantree: L1_Sequence → SequenceBuilder
//!
//! Three strategies for exposing the qubit to the perturbation:
//!
//! - [`trivial`]: one perturbed wait.
//! - [`spin_echo`]: two waits around a π pulse, perturbation on in one half.
//! - [`multi_spin_echo`]: an echo train with the perturbation toggled after
//!   every π pulse.
//!
//! Each returns a [`WaitSequence`] whose [`PhaseTransform`] is derived from
//! the same parameters as its pulses.

use crate::constants::phase::{ECHO_AREA, NULL_PHASE_INIT};
use crate::error::{QsenseError, QsenseResult};
use crate::pulse::Pulse;
use crate::sequence::WaitSequence;
use crate::transform::PhaseTransform;
use crate::types::{mod_two_pi, Angle, Duration};
use std::f64::consts::FRAC_PI_2;

// ============================================================================
// Trivial
// ============================================================================

/// Single perturbed wait of `duration`
/// Gantree: trivial(duration) -> WaitSequence // 단순 대기
pub fn trivial(duration: Duration) -> WaitSequence {
    let seq = WaitSequence::from_parts(
        vec![Pulse::perturbed(duration)],
        PhaseTransform::identity(),
    );
    log::debug!("built trivial wait: {}", seq);
    seq
}

/// [`trivial`] with the duration validated
pub fn try_trivial(duration: Duration) -> QsenseResult<WaitSequence> {
    QsenseError::check_duration(duration)?;
    Ok(trivial(duration))
}

// ============================================================================
// Spin Echo
// ============================================================================

/// Two waits of `duration` around a π pulse at `echo_phase`.
///
/// The perturbation is on in the first half when `on_in_first`, otherwise in
/// the second. The π pulse maps an accumulated phase `a` to
/// `2·echo_phase + π - a`, which gives the transform
/// `phi ↦ 2·echo_phase + π + (-1)^on_in_first · phi`.
/// Gantree: spin_echo(duration, echo_phase, on_in_first) -> WaitSequence // 스핀 에코
pub fn spin_echo(duration: Duration, echo_phase: Angle, on_in_first: bool) -> WaitSequence {
    let pulses = vec![
        Pulse::delay(duration, on_in_first),
        Pulse::rotation(ECHO_AREA, echo_phase),
        Pulse::delay(duration, !on_in_first),
    ];
    let transform = PhaseTransform::with_parity(2.0 * echo_phase + ECHO_AREA, on_in_first);

    let seq = WaitSequence::from_parts(pulses, transform);
    log::debug!("built spin echo: {}", seq);
    seq
}

/// [`spin_echo`] with parameters validated
pub fn try_spin_echo(
    duration: Duration,
    echo_phase: Angle,
    on_in_first: bool,
) -> QsenseResult<WaitSequence> {
    QsenseError::check_duration(duration)?;
    QsenseError::check_finite("echo_phase", echo_phase)?;
    Ok(spin_echo(duration, echo_phase, on_in_first))
}

// ============================================================================
// Multi Spin Echo
// ============================================================================

/// Closing phase at which an ideal echo train with the given π-pulse phases
/// and no perturbation sits at the Ramsey midpoint, reduced to [0, 2π).
///
/// Folds `null ← (2·phase - null) mod 2π` over the phases starting from -π/2.
/// An empty list returns the starting value unchanged.
/// Gantree: null_phase(echo_phases) -> Angle // 영점 위상
pub fn null_phase(echo_phases: &[Angle]) -> Angle {
    echo_phases
        .iter()
        .fold(NULL_PHASE_INIT, |prev, &phase| mod_two_pi(2.0 * phase - prev))
}

/// Phase transform of an echo train:
/// `phi ↦ null_phase + π/2 + (-1)^(on_in_first XOR even(len)) · phi`.
///
/// With no phases and the perturbation on this is the identity, with one
/// phase it equals the [`spin_echo`] transform modulo 2π.
// NOTE: the even-length sign has only been checked against the 0/1-echo
// reductions and the simulator; keep it as is.
pub fn multi_echo_transform(echo_phases: &[Angle], on_in_first: bool) -> PhaseTransform {
    let even = echo_phases.len() % 2 == 0;
    PhaseTransform::with_parity(null_phase(echo_phases) + FRAC_PI_2, on_in_first ^ even)
}

/// Echo train with the perturbation toggled after every π pulse.
///
/// `total_perturbation_duration` is split over the `(n + 1) / 2` intervals
/// (integer division) during which the perturbation is on. For an even
/// number of echoes the train has an odd number of waits, so the first and
/// last are half length; for an odd number all waits have full length.
/// Gantree: multi_spin_echo(total, phases, on_in_first) -> Result<WaitSequence> // 다중 에코
pub fn multi_spin_echo(
    total_perturbation_duration: Duration,
    echo_phases: &[Angle],
    on_in_first: bool,
) -> QsenseResult<WaitSequence> {
    if echo_phases.is_empty() {
        return Err(QsenseError::EmptyEchoPhases);
    }
    QsenseError::check_duration(total_perturbation_duration)?;

    let n = echo_phases.len();
    let full = total_perturbation_duration / ((n + 1) / 2) as f64;

    let mut pulses = Vec::with_capacity(2 * n + 1);
    let mut on = on_in_first;

    if n % 2 == 0 {
        let half = full / 2.0;
        for (i, &phase) in echo_phases.iter().enumerate() {
            let duration = if i == 0 { half } else { full };
            pulses.push(Pulse::delay(duration, on));
            pulses.push(Pulse::rotation(ECHO_AREA, phase));
            on = !on;
        }
        pulses.push(Pulse::delay(half, on));
    } else {
        for &phase in echo_phases {
            pulses.push(Pulse::delay(full, on));
            pulses.push(Pulse::rotation(ECHO_AREA, phase));
            on = !on;
        }
        pulses.push(Pulse::delay(full, on));
    }

    let seq = WaitSequence::from_parts(pulses, multi_echo_transform(echo_phases, on_in_first));
    log::debug!("built {}-echo train: {}", n, seq);
    Ok(seq)
}

// ============================================================================
// Echo Phase Patterns
// ============================================================================

/// XY4 pattern `[0, π/2, 0, π/2]` repeated `repeats` times
pub fn xy4_phases(repeats: usize) -> Vec<Angle> {
    [0.0, FRAC_PI_2, 0.0, FRAC_PI_2].repeat(repeats)
}

/// CPMG pattern: `n` echoes about the y axis
pub fn cpmg_phases(n: usize) -> Vec<Angle> {
    vec![FRAC_PI_2; n]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{angle_distance, Sign};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_trivial() {
        let seq = trivial(2.5);
        assert_eq!(seq.pulses(), &[Pulse::perturbed(2.5)]);
        assert!(seq.transform().is_identity());
        assert!(try_trivial(-1.0).is_err());
    }

    #[test]
    fn test_spin_echo_layout() {
        let seq = spin_echo(1.0, 0.3, true);
        assert_eq!(
            seq.pulses(),
            &[Pulse::perturbed(1.0), Pulse::pi(0.3), Pulse::idle(1.0)]
        );
        assert_eq!(seq.perturbation_time(), 1.0);

        let seq = spin_echo(1.0, 0.3, false);
        assert!(!seq.pulses()[0].is_perturbed());
        assert!(seq.pulses()[2].is_perturbed());
    }

    #[test]
    fn test_spin_echo_transform() {
        let t = spin_echo(1.0, 0.3, true).transform();
        assert_abs_diff_eq!(t.apply(0.2), 0.6 + PI - 0.2, epsilon = 1e-12);

        let t = spin_echo(1.0, 0.3, false).transform();
        assert_abs_diff_eq!(t.apply(0.2), 0.6 + PI + 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_try_spin_echo_validation() {
        assert!(try_spin_echo(1.0, 0.0, true).is_ok());
        assert!(try_spin_echo(f64::NAN, 0.0, true).is_err());
        assert!(try_spin_echo(1.0, f64::INFINITY, true).is_err());
    }

    #[test]
    fn test_multi_echo_empty_fails() {
        let err = multi_spin_echo(1.0, &[], true).unwrap_err();
        assert_eq!(err, QsenseError::EmptyEchoPhases);
    }

    #[test]
    fn test_multi_echo_negative_duration_fails() {
        let err = multi_spin_echo(-1.0, &[0.0], true).unwrap_err();
        assert!(matches!(err, QsenseError::InvalidDuration(_)));
    }

    #[test]
    fn test_multi_echo_single_matches_spin_echo_pulses() {
        for &on in &[true, false] {
            let multi = multi_spin_echo(1.7, &[0.4], on).unwrap();
            let single = spin_echo(1.7, 0.4, on);
            assert_eq!(multi.pulses(), single.pulses());
            assert_eq!(multi.transform().sign(), single.transform().sign());
            assert!(
                angle_distance(multi.transform().offset(), single.transform().offset()) < 1e-12
            );
        }
    }

    #[test]
    fn test_multi_echo_zero_phases_transform_is_identity() {
        // no echoes, perturbation on: same as the trivial wait
        let t = multi_echo_transform(&[], true);
        assert_eq!(t.sign(), Sign::Plus);
        assert_abs_diff_eq!(t.apply(0.9), 0.9, epsilon = 1e-12);

        let t = multi_echo_transform(&[], false);
        assert_eq!(t.sign(), Sign::Minus);
    }

    #[test]
    fn test_multi_echo_even_layout() {
        let seq = multi_spin_echo(2.0, &[0.0, FRAC_PI_2], true).unwrap();
        // (2 + 1) / 2 = 1 full interval of 2.0
        assert_eq!(
            seq.pulses(),
            &[
                Pulse::perturbed(1.0),
                Pulse::pi(0.0),
                Pulse::idle(2.0),
                Pulse::pi(FRAC_PI_2),
                Pulse::perturbed(1.0),
            ]
        );
        assert_abs_diff_eq!(seq.perturbation_time(), 2.0, epsilon = 1e-12);
        assert_eq!(seq.echo_count(), 2);
    }

    #[test]
    fn test_multi_echo_odd_layout() {
        let seq = multi_spin_echo(3.0, &[0.0, 0.0, 0.0], false).unwrap();
        // (3 + 1) / 2 = 2 intervals of 1.5
        let delays: Vec<_> = seq.pulses().iter().filter(|p| p.is_delay()).collect();
        assert_eq!(delays.len(), 4);
        for d in &delays {
            assert_eq!(d.duration(), 1.5);
        }
        assert!(!delays[0].is_perturbed());
        assert!(delays[3].is_perturbed());
        assert_abs_diff_eq!(seq.perturbation_time(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_multi_echo_perturbation_time_preserved() {
        for n in 1..=8 {
            for &on in &[true, false] {
                let seq = multi_spin_echo(4.0, &cpmg_phases(n), on).unwrap();
                assert_abs_diff_eq!(seq.perturbation_time(), 4.0, epsilon = 1e-12);
                assert_eq!(seq.len(), 2 * n + 1);
            }
        }
    }

    #[test]
    fn test_null_phase_fold() {
        assert_abs_diff_eq!(null_phase(&[]), -FRAC_PI_2, epsilon = 1e-15);
        // 2·0 - (-π/2) = π/2
        assert_abs_diff_eq!(null_phase(&[0.0]), FRAC_PI_2, epsilon = 1e-12);
        // 2·(π/2) - π/2 = π/2
        assert_abs_diff_eq!(null_phase(&[0.0, FRAC_PI_2]), FRAC_PI_2, epsilon = 1e-12);
        // 2·0 - π/2 wraps to 3π/2
        assert_abs_diff_eq!(null_phase(&[0.0, 0.0]), 3.0 * FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_multi_echo_transform_parity() {
        assert_eq!(multi_echo_transform(&[0.0], true).sign(), Sign::Minus);
        assert_eq!(multi_echo_transform(&[0.0, 0.0], true).sign(), Sign::Plus);
        assert_eq!(multi_echo_transform(&[0.0, 0.0], false).sign(), Sign::Minus);
        assert_eq!(multi_echo_transform(&[0.0; 3], false).sign(), Sign::Plus);
    }

    #[test]
    fn test_phase_patterns() {
        assert_eq!(xy4_phases(2).len(), 8);
        assert_eq!(xy4_phases(1)[1], FRAC_PI_2);
        assert!(xy4_phases(0).is_empty());
        assert_eq!(cpmg_phases(3), vec![FRAC_PI_2; 3]);
    }
}
