//! Experiment configuration
//!
//! Gantree: L3_Protocol → ExperimentConfig
//!
//! A serializable description of one sensing experiment: the simulated
//! system, the wait sequence to build, and the readout protocol. Intended as
//! the interchange format for interactive drivers.

use crate::ramsey::Protocol;
use crate::sweep::ideal_phase;
use qsense_core::{builder, Angle, Duration, QsenseError, QsenseResult, WaitSequence};
use qsense_system::BasicSystem;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Sequence Selection
// ============================================================================

/// Which wait sequence to build, with its parameters
/// Gantree: SequenceSpec // 시퀀스 명세
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SequenceSpec {
    /// [`builder::trivial`]
    Trivial {
        /// Wait duration
        duration: Duration,
    },

    /// [`builder::spin_echo`]
    SpinEcho {
        /// Duration of each half
        duration: Duration,
        /// Axis phase of the π pulse
        echo_phase: Angle,
        /// Perturbation on in the first half
        on_in_first: bool,
    },

    /// [`builder::multi_spin_echo`]
    MultiSpinEcho {
        /// Total time with the perturbation on
        total_duration: Duration,
        /// Axis phase of every π pulse, in order
        echo_phases: Vec<Angle>,
        /// Perturbation on in the first wait
        on_in_first: bool,
    },
}

impl SequenceSpec {
    /// Build the wait sequence, validating parameters
    /// Gantree: build() -> Result<WaitSequence> // 시퀀스 생성
    pub fn build(&self) -> QsenseResult<WaitSequence> {
        match self {
            SequenceSpec::Trivial { duration } => builder::try_trivial(*duration),
            SequenceSpec::SpinEcho {
                duration,
                echo_phase,
                on_in_first,
            } => builder::try_spin_echo(*duration, *echo_phase, *on_in_first),
            SequenceSpec::MultiSpinEcho {
                total_duration,
                echo_phases,
                on_in_first,
            } => {
                for &phase in echo_phases {
                    QsenseError::check_finite("echo_phase", phase)?;
                }
                builder::multi_spin_echo(*total_duration, echo_phases, *on_in_first)
            }
        }
    }

    /// Short name of the sequence kind
    pub fn kind(&self) -> &'static str {
        match self {
            SequenceSpec::Trivial { .. } => "trivial",
            SequenceSpec::SpinEcho { .. } => "spin_echo",
            SequenceSpec::MultiSpinEcho { .. } => "multi_spin_echo",
        }
    }
}

impl Default for SequenceSpec {
    fn default() -> Self {
        SequenceSpec::Trivial { duration: 1.0 }
    }
}

// ============================================================================
// Experiment Configuration
// ============================================================================

/// Full description of one sensing experiment
/// Gantree: ExperimentConfig // 실험 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExperimentConfig {
    /// Simulated system
    pub system: BasicSystem,

    /// Wait sequence to build
    pub sequence: SequenceSpec,

    /// Readout protocol
    #[serde(default)]
    pub protocol: Protocol,

    /// Free-form label for reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Result of [`ExperimentConfig::run`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentOutcome {
    /// Reconstructed phase
    pub estimate: Angle,

    /// Phase an ideal readout of the same sequence would report, wrapped
    /// to (-π, π]
    pub ideal: Angle,

    /// Number of `measure` calls used
    pub measurements: usize,
}

impl ExperimentOutcome {
    /// Circular distance between estimate and ideal phase
    pub fn error(&self) -> Angle {
        qsense_core::angle_distance(self.estimate, self.ideal)
    }
}

impl ExperimentConfig {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create configuration with the default (four-point) protocol
    pub fn new(system: BasicSystem, sequence: SequenceSpec) -> Self {
        Self {
            system,
            sequence,
            protocol: Protocol::default(),
            label: None,
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set readout protocol
    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Set system
    pub fn with_system(mut self, system: BasicSystem) -> Self {
        self.system = system;
        self
    }

    /// Set sequence
    pub fn with_sequence(mut self, sequence: SequenceSpec) -> Self {
        self.sequence = sequence;
        self
    }

    /// Set label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate system parameters and the sequence parameters
    /// Gantree: validate(&self) -> Result // 검증
    pub fn validate(&self) -> QsenseResult<()> {
        self.system.validate()?;
        self.sequence.build()?;
        Ok(())
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Build the sequence and run the protocol
    /// Gantree: run() -> Result<ExperimentOutcome> // 실행
    pub fn run(&self) -> QsenseResult<ExperimentOutcome> {
        self.system.validate()?;
        let wait = self.sequence.build()?;

        let outcome = ExperimentOutcome {
            estimate: self.protocol.estimate(&self.system, &wait),
            ideal: ideal_phase(&self.system, &wait),
            measurements: self.protocol.measurement_count(),
        };
        log::info!(
            "{} [{}]: estimate {:.9}, ideal {:.9}",
            self.label.as_deref().unwrap_or(self.sequence.kind()),
            self.protocol,
            outcome.estimate,
            outcome.ideal
        );
        Ok(outcome)
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> QsenseResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate from JSON
    pub fn from_json(json: &str) -> QsenseResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config
            .validate()
            .map_err(|e| QsenseError::InvalidConfig(e.to_string()))?;
        Ok(config)
    }
}

impl fmt::Display for ExperimentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExperimentConfig({}, {}, {})",
            self.sequence.kind(),
            self.protocol,
            self.system
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_default_runs() {
        let config = ExperimentConfig::default();
        assert!(config.validate().is_ok());
        let outcome = config.run().unwrap();
        assert_abs_diff_eq!(outcome.estimate, 0.0, epsilon = 1e-12);
        assert_eq!(outcome.measurements, 4);
    }

    #[test]
    fn test_builder() {
        let config = ExperimentConfig::default()
            .with_system(BasicSystem::new(0.2, 0.0))
            .with_sequence(SequenceSpec::SpinEcho {
                duration: 2.0,
                echo_phase: 0.0,
                on_in_first: true,
            })
            .with_protocol(Protocol::Simple {
                flip_analysis: true,
            })
            .with_label("echo");

        assert_eq!(config.label.as_deref(), Some("echo"));
        let outcome = config.run().unwrap();
        assert_abs_diff_eq!(outcome.estimate, 0.4, epsilon = 1e-9);
        assert!(outcome.error() < 1e-9);
    }

    #[test]
    fn test_empty_echo_list_rejected() {
        let config = ExperimentConfig::default().with_sequence(SequenceSpec::MultiSpinEcho {
            total_duration: 1.0,
            echo_phases: vec![],
            on_in_first: true,
        });
        assert_eq!(config.validate(), Err(QsenseError::EmptyEchoPhases));
        assert!(config.run().is_err());
    }

    #[test]
    fn test_invalid_system_rejected() {
        let config =
            ExperimentConfig::default().with_system(BasicSystem::new(f64::NAN, 0.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip_preserves_estimate() {
        let config = ExperimentConfig::new(
            BasicSystem::new(0.3, 1.1).with_rabi_frequency_scale(0.98),
            SequenceSpec::MultiSpinEcho {
                total_duration: 2.0,
                echo_phases: vec![0.0, FRAC_PI_2, 0.0, FRAC_PI_2],
                on_in_first: false,
            },
        );
        let json = config.to_json().unwrap();
        assert!(json.contains("multi_spin_echo"));
        assert!(json.contains("four_point"));

        let parsed = ExperimentConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.run().unwrap(), config.run().unwrap());
    }

    #[test]
    fn test_from_json_minimal() {
        let json = r#"{
            "system": {"perturbation_strength": 0.5, "detuning_strength": 0.0},
            "sequence": {"kind": "trivial", "duration": 1.0}
        }"#;
        let config = ExperimentConfig::from_json(json).unwrap();
        assert_eq!(config.protocol, Protocol::FourPoint);
        assert_abs_diff_eq!(config.run().unwrap().estimate, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let json = r#"{
            "system": {"perturbation_strength": 0.5, "detuning_strength": 0.0},
            "sequence": {"kind": "trivial", "duration": -1.0}
        }"#;
        assert!(matches!(
            ExperimentConfig::from_json(json),
            Err(QsenseError::InvalidConfig(_))
        ));
        assert!(matches!(
            ExperimentConfig::from_json("{"),
            Err(QsenseError::JsonError(_))
        ));
    }

    #[test]
    fn test_display() {
        let s = ExperimentConfig::default().to_string();
        assert!(s.contains("trivial"));
        assert!(s.contains("four-point"));
    }
}
