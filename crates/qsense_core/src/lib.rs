//! # QSense Core
//!
//! Pulse model, wait sequences, and phase bookkeeping for single-qubit
//! sensing experiments.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qsense_core // L0+L1: Foundation + Sequence (완료)
//!     L0_Foundation // 기반 타입/상수/에러 (완료)
//!         CoreTypes // 핵심 타입 (완료)
//!         Constants // 위상/허용오차 상수 (완료)
//!         Errors // 에러 타입 (완료)
//!     L1_Sequence // 시퀀스 구조 (완료)
//!         Pulse // 펄스 enum (완료)
//!         PhaseTransform // 최종 위상 변환 (완료)
//!         WaitSequence // 대기 시퀀스 (완료)
//!         SequenceBuilder // trivial / spin echo / multi echo (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qsense_core::prelude::*;
//!
//! // Spin echo with the perturbation on in the first half
//! let seq = builder::spin_echo(1.0, 0.0, true);
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.echo_count(), 1);
//! println!("{}", seq);
//! ```
//!
//! ## Echo Trains
//!
//! ```rust
//! use qsense_core::prelude::*;
//!
//! let seq = builder::multi_spin_echo(2.0, &builder::xy4_phases(1), true).unwrap();
//! assert_eq!(seq.echo_count(), 4);
//! assert!((seq.perturbation_time() - 2.0).abs() < 1e-12);
//!
//! // An empty echo list is rejected
//! assert!(builder::multi_spin_echo(2.0, &[], true).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Pulses (Gantree: L1_Sequence → Pulse)
pub mod pulse;

/// Final-phase transforms (Gantree: L1_Sequence → PhaseTransform)
pub mod transform;

/// Wait sequences (Gantree: L1_Sequence → WaitSequence)
pub mod sequence;

/// Sequence construction (Gantree: L1_Sequence → SequenceBuilder)
pub mod builder;

// ============================================================================
// Re-exports
// ============================================================================

pub use constants::{phase, tolerance};
pub use error::{QsenseError, QsenseResult};
pub use pulse::Pulse;
pub use sequence::WaitSequence;
pub use transform::PhaseTransform;
pub use types::{angle_distance, mod_two_pi, wrap_to_pi, Angle, Duration, Frequency, Sign};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qsense_core::prelude::*;
    //! ```

    pub use crate::builder;
    pub use crate::constants::{phase, tolerance};
    pub use crate::error::{QsenseError, QsenseResult};
    pub use crate::pulse::Pulse;
    pub use crate::sequence::WaitSequence;
    pub use crate::transform::PhaseTransform;
    pub use crate::types::{Angle, Duration, Frequency, Sign};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================
