//! # QSense System
//!
//! Measurement capability and the ideal single-qubit simulator.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qsense_system // L2: System (완료)
//!     SystemTrait // 측정 인터페이스 (완료)
//!     Unitary // 2x2 유니터리, 파울리 상수 (완료)
//!     BasicSystem // 이상적 시뮬레이터 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qsense_system::prelude::*;
//! use qsense_core::Pulse;
//!
//! // Detuned qubit, perfect pulses
//! let system = BasicSystem::new(0.0, 0.25);
//!
//! // Ramsey fringe: π/2 - wait - π/2
//! let p1 = system.measure(&[Pulse::pi_half(0.0), Pulse::idle(2.0), Pulse::pi_half(0.0)]);
//! assert!((0.0..=1.0).contains(&p1));
//! ```
//!
//! ## Pulse-Area Errors
//!
//! ```rust
//! use qsense_system::prelude::*;
//! use qsense_core::Pulse;
//!
//! let system = BasicSystem::ideal().with_rabi_frequency_scale(0.95);
//! let p1 = system.measure(&[Pulse::pi(0.0)]);
//! assert!(p1 < 1.0);
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Measurement trait (Gantree: L2_System → SystemTrait)
pub mod system;

/// Unitary algebra (Gantree: L2_System → Unitary)
pub mod unitary;

/// Ideal simulator (Gantree: L2_System → BasicSystem)
pub mod basic;

// ============================================================================
// Re-exports
// ============================================================================

pub use basic::BasicSystem;
pub use system::System;
pub use unitary::{Matrix2, State};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qsense_system::prelude::*;
    //! ```

    pub use crate::basic::BasicSystem;
    pub use crate::system::System;
}

// ============================================================================
// Integration Tests
// ============================================================================
