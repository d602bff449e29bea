//! Final-phase transforms
//!
//! Gantree: L1_Sequence → PhaseTransform
//!
//! Every wait sequence carries a map from the analysis phase a plain Ramsey
//! experiment would use to the closing-pulse phase that gives the same
//! contrast once the echo pulses inside the sequence are accounted for.
//! All such maps have the affine form `phi ↦ offset + sign · phi`.

use crate::types::{Angle, Sign};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Affine phase map `phi ↦ offset + sign · phi`
/// Gantree: PhaseTransform // 최종 위상 변환
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransform {
    /// Constant phase added after the sign
    offset: Angle,

    /// Orientation of the accumulated-phase axis
    sign: Sign,
}

impl PhaseTransform {
    /// Create transform with explicit offset and sign
    pub fn new(offset: Angle, sign: Sign) -> Self {
        Self { offset, sign }
    }

    /// Identity map
    /// Gantree: identity() -> Self // 항등
    pub fn identity() -> Self {
        Self::new(0.0, Sign::Plus)
    }

    /// `offset + (-1)^odd · phi`
    pub fn with_parity(offset: Angle, odd: bool) -> Self {
        Self::new(offset, Sign::parity(odd))
    }

    /// Apply the map
    /// Gantree: apply(phi) -> Angle // 변환 적용
    #[inline]
    pub fn apply(&self, phi: Angle) -> Angle {
        self.offset + self.sign.value() * phi
    }

    /// Constant offset
    pub fn offset(&self) -> Angle {
        self.offset
    }

    /// Sign in front of the input phase
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Whether the map is the identity
    pub fn is_identity(&self) -> bool {
        self.offset == 0.0 && !self.sign.is_negative()
    }
}

impl Default for PhaseTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for PhaseTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "phi -> {:.6} {} phi", self.offset, self.sign)
    }
}

// ============================================================================
// Tests
// ============================================================================
