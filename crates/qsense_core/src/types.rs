//! Core types for QSense
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Type aliases for the physical quantities passed around the workspace and
//! the small [`Sign`] type used by phase bookkeeping.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::Neg;

// ============================================================================
// Type Aliases
// ============================================================================

/// Angle in radians (gate area or axis azimuth)
/// Gantree: Angle // pub type Angle = f64
pub type Angle = f64;

/// Elapsed time in the same (arbitrary) unit as the inverse frequencies
/// Gantree: Duration // pub type Duration = f64
pub type Duration = f64;

/// Angular frequency in rad per time unit
/// Gantree: Frequency // pub type Frequency = f64
pub type Frequency = f64;

// ============================================================================
// Sign
// ============================================================================

/// Multiplicative sign (+1 or -1)
/// Gantree: Sign // 부호
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sign {
    /// +1
    #[default]
    Plus,
    /// -1
    Minus,
}

impl Sign {
    /// (-1)^exponent, where `true` counts as an odd exponent
    /// Gantree: parity(odd) -> Sign // (-1)^k
    #[inline]
    pub fn parity(odd: bool) -> Self {
        if odd {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    /// Numeric value
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Sign::Plus => 1.0,
            Sign::Minus => -1.0,
        }
    }

    /// Opposite sign
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    /// Whether this is -1
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Minus
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        self.flip()
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-"),
        }
    }
}

// ============================================================================
// Angle Helpers
// ============================================================================

/// Reduce an angle into [0, 2π)
#[inline]
pub fn mod_two_pi(angle: Angle) -> Angle {
    let r = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Reduce an angle into (-π, π]
#[inline]
pub fn wrap_to_pi(angle: Angle) -> Angle {
    let r = mod_two_pi(angle);
    if r > PI {
        r - TAU
    } else {
        r
    }
}

/// Smallest absolute difference between two angles, modulo 2π
#[inline]
pub fn angle_distance(a: Angle, b: Angle) -> Angle {
    wrap_to_pi(a - b).abs()
}

// ============================================================================
// Tests
// ============================================================================
