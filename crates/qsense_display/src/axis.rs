//! Axis ticks in multiples of π
//!
//! Gantree: L4_Display → PiAxis
//!
//! Tick positions and labels for plotting phases, e.g. `-π / 2`, `3 π / 4`.

use qsense_core::{tolerance, QsenseError, QsenseResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Largest tick index magnitude; beyond 2^53 f64 no longer holds every integer
const MAX_TICK_INDEX: f64 = 9_007_199_254_740_992.0;

fn gcd(mut a: i128, mut b: i128) -> i128 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

// ============================================================================
// PiFraction
// ============================================================================

/// Reduced rational multiple of π, `numer / denom · π` with `denom > 0`
/// Gantree: PiFraction // π 분수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PiFraction {
    numer: i64,
    denom: i64,
}

impl PiFraction {
    /// Create and reduce `numer / denom`
    pub fn new(numer: i64, denom: i64) -> QsenseResult<Self> {
        if denom == 0 {
            return Err(QsenseError::InvalidStep(format!(
                "{}/{}: zero denominator",
                numer, denom
            )));
        }
        Self::reduced(numer.into(), denom.into()).ok_or_else(|| {
            QsenseError::InvalidStep(format!("{}/{}: out of range", numer, denom))
        })
    }

    /// Integer multiple of π
    pub fn whole(numer: i64) -> Self {
        Self { numer, denom: 1 }
    }

    fn reduced(numer: i128, denom: i128) -> Option<Self> {
        let g = gcd(numer, denom).max(1);
        let sign = if denom < 0 { -1 } else { 1 };
        Some(Self {
            numer: i64::try_from(sign * numer / g).ok()?,
            denom: i64::try_from(sign * denom / g).ok()?,
        })
    }

    /// Numerator after reduction
    pub fn numer(&self) -> i64 {
        self.numer
    }

    /// Denominator after reduction (always positive)
    pub fn denom(&self) -> i64 {
        self.denom
    }

    /// `k · self`, reduced; `None` if the result does not fit in `i64`
    pub fn checked_times(&self, k: i64) -> Option<Self> {
        Self::reduced(i128::from(k) * i128::from(self.numer), self.denom.into())
    }

    /// Value in radians
    pub fn radians(&self) -> f64 {
        self.numer as f64 / self.denom as f64 * PI
    }

    /// Whether the fraction is zero
    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }
}

impl fmt::Display for PiFraction {
    /// `0`, `π`, `-π / 2`, `3 π / 4`, `-2 π`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numer == 0 {
            return write!(f, "0");
        }
        if self.numer < 0 {
            write!(f, "-")?;
        }
        let n = self.numer.abs();
        if n == 1 {
            write!(f, "π")?;
        } else {
            write!(f, "{} π", n)?;
        }
        if self.denom != 1 {
            write!(f, " / {}", self.denom)?;
        }
        Ok(())
    }
}

impl FromStr for PiFraction {
    type Err = QsenseError;

    /// Accepts `n`, `n/d` and `n//d`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || QsenseError::InvalidStep(format!("cannot parse '{}' as a fraction", s));
        let s = s.trim();
        let (numer, denom) = match s.split_once('/') {
            Some((n, d)) => (n, d.trim_start_matches('/')),
            None => (s, "1"),
        };
        let numer = numer.trim().parse::<i64>().map_err(|_| bad())?;
        let denom = denom.trim().parse::<i64>().map_err(|_| bad())?;
        Self::new(numer, denom)
    }
}

// ============================================================================
// Ticks
// ============================================================================

/// Tick positions with matching labels
/// Gantree: PiTicks // 눈금
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiTicks {
    /// Positions in radians, ascending
    pub positions: Vec<f64>,

    /// One label per position
    pub labels: Vec<String>,
}

impl PiTicks {
    /// Number of ticks
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether there are no ticks
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate `(position, label)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, &str)> {
        self.positions
            .iter()
            .copied()
            .zip(self.labels.iter().map(String::as_str))
    }
}

/// Ticks at every multiple of `step · π` within `[lo, hi]`.
///
/// Endpoints within a small tolerance of a multiple are included, so
/// `pi_axis_labels(-π, π, 1/2)` yields five ticks from `-π` to `π`.
/// Gantree: pi_axis_labels(lo, hi, step) -> Result<PiTicks> // π 축 레이블
pub fn pi_axis_labels(lo: f64, hi: f64, step: PiFraction) -> QsenseResult<PiTicks> {
    if step.numer() <= 0 {
        return Err(QsenseError::InvalidStep(format!(
            "step {} must be positive",
            step
        )));
    }
    if !lo.is_finite() || !hi.is_finite() {
        return Err(QsenseError::InvalidStep(format!(
            "range [{}, {}] must be finite",
            lo, hi
        )));
    }

    let unit = step.radians();
    let first = (lo / unit - tolerance::AXIS_SNAP).ceil();
    let last = (hi / unit + tolerance::AXIS_SNAP).floor();

    let mut ticks = PiTicks {
        positions: Vec::new(),
        labels: Vec::new(),
    };
    if last < first {
        return Ok(ticks);
    }
    let too_many = || {
        QsenseError::InvalidStep(format!(
            "range [{}, {}] with step {} exceeds {} ticks",
            lo,
            hi,
            step,
            tolerance::MAX_AXIS_TICKS
        ))
    };
    if last - first >= tolerance::MAX_AXIS_TICKS as f64
        || first.abs() > MAX_TICK_INDEX
        || last.abs() > MAX_TICK_INDEX
    {
        return Err(too_many());
    }

    for k in first as i64..=last as i64 {
        let multiple = step.checked_times(k).ok_or_else(|| {
            QsenseError::InvalidStep(format!("tick {} of step {} overflows", k, step))
        })?;
        ticks.positions.push(multiple.radians());
        ticks.labels.push(multiple.to_string());
    }
    Ok(ticks)
}

// ============================================================================
// Tests
// ============================================================================
