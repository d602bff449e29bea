//! Single-qubit unitary algebra
//!
//! Gantree: L2_System → Unitary
//!
//! Fixed-size 2×2 complex matrices acting on 2-component state vectors.
//! The Pauli matrices are compile-time constants shared by every caller.

use num_complex::Complex64;

/// 2×2 complex matrix, row-major
pub type Matrix2 = [[Complex64; 2]; 2];

/// Qubit state amplitudes `[ground, excited]`
pub type State = [Complex64; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

/// Identity
pub const IDENTITY: Matrix2 = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli X
pub const PAULI_X: Matrix2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli Y
pub const PAULI_Y: Matrix2 = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli Z
pub const PAULI_Z: Matrix2 = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Ground state |0⟩
pub const GROUND: State = [ONE, ZERO];

// ============================================================================
// Arithmetic
// ============================================================================

/// `m · state`
#[inline]
pub fn apply(m: &Matrix2, state: State) -> State {
    [
        m[0][0] * state[0] + m[0][1] * state[1],
        m[1][0] * state[0] + m[1][1] * state[1],
    ]
}

/// Matrix product `a · b` (b acts first)
pub fn compose(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut out = [[ZERO; 2]; 2];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = a[r][0] * b[0][c] + a[r][1] * b[1][c];
        }
    }
    out
}

/// Linear combination `x · a + y · b`
#[inline]
fn combine(x: Complex64, a: &Matrix2, y: Complex64, b: &Matrix2) -> Matrix2 {
    [
        [x * a[0][0] + y * b[0][0], x * a[0][1] + y * b[0][1]],
        [x * a[1][0] + y * b[1][0], x * a[1][1] + y * b[1][1]],
    ]
}

/// Conjugate transpose
pub fn adjoint(m: &Matrix2) -> Matrix2 {
    [
        [m[0][0].conj(), m[1][0].conj()],
        [m[0][1].conj(), m[1][1].conj()],
    ]
}

// ============================================================================
// Generators
// ============================================================================

/// Free evolution `diag(1, e^{i·angle})`
/// Gantree: phase_gate(angle) -> Matrix2 // 위상 게이트
pub fn phase_gate(angle: f64) -> Matrix2 {
    [[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, angle)]]
}

/// Rotation by `angle` about the equatorial axis at azimuth `phi`:
/// `cos(angle/2)·I - i·sin(angle/2)·(cos φ·X + sin φ·Y)`
/// Gantree: equatorial_rotation(angle, phi) -> Matrix2 // 적도축 회전
pub fn equatorial_rotation(angle: f64, phi: f64) -> Matrix2 {
    let half = angle / 2.0;
    let axis = combine(
        Complex64::new(phi.cos(), 0.0),
        &PAULI_X,
        Complex64::new(phi.sin(), 0.0),
        &PAULI_Y,
    );
    combine(
        Complex64::new(half.cos(), 0.0),
        &IDENTITY,
        Complex64::new(0.0, -half.sin()),
        &axis,
    )
}

/// Largest entry deviation of `m† m` from the identity
pub fn unitarity_error(m: &Matrix2) -> f64 {
    let p = compose(&adjoint(m), m);
    let mut err: f64 = 0.0;
    for r in 0..2 {
        for c in 0..2 {
            err = err.max((p[r][c] - IDENTITY[r][c]).norm());
        }
    }
    err
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_matrix_eq(a: &Matrix2, b: &Matrix2) {
        for r in 0..2 {
            for c in 0..2 {
                assert_abs_diff_eq!((a[r][c] - b[r][c]).norm(), 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_pauli_algebra() {
        // X·Y = iZ
        let xy = compose(&PAULI_X, &PAULI_Y);
        let iz = combine(I, &PAULI_Z, ZERO, &IDENTITY);
        assert_matrix_eq(&xy, &iz);

        // squares are identity
        for p in [PAULI_X, PAULI_Y, PAULI_Z] {
            assert_matrix_eq(&compose(&p, &p), &IDENTITY);
        }
    }

    #[test]
    fn test_rotation_about_x_is_minus_i_x() {
        let r = equatorial_rotation(PI, 0.0);
        let expected = combine(NEG_I, &PAULI_X, ZERO, &IDENTITY);
        assert_matrix_eq(&r, &expected);
    }

    #[test]
    fn test_rotation_about_y_is_minus_i_y() {
        let r = equatorial_rotation(PI, FRAC_PI_2);
        let expected = combine(NEG_I, &PAULI_Y, ZERO, &IDENTITY);
        assert_matrix_eq(&r, &expected);
    }

    #[test]
    fn test_generators_are_unitary() {
        for &(angle, phi) in &[(0.3, 0.0), (PI, 1.1), (FRAC_PI_2, -2.0), (7.0, 0.4)] {
            assert!(unitarity_error(&equatorial_rotation(angle, phi)) < 1e-12);
        }
        assert!(unitarity_error(&phase_gate(1.234)) < 1e-12);
    }

    #[test]
    fn test_apply_to_ground() {
        let s = apply(&PAULI_X, GROUND);
        assert_abs_diff_eq!(s[0].norm(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(s[1].norm(), 1.0, epsilon = 1e-15);

        let s = apply(&phase_gate(0.7), GROUND);
        assert_abs_diff_eq!(s[0].re, 1.0, epsilon = 1e-15);
    }
}
