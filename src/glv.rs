//! GLV scalar decomposition and signed sliding-window recoding (spec
//! §4.6, component C7).
//!
//! Grounded on `algebra-core`'s `curves/glv.rs`, which frames the same
//! Babai-rounding decomposition as a `GLVParameters` trait generic over
//! any short-Weierstrass curve with a computed fixed-point reciprocal
//! (`Q1`/`Q2` against a `WideBigInt`). Bandersnatch's decomposition is
//! curve-specific rather than a generic trait (this crate has exactly
//! one curve), and spec §4.6 names the rounding step in terms of the
//! explicit LLL-reduced basis matrix and its adjugate rather than a
//! fixed-point reciprocal approximation, so the rounding division here is
//! done exactly with `num-bigint` instead of that file's wide-limb
//! fixed-point trick — a fixed-point reciprocal trades an exact division
//! for a cheaper approximate one (correctable by the same Voronoi search
//! both approaches need); this crate isn't on a hot enough path to need
//! that trade, and an exact division is less risk to get wrong.

use ark_ff::{BigInteger, PrimeField};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Signed;

use crate::fields::Fr;
use crate::params::glv_basis;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A signed value with a 128-bit magnitude — spec §6's `glvExponent`:
/// "stores a sign plus a 128-bit magnitude". Used for both halves `(u,
/// v)` of a GLV decomposition and consumed by [`recode_signed_window`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlvExponent {
    negative: bool,
    magnitude: u128,
}

impl GlvExponent {
    pub fn new(negative: bool, magnitude: u128) -> Self {
        // Canonicalize: -0 is 0.
        Self { negative: negative && magnitude != 0, magnitude }
    }

    pub fn magnitude(&self) -> u128 {
        self.magnitude
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// `Sign` (spec §6 scalar contract): `{-1, 0, +1}`.
    pub fn sign(&self) -> i8 {
        if self.magnitude == 0 {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Bit access over the magnitude (spec §6): `i` ranges over `[0,
    /// 128)`.
    pub fn bit(&self, i: u32) -> bool {
        if i >= 128 {
            false
        } else {
            (self.magnitude >> i) & 1 == 1
        }
    }

    fn to_field(self) -> Fr {
        let f = Fr::from(self.magnitude);
        if self.negative {
            -f
        } else {
            f
        }
    }
}

fn fr_to_biguint(x: Fr) -> BigUint {
    BigUint::from_bytes_le(&x.into_bigint().to_bytes_le())
}

fn modulus_biguint() -> BigUint {
    BigUint::from_bytes_le(&Fr::MODULUS.to_bytes_le())
}

/// Rounds `num / den` to the nearest integer (ties away from zero),
/// `den` assumed positive. Spec §4.6 step 2's "adding ⌊n/2⌋
/// pre-reduction, taking mod n, and subtracting ⌊n/2⌋" is one way to
/// realize this rounding via modular residues when the quotient is known
/// to be small relative to `n`; this computes it directly via exact
/// integer division, which is simpler to get right and just as correct.
fn round_div(num: &BigInt, den: &BigInt) -> BigInt {
    let sign = num.sign();
    let num_abs = num.magnitude();
    let den_abs = den.magnitude();
    let mut q = num_abs / den_abs;
    let r = num_abs % den_abs;
    if &(&r * 2u32) >= den_abs {
        q += 1u32;
    }
    match sign {
        Sign::Minus => -BigInt::from(q),
        _ => BigInt::from(q),
    }
}

fn bigint_to_i128(x: &BigInt) -> i128 {
    use num_traits::ToPrimitive;
    x.to_i128().expect("GLV decomposition output exceeds 128 bits — basis/bound mismatch")
}

fn l_inf_norm(u: &BigInt, v: &BigInt) -> BigInt {
    u.abs().max(v.abs())
}

/// GLV decomposition (spec §4.6): splits `t` into `(u, v)` with `u +
/// v*λ ≡ t (mod n)` and `|u|, |v|` both bounded by 126 bits.
///
/// Implements the four algorithm steps verbatim:
/// 1. `(t, 0) = α·b1 + β·b2` over `Q`, computed via the basis's adjugate.
/// 2. Round `α`, `β` to the nearest integer.
/// 3. `(u0, v0) = (t, 0) - (α·b1 + β·b2)` (rounded), the small residual
///    left over after subtracting the Babai-close lattice point from
///    `(t, 0)` — not the lattice point itself.
/// 4. Correct by the four Voronoi-relevant vectors `±b1, ±b2`, keeping
///    whichever minimizes the `L∞` norm (the `±(b1+b2)` pair is not
///    needed given this basis's sign pattern, per spec §4.6).
pub fn decompose(t: Fr) -> (GlvExponent, GlvExponent) {
    let ((b11, b12), (b21, b22)) = glv_basis();
    let n = BigInt::from(modulus_biguint());
    let t_big = BigInt::from(fr_to_biguint(t));

    let b11 = BigInt::from(b11);
    let b12 = BigInt::from(b12);
    let b21 = BigInt::from(b21);
    let b22 = BigInt::from(b22);

    // Step 1: (alpha*n, beta*n) = (t, 0) * adj(B), adj(B) = [[b22,-b12],[-b21,b11]].
    let alpha_n = &t_big * &b22;
    let beta_n = -(&t_big * &b12);

    // Step 2: round to nearest integer.
    let alpha = round_div(&alpha_n, &n);
    let beta = round_div(&beta_n, &n);

    // Step 3: (u0, v0) = (t, 0) - (alpha*b1 + beta*b2), the residual.
    let u0 = &t_big - (&alpha * &b11 + &beta * &b21);
    let v0 = -(&alpha * &b12 + &beta * &b22);

    // Step 4: Voronoi-relevant correction.
    let candidates = [
        (u0.clone(), v0.clone()),
        (&u0 + &b11, &v0 + &b12),
        (&u0 - &b11, &v0 - &b12),
        (&u0 + &b21, &v0 + &b22),
        (&u0 - &b21, &v0 - &b22),
    ];
    let (best_u, best_v) = candidates
        .into_iter()
        .min_by(|(u1, v1), (u2, v2)| l_inf_norm(u1, v1).cmp(&l_inf_norm(u2, v2)))
        .expect("candidate list is non-empty");

    let u_i128 = bigint_to_i128(&best_u);
    let v_i128 = bigint_to_i128(&best_v);
    let u = GlvExponent::new(u_i128 < 0, u_i128.unsigned_abs());
    let v = GlvExponent::new(v_i128 < 0, v_i128.unsigned_abs());
    (u, v)
}

/// Checks `u + v*λ ≡ t (mod n)`, the GLV correctness property (spec §8
/// property 9). Exposed for tests and callers that want to double-check
/// a decomposition before relying on it for scalar multiplication.
pub fn check_decomposition(t: Fr, u: GlvExponent, v: GlvExponent) -> bool {
    let lambda = crate::params::lambda();
    u.to_field() + v.to_field() * lambda == t
}

/// One signed odd digit of a recoded magnitude: `(bit_position,
/// odd_coefficient, sign)`.
pub type SignedDigit = (u32, u8, i8);

/// Signed unaligned sliding-window recoding (spec §4.6) of a 128-bit
/// magnitude `m` with window width `k`: returns triples `(position,
/// coefficient, sign)` with `m = Σ sign·coefficient·2^position`, every
/// coefficient odd and `< 2^k`, consecutive positions at least `k+1`
/// apart.
pub fn recode_signed_window(m: u128, k: u32) -> Vec<SignedDigit> {
    assert!(k >= 1 && k <= 31, "window width must fit a u32 accumulator");

    fn bit(m: u128, idx: u32) -> u32 {
        if idx >= 128 {
            0
        } else {
            ((m >> idx) & 1) as u32
        }
    }

    let mut digits = Vec::new();
    let mut carry: u32 = 0;
    let mut i: u32 = 0;
    // Run one bit past the magnitude's width to flush a trailing carry.
    while i < 128 || carry != 0 {
        let bit_i = bit(m, i);
        if bit_i == carry {
            i += 1;
            continue;
        }
        let mut window: u32 = 0;
        for j in 0..k {
            window |= bit(m, i + j) << j;
        }
        let v_raw = window + carry;
        let top_bit = bit(m, i + k);
        let (coeff, sign, new_carry) = if top_bit == 1 {
            ((1u32 << k) - v_raw, -1i8, 1u32)
        } else {
            (v_raw, 1i8, 0u32)
        };
        digits.push((i, coeff as u8, sign));
        carry = new_carry;
        i += k + 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::{test_rng, UniformRand};

    #[test]
    fn decompose_zero_scalar() {
        let (u, v) = decompose(Fr::from(0u64));
        assert_eq!(u.magnitude(), 0);
        assert_eq!(v.magnitude(), 0);
    }

    #[test]
    fn decompose_lambda_gives_zero_and_one() {
        let lambda = crate::params::lambda();
        let (u, v) = decompose(lambda);
        assert!(check_decomposition(lambda, u, v));
        // S5: GLV(lambda) = (0, 1) up to Voronoi equivalents.
        assert!(u.magnitude() < (1u128 << 8));
        assert_eq!(v.magnitude(), 1);
        assert!(!v.is_negative());
    }

    #[test]
    fn decomposition_satisfies_glv_identity_for_random_scalars() {
        let mut rng = test_rng();
        for _ in 0..32 {
            let t = Fr::rand(&mut rng);
            let (u, v) = decompose(t);
            assert!(check_decomposition(t, u, v));
            assert!(u.magnitude() < (1u128 << 126));
            assert!(v.magnitude() < (1u128 << 126));
        }
    }

    #[test]
    fn decomposition_is_voronoi_optimal() {
        let ((b11, b12), (b21, b22)) = glv_basis();
        let mut rng = test_rng();
        for _ in 0..8 {
            let t = Fr::rand(&mut rng);
            let (u, v) = decompose(t);
            let u0 = u.sign() as i128 * u.magnitude() as i128;
            let v0 = v.sign() as i128 * v.magnitude() as i128;
            let base_norm = u0.unsigned_abs().max(v0.unsigned_abs());
            for (du, dv) in [(b11, b12), (-b11, -b12), (b21, b22), (-b21, -b22)] {
                let nu = u0 + du;
                let nv = v0 + dv;
                let n = nu.unsigned_abs().max(nv.unsigned_abs());
                assert!(n >= base_norm, "a Voronoi-relevant shift strictly decreased the norm");
            }
        }
    }

    #[test]
    fn recoding_reconstructs_the_original_value() {
        let mut rng = test_rng();
        for _ in 0..64 {
            let m: u128 = u128::rand(&mut rng) & ((1u128 << 100) - 1);
            for k in 2..=5u32 {
                let digits = recode_signed_window(m, k);
                let mut sum: i128 = 0;
                let mut last_pos: i64 = -1;
                for (pos, coeff, sign) in &digits {
                    assert_eq!(coeff % 2, 1, "coefficient must be odd");
                    assert!(*coeff as u32 >= 1 && (*coeff as u32) < (1 << k));
                    assert!(
                        (*pos as i64) >= last_pos + (k as i64 + 1) || last_pos < 0,
                        "consecutive positions must differ by at least k+1"
                    );
                    last_pos = *pos as i64;
                    sum += (*sign as i128) * (*coeff as i128) * (1i128 << pos);
                }
                assert_eq!(sum, m as i128);
            }
        }
    }

    #[test]
    fn recoding_of_zero_is_empty() {
        assert!(recode_signed_window(0, 3).is_empty());
    }
}
