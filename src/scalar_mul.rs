//! Combined GLV + endomorphism scalar multiplication (spec §4.6, C7).
//!
//! Grounded on `algebra-core`'s `scalar_mul` windowed-table approach
//! (`FixedBaseMSM`'s precomputed-odd-multiples table plus a
//! most-significant-bit-first double-and-add walk), specialized here to
//! Bandersnatch's particular trick: splitting the scalar via
//! [`crate::glv::decompose`] into two roughly-half-length pieces `(u,
//! v)` computed against `P` and `ψ(P)` respectively, each walked with
//! its own width-`k` signed-digit table from [`crate::glv`], then summed.

use crate::fields::Fr;
use crate::glv::{self, GlvExponent};
use crate::point::{P_xtw_sub, SubgroupPoint};

/// Signed sliding-window width (spec §4.6: "width k=3"). Recoded digits
/// are odd and `< 2^K`, so the table below holds `2^(K-1) = 4` entries:
/// the multiples `1·P, 3·P, 5·P, 7·P`.
const K: u32 = 3;

fn odd_multiples_table(p: P_xtw_sub) -> [P_xtw_sub; 1 << (K as usize - 1)] {
    let mut table = [p; 1 << (K as usize - 1)];
    let two_p = p.double();
    for i in 1..table.len() {
        table[i] = table[i - 1].add(&two_p);
    }
    table
}

/// `magnitude · p`, via the width-`K` signed sliding-window walk of
/// spec §4.6: recode the magnitude into odd signed digits, then scan
/// from the top digit's bit position down to zero, doubling the
/// accumulator every step and folding in a table lookup wherever a
/// digit lands.
fn windowed_scalar_mul(p: P_xtw_sub, magnitude: u128) -> P_xtw_sub {
    if magnitude == 0 {
        return P_xtw_sub::neutral();
    }
    let table = odd_multiples_table(p);
    let digits = glv::recode_signed_window(magnitude, K);
    let top = digits.iter().map(|(pos, _, _)| *pos).max().expect("nonzero magnitude recodes to at least one digit");

    let mut acc = P_xtw_sub::neutral();
    let mut pos = top;
    loop {
        acc = acc.double();
        if let Some(&(_, coeff, sign)) = digits.iter().find(|(p, _, _)| *p == pos) {
            let term = table[((coeff - 1) / 2) as usize];
            acc = if sign > 0 { acc.add(&term) } else { acc.add(&term.neg()) };
        }
        if pos == 0 {
            break;
        }
        pos -= 1;
    }
    acc
}

fn signed_scalar_mul(p: P_xtw_sub, e: GlvExponent) -> P_xtw_sub {
    let out = windowed_scalar_mul(p, e.magnitude());
    if e.is_negative() {
        out.neg()
    } else {
        out
    }
}

/// `t · p` for a prime-order-subgroup point `p` and scalar `t` (spec
/// §4.6's named top-level operation): decomposes `t` into `(u, v)` with
/// `t ≡ u + v·λ (mod n)`, then computes `u·p + v·ψ(p)` using the
/// width-`K` signed sliding window for each half.
///
/// Bounded by [`SubgroupPoint`] rather than the weaker [`PointLike`]:
/// the endomorphism's `λ`-eigenvalue property this decomposition relies
/// on only holds on the prime-order subgroup (spec §4.5), so a `_full`
/// input — possibly one of the two rational infinities, which have no
/// well-defined GLV decomposition — is rejected at compile time.
pub fn exponentiate_sliding_window<P: SubgroupPoint>(p: &P, t: Fr) -> P_xtw_sub {
    let base = P_xtw_sub::try_from_any(p, true).expect("exponentiate_sliding_window: NaP input");
    let endo_base = base.endo();
    let (u, v) = glv::decompose(t);
    let u_term = signed_scalar_mul(base, u);
    let v_term = signed_scalar_mul(endo_base, v);
    u_term.add(&v_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::generator;
    use ark_ff::{BigInteger, PrimeField};
    use ark_std::{test_rng, UniformRand};

    fn xtw_generator_sub() -> P_xtw_sub {
        let (x, y) = generator();
        let full = crate::point::P_xtw_full::from_coords_unchecked(x, y, x * y, crate::fields::Fq::from(1u64));
        P_xtw_sub::from_subgroup_point(&full)
    }

    fn repeated_add(p: P_xtw_sub, n: u64) -> P_xtw_sub {
        let mut acc = P_xtw_sub::neutral();
        for _ in 0..n {
            acc = acc.add(&p);
        }
        acc
    }

    #[test]
    fn zero_scalar_gives_neutral() {
        let g = xtw_generator_sub();
        let out = exponentiate_sliding_window(&g, Fr::from(0u64));
        assert!(out.is_neutral());
    }

    #[test]
    fn small_scalars_match_repeated_addition() {
        let g = xtw_generator_sub();
        for n in 1u64..20 {
            let via_glv = exponentiate_sliding_window(&g, Fr::from(n));
            let via_repeat = repeated_add(g, n);
            assert_eq!(via_glv, via_repeat, "mismatch at n={n}");
        }
    }

    #[test]
    fn negation_matches_scalar_negation() {
        let g = xtw_generator_sub();
        let t = Fr::from(7u64);
        let pos = exponentiate_sliding_window(&g, t);
        let neg = exponentiate_sliding_window(&g, -t);
        assert_eq!(neg, pos.neg());
    }

    #[test]
    fn random_scalars_match_repeated_addition_via_small_reduction() {
        let g = xtw_generator_sub();
        let mut rng = test_rng();
        for _ in 0..8 {
            let n: u64 = u64::rand(&mut rng) % 1000;
            let via_glv = exponentiate_sliding_window(&g, Fr::from(n));
            let via_repeat = repeated_add(g, n);
            assert_eq!(via_glv, via_repeat);
        }
    }

    #[test]
    fn matches_direct_field_scalar_multiplication_for_random_scalars() {
        // Cross-check against a plain non-GLV double-and-add over the
        // full-width scalar, independent of the GLV decomposition path.
        let g = xtw_generator_sub();
        let mut rng = test_rng();
        for _ in 0..8 {
            let t = Fr::rand(&mut rng);
            let via_glv = exponentiate_sliding_window(&g, t);

            let bits = t.into_bigint().to_bits_be();
            let mut acc = P_xtw_sub::neutral();
            for bit in bits {
                acc = acc.double();
                if bit {
                    acc = acc.add(&g);
                }
            }
            assert_eq!(via_glv, acc);
        }
    }
}
