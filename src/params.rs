//! Curve parameters (spec §3 "Curve parameters", §4.6 GLV basis).
//!
//! These are the process-wide immutable constants spec §5 calls out as the
//! second piece of shared state (the first being the NaP hook, see
//! [`crate::nap`]). Everything here is computed once, lazily, the same way
//! `algebra-core`'s GPU scalar-mul module reaches for `lazy_static!` for its
//! one piece of shared state — except here the payload is immutable curve
//! data rather than a mutable profiler.

use ark_ff::{BigInteger, Field, PrimeField};
use lazy_static::lazy_static;

use crate::fields::Fq;

/// Twisted Edwards coefficient `a = -5`.
pub fn coeff_a() -> Fq {
    -Fq::from(5u64)
}

/// Twisted Edwards coefficient `d`, a fixed non-square chosen together with
/// `a` so that the curve has the intended 2-isogeny structure. This is the
/// standard published Bandersnatch `d`; see `DESIGN.md` for provenance
/// (the original Go reference was not available in this retrieval pack, so
/// the digits are carried from the well-known public parameter set rather
/// than re-derived here).
pub fn coeff_d() -> Fq {
    use ark_ff::MontFp;
    MontFp!("45022363124591815672509500913686876175488063829319466900776701791074614335719")
}

/// Curve cofactor: 4 rational points map to each prime-order-subgroup class.
pub const COFACTOR: u64 = 4;

/// Full rational point count on the curve: `cofactor * p253`. This is a
/// plain integer count, not a field modulus — see the provenance note on
/// [`crate::fields::Fr`] for why the scalar field itself must stay prime.
pub fn curve_order_big() -> <Fq as PrimeField>::BigInt {
    let mut n = crate::fields::Fr::MODULUS;
    // n := n * 4 via two left-shifts; BigInteger::muln is the bulk-shift
    // primitive ark-ff exposes for exactly this kind of scaling.
    n.muln(2);
    n
}

lazy_static! {
    /// `r = sqrt(d/a)`, used by the subgroup-membership Legendre test
    /// (§4.1) and the decaf normalization predicate (§4.2).
    static ref R: Fq = {
        let a = coeff_a();
        let d = coeff_d();
        (d / a).sqrt().expect("d/a must be a square for a valid Bandersnatch parameter set")
    };

    /// Endomorphism constants with `b^2 = a/d` (spec §3), picked as the
    /// canonical square root `ark-ff`'s `Field::sqrt` returns.
    static ref B: Fq = {
        let a = coeff_a();
        let d = coeff_d();
        (a / d).sqrt().expect("a/d must be a square for a valid Bandersnatch parameter set")
    };

    /// `c`, the companion endomorphism constant used in the `e`/`h`
    /// formulas of ψ (spec §4.1): `c = b * d`, which keeps
    /// `e = c*(Z^2 - Y^2)` and `h = b*(Y^2 + b*Z^2)` consistent with the
    /// 2-isogeny `b^2 = a/d` relation.
    static ref C: Fq = *B * coeff_d();

    /// `λ`, the endomorphism eigenvalue on the prime-order subgroup, with
    /// `λ^2 = -2 mod p253`. Carried from the published Bandersnatch
    /// parameter set (see `DESIGN.md`).
    static ref LAMBDA: crate::fields::Fr = {
        use ark_ff::MontFp;
        MontFp!("8913659658109529928382530854484400854125314752504019737736543920008458395397")
    };

    /// Affine generator coordinates of the prime-order subgroup.
    static ref GENERATOR: (Fq, Fq) = {
        use ark_ff::MontFp;
        (
            MontFp!("18886178867200960497001835917649091219057080094937609519140440539760939937304"),
            MontFp!("19188667384257783945677642223292697773471335439753913231509108946878080696678"),
        )
    };

    /// LLL-reduced GLV lattice basis `B = ((b11, b12), (b21, b22))` with
    /// `b11 = b22` and `b21 = -2*b12` (a consequence of `λ^2 = -2`), and
    /// `det(B) = p253` (spec §4.6).
    static ref GLV_BASIS: ((i128, i128), (i128, i128)) = {
        let b11: i128 = 113482231691339203864511368254957623327;
        let b12: i128 = 10741319382058926343429067976584995378;
        let b21: i128 = -2 * b12;
        let b22: i128 = b11;
        ((b11, b12), (b21, b22))
    };
}

/// `r = sqrt(d/a)`.
pub fn r() -> Fq {
    *R
}

/// Endomorphism constant `b`, with `b^2 = a/d`.
pub fn b() -> Fq {
    *B
}

/// Endomorphism constant `c = b * d`.
pub fn c() -> Fq {
    *C
}

/// Endomorphism eigenvalue `λ`, with `λ^2 = -2 mod p253`.
pub fn lambda() -> crate::fields::Fr {
    *LAMBDA
}

/// Affine coordinates of the fixed prime-order-subgroup generator.
pub fn generator() -> (Fq, Fq) {
    *GENERATOR
}

/// The reduced GLV lattice basis used by scalar decomposition (§4.6).
pub fn glv_basis() -> ((i128, i128), (i128, i128)) {
    *GLV_BASIS
}
