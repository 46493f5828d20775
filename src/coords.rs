//! Coordinate kernels (spec §4.1, component C3).
//!
//! Private, variant-free routines over raw coordinate tuples. Naming
//! follows the Hisil-Wong-Carter-Dawson ("Twisted Edwards Curves
//! Revisited") unified addition law that `twisted_edwards_extended.rs`'s
//! `AddAssign` implements for the plain (non-endomorphism, non-decaf)
//! case; this module generalizes that one formula into the fuller set
//! spec §4.1 calls for: the safe-add fallback, efgh-targeted doubling, the
//! endomorphism, and the three equality policies.
//!
//! Nothing here knows about subgroups, NaPs-as-a-policy, or which of the
//! six point types is calling it — that semantic layer lives in
//! `crate::point`.

use ark_ff::Field;

use crate::fields::{Fq, Jacobi};
use crate::params::{coeff_a, coeff_d, b, c, r};

/// Projective extended coordinates `(X, Y, T, Z)`, curve equation
/// `a*X^2 + Y^2 = Z^2 + d*T^2`, `X*Y = T*Z`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct XtwCoords {
    pub x: Fq,
    pub y: Fq,
    pub t: Fq,
    pub z: Fq,
}

/// Affine extended coordinates `(X, Y, T)`; `Z` is implicitly 1. Cannot
/// represent the two rational points at infinity (spec §3): constructing
/// one from an infinite point is a programming error, not a runtime one,
/// since it would require `Z = 0` to be representable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct AxtwCoords {
    pub x: Fq,
    pub y: Fq,
    pub t: Fq,
}

/// Double-projective coordinates `(e, f, g, h)` with `X = ef`, `Y = gh`,
/// `T = eh`, `Z = fg`. The natural output shape of both the unified
/// addition formula and the doubling formula (spec §4.1), which is why
/// this representation exists at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct EfghCoords {
    pub e: Fq,
    pub f: Fq,
    pub g: Fq,
    pub h: Fq,
}

impl XtwCoords {
    pub fn nap() -> Self {
        Self { x: Fq::zero(), y: Fq::zero(), t: Fq::zero(), z: Fq::zero() }
    }

    pub fn neutral() -> Self {
        Self { x: Fq::zero(), y: Fq::one(), t: Fq::zero(), z: Fq::one() }
    }

    pub fn affine_order_two() -> Self {
        Self { x: Fq::zero(), y: -Fq::one(), t: Fq::zero(), z: Fq::one() }
    }

    pub fn infinity_plus() -> Self {
        Self { x: r(), y: Fq::zero(), t: Fq::one(), z: Fq::zero() }
    }

    pub fn infinity_minus() -> Self {
        Self { x: -r(), y: Fq::zero(), t: Fq::one(), z: Fq::zero() }
    }

    /// NaP iff x = y = 0 (spec §3 invariant 5).
    pub fn is_nap(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn neg(&self) -> Self {
        Self { x: -self.x, y: self.y, t: -self.t, z: self.z }
    }

    pub fn is_at_infinity(&self) -> bool {
        !self.is_nap() && self.z.is_zero()
    }

    pub fn is_e1(&self) -> bool {
        self.is_at_infinity() && self.x == r()
    }

    pub fn is_e2(&self) -> bool {
        self.is_at_infinity() && self.x == -r()
    }

    pub fn view(&self) -> (Fq, Fq, Fq, Fq) {
        (self.x, self.y, self.t, self.z)
    }
}

impl AxtwCoords {
    pub fn nap() -> Self {
        Self { x: Fq::zero(), y: Fq::zero(), t: Fq::zero() }
    }

    pub fn neutral() -> Self {
        Self { x: Fq::zero(), y: Fq::one(), t: Fq::zero() }
    }

    pub fn affine_order_two() -> Self {
        Self { x: Fq::zero(), y: -Fq::one(), t: Fq::zero() }
    }

    pub fn is_nap(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn neg(&self) -> Self {
        Self { x: -self.x, y: self.y, t: -self.t }
    }

    pub fn view(&self) -> (Fq, Fq, Fq, Fq) {
        (self.x, self.y, self.t, Fq::one())
    }
}

impl EfghCoords {
    pub fn nap() -> Self {
        Self { e: Fq::zero(), f: Fq::zero(), g: Fq::zero(), h: Fq::zero() }
    }

    pub fn neutral() -> Self {
        Self { e: Fq::zero(), f: Fq::one(), g: Fq::one(), h: Fq::one() }
    }

    pub fn affine_order_two() -> Self {
        Self { e: Fq::zero(), f: Fq::one(), g: Fq::one(), h: -Fq::one() }
    }

    /// `f = h = 0`, `e = g = 0`, or `e = h = 0` (spec §3 invariant 5).
    pub fn is_nap(&self) -> bool {
        (self.f.is_zero() && self.h.is_zero())
            || (self.e.is_zero() && self.g.is_zero())
            || (self.e.is_zero() && self.h.is_zero())
    }

    pub fn neg(&self) -> Self {
        Self { e: -self.e, f: self.f, g: self.g, h: self.h }
    }

    /// `g = 0` characterizes points at infinity (spec §3 invariant 4),
    /// guarded by `!is_nap()` per the resolved Open Question in spec §9.
    pub fn is_at_infinity(&self) -> bool {
        !self.is_nap() && self.g.is_zero()
    }

    /// Valid only once `is_at_infinity()` holds: at infinity `Z = fg = 0`
    /// with `g = 0`, `f != 0`, and `T = eh = 1`, so `e = 1/h` and
    /// `X = ef = f/h`; comparing `X` against `r` without dividing is
    /// `f == r*h`.
    pub fn is_e1(&self) -> bool {
        self.is_at_infinity() && self.f == r() * self.h
    }

    pub fn is_e2(&self) -> bool {
        self.is_at_infinity() && self.f == -r() * self.h
    }

    pub fn view(&self) -> (Fq, Fq, Fq, Fq) {
        (self.e * self.f, self.g * self.h, self.e * self.h, self.f * self.g)
    }

    /// Collapses to projective extended coordinates. Cheap relative to
    /// [`to_axtw`]: no inversion, just the three multiplies `view()`
    /// already does.
    pub fn to_xtw(&self) -> XtwCoords {
        let (x, y, t, z) = self.view();
        XtwCoords { x, y, t, z }
    }
}

/// Unified addition (spec §4.1): `A = X1X2, B = Y1Y2, C = d*T1T2, D =
/// Z1Z2, E = (X1+Y1)(X2+Y2) - A - B, F = D - C, G = D + C, H = B + 5A`
/// (since `a = -5`). Output lands directly in efgh form: `X3 = EF, Y3 =
/// GH, T3 = EH, Z3 = FG`.
///
/// Incomplete: fails when `F = H = 0`, i.e. exactly when `P1 - P2` is one
/// of the two rational infinite 2-torsion points (spec §4.1 theorem).
/// Never called directly when that can happen for `_full` inputs; use
/// [`add_safe`] there instead.
pub(crate) fn add(p1: (Fq, Fq, Fq, Fq), p2: (Fq, Fq, Fq, Fq)) -> EfghCoords {
    let (x1, y1, t1, z1) = p1;
    let (x2, y2, t2, z2) = p2;
    let a = x1 * x2;
    let b_ = y1 * y2;
    let cc = coeff_d() * t1 * t2;
    let d = z1 * z2;
    let e = (x1 + y1) * (x2 + y2) - a - b_;
    let f = d - cc;
    let g = d + cc;
    let h = b_ + a.double() + a.double() + a; // B + 5A
    EfghCoords { e, f, g, h }
}

/// The safe-addition alternative (spec §4.1): identical to [`add`] except
/// that when the naive `F` is zero (and neither input is a NaP), `F` and
/// `H` are recomputed as `F := Y1X2 - X1Y2`, `H := Z1T2 - T1Z2`, which
/// remains correct even when the inputs differ by an infinite 2-torsion
/// point. Used only by `_full -> _full` operations.
pub(crate) fn add_safe(p1: (Fq, Fq, Fq, Fq), p2: (Fq, Fq, Fq, Fq)) -> EfghCoords {
    let (x1, y1, t1, z1) = p1;
    let (x2, y2, t2, z2) = p2;
    let a = x1 * x2;
    let b_ = y1 * y2;
    let cc = coeff_d() * t1 * t2;
    let d = z1 * z2;
    let e = (x1 + y1) * (x2 + y2) - a - b_;
    let g = d + cc;
    let mut f = d - cc;
    let mut h = b_ + a.double() + a.double() + a;
    if f.is_zero() {
        f = y1 * x2 - x1 * y2;
        h = z1 * t2 - t1 * z2;
    }
    EfghCoords { e, f, g, h }
}

/// Doubling (spec §4.1): consumes only `X, Y, Z` of the input (no `T`),
/// and always targets efgh. Doubling any valid point lands back in the
/// prime-order subgroup regardless of the input's own subgroup status.
pub(crate) fn double(x: Fq, y: Fq, z: Fq) -> EfghCoords {
    let a = x * x;
    let bb = y * y;
    let cc = z.square().double();
    let dd = coeff_a() * a;
    let e = (x + y).square() - a - bb;
    let g = dd + bb;
    let f = g - cc;
    let h = dd - bb;
    EfghCoords { e, f, g, h }
}

/// The degree-2 endomorphism ψ (spec §4.1/§4.5), consuming `X, Y, Z` (not
/// `T`): `e = c*(Z^2 - Y^2)`, `f = Y^2 - b*Z^2`, `g = T*Z = X*Y`,
/// `h = b*(Y^2 + b*Z^2)`.
///
/// Degenerates when `X = 0` (input is `N` or `A`, both in ψ's kernel):
/// `g` collapses to zero with no point actually at infinity. Callers must
/// detect `x.is_zero()` themselves and substitute the neutral element —
/// this function does not special-case it, matching spec §4.1's framing
/// of the degeneracy as something "must be detected and replaced" by the
/// caller rather than silently patched inside the formula.
///
/// There is a known efgh-input fast path that factors out a multiply by
/// reusing the input's own `e` component ("3% cheaper"). That
/// micro-optimization is not implemented here: deriving it correctly
/// would need a reference this pack doesn't carry (see `DESIGN.md`),
/// and an unverified variant of a formula this load-bearing is a worse
/// risk than the constant-factor saving is worth. Every coordinate kind
/// instead goes through this one formula via its `view()`.
pub(crate) fn endo(x: Fq, y: Fq, z: Fq) -> EfghCoords {
    let y2 = y.square();
    let z2 = z.square();
    let e = c() * (z2 - y2);
    let f = y2 - b() * z2;
    let g = x * y;
    let h = b() * (y2 + b() * z2);
    EfghCoords { e, f, g, h }
}

/// Exact curve-point equality (spec §4.1 "exact" policy). Handles the two
/// rational infinities explicitly since they have `Z = 0`.
pub(crate) fn eq_exact(p1: (Fq, Fq, Fq, Fq), p2: (Fq, Fq, Fq, Fq)) -> bool {
    let (x1, y1, _, z1) = p1;
    let (x2, y2, _, z2) = p2;
    match (z1.is_zero(), z2.is_zero()) {
        (true, true) => x1 == x2,
        (true, false) | (false, true) => false,
        (false, false) => x1 * z2 == x2 * z1 && y1 * z2 == y2 * z1,
    }
}

/// Equality of `{P, P+A}` classes (spec §4.1 "modulo-A" policy): since
/// adding the affine order-2 point `A = (0,-1)` sends `(x,y) -> (-x,-y)`
/// on this curve, the ratio `X/Y` is invariant under that substitution,
/// and it stays invariant under projective rescaling too (`Z` cancels).
/// So the whole quotient collapses to a single cross-multiplication.
pub(crate) fn eq_modulo_a(p1: (Fq, Fq, Fq, Fq), p2: (Fq, Fq, Fq, Fq)) -> bool {
    let (x1, y1, _, _) = p1;
    let (x2, y2, _, _) = p2;
    x1 * y2 == x2 * y1
}

/// The Legendre subgroup-membership test (spec §4.1): a point is in the
/// prime-order subgroup iff `Jacobi(1 - a*X^2/Z^2) >= 0` and
/// `Jacobi(r*Y^2 - (r+1)*Y*Z + Z^2) <= 0`. Both sides of the Jacobi test
/// are homogeneous of even degree in `(X,Y,Z)`, so they're evaluated
/// directly on the projective values (no inversion needed): multiplying
/// the first test's argument through by `Z^2` (itself always a square)
/// doesn't change its Jacobi symbol.
pub(crate) fn in_subgroup(x: Fq, y: Fq, z: Fq) -> bool {
    let a = coeff_a();
    let test1 = (z.square() - a * x.square()).jacobi() >= 0;
    let test2 = decaf_class_test(y, z) <= 0;
    test1 && test2
}

/// `Jacobi(r*Y^2 - (r+1)*Y*Z + Z^2)`, shared by the subgroup check's
/// second clause and the decaf-normalization flip predicate (spec §4.1,
/// §4.2): the current representative is `P` (as opposed to `P+A`) iff
/// this is `<= 0`.
pub(crate) fn decaf_class_test(y: Fq, z: Fq) -> i8 {
    let r = r();
    (r * y.square() - (r + Fq::one()) * y * z + z.square()).jacobi()
}

/// Converts a `(X, Y, T, Z)` view to affine extended coordinates, i.e.
/// divides through by `Z`. Panics on `Z = 0`: the two rational points at
/// infinity have no affine-extended representation (spec §3), so asking
/// for one is a programming error rather than a recoverable failure.
pub(crate) fn to_axtw(v: (Fq, Fq, Fq, Fq)) -> AxtwCoords {
    let (x, y, t, z) = v;
    let z_inv = z.inverse().expect("cannot represent a point at infinity in affine coordinates");
    AxtwCoords { x: x * z_inv, y: y * z_inv, t: t * z_inv }
}

/// Converts a `(X, Y, T, Z)` view to double-projective coordinates.
///
/// `efgh` has no division-free embedding of a *generic* projective
/// extended point: solving `ef = X, gh = Y, eh = T, fg = Z` for `(e,f,g,h)`
/// given arbitrary `(X,Y,T,Z)` reduces to a ratio, not a product. The
/// affine case (`Z = 1`) is the one degenerate shape that *is*
/// division-free: `e = X, f = 1, g = 1, h = Y` satisfies all four
/// equations directly since `T = XY` there. So this normalizes to affine
/// first when `Z != 1` and embeds from there — the same cost the formulas
/// that actually *produce* `efgh` output (`add`, `double`, `endo`) are
/// built to avoid, which is why those write directly into `EfghCoords`
/// rather than going through this path.
pub(crate) fn to_efgh(v: (Fq, Fq, Fq, Fq)) -> EfghCoords {
    let (x, y, _, z) = v;
    if x.is_zero() && y.is_zero() {
        return EfghCoords::nap();
    }
    let (ax, ay) = if z.is_one() {
        (x, y)
    } else {
        let a = to_axtw(v);
        (a.x, a.y)
    };
    EfghCoords { e: ax, f: Fq::one(), g: Fq::one(), h: ay }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::generator;

    fn generator_xtw() -> XtwCoords {
        let (x, y) = generator();
        XtwCoords { x, y, t: x * y, z: Fq::one() }
    }

    #[test]
    fn doubling_matches_self_addition() {
        let g = generator_xtw();
        let doubled = double(g.x, g.y, g.z);
        let added = add(g.view(), g.view());
        assert_eq!(doubled.view(), added.view());
    }

    #[test]
    fn negation_then_add_is_neutral() {
        let g = generator_xtw();
        let neg_g = g.neg();
        let sum = add(g.view(), neg_g.view());
        let n = XtwCoords::neutral();
        assert!(eq_exact(sum.view(), n.view()));
    }

    #[test]
    fn neutral_is_identity_for_add() {
        let g = generator_xtw();
        let n = XtwCoords::neutral();
        let sum = add(g.view(), n.view());
        assert!(eq_exact(sum.view(), g.view()));
    }

    #[test]
    fn generator_is_in_subgroup() {
        let g = generator_xtw();
        assert!(in_subgroup(g.x, g.y, g.z));
    }

    #[test]
    fn affine_order_two_point_is_not_in_subgroup() {
        let a = XtwCoords::affine_order_two();
        assert!(!in_subgroup(a.x, a.y, a.z));
    }

    #[test]
    fn modulo_a_equates_p_and_p_plus_a() {
        let g = generator_xtw();
        let a = XtwCoords::affine_order_two();
        // P + A negates both coordinates on this curve.
        let p_plus_a = XtwCoords { x: -g.x, y: -g.y, t: g.t, z: g.z };
        assert!(eq_modulo_a(g.view(), p_plus_a.view()));
        assert!(!eq_exact(g.view(), p_plus_a.view()));
        let _ = a;
    }

    #[test]
    fn endomorphism_degenerates_at_kernel_points() {
        let n = XtwCoords::neutral();
        let out = endo(n.x, n.y, n.z);
        assert!(out.g.is_zero());
    }
}
