//! `P_xtw_full` / `P_xtw_sub`: projective extended `(X, Y, T, Z)` points
//! (spec §3 table row 1).

#![allow(non_camel_case_types)]

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use ark_ff::Field;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::coords::{self, XtwCoords};
use crate::fields::Fq;
use crate::nap;
use crate::point::{self, PointLike, SubgroupPoint};

/// A single point on the full Bandersnatch curve, in projective extended
/// coordinates. Can represent either rational point at infinity.
#[derive(Copy, Clone, Debug)]
pub struct P_xtw_full {
    pub(crate) c: XtwCoords,
}

/// A class `{P, P+A}` of the prime-order subgroup, in projective extended
/// coordinates. Never at infinity — infinities aren't in the subgroup.
#[derive(Copy, Clone, Debug)]
pub struct P_xtw_sub {
    pub(crate) c: XtwCoords,
}

impl PointLike for P_xtw_full {
    const IS_SUBGROUP: bool = false;
    fn raw_view(&self) -> (Fq, Fq, Fq, Fq) {
        self.c.view()
    }
}

impl PointLike for P_xtw_sub {
    const IS_SUBGROUP: bool = true;
    fn raw_view(&self) -> (Fq, Fq, Fq, Fq) {
        self.c.view()
    }
}

impl SubgroupPoint for P_xtw_sub {}

impl P_xtw_full {
    pub fn neutral() -> Self {
        Self { c: XtwCoords::neutral() }
    }

    pub fn affine_order_two() -> Self {
        Self { c: XtwCoords::affine_order_two() }
    }

    pub fn infinity_plus() -> Self {
        Self { c: XtwCoords::infinity_plus() }
    }

    pub fn infinity_minus() -> Self {
        Self { c: XtwCoords::infinity_minus() }
    }

    /// Constructs a point directly from projective extended coordinates
    /// with no curve-membership check; use only when the caller already
    /// knows the coordinates satisfy the curve equation.
    pub fn from_coords_unchecked(x: Fq, y: Fq, t: Fq, z: Fq) -> Self {
        Self { c: XtwCoords { x, y, t, z } }
    }

    /// `SetFrom` (spec §4.2): converts from any of the six point types.
    /// NaP input yields a NaP output, matching every other variant's
    /// `SetFrom`.
    pub fn from_any<P: PointLike>(p: &P) -> Self {
        if p.is_nap() {
            return Self { c: XtwCoords::nap() };
        }
        let (x, y, t, z) = p.raw_view();
        Self { c: XtwCoords { x, y, t, z } }
    }

    pub fn x(&self) -> Fq {
        self.c.x
    }

    pub fn y(&self) -> Fq {
        self.c.y
    }

    pub fn t(&self) -> Fq {
        self.c.t
    }

    pub fn z(&self) -> Fq {
        self.c.z
    }

    pub(crate) fn set_z(&mut self, z: Fq) {
        self.c.z = z;
    }

    /// Overwrites `self` with the affine point `(x, y)`, i.e. `T = x*y`,
    /// `Z = 1`. Used by bulk normalization ([`crate::bulk`]) once the
    /// shared `Z`-inverse for a batch has been recovered.
    pub(crate) fn set_affine(&mut self, x: Fq, y: Fq) {
        self.c = XtwCoords { x, y, t: x * y, z: Fq::one() };
    }

    pub fn is_nap(&self) -> bool {
        self.c.is_nap()
    }

    pub fn is_neutral(&self) -> bool {
        coords::eq_exact(self.c.view(), XtwCoords::neutral().view())
    }

    pub fn is_at_infinity(&self) -> bool {
        self.c.is_at_infinity()
    }

    pub fn is_e1(&self) -> bool {
        self.c.is_e1()
    }

    pub fn is_e2(&self) -> bool {
        self.c.is_e2()
    }

    pub fn is_in_subgroup(&self) -> bool {
        !self.c.is_at_infinity() && coords::in_subgroup(self.c.x, self.c.y, self.c.z)
    }

    pub fn neg(&self) -> Self {
        Self { c: self.c.neg() }
    }

    pub fn add(&self, other: &Self) -> Self {
        let out = coords::add_safe(self.c.view(), other.c.view());
        nap::check(|| out.is_nap());
        Self { c: out.to_xtw() }
    }

    /// Cross-variant `Add` (spec §4.3 C5): adds a point of any other
    /// representation. Always uses the safe-addition fallback since this
    /// receiver is `_full` (see [`point::add_view_full`]).
    pub fn add_any<P: PointLike>(&self, other: &P) -> Self {
        let (x, y, t, z) = point::add_view_full(self, other);
        Self { c: XtwCoords { x, y, t, z } }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    pub fn double(&self) -> Self {
        let out = coords::double(self.c.x, self.c.y, self.c.z);
        Self { c: out.to_xtw() }
    }

    /// `Double` (spec §4.3/§9): accepts any point type, not just `Self`.
    pub fn double_any<P: PointLike>(p: &P) -> Self {
        let (x, y, t, z) = point::double_view(p);
        Self { c: XtwCoords { x, y, t, z } }
    }

    /// ψ(self). Infinities fast-path to `A` (spec §4.5); `N`/`A` inputs
    /// (kernel of ψ) degenerate to `N`; every other input uses the
    /// general `(X, Y, Z)` formula.
    pub fn endo(&self) -> Self {
        if self.c.is_at_infinity() {
            return Self::affine_order_two();
        }
        if self.c.x.is_zero() {
            return Self::neutral();
        }
        let out = coords::endo(self.c.x, self.c.y, self.c.z);
        Self { c: out.to_xtw() }
    }

    pub fn is_equal<P: PointLike>(&self, other: &P) -> bool {
        point::point_eq(self, other)
    }
}

impl P_xtw_sub {
    pub fn neutral() -> Self {
        Self { c: XtwCoords::neutral() }
    }

    /// `SetFromSubgroupPoint` (spec §4.4): builds a subgroup point from
    /// any other point type, skipping the membership check when
    /// statically known (`P::IS_SUBGROUP`) or when the caller asserts
    /// `trusted`. Otherwise runs the Legendre subgroup test and returns
    /// `None` (leaving `self` unchanged at the call site) on failure or
    /// NaP input.
    pub fn try_from_any<P: PointLike>(p: &P, trusted: bool) -> Option<Self> {
        let (x, y, t, z) = point::try_subgroup_view(p, trusted)?;
        Some(Self { c: XtwCoords { x, y, t, z } })
    }

    /// Convenience for already-proven-in-subgroup callers (e.g. internal
    /// table construction during scalar multiplication): equivalent to
    /// `try_from_any(p, true)` but panics instead of returning `None`,
    /// since a NaP there is always a programming error, not a soft
    /// subgroup-check failure.
    pub fn from_subgroup_point(p: &P_xtw_full) -> Self {
        Self::try_from_any(p, true).expect("SetFromSubgroupPoint: NaP input")
    }

    pub fn from_coords_unchecked(x: Fq, y: Fq, t: Fq, z: Fq) -> Self {
        Self { c: XtwCoords { x, y, t, z } }
    }

    pub fn x(&self) -> Fq {
        self.c.x
    }

    pub fn y(&self) -> Fq {
        self.c.y
    }

    /// Decaf read accessor (spec §4.2): the `X` coordinate of either `P`
    /// or `P+A` — unspecified which, but consistent across a batch of
    /// reads with no intervening mutation. Cheaper than [`Self::normalize`]
    /// when the caller only needs *a* representative.
    pub fn x_decaf_projective(&self) -> Fq {
        self.c.x
    }

    pub fn y_decaf_projective(&self) -> Fq {
        self.c.y
    }

    pub fn z_decaf_projective(&self) -> Fq {
        self.c.z
    }

    pub fn is_nap(&self) -> bool {
        self.c.is_nap()
    }

    pub fn is_neutral(&self) -> bool {
        coords::eq_modulo_a(self.c.view(), XtwCoords::neutral().view())
    }

    pub fn is_at_infinity(&self) -> bool {
        false
    }

    pub fn is_in_subgroup(&self) -> bool {
        true
    }

    pub fn neg(&self) -> Self {
        Self { c: self.c.neg() }
    }

    pub fn add(&self, other: &Self) -> Self {
        let out = coords::add(self.c.view(), other.c.view());
        nap::check(|| out.is_nap());
        Self { c: out.to_xtw() }
    }

    /// Cross-variant `Add` restricted to other subgroup types (spec
    /// §4.3: a `_sub` receiver may not take a `_full` argument for Add).
    pub fn add_any<P: SubgroupPoint>(&self, other: &P) -> Self {
        let (x, y, t, z) = point::add_view_sub(self, other);
        Self { c: XtwCoords { x, y, t, z } }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    pub fn double(&self) -> Self {
        let out = coords::double(self.c.x, self.c.y, self.c.z);
        Self { c: out.to_xtw() }
    }

    pub fn double_any<P: PointLike>(p: &P) -> Self {
        let (x, y, t, z) = point::double_view(p);
        Self { c: XtwCoords { x, y, t, z } }
    }

    pub fn endo(&self) -> Self {
        if self.c.x.is_zero() {
            return Self::neutral();
        }
        let out = coords::endo(self.c.x, self.c.y, self.c.z);
        Self { c: out.to_xtw() }
    }

    /// Decaf normalization (spec §4.2): flips the representative from
    /// `P+A` to `P` when [`coords::decaf_class_test`] says it's needed.
    /// Idempotent.
    pub fn normalize(&mut self) {
        if coords::decaf_class_test(self.c.y, self.c.z) > 0 {
            self.c.x = -self.c.x;
            self.c.y = -self.c.y;
        }
    }

    pub fn is_equal<P: PointLike>(&self, other: &P) -> bool {
        point::point_eq(self, other)
    }
}

impl From<P_xtw_sub> for P_xtw_full {
    fn from(p: P_xtw_sub) -> Self {
        Self { c: p.c }
    }
}

impl PartialEq for P_xtw_full {
    fn eq(&self, other: &Self) -> bool {
        point::point_eq(self, other)
    }
}
impl Eq for P_xtw_full {}

impl PartialEq for P_xtw_sub {
    fn eq(&self, other: &Self) -> bool {
        point::point_eq(self, other)
    }
}
impl Eq for P_xtw_sub {}

impl Neg for P_xtw_full {
    type Output = Self;
    fn neg(self) -> Self {
        P_xtw_full::neg(&self)
    }
}
impl Add for P_xtw_full {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        P_xtw_full::add(&self, &rhs)
    }
}
impl Sub for P_xtw_full {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        P_xtw_full::sub(&self, &rhs)
    }
}
impl AddAssign for P_xtw_full {
    fn add_assign(&mut self, rhs: Self) {
        *self = P_xtw_full::add(self, &rhs);
    }
}
impl SubAssign for P_xtw_full {
    fn sub_assign(&mut self, rhs: Self) {
        *self = P_xtw_full::sub(self, &rhs);
    }
}

impl Neg for P_xtw_sub {
    type Output = Self;
    fn neg(self) -> Self {
        P_xtw_sub::neg(&self)
    }
}
impl Add for P_xtw_sub {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        P_xtw_sub::add(&self, &rhs)
    }
}
impl Sub for P_xtw_sub {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        P_xtw_sub::sub(&self, &rhs)
    }
}
impl AddAssign for P_xtw_sub {
    fn add_assign(&mut self, rhs: Self) {
        *self = P_xtw_sub::add(self, &rhs);
    }
}
impl SubAssign for P_xtw_sub {
    fn sub_assign(&mut self, rhs: Self) {
        *self = P_xtw_sub::sub(self, &rhs);
    }
}

/// Rejection-sampling random full-curve point (spec "AMBIENT STACK"
/// supplement), matching `GroupProjective`'s `Distribution` impl in
/// `twisted_edwards_extended/mod.rs`: sample a random affine `x`, solve
/// the curve equation for `y^2`, retry if it isn't a square.
impl Distribution<P_xtw_full> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> P_xtw_full {
        use crate::params::{coeff_a, coeff_d};
        loop {
            let x: Fq = {
                use ark_std::UniformRand;
                Fq::rand(rng)
            };
            let x2 = x.square();
            let numerator = Fq::one() - coeff_a() * x2;
            let denominator = coeff_d() * x2 - Fq::one();
            if denominator.is_zero() {
                continue;
            }
            let y2 = numerator * denominator.inverse().unwrap();
            if let Some(y) = y2.sqrt() {
                let y = if rng.gen::<bool>() { y } else { -y };
                return P_xtw_full::from_coords_unchecked(x, y, x * y, Fq::one());
            }
        }
    }
}

/// Random subgroup point: sample a random full-curve point and clear the
/// cofactor by doubling twice (`COFACTOR = 4`), then convert trusting the
/// now-guaranteed membership — the same `scale_by_cofactor` pattern the
/// teacher's `Distribution<GroupProjective<P>>` impl uses.
impl Distribution<P_xtw_sub> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> P_xtw_sub {
        let full: P_xtw_full = Standard.sample(rng);
        let cleared = full.double().double();
        P_xtw_sub::try_from_any(&cleared, true).expect("cofactor-cleared point is never NaP")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::generator;

    fn generator_full() -> P_xtw_full {
        let (x, y) = generator();
        P_xtw_full::from_coords_unchecked(x, y, x * y, Fq::one())
    }

    #[test]
    fn generator_add_neg_is_neutral() {
        let g = generator_full();
        let sum = g.add(&g.neg());
        assert!(sum.is_neutral());
    }

    #[test]
    fn doubling_matches_add_to_self() {
        let g = generator_full();
        let a = g.double();
        let b = g.add(&g);
        assert!(crate::point::point_eq(&a, &b));
    }

    #[test]
    fn infinities_add_to_affine_order_two() {
        let e1 = P_xtw_full::infinity_plus();
        let e2 = P_xtw_full::infinity_minus();
        let sum = e1.add(&e2);
        assert!(crate::point::point_eq(&sum, &P_xtw_full::affine_order_two()));
    }

    #[test]
    fn subgroup_point_survives_round_trip() {
        let g = generator_full();
        let sub = P_xtw_sub::from_subgroup_point(&g);
        let back: P_xtw_full = sub.into();
        assert!(crate::point::point_eq(&g, &back));
    }

    #[test]
    fn sub_normalize_is_idempotent() {
        let g = generator_full();
        let mut sub = P_xtw_sub::from_subgroup_point(&g);
        sub.normalize();
        let once = sub;
        sub.normalize();
        assert!(crate::point::point_eq(&once, &sub));
    }

    #[test]
    fn untrusted_subgroup_check_rejects_affine_order_two() {
        let a = P_xtw_full::affine_order_two();
        assert!(P_xtw_sub::try_from_any(&a, false).is_none());
    }

    #[test]
    fn untrusted_subgroup_check_accepts_generator() {
        let g = generator_full();
        assert!(P_xtw_sub::try_from_any(&g, false).is_some());
    }

    #[test]
    fn nap_input_rejected_by_subgroup_check() {
        let nap = P_xtw_full { c: XtwCoords::nap() };
        assert!(P_xtw_sub::try_from_any(&nap, true).is_none());
    }

    #[test]
    fn cross_variant_add_matches_same_type_add() {
        let g = generator_full();
        let via_any = g.add_any(&g);
        let via_same = g.add(&g);
        assert_eq!(via_any, via_same);
    }

    #[test]
    fn operator_overloads_match_methods() {
        let g = generator_full();
        assert_eq!(g + g, g.add(&g));
        assert_eq!(g - g, g.sub(&g));
        assert_eq!(-g, g.neg());
    }

    #[test]
    fn random_full_point_is_on_curve_and_random_sub_point_is_in_subgroup() {
        use ark_std::test_rng;
        use rand::distributions::Standard;
        let mut rng = test_rng();
        for _ in 0..8 {
            let p: P_xtw_full = Standard.sample(&mut rng);
            assert!(!p.is_nap());
            let s: P_xtw_sub = Standard.sample(&mut rng);
            assert!(s.is_in_subgroup());
        }
    }
}
