//! `P_axtw_full` / `P_axtw_sub`: affine extended `(X, Y, T)` points, `Z`
//! implicitly 1 (spec §3 table row 2). Cannot hold either point at
//! infinity — constructing one from an infinite point is a programming
//! error, matched here by [`coords::to_axtw`]'s panic.

#![allow(non_camel_case_types)]

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use ark_ff::Field;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::coords::{self, AxtwCoords};
use crate::fields::Fq;
use crate::nap;
use crate::point::{self, P_xtw_full, PointLike, SubgroupPoint};

#[derive(Copy, Clone, Debug)]
pub struct P_axtw_full {
    pub(crate) c: AxtwCoords,
}

#[derive(Copy, Clone, Debug)]
pub struct P_axtw_sub {
    pub(crate) c: AxtwCoords,
}

impl PointLike for P_axtw_full {
    const IS_SUBGROUP: bool = false;
    fn raw_view(&self) -> (Fq, Fq, Fq, Fq) {
        self.c.view()
    }
}

impl PointLike for P_axtw_sub {
    const IS_SUBGROUP: bool = true;
    fn raw_view(&self) -> (Fq, Fq, Fq, Fq) {
        self.c.view()
    }
}

impl SubgroupPoint for P_axtw_sub {}

impl P_axtw_full {
    pub fn neutral() -> Self {
        Self { c: AxtwCoords::neutral() }
    }

    pub fn affine_order_two() -> Self {
        Self { c: AxtwCoords::affine_order_two() }
    }

    pub fn from_coords_unchecked(x: Fq, y: Fq) -> Self {
        Self { c: AxtwCoords { x, y, t: x * y } }
    }

    /// Builds from any full-curve point; panics if it is one of the two
    /// points at infinity, which affine extended coordinates cannot
    /// represent.
    pub fn from_xtw(p: &P_xtw_full) -> Self {
        Self { c: coords::to_axtw(p.raw_view()) }
    }

    /// `SetFrom` (spec §4.2), generalized: panics (programming error,
    /// not a NaP) on an infinite input, same as [`Self::from_xtw`].
    pub fn from_any<P: PointLike>(p: &P) -> Self {
        if p.is_nap() {
            return Self { c: AxtwCoords::nap() };
        }
        Self { c: coords::to_axtw(p.raw_view()) }
    }

    pub fn x(&self) -> Fq {
        self.c.x
    }

    pub fn y(&self) -> Fq {
        self.c.y
    }

    pub fn is_nap(&self) -> bool {
        self.c.is_nap()
    }

    pub fn is_neutral(&self) -> bool {
        coords::eq_exact(self.c.view(), AxtwCoords::neutral().view())
    }

    /// Always false: affine extended coordinates have no representation
    /// for a point at infinity.
    pub fn is_at_infinity(&self) -> bool {
        false
    }

    pub fn is_in_subgroup(&self) -> bool {
        coords::in_subgroup(self.c.x, self.c.y, Fq::one())
    }

    pub fn neg(&self) -> Self {
        Self { c: self.c.neg() }
    }

    pub fn add(&self, other: &Self) -> Self {
        let out = coords::add_safe(self.c.view(), other.c.view());
        nap::check(|| out.is_nap());
        Self { c: coords::to_axtw(out.view()) }
    }

    pub fn add_any<P: PointLike>(&self, other: &P) -> Self {
        let (x, y, t, z) = point::add_view_full(self, other);
        Self { c: coords::to_axtw((x, y, t, z)) }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// `Double`: always lands back in the subgroup, so always affine
    /// (never infinity), hence representable here even though this
    /// type otherwise can't hold an infinite point.
    pub fn double(&self) -> Self {
        let out = coords::double(self.c.x, self.c.y, Fq::one());
        Self { c: coords::to_axtw(out.view()) }
    }

    pub fn double_any<P: PointLike>(p: &P) -> Self {
        let (x, y, t, z) = point::double_view(p);
        Self { c: coords::to_axtw((x, y, t, z)) }
    }

    pub fn endo(&self) -> Self {
        if self.c.x.is_zero() {
            return Self::neutral();
        }
        let out = coords::endo(self.c.x, self.c.y, Fq::one());
        Self { c: coords::to_axtw(out.view()) }
    }

    pub fn is_equal<P: PointLike>(&self, other: &P) -> bool {
        point::point_eq(self, other)
    }
}

impl P_axtw_sub {
    pub fn neutral() -> Self {
        Self { c: AxtwCoords::neutral() }
    }

    pub fn try_from_any<P: PointLike>(p: &P, trusted: bool) -> Option<Self> {
        let view = point::try_subgroup_view(p, trusted)?;
        Some(Self { c: coords::to_axtw(view) })
    }

    pub fn from_subgroup_point(p: &P_axtw_full) -> Self {
        Self::try_from_any(p, true).expect("SetFromSubgroupPoint: NaP input")
    }

    pub fn from_coords_unchecked(x: Fq, y: Fq) -> Self {
        Self { c: AxtwCoords { x, y, t: x * y } }
    }

    pub fn x(&self) -> Fq {
        self.c.x
    }

    pub fn y(&self) -> Fq {
        self.c.y
    }

    pub fn x_decaf_projective(&self) -> Fq {
        self.c.x
    }

    pub fn y_decaf_projective(&self) -> Fq {
        self.c.y
    }

    pub fn is_nap(&self) -> bool {
        self.c.is_nap()
    }

    pub fn is_neutral(&self) -> bool {
        coords::eq_modulo_a(self.c.view(), AxtwCoords::neutral().view())
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
        Self { c: coords::to_axtw(out.view()) }
    }

    pub fn add_any<P: SubgroupPoint>(&self, other: &P) -> Self {
        let (x, y, t, z) = point::add_view_sub(self, other);
        Self { c: coords::to_axtw((x, y, t, z)) }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    pub fn double(&self) -> Self {
        let out = coords::double(self.c.x, self.c.y, Fq::one());
        Self { c: coords::to_axtw(out.view()) }
    }

    pub fn double_any<P: PointLike>(p: &P) -> Self {
        let (x, y, t, z) = point::double_view(p);
        Self { c: coords::to_axtw((x, y, t, z)) }
    }

    pub fn endo(&self) -> Self {
        if self.c.x.is_zero() {
            return Self::neutral();
        }
        let out = coords::endo(self.c.x, self.c.y, Fq::one());
        Self { c: coords::to_axtw(out.view()) }
    }

    pub fn normalize(&mut self) {
        if coords::decaf_class_test(self.c.y, Fq::one()) > 0 {
            self.c.x = -self.c.x;
            self.c.y = -self.c.y;
        }
    }

    pub fn is_equal<P: PointLike>(&self, other: &P) -> bool {
        point::point_eq(self, other)
    }
}

impl From<P_axtw_sub> for P_axtw_full {
    fn from(p: P_axtw_sub) -> Self {
        Self { c: p.c }
    }
}

impl PartialEq for P_axtw_full {
    fn eq(&self, other: &Self) -> bool {
        point::point_eq(self, other)
    }
}
impl Eq for P_axtw_full {}

impl PartialEq for P_axtw_sub {
    fn eq(&self, other: &Self) -> bool {
        point::point_eq(self, other)
    }
}
impl Eq for P_axtw_sub {}

impl Neg for P_axtw_full {
    type Output = Self;
    fn neg(self) -> Self {
        P_axtw_full::neg(&self)
    }
}
impl Add for P_axtw_full {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        P_axtw_full::add(&self, &rhs)
    }
}
impl Sub for P_axtw_full {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        P_axtw_full::sub(&self, &rhs)
    }
}
impl AddAssign for P_axtw_full {
    fn add_assign(&mut self, rhs: Self) {
        *self = P_axtw_full::add(self, &rhs);
    }
}
impl SubAssign for P_axtw_full {
    fn sub_assign(&mut self, rhs: Self) {
        *self = P_axtw_full::sub(self, &rhs);
    }
}

impl Neg for P_axtw_sub {
    type Output = Self;
    fn neg(self) -> Self {
        P_axtw_sub::neg(&self)
    }
}
impl Add for P_axtw_sub {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        P_axtw_sub::add(&self, &rhs)
    }
}
impl Sub for P_axtw_sub {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        P_axtw_sub::sub(&self, &rhs)
    }
}
impl AddAssign for P_axtw_sub {
    fn add_assign(&mut self, rhs: Self) {
        *self = P_axtw_sub::add(self, &rhs);
    }
}
impl SubAssign for P_axtw_sub {
    fn sub_assign(&mut self, rhs: Self) {
        *self = P_axtw_sub::sub(self, &rhs);
    }
}

/// Random affine full-curve point: same rejection sampler as
/// `P_xtw_full`'s, producing `Z = 1` output directly instead of going
/// through a conversion.
impl Distribution<P_axtw_full> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> P_axtw_full {
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
                return P_axtw_full::from_coords_unchecked(x, y);
            }
        }
    }
}

impl Distribution<P_axtw_sub> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> P_axtw_sub {
        let full: P_axtw_full = Standard.sample(rng);
        let cleared = full.double().double();
        P_axtw_sub::try_from_any(&cleared, true).expect("cofactor-cleared point is never NaP")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::generator;

    fn generator_full() -> P_axtw_full {
        let (x, y) = generator();
        P_axtw_full::from_coords_unchecked(x, y)
    }

    #[test]
    fn generator_add_neg_is_neutral() {
        let g = generator_full();
        assert!(g.add(&g.neg()).is_neutral());
    }

    #[test]
    fn from_xtw_infinity_panics() {
        let inf = P_xtw_full::infinity_plus();
        let result = std::panic::catch_unwind(|| P_axtw_full::from_xtw(&inf));
        assert!(result.is_err());
    }

    #[test]
    fn double_matches_add_to_self() {
        let g = generator_full();
        assert_eq!(g.double(), g.add(&g));
    }

    #[test]
    fn operator_overloads_match_methods() {
        let g = generator_full();
        assert_eq!(g + g, g.add(&g));
        assert_eq!(-g, g.neg());
    }
}
