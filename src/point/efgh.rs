//! `P_efgh_full` / `P_efgh_sub`: double-projective `(e, f, g, h)` points,
//! `X = ef, Y = gh, T = eh, Z = fg` (spec §3 table row 3). The natural
//! landing spot for addition and doubling output (see `crate::coords`),
//! so this is usually the cheapest type to accumulate into during a
//! chain of additions.

#![allow(non_camel_case_types)]

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use ark_ff::Field;

use crate::coords::{self, EfghCoords};
use crate::fields::Fq;
use crate::nap;
use crate::point::{self, PointLike, SubgroupPoint};

#[derive(Copy, Clone, Debug)]
pub struct P_efgh_full {
    pub(crate) c: EfghCoords,
}

#[derive(Copy, Clone, Debug)]
pub struct P_efgh_sub {
    pub(crate) c: EfghCoords,
}

impl PointLike for P_efgh_full {
    const IS_SUBGROUP: bool = false;
    fn raw_view(&self) -> (Fq, Fq, Fq, Fq) {
        self.c.view()
    }
}

impl PointLike for P_efgh_sub {
    const IS_SUBGROUP: bool = true;
    fn raw_view(&self) -> (Fq, Fq, Fq, Fq) {
        self.c.view()
    }
}

impl SubgroupPoint for P_efgh_sub {}

impl P_efgh_full {
    pub fn neutral() -> Self {
        Self { c: EfghCoords::neutral() }
    }

    pub fn affine_order_two() -> Self {
        Self { c: EfghCoords::affine_order_two() }
    }

    pub fn from_coords_unchecked(e: Fq, f: Fq, g: Fq, h: Fq) -> Self {
        Self { c: EfghCoords { e, f, g, h } }
    }

    /// `SetFrom` (spec §4.2): see [`coords::to_efgh`] for why this isn't
    /// division-free in general.
    pub fn from_any<P: PointLike>(p: &P) -> Self {
        Self { c: coords::to_efgh(p.raw_view()) }
    }

    pub fn is_nap(&self) -> bool {
        self.c.is_nap()
    }

    pub fn is_neutral(&self) -> bool {
        coords::eq_exact(self.c.view(), EfghCoords::neutral().view())
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
        let (x, y, _, z) = self.c.view();
        !self.c.is_at_infinity() && coords::in_subgroup(x, y, z)
    }

    pub fn neg(&self) -> Self {
        Self { c: self.c.neg() }
    }

    pub fn add(&self, other: &Self) -> Self {
        let out = coords::add_safe(self.c.view(), other.c.view());
        nap::check(|| out.is_nap());
        Self { c: out }
    }

    pub fn add_any<P: PointLike>(&self, other: &P) -> Self {
        let (x, y, t, z) = point::add_view_full(self, other);
        Self { c: coords::to_efgh((x, y, t, z)) }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    pub fn double(&self) -> Self {
        let (x, y, _, z) = self.c.view();
        Self { c: coords::double(x, y, z) }
    }

    pub fn double_any<P: PointLike>(p: &P) -> Self {
        let (x, y, _, z) = p.raw_view();
        Self { c: coords::double(x, y, z) }
    }

    pub fn endo(&self) -> Self {
        if self.c.is_at_infinity() {
            return Self::affine_order_two();
        }
        let (x, y, _, z) = self.c.view();
        if x.is_zero() {
            return Self::neutral();
        }
        Self { c: coords::endo(x, y, z) }
    }

    pub fn is_equal<P: PointLike>(&self, other: &P) -> bool {
        point::point_eq(self, other)
    }
}

impl P_efgh_sub {
    pub fn neutral() -> Self {
        Self { c: EfghCoords::neutral() }
    }

    pub fn try_from_any<P: PointLike>(p: &P, trusted: bool) -> Option<Self> {
        let view = point::try_subgroup_view(p, trusted)?;
        Some(Self { c: coords::to_efgh(view) })
    }

    pub fn from_subgroup_point(p: &P_efgh_full) -> Self {
        Self::try_from_any(p, true).expect("SetFromSubgroupPoint: NaP input")
    }

    pub fn from_coords_unchecked(e: Fq, f: Fq, g: Fq, h: Fq) -> Self {
        Self { c: EfghCoords { e, f, g, h } }
    }

    pub fn x_decaf_projective(&self) -> Fq {
        self.c.e * self.c.f
    }

    pub fn y_decaf_projective(&self) -> Fq {
        self.c.g * self.c.h
    }

    pub fn is_nap(&self) -> bool {
        self.c.is_nap()
    }

    pub fn is_neutral(&self) -> bool {
        coords::eq_modulo_a(self.c.view(), EfghCoords::neutral().view())
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
        Self { c: out }
    }

    pub fn add_any<P: SubgroupPoint>(&self, other: &P) -> Self {
        let (x, y, t, z) = point::add_view_sub(self, other);
        Self { c: coords::to_efgh((x, y, t, z)) }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    pub fn double(&self) -> Self {
        let (x, y, _, z) = self.c.view();
        Self { c: coords::double(x, y, z) }
    }

    pub fn double_any<P: PointLike>(p: &P) -> Self {
        let (x, y, _, z) = p.raw_view();
        Self { c: coords::double(x, y, z) }
    }

    pub fn endo(&self) -> Self {
        let (x, y, _, z) = self.c.view();
        if x.is_zero() {
            return Self::neutral();
        }
        Self { c: coords::endo(x, y, z) }
    }

    /// Decaf normalization (spec §4.2). Flips `(e, h)` rather than
    /// `(x, y)`: since `X = ef, Y = gh`, negating both `e` and `h` negates
    /// `X` and `Y` while leaving `T = eh` unchanged, matching the
    /// `xtw`/`axtw` flip's effect on `T`.
    pub fn normalize(&mut self) {
        let (_, y, _, z) = self.c.view();
        if coords::decaf_class_test(y, z) > 0 {
            self.c.e = -self.c.e;
            self.c.h = -self.c.h;
        }
    }

    pub fn is_equal<P: PointLike>(&self, other: &P) -> bool {
        point::point_eq(self, other)
    }
}

impl From<P_efgh_sub> for P_efgh_full {
    fn from(p: P_efgh_sub) -> Self {
        Self { c: p.c }
    }
}

impl PartialEq for P_efgh_full {
    fn eq(&self, other: &Self) -> bool {
        point::point_eq(self, other)
    }
}
impl Eq for P_efgh_full {}

impl PartialEq for P_efgh_sub {
    fn eq(&self, other: &Self) -> bool {
        point::point_eq(self, other)
    }
}
impl Eq for P_efgh_sub {}

impl Neg for P_efgh_full {
    type Output = Self;
    fn neg(self) -> Self {
        P_efgh_full::neg(&self)
    }
}
impl Add for P_efgh_full {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        P_efgh_full::add(&self, &rhs)
    }
}
impl Sub for P_efgh_full {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        P_efgh_full::sub(&self, &rhs)
    }
}
impl AddAssign for P_efgh_full {
    fn add_assign(&mut self, rhs: Self) {
        *self = P_efgh_full::add(self, &rhs);
    }
}
impl SubAssign for P_efgh_full {
    fn sub_assign(&mut self, rhs: Self) {
        *self = P_efgh_full::sub(self, &rhs);
    }
}

impl Neg for P_efgh_sub {
    type Output = Self;
    fn neg(self) -> Self {
        P_efgh_sub::neg(&self)
    }
}
impl Add for P_efgh_sub {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        P_efgh_sub::add(&self, &rhs)
    }
}
impl Sub for P_efgh_sub {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        P_efgh_sub::sub(&self, &rhs)
    }
}
impl AddAssign for P_efgh_sub {
    fn add_assign(&mut self, rhs: Self) {
        *self = P_efgh_sub::add(self, &rhs);
    }
}
impl SubAssign for P_efgh_sub {
    fn sub_assign(&mut self, rhs: Self) {
        *self = P_efgh_sub::sub(self, &rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::generator;

    fn generator_full() -> P_efgh_full {
        let (x, y) = generator();
        P_efgh_full::from_coords_unchecked(x, Fq::one(), Fq::one(), y)
    }

    #[test]
    fn generator_add_neg_is_neutral() {
        let g = generator_full();
        assert!(g.add(&g.neg()).is_neutral());
    }

    #[test]
    fn doubling_matches_add_to_self() {
        let g = generator_full();
        let a = g.double();
        let b = g.add(&g);
        assert!(crate::point::point_eq(&a, &b));
    }

    #[test]
    fn from_any_matches_direct_construction() {
        let (x, y) = generator();
        let from_xtw = crate::point::P_xtw_full::from_coords_unchecked(x, y, x * y, Fq::one());
        let via_any = P_efgh_full::from_any(&from_xtw);
        assert!(crate::point::point_eq(&via_any, &generator_full()));
    }

    #[test]
    fn operator_overloads_match_methods() {
        let g = generator_full();
        assert_eq!(g + g, g.add(&g));
        assert_eq!(-g, g.neg());
    }
}
