//! The six point representations and polymorphic dispatch over them
//! (spec §3 point model, components C4/C5), plus the endomorphism (C6).
//!
//! Three coordinate systems (`xtw`, `axtw`, `efgh`) crossed with two
//! semantics (`_full`, the whole curve including its order-4 rational
//! torsion; `_sub`, the decaf-style quotient of the prime-order subgroup)
//! give the six concrete types spec §3's table names: [`P_xtw_full`],
//! [`P_xtw_sub`], [`P_axtw_full`], [`P_axtw_sub`], [`P_efgh_full`],
//! [`P_efgh_sub`].
//!
//! Spec §9's design note picks compile-time dispatch over a tagged
//! runtime enum because Rust's generics are zero-cost — there's no
//! reason to pay a match on every arithmetic op when the variant is
//! always known statically. [`PointLike`] is the seam: every point type
//! implements it, and the shared operations in this module
//! ([`point_eq`], [`normalize_component`]) are written once against the
//! trait rather than once per type pair, the same way
//! `algebra-core`'s `GroupAffine<P>`/`GroupProjective<P>` share one
//! `AddAssign` implementation across every twisted-Edwards curve `P`
//! instantiates it with.

mod axtw;
mod efgh;
mod xtw;

pub use axtw::{P_axtw_full, P_axtw_sub};
pub use efgh::{P_efgh_full, P_efgh_sub};
pub use xtw::{P_xtw_full, P_xtw_sub};

use ark_ff::Field;

use crate::coords::decaf_class_test;
use crate::fields::Fq;

/// Common read-only view every point representation can produce: its
/// `(X, Y, T, Z)` projective extended coordinates, plus whether the type
/// is a `_sub` (decaf-quotient) representation.
///
/// `_full` implementors represent a single curve point exactly. `_sub`
/// implementors represent the class `{P, P+A}` and may be holding either
/// representative at any time — see [`normalize_component`].
///
/// This is the seam spec §9's design note calls for: rather than a
/// 36-entry runtime dispatch table over six concrete types, every binary
/// operation is a generic function bounded by this trait, resolved at
/// compile time per the concrete `(Self, Rhs)` pair the caller names —
/// the "convert both sides to canonical efgh/xtw and use one formula"
/// reduction the design note offers as the simplification alternative.
pub trait PointLike: Copy {
    const IS_SUBGROUP: bool;

    fn raw_view(&self) -> (Fq, Fq, Fq, Fq);

    /// NaP iff `x = y = 0` (spec §3 invariant 5) — true uniformly across
    /// all three coordinate systems once read through `raw_view`, since
    /// `efgh`'s own NaP patterns all collapse `e*f` and `g*h` to zero too
    /// (see `EfghCoords::is_nap`).
    fn is_nap(&self) -> bool {
        let (x, y, _, _) = self.raw_view();
        x.is_zero() && y.is_zero()
    }
}

/// Marker for the three `_sub` (decaf-quotient, prime-order-subgroup-only)
/// types. Bounding a generic argument by this trait instead of
/// [`PointLike`] is how the "`_sub` receiver with `_full` argument is a
/// precondition violation, except for `Double`" rule of spec §4.3 is
/// enforced: it's a compile error to even attempt it, rather than a
/// runtime assertion.
pub trait SubgroupPoint: PointLike {}

/// Cross-variant `Add`/`Sub` body for a `_full` receiver (spec §4.3 C5):
/// always uses the safe-addition fallback, since a `_full`-typed operand
/// can be one of the two rational infinities and the plain unified
/// formula is incomplete exactly there (spec §4.1 theorem). Returns the
/// raw `(X, Y, T, Z)` view of the sum; callers convert into their own
/// representation.
pub(crate) fn add_view_full<A: PointLike, B: PointLike>(a: &A, b: &B) -> (Fq, Fq, Fq, Fq) {
    let out = crate::coords::add_safe(a.raw_view(), b.raw_view());
    crate::nap::check(|| out.is_nap());
    out.view()
}

/// Cross-variant `Add`/`Sub` body for a `_sub` receiver: both operands
/// are statically known to lie in the prime-order subgroup (bounded by
/// [`SubgroupPoint`]), so the plain unified formula is complete (spec
/// §4.1: "on inputs both in the 2p253-subgroup... the formula never
/// fails") and the `add_safe` fallback's extra field ops aren't needed.
pub(crate) fn add_view_sub<A: SubgroupPoint, B: SubgroupPoint>(a: &A, b: &B) -> (Fq, Fq, Fq, Fq) {
    let out = crate::coords::add(a.raw_view(), b.raw_view());
    crate::nap::check(|| out.is_nap());
    out.view()
}

/// `Double` (spec §4.3/§9): accepts *any* point type regardless of
/// whether the receiver is `_full` or `_sub`, the one documented
/// exception to "no implicit subgroup widening" — doubling any curve
/// point always lands back in the prime-order subgroup.
pub(crate) fn double_view<P: PointLike>(p: &P) -> (Fq, Fq, Fq, Fq) {
    let (x, y, _, z) = p.raw_view();
    crate::coords::double(x, y, z).view()
}

/// `SetFromSubgroupPoint` (spec §4.4), generalized over any input point
/// type via [`PointLike`]:
/// - NaP input: fails, leaves the output view untouched (returns `None`).
/// - Input statically known subgroup-only (`P::IS_SUBGROUP`): accepted
///   without a runtime check — the type already proves membership.
/// - Otherwise, `trusted` skips the check; untrusted input is verified
///   with the Legendre subgroup test (spec §4.1) and rejected on failure.
pub(crate) fn try_subgroup_view<P: PointLike>(p: &P, trusted: bool) -> Option<(Fq, Fq, Fq, Fq)> {
    if p.is_nap() {
        return None;
    }
    let view = p.raw_view();
    if P::IS_SUBGROUP || trusted {
        return Some(view);
    }
    let (x, y, _, z) = view;
    if crate::coords::in_subgroup(x, y, z) {
        Some(view)
    } else {
        None
    }
}

/// `IsEqual` (spec §3/§4.1), generalized over every pair of the six point
/// types via [`PointLike`]: exact policy when both sides are `_full`,
/// modulo-A when both are `_sub`, and decaf-normalize-then-exact when the
/// pair is mixed.
pub(crate) fn point_eq<A: PointLike, B: PointLike>(a: &A, b: &B) -> bool {
    let av = a.raw_view();
    let bv = b.raw_view();
    match (A::IS_SUBGROUP, B::IS_SUBGROUP) {
        (false, false) => crate::coords::eq_exact(av, bv),
        (true, true) => crate::coords::eq_modulo_a(av, bv),
        _ => crate::coords::eq_exact(
            normalize_component(av, A::IS_SUBGROUP),
            normalize_component(bv, B::IS_SUBGROUP),
        ),
    }
}

/// Decaf-normalizes a `(X, Y, T, Z)` view that may be holding the `P+A`
/// representative of its class, flipping `(X, Y)` to `(-X, -Y)` (leaving
/// `T = XY` unchanged) when [`decaf_class_test`] says the current
/// representative is `P+A` rather than `P`. `is_subgroup` gates the flip:
/// a `_full` view always already holds a single definite point (its `Y,
/// Z` need not even satisfy the decaf test's subgroup-only assumptions),
/// so it passes through unchanged — only a `_sub` side of a mixed
/// comparison gets normalized.
pub(crate) fn normalize_component(v: (Fq, Fq, Fq, Fq), is_subgroup: bool) -> (Fq, Fq, Fq, Fq) {
    if !is_subgroup {
        return v;
    }
    let (x, y, t, z) = v;
    if decaf_class_test(y, z) > 0 {
        (-x, -y, t, z)
    } else {
        (x, y, t, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::generator;

    fn xtw_generator() -> P_xtw_full {
        let (x, y) = generator();
        P_xtw_full::from_coords_unchecked(x, y, x * y, Fq::one())
    }

    /// Testable property 13: `SetFrom` across all three coordinate
    /// systems preserves equality.
    #[test]
    fn conversion_roundtrip_preserves_equality_across_all_three_systems() {
        let g = xtw_generator();

        let via_axtw = P_axtw_full::from_any(&g);
        let back_to_xtw = P_xtw_full::from_any(&via_axtw);
        assert!(point_eq(&g, &back_to_xtw));

        let via_efgh = P_efgh_full::from_any(&g);
        let back_to_xtw2 = P_xtw_full::from_any(&via_efgh);
        assert!(point_eq(&g, &back_to_xtw2));

        let efgh_from_axtw = P_efgh_full::from_any(&via_axtw);
        assert!(point_eq(&efgh_from_axtw, &via_efgh));
    }

    #[test]
    fn conversion_roundtrip_for_subgroup_points() {
        let g = xtw_generator();
        let sub_xtw = P_xtw_sub::from_subgroup_point(&g);
        let sub_axtw = P_axtw_sub::try_from_any(&sub_xtw, true).unwrap();
        let sub_efgh = P_efgh_sub::try_from_any(&sub_axtw, true).unwrap();
        assert!(point_eq(&sub_xtw, &sub_axtw));
        assert!(point_eq(&sub_axtw, &sub_efgh));
        assert!(point_eq(&sub_xtw, &sub_efgh));
    }

    #[test]
    fn mixed_equality_policy_matches_sub_representative() {
        let g = xtw_generator();
        let sub = P_xtw_sub::from_subgroup_point(&g);
        assert!(point_eq(&g, &sub));
        assert!(point_eq(&sub, &g));
    }
}
