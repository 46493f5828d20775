//! Bulk affine normalization via Montgomery's trick (spec §4.7, C8).
//!
//! Grounded on `algebra`'s `GroupProjective::batch_normalization`
//! (`twisted_edwards_extended/mod.rs`): one pass accumulating running
//! `Z` products, a single inversion, then a reverse pass recovering each
//! individual `1/Z` — the same two-pass-plus-one-inversion shape, with
//! the `.filter(|g| !g.is_normalized())` skip generalized to the two
//! extra structural cases spec §4.7 calls out that a plain twisted
//! Edwards curve never has to deal with: a NaP has no `Z` to invert, and
//! a rational point at infinity is already in its one and only canonical
//! representation (`Z = 0` can't be normalized to `Z = 1` — it's a
//! different point).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use ark_ff::Field;

use crate::fields::Fq;
use crate::point::P_xtw_full;

/// Normalizes every entry of `points` to `Z = 1` in place, skipping (and
/// reporting the index of) any entry that structurally cannot be: a NaP
/// or one of the two rational points at infinity, both already in their
/// one canonical representation. Returns the sorted indices of entries
/// left untouched.
///
/// # Panics
///
/// Panics if an entry has `Z = 0` but is neither a NaP nor a recognized
/// point at infinity — under this crate's own constructors that never
/// happens (every `Z = 0` point is one or the other by construction),
/// so reaching it means the caller built an invalid point directly via
/// [`P_xtw_full::from_coords_unchecked`].
pub fn batch_normalize(points: &mut [P_xtw_full]) -> Vec<usize> {
    let mut skipped = Vec::new();
    for (i, p) in points.iter().enumerate() {
        if p.z().is_zero() {
            if !(p.is_nap() || p.is_e1() || p.is_e2()) {
                panic!(
                    "batch_normalize: entry {i} has Z = 0 but is neither a NaP nor a \
                     recognized point at infinity"
                );
            }
            skipped.push(i);
        }
    }

    // Montgomery's trick (Genelle, Prouff, Quisquater, "Montgomery's
    // Trick and Fast Implementation of Masked AES", section 3.2).
    let needs_normalization =
        |p: &P_xtw_full| !p.z().is_zero() && !p.z().is_one();

    let mut prod = Vec::with_capacity(points.len());
    let mut acc = Fq::one();
    for p in points.iter().filter(|p| needs_normalization(*p)) {
        acc *= p.z();
        prod.push(acc);
    }

    if prod.is_empty() {
        skipped.sort_unstable();
        return skipped;
    }

    let mut acc_inv = acc.inverse().expect("Z product of non-skipped entries is never zero");

    for (p, running_prod) in points
        .iter_mut()
        .rev()
        .filter(|p| needs_normalization(*p))
        .zip(prod.into_iter().rev().skip(1).chain(Some(Fq::one())))
    {
        let z_inv = acc_inv * running_prod;
        acc_inv *= p.z();
        let new_x = p.x() * z_inv;
        let new_y = p.y() * z_inv;
        p.set_affine(new_x, new_y);
    }

    skipped.sort_unstable();
    skipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::generator;
    use ark_std::test_rng;

    fn generator_full() -> P_xtw_full {
        let (x, y) = generator();
        P_xtw_full::from_coords_unchecked(x, y, x * y, Fq::one())
    }

    #[test]
    fn normalizes_a_mixed_batch_to_z_one() {
        let g = generator_full();
        let mut points = Vec::new();
        for i in 1..6u64 {
            let scaled_z = Fq::from(i);
            let scaled_x = g.x() * scaled_z;
            let scaled_y = g.y() * scaled_z;
            let scaled_t = g.t() * scaled_z;
            points.push(P_xtw_full::from_coords_unchecked(scaled_x, scaled_y, scaled_t, scaled_z));
        }
        let before = points.clone();
        let skipped = batch_normalize(&mut points);
        assert!(skipped.is_empty());
        for (after, before) in points.iter().zip(before.iter()) {
            assert_eq!(after.z(), Fq::one());
            assert!(crate::point::point_eq(after, before));
        }
    }

    #[test]
    fn skips_nap_and_infinity_and_reports_their_indices() {
        let mut points = vec![
            generator_full(),
            P_xtw_full::from_coords_unchecked(Fq::zero(), Fq::zero(), Fq::zero(), Fq::zero()),
            P_xtw_full::infinity_plus(),
            generator_full(),
            P_xtw_full::infinity_minus(),
        ];
        let skipped = batch_normalize(&mut points);
        assert_eq!(skipped, vec![1, 2, 4]);
        assert_eq!(points[0].z(), Fq::one());
        assert_eq!(points[3].z(), Fq::one());
        assert!(points[1].is_nap());
        assert!(points[2].is_e1());
        assert!(points[4].is_e2());
    }

    #[test]
    fn all_already_normalized_is_a_no_op() {
        let mut points = vec![generator_full(), generator_full()];
        let before = points.clone();
        let skipped = batch_normalize(&mut points);
        assert!(skipped.is_empty());
        for (after, before) in points.iter().zip(before.iter()) {
            assert!(crate::point::point_eq(after, before));
        }
    }

    #[test]
    #[should_panic(expected = "neither a NaP nor a recognized point at infinity")]
    fn invalid_z_zero_point_panics() {
        // x = r but constructed with t/z inconsistent with a genuine
        // infinity (y != 0): not a structurally valid point, and not a
        // NaP either, so Z = 0 here should be rejected rather than
        // silently treated as normalized.
        let bogus = P_xtw_full::from_coords_unchecked(Fq::one(), Fq::one(), Fq::one(), Fq::zero());
        let mut points = vec![bogus];
        let _ = batch_normalize(&mut points);
    }

    #[test]
    fn random_batch_normalizes_consistently() {
        use rand::distributions::{Distribution, Standard};
        let mut rng = test_rng();
        let mut points: Vec<P_xtw_full> = (0..10).map(|_| Standard.sample(&mut rng)).collect();
        let before = points.clone();
        let skipped = batch_normalize(&mut points);
        assert!(skipped.is_empty());
        for (after, before) in points.iter().zip(before.iter()) {
            assert_eq!(after.z(), Fq::one());
            assert!(crate::point::point_eq(after, before));
        }
    }
}
