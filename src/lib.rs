//! Arithmetic on the Bandersnatch twisted Edwards curve.
//!
//! Bandersnatch is a twisted Edwards curve over the BLS12-381 scalar
//! field, chosen so its own scalar field arithmetic is the thing a
//! BLS12-381-based SNARK circuit can express natively. This crate is the
//! curve-point subsystem: six point representations (three coordinate
//! systems, each in a full-curve and a prime-order-subgroup-only
//! variant), the unified group law and its exceptional cases, a degree-2
//! endomorphism, a GLV scalar decomposition with signed-window scalar
//! multiplication, and bulk affine normalization.
//!
//! Field and scalar arithmetic themselves are an external contract
//! (see [`fields`]) supplied by `ark-ff` rather than reimplemented here.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod coords;

pub mod bulk;
pub mod fields;
pub mod glv;
pub mod nap;
pub mod params;
pub mod point;
pub mod scalar_mul;

pub use fields::{Fq, Fr};
pub use glv::GlvExponent;
pub use nap::{policy, set_policy, NapPolicy};
pub use point::{
    P_axtw_full, P_axtw_sub, P_efgh_full, P_efgh_sub, P_xtw_full, P_xtw_sub, PointLike,
    SubgroupPoint,
};
pub use scalar_mul::exponentiate_sliding_window;
