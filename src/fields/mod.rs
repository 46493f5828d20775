//! The base-field and scalar-field external contract (spec §6, C1/C2).
//!
//! Arithmetic itself is out of scope for this crate (spec §1) and is
//! supplied by `ark-ff`'s generic Montgomery-form field implementation; this
//! module only names the two concrete fields and adds the small amount of
//! glue (`Jacobi`, `CmpAbs`) the point arithmetic needs beyond what
//! `ark_ff::Field`/`PrimeField` expose directly.

mod ext;
mod fq;
mod fr;

pub use ext::{cmp_abs, Jacobi};
pub use fq::Fq;
pub use fr::Fr;
