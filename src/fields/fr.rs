use ark_ff::{Fp256, MontBackend, MontConfig};

/// The Bandersnatch scalar field — GF(p253), the prime order of the
/// curve's prime-order subgroup.
///
/// p253 = 13108968793781547619861935127046491459309155893440570251786403306729687672801
///
/// The full curve has cofactor 4, so the curve's total point count is
/// `4 * p253` (see [`crate::params::curve_order_big`]); that count is not prime
/// and is never used as a field modulus — scalars that multiply
/// prime-order-subgroup points are elements of GF(p253) itself, which is
/// also the modulus the GLV lattice reduction (§4.6) works over.
#[derive(MontConfig)]
#[modulus = "13108968793781547619861935127046491459309155893440570251786403306729687672801"]
#[generator = "5"]
pub struct FrConfig;

/// Element of GF(p253).
pub type Fr = Fp256<MontBackend<FrConfig, 4>>;
