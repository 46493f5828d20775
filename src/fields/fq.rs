use ark_ff::{Fp256, MontBackend, MontConfig};

/// The Bandersnatch base field.
///
/// q = 52435875175126190479447740508185965837690552500527637822603658699938581184513,
/// the same modulus as the scalar field of BLS12-381. Bandersnatch is built
/// over this field precisely so that its arithmetic can be expressed natively
/// inside a BLS12-381 SNARK circuit.
#[derive(MontConfig)]
#[modulus = "52435875175126190479447740508185965837690552500527637822603658699938581184513"]
#[generator = "7"]
pub struct FqConfig;

/// Element of the Bandersnatch base field GF(q).
pub type Fq = Fp256<MontBackend<FqConfig, 4>>;
