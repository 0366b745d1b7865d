pub mod fq;
pub mod fr;

pub use fq::Fq;
pub use fr::Fr;

use crate::fp256impl::Fp256Impl;
use crate::modint::ModInt;

/// BN254 base field element from little-endian bytes.
pub fn bn254_fq_from_le_bytes(bytes: &[u8]) -> ModInt { Fq::from_le_bytes(bytes) }

/// BN254 scalar from little-endian bytes.
pub fn bn254_fr_from_le_bytes(bytes: &[u8]) -> ModInt { Fr::from_le_bytes(bytes) }
