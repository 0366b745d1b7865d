pub mod fq;
pub mod fr;

pub use fq::Fq;
pub use fr::Fr;

use crate::fp256impl::Fp256Impl;
use crate::modint::ModInt;

/// secp256r1 (P-256) base field element from little-endian bytes.
pub fn secpr1_fq_from_le_bytes(bytes: &[u8]) -> ModInt { Fq::from_le_bytes(bytes) }

/// secp256r1 (P-256) scalar from little-endian bytes.
pub fn secpr1_fr_from_le_bytes(bytes: &[u8]) -> ModInt { Fr::from_le_bytes(bytes) }
