use num_bigint::BigUint;

use crate::modint::ModInt;
use crate::modulus::{register, Modulus, ModulusName};

/// A built-in 256-bit prime modulus.
pub trait Fp256Impl {
    const NAME: ModulusName;
    /// Big-endian hex, no prefix.
    const MODULUS: &'static str;
    /// Same value, little-endian, most significant byte last.
    const MODULUS_LE_BYTES: [u8; 32];
    const N_BITS: u32;

    #[inline]
    fn modulus() -> &'static Modulus { register(Self::NAME) }

    #[inline]
    fn modulus_as_biguint() -> BigUint { BigUint::from_bytes_le(&Self::MODULUS_LE_BYTES) }

    #[inline]
    fn from_le_bytes(bytes: &[u8]) -> ModInt { ModInt::from_le_bytes(bytes, Self::modulus()) }

    #[inline]
    fn from_u64(v: u64) -> ModInt { ModInt::from_u64(v, Self::modulus()) }

    #[inline]
    fn zero() -> ModInt { ModInt::zero(Self::modulus()) }

    #[inline]
    fn one() -> ModInt { ModInt::one(Self::modulus()) }
}
