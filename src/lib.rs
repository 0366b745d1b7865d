//! Multi-precision integers reduced by a fixed modulus, with the BN254,
//! secp256k1 and secp256r1 base and scalar field moduli built in.
//!
//! ```
//! use bitvm_modint::{bn254_fr_from_le_bytes, register, ModInt, ModulusName};
//!
//! let a = bn254_fr_from_le_bytes(&[5]);
//! let b = ModInt::from_le_bytes(&[3], register(ModulusName::Bn254Fr));
//! assert_eq!((&a * &b).to_le_bytes()[0], 15);
//! assert_eq!((&a % &b).to_le_bytes()[0], 2);
//! ```

pub mod bigint;
pub mod bn254;
pub mod error;
pub mod fp256impl;
pub mod modint;
pub mod modulus;
mod ops;
pub mod secp256k1;
pub mod secp256r1;

pub use bigint::UBigInt;
pub use bn254::{bn254_fq_from_le_bytes, bn254_fr_from_le_bytes};
pub use error::{ModIntError, Result};
pub use fp256impl::Fp256Impl;
pub use modint::ModInt;
pub use modulus::{lookup, register, Modulus, ModulusName};
pub use secp256k1::{secpk1_fq_from_le_bytes, secpk1_fr_from_le_bytes};
pub use secp256r1::{secpr1_fq_from_le_bytes, secpr1_fr_from_le_bytes};
