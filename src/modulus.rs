use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::bigint::UBigInt;
use crate::error::{ModIntError, Result};
use crate::fp256impl::Fp256Impl;
use crate::{bn254, secp256k1, secp256r1};

/// The six built-in moduli. Declaration order is the registry order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum ModulusName {
    #[strum(serialize = "bn254_fq")]
    #[serde(rename = "bn254_fq")]
    Bn254Fq,
    #[strum(serialize = "bn254_fr")]
    #[serde(rename = "bn254_fr")]
    Bn254Fr,
    #[strum(serialize = "secpk1_fq")]
    #[serde(rename = "secpk1_fq")]
    Secpk1Fq,
    #[strum(serialize = "secpk1_fr")]
    #[serde(rename = "secpk1_fr")]
    Secpk1Fr,
    #[strum(serialize = "secpr1_fq")]
    #[serde(rename = "secpr1_fq")]
    Secpr1Fq,
    #[strum(serialize = "secpr1_fr")]
    #[serde(rename = "secpr1_fr")]
    Secpr1Fr,
}

impl ModulusName {
    /// Little-endian encoding of the modulus, most significant byte last.
    pub fn le_bytes(self) -> &'static [u8; 32] {
        match self {
            ModulusName::Bn254Fq => &bn254::Fq::MODULUS_LE_BYTES,
            ModulusName::Bn254Fr => &bn254::Fr::MODULUS_LE_BYTES,
            ModulusName::Secpk1Fq => &secp256k1::Fq::MODULUS_LE_BYTES,
            ModulusName::Secpk1Fr => &secp256k1::Fr::MODULUS_LE_BYTES,
            ModulusName::Secpr1Fq => &secp256r1::Fq::MODULUS_LE_BYTES,
            ModulusName::Secpr1Fr => &secp256r1::Fr::MODULUS_LE_BYTES,
        }
    }
}

/// A named modulus. Instances only exist inside the registry and are handed
/// out as `&'static Modulus`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Modulus {
    name: ModulusName,
    le_bytes: &'static [u8],
    value: UBigInt,
}

impl Modulus {
    /// Build the registry entry for `F`. The byte table, the hex constant and
    /// the bit width must describe the same nonzero value.
    fn new<F: Fp256Impl>() -> Self {
        let le_bytes = F::NAME.le_bytes();
        let value = UBigInt::from_le_bytes(le_bytes);
        assert!(!value.is_zero(), "{} modulus is zero", F::NAME);
        assert_eq!(value.to_hex(), F::MODULUS, "{} byte table disagrees with its hex", F::NAME);
        assert_eq!(value.bits(), F::N_BITS as u64, "{} has the wrong bit width", F::NAME);
        Self { name: F::NAME, le_bytes, value }
    }

    pub fn name(&self) -> ModulusName { self.name }

    pub fn le_bytes(&self) -> &'static [u8] { self.le_bytes }

    pub fn value(&self) -> &UBigInt { &self.value }

    /// Width of every serialized value under this modulus.
    pub fn byte_len(&self) -> usize { self.le_bytes.len() }

    pub fn bits(&self) -> u64 { self.value.bits() }
}

static REGISTRY: OnceLock<Vec<Modulus>> = OnceLock::new();

fn registry() -> &'static [Modulus] {
    // same order as `ModulusName`
    REGISTRY.get_or_init(|| {
        vec![
            Modulus::new::<bn254::Fq>(),
            Modulus::new::<bn254::Fr>(),
            Modulus::new::<secp256k1::Fq>(),
            Modulus::new::<secp256k1::Fr>(),
            Modulus::new::<secp256r1::Fq>(),
            Modulus::new::<secp256r1::Fr>(),
        ]
    })
}

/// Fetch one of the built-in moduli.
pub fn register(name: ModulusName) -> &'static Modulus { &registry()[name as usize] }

/// Fetch a built-in modulus by its string name, e.g. `"secpk1_fr"`.
pub fn lookup(name: &str) -> Result<&'static Modulus> {
    name.parse::<ModulusName>()
        .map(register)
        .map_err(|_| ModIntError::UnknownModulus(name.to_string()))
}
