use crate::fp256impl::Fp256Impl;
use crate::modulus::ModulusName;

pub struct Fq;

impl Fp256Impl for Fq {
    const NAME: ModulusName = ModulusName::Bn254Fq;

    const MODULUS: &'static str =
        "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47";

    const MODULUS_LE_BYTES: [u8; 32] = [
        0x47, 0xfd, 0x7c, 0xd8, 0x16, 0x8c, 0x20, 0x3c,
        0x8d, 0xca, 0x71, 0x68, 0x91, 0x6a, 0x81, 0x97,
        0x5d, 0x58, 0x81, 0x81, 0xb6, 0x45, 0x50, 0xb8,
        0x29, 0xa0, 0x31, 0xe1, 0x72, 0x4e, 0x64, 0x30,
    ];

    const N_BITS: u32 = 254;
}
