use crate::fp256impl::Fp256Impl;
use crate::modulus::ModulusName;

pub struct Fr;

impl Fp256Impl for Fr {
    const NAME: ModulusName = ModulusName::Bn254Fr;

    const MODULUS: &'static str =
        "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";

    const MODULUS_LE_BYTES: [u8; 32] = [
        0x01, 0x00, 0x00, 0xf0, 0x93, 0xf5, 0xe1, 0x43,
        0x91, 0x70, 0xb9, 0x79, 0x48, 0xe8, 0x33, 0x28,
        0x5d, 0x58, 0x81, 0x81, 0xb6, 0x45, 0x50, 0xb8,
        0x29, 0xa0, 0x31, 0xe1, 0x72, 0x4e, 0x64, 0x30,
    ];

    const N_BITS: u32 = 254;
}
