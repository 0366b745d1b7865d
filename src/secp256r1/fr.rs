use crate::fp256impl::Fp256Impl;
use crate::modulus::ModulusName;

pub struct Fr;

impl Fp256Impl for Fr {
    const NAME: ModulusName = ModulusName::Secpr1Fr;

    const MODULUS: &'static str =
        "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";

    const MODULUS_LE_BYTES: [u8; 32] = [
        0x51, 0x25, 0x63, 0xfc, 0xc2, 0xca, 0xb9, 0xf3,
        0x84, 0x9e, 0x17, 0xa7, 0xad, 0xfa, 0xe6, 0xbc,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
    ];

    const N_BITS: u32 = 256;
}
