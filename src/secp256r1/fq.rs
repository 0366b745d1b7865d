use crate::fp256impl::Fp256Impl;
use crate::modulus::ModulusName;

pub struct Fq;

impl Fp256Impl for Fq {
    const NAME: ModulusName = ModulusName::Secpr1Fq;

    const MODULUS: &'static str =
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

    const MODULUS_LE_BYTES: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x01, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
    ];

    const N_BITS: u32 = 256;
}

#[cfg(test)]
mod test {
    use crate::fp256impl::Fp256Impl;
    use crate::secp256r1::fq::Fq;
    use num_bigint::BigUint;
    use num_traits::One;

    #[test]
    fn test_modulus() {
        // p = 2²⁵⁶ - 2²²⁴ + 2¹⁹² + 2⁹⁶ - 1
        let one = BigUint::one();
        let p = (&one << 256u32) - (&one << 224u32) + (&one << 192u32) + (&one << 96u32) - 1u32;
        assert_eq!(Fq::modulus_as_biguint(), p);
        assert_eq!(Fq::modulus().bits(), Fq::N_BITS as u64);
    }

    #[test]
    fn test_sub_wraps() {
        let one = Fq::one();
        let two = Fq::from_u64(2);
        let p_minus_one = Fq::modulus_as_biguint() - 1u32;

        let d = &one - &two;
        assert_eq!(BigUint::from(d.value()), p_minus_one);
        assert_eq!(&d + &two, one);
        assert_eq!(-one.clone(), d);
    }
}
