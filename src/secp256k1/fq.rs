use crate::fp256impl::Fp256Impl;
use crate::modulus::ModulusName;

pub struct Fq;

impl Fp256Impl for Fq {
    const NAME: ModulusName = ModulusName::Secpk1Fq;

    const MODULUS: &'static str =
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

    const MODULUS_LE_BYTES: [u8; 32] = [
        0x2f, 0xfc, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    ];

    const N_BITS: u32 = 256;
}

#[cfg(test)]
mod test {
    use crate::bigint::UBigInt;
    use crate::fp256impl::Fp256Impl;
    use crate::secp256k1::fq::Fq;
    use num_bigint::{BigUint, RandomBits};
    use num_traits::{Num, One};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_modulus() {
        // p = 2²⁵⁶ - 2³² - 977
        let p = (BigUint::one() << 256u32) - (BigUint::one() << 32u32) - 977u32;
        assert_eq!(Fq::modulus_as_biguint(), p);
        assert_eq!(BigUint::from_str_radix(Fq::MODULUS, 16).unwrap(), p);
        assert_eq!(Fq::modulus().bits(), Fq::N_BITS as u64);
    }

    #[test]
    fn test_zero_dividend() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        let a = Fq::zero();

        for _ in 0..20 {
            let b: BigUint = prng.sample(RandomBits::new(256));
            let b = Fq::from_le_bytes(&b.to_bytes_le());
            if b.is_zero() {
                continue;
            }
            assert!((&a / &b).is_zero());
            assert!((&a % &b).is_zero());
        }
    }

    #[test]
    fn test_fermat() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        let exponent = UBigInt::from(Fq::modulus_as_biguint() - 1u32);

        for _ in 0..5 {
            let a: BigUint = prng.sample(RandomBits::new(256));
            let a = Fq::from_le_bytes(&a.to_bytes_le());
            if a.is_zero() {
                continue;
            }
            assert_eq!(a.pow(&exponent), Fq::one());
        }
    }
}
