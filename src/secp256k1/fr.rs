use crate::fp256impl::Fp256Impl;
use crate::modulus::ModulusName;

pub struct Fr;

impl Fp256Impl for Fr {
    const NAME: ModulusName = ModulusName::Secpk1Fr;

    const MODULUS: &'static str =
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

    const MODULUS_LE_BYTES: [u8; 32] = [
        0x41, 0x41, 0x36, 0xd0, 0x8c, 0x5e, 0xd2, 0xbf,
        0x3b, 0xa0, 0x48, 0xaf, 0xe6, 0xdc, 0xae, 0xba,
        0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    ];

    const N_BITS: u32 = 256;
}

#[cfg(test)]
mod test {
    use crate::fp256impl::Fp256Impl;
    use crate::secp256k1::fr::Fr;
    use core::ops::{Div, Rem};
    use num_bigint::{BigUint, RandomBits};
    use num_traits::Num;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_modulus() {
        let n = BigUint::from_str_radix(Fr::MODULUS, 16).unwrap();
        assert_eq!(Fr::modulus_as_biguint(), n);
        assert_eq!(Fr::modulus().le_bytes(), &Fr::MODULUS_LE_BYTES[..]);
        assert_eq!(Fr::modulus().bits(), Fr::N_BITS as u64);
    }

    #[test]
    fn test_div_rem() {
        let n = Fr::modulus_as_biguint();
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..100 {
            let a: BigUint = prng.sample(RandomBits::new(256));
            let bits = prng.gen_range(1..=256);
            let b: BigUint = prng.sample(RandomBits::new(bits));
            let a = a.rem(&n);
            let b = b.rem(&n);
            if b.bits() == 0 {
                continue;
            }

            let x = Fr::from_le_bytes(&a.to_bytes_le());
            let y = Fr::from_le_bytes(&b.to_bytes_le());
            assert_eq!(BigUint::from((&x / &y).value()), a.clone().div(&b));
            assert_eq!(BigUint::from((&x % &y).value()), a.rem(&b));
        }
    }
}
