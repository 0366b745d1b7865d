//! Infix operators over `ModInt`.
//!
//! Operators cannot return errors, so a modulus mismatch or a zero divisor
//! panics with the error message. Use the `try_*` methods or the
//! `num_traits::Checked*` impls to handle those cases.

use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub};

use crate::error::Result;
use crate::modint::ModInt;

fn expect_op(result: Result<ModInt>) -> ModInt {
    match result {
        Ok(v) => v,
        Err(err) => panic!("{}", err),
    }
}

macro_rules! impl_binop {
    ($Trait:ident, $method:ident, $try_method:ident, $Checked:ident, $checked_method:ident) => {
        impl $Trait<&ModInt> for &ModInt {
            type Output = ModInt;

            fn $method(self, rhs: &ModInt) -> ModInt { expect_op(self.$try_method(rhs)) }
        }

        impl $Trait<ModInt> for ModInt {
            type Output = ModInt;

            fn $method(self, rhs: ModInt) -> ModInt { expect_op(self.$try_method(&rhs)) }
        }

        impl $Trait<&ModInt> for ModInt {
            type Output = ModInt;

            fn $method(self, rhs: &ModInt) -> ModInt { expect_op(self.$try_method(rhs)) }
        }

        impl $Trait<ModInt> for &ModInt {
            type Output = ModInt;

            fn $method(self, rhs: ModInt) -> ModInt { expect_op(self.$try_method(&rhs)) }
        }

        impl $Checked for ModInt {
            fn $checked_method(&self, v: &ModInt) -> Option<ModInt> { self.$try_method(v).ok() }
        }
    };
}

impl_binop!(Add, add, try_add, CheckedAdd, checked_add);
impl_binop!(Sub, sub, try_sub, CheckedSub, checked_sub);
impl_binop!(Mul, mul, try_mul, CheckedMul, checked_mul);
impl_binop!(Div, div, try_div, CheckedDiv, checked_div);
impl_binop!(Rem, rem, try_rem, CheckedRem, checked_rem);

impl Neg for ModInt {
    type Output = ModInt;

    fn neg(self) -> ModInt { self.negate() }
}

impl Neg for &ModInt {
    type Output = ModInt;

    fn neg(self) -> ModInt { self.negate() }
}

#[cfg(test)]
mod test {
    use crate::fp256impl::Fp256Impl;
    use crate::modint::ModInt;
    use crate::{bn254, secp256k1};
    use num_bigint::{BigUint, RandomBits};
    use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random(prng: &mut ChaCha20Rng) -> ModInt {
        let a: BigUint = prng.sample(RandomBits::new(256));
        bn254::Fr::from_le_bytes(&a.to_bytes_le())
    }

    #[test]
    fn test_operators_match_methods() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..50 {
            let a = random(&mut prng);
            let b = random(&mut prng);
            if b.is_zero() {
                continue;
            }

            assert_eq!(&a + &b, a.try_add(&b).unwrap());
            assert_eq!(&a - &b, a.try_sub(&b).unwrap());
            assert_eq!(&a * &b, a.try_mul(&b).unwrap());
            assert_eq!(&a / &b, a.try_div(&b).unwrap());
            assert_eq!(&a % &b, a.try_rem(&b).unwrap());

            // every ownership combination agrees
            assert_eq!(a.clone() + b.clone(), &a + &b);
            assert_eq!(a.clone() - &b, &a - &b);
            assert_eq!(&a * b.clone(), &a * &b);
            assert_eq!(-&a, a.negate());
        }
    }

    #[test]
    fn test_checked() {
        let a = bn254::Fr::from_u64(9);
        let b = bn254::Fr::from_u64(4);
        let zero = bn254::Fr::zero();
        let other = secp256k1::Fq::from_u64(4);

        assert_eq!(a.checked_add(&b), Some(bn254::Fr::from_u64(13)));
        assert_eq!(a.checked_sub(&b), Some(bn254::Fr::from_u64(5)));
        assert_eq!(a.checked_mul(&b), Some(bn254::Fr::from_u64(36)));
        assert_eq!(a.checked_div(&b), Some(bn254::Fr::from_u64(2)));
        assert_eq!(a.checked_rem(&b), Some(bn254::Fr::from_u64(1)));

        assert_eq!(a.checked_div(&zero), None);
        assert_eq!(a.checked_rem(&zero), None);
        assert_eq!(a.checked_add(&other), None);
        assert_eq!(a.checked_mul(&other), None);
    }

    #[test]
    #[should_panic(expected = "modulus mismatch")]
    fn test_add_mismatch_panics() {
        let _ = bn254::Fr::from_u64(1) + secp256k1::Fq::from_u64(1);
    }

    #[test]
    #[should_panic(expected = "modulus mismatch")]
    fn test_rem_mismatch_panics() {
        let _ = bn254::Fq::from_u64(1) % bn254::Fr::from_u64(1);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_by_zero_panics() {
        let _ = secp256k1::Fr::one() / secp256k1::Fr::zero();
    }
}
