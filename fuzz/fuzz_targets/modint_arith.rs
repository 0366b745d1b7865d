#![no_main]

use arbitrary::{Arbitrary, Result, Unstructured};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use strum::IntoEnumIterator;

use bitvm_modint::{register, ModInt, ModIntError, ModulusName};

#[derive(Debug)]
pub struct ModIntConfig {
    pub modulus: ModulusName,
    // up to double width, so reduction on construction is exercised too
    pub a: Vec<u8>,
    pub b: Vec<u8>,
}

impl<'a> Arbitrary<'a> for ModIntConfig {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let names: Vec<ModulusName> = ModulusName::iter().collect();
        let modulus = *u.choose(&names)?;
        let len_a = u.int_in_range(0..=64)?;
        let a = u.bytes(len_a)?.to_vec();
        let len_b = u.int_in_range(0..=64)?;
        let b = u.bytes(len_b)?.to_vec();
        Ok(ModIntConfig { modulus, a, b })
    }
}

fuzz_target!(|config: ModIntConfig| {
    let m = register(config.modulus);
    let mb = BigUint::from(m.value());
    let a_big = BigUint::from_bytes_le(&config.a) % &mb;
    let b_big = BigUint::from_bytes_le(&config.b) % &mb;

    let a = ModInt::from_le_bytes(&config.a, m);
    let b = ModInt::from_le_bytes(&config.b, m);
    assert_eq!(BigUint::from(a.value()), a_big);
    assert_eq!(a.to_le_bytes().len(), m.byte_len());

    assert_eq!(BigUint::from((&a + &b).value()), (&a_big + &b_big) % &mb);
    assert_eq!(BigUint::from((&a - &b).value()), (&a_big + &mb - &b_big) % &mb);
    assert_eq!(BigUint::from((&a * &b).value()), (&a_big * &b_big) % &mb);

    if b.is_zero() {
        assert_eq!(a.try_div(&b), Err(ModIntError::DivisionByZero));
        assert_eq!(a.try_rem(&b), Err(ModIntError::DivisionByZero));
    } else {
        assert_eq!(BigUint::from((&a / &b).value()), &a_big / &b_big);
        assert_eq!(BigUint::from((&a % &b).value()), &a_big % &b_big);
    }
});
