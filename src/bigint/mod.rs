mod add;
mod bits;
mod cmp;
mod div;
mod mul;
mod std;
mod sub;

/// Unsigned arbitrary-precision integer.
///
/// Limbs are 32 bits wide and stored least significant first. The vector never
/// carries zero limbs at the top, so two equal values always have equal limbs
/// and the derived `Eq`/`Hash` are sound.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UBigInt {
    limbs: Vec<u32>,
}

impl UBigInt {
    pub const LIMB_SIZE: u32 = 32;

    pub fn zero() -> Self { Self { limbs: vec![] } }

    pub fn one() -> Self { Self { limbs: vec![1] } }

    /// Build from little-endian limbs. Trailing zero limbs are dropped.
    pub fn from_limbs(limbs: Vec<u32>) -> Self {
        let mut n = Self { limbs };
        n.normalize();
        n
    }

    pub fn limbs(&self) -> &[u32] { &self.limbs }

    pub fn is_zero(&self) -> bool { self.limbs.is_empty() }

    pub(crate) fn normalize(&mut self) {
        while let Some(&0) = self.limbs.last() {
            self.limbs.pop();
        }
    }
}

impl From<u64> for UBigInt {
    fn from(v: u64) -> Self { Self::from_limbs(vec![v as u32, (v >> 32) as u32]) }
}

impl From<u32> for UBigInt {
    fn from(v: u32) -> Self { Self::from_limbs(vec![v]) }
}

#[cfg(test)]
mod test {
    use super::UBigInt;

    #[test]
    fn test_normalize() {
        let a = UBigInt::from_limbs(vec![7, 0, 0, 0]);
        assert_eq!(a.limbs(), &[7]);
        assert_eq!(a, UBigInt::from(7u32));

        let z = UBigInt::from_limbs(vec![0, 0]);
        assert!(z.is_zero());
        assert_eq!(z, UBigInt::zero());
        assert!(z.limbs().is_empty());
    }

    #[test]
    fn test_from_u64() {
        let a = UBigInt::from(0x1_0000_0002u64);
        assert_eq!(a.limbs(), &[2, 1]);
        assert_eq!(UBigInt::from(0u64), UBigInt::zero());
        assert_eq!(UBigInt::from(1u64), UBigInt::one());
    }
}
