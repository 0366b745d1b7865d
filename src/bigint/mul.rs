use crate::bigint::UBigInt;

impl UBigInt {
    /// Schoolbook product. The result is `self.limbs().len() + other.limbs().len()`
    /// limbs wide before normalization, so nothing is truncated.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.limbs.len();
        let m = other.limbs.len();
        let mut wide = vec![0u32; n + m];

        for (i, a) in self.limbs.iter().enumerate() {
            let mut carry = 0;
            for (j, b) in other.limbs.iter().enumerate() {
                let (lo, hi) = limb_mul_carry(*a, *b, wide[i + j], carry);
                wide[i + j] = lo;
                carry = hi;
            }
            wide[i + m] = carry;
        }

        Self::from_limbs(wide)
    }

    pub fn square(&self) -> Self { self.mul(self) }
}

/// Multiply-accumulate on limbs: `a * b + acc + carry`, returning the low limb
/// and the high limb. Cannot overflow 64 bits.
pub(crate) fn limb_mul_carry(a: u32, b: u32, acc: u32, carry: u32) -> (u32, u32) {
    let t = a as u64 * b as u64 + acc as u64 + carry as u64;
    (t as u32, (t >> 32) as u32)
}
