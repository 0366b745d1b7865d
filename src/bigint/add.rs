use crate::bigint::UBigInt;

impl UBigInt {
    /// Compute the sum of two UBigInts
    pub fn add(&self, other: &Self) -> Self {
        let (long, short) = if self.limbs.len() >= other.limbs.len() {
            (&self.limbs, &other.limbs)
        } else {
            (&other.limbs, &self.limbs)
        };

        let mut limbs = Vec::with_capacity(long.len() + 1);
        let mut carry = 0;

        // A0 + B0 .. A{N-1} + B{N-1}, with B zero-extended
        for (i, a) in long.iter().enumerate() {
            let b = short.get(i).copied().unwrap_or(0);
            let (sum, c) = limb_add_carry(*a, b, carry);
            limbs.push(sum);
            carry = c;
        }
        limbs.push(carry);

        Self::from_limbs(limbs)
    }
}

/// Compute the sum of two limbs and an incoming carry, returning the low limb
/// and the outgoing carry bit
pub(crate) fn limb_add_carry(a: u32, b: u32, carry: u32) -> (u32, u32) {
    let t = a as u64 + b as u64 + carry as u64;
    (t as u32, (t >> 32) as u32)
}
