use crate::bigint::UBigInt;

impl UBigInt {
    /// Number of significant bits; zero for zero.
    pub fn bits(&self) -> u64 {
        match self.limbs.last() {
            None => 0,
            Some(top) => {
                (self.limbs.len() as u64 - 1) * Self::LIMB_SIZE as u64
                    + (Self::LIMB_SIZE - top.leading_zeros()) as u64
            }
        }
    }

    pub fn bit(&self, i: u64) -> bool {
        let limb = (i / Self::LIMB_SIZE as u64) as usize;
        match self.limbs.get(limb) {
            None => false,
            Some(l) => (l >> (i % Self::LIMB_SIZE as u64)) & 1 == 1,
        }
    }

    pub(crate) fn set_bit(&mut self, i: u64) {
        let limb = (i / Self::LIMB_SIZE as u64) as usize;
        if limb >= self.limbs.len() {
            self.limbs.resize(limb + 1, 0);
        }
        self.limbs[limb] |= 1 << (i % Self::LIMB_SIZE as u64);
    }

    /// `self = 2 * self + bit`
    pub(crate) fn shl1_with_bit(&mut self, bit: bool) {
        let mut carry = bit as u32;
        for limb in self.limbs.iter_mut() {
            let top = *limb >> (Self::LIMB_SIZE - 1);
            *limb = (*limb << 1) | carry;
            carry = top;
        }
        if carry != 0 {
            self.limbs.push(carry);
        }
    }

    /// Iterate bits from most to least significant.
    pub fn to_be_bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bits()).rev().map(move |i| self.bit(i))
    }
}
