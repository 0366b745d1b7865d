use crate::bigint::UBigInt;

impl UBigInt {
    /// Long division. Returns `(floor(self / divisor), self mod divisor)`, or
    /// `None` when the divisor is zero.
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }
        if self < divisor {
            return Some((Self::zero(), self.clone()));
        }
        if divisor.limbs.len() == 1 {
            let (q, r) = self.div_rem_limb(divisor.limbs[0]);
            return Some((q, Self::from(r)));
        }

        // Shift-subtract, most significant bit first. The remainder stays
        // below 2 * divisor, so it never needs more than one extra limb.
        let mut quotient = Self::zero();
        let mut remainder = Self { limbs: Vec::with_capacity(divisor.limbs.len() + 1) };
        for i in (0..self.bits()).rev() {
            remainder.shl1_with_bit(self.bit(i));
            if remainder >= *divisor {
                remainder.sub_assign_unchecked(divisor);
                quotient.set_bit(i);
            }
        }

        Some((quotient, remainder))
    }

    /// Short division by a single nonzero limb.
    fn div_rem_limb(&self, d: u32) -> (Self, u32) {
        let d = d as u64;
        let mut limbs = vec![0u32; self.limbs.len()];
        let mut r = 0u64;
        for (i, limb) in self.limbs.iter().enumerate().rev() {
            let t = (r << Self::LIMB_SIZE) | *limb as u64;
            limbs[i] = (t / d) as u32;
            r = t % d;
        }
        (Self::from_limbs(limbs), r as u32)
    }

    /// `self mod m`, or `None` when `m` is zero.
    pub fn rem(&self, m: &Self) -> Option<Self> {
        if m.is_zero() {
            return None;
        }
        if self < m {
            return Some(self.clone());
        }
        self.div_rem(m).map(|(_, r)| r)
    }
}
