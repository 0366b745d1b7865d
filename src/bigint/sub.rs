use crate::bigint::UBigInt;

impl UBigInt {
    /// Compute the difference of two UBigInts, or `None` if `other > self`
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if other.limbs.len() > self.limbs.len() {
            return None;
        }

        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow = 0;

        // A0 - B0 .. A{N-1} - (B{N-1} + borrow_{N-2})
        for (i, a) in self.limbs.iter().enumerate() {
            let b = other.limbs.get(i).copied().unwrap_or(0);
            let (diff, br) = limb_sub_borrow(*a, b, borrow);
            limbs.push(diff);
            borrow = br;
        }

        if borrow != 0 {
            return None;
        }
        Some(Self::from_limbs(limbs))
    }

    /// Subtract `other` in place. Caller guarantees `other <= self`.
    pub(crate) fn sub_assign_unchecked(&mut self, other: &Self) {
        let mut borrow = 0;
        for (i, a) in self.limbs.iter_mut().enumerate() {
            if i >= other.limbs.len() && borrow == 0 {
                break;
            }
            let b = other.limbs.get(i).copied().unwrap_or(0);
            let (diff, br) = limb_sub_borrow(*a, b, borrow);
            *a = diff;
            borrow = br;
        }
        debug_assert_eq!(borrow, 0);
        self.normalize();
    }
}

/// Compute the difference of two limbs minus an incoming borrow, returning the
/// low limb and the outgoing borrow bit
pub(crate) fn limb_sub_borrow(a: u32, b: u32, borrow: u32) -> (u32, u32) {
    let t = (a as u64).wrapping_sub(b as u64).wrapping_sub(borrow as u64);
    (t as u32, (t >> 63) as u32)
}
